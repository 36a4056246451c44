//! Training satisfaction checking.

use super::report::{CheckEntry, CheckReport};

/// Literal substring whose presence on a line marks the training on that
/// line as currently valid. Case-sensitive, no normalization.
pub const CURRENT_MARKER: &str = "Current";

/// Check which required trainings a report text shows as current.
///
/// A training is satisfied iff at least one line of `text` contains the
/// training's full name as a contiguous substring and also contains
/// [`CURRENT_MARKER`] anywhere on the same line. Matching is purely
/// lexical: no case folding, no whitespace collapsing.
///
/// The result has exactly one entry per item of `required`, in the same
/// order, defaulting to unsatisfied. Empty text and an empty required list
/// are both normal inputs.
pub fn check_trainings<S: AsRef<str>>(text: &str, required: &[S]) -> CheckReport {
    let lines: Vec<&str> = text.lines().collect();

    let entries = required
        .iter()
        .map(|item| {
            let training = item.as_ref();
            // `any` short-circuits on the first satisfying line; the
            // predicate is monotonic per item, so this only affects speed.
            let satisfied = lines
                .iter()
                .any(|line| line.contains(training) && line.contains(CURRENT_MARKER));
            CheckEntry {
                training: training.to_string(),
                satisfied,
            }
        })
        .collect();

    CheckReport::new(entries)
}
