//! Compact tab-label formatting.

/// Indicator shown when every required training is current.
pub const SATISFIED_DOT: &str = "🟢";
/// Indicator shown when at least one required training is missing.
pub const MISSING_DOT: &str = "🔴";
/// Generic label used when no name could be extracted.
pub const PLACEHOLDER_LABEL: &str = "Tab";

/// Build the short composite label for a checked report.
///
/// The label is a status dot followed by a compact name form: for two or
/// more whitespace-separated tokens, the first token's initial plus the
/// last token ("Jane Q Public" becomes "J. Public"); a single token is
/// used verbatim. A missing or blank name falls back to a placeholder.
pub fn format_label(name: Option<&str>, all_satisfied: bool) -> String {
    let dot = if all_satisfied {
        SATISFIED_DOT
    } else {
        MISSING_DOT
    };

    let parts: Vec<&str> = name.map(str::split_whitespace).into_iter().flatten().collect();

    match parts.as_slice() {
        [] => format!("{} {}", dot, PLACEHOLDER_LABEL),
        [only] => format!("{} {}", dot, only),
        [first, .., last] => match first.chars().next() {
            Some(initial) => format!("{} {}. {}", dot, initial, last),
            None => format!("{} {}", dot, last),
        },
    }
}
