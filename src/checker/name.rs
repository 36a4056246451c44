//! Best-effort person-name extraction from pasted report text.

/// Header line marker the report pages put above the person's name.
pub const REPORT_HEADER: &str = "Safety Training Report";

/// Extract the report owner's name, if the text allows a guess.
///
/// Lines are trimmed before inspection. The preferred pattern is a header
/// line containing [`REPORT_HEADER`] followed by the name on the next
/// non-empty line. When the header exists but nothing follows it, the
/// search deliberately falls through to the fallback rather than giving up.
///
/// Fallback: the first non-empty line wins; if that line itself contains
/// the header text, the remainder after the header is used when non-empty,
/// otherwise the line is skipped entirely.
///
/// `None` is a normal outcome, not an error.
pub fn extract_name(text: &str) -> Option<String> {
    let lines: Vec<&str> = text.lines().map(str::trim).collect();

    // Preferred: header line, then the first non-empty follower.
    if let Some(idx) = lines.iter().position(|line| line.contains(REPORT_HEADER)) {
        if let Some(follower) = lines[idx + 1..].iter().find(|line| !line.is_empty()) {
            return Some((*follower).to_string());
        }
    }

    // Fallback: first non-empty line, minus the header prefix if present.
    for line in &lines {
        if line.is_empty() {
            continue;
        }
        if let Some((_, rest)) = line.split_once(REPORT_HEADER) {
            let remainder = rest.trim();
            if !remainder.is_empty() {
                return Some(remainder.to_string());
            }
            continue;
        }
        return Some((*line).to_string());
    }

    None
}
