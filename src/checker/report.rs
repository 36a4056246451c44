//! Check results.
//!
//! A [`CheckReport`] holds one entry per required training, in the same
//! order as the required list it was produced from. Reports are created by
//! [`check_trainings`](super::check_trainings), never mutated afterwards.

use serde::Serialize;

/// Outcome for a single required training.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckEntry {
    /// The training name, exactly as it appears in the required list.
    pub training: String,
    /// Whether a report line contained both the name and the current marker.
    pub satisfied: bool,
}

/// Ordered per-training results for one check of one report text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CheckReport {
    entries: Vec<CheckEntry>,
}

impl CheckReport {
    pub(crate) fn new(entries: Vec<CheckEntry>) -> Self {
        Self { entries }
    }

    /// Number of required trainings covered by this report.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the report covers no trainings (empty required list).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in required-list order.
    pub fn iter(&self) -> impl Iterator<Item = &CheckEntry> {
        self.entries.iter()
    }

    /// Look up a single training's outcome by exact name.
    pub fn get(&self, training: &str) -> Option<bool> {
        self.entries
            .iter()
            .find(|e| e.training == training)
            .map(|e| e.satisfied)
    }

    /// True when every required training was found current.
    ///
    /// An empty report is never "all satisfied"; the composite label must
    /// not show green when nothing was checked.
    pub fn all_satisfied(&self) -> bool {
        !self.entries.is_empty() && self.entries.iter().all(|e| e.satisfied)
    }

    /// Training names that were not found current, in required-list order.
    pub fn missing(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|e| !e.satisfied)
            .map(|e| e.training.as_str())
    }

    /// Count of satisfied trainings.
    pub fn satisfied_count(&self) -> usize {
        self.entries.iter().filter(|e| e.satisfied).count()
    }
}

impl<'a> IntoIterator for &'a CheckReport {
    type Item = &'a CheckEntry;
    type IntoIter = std::slice::Iter<'a, CheckEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(pairs: &[(&str, bool)]) -> CheckReport {
        CheckReport::new(
            pairs
                .iter()
                .map(|(name, satisfied)| CheckEntry {
                    training: name.to_string(),
                    satisfied: *satisfied,
                })
                .collect(),
        )
    }

    #[test]
    fn empty_report_is_not_all_satisfied() {
        let r = CheckReport::default();
        assert!(r.is_empty());
        assert!(!r.all_satisfied());
    }

    #[test]
    fn all_satisfied_requires_every_entry() {
        let r = report(&[("A", true), ("B", false)]);
        assert!(!r.all_satisfied());

        let r = report(&[("A", true), ("B", true)]);
        assert!(r.all_satisfied());
    }

    #[test]
    fn missing_preserves_order() {
        let r = report(&[("A", false), ("B", true), ("C", false)]);
        let missing: Vec<&str> = r.missing().collect();
        assert_eq!(missing, vec!["A", "C"]);
    }

    #[test]
    fn get_finds_entry_by_exact_name() {
        let r = report(&[("Ladder Safety Online", true)]);
        assert_eq!(r.get("Ladder Safety Online"), Some(true));
        assert_eq!(r.get("Ladder Safety"), None);
    }

    #[test]
    fn satisfied_count_counts_true_entries() {
        let r = report(&[("A", true), ("B", false), ("C", true)]);
        assert_eq!(r.satisfied_count(), 2);
        assert_eq!(r.len(), 3);
    }

    #[test]
    fn serializes_as_entry_array() {
        let r = report(&[("A", true)]);
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#"[{"training":"A","satisfied":true}]"#);
    }

    #[test]
    fn into_iterator_yields_entries_in_order() {
        let r = report(&[("A", true), ("B", false)]);
        let names: Vec<&str> = (&r).into_iter().map(|e| e.training.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }
}
