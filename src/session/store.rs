//! Session objects and their owning collection.

use chrono::{DateTime, Local};

use crate::checker::{check_trainings, extract_name, format_label, CheckReport};

use super::id::SessionId;

/// One tab's isolated state: a text buffer and the last check result.
#[derive(Debug, Clone)]
pub struct Session {
    id: SessionId,
    text: String,
    last_report: Option<CheckReport>,
    created_at: DateTime<Local>,
}

impl Session {
    fn new(id: SessionId) -> Self {
        Self {
            id,
            text: String::new(),
            last_report: None,
            created_at: Local::now(),
        }
    }

    /// The tab's identity.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// The current text buffer.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text buffer. Does not re-run the check; the last report
    /// keeps describing the text it was computed from until the next
    /// [`check`](Self::check).
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// When the tab was opened.
    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }

    /// Run the checker over the current buffer and store the result.
    pub fn check<S: AsRef<str>>(&mut self, required: &[S]) -> &CheckReport {
        let report = check_trainings(&self.text, required);
        tracing::debug!(
            tab = self.id.number(),
            satisfied = report.satisfied_count(),
            total = report.len(),
            "checked tab"
        );
        self.last_report.insert(report)
    }

    /// The most recent check result, if any.
    pub fn last_report(&self) -> Option<&CheckReport> {
        self.last_report.as_ref()
    }

    /// Best-effort name extracted from the current buffer.
    pub fn name(&self) -> Option<String> {
        extract_name(&self.text)
    }

    /// Display label for the tab: the plain tab number before any check,
    /// the composite status + name label afterwards.
    pub fn label(&self) -> String {
        match &self.last_report {
            Some(report) => format_label(self.name().as_deref(), report.all_satisfied()),
            None => self.id.to_string(),
        }
    }
}

/// Ordered collection of open tabs.
///
/// Owned by the interactive controller; tab numbers grow monotonically and
/// are never reused, so labels stay stable as tabs come and go.
#[derive(Debug, Default)]
pub struct SessionManager {
    sessions: Vec<Session>,
    next_number: usize,
}

impl SessionManager {
    /// Create an empty manager.
    pub fn new() -> Self {
        Self {
            sessions: Vec::new(),
            next_number: 1,
        }
    }

    /// Open a new tab and return its id.
    pub fn create(&mut self) -> SessionId {
        let id = SessionId::new(self.next_number);
        self.next_number += 1;
        self.sessions.push(Session::new(id));
        id
    }

    /// Number of open tabs.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// True when no tabs are open.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Tab at the given position (display order).
    pub fn get(&self, index: usize) -> Option<&Session> {
        self.sessions.get(index)
    }

    /// Mutable tab at the given position.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Session> {
        self.sessions.get_mut(index)
    }

    /// Iterate tabs in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Session> {
        self.sessions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::REQUIRED_TRAININGS;

    #[test]
    fn new_session_has_no_report_and_numeric_label() {
        let mut manager = SessionManager::new();
        let id = manager.create();
        let session = manager.get(0).unwrap();

        assert_eq!(session.id(), id);
        assert!(session.last_report().is_none());
        assert_eq!(session.label(), "Tab 1");
    }

    #[test]
    fn tab_numbers_increase_monotonically() {
        let mut manager = SessionManager::new();
        assert_eq!(manager.create().number(), 1);
        assert_eq!(manager.create().number(), 2);
        assert_eq!(manager.create().number(), 3);
        assert_eq!(manager.len(), 3);
    }

    #[test]
    fn check_stores_report() {
        let mut manager = SessionManager::new();
        manager.create();
        let session = manager.get_mut(0).unwrap();

        session.set_text("Ladder Safety Online - Current");
        let report = session.check(&REQUIRED_TRAININGS);
        assert_eq!(report.get("Ladder Safety Online"), Some(true));
        assert!(session.last_report().is_some());
    }

    #[test]
    fn label_reflects_check_outcome_and_name() {
        let mut manager = SessionManager::new();
        manager.create();
        let session = manager.get_mut(0).unwrap();

        let all_current: String = REQUIRED_TRAININGS
            .iter()
            .map(|t| format!("{} - Current\n", t))
            .collect();
        session.set_text(format!("Safety Training Report\nJane Q Public\n{}", all_current));
        session.check(&REQUIRED_TRAININGS);

        assert_eq!(session.label(), "🟢 J. Public");
    }

    #[test]
    fn label_shows_missing_dot_when_trainings_absent() {
        let mut manager = SessionManager::new();
        manager.create();
        let session = manager.get_mut(0).unwrap();

        session.set_text("Safety Training Report\nJane Q Public\nnothing current here");
        session.check(&REQUIRED_TRAININGS);

        assert_eq!(session.label(), "🔴 J. Public");
    }

    #[test]
    fn label_falls_back_without_name() {
        let mut manager = SessionManager::new();
        manager.create();
        let session = manager.get_mut(0).unwrap();

        session.set_text("");
        session.check(&REQUIRED_TRAININGS);

        assert_eq!(session.label(), "🔴 Tab");
    }

    #[test]
    fn sessions_are_isolated() {
        let mut manager = SessionManager::new();
        manager.create();
        manager.create();

        manager
            .get_mut(0)
            .unwrap()
            .set_text("Ladder Safety Online - Current");
        manager.get_mut(0).unwrap().check(&REQUIRED_TRAININGS);

        let untouched = manager.get(1).unwrap();
        assert!(untouched.text().is_empty());
        assert!(untouched.last_report().is_none());
    }

    #[test]
    fn set_text_does_not_rerun_check() {
        let mut manager = SessionManager::new();
        manager.create();
        let session = manager.get_mut(0).unwrap();

        session.set_text("Ladder Safety Online - Current");
        session.check(&["Ladder Safety Online"]);
        session.set_text("nothing here");

        // Last report still describes the previous buffer.
        assert_eq!(
            session.last_report().unwrap().get("Ladder Safety Online"),
            Some(true)
        );
    }
}
