//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. Commands are
//! routed by [`CommandDispatcher`].

pub mod check;
pub mod completions;
pub mod dispatcher;
pub mod display;
pub mod interactive;
pub mod list;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};

use std::path::Path;

use crate::checker::{load_required_list, REQUIRED_TRAININGS};
use crate::error::Result;

/// Resolve the required-training list: an override file when given,
/// otherwise the built-in constant.
pub(crate) fn resolve_required(requirements: Option<&Path>) -> Result<Vec<String>> {
    match requirements {
        Some(path) => load_required_list(path),
        None => Ok(REQUIRED_TRAININGS.iter().map(|s| s.to_string()).collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn resolve_required_defaults_to_builtin() {
        let list = resolve_required(None).unwrap();
        assert_eq!(list.len(), 9);
        assert_eq!(list[0], REQUIRED_TRAININGS[0]);
    }

    #[test]
    fn resolve_required_reads_override() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("req.txt");
        fs::write(&path, "Only Training\n").unwrap();

        let list = resolve_required(Some(&path)).unwrap();
        assert_eq!(list, vec!["Only Training"]);
    }

    #[test]
    fn resolve_required_propagates_missing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("absent.txt");
        assert!(resolve_required(Some(&path)).is_err());
    }
}
