//! The required training list.
//!
//! The built-in list is a fixed, ordered constant; order determines display
//! order everywhere a report is rendered. An alternative list can be loaded
//! from a plain-text file for sites with different requirements.

use std::fs;
use std::path::Path;

use crate::error::{Result, TraincheckError};

/// The nine trainings a report must show as "Current". Order matters for
/// display; matching itself is order-independent.
pub const REQUIRED_TRAININGS: [&str; 9] = [
    "Electrical Safety Awareness Online",
    "Fire Extinguisher Training Online",
    "Asbestos General Awareness Online",
    "Ladder Safety Online",
    "Lockout Tagout Awareness Online",
    "Confined Space Entry Awareness Online",
    "Lead Awareness Online",
    "Globally Harmonized System for Hazard Communication Online",
    "Managing Laboratory Chemicals Online",
];

/// Load a required-training list from a plain-text file.
///
/// One training name per line, surrounding whitespace trimmed, blank lines
/// skipped. Names are taken literally with no normalization, matching the
/// checker's exact-substring semantics.
pub fn load_required_list(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(TraincheckError::RequirementsNotFound {
            path: path.to_path_buf(),
        });
    }

    let contents = fs::read_to_string(path).map_err(|e| TraincheckError::RequirementsRead {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}
