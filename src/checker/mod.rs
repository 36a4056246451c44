//! Core report-checking logic.
//!
//! This module is the heart of traincheck: a pure function that scans
//! pasted report text for required trainings marked "Current", plus two
//! best-effort text helpers (person-name extraction and compact label
//! formatting). Everything here is total over its input domain: absence
//! of a match is a normal outcome, never an error.

mod check;
mod label;
mod name;
mod report;
mod required;

pub use check::{check_trainings, CURRENT_MARKER};
pub use label::{format_label, MISSING_DOT, PLACEHOLDER_LABEL, SATISFIED_DOT};
pub use name::{extract_name, REPORT_HEADER};
pub use report::{CheckEntry, CheckReport};
pub use required::{load_required_list, REQUIRED_TRAININGS};
