//! Error types for traincheck operations.
//!
//! The core checker functions are total and never fail; errors only arise
//! at the CLI boundary (reading report files, loading a requirements list,
//! interactive prompts). "No match" and "no name found" are normal
//! outcomes, not errors.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for traincheck operations.
#[derive(Debug, Error)]
pub enum TraincheckError {
    /// Report file not found at the given path.
    #[error("Report not found: {path}")]
    ReportNotFound { path: PathBuf },

    /// Failed to read a report file.
    #[error("Failed to read report at {path}: {message}")]
    ReportRead { path: PathBuf, message: String },

    /// Requirements override file not found.
    #[error("Requirements list not found: {path}")]
    RequirementsNotFound { path: PathBuf },

    /// Failed to read a requirements override file.
    #[error("Failed to read requirements list at {path}: {message}")]
    RequirementsRead { path: PathBuf, message: String },

    /// Interactive prompt failed or was aborted.
    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for traincheck operations.
pub type Result<T> = std::result::Result<T, TraincheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_not_found_displays_path() {
        let err = TraincheckError::ReportNotFound {
            path: PathBuf::from("/tmp/report.txt"),
        };
        assert!(err.to_string().contains("/tmp/report.txt"));
    }

    #[test]
    fn report_read_displays_path_and_message() {
        let err = TraincheckError::ReportRead {
            path: PathBuf::from("/tmp/report.txt"),
            message: "permission denied".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/report.txt"));
        assert!(msg.contains("permission denied"));
    }

    #[test]
    fn requirements_not_found_displays_path() {
        let err = TraincheckError::RequirementsNotFound {
            path: PathBuf::from("/etc/required.txt"),
        };
        assert!(err.to_string().contains("/etc/required.txt"));
    }

    #[test]
    fn requirements_read_displays_path_and_message() {
        let err = TraincheckError::RequirementsRead {
            path: PathBuf::from("/etc/required.txt"),
            message: "is a directory".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/etc/required.txt"));
        assert!(msg.contains("is a directory"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: TraincheckError = io_err.into();
        assert!(matches!(err, TraincheckError::Io(_)));
    }

    #[test]
    fn anyhow_error_converts_transparently() {
        let err: TraincheckError = anyhow::anyhow!("unexpected").into();
        assert!(err.to_string().contains("unexpected"));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(TraincheckError::ReportNotFound {
                path: PathBuf::from("x"),
            })
        }
        assert!(returns_error().is_err());
    }
}
