use std::path::PathBuf;

/// Result type for split operations
pub type Result<T> = std::result::Result<T, SplitError>;

/// Errors that abort a split run.
///
/// Argument errors are raised before any file-system access. Everything else
/// is an I/O failure that stops the run where it happened; files copied up
/// to that point stay in place.
#[derive(Debug, thiserror::Error)]
pub enum SplitError {
    #[error("divide value must be an integer between 1 and 99, got {0}")]
    InvalidPercentage(i64),
    #[error("reduction factor must be between 0.001 and 1.0, got {0}")]
    InvalidReductionFactor(f64),
    #[error("failed to read directory {path:?}: {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to create directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to copy {from:?} to {to:?}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write report {path:?}: {source}")]
    WriteReport {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to serialize report: {0}")]
    SerializeReport(#[from] serde_json::Error),
}

impl SplitError {
    /// True for errors caused by bad arguments rather than the file system
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            SplitError::InvalidPercentage(_) | SplitError::InvalidReductionFactor(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_errors_are_classified() {
        assert!(SplitError::InvalidPercentage(0).is_invalid_argument());
        assert!(SplitError::InvalidReductionFactor(2.0).is_invalid_argument());

        let io = SplitError::CreateDir {
            path: PathBuf::from("out"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(!io.is_invalid_argument());
    }

    #[test]
    fn test_error_messages_name_the_value() {
        let msg = SplitError::InvalidPercentage(100).to_string();
        assert!(msg.contains("1 and 99"));
        assert!(msg.contains("100"));
    }
}
