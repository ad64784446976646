//! Error types for the trace engine
//!
//! Nothing here crosses the public push/trace surface: every public
//! operation is best-effort by contract, and a sink failure must never take
//! the host application down with it. These errors travel from a handler to
//! the delivery worker, which reports them on stderr.

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File sink error with path
    #[error("file sink error for '{path}': {message}")]
    FileSink { path: String, message: String },

    /// Day-boundary rotation error
    #[error("rotation failed for '{path}': {message}")]
    Rotation { path: String, message: String },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create a file sink error
    pub fn file_sink(path: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::FileSink {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a rotation error
    pub fn rotation(path: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::Rotation {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::file_sink("/var/log/app.log", "permission denied");
        assert!(matches!(err, LoggerError::FileSink { .. }));

        let err = LoggerError::rotation("/var/log/app.log", "disk full");
        assert!(matches!(err, LoggerError::Rotation { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::file_sink("/var/log/app.log", "permission denied");
        assert_eq!(
            err.to_string(),
            "file sink error for '/var/log/app.log': permission denied"
        );

        let err = LoggerError::rotation("/var/log/app.log", "disk full");
        assert_eq!(
            err.to_string(),
            "rotation failed for '/var/log/app.log': disk full"
        );
    }
}
