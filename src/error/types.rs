//! Custom error types with exit codes

use thiserror::Error;

/// Main error type for cfpatch operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PatchError {
    /// File Access Error - input missing or unreadable, output unwritable
    #[error("File access error: {message}")]
    FileAccess { message: String },

    /// Malformed Document Error - input is not valid JSON
    #[error("Malformed document: {message}")]
    MalformedDocument { message: String },

    /// Schema Error - an expected key is missing or has the wrong type
    #[error("Schema error: {message}")]
    Schema { message: String },
}

impl PatchError {
    /// Get the appropriate exit code for this error type
    ///
    /// Codes 1 and 2 are left to untyped failures and clap usage errors.
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::FileAccess { .. } => 3,
            Self::MalformedDocument { .. } => 4,
            Self::Schema { .. } => 5,
        }
    }

    /// Create a file access error
    #[inline]
    pub fn file_access<S: Into<String>>(message: S) -> Self {
        Self::FileAccess {
            message: message.into(),
        }
    }

    /// Create a malformed document error
    #[inline]
    pub fn malformed<S: Into<String>>(message: S) -> Self {
        Self::MalformedDocument {
            message: message.into(),
        }
    }

    /// Create a schema error
    #[inline]
    pub fn schema<S: Into<String>>(message: S) -> Self {
        Self::Schema {
            message: message.into(),
        }
    }
}
