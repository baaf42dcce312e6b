//! Error types for the Crisp front end
//!
//! Tokenizing never fails; every variant here comes from the host side of the
//! program (reading input, writing output, rendering).

use thiserror::Error;

/// Crisp front-end errors
#[derive(Error, Debug)]
pub enum Error {
    /// Reading a line or writing an echo failed
    ///
    /// **Triggered by:** closed stdout, unreadable input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Rendering a token stream as JSON failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A user-supplied option could not be understood
    #[error("Invalid argument {name}: {reason}")]
    InvalidArgument {
        /// Option name
        name: String,
        /// Why the value was rejected
        reason: String,
    },
}

impl Error {
    /// Create an invalid-argument error
    pub fn invalid_argument(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// True when the error came from the underlying reader or writer
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Io(_))
    }
}

/// Result type for Crisp operations
pub type Result<T> = std::result::Result<T, Error>;
