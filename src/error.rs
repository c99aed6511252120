//! Error type shared by validation, generation and the file store.
//!
//! The `Display` text of each variant is what the form shows the user.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PassError {
    #[error("Please enter valid numeric values ({field}: {value:?})")]
    InvalidInput { field: &'static str, value: String },

    #[error("Values cannot be negative ({field}: {value})")]
    NegativeValue { field: &'static str, value: i64 },

    #[error("The sum of components ({requested}) exceeds the total length ({length})")]
    CompositionExceedsLength { requested: u128, length: u64 },

    #[error("The minimum length is {min} characters (got {length})")]
    LengthTooShort { length: u64, min: u64 },

    #[error("The maximum length is {max} characters (got {length})")]
    LengthTooLong { length: u64, max: u64 },

    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Could not {action} {}: {source}", path.display())]
    FileError {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("There is currently no generated password")]
    NoPassword,

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

pub type Result<T> = std::result::Result<T, PassError>;

impl PassError {
    /// Validation errors and the empty-session case are the user's to fix;
    /// everything else is an environment failure.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            PassError::InvalidInput { .. }
                | PassError::NegativeValue { .. }
                | PassError::CompositionExceedsLength { .. }
                | PassError::LengthTooShort { .. }
                | PassError::LengthTooLong { .. }
                | PassError::NoPassword
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_values() {
        let e = PassError::CompositionExceedsLength {
            requested: 6,
            length: 5,
        };
        assert_eq!(
            e.to_string(),
            "The sum of components (6) exceeds the total length (5)"
        );

        let e = PassError::InvalidInput {
            field: "length",
            value: "abc".into(),
        };
        assert_eq!(
            e.to_string(),
            "Please enter valid numeric values (length: \"abc\")"
        );
    }

    #[test]
    fn file_error_carries_io_source() {
        use std::error::Error;

        let e = PassError::FileError {
            action: "write",
            path: PathBuf::from("missing/passwords.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such directory"),
        };
        assert!(e.to_string().starts_with("Could not write missing/passwords.txt"));
        assert!(e.source().is_some());
        assert!(!e.is_user_error());
        assert!(PassError::NoPassword.is_user_error());
    }
}
