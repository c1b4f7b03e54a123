//! Crate-wide error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("length {value} is outside {min}-{max}")]
    LengthOutOfRange { value: usize, min: usize, max: usize },

    #[error("length {length} is too small for the requested options (needs at least {required})")]
    LengthTooSmall { length: usize, required: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings error: {0}")]
    Settings(#[from] serde_json::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Input the user can fix from the form, as opposed to a system failure.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::NotANumber(_) | Error::LengthOutOfRange { .. } | Error::LengthTooSmall { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_are_flagged() {
        assert!(Error::NotANumber("abc".into()).is_validation());
        assert!(
            Error::LengthOutOfRange {
                value: 30,
                min: 8,
                max: 20
            }
            .is_validation()
        );
        assert!(!Error::Clipboard("no display".into()).is_validation());
    }

    #[test]
    fn test_length_too_small_message() {
        let err = Error::LengthTooSmall {
            length: 2,
            required: 4,
        };
        assert_eq!(
            err.to_string(),
            "length 2 is too small for the requested options (needs at least 4)"
        );
    }
}
