//! Error handling for the Kite lexer
//!
//! Unrecognized input is not an error: it is reported in-band as an
//! `Unrecognized` token. Only failures that stop the scan live here.

use thiserror::Error;

/// Result type alias for Kite operations
pub type KiteResult<T> = Result<T, KiteError>;

/// Main error type for the Kite lexer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KiteError {
    /// A string literal reached end of input before its closing quote
    #[error("Lexer Error: unterminated string literal starting at offset {offset}")]
    UnterminatedString {
        /// Character index of the opening `"`
        offset: usize,
    },
}

impl KiteError {
    /// Create an unterminated string error for a literal opened at `offset`
    pub fn unterminated_string(offset: usize) -> Self {
        Self::UnterminatedString { offset }
    }

    /// Get the error kind as a string
    pub fn kind(&self) -> &str {
        match self {
            Self::UnterminatedString { .. } => "Lexer Error",
        }
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        match self {
            Self::UnterminatedString { .. } => "unterminated string literal",
        }
    }

    /// Character offset in the source at which the failure began
    pub fn offset(&self) -> usize {
        match self {
            Self::UnterminatedString { offset } => *offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = KiteError::unterminated_string(7);

        assert_eq!(err.kind(), "Lexer Error");
        assert_eq!(err.message(), "unterminated string literal");
        assert_eq!(err.offset(), 7);
    }

    #[test]
    fn test_error_display() {
        let err = KiteError::unterminated_string(3);

        assert_eq!(
            err.to_string(),
            "Lexer Error: unterminated string literal starting at offset 3"
        );
    }
}
