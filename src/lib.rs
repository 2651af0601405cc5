//! # Kite Lexer
//!
//! Lexical scanner for Kite, a small imperative scripting language.
//!
//! ## Architecture
//!
//! - `lexer`: Tokenization of source code into a `Token` stream
//! - `error`: Error handling
//!
//! Parsing and evaluation of the token stream live outside this crate.

pub mod error;
pub mod lexer;

// Re-export commonly used types
pub use error::{KiteError, KiteResult};
pub use lexer::{dump, Keyword, Lexer, Token, TokenDump, TokenType};

/// Version of the Kite lexer
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tokenize a Kite program
///
/// # Arguments
///
/// * `source` - The full program source
///
/// # Returns
///
/// The token stream, always terminated by a single `EndOfInput` token, or a
/// `KiteError` if a string literal is never closed.
pub fn tokenize(source: &str) -> KiteResult<Vec<Token>> {
    Lexer::new(source).tokenize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_tokenize_entry_point() {
        let tokens = tokenize("x == 1").unwrap();
        let kinds: Vec<TokenType> = tokens.iter().map(|t| t.token_type).collect();

        assert_eq!(
            kinds,
            vec![
                TokenType::Identifier,
                TokenType::Equality,
                TokenType::Number,
                TokenType::EndOfInput,
            ]
        );
    }

    #[test]
    fn test_tokenize_error_entry_point() {
        let err = tokenize("echo \"oops").unwrap_err();
        assert_eq!(err.offset(), 5);
    }
}
