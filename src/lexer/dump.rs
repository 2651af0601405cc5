//! Human-readable token listings
//!
//! One line per token: the token type name padded to a fixed column, then
//! the quoted lexeme.

use std::fmt;

use super::token::Token;

/// Width of the token type column
pub const TYPE_COLUMN_WIDTH: usize = 16;

/// Display adapter that renders a token stream as a listing
pub struct TokenDump<'a>(pub &'a [Token]);

impl fmt::Display for TokenDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in self.0 {
            writeln!(
                f,
                "{:<width$} {}",
                token.token_type,
                token,
                width = TYPE_COLUMN_WIDTH
            )?;
        }
        Ok(())
    }
}

/// Render a token stream as a listing
pub fn dump(tokens: &[Token]) -> String {
    TokenDump(tokens).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::{Keyword, Lexer, TokenType};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_dump_columns() {
        let tokens = Lexer::new("let s = \"hi\";").tokenize().unwrap();
        let expected = concat!(
            "Let              \"let\"\n",
            "Identifier       \"s\"\n",
            "Assignment       \"=\"\n",
            "String           \"hi\"\n",
            "SemiColon        \";\"\n",
            "EndOfInput       \"\"\n",
        );

        assert_eq!(dump(&tokens), expected);
    }

    #[test]
    fn test_dump_long_type_name() {
        let tokens = vec![Token::new(TokenType::Keyword(Keyword::Return), "return")];
        assert_eq!(dump(&tokens), "Return           \"return\"\n");
    }

    #[test]
    fn test_dump_empty() {
        assert_eq!(dump(&[]), "");
    }
}
