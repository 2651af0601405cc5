//! Token definitions for the Kite language
//!
//! This module defines all token types used in lexical analysis, along with
//! the reserved-word table consulted by the identifier scanner.

use std::fmt;

/// A token in the Kite language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub token_type: TokenType,
    /// Source text of the token. String literals exclude their quotes.
    pub lexeme: String,
}

impl Token {
    /// Create a new token
    pub fn new(token_type: TokenType, lexeme: impl Into<String>) -> Self {
        Self {
            token_type,
            lexeme: lexeme.into(),
        }
    }

    /// The end-of-input sentinel that closes every token stream
    pub fn end_of_input() -> Self {
        Self::new(TokenType::EndOfInput, String::new())
    }

    pub fn is_end_of_input(&self) -> bool {
        self.token_type == TokenType::EndOfInput
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.lexeme)
    }
}

/// Token types in the Kite language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    // Delimiters
    LeftParen,  // (
    RightParen, // )
    LeftBrace,  // {
    RightBrace, // }
    Comma,      // ,
    SemiColon,  // ;

    // Arithmetic and bitwise
    BinaryOp,      // + - * / % & | ^ **
    CompoundBinOp, // += -= *=
    Inc,           // ++
    Dec,           // --

    // Comparison
    NotEqual,      // !=
    LessThan,      // <
    LessThanEq,    // <=
    GreaterThan,   // >
    GreaterThanEq, // >=
    Equality,      // ==

    // Assignment
    Assignment, // =

    // Literals
    String,
    Number,
    Identifier,

    // Reserved words
    Keyword(Keyword),

    // Special
    Space,
    EndOfInput,
    Unrecognized,
}

impl TokenType {
    /// Name of the token type as shown in token dumps
    pub fn name(&self) -> &'static str {
        match self {
            Self::LeftParen => "LeftParen",
            Self::RightParen => "RightParen",
            Self::LeftBrace => "LeftBrace",
            Self::RightBrace => "RightBrace",
            Self::Comma => "Comma",
            Self::SemiColon => "SemiColon",
            Self::BinaryOp => "BinaryOp",
            Self::CompoundBinOp => "CompoundBinOp",
            Self::Inc => "Inc",
            Self::Dec => "Dec",
            Self::NotEqual => "NotEqual",
            Self::LessThan => "LessThan",
            Self::LessThanEq => "LessThanEq",
            Self::GreaterThan => "GreaterThan",
            Self::GreaterThanEq => "GreaterThanEq",
            Self::Equality => "Equality",
            Self::Assignment => "Assignment",
            Self::String => "String",
            Self::Number => "Number",
            Self::Identifier => "Identifier",
            Self::Keyword(kw) => kw.name(),
            Self::Space => "Space",
            Self::EndOfInput => "EndOfInput",
            Self::Unrecognized => "Unrecognized",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Keywords in the Kite language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    // Declarations
    Let,
    Const,

    // Functions
    Fn,
    Return,

    // Control flow
    If,
    Else,
    While,

    // Statements
    Echo,
    Skip,
    Halt,

    // Literals
    True,
    False,
    Undef,

    // Logical operators
    And,
    Or,
    Not,
}

impl Keyword {
    /// The keyword table: every reserved word, spelled by [`Keyword::as_str`]
    pub const ALL: [Keyword; 16] = [
        Self::Let,
        Self::Const,
        Self::Fn,
        Self::Return,
        Self::If,
        Self::Else,
        Self::While,
        Self::Echo,
        Self::Skip,
        Self::Halt,
        Self::True,
        Self::False,
        Self::Undef,
        Self::And,
        Self::Or,
        Self::Not,
    ];

    /// Look up a lexeme in the keyword table
    pub fn lookup(lexeme: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|keyword| keyword.as_str() == lexeme)
    }

    /// Get the source spelling of the keyword
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Let => "let",
            Self::Const => "const",
            Self::Fn => "fn",
            Self::Return => "return",
            Self::If => "if",
            Self::Else => "else",
            Self::While => "while",
            Self::Echo => "echo",
            Self::Skip => "skip",
            Self::Halt => "halt",
            Self::True => "true",
            Self::False => "false",
            Self::Undef => "undef",
            Self::And => "and",
            Self::Or => "or",
            Self::Not => "not",
        }
    }

    /// Get the type name of the keyword token
    pub fn name(&self) -> &'static str {
        match self {
            Self::Let => "Let",
            Self::Const => "Const",
            Self::Fn => "Fn",
            Self::Return => "Return",
            Self::If => "If",
            Self::Else => "Else",
            Self::While => "While",
            Self::Echo => "Echo",
            Self::Skip => "Skip",
            Self::Halt => "Halt",
            Self::True => "True",
            Self::False => "False",
            Self::Undef => "Undef",
            Self::And => "And",
            Self::Or => "Or",
            Self::Not => "Not",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(Keyword::lookup("let"), Some(Keyword::Let));
        assert_eq!(Keyword::lookup("fn"), Some(Keyword::Fn));
        assert_eq!(Keyword::lookup("undef"), Some(Keyword::Undef));
        assert_eq!(Keyword::lookup("invalid"), None);
        // lookup is case-sensitive
        assert_eq!(Keyword::lookup("If"), None);
        assert_eq!(Keyword::lookup(""), None);
    }

    #[test]
    fn test_keyword_table_round_trips() {
        for keyword in Keyword::ALL {
            assert_eq!(Keyword::lookup(keyword.as_str()), Some(keyword));
        }
    }

    #[test]
    fn test_keyword_as_str() {
        assert_eq!(Keyword::Let.as_str(), "let");
        assert_eq!(Keyword::Echo.as_str(), "echo");
        assert_eq!(Keyword::Not.to_string(), "not");
    }

    #[test]
    fn test_token_type_padding() {
        assert_eq!(format!("{:<8}|", TokenType::Inc), "Inc     |");
        assert_eq!(format!("{:<8}|", TokenType::Keyword(Keyword::While)), "While   |");
    }

    #[test]
    fn test_token_display() {
        assert_eq!(Token::new(TokenType::String, "a\"b").to_string(), r#""a\"b""#);
        assert_eq!(Token::end_of_input().to_string(), r#""""#);
        assert!(Token::end_of_input().is_end_of_input());
    }
}
