//! Lexer/Scanner implementation for the Kite language
//!
//! This module implements lexical analysis, converting source code into tokens.
//! Each token is produced by dispatching on the class of its first character;
//! the sub-scanners leave the cursor on the last character they consumed and
//! the outer loop steps past it.

use tracing::{debug, trace};
use unicode_general_category::{get_general_category, GeneralCategory};

use super::cursor::Cursor;
use super::token::{Keyword, Token, TokenType};
use crate::error::{KiteError, KiteResult};

/// Lexer for Kite source code
pub struct Lexer {
    source: Vec<char>,
}

impl Lexer {
    /// Create a new lexer
    pub fn new(source: &str) -> Self {
        Self {
            source: source.chars().collect(),
        }
    }

    /// Tokenize the source code
    ///
    /// The returned stream never contains whitespace and always ends with a
    /// single `EndOfInput` token. Characters that start no known token are
    /// reported as `Unrecognized` tokens; only an unterminated string literal
    /// aborts the scan.
    pub fn tokenize(&self) -> KiteResult<Vec<Token>> {
        let mut cursor = Cursor::new(&self.source);
        let mut tokens = Vec::new();

        while let Some(c) = cursor.current_char() {
            if c.is_whitespace() {
                cursor.advance();
                continue;
            }

            let token = next_token(&mut cursor)?;
            match token.token_type {
                // Whitespace is skipped above, so this never matches here.
                TokenType::Space => {}
                TokenType::Unrecognized => {
                    trace!(offset = cursor.position(), lexeme = %token.lexeme, "unrecognized character");
                    tokens.push(token);
                }
                _ => tokens.push(token),
            }
            cursor.advance();
        }

        tokens.push(Token::end_of_input());
        debug!(chars = self.source.len(), tokens = tokens.len(), "tokenized source");

        Ok(tokens)
    }
}

/// Character classes that select a sub-scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    /// Single-character punctuation with a fixed token type
    Structural(TokenType),
    /// `/ % & | ^`, always a one-character binary operator
    Operator,
    Plus,
    Minus,
    Star,
    Bang,
    Less,
    Greater,
    Equals,
    Quote,
    Digit,
    Letter,
    Space,
    Other,
}

impl CharClass {
    fn of(c: char) -> Self {
        match c {
            '(' => Self::Structural(TokenType::LeftParen),
            ')' => Self::Structural(TokenType::RightParen),
            '{' => Self::Structural(TokenType::LeftBrace),
            '}' => Self::Structural(TokenType::RightBrace),
            ',' => Self::Structural(TokenType::Comma),
            ';' => Self::Structural(TokenType::SemiColon),
            '/' | '%' | '&' | '|' | '^' => Self::Operator,
            '+' => Self::Plus,
            '-' => Self::Minus,
            '*' => Self::Star,
            '!' => Self::Bang,
            '<' => Self::Less,
            '>' => Self::Greater,
            '=' => Self::Equals,
            '"' => Self::Quote,
            c if is_digit(c) => Self::Digit,
            c if is_letter(c) => Self::Letter,
            ' ' => Self::Space,
            _ => Self::Other,
        }
    }
}

/// Scan exactly one token starting at the cursor
fn next_token(cursor: &mut Cursor<'_>) -> KiteResult<Token> {
    let Some(c) = cursor.current_char() else {
        return Ok(Token::end_of_input());
    };

    let token = match CharClass::of(c) {
        CharClass::Structural(token_type) => Token::new(token_type, c),
        CharClass::Operator => Token::new(TokenType::BinaryOp, c),
        CharClass::Plus => scan_arithmetic(cursor, c, TokenType::Inc),
        CharClass::Minus => scan_arithmetic(cursor, c, TokenType::Dec),
        CharClass::Star => scan_arithmetic(cursor, c, TokenType::BinaryOp),
        // There is no unary-not token; a lone `!` is unrecognized.
        CharClass::Bang => scan_with_equals(cursor, c, TokenType::NotEqual, TokenType::Unrecognized),
        CharClass::Less => scan_with_equals(cursor, c, TokenType::LessThanEq, TokenType::LessThan),
        CharClass::Greater => {
            scan_with_equals(cursor, c, TokenType::GreaterThanEq, TokenType::GreaterThan)
        }
        CharClass::Equals => scan_with_equals(cursor, c, TokenType::Equality, TokenType::Assignment),
        CharClass::Quote => scan_string(cursor)?,
        CharClass::Digit => scan_number(cursor),
        CharClass::Letter => scan_identifier(cursor),
        CharClass::Space => Token::new(TokenType::Space, c),
        CharClass::Other => Token::new(TokenType::Unrecognized, c),
    };

    Ok(token)
}

/// Scan `+`, `-` or `*`: doubled, `=`-suffixed, or bare
fn scan_arithmetic(cursor: &mut Cursor<'_>, c: char, doubled: TokenType) -> Token {
    let next = cursor.peek();

    if next == c {
        cursor.advance();
        Token::new(doubled, format!("{c}{c}"))
    } else if next == '=' {
        cursor.advance();
        Token::new(TokenType::CompoundBinOp, format!("{c}="))
    } else {
        Token::new(TokenType::BinaryOp, c)
    }
}

/// Scan a character that forms a second token type when followed by `=`
fn scan_with_equals(
    cursor: &mut Cursor<'_>,
    c: char,
    with_equals: TokenType,
    bare: TokenType,
) -> Token {
    if cursor.peek() == '=' {
        cursor.advance();
        Token::new(with_equals, format!("{c}="))
    } else {
        Token::new(bare, c)
    }
}

/// Scan a string literal
///
/// Leaves the cursor on the closing quote. No escape sequences are
/// interpreted; the lexeme is the raw text between the quotes.
fn scan_string(cursor: &mut Cursor<'_>) -> KiteResult<Token> {
    let start = cursor.position();

    loop {
        cursor.advance();
        if cursor.is_eof() {
            debug!(offset = start, "unterminated string literal");
            return Err(KiteError::unterminated_string(start));
        }
        if cursor.current_char() == Some('"') {
            break;
        }
    }

    Ok(Token::new(
        TokenType::String,
        cursor.slice(start + 1, cursor.position()),
    ))
}

/// Scan a run of decimal digits
fn scan_number(cursor: &mut Cursor<'_>) -> Token {
    let start = cursor.position();

    while is_digit(cursor.peek()) {
        cursor.advance();
    }

    Token::new(TokenType::Number, cursor.slice(start, cursor.position() + 1))
}

/// Scan an identifier or keyword
fn scan_identifier(cursor: &mut Cursor<'_>) -> Token {
    let start = cursor.position();

    while is_letter(cursor.peek()) {
        cursor.advance();
    }
    while is_identifier_char(cursor.peek()) {
        cursor.advance();
    }

    let lexeme = cursor.slice(start, cursor.position() + 1);
    let token_type = match Keyword::lookup(&lexeme) {
        Some(keyword) => TokenType::Keyword(keyword),
        None => TokenType::Identifier,
    };

    Token::new(token_type, lexeme)
}

/// Unicode decimal digit (category Nd)
fn is_digit(c: char) -> bool {
    get_general_category(c) == GeneralCategory::DecimalNumber
}

/// Unicode letter (categories Lu, Ll, Lt, Lm, Lo). Combining marks are not letters.
fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

fn is_identifier_char(c: char) -> bool {
    is_letter(c) || is_digit(c) || c == '_'
}
