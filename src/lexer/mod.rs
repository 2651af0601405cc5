//! Lexical analysis module
//!
//! This module handles tokenization of Kite source code.

pub mod cursor;
pub mod dump;
pub mod scanner;
pub mod token;

pub use cursor::Cursor;
pub use dump::{dump, TokenDump};
pub use scanner::Lexer;
pub use token::{Keyword, Token, TokenType};
