//! Read position over a source buffer.
//!
//! The cursor addresses the buffer by character index. It only moves
//! forward; sub-scanners that need lookahead use [`Cursor::peek`] instead
//! of stepping back.

/// Returned by [`Cursor::peek`] when the next position is past the end.
pub const EOF_CHAR: char = '\0';

/// A cursor over a fully materialized source buffer.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    source: &'a [char],
    position: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a [char]) -> Self {
        Self {
            source,
            position: 0,
        }
    }

    /// Character under the cursor, or `None` at end of input.
    pub fn current_char(&self) -> Option<char> {
        self.source.get(self.position).copied()
    }

    /// Character one position ahead, or [`EOF_CHAR`] past the end.
    pub fn peek(&self) -> char {
        self.source
            .get(self.position + 1)
            .copied()
            .unwrap_or(EOF_CHAR)
    }

    pub fn advance(&mut self) {
        self.position += 1;
    }

    pub fn is_eof(&self) -> bool {
        self.position >= self.source.len()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Characters in `start..end`, collected into a string.
    pub fn slice(&self, start: usize, end: usize) -> String {
        self.source[start..end.min(self.source.len())].iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_walks_forward() {
        let source = chars("ab");
        let mut cursor = Cursor::new(&source);

        assert_eq!(cursor.current_char(), Some('a'));
        assert_eq!(cursor.peek(), 'b');

        cursor.advance();
        assert_eq!(cursor.current_char(), Some('b'));
        assert_eq!(cursor.peek(), EOF_CHAR);
        assert!(!cursor.is_eof());

        cursor.advance();
        assert!(cursor.is_eof());
        assert_eq!(cursor.current_char(), None);
        assert_eq!(cursor.peek(), EOF_CHAR);
    }

    #[test]
    fn test_empty_source() {
        let source = chars("");
        let cursor = Cursor::new(&source);

        assert!(cursor.is_eof());
        assert_eq!(cursor.current_char(), None);
        assert_eq!(cursor.peek(), EOF_CHAR);
    }

    #[test]
    fn test_slice_counts_characters() {
        let source = chars("héllo");
        let cursor = Cursor::new(&source);

        assert_eq!(cursor.slice(1, 3), "él");
        assert_eq!(cursor.slice(3, 99), "lo");
    }
}
