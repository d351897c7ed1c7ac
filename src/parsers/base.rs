//! Parser trait definition and shared token cursor.
//!
//! Both puzzle and solution formats are whitespace-separated integers and
//! single-letter tokens, so the cursor works on tokens rather than chars.

// ─── Parser trait ────────────────────────────────────────────────────────────

/// Trait for text-format parsers.
///
/// Each input format (puzzle, solution) implements this trait.
pub trait Parser {
    type Output;
    type Error;

    /// Parse the input source string.
    fn parse(&self, src: &str) -> Result<Self::Output, Self::Error>;
}

// ─── TokenCursor ─────────────────────────────────────────────────────────────

/// Stateful cursor over the whitespace-separated tokens of an input string.
pub struct TokenCursor<'a> {
    pub tokens: Vec<&'a str>,
    pub pos: usize,
}

impl<'a> TokenCursor<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            tokens: src.split_whitespace().collect(),
            pos: 0,
        }
    }

    pub fn eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Remaining token count.
    pub fn remaining(&self) -> usize {
        self.tokens.len().saturating_sub(self.pos)
    }

    /// Consume and return the next token.
    pub fn next_token(&mut self) -> Option<&'a str> {
        let tok = self.tokens.get(self.pos).copied()?;
        self.pos += 1;
        Some(tok)
    }

    /// Consume the next token as an `i64`.
    ///
    /// `Ok(None)` at end of input, `Err(token)` when the token is not an integer.
    pub fn next_int(&mut self) -> Result<Option<i64>, &'a str> {
        match self.next_token() {
            None => Ok(None),
            Some(tok) => tok.parse::<i64>().map(Some).map_err(|_| tok),
        }
    }

    /// Consume every remaining token.
    pub fn rest(&mut self) -> &[&'a str] {
        let start = self.pos.min(self.tokens.len());
        self.pos = self.tokens.len();
        &self.tokens[start..]
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_eof() {
        let c = TokenCursor::new("   \n\t ");
        assert!(c.eof());
        let c = TokenCursor::new("1");
        assert!(!c.eof());
    }

    #[test]
    fn test_cursor_splits_any_whitespace() {
        let c = TokenCursor::new("3 4\n2\t1  0\r\n");
        assert_eq!(c.tokens, vec!["3", "4", "2", "1", "0"]);
        assert_eq!(c.remaining(), 5);
    }

    #[test]
    fn test_next_int() {
        let mut c = TokenCursor::new("12 -3 x");
        assert_eq!(c.next_int(), Ok(Some(12)));
        assert_eq!(c.next_int(), Ok(Some(-3)));
        assert_eq!(c.next_int(), Err("x"));
        assert_eq!(c.next_int(), Ok(None));
    }

    #[test]
    fn test_rest() {
        let mut c = TokenCursor::new("0 2 E E");
        c.next_token();
        c.next_token();
        assert_eq!(c.rest(), &["E", "E"]);
        assert!(c.eof());
        assert!(c.rest().is_empty());
    }
}
