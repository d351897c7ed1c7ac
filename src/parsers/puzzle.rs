//! Puzzle text parser: `rows cols nDefs (id pos){nDefs}`.
//!
//! `nDefs` counts endpoint definitions, not pairs. Tokens after the last
//! declared definition are ignored. Rune cardinality and overlap are not
//! checked here; the validator reports them so a malformed puzzle can still
//! be rendered.

use tracing::debug;

use crate::error::PuzzleError;
use crate::syntax::types::{Grid, Puzzle, Rune};

use super::base::{Parser, TokenCursor};

/// Parser for puzzle definitions.
pub struct PuzzleParser;

impl Parser for PuzzleParser {
    type Output = Puzzle;
    type Error = PuzzleError;

    fn parse(&self, src: &str) -> Result<Puzzle, PuzzleError> {
        let mut cursor = TokenCursor::new(src);

        let rows = next_int(&mut cursor, "rows")?;
        let cols = next_int(&mut cursor, "cols")?;
        if rows <= 0 || cols <= 0 {
            return Err(PuzzleError::InvalidDimensions { rows, cols });
        }
        let n_defs = next_non_negative(&mut cursor, "rune definition count")?;

        let mut runes = Vec::with_capacity(n_defs.min(cursor.remaining() / 2));
        for _ in 0..n_defs {
            let id = next_int(&mut cursor, "rune id")?;
            let position = next_non_negative(&mut cursor, "rune position")?;
            runes.push(Rune::new(id, position));
        }

        if !cursor.eof() {
            debug!(ignored = cursor.remaining(), "trailing puzzle tokens ignored");
        }

        Ok(Puzzle::new(Grid::new(rows as usize, cols as usize), runes))
    }
}

fn next_int(cursor: &mut TokenCursor<'_>, what: &'static str) -> Result<i64, PuzzleError> {
    match cursor.next_int() {
        Ok(Some(v)) => Ok(v),
        Ok(None) => Err(PuzzleError::MissingToken { what }),
        Err(token) => Err(PuzzleError::InvalidToken {
            what,
            token: token.to_string(),
        }),
    }
}

fn next_non_negative(
    cursor: &mut TokenCursor<'_>,
    what: &'static str,
) -> Result<usize, PuzzleError> {
    let v = next_int(cursor, what)?;
    usize::try_from(v).map_err(|_| PuzzleError::InvalidToken {
        what,
        token: v.to_string(),
    })
}

/// Parse puzzle text.
pub fn parse_puzzle(src: &str) -> Result<Puzzle, PuzzleError> {
    PuzzleParser.parse(src)
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let p = parse_puzzle("1 3 2 1 0 1 2").unwrap();
        assert_eq!(p.grid, Grid::new(1, 3));
        assert_eq!(p.runes, vec![Rune::new(1, 0), Rune::new(1, 2)]);
    }

    #[test]
    fn test_parse_multiline() {
        let p = parse_puzzle("2 2\n4\n1 0\n1 3\n2 1\n2 2\n").unwrap();
        assert_eq!(p.runes.len(), 4);
        assert_eq!(p.runes[3], Rune::new(2, 2));
    }

    #[test]
    fn test_parse_no_runes() {
        let p = parse_puzzle("3 3 0").unwrap();
        assert!(p.runes.is_empty());
    }

    #[test]
    fn test_trailing_tokens_ignored() {
        let p = parse_puzzle("1 3 2 1 0 1 2 9 9 garbage").unwrap();
        assert_eq!(p.runes.len(), 2);
    }

    #[test]
    fn test_missing_definitions() {
        let err = parse_puzzle("1 3 4 1 0 1 2").unwrap_err();
        assert_eq!(err, PuzzleError::MissingToken { what: "rune id" });
        let err = parse_puzzle("1 3 1 1").unwrap_err();
        assert_eq!(
            err,
            PuzzleError::MissingToken {
                what: "rune position"
            }
        );
    }

    #[test]
    fn test_missing_header() {
        assert_eq!(
            parse_puzzle("").unwrap_err(),
            PuzzleError::MissingToken { what: "rows" }
        );
        assert_eq!(
            parse_puzzle("4 4").unwrap_err(),
            PuzzleError::MissingToken {
                what: "rune definition count"
            }
        );
    }

    #[test]
    fn test_invalid_tokens() {
        assert!(matches!(
            parse_puzzle("a 3 0").unwrap_err(),
            PuzzleError::InvalidToken { what: "rows", .. }
        ));
        assert!(matches!(
            parse_puzzle("1 3 1 1 -2").unwrap_err(),
            PuzzleError::InvalidToken {
                what: "rune position",
                ..
            }
        ));
        assert!(matches!(
            parse_puzzle("1 3 -1").unwrap_err(),
            PuzzleError::InvalidToken { .. }
        ));
    }

    #[test]
    fn test_invalid_dimensions() {
        assert_eq!(
            parse_puzzle("0 3 0").unwrap_err(),
            PuzzleError::InvalidDimensions { rows: 0, cols: 3 }
        );
    }

    #[test]
    fn test_malformed_cardinality_still_parses() {
        let p = parse_puzzle("1 3 3 1 0 1 1 1 2").unwrap();
        assert_eq!(p.rune_pairs()[&1].len(), 3);
    }
}
