//! Solution text parser.
//!
//! Line 0 (first non-blank line) holds the declared channel count; every
//! further non-blank line is `origin segments direction*`. Lines with fewer
//! than two tokens are noise and skipped. Directions are authoritative, the
//! `segments` token and the channel count are kept only as metadata, so a
//! malformed one never fails the parse.

use tracing::debug;

use crate::error::SolutionError;
use crate::syntax::types::{Direction, Path, Solution};

use super::base::{Parser, TokenCursor};

/// Parser for solution output.
pub struct SolutionParser;

impl Parser for SolutionParser {
    type Output = Solution;
    type Error = SolutionError;

    fn parse(&self, src: &str) -> Result<Solution, SolutionError> {
        let mut lines = src
            .lines()
            .enumerate()
            .map(|(i, l)| (i + 1, l))
            .filter(|(_, l)| !l.trim().is_empty());

        let Some((header_line, header)) = lines.next() else {
            return Ok(Solution::new(0, Vec::new()));
        };
        let declared = match TokenCursor::new(header).next_int() {
            Ok(n) => n.unwrap_or_default(),
            Err(token) => {
                debug!(line = header_line, token, "channel count is not an integer, using 0");
                0
            }
        };

        let mut paths = Vec::new();
        for (line_no, line) in lines {
            if let Some(path) = parse_path_line(line_no, line)? {
                paths.push(path);
            }
        }

        debug!(declared, parsed = paths.len(), "parsed solution");
        Ok(Solution::new(declared, paths))
    }
}

/// Parse one `origin segments direction*` line. `Ok(None)` for noise lines.
fn parse_path_line(line_no: usize, line: &str) -> Result<Option<Path>, SolutionError> {
    let mut cursor = TokenCursor::new(line);
    if cursor.remaining() < 2 {
        return Ok(None);
    }

    let origin_tok = cursor.next_token().unwrap_or_default();
    let origin = origin_tok
        .parse::<usize>()
        .map_err(|_| SolutionError::InvalidToken {
            line: line_no,
            token: origin_tok.to_string(),
        })?;
    let declared_segments = cursor.next_int().ok().flatten();

    let directions = cursor
        .rest()
        .iter()
        .map(|tok| {
            Direction::from_token(tok).ok_or_else(|| SolutionError::UnknownDirection {
                line: line_no,
                token: tok.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Some(Path {
        origin,
        declared_segments,
        directions,
    }))
}

/// Parse solution text.
pub fn parse_solution(src: &str) -> Result<Solution, SolutionError> {
    SolutionParser.parse(src)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
