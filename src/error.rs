//! Error and finding types.
//!
//! Parse failures (`PuzzleError`, `SolutionError`) are terminal for a single
//! check. Geometric findings (`ValidationError`) are collected, never thrown.

use std::fmt;

use serde::Serialize;

use crate::syntax::types::{Cell, RuneId};

// ─── PuzzleError ─────────────────────────────────────────────────────────────

/// Malformed puzzle text. No partial puzzle is usable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// Fewer tokens than the header declares.
    MissingToken { what: &'static str },
    /// A token that is not a non-negative integer where one is required.
    InvalidToken { what: &'static str, token: String },
    InvalidDimensions { rows: i64, cols: i64 },
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PuzzleError::MissingToken { what } => {
                write!(f, "Malformed puzzle: missing {}", what)
            }
            PuzzleError::InvalidToken { what, token } => {
                write!(f, "Malformed puzzle: invalid {} '{}'", what, token)
            }
            PuzzleError::InvalidDimensions { rows, cols } => {
                write!(f, "Malformed puzzle: invalid grid size {}x{}", rows, cols)
            }
        }
    }
}

impl std::error::Error for PuzzleError {}

// ─── SolutionError ───────────────────────────────────────────────────────────

/// Malformed solution text. `line` is 1-based and counts blank lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolutionError {
    InvalidToken { line: usize, token: String },
    UnknownDirection { line: usize, token: String },
}

impl fmt::Display for SolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolutionError::InvalidToken { line, token } => {
                write!(f, "Malformed solution: invalid token '{}' on line {}", token, line)
            }
            SolutionError::UnknownDirection { line, token } => write!(
                f,
                "Malformed solution: unknown direction '{}' on line {} (expected N, S, E or W)",
                token, line
            ),
        }
    }
}

impl std::error::Error for SolutionError {}

// ─── ValidationError ─────────────────────────────────────────────────────────

/// One geometric finding against a solution. `Display` gives the
/// human-readable message shown to users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum ValidationError {
    /// A rune id defined other than exactly twice.
    UnpairedRune { id: RuneId, count: usize },
    /// `path` is the 1-based index of the path in the solution.
    StartNotRune { path: usize, position: Cell },
    OutOfBounds { rune: RuneId, step: usize },
    EndpointMismatch { rune: RuneId },
    RuneCrossing { rune: RuneId, position: Cell },
    PathCollision { rune: RuneId, other: RuneId, position: Cell },
    SelfIntersection { rune: RuneId, position: Cell },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::UnpairedRune { id, count } => write!(
                f,
                "Rune {} appears {} times. Must appear exactly twice.",
                id, count
            ),
            ValidationError::StartNotRune { path, position } => {
                write!(f, "Path {} starts at non-rune position {}.", path, position)
            }
            ValidationError::OutOfBounds { rune, .. } => {
                write!(f, "Path for Rune {} goes out of bounds.", rune)
            }
            ValidationError::EndpointMismatch { rune } => {
                write!(f, "Path for Rune {} does not end at the matching rune.", rune)
            }
            ValidationError::RuneCrossing { rune, position } => {
                write!(f, "Path for Rune {} crosses another rune at {}.", rune, position)
            }
            ValidationError::PathCollision {
                rune,
                other,
                position,
            } => write!(
                f,
                "Collision: Path for Rune {} overlaps with Path for Rune {} at {}.",
                rune, other, position
            ),
            ValidationError::SelfIntersection { rune, position } => write!(
                f,
                "Self-intersection: Path for Rune {} crosses itself at {}.",
                rune, position
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

// ─── LevelError ──────────────────────────────────────────────────────────────

/// Rejected level layout when encoding a puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    Empty,
    UnpairedRune { id: RuneId, count: usize },
    InvalidDimensions { rows: usize, cols: usize },
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::Empty => write!(f, "Grid is empty!"),
            LevelError::UnpairedRune { id, count } => write!(
                f,
                "Rune ID {} appears {} times. Must appear exactly twice.",
                id, count
            ),
            LevelError::InvalidDimensions { rows, cols } => {
                write!(f, "Invalid grid size {}x{}", rows, cols)
            }
        }
    }
}

impl std::error::Error for LevelError {}

// ─── RenderError ─────────────────────────────────────────────────────────────

/// A frame that cannot be drawn as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The drawing would exceed `limit` characters.
    TooLarge { rows: usize, cols: usize, limit: usize },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::TooLarge { rows, cols, limit } => write!(
                f,
                "Grid {}x{} is too large to draw (limit {} characters)",
                rows, cols, limit
            ),
        }
    }
}

impl std::error::Error for RenderError {}

// ─── CheckError ──────────────────────────────────────────────────────────────

/// Structural failure of a one-shot check, kept apart from geometric findings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    Puzzle(PuzzleError),
    Solution(SolutionError),
    Render(RenderError),
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckError::Puzzle(e) => write!(f, "{}", e),
            CheckError::Solution(e) => write!(f, "{}", e),
            CheckError::Render(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CheckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CheckError::Puzzle(e) => Some(e),
            CheckError::Solution(e) => Some(e),
            CheckError::Render(e) => Some(e),
        }
    }
}

impl From<PuzzleError> for CheckError {
    fn from(e: PuzzleError) -> Self {
        CheckError::Puzzle(e)
    }
}

impl From<SolutionError> for CheckError {
    fn from(e: SolutionError) -> Self {
        CheckError::Solution(e)
    }
}

impl From<RenderError> for CheckError {
    fn from(e: RenderError) -> Self {
        CheckError::Render(e)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
