//! Value types for puzzles and solutions.
//!
//! A puzzle is a `rows × cols` grid plus rune placements; a solution is a list
//! of paths, each an origin cell and a sequence of unit moves. Cells are
//! addressed by their row-major index. Nothing here is mutated after parsing.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Row-major cell index.
pub type Cell = usize;

/// Rune label. Two runes sharing an id form a pair.
pub type RuneId = i64;

// ─── Direction ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    N,
    S,
    E,
    W,
}

impl Direction {
    /// Parse a single move token (`N`, `S`, `E` or `W`).
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "N" => Some(Self::N),
            "S" => Some(Self::S),
            "E" => Some(Self::E),
            "W" => Some(Self::W),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::N => 'N',
            Self::S => 'S',
            Self::E => 'E',
            Self::W => 'W',
        }
    }

    /// (Δrow, Δcol) of one move.
    pub fn delta(self) -> (i64, i64) {
        match self {
            Self::N => (-1, 0),
            Self::S => (1, 0),
            Self::E => (0, 1),
            Self::W => (0, -1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

// ─── Grid ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Grid {
    pub rows: usize,
    pub cols: usize,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    pub fn cell_count(&self) -> usize {
        self.rows.saturating_mul(self.cols)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell < self.cell_count()
    }

    pub fn row(&self, cell: Cell) -> usize {
        cell / self.cols
    }

    pub fn col(&self, cell: Cell) -> usize {
        cell % self.cols
    }

    /// The cell reached by one move from `cell`, or `None` when the move
    /// leaves the grid or wraps across a row boundary.
    pub fn step(&self, cell: Cell, dir: Direction) -> Option<Cell> {
        let next = match dir {
            Direction::N => cell.checked_sub(self.cols)?,
            Direction::S => cell.checked_add(self.cols)?,
            Direction::E => {
                let next = cell.checked_add(1)?;
                if next % self.cols == 0 {
                    return None;
                }
                next
            }
            Direction::W => {
                let next = cell.checked_sub(1)?;
                if self.col(next) == self.cols - 1 {
                    return None;
                }
                next
            }
        };
        self.contains(next).then_some(next)
    }
}

// ─── Rune ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rune {
    pub id: RuneId,
    pub position: Cell,
}

impl Rune {
    pub fn new(id: RuneId, position: Cell) -> Self {
        Self { id, position }
    }
}

// ─── Puzzle ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Puzzle {
    pub grid: Grid,
    /// Rune definitions in input order. May be malformed (an id appearing
    /// other than twice); the validator reports that.
    pub runes: Vec<Rune>,
}

impl Puzzle {
    pub fn new(grid: Grid, runes: Vec<Rune>) -> Self {
        Self { grid, runes }
    }

    /// Static endpoint lookup: cell → rune id. A later definition on the same
    /// cell overwrites an earlier one.
    pub fn rune_map(&self) -> BTreeMap<Cell, RuneId> {
        self.runes.iter().map(|r| (r.position, r.id)).collect()
    }

    /// Positions of each rune id, in definition order.
    pub fn rune_pairs(&self) -> BTreeMap<RuneId, Vec<Cell>> {
        let mut pairs: BTreeMap<RuneId, Vec<Cell>> = BTreeMap::new();
        for rune in &self.runes {
            pairs.entry(rune.id).or_default().push(rune.position);
        }
        pairs
    }
}

// ─── Path / Solution ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Path {
    pub origin: Cell,
    /// The advisory `segments` token as written. Never used for correctness.
    pub declared_segments: Option<i64>,
    pub directions: Vec<Direction>,
}

impl Path {
    pub fn new(origin: Cell, directions: Vec<Direction>) -> Self {
        Self {
            origin,
            declared_segments: Some(directions.len() as i64),
            directions,
        }
    }

    pub fn len(&self) -> usize {
        self.directions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directions.is_empty()
    }

    /// Space-joined direction string, e.g. `"E E S"`.
    pub fn direction_string(&self) -> String {
        self.directions
            .iter()
            .map(|d| d.as_char().to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Solution {
    /// First line of the solution text. Informational only.
    pub declared_channel_count: i64,
    pub paths: Vec<Path>,
}

impl Solution {
    pub fn new(declared_channel_count: i64, paths: Vec<Path>) -> Self {
        Self {
            declared_channel_count,
            paths,
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_token() {
        assert_eq!(Direction::from_token("N"), Some(Direction::N));
        assert_eq!(Direction::from_token("W"), Some(Direction::W));
        assert_eq!(Direction::from_token("n"), None);
        assert_eq!(Direction::from_token("X"), None);
    }

    #[test]
    fn test_grid_row_col() {
        let g = Grid::new(3, 4);
        assert_eq!(g.row(7), 1);
        assert_eq!(g.col(7), 3);
        assert!(g.contains(11));
        assert!(!g.contains(12));
    }

    #[test]
    fn test_grid_step_inside() {
        let g = Grid::new(3, 3);
        assert_eq!(g.step(4, Direction::N), Some(1));
        assert_eq!(g.step(4, Direction::S), Some(7));
        assert_eq!(g.step(4, Direction::E), Some(5));
        assert_eq!(g.step(4, Direction::W), Some(3));
    }

    #[test]
    fn test_grid_step_edges() {
        let g = Grid::new(3, 3);
        assert_eq!(g.step(1, Direction::N), None);
        assert_eq!(g.step(7, Direction::S), None);
        // East from the last column would wrap into the next row.
        assert_eq!(g.step(2, Direction::E), None);
        // West from the first column would wrap into the previous row.
        assert_eq!(g.step(3, Direction::W), None);
        assert_eq!(g.step(0, Direction::W), None);
    }

    #[test]
    fn test_single_column_grid() {
        let g = Grid::new(3, 1);
        assert_eq!(g.step(0, Direction::E), None);
        assert_eq!(g.step(1, Direction::W), None);
        assert_eq!(g.step(1, Direction::S), Some(2));
    }

    #[test]
    fn test_puzzle_rune_pairs() {
        let p = Puzzle::new(
            Grid::new(1, 4),
            vec![
                Rune::new(1, 0),
                Rune::new(2, 1),
                Rune::new(2, 2),
                Rune::new(1, 3),
            ],
        );
        let pairs = p.rune_pairs();
        assert_eq!(pairs[&1], vec![0, 3]);
        assert_eq!(pairs[&2], vec![1, 2]);
        assert_eq!(p.rune_map()[&2], 2);
    }

    #[test]
    fn test_path_direction_string() {
        let p = Path::new(0, vec![Direction::E, Direction::E, Direction::S]);
        assert_eq!(p.direction_string(), "E E S");
        assert_eq!(p.len(), 3);
        assert_eq!(Path::new(0, vec![]).direction_string(), "");
    }
}
