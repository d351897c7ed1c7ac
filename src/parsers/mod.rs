//! Text-format parsers for puzzles and solutions.

pub mod base;
pub mod puzzle;
pub mod solution;

pub use base::Parser;
pub use puzzle::{PuzzleParser, parse_puzzle};
pub use solution::{SolutionParser, parse_solution};
