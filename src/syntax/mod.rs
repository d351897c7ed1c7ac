//! Puzzle and solution value types.

pub mod types;
