//! Animation trace: every path truncated to the first `k` moves.
//!
//! A frame is recomputed from the paths on every call, so frames can be
//! requested in any order and always agree with a direct computation.

use serde::Serialize;

use crate::syntax::types::{Cell, Direction, Grid, Path};

use super::simulate::simulate;

/// One path as it appears in a frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FramePath {
    pub origin: Cell,
    /// Moves shown in this frame: the first `min(k, len)` directions.
    pub directions: Vec<Direction>,
    /// Cells reached by those moves, origin first. Shorter than
    /// `directions.len() + 1` when a move leaves the grid.
    pub cells: Vec<Cell>,
    pub out_of_bounds: bool,
}

impl FramePath {
    /// `(cell, move that entered it)` for every cell after the origin.
    pub fn arrows(&self) -> impl Iterator<Item = (Cell, Direction)> + '_ {
        self.cells
            .iter()
            .skip(1)
            .copied()
            .zip(self.directions.iter().copied())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    pub step: usize,
    pub max_steps: usize,
    pub paths: Vec<FramePath>,
}

/// Trace over a fixed set of paths on a grid.
#[derive(Debug, Clone, Copy)]
pub struct Trace<'a> {
    grid: Grid,
    paths: &'a [Path],
    max_steps: usize,
}

impl<'a> Trace<'a> {
    /// Largest step index; frames run `0..=max_steps`.
    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    /// Frame `k`. Steps past `max_steps` show the full paths.
    pub fn frame(&self, k: usize) -> Frame {
        let step = k.min(self.max_steps);
        let paths = self
            .paths
            .iter()
            .map(|path| {
                let shown = &path.directions[..step.min(path.directions.len())];
                let walk = simulate(path.origin, shown, &self.grid);
                FramePath {
                    origin: path.origin,
                    directions: shown.to_vec(),
                    cells: walk.cells,
                    out_of_bounds: walk.out_of_bounds,
                }
            })
            .collect();

        Frame {
            step,
            max_steps: self.max_steps,
            paths,
        }
    }

    /// Every frame from 0 to `max_steps`.
    pub fn frames(&self) -> impl Iterator<Item = Frame> + '_ {
        (0..=self.max_steps).map(move |k| self.frame(k))
    }
}

/// Build the animation trace for `paths` on `grid`.
pub fn build_trace<'a>(grid: &Grid, paths: &'a [Path]) -> Trace<'a> {
    let max_steps = paths.iter().map(Path::len).max().unwrap_or(0);
    Trace {
        grid: *grid,
        paths,
        max_steps,
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
