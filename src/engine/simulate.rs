//! Path simulator: walks a direction sequence from an origin cell.

use serde::Serialize;

use crate::syntax::types::{Cell, Direction, Grid};

/// Cells visited by one path walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulatedPath {
    /// Visited cells in order, starting with the origin. Stops at the last
    /// in-bounds cell when a move leaves the grid.
    pub cells: Vec<Cell>,
    pub out_of_bounds: bool,
    /// Index into the direction sequence of the move that left the grid.
    pub first_oob_step: Option<usize>,
}

impl SimulatedPath {
    /// Last cell reached.
    pub fn end(&self) -> Cell {
        // `cells` always holds at least the origin.
        self.cells[self.cells.len() - 1]
    }

    /// True when every move was applied.
    pub fn completed(&self) -> bool {
        !self.out_of_bounds
    }
}

/// Walk `directions` from `origin` on `grid`.
///
/// Simulation stops at the first move that leaves `[0, rows*cols)` or wraps
/// across a row boundary on an E/W move.
pub fn simulate(origin: Cell, directions: &[Direction], grid: &Grid) -> SimulatedPath {
    let mut cells = Vec::with_capacity(directions.len() + 1);
    cells.push(origin);

    let mut current = origin;
    for (step, &dir) in directions.iter().enumerate() {
        match grid.step(current, dir) {
            Some(next) => {
                current = next;
                cells.push(next);
            }
            None => {
                return SimulatedPath {
                    cells,
                    out_of_bounds: true,
                    first_oob_step: Some(step),
                };
            }
        }
    }

    SimulatedPath {
        cells,
        out_of_bounds: false,
        first_oob_step: None,
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
