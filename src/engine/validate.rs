//! Solution validator.
//!
//! Per path, in order: start-rune, bounds, connectivity, intermediate-rune.
//! A path failing the start-rune or bounds rule gets no further per-path
//! checks. A joint collision pass then walks all paths against one shared
//! `cell → owner` table that lives only for this call.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::error::ValidationError;
use crate::syntax::types::{Cell, Puzzle, RuneId, Solution};

use super::simulate::{SimulatedPath, simulate};

/// Check `solution` against `puzzle`. Returns every finding in discovery
/// order; an empty list means the solution is valid.
pub fn validate(puzzle: &Puzzle, solution: &Solution) -> Vec<ValidationError> {
    let rune_map = puzzle.rune_map();
    let mut errors = Vec::new();

    for (id, positions) in puzzle.rune_pairs() {
        if positions.len() != 2 {
            errors.push(ValidationError::UnpairedRune {
                id,
                count: positions.len(),
            });
        }
    }

    // Walks are shared by both passes. `None` marks a path with no start rune.
    let mut walks: Vec<Option<(RuneId, SimulatedPath)>> = Vec::with_capacity(solution.paths.len());

    for (index, path) in solution.paths.iter().enumerate() {
        let Some(&rune) = rune_map.get(&path.origin) else {
            debug!(path = index + 1, origin = path.origin, "path starts off-rune");
            errors.push(ValidationError::StartNotRune {
                path: index + 1,
                position: path.origin,
            });
            walks.push(None);
            continue;
        };

        let walk = simulate(path.origin, &path.directions, &puzzle.grid);
        check_path(rune, &walk, &rune_map, &mut errors);
        walks.push(Some((rune, walk)));
    }

    check_collisions(&walks, &mut errors);

    debug!(
        paths = solution.paths.len(),
        errors = errors.len(),
        "validation finished"
    );
    errors
}

/// True when `validate` found nothing.
pub fn is_valid(errors: &[ValidationError]) -> bool {
    errors.is_empty()
}

fn check_path(
    rune: RuneId,
    walk: &SimulatedPath,
    rune_map: &BTreeMap<Cell, RuneId>,
    errors: &mut Vec<ValidationError>,
) {
    if let Some(step) = walk.first_oob_step {
        errors.push(ValidationError::OutOfBounds { rune, step });
        return;
    }

    if rune_map.get(&walk.end()) != Some(&rune) {
        errors.push(ValidationError::EndpointMismatch { rune });
    }

    for &cell in interior(&walk.cells) {
        if rune_map.contains_key(&cell) {
            errors.push(ValidationError::RuneCrossing {
                rune,
                position: cell,
            });
        }
    }
}

/// Joint pass over every path that starts on a rune.
///
/// The origin is never recorded. The final cell is the path's own
/// terminating rune and is exempt, but only for a walk that applied all its
/// moves; an out-of-bounds walk never reached a destination.
fn check_collisions(
    walks: &[Option<(RuneId, SimulatedPath)>],
    errors: &mut Vec<ValidationError>,
) {
    let mut owners: HashMap<Cell, RuneId> = HashMap::new();

    for (rune, walk) in walks.iter().flatten() {
        let cells = if walk.completed() {
            interior(&walk.cells)
        } else {
            &walk.cells[1..]
        };

        for &cell in cells {
            match owners.insert(cell, *rune) {
                Some(other) if other != *rune => errors.push(ValidationError::PathCollision {
                    rune: *rune,
                    other,
                    position: cell,
                }),
                Some(_) => errors.push(ValidationError::SelfIntersection {
                    rune: *rune,
                    position: cell,
                }),
                None => {}
            }
        }
    }
}

/// Cells strictly between the first and the last.
fn interior(cells: &[Cell]) -> &[Cell] {
    if cells.len() <= 2 {
        &[]
    } else {
        &cells[1..cells.len() - 1]
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
