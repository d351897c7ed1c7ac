//! Level encoding: write a rune layout back out as puzzle text.
//!
//! Output is `rows cols nDefs` followed by `id pos id pos` for each pair,
//! pairs by ascending id. `nDefs` is the endpoint count, twice the pair count.

use std::collections::BTreeMap;

use crate::error::LevelError;
use crate::syntax::types::{Cell, Puzzle, RuneId};

/// Encode a `cell → rune id` layout. Every id must appear exactly twice.
pub fn encode_level(
    rows: usize,
    cols: usize,
    runes: &BTreeMap<Cell, RuneId>,
) -> Result<String, LevelError> {
    if rows == 0 || cols == 0 {
        return Err(LevelError::InvalidDimensions { rows, cols });
    }
    if runes.is_empty() {
        return Err(LevelError::Empty);
    }

    let mut pairs: BTreeMap<RuneId, Vec<Cell>> = BTreeMap::new();
    for (&cell, &id) in runes {
        pairs.entry(id).or_default().push(cell);
    }
    if let Some((&id, cells)) = pairs.iter().find(|(_, cells)| cells.len() != 2) {
        return Err(LevelError::UnpairedRune {
            id,
            count: cells.len(),
        });
    }

    let mut out = format!("{} {} {}", rows, cols, runes.len());
    for (id, cells) in &pairs {
        for cell in cells {
            out.push_str(&format!(" {} {}", id, cell));
        }
    }
    Ok(out)
}

impl Puzzle {
    /// Encode this puzzle in level format.
    ///
    /// Fails on the same layouts `encode_level` rejects, including two runes
    /// defined on one cell.
    pub fn to_level_text(&self) -> Result<String, LevelError> {
        let layout = self.rune_map();
        // A rune overwritten by another id on the same cell is lost from the layout.
        if let Some(lost) = self
            .runes
            .iter()
            .find(|r| layout.get(&r.position) != Some(&r.id))
        {
            let count = layout.values().filter(|id| **id == lost.id).count();
            return Err(LevelError::UnpairedRune { id: lost.id, count });
        }
        encode_level(self.grid.rows, self.grid.cols, &layout)
    }
}

/// File name for a saved level: `.txt` is appended when missing.
pub fn level_filename(name: &str) -> String {
    let name = name.trim();
    let name = if name.is_empty() { "custom_level" } else { name };
    if name.ends_with(".txt") {
        name.to_string()
    } else {
        format!("{}.txt", name)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
