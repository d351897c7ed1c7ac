//! Grid renderer: draws a puzzle and one animation frame as text.
//!
//! Rune cells show their id and are never painted over. Each cell a frame
//! path has entered shows the arrow of the entering move; a later path wins
//! a shared cell.

use std::collections::BTreeMap;

use super::Renderer;
use super::canvas::{Canvas, Rect};
use super::charset::BoxChars;
use crate::config::RenderConfig;
use crate::engine::Frame;
use crate::error::RenderError;
use crate::syntax::types::{Cell, Grid, Puzzle};

/// Largest canvas, in characters, a frame may occupy.
pub const MAX_CANVAS_CHARS: usize = 4_000_000;

pub struct GridRenderer {
    pub config: RenderConfig,
}

impl GridRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Border rectangle for `grid` at offset `(left, top)`, or an error when
    /// the canvas would exceed `MAX_CANVAS_CHARS`.
    fn border(&self, grid: Grid, left: usize, top: usize) -> Result<Rect, RenderError> {
        let too_large = RenderError::TooLarge {
            rows: grid.rows,
            cols: grid.cols,
            limit: MAX_CANVAS_CHARS,
        };
        let cw = self.config.cell_width.max(1);
        let width = grid.cols.checked_mul(cw).and_then(|w| w.checked_add(2));
        let height = grid.rows.checked_add(2);
        let (Some(width), Some(height)) = (width, height) else {
            return Err(too_large);
        };
        let area = left
            .checked_add(width)
            .zip(top.checked_add(height))
            .and_then(|(w, h)| w.checked_mul(h));
        if area.is_none_or(|chars| chars > MAX_CANVAS_CHARS) {
            return Err(too_large);
        }
        Ok(Rect::new(left, top, width, height))
    }
}

impl Renderer for GridRenderer {
    fn render(&self, puzzle: &Puzzle, frame: &Frame) -> Result<String, RenderError> {
        let grid = puzzle.grid;
        let bc = BoxChars::for_charset(self.config.charset);
        let cw = self.config.cell_width.max(1);

        let (left, top) = if self.config.show_coords {
            (grid.rows.saturating_sub(1).to_string().len() + 1, 1)
        } else {
            (0, 0)
        };
        let border = self.border(grid, left, top)?;
        let mut canvas = Canvas::new(border.right(), border.bottom());
        canvas.draw_box(border, &bc);

        if self.config.show_coords {
            for col in 0..grid.cols {
                canvas.write_centered(left + 1 + col * cw, 0, cw, &col.to_string());
            }
            for row in 0..grid.rows {
                canvas.write_str(0, top + 1 + row, &row.to_string());
            }
        }

        let mut contents: BTreeMap<Cell, String> = (0..grid.cell_count())
            .map(|cell| (cell, bc.empty.to_string()))
            .collect();
        let runes = puzzle.rune_map();
        for path in &frame.paths {
            for (cell, dir) in path.arrows() {
                if grid.contains(cell) && !runes.contains_key(&cell) {
                    contents.insert(cell, bc.arrow(dir).to_string());
                }
            }
        }
        for (&cell, id) in &runes {
            if grid.contains(cell) {
                contents.insert(cell, id.to_string());
            }
        }

        for (cell, text) in &contents {
            let x = left + 1 + grid.col(*cell) * cw;
            let y = top + 1 + grid.row(*cell);
            canvas.write_centered(x, y, cw, text);
        }

        Ok(canvas.render_to_string())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
