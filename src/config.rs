//! Configuration for frame rendering.

use crate::renderers::charset::CharSet;

#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Unicode arrows and borders, or plain ASCII.
    pub charset: CharSet,
    /// Draw column/row index rulers around the grid.
    pub show_coords: bool,
    /// Characters per grid cell. Rune ids wider than this are cut.
    pub cell_width: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            charset: CharSet::Unicode,
            show_coords: false,
            cell_width: 3,
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ascii(mut self, ascii: bool) -> Self {
        self.charset = if ascii {
            CharSet::Ascii
        } else {
            CharSet::Unicode
        };
        self
    }

    pub fn coords(mut self, show: bool) -> Self {
        self.show_coords = show;
        self
    }
}
