//! Renderer trait and text renderers.

pub mod canvas;
pub mod charset;
pub mod grid;

pub use grid::GridRenderer;

use crate::engine::Frame;
use crate::error::RenderError;
use crate::syntax::types::Puzzle;

/// Trait for frame renderers.
pub trait Renderer {
    /// Render a puzzle with the paths of one animation frame.
    fn render(&self, puzzle: &Puzzle, frame: &Frame) -> Result<String, RenderError>;
}
