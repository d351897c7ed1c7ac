//! runelink: path validation, metrics and frame tracing for grid
//! rune-connection puzzles.
//!
//! Public API: `check_solution()` and `render_frame()`; the modules below
//! expose each stage on its own.
//!
//! Data flows one way: text → `parsers` → `engine::simulate` →
//! `engine::validate` → (`engine::metrics`, `engine::trace`) → `renderers`.
//! `batch` composes parsing and validation over many cases; `cases` loads
//! them from disk.

pub mod batch;
pub mod cases;
pub mod config;
pub mod engine;
pub mod error;
pub mod level;
pub mod parsers;
pub mod renderers;
pub mod syntax;

#[cfg(feature = "wasm")]
pub mod wasm;

use serde::Serialize;

use crate::config::RenderConfig;
use crate::engine::{Metrics, build_trace, compute_metrics, validate};
use crate::error::{CheckError, ValidationError};
use crate::parsers::{parse_puzzle, parse_solution};
use crate::renderers::{GridRenderer, Renderer};

/// Everything known about one candidate solution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckReport {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
    /// `errors` as display strings, same order.
    pub messages: Vec<String>,
    pub metrics: Metrics,
    pub max_steps: usize,
    pub declared_channel_count: i64,
    pub path_count: usize,
}

/// Parse a puzzle and a solution, validate, and compute metrics.
///
/// `Err` only for text that cannot be parsed; geometric problems are
/// reported in the returned `CheckReport`.
pub fn check_solution(puzzle_src: &str, solution_src: &str) -> Result<CheckReport, CheckError> {
    let puzzle = parse_puzzle(puzzle_src)?;
    let solution = parse_solution(solution_src)?;

    let errors = validate(&puzzle, &solution);
    let messages = errors.iter().map(ToString::to_string).collect();
    let metrics = compute_metrics(&solution.paths);
    let max_steps = build_trace(&puzzle.grid, &solution.paths).max_steps();

    Ok(CheckReport {
        valid: errors.is_empty(),
        errors,
        messages,
        metrics,
        max_steps,
        declared_channel_count: solution.declared_channel_count,
        path_count: solution.paths.len(),
    })
}

/// Render animation frame `step` (clamped to the last frame) as text.
///
/// Grids too large to draw are refused with `CheckError::Render`.
pub fn render_frame(
    puzzle_src: &str,
    solution_src: &str,
    step: usize,
    config: &RenderConfig,
) -> Result<String, CheckError> {
    let puzzle = parse_puzzle(puzzle_src)?;
    let solution = parse_solution(solution_src)?;
    let frame = build_trace(&puzzle.grid, &solution.paths).frame(step);
    Ok(GridRenderer::new(config.clone()).render(&puzzle, &frame)?)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
