//! WASM bindings for runelink.
//!
//! Exposes `checkSolution` and `renderFrame` to JavaScript via wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::config::RenderConfig;

/// Validate a solution and compute metrics. Returns the report as JSON.
#[wasm_bindgen(js_name = "checkSolution")]
pub fn check_solution(puzzle: &str, solution: &str) -> Result<String, JsError> {
    let report = crate::check_solution(puzzle, solution).map_err(|e| JsError::new(&e.to_string()))?;
    serde_json::to_string(&report).map_err(|e| JsError::new(&e.to_string()))
}

/// Render animation frame `step` as text.
///
/// - `unicode`: true for Unicode arrows and borders, false for plain ASCII
#[wasm_bindgen(js_name = "renderFrame")]
pub fn render_frame(
    puzzle: &str,
    solution: &str,
    step: usize,
    unicode: bool,
) -> Result<String, JsError> {
    let config = RenderConfig::new().ascii(!unicode);
    crate::render_frame(puzzle, solution, step, &config).map_err(|e| JsError::new(&e.to_string()))
}
