//! Batch comparator: validate many candidate solutions and compare each one
//! against its reference answer.
//!
//! Reference comparison is literal: per origin cell, the space-joined
//! direction string must match exactly. A different but equally valid
//! routing is a FAIL.

use std::collections::BTreeMap;
use std::fmt;
use std::time::{Duration, Instant};

use serde::{Serialize, Serializer};
use tracing::{info, warn};

use crate::engine::validate;
use crate::parsers::{parse_puzzle, parse_solution};
use crate::syntax::types::{Cell, Solution};

// ─── Inputs ──────────────────────────────────────────────────────────────────

/// One case to judge.
#[derive(Debug, Clone)]
pub struct BatchCase {
    pub id: String,
    pub puzzle: String,
    /// Candidate output, or the error that prevented producing it.
    pub candidate: Result<String, String>,
    /// Reference output. Blank text counts as absent.
    pub expected: Option<String>,
}

impl BatchCase {
    pub fn new(
        id: impl Into<String>,
        puzzle: impl Into<String>,
        candidate: impl Into<String>,
        expected: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            puzzle: puzzle.into(),
            candidate: Ok(candidate.into()),
            expected,
        }
    }

    /// A case whose candidate could not be obtained.
    pub fn failed(id: impl Into<String>, puzzle: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            puzzle: puzzle.into(),
            candidate: Err(error.into()),
            expected: None,
        }
    }
}

// ─── Outcomes ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Pass,
    Fail,
    Error,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Verdict::Pass => "PASS",
            Verdict::Fail => "FAIL",
            Verdict::Error => "ERROR",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseOutcome {
    pub case_id: String,
    pub verdict: Verdict,
    #[serde(rename = "duration_ms", serialize_with = "serialize_millis")]
    pub duration: Duration,
    pub message: String,
}

impl CaseOutcome {
    /// Duration as displayed, e.g. `"12ms"`.
    pub fn duration_hint(&self) -> String {
        format!("{}ms", self.duration.as_millis())
    }
}

fn serialize_millis<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(d.as_millis() as u64)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchReport {
    pub outcomes: Vec<CaseOutcome>,
    pub passed: usize,
    /// FAIL and ERROR cases together.
    pub failed: usize,
}

impl BatchReport {
    pub fn summary(&self) -> String {
        format!("Completed: {} Passed, {} Failed.", self.passed, self.failed)
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

// ─── Comparison ──────────────────────────────────────────────────────────────

/// Judge every case in order. A failing case never stops the batch.
pub fn compare_all(cases: &[BatchCase]) -> BatchReport {
    let outcomes: Vec<CaseOutcome> = cases.iter().map(compare_case).collect();
    let passed = outcomes
        .iter()
        .filter(|o| o.verdict == Verdict::Pass)
        .count();
    let failed = outcomes.len() - passed;
    BatchReport {
        outcomes,
        passed,
        failed,
    }
}

/// Judge one case.
pub fn compare_case(case: &BatchCase) -> CaseOutcome {
    let started = Instant::now();
    let (verdict, message) = match judge(case) {
        Ok((verdict, message)) => (verdict, message),
        Err(error) => (Verdict::Error, first_line(&error)),
    };
    let duration = started.elapsed();

    match verdict {
        Verdict::Pass => info!(case = %case.id, "PASS"),
        _ => warn!(case = %case.id, %verdict, %message, "case did not pass"),
    }

    CaseOutcome {
        case_id: case.id.clone(),
        verdict,
        duration,
        message,
    }
}

fn judge(case: &BatchCase) -> Result<(Verdict, String), String> {
    let output = case.candidate.as_deref().map_err(|e| e.to_string())?;
    let puzzle = parse_puzzle(&case.puzzle).map_err(|e| e.to_string())?;
    let candidate = parse_solution(output).map_err(|e| e.to_string())?;

    let errors = validate(&puzzle, &candidate);
    if let Some(first) = errors.first() {
        return Ok((Verdict::Fail, first.to_string()));
    }

    let Some(expected_text) = case.expected.as_deref().filter(|t| !t.trim().is_empty()) else {
        return Ok((Verdict::Pass, "Valid (No expected output)".to_string()));
    };
    let expected = parse_solution(expected_text).map_err(|e| format!("expected output: {}", e))?;

    if candidate.paths.len() != expected.paths.len() {
        return Ok((
            Verdict::Fail,
            format!(
                "Count mismatch: Got {}, Expected {}",
                candidate.paths.len(),
                expected.paths.len()
            ),
        ));
    }

    let want = routes_by_origin(&expected);
    let mismatch = routes_by_origin(&candidate)
        .iter()
        .any(|(origin, route)| want.get(origin) != Some(route));
    if mismatch {
        return Ok((
            Verdict::Fail,
            "Valid paths, but mismatch with expected output".to_string(),
        ));
    }

    Ok((Verdict::Pass, "All paths valid".to_string()))
}

/// Origin → space-joined directions. A repeated origin keeps its last route.
fn routes_by_origin(solution: &Solution) -> BTreeMap<Cell, String> {
    solution
        .paths
        .iter()
        .map(|p| (p.origin, p.direction_string()))
        .collect()
}

fn first_line(text: &str) -> String {
    text.lines().next().unwrap_or_default().to_string()
}

// ─── Tests ───────────────────────────────────────────────────────────────────
