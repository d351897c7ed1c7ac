//! Route quality metrics: length, turns, and optimality against the
//! Manhattan lower bound.

use std::fmt;

use serde::Serialize;

use crate::syntax::types::Path;

// ─── OptimalityTier ──────────────────────────────────────────────────────────

/// Presentation bucket for the optimality ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OptimalityTier {
    Optimal,
    Good,
    Okay,
    Suboptimal,
}

impl OptimalityTier {
    /// Bucket a ratio as displayed, i.e. after rounding to two decimals.
    pub fn for_ratio(ratio: f64) -> Self {
        let shown = round2(ratio);
        if shown <= 1.0 {
            Self::Optimal
        } else if shown < 1.2 {
            Self::Good
        } else if shown < 1.5 {
            Self::Okay
        } else {
            Self::Suboptimal
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Optimal => "optimal",
            Self::Good => "good",
            Self::Okay => "okay",
            Self::Suboptimal => "suboptimal",
        }
    }
}

impl fmt::Display for OptimalityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

// ─── Metrics ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metrics {
    pub total_length: usize,
    pub total_turns: usize,
    pub total_manhattan: u64,
    /// `total_length / total_manhattan`; `None` when the bound is zero.
    pub optimality_ratio: Option<f64>,
}

impl Metrics {
    pub fn tier(&self) -> Option<OptimalityTier> {
        self.optimality_ratio.map(OptimalityTier::for_ratio)
    }

    /// Ratio as shown to users: `"1.25x"`, or `"-"` when not applicable.
    pub fn ratio_display(&self) -> String {
        match self.optimality_ratio {
            Some(r) => format!("{:.2}x", r),
            None => "-".to_string(),
        }
    }
}

/// Compute metrics over all paths, valid or not.
///
/// The Manhattan term uses the arithmetic end of each walk (all moves applied,
/// bounds ignored), not the validated end cell.
pub fn compute_metrics(paths: &[Path]) -> Metrics {
    let mut total_length = 0;
    let mut total_turns = 0;
    let mut total_manhattan = 0u64;

    for path in paths {
        total_length += path.directions.len();
        total_turns += path
            .directions
            .windows(2)
            .filter(|pair| pair[0] != pair[1])
            .count();

        let (dr, dc) = path
            .directions
            .iter()
            .fold((0i64, 0i64), |(r, c), dir| {
                let (ddr, ddc) = dir.delta();
                (r + ddr, c + ddc)
            });
        total_manhattan += dr.unsigned_abs() + dc.unsigned_abs();
    }

    let optimality_ratio =
        (total_manhattan > 0).then(|| total_length as f64 / total_manhattan as f64);

    Metrics {
        total_length,
        total_turns,
        total_manhattan,
        optimality_ratio,
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
