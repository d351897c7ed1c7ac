//! Test-case discovery on disk for batch runs.
//!
//! Inputs live in one directory, reference outputs in another. The output
//! for `input07.txt` is `output07.txt`: every `input` in the name becomes
//! `output`. Candidate outputs use the same naming in their own directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use regex::Regex;
use tracing::debug;

use crate::batch::BatchCase;

#[derive(Debug, Clone)]
pub struct CaseSource {
    pub inputs: PathBuf,
    pub outputs: PathBuf,
    /// Only case names matching this pattern are listed.
    pub filter: Option<Regex>,
}

impl CaseSource {
    pub fn new(inputs: impl Into<PathBuf>, outputs: impl Into<PathBuf>) -> Self {
        Self {
            inputs: inputs.into(),
            outputs: outputs.into(),
            filter: None,
        }
    }

    pub fn with_filter(mut self, filter: Regex) -> Self {
        self.filter = Some(filter);
        self
    }

    /// `.txt` files in the input directory, sorted by name.
    pub fn list(&self) -> io::Result<Vec<String>> {
        let mut names: Vec<String> = fs::read_dir(&self.inputs)?
            .flatten()
            .filter(|entry| entry.path().is_file())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| name.ends_with(".txt"))
            .filter(|name| self.filter.as_ref().is_none_or(|re| re.is_match(name)))
            .collect();
        names.sort();
        debug!(count = names.len(), dir = %self.inputs.display(), "listed cases");
        Ok(names)
    }

    /// Build the batch case for `name`, reading the candidate output from
    /// `candidates`. A missing reference output is not an error; an
    /// unreadable input or candidate makes the case an ERROR.
    pub fn load(&self, name: &str, candidates: &Path) -> BatchCase {
        let puzzle = match fs::read_to_string(self.inputs.join(name)) {
            Ok(text) => text,
            Err(e) => return BatchCase::failed(name, "", format!("cannot read input: {}", e)),
        };

        let output_name = output_name(name);
        let expected = fs::read_to_string(self.outputs.join(&output_name)).ok();

        match fs::read_to_string(candidates.join(&output_name)) {
            Ok(candidate) => BatchCase::new(name, puzzle, candidate, expected),
            Err(e) => BatchCase::failed(
                name,
                puzzle,
                format!("cannot read candidate output {}: {}", output_name, e),
            ),
        }
    }
}

/// Output file name for an input file name.
pub fn output_name(input_name: &str) -> String {
    input_name.replace("input", "output")
}

// ─── Tests ───────────────────────────────────────────────────────────────────
