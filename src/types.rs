use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// A single path produced by expanding a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatch {
    /// The path used to open the file, joined onto the walk root.
    pub path: PathBuf,
    /// The pattern-relative path with `/` separators, as shown in headers.
    pub display: String,
}

/// A non-fatal problem reported while running the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The pattern could not be compiled, or walking its base directory failed.
    PatternFailed { pattern: String, error: String },
    /// A matched file could not be opened or read while emitting it.
    ReadFailed { path: String, error: String },
    /// A matched file was classified as binary and left out of the output.
    SkippedBinary { path: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::PatternFailed { pattern, error } => {
                write!(f, "Error matching pattern {}: {}", pattern, error)
            }
            Diagnostic::ReadFailed { path, error } => write!(f, "Error reading {}: {}", path, error),
            Diagnostic::SkippedBinary { path } => write!(f, "Skipping binary file: {}", path),
        }
    }
}

/// Counters for one run.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FelixSummary {
    /// Files copied to the sink in full.
    pub files_emitted: usize,
    pub binaries_skipped: usize,
    pub directories_skipped: usize,
    pub pattern_errors: usize,
    pub read_errors: usize,
}
