use crate::detect::is_binary;
use crate::emit::emit_file;
use crate::error::FelixError;
use crate::expand::PatternExpander;
use crate::options::FelixOptions;
use crate::types::{Diagnostic, FelixSummary, PatternMatch};
use std::fs;
use std::io::Write;
use std::path::Path;
#[cfg(feature = "logging")]
use tracing;
fn report<D: Write>(diag: &mut D, diagnostic: Diagnostic) {
    #[cfg(feature = "logging")]
    tracing::debug!(?diagnostic, "reported");
    let _ = writeln!(diag, "{}", diagnostic);
}
fn same_file(path: &Path, sink: Option<&Path>) -> bool {
    match sink {
        Some(sink) => fs::canonicalize(path).is_ok_and(|p| p == sink),
        None => false,
    }
}
fn process_match<W: Write, D: Write>(
    found: &PatternMatch,
    options: &FelixOptions,
    sink: Option<&Path>,
    out: &mut W,
    diag: &mut D,
    summary: &mut FelixSummary,
) -> Result<(), FelixError> {
    let metadata = match fs::metadata(&found.path) {
        Ok(metadata) => metadata,
        Err(_e) => {
            #[cfg(feature = "logging")]
            tracing::debug!("Cannot stat {}: {}", found.display, _e);
            return Ok(());
        }
    };
    if metadata.is_dir() {
        summary.directories_skipped += 1;
        return Ok(());
    }
    if same_file(&found.path, sink) {
        #[cfg(feature = "logging")]
        tracing::debug!("Not emitting output file {} into itself", found.display);
        return Ok(());
    }
    if is_binary(&found.path, options.binary_detection, options.prefix_len) {
        summary.binaries_skipped += 1;
        report(
            diag,
            Diagnostic::SkippedBinary {
                path: found.display.clone(),
            },
        );
        return Ok(());
    }
    match emit_file(out, &found.path, &found.display) {
        Ok(_lines) => {
            #[cfg(feature = "logging")]
            tracing::debug!("Emitted {} ({} lines)", found.display, _lines);
            summary.files_emitted += 1;
            Ok(())
        }
        Err(e @ FelixError::Output(_)) => Err(e),
        Err(e) => {
            summary.read_errors += 1;
            report(
                diag,
                Diagnostic::ReadFailed {
                    path: found.display.clone(),
                    error: e.cause(),
                },
            );
            Ok(())
        }
    }
}
/// Runs the whole pipeline: expands every pattern in order and writes each matched text
/// file to `out`, sending diagnostics to `diag`.
///
/// Pattern, walk and per-file failures are reported to `diag` and counted in the summary.
/// Only a failure to write to `out` stops the run.
pub fn felix<W: Write, D: Write>(
    options: &FelixOptions,
    out: &mut W,
    diag: &mut D,
) -> Result<FelixSummary, FelixError> {
    #[cfg(feature = "logging")]
    tracing::debug!(
        "Starting felix with root: {} ({} patterns)",
        options.root.display(),
        options.patterns.len()
    );
    let sink = options
        .output
        .as_ref()
        .and_then(|p| fs::canonicalize(p).ok());
    let mut summary = FelixSummary::default();
    for pattern in &options.patterns {
        let expander = match PatternExpander::new(&options.root, pattern, options) {
            Ok(expander) => expander,
            Err(e) => {
                summary.pattern_errors += 1;
                report(
                    diag,
                    Diagnostic::PatternFailed {
                        pattern: pattern.clone(),
                        error: e.cause(),
                    },
                );
                continue;
            }
        };
        for result in expander {
            match result {
                Ok(found) => {
                    process_match(&found, options, sink.as_deref(), out, diag, &mut summary)?
                }
                Err(e) => {
                    summary.pattern_errors += 1;
                    report(
                        diag,
                        Diagnostic::PatternFailed {
                            pattern: pattern.clone(),
                            error: e.cause(),
                        },
                    );
                }
            }
        }
    }
    out.flush().map_err(FelixError::Output)?;
    Ok(summary)
}
