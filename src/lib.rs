//! # Felix
//!
//! `felix` is a recursive `cat`: it expands glob patterns (including recursive `**`
//! segments), skips files that look binary, and concatenates the text of every match to a
//! single writer, each file preceded by a `===== <path> =====` header.
//!
//! Output order follows the order of the patterns, then the order of matches within each
//! pattern. Problems with one pattern or one file are written to a diagnostics writer and
//! the run moves on.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use felix::{FelixBuilder, BinaryDetection, felix};
//! use std::io;
//!
//! let options = FelixBuilder::new(".")
//!     .pattern("**/*.md")
//!     .pattern("*.txt")
//!     .binary_detection(BinaryDetection::Simple)
//!     .build();
//!
//! let summary = felix(&options, &mut io::stdout(), &mut io::stderr())
//!     .expect("Failed to write output");
//! eprintln!("{} files", summary.files_emitted);
//! ```

mod detect;
mod emit;
mod engine;
mod error;
mod expand;
mod options;
mod types;

pub use detect::{classify, is_binary};
pub use emit::emit_file;
pub use engine::felix;
pub use error::FelixError;
pub use expand::{PatternExpander, expand_pattern};
pub use options::{BinaryDetection, DEFAULT_PREFIX_LEN, FelixBuilder, FelixOptions};
pub use types::{Diagnostic, FelixSummary, PatternMatch};
