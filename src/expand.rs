//! Glob expansion relative to a root directory.
//!
//! A pattern is split into its leading literal segments, which name the directory to walk,
//! and the rest, which is matched against every walked entry. `*` and `?` stop at `/`,
//! while a `**` segment spans any number of directories.

use crate::error::FelixError;
use crate::options::FelixOptions;
use crate::types::PatternMatch;
use globset::{GlobBuilder, GlobMatcher};
use ignore::{DirEntry, WalkBuilder};
#[cfg(feature = "logging")]
use tracing;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

const GLOB_META: &[char] = &['*', '?', '[', ']', '{', '}', '\\'];

#[derive(Debug, PartialEq, Eq)]
struct SplitPattern {
    /// Literal leading directory, empty when the first segment has wildcards.
    base: String,
    /// The whole pattern with `.` and empty segments removed.
    glob: String,
    /// Segments left after `base`.
    rest: usize,
    recursive: bool,
    /// Segments after the last `**` segment, zero when there is none.
    tail: usize,
}

fn split_pattern(pattern: &str) -> SplitPattern {
    let absolute = pattern.starts_with('/');
    let lead = if absolute { "/" } else { "" };
    let segments: Vec<&str> = pattern
        .split('/')
        .filter(|s| !s.is_empty() && *s != ".")
        .collect();
    let literal = segments
        .iter()
        .take_while(|s| !s.contains(GLOB_META))
        .count();
    let base = if literal == 0 && !absolute {
        String::new()
    } else {
        format!("{}{}", lead, segments[..literal].join("/"))
    };
    let tail = segments
        .iter()
        .rposition(|s| s.contains("**"))
        .map_or(0, |last| segments.len() - last - 1);
    SplitPattern {
        base,
        glob: format!("{}{}", lead, segments.join("/")),
        rest: segments.len() - literal,
        recursive: segments[literal..].iter().any(|s| s.contains("**")),
        tail,
    }
}

fn join_display(base: &str, relative: &str) -> String {
    if base.is_empty() {
        relative.to_string()
    } else if base.ends_with('/') {
        format!("{}{}", base, relative)
    } else {
        format!("{}/{}", base, relative)
    }
}

fn to_slash(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

struct EntryMatcher {
    matcher: GlobMatcher,
    base_path: PathBuf,
    base: String,
}

impl EntryMatcher {
    fn check(&self, entry: &DirEntry) -> Option<PatternMatch> {
        if entry.depth() == 0 {
            return None;
        }
        let relative = entry
            .path()
            .strip_prefix(&self.base_path)
            .unwrap_or(entry.path());
        let display = join_display(&self.base, &to_slash(relative));
        self.matcher.is_match(&display).then(|| PatternMatch {
            path: entry.path().to_path_buf(),
            display,
        })
    }
}

/// Runs the whole walk and groups matches by the directory the last `**` stood for.
///
/// Groups follow the walk's preorder of directories, so the files directly inside a
/// directory come before anything in its subdirectories.
fn collect_by_anchor(
    walk: ignore::Walk,
    entries: &EntryMatcher,
    tail: usize,
) -> Vec<Result<PatternMatch, FelixError>> {
    let mut visited: HashMap<PathBuf, usize> = HashMap::new();
    let mut keyed = Vec::new();
    for (position, result) in walk.enumerate() {
        let entry = match result {
            Ok(entry) => entry,
            Err(e) => {
                keyed.push((position, Err(FelixError::Walk(e.to_string()))));
                continue;
            }
        };
        if entry.file_type().is_some_and(|t| t.is_dir()) {
            visited.insert(entry.path().to_path_buf(), position);
        }
        if let Some(found) = entries.check(&entry) {
            let anchor = entry
                .path()
                .ancestors()
                .nth(tail)
                .and_then(|dir| visited.get(dir))
                .copied()
                .unwrap_or(position);
            keyed.push((anchor, Ok(found)));
        }
    }
    keyed.sort_by_key(|(anchor, _)| *anchor);
    keyed.into_iter().map(|(_, result)| result).collect()
}

enum State {
    Literal(Option<PatternMatch>),
    Walk {
        inner: ignore::Walk,
        entries: EntryMatcher,
    },
    Grouped(std::vec::IntoIter<Result<PatternMatch, FelixError>>),
    Done,
}

/// Iterator over the paths one pattern matches, files and directories alike.
///
/// Entries come out depth-first with each directory's children sorted by name. When a
/// `**` segment is followed by more segments, the matches under each directory `**` stands
/// for are yielded before those of its subdirectories. A walk failure is yielded as an
/// `Err` item and the walk goes on.
pub struct PatternExpander {
    state: State,
}

impl PatternExpander {
    /// Compiles `pattern` and prepares the walk under `root`.
    ///
    /// # Errors
    ///
    /// Returns [`FelixError::Pattern`] when the pattern is not valid glob syntax.
    pub fn new(root: &Path, pattern: &str, options: &FelixOptions) -> Result<Self, FelixError> {
        let split = split_pattern(pattern);
        if split.rest == 0 {
            let display = if split.glob.is_empty() {
                ".".to_string()
            } else {
                split.glob
            };
            let path = root.join(&display);
            let found = path.exists().then(|| PatternMatch { path, display });
            return Ok(Self {
                state: State::Literal(found),
            });
        }
        let matcher = GlobBuilder::new(&split.glob)
            .literal_separator(true)
            .backslash_escape(true)
            .build()
            .map_err(|e| FelixError::Pattern {
                pattern: pattern.to_string(),
                message: e.kind().to_string(),
            })?
            .compile_matcher();
        let base_path = if split.base.is_empty() {
            root.to_path_buf()
        } else {
            root.join(&split.base)
        };
        if !base_path.is_dir() {
            #[cfg(feature = "logging")]
            tracing::debug!("Base directory {} does not exist", base_path.display());
            return Ok(Self { state: State::Done });
        }
        let mut builder = WalkBuilder::new(&base_path);
        builder
            .standard_filters(false)
            .follow_links(options.follow_links)
            .max_depth(if split.recursive { None } else { Some(split.rest) })
            .sort_by_file_name(|a, b| a.cmp(b));
        let entries = EntryMatcher {
            matcher,
            base_path,
            base: split.base,
        };
        let state = if split.tail > 0 {
            State::Grouped(collect_by_anchor(builder.build(), &entries, split.tail).into_iter())
        } else {
            State::Walk {
                inner: builder.build(),
                entries,
            }
        };
        Ok(Self { state })
    }
}

impl Iterator for PatternExpander {
    type Item = Result<PatternMatch, FelixError>;
    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.state {
            State::Literal(found) => found.take().map(Ok),
            State::Grouped(results) => results.next(),
            State::Done => None,
            State::Walk { inner, entries } => loop {
                let entry = match inner.next()? {
                    Ok(entry) => entry,
                    Err(e) => return Some(Err(FelixError::Walk(e.to_string()))),
                };
                if let Some(found) = entries.check(&entry) {
                    return Some(Ok(found));
                }
            },
        }
    }
}

/// Expands one pattern and collects every match, stopping at the first walk error.
pub fn expand_pattern(
    root: &Path,
    pattern: &str,
    options: &FelixOptions,
) -> Result<Vec<PatternMatch>, FelixError> {
    PatternExpander::new(root, pattern, options)?.collect()
}
