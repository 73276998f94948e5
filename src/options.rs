use serde::{Deserialize, Serialize};
use std::path::PathBuf;
pub const DEFAULT_PREFIX_LEN: usize = 800;
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryDetection {
    Simple,
    Accurate,
    None,
}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FelixOptions {
    pub root: PathBuf,
    pub patterns: Vec<String>,
    pub output: Option<PathBuf>,
    pub follow_links: bool,
    pub binary_detection: BinaryDetection,
    pub prefix_len: usize,
}
impl Default for FelixOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            patterns: Vec::new(),
            output: None,
            follow_links: false,
            binary_detection: BinaryDetection::Simple,
            prefix_len: DEFAULT_PREFIX_LEN,
        }
    }
}
#[derive(Debug, Default)]
pub struct FelixBuilder {
    options: FelixOptions,
}
impl FelixBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: FelixOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.options.patterns.push(pattern.into());
        self
    }
    pub fn patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.patterns = patterns;
        self
    }
    /// Path of the file the output sink writes to; it is never emitted into itself.
    pub fn output(mut self, path: Option<PathBuf>) -> Self {
        self.options.output = path;
        self
    }
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.options.follow_links = yes;
        self
    }
    pub fn binary_detection(mut self, method: BinaryDetection) -> Self {
        self.options.binary_detection = method;
        self
    }
    pub fn prefix_len(mut self, len: usize) -> Self {
        self.options.prefix_len = len;
        self
    }
    pub fn build(self) -> FelixOptions {
        self.options
    }
}
