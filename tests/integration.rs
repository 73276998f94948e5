use felix::{FelixBuilder, FelixError, FelixSummary, felix};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::tempdir;
fn run(root: &Path, patterns: &[&str]) -> (String, String, FelixSummary) {
    let options = FelixBuilder::new(root)
        .patterns(patterns.iter().map(|p| p.to_string()).collect())
        .build();
    let mut out = Vec::new();
    let mut diag = Vec::new();
    let summary = felix(&options, &mut out, &mut diag).unwrap();
    (
        String::from_utf8(out).unwrap(),
        String::from_utf8(diag).unwrap(),
        summary,
    )
}
#[test]
fn integration_full_flow() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("notes.md"), "# Notes\nbody\n").unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/main.rs"), "fn main() {}\n").unwrap();
    fs::write(dir.path().join("src/blob.bin"), [1u8, 0, 2]).unwrap();
    let (out, diag, summary) = run(dir.path(), &["**/*.md", "src/*"]);
    assert_eq!(
        out,
        "\n===== notes.md =====\n# Notes\nbody\n\n===== src/main.rs =====\nfn main() {}\n"
    );
    assert_eq!(diag, "Skipping binary file: src/blob.bin\n");
    assert_eq!(summary.files_emitted, 2);
    assert_eq!(summary.binaries_skipped, 1);
}
#[test]
fn integration_pattern_order_wins_over_traversal_order() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "a\n").unwrap();
    fs::write(dir.path().join("b.txt"), "b\n").unwrap();
    let (out, _, _) = run(dir.path(), &["b.txt", "a.txt"]);
    assert_eq!(out, "\n===== b.txt =====\nb\n\n===== a.txt =====\na\n");
}
#[test]
fn integration_no_matches_is_silent() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "a\n").unwrap();
    let (out, diag, summary) = run(dir.path(), &["*.rs", "missing/**"]);
    assert!(out.is_empty());
    assert!(diag.is_empty());
    assert_eq!(summary, FelixSummary::default());
}
#[test]
fn integration_directories_are_skipped() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("d/e")).unwrap();
    fs::write(dir.path().join("d/e/f.txt"), "deep\n").unwrap();
    let (out, diag, summary) = run(dir.path(), &["**"]);
    assert_eq!(out, "\n===== d/e/f.txt =====\ndeep\n");
    assert!(diag.is_empty());
    assert_eq!(summary.directories_skipped, 2);
    assert_eq!(summary.files_emitted, 1);
}
#[test]
fn integration_bad_pattern_does_not_stop_the_run() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("ok.txt"), "fine\n").unwrap();
    let (out, diag, summary) = run(dir.path(), &["{unclosed", "ok.txt"]);
    assert!(diag.starts_with("Error matching pattern {unclosed: "));
    assert_eq!(out, "\n===== ok.txt =====\nfine\n");
    assert_eq!(summary.pattern_errors, 1);
}
#[test]
fn integration_output_file_is_not_read_back() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("in.txt"), "data\n").unwrap();
    let sink = dir.path().join("all.txt");
    fs::write(&sink, "").unwrap();
    let options = FelixBuilder::new(dir.path())
        .pattern("*.txt")
        .output(Some(sink))
        .build();
    let mut out = Vec::new();
    let mut diag = Vec::new();
    let summary = felix(&options, &mut out, &mut diag).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "\n===== in.txt =====\ndata\n");
    assert_eq!(summary.files_emitted, 1);
}
struct FailingSink;
impl Write for FailingSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::other("sink closed"))
    }
    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::other("sink closed"))
    }
}
/// Deletes `victim` as soon as its header reaches the sink, so the emitter cannot open it.
struct DeletingSink {
    written: Vec<u8>,
    header: String,
    victim: Option<PathBuf>,
}
impl Write for DeletingSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.written.extend_from_slice(buf);
        if String::from_utf8_lossy(&self.written).contains(&self.header) {
            if let Some(victim) = self.victim.take() {
                fs::remove_file(victim)?;
            }
        }
        Ok(buf.len())
    }
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
#[test]
fn integration_sink_write_failure_is_fatal() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "a\n").unwrap();
    let options = FelixBuilder::new(dir.path()).pattern("a.txt").build();
    let mut diag = Vec::new();
    let err = felix(&options, &mut FailingSink, &mut diag).unwrap_err();
    assert!(matches!(err, FelixError::Output(_)));
    assert!(diag.is_empty());
}
#[test]
fn integration_read_failure_is_reported_and_run_continues() {
    let dir = tempdir().unwrap();
    let gone = dir.path().join("gone.txt");
    fs::write(&gone, "never printed\n").unwrap();
    fs::write(dir.path().join("after.txt"), "still here\n").unwrap();
    let options = FelixBuilder::new(dir.path())
        .patterns(vec!["gone.txt".into(), "after.txt".into()])
        .build();
    let mut sink = DeletingSink {
        written: Vec::new(),
        header: "===== gone.txt =====".into(),
        victim: Some(gone),
    };
    let mut diag = Vec::new();
    let summary = felix(&options, &mut sink, &mut diag).unwrap();
    let diag = String::from_utf8(diag).unwrap();
    assert!(diag.starts_with("Error reading gone.txt: "));
    assert_eq!(
        String::from_utf8(sink.written).unwrap(),
        "\n===== gone.txt =====\n\n===== after.txt =====\nstill here\n"
    );
    assert_eq!(summary.read_errors, 1);
    assert_eq!(summary.files_emitted, 1);
}
