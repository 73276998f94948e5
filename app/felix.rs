//! Command-line interface for felix.
//!
//! Expands the given glob patterns under the current directory and prints the text of
//! every matched file, skipping binaries, to stdout or to the file named by `-o`.

use clap::{CommandFactory, Parser};
use felix::{
    BinaryDetection, DEFAULT_PREFIX_LEN, FelixBuilder, FelixError, FelixOptions, FelixSummary,
    felix,
};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::exit;

/// A recursive cat
#[derive(Parser)]
#[command(name = "felix", version, about, long_about = None)]
struct Cli {
    /// Glob patterns to expand (e.g. **/*.md *.txt)
    patterns: Vec<String>,

    /// Redirect output to a file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Binary detection strategy
    #[arg(long, default_value = "simple", value_parser = parse_binary_detection)]
    binary_detection: BinaryDetection,

    /// Number of leading bytes inspected for binary detection
    #[arg(long, default_value_t = DEFAULT_PREFIX_LEN)]
    prefix_len: usize,

    /// Follow symlinks while walking
    #[arg(short = 'L', long)]
    follow_links: bool,

    /// Print a JSON summary of the run to stderr
    #[arg(long)]
    stats: bool,
}

/// Parse string into BinaryDetection enum.
fn parse_binary_detection(s: &str) -> Result<BinaryDetection, String> {
    match s {
        "simple" => Ok(BinaryDetection::Simple),
        "accurate" => Ok(BinaryDetection::Accurate),
        "none" => Ok(BinaryDetection::None),
        _ => Err(format!("invalid binary detection method: {}", s)),
    }
}

impl Cli {
    fn into_options(self) -> (FelixOptions, bool) {
        let options = FelixBuilder::new(".")
            .patterns(self.patterns)
            .output(self.output)
            .follow_links(self.follow_links)
            .binary_detection(self.binary_detection)
            .prefix_len(self.prefix_len)
            .build();
        (options, self.stats)
    }
}

#[cfg(feature = "logging")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_env("FELIX_LOG").unwrap_or_else(|_| EnvFilter::new("felix=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn print_usage() {
    println!("Usage: felix [options] <pattern1> [<pattern2> ...]");
    println!("Example: felix -o all.txt **/*.md *.txt");
    println!();
    println!("{}", Cli::command().render_help());
}

fn main() {
    #[cfg(feature = "logging")]
    init_tracing();

    let cli = Cli::parse();
    if cli.patterns.is_empty() {
        print_usage();
        exit(1);
    }
    let (options, stats) = cli.into_options();

    let result = match &options.output {
        Some(path) => {
            let file = File::create(path).unwrap_or_else(|e| {
                eprintln!("Error creating {}: {}", path.display(), e);
                exit(1);
            });
            run(&options, BufWriter::new(file))
        }
        None => run(&options, BufWriter::new(io::stdout().lock())),
    };

    match result {
        Ok(summary) => {
            if stats {
                print_stats(&summary);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}

fn run<W: Write>(options: &FelixOptions, mut out: W) -> Result<FelixSummary, FelixError> {
    let stderr = io::stderr();
    let mut diag = stderr.lock();
    felix(options, &mut out, &mut diag)
}

fn print_stats(summary: &FelixSummary) {
    let json = serde_json::to_string(summary).unwrap_or_else(|e| {
        eprintln!("JSON serialization error: {}", e);
        exit(1);
    });
    eprintln!("{}", json);
}
