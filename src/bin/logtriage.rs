use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;
use std::sync::Once;

use anyhow::Context;
use clap::Parser;
use logtriage::AnalyzerConfig;

fn init_parallelism() {
    static START: Once = Once::new();
    START.call_once(|| {
        let n = num_cpus::get();
        let _ = rayon::ThreadPoolBuilder::new().num_threads(n).build_global();
    });
}

#[derive(Parser, Debug)]
#[command(name = "logtriage", version, about = "Error triage for unstructured log dumps")]
struct Cli {
    /// Input files (`-` for stdin). May be repeated.
    #[arg(required = false)]
    input: Vec<String>,

    /// Error-detection pattern (case-insensitive regex). May be repeated;
    /// defaults to ERROR/FATAL/EXCEPTION/FAILED/CRITICAL/WARNING.
    #[arg(long = "pattern", short = 'p')]
    patterns: Vec<String>,

    /// Persist the analysis artifact into this directory and report its path.
    #[arg(long = "output-dir", short = 'o')]
    output_dir: Option<PathBuf>,

    /// Cosine similarity threshold for grouping error messages.
    #[arg(long = "similarity-threshold", default_value_t = 0.8)]
    similarity_threshold: f64,

    /// Maximum TF-IDF vocabulary size.
    #[arg(long = "max-vocabulary", default_value_t = 1000)]
    max_vocabulary: usize,

    /// Hourly error count a peak must exceed to be reported.
    #[arg(long = "peak-threshold", default_value_t = 10)]
    peak_threshold: usize,

    /// Pretty-print the result JSON (default when stdout is a tty).
    #[arg(long = "pretty", default_value_t = false)]
    pretty: bool,
}

fn read_all(paths: &[String]) -> io::Result<Vec<u8>> {
    let mut out = Vec::new();
    if paths.is_empty() {
        io::stdin().read_to_end(&mut out)?;
        return Ok(out);
    }
    for p in paths {
        if p == "-" {
            io::stdin().read_to_end(&mut out)?;
        } else {
            File::open(p)?.read_to_end(&mut out)?;
        }
        if !out.ends_with(b"\n") {
            out.push(b'\n');
        }
    }
    Ok(out)
}

fn main() -> anyhow::Result<()> {
    init_parallelism();
    let cli = Cli::parse();

    let mut cfg = AnalyzerConfig::default();
    if !cli.patterns.is_empty() {
        cfg.error_patterns = cli.patterns.clone();
    }
    cfg.similarity_threshold = cli.similarity_threshold;
    cfg.max_vocabulary = cli.max_vocabulary;
    cfg.peak_hour_threshold = cli.peak_threshold;
    if let Some(dir) = &cli.output_dir {
        cfg.output_dir = dir.clone();
    }

    let bytes = read_all(&cli.input).context("reading input")?;
    let mut result = logtriage::analyze_bytes(&bytes, &cfg)?;

    if cli.output_dir.is_some() {
        let path = logtriage::persist::save_results(&result, &cfg.output_dir)?;
        result.output_file = Some(path.display().to_string());
    }

    let json = if cli.pretty || atty::is(atty::Stream::Stdout) {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{json}");
    Ok(())
}
