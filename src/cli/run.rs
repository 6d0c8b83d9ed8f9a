use crate::cli::args::Cli;
use anyhow::{Context, Result, bail};
use clap::Parser;
use kira_fastq_qc::{
    MetricParams, Pipeline, QcConfig, ReaderOptions, TruncationPolicy, export, report,
};
use std::io::{self, Write};

pub fn entry() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(cli)
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

fn run(cli: Cli) -> Result<()> {
    if !cli.input.is_file() {
        bail!("input file not found: {}", cli.input.display());
    }

    let config = QcConfig {
        reader: ReaderOptions {
            max_reads: cli.max_reads,
            truncation: if cli.lenient {
                TruncationPolicy::Drop
            } else {
                TruncationPolicy::Error
            },
        },
        metrics: MetricParams {
            homopolymer_min_length: cli.homopolymer_min_length,
            kmer_k: cli.kmer_k,
        },
        top_kmer_n: cli.top_kmer_n,
    };
    let pipeline = Pipeline::new(config)?;

    let output = pipeline
        .run_path(&cli.input)
        .with_context(|| format!("failed to analyze {}", cli.input.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::write_text(&output, &mut out).context("failed to write report")?;
    out.flush()?;

    if let Some(path) = &cli.csv {
        export::write_csv_path(&output.table, path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        log::info!("table written to {}", path.display());
    }
    Ok(())
}
