use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "kira-fastq-qc",
    version,
    about = "Per-read and aggregate QC metrics for a plain FASTQ file"
)]
pub struct Cli {
    pub input: PathBuf,

    #[arg(long, default_value_t = 1000)]
    pub max_reads: usize,

    #[arg(long = "homopolymer-min", default_value_t = 3)]
    pub homopolymer_min_length: usize,

    #[arg(short = 'k', long, default_value_t = 5)]
    pub kmer_k: usize,

    #[arg(long = "top-kmers", default_value_t = 10)]
    pub top_kmer_n: usize,

    /// Write the per-read table as CSV.
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Drop a truncated trailing record instead of failing.
    #[arg(long, default_value_t = false)]
    pub lenient: bool,

    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
