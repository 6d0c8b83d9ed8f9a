//! Quick QC metrics for FASTQ reads.
//!
//! - Strict 4-line reader with a `max_reads` cap (plain text; gzip is rejected).
//! - Per-read metrics: length, GC and N fraction, mean Phred+33 quality,
//!   homopolymer runs, k-mer complexity.
//! - Corpus reductions: mean/median length, mean GC, mean quality and the most
//!   frequent k-mers.
//! - CSV export of the per-read table and a plain-text report.
//! - Optional `mmap` for input files; `parallel` computes per-read metrics with rayon.

pub mod error;
pub mod export;
pub mod kmer;
pub mod metrics;
pub mod pipeline;
pub mod policy;
pub mod reader;
pub mod record;
pub mod report;
pub mod summary;
pub mod table;

pub use crate::error::{FastqError, FormatError, IoContext, QcError, RecordLine};
pub use crate::kmer::{KmerCount, KmerInventory};
pub use crate::metrics::ReadMetrics;
pub use crate::pipeline::{Pipeline, QcReport};
pub use crate::policy::{MetricParams, QcConfig, ReaderOptions, TruncationPolicy};
pub use crate::reader::{FastqReader, Source};
pub use crate::record::ReadRecord;
pub use crate::summary::Summary;
pub use crate::table::{DatasetTable, ReadRow};
