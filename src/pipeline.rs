use crate::error::QcError;
use crate::kmer::{KmerCount, KmerInventory};
use crate::policy::QcConfig;
use crate::reader::FastqReader;
use crate::record::ReadRecord;
use crate::summary::Summary;
use crate::table::DatasetTable;

use std::io::BufRead;
use std::path::Path;

/// Everything a run produces.
#[derive(Debug, Clone)]
pub struct QcReport {
    pub table: DatasetTable,
    pub summary: Summary,
    pub top_kmers: Vec<KmerCount>,
}

/// read -> per-read metrics -> summary and k-mer ranking.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: QcConfig,
}

impl Pipeline {
    pub fn new(config: QcConfig) -> Result<Self, QcError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &QcConfig {
        &self.config
    }

    pub fn run_path<P: AsRef<Path>>(&self, path: P) -> Result<QcReport, QcError> {
        let reader = FastqReader::from_path(path, self.config.reader.clone())?;
        self.run(reader)
    }

    pub fn run_bufread<R: BufRead + Send + 'static>(&self, input: R) -> Result<QcReport, QcError> {
        self.run(FastqReader::from_bufread(input, self.config.reader.clone()))
    }

    fn run(&self, reader: FastqReader) -> Result<QcReport, QcError> {
        let records = reader.read_all()?;
        log::debug!("parsed {} records", records.len());
        self.analyze(records)
    }

    /// Metrics and reductions over already parsed records.
    pub fn analyze(&self, records: Vec<ReadRecord>) -> Result<QcReport, QcError> {
        let table = DatasetTable::build(records, self.config.metrics);
        log::debug!("computed metrics for {} reads", table.len());

        let summary = Summary::from_table(&table)?;
        let top_kmers =
            KmerInventory::from_table(&table, self.config.metrics.kmer_k)?.top(self.config.top_kmer_n);

        log::info!(
            "qc done: reads={} mean_len={:.2} gc={:.2}% mean_q={:.2}",
            summary.total_reads,
            summary.mean_length,
            summary.overall_gc_percent(),
            summary.mean_quality
        );
        Ok(QcReport {
            table,
            summary,
            top_kmers,
        })
    }
}
