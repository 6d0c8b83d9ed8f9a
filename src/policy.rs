use crate::error::QcError;

/// What to do when the stream ends inside a record (header present, later lines missing).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TruncationPolicy {
    /// Fail with `FormatError::TruncatedRecord` (strict, default).
    Error,
    /// Drop the partial record with a warning and stop reading.
    Drop,
}

#[derive(Debug, Clone)]
pub struct ReaderOptions {
    /// Upper bound on emitted records; bounds peak memory of a run.
    pub max_reads: usize,
    pub truncation: TruncationPolicy,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            max_reads: 1000,
            truncation: TruncationPolicy::Error,
        }
    }
}

/// Parameters the per-read metrics depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricParams {
    pub homopolymer_min_length: usize,
    pub kmer_k: usize,
}

impl Default for MetricParams {
    fn default() -> Self {
        Self {
            homopolymer_min_length: 3,
            kmer_k: 5,
        }
    }
}

#[derive(Debug, Clone)]
pub struct QcConfig {
    pub reader: ReaderOptions,
    pub metrics: MetricParams,
    pub top_kmer_n: usize,
}

impl Default for QcConfig {
    fn default() -> Self {
        Self {
            reader: ReaderOptions::default(),
            metrics: MetricParams::default(),
            top_kmer_n: 10,
        }
    }
}

impl QcConfig {
    pub fn validate(&self) -> Result<(), QcError> {
        if self.reader.max_reads == 0 {
            return Err(QcError::InvalidConfig("max_reads must be >= 1".into()));
        }
        if self.metrics.homopolymer_min_length == 0 {
            return Err(QcError::InvalidConfig(
                "homopolymer_min_length must be >= 1".into(),
            ));
        }
        if self.metrics.kmer_k == 0 {
            return Err(QcError::InvalidConfig("kmer_k must be >= 1".into()));
        }
        Ok(())
    }
}
