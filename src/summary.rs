use crate::error::QcError;
use crate::table::DatasetTable;

/// Corpus-level reduction over a populated [`DatasetTable`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub total_reads: usize,
    pub mean_length: f64,
    pub median_length: f64,
    /// Unweighted mean of per-read GC fractions, in [0, 1].
    pub overall_gc: f64,
    pub mean_quality: f64,
}

impl Summary {
    pub fn from_table(table: &DatasetTable) -> Result<Self, QcError> {
        if table.is_empty() {
            return Err(QcError::EmptyDataset);
        }
        let n = table.len() as f64;
        let lengths: Vec<usize> = table.rows().iter().map(|r| r.metrics.length).collect();
        let length_sum: usize = lengths.iter().sum();
        let gc_sum: f64 = table.rows().iter().map(|r| r.metrics.gc_content).sum();
        let q_sum: f64 = table.rows().iter().map(|r| r.metrics.mean_q).sum();

        Ok(Self {
            total_reads: table.len(),
            mean_length: length_sum as f64 / n,
            median_length: median(lengths)?,
            overall_gc: gc_sum / n,
            mean_quality: q_sum / n,
        })
    }

    pub fn overall_gc_percent(&self) -> f64 {
        self.overall_gc * 100.0
    }
}

/// Median of `values`; the two middle values are averaged for an even count.
pub fn median(mut values: Vec<usize>) -> Result<f64, QcError> {
    if values.is_empty() {
        return Err(QcError::EmptyDataset);
    }
    values.sort_unstable();
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        Ok((values[mid - 1] as f64 + values[mid] as f64) / 2.0)
    } else {
        Ok(values[mid] as f64)
    }
}
