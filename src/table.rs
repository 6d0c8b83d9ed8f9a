use crate::metrics::ReadMetrics;
use crate::policy::MetricParams;
use crate::record::ReadRecord;

#[derive(Debug, Clone, PartialEq)]
pub struct ReadRow {
    pub record: ReadRecord,
    pub metrics: ReadMetrics,
}

/// Reads in file order, each with its metrics attached.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatasetTable {
    rows: Vec<ReadRow>,
    params: MetricParams,
}

impl DatasetTable {
    /// Compute metrics for every record. Row order is record order.
    pub fn build(records: Vec<ReadRecord>, params: MetricParams) -> Self {
        let rows = compute_rows(records, &params);
        Self { rows, params }
    }

    pub fn rows(&self) -> &[ReadRow] {
        &self.rows
    }

    pub fn params(&self) -> MetricParams {
        self.params
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn sequences(&self) -> impl Iterator<Item = &[u8]> {
        self.rows.iter().map(|r| r.record.seq.as_slice())
    }
}

impl<'a> IntoIterator for &'a DatasetTable {
    type Item = &'a ReadRow;
    type IntoIter = std::slice::Iter<'a, ReadRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[cfg(not(feature = "parallel"))]
fn compute_rows(records: Vec<ReadRecord>, params: &MetricParams) -> Vec<ReadRow> {
    records
        .into_iter()
        .map(|record| {
            let metrics = ReadMetrics::compute(&record, params);
            ReadRow { record, metrics }
        })
        .collect()
}

#[cfg(feature = "parallel")]
fn compute_rows(records: Vec<ReadRecord>, params: &MetricParams) -> Vec<ReadRow> {
    use rayon::prelude::*;

    // indexed collect keeps input order
    records
        .into_par_iter()
        .map(|record| {
            let metrics = ReadMetrics::compute(&record, params);
            ReadRow { record, metrics }
        })
        .collect()
}

#[cfg(all(test, feature = "parallel"))]
mod tests {
    use super::*;

    #[test]
    fn parallel_rows_match_serial_order() {
        let records: Vec<ReadRecord> = (0..500)
            .map(|i| {
                let seq = "ACGTTTGCAN".repeat(1 + i % 7);
                ReadRecord {
                    header: format!("@r{i}"),
                    qual: vec![b'!' + (i % 41) as u8; seq.len()],
                    seq: seq.into_bytes(),
                }
            })
            .collect();
        let params = MetricParams::default();
        let serial: Vec<ReadRow> = records
            .iter()
            .cloned()
            .map(|record| {
                let metrics = ReadMetrics::compute(&record, &params);
                ReadRow { record, metrics }
            })
            .collect();

        let table = DatasetTable::build(records, params);
        assert_eq!(table.rows(), serial.as_slice());
        assert_eq!(table.rows()[499].record.header, "@r499");
    }
}
