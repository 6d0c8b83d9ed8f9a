//! Delimited export of the dataset table.
//!
//! Fields are quoted only when needed; embedded quotes and backslashes are
//! escaped with a backslash. Floats use the shortest representation that parses back to the
//! same value, so [`read_metrics`] reproduces the exported metrics exactly.

use crate::error::QcError;
use crate::metrics::ReadMetrics;
use crate::table::DatasetTable;

use std::io::{Read, Write};
use std::path::Path;
use std::str::FromStr;

pub const COLUMNS: [&str; 9] = [
    "header",
    "seq",
    "qual",
    "length",
    "gc_content",
    "n_count",
    "mean_q",
    "homopolymer_count",
    "kmer_complexity",
];

fn writer_builder() -> csv::WriterBuilder {
    let mut b = csv::WriterBuilder::new();
    b.double_quote(false).escape(b'\\');
    b
}

fn reader_builder() -> csv::ReaderBuilder {
    let mut b = csv::ReaderBuilder::new();
    b.double_quote(false).escape(Some(b'\\')).has_headers(true);
    b
}

pub fn write_csv<W: Write>(table: &DatasetTable, out: W) -> Result<(), QcError> {
    let mut w = writer_builder().from_writer(out);
    w.write_record(COLUMNS)?;
    for row in table {
        let m = &row.metrics;
        w.write_record([
            escape_text(&row.record.header),
            escape_text(&String::from_utf8_lossy(&row.record.seq)),
            escape_text(&String::from_utf8_lossy(&row.record.qual)),
            m.length.to_string(),
            m.gc_content.to_string(),
            m.n_count.to_string(),
            m.mean_q.to_string(),
            m.homopolymer_count.to_string(),
            m.kmer_complexity.to_string(),
        ])?;
    }
    w.flush()?;
    Ok(())
}

/// The writer escapes quotes but not the escape byte itself; double it so the
/// reader turns `\\` back into `\`. Fields holding `\` are always quoted.
fn escape_text(s: &str) -> String {
    s.replace('\\', "\\\\")
}

pub fn write_csv_path<P: AsRef<Path>>(table: &DatasetTable, path: P) -> Result<(), QcError> {
    let file = std::fs::File::create(path.as_ref())?;
    write_csv(table, std::io::BufWriter::new(file))?;
    log::debug!("wrote {} rows to {}", table.len(), path.as_ref().display());
    Ok(())
}

/// Re-import an export as `(header, metrics)` pairs in row order.
pub fn read_metrics<R: Read>(input: R) -> Result<Vec<(String, ReadMetrics)>, QcError> {
    let mut r = reader_builder().from_reader(input);
    let mut out = Vec::new();
    for (row, rec) in r.records().enumerate() {
        let rec = rec?;
        let field = |i: usize| rec.get(i).unwrap_or("");
        let metrics = ReadMetrics {
            length: parse_field(row, 3, field(3))?,
            gc_content: parse_field(row, 4, field(4))?,
            n_count: parse_field(row, 5, field(5))?,
            mean_q: parse_field(row, 6, field(6))?,
            homopolymer_count: parse_field(row, 7, field(7))?,
            kmer_complexity: parse_field(row, 8, field(8))?,
        };
        out.push((field(0).to_string(), metrics));
    }
    Ok(out)
}

fn parse_field<T: FromStr>(row: usize, col: usize, value: &str) -> Result<T, QcError> {
    value.parse().map_err(|_| QcError::InvalidField {
        row,
        column: COLUMNS[col],
        value: value.to_string(),
    })
}
