use crate::pipeline::QcReport;
use crate::table::ReadRow;
use std::io::{self, Write};

/// Rows shown at each end of the table preview.
const PREVIEW_EDGE: usize = 5;
const SEQ_PREVIEW: usize = 24;

/// Human-readable report: table preview, totals, top k-mers.
pub fn write_text<W: Write>(report: &QcReport, mut w: W) -> io::Result<()> {
    write_preview(report, &mut w)?;

    let s = &report.summary;
    writeln!(w)?;
    writeln!(w, "Total reads:    {}", s.total_reads)?;
    writeln!(w, "Mean length:    {:.2}", s.mean_length)?;
    writeln!(w, "Median length:  {:.1}", s.median_length)?;
    writeln!(w, "Overall GC%:    {:.2}", s.overall_gc_percent())?;
    writeln!(w, "Mean Q-score:   {:.2}", s.mean_quality)?;

    writeln!(w)?;
    writeln!(
        w,
        "Top {} overrepresented {}-mers:",
        report.top_kmers.len(),
        report.table.params().kmer_k
    )?;
    for (rank, kc) in report.top_kmers.iter().enumerate() {
        writeln!(w, "{:>3}  {}\t{}", rank + 1, kc.kmer_str(), kc.count)?;
    }
    Ok(())
}

fn write_preview<W: Write>(report: &QcReport, w: &mut W) -> io::Result<()> {
    writeln!(
        w,
        "{:>6}  {:<20} {:<24} {:>6} {:>8} {:>8} {:>7} {:>6} {:>8}",
        "", "header", "seq", "length", "gc", "n", "mean_q", "homo", "kmer_cx"
    )?;
    let rows = report.table.rows();
    if rows.len() <= 2 * PREVIEW_EDGE {
        for (i, row) in rows.iter().enumerate() {
            write_row(w, i, row)?;
        }
        return Ok(());
    }
    for (i, row) in rows.iter().enumerate().take(PREVIEW_EDGE) {
        write_row(w, i, row)?;
    }
    writeln!(w, "{:>6}  ...", "...")?;
    let tail = rows.len() - PREVIEW_EDGE;
    for (i, row) in rows.iter().enumerate().skip(tail) {
        write_row(w, i, row)?;
    }
    writeln!(w, "[{} rows]", rows.len())
}

fn write_row<W: Write>(w: &mut W, idx: usize, row: &ReadRow) -> io::Result<()> {
    let m = &row.metrics;
    writeln!(
        w,
        "{:>6}  {:<20} {:<24} {:>6} {:>8.4} {:>8.4} {:>7.2} {:>6} {:>8.4}",
        idx,
        truncate(&row.record.header, 20),
        truncate(&String::from_utf8_lossy(&row.record.seq), SEQ_PREVIEW),
        m.length,
        m.gc_content,
        m.n_count,
        m.mean_q,
        m.homopolymer_count,
        m.kmer_complexity
    )
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    let mut out: String = s.chars().take(width.saturating_sub(3)).collect();
    out.push_str("...");
    out
}
