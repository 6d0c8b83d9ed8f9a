//! Per-read metrics.
//!
//! Every function here is a pure function of one read's bytes. Ratios over an
//! empty input return `0.0` instead of dividing by zero, so a zero-length read
//! still produces a complete row.

use crate::policy::MetricParams;
use crate::record::ReadRecord;
use std::collections::HashSet;

/// Phred+33 offset.
pub const PHRED_OFFSET: u8 = 33;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReadMetrics {
    pub length: usize,
    pub gc_content: f64,
    pub n_count: f64,
    pub mean_q: f64,
    pub homopolymer_count: usize,
    pub kmer_complexity: f64,
}

impl ReadMetrics {
    pub fn compute(record: &ReadRecord, params: &MetricParams) -> Self {
        Self {
            length: length(record),
            gc_content: gc_content(&record.seq),
            n_count: n_fraction(&record.seq),
            mean_q: mean_quality(&record.qual),
            homopolymer_count: homopolymer_count(&record.seq, params.homopolymer_min_length),
            kmer_complexity: kmer_complexity(&record.seq, params.kmer_k),
        }
    }
}

#[inline]
pub fn length(record: &ReadRecord) -> usize {
    record.seq.len()
}

#[inline]
fn fraction(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64
}

/// Fraction of uppercase `G`/`C`. Lowercase bases are not counted.
pub fn gc_content(seq: &[u8]) -> f64 {
    let gc = seq.iter().filter(|&&b| b == b'G' || b == b'C').count();
    fraction(gc, seq.len())
}

/// Fraction of uppercase `N`.
pub fn n_fraction(seq: &[u8]) -> f64 {
    let n = seq.iter().filter(|&&b| b == b'N').count();
    fraction(n, seq.len())
}

/// Mean Phred+33 score. Bytes below the offset decode as negative scores.
pub fn mean_quality(qual: &[u8]) -> f64 {
    if qual.is_empty() {
        return 0.0;
    }
    let sum: i64 = qual
        .iter()
        .map(|&q| i64::from(q) - i64::from(PHRED_OFFSET))
        .sum();
    sum as f64 / qual.len() as f64
}

/// Number of maximal single-character runs of length >= `min_length`.
///
/// A run of 7 with `min_length = 3` counts once.
pub fn homopolymer_count(seq: &[u8], min_length: usize) -> usize {
    let mut runs = 0;
    let mut i = 0;
    while i < seq.len() {
        let b = seq[i];
        let mut j = i + 1;
        while j < seq.len() && seq[j] == b {
            j += 1;
        }
        if j - i >= min_length {
            runs += 1;
        }
        i = j;
    }
    runs
}

/// Overlapping windows of length `k`; empty when `k == 0` or `k > seq.len()`.
pub fn kmers(seq: &[u8], k: usize) -> impl Iterator<Item = &[u8]> {
    if k == 0 || k > seq.len() {
        seq[..0].windows(1)
    } else {
        seq.windows(k)
    }
}

/// Distinct k-mers over total k-mers; `0.0` when the read is shorter than `k`.
pub fn kmer_complexity(seq: &[u8], k: usize) -> f64 {
    let mut total = 0usize;
    let mut distinct: HashSet<&[u8]> = HashSet::new();
    for kmer in kmers(seq, k) {
        total += 1;
        distinct.insert(kmer);
    }
    fraction(distinct.len(), total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(seq: &str, qual: &str) -> ReadRecord {
        ReadRecord {
            header: "@t".into(),
            seq: seq.as_bytes().to_vec(),
            qual: qual.as_bytes().to_vec(),
        }
    }

    #[test]
    fn gc_and_n() {
        assert_eq!(gc_content(b"GGCC"), 1.0);
        assert_eq!(gc_content(b"AATT"), 0.0);
        assert_eq!(gc_content(b"ACGT"), 0.5);
        assert_eq!(n_fraction(b"NNAA"), 0.5);
    }

    #[test]
    fn lowercase_bases_are_invisible() {
        assert_eq!(gc_content(b"ggcc"), 0.0);
        assert_eq!(n_fraction(b"nnnn"), 0.0);
    }

    #[test]
    fn phred33() {
        assert_eq!(mean_quality(b"!!!!"), 0.0);
        assert_eq!(mean_quality(b"IIII"), 40.0);
        assert_eq!(mean_quality(b"!I"), 20.0);
    }

    #[test]
    fn homopolymers() {
        assert_eq!(homopolymer_count(b"AAACCCCGT", 3), 2);
        assert_eq!(homopolymer_count(b"ACGT", 3), 0);
        assert_eq!(homopolymer_count(b"AAAAAAA", 3), 1);
        assert_eq!(homopolymer_count(b"AAGGTTT", 2), 3);
        assert_eq!(homopolymer_count(b"ACGT", 1), 4);
        assert_eq!(homopolymer_count(b"", 3), 0);
    }

    #[test]
    fn complexity() {
        assert_eq!(kmer_complexity(b"AAAAA", 5), 1.0);
        assert_eq!(kmer_complexity(b"ABCDE", 5), 1.0);
        assert_eq!(kmer_complexity(b"AAAAAA", 5), 0.5);
        assert_eq!(kmer_complexity(b"ACGT", 5), 0.0);
        assert_eq!(kmer_complexity(b"", 5), 0.0);
    }

    #[test]
    fn zero_length_read_gets_fallbacks() {
        let m = ReadMetrics::compute(&rec("", ""), &MetricParams::default());
        assert_eq!(m.length, 0);
        assert_eq!(m.gc_content, 0.0);
        assert_eq!(m.n_count, 0.0);
        assert_eq!(m.mean_q, 0.0);
        assert_eq!(m.homopolymer_count, 0);
        assert_eq!(m.kmer_complexity, 0.0);
    }

    #[test]
    fn full_metric_set() {
        let m = ReadMetrics::compute(&rec("AAACCCCGTN", "IIIIIIIIII"), &MetricParams::default());
        assert_eq!(m.length, 10);
        assert_eq!(m.gc_content, 0.5);
        assert_eq!(m.n_count, 0.1);
        assert_eq!(m.mean_q, 40.0);
        assert_eq!(m.homopolymer_count, 2);
        assert_eq!(m.kmer_complexity, 1.0);
    }
}
