//! Corpus-wide k-mer inventory and overrepresented k-mer ranking.

use crate::error::QcError;
use crate::metrics::kmers;
use crate::table::DatasetTable;
use std::cmp::Reverse;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KmerCount {
    pub kmer: Vec<u8>,
    pub count: u64,
}

impl KmerCount {
    pub fn kmer_str(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.kmer)
    }
}

#[derive(Debug, Clone, Copy)]
struct Tally {
    count: u64,
    // index of the first window that produced this k-mer
    first_seen: u64,
}

/// Multiset of every overlapping k-mer across all reads, duplicates included.
#[derive(Debug, Clone)]
pub struct KmerInventory {
    k: usize,
    counts: HashMap<Vec<u8>, Tally>,
    total: u64,
}

impl KmerInventory {
    pub fn from_table(table: &DatasetTable, k: usize) -> Result<Self, QcError> {
        if table.is_empty() {
            return Err(QcError::EmptyDataset);
        }
        Ok(Self::from_sequences(table.sequences(), k))
    }

    /// Reads shorter than `k` contribute nothing.
    pub fn from_sequences<'a, I>(sequences: I, k: usize) -> Self
    where
        I: IntoIterator<Item = &'a [u8]>,
    {
        let mut counts: HashMap<Vec<u8>, Tally> = HashMap::new();
        let mut total = 0u64;
        for seq in sequences {
            for kmer in kmers(seq, k) {
                match counts.get_mut(kmer) {
                    Some(t) => t.count += 1,
                    None => {
                        counts.insert(
                            kmer.to_vec(),
                            Tally {
                                count: 1,
                                first_seen: total,
                            },
                        );
                    }
                }
                total += 1;
            }
        }
        log::debug!(
            "k-mer inventory: k={k} total={total} distinct={}",
            counts.len()
        );
        Self { k, counts, total }
    }

    pub fn k(&self) -> usize {
        self.k
    }

    /// Total k-mer occurrences.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn count(&self, kmer: &[u8]) -> u64 {
        self.counts.get(kmer).map_or(0, |t| t.count)
    }

    /// The `n` most frequent k-mers, most frequent first.
    ///
    /// Equal counts are ordered by first occurrence (rows in table order,
    /// windows left to right), so the ranking is reproducible.
    pub fn top(&self, n: usize) -> Vec<KmerCount> {
        let mut entries: Vec<(&Vec<u8>, &Tally)> = self.counts.iter().collect();
        entries.sort_unstable_by_key(|(_, t)| (Reverse(t.count), t.first_seen));
        entries
            .into_iter()
            .take(n)
            .map(|(kmer, t)| KmerCount {
                kmer: kmer.clone(),
                count: t.count,
            })
            .collect()
    }
}

/// Convenience: build the inventory over `table` and rank the top `n`.
pub fn top_kmers(table: &DatasetTable, k: usize, n: usize) -> Result<Vec<KmerCount>, QcError> {
    Ok(KmerInventory::from_table(table, k)?.top(n))
}
