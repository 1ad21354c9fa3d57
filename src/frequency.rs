//! K-mer frequency tables and most-frequent k-mers.
//!
//! A [`FrequencyTable`] is built in one left-to-right pass over the text,
//! incrementing the count of each overlapping k-mer. This replaces the
//! quadratic approach of calling [`count_occurrences`](crate::pattern::count_occurrences)
//! once per candidate k-mer.
//!
//! # Example
//!
//! ```rust
//! use oriscan::frequency::{build_frequency_table, most_frequent_kmers};
//!
//! let table = build_frequency_table("ACGTTGCATGTCGCATGATGCATGAGAGCT", 4)?;
//! assert_eq!(table.get("GCAT"), 3);
//! assert_eq!(table.max_count(), 3);
//!
//! let words = most_frequent_kmers("ACGTTGCATGTCGCATGATGCATGAGAGCT", 4)?;
//! assert!(words.contains("CATG") && words.contains("GCAT"));
//! # Ok::<(), oriscan::error::OriError>(())
//! ```

use std::collections::{BTreeSet, HashMap};

use rustc_hash::{FxBuildHasher, FxHashMap};

#[cfg(feature = "tracing")]
use tracing::debug;

use crate::{
    error::OriError,
    kmer::{check_text_and_k, kmers, KmerLength},
};

/// Counts of every k-mer occurring in one text, for one `k`.
///
/// Keys borrow from the text the table was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable<'a> {
    k: KmerLength,
    counts: FxHashMap<&'a str, usize>,
}

impl<'a> FrequencyTable<'a> {
    pub(crate) fn with_capacity(k: KmerLength, capacity: usize) -> Self {
        Self {
            k,
            counts: FxHashMap::with_capacity_and_hasher(capacity, FxBuildHasher::default()),
        }
    }

    /// Counts every k-mer of an already validated text.
    pub(crate) fn count(text: &'a str, k: KmerLength) -> Self {
        let windows = (text.len() + 1).saturating_sub(k.get());
        let mut table = Self::with_capacity(k, windows);
        for kmer in kmers(text, k) {
            table.increment(kmer);
        }
        table
    }

    /// Adds one occurrence of `kmer` and returns its new count.
    pub(crate) fn increment(&mut self, kmer: &'a str) -> usize {
        let count = self.counts.entry(kmer).or_insert(0);
        *count += 1;
        *count
    }

    /// Removes one occurrence of `kmer`, dropping the key when it reaches zero.
    pub(crate) fn decrement(&mut self, kmer: &'a str) {
        if let Some(count) = self.counts.get_mut(kmer) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(kmer);
            }
        }
    }

    /// The k-mer length this table was built with.
    #[must_use]
    pub const fn k(&self) -> usize {
        self.k.get()
    }

    /// Occurrences of `kmer`, zero if it never occurs.
    #[must_use]
    pub fn get(&self, kmer: &str) -> usize {
        self.counts.get(kmer).copied().unwrap_or(0)
    }

    /// Number of distinct k-mers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates over `(k-mer, count)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, usize)> + '_ {
        self.counts.iter().map(|(kmer, count)| (*kmer, *count))
    }

    /// The largest count in the table, zero when empty.
    #[must_use]
    pub fn max_count(&self) -> usize {
        self.counts.values().copied().max().unwrap_or(0)
    }

    /// Sum of all counts, i.e. the number of k-mer windows scanned.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Every k-mer whose count is exactly `count`, sorted.
    #[must_use]
    pub fn kmers_with_count(&self, count: usize) -> BTreeSet<String> {
        self.counts
            .iter()
            .filter(|(_, c)| **c == count)
            .map(|(kmer, _)| (*kmer).to_string())
            .collect()
    }

    /// Every k-mer whose count is at least `threshold`.
    pub fn kmers_at_least(&self, threshold: usize) -> impl Iterator<Item = &'a str> + '_ {
        self.counts
            .iter()
            .filter(move |(_, c)| **c >= threshold)
            .map(|(kmer, _)| *kmer)
    }

    /// Copies the table into an owned map.
    #[must_use]
    pub fn into_owned(self) -> HashMap<String, usize> {
        self.counts
            .into_iter()
            .map(|(kmer, count)| (kmer.to_string(), count))
            .collect()
    }
}

/// Builds the frequency table of every k-mer in `text`.
///
/// # Errors
///
/// Returns [`OriError::InvalidLength`] if `text` is empty, `k` is zero or
/// `k > text.len()`, and [`OriError::InvalidAlphabet`] if `text` contains a
/// byte outside `{A, C, G, T}`.
pub fn build_frequency_table(text: &str, k: usize) -> Result<FrequencyTable<'_>, OriError> {
    let k = check_text_and_k(text, k)?;
    let table = FrequencyTable::count(text, k);

    #[cfg(feature = "tracing")]
    debug!(
        k = k.get(),
        len = text.len(),
        distinct = table.len(),
        "built frequency table"
    );

    Ok(table)
}

/// Returns every k-mer of `text` that reaches the maximum count.
///
/// Ties are all returned, so the set may hold more than one k-mer.
///
/// # Errors
///
/// See [`build_frequency_table`].
pub fn most_frequent_kmers(text: &str, k: usize) -> Result<BTreeSet<String>, OriError> {
    most_frequent_kmers_with_count(text, k).map(|(kmers, _)| kmers)
}

/// Like [`most_frequent_kmers`], also returning the maximum count.
///
/// # Errors
///
/// See [`build_frequency_table`].
pub fn most_frequent_kmers_with_count(
    text: &str,
    k: usize,
) -> Result<(BTreeSet<String>, usize), OriError> {
    let table = build_frequency_table(text, k)?;
    let max = table.max_count();
    Ok((table.kmers_with_count(max), max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{LengthError, Parameter};

    #[test]
    fn table_counts_overlapping_kmers() {
        let table = build_frequency_table("CGATATATCCATAG", 3).unwrap();
        assert_eq!(table.get("ATA"), 3);
        assert_eq!(table.get("TAT"), 2);
        assert_eq!(table.get("CGA"), 1);
        assert_eq!(table.get("GGG"), 0);
        assert_eq!(table.k(), 3);
    }

    #[test]
    fn table_total_equals_window_count() {
        let text = "ACGTTGCATGTCGCATGATGCATGAGAGCT";
        for k in 1..=text.len() {
            let table = build_frequency_table(text, k).unwrap();
            assert_eq!(table.total(), text.len() - k + 1);
        }
    }

    #[test]
    fn table_with_k_equal_to_len() {
        let table = build_frequency_table("GATTACA", 7).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("GATTACA"), 1);
    }

    #[test]
    fn table_rejects_k_longer_than_text() {
        let err = build_frequency_table("ACG", 4).unwrap_err();
        assert!(matches!(
            err,
            OriError::InvalidLength(LengthError {
                parameter: Parameter::Kmer,
                value: 4,
                max: 3,
                ..
            })
        ));
    }

    #[test]
    fn table_rejects_zero_k() {
        let err = build_frequency_table("ACG", 0).unwrap_err();
        assert!(matches!(
            err,
            OriError::InvalidLength(LengthError {
                parameter: Parameter::Kmer,
                value: 0,
                ..
            })
        ));
    }

    #[test]
    fn increment_and_decrement() {
        let k = KmerLength::new(2).unwrap();
        let mut table = FrequencyTable::with_capacity(k, 4);
        assert_eq!(table.increment("AC"), 1);
        assert_eq!(table.increment("AC"), 2);
        table.decrement("AC");
        assert_eq!(table.get("AC"), 1);
        table.decrement("AC");
        assert!(table.is_empty());
        table.decrement("GT");
        assert!(table.is_empty());
    }

    #[test]
    fn most_frequent_textbook_example() {
        let words = most_frequent_kmers("ACGTTGCATGTCGCATGATGCATGAGAGCT", 4).unwrap();
        let expected: BTreeSet<String> = ["CATG", "GCAT"].iter().map(|s| s.to_string()).collect();
        assert_eq!(words, expected);
    }

    #[test]
    fn most_frequent_returns_all_ties() {
        let (words, count) = most_frequent_kmers_with_count("ACACACA", 2).unwrap();
        let expected: BTreeSet<String> = ["AC", "CA"].iter().map(|s| s.to_string()).collect();
        assert_eq!(words, expected);
        assert_eq!(count, 3);
    }

    #[test]
    fn most_frequent_single_winner() {
        let words = most_frequent_kmers("CGATATATCCATAG", 3).unwrap();
        assert_eq!(words.into_iter().collect::<Vec<_>>(), vec!["ATA"]);
    }

    #[test]
    fn into_owned_preserves_counts() {
        let owned = build_frequency_table("AAAA", 2).unwrap().into_owned();
        assert_eq!(owned.get("AA"), Some(&3));
        assert_eq!(owned.len(), 1);
    }
}
