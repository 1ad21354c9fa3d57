//! K-mer frequency histogram computation.
//!
//! A histogram (count of counts) summarises a [`FrequencyTable`]: how many
//! distinct k-mers occur once, twice, and so on. Repeated motifs such as `DnaA`
//! boxes show up in the high-count tail.
//!
//! # Example
//!
//! ```rust
//! use oriscan::frequency::build_frequency_table;
//! use oriscan::histogram::compute_histogram;
//!
//! let table = build_frequency_table("ACACACA", 2)?;
//! let histogram = compute_histogram(&table);
//!
//! // AC and CA both occur three times
//! assert_eq!(histogram.get(&3), Some(&2));
//! # Ok::<(), oriscan::error::OriError>(())
//! ```

use std::collections::BTreeMap;

use serde::Serialize;

use crate::frequency::FrequencyTable;

/// K-mer frequency histogram: maps count -> number of distinct k-mers with that count.
///
/// Uses `BTreeMap` for sorted iteration (counts in ascending order).
pub type KmerHistogram = BTreeMap<usize, usize>;

/// Summary statistics for a k-mer histogram.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramStats {
    /// Total k-mer occurrences (sum of all k-mer counts).
    pub total_kmers: usize,
    /// Number of distinct k-mers.
    pub distinct_kmers: usize,
    /// The count value shared by the most k-mers.
    pub mode_count: usize,
    /// Number of k-mers that have the mode count.
    pub mode_frequency: usize,
    /// Average k-mer count (`total_kmers` / `distinct_kmers`).
    pub mean_count: f64,
}

/// Computes a histogram from a frequency table.
#[must_use]
pub fn compute_histogram(table: &FrequencyTable<'_>) -> KmerHistogram {
    let mut histogram = BTreeMap::new();
    for (_, count) in table.iter() {
        *histogram.entry(count).or_insert(0) += 1;
    }
    histogram
}

/// Computes summary statistics for a k-mer histogram.
///
/// Ties for the mode resolve to the smallest count.
#[must_use]
pub fn histogram_stats(histogram: &KmerHistogram) -> HistogramStats {
    let distinct: usize = histogram.values().sum();
    let total: usize = histogram.iter().map(|(c, f)| c * f).sum();

    let (mode_count, mode_frequency) = histogram
        .iter()
        .rev()
        .max_by_key(|(_, f)| *f)
        .map_or((0, 0), |(&c, &f)| (c, f));

    HistogramStats {
        total_kmers: total,
        distinct_kmers: distinct,
        mode_count,
        mode_frequency,
        #[allow(clippy::cast_precision_loss)]
        mean_count: if distinct > 0 {
            total as f64 / distinct as f64
        } else {
            0.0
        },
    }
}
