//! Clump finding: k-mers that repeat inside a short stretch of genome.
//!
//! A k-mer forms an `(L, t)`-clump if some window of length `L` contains at
//! least `t` occurrences of it. [`find_clumps`] returns every such k-mer,
//! the union over all windows `genome[i..i + L]` for `i` in `0..=n - L`.
//!
//! Three strategies compute the same set:
//! - [`find_clumps`] rebuilds a frequency table for every window. This is the
//!   reference behaviour.
//! - [`find_clumps_sliding`] keeps one table and updates it as the window
//!   moves, removing the k-mer that leaves on the left and adding the one that
//!   enters on the right.
//! - [`find_clumps_parallel`] evaluates windows independently on the
//!   [`rayon`] pool and merges their k-mers into a [`DashSet`].
//!
//! # Example
//!
//! ```rust
//! use oriscan::clump::find_clumps;
//!
//! let genome = "CGGACTCGACAGATGTGAAGAAATGTGAAGACTGAGTGAAGAGAAGAGGAAACACGACACGACATTGCGACATAATGTACGAATGTAATGTGCCTATGGC";
//! let clumps = find_clumps(genome, 5, 75, 4)?;
//! assert!(clumps.contains("CGACA"));
//! # Ok::<(), oriscan::error::OriError>(())
//! ```

use std::{collections::BTreeSet, hash::BuildHasherDefault};

use clap::ValueEnum;
use dashmap::DashSet;
use rayon::prelude::*;
use rustc_hash::FxHasher;

#[cfg(feature = "tracing")]
use tracing::{debug, info_span};

use crate::{
    error::{OriError, Parameter},
    frequency::FrequencyTable,
    kmer::{check_range, check_sequence, KmerLength},
};

/// A concurrent set w/ `FxHasher`.
type DashSetFx<'a> = DashSet<&'a str, BuildHasherDefault<FxHasher>>;

/// How to evaluate the windows of a clump search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ClumpStrategy {
    /// Rebuild a frequency table for every window.
    #[default]
    Exhaustive,
    /// Update one frequency table incrementally as the window slides.
    Sliding,
    /// Rebuild per window, with windows spread across threads.
    Parallel,
}

impl std::fmt::Display for ClumpStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exhaustive => write!(f, "exhaustive"),
            Self::Sliding => write!(f, "sliding"),
            Self::Parallel => write!(f, "parallel"),
        }
    }
}

/// Validated clump search parameters for one genome.
#[derive(Debug, Clone, Copy)]
struct Params {
    k: KmerLength,
    window: usize,
    threshold: usize,
}

impl Params {
    fn check(genome: &str, k: usize, window: usize, threshold: usize) -> Result<Self, OriError> {
        check_sequence(Parameter::Text, genome)?;
        let window = check_range(Parameter::Window, window, 1, genome.len())?;
        let k = KmerLength::new(k)?.fits(window)?;
        let threshold = check_range(Parameter::Threshold, threshold, 1, usize::MAX)?;
        Ok(Self {
            k,
            window,
            threshold,
        })
    }

    /// Number of window start positions.
    const fn windows(self, genome_len: usize) -> usize {
        genome_len - self.window + 1
    }
}

/// Finds every k-mer forming an `(L, t)`-clump in `genome`.
///
/// # Arguments
///
/// * `genome` - The sequence to scan
/// * `k` - K-mer length, `1 <= k <= window`
/// * `window` - Window length `L`, `1 <= L <= genome.len()`
/// * `threshold` - Minimum occurrences `t >= 1` inside one window
///
/// # Errors
///
/// Returns [`OriError::InvalidLength`] if any length is out of range, and
/// [`OriError::InvalidAlphabet`] if `genome` contains a byte outside
/// `{A, C, G, T}`.
pub fn find_clumps(
    genome: &str,
    k: usize,
    window: usize,
    threshold: usize,
) -> Result<BTreeSet<String>, OriError> {
    let params = Params::check(genome, k, window, threshold)?;

    #[cfg(feature = "tracing")]
    let _span = info_span!("find_clumps", k, window, threshold, len = genome.len()).entered();

    let mut clumps: BTreeSet<String> = BTreeSet::new();
    for start in 0..params.windows(genome.len()) {
        let table = FrequencyTable::count(&genome[start..start + params.window], params.k);
        for kmer in table.kmers_at_least(params.threshold) {
            if !clumps.contains(kmer) {
                clumps.insert(kmer.to_string());
            }
        }
    }

    #[cfg(feature = "tracing")]
    debug!(found = clumps.len(), "exhaustive clump search finished");

    Ok(clumps)
}

/// Finds the same clumps as [`find_clumps`] with one incrementally updated table.
///
/// # Errors
///
/// See [`find_clumps`].
pub fn find_clumps_sliding(
    genome: &str,
    k: usize,
    window: usize,
    threshold: usize,
) -> Result<BTreeSet<String>, OriError> {
    let params = Params::check(genome, k, window, threshold)?;
    let k = params.k.get();

    #[cfg(feature = "tracing")]
    let _span = info_span!("find_clumps_sliding", k, window, threshold).entered();

    let mut table = FrequencyTable::count(&genome[..params.window], params.k);
    let mut clumps: BTreeSet<String> = table
        .kmers_at_least(params.threshold)
        .map(str::to_string)
        .collect();

    for start in 1..params.windows(genome.len()) {
        table.decrement(&genome[start - 1..start - 1 + k]);

        let entering_at = start + params.window - k;
        let entering = &genome[entering_at..entering_at + k];
        if table.increment(entering) >= params.threshold && !clumps.contains(entering) {
            clumps.insert(entering.to_string());
        }
    }

    #[cfg(feature = "tracing")]
    debug!(found = clumps.len(), "sliding clump search finished");

    Ok(clumps)
}

/// Finds the same clumps as [`find_clumps`], evaluating windows in parallel.
///
/// # Errors
///
/// See [`find_clumps`].
pub fn find_clumps_parallel(
    genome: &str,
    k: usize,
    window: usize,
    threshold: usize,
) -> Result<BTreeSet<String>, OriError> {
    let params = Params::check(genome, k, window, threshold)?;

    #[cfg(feature = "tracing")]
    let _span = info_span!("find_clumps_parallel", k, window, threshold).entered();

    let found: DashSetFx<'_> = DashSet::with_hasher(BuildHasherDefault::<FxHasher>::default());

    (0..params.windows(genome.len()))
        .into_par_iter()
        .for_each(|start| {
            let table = FrequencyTable::count(&genome[start..start + params.window], params.k);
            for kmer in table.kmers_at_least(params.threshold) {
                found.insert(kmer);
            }
        });

    #[cfg(feature = "tracing")]
    debug!(found = found.len(), "parallel clump search finished");

    Ok(found.into_iter().map(str::to_string).collect())
}

/// Dispatches to the clump finder selected by `strategy`.
///
/// # Errors
///
/// See [`find_clumps`].
pub fn find_clumps_with(
    strategy: ClumpStrategy,
    genome: &str,
    k: usize,
    window: usize,
    threshold: usize,
) -> Result<BTreeSet<String>, OriError> {
    match strategy {
        ClumpStrategy::Exhaustive => find_clumps(genome, k, window, threshold),
        ClumpStrategy::Sliding => find_clumps_sliding(genome, k, window, threshold),
        ClumpStrategy::Parallel => find_clumps_parallel(genome, k, window, threshold),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::LengthError, frequency::build_frequency_table};

    const GENOME: &str = "CGGACTCGACAGATGTGAAGAAATGTGAAGACTGAGTGAAGAGAAGAGGAAACACGACACGACATTGCGACATAATGTACGAATGTAATGTGCCTATGGC";

    const STRATEGIES: [ClumpStrategy; 3] = [
        ClumpStrategy::Exhaustive,
        ClumpStrategy::Sliding,
        ClumpStrategy::Parallel,
    ];

    fn set(kmers: &[&str]) -> BTreeSet<String> {
        kmers.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn textbook_clumps() {
        for strategy in STRATEGIES {
            let clumps = find_clumps_with(strategy, GENOME, 5, 50, 4).unwrap();
            assert_eq!(clumps, set(&["GAAGA"]), "strategy {strategy}");
        }
    }

    #[test]
    fn textbook_clumps_wide_window() {
        for strategy in STRATEGIES {
            let clumps = find_clumps_with(strategy, GENOME, 5, 75, 4).unwrap();
            assert_eq!(
                clumps,
                set(&["AATGT", "CGACA", "GAAGA"]),
                "strategy {strategy}"
            );
        }
    }

    #[test]
    fn window_equal_to_genome_is_global_threshold() {
        let genome = "ACGTACGTTTACG";
        let table = build_frequency_table(genome, 3).unwrap();
        for threshold in 1..=4 {
            let expected: BTreeSet<String> = table
                .kmers_at_least(threshold)
                .map(str::to_string)
                .collect();
            for strategy in STRATEGIES {
                let clumps =
                    find_clumps_with(strategy, genome, 3, genome.len(), threshold).unwrap();
                assert_eq!(clumps, expected, "strategy {strategy}, t = {threshold}");
            }
        }
    }

    #[test]
    fn any_window_suffices() {
        // AAA occurs four times overall but at most twice in any 5-base window.
        let genome = "AAAACCCCCCCCAAAA";
        for strategy in STRATEGIES {
            assert_eq!(
                find_clumps_with(strategy, genome, 3, 5, 3).unwrap(),
                set(&["CCC"])
            );
            assert_eq!(
                find_clumps_with(strategy, genome, 3, 5, 2).unwrap(),
                set(&["AAA", "CCC"])
            );
        }
    }

    #[test]
    fn threshold_one_returns_every_kmer() {
        let genome = "GATTACA";
        let clumps = find_clumps(genome, 2, 3, 1).unwrap();
        assert_eq!(clumps, set(&["AC", "AT", "CA", "GA", "TA", "TT"]));
    }

    #[test]
    fn rejects_window_longer_than_genome() {
        let err = find_clumps("ACGT", 2, 5, 1).unwrap_err();
        assert!(matches!(
            err,
            OriError::InvalidLength(LengthError {
                parameter: Parameter::Window,
                value: 5,
                max: 4,
                ..
            })
        ));
    }

    #[test]
    fn rejects_k_longer_than_window() {
        let err = find_clumps_sliding("ACGTACGT", 5, 4, 1).unwrap_err();
        assert!(matches!(
            err,
            OriError::InvalidLength(LengthError {
                parameter: Parameter::Kmer,
                value: 5,
                max: 4,
                ..
            })
        ));
    }

    #[test]
    fn rejects_zero_threshold_and_window() {
        assert!(matches!(
            find_clumps_parallel("ACGT", 1, 2, 0).unwrap_err(),
            OriError::InvalidLength(LengthError {
                parameter: Parameter::Threshold,
                ..
            })
        ));
        assert!(matches!(
            find_clumps("ACGT", 1, 0, 1).unwrap_err(),
            OriError::InvalidLength(LengthError {
                parameter: Parameter::Window,
                ..
            })
        ));
    }

    #[test]
    fn rejects_invalid_alphabet() {
        let err = find_clumps("ACGTNACGT", 2, 4, 2).unwrap_err();
        assert!(matches!(err, OriError::InvalidAlphabet(e) if e.position == 4));
    }

    #[test]
    fn strategy_display() {
        assert_eq!(ClumpStrategy::Exhaustive.to_string(), "exhaustive");
        assert_eq!(ClumpStrategy::Sliding.to_string(), "sliding");
        assert_eq!(ClumpStrategy::Parallel.to_string(), "parallel");
    }
}
