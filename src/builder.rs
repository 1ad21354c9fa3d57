//! Builder pattern API for configuring clump searches.
//!
//! This module provides a fluent builder interface for configuring and
//! executing clump finding.
//!
//! # Example
//!
//! ```rust
//! use oriscan::builder::ClumpFinder;
//! use oriscan::clump::ClumpStrategy;
//!
//! let genome = "CGGACTCGACAGATGTGAAGAAATGTGAAGACTGAGTGAAGAGAAGAGGAAACACGACACGACATTGCGACATAATGTACGAATGTAATGTGCCTATGGC";
//!
//! let clumps = ClumpFinder::new()
//!     .k(5)?
//!     .window(75)?
//!     .min_occurrences(4)?
//!     .strategy(ClumpStrategy::Sliding)
//!     .find(genome)?;
//!
//! assert!(clumps.contains("CGACA"));
//! # Ok::<(), oriscan::error::BuilderError>(())
//! ```

use std::collections::BTreeSet;

use crate::{
    clump::{find_clumps_with, ClumpStrategy},
    error::{BuilderError, LengthError, Parameter},
    kmer::{check_range, KmerLength},
};

/// A builder for configuring clump searches.
///
/// Use [`ClumpFinder::new()`] to create a new builder, configure it with the
/// fluent API, then call [`find()`](ClumpFinder::find) to execute.
#[derive(Debug, Clone)]
pub struct ClumpFinder {
    k: Option<KmerLength>,
    window: Option<usize>,
    min_occurrences: usize,
    strategy: ClumpStrategy,
}

impl Default for ClumpFinder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClumpFinder {
    /// Creates a new `ClumpFinder` builder with default settings.
    ///
    /// Default settings:
    /// - `k`: None (must be set before searching)
    /// - `window`: None (must be set before searching)
    /// - `min_occurrences`: 1 (every k-mer of the genome qualifies)
    /// - `strategy`: [`ClumpStrategy::Exhaustive`]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            k: None,
            window: None,
            min_occurrences: 1,
            strategy: ClumpStrategy::Exhaustive,
        }
    }

    /// Sets the k-mer length.
    ///
    /// # Errors
    ///
    /// Returns [`LengthError`] if `k` is zero. Whether `k` fits the window is
    /// checked by [`find()`](Self::find).
    pub fn k(mut self, k: usize) -> Result<Self, LengthError> {
        self.k = Some(KmerLength::new(k)?);
        Ok(self)
    }

    /// Sets the k-mer length from a pre-validated `KmerLength`.
    #[must_use]
    pub const fn k_validated(mut self, k: KmerLength) -> Self {
        self.k = Some(k);
        self
    }

    /// Sets the window length `L`.
    ///
    /// # Errors
    ///
    /// Returns [`LengthError`] if `window` is zero.
    pub fn window(mut self, window: usize) -> Result<Self, LengthError> {
        self.window = Some(check_range(Parameter::Window, window, 1, usize::MAX)?);
        Ok(self)
    }

    /// Sets the minimum number of occurrences `t` inside one window.
    ///
    /// # Errors
    ///
    /// Returns [`LengthError`] if `min_occurrences` is zero.
    pub fn min_occurrences(mut self, min_occurrences: usize) -> Result<Self, LengthError> {
        self.min_occurrences = check_range(Parameter::Threshold, min_occurrences, 1, usize::MAX)?;
        Ok(self)
    }

    /// Selects how windows are evaluated. All strategies return the same set.
    #[must_use]
    pub const fn strategy(mut self, strategy: ClumpStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Finds every k-mer forming a clump in `genome`.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::KmerLengthNotSet`] or
    /// [`BuilderError::WindowNotSet`] if the builder is incomplete, and
    /// [`BuilderError::Oriscan`] if the search rejects its arguments.
    pub fn find(&self, genome: &str) -> Result<BTreeSet<String>, BuilderError> {
        let k = self.k.ok_or(BuilderError::KmerLengthNotSet)?;
        let window = self.window.ok_or(BuilderError::WindowNotSet)?;

        Ok(find_clumps_with(
            self.strategy,
            genome,
            k.get(),
            window,
            self.min_occurrences,
        )?)
    }
}
