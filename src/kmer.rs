//! K-mer lengths, argument checks and the overlapping k-mer iterator.
//!
//! Every public operation validates its arguments here before touching the
//! text, so degenerate lengths surface as a [`LengthError`] rather than as an
//! empty result or an out-of-range slice.

use crate::{
    error::{LengthError, OriError, Parameter},
    nucleotide,
};

/// A validated k-mer length (`k >= 1`).
///
/// The upper bound depends on the text being scanned and is checked by
/// [`KmerLength::fits`] at the point of use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KmerLength(usize);

impl KmerLength {
    /// Creates a new `KmerLength`.
    ///
    /// # Errors
    ///
    /// Returns [`LengthError`] if `k` is zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use oriscan::kmer::KmerLength;
    ///
    /// let k = KmerLength::new(9)?;
    /// assert_eq!(k.get(), 9);
    /// assert!(KmerLength::new(0).is_err());
    /// # Ok::<(), oriscan::error::LengthError>(())
    /// ```
    pub const fn new(k: usize) -> Result<Self, LengthError> {
        if k == 0 {
            return Err(LengthError {
                parameter: Parameter::Kmer,
                value: k,
                min: 1,
                max: usize::MAX,
            });
        }
        Ok(Self(k))
    }

    /// Returns the raw length.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Checks that this length fits inside a span of `len` bases.
    ///
    /// # Errors
    ///
    /// Returns [`LengthError`] if `k > len`.
    pub const fn fits(self, len: usize) -> Result<Self, LengthError> {
        if self.0 > len {
            return Err(LengthError {
                parameter: Parameter::Kmer,
                value: self.0,
                min: 1,
                max: len,
            });
        }
        Ok(self)
    }
}

impl From<KmerLength> for usize {
    fn from(k: KmerLength) -> Self {
        k.0
    }
}

/// Checks that `len` lies in `min..=max` for the given parameter.
pub(crate) const fn check_range(
    parameter: Parameter,
    len: usize,
    min: usize,
    max: usize,
) -> Result<usize, LengthError> {
    if len < min || len > max {
        return Err(LengthError {
            parameter,
            value: len,
            min,
            max,
        });
    }
    Ok(len)
}

/// Checks that a sequence argument is non-empty and over `{A, C, G, T}`.
pub(crate) fn check_sequence(parameter: Parameter, seq: &str) -> Result<(), OriError> {
    check_range(parameter, seq.len(), 1, usize::MAX)?;
    nucleotide::validate(seq)?;
    Ok(())
}

/// Checks a `(text, k)` pair and returns the validated k.
pub(crate) fn check_text_and_k(text: &str, k: usize) -> Result<KmerLength, OriError> {
    check_sequence(Parameter::Text, text)?;
    Ok(KmerLength::new(k)?.fits(text.len())?)
}

/// Iterates over every overlapping k-mer of `text`, left to right.
///
/// Yields `text.len() - k + 1` slices. `text` must be ASCII so that byte
/// offsets are character boundaries; callers validate the alphabet first.
pub(crate) fn kmers(text: &str, k: KmerLength) -> impl Iterator<Item = &str> + '_ {
    let k = k.get();
    let last = (text.len() + 1).saturating_sub(k);
    (0..last).map(move |i| &text[i..i + k])
}
