//! Exact pattern search: counting and locating occurrences.
//!
//! Both operations share one scan, [`Matches`], which visits every start
//! position `i` in `0..=n - m` and compares `text[i..i + m]` with the pattern.
//! Overlapping matches are reported.
//!
//! # Example
//!
//! ```rust
//! use oriscan::pattern::{count_occurrences, find_match_positions};
//!
//! let positions = find_match_positions("GATATATGCATATACTT", "ATAT")?;
//! assert_eq!(positions, vec![1, 3, 9]);
//! assert_eq!(count_occurrences("GATATATGCATATACTT", "ATAT")?, 3);
//! # Ok::<(), oriscan::error::OriError>(())
//! ```

use crate::{
    error::{OriError, Parameter},
    kmer::{check_range, check_sequence},
};

/// Iterator over the start positions of `pattern` in `text`, ascending.
#[derive(Debug, Clone)]
pub struct Matches<'a> {
    text: &'a [u8],
    pattern: &'a [u8],
    next: usize,
}

impl<'a> Matches<'a> {
    /// Creates a scan after checking both sequences.
    ///
    /// # Errors
    ///
    /// Returns [`OriError::InvalidLength`] if either sequence is empty or the
    /// pattern is longer than the text, and [`OriError::InvalidAlphabet`] if
    /// either contains a byte outside `{A, C, G, T}`.
    pub fn new(text: &'a str, pattern: &'a str) -> Result<Self, OriError> {
        check_sequence(Parameter::Text, text)?;
        check_sequence(Parameter::Pattern, pattern)?;
        check_range(Parameter::Pattern, pattern.len(), 1, text.len())?;

        Ok(Self {
            text: text.as_bytes(),
            pattern: pattern.as_bytes(),
            next: 0,
        })
    }
}

impl Iterator for Matches<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let m = self.pattern.len();
        while self.next + m <= self.text.len() {
            let i = self.next;
            self.next += 1;
            if &self.text[i..i + m] == self.pattern {
                return Some(i);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.text.len() + 1).saturating_sub(self.next + self.pattern.len());
        (0, Some(remaining))
    }
}

/// Counts the overlapping occurrences of `pattern` in `text`.
///
/// # Errors
///
/// See [`Matches::new`].
///
/// # Example
///
/// ```rust
/// use oriscan::pattern::count_occurrences;
///
/// assert_eq!(count_occurrences("ACAACTATGCATACTATCGGGAACTATCCT", "ACTAT")?, 3);
/// assert_eq!(count_occurrences("AAAA", "AA")?, 3);
/// # Ok::<(), oriscan::error::OriError>(())
/// ```
pub fn count_occurrences(text: &str, pattern: &str) -> Result<usize, OriError> {
    Ok(Matches::new(text, pattern)?.count())
}

/// Returns every zero-based start position of `pattern` in `genome`, ascending.
///
/// # Errors
///
/// See [`Matches::new`].
pub fn find_match_positions(genome: &str, pattern: &str) -> Result<Vec<usize>, OriError> {
    Ok(Matches::new(genome, pattern)?.collect())
}
