//! The four-letter DNA alphabet.
//!
//! Every operation in this crate works over `{A, C, G, T}` only. Sequences are
//! checked once, up front, with [`validate`]; the first byte outside the
//! alphabet is reported together with its position.

use crate::error::InvalidBaseError;

/// A canonical DNA base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Nucleotide {
    A,
    C,
    G,
    T,
}

impl Nucleotide {
    /// Watson-Crick complement: `A <-> T`, `C <-> G`.
    #[must_use]
    pub const fn complement(self) -> Self {
        match self {
            Self::A => Self::T,
            Self::C => Self::G,
            Self::G => Self::C,
            Self::T => Self::A,
        }
    }

    /// The uppercase ASCII byte for this base.
    #[must_use]
    pub const fn as_byte(self) -> u8 {
        match self {
            Self::A => b'A',
            Self::C => b'C',
            Self::G => b'G',
            Self::T => b'T',
        }
    }

    /// The uppercase ASCII character for this base.
    #[must_use]
    pub const fn as_char(self) -> char {
        self.as_byte() as char
    }
}

impl TryFrom<u8> for Nucleotide {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            b'A' => Ok(Self::A),
            b'C' => Ok(Self::C),
            b'G' => Ok(Self::G),
            b'T' => Ok(Self::T),
            other => Err(other),
        }
    }
}

impl From<Nucleotide> for u8 {
    fn from(n: Nucleotide) -> Self {
        n.as_byte()
    }
}

/// Complements a single base byte.
///
/// # Errors
///
/// Returns [`InvalidBaseError`] at position 0 if `base` is not one of `A`, `C`, `G`, `T`.
///
/// # Example
///
/// ```rust
/// use oriscan::nucleotide::complement;
///
/// assert_eq!(complement(b'A'), Ok(b'T'));
/// assert_eq!(complement(b'G'), Ok(b'C'));
/// assert!(complement(b'N').is_err());
/// ```
pub fn complement(base: u8) -> Result<u8, InvalidBaseError> {
    Nucleotide::try_from(base)
        .map(|n| n.complement().as_byte())
        .map_err(|base| InvalidBaseError { base, position: 0 })
}

/// Returns the index of the first byte outside the alphabet, if any.
pub fn find_invalid(seq: &[u8]) -> Option<usize> {
    seq.iter().position(|b| Nucleotide::try_from(*b).is_err())
}

/// Checks that every byte of `seq` is one of `A`, `C`, `G`, `T`.
///
/// On success the sequence is known to be pure ASCII, so byte offsets are
/// also valid `str` slice boundaries.
///
/// # Errors
///
/// Returns [`InvalidBaseError`] for the first offending byte.
pub fn validate(seq: &str) -> Result<(), InvalidBaseError> {
    let bytes = seq.as_bytes();
    find_invalid(bytes).map_or(Ok(()), |position| {
        Err(InvalidBaseError {
            base: bytes[position],
            position,
        })
    })
}
