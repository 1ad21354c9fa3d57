//! Error types for oriscan.
//!
//! This module provides exhaustive, strongly-typed errors for all operations
//! in the library, enabling precise error handling and informative messages.

use std::{fmt, path::PathBuf};
use thiserror::Error;

/// Errors that can occur in oriscan operations.
#[derive(Debug, Error)]
pub enum OriError {
    /// A text, pattern, k-mer, window or threshold length is out of range.
    #[error(transparent)]
    InvalidLength(#[from] LengthError),

    /// Encountered a byte outside the `{A, C, G, T}` alphabet.
    #[error(transparent)]
    InvalidAlphabet(#[from] InvalidBaseError),

    /// Failed to read sequence file.
    #[error("failed to read sequence file '{path}': {source}")]
    SequenceRead {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },

    /// Failed to parse sequence input.
    #[error("failed to parse sequence input: {details}")]
    SequenceParse { details: String },

    /// Failed to write output.
    #[error("failed to write output: {source}")]
    WriteError {
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize JSON output.
    #[error("failed to serialize JSON: {source}")]
    JsonError {
        #[source]
        source: serde_json::Error,
    },

    /// Failed to decompress gzip file.
    #[cfg(feature = "gzip")]
    #[error("failed to decompress gzip file '{path}': {source}")]
    GzipError {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
}

/// The argument a [`LengthError`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parameter {
    /// The text, genome or strand being scanned.
    Text,
    /// The pattern searched for.
    Pattern,
    /// The k-mer length `k`.
    Kmer,
    /// The clump window length `L`.
    Window,
    /// The minimum repeat count `t`.
    Threshold,
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "text length",
            Self::Pattern => "pattern length",
            Self::Kmer => "k-mer length",
            Self::Window => "window length",
            Self::Threshold => "repeat threshold",
        };
        f.write_str(name)
    }
}

/// Error for a length-like argument outside its valid range.
///
/// An empty text or pattern is reported as a `LengthError` with `value == 0`;
/// see [`LengthError::is_empty_input`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthError {
    /// Which argument was rejected.
    pub parameter: Parameter,
    /// The value that was provided.
    pub value: usize,
    /// Minimum valid value.
    pub min: usize,
    /// Maximum valid value, `usize::MAX` when unbounded.
    pub max: usize,
}

impl LengthError {
    /// Returns `true` if this error rejects a zero-length text or pattern.
    #[must_use]
    pub const fn is_empty_input(&self) -> bool {
        self.value == 0 && matches!(self.parameter, Parameter::Text | Parameter::Pattern)
    }
}

impl fmt::Display for LengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.max == usize::MAX {
            write!(
                f,
                "invalid {} {}: must be at least {}",
                self.parameter, self.value, self.min
            )
        } else {
            write!(
                f,
                "invalid {} {}: must be between {} and {}",
                self.parameter, self.value, self.min, self.max
            )
        }
    }
}

impl std::error::Error for LengthError {}

/// Error for invalid DNA base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidBaseError {
    /// The invalid byte value.
    pub base: u8,
    /// Position of the invalid byte in the sequence.
    pub position: usize,
}

impl fmt::Display for InvalidBaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.base.is_ascii_graphic() || self.base == b' ' {
            write!(
                f,
                "invalid base '{}' (0x{:02x}) at position {}",
                self.base as char, self.base, self.position
            )
        } else {
            write!(
                f,
                "invalid base 0x{:02x} at position {}",
                self.base, self.position
            )
        }
    }
}

impl std::error::Error for InvalidBaseError {}

impl From<std::io::Error> for OriError {
    fn from(source: std::io::Error) -> Self {
        Self::WriteError { source }
    }
}

impl From<serde_json::Error> for OriError {
    fn from(source: serde_json::Error) -> Self {
        Self::JsonError { source }
    }
}

/// Errors that can occur when using the builder API.
#[derive(Debug, Error)]
pub enum BuilderError {
    /// K-mer length was not set before calling [`find`](crate::builder::ClumpFinder::find).
    #[error("k-mer length not set; call .k() first")]
    KmerLengthNotSet,

    /// Window length was not set before calling [`find`](crate::builder::ClumpFinder::find).
    #[error("window length not set; call .window() first")]
    WindowNotSet,

    /// Invalid length provided to a setter.
    #[error(transparent)]
    Length(#[from] LengthError),

    /// Error from the underlying clump search.
    #[error(transparent)]
    Oriscan(#[from] OriError),
}
