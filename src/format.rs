//! Input format detection and selection.
//!
//! This module provides types for specifying and auto-detecting the format of
//! a sequence input: a raw run of bases, or a single-record FASTA file.

use clap::ValueEnum;
use std::ffi::OsStr;
use std::path::Path;

/// Input sequence format.
///
/// When set to `Auto`, the format is detected from the file extension and,
/// failing that, from the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SequenceFormat {
    /// Auto-detect format.
    ///
    /// Detection rules:
    /// - `.fa`, `.fasta`, `.fna` (optionally `.gz`) -> FASTA
    /// - `.txt`, `.seq` (optionally `.gz`) -> raw
    /// - Otherwise FASTA if the first non-blank byte is `>`, else raw
    #[default]
    Auto,
    /// Bases only; whitespace and line breaks are ignored.
    Raw,
    /// FASTA with exactly one record.
    Fasta,
}

impl SequenceFormat {
    /// Detects the sequence format from a file path's extension.
    ///
    /// Handles gzip-compressed files by stripping the `.gz` extension first.
    /// Returns `Auto` when the extension is not recognised.
    ///
    /// # Examples
    ///
    /// ```
    /// use oriscan::format::SequenceFormat;
    /// use std::path::Path;
    ///
    /// assert_eq!(SequenceFormat::from_extension(Path::new("genome.fa")), SequenceFormat::Fasta);
    /// assert_eq!(SequenceFormat::from_extension(Path::new("genome.fna.gz")), SequenceFormat::Fasta);
    /// assert_eq!(SequenceFormat::from_extension(Path::new("Vibrio_cholerae.txt")), SequenceFormat::Raw);
    /// assert_eq!(SequenceFormat::from_extension(Path::new("genome")), SequenceFormat::Auto);
    /// ```
    #[must_use]
    pub fn from_extension(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(OsStr::to_str)
            .map(str::to_lowercase);

        let effective_ext = match ext.as_deref() {
            Some("gz") => path
                .file_stem()
                .and_then(|stem| Path::new(stem).extension())
                .and_then(OsStr::to_str)
                .map(str::to_lowercase),
            other => other.map(String::from),
        };

        match effective_ext.as_deref() {
            Some("fa" | "fasta" | "fna") => Self::Fasta,
            Some("txt" | "seq") => Self::Raw,
            _ => Self::Auto,
        }
    }

    /// Detects the format from content: FASTA if the first non-blank byte is `>`.
    #[must_use]
    pub fn sniff(content: &[u8]) -> Self {
        match content.iter().find(|b| !b.is_ascii_whitespace()) {
            Some(b'>') => Self::Fasta,
            _ => Self::Raw,
        }
    }

    /// Resolves `Auto` to a concrete format.
    ///
    /// - `Raw` and `Fasta` are returned unchanged.
    /// - `Auto` tries the path's extension, then sniffs `content`.
    ///
    /// # Examples
    ///
    /// ```
    /// use oriscan::format::SequenceFormat;
    /// use std::path::Path;
    ///
    /// let format = SequenceFormat::Auto.resolve(Some(Path::new("ori.fa")), b"ACGT");
    /// assert_eq!(format, SequenceFormat::Fasta);
    ///
    /// let format = SequenceFormat::Auto.resolve(None, b">ori\nACGT\n");
    /// assert_eq!(format, SequenceFormat::Fasta);
    ///
    /// let format = SequenceFormat::Raw.resolve(None, b">ori\nACGT\n");
    /// assert_eq!(format, SequenceFormat::Raw);
    /// ```
    #[must_use]
    pub fn resolve(self, path: Option<&Path>, content: &[u8]) -> Self {
        match self {
            Self::Auto => match path.map_or(Self::Auto, Self::from_extension) {
                Self::Auto => Self::sniff(content),
                detected => detected,
            },
            other => other,
        }
    }

    /// Returns `true` if this format is FASTA.
    #[must_use]
    pub const fn is_fasta(self) -> bool {
        matches!(self, Self::Fasta)
    }
}

impl std::fmt::Display for SequenceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Raw => write!(f, "raw"),
            Self::Fasta => write!(f, "fasta"),
        }
    }
}
