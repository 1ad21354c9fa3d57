//! K-mer frequency analysis and clump finding for locating replication origins.
//!
//! `oriscan` provides the small toolkit used to hunt for `DnaA` boxes near a
//! bacterial replication origin (*ori*): counting a pattern, tabulating every
//! k-mer, extracting the most frequent k-mers, reverse complementing,
//! locating a pattern, and finding k-mers that clump inside a short window.
//!
//! Every operation is a pure function over a `&str` of `A`, `C`, `G`, `T`.
//! Arguments are checked up front: empty inputs, zero or oversized lengths,
//! and bytes outside the alphabet are reported as [`OriError`] rather than
//! producing an empty or wrapped-around result.
//!
//! # Example
//!
//! ```rust
//! use oriscan::{count_occurrences, find_clumps, most_frequent_kmers, reverse_complement};
//!
//! assert_eq!(count_occurrences("ACAACTATGCATACTATCGGGAACTATCCT", "ACTAT")?, 3);
//! assert_eq!(reverse_complement("ATGATCAAG")?, "CTTGATCAT");
//!
//! let words = most_frequent_kmers("ACGTTGCATGTCGCATGATGCATGAGAGCT", 4)?;
//! assert_eq!(words.len(), 2);
//!
//! let genome = "CGGACTCGACAGATGTGAAGAAATGTGAAGACTGAGTGAAGAGAAGAGGAAACACGACACGACATTGCGACATAATGTACGAATGTAATGTGCCTATGGC";
//! assert!(find_clumps(genome, 5, 75, 4)?.contains("CGACA"));
//! # Ok::<(), oriscan::OriError>(())
//! ```
//!
//! # Features
//!
//! - `tracing`: emit `tracing` spans and events from the table builder,
//!   clump finders and reader
//! - `gzip`: read `.gz` input files
//! - `needletail`: parse FASTA input with needletail instead of rust-bio

pub mod builder;
pub mod cli;
pub mod clump;
pub mod error;
pub mod format;
pub mod frequency;
pub mod histogram;
pub mod kmer;
pub mod nucleotide;
pub mod output;
pub mod pattern;
pub mod reader;
pub mod revcomp;
pub mod run;

pub use clump::{find_clumps, find_clumps_parallel, find_clumps_sliding, ClumpStrategy};
pub use error::{BuilderError, InvalidBaseError, LengthError, OriError, Parameter};
pub use frequency::{build_frequency_table, most_frequent_kmers, FrequencyTable};
pub use pattern::{count_occurrences, find_match_positions};
pub use revcomp::reverse_complement;
