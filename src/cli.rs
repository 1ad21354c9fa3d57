//! Command-line interface definition.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::{clump::ClumpStrategy, format::SequenceFormat};

/// K-mer counting, pattern matching and clump finding for replication origins.
#[derive(Parser, Debug)]
#[command(name = "oriscan")]
#[command(version, author, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Suppress informational output on stderr
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// The operation to run.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Count overlapping occurrences of a pattern
    Count {
        /// Pattern to count
        pattern: String,
        #[command(flatten)]
        source: SequenceSource,
    },

    /// Print the count of every k-mer
    Table {
        /// K-mer length
        #[arg(short, value_parser = parse_positive)]
        k: usize,
        /// Minimum count threshold (k-mers below this are excluded)
        #[arg(short, long, default_value = "1")]
        min_count: usize,
        /// Print the count-of-counts histogram instead of the table
        #[arg(long)]
        histogram: bool,
        #[command(flatten)]
        source: SequenceSource,
    },

    /// Print the most frequent k-mers
    Frequent {
        /// K-mer length
        #[arg(short, value_parser = parse_positive)]
        k: usize,
        #[command(flatten)]
        source: SequenceSource,
    },

    /// Print the reverse complement
    Revcomp {
        #[command(flatten)]
        source: SequenceSource,
    },

    /// Print every start position of a pattern
    Find {
        /// Pattern to locate
        pattern: String,
        #[command(flatten)]
        source: SequenceSource,
    },

    /// Print every k-mer forming an (L, t)-clump
    Clumps {
        /// K-mer length
        #[arg(short, value_parser = parse_positive)]
        k: usize,
        /// Window length L
        #[arg(short = 'L', long, value_parser = parse_positive)]
        window: usize,
        /// Minimum occurrences t inside one window
        #[arg(short, long, value_parser = parse_positive)]
        threshold: usize,
        /// How windows are evaluated
        #[arg(short, long, value_enum, default_value = "exhaustive")]
        strategy: ClumpStrategy,
        #[command(flatten)]
        source: SequenceSource,
    },
}

/// Where the sequence comes from: inline, a file, or stdin.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct SequenceSource {
    /// Sequence given inline (reads --input or stdin when omitted)
    pub sequence: Option<String>,

    /// Path to a raw or single-record FASTA file
    #[arg(short, long, conflicts_with = "sequence")]
    pub input: Option<PathBuf>,

    /// Input format
    #[arg(long, value_enum, default_value = "auto")]
    pub input_format: SequenceFormat,
}

/// Output format for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Plain text, space-separated where the result is a list
    #[default]
    Text,
    /// Tab-separated values, one item per line
    Tsv,
    /// JSON object
    Json,
}

fn parse_positive(s: &str) -> Result<usize, String> {
    let n: usize = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;
    if n == 0 {
        return Err("value must be at least 1".to_string());
    }
    Ok(n)
}
