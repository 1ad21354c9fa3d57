//! Rendering operation results as text, TSV or JSON.

use std::io::Write;

use serde::Serialize;

use crate::{
    cli::OutputFormat,
    error::OriError,
    histogram::{HistogramStats, KmerHistogram},
};

/// A k-mer with its count, used for table output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KmerCount {
    pub kmer: String,
    pub count: usize,
}

/// One histogram bin: `kmers` distinct k-mers occur `count` times each.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistogramBin {
    pub count: usize,
    pub kmers: usize,
}

/// The result of one command, ready to be written.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum Report {
    Count {
        pattern: String,
        count: usize,
    },
    Table {
        k: usize,
        kmers: Vec<KmerCount>,
    },
    Histogram {
        k: usize,
        bins: Vec<HistogramBin>,
        stats: HistogramStats,
    },
    Frequent {
        k: usize,
        count: usize,
        kmers: Vec<String>,
    },
    ReverseComplement {
        sequence: String,
    },
    Positions {
        pattern: String,
        positions: Vec<usize>,
    },
    Clumps {
        k: usize,
        window: usize,
        threshold: usize,
        kmers: Vec<String>,
    },
}

impl Report {
    /// Builds a histogram report from a histogram and its statistics.
    #[must_use]
    pub fn histogram(k: usize, histogram: &KmerHistogram, stats: HistogramStats) -> Self {
        Self::Histogram {
            k,
            bins: histogram
                .iter()
                .map(|(&count, &kmers)| HistogramBin { count, kmers })
                .collect(),
            stats,
        }
    }

    /// Writes the report to `out` in the requested format.
    ///
    /// # Errors
    ///
    /// Returns [`OriError::WriteError`] or [`OriError::JsonError`] if writing fails.
    pub fn write<W: Write>(&self, format: OutputFormat, out: &mut W) -> Result<(), OriError> {
        match format {
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, self)?;
                writeln!(out)?;
            }
            OutputFormat::Text => self.write_text(out)?,
            OutputFormat::Tsv => self.write_tsv(out)?,
        }
        Ok(())
    }

    fn write_text<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        match self {
            Self::Count { count, .. } => writeln!(out, "{count}"),
            Self::Table { kmers, .. } => {
                for KmerCount { kmer, count } in kmers {
                    writeln!(out, "{kmer} {count}")?;
                }
                Ok(())
            }
            Self::Histogram { bins, .. } => {
                for HistogramBin { count, kmers } in bins {
                    writeln!(out, "{count} {kmers}")?;
                }
                Ok(())
            }
            Self::Frequent { kmers, .. } | Self::Clumps { kmers, .. } => {
                writeln!(out, "{}", kmers.join(" "))
            }
            Self::ReverseComplement { sequence } => writeln!(out, "{sequence}"),
            Self::Positions { positions, .. } => {
                let joined: Vec<String> = positions.iter().map(ToString::to_string).collect();
                writeln!(out, "{}", joined.join(" "))
            }
        }
    }

    fn write_tsv<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        match self {
            Self::Count { pattern, count } => writeln!(out, "{pattern}\t{count}"),
            Self::Table { kmers, .. } => {
                for KmerCount { kmer, count } in kmers {
                    writeln!(out, "{kmer}\t{count}")?;
                }
                Ok(())
            }
            Self::Histogram { bins, .. } => {
                for HistogramBin { count, kmers } in bins {
                    writeln!(out, "{count}\t{kmers}")?;
                }
                Ok(())
            }
            Self::Frequent { kmers, count, .. } => {
                for kmer in kmers {
                    writeln!(out, "{kmer}\t{count}")?;
                }
                Ok(())
            }
            Self::ReverseComplement { sequence } => writeln!(out, "{sequence}"),
            Self::Positions { positions, .. } => {
                for position in positions {
                    writeln!(out, "{position}")?;
                }
                Ok(())
            }
            Self::Clumps { kmers, .. } => {
                for kmer in kmers {
                    writeln!(out, "{kmer}")?;
                }
                Ok(())
            }
        }
    }
}
