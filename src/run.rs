//! Command execution.
//!
//! This module turns a parsed [`Command`] into a [`Report`] by loading its
//! sequence and calling the matching library operation, then writes the
//! report to stdout.

use std::io::{stdin, stdout, BufWriter, Write};

#[cfg(feature = "tracing")]
use tracing::info;

use crate::{
    cli::{Args, Command, OutputFormat, SequenceSource},
    clump::find_clumps_with,
    error::OriError,
    frequency::{build_frequency_table, most_frequent_kmers_with_count},
    histogram::{compute_histogram, histogram_stats},
    output::{KmerCount, Report},
    pattern::{count_occurrences, find_match_positions},
    reader::{read_sequence, read_sequence_from},
    revcomp::reverse_complement,
};

/// Runs the parsed command line and writes the result to stdout.
///
/// # Errors
///
/// Returns any error from loading the sequence, running the operation or
/// writing the output.
pub fn run(args: &Args) -> Result<(), OriError> {
    let report = execute(&args.command)?;
    let mut buf = BufWriter::new(stdout().lock());
    write_report(&report, args.format, &mut buf)
}

/// Writes `report` to `out` and flushes it.
///
/// # Errors
///
/// Returns [`OriError::WriteError`] or [`OriError::JsonError`] on failure.
pub fn write_report<W: Write>(
    report: &Report,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), OriError> {
    report.write(format, out)?;
    out.flush()?;
    Ok(())
}

/// Executes one command and returns its report.
///
/// # Errors
///
/// Returns any error from loading the sequence or from the operation itself.
pub fn execute(command: &Command) -> Result<Report, OriError> {
    #[cfg(feature = "tracing")]
    info!(command = ?command, "executing");

    match command {
        Command::Count { pattern, source } => {
            let text = load_sequence(source)?;
            let pattern = normalize(pattern);
            let count = count_occurrences(&text, &pattern)?;
            Ok(Report::Count { pattern, count })
        }
        Command::Table {
            k,
            min_count,
            histogram,
            source,
        } => {
            let text = load_sequence(source)?;
            let table = build_frequency_table(&text, *k)?;

            if *histogram {
                let hist = compute_histogram(&table);
                let stats = histogram_stats(&hist);
                return Ok(Report::histogram(*k, &hist, stats));
            }

            let mut kmers: Vec<KmerCount> = table
                .iter()
                .filter(|(_, count)| count >= min_count)
                .map(|(kmer, count)| KmerCount {
                    kmer: kmer.to_string(),
                    count,
                })
                .collect();
            kmers.sort_unstable_by(|a, b| a.kmer.cmp(&b.kmer));
            Ok(Report::Table { k: *k, kmers })
        }
        Command::Frequent { k, source } => {
            let text = load_sequence(source)?;
            let (kmers, count) = most_frequent_kmers_with_count(&text, *k)?;
            Ok(Report::Frequent {
                k: *k,
                count,
                kmers: kmers.into_iter().collect(),
            })
        }
        Command::Revcomp { source } => {
            let strand = load_sequence(source)?;
            Ok(Report::ReverseComplement {
                sequence: reverse_complement(&strand)?,
            })
        }
        Command::Find { pattern, source } => {
            let genome = load_sequence(source)?;
            let pattern = normalize(pattern);
            let positions = find_match_positions(&genome, &pattern)?;
            Ok(Report::Positions { pattern, positions })
        }
        Command::Clumps {
            k,
            window,
            threshold,
            strategy,
            source,
        } => {
            let genome = load_sequence(source)?;
            let kmers = find_clumps_with(*strategy, &genome, *k, *window, *threshold)?;
            Ok(Report::Clumps {
                k: *k,
                window: *window,
                threshold: *threshold,
                kmers: kmers.into_iter().collect(),
            })
        }
    }
}

/// Loads the sequence named by `source`: inline, from a file, or from stdin.
///
/// # Errors
///
/// Returns [`OriError::SequenceRead`] or [`OriError::SequenceParse`] when the
/// file or stream cannot be read.
pub fn load_sequence(source: &SequenceSource) -> Result<String, OriError> {
    match (&source.sequence, &source.input) {
        (Some(sequence), _) => Ok(normalize(sequence)),
        (None, Some(path)) => read_sequence(path, source.input_format),
        (None, None) => read_sequence_from(stdin().lock(), source.input_format),
    }
}

/// Upper-cases an inline sequence and drops surrounding whitespace.
fn normalize(seq: &str) -> String {
    seq.trim().to_ascii_uppercase()
}
