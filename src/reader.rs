//! Loading a single sequence from a file or stream.
//!
//! Input is either raw bases (whitespace ignored, as in the textbook data
//! sets) or a FASTA file holding exactly one record. Bases are upper-cased on
//! load; anything still outside `{A, C, G, T}` is rejected later by the
//! operation that receives the sequence.

use std::{
    fmt::Debug,
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};

#[cfg(feature = "tracing")]
use tracing::{debug, info};

use crate::{error::OriError, format::SequenceFormat};

/// Check if a path has a gzip extension (.gz).
fn is_gzip_path(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

/// Reads the sequence stored at `path`.
///
/// Files ending in `.gz` are decompressed when the `gzip` feature is enabled.
///
/// # Errors
///
/// Returns [`OriError::SequenceRead`] if the file cannot be opened or read,
/// and [`OriError::SequenceParse`] if it is not valid raw or single-record
/// FASTA input.
///
/// # Example
///
/// ```rust,no_run
/// use oriscan::format::SequenceFormat;
/// use oriscan::reader::read_sequence;
///
/// let genome = read_sequence("Vibrio_cholerae.txt", SequenceFormat::Auto)?;
/// println!("{} bases", genome.len());
/// # Ok::<(), oriscan::error::OriError>(())
/// ```
pub fn read_sequence<P>(path: P, format: SequenceFormat) -> Result<String, OriError>
where
    P: AsRef<Path> + Debug,
{
    let path = path.as_ref();

    #[cfg(feature = "tracing")]
    info!(path = ?path, format = %format, "reading sequence");

    let file = File::open(path).map_err(|source| OriError::SequenceRead {
        source,
        path: path.to_path_buf(),
    })?;

    let content = if is_gzip_path(path) {
        read_gzip(file, path)?
    } else {
        read_all(file, path)?
    };

    parse_sequence(&content, format.resolve(Some(path), &content))
}

/// Reads one sequence from any reader, e.g. stdin.
///
/// # Errors
///
/// Returns [`OriError::SequenceRead`] on I/O failure and
/// [`OriError::SequenceParse`] on malformed input.
pub fn read_sequence_from<R: Read>(reader: R, format: SequenceFormat) -> Result<String, OriError> {
    let content = read_all(reader, Path::new("<stdin>"))?;
    parse_sequence(&content, format.resolve(None, &content))
}

fn read_all<R: Read>(mut reader: R, path: &Path) -> Result<Vec<u8>, OriError> {
    let mut content = Vec::new();
    reader
        .read_to_end(&mut content)
        .map_err(|source| OriError::SequenceRead {
            source,
            path: PathBuf::from(path),
        })?;
    Ok(content)
}

#[cfg(feature = "gzip")]
fn read_gzip(file: File, path: &Path) -> Result<Vec<u8>, OriError> {
    use flate2::read::GzDecoder;

    let mut content = Vec::new();
    GzDecoder::new(file)
        .read_to_end(&mut content)
        .map_err(|source| OriError::GzipError {
            source,
            path: path.to_path_buf(),
        })?;
    Ok(content)
}

#[cfg(not(feature = "gzip"))]
fn read_gzip(_file: File, path: &Path) -> Result<Vec<u8>, OriError> {
    Err(OriError::SequenceParse {
        details: format!(
            "'{}' is gzip-compressed; rebuild with the `gzip` feature to read it",
            path.display()
        ),
    })
}

/// Turns raw file content into one upper-case sequence.
fn parse_sequence(content: &[u8], format: SequenceFormat) -> Result<String, OriError> {
    let mut seq = if format.is_fasta() {
        parse_fasta(content)?
    } else {
        content
            .iter()
            .copied()
            .filter(|b| !b.is_ascii_whitespace())
            .collect()
    };
    seq.make_ascii_uppercase();

    #[cfg(feature = "tracing")]
    debug!(len = seq.len(), format = %format, "parsed sequence");

    String::from_utf8(seq).map_err(|e| OriError::SequenceParse {
        details: format!("sequence is not valid UTF-8: {e}"),
    })
}

/// Extracts the bases of the only record in a FASTA document.
#[cfg(not(feature = "needletail"))]
fn parse_fasta(content: &[u8]) -> Result<Vec<u8>, OriError> {
    let records = bio::io::fasta::Reader::new(content)
        .records()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| OriError::SequenceParse {
            details: e.to_string(),
        })?;

    match records.as_slice() {
        [record] => Ok(record.seq().to_vec()),
        other => Err(record_count_error(other.len())),
    }
}

/// Extracts the bases of the only record in a FASTA document.
#[cfg(feature = "needletail")]
fn parse_fasta(content: &[u8]) -> Result<Vec<u8>, OriError> {
    let mut reader =
        needletail::parse_fastx_reader(content).map_err(|e| OriError::SequenceParse {
            details: e.to_string(),
        })?;

    let mut seqs = Vec::new();
    while let Some(record) = reader.next() {
        let record = record.map_err(|e| OriError::SequenceParse {
            details: e.to_string(),
        })?;
        seqs.push(record.seq().into_owned());
    }

    match seqs.len() {
        1 => Ok(seqs.swap_remove(0)),
        n => Err(record_count_error(n)),
    }
}

fn record_count_error(found: usize) -> OriError {
    OriError::SequenceParse {
        details: format!("expected exactly one FASTA record, found {found}"),
    }
}
