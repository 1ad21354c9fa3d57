use crate::{
    error::{InvalidBaseError, OriError, Parameter},
    kmer::check_range,
    nucleotide::Nucleotide,
};

/// Converts a DNA strand into its [reverse complement](https://en.wikipedia.org/wiki/Complementarity_(molecular_biology)#DNA_and_RNA_base_pair_complementarity).
///
/// Each base is complemented (`A <-> T`, `C <-> G`) and the result is read
/// back to front. Applying it twice returns the input.
///
/// # Errors
///
/// Returns [`OriError::InvalidLength`] for an empty strand and
/// [`OriError::InvalidAlphabet`] at the first byte outside `{A, C, G, T}`.
///
/// # Example
///
/// ```rust
/// use oriscan::revcomp::reverse_complement;
///
/// assert_eq!(reverse_complement("AAAACCCGGT")?, "ACCGGGTTTT");
/// # Ok::<(), oriscan::error::OriError>(())
/// ```
pub fn reverse_complement(strand: &str) -> Result<String, OriError> {
    check_range(Parameter::Text, strand.len(), 1, usize::MAX)?;

    let bases = strand
        .bytes()
        .enumerate()
        .map(|(position, byte)| {
            Nucleotide::try_from(byte).map_err(|base| InvalidBaseError { base, position })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(bases
        .into_iter()
        .rev()
        .map(|n| n.complement().as_char())
        .collect())
}
