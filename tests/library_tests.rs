//! Direct library API tests.
//!
//! These tests call the library functions directly without going through the CLI,
//! enabling more precise assertions about behavior and return values.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use oriscan::builder::ClumpFinder;
use oriscan::format::SequenceFormat;
use oriscan::reader::read_sequence;
use oriscan::{
    build_frequency_table, count_occurrences, find_clumps, find_clumps_parallel,
    find_clumps_sliding, find_match_positions, most_frequent_kmers, reverse_complement,
    LengthError, OriError, Parameter,
};
use std::collections::BTreeSet;

/// The 540-base replication origin of *Vibrio cholerae*.
fn vibrio_ori() -> String {
    read_sequence("tests/fixtures/ori_vibrio.fa", SequenceFormat::Auto)
        .expect("fixture should load")
}

fn set(kmers: &[&str]) -> BTreeSet<String> {
    kmers.iter().map(|s| (*s).to_string()).collect()
}

#[test]
fn ori_fixture_loads_upper_case() {
    let ori = vibrio_ori();
    assert_eq!(ori.len(), 540);
    assert!(ori.starts_with("ATCAATGATCAACG"));
}

#[test]
fn most_frequent_kmers_in_vibrio_ori() {
    let ori = vibrio_ori();

    let cases: [(usize, &[&str]); 5] = [
        (3, &["TGA"]),
        (4, &["ATGA"]),
        (5, &["GATCA", "TGATC"]),
        (6, &["TGATCA"]),
        (9, &["ATGATCAAG", "CTCTTGATC", "CTTGATCAT", "TCTTGATCA"]),
    ];
    for (k, expected) in cases {
        assert_eq!(most_frequent_kmers(&ori, k).unwrap(), set(expected), "k = {k}");
    }
}

#[test]
fn dnaa_box_and_reverse_complement_both_occur_three_times() {
    let ori = vibrio_ori();
    let rc = reverse_complement("ATGATCAAG").unwrap();
    assert_eq!(rc, "CTTGATCAT");

    assert_eq!(find_match_positions(&ori, "ATGATCAAG").unwrap(), vec![27, 127, 508]);
    assert_eq!(find_match_positions(&ori, &rc).unwrap(), vec![397, 468, 525]);
    assert_eq!(count_occurrences(&ori, "ATGATCAAG").unwrap(), 3);
}

#[test]
fn clumps_in_vibrio_ori() {
    let ori = vibrio_ori();
    let expected = set(&["ATGATCAAG", "CTCTTGATC", "CTTGATCAT", "TCTTGATCA"]);

    assert_eq!(find_clumps(&ori, 9, 500, 3).unwrap(), expected);
    assert_eq!(find_clumps_sliding(&ori, 9, 500, 3).unwrap(), expected);
    assert_eq!(find_clumps_parallel(&ori, 9, 500, 3).unwrap(), expected);
}

#[test]
fn clump_sample_from_raw_file() {
    let genome = read_sequence("tests/fixtures/clump_sample.txt", SequenceFormat::Auto).unwrap();
    assert_eq!(genome.len(), 100);

    let clumps = find_clumps(&genome, 5, 75, 4).unwrap();
    assert!(clumps.contains("CGACA"));
    assert_eq!(clumps, set(&["AATGT", "CGACA", "GAAGA"]));
}

#[test]
fn builder_over_fixture() {
    let ori = vibrio_ori();
    let clumps = ClumpFinder::new()
        .k(9)
        .unwrap()
        .window(500)
        .unwrap()
        .min_occurrences(3)
        .unwrap()
        .find(&ori)
        .unwrap();
    assert!(clumps.contains("ATGATCAAG"));
}

#[test]
fn frequency_table_total_on_fixture() {
    let ori = vibrio_ori();
    let table = build_frequency_table(&ori, 9).unwrap();
    assert_eq!(table.total(), 540 - 9 + 1);
    assert_eq!(table.max_count(), 3);
    assert_eq!(table.get("ATGATCAAG"), 3);
}

#[test]
fn multi_record_fasta_is_rejected() {
    let err = read_sequence("tests/fixtures/two_records.fa", SequenceFormat::Auto).unwrap_err();
    assert!(matches!(err, OriError::SequenceParse { .. }));
}

#[test]
fn errors_are_explicit_not_empty_results() {
    assert!(matches!(
        count_occurrences("ACG", "ACGT").unwrap_err(),
        OriError::InvalidLength(LengthError {
            parameter: Parameter::Pattern,
            ..
        })
    ));
    assert!(matches!(
        most_frequent_kmers("ACG", 4).unwrap_err(),
        OriError::InvalidLength(LengthError {
            parameter: Parameter::Kmer,
            ..
        })
    ));
    assert!(matches!(
        find_match_positions("", "A").unwrap_err(),
        OriError::InvalidLength(e) if e.is_empty_input()
    ));
    assert!(matches!(
        reverse_complement("").unwrap_err(),
        OriError::InvalidLength(e) if e.is_empty_input()
    ));
    assert!(matches!(
        reverse_complement("ACGU").unwrap_err(),
        OriError::InvalidAlphabet(e) if e.base == b'U' && e.position == 3
    ));
}

#[test]
fn error_messages_are_readable() {
    let err = find_clumps("ACGTACGT", 3, 10, 2).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid window length 10: must be between 1 and 8"
    );

    let err = count_occurrences("ACGT", "ANG").unwrap_err();
    assert_eq!(err.to_string(), "invalid base 'N' (0x4e) at position 1");
}
