//! Fuzz target for `reverse_complement`.
//!
//! Arbitrary bytes must either be rejected (empty, or with the position of
//! the first foreign byte) or complemented into a strand that round-trips.

#![no_main]

use libfuzzer_sys::fuzz_target;
use oriscan::{reverse_complement, OriError};

fuzz_target!(|data: &[u8]| {
    let Ok(strand) = std::str::from_utf8(data) else {
        return;
    };

    match reverse_complement(strand) {
        Ok(rc) => {
            assert_eq!(rc.len(), strand.len());
            assert_eq!(reverse_complement(&rc).unwrap(), strand);
        }
        Err(OriError::InvalidLength(err)) => assert!(data.is_empty() && err.is_empty_input()),
        Err(OriError::InvalidAlphabet(err)) => {
            assert!(err.position < data.len());
            assert_eq!(err.base, data[err.position]);
            assert!(data[..err.position]
                .iter()
                .all(|b| matches!(b, b'A' | b'C' | b'G' | b'T')));
        }
        Err(other) => panic!("unexpected error: {other}"),
    }
});
