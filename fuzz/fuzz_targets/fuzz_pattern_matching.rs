//! Fuzz target for pattern counting and location.
//!
//! The first byte splits the input into a pattern and a text. Counting and
//! locating must agree whenever both succeed, and fail together otherwise.

#![no_main]

use libfuzzer_sys::fuzz_target;
use oriscan::{count_occurrences, find_match_positions};

fuzz_target!(|data: &[u8]| {
    let Some((&split, rest)) = data.split_first() else {
        return;
    };
    let Ok(rest) = std::str::from_utf8(rest) else {
        return;
    };
    let split = usize::from(split).min(rest.len());
    if !rest.is_char_boundary(split) {
        return;
    }
    let (pattern, text) = rest.split_at(split);

    match (
        count_occurrences(text, pattern),
        find_match_positions(text, pattern),
    ) {
        (Ok(count), Ok(positions)) => {
            assert_eq!(count, positions.len());
            for i in positions {
                assert_eq!(&text[i..i + pattern.len()], pattern);
            }
        }
        (Err(a), Err(b)) => assert_eq!(a.to_string(), b.to_string()),
        (a, b) => panic!("count and find disagree: {a:?} vs {b:?}"),
    }
});
