//! Fuzz target for the clump finders.
//!
//! The exhaustive, sliding and parallel strategies must return the same set
//! or the same error for any genome and parameters.

#![no_main]

use libfuzzer_sys::fuzz_target;
use oriscan::{find_clumps, find_clumps_parallel, find_clumps_sliding};

fuzz_target!(|data: &[u8]| {
    let [k, window, threshold, genome @ ..] = data else {
        return;
    };
    if genome.len() > 512 {
        return;
    }
    let Ok(genome) = std::str::from_utf8(genome) else {
        return;
    };
    let (k, window, threshold) = (
        usize::from(*k % 16),
        usize::from(*window),
        usize::from(*threshold % 8),
    );

    let exhaustive = find_clumps(genome, k, window, threshold);
    let sliding = find_clumps_sliding(genome, k, window, threshold);
    let parallel = find_clumps_parallel(genome, k, window, threshold);

    match (exhaustive, sliding, parallel) {
        (Ok(a), Ok(b), Ok(c)) => {
            assert_eq!(a, b);
            assert_eq!(a, c);
        }
        (Err(a), Err(b), Err(c)) => {
            assert_eq!(a.to_string(), b.to_string());
            assert_eq!(a.to_string(), c.to_string());
        }
        other => panic!("strategies disagree: {other:?}"),
    }
});
