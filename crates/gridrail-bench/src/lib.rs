//! Benchmark profiles for the gridrail crates.
//!
//! - [`random_commands`]: deterministic level-track command strings
//! - [`random_layout`]: a 4-D graph built from one such string

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use gridrail_core::Dir;
use gridrail_track::{TrackConfig, TrackError, TrackGraph};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const LEVEL_COMMANDS: [char; 7] = ['s', 's', 's', 'l', 'r', 'i', 'o'];

/// `len` level commands drawn from a seeded generator, biased towards
/// straights.
pub fn random_commands(seed: u64, len: usize) -> String {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len)
        .filter_map(|_| LEVEL_COMMANDS.choose(&mut rng).copied())
        .collect()
}

/// Lay random level track in 4-D, retrying with the next seed whenever a
/// string runs into its own incompatible track.
///
/// Random switches in the resulting graph draw from `seed`.
pub fn random_layout(seed: u64, len: usize) -> Result<TrackGraph, TrackError> {
    let config = TrackConfig {
        dim: 4,
        switch_seed: seed,
    };
    let mut attempt = seed;
    loop {
        let mut graph = TrackGraph::new(config.clone())?;
        let commands = random_commands(attempt, len);
        match graph.build(&[0, 0, 0, 0], Dir(0), Dir(6), &commands) {
            Ok(_) => return Ok(graph),
            Err(TrackError::IncompatibleSegment { .. }) => {
                attempt = attempt.wrapping_add(1);
            }
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_commands_are_deterministic() {
        let a = random_commands(42, 200);
        assert_eq!(a.len(), 200);
        assert_eq!(a, random_commands(42, 200));
        assert_ne!(a, random_commands(43, 200));
    }

    #[test]
    fn random_layout_builds() {
        let g = random_layout(7, 100).unwrap();
        assert!(g.tile_count() > 1);
        assert!(g.tile_count() <= 101);
    }
}
