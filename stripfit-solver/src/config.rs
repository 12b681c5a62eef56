//! Tunable search parameters (SPEC_FULL.md §4.E), mirroring the shape of
//! `lbf::lbf_config::LBFConfig`.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for the Tabu Search / IDBS / Parallel Race Harness stack.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SolverConfig {
    /// `L`: neighbor permutations generated per Tabu Search iteration (spec.md §4.B).
    pub tabu_list_length: usize,
    /// `T`: tabu tenure multiplier; a swapped position unlocks after `T * N` iterations.
    pub tabu_tenure_multiplier: u64,
    /// Wall-clock budget for the whole Parallel Race Harness (spec.md §4.C step 2).
    pub time_limit: Duration,
    /// Number of IDBS workers the race harness spawns is `max(1, parallelism / 2)`
    /// (spec.md §4.D).
    pub parallelism: usize,
    /// Seed for per-worker PRNGs. If not defined, each worker seeds from entropy.
    pub prng_seed: Option<u64>,
    /// Vertical spread cap passed to the heuristic. `None` means "use the
    /// trial height" (spec.md §9, Open Question: max_spread).
    pub max_spread: Option<i64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tabu_list_length: 10,
            tabu_tenure_multiplier: 3,
            time_limit: Duration::from_secs(30),
            parallelism: std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4),
            prng_seed: None,
            max_spread: None,
        }
    }
}
