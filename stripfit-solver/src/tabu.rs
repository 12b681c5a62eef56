//! Component B: Tabu Search over rectangle permutations (spec.md §4.B).

use std::sync::atomic::{AtomicBool, Ordering};

use rand::Rng;
use stripfit_core::heuristic;
use stripfit_core::Rectangle;

use crate::config::SolverConfig;

/// Outcome of one Tabu Search invocation: whether a fully-feasible
/// permutation was found at the requested height, and the best permutation
/// observed regardless (spec.md §4.B contract).
#[derive(Debug, Clone)]
pub struct TabuOutcome {
    pub success: bool,
    pub permutation: Vec<Rectangle>,
    pub wasted_area: i64,
}

/// Lower is better. A complete placement always beats a partial one,
/// regardless of wasted area (spec.md §4.B step 2: "all placed" strictly
/// preferred over "any unplaced").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Score {
    Complete(i64),
    Partial(usize),
}

fn score(outcome: &heuristic::HeuristicOutcome, total: usize) -> Score {
    if outcome.success {
        Score::Complete(outcome.wasted_area)
    } else {
        Score::Partial(total - outcome.placed_count)
    }
}

/// Runs Tabu Search on `rectangles` against strip width `width` and height
/// cap `height`, for up to `budget` iterations, polling `cancel` between
/// iterations. Returns the best permutation observed, per spec.md §4.B.
pub fn run(
    rectangles: &[Rectangle],
    width: i64,
    height: i64,
    max_spread: i64,
    budget: u64,
    cancel: &AtomicBool,
    config: &SolverConfig,
    rng: &mut impl Rng,
) -> TabuOutcome {
    let n = rectangles.len();
    let tenure = config.tabu_tenure_multiplier * n as u64;

    let mut permutation: Vec<Rectangle> = rectangles.to_vec();
    let mut tabu = vec![0u64; n];

    let initial = heuristic::run(&permutation, width, height, max_spread);
    let mut best_score = score(&initial, n);
    let mut best = TabuOutcome {
        success: initial.success,
        permutation: permutation.clone(),
        wasted_area: initial.wasted_area,
    };
    if best.success {
        return best;
    }

    for k in 1..=budget {
        if cancel.load(Ordering::Relaxed) {
            return best;
        }
        if n < 2 {
            break;
        }

        let mut best_neighbor: Option<(Vec<Rectangle>, Score, bool, i64, usize, usize)> = None;
        for _ in 0..config.tabu_list_length {
            let a = rng.random_range(0..n);
            let mut b = rng.random_range(0..n);
            while b == a {
                b = rng.random_range(0..n);
            }
            if tabu[a] > k || tabu[b] > k {
                continue;
            }
            let mut neighbor = permutation.clone();
            neighbor.swap(a, b);
            let outcome = heuristic::run(&neighbor, width, height, max_spread);
            let s = score(&outcome, n);
            let better = match &best_neighbor {
                None => true,
                Some((_, cur, ..)) => s < *cur,
            };
            if better {
                best_neighbor = Some((neighbor, s, outcome.success, outcome.wasted_area, a, b));
            }
        }

        let Some((neighbor, s, success, wasted_area, a, b)) = best_neighbor else {
            continue;
        };

        permutation = neighbor;
        tabu[a] = k + tenure;
        tabu[b] = k + tenure;

        if s < best_score {
            best_score = s;
            best = TabuOutcome {
                success,
                permutation: permutation.clone(),
                wasted_area,
            };
        }

        if success {
            return best;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn rect(id: usize, w: i64, h: i64) -> Rectangle {
        Rectangle::new(id, w, h)
    }

    #[test]
    fn finds_feasible_permutation_when_one_exists() {
        // Order (3,2)(2,2)(3,2) leaves no room at height 4 in a width-5 strip for the
        // direct scan, but the heuristic's candidate-point search already finds a fit
        // for any order here; reordering verifies the search can recover success.
        let rects = vec![rect(0, 2, 2), rect(1, 3, 2), rect(2, 3, 2)];
        let cancel = AtomicBool::new(false);
        let config = SolverConfig::default();
        let mut rng = SmallRng::seed_from_u64(42);
        let outcome = run(&rects, 5, 4, 4, 50, &cancel, &config, &mut rng);
        assert!(outcome.success);
        assert_eq!(outcome.permutation.len(), 3);
    }

    #[test]
    fn respects_cancellation() {
        let rects = vec![rect(0, 3, 3), rect(1, 3, 3)];
        let cancel = AtomicBool::new(true);
        let config = SolverConfig::default();
        let mut rng = SmallRng::seed_from_u64(1);
        // height 3 is infeasible for two 3x3 rects in a width-4 strip; cancellation
        // should make this return promptly with the initial (failed) attempt.
        let outcome = run(&rects, 4, 3, 3, 1000, &cancel, &config, &mut rng);
        assert!(!outcome.success);
    }
}
