//! Component C: Iterative Doubling Binary Search over strip height
//! (spec.md §4.C).

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use log::debug;
use rand::Rng;
use stripfit_core::Rectangle;
use thousands::Separable;

use crate::config::SolverConfig;
use crate::tabu;

/// Best (permutation, achieved height) pair found by one IDBS run, if any.
#[derive(Debug, Clone)]
pub struct IdbsResult {
    pub permutation: Vec<Rectangle>,
    pub height: i64,
    pub wasted_area: i64,
    /// True iff `height` equals the caller-supplied `target_height`, i.e.
    /// the area lower bound was matched.
    pub reached_target: bool,
}

/// `ceil(x * 11 / 10)` using only integer arithmetic, per spec.md §9
/// "Floating-point in IDBS".
fn widen(x: i64) -> i64 {
    (x * 11 + 9) / 10
}

fn div_ceil(a: i64, b: i64) -> i64 {
    (a + b - 1) / b
}

/// Runs IDBS on `rectangles` against strip width `width`, searching for a
/// height as close as possible to `target_height` (or until `time_limit`
/// elapses if no target is known), polling `cancel` between trials.
pub fn run(
    rectangles: &[Rectangle],
    width: i64,
    target_height: Option<i64>,
    time_limit: Duration,
    cancel: &AtomicBool,
    config: &SolverConfig,
    rng: &mut impl Rng,
) -> Option<IdbsResult> {
    let start = Instant::now();
    let total_area: i64 = rectangles.iter().map(Rectangle::area).sum();
    let lb = div_ceil(total_area, width);
    let mut ub = widen(lb);
    let mut iter: u64 = 1;
    let mut best: Option<IdbsResult> = None;
    let mut ub_found = false;

    while !cancel.load(Ordering::Relaxed) && start.elapsed() < time_limit && lb != ub {
        let mut tmp_lb = lb;

        while tmp_lb < ub {
            if cancel.load(Ordering::Relaxed) || start.elapsed() >= time_limit {
                return best;
            }

            let h = (tmp_lb + ub) / 2;
            let max_spread = config.max_spread.unwrap_or(h);
            let outcome = tabu::run(rectangles, width, h, max_spread, iter, cancel, config, rng);
            debug!(
                "trial height {h} (budget {} iterations): {}",
                iter.separate_with_commas(),
                if outcome.success { "feasible" } else { "infeasible" }
            );

            if outcome.success {
                best = Some(IdbsResult {
                    permutation: outcome.permutation.clone(),
                    height: h,
                    wasted_area: outcome.wasted_area,
                    reached_target: target_height == Some(h),
                });
                if target_height == Some(h) {
                    return best;
                }
                ub = h;
                ub_found = true;
            } else {
                tmp_lb = h + 1;
            }
        }

        if !ub_found {
            ub = widen(ub);
        }
        iter *= 2;
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
    fn converges_to_known_optimum() {
        let rects = vec![rect(0, 2, 2), rect(1, 2, 2), rect(2, 2, 2), rect(3, 2, 2)];
        let cancel = AtomicBool::new(false);
        let config = SolverConfig::default();
        let mut rng = SmallRng::seed_from_u64(7);
        let result = run(
            &rects,
            4,
            Some(4),
            Duration::from_secs(5),
            &cancel,
            &config,
            &mut rng,
        )
        .expect("a feasible height should be found");
        assert_eq!(result.height, 4);
        assert!(result.reached_target);
    }

    #[test]
    fn widen_matches_integer_ceiling_of_1_1x() {
        assert_eq!(widen(10), 11);
        assert_eq!(widen(11), 13);
        assert_eq!(widen(100), 110);
    }
}
