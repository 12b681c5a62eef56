//! Fitness scoring, per spec.md §4.A "Fitness computation" /
//! `original_source/src/heuristic.py`'s `find_fitness`.

use super::segment::{CandidatePoint, Segment};

/// Integer quality score in `[0, 4]` rewarding exact-match placements and
/// roof contact.
pub(crate) fn fitness(
    segments: &[Segment],
    point: &CandidatePoint,
    i: usize,
    bin_height: i64,
    rw: i64,
    rh: i64,
) -> i32 {
    let mut fitness = 0;
    if point.is_left {
        if segments[i - 1].y - segments[i].y == rh {
            fitness += 1;
        }
        if point.w_base == rw {
            fitness += 1;
            if segments[i + 1].y - segments[i].y == rh {
                fitness += 1;
            }
        }
    } else {
        if segments[i].y - segments[i - 1].y == rh {
            fitness += 1;
        }
        if point.w_base == rw {
            fitness += 1;
            if segments[i - 2].y - segments[i - 1].y == rh {
                fitness += 1;
            }
        }
    }
    if point.py + rh == bin_height {
        fitness += 1;
    }
    fitness
}
