//! Invariant checks for the placement heuristic, in the style of
//! `jagua-rs-spp::util::assertions`: plain `bool`-returning predicates meant
//! to be wrapped in `debug_assert!` at call sites and exercised directly in
//! tests.

use crate::entities::instance::Instance;
use crate::entities::solution::Solution;

/// spec.md §8 property 1: no two placed rectangles share interior area.
pub fn no_overlaps(instance: &Instance, solution: &Solution) -> bool {
    let rects: Vec<_> = solution
        .placements
        .iter()
        .map(|p| {
            let r = &instance.rectangles[p.rectangle_id];
            let (w, h) = r.dims(p.rotated);
            (p.x, p.y, w, h)
        })
        .collect();

    for i in 0..rects.len() {
        for j in (i + 1)..rects.len() {
            let (xi, yi, wi, hi) = rects[i];
            let (xj, yj, wj, hj) = rects[j];
            let disjoint = xi + wi <= xj || xj + wj <= xi || yi + hi <= yj || yj + hj <= yi;
            if !disjoint {
                return false;
            }
        }
    }
    true
}

/// spec.md §8 property 2: every placement lies within `[0, width) x [0, height)`.
pub fn all_contained(instance: &Instance, solution: &Solution) -> bool {
    solution.placements.iter().all(|p| {
        let r = &instance.rectangles[p.rectangle_id];
        let (w, h) = r.dims(p.rotated);
        p.x >= 0 && p.y >= 0 && p.x + w <= instance.width && p.y + h <= solution.height
    })
}

/// spec.md §8 property 4: the achieved height times the width can never be
/// smaller than the area actually placed.
pub fn area_accounting(instance: &Instance, solution: &Solution, wasted_area: i64) -> bool {
    let placed_area: i64 = solution
        .placements
        .iter()
        .map(|p| instance.rectangles[p.rectangle_id].area())
        .sum();
    placed_area + wasted_area <= instance.width * solution.height
}

/// spec.md §3: the skyline's sentinel entries are never removed and the
/// solution accounts for exactly the rectangles given.
pub fn solution_complete(instance: &Instance, solution: &Solution) -> bool {
    solution.placements.len() == instance.len()
}
