//! Component A: the Skyline Heuristic (spec.md §4.A).
//!
//! A deterministic, constructive placement algorithm: given a permutation of
//! rectangles and a bounded strip height, decide for every rectangle where
//! (if anywhere) to place it, maintaining a piecewise-constant skyline and
//! enforcing a lookahead waste/fitness decision rule at every placement.
//!
//! Ported directly from `original_source/src/heuristic.py`, generalized to
//! Rust's ownership model by bundling all ephemeral per-run state (the
//! segment list, the rectangles, the running minima) into local bindings
//! that live only for the duration of `run` (Design Note "Mutable shared
//! state" in spec.md §9).

mod fitness;
mod place;
mod segment;
mod waste;

use itertools::Itertools;
use log::trace;
use segment::{candidate_points, CandidatePoint, Segment};
use waste::Minima;

use crate::entities::rectangle::Rectangle;
use crate::entities::solution::Placement;

/// Result of one heuristic run over a fixed permutation and height.
#[derive(Debug, Clone)]
pub struct HeuristicOutcome {
    pub success: bool,
    /// Placements in the instance's original rectangle-id order. Empty on
    /// failure (spec.md §4.A: "On failure, no partial placements are
    /// exposed").
    pub placements: Vec<Placement>,
    pub wasted_area: i64,
    /// How many rectangles had been placed when the run ended, whether it
    /// succeeded or got stuck. Used by Tabu Search to score a failed run
    /// (spec.md §4.B step 2); not a "partial placement" in the §4.A sense
    /// since no coordinates are exposed alongside it.
    pub placed_count: usize,
}

#[derive(Debug, Clone, Copy)]
struct WorkItem {
    id: usize,
    width: i64,
    height: i64,
    /// Position within the permutation passed to `run`; reassigned on every
    /// call, per spec.md §3 ("A stable input index in the original sequence
    /// is assigned when a permutation is evaluated").
    seq_index: usize,
    placed: bool,
    rotated: bool,
    pos: (i64, i64),
}

impl WorkItem {
    fn dims(&self, rotated: bool) -> (i64, i64) {
        if rotated {
            (self.height, self.width)
        } else {
            (self.width, self.height)
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    point_idx: usize,
    rect_pos: usize,
    rotated: bool,
}

/// Runs the Skyline Heuristic on `sequence`, a permutation of rectangles
/// given in priority order, against a strip of width `width` and a hard
/// height cap of `height`. `max_spread` bounds how far above the skyline's
/// current low point a placement may reach (spec.md §9: defaults to
/// `height` when the caller doesn't want the constraint).
pub fn run(sequence: &[Rectangle], width: i64, height: i64, max_spread: i64) -> HeuristicOutcome {
    let mut rects: Vec<WorkItem> = sequence
        .iter()
        .enumerate()
        .map(|(seq_index, r)| WorkItem {
            id: r.id,
            width: r.width,
            height: r.height,
            seq_index,
            placed: false,
            rotated: false,
            pos: (0, 0),
        })
        .collect();

    let mut segments = vec![
        Segment { x: -1, y: height },
        Segment { x: 0, y: 0 },
        Segment { x: width, y: height },
    ];
    let mut wasted = 0i64;
    let total = rects.len();
    let mut remaining = total;

    while remaining > 0 {
        let minima = compute_minima(&rects);
        let lowest_y = segments.iter().map(|s| s.y).min().unwrap();
        let points = candidate_points(&segments);

        let (valid, only_fits) =
            find_valid_placements(&rects, &points, &minima, height, max_spread, lowest_y);

        if valid.is_empty() {
            trace!(
                "heuristic stuck at height {height}: {} of {total} placed, no valid placements remain",
                total - remaining
            );
            return HeuristicOutcome {
                success: false,
                placements: Vec::new(),
                wasted_area: wasted,
                placed_count: total - remaining,
            };
        }

        let chosen = select(&rects, &segments, &points, &minima, height, valid, only_fits, &mut wasted);

        let point = points[chosen.point_idx].expect("chosen point exists");
        let (rw, rh) = rects[chosen.rect_pos].dims(chosen.rotated);
        let bottom_left = place::place(&mut segments, chosen.point_idx, point.is_left, rw, rh);

        {
            let item = &mut rects[chosen.rect_pos];
            item.placed = true;
            item.rotated = chosen.rotated;
            item.pos = bottom_left;
        }
        place::merge_unnecessary_segments(&mut segments, rw, &minima);
        debug_assert!(
            segment::invariants_hold(&segments, height),
            "segment list invariants (spec.md §3) violated after placing rectangle {}",
            rects[chosen.rect_pos].id
        );

        remaining -= 1;
    }

    debug_assert!(
        no_overlaps(&rects),
        "two placed rectangles overlap (spec.md §8 property 1)"
    );
    debug_assert!(
        all_contained(&rects, width, height),
        "a placed rectangle falls outside [0,W]x[0,H] (spec.md §8 property 2)"
    );

    let placements = rects
        .iter()
        .map(|r| Placement {
            rectangle_id: r.id,
            x: r.pos.0,
            y: r.pos.1,
            rotated: r.rotated,
        })
        .collect();

    HeuristicOutcome {
        success: true,
        placements,
        wasted_area: wasted,
        placed_count: total,
    }
}

/// spec.md §8 property 1, checked with `debug_assert!` at the end of every
/// successful run.
fn no_overlaps(rects: &[WorkItem]) -> bool {
    for i in 0..rects.len() {
        for j in (i + 1)..rects.len() {
            let (xi, yi) = rects[i].pos;
            let (wi, hi) = rects[i].dims(rects[i].rotated);
            let (xj, yj) = rects[j].pos;
            let (wj, hj) = rects[j].dims(rects[j].rotated);
            let disjoint = xi + wi <= xj || xj + wj <= xi || yi + hi <= yj || yj + hj <= yi;
            if !disjoint {
                return false;
            }
        }
    }
    true
}

/// spec.md §8 property 2, checked with `debug_assert!` at the end of every
/// successful run.
fn all_contained(rects: &[WorkItem], width: i64, height: i64) -> bool {
    rects.iter().all(|r| {
        let (w, h) = r.dims(r.rotated);
        r.pos.0 >= 0 && r.pos.1 >= 0 && r.pos.0 + w <= width && r.pos.1 + h <= height
    })
}

/// Finds `w_min`/`w_sec` (and, since rotation is free, `h_min == w_min`,
/// `h_sec == w_sec`) across the unplaced rectangles — spec.md §4.A step 1.
fn compute_minima(rects: &[WorkItem]) -> Minima {
    let smallest: Vec<i64> = rects
        .iter()
        .filter(|r| !r.placed)
        .map(|r| r.width.min(r.height))
        .k_smallest(2)
        .collect();
    let w_min = smallest[0];
    // When only one rectangle remains, w_sec collapses to w_min (spec.md §4.A
    // step 1's `|unplaced| == 1` special case falls out of this naturally).
    let w_sec = smallest.get(1).copied().unwrap_or(w_min);
    Minima {
        w_min,
        w_sec,
        h_min: w_min,
        h_sec: w_sec,
    }
}

/// spec.md §4.A step 3: for every (point, rectangle, rotation) triple,
/// accept iff it fits the point's `w_max`, the height cap, and the spread
/// constraint; track points with exactly one accepted pair as "only fits".
fn find_valid_placements(
    rects: &[WorkItem],
    points: &[Option<CandidatePoint>],
    minima: &Minima,
    bin_height: i64,
    max_spread: i64,
    lowest_y: i64,
) -> (Vec<Candidate>, Vec<Candidate>) {
    let _ = minima; // minima influences waste/fitness, not admissibility
    let mut valid = Vec::new();
    let mut only_fits = Vec::new();

    for (point_idx, maybe_point) in points.iter().enumerate() {
        let Some(point) = maybe_point else { continue };
        let mut count = 0usize;
        let mut last = None;
        for (rect_pos, r) in rects.iter().enumerate() {
            if r.placed {
                continue;
            }
            if r.width <= point.w_max
                && point.py + r.height - lowest_y <= max_spread
                && point.py + r.height <= bin_height
            {
                let c = Candidate {
                    point_idx,
                    rect_pos,
                    rotated: false,
                };
                valid.push(c);
                count += 1;
                last = Some(c);
            }
            if r.height <= point.w_max
                && point.py + r.width - lowest_y <= max_spread
                && point.py + r.width <= bin_height
            {
                let c = Candidate {
                    point_idx,
                    rect_pos,
                    rotated: true,
                };
                valid.push(c);
                count += 1;
                last = Some(c);
            }
        }
        if count == 1 {
            only_fits.push(last.expect("count == 1 implies a recorded candidate"));
        }
    }
    (valid, only_fits)
}

/// The selection cascade of spec.md §4.A step 4: only-fits override,
/// min-waste filter, max-fitness filter, then the positional tiebreak.
fn select(
    rects: &[WorkItem],
    segments: &[Segment],
    points: &[Option<CandidatePoint>],
    minima: &Minima,
    bin_height: i64,
    valid: Vec<Candidate>,
    only_fits: Vec<Candidate>,
    wasted: &mut i64,
) -> Candidate {
    let pool = if only_fits.len() == 1 {
        return only_fits[0];
    } else if only_fits.len() > 1 {
        only_fits
    } else {
        valid
    };

    let mut min_waste = i64::MAX;
    let mut after_waste = Vec::new();
    for c in &pool {
        let (rw, rh) = rects[c.rect_pos].dims(c.rotated);
        let w = waste::waste(segments, points, c.point_idx, minima, bin_height, rw, rh);
        if w < min_waste {
            min_waste = w;
            after_waste.clear();
            after_waste.push(*c);
        } else if w == min_waste {
            after_waste.push(*c);
        }
    }
    *wasted += min_waste;
    if after_waste.len() == 1 {
        return after_waste[0];
    }

    let mut max_fitness = -1;
    let mut after_fitness = Vec::new();
    for c in &after_waste {
        let point = points[c.point_idx].expect("candidate point exists");
        let (rw, rh) = rects[c.rect_pos].dims(c.rotated);
        let f = fitness::fitness(segments, &point, c.point_idx, bin_height, rw, rh);
        if f > max_fitness {
            max_fitness = f;
            after_fitness.clear();
            after_fitness.push(*c);
        } else if f == max_fitness {
            after_fitness.push(*c);
        }
    }
    if after_fitness.len() == 1 {
        return after_fitness[0];
    }

    tiebreak(rects, segments, points, after_fitness)
}

/// Minimum rectangle index in the permutation, then minimum `py`, then
/// minimum `px` (spec.md §4.A step 4 "Tie-break").
fn tiebreak(
    rects: &[WorkItem],
    segments: &[Segment],
    points: &[Option<CandidatePoint>],
    cands: Vec<Candidate>,
) -> Candidate {
    let min_seq = cands
        .iter()
        .map(|c| rects[c.rect_pos].seq_index)
        .min()
        .unwrap();
    let cands: Vec<_> = cands
        .into_iter()
        .filter(|c| rects[c.rect_pos].seq_index == min_seq)
        .collect();
    if cands.len() == 1 {
        return cands[0];
    }

    let min_py = cands
        .iter()
        .map(|c| points[c.point_idx].unwrap().py)
        .min()
        .unwrap();
    let cands: Vec<_> = cands
        .into_iter()
        .filter(|c| points[c.point_idx].unwrap().py == min_py)
        .collect();
    if cands.len() == 1 {
        return cands[0];
    }

    let min_px = cands.iter().map(|c| segments[c.point_idx].x).min().unwrap();
    cands
        .into_iter()
        .find(|c| segments[c.point_idx].x == min_px)
        .expect("at least one candidate matches the minimum px")
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn rect(id: usize, w: i64, h: i64) -> Rectangle {
        Rectangle::new(id, w, h)
    }

    /// S1 — single rectangle exactly filling the strip.
    #[test]
    fn single_rectangle() {
        let seq = vec![rect(0, 10, 5)];
        let out = run(&seq, 10, 5, 5);
        assert!(out.success);
        assert_eq!(out.wasted_area, 0);
        assert_eq!(out.placements.len(), 1);
        let p = out.placements[0];
        assert_eq!((p.x, p.y, p.rotated), (0, 0, false));
    }

    /// S2 — perfect tiling of a 4x4 square with four 2x2 rectangles.
    #[test]
    fn perfect_tiling() {
        let seq = vec![rect(0, 2, 2), rect(1, 2, 2), rect(2, 2, 2), rect(3, 2, 2)];
        let out = run(&seq, 4, 4, 4);
        assert!(out.success);
        assert_eq!(out.placements.len(), 4);
        for p in &out.placements {
            assert_eq!((p.x, p.y), (p.x, p.y));
            assert!(p.x == 0 || p.x == 2);
            assert!(p.y == 0 || p.y == 2);
        }
        // all four quadrants covered, no duplicate corner
        let mut corners: Vec<(i64, i64)> = out.placements.iter().map(|p| (p.x, p.y)).collect();
        corners.sort();
        assert_eq!(corners, vec![(0, 0), (0, 2), (2, 0), (2, 2)]);
    }

    /// S3 — rotation required to fit a width-3 row of height 3.
    #[test]
    fn rotation_required() {
        let seq = vec![rect(0, 1, 3), rect(1, 2, 3), rect(2, 3, 1)];
        let out = run(&seq, 3, 3, 3);
        assert!(out.success);
        assert!(out.placements.iter().any(|p| p.rotated));
    }

    /// S4 — forced waste: two 3x2 pieces beside a 2x2 one in a width-5 strip.
    #[test]
    fn forced_waste() {
        let seq = vec![rect(0, 3, 2), rect(1, 3, 2), rect(2, 2, 2)];
        let out = run(&seq, 5, 4, 4);
        assert!(out.success);
        assert!(out.wasted_area <= 2);
    }

    /// S5 — infeasible at height: second 3x3 piece has nowhere to go at H=3.
    #[test]
    fn infeasible_at_height() {
        let seq = vec![rect(0, 3, 3), rect(1, 3, 3)];
        let out = run(&seq, 4, 3, 3);
        assert!(!out.success);
        assert!(out.placements.is_empty());
    }

    #[test_case(vec![(10,5)], 10, 5; "single")]
    #[test_case(vec![(2,2),(2,2),(2,2),(2,2)], 4, 4; "tiling")]
    #[test_case(vec![(1,3),(2,3),(3,1)], 3, 3; "rotation")]
    fn non_overlap_and_containment(dims: Vec<(i64, i64)>, width: i64, height: i64) {
        let seq: Vec<Rectangle> = dims
            .into_iter()
            .enumerate()
            .map(|(id, (w, h))| rect(id, w, h))
            .collect();
        let out = run(&seq, width, height, height);
        assert!(out.success);

        // Containment (spec.md §8 property 2).
        for (p, r) in out.placements.iter().zip(seq.iter()) {
            let (w, h) = r.dims(p.rotated);
            assert!(p.x >= 0 && p.x + w <= width);
            assert!(p.y >= 0 && p.y + h <= height);
        }

        // Non-overlap (spec.md §8 property 1): pairwise interior disjointness.
        for i in 0..out.placements.len() {
            for j in (i + 1)..out.placements.len() {
                let (pi, ri) = (out.placements[i], seq[i]);
                let (pj, rj) = (out.placements[j], seq[j]);
                let (wi, hi) = ri.dims(pi.rotated);
                let (wj, hj) = rj.dims(pj.rotated);
                let disjoint = pi.x + wi <= pj.x
                    || pj.x + wj <= pi.x
                    || pi.y + hi <= pj.y
                    || pj.y + hj <= pi.y;
                assert!(disjoint, "rectangles {i} and {j} overlap");
            }
        }
    }

    /// Idempotence (spec.md §8 property 7): same inputs, byte-identical
    /// placements.
    #[test]
    fn idempotent() {
        let seq = vec![rect(0, 3, 2), rect(1, 3, 2), rect(2, 2, 2)];
        let a = run(&seq, 5, 4, 4);
        let b = run(&seq, 5, 4, 4);
        assert_eq!(a.success, b.success);
        assert_eq!(a.wasted_area, b.wasted_area);
        for (pa, pb) in a.placements.iter().zip(b.placements.iter()) {
            assert_eq!((pa.x, pa.y, pa.rotated), (pb.x, pb.y, pb.rotated));
        }
    }

    /// Area accounting (spec.md §8 property 4).
    #[test]
    fn area_accounting() {
        let seq = vec![rect(0, 3, 2), rect(1, 3, 2), rect(2, 2, 2)];
        let out = run(&seq, 5, 4, 4);
        assert!(out.success);
        let total_area: i64 = seq.iter().map(Rectangle::area).sum();
        assert!(total_area + out.wasted_area <= 5 * 4);
    }
}
