//! Placement and segment-list maintenance, per spec.md §4.A "Placement &
//! segment update" / "Segment merging" and
//! `original_source/src/heuristic.py`'s `place` / `merge_unnecessary_segments`.

use super::segment::Segment;
use super::waste::Minima;

/// Applies a chosen placement at candidate point `i`, updating the segment
/// list in place. Returns the rectangle's bottom-left corner.
pub(crate) fn place(segments: &mut Vec<Segment>, i: usize, is_left: bool, rw: i64, rh: i64) -> (i64, i64) {
    let bottom_left = if is_left {
        let x0 = segments[i].x;
        let y0 = segments[i].y;
        let new_segment = Segment {
            x: x0,
            y: y0 + rh,
        };
        let right_side = x0 + rw;
        let mut p = i;
        let mut last = segments.len() - 1;
        while p < last && segments[p + 1].x <= right_side {
            segments.remove(p);
            last -= 1;
        }
        segments[p].x = right_side;
        segments.insert(i, new_segment);
        (x0, y0)
    } else {
        let rec_x = segments[i].x - rw;
        let base_y = segments[i - 1].y;
        let new_segment = Segment {
            x: rec_x,
            y: base_y + rh,
        };
        let mut p = i;
        while segments[p - 1].x >= rec_x {
            segments.remove(p - 1);
            p -= 1;
        }
        segments.insert(p, new_segment);
        (rec_x, base_y)
    };
    bottom_left
}

/// Repeatedly removes narrow valleys and equal-height adjacencies until a
/// full pass removes nothing. Never deletes the two sentinel entries
/// `segments[0]` / `segments[last]` — see SPEC_FULL.md §3 / DESIGN.md OQ-1.
pub(crate) fn merge_unnecessary_segments(segments: &mut Vec<Segment>, placed_width: i64, minima: &Minima) {
    let min_width = if placed_width == minima.w_min {
        minima.w_sec
    } else {
        minima.w_min
    };
    loop {
        let n = segments.len();
        if n < 3 {
            break;
        }
        let mut remove = vec![false; n];
        let last = n - 1;
        for i in 1..last {
            // Narrow valley.
            if segments[i].y < segments[i - 1].y && segments[i].y < segments[i + 1].y {
                let seg_len = segments[i + 1].x - segments[i].x;
                if seg_len < min_width {
                    if segments[i - 1].y == segments[i + 1].y {
                        remove[i] = true;
                        if i + 1 != last {
                            remove[i + 1] = true;
                        }
                    } else if segments[i - 1].y < segments[i + 1].y {
                        remove[i] = true;
                    } else {
                        segments[i].y = segments[i + 1].y;
                        if i + 1 != last {
                            remove[i + 1] = true;
                        }
                    }
                }
            }
            // Equal-height adjacency.
            if i == 1 && segments[0].y == segments[1].y {
                remove[1] = true;
            }
            if segments[i].y == segments[i + 1].y && i + 1 != last {
                remove[i + 1] = true;
            }
        }
        if !remove.iter().any(|&r| r) {
            break;
        }
        let mut kept = Vec::with_capacity(n);
        for (idx, seg) in segments.drain(..).enumerate() {
            if !remove[idx] {
                kept.push(seg);
            }
        }
        *segments = kept;
    }
}
