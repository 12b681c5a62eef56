//! Waste computation, per spec.md §4.A "Waste computation" /
//! `original_source/src/heuristic.py`'s `find_top_waste` /
//! `find_side_wastes` / `find_bottom_waste`.

use super::segment::{CandidatePoint, Segment};

pub(crate) struct Minima {
    pub w_min: i64,
    pub w_sec: i64,
    pub h_min: i64,
    pub h_sec: i64,
}

fn top_waste(point: &CandidatePoint, bin_height: i64, minima: &Minima, rw: i64, rh: i64) -> i64 {
    let top = point.py + rh;
    let min_h = if rh == minima.h_min {
        minima.h_sec
    } else {
        minima.h_min
    };
    let slack = bin_height - top;
    if slack < min_h {
        rw * slack
    } else {
        0
    }
}

fn side_wastes(
    segments: &[Segment],
    i: usize,
    point: &CandidatePoint,
    minima: &Minima,
    rw: i64,
    rh: i64,
) -> i64 {
    let min_w = if rw == minima.w_min {
        minima.w_sec
    } else {
        minima.w_min
    };
    let (left_side, right_side) = if point.is_left {
        (segments[i].x, segments[i].x + rw)
    } else {
        (segments[i].x - rw, segments[i].x)
    };
    let top = point.py + rh;
    let mut waste = 0i64;

    // Left side.
    let left_idx = point.h_left_idx;
    let mut gap = left_side - segments[left_idx + 1].x;
    let mut p = left_idx;
    while segments[p].y < top {
        gap += segments[p + 1].x - segments[p].x;
        p -= 1;
    }
    if gap > 0 && gap < min_w {
        while segments[p + 1].x < left_side {
            let area_width = segments[p + 2].x.min(left_side) - segments[p + 1].x;
            let area_height = top - segments[p + 1].y;
            waste += area_width * area_height;
            p += 1;
        }
    }

    // Right side.
    let right_idx = point.h_right_idx;
    let mut gap = segments[right_idx].x - right_side;
    let mut p = right_idx;
    while segments[p].y < top {
        gap += segments[p + 1].x - segments[p].x;
        p += 1;
    }
    if gap > 0 && gap < min_w {
        while segments[p].x > right_side {
            let area_width = segments[p].x - segments[p - 1].x.max(right_side);
            let area_height = top - segments[p - 1].y;
            waste += area_width * area_height;
            p -= 1;
        }
    }
    waste
}

fn bottom_waste(segments: &[Segment], i: usize, point: &CandidatePoint, rw: i64) -> i64 {
    if point.w_base >= rw {
        return 0;
    }
    let mut waste = 0i64;
    if point.is_left {
        let right_side = segments[i].x + rw;
        let mut p = i + 1;
        let last = segments.len() - 1;
        while p < last && segments[p + 1].x <= right_side {
            let area_width = segments[p + 1].x - segments[p].x;
            let area_height = segments[i].y - segments[p].y;
            waste += area_width * area_height;
            p += 1;
        }
        let area_width = right_side - segments[p].x;
        let area_height = segments[i].y - segments[p].y;
        waste += area_width * area_height;
    } else {
        let left_side = segments[i].x - rw;
        let mut p = i;
        while segments[p - 1].x >= left_side {
            let area_width = segments[p].x - segments[p - 1].x;
            let area_height = segments[i].y - segments[p].y;
            waste += area_width * area_height;
            p -= 1;
        }
        let area_width = segments[p].x - left_side;
        let area_height = segments[i].y - segments[p].y;
        waste += area_width * area_height;
    }
    waste
}

/// Total wasted area a placement at point `i` with effective size
/// `(rw, rh)` would cause: `top_waste + side_wastes + bottom_waste`.
pub(crate) fn waste(
    segments: &[Segment],
    points: &[Option<CandidatePoint>],
    i: usize,
    minima: &Minima,
    bin_height: i64,
    rw: i64,
    rh: i64,
) -> i64 {
    let point = points[i].as_ref().expect("candidate point must exist");
    top_waste(point, bin_height, minima, rw, rh)
        + side_wastes(segments, i, point, minima, rw, rh)
        + bottom_waste(segments, i, point, rw)
}
