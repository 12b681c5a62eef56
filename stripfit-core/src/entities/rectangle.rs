use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle to be packed, identified by its stable position
/// within the problem [`Instance`](crate::entities::instance::Instance).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Index of this rectangle within the instance it belongs to. Stable
    /// across permutations: the search layer reorders rectangles, never
    /// renumbers them.
    pub id: usize,
    pub width: i64,
    pub height: i64,
}

impl Rectangle {
    pub fn new(id: usize, width: i64, height: i64) -> Self {
        Self { id, width, height }
    }

    /// The shorter of the two sides. Since rotation is free, this is the
    /// quantity that actually matters for the heuristic's minima bookkeeping.
    pub fn min_side(&self) -> i64 {
        self.width.min(self.height)
    }

    pub fn area(&self) -> i64 {
        self.width * self.height
    }

    /// Effective `(width, height)` once the rotation flag is applied.
    pub fn dims(&self, rotated: bool) -> (i64, i64) {
        if rotated {
            (self.height, self.width)
        } else {
            (self.width, self.height)
        }
    }
}
