use serde::{Deserialize, Serialize};

/// Where one rectangle ended up: its bottom-left corner and whether it was
/// rotated 90 degrees to get there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub rectangle_id: usize,
    pub x: i64,
    pub y: i64,
    pub rotated: bool,
}

/// The external result of the core, per spec.md §6: the achieved height and
/// the placements that were actually made. If not every rectangle was
/// placed, `placements` only contains the ones that were.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Solution {
    pub height: i64,
    pub placements: Vec<Placement>,
}

impl Solution {
    pub fn is_complete(&self, instance_len: usize) -> bool {
        self.placements.len() == instance_len
    }
}
