//! Data model and constructive placement heuristic for the strip packing
//! problem: pack a multiset of axis-aligned, rotatable rectangles into a
//! fixed-width strip of unbounded height, minimizing the occupied height.
//!
//! This crate contains no I/O and no threading; it is driven by
//! `stripfit-solver`'s Tabu Search / IDBS layers.

pub mod entities;
pub mod heuristic;
pub mod util;

pub use entities::instance::Instance;
pub use entities::rectangle::Rectangle;
pub use entities::solution::{Placement, Solution};
pub use heuristic::HeuristicOutcome;
