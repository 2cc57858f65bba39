//! Shape module orchestrator.
//!
//! The closed set of drawable variants lives in `core`; composite
//! aggregation lives in `composite`. Downstream code imports from here.

mod composite;
mod core;

pub use composite::CompositeShape;
pub use core::{Circle, Point, Rect, Shape};
