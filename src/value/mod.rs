//! Structured config value types, shape detection, and legacy repair.
//!
//! Config objects cross the engine boundary as JSON, so every type here has
//! an exact wire shape. Detection over raw JSON is an explicitly ordered
//! predicate list because the shapes overlap (a `Range`-shaped object is
//! never a `Point2D`).

pub(crate) mod color;
pub(crate) mod detect;
pub(crate) mod model;
pub(crate) mod normalize;
pub mod position;
