// Public library interface for squarify-rs
// The debug-layout binary and the property tests use these modules

pub mod error;
pub mod geometry;
pub mod layout;

pub use error::{InputError, LayoutError};
pub use geometry::Rect;
pub use layout::{squarify, squarify_rect, LayoutEngine, LayoutStats, Orientation};
