pub mod normalize;
pub mod ratio;
pub mod squarify;
pub mod stats;
pub mod strip;

pub use normalize::normalize;
pub use ratio::worst_ratio;
pub use squarify::{squarify, squarify_rect, LayoutEngine};
pub use stats::LayoutStats;
pub use strip::{layout, leftover, Orientation};
