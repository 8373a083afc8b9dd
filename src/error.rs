use thiserror::Error;

use crate::geometry::Rect;

/// Errors emitted while computing a layout.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// Weights, areas or container dimensions that cannot be laid out.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),
    /// A container with zero, negative or non-finite width/height.
    #[error("degenerate rectangle {0}")]
    DegenerateRectangle(Rect),
}

/// What exactly was wrong with the input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("weight #{index} is {value}, expected a finite positive number")]
    Weight { index: usize, value: f64 },
    #[error("weights sum to {0}, expected a finite positive total")]
    WeightSum(f64),
    #[error("container is {dx}x{dy}, expected finite positive dimensions")]
    Dimensions { dx: f64, dy: f64 },
    /// Scaling pushed an area out of the representable range.
    #[error("area #{index} normalized to {value}")]
    Area { index: usize, value: f64 },
    #[error("strip areas sum to {0}")]
    StripSum(f64),
}

impl LayoutError {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, LayoutError::InvalidInput(_))
    }
}
