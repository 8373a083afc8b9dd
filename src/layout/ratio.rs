use super::strip::Strip;
use crate::error::LayoutError;
use crate::geometry::Rect;

/// Worst aspect ratio among the cells `areas` would get as one strip in `rect`.
///
/// Shares the cell arithmetic with [`super::strip::layout`], so the value is
/// exactly what the emitted cells would measure.
pub fn worst_ratio(areas: &[f64], rect: Rect) -> Result<f64, LayoutError> {
    Ok(Strip::new(areas, rect)?
        .cells()
        .map(|cell| cell.aspect_ratio())
        .fold(0.0, f64::max))
}
