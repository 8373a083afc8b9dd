use super::normalize::normalize;
use super::ratio::worst_ratio;
use super::strip::Strip;
use crate::error::LayoutError;
use crate::geometry::Rect;

/// The squarified treemap layout engine (Bruls, Huizing & van Wijk).
///
/// Stateless; every call is independent, so one engine can be shared freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutEngine;

impl LayoutEngine {
    pub fn layout(&self, weights: &[f64], container: Rect) -> Result<Vec<Rect>, LayoutError> {
        squarify_rect(weights, container)
    }
}

/// Squarified layout of `weights` inside the rectangle at `(x, y)` sized `dx` by `dy`.
///
/// Returns one rectangle per weight, in input order. The rectangles tile the
/// container and their areas are proportional to the weights.
pub fn squarify(
    weights: &[f64],
    x: f64,
    y: f64,
    dx: f64,
    dy: f64,
) -> Result<Vec<Rect>, LayoutError> {
    squarify_rect(weights, Rect::new(x, y, dx, dy))
}

/// [`squarify`] taking the container as a [`Rect`].
pub fn squarify_rect(weights: &[f64], container: Rect) -> Result<Vec<Rect>, LayoutError> {
    if weights.is_empty() {
        return Ok(Vec::new());
    }
    let areas = normalize(weights, container.dx, container.dy)?;
    let mut result = Vec::with_capacity(areas.len());
    let mut remaining: &[f64] = &areas;
    let mut rect = container;
    let mut strips = 0usize;

    while !remaining.is_empty() {
        let k = split_len(remaining, rect)?;
        let (current, rest) = remaining.split_at(k);

        let strip = Strip::new(current, rect)?;
        result.extend(strip.cells());
        strips += 1;

        tracing::trace!(
            "Strip {}: {:?} of {} cells, thickness {:.4} in {}",
            strips,
            strip.orientation,
            current.len(),
            strip.thickness,
            rect
        );

        remaining = rest;
        if !remaining.is_empty() {
            rect = strip.leftover();
            if !rect.has_positive_extent() {
                tracing::warn!(
                    "Squarify: leftover {} is degenerate with {} items still to place",
                    rect,
                    remaining.len()
                );
                return Err(LayoutError::DegenerateRectangle(rect));
            }
        }
    }

    tracing::debug!(
        "Squarified {} items into {} strips in {}",
        result.len(),
        strips,
        container
    );

    Ok(result)
}

/// Length of the leading run that forms the next strip.
///
/// Grows the run while the next item does not make the worst ratio strictly
/// worse; ties go to the longer run.
fn split_len(areas: &[f64], rect: Rect) -> Result<usize, LayoutError> {
    if areas.len() == 1 {
        return Ok(1);
    }

    let mut k = 1;
    let mut current = worst_ratio(&areas[..k], rect)?;
    while k < areas.len() {
        let next = worst_ratio(&areas[..k + 1], rect)?;
        if current < next {
            break;
        }
        current = next;
        k += 1;
    }
    Ok(k)
}
