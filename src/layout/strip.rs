use crate::error::{InputError, LayoutError};
use crate::geometry::Rect;

/// How a strip is placed inside its container.
///
/// `Row` fills a vertical band of the full container height with cells
/// stacked top-to-bottom; `Column` fills a horizontal band of the full
/// container width with cells placed left-to-right. The shared dimension is
/// always the container's shorter side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Row,
    Column,
}

impl Orientation {
    pub fn for_rect(rect: Rect) -> Self {
        if rect.dx >= rect.dy {
            Orientation::Row
        } else {
            Orientation::Column
        }
    }
}

/// A run of areas laid against the front of a container.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Strip<'a> {
    pub orientation: Orientation,
    /// Width of a row / height of a column.
    pub thickness: f64,
    areas: &'a [f64],
    container: Rect,
}

impl<'a> Strip<'a> {
    pub fn new(areas: &'a [f64], container: Rect) -> Result<Self, LayoutError> {
        if !container.has_positive_extent() {
            return Err(LayoutError::DegenerateRectangle(container));
        }
        let sum: f64 = areas.iter().sum();
        if sum.is_nan() || sum <= 0.0 {
            return Err(InputError::StripSum(sum).into());
        }

        let orientation = Orientation::for_rect(container);
        let thickness = match orientation {
            Orientation::Row => sum / container.dy,
            Orientation::Column => sum / container.dx,
        };
        Ok(Self {
            orientation,
            thickness,
            areas,
            container,
        })
    }

    /// One cell per area, in order.
    pub fn cells(&self) -> impl Iterator<Item = Rect> + 'a {
        let Strip {
            orientation,
            thickness,
            areas,
            container,
        } = *self;
        let mut cursor = match orientation {
            Orientation::Row => container.y,
            Orientation::Column => container.x,
        };
        areas.iter().map(move |&area| {
            let length = area / thickness;
            let cell = match orientation {
                Orientation::Row => Rect::new(container.x, cursor, thickness, length),
                Orientation::Column => Rect::new(cursor, container.y, length, thickness),
            };
            cursor += length;
            cell
        })
    }

    /// The part of the container not covered by this strip.
    pub fn leftover(&self) -> Rect {
        let c = self.container;
        match self.orientation {
            Orientation::Row => Rect::new(c.x + self.thickness, c.y, c.dx - self.thickness, c.dy),
            Orientation::Column => Rect::new(c.x, c.y + self.thickness, c.dx, c.dy - self.thickness),
        }
    }
}

/// Lay `areas` out as a single row or column filling `rect`'s shorter side.
pub fn layout(areas: &[f64], rect: Rect) -> Result<Vec<Rect>, LayoutError> {
    Ok(Strip::new(areas, rect)?.cells().collect())
}

/// The rectangle that remains after `areas` are laid out in `rect`.
pub fn leftover(areas: &[f64], rect: Rect) -> Result<Rect, LayoutError> {
    Ok(Strip::new(areas, rect)?.leftover())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Rect, b: Rect) -> bool {
        let eps = 1e-9;
        (a.x - b.x).abs() < eps
            && (a.y - b.y).abs() < eps
            && (a.dx - b.dx).abs() < eps
            && (a.dy - b.dy).abs() < eps
    }

    #[test]
    fn wide_container_stacks_cells_vertically() {
        let rects = layout(&[6.0, 6.0], Rect::new(0.0, 0.0, 6.0, 4.0)).unwrap();
        assert_eq!(rects.len(), 2);
        assert!(approx(rects[0], Rect::new(0.0, 0.0, 3.0, 2.0)));
        assert!(approx(rects[1], Rect::new(0.0, 2.0, 3.0, 2.0)));
    }

    #[test]
    fn tall_container_places_cells_side_by_side() {
        let rects = layout(&[4.0, 2.0], Rect::new(1.0, 1.0, 3.0, 4.0)).unwrap();
        assert!(approx(rects[0], Rect::new(1.0, 1.0, 2.0, 2.0)));
        assert!(approx(rects[1], Rect::new(3.0, 1.0, 1.0, 2.0)));
    }

    #[test]
    fn square_container_counts_as_row() {
        assert_eq!(
            Orientation::for_rect(Rect::new(0.0, 0.0, 5.0, 5.0)),
            Orientation::Row
        );
        assert_eq!(
            Orientation::for_rect(Rect::new(0.0, 0.0, 4.9, 5.0)),
            Orientation::Column
        );
    }

    #[test]
    fn leftover_consumes_the_front_of_the_container() {
        let row = leftover(&[8.0], Rect::new(0.0, 0.0, 6.0, 4.0)).unwrap();
        assert!(approx(row, Rect::new(2.0, 0.0, 4.0, 4.0)));

        let column = leftover(&[6.0], Rect::new(0.0, 0.0, 3.0, 4.0)).unwrap();
        assert!(approx(column, Rect::new(0.0, 2.0, 3.0, 2.0)));
    }

    #[test]
    fn degenerate_container_is_rejected() {
        let rect = Rect::new(0.0, 0.0, 0.0, 4.0);
        assert_eq!(
            layout(&[1.0], rect).unwrap_err(),
            LayoutError::DegenerateRectangle(rect)
        );
        assert!(matches!(
            leftover(&[1.0], Rect::new(0.0, 0.0, 2.0, -1.0)),
            Err(LayoutError::DegenerateRectangle(_))
        ));
    }

    #[test]
    fn empty_run_has_no_thickness() {
        let err = layout(&[], Rect::new(0.0, 0.0, 1.0, 1.0)).unwrap_err();
        assert!(err.is_invalid_input());
    }
}
