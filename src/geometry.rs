use std::fmt;

/// An axis-aligned rectangle: top-left corner `(x, y)` and size `(dx, dy)`.
///
/// Used both for the container being subdivided and for every output cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub dx: f64,
    pub dy: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, dx: f64, dy: f64) -> Self {
        Self { x, y, dx, dy }
    }

    pub fn area(&self) -> f64 {
        self.dx * self.dy
    }

    pub fn right(&self) -> f64 {
        self.x + self.dx
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.dy
    }

    /// `max(dx/dy, dy/dx)`: 1.0 for a square, larger for elongated cells.
    pub fn aspect_ratio(&self) -> f64 {
        (self.dx / self.dy).max(self.dy / self.dx)
    }

    /// True when both sides are finite and strictly positive.
    pub fn has_positive_extent(&self) -> bool {
        self.dx.is_finite() && self.dy.is_finite() && self.dx > 0.0 && self.dy > 0.0
    }

    /// Containment with a slack of `eps` on every edge.
    pub fn contains(&self, other: &Rect, eps: f64) -> bool {
        other.x >= self.x - eps
            && other.y >= self.y - eps
            && other.right() <= self.right() + eps
            && other.bottom() <= self.bottom() + eps
    }

    /// Area of the overlap between two rectangles (0.0 when disjoint or touching).
    pub fn intersection_area(&self, other: &Rect) -> f64 {
        let w = self.right().min(other.right()) - self.x.max(other.x);
        let h = self.bottom().min(other.bottom()) - self.y.max(other.y);
        if w <= 0.0 || h <= 0.0 {
            0.0
        } else {
            w * h
        }
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{} at ({}, {})", self.dx, self.dy, self.x, self.y)
    }
}
