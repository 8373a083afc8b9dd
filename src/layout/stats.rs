use crate::geometry::Rect;

/// Summary of a computed layout, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutStats {
    pub count: usize,
    /// Sum of all cell areas.
    pub covered_area: f64,
    /// `covered_area` over the container's area (1.0 = fully tiled).
    pub coverage: f64,
    pub worst_ratio: f64,
    pub mean_ratio: f64,
}

impl LayoutStats {
    pub fn measure(rects: &[Rect], container: Rect) -> Self {
        let covered_area: f64 = rects.iter().map(Rect::area).sum();
        let container_area = container.area();
        let coverage = if container_area > 0.0 {
            covered_area / container_area
        } else {
            0.0
        };

        let ratios = rects.iter().map(Rect::aspect_ratio);
        let worst_ratio = ratios.clone().fold(0.0, f64::max);
        let mean_ratio = if rects.is_empty() {
            0.0
        } else {
            ratios.sum::<f64>() / rects.len() as f64
        };

        Self {
            count: rects.len(),
            covered_area,
            coverage,
            worst_ratio,
            mean_ratio,
        }
    }
}
