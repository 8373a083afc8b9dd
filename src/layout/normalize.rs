use crate::error::{InputError, LayoutError};

/// Rescale weights into areas that sum to `width * height`.
///
/// The single validator for layout input: every weight must be finite and
/// positive, and so must the container sides, the weight sum and the area.
pub fn normalize(weights: &[f64], width: f64, height: f64) -> Result<Vec<f64>, LayoutError> {
    let positive = |v: f64| v.is_finite() && v > 0.0;

    if let Some((index, &value)) = weights.iter().enumerate().find(|(_, w)| !positive(**w)) {
        return Err(InputError::Weight { index, value }.into());
    }
    let container_area = width * height;
    if !(positive(width) && positive(height) && container_area.is_finite()) {
        return Err(InputError::Dimensions { dx: width, dy: height }.into());
    }
    let total: f64 = weights.iter().sum();
    if !positive(total) {
        return Err(InputError::WeightSum(total).into());
    }

    let scale = container_area / total;
    weights
        .iter()
        .enumerate()
        .map(|(index, &w)| -> Result<f64, LayoutError> {
            let area = w * scale;
            if positive(area) {
                Ok(area)
            } else {
                Err(InputError::Area { index, value: area }.into())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn areas_sum_to_container() {
        let areas = normalize(&[6.0, 6.0, 4.0, 3.0, 2.0, 2.0, 1.0], 6.0, 4.0).unwrap();
        let total: f64 = areas.iter().sum();
        assert!((total - 24.0).abs() < 1e-9);
        assert!((areas[0] - 6.0).abs() < 1e-12);
        assert!((areas[6] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn scaled_weights_normalize_identically() {
        let a = normalize(&[3.0, 1.0, 2.0], 10.0, 5.0).unwrap();
        let b = normalize(&[300.0, 100.0, 200.0], 10.0, 5.0).unwrap();
        for (x, y) in a.iter().zip(&b) {
            assert!((x - y).abs() < 1e-9 * x.abs());
        }
    }

    #[test]
    fn empty_weights_have_no_sum() {
        let err = normalize(&[], 1.0, 1.0).unwrap_err();
        assert_eq!(err, LayoutError::InvalidInput(InputError::WeightSum(0.0)));
    }

    #[test]
    fn bad_weights_are_reported_by_index() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = normalize(&[1.0, bad], 1.0, 1.0).unwrap_err();
            match err {
                LayoutError::InvalidInput(InputError::Weight { index, .. }) => assert_eq!(index, 1),
                other => panic!("unexpected error {other:?}"),
            }
        }
    }

    #[test]
    fn bad_dimensions_are_rejected() {
        assert!(normalize(&[1.0], 0.0, 1.0).unwrap_err().is_invalid_input());
        assert!(normalize(&[1.0], 1.0, -3.0).unwrap_err().is_invalid_input());
        assert!(normalize(&[1.0], f64::NAN, 1.0).unwrap_err().is_invalid_input());
        assert!(normalize(&[1.0], f64::MAX, f64::MAX).unwrap_err().is_invalid_input());
    }

    #[test]
    fn overflowing_sum_is_rejected() {
        let err = normalize(&[f64::MAX, f64::MAX], 1.0, 1.0).unwrap_err();
        assert!(matches!(
            err,
            LayoutError::InvalidInput(InputError::WeightSum(_))
        ));
    }

    #[test]
    fn underflowing_area_is_rejected() {
        let err = normalize(&[1e-300, 1e300], 1.0, 1e-20).unwrap_err();
        assert!(matches!(
            err,
            LayoutError::InvalidInput(InputError::Area { index: 0, .. })
        ));
    }
}
