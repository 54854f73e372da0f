/// Rescale the y values of a series to `[0, 1]` in place.
///
/// A constant series maps to all zeros.
pub fn min_max_scale(points: &mut [[f64; 2]]) {
    let min = points.iter().map(|p| p[1]).fold(f64::INFINITY, f64::min);
    let max = points.iter().map(|p| p[1]).fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    if range.abs() < f64::EPSILON {
        points.iter_mut().for_each(|p| p[1] = 0.0);
    } else {
        points.iter_mut().for_each(|p| p[1] = (p[1] - min) / range);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_to_unit_range() {
        let mut pts = [[0.0, 10.0], [1.0, 20.0], [2.0, 15.0]];
        min_max_scale(&mut pts);
        assert_eq!(pts, [[0.0, 0.0], [1.0, 1.0], [2.0, 0.5]]);
    }

    #[test]
    fn constant_series_is_zeroed() {
        let mut pts = [[0.0, 3.0], [1.0, 3.0]];
        min_max_scale(&mut pts);
        assert_eq!(pts, [[0.0, 0.0], [1.0, 0.0]]);
    }

    #[test]
    fn empty_series_is_untouched() {
        let mut pts: [[f64; 2]; 0] = [];
        min_max_scale(&mut pts);
    }
}
