use crate::math::curve::nonparametriccurve::nonparametriccurve::Point2D;

/// Composite trapezoidal rule over points sorted by x.
///
/// Exact for the piecewise-linear interpolant through `points`. Fewer than
/// two points integrate to zero.
pub fn trapezoid(points: &[Point2D]) -> f64 {
    points
        .windows(2)
        .map(|pair| (pair[1].x() - pair[0].x()) * (pair[0].y() + pair[1].y()) / 2.0)
        .sum()
}
