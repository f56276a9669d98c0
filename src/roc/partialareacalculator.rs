//! Partial area under a ROC curve.
//!
//! The curve is treated as the piecewise-linear interpolant through its
//! samples, closed off at `(0, 0)` and `(1, 1)`. The area over
//! `[range_start, range_end]` is the trapezoidal sum over the two
//! interpolated boundary points and every sample strictly between them,
//! which is exact for a piecewise-linear curve.

use serde_json::Value;
use tracing::{debug, trace, warn};

use crate::math::curve::nonparametriccurve::anchoredlinearcurve::AnchoredLinearCurve;
use crate::math::curve::nonparametriccurve::nonparametriccurve::{
    NonparametricCurve,
    Point2D
};
use crate::math::integration::trapezoid::trapezoid;
use crate::roc::aurocerror::{
    Axis,
    PartialAurocError,
    RangeBound
};
use crate::roc::validation::{
    float_scalar,
    float_sequence,
    validate,
    validate_curve
};

/// Area under the curve `(x, y)` over `[range_start, range_end]`.
///
/// `x` holds false-positive rates and `y` true-positive rates; both must be
/// non-decreasing, equally long, at least two elements, and inside `[0, 1]`.
/// The first violated rule is returned as the error.
pub fn compute(
    x: &[f64],
    y: &[f64],
    range_start: f64,
    range_end: f64,
) -> Result<f64, PartialAurocError> {
    validate(x, y, range_start, range_end)?;
    let curve = roc_curve(x, y)?;
    Ok(integrate_range(&curve, range_start, range_end))
}

/// Same as [`compute`], reading its inputs from JSON values.
///
/// Sequences must be JSON arrays of floats and bounds JSON floats; integer
/// typed input is rejected with the matching `NonNumeric` or
/// `RangeBoundNotNumeric` error.
pub fn compute_from_json(
    x: &Value,
    y: &Value,
    range_start: &Value,
    range_end: &Value,
) -> Result<f64, PartialAurocError> {
    read_and_compute(x, y, range_start, range_end)
        .inspect_err(|error| warn!("rejected partial AUROC input: {}", error))
}

fn read_and_compute(
    x: &Value,
    y: &Value,
    range_start: &Value,
    range_end: &Value,
) -> Result<f64, PartialAurocError> {
    let x = float_sequence(x, Axis::X)?;
    let y = float_sequence(y, Axis::Y)?;
    validate_curve(&x, &y)?;
    let range_start = float_scalar(range_start, RangeBound::Start)?;
    let range_end = float_scalar(range_end, RangeBound::End)?;
    compute(&x, &y, range_start, range_end)
}

/// Area under the whole curve, anchors included.
pub fn auc(x: &[f64], y: &[f64]) -> Result<f64, PartialAurocError> {
    validate_curve(x, y)?;
    let curve = roc_curve(x, y)?;
    Ok(trapezoid(&curve.points()))
}

fn roc_curve(x: &[f64], y: &[f64]) -> Result<AnchoredLinearCurve, PartialAurocError> {
    AnchoredLinearCurve::from_xy(x, y).ok_or(PartialAurocError::TooFewPoints(Axis::X))
}

/// Integrates an already validated curve over an ordered range.
pub(crate) fn integrate_range(curve: &AnchoredLinearCurve, range_start: f64, range_end: f64) -> f64 {
    if range_start == range_end {
        return 0.0;
    }

    // start takes the value just right of a vertical step, end the value
    // just left of it, so a step on a boundary stays outside the range
    let start_pt = Point2D::new(range_start, curve.right_value(range_start));
    let end_pt = Point2D::new(range_end, curve.left_value(range_end));
    let inner = curve.samples_between(range_start, range_end);
    debug!(
        range_start,
        range_end,
        start_y = start_pt.y(),
        end_y = end_pt.y(),
        inner_samples = inner.len(),
        "interpolated partial AUROC boundaries"
    );

    let mut points = Vec::with_capacity(inner.len() + 2);
    points.push(start_pt);
    points.extend_from_slice(inner);
    points.push(end_pt);

    let area = trapezoid(&points);
    trace!(area, "partial AUROC");
    area
}
