use serde_json::Value;

use crate::roc::aurocerror::{
    Axis,
    PartialAurocError,
    RangeBound
};

/// Reads a JSON array as a floating-point sequence.
///
/// The array is accepted when every element is a number and at least one
/// of them is written as a float, so `[0.0, 1]` passes and `[0, 1]` does
/// not. An empty array passes here and fails the length rule later.
pub fn float_sequence(value: &Value, axis: Axis) -> Result<Vec<f64>, PartialAurocError> {
    let elems = value.as_array().ok_or(PartialAurocError::NonNumeric(axis))?;
    if !elems.is_empty() && !elems.iter().any(Value::is_f64) {
        return Err(PartialAurocError::NonNumeric(axis));
    }
    elems.iter()
        .map(|elem| elem.as_f64().ok_or(PartialAurocError::NonNumeric(axis)))
        .collect()
}

/// Reads a JSON scalar as a floating-point range bound. Integers are rejected.
pub fn float_scalar(value: &Value, bound: RangeBound) -> Result<f64, PartialAurocError> {
    if !value.is_f64() {
        return Err(PartialAurocError::RangeBoundNotNumeric(bound));
    }
    value.as_f64().ok_or(PartialAurocError::RangeBoundNotNumeric(bound))
}

fn check_length(values: &[f64], axis: Axis) -> Result<(), PartialAurocError> {
    if values.len() < 2 {
        return Err(PartialAurocError::TooFewPoints(axis));
    }
    Ok(())
}

// a single decreasing pair is enough to reject
fn check_monotonic(values: &[f64], axis: Axis) -> Result<(), PartialAurocError> {
    match values.windows(2).position(|pair| pair[1] - pair[0] < 0.0) {
        Some(i) => Err(PartialAurocError::NonMonotonic { axis, index: i + 1 }),
        None => Ok(()),
    }
}

fn check_nan(values: &[f64], axis: Axis) -> Result<(), PartialAurocError> {
    match values.iter().position(|v| v.is_nan()) {
        Some(index) => Err(PartialAurocError::ContainsNaN { axis, index }),
        None => Ok(()),
    }
}

fn check_unit_range(values: &[f64], axis: Axis) -> Result<(), PartialAurocError> {
    match values.iter().position(|v| !(0.0..=1.0).contains(v)) {
        Some(index) => Err(PartialAurocError::OutOfUnitRange {
            axis,
            index,
            value: values[index],
        }),
        None => Ok(()),
    }
}

fn check_bound(value: f64, bound: RangeBound) -> Result<(), PartialAurocError> {
    if value.is_nan() {
        Err(PartialAurocError::RangeBoundNotNumeric(bound))
    } else if value < 0.0 {
        Err(PartialAurocError::RangeBoundNegative { bound, value })
    } else if value > 1.0 {
        Err(PartialAurocError::RangeBoundAboveOne { bound, value })
    } else {
        Ok(())
    }
}

/// Checks a curve against the length, monotonicity, NaN and unit-range
/// rules, in that order, x before y within each rule.
pub fn validate_curve(x: &[f64], y: &[f64]) -> Result<(), PartialAurocError> {
    check_length(x, Axis::X)?;
    check_length(y, Axis::Y)?;
    if x.len() != y.len() {
        return Err(PartialAurocError::LengthMismatch { x_len: x.len(), y_len: y.len() });
    }
    check_monotonic(x, Axis::X)?;
    check_monotonic(y, Axis::Y)?;
    check_nan(x, Axis::X)?;
    check_nan(y, Axis::Y)?;
    check_unit_range(x, Axis::X)?;
    check_unit_range(y, Axis::Y)?;
    Ok(())
}

/// Checks both bounds lie in `[0, 1]` and are ordered.
pub fn validate_range(range_start: f64, range_end: f64) -> Result<(), PartialAurocError> {
    check_bound(range_start, RangeBound::Start)?;
    check_bound(range_end, RangeBound::End)?;
    if range_start > range_end {
        return Err(PartialAurocError::InvalidRangeOrder { start: range_start, end: range_end });
    }
    Ok(())
}

pub fn validate(
    x: &[f64],
    y: &[f64],
    range_start: f64,
    range_end: f64,
) -> Result<(), PartialAurocError> {
    validate_curve(x, y)?;
    validate_range(range_start, range_end)
}
