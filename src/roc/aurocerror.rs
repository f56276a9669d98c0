use std::fmt::Display;

use thiserror::Error;

/// Which sequence of the curve a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// false-positive rate
    X,
    /// true-positive rate
    Y,
}

impl Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => write!(f, "x (false-positive rate)"),
            Axis::Y => write!(f, "y (true-positive rate)"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeBound {
    Start,
    End,
}

impl Display for RangeBound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RangeBound::Start => write!(f, "range start"),
            RangeBound::End => write!(f, "range end"),
        }
    }
}

/// Caller-input errors of the partial AUROC computation.
///
/// Every variant maps to exactly one validation rule; the rules are checked
/// in a fixed order and only the first failure is reported.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PartialAurocError {
    #[error("{0} sequence holds non floating-point values")]
    NonNumeric(Axis),

    #[error("{0} sequence needs at least two elements")]
    TooFewPoints(Axis),

    #[error("x and y lengths differ: {x_len} != {y_len}")]
    LengthMismatch { x_len: usize, y_len: usize },

    #[error("{axis} sequence decreases at index {index}")]
    NonMonotonic { axis: Axis, index: usize },

    #[error("{axis} sequence contains NaN at index {index}")]
    ContainsNaN { axis: Axis, index: usize },

    #[error("{axis} sequence value {value} at index {index} is outside [0, 1]")]
    OutOfUnitRange { axis: Axis, index: usize, value: f64 },

    #[error("{0} is not a floating-point number")]
    RangeBoundNotNumeric(RangeBound),

    #[error("{bound} {value} is negative")]
    RangeBoundNegative { bound: RangeBound, value: f64 },

    #[error("{bound} {value} is greater than one")]
    RangeBoundAboveOne { bound: RangeBound, value: f64 },

    #[error("range start {start} is greater than range end {end}")]
    InvalidRangeOrder { start: f64, end: f64 },

    #[error("scores and labels lengths differ: {scores} != {labels}")]
    LabelScoreLengthMismatch { scores: usize, labels: usize },

    #[error("labels must contain both positives and negatives")]
    SingleClassLabels,
}

impl PartialAurocError {
    /// Axis the error refers to, if any.
    pub fn axis(&self) -> Option<Axis> {
        match self {
            PartialAurocError::NonNumeric(axis)
            | PartialAurocError::TooFewPoints(axis) => Some(*axis),
            PartialAurocError::NonMonotonic { axis, .. }
            | PartialAurocError::ContainsNaN { axis, .. }
            | PartialAurocError::OutOfUnitRange { axis, .. } => Some(*axis),
            _ => None,
        }
    }
}
