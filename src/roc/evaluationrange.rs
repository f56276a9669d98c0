use serde::Deserialize;
use serde_json::Value;

use crate::manager::managererror::ManagerError;
use crate::roc::aurocerror::{
    PartialAurocError,
    RangeBound
};
use crate::roc::roccurve::RocCurve;
use crate::roc::validation::{
    float_scalar,
    validate_range
};

#[derive(Deserialize)]
struct EvaluationRangeJsonProp {
    start: Value,
    end: Value,
}

/// A false-positive-rate interval `[start, end]` inside `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluationRange {
    start: f64,
    end: f64,
}

impl EvaluationRange {
    pub fn new(start: f64, end: f64) -> Result<EvaluationRange, PartialAurocError> {
        validate_range(start, end)?;
        Ok(EvaluationRange { start, end })
    }

    pub fn full() -> EvaluationRange {
        EvaluationRange { start: 0.0, end: 1.0 }
    }

    /// Reads `{"start": ..., "end": ...}`; both bounds must be JSON floats.
    pub fn from_json(json_value: Value) -> Result<EvaluationRange, ManagerError> {
        let json_prop: EvaluationRangeJsonProp = ManagerError::from_json_or_json_parse_error(json_value)?;
        let start = float_scalar(&json_prop.start, RangeBound::Start)?;
        let end = float_scalar(&json_prop.end, RangeBound::End)?;
        Ok(EvaluationRange::new(start, end)?)
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }

    pub fn partial_auc(&self, curve: &RocCurve) -> Result<f64, PartialAurocError> {
        curve.partial_auc(self.start, self.end)
    }
}
