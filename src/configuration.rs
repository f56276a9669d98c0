use std::cell::Cell;
use std::fs::File;
use std::io::BufReader;
use std::rc::Rc;

use serde::Deserialize;
use tracing::info;

use crate::manager::managererror::ManagerError;
use crate::manager::manager::{
    IManager,
    Manager
};
use crate::math::round::round;
use crate::roc::evaluationrange::EvaluationRange;
use crate::roc::roccurve::RocCurve;


#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default)]
    curves: Vec<serde_json::Value>,
    #[serde(default)]
    ranges: Vec<serde_json::Value>,
    #[serde(default)]
    digits: Option<u32>
}

/// Named ROC curves and evaluation ranges loaded from JSON:
///
/// ```json
/// {
///   "curves": [{"name": "model_a", "fpr": [0.1, 0.4], "tpr": [0.6, 0.9]}],
///   "ranges": [{"name": "low_fpr", "start": 0.0, "end": 0.1}],
///   "digits": 4
/// }
/// ```
pub struct Configuration {
    curve_manager: Manager<Rc<RocCurve>>,
    range_manager: Manager<EvaluationRange>,
    digits: Cell<Option<u32>>
}


fn curve_from_json(json_value: serde_json::Value) -> Result<Rc<RocCurve>, ManagerError> {
    RocCurve::from_json(json_value).map(Rc::new)
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            curve_manager: Manager::new(curve_from_json),
            range_manager: Manager::new(EvaluationRange::from_json),
            digits: Cell::new(None)
        }
    }

    pub fn curve_manager(&self) -> &Manager<Rc<RocCurve>> {
        &self.curve_manager
    }

    pub fn range_manager(&self) -> &Manager<EvaluationRange> {
        &self.range_manager
    }

    pub fn digits(&self) -> Option<u32> {
        self.digits.get()
    }

    pub fn from_reader(&self, file_path: &str) -> Result<(), ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        self.from_json(json_value)?;
        info!(
            curves = self.curve_manager.len(),
            ranges = self.range_manager.len(),
            "loaded configuration from {}",
            file_path
        );
        Ok(())
    }

    /// Loads every curve and range, or none of them when any entry fails.
    pub fn from_json(&self, json_value: serde_json::Value) -> Result<(), ManagerError> {
        let json_prop: ConfigurationJsonProp = ManagerError::from_json_or_json_parse_error(json_value)?;
        let curves = self.curve_manager.build_obj_from_json_vec(&json_prop.curves)?;
        let ranges = self.range_manager.build_obj_from_json_vec(&json_prop.ranges)?;
        self.curve_manager.insert_built(curves);
        self.range_manager.insert_built(ranges);
        if json_prop.digits.is_some() {
            self.digits.set(json_prop.digits);
        }
        Ok(())
    }

    /// Partial AUROC of a named curve over a named range, rounded to the
    /// configured digits.
    pub fn evaluate(&self, curve_name: &str, range_name: &str) -> Result<f64, ManagerError> {
        let curve = self.curve_manager.get(curve_name)?;
        let range = self.range_manager.get(range_name)?;
        Ok(self.report(range.partial_auc(&curve)?))
    }

    pub fn report(&self, value: f64) -> f64 {
        match self.digits.get() {
            Some(digits) => round(value, digits),
            None => value
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::roc::aurocerror::{
        Axis,
        PartialAurocError
    };

    fn sample_json() -> serde_json::Value {
        json!({
            "curves": [
                {"name": "flat", "fpr": [0.2, 0.4, 0.6, 0.8], "tpr": [0.8, 0.8, 0.8, 0.8]},
                {"name": "short", "fpr": [0.2, 0.4], "tpr": [0.8, 0.8]}
            ],
            "ranges": [
                {"name": "middle", "start": 0.3, "end": 0.6},
                {"name": "left", "start": 0.1, "end": 0.4}
            ],
            "digits": 6
        })
    }

    #[test]
    fn test_evaluate_named() {
        let config = Configuration::new();
        config.from_json(sample_json()).unwrap();
        assert_eq!(config.digits(), Some(6));
        assert_eq!(config.evaluate("flat", "middle").unwrap(), 0.24);
        assert_eq!(config.evaluate("short", "left").unwrap(), 0.22);
        assert!(matches!(
            config.evaluate("flat", "nowhere"),
            Err(ManagerError::NameNotFoundError(_))
        ));
    }

    #[test]
    fn test_invalid_curve_rejected() {
        let config = Configuration::new();
        let err = config.from_json(json!({
            "curves": [{"name": "bad", "fpr": [0.3, 0.2, 0.1], "tpr": [0.1, 0.2, 0.3]}]
        })).unwrap_err();
        assert!(matches!(
            err,
            ManagerError::PartialAurocError(PartialAurocError::NonMonotonic { axis: Axis::X, .. })
        ));
        assert!(config.curve_manager().is_empty());
    }

    #[test]
    fn test_failed_range_leaves_configuration_untouched() {
        let config = Configuration::new();
        config.from_json(json!({
            "curves": [{"name": "kept", "fpr": [0.2, 0.4], "tpr": [0.8, 0.8]}],
            "digits": 3
        })).unwrap();

        let err = config.from_json(json!({
            "curves": [{"name": "flat", "fpr": [0.2, 0.4], "tpr": [0.8, 0.8]}],
            "ranges": [
                {"name": "left", "start": 0.1, "end": 0.4},
                {"name": "reversed", "start": 0.6, "end": 0.1}
            ],
            "digits": 6
        })).unwrap_err();
        assert!(matches!(
            err,
            ManagerError::PartialAurocError(PartialAurocError::InvalidRangeOrder { .. })
        ));
        assert_eq!(config.curve_manager().names(), vec!["kept".to_owned()]);
        assert!(config.range_manager().is_empty());
        assert_eq!(config.digits(), Some(3));
    }

    #[test]
    fn test_report_without_digits() {
        let config = Configuration::default();
        config.from_json(json!({})).unwrap();
        assert_eq!(config.report(0.123456789), 0.123456789);
    }

    #[test]
    fn test_missing_file() {
        let config = Configuration::new();
        assert!(matches!(
            config.from_reader("/nonexistent/pauroc/config.json"),
            Err(ManagerError::IOError(_))
        ));
    }
}
