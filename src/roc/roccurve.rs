use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::manager::managererror::ManagerError;
use crate::math::curve::nonparametriccurve::anchoredlinearcurve::AnchoredLinearCurve;
use crate::math::curve::nonparametriccurve::nonparametriccurve::NonparametricCurve;
use crate::math::integration::trapezoid::trapezoid;
use crate::roc::aurocerror::{
    Axis,
    PartialAurocError
};
use crate::roc::partialareacalculator::integrate_range;
use crate::roc::validation::{
    float_sequence,
    validate_curve,
    validate_range
};

#[derive(Deserialize)]
struct RocCurveJsonProp {
    fpr: Value,
    tpr: Value,
}

/// A validated ROC curve: false-positive rates against true-positive rates,
/// both non-decreasing and inside `[0, 1]`.
#[derive(Debug, Clone)]
pub struct RocCurve {
    fpr: Vec<f64>,
    tpr: Vec<f64>,
    curve: AnchoredLinearCurve,
}

impl RocCurve {
    pub fn new(fpr: Vec<f64>, tpr: Vec<f64>) -> Result<RocCurve, PartialAurocError> {
        validate_curve(&fpr, &tpr)?;
        let curve = AnchoredLinearCurve::from_xy(&fpr, &tpr)
            .ok_or(PartialAurocError::TooFewPoints(Axis::X))?;
        Ok(RocCurve { fpr, tpr, curve })
    }

    /// Reads `{"fpr": [...], "tpr": [...]}`; both arrays must hold floats.
    pub fn from_json(json_value: Value) -> Result<RocCurve, ManagerError> {
        let json_prop: RocCurveJsonProp = ManagerError::from_json_or_json_parse_error(json_value)?;
        let fpr = float_sequence(&json_prop.fpr, Axis::X)?;
        let tpr = float_sequence(&json_prop.tpr, Axis::Y)?;
        Ok(RocCurve::new(fpr, tpr)?)
    }

    /// ROC curve of a binary classifier.
    ///
    /// One point per distinct score, visited from the highest score down, so
    /// tied scores form a single diagonal step. The curve starts at `(0, 0)`
    /// and ends at `(1, 1)`.
    pub fn from_labeled_scores(scores: &[f64], labels: &[bool]) -> Result<RocCurve, PartialAurocError> {
        if scores.len() != labels.len() {
            return Err(PartialAurocError::LabelScoreLengthMismatch {
                scores: scores.len(),
                labels: labels.len(),
            });
        }
        let positives = labels.iter().filter(|&&label| label).count();
        let negatives = labels.len() - positives;
        if positives == 0 || negatives == 0 {
            return Err(PartialAurocError::SingleClassLabels);
        }

        let mut order: Vec<usize> = (0..scores.len()).collect();
        order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

        let mut fpr = vec![0.0];
        let mut tpr = vec![0.0];
        let (mut tp, mut fp) = (0usize, 0usize);
        let mut i = 0;
        while i < order.len() {
            let threshold = scores[order[i]];
            while i < order.len() && scores[order[i]].total_cmp(&threshold).is_eq() {
                if labels[order[i]] {
                    tp += 1;
                } else {
                    fp += 1;
                }
                i += 1;
            }
            fpr.push(fp as f64 / negatives as f64);
            tpr.push(tp as f64 / positives as f64);
        }
        debug!(thresholds = fpr.len() - 1, positives, negatives, "built ROC curve");

        RocCurve::new(fpr, tpr)
    }

    pub fn fpr(&self) -> &[f64] {
        &self.fpr
    }

    pub fn tpr(&self) -> &[f64] {
        &self.tpr
    }

    pub fn len(&self) -> usize {
        self.fpr.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fpr.is_empty()
    }

    /// Area over `[range_start, range_end]`.
    pub fn partial_auc(&self, range_start: f64, range_end: f64) -> Result<f64, PartialAurocError> {
        validate_range(range_start, range_end)?;
        Ok(integrate_range(&self.curve, range_start, range_end))
    }

    /// Area over `[range_start, range_end]` divided by the range width, or
    /// zero for an empty range.
    pub fn normalized_partial_auc(&self, range_start: f64, range_end: f64) -> Result<f64, PartialAurocError> {
        let area = self.partial_auc(range_start, range_end)?;
        if range_end == range_start {
            Ok(0.0)
        } else {
            Ok(area / (range_end - range_start))
        }
    }

    pub fn auc(&self) -> f64 {
        trapezoid(&self.curve.points())
    }
}

/// AUC as the Mann-Whitney U statistic of the positive scores, ties given
/// their average rank. Does not go through any ROC curve.
pub fn rank_auc(scores: &[f64], labels: &[bool]) -> Result<f64, PartialAurocError> {
    if scores.len() != labels.len() {
        return Err(PartialAurocError::LabelScoreLengthMismatch {
            scores: scores.len(),
            labels: labels.len(),
        });
    }
    let positives = labels.iter().filter(|&&label| label).count();
    let negatives = labels.len() - positives;
    if positives == 0 || negatives == 0 {
        return Err(PartialAurocError::SingleClassLabels);
    }

    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[a].total_cmp(&scores[b]));

    let mut rank_sum_pos = 0.0;
    let mut i = 0;
    while i < order.len() {
        let mut j = i;
        while j < order.len() && scores[order[j]].total_cmp(&scores[order[i]]).is_eq() {
            j += 1;
        }
        // ranks are 1-based; the tie group i..j shares their mean
        let avg_rank = (i + 1 + j) as f64 / 2.0;
        let tied_pos = order[i..j].iter().filter(|&&k| labels[k]).count();
        rank_sum_pos += avg_rank * tied_pos as f64;
        i = j;
    }

    let p = positives as f64;
    let n = negatives as f64;
    let u = rank_sum_pos - p * (p + 1.0) / 2.0;
    Ok(u / (p * n))
}
