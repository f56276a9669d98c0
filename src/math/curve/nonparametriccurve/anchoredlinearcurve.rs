use crate::math::curve::nonparametriccurve::nonparametriccurve::{
    NonparametricCurve,
    Point2D
};

/// Piecewise-linear curve through sorted samples, closed off by two fixed
/// anchor points that are not part of the sample set.
///
/// Lookups before the first sample interpolate against `lower_anchor`,
/// lookups after the last sample against `upper_anchor`. A lookup that hits
/// a sample x returns that sample's y without any arithmetic.
///
/// Samples may repeat an x value (a vertical step). `left_value` resolves
/// such a step to its first sample, `right_value` to its last.
#[derive(Debug, Clone)]
pub struct AnchoredLinearCurve {
    lower_anchor: Point2D,
    upper_anchor: Point2D,
    samples: Vec<Point2D>,
}

impl AnchoredLinearCurve {
    /// Returns `None` when `samples` is empty. Samples must already be
    /// sorted by x.
    pub fn new(
        lower_anchor: Point2D,
        upper_anchor: Point2D,
        samples: Vec<Point2D>,
    ) -> Option<AnchoredLinearCurve> {
        if samples.is_empty() {
            return None;
        }
        Some(AnchoredLinearCurve { lower_anchor, upper_anchor, samples })
    }

    /// Curve anchored at `(0, 0)` and `(1, 1)`, as every ROC curve is.
    pub fn roc(samples: Vec<Point2D>) -> Option<AnchoredLinearCurve> {
        Self::new(Point2D::new(0.0, 0.0), Point2D::new(1.0, 1.0), samples)
    }

    pub fn from_xy(x: &[f64], y: &[f64]) -> Option<AnchoredLinearCurve> {
        let samples = x.iter()
            .zip(y.iter())
            .map(|(&xi, &yi)| Point2D::new(xi, yi))
            .collect();
        Self::roc(samples)
    }

    /// Segment around insertion position `idx` of the sample sequence.
    fn bracket(&self, idx: usize) -> (Point2D, Point2D) {
        let n = self.samples.len();
        if idx == 0 {
            (self.lower_anchor, self.samples[0])
        } else if idx >= n {
            (self.samples[n - 1], self.upper_anchor)
        } else {
            (self.samples[idx - 1], self.samples[idx])
        }
    }

    /// Value at `x`, taking the first sample when `x` hits a sample.
    pub fn left_value(&self, x: f64) -> f64 {
        let idx = self.samples.partition_point(|pt| pt.x() < x);
        if idx < self.samples.len() && self.samples[idx].x() == x {
            return self.samples[idx].y();
        }
        let (lhs, rhs) = self.bracket(idx);
        Point2D::interpolate(&lhs, &rhs, x)
    }

    /// Value at `x`, taking the last sample when `x` hits a sample.
    pub fn right_value(&self, x: f64) -> f64 {
        let idx = self.samples.partition_point(|pt| pt.x() <= x);
        if idx > 0 && self.samples[idx - 1].x() == x {
            return self.samples[idx - 1].y();
        }
        let (lhs, rhs) = self.bracket(idx);
        Point2D::interpolate(&lhs, &rhs, x)
    }

    /// Samples whose x lies strictly inside `(lhs_x, rhs_x)`.
    pub fn samples_between(&self, lhs_x: f64, rhs_x: f64) -> &[Point2D] {
        let begin = self.samples.partition_point(|pt| pt.x() <= lhs_x);
        let end = self.samples.partition_point(|pt| pt.x() < rhs_x);
        if begin >= end {
            &[]
        } else {
            &self.samples[begin..end]
        }
    }
}

impl NonparametricCurve for AnchoredLinearCurve {
    fn points(&self) -> Vec<Point2D> {
        let mut pts = Vec::with_capacity(self.samples.len() + 2);
        pts.push(self.lower_anchor);
        pts.extend_from_slice(&self.samples);
        pts.push(self.upper_anchor);
        pts
    }
}
