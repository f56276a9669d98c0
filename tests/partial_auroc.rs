use approx::assert_abs_diff_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::json;

use pauroc::math::round::{almost_equal, round};
use pauroc::{
    auc,
    compute,
    compute_from_json,
    rank_auc,
    Axis,
    PartialAurocError,
    RangeBound,
    RocCurve
};

/// Noisy classifier: positives score higher on average, scores rounded to
/// two decimals so ties occur.
fn labeled_dataset(seed: u64, n: usize) -> (Vec<f64>, Vec<bool>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let labels: Vec<bool> = (0..n).map(|_| rng.gen_bool(0.4)).collect();
    let scores = labels
        .iter()
        .map(|&label| {
            let shift = if label { 0.35 } else { 0.0 };
            round(rng.r#gen::<f64>() + shift, 2)
        })
        .collect();
    (scores, labels)
}

#[test]
fn full_range_matches_rank_auc() {
    for seed in 0..20 {
        let (scores, labels) = labeled_dataset(seed, 500);
        let roc = RocCurve::from_labeled_scores(&scores, &labels).unwrap();
        let area = compute(roc.fpr(), roc.tpr(), 0.0, 1.0).unwrap();
        let expected = rank_auc(&scores, &labels).unwrap();
        assert!(almost_equal(area, expected, 2), "seed {seed}: {area} vs {expected}");
        assert_abs_diff_eq!(area, expected, epsilon = 1e-9);
        assert_abs_diff_eq!(area, auc(roc.fpr(), roc.tpr()).unwrap(), epsilon = 1e-12);
    }
}

#[test]
fn repeated_calls_are_bit_identical() {
    let (scores, labels) = labeled_dataset(7, 200);
    let roc = RocCurve::from_labeled_scores(&scores, &labels).unwrap();
    let first = compute(roc.fpr(), roc.tpr(), 0.05, 0.3).unwrap();
    for _ in 0..10 {
        let again = compute(roc.fpr(), roc.tpr(), 0.05, 0.3).unwrap();
        assert_eq!(first.to_bits(), again.to_bits());
    }
}

#[test]
fn two_point_curve() {
    let area = compute(&[0.2, 0.4], &[0.8, 0.8], 0.1, 0.4).unwrap();
    assert_abs_diff_eq!(area, 0.22, epsilon = 1e-12);
}

#[test]
fn rectangle_with_and_without_interpolation() {
    let x = [0.2, 0.4, 0.6, 0.8];
    let y = [0.8, 0.8, 0.8, 0.8];
    assert_abs_diff_eq!(compute(&x, &y, 0.4, 0.6).unwrap(), 0.16, epsilon = 1e-12);
    assert_abs_diff_eq!(compute(&x, &y, 0.3, 0.6).unwrap(), 0.24, epsilon = 1e-12);
}

#[test]
fn boundary_on_sample_uses_sample_value() {
    // a tiny sliver starting exactly at the sample x=0.35 reads y=0.7 there
    let x = [0.1, 0.35, 0.6];
    let y = [0.3, 0.7, 0.9];
    let width = 1e-9;
    let sliver = compute(&x, &y, 0.35, 0.35 + width).unwrap();
    assert_abs_diff_eq!(sliver / width, 0.7, epsilon = 1e-6);
    let sliver = compute(&x, &y, 0.35 - width, 0.35).unwrap();
    assert_abs_diff_eq!(sliver / width, 0.7, epsilon = 1e-6);
}

#[test]
fn anchors_are_used_at_the_unit_bounds() {
    let x = [0.5];
    let y = [0.5];
    // single sample is rejected, anchors never count as samples
    assert_eq!(compute(&x, &y, 0.0, 1.0), Err(PartialAurocError::TooFewPoints(Axis::X)));

    let x = [0.4, 0.6];
    let y = [0.6, 0.8];
    // (0,0) -> (0.4,0.6): 0.12, (0.4,0.6) -> (0.6,0.8): 0.14, (0.6,0.8) -> (1,1): 0.36
    assert_abs_diff_eq!(compute(&x, &y, 0.0, 1.0).unwrap(), 0.62, epsilon = 1e-12);
    assert_abs_diff_eq!(compute(&x, &y, 0.0, 0.4).unwrap(), 0.12, epsilon = 1e-12);
    assert_abs_diff_eq!(compute(&x, &y, 0.6, 1.0).unwrap(), 0.36, epsilon = 1e-12);
}

#[test]
fn range_end_at_one_takes_the_anchor_as_is() {
    let (x0, y0) = (0.5997628087966007, 0.031377762175317736);
    let x = [0.2, x0];
    let y = [0.01, y0];
    // one trapezoid from the last sample to (1, 1), with no rounding at 1.0
    let expected = (1.0 - x0) * (y0 + 1.0) / 2.0;
    assert_eq!(compute(&x, &y, x0, 1.0).unwrap().to_bits(), expected.to_bits());
}

#[test]
fn rejects_reversed_x_regardless_of_y() {
    for y in [[0.1, 0.2, 0.3], [0.3, 0.2, 0.1], [0.5, 0.5, 0.5]] {
        let err = compute(&[0.3, 0.2, 0.1], &y, 0.0, 1.0).unwrap_err();
        assert_eq!(err, PartialAurocError::NonMonotonic { axis: Axis::X, index: 1 });
    }
}

#[test]
fn rejects_out_of_order_range() {
    assert_eq!(
        compute(&[0.1, 0.2], &[0.1, 0.2], 0.6, 0.1),
        Err(PartialAurocError::InvalidRangeOrder { start: 0.6, end: 0.1 })
    );
}

#[test]
fn json_validation_order() {
    let cases = [
        (json!([1, 2, 3]), json!([]), json!(0.0), json!(0.0), PartialAurocError::NonNumeric(Axis::X)),
        (json!([]), json!([1, 2, 3]), json!(0.0), json!(0.0), PartialAurocError::NonNumeric(Axis::Y)),
        (json!([]), json!([]), json!(1), json!(0.0), PartialAurocError::TooFewPoints(Axis::X)),
        (json!([0.1, 0.2]), json!([]), json!(0.0), json!(0.0), PartialAurocError::TooFewPoints(Axis::Y)),
        (
            json!([0.1, 0.2]),
            json!([0.1, 0.2, 0.3]),
            json!(0.0),
            json!(0.0),
            PartialAurocError::LengthMismatch { x_len: 2, y_len: 3 },
        ),
        (
            json!([0.1, 0.2]),
            json!([0.1, 0.2]),
            json!(1),
            json!(0.0),
            PartialAurocError::RangeBoundNotNumeric(RangeBound::Start),
        ),
        (
            json!([0.1, 0.2]),
            json!([0.1, 0.2]),
            json!(0.0),
            json!(1),
            PartialAurocError::RangeBoundNotNumeric(RangeBound::End),
        ),
        (
            json!([0.1, 0.2]),
            json!([0.1, 0.2]),
            json!(-0.001),
            json!(0.0),
            PartialAurocError::RangeBoundNegative { bound: RangeBound::Start, value: -0.001 },
        ),
        (
            json!([0.1, 0.2]),
            json!([0.1, 0.2]),
            json!(1.001),
            json!(0.0),
            PartialAurocError::RangeBoundAboveOne { bound: RangeBound::Start, value: 1.001 },
        ),
        (
            json!([0.1, 0.2]),
            json!([0.1, 0.2]),
            json!(0.001),
            json!(-0.001),
            PartialAurocError::RangeBoundNegative { bound: RangeBound::End, value: -0.001 },
        ),
        (
            json!([0.1, 0.2]),
            json!([0.1, 0.2]),
            json!(0.001),
            json!(1.0001),
            PartialAurocError::RangeBoundAboveOne { bound: RangeBound::End, value: 1.0001 },
        ),
        (
            json!([0.1, 0.2]),
            json!([0.1, 0.2]),
            json!(0.002),
            json!(0.001),
            PartialAurocError::InvalidRangeOrder { start: 0.002, end: 0.001 },
        ),
    ];
    for (x, y, start, end, expected) in cases {
        assert_eq!(compute_from_json(&x, &y, &start, &end), Err(expected));
    }
}

#[test]
fn nan_and_unit_range_rules() {
    assert_eq!(
        compute(&[0.1, f64::NAN], &[0.1, 0.2], 0.0, 1.0),
        Err(PartialAurocError::ContainsNaN { axis: Axis::X, index: 1 })
    );
    assert_eq!(
        compute(&[0.1, 0.2], &[0.1, 1.2], 0.0, 1.0),
        Err(PartialAurocError::OutOfUnitRange { axis: Axis::Y, index: 1, value: 1.2 })
    );
    assert_eq!(
        compute(&[0.1, f64::INFINITY], &[0.1, 0.2], 0.0, 1.0),
        Err(PartialAurocError::OutOfUnitRange { axis: Axis::X, index: 1, value: f64::INFINITY })
    );
}
