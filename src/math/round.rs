/// Largest power of ten that `f64` holds exactly.
const MAX_EXACT_POW10: u32 = 22;

/// Rounds `x` to `digits` decimal places, ties to even.
///
/// The scale is applied in exact power-of-ten steps so that large `digits`
/// do not overflow the scale factor before it meets `x`.
pub fn round(x: f64, digits: u32) -> f64 {
    let steps: Vec<f64> = pow10_steps(digits).collect();
    let scaled = steps.iter().fold(x, |acc, step| acc * step);
    steps.iter().rev().fold(scaled.round_ties_even(), |acc, step| acc / step)
}

fn pow10_steps(digits: u32) -> impl Iterator<Item = f64> {
    let full = digits / MAX_EXACT_POW10;
    let rest = digits % MAX_EXACT_POW10;
    std::iter::repeat_n(1e22, full as usize)
        .chain(std::iter::once(10f64.powi(rest as i32)))
}

/// True when `lhs` and `rhs` agree once their difference is rounded to
/// `digits` decimal places.
pub fn almost_equal(lhs: f64, rhs: f64, digits: u32) -> bool {
    round(lhs - rhs, digits) == 0.0
}
