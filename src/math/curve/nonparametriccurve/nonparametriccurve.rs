#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2D {
    x: f64,
    y: f64
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Point2D {
        Point2D { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Linear interpolation on the segment `[lhs_pt, rhs_pt]` at `x`.
    ///
    /// Either endpoint's x returns that endpoint's y as is. A zero-width
    /// segment yields `lhs_pt.y`.
    pub fn interpolate(lhs_pt: &Point2D, rhs_pt: &Point2D, x: f64) -> f64 {
        if x == lhs_pt.x || rhs_pt.x == lhs_pt.x {
            return lhs_pt.y;
        }
        if x == rhs_pt.x {
            return rhs_pt.y;
        }
        lhs_pt.y + (rhs_pt.y - lhs_pt.y) * (x - lhs_pt.x) / (rhs_pt.x - lhs_pt.x)
    }
}

pub trait NonparametricCurve {
    /// Every node of the curve in x order.
    fn points(&self) -> Vec<Point2D>;
}
