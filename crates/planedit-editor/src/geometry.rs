//! Plan geometry helpers: points, bounds and angle normalization.
//!
//! Plan coordinates are `f32` centimeters stored as `[x, y]` pairs. Matrix
//! products are evaluated in `f64` and rounded once, so a transform applied
//! to a captured snapshot always yields the same result.

use std::f32::consts::TAU;

use lyon::math::Transform;
use smallvec::SmallVec;

/// A plan coordinate `[x, y]` in centimeters.
pub type PlanPoint = [f32; 2];

/// Point list used for bounds computation; most kinds need at most four.
pub type BoundsPoints = SmallVec<[PlanPoint; 4]>;

/// Maps a point through an affine transform.
pub fn map_point(transform: &Transform, p: PlanPoint) -> PlanPoint {
    let x = p[0] as f64;
    let y = p[1] as f64;
    [
        (x * transform.m11 as f64 + y * transform.m21 as f64 + transform.m31 as f64) as f32,
        (x * transform.m12 as f64 + y * transform.m22 as f64 + transform.m32 as f64) as f32,
    ]
}

/// Euclidean distance between two points.
pub fn distance(a: PlanPoint, b: PlanPoint) -> f32 {
    let dx = (b[0] - a[0]) as f64;
    let dy = (b[1] - a[1]) as f64;
    (dx * dx + dy * dy).sqrt() as f32
}

/// Direction of `from -> to` in radians, in `(-π, π]`.
pub fn direction(from: PlanPoint, to: PlanPoint) -> f32 {
    ((to[1] - from[1]) as f64).atan2((to[0] - from[0]) as f64) as f32
}

/// Midpoint of two points.
pub fn midpoint(a: PlanPoint, b: PlanPoint) -> PlanPoint {
    [(a[0] + b[0]) / 2.0, (a[1] + b[1]) / 2.0]
}

/// Wraps an angle in radians into `[0, 2π)`.
///
/// Values already inside the range are returned unchanged.
pub fn wrap_angle(angle: f32) -> f32 {
    let mut wrapped = angle % TAU;
    if wrapped < 0.0 {
        wrapped += TAU;
    }
    if wrapped >= TAU {
        wrapped -= TAU;
    }
    wrapped
}

/// Axis-aligned bounds of a set of plan points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl Bounds {
    pub fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// The degenerate bounds reported when there are no points at all.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Computes the bounds of the given points, or [`Bounds::zero`] if
    /// the iterator is empty.
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = PlanPoint>,
    {
        let mut min_x = f32::MAX;
        let mut min_y = f32::MAX;
        let mut max_x = -f32::MAX;
        let mut max_y = -f32::MAX;

        for [x, y] in points {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }

        if min_x > max_x || min_y > max_y {
            return Self::zero();
        }
        Self::new(min_x, min_y, max_x, max_y)
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    pub fn center_x(&self) -> f32 {
        (self.min_x + self.max_x) / 2.0
    }

    pub fn center_y(&self) -> f32 {
        (self.min_y + self.max_y) / 2.0
    }

    pub fn center(&self) -> PlanPoint {
        [self.center_x(), self.center_y()]
    }

    /// True for the zero bounds of an empty point set.
    pub fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}
