use smallvec::smallvec;

use super::PlanItem;
use crate::geometry::{BoundsPoints, PlanPoint};

/// The compass rose giving the plan's north direction.
#[derive(Debug, Clone, PartialEq)]
pub struct Compass {
    pub x: f32,
    pub y: f32,
    pub diameter: f32,
    /// North direction in radians, in `[0, 2π)`.
    pub north_direction: f32,
}

impl Compass {
    pub fn new(x: f32, y: f32, diameter: f32) -> Self {
        Self {
            x,
            y,
            diameter,
            north_direction: 0.0,
        }
    }

    pub fn center(&self) -> PlanPoint {
        [self.x, self.y]
    }
}

impl PlanItem for Compass {
    /// Corners of the square enclosing the compass disc.
    fn bounds_points(&self) -> BoundsPoints {
        let r = self.diameter / 2.0;
        smallvec![
            [self.x - r, self.y - r],
            [self.x + r, self.y - r],
            [self.x + r, self.y + r],
            [self.x - r, self.y + r],
        ]
    }
}
