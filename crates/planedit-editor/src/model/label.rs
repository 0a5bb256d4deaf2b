use smallvec::smallvec;

use super::PlanItem;
use crate::geometry::{BoundsPoints, PlanPoint};

/// Free text anchored at a plan point.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub x: f32,
    pub y: f32,
    /// Orientation of the text in radians.
    pub angle: f32,
}

impl Label {
    pub fn new(text: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            angle: 0.0,
        }
    }

    pub fn with_angle(mut self, angle: f32) -> Self {
        self.angle = angle;
        self
    }

    pub fn anchor(&self) -> PlanPoint {
        [self.x, self.y]
    }
}

impl PlanItem for Label {
    fn bounds_points(&self) -> BoundsPoints {
        smallvec![self.anchor()]
    }
}
