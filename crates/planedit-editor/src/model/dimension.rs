use smallvec::smallvec;

use super::PlanItem;
use crate::geometry::{distance, BoundsPoints, PlanPoint};

/// A measured distance between two points, drawn `offset` away from the
/// measured segment.
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionLine {
    pub x_start: f32,
    pub y_start: f32,
    pub x_end: f32,
    pub y_end: f32,
    pub offset: f32,
}

impl DimensionLine {
    pub fn new(x_start: f32, y_start: f32, x_end: f32, y_end: f32, offset: f32) -> Self {
        Self {
            x_start,
            y_start,
            x_end,
            y_end,
            offset,
        }
    }

    pub fn start(&self) -> PlanPoint {
        [self.x_start, self.y_start]
    }

    pub fn end(&self) -> PlanPoint {
        [self.x_end, self.y_end]
    }

    pub fn set_start(&mut self, [x, y]: PlanPoint) {
        self.x_start = x;
        self.y_start = y;
    }

    pub fn set_end(&mut self, [x, y]: PlanPoint) {
        self.x_end = x;
        self.y_end = y;
    }

    pub fn length(&self) -> f32 {
        distance(self.start(), self.end())
    }
}

impl PlanItem for DimensionLine {
    fn bounds_points(&self) -> BoundsPoints {
        smallvec![self.start(), self.end()]
    }
}
