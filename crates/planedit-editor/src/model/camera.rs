use smallvec::smallvec;

use super::PlanItem;
use crate::geometry::BoundsPoints;

/// The observer camera. Only its plan position takes part in 2D edits.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub yaw: f32,
}

impl Camera {
    pub fn new(x: f32, y: f32, z: f32, yaw: f32) -> Self {
        Self { x, y, z, yaw }
    }
}

impl PlanItem for Camera {
    fn bounds_points(&self) -> BoundsPoints {
        smallvec![[self.x, self.y]]
    }
}
