use super::PlanItem;
use crate::geometry::{BoundsPoints, PlanPoint};

/// A piece of furniture: a rotated `width` x `depth` box centered on
/// `(x, y)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Furniture {
    pub name: String,
    pub x: f32,
    pub y: f32,
    /// Rotation in radians, in `[0, 2π)`.
    pub angle: f32,
    pub width: f32,
    pub depth: f32,
    pub height: f32,
    pub elevation: f32,
    pub model_mirrored: bool,
}

impl Furniture {
    pub fn new(name: impl Into<String>, x: f32, y: f32, width: f32, depth: f32) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            angle: 0.0,
            width,
            depth,
            height: 0.0,
            elevation: 0.0,
            model_mirrored: false,
        }
    }

    pub fn with_angle(mut self, angle: f32) -> Self {
        self.angle = angle;
        self
    }

    pub fn center(&self) -> PlanPoint {
        [self.x, self.y]
    }

    /// The four corners of the rotated footprint, starting top-left and
    /// going clockwise in plan coordinates.
    pub fn corners(&self) -> [PlanPoint; 4] {
        let (sin, cos) = (self.angle as f64).sin_cos();
        let hw = self.width as f64 / 2.0;
        let hd = self.depth as f64 / 2.0;
        let (cx, cy) = (self.x as f64, self.y as f64);
        let corner = |dx: f64, dy: f64| -> PlanPoint {
            [
                (cx + dx * cos - dy * sin) as f32,
                (cy + dx * sin + dy * cos) as f32,
            ]
        };
        [
            corner(-hw, -hd),
            corner(hw, -hd),
            corner(hw, hd),
            corner(-hw, hd),
        ]
    }
}

impl PlanItem for Furniture {
    fn bounds_points(&self) -> BoundsPoints {
        self.corners().into_iter().collect()
    }
}
