use smallvec::smallvec;

use super::{ObjectId, PlanItem};
use crate::geometry::{distance, BoundsPoints, PlanPoint};

/// Texture applied to one side of a wall.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    pub name: String,
    pub width: f32,
    pub height: f32,
}

impl Texture {
    pub fn new(name: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
        }
    }
}

/// One end of a wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallEnd {
    Start,
    End,
}

/// A straight wall between two points.
///
/// `wall_at_start` / `wall_at_end` are back-references to the wall joined at
/// that end. The neighbor is expected to point back at this wall from one of
/// its own ends, but neither wall owns the other.
#[derive(Debug, Clone, PartialEq)]
pub struct Wall {
    pub x_start: f32,
    pub y_start: f32,
    pub x_end: f32,
    pub y_end: f32,
    pub thickness: f32,
    pub height: Option<f32>,
    pub wall_at_start: Option<ObjectId>,
    pub wall_at_end: Option<ObjectId>,
    pub left_side_color: Option<u32>,
    pub left_side_texture: Option<Texture>,
    pub right_side_color: Option<u32>,
    pub right_side_texture: Option<Texture>,
}

impl Wall {
    pub fn new(x_start: f32, y_start: f32, x_end: f32, y_end: f32, thickness: f32) -> Self {
        Self {
            x_start,
            y_start,
            x_end,
            y_end,
            thickness,
            height: None,
            wall_at_start: None,
            wall_at_end: None,
            left_side_color: None,
            left_side_texture: None,
            right_side_color: None,
            right_side_texture: None,
        }
    }

    pub fn start(&self) -> PlanPoint {
        [self.x_start, self.y_start]
    }

    pub fn end(&self) -> PlanPoint {
        [self.x_end, self.y_end]
    }

    pub fn point(&self, end: WallEnd) -> PlanPoint {
        match end {
            WallEnd::Start => self.start(),
            WallEnd::End => self.end(),
        }
    }

    pub fn set_point(&mut self, end: WallEnd, [x, y]: PlanPoint) {
        match end {
            WallEnd::Start => {
                self.x_start = x;
                self.y_start = y;
            }
            WallEnd::End => {
                self.x_end = x;
                self.y_end = y;
            }
        }
    }

    /// The wall joined at the given end, if any.
    pub fn wall_at(&self, end: WallEnd) -> Option<ObjectId> {
        match end {
            WallEnd::Start => self.wall_at_start,
            WallEnd::End => self.wall_at_end,
        }
    }

    pub fn set_wall_at(&mut self, end: WallEnd, wall: Option<ObjectId>) {
        match end {
            WallEnd::Start => self.wall_at_start = wall,
            WallEnd::End => self.wall_at_end = wall,
        }
    }

    /// Which end of this wall is joined to `other`, start taking precedence.
    pub fn joined_end(&self, other: ObjectId) -> Option<WallEnd> {
        if self.wall_at_start == Some(other) {
            Some(WallEnd::Start)
        } else if self.wall_at_end == Some(other) {
            Some(WallEnd::End)
        } else {
            None
        }
    }

    pub fn length(&self) -> f32 {
        distance(self.start(), self.end())
    }
}

impl PlanItem for Wall {
    /// The two end points of the wall, not its thick outline.
    fn bounds_points(&self) -> BoundsPoints {
        smallvec![self.start(), self.end()]
    }
}
