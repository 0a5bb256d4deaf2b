//! Matrices for the common selection edits: move, rotate, flip and resize.

use std::fmt;
use std::str::FromStr;

use lyon::math::{vector, Angle, Transform};

use crate::geometry::{Bounds, PlanPoint};

/// Moves by `(dx, dy)`.
pub fn translation(dx: f32, dy: f32) -> Transform {
    Transform::translation(dx, dy)
}

/// Rotates by `angle_degrees` around `center`.
pub fn rotation_about(angle_degrees: f32, [cx, cy]: PlanPoint) -> Transform {
    Transform::translation(-cx, -cy)
        .then_rotate(Angle::degrees(angle_degrees))
        .then_translate(vector(cx, cy))
}

/// Mirrors around the center of `bounds`.
pub fn flip(bounds: &Bounds, horizontal: bool, vertical: bool) -> Transform {
    let sx = if horizontal { -1.0 } else { 1.0 };
    let sy = if vertical { -1.0 } else { 1.0 };
    Transform::new(
        sx,
        0.0,
        0.0,
        sy,
        bounds.center_x() * (1.0 - sx),
        bounds.center_y() * (1.0 - sy),
    )
}

/// How a requested size is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResizeMeasure {
    /// The new size itself.
    #[default]
    Absolute,
    /// The difference to the current size.
    Relative,
    /// The new size in percent of the current size.
    Percent,
}

impl ResizeMeasure {
    pub const ALL: [ResizeMeasure; 3] = [
        ResizeMeasure::Absolute,
        ResizeMeasure::Relative,
        ResizeMeasure::Percent,
    ];

    /// Scale factor turning `size` into the size described by `value`.
    pub fn resize_factor(self, size: f32, value: f32) -> f32 {
        match self {
            ResizeMeasure::Absolute if size == 0.0 => 1.0,
            ResizeMeasure::Absolute => value / size,
            ResizeMeasure::Relative if size == 0.0 => 1.0,
            ResizeMeasure::Relative => value / size + 1.0,
            ResizeMeasure::Percent => value / 100.0,
        }
    }

    /// Re-expresses `value`, given in `source` measure for an object of
    /// `size`, in this measure.
    pub fn convert(self, source: ResizeMeasure, size: f32, value: f32) -> f32 {
        use ResizeMeasure::*;
        match (source, self) {
            (a, b) if a == b => value,
            (Relative, Absolute) => value + size,
            (Percent, Absolute) => value / 100.0 * size,
            (Absolute, Relative) => value - size,
            (Percent, Relative) => (value / 100.0 - 1.0) * size,
            (_, Percent) if size == 0.0 => 100.0,
            (Absolute, Percent) => value / size * 100.0,
            (Relative, Percent) => (value / size + 1.0) * 100.0,
            _ => value,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ResizeMeasure::Absolute => "absolute",
            ResizeMeasure::Relative => "relative",
            ResizeMeasure::Percent => "percent",
        }
    }
}

impl fmt::Display for ResizeMeasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResizeMeasure {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown resize measure: {}", s))
    }
}

/// The point of the bounds that stays in place while resizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FixPoint {
    #[default]
    NorthWest,
    North,
    NorthEast,
    West,
    Center,
    East,
    SouthWest,
    South,
    SouthEast,
}

impl FixPoint {
    pub const ALL: [FixPoint; 9] = [
        FixPoint::NorthWest,
        FixPoint::North,
        FixPoint::NorthEast,
        FixPoint::West,
        FixPoint::Center,
        FixPoint::East,
        FixPoint::SouthWest,
        FixPoint::South,
        FixPoint::SouthEast,
    ];

    /// Position as fractions of the bounds width and height.
    pub fn fractions(self) -> (f32, f32) {
        match self {
            FixPoint::NorthWest => (0.0, 0.0),
            FixPoint::North => (0.5, 0.0),
            FixPoint::NorthEast => (1.0, 0.0),
            FixPoint::West => (0.0, 0.5),
            FixPoint::Center => (0.5, 0.5),
            FixPoint::East => (1.0, 0.5),
            FixPoint::SouthWest => (0.0, 1.0),
            FixPoint::South => (0.5, 1.0),
            FixPoint::SouthEast => (1.0, 1.0),
        }
    }

    pub fn locate(self, bounds: &Bounds) -> PlanPoint {
        let (dx, dy) = self.fractions();
        [
            bounds.min_x + dx * bounds.width(),
            bounds.min_y + dy * bounds.height(),
        ]
    }

    pub fn short_name(self) -> &'static str {
        match self {
            FixPoint::NorthWest => "nw",
            FixPoint::North => "n",
            FixPoint::NorthEast => "ne",
            FixPoint::West => "w",
            FixPoint::Center => "c",
            FixPoint::East => "e",
            FixPoint::SouthWest => "sw",
            FixPoint::South => "s",
            FixPoint::SouthEast => "se",
        }
    }
}

impl fmt::Display for FixPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for FixPoint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.short_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown fix point: {}", s))
    }
}

/// Scales about an explicit point.
pub fn scale_about(fx: f32, fy: f32, [px, py]: PlanPoint) -> Transform {
    Transform::new(fx, 0.0, 0.0, fy, (1.0 - fx) * px, (1.0 - fy) * py)
}

/// Resizes `bounds` to the requested width and height, keeping `fix_point`
/// in place.
pub fn resize(
    bounds: &Bounds,
    measure: ResizeMeasure,
    width: f32,
    height: f32,
    fix_point: FixPoint,
) -> Transform {
    let fx = measure.resize_factor(bounds.width(), width);
    let fy = measure.resize_factor(bounds.height(), height);
    scale_about(fx, fy, fix_point.locate(bounds))
}
