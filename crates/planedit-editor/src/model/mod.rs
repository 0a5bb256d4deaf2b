//! Plan object model.
//!
//! Every object of a floor plan is one variant of [`PlanObject`]. Kinds only
//! carry the attributes that geometric edits read or write.

mod camera;
mod compass;
mod dimension;
mod furniture;
mod label;
mod polyline;
mod room;
mod wall;

pub use camera::Camera;
pub use compass::Compass;
pub use dimension::DimensionLine;
pub use furniture::Furniture;
pub use label::Label;
pub use polyline::Polyline;
pub use room::Room;
pub use wall::{Texture, Wall, WallEnd};

use std::fmt;

use crate::geometry::BoundsPoints;

/// Stable identity of an object inside a [`crate::plan::Plan`].
pub type ObjectId = u64;

/// Behaviour shared by every plan object kind.
pub trait PlanItem {
    /// The points describing the object's outline for bounds computation.
    fn bounds_points(&self) -> BoundsPoints;
}

/// The kind of a plan object, used for diagnostics and kind checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Wall,
    Room,
    Polyline,
    Label,
    DimensionLine,
    Furniture,
    Camera,
    Compass,
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ObjectKind::Wall => "wall",
            ObjectKind::Room => "room",
            ObjectKind::Polyline => "polyline",
            ObjectKind::Label => "label",
            ObjectKind::DimensionLine => "dimension line",
            ObjectKind::Furniture => "piece of furniture",
            ObjectKind::Camera => "camera",
            ObjectKind::Compass => "compass",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlanObject {
    Wall(Wall),
    Room(Room),
    Polyline(Polyline),
    Label(Label),
    DimensionLine(DimensionLine),
    Furniture(Furniture),
    Camera(Camera),
    Compass(Compass),
}

impl PlanObject {
    pub fn kind(&self) -> ObjectKind {
        match self {
            PlanObject::Wall(_) => ObjectKind::Wall,
            PlanObject::Room(_) => ObjectKind::Room,
            PlanObject::Polyline(_) => ObjectKind::Polyline,
            PlanObject::Label(_) => ObjectKind::Label,
            PlanObject::DimensionLine(_) => ObjectKind::DimensionLine,
            PlanObject::Furniture(_) => ObjectKind::Furniture,
            PlanObject::Camera(_) => ObjectKind::Camera,
            PlanObject::Compass(_) => ObjectKind::Compass,
        }
    }
}

impl PlanItem for PlanObject {
    fn bounds_points(&self) -> BoundsPoints {
        match self {
            PlanObject::Wall(o) => o.bounds_points(),
            PlanObject::Room(o) => o.bounds_points(),
            PlanObject::Polyline(o) => o.bounds_points(),
            PlanObject::Label(o) => o.bounds_points(),
            PlanObject::DimensionLine(o) => o.bounds_points(),
            PlanObject::Furniture(o) => o.bounds_points(),
            PlanObject::Camera(o) => o.bounds_points(),
            PlanObject::Compass(o) => o.bounds_points(),
        }
    }
}

macro_rules! impl_from_kind {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for PlanObject {
                fn from(value: $variant) -> Self {
                    PlanObject::$variant(value)
                }
            }
        )*
    };
}

impl_from_kind!(
    Wall,
    Room,
    Polyline,
    Label,
    DimensionLine,
    Furniture,
    Camera,
    Compass
);
