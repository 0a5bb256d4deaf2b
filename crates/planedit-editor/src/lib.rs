//! # planedit Editor
//!
//! Geometric edits of 2D floor plans with full undo support.
//!
//! ## Core Components
//!
//! - **Plan**: object store keyed by stable ids, plus the ordered selection
//! - **Model**: walls, rooms, polylines, labels, dimension lines,
//!   furniture, the camera and the compass
//! - **Transform**: one affine matrix applied to every selected object,
//!   with derived attributes (text angles, wall joints, side styles,
//!   furniture size and mirroring) kept consistent
//! - **Points**: vertex editing of rooms and polylines by coordinates,
//!   relative offsets or length/angle vectors
//! - **Commands**: reversible edits handed to the caller's undo stack
//!
//! ## Architecture
//!
//! ```text
//! Plan (objects + selection)
//!   ├── TransformCommand ── ObjectState per selected object
//!   │                       └── TransformOptions (matrix, text rules)
//!   ├── ElevationCommand / ConnectWallsCommand
//!   └── PointsModel ── PointsContainer (room, polyline, PlanPoints)
//!                      └── PointsEdit / NewRoomCommand (undo boundary)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use planedit_editor::{builders, Command, Plan, Room, TransformCommand};
//!
//! let mut plan = Plan::new();
//! let room = plan.add(Room::square(400.0));
//! plan.set_selected_items(vec![room]);
//!
//! let mut command = TransformCommand::capture("Move", &plan);
//! command.apply(&mut plan, builders::translation(50.0, 0.0), true, true);
//! assert_eq!(plan.room(room).unwrap().points()[0], [50.0, 0.0]);
//!
//! command.undo(&mut plan);
//! assert_eq!(plan.room(room).unwrap().points()[0], [0.0, 0.0]);
//! ```

pub mod commands;
pub mod connect_walls;
pub mod elevation;
pub mod geometry;
pub mod model;
pub mod plan;
pub mod points;
pub mod transform;

pub use commands::Command;
pub use connect_walls::ConnectWallsCommand;
pub use elevation::ElevationCommand;
pub use geometry::{Bounds, PlanPoint};
pub use model::{
    Camera, Compass, DimensionLine, Furniture, Label, ObjectId, ObjectKind, PlanItem, PlanObject,
    Polyline, Room, Texture, Wall, WallEnd,
};
pub use plan::Plan;
pub use points::{
    NewRoomCommand, PlanPoints, PointsContainer, PointsEdit, PointsEvent, PointsEventKind,
    PointsModel,
};
pub use transform::{
    builders, FixPoint, ObjectState, Orientation, ResizeMeasure, TransformCommand,
    TransformOptions,
};

/// Re-exported so callers can build matrices without naming lyon.
pub use lyon::math::Transform;
