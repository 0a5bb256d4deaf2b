//! Vertex editing for rooms and polylines.
//!
//! [`PointsModel`] edits the live object immediately through a
//! [`PointsContainer`]. Reverting an editing session is the job of a
//! separate [`PointsEdit`] command opened before the session starts.

mod container;
mod edit;
mod model;

pub use container::{PlanPoints, PointsContainer};
pub use edit::{NewRoomCommand, PointsEdit};
pub use model::{ListenerId, PointsEvent, PointsEventKind, PointsModel, SYNTHETIC_OPPOSITE_DISTANCE};
