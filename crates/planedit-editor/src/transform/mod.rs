//! Affine transformation of a selection with undo support.
//!
//! A [`TransformCommand`] captures one [`ObjectState`] per selected object and
//! then applies any number of matrices, each time starting from the captured
//! geometry. Derived attributes (text angles, wall joints, side styles,
//! furniture size and mirroring) are recomputed from the matrix through
//! [`TransformOptions`].

pub mod builders;
mod command;
mod options;
mod state;

pub use builders::{FixPoint, ResizeMeasure};
pub use command::TransformCommand;
pub use options::{Orientation, TransformOptions};
pub use state::{
    CameraState, CompassState, DimensionState, FurnitureState, JoinedEnd, LabelState,
    ObjectState, PolygonState, RoomTextState, WallState,
};
