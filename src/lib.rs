//! # planedit
//!
//! Geometric editing engine for 2D floor plans:
//! - Affine transforms (move, rotate, flip, resize) of any mix of walls,
//!   rooms, polylines, labels, dimension lines, furniture, cameras and the
//!   compass, with undo/redo
//! - Point-list editing of rooms and polylines by coordinates or by
//!   length and angle
//! - Editor preferences stored as JSON or TOML
//!
//! ## Architecture
//!
//! The workspace is split into three crates:
//!
//! 1. **planedit-core** - Error types, length units, shared-type aliases
//! 2. **planedit-editor** - Plan model, transform engine, points model
//! 3. **planedit-settings** - Editor configuration file handling

pub use planedit_core::units::{format_length, parse_length};
pub use planedit_core::{shared, EditError, LengthUnit, Shared};
pub use planedit_editor::{
    builders, Bounds, Camera, Command, Compass, ConnectWallsCommand, DimensionLine,
    ElevationCommand, FixPoint, Furniture, Label, NewRoomCommand, ObjectId, ObjectKind, Plan,
    PlanObject, PlanPoint, PlanPoints, PointsContainer, PointsEdit, PointsEvent, PointsEventKind,
    PointsModel, Polyline, ResizeMeasure, Room, Transform, TransformCommand, TransformOptions,
    Wall, WallEnd,
};
pub use planedit_settings::{EditorConfig, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Console output, `RUST_LOG` support and INFO as the default level. Fails
/// if a global subscriber is already installed.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(tracing::Level::INFO.as_str()));

    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;

    tracing::info!("planedit {} (built {})", VERSION, BUILD_DATE);
    Ok(())
}

/// Like [`init_logging`], but writes one JSON object per event.
pub fn init_json_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(tracing::Level::INFO.as_str()));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().json())
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;
    Ok(())
}
