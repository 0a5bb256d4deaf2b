//! # planedit Core
//!
//! Core types, errors, and utilities shared by the planedit crates.
//! Provides the error taxonomy of the editing engine, length unit
//! conversion, and the single-threaded sharing aliases used to bind
//! editors to a live plan.

pub mod error;
pub mod types;
pub mod units;

pub use error::EditError;

pub use types::{shared, EventCallback, Shared};

pub use units::LengthUnit;
