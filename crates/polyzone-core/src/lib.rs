//! # Polyzone Core
//!
//! Core types and utilities for Polyzone.
//! Provides the fundamental abstractions shared by the editor:
//! geometry primitives, the error taxonomy, and layout constants.

pub mod constants;
pub mod error;
pub mod geometry;

pub use error::{Error, GeometryError, Result, StorageError};

pub use geometry::{centroid, format_points, parse_points, Bounds, Point};
