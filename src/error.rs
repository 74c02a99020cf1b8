//! Error types
//!
//! Per-frame simulation never fails; everything here is raised while a session
//! or its assets are being set up.

use thiserror::Error;

use crate::sim::grid::{CellType, WorldPosition};

/// Errors raised when building or editing a tile grid.
#[derive(Debug, Error, PartialEq)]
pub enum GridError {
    #[error("layout has {actual} cells but {columns}x{rows} requires {expected}")]
    LengthMismatch {
        columns: u32,
        rows: u32,
        expected: usize,
        actual: usize,
    },
    #[error("cell type {code} at index {index} has no role in the cell table")]
    Unclassified { code: CellType, index: usize },
    #[error("cell {0:?} is outside the grid")]
    OutOfBounds(WorldPosition),
    #[error("grid dimensions must be non-zero")]
    Empty,
    #[error("cell size {width}x{height} must be finite and positive")]
    CellSize { width: f32, height: f32 },
}

/// Errors raised while collecting the declared image set.
#[derive(Debug, Error, PartialEq)]
pub enum AssetError {
    #[error("image `{0}` was never loaded")]
    Missing(String),
    #[error("image `{0}` is not declared in the manifest")]
    Undeclared(String),
    #[error("image `{name}` failed to load: {reason}")]
    Load { name: String, reason: String },
}

/// A game name that matches none of the games.
#[derive(Debug, Error, PartialEq)]
#[error("unknown game `{0}`")]
pub struct UnknownGame(pub String);

/// Errors raised while reading tuning overrides.
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("invalid tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value: {0}")]
    Invalid(&'static str),
}
