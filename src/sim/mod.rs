//! Tile-world simulation core
//!
//! Everything here is pure per-tick computation over in-memory state:
//! - Fixed timestep only, no delta-time scaling
//! - Single-threaded, no I/O
//! - No rendering backend dependencies (drawing goes through `Surface`)

pub mod body;
pub mod collision;
pub mod debug;
pub mod driver;
pub mod grid;

pub use body::{Actor, Body, Car, Warrior};
pub use collision::{Collision, resolve};
pub use debug::{CoordOverlay, DebugTools};
pub use driver::{FrameDriver, Game};
pub use grid::{Cell, CellRole, CellTable, CellType, Grid, WorldPosition};
