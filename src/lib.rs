//! Tile Arcade - small 2D arcade games on a fixed-timestep loop
//!
//! Core modules:
//! - `sim`: Tile world, bodies, collision resolution and the frame driver
//! - `games`: Racing, Adventure, Breakout and Tennis sessions
//! - `renderer`: Immediate-mode drawing surface abstraction
//! - `input`: Held controls and key mapping
//! - `assets`: Named image loading with a one-shot readiness gate
//! - `tuning`: Data-driven physics constants

pub mod assets;
pub mod error;
pub mod games;
pub mod input;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use error::{AssetError, GridError, TuningError, UnknownGame};
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// World (canvas) dimensions in pixels
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 600.0;

    /// Tile world dimensions shared by the racing and adventure layouts
    pub const WORLD_COLUMNS: u32 = 20;
    pub const WORLD_ROWS: u32 = 15;
    pub const CELL_WIDTH: f32 = WORLD_WIDTH / WORLD_COLUMNS as f32;
    pub const CELL_HEIGHT: f32 = 40.0;
    /// Gap left between drawn tiles when rendering without images
    pub const CELL_GAP: f32 = 2.0;

    /// Fixed tick rate of the tile games and Breakout
    pub const FRAMES_PER_SECOND: u32 = 30;
    /// Tennis ball and paddle speeds are per tick at this rate
    pub const TENNIS_FRAMES_PER_SECOND: u32 = 60;
    pub const MILLIS_PER_SECOND: u32 = 1000;

    /// Heading given to actors when they are (re)spawned: facing down the screen
    pub const SPAWN_ANGLE: f32 = std::f32::consts::FRAC_PI_2;
}

/// Milliseconds between ticks for a fixed frame rate
#[inline]
pub fn frame_delay_ms(frames_per_second: u32) -> u32 {
    consts::MILLIS_PER_SECOND / frames_per_second.max(1)
}

/// Unit vector pointing along `angle` (radians, screen coordinates: +y is down)
#[inline]
pub fn heading(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_frame_delay() {
        assert_eq!(frame_delay_ms(30), 33);
        assert_eq!(frame_delay_ms(60), 16);
        // Never divides by zero
        assert_eq!(frame_delay_ms(0), 1000);
    }

    #[test]
    fn test_heading() {
        let h = heading(0.0);
        assert!((h - Vec2::X).length() < 1e-6);
        let h = heading(FRAC_PI_2);
        assert!((h - Vec2::Y).length() < 1e-6);
    }
}
