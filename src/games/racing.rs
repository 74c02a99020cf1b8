//! Two-player racing on the track layout

use super::layouts::{self, track};
use super::tile_world::{TileWorld, TileWorldConfig};
use crate::error::GridError;
use crate::sim::body::Car;
use crate::tuning::Tuning;

pub type Racing = TileWorld<Car>;

pub const NAME: &str = "racing";

/// Player names, also used in the win log
pub const DRIVERS: [&str; 2] = ["Blue Storm", "Green Machine"];

const TILE_IMAGES: [&str; 7] = {
    let mut images = [""; 7];
    images[track::ROAD as usize] = "track_road";
    images[track::WALL as usize] = "track_wall";
    images[track::GOAL as usize] = "track_goal";
    images[track::TREE as usize] = "track_tree";
    images[track::FLAG as usize] = "track_flag";
    // Start cells are drawn as road
    images[track::PLAYER1_START as usize] = "track_road";
    images[track::PLAYER2_START as usize] = "track_road";
    images
};

pub const CONFIG: TileWorldConfig = TileWorldConfig {
    name: NAME,
    tile_images: &TILE_IMAGES,
    actor_images: &["car", "player2car"],
};

pub fn new(tuning: &Tuning) -> Result<Racing, GridError> {
    let grid = layouts::track_grid()?;
    let cars = DRIVERS
        .iter()
        .map(|name| Car::new(*name, tuning.car))
        .collect();
    Ok(TileWorld::new(CONFIG, grid, cars))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Controls, InputEvent, Key, Player};
    use crate::sim::body::Actor;
    use crate::sim::driver::Game;
    use crate::sim::grid::WorldPosition;

    #[test]
    fn test_cars_start_side_by_side() {
        let racing = new(&Tuning::default()).unwrap();
        let grid = racing.grid();
        assert_eq!(racing.actors()[0].body().pos, grid.cell_center(WorldPosition::new(9, 1)));
        assert_eq!(racing.actors()[1].body().pos, grid.cell_center(WorldPosition::new(10, 1)));
        assert_eq!(racing.actors()[0].name(), "Blue Storm");
    }

    #[test]
    fn test_manifest() {
        let racing = new(&Tuning::default()).unwrap();
        let manifest = racing.manifest();
        assert_eq!(manifest.len(), 7);
        assert!(manifest.contains("player2car"));
        assert!(manifest.contains("track_flag"));
    }

    #[test]
    fn test_driving_down_the_start_lane() {
        let mut racing = new(&Tuning::default()).unwrap();
        racing.handle_input(&InputEvent::KeyDown(Key::Control(Player::One, Controls::ACCELERATE)));
        for _ in 0..10 {
            racing.simulate();
        }
        let body = racing.actors()[0].body();
        // Facing down the screen, so only y changes
        assert!((body.pos.x - 380.0).abs() < 1e-3);
        assert!(body.pos.y > 60.0);
        assert!(body.speed > 0.0);
        // Player two didn't move
        assert_eq!(racing.actors()[1].body().speed, 0.0);
    }
}
