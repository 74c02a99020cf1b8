//! Single-player adventure: walk the warrior from the start to the goal

use super::layouts::{self, dungeon};
use super::tile_world::{TileWorld, TileWorldConfig};
use crate::error::GridError;
use crate::sim::body::Warrior;
use crate::tuning::Tuning;

pub type Adventure = TileWorld<Warrior>;

pub const NAME: &str = "adventure";

pub const HERO: &str = "Blue Storm";

const TILE_IMAGES: [&str; 6] = {
    let mut images = [""; 6];
    images[dungeon::ROAD as usize] = "world_road";
    images[dungeon::WALL as usize] = "world_wall";
    images[dungeon::START as usize] = "world_road";
    images[dungeon::GOAL as usize] = "world_goal";
    images[dungeon::TREE as usize] = "world_tree";
    images[dungeon::FLAG as usize] = "world_flag";
    images
};

pub const CONFIG: TileWorldConfig = TileWorldConfig {
    name: NAME,
    tile_images: &TILE_IMAGES,
    actor_images: &["warrior"],
};

pub fn new(tuning: &Tuning) -> Result<Adventure, GridError> {
    let grid = layouts::dungeon_grid()?;
    Ok(TileWorld::new(CONFIG, grid, vec![Warrior::new(HERO, tuning.warrior)]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Controls, InputEvent, Key, Player};
    use crate::sim::body::Actor;
    use crate::sim::driver::Game;
    use glam::Vec2;

    #[test]
    fn test_warrior_blocked_by_wall() {
        let mut adventure = new(&Tuning::default()).unwrap();
        let start = adventure.start_position(0).unwrap();
        // The start cell has a wall directly above it
        adventure.handle_input(&InputEvent::KeyDown(Key::Control(Player::One, Controls::UP)));
        for _ in 0..20 {
            adventure.simulate();
        }
        let pos = adventure.actors()[0].body().pos;
        assert_eq!(pos.x, start.x);
        assert!(pos.y >= 40.0, "warrior entered the wall: {pos:?}");
    }

    #[test]
    fn test_reaching_goal_wins() {
        let mut adventure = new(&Tuning::default()).unwrap();
        // Just above the goal cells (17..=18, 12)
        adventure.actors_mut()[0].body_mut().pos = Vec2::new(700.0, 478.0);
        adventure.handle_input(&InputEvent::KeyDown(Key::Control(Player::One, Controls::DOWN)));
        adventure.simulate();
        assert_eq!(adventure.wins(), &[1]);
        assert_eq!(
            adventure.actors()[0].body().pos,
            adventure.start_position(0).unwrap()
        );
    }

    #[test]
    fn test_manifest() {
        let manifest = new(&Tuning::default()).unwrap().manifest();
        assert_eq!(manifest.len(), 6);
        assert!(manifest.contains("warrior"));
    }
}
