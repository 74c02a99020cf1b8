//! Tile-world session shared by the racing and adventure games
//!
//! One or two actors move over a grid. Each tick every actor integrates its
//! held controls and is resolved against the grid; an actor reaching a goal
//! wins and every actor goes back to its start cell.

use glam::Vec2;

use crate::assets::{AssetManifest, ImageAssets};
use crate::consts::{CELL_GAP, SPAWN_ANGLE};
use crate::input::{HeldControls, InputEvent, Player};
use crate::renderer::{Color, Surface};
use crate::sim::body::Actor;
use crate::sim::collision::{Collision, resolve};
use crate::sim::debug::DebugTools;
use crate::sim::driver::Game;
use crate::sim::grid::{CellRole, Grid};

/// Per-game wiring for a tile world
#[derive(Debug, Clone, Copy)]
pub struct TileWorldConfig {
    pub name: &'static str,
    /// Image drawn for each cell code (indexed by code)
    pub tile_images: &'static [&'static str],
    /// Image drawn for each actor (indexed by player)
    pub actor_images: &'static [&'static str],
}

/// A tile world with its actors
#[derive(Debug, Clone)]
pub struct TileWorld<A> {
    config: TileWorldConfig,
    grid: Grid,
    actors: Vec<A>,
    held: HeldControls,
    debug: DebugTools,
    wins: Vec<u32>,
}

fn player_for(index: usize) -> Option<Player> {
    match index {
        0 => Some(Player::One),
        1 => Some(Player::Two),
        _ => None,
    }
}

impl<A: Actor> TileWorld<A> {
    /// Actor `n` is controlled by player `n` and spawns on `CellRole::Start(n)`
    pub fn new(config: TileWorldConfig, grid: Grid, actors: Vec<A>) -> Self {
        let wins = vec![0; actors.len()];
        let mut world = Self {
            config,
            grid,
            actors,
            held: HeldControls::default(),
            debug: DebugTools::default(),
            wins,
        };
        world.reset_actors();
        world
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn actors(&self) -> &[A] {
        &self.actors
    }

    pub fn actors_mut(&mut self) -> &mut [A] {
        &mut self.actors
    }

    pub fn debug(&self) -> &DebugTools {
        &self.debug
    }

    /// Goals reached per actor this session
    pub fn wins(&self) -> &[u32] {
        &self.wins
    }

    /// Centre of the start cell for actor `index`
    pub fn start_position(&self, index: usize) -> Option<Vec2> {
        let code = self.grid.table().code_for(CellRole::Start(index as u8))?;
        let cell = self.grid.first_cell_matching(code)?;
        Some(self.grid.cell_center(cell))
    }

    fn reset_actors(&mut self) {
        for index in 0..self.actors.len() {
            match self.start_position(index) {
                Some(pos) => self.actors[index].body_mut().place_at(pos, SPAWN_ANGLE),
                None => log::warn!(
                    "{}: no start cell for {}",
                    self.config.name,
                    self.actors[index].name()
                ),
            }
        }
    }

    fn draw_tiles<S: Surface>(&self, surface: &mut S, assets: &ImageAssets<S::Image>) {
        let (w, h) = (self.grid.cell_width(), self.grid.cell_height());
        for (pos, code) in self.grid.iter() {
            let origin = self.grid.cell_origin(pos);
            let image = self
                .config
                .tile_images
                .get(code as usize)
                .and_then(|name| assets.get(name));
            match image {
                Some(image) => surface.draw_image(image, origin.x, origin.y),
                None => {
                    let color = match self.grid.table().role(code) {
                        Some(CellRole::Wall) => Color::Blue,
                        Some(CellRole::Goal) => Color::Yellow,
                        Some(CellRole::Decoration) => Color::Green,
                        _ => continue,
                    };
                    surface.fill_rect(origin.x, origin.y, w - CELL_GAP, h - CELL_GAP, color);
                }
            }
        }
    }
}

impl<A: Actor> Game for TileWorld<A> {
    fn name(&self) -> &'static str {
        self.config.name
    }

    fn manifest(&self) -> AssetManifest {
        AssetManifest::new(
            self.config
                .tile_images
                .iter()
                .chain(self.config.actor_images.iter())
                .copied(),
        )
    }

    fn handle_input(&mut self, event: &InputEvent) {
        if self.held.apply(event) {
            return;
        }
        for player in self.debug.handle_input(event) {
            if let Some(actor) = self.actors.get_mut(player.index()) {
                self.debug.teleport(actor.body_mut());
            }
        }
    }

    fn simulate(&mut self) {
        for index in 0..self.actors.len() {
            let controls = player_for(index)
                .map(|p| self.held.get(p))
                .unwrap_or_default();
            let actor = &mut self.actors[index];
            actor.set_controls(controls);
            actor.apply_controls();

            if resolve(actor, &self.grid) == Collision::Goal {
                log::info!("{} wins!", actor.name());
                self.wins[index] += 1;
                self.reset();
                return;
            }
        }
    }

    fn render<S: Surface>(&self, surface: &mut S, assets: &ImageAssets<S::Image>) {
        surface.clear(Color::Black);
        self.draw_tiles(surface, assets);

        for (index, actor) in self.actors.iter().enumerate() {
            let body = actor.body();
            let image = self
                .config
                .actor_images
                .get(index)
                .and_then(|name| assets.get(name));
            match image {
                Some(image) => surface.draw_image_rotated(image, body.pos.x, body.pos.y, body.angle),
                None => surface.fill_circle(body.pos.x, body.pos.y, 8.0, Color::Red),
            }
        }

        self.debug.render(surface, |p| self.grid.to_position(p));
    }

    fn reset(&mut self) {
        log::info!("{}: reset", self.config.name);
        self.reset_actors();
    }
}
