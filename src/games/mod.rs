//! The playable games
//!
//! Racing and Adventure are both [`TileWorld`] sessions configured with a
//! different layout, cell table and actor type. Breakout and Tennis are free-
//! moving ball games; Breakout keeps its bricks in a destructible grid.

pub mod adventure;
pub mod breakout;
pub mod layouts;
pub mod racing;
pub mod tennis;
pub mod tile_world;

pub use adventure::Adventure;
pub use breakout::Breakout;
pub use racing::Racing;
pub use tennis::Tennis;
pub use tile_world::{TileWorld, TileWorldConfig};

use std::str::FromStr;

use crate::assets::{AssetManifest, ImageAssets};
use crate::error::{GridError, UnknownGame};
use crate::input::InputEvent;
use crate::renderer::Surface;
use crate::sim::driver::Game;
use crate::tuning::Tuning;

/// Which game to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameKind {
    #[default]
    Racing,
    Adventure,
    Breakout,
    Tennis,
}

impl GameKind {
    pub const ALL: [GameKind; 4] = [
        GameKind::Racing,
        GameKind::Adventure,
        GameKind::Breakout,
        GameKind::Tennis,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GameKind::Racing => racing::NAME,
            GameKind::Adventure => adventure::NAME,
            GameKind::Breakout => breakout::NAME,
            GameKind::Tennis => tennis::NAME,
        }
    }

    /// Build a fresh session
    pub fn create(self, tuning: &Tuning, seed: u64) -> Result<AnyGame, GridError> {
        Ok(match self {
            GameKind::Racing => AnyGame::Racing(racing::new(tuning)?),
            GameKind::Adventure => AnyGame::Adventure(adventure::new(tuning)?),
            GameKind::Breakout => AnyGame::Breakout(Breakout::new(tuning, seed)?),
            GameKind::Tennis => AnyGame::Tennis(Tennis::new(tuning)),
        })
    }
}

impl FromStr for GameKind {
    type Err = UnknownGame;

    /// Case-insensitive; a leading `#` (URL hash) is ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().trim_start_matches('#').to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == name)
            .ok_or_else(|| UnknownGame(s.to_string()))
    }
}

/// Any one of the games, chosen at runtime
#[derive(Debug, Clone)]
pub enum AnyGame {
    Racing(Racing),
    Adventure(Adventure),
    Breakout(Breakout),
    Tennis(Tennis),
}

macro_rules! dispatch {
    ($self:expr, $game:ident => $body:expr) => {
        match $self {
            AnyGame::Racing($game) => $body,
            AnyGame::Adventure($game) => $body,
            AnyGame::Breakout($game) => $body,
            AnyGame::Tennis($game) => $body,
        }
    };
}

impl Game for AnyGame {
    fn name(&self) -> &'static str {
        dispatch!(self, g => g.name())
    }

    fn frames_per_second(&self) -> u32 {
        dispatch!(self, g => g.frames_per_second())
    }

    fn manifest(&self) -> AssetManifest {
        dispatch!(self, g => g.manifest())
    }

    fn handle_input(&mut self, event: &InputEvent) {
        dispatch!(self, g => g.handle_input(event))
    }

    fn simulate(&mut self) {
        dispatch!(self, g => g.simulate())
    }

    fn render<S: Surface>(&self, surface: &mut S, assets: &ImageAssets<S::Image>) {
        dispatch!(self, g => g.render(surface, assets))
    }

    fn reset(&mut self) {
        dispatch!(self, g => g.reset())
    }
}
