//! Debug helpers: pointer coordinate overlays and teleport-to-pointer

use glam::Vec2;

use super::body::Body;
use super::grid::WorldPosition;
use crate::input::{InputEvent, Key, Player};
use crate::renderer::{Color, Surface};

/// Which coordinate overlay is shown at the pointer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CoordOverlay {
    #[default]
    Off,
    /// Pointer position in pixels
    Pointer,
    /// Grid cell under the pointer
    Cell,
}

/// Pointer tracking and debug toggles shared by the tile games
#[derive(Debug, Clone, Default)]
pub struct DebugTools {
    pointer: Vec2,
    overlay: CoordOverlay,
    follow: [bool; 2],
}

impl DebugTools {
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn overlay(&self) -> CoordOverlay {
        self.overlay
    }

    pub fn is_following(&self, player: Player) -> bool {
        self.follow[player.index()]
    }

    /// Handle a debug key or pointer move. Returns the players that should be
    /// moved to the pointer right now.
    pub fn handle_input(&mut self, event: &InputEvent) -> Vec<Player> {
        match *event {
            InputEvent::PointerMoved(pos) => {
                self.pointer = pos;
                [Player::One, Player::Two]
                    .into_iter()
                    .filter(|p| self.follow[p.index()])
                    .collect()
            }
            InputEvent::KeyDown(Key::ShowPointerCoords) => {
                self.overlay = self.toggled(CoordOverlay::Pointer);
                log::debug!("Coordinate overlay: {:?}", self.overlay);
                Vec::new()
            }
            InputEvent::KeyDown(Key::ShowCellCoords) => {
                self.overlay = self.toggled(CoordOverlay::Cell);
                log::debug!("Coordinate overlay: {:?}", self.overlay);
                Vec::new()
            }
            InputEvent::KeyDown(Key::TeleportToPointer) => vec![Player::One],
            InputEvent::KeyDown(Key::FollowPointer(player)) => {
                let follow = &mut self.follow[player.index()];
                *follow = !*follow;
                log::debug!("{:?} follows pointer: {}", player, *follow);
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    fn toggled(&self, mode: CoordOverlay) -> CoordOverlay {
        if self.overlay == mode {
            CoordOverlay::Off
        } else {
            mode
        }
    }

    /// Move a body to the pointer, facing right and stopped
    pub fn teleport(&self, body: &mut Body) {
        body.place_at(self.pointer, 0.0);
        log::debug!("Teleported to {:?}", self.pointer);
    }

    /// Draw the active overlay. `cell_of` maps a pixel position to a cell,
    /// returning `None` outside the grid.
    pub fn render<S, F>(&self, surface: &mut S, cell_of: F)
    where
        S: Surface,
        F: Fn(Vec2) -> Option<WorldPosition>,
    {
        let Vec2 { x, y } = self.pointer;
        match self.overlay {
            CoordOverlay::Off => {}
            CoordOverlay::Pointer => {
                surface.fill_text(x, y, &format!("{x},{y}"), Color::Yellow);
            }
            CoordOverlay::Cell => {
                if let Some(cell) = cell_of(self.pointer) {
                    surface.fill_text(x, y, &format!("{},{}", cell.column, cell.row), Color::Yellow);
                }
            }
        }
    }
}
