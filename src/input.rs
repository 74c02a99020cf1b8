//! Input model
//!
//! Key events are mapped to platform-neutral [`Key`]s. Held controls live in a
//! single [`Controls`] set that actors read once per tick.

use bitflags::bitflags;
use glam::Vec2;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Controls currently held down by one player
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
    pub struct Controls: u8 {
        /// Accelerate (cars) / move up (warrior)
        const UP    = 1 << 0;
        /// Brake (cars) / move down (warrior)
        const DOWN  = 1 << 1;
        const LEFT  = 1 << 2;
        const RIGHT = 1 << 3;
    }
}

impl Controls {
    pub const ACCELERATE: Controls = Controls::UP;
    pub const BRAKE: Controls = Controls::DOWN;
}

/// Which player a held control belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

/// Platform-neutral key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// A held control for one player
    Control(Player, Controls),
    /// Toggle simulation pause
    Pause,
    /// Toggle pointer pixel coordinate overlay
    ShowPointerCoords,
    /// Toggle pointer cell coordinate overlay
    ShowCellCoords,
    /// Move player one to the pointer once
    TeleportToPointer,
    /// Toggle continuous follow-pointer for a player
    FollowPointer(Player),
}

impl Key {
    /// Map a DOM `KeyboardEvent.code` value
    pub fn from_code(code: &str) -> Option<Self> {
        let key = match code {
            "ArrowUp" => Key::Control(Player::One, Controls::UP),
            "ArrowDown" => Key::Control(Player::One, Controls::DOWN),
            "ArrowLeft" => Key::Control(Player::One, Controls::LEFT),
            "ArrowRight" => Key::Control(Player::One, Controls::RIGHT),
            "KeyW" => Key::Control(Player::Two, Controls::UP),
            "KeyS" => Key::Control(Player::Two, Controls::DOWN),
            "KeyA" => Key::Control(Player::Two, Controls::LEFT),
            "KeyD" => Key::Control(Player::Two, Controls::RIGHT),
            "Space" => Key::Pause,
            "Digit1" | "Numpad1" => Key::ShowPointerCoords,
            "Digit2" | "Numpad2" => Key::ShowCellCoords,
            "Digit3" | "Numpad3" => Key::TeleportToPointer,
            "Digit4" | "Numpad4" => Key::FollowPointer(Player::One),
            "Digit5" | "Numpad5" => Key::FollowPointer(Player::Two),
            _ => return None,
        };
        Some(key)
    }

    /// Whether this key is held (tracked on release too) rather than one-shot
    pub fn is_held(&self) -> bool {
        matches!(self, Key::Control(..))
    }
}

/// A single input event delivered to a game
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    /// Pointer position in world pixels
    PointerMoved(Vec2),
}

/// Held controls for both players
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldControls {
    players: [Controls; 2],
}

impl HeldControls {
    /// Apply a key event; returns true if it changed a held control
    pub fn apply(&mut self, event: &InputEvent) -> bool {
        match *event {
            InputEvent::KeyDown(Key::Control(player, control)) => {
                self.players[player.index()].insert(control);
                true
            }
            InputEvent::KeyUp(Key::Control(player, control)) => {
                self.players[player.index()].remove(control);
                true
            }
            _ => false,
        }
    }

    pub fn get(&self, player: Player) -> Controls {
        self.players[player.index()]
    }
}
