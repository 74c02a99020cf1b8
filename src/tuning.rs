//! Data-driven game balance
//!
//! Every value has a default matching the shipped games; a JSON document can
//! override any subset of fields.

use serde::{Deserialize, Serialize};

use crate::consts::{WORLD_HEIGHT, WORLD_WIDTH};
use crate::error::TuningError;

/// Car handling constants (per tick, no delta-time scaling)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarTuning {
    /// Radians added/removed per tick while a turn is held
    pub turn_rate: f32,
    /// Speed gained per tick while accelerating
    pub drive_power: f32,
    /// Speed lost per tick while braking
    pub reverse_power: f32,
    /// Fraction of speed lost every tick
    pub speed_decay_rate: f32,
    /// Turning only works above this speed; `None` turns on the spot
    pub min_speed_to_turn: Option<f32>,
    /// Fraction of speed kept (sign flipped) after hitting a wall
    pub wall_bounce: f32,
}

impl Default for CarTuning {
    fn default() -> Self {
        Self {
            turn_rate: 0.05,
            drive_power: 0.5,
            reverse_power: 0.2,
            speed_decay_rate: 0.04,
            min_speed_to_turn: Some(0.5),
            wall_bounce: 0.3,
        }
    }
}

/// Warrior movement constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WarriorTuning {
    /// Pixels moved per tick along each held direction
    pub step: f32,
}

impl Default for WarriorTuning {
    fn default() -> Self {
        Self { step: 2.9 }
    }
}

/// Breakout ball/paddle constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreakoutTuning {
    pub ball_radius: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Distance of the paddle top from the bottom of the screen
    pub paddle_inset: f32,
    pub min_initial_speed_x: f32,
    pub max_initial_speed_x: f32,
    pub min_initial_speed_y: f32,
    pub max_initial_speed_y: f32,
    /// Horizontal speed given to the ball when it hits the paddle edge
    pub max_reflect_speed: f32,
}

impl Default for BreakoutTuning {
    fn default() -> Self {
        Self {
            ball_radius: 10.0,
            paddle_width: 100.0,
            paddle_height: 10.0,
            paddle_inset: 50.0,
            min_initial_speed_x: 0.5,
            max_initial_speed_x: 8.0,
            min_initial_speed_y: 4.0,
            max_initial_speed_y: 8.0,
            max_reflect_speed: 12.5,
        }
    }
}

impl BreakoutTuning {
    /// Horizontal speed per pixel of distance from the paddle centre
    pub fn reflect_force_transfer(&self) -> f32 {
        (2.0 * self.max_reflect_speed) / self.paddle_width
    }
}

/// Tennis ball/paddle constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TennisTuning {
    pub ball_radius: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub initial_speed_x: f32,
    pub initial_speed_y: f32,
    /// Pixels per tick the computer paddle moves
    pub ai_step: f32,
    /// Fraction of the paddle height the computer aims to keep the ball inside
    pub ai_target_zone: f32,
}

impl Default for TennisTuning {
    fn default() -> Self {
        Self {
            ball_radius: 10.0,
            paddle_width: 10.0,
            paddle_height: 100.0,
            initial_speed_x: 5.0,
            initial_speed_y: 3.0,
            ai_step: 6.0,
            ai_target_zone: 0.7,
        }
    }
}

/// All tunable constants
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub car: CarTuning,
    pub warrior: WarriorTuning,
    pub breakout: BreakoutTuning,
    pub tennis: TennisTuning,
}

impl Tuning {
    /// Parse a (possibly partial) JSON override document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn validate(&self) -> Result<(), TuningError> {
        if !(0.0..1.0).contains(&self.car.speed_decay_rate) {
            return Err(TuningError::Invalid("car.speed_decay_rate must be in [0, 1)"));
        }
        if !(0.0..=1.0).contains(&self.car.wall_bounce) {
            return Err(TuningError::Invalid("car.wall_bounce must be in [0, 1]"));
        }
        if !(self.breakout.paddle_width > 0.0 && self.tennis.paddle_height > 0.0) {
            return Err(TuningError::Invalid("paddle sizes must be positive"));
        }
        if self.breakout.paddle_width > WORLD_WIDTH {
            return Err(TuningError::Invalid("breakout.paddle_width must fit the screen"));
        }
        if self.tennis.paddle_height > WORLD_HEIGHT {
            return Err(TuningError::Invalid("tennis.paddle_height must fit the screen"));
        }
        if !(self.breakout.ball_radius > 0.0 && self.tennis.ball_radius > 0.0) {
            return Err(TuningError::Invalid("ball radius must be positive"));
        }
        if !(0.0..=1.0).contains(&self.tennis.ai_target_zone) {
            return Err(TuningError::Invalid("tennis.ai_target_zone must be in [0, 1]"));
        }
        if self.breakout.min_initial_speed_x > self.breakout.max_initial_speed_x
            || self.breakout.min_initial_speed_y > self.breakout.max_initial_speed_y
        {
            return Err(TuningError::Invalid("breakout speed ranges are inverted"));
        }
        Ok(())
    }
}
