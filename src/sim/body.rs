//! Bodies and the actors that drive them
//!
//! Actors integrate their body once per tick from held controls. The move can
//! be undone within the same tick with [`Actor::reverse_move`], which the
//! collision resolver uses to back an actor out of a wall.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::heading;
use crate::input::Controls;
use crate::tuning::{CarTuning, WarriorTuning};

/// Physical state of an actor
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    /// Heading in radians
    pub angle: f32,
    /// Signed speed along the heading, pixels per tick
    pub speed: f32,
}

impl Body {
    /// Teleport, stopping the body
    pub fn place_at(&mut self, pos: Vec2, angle: f32) {
        self.pos = pos;
        self.angle = angle;
        self.speed = 0.0;
    }

    /// Displacement for one tick at the current heading and speed
    #[inline]
    pub fn velocity(&self) -> Vec2 {
        heading(self.angle) * self.speed
    }
}

/// Something that owns a body and moves it from held controls
pub trait Actor {
    fn name(&self) -> &str;
    fn body(&self) -> &Body;
    fn body_mut(&mut self) -> &mut Body;
    fn controls(&self) -> Controls;
    fn set_controls(&mut self, controls: Controls);

    /// Advance one tick: update speed/heading, then integrate position
    fn apply_controls(&mut self);

    /// Undo this tick's position change. Only valid before anything else
    /// touches the body in the same tick.
    fn reverse_move(&mut self);

    /// Fraction of speed kept (and reversed) after hitting a wall.
    /// `None` means the actor just stops at the wall.
    fn bounce_factor(&self) -> Option<f32> {
        None
    }
}

/// A car: speed decays, drive/brake impulses, turns while moving
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Car {
    name: String,
    body: Body,
    controls: Controls,
    tuning: CarTuning,
}

impl Car {
    pub fn new(name: impl Into<String>, tuning: CarTuning) -> Self {
        Self {
            name: name.into(),
            body: Body::default(),
            controls: Controls::empty(),
            tuning,
        }
    }

    pub fn tuning(&self) -> &CarTuning {
        &self.tuning
    }

    fn can_turn(&self) -> bool {
        match self.tuning.min_speed_to_turn {
            Some(min) => self.body.speed.abs() > min,
            None => true,
        }
    }
}

impl Actor for Car {
    fn name(&self) -> &str {
        &self.name
    }

    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn controls(&self) -> Controls {
        self.controls
    }

    fn set_controls(&mut self, controls: Controls) {
        self.controls = controls;
    }

    fn apply_controls(&mut self) {
        let t = self.tuning;
        self.body.speed *= 1.0 - t.speed_decay_rate;

        if self.can_turn() {
            if self.controls.contains(Controls::LEFT) {
                self.body.angle -= t.turn_rate;
            }
            if self.controls.contains(Controls::RIGHT) {
                self.body.angle += t.turn_rate;
            }
        }
        if self.controls.contains(Controls::ACCELERATE) {
            self.body.speed += t.drive_power;
        }
        if self.controls.contains(Controls::BRAKE) {
            self.body.speed -= t.reverse_power;
        }

        self.body.pos += self.body.velocity();
    }

    fn reverse_move(&mut self) {
        // Uses the post-update heading and speed, matching the forward move
        self.body.pos -= self.body.velocity();
    }

    fn bounce_factor(&self) -> Option<f32> {
        Some(self.tuning.wall_bounce)
    }
}

/// A warrior: fixed-step movement along held directions, no heading physics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Warrior {
    name: String,
    body: Body,
    controls: Controls,
    tuning: WarriorTuning,
}

impl Warrior {
    pub fn new(name: impl Into<String>, tuning: WarriorTuning) -> Self {
        Self {
            name: name.into(),
            body: Body::default(),
            controls: Controls::empty(),
            tuning,
        }
    }

    /// Displacement produced by the held directions
    fn step(&self) -> Vec2 {
        let axis = |neg: Controls, pos: Controls| {
            let mut v = 0.0;
            if self.controls.contains(neg) {
                v -= self.tuning.step;
            }
            if self.controls.contains(pos) {
                v += self.tuning.step;
            }
            v
        };
        Vec2::new(
            axis(Controls::LEFT, Controls::RIGHT),
            axis(Controls::UP, Controls::DOWN),
        )
    }
}

impl Actor for Warrior {
    fn name(&self) -> &str {
        &self.name
    }

    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn controls(&self) -> Controls {
        self.controls
    }

    fn set_controls(&mut self, controls: Controls) {
        self.controls = controls;
    }

    fn apply_controls(&mut self) {
        self.body.pos += self.step();
    }

    fn reverse_move(&mut self) {
        self.body.pos -= self.step();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn approx_eq(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-4, "{a} != {b}");
    }

    #[test]
    fn test_car_accelerates_along_heading() {
        let mut car = Car::new("test", CarTuning::default());
        car.body_mut().place_at(Vec2::new(100.0, 100.0), FRAC_PI_2);
        car.set_controls(Controls::ACCELERATE);
        car.apply_controls();

        approx_eq(car.body().speed, 0.5);
        approx_eq(car.body().pos.x, 100.0);
        approx_eq(car.body().pos.y, 100.5);
    }

    #[test]
    fn test_car_speed_decays() {
        let mut car = Car::new("test", CarTuning::default());
        car.body_mut().speed = 10.0;
        car.apply_controls();
        approx_eq(car.body().speed, 9.6);
    }

    #[test]
    fn test_car_needs_speed_to_turn() {
        let mut car = Car::new("test", CarTuning::default());
        car.set_controls(Controls::LEFT);
        car.apply_controls();
        approx_eq(car.body().angle, 0.0);

        car.body_mut().speed = 2.0;
        car.apply_controls();
        approx_eq(car.body().angle, -0.05);
    }

    #[test]
    fn test_car_turns_on_the_spot_without_threshold() {
        let tuning = CarTuning {
            turn_rate: 0.04,
            min_speed_to_turn: None,
            ..CarTuning::default()
        };
        let mut car = Car::new("test", tuning);
        car.set_controls(Controls::RIGHT);
        car.apply_controls();
        approx_eq(car.body().angle, 0.04);
    }

    #[test]
    fn test_car_brake_reverses() {
        let mut car = Car::new("test", CarTuning::default());
        car.set_controls(Controls::BRAKE);
        car.apply_controls();
        approx_eq(car.body().speed, -0.2);
        approx_eq(car.body().pos.x, -0.2);
    }

    #[test]
    fn test_car_reverse_move() {
        let mut car = Car::new("test", CarTuning::default());
        car.body_mut().place_at(Vec2::new(50.0, 60.0), 0.3);
        car.body_mut().speed = 4.0;
        car.set_controls(Controls::ACCELERATE | Controls::RIGHT);
        car.apply_controls();
        car.reverse_move();
        approx_eq(car.body().pos.x, 50.0);
        approx_eq(car.body().pos.y, 60.0);
    }

    #[test]
    fn test_warrior_moves_and_reverses() {
        let mut warrior = Warrior::new("Blue Storm", WarriorTuning::default());
        warrior.body_mut().pos = Vec2::new(10.0, 10.0);
        warrior.set_controls(Controls::LEFT | Controls::DOWN);
        warrior.apply_controls();
        approx_eq(warrior.body().pos.x, 7.1);
        approx_eq(warrior.body().pos.y, 12.9);
        warrior.reverse_move();
        approx_eq(warrior.body().pos.x, 10.0);
        approx_eq(warrior.body().pos.y, 10.0);
        assert_eq!(warrior.bounce_factor(), None);
    }

    #[test]
    fn test_warrior_opposite_directions_cancel() {
        let mut warrior = Warrior::new("w", WarriorTuning::default());
        warrior.set_controls(Controls::LEFT | Controls::RIGHT);
        warrior.apply_controls();
        assert_eq!(warrior.body().pos, Vec2::ZERO);
    }
}
