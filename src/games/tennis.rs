//! Tennis: pointer-controlled left paddle against a computer right paddle

use glam::Vec2;

use crate::assets::ImageAssets;
use crate::consts::{TENNIS_FRAMES_PER_SECOND, WORLD_HEIGHT, WORLD_WIDTH};
use crate::input::InputEvent;
use crate::renderer::{Color, Surface};
use crate::sim::driver::Game;
use crate::tuning::{TennisTuning, Tuning};

pub const NAME: &str = "tennis";

/// Rough pixel width reserved for a score label
const SCORE_TEXT_WIDTH: f32 = 120.0;

#[derive(Debug, Clone)]
pub struct Tennis {
    tuning: TennisTuning,
    width: f32,
    height: f32,
    pub ball_pos: Vec2,
    pub ball_vel: Vec2,
    /// Top edge of the player (left) paddle
    pub player_y: f32,
    /// Top edge of the computer (right) paddle
    pub computer_y: f32,
    pub scores: [u32; 2],
}

impl Tennis {
    pub fn new(tuning: &Tuning) -> Self {
        let tuning = tuning.tennis;
        Self {
            tuning,
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
            ball_pos: Vec2::new(50.0, 50.0),
            ball_vel: Vec2::new(tuning.initial_speed_x, tuning.initial_speed_y),
            player_y: 200.0,
            computer_y: 200.0,
            scores: [0, 0],
        }
    }

    fn limit_paddle(&self, y: f32) -> f32 {
        // Pins an oversized paddle to the top instead of panicking like clamp
        y.min(self.height - self.tuning.paddle_height).max(0.0)
    }

    /// Whether the ball misses a paddle whose top edge is at `paddle_y`
    fn misses(&self, paddle_y: f32) -> bool {
        let r = self.tuning.ball_radius;
        self.ball_pos.y + r < paddle_y || self.ball_pos.y - r > paddle_y + self.tuning.paddle_height
    }

    /// Serve back from the centre in the opposite direction
    fn reset_ball(&mut self) {
        self.ball_vel = -self.ball_vel;
        self.ball_pos = Vec2::new(self.width / 2.0, self.height / 2.0);
    }

    /// Move the computer paddle toward the ball, but only once the ball leaves
    /// the target zone around the paddle centre
    fn computer_player(&mut self) {
        let center = self.computer_y + self.tuning.paddle_height / 2.0;
        let half_zone = self.tuning.paddle_height * self.tuning.ai_target_zone / 2.0;
        if center < self.ball_pos.y - half_zone {
            self.computer_y = self.limit_paddle(self.computer_y + self.tuning.ai_step);
        } else if center > self.ball_pos.y + half_zone {
            self.computer_y = self.limit_paddle(self.computer_y - self.tuning.ai_step);
        }
    }

    fn point_scored(&mut self, scorer: usize) {
        self.scores[scorer] += 1;
        log::info!("P{} scores ({} - {})", scorer + 1, self.scores[0], self.scores[1]);
        self.reset_ball();
    }
}

impl Game for Tennis {
    fn name(&self) -> &'static str {
        NAME
    }

    fn frames_per_second(&self) -> u32 {
        TENNIS_FRAMES_PER_SECOND
    }

    fn handle_input(&mut self, event: &InputEvent) {
        if let InputEvent::PointerMoved(pos) = event {
            // Pointer is the centre of the paddle
            self.player_y = self.limit_paddle(pos.y - self.tuning.paddle_height / 2.0);
        }
    }

    fn simulate(&mut self) {
        self.computer_player();
        self.ball_pos += self.ball_vel;
        let r = self.tuning.ball_radius;

        if self.ball_pos.x - r < 0.0 {
            if self.misses(self.player_y) {
                self.point_scored(1);
            } else {
                self.ball_vel.x = self.ball_vel.x.abs();
            }
        }
        if self.ball_pos.x + r > self.width {
            if self.misses(self.computer_y) {
                self.point_scored(0);
            } else {
                self.ball_vel.x = -self.ball_vel.x.abs();
            }
        }

        if self.ball_pos.y < r {
            self.ball_vel.y = self.ball_vel.y.abs();
        } else if self.ball_pos.y + r > self.height {
            self.ball_vel.y = -self.ball_vel.y.abs();
        }
    }

    fn render<S: Surface>(&self, surface: &mut S, _assets: &ImageAssets<S::Image>) {
        let t = &self.tuning;
        surface.clear(Color::Black);
        surface.fill_rect(0.0, self.player_y, t.paddle_width, t.paddle_height, Color::White);
        surface.fill_rect(
            self.width - t.paddle_width,
            self.computer_y,
            t.paddle_width,
            t.paddle_height,
            Color::White,
        );
        surface.fill_circle(self.ball_pos.x, self.ball_pos.y, t.ball_radius, Color::Red);

        surface.fill_text(100.0, 100.0, &format!("P1 Score: {}", self.scores[0]), Color::White);
        surface.fill_text(
            self.width - 100.0 - SCORE_TEXT_WIDTH,
            100.0,
            &format!("P2 Score: {}", self.scores[1]),
            Color::White,
        );
    }

    fn reset(&mut self) {
        log::info!("{}: reset", NAME);
        let tuning = Tuning {
            tennis: self.tuning,
            ..Tuning::default()
        };
        *self = Self::new(&tuning);
    }
}
