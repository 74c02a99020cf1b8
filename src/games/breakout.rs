//! Breakout: keep the ball up with the paddle and knock out the bricks
//!
//! Bricks live in a [`Grid`] offset one brick-height below the top of the
//! screen. A brick cell flips from present to empty when the ball hits it; when
//! the last brick goes the field refills.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::assets::ImageAssets;
use crate::consts::{WORLD_HEIGHT, WORLD_WIDTH};
use crate::error::GridError;
use crate::input::InputEvent;
use crate::renderer::{Color, Surface};
use crate::sim::debug::DebugTools;
use crate::sim::driver::Game;
use crate::sim::grid::{Cell, CellRole, CellTable, CellType, Grid};
use crate::tuning::{BreakoutTuning, Tuning};

pub const NAME: &str = "breakout";

pub const BRICK_WIDTH: f32 = 100.0;
pub const BRICK_HEIGHT: f32 = 40.0;
pub const BRICK_GAP: f32 = 2.0;
pub const BRICK_COLUMNS: u32 = 8;
pub const BRICK_ROWS: u32 = 2;
/// Empty space between the top of the screen and the first brick row
pub const SPACE_ABOVE_BRICKS: f32 = BRICK_HEIGHT;

pub const EMPTY: CellType = 0;
pub const BRICK: CellType = 1;

fn brick_grid() -> Result<Grid, GridError> {
    Grid::new(
        BRICK_COLUMNS,
        BRICK_ROWS,
        BRICK_WIDTH,
        BRICK_HEIGHT,
        vec![BRICK; (BRICK_COLUMNS * BRICK_ROWS) as usize],
        CellTable::new(&[CellRole::Road, CellRole::Wall]),
    )
}

#[derive(Debug, Clone)]
pub struct Breakout {
    tuning: BreakoutTuning,
    width: f32,
    height: f32,
    seed: u64,
    rng: Pcg32,
    pub ball_pos: Vec2,
    pub ball_vel: Vec2,
    /// Left edge of the paddle
    pub paddle_x: f32,
    bricks: Grid,
    debug: DebugTools,
    bricks_cleared: u32,
}

impl Breakout {
    pub fn new(tuning: &Tuning, seed: u64) -> Result<Self, GridError> {
        let tuning = tuning.breakout;
        let mut game = Self {
            tuning,
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            ball_pos: Vec2::ZERO,
            ball_vel: Vec2::ZERO,
            paddle_x: (WORLD_WIDTH - tuning.paddle_width) / 2.0,
            bricks: brick_grid()?,
            debug: DebugTools::default(),
            bricks_cleared: 0,
        };
        game.reset_ball();
        Ok(game)
    }

    pub fn bricks(&self) -> &Grid {
        &self.bricks
    }

    /// Bricks knocked out this session
    pub fn bricks_cleared(&self) -> u32 {
        self.bricks_cleared
    }

    pub fn bricks_remaining(&self) -> usize {
        self.bricks.count_matching(BRICK)
    }

    fn paddle_top(&self) -> f32 {
        self.height - self.tuning.paddle_inset
    }

    /// Keep the paddle fully on screen
    fn limit_paddle(&self, x: f32) -> f32 {
        // Pins an oversized paddle to the left instead of panicking like clamp
        x.min(self.width - self.tuning.paddle_width).max(0.0)
    }

    fn to_brick_space(pos: Vec2) -> Vec2 {
        pos - Vec2::new(0.0, SPACE_ABOVE_BRICKS)
    }

    /// Serve from the centre with a random downward velocity
    pub fn reset_ball(&mut self) {
        let t = self.tuning;
        let direction = if self.rng.random_bool(0.5) { -1.0 } else { 1.0 };
        let vx = direction
            * self
                .rng
                .random_range(t.min_initial_speed_x..=t.max_initial_speed_x);
        let vy = self
            .rng
            .random_range(t.min_initial_speed_y..=t.max_initial_speed_y);
        self.ball_vel = Vec2::new(vx, vy);
        self.ball_pos = Vec2::new(self.width / 2.0, self.height / 2.0);
    }

    fn reset_bricks(&mut self) -> Result<(), GridError> {
        self.bricks.fill(BRICK)
    }

    fn bounce_off_edges(&mut self) {
        let r = self.tuning.ball_radius;
        let Vec2 { x, y } = self.ball_pos;

        if y - r < 0.0 {
            self.ball_vel.y = self.ball_vel.y.abs();
        } else if y + r > self.height {
            log::debug!("Ball lost");
            self.reset_ball();
            return;
        }
        if x - r < 0.0 {
            self.ball_vel.x = self.ball_vel.x.abs();
        } else if x + r > self.width {
            self.ball_vel.x = -self.ball_vel.x.abs();
        }
    }

    fn bounce_off_paddle(&mut self) {
        let r = self.tuning.ball_radius;
        let paddle_top = self.paddle_top();
        let paddle_bottom = paddle_top + self.tuning.paddle_height;
        let paddle_left = self.paddle_x;
        let paddle_right = self.paddle_x + self.tuning.paddle_width;
        let Vec2 { x, y } = self.ball_pos;

        if x + r > paddle_left && x - r < paddle_right && y - r < paddle_bottom && y + r > paddle_top {
            self.ball_vel.y = -self.ball_vel.y.abs();
            // Hitting off-centre steers the ball
            let paddle_center = self.paddle_x + self.tuning.paddle_width / 2.0;
            self.ball_vel.x = (x - paddle_center) * self.tuning.reflect_force_transfer();
        }
    }

    fn hit_bricks(&mut self) {
        let pos = Self::to_brick_space(self.ball_pos);
        let cell = self.bricks.cell_for(pos);
        if !matches!(cell, Cell::Tile(BRICK)) {
            return;
        }
        let Some(position) = self.bricks.to_position(pos) else {
            return;
        };
        if let Err(e) = self.bricks.set_cell(position, EMPTY) {
            log::warn!("Failed to clear brick: {e}");
            return;
        }
        self.bricks_cleared += 1;
        self.ball_vel.y = -self.ball_vel.y;
        log::debug!("Brick ({}, {}) cleared", position.column, position.row);

        if self.bricks_remaining() == 0 {
            log::info!("All bricks cleared, refilling");
            if let Err(e) = self.reset_bricks() {
                log::warn!("Failed to refill bricks: {e}");
            }
        }
    }
}

impl Game for Breakout {
    fn name(&self) -> &'static str {
        NAME
    }

    fn handle_input(&mut self, event: &InputEvent) {
        if let InputEvent::PointerMoved(pos) = event {
            // Pointer is the centre of the paddle
            self.paddle_x = self.limit_paddle(pos.x - self.tuning.paddle_width / 2.0);
        }
        // No actors to teleport here; only the overlays apply
        self.debug.handle_input(event);
    }

    fn simulate(&mut self) {
        self.ball_pos += self.ball_vel;
        self.bounce_off_edges();
        self.bounce_off_paddle();
        self.hit_bricks();
    }

    fn render<S: Surface>(&self, surface: &mut S, _assets: &ImageAssets<S::Image>) {
        surface.clear(Color::Black);

        surface.fill_rect(
            self.paddle_x,
            self.paddle_top(),
            self.tuning.paddle_width,
            self.tuning.paddle_height,
            Color::White,
        );

        for (position, code) in self.bricks.iter() {
            if code == BRICK {
                let origin = self.bricks.cell_origin(position);
                surface.fill_rect(
                    origin.x,
                    origin.y + SPACE_ABOVE_BRICKS,
                    BRICK_WIDTH - BRICK_GAP,
                    BRICK_HEIGHT - BRICK_GAP,
                    Color::Blue,
                );
            }
        }

        surface.fill_circle(self.ball_pos.x, self.ball_pos.y, self.tuning.ball_radius, Color::Red);

        self.debug
            .render(surface, |p| self.bricks.to_position(Self::to_brick_space(p)));
    }

    fn reset(&mut self) {
        log::info!("{}: reset (seed {})", NAME, self.seed);
        self.rng = Pcg32::seed_from_u64(self.seed);
        self.paddle_x = self.limit_paddle((self.width - self.tuning.paddle_width) / 2.0);
        self.bricks_cleared = 0;
        if let Err(e) = self.reset_bricks() {
            log::warn!("Failed to refill bricks: {e}");
        }
        self.reset_ball();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Key;
    use crate::renderer::{DrawCommand, RecordingSurface};
    use crate::sim::grid::WorldPosition;

    fn game() -> Breakout {
        Breakout::new(&Tuning::default(), 42).unwrap()
    }

    #[test]
    fn test_serve_is_random_but_in_range() {
        let g = game();
        let t = BreakoutTuning::default();
        assert_eq!(g.ball_pos, Vec2::new(400.0, 300.0));
        assert!((t.min_initial_speed_x..=t.max_initial_speed_x).contains(&g.ball_vel.x.abs()));
        assert!((t.min_initial_speed_y..=t.max_initial_speed_y).contains(&g.ball_vel.y));
    }

    #[test]
    fn test_same_seed_same_serve() {
        assert_eq!(game().ball_vel, game().ball_vel);
    }

    #[test]
    fn test_paddle_follows_pointer_within_screen() {
        let mut g = game();
        g.handle_input(&InputEvent::PointerMoved(Vec2::new(300.0, 10.0)));
        assert_eq!(g.paddle_x, 250.0);
        g.handle_input(&InputEvent::PointerMoved(Vec2::new(10.0, 10.0)));
        assert_eq!(g.paddle_x, 0.0);
        g.handle_input(&InputEvent::PointerMoved(Vec2::new(790.0, 10.0)));
        assert_eq!(g.paddle_x, 700.0);
    }

    #[test]
    fn test_top_wall_bounce() {
        let mut g = game();
        g.ball_pos = Vec2::new(400.0, 12.0);
        g.ball_vel = Vec2::new(0.0, -5.0);
        g.simulate();
        assert_eq!(g.ball_vel.y, 5.0);
    }

    #[test]
    fn test_side_wall_bounce() {
        let mut g = game();
        g.ball_pos = Vec2::new(795.0, 300.0);
        g.ball_vel = Vec2::new(3.0, 1.0);
        g.simulate();
        assert_eq!(g.ball_vel.x, -3.0);
    }

    #[test]
    fn test_ball_lost_resets() {
        let mut g = game();
        g.ball_pos = Vec2::new(100.0, 595.0);
        g.ball_vel = Vec2::new(0.0, 5.0);
        g.simulate();
        assert_eq!(g.ball_pos, Vec2::new(400.0, 300.0));
        assert!(g.ball_vel.y > 0.0);
    }

    #[test]
    fn test_paddle_reflects_with_control() {
        let mut g = game();
        g.paddle_x = 350.0;
        // Paddle top at 550; ball lands right of centre
        g.ball_pos = Vec2::new(425.0, 535.0);
        g.ball_vel = Vec2::new(0.0, 6.0);
        g.simulate();
        assert_eq!(g.ball_vel.y, -6.0);
        assert!((g.ball_vel.x - 25.0 * 0.25).abs() < 1e-5);
    }

    #[test]
    fn test_brick_is_destroyed() {
        let mut g = game();
        // Brick (2, 1) spans x 200..300, y 80..120 on screen
        g.ball_pos = Vec2::new(250.0, 125.0);
        g.ball_vel = Vec2::new(0.0, -6.0);
        g.simulate();
        assert_eq!(g.bricks().cell_at(2, 1), Some(EMPTY));
        assert_eq!(g.bricks_remaining(), 15);
        assert_eq!(g.bricks_cleared(), 1);
        assert_eq!(g.ball_vel.y, 6.0);
    }

    #[test]
    fn test_last_brick_refills_field() {
        let mut g = game();
        for position in (0..BRICK_COLUMNS).flat_map(|c| (0..BRICK_ROWS).map(move |r| WorldPosition::new(c, r))) {
            if position != WorldPosition::new(0, 0) {
                g.bricks.set_cell(position, EMPTY).unwrap();
            }
        }
        g.ball_pos = Vec2::new(50.0, 85.0);
        g.ball_vel = Vec2::new(0.0, -6.0);
        g.simulate();
        assert_eq!(g.bricks_remaining(), 16);
    }

    #[test]
    fn test_render_and_overlay() {
        let mut g = game();
        g.handle_input(&InputEvent::KeyDown(Key::ShowCellCoords));
        g.handle_input(&InputEvent::PointerMoved(Vec2::new(150.0, 100.0)));
        let mut surface = RecordingSurface::new(800.0, 600.0);
        g.render(&mut surface, &ImageAssets::none());

        let bricks = surface
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Rect { color: Color::Blue, .. }))
            .count();
        assert_eq!(bricks, 16);
        assert_eq!(surface.texts().collect::<Vec<_>>(), vec!["1,1"]);
    }

    #[test]
    fn test_reset_is_reproducible() {
        let mut g = game();
        let serve = g.ball_vel;
        g.simulate();
        g.reset();
        assert_eq!(g.ball_vel, serve);
        assert_eq!(g.bricks_remaining(), 16);
    }

    #[test]
    fn test_oversized_paddle_pins_to_left() {
        let mut tuning = Tuning::default();
        tuning.breakout.paddle_width = 900.0;
        let mut g = Breakout::new(&tuning, 1).unwrap();
        g.reset();
        assert_eq!(g.paddle_x, 0.0);
        g.handle_input(&InputEvent::PointerMoved(Vec2::new(400.0, 10.0)));
        assert_eq!(g.paddle_x, 0.0);
    }
}
