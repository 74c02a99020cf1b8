//! Fixed-rate frame driver
//!
//! The host calls [`FrameDriver::run_frame`] from a repeating timer. Each frame
//! simulates one tick unless paused, then renders. There is no catch-up: a
//! late frame is simply late, and physics constants assume the fixed rate.

use crate::assets::{AssetManifest, ImageAssets};
use crate::consts::FRAMES_PER_SECOND;
use crate::frame_delay_ms;
use crate::input::{InputEvent, Key};
use crate::renderer::Surface;

/// A game session the driver can run
pub trait Game {
    /// Short name used in logs and for selecting the game
    fn name(&self) -> &'static str;

    /// Fixed tick rate the game's constants are tuned for
    fn frames_per_second(&self) -> u32 {
        FRAMES_PER_SECOND
    }

    /// Images the game draws; all must load before the first tick
    fn manifest(&self) -> AssetManifest {
        AssetManifest::default()
    }

    /// Key and pointer events other than pause
    fn handle_input(&mut self, event: &InputEvent);

    /// Advance one tick
    fn simulate(&mut self);

    /// Draw the current state
    fn render<S: Surface>(&self, surface: &mut S, assets: &ImageAssets<S::Image>);

    /// Put the session back in its starting state
    fn reset(&mut self);
}

/// Runs a game at a fixed rate with pause support
pub struct FrameDriver<G, H> {
    game: G,
    assets: ImageAssets<H>,
    paused: bool,
    ticks: u64,
}

impl<G: Game, H> FrameDriver<G, H> {
    /// Requires the finished asset set, so no frame runs before readiness
    pub fn new(mut game: G, assets: ImageAssets<H>) -> Self {
        game.reset();
        log::info!("{} ready at {} fps", game.name(), game.frames_per_second());
        Self {
            game,
            assets,
            paused: false,
            ticks: 0,
        }
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut G {
        &mut self.game
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Simulated ticks so far (paused frames don't count)
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Milliseconds the host timer should wait between frames
    pub fn frame_delay_ms(&self) -> u32 {
        frame_delay_ms(self.game.frames_per_second())
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        log::debug!("{} paused: {}", self.game.name(), self.paused);
    }

    /// Route an input event: pause is handled here, the rest goes to the game
    pub fn handle_input(&mut self, event: &InputEvent) {
        match event {
            InputEvent::KeyDown(Key::Pause) => self.toggle_pause(),
            InputEvent::KeyUp(Key::Pause) => {}
            _ => self.game.handle_input(event),
        }
    }

    /// One timer tick: simulate (unless paused), then always render
    pub fn run_frame<S: Surface<Image = H>>(&mut self, surface: &mut S) {
        if !self.paused {
            self.game.simulate();
            self.ticks += 1;
        }
        self.game.render(surface, &self.assets);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{Color, RecordingSurface};

    #[derive(Default)]
    struct Counter {
        simulated: u32,
        rendered: std::cell::Cell<u32>,
        events: u32,
        resets: u32,
    }

    impl Game for Counter {
        fn name(&self) -> &'static str {
            "counter"
        }

        fn frames_per_second(&self) -> u32 {
            60
        }

        fn handle_input(&mut self, _event: &InputEvent) {
            self.events += 1;
        }

        fn simulate(&mut self) {
            self.simulated += 1;
        }

        fn render<S: Surface>(&self, surface: &mut S, _assets: &ImageAssets<S::Image>) {
            self.rendered.set(self.rendered.get() + 1);
            surface.clear(Color::Black);
        }

        fn reset(&mut self) {
            self.resets += 1;
        }
    }

    #[test]
    fn test_pause_skips_simulation_but_renders() {
        let mut driver = FrameDriver::new(Counter::default(), ImageAssets::none());
        let mut surface = RecordingSurface::new(10.0, 10.0);
        assert_eq!(driver.game().resets, 1);

        driver.run_frame(&mut surface);
        driver.handle_input(&InputEvent::KeyDown(Key::Pause));
        assert!(driver.is_paused());
        driver.run_frame(&mut surface);
        driver.run_frame(&mut surface);

        assert_eq!(driver.game().simulated, 1);
        assert_eq!(driver.game().rendered.get(), 3);
        assert_eq!(driver.ticks(), 1);
        // Pause never reaches the game
        assert_eq!(driver.game().events, 0);

        driver.handle_input(&InputEvent::KeyDown(Key::Pause));
        driver.run_frame(&mut surface);
        assert_eq!(driver.game().simulated, 2);
    }

    #[test]
    fn test_other_input_forwarded() {
        let mut driver = FrameDriver::<_, String>::new(Counter::default(), ImageAssets::none());
        driver.handle_input(&InputEvent::KeyDown(Key::ShowPointerCoords));
        assert_eq!(driver.game().events, 1);
        assert_eq!(driver.frame_delay_ms(), 16);
    }
}
