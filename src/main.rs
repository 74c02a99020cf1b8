//! Tile Arcade entry point
//!
//! On the web, builds a canvas, loads the game's images and runs the frame
//! driver from a fixed-interval timer. Natively, runs a short headless demo.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{
        CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlImageElement, KeyboardEvent,
        MouseEvent,
    };

    use tile_arcade::Tuning;
    use tile_arcade::assets::{AssetLoader, AssetManifest, ImageAssets};
    use tile_arcade::consts::*;
    use tile_arcade::error::AssetError;
    use tile_arcade::games::{AnyGame, GameKind};
    use tile_arcade::input::{InputEvent, Key};
    use tile_arcade::renderer::{CanvasSurface, Color, Surface};
    use tile_arcade::sim::{FrameDriver, Game};

    /// Running game plus the surface it draws on
    struct App {
        driver: FrameDriver<AnyGame, HtmlImageElement>,
        surface: CanvasSurface,
    }

    impl App {
        fn frame(&mut self) {
            self.driver.run_frame(&mut self.surface);
        }
    }

    fn js_err(e: impl std::fmt::Display) -> JsValue {
        JsValue::from_str(&e.to_string())
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).map_err(js_err)?;
        log::info!("Tile Arcade starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        // Game is picked from the URL hash, e.g. index.html#breakout
        let kind = window
            .location()
            .hash()
            .ok()
            .and_then(|hash| hash.parse::<GameKind>().ok())
            .unwrap_or_default();
        let seed = js_sys::Date::now() as u64;
        let game = kind.create(&Tuning::default(), seed).map_err(js_err)?;
        log::info!("Starting {} with seed {}", kind.as_str(), seed);

        let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
        canvas.set_width(WORLD_WIDTH as u32);
        canvas.set_height(WORLD_HEIGHT as u32);
        document
            .document_element()
            .ok_or("no document element")?
            .append_child(&canvas)?;
        let context: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;

        let mut surface = CanvasSurface::new(canvas.clone(), context);
        // Loading screen for slow networks
        surface.clear(Color::Black);
        surface.fill_text(WORLD_WIDTH / 2.0, WORLD_HEIGHT / 2.0, "Loading...", Color::White);

        let assets = load_images(&document, game.manifest()).await?;
        let driver = FrameDriver::new(game, assets);
        let delay = driver.frame_delay_ms();
        let app = Rc::new(RefCell::new(App { driver, surface }));

        setup_input_handlers(&document, &canvas, app.clone())?;

        app.borrow_mut().frame();
        let tick = Closure::<dyn FnMut()>::new(move || app.borrow_mut().frame());
        window.set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            delay as i32,
        )?;
        tick.forget();

        log::info!("Tile Arcade running!");
        Ok(())
    }

    /// Load every declared image; resolves once the last one has decoded
    async fn load_images(
        document: &Document,
        manifest: AssetManifest,
    ) -> Result<ImageAssets<HtmlImageElement>, JsValue> {
        let names = manifest.names().to_vec();
        let mut loader = AssetLoader::new(manifest);
        for name in names {
            let img: HtmlImageElement = document.create_element("img")?.dyn_into()?;
            img.set_src(&AssetManifest::file_name(&name));
            JsFuture::from(img.decode()).await.map_err(|e| {
                js_err(AssetError::Load {
                    name: name.clone(),
                    reason: format!("{:?}", e),
                })
            })?;
            loader.loaded(&name, img).map_err(js_err)?;
        }
        loader.finish().map_err(js_err)
    }

    fn setup_input_handlers(
        document: &Document,
        canvas: &HtmlCanvasElement,
        app: Rc<RefCell<App>>,
    ) -> Result<(), JsValue> {
        // Key down: held controls and one-shot toggles
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_code(&event.code()) {
                    event.prevent_default();
                    app.borrow_mut().driver.handle_input(&InputEvent::KeyDown(key));
                }
            });
            document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Key up: only held controls care
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_code(&event.code()).filter(Key::is_held) {
                    event.prevent_default();
                    app.borrow_mut().driver.handle_input(&InputEvent::KeyUp(key));
                }
            });
            document.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Pointer position relative to the canvas, accounting for scroll
        {
            let canvas_ref = canvas.clone();
            let root = document.document_element().ok_or("no document element")?;
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let rect = canvas_ref.get_bounding_client_rect();
                let x = event.client_x() as f64 - rect.left() - root.scroll_left() as f64;
                let y = event.client_y() as f64 - rect.top() - root.scroll_top() as f64;
                let pos = glam::Vec2::new(x as f32, y as f32);
                app.borrow_mut().driver.handle_input(&InputEvent::PointerMoved(pos));
            });
            canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_game::run().await {
        web_sys::console::error_1(&e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::error::Error;

    use glam::Vec2;
    use tile_arcade::assets::ImageAssets;
    use tile_arcade::{Tuning, UnknownGame};
    use tile_arcade::consts::{WORLD_HEIGHT, WORLD_WIDTH};
    use tile_arcade::games::{AnyGame, GameKind};
    use tile_arcade::input::{Controls, InputEvent, Key, Player};
    use tile_arcade::renderer::RecordingSurface;
    use tile_arcade::sim::{Actor, FrameDriver, Game};

    /// Demo length in ticks
    const DEMO_FRAMES: u32 = 300;

    const USAGE: &str = "usage: tile-arcade [GAME] | [TUNING.json|-] [GAME]";

    /// Parsed command line
    #[derive(Debug, Default, PartialEq)]
    pub struct Options {
        pub tuning_path: Option<String>,
        pub kind: GameKind,
    }

    /// A lone argument naming a game selects it; otherwise the first argument
    /// is a tuning file (`-` for defaults) and the second a game name.
    pub fn parse_args<I>(args: I) -> Result<Options, UnknownGame>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let mut options = Options::default();
        let Some(first) = args.next() else {
            return Ok(options);
        };
        match first.parse::<GameKind>() {
            Ok(kind) => options.kind = kind,
            Err(_) => {
                if first != "-" {
                    options.tuning_path = Some(first);
                }
                if let Some(name) = args.next() {
                    options.kind = name.parse()?;
                }
            }
        }
        Ok(options)
    }

    pub fn run() -> Result<(), Box<dyn Error>> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        if args.iter().any(|a| a == "-h" || a == "--help") {
            println!("{USAGE}");
            return Ok(());
        }
        let Options { tuning_path, kind } = parse_args(args)?;
        let tuning = match tuning_path {
            Some(path) => {
                let json = std::fs::read_to_string(&path)?;
                log::info!("Loaded tuning from {}", path);
                Tuning::from_json(&json)?
            }
            None => Tuning::default(),
        };

        let game = kind.create(&tuning, 0x5eed)?;
        // Headless: image handles are just their names
        let assets = ImageAssets::named(&game.manifest());
        let mut driver = FrameDriver::new(game, assets);
        let mut surface = RecordingSurface::new(WORLD_WIDTH, WORLD_HEIGHT);

        for event in script(kind) {
            driver.handle_input(&event);
        }
        for _ in 0..DEMO_FRAMES {
            surface.reset();
            driver.run_frame(&mut surface);
        }

        log::info!(
            "{} ran {} ticks, last frame had {} draw calls",
            kind.as_str(),
            driver.ticks(),
            surface.commands.len()
        );
        summarize(driver.game());
        Ok(())
    }

    /// Inputs held for the whole demo
    fn script(kind: GameKind) -> Vec<InputEvent> {
        let hold = |player, controls| InputEvent::KeyDown(Key::Control(player, controls));
        match kind {
            GameKind::Racing => vec![
                hold(Player::One, Controls::ACCELERATE),
                hold(Player::Two, Controls::ACCELERATE | Controls::RIGHT),
            ],
            GameKind::Adventure => vec![hold(Player::One, Controls::DOWN)],
            GameKind::Breakout | GameKind::Tennis => {
                vec![InputEvent::PointerMoved(Vec2::new(WORLD_WIDTH / 2.0, WORLD_HEIGHT / 2.0))]
            }
        }
    }

    fn summarize(game: &AnyGame) {
        match game {
            AnyGame::Racing(world) => {
                for car in world.actors() {
                    log::info!("{} at {:?}, speed {:.2}", car.name(), car.body().pos, car.body().speed);
                }
            }
            AnyGame::Adventure(world) => {
                for warrior in world.actors() {
                    log::info!("{} at {:?}", warrior.name(), warrior.body().pos);
                }
            }
            AnyGame::Breakout(breakout) => {
                log::info!(
                    "{} bricks cleared, {} remaining",
                    breakout.bricks_cleared(),
                    breakout.bricks_remaining()
                );
            }
            AnyGame::Tennis(tennis) => {
                log::info!("Score {} - {}", tennis.scores[0], tennis.scores[1]);
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn args(list: &[&str]) -> Vec<String> {
            list.iter().map(|a| a.to_string()).collect()
        }

        #[test]
        fn test_game_name_alone() {
            let options = parse_args(args(&["breakout"])).unwrap();
            assert_eq!(options.kind, GameKind::Breakout);
            assert_eq!(options.tuning_path, None);
        }

        #[test]
        fn test_tuning_then_game() {
            let options = parse_args(args(&["fast.json", "tennis"])).unwrap();
            assert_eq!(options.tuning_path.as_deref(), Some("fast.json"));
            assert_eq!(options.kind, GameKind::Tennis);

            let options = parse_args(args(&["-", "adventure"])).unwrap();
            assert_eq!(options, Options { tuning_path: None, kind: GameKind::Adventure });
        }

        #[test]
        fn test_defaults_and_bad_name() {
            assert_eq!(parse_args(args(&[])).unwrap(), Options::default());
            assert_eq!(
                parse_args(args(&["fast.json", "chess"])),
                Err(UnknownGame("chess".into()))
            );
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Tile Arcade (native) starting...");
    log::info!("Native mode runs a headless demo - build for wasm32 to play in a browser");

    if let Err(e) = native::run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
