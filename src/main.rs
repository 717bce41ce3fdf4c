//! Rect Runner entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use rect_runner::input::KeyboardInput;
    use rect_runner::renderer::CanvasSurface;
    use rect_runner::{Game, GameConfig, GameError, Settings};

    type BrowserGame = Game<Rc<KeyboardInput>, CanvasSurface>;

    pub fn run() -> Result<(), GameError> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| GameError::Platform(format!("logger init failed: {e}")))?;

        log::info!("Rect Runner starting...");

        let window = web_sys::window().ok_or_else(|| GameError::Platform("no window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| GameError::Platform("no document".into()))?;
        let canvas = document
            .get_element_by_id("game")
            .ok_or_else(|| GameError::Platform("missing #game canvas".into()))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| GameError::Platform("#game is not a canvas".into()))?;

        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(rect_runner::consts::FIELD_WIDTH as f64) as f32;
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(rect_runner::consts::FIELD_HEIGHT as f64) as f32;

        // Write back so the stored copy always lists every binding to edit
        let settings = Settings::load();
        settings.save();
        let config = GameConfig {
            field_width: width,
            field_height: height,
            seed: settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64),
            tuning: settings.tuning.clone(),
            ..Default::default()
        };

        let keys = Rc::new(KeyboardInput::new(settings.bindings.clone()));
        let surface = CanvasSurface::new(&canvas, width, height)?;
        let game = Rc::new(RefCell::new(Game::new(config, Rc::clone(&keys), surface)?));

        setup_input_handlers(&window, keys);
        request_animation_frame(game);

        log::info!("Rect Runner running!");
        Ok(())
    }

    fn setup_input_handlers(window: &web_sys::Window, keys: Rc<KeyboardInput>) {
        {
            let keys = keys.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if keys.key_down(&event.code()) {
                    event.prevent_default();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let keys = keys.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if keys.key_up(&event.code()) {
                    event.prevent_default();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key releases are lost while unfocused
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            keys.release_all();
            log::info!("Window blurred, released held keys");
        });
        let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<BrowserGame>>) {
        let Some(window) = web_sys::window() else {
            log::error!("Window went away, stopping game loop");
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<BrowserGame>>) {
        // Schedule first, like the page loop it replaces: the next frame
        // comes whether or not a run is active
        request_animation_frame(game.clone());
        game.borrow_mut().frame();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        log::error!("Rect Runner failed to start: {e}");
    }
}

#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_DEMO_FRAMES: u64 = 3600;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Rect Runner (native) starting...");
    log::info!("Native mode runs a headless autopilot demo - run with `trunk serve` for the web version");

    let frames = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(DEFAULT_DEMO_FRAMES);

    if let Err(e) = run_demo(frames) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Let the autopilot play for a fixed number of frames and report the result
#[cfg(not(target_arch = "wasm32"))]
fn run_demo(frames: u64) -> Result<(), rect_runner::GameError> {
    use rect_runner::renderer::{Color, RecordingSurface};
    use rect_runner::sim::{TickInput, autopilot};
    use rect_runner::{Game, GameConfig, Settings};

    let settings = Settings::load();
    settings.save();
    let config = GameConfig {
        seed: settings.seed.unwrap_or(0x5eed),
        tuning: settings.tuning,
        ..Default::default()
    };
    let mut game = Game::new(config, TickInput::default(), RecordingSurface::new())?;

    let mut runs = 0u32;
    let mut best_ticks = 0u64;
    let mut obstacles_drawn = 0usize;
    for _ in 0..frames {
        let was_running = game.state().is_running();
        let input = autopilot(game.state());
        game.frame_with(&input);

        if !was_running && game.state().is_running() {
            runs += 1;
        }
        best_ticks = best_ticks.max(game.state().time_ticks);
        obstacles_drawn += game.surface().filled(Color::Blue).len();
        game.surface_mut().reset();
    }

    log::info!(
        "Demo finished: {} frames, {} runs, longest run {} ticks, {} obstacle draws",
        game.frames(),
        runs,
        best_ticks,
        obstacles_drawn
    );
    println!("{}", serde_json::to_string_pretty(game.state())?);
    Ok(())
}
