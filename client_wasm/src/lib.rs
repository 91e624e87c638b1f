//! Browser client for Pong
//!
//! Canvas 2D rendering, keyboard input and audio around `game_core`.
//! Note: only built for the wasm32 target

#![cfg(target_arch = "wasm32")]

mod audio;
mod input;
mod renderer;

use std::cell::RefCell;
use std::rc::Rc;

use audio::AudioBank;
use game_core::{Config, InputTracker, MatchEngine, Renderer};
use renderer::CanvasSurface;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

const AUDIO_BASE_URL: &str = "./audio";

/// Everything a frame needs
struct Game {
    engine: MatchEngine,
    input: Rc<RefCell<InputTracker>>,
    renderer: Renderer,
    surface: CanvasSurface,
    audio: AudioBank,
}

impl Game {
    fn new(canvas: &HtmlCanvasElement, seed: u64) -> Result<Self, JsValue> {
        let config = Config::new();
        let surface = CanvasSurface::new(canvas, config.field_width, config.field_height)?;

        Ok(Self {
            engine: MatchEngine::new(config, seed),
            input: Rc::new(RefCell::new(InputTracker::new())),
            renderer: Renderer::default(),
            surface,
            audio: AudioBank::load(AUDIO_BASE_URL)?,
        })
    }

    /// One update-then-render cycle
    fn frame(&mut self, now_ms: f64) -> Result<(), JsValue> {
        let input = self.input.borrow_mut().take_frame_input();
        let result = self.engine.update(input, now_ms);

        for sound in &result.sounds {
            self.audio.play(*sound);
        }

        self.renderer.draw(&self.engine, &mut self.surface)
    }
}

/// Entry point: wire up the first `<canvas>` and start the frame loop
#[wasm_bindgen(start)]
pub fn run() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info)
        .map_err(|e| JsValue::from_str(&format!("Failed to init logger: {e}")))?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("No document"))?;
    let canvas: HtmlCanvasElement = document
        .query_selector("canvas")?
        .ok_or_else(|| JsValue::from_str("No canvas element"))?
        .dyn_into()?;

    let seed = js_sys::Date::now() as u64;
    let game = Game::new(&canvas, seed)?;
    input::install_key_listeners(&document, game.input.clone())?;

    let game = Rc::new(RefCell::new(game));
    // Draw the start prompt before any frame is scheduled
    game.borrow_mut().frame(now_ms())?;
    request_animation_frame(game)?;

    log::info!("Pong running with seed {}", seed);
    Ok(())
}

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

fn request_animation_frame(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let closure = Closure::once(move |time: f64| {
        game_loop(game, time);
    });
    window.request_animation_frame(closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
    if let Err(e) = game.borrow_mut().frame(time) {
        log::error!("Frame failed: {:?}", e);
    }

    if let Err(e) = request_animation_frame(game) {
        log::error!("Failed to schedule frame: {:?}", e);
    }
}
