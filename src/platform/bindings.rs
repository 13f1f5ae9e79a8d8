//! `Game` handle exported to JavaScript
//!
//! For pages that drive the frame loop and draw the scene themselves:
//! call `frame()` once per animation frame and upload `instance_matrices()`.

use wasm_bindgen::prelude::*;

use crate::game::GameLoop;
use crate::input::Key;
use crate::platform::TickControl;
use crate::renderer::SceneSnapshot;
use crate::sim::GamePhase;
use crate::tuning::Tuning;

#[wasm_bindgen]
pub struct Game {
    inner: GameLoop,
}

#[wasm_bindgen]
impl Game {
    /// Game with the classic tuning. The seed is a JS number (e.g. `Date.now()`).
    #[wasm_bindgen(constructor)]
    pub fn new(seed: f64) -> Game {
        Game {
            inner: GameLoop::headless(Tuning::default(), seed as u64),
        }
    }

    /// Game with a JSON tuning document; rejected documents throw
    #[wasm_bindgen(js_name = withTuning)]
    pub fn with_tuning(json: &str, seed: f64) -> Result<Game, JsError> {
        let tuning = Tuning::from_json(json).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(Game {
            inner: GameLoop::headless(tuning, seed as u64),
        })
    }

    pub fn start(&mut self) -> bool {
        self.inner.start()
    }

    pub fn restart(&mut self) {
        self.inner.restart();
    }

    /// Accepts `KeyboardEvent.code` or `KeyboardEvent.key`; others are ignored
    #[wasm_bindgen(js_name = keyDown)]
    pub fn key_down(&mut self, name: &str) {
        if let Some(key) = Key::from_name(name) {
            self.inner.key_down(key);
        }
    }

    #[wasm_bindgen(js_name = keyUp)]
    pub fn key_up(&mut self, name: &str) {
        if let Some(key) = Key::from_name(name) {
            self.inner.key_up(key);
        }
    }

    /// Step one frame. False once the session is over (or not started).
    pub fn frame(&mut self) -> bool {
        self.inner.frame() == TickControl::Continue
    }

    #[wasm_bindgen(getter)]
    pub fn score(&self) -> f64 {
        self.inner.session().score.display_score() as f64
    }

    #[wasm_bindgen(getter, js_name = topScore)]
    pub fn top_score(&self) -> f64 {
        self.inner.session().score.display_top() as f64
    }

    #[wasm_bindgen(getter, js_name = isOver)]
    pub fn is_over(&self) -> bool {
        self.inner.phase() == GamePhase::Over
    }

    #[wasm_bindgen(getter, js_name = cameraZ)]
    pub fn camera_z(&self) -> f32 {
        self.inner.session().tuning.camera_z
    }

    /// Craft parts then obstacles, 16 column-major floats each
    #[wasm_bindgen(js_name = instanceMatrices)]
    pub fn instance_matrices(&self) -> js_sys::Float32Array {
        let scene = SceneSnapshot::capture(self.inner.session());
        js_sys::Float32Array::from(scene.model_matrices().as_slice())
    }
}
