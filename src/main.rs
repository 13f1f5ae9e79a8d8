//! Tunnel Flyer entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlElement, KeyboardEvent};

    use tunnel_flyer::platform::{FrameScheduler, RafScheduler, attach};
    use tunnel_flyer::renderer::{Renderer, SceneSnapshot};
    use tunnel_flyer::score::hud;
    use tunnel_flyer::{GameLoop, GameObserver, Key, Tuning};

    // The page's 3D library draws the scene; it registers
    // `window.tunnelFlyerRender(bytes, cameraZ)` before the game starts.
    #[wasm_bindgen(inline_js = "
        export function render_scene(bytes, camera_z) {
            if (typeof window.tunnelFlyerRender === 'function') {
                window.tunnelFlyerRender(bytes, camera_z);
            }
        }
    ")]
    extern "C" {
        fn render_scene(bytes: &[u8], camera_z: f32);
    }

    struct PageRenderer;

    impl Renderer for PageRenderer {
        fn render(&mut self, scene: &SceneSnapshot) {
            render_scene(scene.as_bytes(), scene.camera_z);
        }
    }

    /// Score overlay and game-over screen
    struct DomObserver {
        document: Document,
    }

    impl DomObserver {
        /// Use the page's `#score` element, building the overlay if it has none
        fn new(document: Document) -> Self {
            if document.get_element_by_id(hud::SCORE_ID).is_none() {
                match document.create_element("div") {
                    Ok(el) => {
                        el.set_id(hud::SCORE_ID);
                        let _ = el.set_attribute("style", hud::SCORE_STYLE);
                        el.set_text_content(Some(&hud::score_label(0)));
                        if let Some(body) = document.body() {
                            let _ = body.append_child(&el);
                        }
                    }
                    Err(e) => log::warn!("could not create score overlay: {:?}", e),
                }
            }
            Self { document }
        }

        fn set_text(&self, id: &str, text: &str) {
            if let Some(el) = self.document.get_element_by_id(id) {
                el.set_text_content(Some(text));
            }
        }
    }

    impl GameObserver for DomObserver {
        fn on_score_changed(&mut self, score: u64) {
            self.set_text(hud::SCORE_ID, &hud::score_label(score));
        }

        fn on_game_over(&mut self, final_score: u64, top_score: u64) {
            self.set_text("currentScore", &hud::current_score_label(final_score));
            self.set_text("topScore", &hud::top_score_label(top_score));
            set_visible(&self.document, "gameOver", true);
        }
    }

    type PageGame = GameLoop<PageRenderer, DomObserver>;

    fn set_visible(document: &Document, id: &str, visible: bool) {
        if let Some(el) = document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        {
            let display = if visible { "flex" } else { "none" };
            let _ = el.style().set_property("display", display);
        }
    }

    fn event_key(event: &KeyboardEvent) -> Option<Key> {
        Key::from_code(&event.code()).or_else(|| Key::from_key(&event.key()))
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"logger already initialized".into());
        }
        log::info!("Tunnel Flyer starting...");

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            web_sys::console::error_1(&"no document".into());
            return;
        };

        let seed = js_sys::Date::now() as u64;
        let observer = DomObserver::new(document.clone());
        let game = Rc::new(RefCell::new(GameLoop::new(
            Tuning::default(),
            seed,
            PageRenderer,
            observer,
        )));
        let scheduler = Rc::new(RefCell::new(RafScheduler::new()));
        log::info!("Game initialized with seed: {}", seed);

        setup_keyboard(&document, game.clone());
        setup_buttons(&document, game, scheduler);
    }

    fn setup_keyboard(document: &Document, game: Rc<RefCell<PageGame>>) {
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = event_key(&event) {
                    game.borrow_mut().key_down(key);
                }
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = event_key(&event) {
                    game.borrow_mut().key_up(key);
                }
            });
            let _ = document
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_buttons(
        document: &Document,
        game: Rc<RefCell<PageGame>>,
        scheduler: Rc<RefCell<RafScheduler>>,
    ) {
        if let Some(btn) = document.get_element_by_id("startButton") {
            let game = game.clone();
            let scheduler = scheduler.clone();
            let document = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                set_visible(&document, "startPage", false);
                if game.borrow_mut().start() {
                    attach(&mut *scheduler.borrow_mut(), &game);
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id("restartButton") {
            let document = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                set_visible(&document, "startPage", false);
                set_visible(&document, "gameOver", false);
                game.borrow_mut().restart();
                let mut scheduler = scheduler.borrow_mut();
                if !scheduler.is_running() {
                    attach(&mut *scheduler, &game);
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use tunnel_flyer::platform::{ManualScheduler, attach};
    use tunnel_flyer::{GameLoop, Tuning};

    env_logger::init();
    log::info!("Tunnel Flyer (native) starting...");
    log::info!("Native mode runs a headless session - serve the wasm build for the playable game");

    let mut args = std::env::args().skip(1);
    let tuning = match args.next() {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading tuning file {path}"))?;
            Tuning::from_json(&json)
                .inspect_err(|e| log::warn!("Rejected tuning file {}: {}", path, e))?
        }
        None => Tuning::default(),
    };
    let seed = match args.next() {
        Some(s) => s
            .parse::<u64>()
            .with_context(|| format!("invalid seed {s:?}"))?,
        None => 0x5eed,
    };
    let max_frames = match args.next() {
        Some(s) => s
            .parse::<u64>()
            .with_context(|| format!("invalid frame limit {s:?}"))?,
        None => 1_000_000,
    };

    let game = std::rc::Rc::new(std::cell::RefCell::new(GameLoop::headless(tuning, seed)));
    let mut scheduler = ManualScheduler::default();
    game.borrow_mut().start();
    attach(&mut scheduler, &game);
    let frames = scheduler.run(max_frames);

    let game = game.borrow();
    let score = &game.session().score;
    println!(
        "phase {:?} after {} frames ({:.1}s simulated): score {}, top {}",
        game.phase(),
        frames,
        scheduler.time() / 1000.0,
        score.display_score(),
        score.display_top()
    );
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
