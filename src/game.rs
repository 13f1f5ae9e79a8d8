//! Session driver
//!
//! Owns the session and the host-facing seams: key events come in, score and
//! game-over notifications plus one rendered scene per frame go out.

use crate::input::{InputRouter, Key};
use crate::platform::TickControl;
use crate::renderer::{NullRenderer, Renderer, SceneSnapshot};
use crate::sim::{FrameOutcome, GamePhase, Session, tick};
use crate::tuning::Tuning;

/// Notifications for the presentation layer (HUD, game-over screen)
pub trait GameObserver {
    /// Whole-point score after each surviving frame
    fn on_score_changed(&mut self, _score: u64) {}
    /// Session ended; `top_score` already includes this session
    fn on_game_over(&mut self, _final_score: u64, _top_score: u64) {}
}

/// Observer that ignores everything
#[derive(Debug, Default)]
pub struct NullObserver;

impl GameObserver for NullObserver {}

/// Drives one session after another
pub struct GameLoop<R: Renderer = NullRenderer, O: GameObserver = NullObserver> {
    session: Session,
    router: InputRouter,
    renderer: R,
    observer: O,
    scene: SceneSnapshot,
}

impl GameLoop {
    /// Headless loop with no renderer or observer
    pub fn headless(tuning: Tuning, seed: u64) -> Self {
        Self::new(tuning, seed, NullRenderer, NullObserver)
    }
}

impl<R: Renderer, O: GameObserver> GameLoop<R, O> {
    pub fn new(tuning: Tuning, seed: u64, renderer: R, observer: O) -> Self {
        let router = InputRouter::new(tuning.plane_speed);
        Self {
            session: Session::new(tuning, seed),
            router,
            renderer,
            observer,
            scene: SceneSnapshot::default(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn phase(&self) -> GamePhase {
        self.session.phase
    }

    /// Leave the start screen. Returns false if a session already began.
    pub fn start(&mut self) -> bool {
        if self.session.phase != GamePhase::Ready {
            return false;
        }
        self.session.begin();
        log::info!("Session started");
        true
    }

    /// Begin a fresh session; the top score carries over
    pub fn restart(&mut self) {
        self.session.begin();
        log::info!(
            "Session restarted (top score {})",
            self.session.score.display_top()
        );
    }

    pub fn key_down(&mut self, key: Key) {
        self.router.key_down(&mut self.session, key);
    }

    pub fn key_up(&mut self, key: Key) {
        self.router.key_up(&mut self.session, key);
    }

    /// Run one frame: simulate, notify, render
    pub fn frame(&mut self) -> TickControl {
        match tick(&mut self.session) {
            FrameOutcome::Idle => TickControl::Stop,
            FrameOutcome::Survived { .. } => {
                self.observer
                    .on_score_changed(self.session.score.display_score());
                self.scene.fill(&self.session);
                self.renderer.render(&self.scene);
                TickControl::Continue
            }
            FrameOutcome::Crashed { obstacle, .. } => {
                let final_score = self.session.score.display_score();
                let top_score = self.session.score.display_top();
                log::info!(
                    "Game over after {} frames: score {}, top {} (obstacle {})",
                    self.session.frame,
                    final_score,
                    top_score,
                    obstacle
                );
                self.observer.on_game_over(final_score, top_score);
                TickControl::Stop
            }
        }
    }
}
