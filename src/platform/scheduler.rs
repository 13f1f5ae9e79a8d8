//! Frame scheduler abstraction

use std::cell::RefCell;
use std::rc::Rc;

use crate::game::{GameLoop, GameObserver};
use crate::renderer::Renderer;

/// Returned by a tick callback to keep or drop its subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    Stop,
}

/// Called once per frame with the host timestamp in milliseconds
pub type TickCallback = Box<dyn FnMut(f64) -> TickControl>;

/// Source of per-frame callbacks
pub trait FrameScheduler {
    /// Subscribe `on_tick`, replacing any current subscriber
    fn start(&mut self, on_tick: TickCallback);
    /// Drop the subscriber; no further ticks are delivered
    fn stop(&mut self);
    fn is_running(&self) -> bool;
}

/// Subscribe a shared game loop to `scheduler`. The subscription ends by
/// itself when the session is over.
pub fn attach<S, R, O>(scheduler: &mut S, game: &Rc<RefCell<GameLoop<R, O>>>)
where
    S: FrameScheduler + ?Sized,
    R: Renderer + 'static,
    O: GameObserver + 'static,
{
    let game = Rc::clone(game);
    scheduler.start(Box::new(move |_time| game.borrow_mut().frame()));
}

/// Scheduler driven by explicit calls (native runs, tests)
pub struct ManualScheduler {
    on_tick: Option<TickCallback>,
    /// Simulated time of the next tick (ms)
    time: f64,
    /// Simulated display refresh interval (ms)
    interval: f64,
}

impl Default for ManualScheduler {
    fn default() -> Self {
        Self::new(1000.0 / 60.0)
    }
}

impl ManualScheduler {
    pub fn new(interval: f64) -> Self {
        Self {
            on_tick: None,
            time: 0.0,
            interval,
        }
    }

    /// Deliver one tick. Returns false if nothing was subscribed.
    pub fn tick(&mut self) -> bool {
        let Some(on_tick) = self.on_tick.as_mut() else {
            return false;
        };
        let control = on_tick(self.time);
        self.time += self.interval;
        if control == TickControl::Stop {
            self.on_tick = None;
        }
        true
    }

    /// Tick until the subscriber stops or `max_ticks` is reached.
    /// Returns the number of ticks delivered.
    pub fn run(&mut self, max_ticks: u64) -> u64 {
        let mut delivered = 0;
        while delivered < max_ticks && self.tick() {
            delivered += 1;
        }
        delivered
    }

    pub fn time(&self) -> f64 {
        self.time
    }
}

impl FrameScheduler for ManualScheduler {
    fn start(&mut self, on_tick: TickCallback) {
        self.on_tick = Some(on_tick);
    }

    fn stop(&mut self) {
        self.on_tick = None;
    }

    fn is_running(&self) -> bool {
        self.on_tick.is_some()
    }
}
