//! `requestAnimationFrame` scheduler for the browser

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;

use super::scheduler::{FrameScheduler, TickCallback, TickControl};

#[derive(Default)]
struct RafState {
    running: Cell<bool>,
    handle: Cell<Option<i32>>,
    on_tick: RefCell<Option<TickCallback>>,
    frame: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl RafState {
    fn request(&self) {
        let Some(window) = web_sys::window() else {
            log::error!("no window; frame loop cannot run");
            self.running.set(false);
            return;
        };
        if let Some(frame) = self.frame.borrow().as_ref() {
            match window.request_animation_frame(frame.as_ref().unchecked_ref()) {
                Ok(handle) => self.handle.set(Some(handle)),
                Err(e) => {
                    log::error!("requestAnimationFrame failed: {:?}", e);
                    self.running.set(false);
                }
            }
        }
    }

    fn on_frame(&self, time: f64) {
        self.handle.set(None);
        if !self.running.get() {
            return;
        }
        let control = match self.on_tick.borrow_mut().as_mut() {
            Some(on_tick) => on_tick(time),
            None => TickControl::Stop,
        };
        match control {
            TickControl::Continue => self.request(),
            TickControl::Stop => {
                self.running.set(false);
                self.on_tick.borrow_mut().take();
            }
        }
    }
}

/// Delivers one tick per display refresh while subscribed
pub struct RafScheduler {
    state: Rc<RafState>,
}

impl Default for RafScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl RafScheduler {
    pub fn new() -> Self {
        let state = Rc::new(RafState::default());
        let weak: Weak<RafState> = Rc::downgrade(&state);
        let frame = Closure::<dyn FnMut(f64)>::new(move |time: f64| {
            if let Some(state) = weak.upgrade() {
                state.on_frame(time);
            }
        });
        *state.frame.borrow_mut() = Some(frame);
        Self { state }
    }
}

impl FrameScheduler for RafScheduler {
    fn start(&mut self, on_tick: TickCallback) {
        *self.state.on_tick.borrow_mut() = Some(on_tick);
        if !self.state.running.replace(true) {
            self.state.request();
        }
    }

    fn stop(&mut self) {
        self.state.running.set(false);
        if let Some(handle) = self.state.handle.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(handle);
            }
        }
        self.state.on_tick.borrow_mut().take();
    }

    fn is_running(&self) -> bool {
        self.state.running.get()
    }
}
