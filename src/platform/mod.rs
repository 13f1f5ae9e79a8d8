//! Platform abstraction layer
//!
//! Handles browser/native differences for frame scheduling and the
//! JavaScript `Game` handle. The game never re-arms its own frame callback;
//! a scheduler owns the subscription and drops it when the callback asks to
//! stop.

#[cfg(target_arch = "wasm32")]
pub mod bindings;
pub mod scheduler;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use scheduler::{FrameScheduler, ManualScheduler, TickCallback, TickControl, attach};
#[cfg(target_arch = "wasm32")]
pub use bindings::Game;
#[cfg(target_arch = "wasm32")]
pub use web::RafScheduler;
