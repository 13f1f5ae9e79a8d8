//! Tunnel Flyer - dodge obstacles flying down an endless tunnel
//!
//! Core modules:
//! - `sim`: Deterministic simulation (craft, obstacles, collisions, frame step)
//! - `game`: Session driver wiring the simulation to the host
//! - `input`: Keyboard routing to craft commands
//! - `score`: Session score and in-memory top score
//! - `renderer`: Scene export for the external 3D renderer
//! - `platform`: Frame scheduling abstraction
//! - `tuning`: Data-driven game balance

pub mod game;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod score;
pub mod sim;
pub mod tuning;

pub use game::{GameLoop, GameObserver, NullObserver};
pub use input::{InputRouter, Key};
pub use score::ScoreTracker;
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    use std::f32::consts::FRAC_PI_8;

    /// Half-width of the playable square inside the tunnel
    pub const TUNNEL_BOUND: f32 = 10.0;
    /// Obstacles spawn between z = -SPAWN_DEPTH and z = 0
    pub const SPAWN_DEPTH: f32 = 200.0;
    /// Camera sits behind the craft; obstacles past it are recycled
    pub const CAMERA_Z: f32 = 5.0;

    /// Obstacle pool size (constant for a whole session)
    pub const OBSTACLE_COUNT: usize = 20;
    /// Obstacle box dimensions (width, height, depth)
    pub const OBSTACLE_SIZE: [f32; 3] = [1.0, 5.0, 1.0];
    /// Distance obstacles travel toward the camera per frame
    pub const OBSTACLE_SPEED: f32 = 0.2;

    /// Craft displacement per key press / key repeat
    pub const PLANE_SPEED: f32 = 0.5;
    /// Roll applied while strafing (radians)
    pub const TILT_ANGLE: f32 = FRAC_PI_8;

    /// Score per frame is OBSTACLE_SPEED * SCORE_FACTOR
    pub const SCORE_FACTOR: f32 = 10.0;
}
