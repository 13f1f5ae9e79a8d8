//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per display frame, no wall-clock time
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod obstacles;
pub mod state;
pub mod tick;

pub use collision::{Aabb, check, craft_bounds, first_hit, obstacle_bounds};
pub use obstacles::{ObstacleField, SpawnArea};
pub use state::{Craft, GamePhase, Lean, Obstacle, Session, Tilt};
pub use tick::{FrameOutcome, tick};
