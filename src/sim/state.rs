//! Game state and core simulation types

use glam::Vec3;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::obstacles::{ObstacleField, SpawnArea};
use crate::score::ScoreTracker;
use crate::tuning::Tuning;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Start screen, nothing moves yet
    Ready,
    /// Active gameplay
    Playing,
    /// Craft hit an obstacle
    Over,
}

/// Roll of the craft, driven by strafe keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tilt {
    Left,
    #[default]
    Level,
    Right,
}

impl Tilt {
    /// Roll about the forward axis in radians (left is counter-clockwise)
    pub fn angle(self, tilt_angle: f32) -> f32 {
        match self {
            Tilt::Left => tilt_angle,
            Tilt::Level => 0.0,
            Tilt::Right => -tilt_angle,
        }
    }
}

/// The player's plane
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Craft {
    pub pos: Vec3,
    pub tilt: Tilt,
    /// Movement limit on x and y (exclusive)
    pub bound: f32,
}

impl Craft {
    pub fn new(bound: f32) -> Self {
        Self {
            pos: Vec3::ZERO,
            tilt: Tilt::Level,
            bound,
        }
    }

    /// Back to the tunnel centre, wings level
    pub fn reset(&mut self) {
        self.pos = Vec3::ZERO;
        self.tilt = Tilt::Level;
    }

    pub fn move_up(&mut self, step: f32) {
        if self.pos.y + step < self.bound {
            self.pos.y += step;
        }
    }

    pub fn move_down(&mut self, step: f32) {
        if self.pos.y - step > -self.bound {
            self.pos.y -= step;
        }
    }

    /// Strafe left; the craft banks even when pinned against the wall
    pub fn move_left(&mut self, step: f32) {
        if self.pos.x - step > -self.bound {
            self.pos.x -= step;
        }
        self.tilt = Tilt::Left;
    }

    pub fn move_right(&mut self, step: f32) {
        if self.pos.x + step < self.bound {
            self.pos.x += step;
        }
        self.tilt = Tilt::Right;
    }

    pub fn level_off(&mut self) {
        self.tilt = Tilt::Level;
    }
}

/// Which diagonal an obstacle leans along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lean {
    /// +45 degrees about the forward axis
    CounterClockwise,
    /// -45 degrees about the forward axis
    Clockwise,
}

impl Lean {
    pub fn angle(self) -> f32 {
        match self {
            Lean::CounterClockwise => std::f32::consts::FRAC_PI_4,
            Lean::Clockwise => -std::f32::consts::FRAC_PI_4,
        }
    }
}

/// A tall box drifting toward the camera
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub pos: Vec3,
    /// Fixed for the obstacle's whole life, including recycles
    pub lean: Lean,
}

/// One play-through plus the state that outlives it (top score, RNG)
#[derive(Debug, Clone)]
pub struct Session {
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub craft: Craft,
    pub obstacles: ObstacleField,
    pub score: ScoreTracker,
    /// Frames simulated in the current session
    pub frame: u64,
    pub(crate) rng: Pcg32,
}

impl Session {
    /// Create a session in the Ready phase with a populated obstacle field
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut obstacles = ObstacleField::new(SpawnArea::from_tuning(&tuning));
        obstacles.reset(tuning.obstacle_count, &mut rng);
        Self {
            craft: Craft::new(tuning.bound),
            obstacles,
            score: ScoreTracker::new(),
            phase: GamePhase::Ready,
            frame: 0,
            rng,
            tuning,
        }
    }

    /// Fresh run: score, obstacles and craft reset; top score kept
    pub fn begin(&mut self) {
        self.score.reset();
        self.obstacles.reset(self.tuning.obstacle_count, &mut self.rng);
        self.craft.reset();
        self.frame = 0;
        self.phase = GamePhase::Playing;
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }
}
