//! Data-driven game balance
//!
//! Every field is optional in JSON; missing fields fall back to the
//! classic values in [`crate::consts`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Reasons a tuning document is rejected
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("malformed tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("`{field}` must be positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },
    #[error("`{field}` must be finite, got {value}")]
    NotFinite { field: &'static str, value: f32 },
    #[error("`obstacle_count` must be at least 1")]
    NoObstacles,
    #[error("`camera_z` ({camera_z}) must lie in front of the spawn depth ({spawn_depth})")]
    CameraBehindSpawn { camera_z: f32, spawn_depth: f32 },
}

/// Speeds, sizes and counts for a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Craft step per key press
    pub plane_speed: f32,
    /// Obstacle z advance per frame
    pub obstacle_speed: f32,
    /// Score gained per frame = obstacle_speed * score_factor
    pub score_factor: f32,
    pub obstacle_count: usize,
    /// Craft must stay strictly inside (-bound, bound) on x and y
    pub bound: f32,
    pub spawn_depth: f32,
    /// Obstacles with z beyond this are recycled
    pub camera_z: f32,
    /// Strafe roll (radians)
    pub tilt_angle: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            plane_speed: PLANE_SPEED,
            obstacle_speed: OBSTACLE_SPEED,
            score_factor: SCORE_FACTOR,
            obstacle_count: OBSTACLE_COUNT,
            bound: TUNNEL_BOUND,
            spawn_depth: SPAWN_DEPTH,
            camera_z: CAMERA_Z,
            tilt_angle: TILT_ANGLE,
        }
    }
}

impl Tuning {
    /// Parse and validate a tuning document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values that would break the field or craft invariants
    pub fn validate(&self) -> Result<(), TuningError> {
        let finite = [
            ("plane_speed", self.plane_speed),
            ("obstacle_speed", self.obstacle_speed),
            ("score_factor", self.score_factor),
            ("bound", self.bound),
            ("spawn_depth", self.spawn_depth),
            ("camera_z", self.camera_z),
            ("tilt_angle", self.tilt_angle),
            // Spawn sampling spans [-bound, bound), so its width must fit too
            ("bound", self.bound * 2.0),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(TuningError::NotFinite { field, value });
            }
        }
        let positive = [
            ("plane_speed", self.plane_speed),
            ("obstacle_speed", self.obstacle_speed),
            ("score_factor", self.score_factor),
            ("bound", self.bound),
            ("spawn_depth", self.spawn_depth),
        ];
        for (field, value) in positive {
            if !(value > 0.0) {
                return Err(TuningError::NotPositive { field, value });
            }
        }
        if self.obstacle_count == 0 {
            return Err(TuningError::NoObstacles);
        }
        // Freshly spawned obstacles must be able to drift past the camera
        if self.camera_z <= -self.spawn_depth {
            return Err(TuningError::CameraBehindSpawn {
                camera_z: self.camera_z,
                spawn_depth: self.spawn_depth,
            });
        }
        if !self.score_per_frame().is_finite() {
            return Err(TuningError::NotFinite {
                field: "score_factor",
                value: self.score_factor,
            });
        }
        Ok(())
    }

    /// Score gained each frame while playing
    pub fn score_per_frame(&self) -> f32 {
        self.obstacle_speed * self.score_factor
    }
}
