//! Per-instance data handed to the renderer
//!
//! Every instance is a unit cube. Its model matrix carries position,
//! rotation and box size, so a single cube mesh draws the whole scene.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

use crate::sim::Session;
use crate::sim::collision::{
    craft_parts, craft_rotation, obstacle_half_extents, obstacle_rotation,
};

/// What an instance belongs to
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstanceKind {
    Craft = 0,
    Obstacle = 1,
}

/// One unit cube, laid out for a GPU instance buffer
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct InstanceRaw {
    /// Column-major model matrix
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
    pub kind: u32,
    pub _pad: [u32; 3],
}

impl InstanceRaw {
    pub fn new(model: Mat4, color: [f32; 4], kind: InstanceKind) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            color,
            kind: kind as u32,
            _pad: [0; 3],
        }
    }

    pub fn translation(&self) -> Vec3 {
        Mat4::from_cols_array_2d(&self.model).w_axis.truncate()
    }
}

/// Colors for game elements
pub mod colors {
    pub const CRAFT: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    pub const OBSTACLE: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, Default)]
pub struct SceneSnapshot {
    pub instances: Vec<InstanceRaw>,
    pub camera_z: f32,
}

impl SceneSnapshot {
    /// Flatten the craft (three boxes) and every obstacle into instances
    pub fn capture(session: &Session) -> Self {
        let mut scene = Self {
            instances: Vec::with_capacity(3 + session.obstacles.len()),
            camera_z: session.tuning.camera_z,
        };
        scene.fill(session);
        scene
    }

    /// Re-capture into the existing buffer
    pub fn fill(&mut self, session: &Session) {
        self.instances.clear();
        self.camera_z = session.tuning.camera_z;

        let craft = &session.craft;
        let roll = craft_rotation(craft, session.tuning.tilt_angle);
        let craft_model = Mat4::from_rotation_translation(roll, craft.pos);
        for part in craft_parts() {
            let local = Mat4::from_scale_rotation_translation(
                part.half_extents * 2.0,
                part.rotation,
                part.offset,
            );
            self.instances.push(InstanceRaw::new(
                craft_model * local,
                colors::CRAFT,
                InstanceKind::Craft,
            ));
        }

        let size = obstacle_half_extents() * 2.0;
        for obstacle in &session.obstacles {
            let rotation = obstacle_rotation(obstacle);
            let model = Mat4::from_scale_rotation_translation(size, rotation, obstacle.pos);
            self.instances.push(InstanceRaw::new(
                model,
                colors::OBSTACLE,
                InstanceKind::Obstacle,
            ));
        }
    }

    /// Model matrices only, 16 column-major floats per instance
    pub fn model_matrices(&self) -> Vec<f32> {
        self.instances
            .iter()
            .flat_map(|inst| inst.model.into_iter().flatten())
            .collect()
    }

    /// Raw instance buffer bytes
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances)
    }
}
