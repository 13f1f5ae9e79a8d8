//! Axis-aligned bounding box collision between the craft and obstacles
//!
//! Each box is built the way a scene graph would: take the local box of a
//! mesh, push it through the world transform, and wrap the result in a new
//! axis-aligned box. A rotated box ends up with a wider footprint than its
//! own size, so tilting the craft or leaning an obstacle makes it easier to hit.

use glam::{Mat3, Quat, Vec3};

use super::state::{Craft, Obstacle};
use crate::consts::OBSTACLE_SIZE;

/// Axis-aligned bounding box in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Smallest axis-aligned box enclosing a box of `half_extents` centred on
    /// `center` and rotated by `rotation`
    pub fn from_oriented_box(center: Vec3, half_extents: Vec3, rotation: Quat) -> Self {
        let m = Mat3::from_quat(rotation);
        let abs = Mat3::from_cols(m.x_axis.abs(), m.y_axis.abs(), m.z_axis.abs());
        let extent = abs * half_extents;
        Self {
            min: center - extent,
            max: center + extent,
        }
    }

    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Overlap test; boxes that only touch count as intersecting
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.cmple(other.max).all() && self.max.cmpge(other.min).all()
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}

/// One box-shaped mesh of the craft, relative to the craft origin
#[derive(Debug, Clone, Copy)]
pub struct CraftPart {
    pub offset: Vec3,
    pub half_extents: Vec3,
    pub rotation: Quat,
}

/// Fuselage (1 x 0.5 x 1 box pitched 90 degrees) plus two 2-unit wings
pub fn craft_parts() -> [CraftPart; 3] {
    let wing = Vec3::new(1.0, 0.05, 0.25);
    [
        CraftPart {
            offset: Vec3::ZERO,
            half_extents: Vec3::new(0.5, 0.25, 0.5),
            rotation: Quat::from_rotation_x(std::f32::consts::FRAC_PI_2),
        },
        CraftPart {
            offset: Vec3::new(-1.0, 0.0, 0.0),
            half_extents: wing,
            rotation: Quat::IDENTITY,
        },
        CraftPart {
            offset: Vec3::new(1.0, 0.0, 0.0),
            half_extents: wing,
            rotation: Quat::IDENTITY,
        },
    ]
}

/// World rotation of the craft for its current tilt
pub fn craft_rotation(craft: &Craft, tilt_angle: f32) -> Quat {
    Quat::from_rotation_z(craft.tilt.angle(tilt_angle))
}

/// Box around the whole craft (body and both wings) in world space
pub fn craft_bounds(craft: &Craft, tilt_angle: f32) -> Aabb {
    let roll = craft_rotation(craft, tilt_angle);
    let [first, rest @ ..] = craft_parts();
    let part_box = |part: &CraftPart| {
        Aabb::from_oriented_box(
            craft.pos + roll * part.offset,
            part.half_extents,
            roll * part.rotation,
        )
    };
    rest.iter()
        .fold(part_box(&first), |acc, part| acc.union(&part_box(part)))
}

/// Half extents of every obstacle box
pub fn obstacle_half_extents() -> Vec3 {
    Vec3::from_array(OBSTACLE_SIZE) * 0.5
}

pub fn obstacle_rotation(obstacle: &Obstacle) -> Quat {
    Quat::from_rotation_z(obstacle.lean.angle())
}

pub fn obstacle_bounds(obstacle: &Obstacle) -> Aabb {
    Aabb::from_oriented_box(
        obstacle.pos,
        obstacle_half_extents(),
        obstacle_rotation(obstacle),
    )
}

/// Index of the first obstacle whose box overlaps the craft's box
pub fn first_hit<'a, I>(craft: &Craft, tilt_angle: f32, obstacles: I) -> Option<usize>
where
    I: IntoIterator<Item = &'a Obstacle>,
{
    let craft_box = craft_bounds(craft, tilt_angle);
    obstacles
        .into_iter()
        .position(|o| craft_box.intersects(&obstacle_bounds(o)))
}

/// True if the craft, rolled by `tilt_angle` when banked, overlaps any obstacle
pub fn check<'a, I>(craft: &Craft, tilt_angle: f32, obstacles: I) -> bool
where
    I: IntoIterator<Item = &'a Obstacle>,
{
    first_hit(craft, tilt_angle, obstacles).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::TILT_ANGLE;
    use crate::sim::state::{Lean, Tilt};

    fn obstacle_at(x: f32, y: f32, z: f32) -> Obstacle {
        Obstacle {
            pos: Vec3::new(x, y, z),
            lean: Lean::CounterClockwise,
        }
    }

    #[test]
    fn test_level_craft_bounds() {
        let craft = Craft::new(10.0);
        let b = craft_bounds(&craft, TILT_ANGLE);
        assert!((b.min.x + 2.0).abs() < 1e-4);
        assert!((b.max.x - 2.0).abs() < 1e-4);
        // Pitched fuselage is 1 unit tall, wings are thinner
        assert!((b.max.y - 0.5).abs() < 1e-4);
        assert!((b.max.z - 0.25).abs() < 1e-4);
    }

    #[test]
    fn test_tilt_widens_vertical_extent() {
        let mut craft = Craft::new(10.0);
        let level = craft_bounds(&craft, TILT_ANGLE);
        craft.tilt = Tilt::Right;
        let banked = craft_bounds(&craft, TILT_ANGLE);
        assert!(banked.max.y > level.max.y + 0.2);
        assert!(banked.max.x < level.max.x);
    }

    #[test]
    fn test_leaning_obstacle_bounds() {
        let b = obstacle_bounds(&obstacle_at(0.0, 0.0, -50.0));
        // 45 degree lean: half extent = (0.5 + 2.5) * sqrt(1/2)
        let expected = 3.0 * std::f32::consts::FRAC_1_SQRT_2;
        assert!((b.max.x - expected).abs() < 1e-4);
        assert!((b.max.y - expected).abs() < 1e-4);
        assert!((b.size().z - 1.0).abs() < 1e-4);
        assert!((b.center().z + 50.0).abs() < 1e-4);
    }

    #[test]
    fn test_collision_at_origin() {
        let craft = Craft::new(10.0);
        let obstacles = [obstacle_at(0.0, 0.0, 0.0)];
        assert!(check(&craft, TILT_ANGLE, &obstacles));
    }

    #[test]
    fn test_no_collision_in_corner() {
        let craft = Craft::new(10.0);
        let obstacles: Vec<Obstacle> = (0..20)
            .map(|i| obstacle_at(9.0, 9.0, -(i as f32) * 10.0))
            .collect();
        assert!(!check(&craft, TILT_ANGLE, &obstacles));
        assert_eq!(first_hit(&craft, TILT_ANGLE, &obstacles), None);
    }

    #[test]
    fn test_first_hit_reports_index() {
        let craft = Craft::new(10.0);
        let obstacles = [
            obstacle_at(9.0, 9.0, 0.0),
            obstacle_at(0.0, 0.0, -100.0),
            obstacle_at(1.0, 0.0, 0.3),
        ];
        assert_eq!(first_hit(&craft, TILT_ANGLE, &obstacles), Some(2));
    }

    #[test]
    fn test_check_uses_given_tilt_angle() {
        let mut craft = Craft::new(10.0);
        craft.tilt = Tilt::Right;
        // Bottom face at y = 0.6: above the level craft, under a banked wing
        let half = obstacle_bounds(&obstacle_at(0.0, 0.0, 0.0)).max.y;
        let obstacles = [obstacle_at(0.0, 0.6 + half, 0.0)];
        assert!(check(&craft, TILT_ANGLE, &obstacles));
        assert!(!check(&craft, 0.0, &obstacles));
    }

    #[test]
    fn test_touching_boxes_intersect() {
        let a = Aabb::new(Vec3::ZERO, Vec3::ONE);
        let b = Aabb::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(2.0, 1.0, 1.0));
        let c = Aabb::new(Vec3::new(1.01, 0.0, 0.0), Vec3::new(2.0, 1.0, 1.0));
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
    }
}
