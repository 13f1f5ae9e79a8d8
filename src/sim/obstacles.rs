//! Fixed-size obstacle pool
//!
//! Obstacles never leave the pool: once one drifts past the camera it is
//! respawned somewhere deep in the tunnel, which makes the tunnel look endless.

use glam::Vec3;
use rand::Rng;

use super::state::{Lean, Obstacle};
use crate::tuning::Tuning;

/// Region new obstacles are sampled from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnArea {
    /// x and y are drawn from [-bound, bound)
    pub bound: f32,
    /// z is drawn from [-depth, 0)
    pub depth: f32,
}

impl SpawnArea {
    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self {
            bound: tuning.bound,
            depth: tuning.spawn_depth,
        }
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec3 {
        // Draw order x, y, z keeps seeded runs stable
        let x = rng.random_range(-self.bound..self.bound);
        let y = rng.random_range(-self.bound..self.bound);
        let z = rng.random_range(-self.depth..0.0);
        Vec3::new(x, y, z)
    }
}

/// The set of obstacles in play
#[derive(Debug, Clone)]
pub struct ObstacleField {
    spawn: SpawnArea,
    obstacles: Vec<Obstacle>,
}

impl ObstacleField {
    /// Empty field; call [`ObstacleField::reset`] to populate it
    pub fn new(spawn: SpawnArea) -> Self {
        Self {
            spawn,
            obstacles: Vec::new(),
        }
    }

    /// Discard every obstacle and spawn `count` fresh ones
    pub fn reset<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) {
        self.obstacles.clear();
        self.obstacles.reserve(count);
        for _ in 0..count {
            let pos = self.spawn.sample(rng);
            let lean = if rng.random_bool(0.5) {
                Lean::CounterClockwise
            } else {
                Lean::Clockwise
            };
            self.obstacles.push(Obstacle { pos, lean });
        }
    }

    /// Move every obstacle `speed` toward the camera, respawning any that
    /// passed `recycle_z`. Returns the number respawned.
    pub fn advance<R: Rng + ?Sized>(&mut self, speed: f32, recycle_z: f32, rng: &mut R) -> usize {
        let mut recycled = 0;
        for obstacle in &mut self.obstacles {
            obstacle.pos.z += speed;
            if obstacle.pos.z > recycle_z {
                obstacle.pos = self.spawn.sample(rng);
                recycled += 1;
            }
        }
        recycled
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Obstacle> {
        self.obstacles.iter()
    }

    pub fn as_slice(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Direct access for hosts and tests that place obstacles by hand
    pub fn as_mut_slice(&mut self) -> &mut [Obstacle] {
        &mut self.obstacles
    }
}

impl<'a> IntoIterator for &'a ObstacleField {
    type Item = &'a Obstacle;
    type IntoIter = std::slice::Iter<'a, Obstacle>;

    fn into_iter(self) -> Self::IntoIter {
        self.obstacles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn field(seed: u64) -> (ObstacleField, Pcg32) {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut field = ObstacleField::new(SpawnArea::from_tuning(&Tuning::default()));
        field.reset(20, &mut rng);
        (field, rng)
    }

    proptest! {
        #[test]
        fn test_reset_spawns_in_range(seed in any::<u64>()) {
            let (field, _) = field(seed);
            prop_assert_eq!(field.len(), 20);
            for o in &field {
                prop_assert!(o.pos.x >= -10.0 && o.pos.x < 10.0);
                prop_assert!(o.pos.y >= -10.0 && o.pos.y < 10.0);
                prop_assert!(o.pos.z >= -200.0 && o.pos.z < 0.0);
            }
        }
    }

    #[test]
    fn test_reset_replaces_previous_obstacles() {
        let (mut field, mut rng) = field(1);
        let before: Vec<Vec3> = field.iter().map(|o| o.pos).collect();
        field.reset(20, &mut rng);
        let after: Vec<Vec3> = field.iter().map(|o| o.pos).collect();
        assert_eq!(after.len(), 20);
        assert_ne!(before, after);
    }

    #[test]
    fn test_both_leans_appear() {
        let (field, _) = field(3);
        assert!(field.iter().any(|o| o.lean == Lean::Clockwise));
        assert!(field.iter().any(|o| o.lean == Lean::CounterClockwise));
    }

    #[test]
    fn test_repeated_advance_matches_single_advance() {
        // Far from the camera so nothing recycles
        let (mut stepped, mut rng) = field(5);
        for o in stepped.as_mut_slice() {
            o.pos.z = -150.0;
        }
        let mut jumped = stepped.clone();

        for _ in 0..100 {
            assert_eq!(stepped.advance(0.25, 5.0, &mut rng), 0);
        }
        assert_eq!(jumped.advance(25.0, 5.0, &mut rng), 0);

        for (a, b) in stepped.iter().zip(jumped.iter()) {
            assert!((a.pos.z - b.pos.z).abs() < 1e-3);
            assert_eq!(a.pos.x, b.pos.x);
        }
    }

    #[test]
    fn test_recycle_once_per_pass() {
        let (mut field, mut rng) = field(9);
        field.as_mut_slice()[0].pos.z = 4.5;
        field.as_mut_slice()[0].lean = Lean::Clockwise;
        for o in &mut field.as_mut_slice()[1..] {
            o.pos.z = -199.0;
        }

        // 4.5 -> 4.75 -> 5.0 (not past) -> 5.25 (past)
        assert_eq!(field.advance(0.25, 5.0, &mut rng), 0);
        assert_eq!(field.advance(0.25, 5.0, &mut rng), 0);
        assert_eq!(field.advance(0.25, 5.0, &mut rng), 1);

        let reborn = &field.as_slice()[0];
        assert!(reborn.pos.z < 0.0);
        assert_eq!(reborn.lean, Lean::Clockwise);
        assert_eq!(field.len(), 20);

        // Freshly spawned obstacle needs a full pass before recycling again
        assert_eq!(field.advance(0.25, 5.0, &mut rng), 0);
    }
}
