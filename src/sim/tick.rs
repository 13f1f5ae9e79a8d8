//! Per-frame simulation step
//!
//! One call advances the session by exactly one display frame. Score grows by
//! a fixed amount per frame, never by wall-clock time.

use super::collision::first_hit;
use super::state::{GamePhase, Session};

/// What happened during a frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameOutcome {
    /// Session is not playing; nothing moved
    Idle,
    /// Craft survived the frame
    Survived { score: f32 },
    /// Craft hit obstacle `obstacle`; the session is now over
    Crashed {
        obstacle: usize,
        final_score: f32,
        top_score: f32,
    },
}

impl FrameOutcome {
    /// True when the host should keep scheduling frames
    pub fn keeps_running(&self) -> bool {
        matches!(self, FrameOutcome::Survived { .. })
    }
}

/// Advance the session by one frame
pub fn tick(session: &mut Session) -> FrameOutcome {
    if session.phase != GamePhase::Playing {
        return FrameOutcome::Idle;
    }

    session.frame += 1;
    let score_per_frame = session.tuning.score_per_frame();
    session.score.add(score_per_frame);

    let speed = session.tuning.obstacle_speed;
    let camera_z = session.tuning.camera_z;
    let recycled = session
        .obstacles
        .advance(speed, camera_z, &mut session.rng);
    if recycled > 0 {
        log::trace!("frame {}: recycled {} obstacles", session.frame, recycled);
    }

    match first_hit(&session.craft, session.tuning.tilt_angle, &session.obstacles) {
        Some(obstacle) => {
            session.phase = GamePhase::Over;
            session.score.record_session_end();
            log::debug!(
                "frame {}: craft at {:?} hit obstacle {} at {:?}",
                session.frame,
                session.craft.pos,
                obstacle,
                session.obstacles.as_slice()[obstacle].pos
            );
            FrameOutcome::Crashed {
                obstacle,
                final_score: session.score.current(),
                top_score: session.score.top(),
            }
        }
        None => FrameOutcome::Survived {
            score: session.score.current(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Session;
    use crate::tuning::Tuning;
    use glam::Vec3;

    /// Session with every obstacle parked out of the craft's way
    fn clear_session(seed: u64) -> Session {
        let mut session = Session::new(Tuning::default(), seed);
        session.begin();
        for o in session.obstacles.as_mut_slice() {
            o.pos = Vec3::new(9.0, 9.0, -150.0);
        }
        session
    }

    #[test]
    fn test_tick_idle_until_started() {
        let mut session = Session::new(Tuning::default(), 1);
        let before: Vec<Vec3> = session.obstacles.iter().map(|o| o.pos).collect();
        assert_eq!(tick(&mut session), FrameOutcome::Idle);
        let after: Vec<Vec3> = session.obstacles.iter().map(|o| o.pos).collect();
        assert_eq!(before, after);
        assert_eq!(session.score.current(), 0.0);
    }

    #[test]
    fn test_tick_scores_per_frame() {
        let mut session = clear_session(2);
        for _ in 0..10 {
            assert!(tick(&mut session).keeps_running());
        }
        assert!((session.score.current() - 20.0).abs() < 1e-4);
        assert_eq!(session.frame, 10);
        for o in &session.obstacles {
            assert!((o.pos.z - -148.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_tick_crash_ends_session() {
        let mut session = clear_session(3);
        // Near face at -0.6, craft tail at -0.25: one frame of clearance
        session.obstacles.as_mut_slice()[4].pos = Vec3::new(0.0, 0.0, -1.1);

        let first = tick(&mut session);
        assert!(first.keeps_running());

        let crash = tick(&mut session);
        match crash {
            FrameOutcome::Crashed {
                obstacle,
                final_score,
                top_score,
            } => {
                assert_eq!(obstacle, 4);
                assert!((final_score - 4.0).abs() < 1e-4);
                assert_eq!(final_score, top_score);
            }
            other => panic!("expected crash, got {other:?}"),
        }
        assert_eq!(session.phase, GamePhase::Over);

        // Over is terminal until restart
        assert_eq!(tick(&mut session), FrameOutcome::Idle);
        assert!((session.score.current() - 4.0).abs() < 1e-4);
    }

    #[test]
    fn test_determinism() {
        let mut a = Session::new(Tuning::default(), 99999);
        let mut b = Session::new(Tuning::default(), 99999);
        a.begin();
        b.begin();
        for _ in 0..500 {
            let oa = tick(&mut a);
            let ob = tick(&mut b);
            assert_eq!(oa, ob);
        }
        let pa: Vec<Vec3> = a.obstacles.iter().map(|o| o.pos).collect();
        let pb: Vec<Vec3> = b.obstacles.iter().map(|o| o.pos).collect();
        assert_eq!(pa, pb);
    }
}
