//! Keyboard routing
//!
//! Events are applied to the craft the moment they arrive; nothing is queued
//! for the next frame. Held keys rely on the host's key repeat for
//! continuous movement.

use crate::sim::{Craft, GamePhase, Session};

/// The four command keys (W/A/S/D)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Forward,
    Backward,
    StrafeLeft,
    StrafeRight,
}

impl Key {
    /// Legacy `KeyboardEvent.which` / `keyCode` values
    pub fn from_key_code(code: u32) -> Option<Self> {
        match code {
            87 => Some(Key::Forward),
            83 => Some(Key::Backward),
            65 => Some(Key::StrafeLeft),
            68 => Some(Key::StrafeRight),
            _ => None,
        }
    }

    /// Layout-independent `KeyboardEvent.code` values
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "KeyW" => Some(Key::Forward),
            "KeyS" => Some(Key::Backward),
            "KeyA" => Some(Key::StrafeLeft),
            "KeyD" => Some(Key::StrafeRight),
            _ => None,
        }
    }

    /// Printed `KeyboardEvent.key` values
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "w" | "W" => Some(Key::Forward),
            "s" | "S" => Some(Key::Backward),
            "a" | "A" => Some(Key::StrafeLeft),
            "d" | "D" => Some(Key::StrafeRight),
            _ => None,
        }
    }

    /// Either a `code` ("KeyW") or a printed `key` ("w")
    pub fn from_name(name: &str) -> Option<Self> {
        Self::from_code(name).or_else(|| Self::from_key(name))
    }

    pub fn is_strafe(self) -> bool {
        matches!(self, Key::StrafeLeft | Key::StrafeRight)
    }
}

/// Applies key events to the session's craft
#[derive(Debug, Clone, Copy)]
pub struct InputRouter {
    /// Distance moved per key press or repeat
    pub step: f32,
}

impl InputRouter {
    pub fn new(step: f32) -> Self {
        Self { step }
    }

    pub fn key_down(&self, session: &mut Session, key: Key) {
        if session.phase != GamePhase::Playing {
            return;
        }
        self.apply_down(&mut session.craft, key);
    }

    pub fn key_up(&self, session: &mut Session, key: Key) {
        if session.phase != GamePhase::Playing {
            return;
        }
        if key.is_strafe() {
            session.craft.level_off();
        }
    }

    fn apply_down(&self, craft: &mut Craft, key: Key) {
        match key {
            Key::Forward => craft.move_up(self.step),
            Key::Backward => craft.move_down(self.step),
            Key::StrafeLeft => craft.move_left(self.step),
            Key::StrafeRight => craft.move_right(self.step),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Tilt;
    use crate::tuning::Tuning;

    fn playing() -> Session {
        let mut session = Session::new(Tuning::default(), 11);
        session.begin();
        session
    }

    #[test]
    fn test_key_tables_agree() {
        for (code, name, key, expected) in [
            (87, "KeyW", "w", Key::Forward),
            (83, "KeyS", "S", Key::Backward),
            (65, "KeyA", "a", Key::StrafeLeft),
            (68, "KeyD", "D", Key::StrafeRight),
        ] {
            assert_eq!(Key::from_key_code(code), Some(expected));
            assert_eq!(Key::from_code(name), Some(expected));
            assert_eq!(Key::from_key(key), Some(expected));
        }
        assert_eq!(Key::from_name("KeyA"), Some(Key::StrafeLeft));
        assert_eq!(Key::from_name("a"), Some(Key::StrafeLeft));
        assert_eq!(Key::from_name("Space"), None);
        assert_eq!(Key::from_key_code(32), None);
        assert_eq!(Key::from_code("ArrowUp"), None);
        assert_eq!(Key::from_key("q"), None);
    }

    #[test]
    fn test_routing_moves_craft() {
        let router = InputRouter::new(0.5);
        let mut session = playing();

        router.key_down(&mut session, Key::Forward);
        router.key_down(&mut session, Key::Forward);
        router.key_down(&mut session, Key::StrafeRight);
        assert_eq!(session.craft.pos.y, 1.0);
        assert_eq!(session.craft.pos.x, 0.5);
        assert_eq!(session.craft.tilt, Tilt::Right);

        router.key_up(&mut session, Key::Forward);
        assert_eq!(session.craft.tilt, Tilt::Right);
        router.key_up(&mut session, Key::StrafeRight);
        assert_eq!(session.craft.tilt, Tilt::Level);

        router.key_down(&mut session, Key::Backward);
        router.key_down(&mut session, Key::StrafeLeft);
        assert_eq!(session.craft.pos.y, 0.5);
        assert_eq!(session.craft.pos.x, 0.0);
        assert_eq!(session.craft.tilt, Tilt::Left);
    }

    #[test]
    fn test_held_key_stops_at_wall() {
        let router = InputRouter::new(0.5);
        let mut session = playing();
        // Forty repeats would carry the craft to y = 20 without the bound
        for _ in 0..40 {
            router.key_down(&mut session, Key::Forward);
        }
        assert_eq!(session.craft.pos.y, 9.5);
    }

    #[test]
    fn test_ignored_when_not_playing() {
        let router = InputRouter::new(0.5);
        let mut session = Session::new(Tuning::default(), 12);
        router.key_down(&mut session, Key::StrafeLeft);
        assert_eq!(session.craft.pos.x, 0.0);
        assert_eq!(session.craft.tilt, Tilt::Level);
    }
}
