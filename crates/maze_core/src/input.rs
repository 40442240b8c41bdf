//! Per-tick input snapshot
//!
//! The host owns the actual input devices; the core only ever sees this
//! snapshot, captured once per frame and passed into the session tick.
//! That keeps input capture (DOM events, key callbacks, gamepads) a
//! host concern and the simulation a pure function of its inputs.

use crate::foundation::math::Vec2;

/// Movement and look intent for one tick
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    /// Forward movement key held
    pub forward_held: bool,
    /// Backward movement key held
    pub backward_held: bool,
    /// Strafe-left key held
    pub left_held: bool,
    /// Strafe-right key held
    pub right_held: bool,
    /// Look delta since the previous tick (x = yaw axis, y = pitch axis)
    pub look_delta: Vec2,
}

impl InputState {
    /// An input snapshot with no movement and no look delta
    pub fn idle() -> Self {
        Self::default()
    }

    /// Forward axis in [-1, 1] derived from the held flags
    pub fn forward_axis(&self) -> f32 {
        f32::from(u8::from(self.forward_held)) - f32::from(u8::from(self.backward_held))
    }

    /// Right axis in [-1, 1] derived from the held flags
    pub fn right_axis(&self) -> f32 {
        f32::from(u8::from(self.right_held)) - f32::from(u8::from(self.left_held))
    }

    /// Whether any movement key is held
    pub fn wants_movement(&self) -> bool {
        self.forward_held || self.backward_held || self.left_held || self.right_held
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axes_from_held_flags() {
        let input = InputState {
            forward_held: true,
            right_held: true,
            ..Default::default()
        };
        assert_eq!(input.forward_axis(), 1.0);
        assert_eq!(input.right_axis(), 1.0);
        assert!(input.wants_movement());
    }

    #[test]
    fn test_opposed_keys_cancel() {
        let input = InputState {
            forward_held: true,
            backward_held: true,
            left_held: true,
            right_held: true,
            ..Default::default()
        };
        assert_eq!(input.forward_axis(), 0.0);
        assert_eq!(input.right_axis(), 0.0);
        // Keys are held even though the axes cancel
        assert!(input.wants_movement());
    }

    #[test]
    fn test_idle_has_no_intent() {
        let input = InputState::idle();
        assert_eq!(input.forward_axis(), 0.0);
        assert_eq!(input.right_axis(), 0.0);
        assert!(!input.wants_movement());
        assert_eq!(input.look_delta, Vec2::zeros());
    }
}
