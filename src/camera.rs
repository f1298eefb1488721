//! Keyboard-driven camera translation.
//!
//! The orbiting itself belongs to the renderer's camera; this module only
//! tracks which movement keys are held and turns them into a per-frame offset
//! applied to both the eye and the look-at target.

use glam::Vec3;
use rustc_hash::FxHashSet;

/// Camera position restored by a reset.
pub const DEFAULT_EYE: Vec3 = Vec3::new(12.0, 12.0, 12.0);

/// Look-at point restored by a reset.
pub const DEFAULT_TARGET: Vec3 = Vec3::ZERO;

/// Vertical field of view, in radians.
pub const FIELD_OF_VIEW: f32 = std::f32::consts::FRAC_PI_4;

/// One of the six held-key directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CameraMove {
    Forward,
    Back,
    Left,
    Right,
    Up,
    Down,
}

/// Held movement keys and the speed they move at.
#[derive(Clone, Debug)]
pub struct CameraRig {
    held: FxHashSet<CameraMove>,
    /// World units per frame.
    pub speed: f32,
}

impl CameraRig {
    pub fn new(speed: f32) -> Self {
        Self {
            held: FxHashSet::default(),
            speed,
        }
    }

    pub fn press(&mut self, movement: CameraMove) {
        self.held.insert(movement);
    }

    pub fn release(&mut self, movement: CameraMove) {
        self.held.remove(&movement);
    }

    pub fn is_moving(&self) -> bool {
        !self.held.is_empty()
    }

    /// Returns this frame's offset for a camera at `eye` looking at `target`.
    ///
    /// Forward and sideways motion stay parallel to the ground so the view
    /// does not sink into the floor; up and down move along world Y.
    pub fn translation(&self, eye: Vec3, target: Vec3) -> Vec3 {
        let mut forward = target - eye;
        forward.y = 0.0;
        let forward = forward.normalize_or(Vec3::NEG_Z);
        let right = forward.cross(Vec3::Y);

        let direction: Vec3 = self
            .held
            .iter()
            .map(|movement| match movement {
                CameraMove::Forward => forward,
                CameraMove::Back => -forward,
                CameraMove::Left => -right,
                CameraMove::Right => right,
                CameraMove::Up => Vec3::Y,
                CameraMove::Down => Vec3::NEG_Y,
            })
            .sum();

        direction.normalize_or_zero() * self.speed
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new(0.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_rig_does_not_move() {
        let rig = CameraRig::default();
        assert_eq!(rig.translation(DEFAULT_EYE, DEFAULT_TARGET), Vec3::ZERO);
    }

    #[test]
    fn test_forward_moves_toward_target_on_ground() {
        let mut rig = CameraRig::new(1.0);
        rig.press(CameraMove::Forward);
        let offset = rig.translation(Vec3::new(0.0, 10.0, 10.0), Vec3::ZERO);
        assert!(offset.abs_diff_eq(Vec3::NEG_Z, 1e-6), "got {offset}");
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let mut rig = CameraRig::new(1.0);
        rig.press(CameraMove::Left);
        rig.press(CameraMove::Right);
        assert_eq!(rig.translation(DEFAULT_EYE, DEFAULT_TARGET), Vec3::ZERO);
        rig.release(CameraMove::Left);
        assert!(rig.is_moving());
    }

    #[test]
    fn test_vertical_movement() {
        let mut rig = CameraRig::new(0.5);
        rig.press(CameraMove::Up);
        assert_eq!(rig.translation(DEFAULT_EYE, DEFAULT_TARGET), Vec3::new(0.0, 0.5, 0.0));
        rig.release(CameraMove::Up);
        assert!(!rig.is_moving());
    }
}
