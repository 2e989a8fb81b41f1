//! Per-shape motion tuning: how fast points settle, how they react to the
//! pointer and how the whole cloud turns while a shape is active.

use crate::constants::{
    DRIFT_YAW_PER_SEC, TUMBLE_PITCH_AMPLITUDE, TUMBLE_PITCH_RATE, TUMBLE_YAW_PER_FRAME,
};
use glam::{Vec2, Vec3};
use std::f32::consts::{PI, TAU};

/// Planar push away from the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Repulsion {
    /// Distance below which a point is pushed.
    pub radius: f32,
    /// Displacement per unit of penetration `(radius - d)`.
    pub strength: f32,
    /// Only points with `|z|` below this are affected.
    pub depth_gate: Option<f32>,
}

impl Repulsion {
    /// Nudge `pos` away from `pointer` in the x/y plane. Points outside the
    /// radius or the depth gate are left untouched.
    #[inline]
    pub fn apply(&self, pos: &mut Vec3, pointer: Vec2) {
        if let Some(gate) = self.depth_gate {
            if pos.z.abs() >= gate {
                return;
            }
        }
        let delta = pos.truncate() - pointer;
        let dist = delta.length();
        if dist >= self.radius {
            return;
        }
        let dir = delta.try_normalize().unwrap_or(Vec2::X);
        let push = dir * (self.radius - dist) * self.strength;
        pos.x += push.x;
        pos.y += push.y;
    }
}

impl Default for Repulsion {
    fn default() -> Self {
        Self {
            radius: 4.0,
            strength: 0.05,
            depth_gate: None,
        }
    }
}

/// Whole-cloud rotation behaviour for a shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Spin {
    /// Yaw follows `time * DRIFT_YAW_PER_SEC`, pitch is level and roll eases
    /// toward `roll_rate * time` by `roll_ease` per frame.
    Drift { roll_rate: f32, roll_ease: f32 },
    /// Yaw accumulates slowly while the cloud nods on its x axis.
    Tumble,
    /// Roll accumulates `per_frame`; yaw optionally tracks the pointer's x.
    Roll {
        per_frame: f32,
        yaw_per_unit: Option<f32>,
    },
    /// Held square to the camera.
    Still,
}

impl Spin {
    /// Advance the Euler angles (x, y, z in radians) by one frame.
    pub fn step(&self, rotation: &mut Vec3, time: f32, pointer: Option<Vec2>) {
        match *self {
            Spin::Drift {
                roll_rate,
                roll_ease,
            } => {
                rotation.x = 0.0;
                rotation.y = wrap_angle(time * DRIFT_YAW_PER_SEC);
                let target = roll_rate * time;
                rotation.z += (target - rotation.z) * roll_ease.clamp(0.0, 1.0);
            }
            Spin::Tumble => {
                rotation.y = wrap_angle(rotation.y + TUMBLE_YAW_PER_FRAME);
                rotation.x = (time * TUMBLE_PITCH_RATE).sin() * TUMBLE_PITCH_AMPLITUDE;
            }
            Spin::Roll {
                per_frame,
                yaw_per_unit,
            } => {
                rotation.z = wrap_angle(rotation.z + per_frame);
                if let (Some(k), Some(p)) = (yaw_per_unit, pointer) {
                    rotation.y = p.x * k;
                }
            }
            Spin::Still => *rotation = Vec3::ZERO,
        }
    }
}

/// Settling speed, pointer response and spin for one shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionProfile {
    pub speed_base: f32,
    pub speed_jitter: f32,
    pub repulsion: Repulsion,
    pub spin: Spin,
}

impl MotionProfile {
    /// Fraction of the remaining distance a point with `seed` covers per frame.
    #[inline]
    pub fn speed(&self, seed: f32) -> f32 {
        (self.speed_base + seed * self.speed_jitter).clamp(0.0, 1.0)
    }

    /// Upper bound of [`speed`](Self::speed) over all seeds in \[0, 1).
    pub fn max_speed(&self) -> f32 {
        (self.speed_base + self.speed_jitter.max(0.0)).clamp(0.0, 1.0)
    }
}

impl Default for MotionProfile {
    fn default() -> Self {
        Self {
            speed_base: 0.02,
            speed_jitter: 0.01,
            repulsion: Repulsion::default(),
            spin: Spin::Drift {
                roll_rate: 0.0,
                roll_ease: 1.0,
            },
        }
    }
}

/// Wrap into (-PI, PI].
#[inline]
fn wrap_angle(a: f32) -> f32 {
    let w = (a + PI).rem_euclid(TAU) - PI;
    if w <= -PI {
        w + TAU
    } else {
        w
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repulsion_pushes_away_inside_radius() {
        let r = Repulsion::default();
        let mut p = Vec3::new(1.0, 0.0, 0.0);
        r.apply(&mut p, Vec2::ZERO);
        assert!(p.x > 1.0);
        assert_eq!(p.y, 0.0);
    }

    #[test]
    fn repulsion_ignores_points_beyond_radius_or_gate() {
        let r = Repulsion {
            depth_gate: Some(5.0),
            ..Repulsion::default()
        };
        let mut far = Vec3::new(10.0, 0.0, 0.0);
        r.apply(&mut far, Vec2::ZERO);
        assert_eq!(far, Vec3::new(10.0, 0.0, 0.0));

        let mut deep = Vec3::new(0.5, 0.5, 8.0);
        r.apply(&mut deep, Vec2::ZERO);
        assert_eq!(deep, Vec3::new(0.5, 0.5, 8.0));
    }

    #[test]
    fn repulsion_at_pointer_pushes_along_x() {
        let r = Repulsion::default();
        let mut p = Vec3::new(2.0, 3.0, 0.0);
        r.apply(&mut p, Vec2::new(2.0, 3.0));
        assert!((p.x - (2.0 + r.radius * r.strength)).abs() < 1e-6);
        assert_eq!(p.y, 3.0);
    }

    #[test]
    fn spin_still_resets_and_roll_wraps() {
        let mut rot = Vec3::new(0.3, 0.2, 0.1);
        Spin::Still.step(&mut rot, 4.0, None);
        assert_eq!(rot, Vec3::ZERO);

        let roll = Spin::Roll {
            per_frame: 0.5,
            yaw_per_unit: Some(0.1),
        };
        for _ in 0..100 {
            roll.step(&mut rot, 0.0, Some(Vec2::new(2.0, 0.0)));
            assert!(rot.z > -PI && rot.z <= PI);
        }
        assert!((rot.y - 0.2).abs() < 1e-6);
    }

    #[test]
    fn drift_eases_roll_toward_target() {
        let spin = Spin::Drift {
            roll_rate: 0.0,
            roll_ease: 0.1,
        };
        let mut rot = Vec3::new(0.0, 0.0, 1.0);
        spin.step(&mut rot, 2.0, None);
        assert!((rot.z - 0.9).abs() < 1e-6);
        assert!((rot.y - 2.0 * DRIFT_YAW_PER_SEC).abs() < 1e-6);
    }
}
