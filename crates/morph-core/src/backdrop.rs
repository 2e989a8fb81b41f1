//! Scenery drawn behind the cloud and the per-page post-processing look.
//!
//! Neither layer reacts to scroll or the pointer: stars are scattered once on
//! a thick shell around the camera, sparkles drift in a small box and bob as
//! a group.

use crate::color::Rgb;
use crate::constants::{
    BLOOM_STRENGTH, BLOOM_THRESHOLD, GRAIN_OPACITY, VIGNETTE_DARKNESS, VIGNETTE_OFFSET,
};
use glam::{EulerRot, Mat4, Vec3};
use rand::prelude::*;
use std::f32::consts::TAU;

/// Bloom, vignette, grain and chromatic aberration for one page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PostLook {
    pub bloom_threshold: f32,
    pub bloom_strength: f32,
    pub vignette_offset: f32,
    pub vignette_darkness: f32,
    pub grain: f32,
    /// Red/blue split in uv units; zero disables it.
    pub chromatic_offset: [f32; 2],
}

impl PostLook {
    pub const LANDING: PostLook = PostLook {
        bloom_threshold: BLOOM_THRESHOLD,
        bloom_strength: BLOOM_STRENGTH,
        vignette_offset: VIGNETTE_OFFSET,
        vignette_darkness: VIGNETTE_DARKNESS,
        grain: GRAIN_OPACITY,
        chromatic_offset: [0.0, 0.0],
    };

    pub const fn with_threshold(self, bloom_threshold: f32) -> Self {
        Self {
            bloom_threshold,
            ..self
        }
    }

    pub const fn with_darkness(self, vignette_darkness: f32) -> Self {
        Self {
            vignette_darkness,
            ..self
        }
    }

    pub const fn with_chromatic(self, x: f32, y: f32) -> Self {
        Self {
            chromatic_offset: [x, y],
            ..self
        }
    }
}

impl Default for PostLook {
    fn default() -> Self {
        Self::LANDING
    }
}

/// Far white stars on a shell `radius..radius + depth` around the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarField {
    pub count: usize,
    pub radius: f32,
    pub depth: f32,
    /// Twinkle rate multiplier.
    pub speed: f32,
}

impl StarField {
    pub const fn new(count: usize, radius: f32, depth: f32) -> Self {
        Self {
            count,
            radius,
            depth,
            speed: 1.0,
        }
    }

    /// Star positions. The shell radius starts at `radius + depth` and
    /// shrinks by a random fraction of `depth / count` per star, so the
    /// field thins toward the inner edge.
    pub fn scatter(&self, seed: u64) -> Vec<Vec3> {
        let mut rng = StdRng::seed_from_u64(seed);
        let step = self.depth / self.count.max(1) as f32;
        let mut r = self.radius + self.depth;
        (0..self.count)
            .map(|_| {
                r -= step * rng.gen::<f32>();
                let phi = (1.0 - rng.gen::<f32>() * 2.0).clamp(-1.0, 1.0).acos();
                let theta = rng.gen::<f32>() * TAU;
                Vec3::new(
                    r * phi.sin() * theta.sin(),
                    r * phi.cos(),
                    r * phi.sin() * theta.cos(),
                )
            })
            .collect()
    }

    /// Sprite scale for `time`, oscillating in \[2/3, 4/3\].
    pub fn twinkle(&self, time: f32) -> f32 {
        if !time.is_finite() {
            return 1.0;
        }
        (3.0 + (time * self.speed + 100.0).sin()) / 3.0
    }
}

/// Small glints floating in a cube of edge `scale` around the cloud.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SparkleField {
    pub count: usize,
    pub scale: f32,
    pub speed: f32,
    pub opacity: f32,
    pub color: Rgb,
}

impl SparkleField {
    pub const fn new(count: usize, scale: f32, speed: f32, opacity: f32) -> Self {
        Self {
            count,
            scale,
            speed,
            opacity,
            color: Rgb::WHITE,
        }
    }
}

// Group float: bob and sway like a buoy.
const FLOAT_SPEED: f32 = 2.0;
const FLOAT_ROTATION: f32 = 0.5;
const FLOAT_HEIGHT: f32 = 0.1;

/// Live sparkle positions for one page.
pub struct Sparkles {
    field: SparkleField,
    base: Vec<Vec3>,
    live: Vec<Vec3>,
}

impl Sparkles {
    pub fn new(field: SparkleField, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let half = if field.scale.is_finite() {
            field.scale.max(0.0) * 0.5
        } else {
            0.0
        };
        let mut coord = || (0.5 - rng.gen::<f32>()) * 2.0 * half;
        let base: Vec<Vec3> = (0..field.count)
            .map(|_| Vec3::new(coord(), coord(), coord()))
            .collect();
        Self {
            field,
            live: base.clone(),
            base,
        }
    }

    #[inline]
    pub fn field(&self) -> &SparkleField {
        &self.field
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.live.len()
    }

    /// Flat `x, y, z` view, `3 * count` floats.
    #[inline]
    pub fn positions(&self) -> &[f32] {
        bytemuck::cast_slice(&self.live)
    }

    /// Move every glint along its own small loop. Non-finite time is ignored.
    pub fn update(&mut self, time: f32) {
        if !time.is_finite() {
            return;
        }
        let speed = self.field.speed;
        for (live, base) in self.live.iter_mut().zip(&self.base) {
            let phase = time * speed + base.x * 100.0;
            let (s, c) = phase.sin_cos();
            if !(s.is_finite() && c.is_finite()) {
                continue;
            }
            *live = *base + Vec3::new(c, s, c) * 0.2;
        }
    }

    /// Whole-group sway and bob at `time`.
    pub fn model_matrix(&self, time: f32) -> Mat4 {
        if !time.is_finite() {
            return Mat4::IDENTITY;
        }
        let t = time / 4.0 * FLOAT_SPEED;
        let (s, c) = t.sin_cos();
        let rotation = Mat4::from_euler(
            EulerRot::XYZ,
            c / 8.0 * FLOAT_ROTATION,
            s / 8.0 * FLOAT_ROTATION,
            s / 20.0 * FLOAT_ROTATION,
        );
        Mat4::from_translation(Vec3::new(0.0, s * FLOAT_HEIGHT, 0.0)) * rotation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_fill_the_shell() {
        let field = StarField::new(5000, 100.0, 50.0);
        let stars = field.scatter(1);
        assert_eq!(stars.len(), 5000);
        for p in &stars {
            let r = p.length();
            assert!(r >= 100.0 - 1e-2 && r <= 150.0 + 1e-2, "r={r}");
        }
        assert_eq!(stars, field.scatter(1));
    }

    #[test]
    fn twinkle_stays_in_band() {
        let field = StarField::new(10, 100.0, 50.0);
        for i in 0..500 {
            let k = field.twinkle(i as f32 * 0.1);
            assert!((2.0 / 3.0 - 1e-6..=4.0 / 3.0 + 1e-6).contains(&k));
        }
        assert_eq!(field.twinkle(f32::NAN), 1.0);
    }

    #[test]
    fn sparkles_stay_near_their_box() {
        let mut sparkles = Sparkles::new(SparkleField::new(300, 12.0, 0.4, 0.4), 2);
        assert_eq!(sparkles.positions().len(), 900);
        for step in 0..100 {
            sparkles.update(step as f32 * 0.05);
            for v in sparkles.positions() {
                assert!(v.abs() <= 6.0 + 0.2 + 1e-4);
            }
        }
        let before = sparkles.positions().to_vec();
        sparkles.update(f32::NAN);
        assert_eq!(sparkles.positions(), &before[..]);
        assert!(sparkles.model_matrix(3.0).is_finite());
    }
}
