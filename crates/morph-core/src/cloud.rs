//! The point cloud and its per-frame integration.
//!
//! Each frame every point chases the active shape's target with an
//! exponential lag, then gets pushed out of the pointer's way. The cloud's
//! colour drifts toward the shape's theme colour and its rotation follows the
//! shape's [`Spin`](crate::motion::Spin).

use crate::color::Rgb;
use crate::constants::{COLOR_LERP, INITIAL_COLOR};
use crate::motion::MotionProfile;
use crate::shapes::{ShapeDescriptor, ShapeKind};
use glam::{EulerRot, Mat4, Vec2, Vec3};
use rand::prelude::*;

pub struct PointCloud {
    points: Vec<Vec3>,
    seeds: Vec<f32>,
    color: Rgb,
    rotation: Vec3,
    active: Option<ShapeKind>,
}

/// Scalar inputs shared by every point during one frame.
struct FrameInputs {
    time: f32,
    count: usize,
    shape: ShapeDescriptor,
    motion: MotionProfile,
    pointer: Option<Vec2>,
}

impl PointCloud {
    /// Scatter `count` points uniformly in a cube of edge `scatter_extent`.
    pub fn new(count: usize, scatter_extent: f32) -> Self {
        Self::with_rng(count, scatter_extent, &mut StdRng::from_entropy())
    }

    /// Same as [`new`](Self::new) with a reproducible scatter and seeds.
    pub fn with_seed(count: usize, scatter_extent: f32, seed: u64) -> Self {
        Self::with_rng(count, scatter_extent, &mut StdRng::seed_from_u64(seed))
    }

    fn with_rng<R: Rng>(count: usize, scatter_extent: f32, rng: &mut R) -> Self {
        let half = if scatter_extent.is_finite() {
            scatter_extent.max(0.0) * 0.5
        } else {
            0.0
        };
        let coord = |rng: &mut R| {
            if half > 0.0 {
                rng.gen_range(-half..=half)
            } else {
                0.0
            }
        };
        let points = (0..count)
            .map(|_| Vec3::new(coord(rng), coord(rng), coord(rng)))
            .collect::<Vec<_>>();
        let seeds = (0..count).map(|_| rng.gen::<f32>()).collect::<Vec<_>>();
        log::debug!("[cloud] created count={} extent={:.1}", count, scatter_extent);
        Self {
            points,
            seeds,
            color: Rgb::from(INITIAL_COLOR),
            rotation: Vec3::ZERO,
            active: None,
        }
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Flat `x, y, z` view of the live buffer (`3 * count` floats).
    #[inline]
    pub fn positions(&self) -> &[f32] {
        bytemuck::cast_slice(&self.points)
    }

    #[inline]
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    #[inline]
    pub fn seeds(&self) -> &[f32] {
        &self.seeds
    }

    #[inline]
    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Euler angles (x, y, z) of the whole cloud in radians.
    #[inline]
    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        )
    }

    /// Shape used by the most recent successful [`advance`](Self::advance).
    pub fn active_shape(&self) -> Option<ShapeKind> {
        self.active
    }

    /// Target of point `index` under `shape` at `time`, using its own seed.
    pub fn target_of(&self, index: usize, shape: &ShapeDescriptor, time: f32) -> Option<Vec3> {
        self.seeds
            .get(index)
            .map(|&seed| shape.target_position(index, self.count(), time, seed))
    }

    /// Advance one frame.
    ///
    /// `pointer` is in the cloud's x/y plane. A non-finite `elapsed` skips the
    /// frame, as does an empty cloud; a non-finite pointer only disables
    /// repulsion for this frame. Points whose target overflows at an extreme
    /// `elapsed` hold still for that frame.
    pub fn advance(&mut self, elapsed: f32, shape: &ShapeDescriptor, pointer: Vec2) {
        if !elapsed.is_finite() {
            log::trace!("[cloud] skipped frame, elapsed={}", elapsed);
            return;
        }
        if self.points.is_empty() {
            return;
        }
        if self.active != Some(shape.kind) {
            log::debug!(
                "[cloud] shape -> {} color={}",
                shape.kind,
                shape.theme_color
            );
            self.active = Some(shape.kind);
        }
        let pointer = pointer.is_finite().then_some(pointer);
        let inputs = FrameInputs {
            time: elapsed,
            count: self.points.len(),
            shape: *shape,
            motion: shape.motion(),
            pointer,
        };

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            self.points
                .par_iter_mut()
                .zip(self.seeds.par_iter())
                .enumerate()
                .for_each(|(i, (p, &seed))| step_point(p, i, seed, &inputs));
        }
        #[cfg(not(feature = "parallel"))]
        for (i, (p, &seed)) in self.points.iter_mut().zip(&self.seeds).enumerate() {
            step_point(p, i, seed, &inputs);
        }

        self.color.lerp_toward(shape.theme_color, COLOR_LERP);
        inputs
            .motion
            .spin
            .step(&mut self.rotation, elapsed, inputs.pointer);
    }
}

#[inline]
fn step_point(pos: &mut Vec3, index: usize, seed: f32, f: &FrameInputs) {
    let target = f.shape.target_position(index, f.count, f.time, seed);
    if !target.is_finite() {
        return;
    }
    *pos += (target - *pos) * f.motion.speed(seed);
    if let Some(pointer) = f.pointer {
        f.motion.repulsion.apply(pos, pointer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_SCATTER_EXTENT;

    #[test]
    fn scatter_stays_inside_cube() {
        let cloud = PointCloud::with_seed(2000, 10.0, 3);
        assert!(cloud
            .points()
            .iter()
            .all(|p| p.abs().max_element() <= 5.0));
        assert!(cloud.seeds().iter().all(|s| (0.0..1.0).contains(s)));
    }

    #[test]
    fn same_seed_same_cloud() {
        let a = PointCloud::with_seed(64, DEFAULT_SCATTER_EXTENT, 11);
        let b = PointCloud::with_seed(64, DEFAULT_SCATTER_EXTENT, 11);
        assert_eq!(a.positions(), b.positions());
        assert_eq!(a.seeds(), b.seeds());
    }

    #[test]
    fn bad_extent_collapses_to_origin() {
        let cloud = PointCloud::with_seed(8, f32::NAN, 1);
        assert!(cloud.points().iter().all(|p| *p == Vec3::ZERO));
        let cloud = PointCloud::with_seed(8, -4.0, 1);
        assert!(cloud.points().iter().all(|p| *p == Vec3::ZERO));
    }

    #[test]
    fn advance_records_active_shape() {
        let mut cloud = PointCloud::with_seed(16, 4.0, 5);
        assert_eq!(cloud.active_shape(), None);
        let shape = ShapeDescriptor::new(ShapeKind::Tornado, Rgb::from_hex(0xff0055));
        cloud.advance(0.5, &shape, Vec2::splat(1e6));
        assert_eq!(cloud.active_shape(), Some(ShapeKind::Tornado));
    }
}
