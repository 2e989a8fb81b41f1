//! Camera shared by the web and native hosts.
//!
//! Both hosts look down -Z at the origin from a fixed eye. Pointer repulsion
//! works in the z = 0 plane, so the camera also knows how large that plane is
//! on screen.

use crate::constants::{camera_eye, CAMERA_FOVY_DEG, CAMERA_ZFAR, CAMERA_ZNEAR};
use glam::{Mat4, Vec2, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(aspect: f32) -> Self {
        Self {
            eye: camera_eye(),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: sane_aspect(aspect),
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.aspect = sane_aspect(width as f32 / height.max(1) as f32);
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Width and height of the visible region of the plane through `target`.
    pub fn visible_extent_at_origin(&self) -> Vec2 {
        let distance = (self.eye - self.target).length();
        let height = 2.0 * distance * (self.fovy_radians * 0.5).tan();
        Vec2::new(height * self.aspect, height)
    }

    /// Map normalised device coordinates (x right, y up, both in \[-1, 1\])
    /// onto the target plane.
    pub fn ndc_to_plane(&self, ndc: Vec2) -> Vec2 {
        ndc * self.visible_extent_at_origin() * 0.5
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(16.0 / 9.0)
    }
}

#[inline]
fn sane_aspect(aspect: f32) -> f32 {
    if aspect.is_finite() && aspect > 0.0 {
        aspect
    } else {
        1.0
    }
}

/// Convert a canvas-relative uv (origin top-left, \[0, 1\]) into NDC.
#[inline]
pub fn uv_to_ndc(uv: [f32; 2]) -> Vec2 {
    Vec2::new(uv[0] * 2.0 - 1.0, 1.0 - uv[1] * 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plane_extent_matches_fov() {
        let cam = Camera::new(2.0);
        let ext = cam.visible_extent_at_origin();
        let expected_h = 2.0 * cam.eye.z * (cam.fovy_radians * 0.5).tan();
        assert!((ext.y - expected_h).abs() < 1e-4);
        assert!((ext.x - expected_h * 2.0).abs() < 1e-4);
    }

    #[test]
    fn ndc_corners_map_to_plane_edges() {
        let cam = Camera::new(1.5);
        let ext = cam.visible_extent_at_origin();
        let p = cam.ndc_to_plane(Vec2::new(1.0, -1.0));
        assert!((p.x - ext.x * 0.5).abs() < 1e-4);
        assert!((p.y + ext.y * 0.5).abs() < 1e-4);
    }

    #[test]
    fn uv_center_is_ndc_origin() {
        assert_eq!(uv_to_ndc([0.5, 0.5]), Vec2::ZERO);
        assert_eq!(uv_to_ndc([0.0, 0.0]), Vec2::new(-1.0, 1.0));
    }

    #[test]
    fn degenerate_viewport_keeps_aspect_finite() {
        let mut cam = Camera::default();
        cam.set_viewport(0, 0);
        assert!(cam.aspect.is_finite() && cam.aspect > 0.0);
        cam.aspect = f32::NAN;
        assert_eq!(Camera::new(f32::NAN).aspect, 1.0);
    }
}
