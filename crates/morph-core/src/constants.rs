use glam::Vec3;

// Shared tuning constants used by both web and native hosts.

// Point cloud
pub const DEFAULT_POINT_COUNT: usize = 8000;
pub const DEFAULT_SCATTER_EXTENT: f32 = 20.0; // edge of the initial scatter cube

// Colour drift per frame toward the active section colour
pub const COLOR_LERP: f32 = 0.05;
pub const INITIAL_COLOR: [f32; 3] = [1.0, 1.0, 1.0];

// Whole-cloud rotation
pub const DRIFT_YAW_PER_SEC: f32 = 0.05;
pub const TUMBLE_YAW_PER_FRAME: f32 = 0.005;
pub const TUMBLE_PITCH_AMPLITUDE: f32 = 0.2;
pub const TUMBLE_PITCH_RATE: f32 = 0.2;

// Camera
pub const CAMERA_Z: f32 = 5.0;
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Points
pub const POINT_SIZE: f32 = 0.04; // world-space billboard edge
pub const POINT_OPACITY: f32 = 0.8;

// Backdrop sprites
pub const STAR_SIZE: f32 = 0.5; // stars sit 100+ units away
pub const STAR_OPACITY: f32 = 0.7;
pub const SPARKLE_SIZE: f32 = 0.15;

// Post-processing, landing page look
pub const BLOOM_THRESHOLD: f32 = 0.2;
pub const BLOOM_STRENGTH: f32 = 1.5;
pub const VIGNETTE_OFFSET: f32 = 0.1;
pub const VIGNETTE_DARKNESS: f32 = 1.1;
pub const GRAIN_OPACITY: f32 = 0.05;

// Scroll choreography
pub const PIN_PADDING_NARROW: f32 = 64.0;
pub const PIN_PADDING_WIDE: f32 = 160.0;
pub const NARROW_VIEWPORT_PX: f32 = 768.0;
pub const SCRUB_TAU_SEC: f32 = 0.2;
pub const CURSOR_RING_TAU_SEC: f32 = 0.15;

#[inline]
pub fn camera_eye() -> Vec3 {
    Vec3::new(0.0, 0.0, CAMERA_Z)
}
