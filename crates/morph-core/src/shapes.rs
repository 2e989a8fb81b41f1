//! Closed-form target geometries for the point cloud.
//!
//! Every formula maps `(index, count, time, seed)` to a position and nothing
//! else: no previous position, no hidden state. Where a shape needs extra
//! per-point randomness beyond the seed, it is derived from a fixed integer
//! hash of the index so repeated calls agree exactly.

use crate::color::Rgb;
use crate::error::ParseError;
use crate::motion::{MotionProfile, Repulsion, Spin};
use glam::Vec3;
use std::f32::consts::{PI, TAU};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    LiquidSphere,
    Tornado,
    Helix,
    GalaxySpiral,
    LatticeRain,
    VortexTunnel,
    QuantumGrid,
    CyberSphere,
    WarpTunnel,
    DnaHelix,
    HyperCube,
    NeuralNexus,
    CrystallineFortress,
    ChronosHourglass,
    EventHorizon,
}

/// Small per-point wobble layered on top of a shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shimmer {
    pub amplitude: f32,
    pub rate_x: f32,
    pub rate_y: f32,
}

// Wobble families, one per page the shapes were tuned on.
const SHIMMER_HOME: Shimmer = Shimmer {
    amplitude: 0.1,
    rate_x: 1.0,
    rate_y: 1.0,
};
const SHIMMER_ABOUT: Shimmer = Shimmer {
    amplitude: 0.05,
    rate_x: 2.0,
    rate_y: 1.5,
};
const SHIMMER_SERVICES: Shimmer = Shimmer {
    amplitude: 0.05,
    rate_x: 3.0,
    rate_y: 2.0,
};

impl ShapeKind {
    pub const ALL: [ShapeKind; 15] = [
        ShapeKind::LiquidSphere,
        ShapeKind::Tornado,
        ShapeKind::Helix,
        ShapeKind::GalaxySpiral,
        ShapeKind::LatticeRain,
        ShapeKind::VortexTunnel,
        ShapeKind::QuantumGrid,
        ShapeKind::CyberSphere,
        ShapeKind::WarpTunnel,
        ShapeKind::DnaHelix,
        ShapeKind::HyperCube,
        ShapeKind::NeuralNexus,
        ShapeKind::CrystallineFortress,
        ShapeKind::ChronosHourglass,
        ShapeKind::EventHorizon,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            ShapeKind::LiquidSphere => "liquid-sphere",
            ShapeKind::Tornado => "tornado",
            ShapeKind::Helix => "helix",
            ShapeKind::GalaxySpiral => "galaxy-spiral",
            ShapeKind::LatticeRain => "lattice-rain",
            ShapeKind::VortexTunnel => "vortex-tunnel",
            ShapeKind::QuantumGrid => "quantum-grid",
            ShapeKind::CyberSphere => "cyber-sphere",
            ShapeKind::WarpTunnel => "warp-tunnel",
            ShapeKind::DnaHelix => "dna-helix",
            ShapeKind::HyperCube => "hyper-cube",
            ShapeKind::NeuralNexus => "neural-nexus",
            ShapeKind::CrystallineFortress => "crystalline-fortress",
            ShapeKind::ChronosHourglass => "chronos-hourglass",
            ShapeKind::EventHorizon => "event-horizon",
        }
    }

    /// Wobble applied after the base formula, if any.
    pub const fn shimmer(self) -> Option<Shimmer> {
        match self {
            ShapeKind::LiquidSphere
            | ShapeKind::Tornado
            | ShapeKind::Helix
            | ShapeKind::VortexTunnel => Some(SHIMMER_HOME),
            ShapeKind::NeuralNexus | ShapeKind::ChronosHourglass | ShapeKind::EventHorizon => {
                Some(SHIMMER_ABOUT)
            }
            ShapeKind::DnaHelix | ShapeKind::CyberSphere | ShapeKind::WarpTunnel => {
                Some(SHIMMER_SERVICES)
            }
            ShapeKind::GalaxySpiral
            | ShapeKind::LatticeRain
            | ShapeKind::HyperCube
            | ShapeKind::QuantumGrid
            | ShapeKind::CrystallineFortress => None,
        }
    }

    pub fn motion(self) -> MotionProfile {
        match self {
            ShapeKind::LiquidSphere
            | ShapeKind::Tornado
            | ShapeKind::Helix
            | ShapeKind::GalaxySpiral => MotionProfile::default(),
            ShapeKind::LatticeRain => MotionProfile {
                spin: Spin::Still,
                ..MotionProfile::default()
            },
            ShapeKind::HyperCube => MotionProfile {
                spin: Spin::Tumble,
                ..MotionProfile::default()
            },
            ShapeKind::VortexTunnel => MotionProfile {
                speed_base: 0.04,
                speed_jitter: 0.0,
                repulsion: Repulsion {
                    radius: 4.0,
                    strength: 0.01,
                    depth_gate: None,
                },
                spin: Spin::Roll {
                    per_frame: -0.002,
                    yaw_per_unit: Some(0.03),
                },
            },
            ShapeKind::NeuralNexus
            | ShapeKind::CrystallineFortress
            | ShapeKind::ChronosHourglass
            | ShapeKind::EventHorizon => MotionProfile {
                speed_base: 0.03,
                speed_jitter: 0.02,
                repulsion: Repulsion {
                    radius: 3.5,
                    strength: 0.12,
                    depth_gate: Some(5.0),
                },
                spin: Spin::Drift {
                    roll_rate: if self == ShapeKind::EventHorizon {
                        0.02
                    } else {
                        0.0
                    },
                    roll_ease: 0.05,
                },
            },
            ShapeKind::QuantumGrid
            | ShapeKind::DnaHelix
            | ShapeKind::CyberSphere
            | ShapeKind::WarpTunnel => MotionProfile {
                speed_base: 0.03,
                speed_jitter: 0.01,
                repulsion: Repulsion {
                    radius: 4.0,
                    strength: 0.1,
                    depth_gate: Some(10.0),
                },
                spin: if self == ShapeKind::WarpTunnel {
                    Spin::Roll {
                        per_frame: 0.02,
                        yaw_per_unit: None,
                    }
                } else {
                    Spin::Drift {
                        roll_rate: 0.0,
                        roll_ease: 0.1,
                    }
                },
            },
        }
    }

    /// Target position of point `index` out of `count` at `time` seconds,
    /// with the shape's usual shimmer.
    pub fn target(self, index: usize, count: usize, time: f32, seed: f32) -> Vec3 {
        shimmered(self.base_target(index, count, time, seed), self.shimmer(), time, seed)
    }

    /// Target position without any shimmer.
    pub fn base_target(self, index: usize, count: usize, time: f32, seed: f32) -> Vec3 {
        let n = count.max(1);
        match self {
            ShapeKind::LiquidSphere => liquid_sphere(index, n, time),
            ShapeKind::Tornado => tornado(index, n, time),
            ShapeKind::Helix => helix(index, n, time, seed),
            ShapeKind::GalaxySpiral => galaxy_spiral(index, time),
            ShapeKind::LatticeRain => lattice_rain(index, time),
            ShapeKind::VortexTunnel => vortex_tunnel(index, n, time),
            ShapeKind::QuantumGrid => quantum_grid(index, time, seed),
            ShapeKind::CyberSphere => cyber_sphere(index, n, time),
            ShapeKind::WarpTunnel => warp_tunnel(index, n, time, seed),
            ShapeKind::DnaHelix => dna_helix(index, n, time, seed),
            ShapeKind::HyperCube => hyper_cube(index, time),
            ShapeKind::NeuralNexus => neural_nexus(index, n, time, seed),
            ShapeKind::CrystallineFortress => crystalline_fortress(index, n, seed),
            ShapeKind::ChronosHourglass => chronos_hourglass(index, n, time, seed),
            ShapeKind::EventHorizon => event_horizon(index, n, time, seed),
        }
    }
}

#[inline]
fn shimmered(mut p: Vec3, shimmer: Option<Shimmer>, time: f32, seed: f32) -> Vec3 {
    if let Some(s) = shimmer {
        let phase = seed * 10.0;
        p.x += (time * s.rate_x + phase).sin() * s.amplitude;
        p.y += (time * s.rate_y + phase).cos() * s.amplitude;
    }
    p
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        ShapeKind::ALL
            .into_iter()
            .find(|k| k.name() == wanted)
            .ok_or_else(|| ParseError::UnknownShape(s.to_string()))
    }
}

/// A shape paired with the colour the cloud drifts toward while it is active.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeDescriptor {
    pub kind: ShapeKind,
    pub theme_color: Rgb,
    /// Wobble for this section; starts as the kind's default.
    pub shimmer: Option<Shimmer>,
}

impl ShapeDescriptor {
    pub const fn new(kind: ShapeKind, theme_color: Rgb) -> Self {
        Self {
            kind,
            theme_color,
            shimmer: kind.shimmer(),
        }
    }

    pub const fn with_shimmer(self, shimmer: Option<Shimmer>) -> Self {
        Self { shimmer, ..self }
    }

    #[inline]
    pub fn target_position(&self, index: usize, count: usize, time: f32, seed: f32) -> Vec3 {
        let base = self.kind.base_target(index, count, time, seed);
        shimmered(base, self.shimmer, time, seed)
    }

    #[inline]
    pub fn motion(&self) -> MotionProfile {
        self.kind.motion()
    }
}

// ---------------- formulas ----------------

#[inline]
fn unit(index: usize, count: usize) -> f32 {
    index as f32 / count as f32
}

/// Golden-angle sphere sampling: (phi, theta).
#[inline]
fn fibonacci_angles(index: usize, count: usize) -> (f32, f32) {
    let phi = (-1.0 + 2.0 * index as f32 / count as f32).clamp(-1.0, 1.0).acos();
    let theta = (count as f32 * PI).sqrt() * phi;
    (phi, theta)
}

#[inline]
fn spherical(r: f32, phi: f32, theta: f32) -> Vec3 {
    Vec3::new(
        r * theta.cos() * phi.sin(),
        r * theta.sin() * phi.sin(),
        r * phi.cos(),
    )
}

/// Stable value in \[0, 1) for `(index, salt)`.
#[inline]
pub(crate) fn hash01(index: usize, salt: u32) -> f32 {
    let mut x = (index as u32)
        .wrapping_mul(0x9E37_79B9)
        .wrapping_add(salt.wrapping_mul(0x85EB_CA6B));
    x ^= x >> 16;
    x = x.wrapping_mul(0x7FEB_352D);
    x ^= x >> 15;
    x = x.wrapping_mul(0x846C_A68B);
    x ^= x >> 16;
    (x >> 8) as f32 / (1u32 << 24) as f32
}

fn liquid_sphere(i: usize, n: usize, time: f32) -> Vec3 {
    let (phi, theta) = fibonacci_angles(i, n);
    let r = 3.0 + (phi * 10.0 + time * 2.0).sin() * 0.2 + (theta * 5.0 + time).cos() * 0.2;
    spherical(r, phi, theta)
}

fn tornado(i: usize, n: usize, time: f32) -> Vec3 {
    let t = unit(i, n);
    let h = (t - 0.5) * 16.0;
    let r = 0.5 + h.abs() * 0.5 + (time * 3.0 + h).sin() * 0.2;
    let angle = t * PI * 20.0 + time * 1.5;
    Vec3::new(angle.cos() * r, h, angle.sin() * r)
}

fn helix(i: usize, n: usize, time: f32, seed: f32) -> Vec3 {
    let t = unit(i, n);
    let strand = if i % 2 == 0 { 1.0 } else { -1.0 };
    let y = (t - 0.5) * 20.0;
    let twist = y * 0.5 + time * 0.5;
    let radius = 2.5;
    let mut x = twist.cos() * radius * strand;
    let mut z = twist.sin() * radius * strand;
    if seed > 0.8 {
        x *= seed;
        z *= seed;
    }
    Vec3::new(x, y, z)
}

fn galaxy_spiral(i: usize, time: f32) -> Vec3 {
    let fi = i as f32;
    let r = fi.sqrt() * 0.15;
    let arm = (i % 3) as f32 * (TAU / 3.0);
    let angle = fi * 0.1 + time * 0.1 + arm + r * 2.0;
    let thickness = (2.0 - r * 0.2).max(0.0);
    Vec3::new(
        angle.cos() * r * 1.5,
        (hash01(i, 1) - 0.5) * thickness,
        angle.sin() * r * 1.5,
    )
}

fn lattice_rain(i: usize, time: f32) -> Vec3 {
    const SPACING: f32 = 1.5;
    const COLS: usize = 20;
    let x = ((i % COLS) as f32 - COLS as f32 / 2.0) * SPACING;
    let mut y = (((i / COLS) % 10) as f32 - 5.0) * SPACING;
    let z = ((i / (COLS * 10)) as f32 - 2.0) * SPACING;
    y -= (time * 2.0).rem_euclid(15.0);
    if y < -5.0 {
        y = (y + 5.0).rem_euclid(15.0) - 5.0;
    }
    Vec3::new(x, y, z)
}

fn vortex_tunnel(i: usize, n: usize, time: f32) -> Vec3 {
    let t = unit(i, n);
    let radius = 2.0 + (1.0 - t) * 8.0;
    let angle = t * PI * 20.0 + time * 0.5;
    let mut x = angle.cos() * radius;
    let mut y = angle.sin() * radius;
    let z = (t - 0.5) * 20.0;
    if z > 0.0 {
        x *= 1.0 + (time * 5.0).sin() * 0.05;
        y *= 1.0 + (time * 5.0).cos() * 0.05;
    }
    Vec3::new(x, y, z)
}

fn quantum_grid(i: usize, time: f32, seed: f32) -> Vec3 {
    const COLS: usize = 100;
    const TILT: f32 = 0.2;
    let x = ((i % COLS) as f32 - 50.0) * 0.4;
    let z = ((i / COLS) as f32 - 50.0) * 0.4;
    let mut y = (x * 0.2 + time).sin() * 1.5 + (z * 0.2 + time).cos() * 1.5;
    if seed > 0.9 {
        y += 5.0 + (time + seed * 10.0).sin();
    }
    let (s, c) = TILT.sin_cos();
    let y_tilt = y * c - z * s;
    let z_tilt = y * s + z * c;
    Vec3::new(x, y_tilt - 5.0, z_tilt)
}

fn cyber_sphere(i: usize, n: usize, time: f32) -> Vec3 {
    let p = if i % 10 == 0 {
        // orbital ring
        let ring_angle = unit(i, n) * PI * 20.0 + time;
        let r = 8.0 + hash01(i, 2);
        Vec3::new(
            ring_angle.cos() * r,
            (hash01(i, 3) - 0.5) * 0.5,
            ring_angle.sin() * r,
        )
    } else {
        let (phi, theta) = fibonacci_angles(i, n);
        spherical(5.0, phi, theta)
    };
    let (s, c) = (time * 0.2).sin_cos();
    Vec3::new(p.x * c - p.z * s, p.y, p.x * s + p.z * c)
}

fn warp_tunnel(i: usize, n: usize, time: f32, seed: f32) -> Vec3 {
    let radius = 2.0 + seed.powi(3) * 15.0;
    let angle = unit(i, n) * PI * 20.0 + time * 3.0;
    let depth = seed * 60.0 - 30.0;
    Vec3::new(
        angle.cos() * radius,
        angle.sin() * radius,
        depth + (time * 8.0).sin() * 5.0,
    )
}

fn dna_helix(i: usize, n: usize, time: f32, seed: f32) -> Vec3 {
    let strand_offset = (i % 2) as f32 * PI;
    let height = (unit(i, n) - 0.5) * 25.0;
    let radius = 4.0;
    let twist = height * 0.5 + time;
    let mut x = (twist + strand_offset).cos() * radius;
    let mut z = (twist + strand_offset).sin() * radius;
    if seed > 0.7 {
        x *= seed;
        z *= seed;
    }
    Vec3::new(x, height, z)
}

fn hyper_cube(i: usize, time: f32) -> Vec3 {
    const SIDE: f32 = 6.0;
    let k = (i % 20) as f32;
    let l = ((i / 20) % 20) as f32;
    let m = (i / 400) as f32;
    let mut p = Vec3::new(
        (k / 20.0 - 0.5) * SIDE,
        (l / 20.0 - 0.5) * SIDE,
        (m / 20.0 - 0.5) * SIDE,
    );
    if hash01(i, 4) > 0.98 {
        p.y += (time * 10.0).sin() * 2.0;
    }
    p
}

fn neural_nexus(i: usize, n: usize, time: f32, seed: f32) -> Vec3 {
    let (phi, theta) = fibonacci_angles(i, n);
    let r = 4.0 + (phi * 20.0 + time).sin() * 0.2 + (theta * 10.0).cos() * 0.2;
    let mut p = spherical(r, phi, theta);
    if seed > 0.95 {
        p.x *= 1.4 + (time * 2.0).sin() * 0.2;
        p.y *= 1.4 + (time * 2.0).cos() * 0.2;
        p.z *= 1.4;
    }
    p
}

fn crystalline_fortress(i: usize, n: usize, seed: f32) -> Vec3 {
    let angle = unit(i, n) * TAU;
    let h = (seed - 0.5) * 9.0;
    let w = (1.0 - h.abs() / 4.5) * 5.0;
    Vec3::new((angle * 4.0).cos() * w, h, (angle * 4.0).sin() * w)
}

fn chronos_hourglass(i: usize, n: usize, time: f32, seed: f32) -> Vec3 {
    let flow = (time * 0.5 + seed).rem_euclid(2.0);
    let flow_y = 6.0 - flow * 6.0;
    let width = flow_y.abs() * 0.7 + 0.1;
    let spiral = unit(i, n) * PI * 20.0 + time;
    let y = if i % 2 == 0 { -flow_y } else { flow_y };
    Vec3::new(spiral.cos() * width, y, spiral.sin() * width)
}

fn event_horizon(i: usize, n: usize, time: f32, seed: f32) -> Vec3 {
    let radius = 1.5 + seed * seed * 9.0;
    let angle = unit(i, n) * PI * 15.0 + time * 2.0;
    let depth = seed * 40.0 - 20.0;
    Vec3::new(
        angle.cos() * radius,
        angle.sin() * radius,
        depth + (time * 5.0).sin() * 2.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_parse_back() {
        for k in ShapeKind::ALL {
            assert_eq!(k.name().parse::<ShapeKind>(), Ok(k));
        }
        assert_eq!("VORTEX_TUNNEL".parse::<ShapeKind>(), Ok(ShapeKind::VortexTunnel));
        assert!(matches!(
            "teapot".parse::<ShapeKind>(),
            Err(ParseError::UnknownShape(_))
        ));
    }

    #[test]
    fn hash01_is_stable_and_in_range() {
        for i in 0..2000 {
            let h = hash01(i, 7);
            assert!((0.0..1.0).contains(&h));
            assert_eq!(h, hash01(i, 7));
        }
    }

    #[test]
    fn liquid_sphere_sits_near_radius_three() {
        let n = 1000;
        for i in 0..n {
            let p = ShapeKind::LiquidSphere.target(i, n, 0.0, 0.5);
            // shimmer adds at most ~0.14 in the plane
            let r = p.length();
            assert!(r > 2.4 && r < 3.6, "radius {r} at {i}");
        }
    }

    #[test]
    fn lattice_rain_wraps_into_band() {
        for step in 0..200 {
            let t = step as f32 * 0.37;
            for i in 0..400 {
                let p = ShapeKind::LatticeRain.target(i, 400, t, 0.3);
                assert!(p.y >= -5.0 && p.y < 10.0 + 1e-3, "y={} t={t}", p.y);
            }
        }
    }

    #[test]
    fn helix_strands_mirror() {
        let n = 100;
        let a = ShapeKind::Helix.target(10, n, 1.0, 0.1);
        let b = ShapeKind::Helix.target(11, n, 1.0, 0.1);
        // neighbouring indices sit on opposite strands
        assert!(a.x * b.x <= 0.05 || a.z * b.z <= 0.05);
    }

    #[test]
    fn calm_descriptor_follows_the_bare_formula() {
        let calm = ShapeDescriptor::new(ShapeKind::VortexTunnel, Rgb::from_hex(0x00f0ff))
            .with_shimmer(None);
        let usual = ShapeDescriptor::new(ShapeKind::VortexTunnel, Rgb::from_hex(0x00f0ff));
        assert_eq!(usual.shimmer, ShapeKind::VortexTunnel.shimmer());
        for i in [0, 17, 999] {
            let bare = ShapeKind::VortexTunnel.base_target(i, 1000, 2.5, 0.3);
            assert_eq!(calm.target_position(i, 1000, 2.5, 0.3), bare);
            assert_eq!(
                usual.target_position(i, 1000, 2.5, 0.3),
                ShapeKind::VortexTunnel.target(i, 1000, 2.5, 0.3)
            );
            assert_ne!(usual.target_position(i, 1000, 2.5, 0.3), bare);
        }
    }

    #[test]
    fn zero_count_does_not_divide_by_zero() {
        for k in ShapeKind::ALL {
            let p = k.target(0, 0, 1.0, 0.5);
            assert!(p.is_finite(), "{k} produced {p:?}");
        }
    }
}
