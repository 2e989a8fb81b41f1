// Engine-level properties of the point cloud, exercised through the public API.

use glam::{Vec2, Vec3};
use morph_core::{PointCloud, Rgb, ShapeDescriptor, ShapeKind};

const FAR: Vec2 = Vec2::splat(1.0e6);

fn shape(kind: ShapeKind) -> ShapeDescriptor {
    ShapeDescriptor::new(kind, Rgb::from_hex(0x00f0ff))
}

#[test]
fn buffer_length_is_three_per_point_and_finite() {
    let mut cloud = PointCloud::with_seed(777, 20.0, 1);
    for (frame, kind) in ShapeKind::ALL.into_iter().enumerate() {
        cloud.advance(frame as f32 * 0.016, &shape(kind), Vec2::new(0.3, -0.2));
        assert_eq!(cloud.positions().len(), 3 * 777);
        assert!(cloud.positions().iter().all(|v| v.is_finite()), "{kind}");
    }
}

#[test]
fn converges_to_held_target() {
    let desc = shape(ShapeKind::LatticeRain);
    let mut cloud = PointCloud::with_seed(300, 4.0, 2);
    let t = 1.0;
    for _ in 0..1500 {
        cloud.advance(t, &desc, FAR);
    }
    for i in 0..cloud.count() {
        let target = cloud.target_of(i, &desc, t).unwrap();
        let err = (cloud.points()[i] - target).length();
        assert!(err < 1e-3, "point {i} still {err} away");
    }
}

#[test]
fn targets_are_deterministic() {
    for kind in ShapeKind::ALL {
        for i in [0usize, 1, 17, 4999] {
            let a = kind.target(i, 5000, 3.25, 0.42);
            let b = kind.target(i, 5000, 3.25, 0.42);
            assert_eq!(a, b, "{kind} at {i}");
        }
    }
}

#[test]
fn step_fraction_depends_on_seed() {
    let desc = shape(ShapeKind::LiquidSphere);
    let motion = desc.motion();
    let mut cloud = PointCloud::with_seed(64, 20.0, 3);
    let before: Vec<Vec3> = cloud.points().to_vec();
    cloud.advance(0.5, &desc, FAR);

    let mut fractions = Vec::new();
    for i in 0..cloud.count() {
        let target = cloud.target_of(i, &desc, 0.5).unwrap();
        let full = (target - before[i]).length();
        let moved = (cloud.points()[i] - before[i]).length();
        let frac = moved / full;
        let expected = motion.speed(cloud.seeds()[i]);
        assert!((frac - expected).abs() < 1e-4, "point {i}: {frac} vs {expected}");
        fractions.push(frac);
    }
    let min = fractions.iter().cloned().fold(f32::MAX, f32::min);
    let max = fractions.iter().cloned().fold(f32::MIN, f32::max);
    assert!(max - min > 1e-3, "every point moved rigidly");
}

#[test]
fn repulsion_is_local_and_pushes_outward() {
    let desc = shape(ShapeKind::Tornado);
    let motion = desc.motion();
    let t = 2.0;

    let mut far = PointCloud::with_seed(500, 10.0, 4);
    let mut near = PointCloud::with_seed(500, 10.0, 4);
    let i = 123;
    let p = near.points()[i];
    let target = near.target_of(i, &desc, t).unwrap();
    let pointer = (p + (target - p) * motion.speed(near.seeds()[i])).truncate();

    far.advance(t, &desc, FAR);
    near.advance(t, &desc, pointer);

    let push = near.points()[i] - far.points()[i];
    let expected = motion.repulsion.radius * motion.repulsion.strength;
    assert!((push.truncate().length() - expected).abs() < 1e-3);
    assert_eq!(push.z, 0.0);

    for (a, b) in far.points().iter().zip(near.points()) {
        let d = (a.truncate() - pointer).length();
        if d >= motion.repulsion.radius {
            assert_eq!(a, b);
        } else {
            let away = (b.truncate() - a.truncate()).dot(a.truncate() - pointer);
            assert!(away >= 0.0);
        }
    }
}

#[test]
fn color_converges_without_overshoot() {
    let theme = Rgb::from_hex(0x8a2be2);
    let desc = ShapeDescriptor::new(ShapeKind::GalaxySpiral, theme);
    let mut cloud = PointCloud::with_seed(8, 2.0, 5);
    let start = cloud.color();
    let mut last = start;
    for frame in 0..400 {
        cloud.advance(frame as f32 * 0.016, &desc, FAR);
        let c = cloud.color();
        for (now, prev, goal, from) in [
            (c.r, last.r, theme.r, start.r),
            (c.g, last.g, theme.g, start.g),
            (c.b, last.b, theme.b, start.b),
        ] {
            assert!((goal - now).abs() <= (goal - prev).abs() + 1e-7);
            // stays between the start and the goal
            assert!(now >= from.min(goal) - 1e-6 && now <= from.max(goal) + 1e-6);
        }
        last = c;
    }
    assert!((last.r - theme.r).abs() < 1e-3);
    assert!((last.b - theme.b).abs() < 1e-3);
}

#[test]
fn shape_switch_moves_at_most_one_step() {
    let a = shape(ShapeKind::LiquidSphere);
    let b = shape(ShapeKind::WarpTunnel);
    let mut cloud = PointCloud::with_seed(400, 20.0, 6);
    for frame in 0..200 {
        cloud.advance(frame as f32 * 0.016, &a, FAR);
    }
    let before: Vec<Vec3> = cloud.points().to_vec();
    let t = 200.0 * 0.016;
    cloud.advance(t, &b, FAR);
    let max_speed = b.motion().max_speed();
    for i in 0..cloud.count() {
        let target = cloud.target_of(i, &b, t).unwrap();
        let step = (cloud.points()[i] - before[i]).length();
        let bound = max_speed * (target - before[i]).length() + 1e-4;
        assert!(step <= bound, "point {i} jumped {step} > {bound}");
    }
}

#[test]
fn non_finite_inputs_leave_buffer_intact() {
    let desc = shape(ShapeKind::Helix);
    let mut cloud = PointCloud::with_seed(50, 10.0, 7);
    let before = cloud.positions().to_vec();
    cloud.advance(f32::NAN, &desc, Vec2::ZERO);
    cloud.advance(f32::INFINITY, &desc, Vec2::ZERO);
    assert_eq!(cloud.positions(), &before[..]);
    assert_eq!(cloud.active_shape(), None);

    let mut twin = PointCloud::with_seed(50, 10.0, 7);
    cloud.advance(1.0, &desc, Vec2::new(f32::NAN, 0.0));
    twin.advance(1.0, &desc, FAR);
    assert_eq!(cloud.positions().len(), 150);
    assert_eq!(cloud.positions(), twin.positions());
}

#[test]
fn empty_cloud_is_a_no_op() {
    let mut cloud = PointCloud::new(0, 20.0);
    assert!(cloud.is_empty());
    cloud.advance(1.0, &shape(ShapeKind::VortexTunnel), Vec2::ZERO);
    assert!(cloud.positions().is_empty());
    assert_eq!(cloud.color(), Rgb::WHITE);
}

#[test]
fn rotation_never_reaches_the_buffer() {
    // Roll spins the cloud every frame; positions must only track targets.
    let desc = shape(ShapeKind::WarpTunnel);
    let mut cloud = PointCloud::with_seed(100, 4.0, 8);
    for _ in 0..2000 {
        cloud.advance(1.0, &desc, FAR);
    }
    assert!(cloud.rotation().z.abs() > 0.0);
    for i in 0..cloud.count() {
        let target = cloud.target_of(i, &desc, 1.0).unwrap();
        assert!((cloud.points()[i] - target).length() < 1e-3);
    }
}

#[test]
fn extreme_finite_time_never_poisons_buffer() {
    for kind in ShapeKind::ALL {
        let desc = shape(kind);
        let mut cloud = PointCloud::with_seed(400, 10.0, 9);
        cloud.advance(1.0e38, &desc, Vec2::ZERO);
        cloud.advance(f32::MAX, &desc, Vec2::ZERO);
        assert!(cloud.positions().iter().all(|v| v.is_finite()), "{kind}");
        for _ in 0..10 {
            cloud.advance(1.0, &desc, Vec2::ZERO);
        }
        assert_eq!(cloud.positions().len(), 3 * 400);
        assert!(cloud.positions().iter().all(|v| v.is_finite()), "{kind}");
        assert!(cloud.rotation().is_finite(), "{kind}");
    }
}
