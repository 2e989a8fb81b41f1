use glam::Vec2;
use morph_core::section::card_width;
use morph_core::{smoothing_alpha, Follower, PinnedTrack, SectionBounds, SectionTracker};

fn stacked(n: usize, h: f32) -> Vec<SectionBounds> {
    (0..n)
        .map(|i| SectionBounds::new(i as f32 * h, (i + 1) as f32 * h))
        .collect()
}

#[test]
fn enters_sections_as_centre_line_crosses() {
    let sections = stacked(4, 1000.0);
    let mut t = SectionTracker::new();
    // centre line at 400: still section 0
    assert_eq!(t.update(0.0, 800.0, &sections), None);
    // centre at 1000: enters section 1
    assert_eq!(t.update(600.0, 800.0, &sections), Some(1));
    assert_eq!(t.update(700.0, 800.0, &sections), None);
    assert_eq!(t.update(2700.0, 800.0, &sections), Some(3));
    // scrolling back up re-enters
    assert_eq!(t.update(1200.0, 800.0, &sections), Some(1));
    assert_eq!(t.active(), 1);
}

#[test]
fn holds_last_section_in_gaps_and_overscroll() {
    let sections = vec![
        SectionBounds::new(0.0, 500.0),
        SectionBounds::new(900.0, 1400.0),
    ];
    let mut t = SectionTracker::new();
    assert_eq!(t.update(800.0, 600.0, &sections), Some(1));
    // centre at 700 sits in the gap
    assert_eq!(t.update(400.0, 600.0, &sections), None);
    assert_eq!(t.active(), 1);
    assert_eq!(t.update(10_000.0, 600.0, &sections), None);
    assert_eq!(t.update(f32::NAN, 600.0, &sections), None);
    assert_eq!(t.active(), 1);
}

#[test]
fn pinned_track_distance_uses_viewport_padding() {
    let wide = PinnedTrack::new(5.0 * 600.0 + 4.0 * 32.0, 1280.0);
    assert_eq!(wide.scroll_distance(), 3128.0 - 1280.0 + 160.0);
    let narrow = PinnedTrack::new(2000.0, 375.0);
    assert_eq!(narrow.scroll_distance(), 2000.0 - 375.0 + 64.0);
    // track narrower than the screen never scrolls backwards
    assert_eq!(PinnedTrack::new(100.0, 1920.0).scroll_distance(), 0.0);
}

#[test]
fn pinned_progress_is_clamped() {
    let track = PinnedTrack::new(3000.0, 1000.0);
    let dist = track.scroll_distance();
    assert_eq!(track.progress(0.0, 500.0), 0.0);
    assert_eq!(track.progress(500.0 + dist * 0.5, 500.0), 0.5);
    assert_eq!(track.progress(1.0e6, 500.0), 1.0);
    assert_eq!(track.offset(2.0), dist);
    assert_eq!(PinnedTrack::new(10.0, 1000.0).progress(300.0, 0.0), 0.0);
}

#[test]
fn card_width_switches_at_breakpoint() {
    assert!((card_width(400.0) - 340.0).abs() < 1e-3);
    assert_eq!(card_width(1440.0), 600.0);
}

#[test]
fn follower_converges_independent_of_frame_rate() {
    let goal = Vec2::new(100.0, -40.0);
    let mut fast = Follower::new(Vec2::ZERO, 0.15);
    let mut slow = Follower::new(Vec2::ZERO, 0.15);
    for _ in 0..60 {
        fast.step(goal, 1.0 / 120.0);
    }
    for _ in 0..30 {
        slow.step(goal, 1.0 / 60.0);
    }
    assert!((fast.value - slow.value).length() < 1e-3);

    for _ in 0..600 {
        slow.step(goal, 1.0 / 60.0);
    }
    assert!((slow.value - goal).length() < 1e-3);
}

#[test]
fn smoothing_alpha_edges() {
    assert_eq!(smoothing_alpha(0.0, 0.2), 0.0);
    assert_eq!(smoothing_alpha(f32::NAN, 0.2), 0.0);
    assert_eq!(smoothing_alpha(0.016, 0.0), 1.0);
    let a = smoothing_alpha(0.2, 0.2);
    assert!((a - (1.0 - (-1.0f32).exp())).abs() < 1e-6);
}
