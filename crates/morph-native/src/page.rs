//! A virtual scrolling page for the desktop host: every section is one
//! viewport tall and the mouse wheel moves a smoothed scroll offset.

use glam::Vec2;
use morph_core::constants::SCRUB_TAU_SEC;
use morph_core::{Follower, SectionBounds};

/// Pixels per wheel "line".
const LINE_PX: f32 = 60.0;

pub struct VirtualPage {
    sections: usize,
    viewport_h: f32,
    goal_y: f32,
    smooth: Follower,
}

impl VirtualPage {
    pub fn new(sections: usize, viewport_h: f32) -> Self {
        Self {
            sections: sections.max(1),
            viewport_h: viewport_h.max(1.0),
            goal_y: 0.0,
            smooth: Follower::new(Vec2::ZERO, SCRUB_TAU_SEC),
        }
    }

    fn max_scroll(&self) -> f32 {
        (self.sections - 1) as f32 * self.viewport_h
    }

    /// Current smoothed scroll offset.
    #[inline]
    pub fn scroll_y(&self) -> f32 {
        self.smooth.value.y
    }

    #[inline]
    pub fn viewport_h(&self) -> f32 {
        self.viewport_h
    }

    pub fn set_viewport_h(&mut self, h: f32) {
        if h <= 0.0 || !h.is_finite() {
            return;
        }
        // keep the same relative position when the window resizes
        let ratio = h / self.viewport_h;
        self.viewport_h = h;
        self.goal_y *= ratio;
        self.smooth.snap(Vec2::new(0.0, self.smooth.value.y * ratio));
    }

    pub fn scroll_lines(&mut self, lines: f32) {
        self.scroll_px(lines * LINE_PX);
    }

    pub fn scroll_px(&mut self, px: f32) {
        if px.is_finite() {
            self.goal_y = (self.goal_y + px).clamp(0.0, self.max_scroll());
        }
    }

    pub fn jump_to(&mut self, section: usize) {
        let i = section.min(self.sections - 1);
        self.goal_y = i as f32 * self.viewport_h;
    }

    pub fn step(&mut self, dt_sec: f32) -> f32 {
        self.smooth.step(Vec2::new(0.0, self.goal_y), dt_sec).y
    }

    pub fn bounds(&self) -> Vec<SectionBounds> {
        (0..self.sections)
            .map(|i| {
                let top = i as f32 * self.viewport_h;
                SectionBounds::new(top, top + self.viewport_h)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use morph_core::SectionTracker;

    #[test]
    fn wheel_scroll_is_clamped_to_page() {
        let mut page = VirtualPage::new(3, 800.0);
        page.scroll_lines(-5.0);
        for _ in 0..200 {
            page.step(1.0 / 60.0);
        }
        assert_eq!(page.scroll_y(), 0.0);
        page.scroll_px(1.0e6);
        for _ in 0..600 {
            page.step(1.0 / 60.0);
        }
        assert!((page.scroll_y() - 1600.0).abs() < 0.5);
    }

    #[test]
    fn jumping_activates_the_section() {
        let mut page = VirtualPage::new(6, 720.0);
        let mut tracker = SectionTracker::new();
        page.jump_to(4);
        for _ in 0..600 {
            page.step(1.0 / 60.0);
        }
        let hit = tracker.update(page.scroll_y(), page.viewport_h(), &page.bounds());
        assert_eq!(hit, Some(4));
    }

    #[test]
    fn resize_keeps_relative_position() {
        let mut page = VirtualPage::new(4, 500.0);
        page.jump_to(2);
        for _ in 0..600 {
            page.step(1.0 / 60.0);
        }
        page.set_viewport_h(1000.0);
        assert!((page.scroll_y() - 2000.0).abs() < 1.0);
        assert_eq!(page.bounds()[2].top, 2000.0);
    }
}
