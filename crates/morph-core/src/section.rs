//! Scroll position to section mapping, and the pinned horizontal track.

use crate::constants::{NARROW_VIEWPORT_PX, PIN_PADDING_NARROW, PIN_PADDING_WIDE};

/// Vertical extent of a section in document coordinates (pixels).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub top: f32,
    pub bottom: f32,
}

impl SectionBounds {
    pub fn new(top: f32, bottom: f32) -> Self {
        Self { top, bottom }
    }

    #[inline]
    pub fn contains(&self, y: f32) -> bool {
        y >= self.top && y < self.bottom
    }
}

/// Tracks which section the viewport centre sits in.
///
/// Entering a section from either direction activates it. Leaving every
/// section (gaps, overscroll) keeps the last one active.
#[derive(Clone, Debug, Default)]
pub struct SectionTracker {
    active: usize,
}

impl SectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn active(&self) -> usize {
        self.active
    }

    /// Returns the new index when the active section changed.
    pub fn update(
        &mut self,
        scroll_y: f32,
        viewport_h: f32,
        sections: &[SectionBounds],
    ) -> Option<usize> {
        if !scroll_y.is_finite() || !viewport_h.is_finite() {
            return None;
        }
        let line = scroll_y + viewport_h * 0.5;
        let hit = sections.iter().position(|b| b.contains(line))?;
        if hit == self.active {
            return None;
        }
        log::debug!("[section] {} -> {}", self.active, hit);
        self.active = hit;
        Some(hit)
    }
}

/// Horizontal card track pinned while its trigger scrolls past.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinnedTrack {
    pub track_width: f32,
    pub viewport_w: f32,
}

impl PinnedTrack {
    pub fn new(track_width: f32, viewport_w: f32) -> Self {
        Self {
            track_width,
            viewport_w,
        }
    }

    /// Trailing space kept after the last card.
    pub fn padding(&self) -> f32 {
        if self.viewport_w < NARROW_VIEWPORT_PX {
            PIN_PADDING_NARROW
        } else {
            PIN_PADDING_WIDE
        }
    }

    /// Vertical scroll consumed while pinned; also the maximum translation.
    pub fn scroll_distance(&self) -> f32 {
        (self.track_width - self.viewport_w + self.padding()).max(0.0)
    }

    pub fn progress(&self, scroll_y: f32, pin_start: f32) -> f32 {
        let dist = self.scroll_distance();
        if dist <= 0.0 || !scroll_y.is_finite() {
            return 0.0;
        }
        ((scroll_y - pin_start) / dist).clamp(0.0, 1.0)
    }

    /// Leftward translation of the track for `progress`.
    pub fn offset(&self, progress: f32) -> f32 {
        progress.clamp(0.0, 1.0) * self.scroll_distance()
    }
}

/// Card width used by the track layout: most of the screen on phones,
/// fixed otherwise.
pub fn card_width(viewport_w: f32) -> f32 {
    if viewport_w < NARROW_VIEWPORT_PX {
        viewport_w * 0.85
    } else {
        600.0
    }
}
