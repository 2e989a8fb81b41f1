use crate::constants::{CARD_WIDTH_VAR, PIN_TRACK_SELECTOR, PIN_TRIGGER_SELECTOR};
use crate::dom;
use glam::Vec2;
use morph_core::constants::SCRUB_TAU_SEC;
use morph_core::section::card_width;
use morph_core::{Follower, PinnedTrack, SectionBounds, SectionTracker};
use web_sys as web;

/// Horizontal card track pinned while its trigger scrolls past.
///
/// The trigger is stretched to `viewport + scroll_distance` so a sticky child
/// stays on screen; the track is translated left by the scrubbed progress.
/// Cards size themselves from `--card-width`, written on the track.
struct PinnedDom {
    trigger: web::HtmlElement,
    track: web::HtmlElement,
    scrub: Follower,
    last_height: f32,
    last_vw: f32,
}

impl PinnedDom {
    fn find(document: &web::Document) -> Option<Self> {
        let root = document.document_element()?;
        let trigger = dom::query_html(&root, PIN_TRIGGER_SELECTOR)?;
        let track = dom::query_html(&trigger, PIN_TRACK_SELECTOR)?;
        Some(Self {
            trigger,
            track,
            scrub: Follower::new(Vec2::ZERO, SCRUB_TAU_SEC),
            last_height: -1.0,
            last_vw: -1.0,
        })
    }

    fn update(&mut self, scroll_y: f32, viewport: (f32, f32), dt_sec: f32) {
        let (vw, vh) = viewport;
        if vw != self.last_vw {
            let card = format!("{}px", card_width(vw).round());
            dom::set_style(&self.track, CARD_WIDTH_VAR, &card);
            self.last_vw = vw;
        }
        let layout = PinnedTrack::new(self.track.scroll_width() as f32, vw);
        let height = (vh + layout.scroll_distance()).round();
        if height != self.last_height {
            dom::set_style(&self.trigger, "height", &format!("{}px", height));
            self.last_height = height;
        }
        let pin_start = self.trigger.get_bounding_client_rect().top() as f32 + scroll_y;
        let goal = layout.progress(scroll_y, pin_start);
        let progress = self.scrub.step(Vec2::new(goal, 0.0), dt_sec).x;
        dom::set_style(
            &self.track,
            "transform",
            &format!("translate3d({:.1}px, 0, 0)", -layout.offset(progress)),
        );
    }
}

/// Scroll position to active section, plus the optional pinned track.
pub struct ScrollState {
    tracker: SectionTracker,
    bounds: Vec<SectionBounds>,
    pinned: Option<PinnedDom>,
}

impl ScrollState {
    pub fn new(document: &web::Document) -> Self {
        let pinned = PinnedDom::find(document);
        if pinned.is_some() {
            log::info!("[scroll] pinned track found");
        }
        Self {
            tracker: SectionTracker::new(),
            bounds: Vec::new(),
            pinned,
        }
    }

    #[inline]
    pub fn active(&self) -> usize {
        self.tracker.active()
    }

    /// Returns the new section index when it changed this frame.
    pub fn update(
        &mut self,
        window: &web::Window,
        document: &web::Document,
        dt_sec: f32,
    ) -> Option<usize> {
        let y = dom::scroll_y(window);
        let viewport = dom::viewport_size(window);
        dom::section_bounds(document, y, &mut self.bounds);
        if let Some(pin) = &mut self.pinned {
            pin.update(y, viewport, dt_sec);
        }
        self.tracker.update(y, viewport.1, &self.bounds)
    }
}
