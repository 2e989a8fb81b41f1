use crate::constants::{CURSOR_DOT_ID, CURSOR_RING_ID, CURSOR_RING_PRESSED_SCALE};
use crate::dom;
use crate::input::MouseState;
use glam::Vec2;
use morph_core::constants::CURSOR_RING_TAU_SEC;
use morph_core::Follower;
use web_sys as web;

/// Custom cursor: a dot pinned to the pointer and a ring that trails it.
pub struct Cursor {
    dot: Option<web::HtmlElement>,
    ring: Option<web::HtmlElement>,
    ring_pos: Follower,
    seen: bool,
}

impl Cursor {
    /// `None` when the page has neither cursor element.
    pub fn from_document(document: &web::Document) -> Option<Self> {
        let dot = dom::html_element(document, CURSOR_DOT_ID);
        let ring = dom::html_element(document, CURSOR_RING_ID);
        if dot.is_none() && ring.is_none() {
            return None;
        }
        Some(Self {
            dot,
            ring,
            ring_pos: Follower::new(Vec2::ZERO, CURSOR_RING_TAU_SEC),
            seen: false,
        })
    }

    pub fn update(&mut self, mouse: &MouseState, dt_sec: f32) {
        if !mouse.inside {
            return;
        }
        let p = mouse.client();
        if !self.seen {
            self.ring_pos.snap(p);
            self.seen = true;
        }
        if let Some(dot) = &self.dot {
            dom::set_style(dot, "transform", &translate(p, 1.0));
        }
        let ring_p = self.ring_pos.step(p, dt_sec);
        if let Some(ring) = &self.ring {
            let scale = if mouse.down { CURSOR_RING_PRESSED_SCALE } else { 1.0 };
            dom::set_style(ring, "transform", &translate(ring_p, scale));
        }
    }
}

// Elements are expected to be position: fixed at 0,0 and centred on their own box.
fn translate(p: Vec2, scale: f32) -> String {
    format!(
        "translate3d({:.1}px, {:.1}px, 0) translate(-50%, -50%) scale({})",
        p.x, p.y, scale
    )
}
