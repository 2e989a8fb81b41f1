// Host-side tests for web tuning constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn frame_clamp_and_cursor_scale_are_sane() {
    assert!(MAX_FRAME_DT_SEC > 0.0 && MAX_FRAME_DT_SEC <= 0.25);
    assert!(CURSOR_RING_PRESSED_SCALE > 1.0);
}

#[test]
fn dom_hooks_are_well_formed() {
    assert!(ACCENT_VAR.starts_with("--"));
    assert!(PAGE_ATTR.starts_with("data-"));
    assert!(SECTION_ATTR.starts_with("data-"));
    assert!(CARD_WIDTH_VAR.starts_with("--"));
    for sel in [PIN_TRIGGER_SELECTOR, PIN_TRACK_SELECTOR] {
        assert!(sel.starts_with("[data-") && sel.ends_with(']'));
    }
    assert_eq!(format!("{}{}", SECTION_ID_PREFIX, 3), "section-3");
    assert!(!CANVAS_ID.contains('#'));
}

#[test]
fn clear_colour_is_opaque() {
    assert_eq!(CLEAR_COLOR.a, 1.0);
}
