// Web front-end tuning and DOM contract.

// DOM hooks
pub const CANVAS_ID: &str = "morph-canvas";
pub const PAGE_ATTR: &str = "data-page";
pub const SECTION_ID_PREFIX: &str = "section-"; // #section-0, #section-1, ...
pub const PIN_TRIGGER_SELECTOR: &str = "[data-pin-trigger]";
pub const PIN_TRACK_SELECTOR: &str = "[data-pin-track]";
pub const CURSOR_DOT_ID: &str = "cursor-dot";
pub const CURSOR_RING_ID: &str = "cursor-ring";
pub const ACCENT_VAR: &str = "--accent"; // set on <html> to the active section colour
pub const SECTION_ATTR: &str = "data-section"; // active section id, also on <html>
pub const CARD_WIDTH_VAR: &str = "--card-width"; // on the pinned track

// Cursor
pub const CURSOR_RING_PRESSED_SCALE: f32 = 1.5;

// Frame pacing
pub const MAX_FRAME_DT_SEC: f32 = 0.1; // clamp after tab switches

// Scene background
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};
