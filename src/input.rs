use glam::Vec2;
use morph_core::state::uv_to_ndc;
use morph_core::Camera;
use web_sys as web;

/// Last known pointer, in CSS pixels relative to the viewport.
#[derive(Default, Clone, Copy)]
pub struct MouseState {
    pub client_x: f32,
    pub client_y: f32,
    pub down: bool,
    /// False until the first move and after the pointer leaves the window.
    pub inside: bool,
}

impl MouseState {
    #[inline]
    pub fn client(&self) -> Vec2 {
        Vec2::new(self.client_x, self.client_y)
    }
}

/// Map a client position into a rect's uv space (origin top-left). Points
/// outside the rect are clamped to its edge.
#[inline]
pub fn client_to_uv(
    client: Vec2,
    left: f32,
    top: f32,
    width: f32,
    height: f32,
) -> Option<[f32; 2]> {
    if !(width > 0.0 && height > 0.0) || !client.is_finite() {
        return None;
    }
    let u = ((client.x - left) / width).clamp(0.0, 1.0);
    let v = ((client.y - top) / height).clamp(0.0, 1.0);
    Some([u, v])
}

#[inline]
pub fn mouse_uv(canvas: &web::HtmlCanvasElement, mouse: &MouseState) -> Option<[f32; 2]> {
    if !mouse.inside {
        return None;
    }
    let rect = canvas.get_bounding_client_rect();
    client_to_uv(
        mouse.client(),
        rect.left() as f32,
        rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}

/// Pointer on the cloud's z = 0 plane. With no pointer the result is NaN,
/// which the engine treats as "no repulsion this frame".
#[inline]
pub fn pointer_world(uv: Option<[f32; 2]>, camera: &Camera) -> Vec2 {
    match uv {
        Some(uv) => camera.ndc_to_plane(uv_to_ndc(uv)),
        None => Vec2::NAN,
    }
}
