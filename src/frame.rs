use crate::constants::MAX_FRAME_DT_SEC;
use crate::cursor::Cursor;
use crate::input::{self, MouseState};
use crate::overlay;
use crate::render;
use crate::scroll::ScrollState;
use instant::Instant;
use morph_core::{Camera, PointCloud, ScenePreset};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub window: web::Window,
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,

    pub preset: &'static ScenePreset,
    pub cloud: PointCloud,
    pub camera: Camera,

    pub mouse: Rc<RefCell<MouseState>>,
    pub scroll: ScrollState,
    pub cursor: Option<Cursor>,

    pub gpu: Option<render::GpuState<'a>>,

    pub started: Instant,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant)
            .as_secs_f32()
            .min(MAX_FRAME_DT_SEC);
        self.last_instant = now;
        let elapsed = (now - self.started).as_secs_f32();

        if let Some(i) = self.scroll.update(&self.window, &self.document, dt_sec) {
            let section = self.preset.section(i);
            log::info!("[scroll] section {} ({}) -> {}", i, section.id, section.shape.kind);
            overlay::apply_section(&self.document, section);
        }
        let shape = self.preset.section(self.scroll.active()).shape;

        let (w, h) = (self.canvas.width(), self.canvas.height());
        self.camera.set_viewport(w, h);
        let ms = *self.mouse.borrow();
        let pointer = input::pointer_world(input::mouse_uv(&self.canvas, &ms), &self.camera);

        self.cloud.advance(elapsed, &shape, pointer);

        if let Some(c) = &mut self.cursor {
            c.update(&ms, dt_sec);
        }
        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(w, h);
            g.render(dt_sec, &self.cloud, &self.camera);
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    preset: &'static ScenePreset,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, preset).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
