#![cfg(target_arch = "wasm32")]
use instant::Instant;
use morph_core::{Camera, Page, PointCloud};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod cursor;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;
mod scroll;

use constants::{CANVAS_ID, PAGE_ATTR};

/// Install the panic hook and console logger. Safe to call more than once.
pub fn init_runtime() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
    });
}

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    dom::add_window_listener("resize", move |_: web::Event| {
        dom::sync_canvas_backing_size(&canvas_resize);
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    init_runtime();
    log::info!("morph-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let page = match canvas.get_attribute(PAGE_ATTR) {
        Some(name) => name.parse::<Page>().unwrap_or_else(|e| {
            log::warn!("{}; falling back to home", e);
            Page::Home
        }),
        None => Page::Home,
    };
    let preset = page.preset();
    log::info!(
        "[init] page={} points={} sections={}",
        page,
        preset.count,
        preset.len()
    );

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let mouse = Rc::new(RefCell::new(input::MouseState::default()));
    events::wire_pointer_handlers(mouse.clone());

    let scroll = scroll::ScrollState::new(&document);
    overlay::apply_section(&document, preset.section(scroll.active()));

    let gpu = frame::init_gpu(&canvas, preset).await;
    let now = Instant::now();
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        camera: Camera::new(canvas.width() as f32 / canvas.height().max(1) as f32),
        cloud: PointCloud::new(preset.count, preset.scatter_extent),
        cursor: cursor::Cursor::from_document(&document),
        window,
        document,
        canvas,
        preset,
        mouse,
        scroll,
        gpu,
        started: now,
        last_instant: now,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
