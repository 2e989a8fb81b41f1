//! Desktop viewer for the morph engine: one window, one page preset, the
//! mouse wheel scrolls a virtual page through its sections.
//!
//! Usage: `morph-native [home|about|services|contact]`

mod page;
mod renderer;

use std::sync::Arc;
use std::time::Instant;

use glam::Vec2;
use morph_core::state::uv_to_ndc;
use morph_core::{Camera, Page, PointCloud, SectionTracker};
use page::VirtualPage;
use renderer::Renderer;
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalPosition};
use winit::event::{ElementState, KeyEvent, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

const MAX_FRAME_DT_SEC: f32 = 0.1;

struct App {
    page: Page,
    renderer: Option<Renderer>,
    cloud: PointCloud,
    camera: Camera,
    tracker: SectionTracker,
    scroll: VirtualPage,
    cursor: Option<PhysicalPosition<f64>>,
    started: Instant,
    last_frame: Instant,
    error: Option<anyhow::Error>,
}

impl App {
    fn new(page: Page) -> Self {
        let preset = page.preset();
        let now = Instant::now();
        Self {
            page,
            renderer: None,
            cloud: PointCloud::new(preset.count, preset.scatter_extent),
            camera: Camera::default(),
            tracker: SectionTracker::new(),
            scroll: VirtualPage::new(preset.len(), 720.0),
            cursor: None,
            started: now,
            last_frame: now,
            error: None,
        }
    }

    fn title(&self) -> String {
        let section = self.page.preset().section(self.tracker.active());
        format!("morph-native: {} / {}", self.page, section.title)
    }

    fn load_page(&mut self, page: Page) {
        let preset = page.preset();
        log::info!("[page] {} ({} points)", page, preset.count);
        self.page = page;
        self.cloud = PointCloud::new(preset.count, preset.scatter_extent);
        self.tracker = SectionTracker::new();
        self.scroll = VirtualPage::new(preset.len(), self.scroll.viewport_h());
        if let Some(r) = &self.renderer {
            r.window.set_title(&self.title());
        }
    }

    /// Cursor position projected onto the cloud's plane, NaN when outside.
    fn pointer_world(&self) -> Vec2 {
        let (Some(pos), Some(r)) = (self.cursor, &self.renderer) else {
            return Vec2::NAN;
        };
        let (w, h) = r.size();
        let uv = [pos.x as f32 / w as f32, pos.y as f32 / h as f32];
        self.camera.ndc_to_plane(uv_to_ndc(uv))
    }

    fn on_key(&mut self, event_loop: &ActiveEventLoop, code: KeyCode) {
        let digit = match code {
            KeyCode::Digit1 => Some(0),
            KeyCode::Digit2 => Some(1),
            KeyCode::Digit3 => Some(2),
            KeyCode::Digit4 => Some(3),
            KeyCode::Digit5 => Some(4),
            KeyCode::Digit6 => Some(5),
            KeyCode::Digit7 => Some(6),
            KeyCode::Digit8 => Some(7),
            KeyCode::Digit9 => Some(8),
            _ => None,
        };
        if let Some(i) = digit {
            self.scroll.jump_to(i);
            return;
        }
        match code {
            KeyCode::Tab => self.load_page(self.page.next()),
            KeyCode::Escape => event_loop.exit(),
            _ => {}
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32().min(MAX_FRAME_DT_SEC);
        self.last_frame = now;
        let elapsed = (now - self.started).as_secs_f32();

        let scroll_y = self.scroll.step(dt);
        let bounds = self.scroll.bounds();
        if let Some(i) = self
            .tracker
            .update(scroll_y, self.scroll.viewport_h(), &bounds)
        {
            let section = self.page.preset().section(i);
            log::info!("[section] {} -> {}", section.id, section.shape.kind);
            if let Some(r) = &self.renderer {
                r.window.set_title(&self.title());
            }
        }

        let pointer = self.pointer_world();
        let shape = self.page.preset().section(self.tracker.active()).shape;
        self.cloud.advance(elapsed, &shape, pointer);

        let Some(r) = self.renderer.as_mut() else {
            return;
        };
        match r.render(&self.cloud, &self.camera) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let size = r.window.inner_size();
                r.resize(size);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("[gpu] out of memory");
                event_loop.exit();
            }
            Err(e) => log::warn!("[gpu] frame skipped: {:?}", e),
        }
        r.window.request_redraw();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.renderer.is_some() {
            return;
        }
        let attributes = Window::default_attributes()
            .with_title(self.title())
            .with_inner_size(LogicalSize::new(1280.0, 720.0));
        let window = match event_loop.create_window(attributes) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                self.error = Some(e.into());
                event_loop.exit();
                return;
            }
        };
        match pollster::block_on(Renderer::new(window.clone(), self.cloud.count())) {
            Ok(r) => {
                let (w, h) = r.size();
                self.camera.set_viewport(w, h);
                self.scroll.set_viewport_h(h as f32);
                self.renderer = Some(r);
                window.request_redraw();
            }
            Err(e) => {
                log::error!("[gpu] init failed: {:?}", e);
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(r) = self.renderer.as_mut() {
                    r.resize(size);
                }
                self.camera.set_viewport(size.width, size.height);
                self.scroll.set_viewport_h(size.height as f32);
            }
            WindowEvent::CursorMoved { position, .. } => self.cursor = Some(position),
            WindowEvent::CursorLeft { .. } => self.cursor = None,
            WindowEvent::MouseWheel { delta, .. } => match delta {
                MouseScrollDelta::LineDelta(_, y) => self.scroll.scroll_lines(-y),
                MouseScrollDelta::PixelDelta(pos) => self.scroll.scroll_px(-pos.y as f32),
            },
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => self.on_key(event_loop, code),
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let page = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<Page>()?,
        None => Page::Home,
    };
    log::info!("[morph-native] starting on {}", page);

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);
    let mut app = App::new(page);
    event_loop.run_app(&mut app)?;
    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
