use crate::constants::CLEAR_COLOR;
use glam::Mat4;
use morph_core::constants::{POINT_OPACITY, POINT_SIZE, SPARKLE_SIZE, STAR_OPACITY, STAR_SIZE};
use morph_core::{Camera, PointCloud, PostLook, Rgb, ScenePreset, Sparkles, StarField};
use web_sys as web;

mod helpers;
mod points;
mod post;
mod targets;

use points::{PointsResources, PointsUniforms};
use post::{PostBindGroups, PostResources};
use targets::RenderTargets;

const STAR_SEED: u64 = 1;
const SPARKLE_SEED: u64 = 7;

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    points: PointsResources,
    stars: Option<(StarField, PointsResources)>,
    sparkles: Option<(Sparkles, PointsResources)>,
    targets: RenderTargets,
    linear_sampler: wgpu::Sampler,
    post: PostResources,
    bind_groups: PostBindGroups,
    look: PostLook,

    width: u32,
    height: u32,
    time_accum: f32,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        preset: &'static ScenePreset,
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // default limits; older WebGPU impls reject unknown fields
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!("[gpu] surface {}x{} {:?}", width, height, format);

        let targets = RenderTargets::new(&device, width, height);
        let linear_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("linear_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        let post = post::create_post_resources(&device, format);
        let bind_groups = post::rebuild_bind_groups(&device, &post, &linear_sampler, &targets);
        let points = PointsResources::new(&device, "cloud", preset.count);
        let stars = preset.stars.map(|field| {
            let mut res = PointsResources::new(&device, "stars", field.count);
            let scattered = field.scatter(STAR_SEED);
            res.set_positions(&device, &queue, bytemuck::cast_slice(&scattered));
            (field, res)
        });
        let sparkles = preset.sparkles.map(|field| {
            let res = PointsResources::new(&device, "sparkles", field.count);
            (Sparkles::new(field, SPARKLE_SEED), res)
        });
        log::info!(
            "[gpu] backdrop stars={} sparkles={}",
            stars.is_some(),
            sparkles.is_some()
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            points,
            stars,
            sparkles,
            targets,
            linear_sampler,
            post,
            bind_groups,
            look: preset.look,
            width,
            height,
            time_accum: 0.0,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.reconfigure();
        }
    }

    fn reconfigure(&mut self) {
        self.config.width = self.width;
        self.config.height = self.height;
        self.surface.configure(&self.device, &self.config);
        self.targets.recreate(&self.device, self.width, self.height);
        self.bind_groups = post::rebuild_bind_groups(
            &self.device,
            &self.post,
            &self.linear_sampler,
            &self.targets,
        );
    }

    /// Draw the backdrop and the cloud, then bloom and the page's post look.
    /// A lost or outdated surface is reconfigured and the frame dropped.
    pub fn render(&mut self, dt_sec: f32, cloud: &PointCloud, camera: &Camera) {
        match self.try_render(dt_sec, cloud, camera) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("[gpu] surface lost, reconfiguring");
                self.reconfigure();
            }
            Err(e) => log::error!("render error: {:?}", e),
        }
    }

    fn try_render(
        &mut self,
        dt_sec: f32,
        cloud: &PointCloud,
        camera: &Camera,
    ) -> Result<(), wgpu::SurfaceError> {
        self.time_accum += dt_sec.max(0.0);
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let view_m = camera.view_matrix();
        let proj_m = camera.projection_matrix();
        let time = self.time_accum;
        if let Some((field, res)) = &self.stars {
            let size = STAR_SIZE * field.twinkle(time);
            let u = PointsUniforms::new(
                view_m,
                proj_m,
                Mat4::IDENTITY,
                Rgb::WHITE,
                STAR_OPACITY,
                size,
            );
            res.set_uniforms(&self.queue, &u);
        }
        if let Some((sparkles, res)) = &mut self.sparkles {
            sparkles.update(time);
            res.set_positions(&self.device, &self.queue, sparkles.positions());
            let field = sparkles.field();
            let u = PointsUniforms::new(
                view_m,
                proj_m,
                sparkles.model_matrix(time),
                field.color,
                field.opacity,
                SPARKLE_SIZE,
            );
            res.set_uniforms(&self.queue, &u);
        }
        let uniforms = PointsUniforms::new(
            view_m,
            proj_m,
            cloud.model_matrix(),
            cloud.color(),
            POINT_OPACITY,
            POINT_SIZE,
        );
        self.points
            .set_positions(&self.device, &self.queue, cloud.positions());
        self.points.set_uniforms(&self.queue, &uniforms);

        let (bw, bh) = targets::bloom_size(self.width, self.height);
        post::write_post_uniforms(
            &self.queue,
            &self.post,
            &self.look,
            [bw as f32, bh as f32],
            self.time_accum,
        );

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("points_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.hdr_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            if let Some((_, stars)) = &self.stars {
                stars.draw(&mut rpass);
            }
            if let Some((_, sparkles)) = &self.sparkles {
                sparkles.draw(&mut rpass);
            }
            self.points.draw(&mut rpass);
        }

        // bright pass -> bloom_a, blur h -> bloom_b, blur v -> bloom_a
        post::blit(
            &mut encoder,
            "bright_pass",
            &self.targets.bloom_a_view,
            &self.post.bright_pipeline,
            &self.bind_groups.hdr,
            None,
        );
        post::blit(
            &mut encoder,
            "blur_h",
            &self.targets.bloom_b_view,
            &self.post.blur_pipeline,
            &self.bind_groups.from_bloom_a,
            None,
        );
        post::blit(
            &mut encoder,
            "blur_v",
            &self.targets.bloom_a_view,
            &self.post.blur_pipeline,
            &self.bind_groups.from_bloom_b,
            None,
        );
        post::blit(
            &mut encoder,
            "composite",
            &view,
            &self.post.composite_pipeline,
            &self.bind_groups.hdr,
            Some(&self.bind_groups.bloom_a_only),
        );

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
