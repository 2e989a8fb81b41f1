use super::helpers;
use super::targets::RenderTargets;
use morph_core::PostLook;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PostUniforms {
    resolution: [f32; 2],
    blur_dir: [f32; 2],
    chromatic_offset: [f32; 2],
    time: f32,
    bloom_strength: f32,
    threshold: f32,
    vignette_offset: f32,
    vignette_darkness: f32,
    grain: f32,
}

/// Which pass a uniform block feeds. Blur passes need their own direction,
/// so each pass reads its own buffer.
#[derive(Clone, Copy)]
enum Pass {
    Main,
    BlurH,
    BlurV,
}

impl Pass {
    const ALL: [Pass; 3] = [Pass::Main, Pass::BlurH, Pass::BlurV];

    fn blur_dir(self) -> [f32; 2] {
        match self {
            Pass::Main => [0.0, 0.0],
            Pass::BlurH => [1.0, 0.0],
            Pass::BlurV => [0.0, 1.0],
        }
    }
}

pub(crate) struct PostResources {
    pub(crate) bgl0: wgpu::BindGroupLayout, // tex+sampler+uniform
    pub(crate) bgl1: wgpu::BindGroupLayout, // tex+sampler
    uniform_buffers: [wgpu::Buffer; 3],
    pub(crate) bright_pipeline: wgpu::RenderPipeline,
    pub(crate) blur_pipeline: wgpu::RenderPipeline,
    pub(crate) composite_pipeline: wgpu::RenderPipeline,
}

pub(crate) struct PostBindGroups {
    pub(crate) hdr: wgpu::BindGroup,
    pub(crate) from_bloom_a: wgpu::BindGroup,
    pub(crate) from_bloom_b: wgpu::BindGroup,
    pub(crate) bloom_a_only: wgpu::BindGroup,
}

pub(crate) fn create_post_resources(
    device: &wgpu::Device,
    swap_format: wgpu::TextureFormat,
) -> PostResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("post_shader"),
        source: wgpu::ShaderSource::Wgsl(morph_core::POST_WGSL.into()),
    });
    let tex_entry = wgpu::BindGroupLayoutEntry {
        binding: 0,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Texture {
            multisampled: false,
            view_dimension: wgpu::TextureViewDimension::D2,
            sample_type: wgpu::TextureSampleType::Float { filterable: true },
        },
        count: None,
    };
    let sampler_entry = wgpu::BindGroupLayoutEntry {
        binding: 1,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
        count: None,
    };
    let bgl0 = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("post_bgl0"),
        entries: &[
            tex_entry,
            sampler_entry,
            helpers::uniform_entry(2, wgpu::ShaderStages::FRAGMENT),
        ],
    });
    let bgl1 = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("post_bgl1"),
        entries: &[tex_entry, sampler_entry],
    });
    let uniform_buffers = Pass::ALL.map(|_| {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("post_uniforms"),
            size: std::mem::size_of::<PostUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    });
    let pl_single = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("pl_post_0"),
        bind_group_layouts: &[&bgl0],
        push_constant_ranges: &[],
    });
    let pl_composite = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("pl_post_comp"),
        bind_group_layouts: &[&bgl0, &bgl1],
        push_constant_ranges: &[],
    });
    let hdr = helpers::HDR_FORMAT;
    PostResources {
        bright_pipeline: helpers::make_post_pipeline(device, &pl_single, &shader, "fs_bright", hdr),
        blur_pipeline: helpers::make_post_pipeline(device, &pl_single, &shader, "fs_blur", hdr),
        composite_pipeline: helpers::make_post_pipeline(
            device,
            &pl_composite,
            &shader,
            "fs_composite",
            swap_format,
        ),
        bgl0,
        bgl1,
        uniform_buffers,
    }
}

/// Write the per-pass uniform blocks for this frame.
pub(crate) fn write_post_uniforms(
    queue: &wgpu::Queue,
    post: &PostResources,
    look: &PostLook,
    bloom_resolution: [f32; 2],
    time: f32,
) {
    for (pass, buf) in Pass::ALL.iter().zip(&post.uniform_buffers) {
        let u = PostUniforms {
            resolution: bloom_resolution,
            blur_dir: pass.blur_dir(),
            chromatic_offset: look.chromatic_offset,
            time,
            bloom_strength: look.bloom_strength,
            threshold: look.bloom_threshold,
            vignette_offset: look.vignette_offset,
            vignette_darkness: look.vignette_darkness,
            grain: look.grain,
        };
        queue.write_buffer(buf, 0, bytemuck::bytes_of(&u));
    }
}

/// Bind groups that reference the offscreen views; rebuilt on resize.
pub(crate) fn rebuild_bind_groups(
    device: &wgpu::Device,
    post: &PostResources,
    sampler: &wgpu::Sampler,
    targets: &RenderTargets,
) -> PostBindGroups {
    let with_uniform = |label: &str, view: &wgpu::TextureView, pass: Pass| {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout: &post.bgl0,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: post.uniform_buffers[pass as usize].as_entire_binding(),
                },
            ],
        })
    };
    PostBindGroups {
        hdr: with_uniform("bg_hdr", &targets.hdr_view, Pass::Main),
        from_bloom_a: with_uniform("bg_from_bloom_a", &targets.bloom_a_view, Pass::BlurH),
        from_bloom_b: with_uniform("bg_from_bloom_b", &targets.bloom_b_view, Pass::BlurV),
        bloom_a_only: device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("bg_bloom_a_only"),
            layout: &post.bgl1,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&targets.bloom_a_view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        }),
    }
}

pub(crate) fn blit(
    encoder: &mut wgpu::CommandEncoder,
    label: &str,
    target: &wgpu::TextureView,
    pipeline: &wgpu::RenderPipeline,
    bg0: &wgpu::BindGroup,
    bg1: Option<&wgpu::BindGroup>,
) {
    let mut r = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some(label),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view: target,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                store: wgpu::StoreOp::Store,
            },
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
    });
    r.set_pipeline(pipeline);
    r.set_bind_group(0, bg0, &[]);
    if let Some(g1) = bg1 {
        r.set_bind_group(1, g1, &[]);
    }
    r.draw(0..3, 0..1);
}
