//! Full-screen fractal pass.
//!
//! One program, one quad, one uniform buffer. The uniform block is split in
//! two: `resolution` is written when the renderer is built and never again,
//! the view tail is rewritten once per frame by [`FractalRenderer::update`].

use std::mem::{offset_of, size_of};

use bytemuck::{Pod, Zeroable};
use fractal_engine::render::{
    ProgramError, ProgramLayout, QuadMesh, QuadVertex, RenderCtx, RenderTarget, ShaderProgram,
};
use wgpu::util::DeviceExt;

use crate::shaders;
use crate::view::ViewState;

/// Per-frame part of the uniform block.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ViewUniforms {
    pub offset: [f32; 2],
    pub zoom: f32,
    pub max_iterations: i32,
}

impl From<&ViewState> for ViewUniforms {
    fn from(view: &ViewState) -> Self {
        let [x, y] = view.offset();
        Self {
            offset: [x as f32, y as f32],
            zoom: view.zoom() as f32,
            max_iterations: view.max_iterations(),
        }
    }
}

/// Mirrors `struct Fractal` in the fragment shader, padded to 32 bytes.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct FractalUniforms {
    pub resolution: [f32; 2],
    pub view: ViewUniforms,
    _pad: [f32; 2],
}

impl FractalUniforms {
    pub const SIZE: u64 = size_of::<Self>() as u64;
    /// Byte offset of the per-frame tail.
    pub const VIEW_OFFSET: u64 = offset_of!(FractalUniforms, view) as u64;

    pub fn new(resolution: [f32; 2], view: &ViewState) -> Self {
        Self {
            resolution,
            view: view.into(),
            _pad: [0.0; 2],
        }
    }
}

pub struct FractalRenderer {
    program: ShaderProgram,
    quad: QuadMesh,
    ubo: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl FractalRenderer {
    /// Builds the program and uploads the quad and the initial uniforms.
    ///
    /// The drawable size in `rctx` becomes the shader's fixed `resolution`.
    pub fn new(rctx: &RenderCtx<'_>, view: &ViewState) -> Result<Self, ProgramError> {
        let device = rctx.device;

        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("fractal uniforms bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: wgpu::BufferSize::new(FractalUniforms::SIZE),
                },
                count: None,
            }],
        });

        let program = ShaderProgram::build(
            device,
            shaders::VERTEX,
            shaders::FRAGMENT,
            &ProgramLayout {
                label: "fractal",
                bind_group_layouts: &[&bgl],
                vertex_buffers: &[QuadVertex::layout()],
                color_format: rctx.surface_format,
            },
        )?;

        let uniforms = FractalUniforms::new(rctx.resolution(), view);
        let ubo = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("fractal ubo"),
            contents: bytemuck::bytes_of(&uniforms),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("fractal uniforms bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: ubo.as_entire_binding(),
            }],
        });

        log::debug!(
            "fractal renderer ready at {}x{}",
            rctx.size.width,
            rctx.size.height
        );

        Ok(Self {
            program,
            quad: QuadMesh::new(device),
            ubo,
            bind_group,
        })
    }

    /// Pushes the current view to the GPU. `resolution` is left alone.
    pub fn update(&self, queue: &wgpu::Queue, view: &ViewState) {
        let tail = ViewUniforms::from(view);
        queue.write_buffer(&self.ubo, FractalUniforms::VIEW_OFFSET, bytemuck::bytes_of(&tail));
    }

    /// Draws the fractal over whatever the target already holds.
    pub fn draw(&self, target: &mut RenderTarget<'_>) {
        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("fractal pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                depth_slice: None,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
            })],
            ..Default::default()
        });

        rpass.set_pipeline(self.program.pipeline());
        rpass.set_bind_group(0, &self.bind_group, &[]);
        self.quad.draw(&mut rpass);
    }
}
