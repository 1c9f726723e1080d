//! Shader program builder.
//!
//! wgpu reports shader and pipeline problems through its error sink, which by
//! default panics on the device's thread. Every creation call here runs inside
//! a validation error scope instead, so failures come back as
//! [`ProgramError`] values carrying the validator's own diagnostic.

use std::borrow::Cow;
use std::fmt;

use super::ProgramError;

/// Shader stage kind.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum StageKind {
    Vertex,
    Fragment,
}

impl StageKind {
    /// Entry point name each stage source must define.
    pub const fn entry_point(self) -> &'static str {
        match self {
            StageKind::Vertex => "vs_main",
            StageKind::Fragment => "fs_main",
        }
    }
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StageKind::Vertex => "vertex",
            StageKind::Fragment => "fragment",
        })
    }
}

/// A compiled (validated) shader stage.
pub struct ShaderStage {
    kind: StageKind,
    module: wgpu::ShaderModule,
}

/// Fixed-function inputs the linked program is built against.
pub struct ProgramLayout<'a> {
    pub label: &'a str,
    pub bind_group_layouts: &'a [&'a wgpu::BindGroupLayout],
    pub vertex_buffers: &'a [wgpu::VertexBufferLayout<'a>],
    pub color_format: wgpu::TextureFormat,
}

/// A linked GPU program: vertex + fragment stages bound into one pipeline.
///
/// Immutable once built. Dropping it releases the pipeline.
pub struct ShaderProgram {
    pipeline: wgpu::RenderPipeline,
}

impl ShaderProgram {
    pub fn pipeline(&self) -> &wgpu::RenderPipeline {
        &self.pipeline
    }

    /// Compiles both stages and links them.
    pub fn build(
        device: &wgpu::Device,
        vertex_src: &str,
        fragment_src: &str,
        layout: &ProgramLayout<'_>,
    ) -> Result<Self, ProgramError> {
        let vertex = compile_stage(device, StageKind::Vertex, vertex_src)?;
        let fragment = compile_stage(device, StageKind::Fragment, fragment_src)?;
        link_program(device, &vertex, &fragment, layout)
    }
}

/// Compiles one stage from WGSL source.
///
/// Compiler warnings are logged; an error yields [`ProgramError::Compile`]
/// with the compiler's diagnostic text.
pub fn compile_stage(
    device: &wgpu::Device,
    kind: StageKind,
    source: &str,
) -> Result<ShaderStage, ProgramError> {
    let label = format!("{kind} stage");

    device.push_error_scope(wgpu::ErrorFilter::Validation);
    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(&label),
        source: wgpu::ShaderSource::Wgsl(Cow::Borrowed(source)),
    });
    let info = pollster::block_on(module.get_compilation_info());
    let scope_error = pollster::block_on(device.pop_error_scope());

    for msg in &info.messages {
        match msg.message_type {
            wgpu::CompilationMessageType::Error => log::error!("{label}: {}", msg.message),
            wgpu::CompilationMessageType::Warning => log::warn!("{label}: {}", msg.message),
            wgpu::CompilationMessageType::Info => log::debug!("{label}: {}", msg.message),
        }
    }

    if let Some(err) = scope_error {
        return Err(ProgramError::Compile {
            stage: kind,
            log: err.to_string(),
        });
    }

    log::debug!("{label} compiled");
    Ok(ShaderStage { kind, module })
}

/// Links a vertex and a fragment stage into a render pipeline.
///
/// Topology is a plain triangle list with no culling, no depth and no
/// blending; the fragment output replaces the target.
pub fn link_program(
    device: &wgpu::Device,
    vertex: &ShaderStage,
    fragment: &ShaderStage,
    layout: &ProgramLayout<'_>,
) -> Result<ShaderProgram, ProgramError> {
    if vertex.kind != StageKind::Vertex || fragment.kind != StageKind::Fragment {
        return Err(ProgramError::Link {
            label: layout.label.to_string(),
            log: format!(
                "expected vertex + fragment stages, got {} + {}",
                vertex.kind, fragment.kind
            ),
        });
    }

    device.push_error_scope(wgpu::ErrorFilter::Validation);

    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some(layout.label),
        bind_group_layouts: layout.bind_group_layouts,
        push_constant_ranges: &[],
    });

    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(layout.label),
        layout: Some(&pipeline_layout),

        vertex: wgpu::VertexState {
            module: &vertex.module,
            entry_point: Some(StageKind::Vertex.entry_point()),
            compilation_options: Default::default(),
            buffers: layout.vertex_buffers,
        },

        fragment: Some(wgpu::FragmentState {
            module: &fragment.module,
            entry_point: Some(StageKind::Fragment.entry_point()),
            compilation_options: Default::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format: layout.color_format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),

        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },

        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    });

    if let Some(err) = pollster::block_on(device.pop_error_scope()) {
        return Err(ProgramError::Link {
            label: layout.label.to_string(),
            log: err.to_string(),
        });
    }

    log::info!("shader program `{}` linked", layout.label);
    Ok(ShaderProgram { pipeline })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_points_per_stage() {
        assert_eq!(StageKind::Vertex.entry_point(), "vs_main");
        assert_eq!(StageKind::Fragment.entry_point(), "fs_main");
    }

    #[test]
    fn stage_display() {
        assert_eq!(StageKind::Vertex.to_string(), "vertex");
        assert_eq!(StageKind::Fragment.to_string(), "fragment");
    }
}
