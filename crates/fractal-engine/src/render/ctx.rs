use winit::dpi::PhysicalSize;

use crate::device::Gpu;

/// Device handles a renderer needs to build resources and record work.
///
/// Borrowed from the window's [`Gpu`] for the duration of one callback.
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,
    /// Drawable size in physical pixels.
    pub size: PhysicalSize<u32>,
}

impl<'a> RenderCtx<'a> {
    pub fn from_gpu(gpu: &'a Gpu<'_>) -> Self {
        Self {
            device: gpu.device(),
            queue: gpu.queue(),
            surface_format: gpu.surface_format(),
            size: gpu.size(),
        }
    }

    /// Drawable size as `[width, height]` floats, the form shaders take it in.
    pub fn resolution(&self) -> [f32; 2] {
        [self.size.width as f32, self.size.height as f32]
    }
}

/// Where a draw callback records: the frame's encoder and its color view.
pub struct RenderTarget<'a> {
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub color_view: &'a wgpu::TextureView,
}
