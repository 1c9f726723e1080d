use crate::render::RenderTarget;

/// One acquired swapchain image and the encoder recording into it.
///
/// The image stays checked out until [`Gpu::submit`](super::Gpu::submit)
/// consumes the frame; the next acquire blocks until then.
pub struct GpuFrame {
    surface_texture: wgpu::SurfaceTexture,
    view: wgpu::TextureView,
    encoder: wgpu::CommandEncoder,
}

impl GpuFrame {
    pub(super) fn new(surface_texture: wgpu::SurfaceTexture, device: &wgpu::Device) -> Self {
        let view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("fractal frame encoder"),
        });
        Self {
            surface_texture,
            view,
            encoder,
        }
    }

    /// Encoder and color view, borrowed together for recording a pass.
    pub fn parts(&mut self) -> (&mut wgpu::CommandEncoder, &wgpu::TextureView) {
        (&mut self.encoder, &self.view)
    }

    pub fn target(&mut self) -> RenderTarget<'_> {
        RenderTarget {
            encoder: &mut self.encoder,
            color_view: &self.view,
        }
    }

    /// Submits `extra` ahead of this frame's commands and presents the image.
    pub(super) fn finish(self, queue: &wgpu::Queue, extra: Vec<wgpu::CommandBuffer>) {
        let Self {
            surface_texture,
            view,
            encoder,
        } = self;

        queue.submit(extra.into_iter().chain(std::iter::once(encoder.finish())));
        drop(view);
        surface_texture.present();
    }
}
