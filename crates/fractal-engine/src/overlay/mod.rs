//! Immediate-mode overlay host (egui).
//!
//! The runtime owns one `Overlay` per window. Each frame:
//! 1. window events are fed in as they arrive (`on_window_event`)
//! 2. the runtime opens a pass before the app callback (`begin_pass`)
//! 3. the app declares its widgets against `context()`
//! 4. the frame render closes the pass and paints it on top (`paint`), or
//!    drops it if no frame could be acquired (`discard`)
//!
//! egui uploads a texture (the font atlas included) in exactly one frame's
//! output. A discarded frame's uploads and frees are held back and applied
//! by the next `paint`.

use winit::event::WindowEvent;
use winit::window::Window;

use crate::device::Gpu;

pub struct Overlay {
    ctx: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
    pending: PendingTextures,
    pass_open: bool,
}

/// Texture updates from discarded passes, waiting for the next paint.
#[derive(Default)]
struct PendingTextures {
    delta: egui::TexturesDelta,
}

impl PendingTextures {
    /// Holds back the updates of a pass that was never painted.
    fn defer(&mut self, delta: egui::TexturesDelta) {
        self.delta.append(delta);
    }

    /// Everything deferred so far followed by `delta`, in submission order.
    fn take_with(&mut self, delta: egui::TexturesDelta) -> egui::TexturesDelta {
        let mut all = std::mem::take(&mut self.delta);
        all.append(delta);
        all
    }
}

impl Overlay {
    pub fn new(window: &Window, gpu: &Gpu<'_>) -> Self {
        let ctx = egui::Context::default();
        let max_texture_side = gpu.device().limits().max_texture_dimension_2d as usize;

        let state = egui_winit::State::new(
            ctx.clone(),
            egui::ViewportId::ROOT,
            window,
            Some(window.scale_factor() as f32),
            window.theme(),
            Some(max_texture_side),
        );

        let renderer = egui_wgpu::Renderer::new(
            gpu.device(),
            gpu.surface_format(),
            egui_wgpu::RendererOptions::default(),
        );

        Self {
            ctx,
            state,
            renderer,
            pending: PendingTextures::default(),
            pass_open: false,
        }
    }

    /// Feeds a window event to egui. Returns `true` if egui consumed it.
    pub fn on_window_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        self.state.on_window_event(window, event).consumed
    }

    /// Opens the UI pass for this frame. No-op if one is already open.
    pub fn begin_pass(&mut self, window: &Window) {
        if self.pass_open {
            return;
        }
        let raw_input = self.state.take_egui_input(window);
        self.ctx.begin_pass(raw_input);
        self.pass_open = true;
    }

    /// The egui context widgets are declared against.
    pub fn context(&self) -> &egui::Context {
        &self.ctx
    }

    /// Closes the pass without painting (the frame was skipped). Its texture
    /// updates carry over to the next [`paint`](Self::paint).
    pub fn discard(&mut self, window: &Window) {
        if !self.pass_open {
            return;
        }
        self.pass_open = false;
        let output = self.ctx.end_pass();
        self.state.handle_platform_output(window, output.platform_output);
        self.pending.defer(output.textures_delta);
    }

    /// Closes the pass and records its draw commands on top of `view`.
    ///
    /// Returns command buffers egui produced on the side; they must be
    /// submitted before `encoder`.
    pub fn paint(
        &mut self,
        window: &Window,
        gpu: &Gpu<'_>,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
    ) -> Vec<wgpu::CommandBuffer> {
        if !self.pass_open {
            return Vec::new();
        }
        self.pass_open = false;

        let output = self.ctx.end_pass();
        self.state.handle_platform_output(window, output.platform_output);

        let textures = self.pending.take_with(output.textures_delta);
        let paint_jobs = self.ctx.tessellate(output.shapes, output.pixels_per_point);
        let size = gpu.size();
        let screen = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [size.width, size.height],
            pixels_per_point: output.pixels_per_point,
        };

        for (id, delta) in &textures.set {
            self.renderer
                .update_texture(gpu.device(), gpu.queue(), *id, delta);
        }

        let extra = self
            .renderer
            .update_buffers(gpu.device(), gpu.queue(), encoder, &paint_jobs, &screen);

        {
            let mut rpass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("overlay pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view,
                        depth_slice: None,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    ..Default::default()
                })
                .forget_lifetime();

            self.renderer.render(&mut rpass, &paint_jobs, &screen);
        }

        for id in &textures.free {
            self.renderer.free_texture(id);
        }

        extra
    }
}
