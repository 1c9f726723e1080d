use winit::window::{Window, WindowId};

use crate::device::{Gpu, SurfaceErrorAction};
use crate::input::InputState;
use crate::overlay::Overlay;
use crate::paint::Color;
use crate::render::{RenderCtx, RenderTarget};
use crate::time::{FrameClock, FrameTime};

use super::app::AppControl;

/// Per-window handles and immutable window metadata.
pub struct WindowCtx<'a> {
    pub id: WindowId,
    pub window: &'a Window,
}

/// Context passed to `core::App::on_init`.
pub struct InitCtx<'a, 'w> {
    pub window: WindowCtx<'a>,
    pub gpu: &'a Gpu<'w>,
}

impl<'a, 'w> InitCtx<'a, 'w> {
    /// Render context for creating GPU resources up front.
    pub fn render_ctx(&self) -> RenderCtx<'_> {
        RenderCtx::from_gpu(self.gpu)
    }
}

/// Per-frame context passed to `core::App::on_frame`.
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'w` is the window-borrow lifetime carried by `Gpu<'w>`
pub struct FrameCtx<'a, 'w> {
    pub window: WindowCtx<'a>,
    pub gpu: &'a mut Gpu<'w>,
    pub overlay: &'a mut Overlay,
    pub input: &'a InputState,
    pub time: FrameTime,
    /// The runtime's clock, already ticked for this frame.
    pub(crate) clock: &'a mut FrameClock,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    /// Average frame rate since the previous call, including this frame.
    ///
    /// `None` if the window since the last call has zero length.
    pub fn take_average_fps(&mut self) -> Option<f32> {
        self.clock.take_average_fps()
    }

    /// The overlay's egui context; the UI pass for this frame is already open.
    pub fn ui(&self) -> &egui::Context {
        self.overlay.context()
    }

    /// Clears the surface with `clear`, calls `draw` with a ready [`RenderCtx`] and
    /// [`RenderTarget`], paints the overlay on top, then presents the frame.
    ///
    /// If no surface texture can be acquired the overlay pass is discarded and
    /// the frame is skipped; only a fatal surface error returns `Exit`.
    pub fn render<F>(&mut self, clear: Color, draw: F) -> AppControl
    where
        F: FnOnce(&RenderCtx<'_>, &mut RenderTarget<'_>),
    {
        let mut frame = match self.gpu.begin_frame() {
            Ok(f) => f,
            Err(err) => {
                self.overlay.discard(self.window.window);
                if self.gpu.handle_surface_error(err) == SurfaceErrorAction::Fatal {
                    return AppControl::Exit;
                }
                return AppControl::Continue;
            }
        };

        // The clear pass records and ends here; draw passes load on top of it.
        {
            let (encoder, view) = frame.parts();
            let _clear = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("clear pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    depth_slice: None,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear.to_wgpu()),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                ..Default::default()
            });
        }

        draw(&RenderCtx::from_gpu(self.gpu), &mut frame.target());

        let (encoder, view) = frame.parts();
        let extra = self.overlay.paint(self.window.window, self.gpu, encoder, view);

        self.window.window.pre_present_notify();
        self.gpu.submit(frame, extra);

        AppControl::Continue
    }
}
