use anyhow::Context;
use fractal_engine::core::{App, AppControl, FrameCtx, InitCtx};
use fractal_engine::paint::Color;

use crate::config::{NavigationConfig, PanelConfig};
use crate::navigation::NavInput;
use crate::panel::{self, SliderOutcome};
use crate::renderer::FractalRenderer;
use crate::view::ViewState;

/// Frames between two frame-rate reports.
const FPS_LOG_INTERVAL: u64 = 600;

/// The viewer application: owns the view and the GPU-side renderer.
pub struct FractalViewer {
    view: ViewState,
    nav: NavigationConfig,
    panel: PanelConfig,
    renderer: Option<FractalRenderer>,
}

impl FractalViewer {
    pub fn new(nav: NavigationConfig, panel: PanelConfig) -> Self {
        Self {
            view: ViewState::default(),
            nav,
            panel,
            renderer: None,
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Applies one frame of navigation and the slider's verdict to the view.
    fn step(&mut self, nav: NavInput, slider: SliderOutcome) {
        nav.apply(&mut self.view, &self.nav);

        if slider.changed {
            let stored = self.view.set_max_iterations(slider.value);
            log::debug!("max iterations set to {stored}");
        }
    }

}

fn frame_rate_due(frame_index: u64) -> bool {
    frame_index > 0 && frame_index % FPS_LOG_INTERVAL == 0
}

fn report_frame_rate(ctx: &mut FrameCtx<'_, '_>) {
    let frame = ctx.time.frame_index;
    if !frame_rate_due(frame) {
        return;
    }
    if let Some(fps) = ctx.take_average_fps() {
        log::debug!("frame {frame}: {fps:.1} fps");
    }
}

impl Default for FractalViewer {
    fn default() -> Self {
        Self::new(NavigationConfig::default(), PanelConfig::default())
    }
}

impl App for FractalViewer {
    fn on_init(&mut self, ctx: &InitCtx<'_, '_>) -> anyhow::Result<()> {
        let renderer = FractalRenderer::new(&ctx.render_ctx(), &self.view)
            .context("failed to build the fractal shader program")?;
        self.renderer = Some(renderer);
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        report_frame_rate(ctx);
        let nav = NavInput::sample(ctx.input);
        let slider = panel::show(ctx.ui(), &self.panel, self.view.max_iterations());
        self.step(nav, slider);

        let view = self.view;
        log::trace!(
            "zoom={:e} offset=({}, {}) max_iterations={}",
            view.zoom(),
            view.offset()[0],
            view.offset()[1],
            view.max_iterations()
        );

        let Some(renderer) = self.renderer.as_ref() else {
            log::error!("frame requested before the renderer was built");
            return AppControl::Exit;
        };

        renderer.update(ctx.gpu.queue(), &view);
        ctx.render(Color::BLACK, |_, target| renderer.draw(target))
    }

    fn on_shutdown(&mut self) {
        // GPU objects go before the device that owns them.
        self.renderer = None;
    }
}

#[cfg(test)]
mod tests {
    use fractal_engine::input::{InputEvent, InputState, Key, KeyState};

    use super::*;

    fn untouched(app: &FractalViewer) -> SliderOutcome {
        SliderOutcome {
            changed: false,
            value: app.view().max_iterations(),
        }
    }

    #[test]
    fn frame_rate_reported_every_interval() {
        assert!(!frame_rate_due(0));
        assert!(!frame_rate_due(FPS_LOG_INTERVAL - 1));
        assert!(frame_rate_due(FPS_LOG_INTERVAL));
        assert!(!frame_rate_due(FPS_LOG_INTERVAL + 1));
        assert!(frame_rate_due(3 * FPS_LOG_INTERVAL));
    }

    #[test]
    fn starts_at_default_view() {
        let app = FractalViewer::default();
        assert_eq!(*app.view(), ViewState::default());
    }

    #[test]
    fn held_key_repeats_every_frame() {
        let mut app = FractalViewer::default();
        let mut input = InputState::default();
        input.apply_event(&InputEvent::Key {
            key: Key::W,
            state: KeyState::Pressed,
            repeat: false,
        });

        for _ in 0..2 {
            let slider = untouched(&app);
            app.step(NavInput::sample(&input), slider);
        }
        assert!((app.view().zoom() - 0.81).abs() < 1e-12);
    }

    #[test]
    fn slider_change_is_adopted_at_once() {
        let mut app = FractalViewer::default();
        app.step(
            NavInput::default(),
            SliderOutcome {
                changed: true,
                value: 4096,
            },
        );
        assert_eq!(app.view().max_iterations(), 4096);
    }

    #[test]
    fn unchanged_slider_is_ignored() {
        let mut app = FractalViewer::default();
        app.step(
            NavInput::default(),
            SliderOutcome {
                changed: false,
                value: 200,
            },
        );
        assert_eq!(app.view().max_iterations(), ViewState::DEFAULT_ITERATIONS);
    }

    #[test]
    fn panel_value_round_trips_through_step() {
        let mut app = FractalViewer::default();
        let ui = egui::Context::default();
        let mut slider = None;
        let _ = ui.run(egui::RawInput::default(), |ui| {
            slider = Some(panel::show(ui, &app.panel, 20));
        });
        app.step(NavInput::default(), slider.expect("panel closure did not run"));
        assert_eq!(app.view().max_iterations(), ViewState::MIN_ITERATIONS);
    }
}
