//! "Fractal Controls" overlay panel.
//!
//! The panel never writes the view itself: it edits a copy of the current
//! iteration cap and reports back, and the controller decides.

use fractal_engine::paint::Color;

use crate::config::PanelConfig;

/// What the iterations slider did this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderOutcome {
    pub changed: bool,
    /// Slider value, always inside the configured range.
    pub value: i32,
}

/// Declares the panel for this frame and reports the slider state.
///
/// `current` is clamped into range before display; a value that had to be
/// clamped is reported as changed.
pub fn show(ctx: &egui::Context, cfg: &PanelConfig, current: i32) -> SliderOutcome {
    let (lo, hi) = (*cfg.iterations_range.start(), *cfg.iterations_range.end());
    let mut value = current.clamp(lo, hi);
    let mut dragged = false;

    let frame = egui::Frame::window(&ctx.style())
        .fill(cfg.background.to_egui())
        .corner_radius(cfg.corner_radius)
        .inner_margin(egui::Margin::ZERO);

    egui::Window::new(cfg.title.as_str())
        .title_bar(false)
        .resizable(false)
        .collapsible(false)
        .fixed_size(cfg.size)
        .frame(frame)
        .show(ctx, |ui| {
            title_strip(ui, &cfg.title, cfg.title_bar, cfg.corner_radius);

            egui::Frame::new()
                .inner_margin(egui::Margin::same(8))
                .show(ui, |ui| {
                    let slider = egui::Slider::new(&mut value, cfg.iterations_range.clone())
                        .text("Iterations");
                    dragged = ui.add(slider).changed();
                });
        });

    let value = value.clamp(lo, hi);
    SliderOutcome {
        changed: dragged || value != current,
        value,
    }
}

/// Solid title strip along the top edge, rounded to match the panel corners.
fn title_strip(ui: &mut egui::Ui, title: &str, fill: Color, radius: u8) {
    egui::Frame::new()
        .fill(fill.to_egui())
        .corner_radius(egui::CornerRadius {
            nw: radius,
            ne: radius,
            sw: 0,
            se: 0,
        })
        .inner_margin(egui::Margin::symmetric(8, 4))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                egui::RichText::new(title)
                    .color(egui::Color32::WHITE)
                    .strong(),
            );
        });
}
