//! Typed configuration for the viewer's controller and control panel.

use std::ops::RangeInclusive;

use fractal_engine::paint::Color;

use crate::view::ViewState;

/// Keyboard navigation constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationConfig {
    /// Zoom multiplier for one frame of `W`; `S` divides by it.
    pub zoom_factor: f64,
    /// Pan step per frame as a fraction of the current zoom.
    pub pan_speed: f64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            zoom_factor: 0.9,
            pan_speed: 0.1,
        }
    }
}

/// Appearance and bounds of the "Fractal Controls" panel.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelConfig {
    pub title: String,
    /// Fixed panel size in logical points.
    pub size: [f32; 2],
    pub corner_radius: u8,
    pub background: Color,
    pub title_bar: Color,
    pub iterations_range: RangeInclusive<i32>,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            title: "Fractal Controls".to_string(),
            size: [400.0, 100.0],
            corner_radius: 10,
            background: Color::BLACK,
            title_bar: Color::BLUE,
            iterations_range: ViewState::MIN_ITERATIONS..=ViewState::MAX_ITERATIONS,
        }
    }
}
