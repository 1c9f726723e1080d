//! Keyboard navigation.
//!
//! Keys are polled, not handled as events: every frame the held keys are
//! sampled once and each one applies its full step. Holding a key therefore
//! zooms or pans continuously at the display's refresh rate.

use fractal_engine::input::{InputState, Key};

use crate::config::NavigationConfig;
use crate::view::ViewState;

/// Navigation keys held during one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavInput {
    pub zoom_in: bool,
    pub zoom_out: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl NavInput {
    pub fn sample(input: &InputState) -> Self {
        Self {
            zoom_in: input.key_down(Key::W),
            zoom_out: input.key_down(Key::S),
            left: input.key_down(Key::ArrowLeft),
            right: input.key_down(Key::ArrowRight),
            up: input.key_down(Key::ArrowUp),
            down: input.key_down(Key::ArrowDown),
        }
    }

    pub fn any(&self) -> bool {
        self.zoom_in || self.zoom_out || self.left || self.right || self.up || self.down
    }

    /// Applies one frame of navigation to `view`.
    ///
    /// Zoom goes first, so the pan step is taken at the new zoom. Opposing
    /// keys held together cancel out.
    pub fn apply(&self, view: &mut ViewState, cfg: &NavigationConfig) {
        if self.zoom_in {
            view.zoom_by(cfg.zoom_factor);
        }
        if self.zoom_out {
            view.zoom_by(1.0 / cfg.zoom_factor);
        }

        let step = cfg.pan_speed * view.zoom();
        if self.left {
            view.pan(-step, 0.0);
        }
        if self.right {
            view.pan(step, 0.0);
        }
        if self.up {
            view.pan(0.0, step);
        }
        if self.down {
            view.pan(0.0, -step);
        }
    }
}

#[cfg(test)]
mod tests {
    use fractal_engine::input::{InputEvent, KeyState};

    use super::*;

    fn press(input: &mut InputState, key: Key) {
        input.apply_event(&InputEvent::Key {
            key,
            state: KeyState::Pressed,
            repeat: false,
        });
    }

    fn held(f: impl FnOnce(&mut NavInput)) -> NavInput {
        let mut nav = NavInput::default();
        f(&mut nav);
        nav
    }

    #[test]
    fn samples_bound_keys() {
        let mut input = InputState::default();
        press(&mut input, Key::W);
        press(&mut input, Key::ArrowLeft);
        press(&mut input, Key::A);

        let nav = NavInput::sample(&input);
        assert!(nav.zoom_in && nav.left);
        assert!(!nav.zoom_out && !nav.right && !nav.up && !nav.down);
    }

    #[test]
    fn nothing_held_leaves_view_untouched() {
        let mut view = ViewState::default();
        let nav = NavInput::sample(&InputState::default());
        assert!(!nav.any());
        nav.apply(&mut view, &NavigationConfig::default());
        assert_eq!(view, ViewState::default());
    }

    #[test]
    fn zoom_in_strictly_decreases() {
        let cfg = NavigationConfig::default();
        let nav = held(|n| n.zoom_in = true);
        let mut view = ViewState::default();
        nav.apply(&mut view, &cfg);
        assert!((view.zoom() - 0.9).abs() < 1e-12);
        let mut last = view.zoom();
        for _ in 0..200 {
            nav.apply(&mut view, &cfg);
            assert!(view.zoom() < last);
            last = view.zoom();
        }
    }

    #[test]
    fn zoom_out_strictly_increases() {
        let cfg = NavigationConfig::default();
        let nav = held(|n| n.zoom_out = true);
        let mut view = ViewState::default();
        nav.apply(&mut view, &cfg);
        assert!((view.zoom() - 1.0 / 0.9).abs() < 1e-12);
        let mut last = view.zoom();
        for _ in 0..200 {
            nav.apply(&mut view, &cfg);
            assert!(view.zoom() > last);
            last = view.zoom();
        }
    }

    #[test]
    fn pan_step_scales_with_zoom() {
        let cfg = NavigationConfig::default();
        let mut view = ViewState::default();
        view.zoom_by(0.5);

        held(|n| n.right = true).apply(&mut view, &cfg);
        assert!((view.offset()[0] - 0.05).abs() < 1e-12);

        held(|n| n.down = true).apply(&mut view, &cfg);
        assert!((view.offset()[1] + 0.05).abs() < 1e-12);
    }

    #[test]
    fn directions_follow_axes() {
        let cfg = NavigationConfig::default();

        let mut view = ViewState::default();
        held(|n| n.left = true).apply(&mut view, &cfg);
        assert!((view.offset()[0] + 0.1).abs() < 1e-12);

        let mut view = ViewState::default();
        held(|n| n.up = true).apply(&mut view, &cfg);
        assert!((view.offset()[1] - 0.1).abs() < 1e-12);
    }

    #[test]
    fn pan_uses_zoom_after_this_frames_zoom_step() {
        let cfg = NavigationConfig::default();
        let mut view = ViewState::default();
        held(|n| {
            n.zoom_in = true;
            n.right = true;
        })
        .apply(&mut view, &cfg);
        assert!((view.zoom() - 0.9).abs() < 1e-12);
        assert!((view.offset()[0] - 0.09).abs() < 1e-12);
    }

    #[test]
    fn opposing_keys_cancel() {
        let cfg = NavigationConfig::default();
        let mut view = ViewState::default();
        held(|n| {
            n.left = true;
            n.right = true;
            n.up = true;
            n.down = true;
        })
        .apply(&mut view, &cfg);
        assert_eq!(view.offset(), [0.0, 0.0]);
    }
}
