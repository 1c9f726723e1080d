/// The viewer's authoritative view: where the camera sits on the complex plane
/// and how hard the shader iterates.
///
/// Zoom is the half-height of the visible region; it stays finite and strictly
/// positive. `max_iterations` stays within
/// [`MIN_ITERATIONS`](Self::MIN_ITERATIONS)..=[`MAX_ITERATIONS`](Self::MAX_ITERATIONS).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    zoom: f64,
    offset: [f64; 2],
    max_iterations: i32,
}

impl ViewState {
    pub const MIN_ITERATIONS: i32 = 100;
    pub const MAX_ITERATIONS: i32 = 50_000;
    pub const DEFAULT_ITERATIONS: i32 = 1000;

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn offset(&self) -> [f64; 2] {
        self.offset
    }

    pub fn max_iterations(&self) -> i32 {
        self.max_iterations
    }

    /// Multiplies the zoom by `factor`.
    ///
    /// A result that is not finite and positive is rejected and the zoom is
    /// left unchanged. Returns whether the zoom changed.
    pub fn zoom_by(&mut self, factor: f64) -> bool {
        let next = self.zoom * factor;
        if !next.is_finite() || next <= 0.0 || next == self.zoom {
            return false;
        }
        self.zoom = next;
        true
    }

    /// Moves the view center by `(dx, dy)` in complex-plane units.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.offset[0] += dx;
        self.offset[1] += dy;
    }

    /// Sets the iteration cap, clamped to the allowed range. Returns the value
    /// actually stored.
    pub fn set_max_iterations(&mut self, value: i32) -> i32 {
        self.max_iterations = value.clamp(Self::MIN_ITERATIONS, Self::MAX_ITERATIONS);
        self.max_iterations
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            offset: [0.0, 0.0],
            max_iterations: Self::DEFAULT_ITERATIONS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let v = ViewState::default();
        assert_eq!(v.zoom(), 1.0);
        assert_eq!(v.offset(), [0.0, 0.0]);
        assert_eq!(v.max_iterations(), 1000);
    }

    #[test]
    fn iterations_are_clamped() {
        let mut v = ViewState::default();
        assert_eq!(v.set_max_iterations(5), 100);
        assert_eq!(v.set_max_iterations(1_000_000), 50_000);
        assert_eq!(v.set_max_iterations(2500), 2500);
        assert_eq!(v.max_iterations(), 2500);
    }

    #[test]
    fn zoom_rejects_degenerate_factors() {
        let mut v = ViewState::default();
        assert!(!v.zoom_by(0.0));
        assert!(!v.zoom_by(-2.0));
        assert!(!v.zoom_by(f64::INFINITY));
        assert!(!v.zoom_by(f64::NAN));
        assert_eq!(v.zoom(), 1.0);
    }

    #[test]
    fn zoom_underflow_keeps_last_positive_value() {
        let mut v = ViewState::default();
        while v.zoom_by(1e-10) {}
        assert!(v.zoom() > 0.0);
    }

    #[test]
    fn pan_accumulates() {
        let mut v = ViewState::default();
        v.pan(0.5, -0.25);
        v.pan(0.5, 0.0);
        assert_eq!(v.offset(), [1.0, -0.25]);
    }
}
