/// Straight-alpha linear RGBA color.
///
/// The viewer only deals in opaque colors, so there is no premultiplied
/// variant; alpha is carried for clear colors and overlay fills.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const CYAN: Color = Color::rgb(0.0, 1.0, 1.0);
    pub const YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);

    /// Opaque color from linear components.
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Component-wise linear interpolation, `t = 0` gives `self`.
    ///
    /// Same formula as GLSL/WGSL `mix`: `a * (1 - t) + b * t`.
    #[inline]
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let mix = |a: f32, b: f32| a * (1.0 - t) + b * t;
        Color {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }

    /// Largest per-channel absolute difference.
    pub fn max_channel_delta(self, other: Color) -> f32 {
        (self.r - other.r)
            .abs()
            .max((self.g - other.g).abs())
            .max((self.b - other.b).abs())
            .max((self.a - other.a).abs())
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    pub fn to_wgpu(self) -> wgpu::Color {
        wgpu::Color {
            r: self.r as f64,
            g: self.g as f64,
            b: self.b as f64,
            a: self.a as f64,
        }
    }

    /// Converts to egui's sRGB-encoded 8-bit color.
    pub fn to_egui(self) -> egui::Color32 {
        egui::Rgba::from_rgba_unmultiplied(self.r, self.g, self.b, self.a).into()
    }
}
