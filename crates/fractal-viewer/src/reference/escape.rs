use num_complex::Complex64;

/// Escape radius squared.
pub const BAILOUT: f64 = 4.0;

/// Maps a pixel (bottom-left origin) to its point on the complex plane.
///
/// The short axis spans `[-zoom, zoom]` around `offset`; the long axis is
/// stretched by the aspect ratio.
pub fn pixel_to_complex(
    pixel: [f64; 2],
    resolution: [f64; 2],
    zoom: f64,
    offset: [f64; 2],
) -> Complex64 {
    let mut u = pixel[0] / resolution[0] * 2.0 - 1.0;
    let v = pixel[1] / resolution[1] * 2.0 - 1.0;
    u *= resolution[0] / resolution[1];
    Complex64::new(u * zoom + offset[0], v * zoom + offset[1])
}

/// Number of `z = z² + c` steps from `z = 0` before `|z|² > 4`.
///
/// Returns `max_iterations` if the orbit stays bounded that long.
pub fn escape_time(c: Complex64, max_iterations: i32) -> i32 {
    let mut z = Complex64::new(0.0, 0.0);
    let mut iterations = 0;
    while iterations < max_iterations {
        z = z * z + c;
        if z.norm_sqr() > BAILOUT {
            break;
        }
        iterations += 1;
    }
    iterations
}

#[cfg(test)]
mod tests {
    use super::*;

    const HD: [f64; 2] = [1920.0, 1080.0];

    #[test]
    fn image_center_maps_to_offset() {
        let c = pixel_to_complex([960.0, 540.0], HD, 1.0, [0.0, 0.0]);
        assert_eq!(c, Complex64::new(0.0, 0.0));

        let c = pixel_to_complex([960.0, 540.0], HD, 3.0, [-0.75, 0.1]);
        assert_eq!(c, Complex64::new(-0.75, 0.1));
    }

    #[test]
    fn corners_span_aspect_corrected_region() {
        let aspect = HD[0] / HD[1];
        let bl = pixel_to_complex([0.0, 0.0], HD, 1.0, [0.0, 0.0]);
        let tr = pixel_to_complex(HD, HD, 1.0, [0.0, 0.0]);
        assert!((bl.re + aspect).abs() < 1e-12 && (bl.im + 1.0).abs() < 1e-12);
        assert!((tr.re - aspect).abs() < 1e-12 && (tr.im - 1.0).abs() < 1e-12);
    }

    #[test]
    fn zoom_scales_around_offset() {
        let a = pixel_to_complex([1920.0, 540.0], HD, 1.0, [0.0, 0.0]);
        let b = pixel_to_complex([1920.0, 540.0], HD, 0.5, [0.0, 0.0]);
        assert!((b.re - a.re * 0.5).abs() < 1e-12);
    }

    #[test]
    fn origin_never_escapes() {
        for cap in [1, 100, 1000, 50_000] {
            assert_eq!(escape_time(Complex64::new(0.0, 0.0), cap), cap);
        }
    }

    #[test]
    fn escape_is_tested_before_counting() {
        // z1 = 3, |z1|² = 9: escapes on the first step, counter never moves.
        assert_eq!(escape_time(Complex64::new(3.0, 0.0), 100), 0);
        // z1 = 2 sits on the bailout circle, z2 = 6 leaves it.
        assert_eq!(escape_time(Complex64::new(2.0, 0.0), 100), 1);
    }

    #[test]
    fn bounded_points_hit_the_cap() {
        assert_eq!(escape_time(Complex64::new(-1.0, 0.0), 500), 500);
        assert_eq!(escape_time(Complex64::new(-0.1, 0.1), 500), 500);
    }

    #[test]
    fn zero_cap_returns_zero() {
        assert_eq!(escape_time(Complex64::new(0.0, 0.0), 0), 0);
    }
}
