use fractal_engine::paint::Color;

/// Gradient stops: start of each segment and its start color. The last
/// segment runs from 0.80 to 1.0.
pub(crate) const STOPS: [(f32, Color); 6] = [
    (0.00, Color::BLACK),
    (0.16, Color::BLUE),
    (0.32, Color::CYAN),
    (0.48, Color::GREEN),
    (0.64, Color::YELLOW),
    (0.80, Color::RED),
];

/// Color ramp over `t` in `[0, 1]`: black, blue, cyan, green, yellow, red,
/// white, linear within each segment.
pub fn map_color(t: f32) -> Color {
    for (i, &(start, from)) in STOPS.iter().enumerate() {
        let (end, to) = match STOPS.get(i + 1) {
            Some(&next) => next,
            None => (1.0, Color::WHITE),
        };
        if t < end || i == STOPS.len() - 1 {
            return from.lerp(to, (t - start) / (end - start));
        }
    }
    Color::WHITE
}

/// Final pixel color for an escape count.
pub fn shade(iterations: i32, max_iterations: i32) -> Color {
    if iterations == max_iterations {
        return Color::BLACK;
    }
    map_color(iterations as f32 / max_iterations as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn capped_pixels_are_black() {
        for cap in [100, 1000, 50_000] {
            assert_eq!(shade(cap, cap), Color::BLACK);
        }
    }

    #[test]
    fn endpoints() {
        assert_eq!(map_color(0.0), Color::BLACK);
        assert!(map_color(1.0).max_channel_delta(Color::WHITE) < EPS);
    }

    #[test]
    fn stops_hit_their_colors() {
        for (t, c) in [
            (0.16, Color::BLUE),
            (0.32, Color::CYAN),
            (0.48, Color::GREEN),
            (0.64, Color::YELLOW),
            (0.80, Color::RED),
        ] {
            assert!(map_color(t).max_channel_delta(c) < EPS, "stop at {t}");
        }
    }

    #[test]
    fn continuous_at_breakpoints() {
        for t in [0.16_f32, 0.32, 0.48, 0.64, 0.80] {
            let below = map_color(t - 1e-5);
            let above = map_color(t);
            assert!(below.max_channel_delta(above) < 1e-3, "jump at {t}");
        }
    }

    #[test]
    fn half_way_is_green_to_yellow() {
        // 50 of 100: segment [0.48, 0.64), local factor 0.125.
        let c = shade(50, 100);
        let expected = Color::GREEN.lerp(Color::YELLOW, 0.125);
        assert!(c.max_channel_delta(expected) < EPS);
        assert!((c.r - 0.125).abs() < EPS);
        assert!((c.g - 1.0).abs() < EPS);
        assert_eq!(c.b, 0.0);
    }

    #[test]
    fn every_escape_count_gives_a_finite_opaque_color() {
        for i in 0..100 {
            let c = shade(i, 100);
            assert!(c.is_finite());
            assert!((c.a - 1.0).abs() < EPS);
        }
    }
}
