//! CPU evaluation of the fragment shader's math.
//!
//! Nothing on the render path calls into this module. It mirrors
//! `fractal.frag.wgsl` in `f64` so the coordinate mapping, escape count and
//! palette can be checked without a GPU.

pub mod escape;
pub mod palette;

pub use escape::{escape_time, pixel_to_complex};
pub use palette::{map_color, shade};
