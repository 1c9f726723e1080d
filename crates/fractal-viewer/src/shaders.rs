//! WGSL sources, embedded at compile time.

pub const VERTEX: &str = include_str!("shaders/fractal.vert.wgsl");
pub const FRAGMENT: &str = include_str!("shaders/fractal.frag.wgsl");
