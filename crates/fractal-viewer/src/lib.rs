//! Interactive Mandelbrot viewer on top of `fractal-engine`.
//!
//! The heavy lifting happens in a fragment shader; this crate owns the view
//! state, maps keys and the control panel onto it, and feeds the shader.

pub mod app;
pub mod config;
pub mod navigation;
pub mod panel;
pub mod reference;
pub mod renderer;
pub mod shaders;
pub mod view;
