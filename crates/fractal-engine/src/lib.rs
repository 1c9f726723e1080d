//! Fractal engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by the viewer:
//! window loop, device/surface, input sampling, the egui overlay host and the
//! shader program builder.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod overlay;
pub mod paint;
pub mod render;
