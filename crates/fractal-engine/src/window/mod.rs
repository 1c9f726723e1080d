//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and Window, and wires them to the GPU layer
//! and the overlay.

mod runtime;

pub use runtime::{LoopState, Runtime, RuntimeConfig};
