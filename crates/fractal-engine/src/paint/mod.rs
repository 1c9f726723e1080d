//! Color model shared between the renderers, the overlay and CPU-side
//! reference code.

pub mod color;

pub use color::Color;
