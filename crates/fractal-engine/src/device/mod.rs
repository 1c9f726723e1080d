//! Window surface and GPU device.
//!
//! `Gpu` owns everything wgpu hands out for one window. The rest of the
//! engine borrows the device and queue from it and goes through it to
//! acquire, submit and present frames.

mod frame;
mod gpu;
mod init;
mod surface;

pub use frame::GpuFrame;
pub use gpu::Gpu;
pub use init::GpuInit;
pub use surface::SurfaceErrorAction;
