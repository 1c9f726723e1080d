//! GPU rendering subsystem.
//!
//! Provides the pieces an app needs to put a full-screen shader on screen:
//! - `program`: compile + link shader stages into a render pipeline
//! - `quad`: the static full-screen quad geometry
//! - `ctx`: the per-frame device/target handles passed to draw callbacks

mod ctx;
mod error;
pub mod program;
pub mod quad;

pub use ctx::{RenderCtx, RenderTarget};
pub use error::ProgramError;
pub use program::{ProgramLayout, ShaderProgram, ShaderStage, StageKind};
pub use quad::{QuadMesh, QuadVertex};
