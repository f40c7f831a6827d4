// src/rendering_lib/mod.rs

pub mod renderer;
pub mod shader;
pub mod vertex;

pub use renderer::{FrameParams, LineStripRenderer};
pub use shader::WGSL_SHADER_SOURCE;
pub use vertex::Vertex;
