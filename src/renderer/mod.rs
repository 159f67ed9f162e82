//! WebGPU rendering module
//!
//! `shapes` builds a triangle list from the game state each frame;
//! `pipeline` uploads it and draws it to the surface.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use vertex::Vertex;
