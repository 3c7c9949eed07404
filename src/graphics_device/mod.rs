//! Graphics device module - the GPU construction capability consumed by the
//! resource layer
//!
//! Only the shader-construction surface lives here; real backends (Vulkan,
//! DirectX, etc.) implement these traits in their own crates.

pub mod shader;

pub use shader::*;

// Mock graphics device for tests (no GPU required)
#[cfg(test)]
pub mod mock_graphics_device;
