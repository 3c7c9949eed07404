/// GraphicsDevice and Shader traits plus the shader descriptor
use std::sync::Arc;

use crate::error::Result;

/// Shader stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    /// Vertex shader
    Vertex,
    /// Fragment/Pixel shader
    Fragment,
    /// Compute shader
    Compute,
}

/// Descriptor for creating a shader
#[derive(Debug, Clone)]
pub struct ShaderDesc<'a> {
    /// Compiled shader bytecode (SPIR-V or DXIL)
    pub code: &'a [u8],
    /// Shader stage
    pub stage: ShaderStage,
    /// Entry point function name
    pub entry_point: String,
}

/// Shader resource trait
///
/// Implemented by backend-specific shader types. The backend object is
/// destroyed when the last reference is dropped.
pub trait Shader: Send + Sync + std::fmt::Debug {
    /// Stage this shader was compiled for
    fn stage(&self) -> ShaderStage;
}

/// Device abstraction consumed by the resource layer
///
/// A single capability: construct a shader from its description. The call is
/// synchronous; any deferred compile diagnostics are the backend's concern.
pub trait GraphicsDevice: Send + Sync {
    /// Create a shader from bytecode
    ///
    /// # Errors
    ///
    /// Returns `Error::BackendError` or `Error::OutOfMemory` when the
    /// backend cannot construct the shader.
    fn create_shader(&mut self, desc: &ShaderDesc) -> Result<Arc<dyn Shader>>;
}
