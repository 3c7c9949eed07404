//! Mock graphics device for unit tests (no GPU required)
//!
//! Records every create_shader call so tests can assert how many compiles
//! the cache actually issued and with which descriptors.

use std::sync::Arc;

use crate::error::Result;
use crate::graphics_device::{GraphicsDevice, Shader, ShaderDesc, ShaderStage};

/// Mock shader retaining the descriptor it was built from
#[derive(Debug)]
pub struct MockShader {
    pub stage: ShaderStage,
    pub entry_point: String,
    pub code_len: usize,
}

impl Shader for MockShader {
    fn stage(&self) -> ShaderStage {
        self.stage
    }
}

/// One recorded create_shader call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledRecord {
    pub stage: ShaderStage,
    pub entry_point: String,
    pub code_len: usize,
}

/// Mock graphics device
pub struct MockGraphicsDevice {
    /// Number of create_shader calls that succeeded
    pub compile_count: usize,
    /// Descriptors of every successful create_shader call, in order
    pub compiled: Vec<CompiledRecord>,
    /// When true, create_shader fails with a BackendError
    pub fail_compiles: bool,
}

impl MockGraphicsDevice {
    pub fn new() -> Self {
        Self {
            compile_count: 0,
            compiled: Vec::new(),
            fail_compiles: false,
        }
    }
}

impl Default for MockGraphicsDevice {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphicsDevice for MockGraphicsDevice {
    fn create_shader(&mut self, desc: &ShaderDesc) -> Result<Arc<dyn Shader>> {
        if self.fail_compiles {
            crate::engine_bail!(BackendError, "nova3d::MockGraphicsDevice",
                "mock compile failure for entry point '{}'", desc.entry_point);
        }
        self.compile_count += 1;
        self.compiled.push(CompiledRecord {
            stage: desc.stage,
            entry_point: desc.entry_point.clone(),
            code_len: desc.code.len(),
        });
        Ok(Arc::new(MockShader {
            stage: desc.stage,
            entry_point: desc.entry_point.clone(),
            code_len: desc.code.len(),
        }))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "mock_graphics_device_tests.rs"]
mod tests;
