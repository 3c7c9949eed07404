/// Shader cache keyed by material identifier.
///
/// Deduplicates shader compilation: the first `create` for a material goes
/// through the graphics device, later calls with the same identifier return
/// the cached shader without touching the device.
///
/// Storage is append-only — the next free index is always the length of the
/// shader sequence, indices are never reused, and entries live until the
/// cache itself is dropped. Single-threaded like the Pool: the implicit
/// next-index read makes concurrent appends unsafe without external
/// serialization.
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::error::Result;
use crate::graphics_device::{GraphicsDevice, Shader, ShaderDesc, ShaderStage};

/// Descriptor for registering a material's shader
#[derive(Debug, Clone)]
pub struct MaterialShaderDesc {
    /// Stable external identifier the shader is cached under
    pub material_id: String,
    /// Shader stage
    pub stage: ShaderStage,
    /// Compiled shader bytecode (SPIR-V or DXIL)
    pub code: Vec<u8>,
    /// Entry point function name
    pub entry_point: String,
}

/// Material-keyed shader cache with append-only storage
pub struct ShaderCache {
    /// Compiled shaders in creation order; an entry's index is its handle
    shaders: Vec<Arc<dyn Shader>>,
    /// Material identifier -> index into `shaders`
    material_index: FxHashMap<String, usize>,
}

impl ShaderCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self {
            shaders: Vec::new(),
            material_index: FxHashMap::default(),
        }
    }

    /// Return the shader for a material, compiling it on first use.
    ///
    /// When the material is already cached the device is not called again
    /// and the existing shader is returned as-is.
    ///
    /// # Errors
    ///
    /// Propagates the device's construction failure (`BackendError`,
    /// `OutOfMemory`); the cache is left unchanged in that case.
    pub fn create(
        &mut self,
        device: &mut dyn GraphicsDevice,
        desc: &MaterialShaderDesc,
    ) -> Result<Arc<dyn Shader>> {
        if let Some(&index) = self.material_index.get(&desc.material_id) {
            crate::engine_trace!("nova3d::ShaderCache",
                "cache hit for material '{}' (shader {})", desc.material_id, index);
            return Ok(Arc::clone(&self.shaders[index]));
        }

        let shader = device.create_shader(&ShaderDesc {
            code: &desc.code,
            stage: desc.stage,
            entry_point: desc.entry_point.clone(),
        })?;

        let index = self.shaders.len();
        self.shaders.push(Arc::clone(&shader));
        self.material_index.insert(desc.material_id.clone(), index);
        crate::engine_debug!("nova3d::ShaderCache",
            "compiled shader {} for material '{}'", index, desc.material_id);
        Ok(shader)
    }

    /// Look up the compiled shader for a material
    ///
    /// # Errors
    ///
    /// `Error::CacheMiss` when no shader has been created for the material.
    pub fn get(&self, material_id: &str) -> Result<Arc<dyn Shader>> {
        match self.material_index.get(material_id) {
            Some(&index) => Ok(Arc::clone(&self.shaders[index])),
            None => Err(crate::engine_err!(CacheMiss, "nova3d::ShaderCache",
                "no compiled shader for material '{}'", material_id)),
        }
    }

    /// Whether a shader has been created for this material
    pub fn contains(&self, material_id: &str) -> bool {
        self.material_index.contains_key(material_id)
    }

    /// Number of compiled shaders stored
    pub fn len(&self) -> usize {
        self.shaders.len()
    }

    /// Whether the cache holds no shaders
    pub fn is_empty(&self) -> bool {
        self.shaders.is_empty()
    }
}

impl Default for ShaderCache {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "shader_cache_tests.rs"]
mod tests;
