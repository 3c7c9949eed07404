//! Resource lifetime module
//!
//! The allocation/lookup core of the engine: a generic handle pool and the
//! material-keyed shader cache built on the same handle-indexing idiom.

pub mod pool;
pub mod shader_cache;

pub use pool::{Handle, Pool, DEFAULT_CAPACITY};
pub use shader_cache::{MaterialShaderDesc, ShaderCache};
