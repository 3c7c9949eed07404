/*!
# Nova 3D Core

Resource-lifetime layer for the Nova 3D rendering engine.

This crate provides the allocation/lookup core that manages opaque resource
handles:

- **Pool**: a generic handle-based object pool — stable integer handles over
  a growable backing store with LIFO freelist slot reuse and generational
  handle validation
- **ShaderCache**: a material-keyed deduplication cache for compiled shaders,
  backed by append-only storage
- **GraphicsDevice**: the trait surface of the GPU backend the cache consumes
  ("construct a shader from a description"); real backends live in their own
  crates

Consumers (render queues, scene accumulators) hold handles obtained here and
pass them back into `get` during a later phase; they never touch internal
storage directly.
*/

// Internal modules
mod engine;
mod error;
pub mod graphics_device;
pub mod log;
pub mod resource;

// Main nova3d namespace module
pub mod nova3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine facade (logger host)
    pub use crate::engine::Engine;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{DefaultLogger, LogEntry, LogSeverity, Logger};
        // Note: engine_* macros are NOT re-exported here - they are exported
        // at the crate root by #[macro_export]
    }

    // Graphics device sub-module
    pub mod graphics_device {
        pub use crate::graphics_device::*;
    }

    // Resource sub-module
    pub mod resource {
        pub use crate::resource::*;
    }
}
