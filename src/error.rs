//! Error types for the Nova3D core
//!
//! This module defines the error types used by the resource-lifetime layer:
//! handle validation, shader cache lookups, and device construction failures.

use std::fmt;

/// Result type for Nova3D core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Nova3D core errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Handle is out of range, stale, or refers to a released slot
    InvalidHandle(String),

    /// Shader cache lookup for a material with no compiled shader
    CacheMiss(String),

    /// Backend-specific error (Vulkan, DirectX, etc.)
    BackendError(String),

    /// Out of GPU memory
    OutOfMemory,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidHandle(msg) => write!(f, "Invalid handle: {}", msg),
            Error::CacheMiss(msg) => write!(f, "Cache miss: {}", msg),
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::OutOfMemory => write!(f, "Out of GPU memory"),
        }
    }
}

impl std::error::Error for Error {}

/// Build an error of the given variant, logging it through the engine logger
///
/// The message is logged at ERROR severity with file:line information before
/// the error value is produced.
///
/// # Example
///
/// ```ignore
/// let err = engine_err!(CacheMiss, "nova3d::ShaderCache",
///     "no compiled shader for material '{}'", material_id);
/// ```
#[macro_export]
macro_rules! engine_err {
    ($variant:ident, $source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::engine_error!($source, "{}", message);
        $crate::nova3d::Error::$variant(message)
    }};
}

/// Log an error and return it from the enclosing function
///
/// Shorthand for `return Err(engine_err!(...))`.
#[macro_export]
macro_rules! engine_bail {
    ($variant:ident, $source:expr, $($arg:tt)*) => {
        return Err($crate::engine_err!($variant, $source, $($arg)*))
    };
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
