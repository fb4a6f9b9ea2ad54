//! Error Types
//!
//! Layout, tokenizing and element transitions never fail. Errors only come
//! from the boundaries: the surface backend and configuration loading.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the scene runtime
#[derive(Debug, Error)]
pub enum SceneError {
    /// The render surface could not be written
    #[error("Render surface I/O failed: {0}")]
    Surface(#[from] std::io::Error),

    /// Configuration could not be loaded or was invalid
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result alias for scene runtime operations
pub type Result<T> = std::result::Result<T, SceneError>;
