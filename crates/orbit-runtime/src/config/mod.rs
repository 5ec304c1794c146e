//! Configuration management with hierarchical layering.
//!
//! # Architecture
//!
//! ```text
//! Priority (highest to lowest):
//!
//! ┌──────────────────────────────────────────┐
//! │  1. Environment Variables (ORBIT_*)      │  Runtime override
//! ├──────────────────────────────────────────┤
//! │  2. Explicit file (--config)             │  One-off
//! ├──────────────────────────────────────────┤
//! │  3. Project Config (.orbit/config.toml)  │  Project-specific
//! ├──────────────────────────────────────────┤
//! │  4. Global Config (~/.orbit/config.toml) │  User defaults
//! ├──────────────────────────────────────────┤
//! │  5. Default Values (compile-time)        │  Fallback
//! └──────────────────────────────────────────┘
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Config Field | Type |
//! |----------|--------------|------|
//! | `ORBIT_DEBUG` | `debug` | bool |
//! | `ORBIT_LOG_LEVEL` | `log_level` | String |
//! | `ORBIT_OPERATIONS_CAPACITY` | `operations.capacity` | usize |
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.orbit/config.toml
//! debug = false
//! log_level = "info"
//!
//! [operations]
//! capacity = 64
//!
//! [bootstrap]
//! register_builtins = true
//! ```

mod error;
mod loader;
mod types;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use types::{
    BootstrapConfig, BootstrapOverlay, ConfigOverlay, OperationsConfig, OperationsOverlay,
    OrbitConfig,
};

/// Default global config directory.
pub fn default_config_dir() -> std::path::PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join(".orbit")
}

/// Default global config file path.
pub fn default_config_path() -> std::path::PathBuf {
    default_config_dir().join(PROJECT_CONFIG_FILE)
}

/// Project config directory name.
pub const PROJECT_CONFIG_DIR: &str = ".orbit";

/// Project config file name.
pub const PROJECT_CONFIG_FILE: &str = "config.toml";
