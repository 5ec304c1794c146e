//! Configuration loader with hierarchical merging.
//!
//! # Load Order
//!
//! 1. Default values (compile-time)
//! 2. Global config (`~/.orbit/config.toml`)
//! 3. Project config (`<project>/.orbit/config.toml`)
//! 4. Explicit config file (`--config <FILE>`)
//! 5. Environment variables (`ORBIT_*`)
//!
//! Each layer overrides the previous for the keys it sets.

use super::{
    default_config_path, ConfigError, ConfigOverlay, OrbitConfig, PROJECT_CONFIG_DIR,
    PROJECT_CONFIG_FILE,
};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Helper macro for parsing boolean environment variables.
macro_rules! parse_env_bool {
    ($field:expr, $var:literal) => {
        if let Ok(val) = std::env::var($var) {
            $field = parse_bool(&val)
                .ok_or_else(|| ConfigError::invalid_env_var($var, "expected bool"))?;
        }
    };
}

/// Configuration loader with builder pattern.
///
/// # Example
///
/// ```no_run
/// use orbit_runtime::config::ConfigLoader;
///
/// let config = ConfigLoader::new()
///     .with_project_root("/path/to/project")
///     .skip_env_vars()
///     .load()?;
/// # Ok::<(), orbit_runtime::config::ConfigError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    /// Global config file path (defaults to ~/.orbit/config.toml).
    global_config_path: Option<PathBuf>,

    /// Project root directory.
    project_root: Option<PathBuf>,

    /// Explicit config file; must exist when set.
    config_file: Option<PathBuf>,

    /// Skip environment variable loading.
    skip_env: bool,

    /// Skip global config loading.
    skip_global: bool,

    /// Skip project config loading.
    skip_project: bool,
}

impl ConfigLoader {
    /// Creates a new loader with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom global config path.
    #[must_use]
    pub fn with_global_config(mut self, path: impl Into<PathBuf>) -> Self {
        self.global_config_path = Some(path.into());
        self
    }

    /// Sets the project root directory.
    ///
    /// Project config will be loaded from `<project_root>/.orbit/config.toml`.
    #[must_use]
    pub fn with_project_root(mut self, path: impl Into<PathBuf>) -> Self {
        self.project_root = Some(path.into());
        self
    }

    /// Adds an explicit config file layered above the project config.
    ///
    /// Unlike the global and project files, a missing explicit file is an
    /// error.
    #[must_use]
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Skips environment variable loading.
    ///
    /// Useful for testing with deterministic config.
    #[must_use]
    pub fn skip_env_vars(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Skips global config loading.
    #[must_use]
    pub fn skip_global_config(mut self) -> Self {
        self.skip_global = true;
        self
    }

    /// Skips project config loading.
    #[must_use]
    pub fn skip_project_config(mut self) -> Self {
        self.skip_project = true;
        self
    }

    /// Loads and merges configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if any config file exists but cannot be
    /// parsed, if the explicit file cannot be read, or if an environment
    /// variable holds an invalid value. Missing global and project files
    /// are silently ignored.
    pub fn load(&self) -> Result<OrbitConfig, ConfigError> {
        let mut config = OrbitConfig::default();

        // Layer 1: Global config
        if !self.skip_global {
            let global_path = self
                .global_config_path
                .clone()
                .unwrap_or_else(default_config_path);

            if let Some(global_config) = load_optional(&global_path)? {
                debug!(path = %global_path.display(), "Loaded global config");
                config.apply(&global_config);
            }
        }

        // Layer 2: Project config
        if !self.skip_project {
            if let Some(ref project_root) = self.project_root {
                let project_config_path = project_root
                    .join(PROJECT_CONFIG_DIR)
                    .join(PROJECT_CONFIG_FILE);

                if let Some(project_config) = load_optional(&project_config_path)? {
                    debug!(
                        path = %project_config_path.display(),
                        project = %project_root.display(),
                        "Loaded project config"
                    );
                    config.apply(&project_config);
                }
            }
        }

        // Layer 3: Explicit file
        if let Some(ref path) = self.config_file {
            let explicit = load_required(path)?;
            debug!(path = %path.display(), "Loaded explicit config");
            config.apply(&explicit);
        }

        // Layer 4: Environment variables
        if !self.skip_env {
            apply_env_vars(&mut config)?;
        }

        Ok(config)
    }
}

fn load_optional(path: &Path) -> Result<Option<ConfigOverlay>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    load_required(path).map(Some)
}

fn load_required(path: &Path) -> Result<ConfigOverlay, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    ConfigOverlay::from_toml(&content).map_err(|e| ConfigError::parse_toml(path, e))
}

/// Applies environment variable overrides.
fn apply_env_vars(config: &mut OrbitConfig) -> Result<(), ConfigError> {
    parse_env_bool!(config.debug, "ORBIT_DEBUG");

    if let Ok(val) = std::env::var("ORBIT_LOG_LEVEL") {
        config.log_level = Some(val);
    }

    if let Ok(val) = std::env::var("ORBIT_OPERATIONS_CAPACITY") {
        config.operations.capacity = val.trim().parse().map_err(|_| {
            ConfigError::invalid_env_var("ORBIT_OPERATIONS_CAPACITY", "expected unsigned integer")
        })?;
    }

    Ok(())
}

/// Parses a boolean from string.
///
/// Accepts: "true", "false", "1", "0", "yes", "no", "on", "off"
/// (case-insensitive).
fn parse_bool(s: &str) -> Option<bool> {
    match s.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
