//! Configuration types.
//!
//! All types implement [`Default`] for compile-time fallback values.
//! Config files are read as [`ConfigOverlay`], where an absent key leaves
//! the lower layer untouched.

use super::ConfigError;
use serde::{Deserialize, Serialize};

/// Main configuration structure.
///
/// This is the unified configuration after merging all layers. Every field
/// is optional in a config file.
///
/// # Example
///
/// ```
/// use orbit_runtime::config::OrbitConfig;
///
/// let config = OrbitConfig::default();
/// assert!(!config.debug);
/// assert_eq!(config.operations.capacity, 64);
/// assert!(config.bootstrap.register_builtins);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OrbitConfig {
    /// Enable debug logging.
    pub debug: bool,

    /// Log filter used when neither a CLI flag nor `RUST_LOG` sets one.
    pub log_level: Option<String>,

    /// Operation registry settings.
    pub operations: OperationsConfig,

    /// Dependency bootstrap settings.
    pub bootstrap: BootstrapConfig,
}

impl OrbitConfig {
    /// Creates a new config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Serializes to TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Serialize`] if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Deserializes from TOML string.
    ///
    /// # Errors
    ///
    /// Returns error if deserialization fails.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Applies the keys present in `overlay`, leaving the others as they are.
    pub fn apply(&mut self, overlay: &ConfigOverlay) {
        if let Some(debug) = overlay.debug {
            self.debug = debug;
        }
        if let Some(ref level) = overlay.log_level {
            self.log_level = Some(level.clone());
        }
        if let Some(capacity) = overlay.operations.capacity {
            self.operations.capacity = capacity;
        }
        if let Some(register_builtins) = overlay.bootstrap.register_builtins {
            self.bootstrap.register_builtins = register_builtins;
        }
    }
}

/// One config layer as written in a file.
///
/// Every field is `None` unless the file sets it, so a layer can restore a
/// value to its default.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigOverlay {
    /// See [`OrbitConfig::debug`].
    pub debug: Option<bool>,
    /// See [`OrbitConfig::log_level`].
    pub log_level: Option<String>,
    /// `[operations]` table.
    pub operations: OperationsOverlay,
    /// `[bootstrap]` table.
    pub bootstrap: BootstrapOverlay,
}

impl ConfigOverlay {
    /// Deserializes a layer from TOML string.
    ///
    /// # Errors
    ///
    /// Returns error if deserialization fails.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }
}

/// `[operations]` keys of a layer.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OperationsOverlay {
    /// See [`OperationsConfig::capacity`].
    pub capacity: Option<usize>,
}

/// `[bootstrap]` keys of a layer.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct BootstrapOverlay {
    /// See [`BootstrapConfig::register_builtins`].
    pub register_builtins: Option<bool>,
}

/// Operation registry configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OperationsConfig {
    /// Initial capacity of the operation map.
    pub capacity: usize,
}

impl Default for OperationsConfig {
    fn default() -> Self {
        Self { capacity: 64 }
    }
}

/// Dependency bootstrap configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BootstrapConfig {
    /// Register the built-in adapters, commands and actions at startup.
    pub register_builtins: bool,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            register_builtins: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_roundtrip() {
        let mut config = OrbitConfig::default();
        config.debug = true;
        config.log_level = Some("trace".into());
        config.operations.capacity = 8;

        let toml = config.to_toml().unwrap();
        let back = OrbitConfig::from_toml(&toml).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let config = OrbitConfig::from_toml(
            r#"
[operations]
capacity = 1024
"#,
        )
        .unwrap();

        assert_eq!(config.operations.capacity, 1024);
        assert!(!config.debug);
        assert!(config.bootstrap.register_builtins);
    }

    #[test]
    fn apply_overrides_only_present_keys() {
        let mut base = OrbitConfig::default();
        base.debug = true;
        base.operations.capacity = 16;

        let overlay = ConfigOverlay::from_toml(
            r#"
log_level = "info"

[bootstrap]
register_builtins = false
"#,
        )
        .unwrap();

        base.apply(&overlay);
        assert!(base.debug);
        assert_eq!(base.operations.capacity, 16);
        assert!(!base.bootstrap.register_builtins);
        assert_eq!(base.log_level.as_deref(), Some("info"));
    }

    #[test]
    fn apply_can_restore_defaults() {
        let mut base = OrbitConfig::default();
        base.debug = true;
        base.operations.capacity = 8;

        let overlay = ConfigOverlay::from_toml("debug = false\n[operations]\ncapacity = 64\n").unwrap();
        base.apply(&overlay);
        assert_eq!(base, OrbitConfig::default());
    }

    #[test]
    fn overlay_rejects_unknown_keys() {
        assert!(ConfigOverlay::from_toml("[operations]\nsize = 3\n").is_err());
    }

    #[test]
    fn serialize_error_code() {
        let err = ConfigError::from(
            toml::to_string(&vec![1u8]).expect_err("bare arrays are not TOML documents"),
        );
        assert_eq!(orbit_types::ErrorCode::code(&err), "CONFIG_SERIALIZE");
    }
}
