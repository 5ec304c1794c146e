//! Runtime facade.

use crate::bootstrap;
use crate::config::OrbitConfig;
use orbit_core::operation::OperationRegistry;
use orbit_core::{Args, Command, Container, CoreError, SharedCommand};
use std::sync::Arc;
use tracing::debug;

/// Owns the configuration, the container and the operation registry.
///
/// # Example
///
/// ```
/// use orbit_core::args;
/// use orbit_runtime::config::OrbitConfig;
/// use orbit_runtime::{keys, GameObject, Order, Runtime};
///
/// let runtime = Runtime::new(OrbitConfig::default()).unwrap();
/// let order = Order::new()
///     .with_operation_id("ship/move")
///     .with_operation_type("Move")
///     .with_game_object(GameObject::new());
///
/// runtime.run(keys::START, args![order.clone()]).unwrap();
/// assert!(runtime.operations().is_active("ship/move"));
///
/// runtime.run(keys::STOP, args![order]).unwrap();
/// assert!(runtime.operations().is_empty());
/// ```
#[derive(Debug)]
pub struct Runtime {
    config: OrbitConfig,
    container: Container,
    operations: Arc<OperationRegistry>,
}

impl Runtime {
    /// Builds a runtime, registering built-ins if the config asks for it.
    ///
    /// # Errors
    ///
    /// Propagates failures from the bootstrap.
    pub fn new(config: OrbitConfig) -> Result<Self, CoreError> {
        let container = Container::new();
        let operations = Arc::new(OperationRegistry::with_capacity(
            config.operations.capacity,
        ));

        if config.bootstrap.register_builtins {
            bootstrap::register_builtins(&container, Arc::clone(&operations))?;
        } else {
            debug!("Skipping built-in registrations");
        }

        Ok(Self {
            config,
            container,
            operations,
        })
    }

    /// The configuration this runtime was built with.
    #[must_use]
    pub fn config(&self) -> &OrbitConfig {
        &self.config
    }

    /// The dependency container.
    #[must_use]
    pub fn container(&self) -> &Container {
        &self.container
    }

    /// The operation registry.
    #[must_use]
    pub fn operations(&self) -> &Arc<OperationRegistry> {
        &self.operations
    }

    /// Resolves a command under `key` with `args` without running it.
    ///
    /// # Errors
    ///
    /// Propagates resolution failures.
    pub fn command(&self, key: &str, args: Args) -> Result<SharedCommand, CoreError> {
        self.container.resolve(key, args)
    }

    /// Resolves a command under `key` with `args` and executes it.
    ///
    /// # Errors
    ///
    /// Propagates resolution and execution failures.
    pub fn run(&self, key: &str, args: Args) -> Result<(), CoreError> {
        self.command(key, args)?.execute()
    }
}
