//! String-keyed dependency container.

use super::{Args, Factory, RegisterCommand};
use crate::command::SharedCommand;
use crate::CoreError;
use parking_lot::RwLock;
use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Built-in key that resolves to a [`RegisterCommand`].
///
/// Arguments: the key to register (`String` or `&'static str`) and the
/// [`Factory`] to store. The result is a [`SharedCommand`] that performs the
/// registration when executed.
pub const REGISTER_KEY: &str = "IoC.Register";

/// Registry mapping string keys to factories.
///
/// Cloning a container is cheap and yields a handle to the same registry,
/// so factories and commands can hold onto it. All methods take `&self`
/// and are safe to call from multiple threads.
///
/// Factories run outside the registry lock, so a factory may resolve other
/// dependencies or even register new ones.
///
/// # Example
///
/// ```
/// use orbit_core::args;
/// use orbit_core::ioc::{Args, Container};
///
/// let ioc = Container::new();
/// ioc.register("Greeting", |_: &Container, args: &Args| {
///     Ok(format!("hello {}", args.get_str(0)?))
/// });
///
/// let s: String = ioc.resolve("Greeting", args!["world"]).unwrap();
/// assert_eq!(s, "hello world");
/// ```
#[derive(Clone, Default)]
pub struct Container {
    entries: Arc<RwLock<HashMap<String, Factory>>>,
}

impl Container {
    /// Creates an empty container.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a typed factory under `key`, replacing any previous one.
    pub fn register<T, F>(&self, key: impl Into<String>, f: F)
    where
        T: Any,
        F: Fn(&Self, &Args) -> Result<T, CoreError> + Send + Sync + 'static,
    {
        self.register_factory(key, Factory::new(f));
    }

    /// Registers an already built factory under `key`.
    ///
    /// Last registration wins. [`REGISTER_KEY`] is reserved: a factory
    /// registered under it is dropped with a warning.
    pub fn register_factory(&self, key: impl Into<String>, factory: Factory) {
        let key = key.into();
        let produces = factory.produces();
        if key == REGISTER_KEY {
            warn!(key = %key, produces, "Ignoring registration under reserved key");
            return;
        }
        let replaced = self.entries.write().insert(key.clone(), factory).is_some();
        debug!(key = %key, produces, replaced, "Registered dependency");
    }

    /// Resolves `key` with `args` and returns the produced value as `T`.
    ///
    /// [`REGISTER_KEY`] is always available and yields a registration
    /// command.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotRegistered`] if nothing is registered under `key`
    /// - [`CoreError::TypeMismatch`] if the factory produces another type
    ///   (factories built with [`Factory::command`] also satisfy
    ///   [`SharedCommand`])
    /// - any error returned by the factory itself
    pub fn resolve<T: Any>(&self, key: &str, args: Args) -> Result<T, CoreError> {
        if key == REGISTER_KEY {
            let command: SharedCommand = Arc::new(RegisterCommand::from_args(self.clone(), &args)?);
            return downcast(key, Box::new(command), type_name::<SharedCommand>());
        }

        // Clone out so the factory runs without holding the lock.
        let factory = self
            .entries
            .read()
            .get(key)
            .cloned()
            .ok_or_else(|| CoreError::not_registered(key))?;

        trace!(key, args = args.len(), "Resolving dependency");
        let mut value = factory.invoke(self, &args)?;
        if TypeId::of::<T>() == TypeId::of::<SharedCommand>() {
            value = factory.as_command(value);
        }
        downcast(key, value, factory.produces())
    }

    /// Returns `true` if `key` has a factory (or is [`REGISTER_KEY`]).
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        key == REGISTER_KEY || self.entries.read().contains_key(key)
    }

    /// Number of registered keys, not counting [`REGISTER_KEY`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns `true` if nothing has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Registered keys in sorted order.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries.read().keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Removes every registration.
    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

impl std::fmt::Debug for Container {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Container")
            .field("keys", &self.keys())
            .finish()
    }
}

fn downcast<T: Any>(key: &str, value: Box<dyn Any>, produces: &str) -> Result<T, CoreError> {
    value
        .downcast::<T>()
        .map(|boxed| *boxed)
        .map_err(|_| CoreError::TypeMismatch {
            key: key.to_string(),
            expected: type_name::<T>().to_string(),
            produced: produces.to_string(),
        })
}
