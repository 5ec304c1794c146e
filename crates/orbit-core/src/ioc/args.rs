//! Type-erased resolution arguments.

use crate::CoreError;
use std::any::{type_name, Any};
use std::fmt;
use std::sync::Arc;

/// A single type-erased argument value.
pub type ArgValue = Arc<dyn Any + Send + Sync>;

/// Ordered arguments passed to a factory.
///
/// Values are stored behind `Arc`, so cloning `Args` is cheap and commands
/// can keep their arguments around for repeated resolution.
///
/// Typed access is exact: a value pushed as `Arc<MoveCommand>` is not
/// retrievable as `SharedCommand`. Coerce trait objects before pushing.
///
/// # Example
///
/// ```
/// use orbit_core::{args, ioc::Args};
///
/// let args = args![String::from("Commands.Move"), 42u32];
/// assert_eq!(args.len(), 2);
/// assert_eq!(args.get_str(0).unwrap(), "Commands.Move");
/// assert_eq!(*args.get::<u32>(1).unwrap(), 42);
/// assert!(args.get::<i64>(1).is_err());
/// ```
#[derive(Clone, Default)]
pub struct Args {
    values: Vec<ArgValue>,
}

impl Args {
    /// Creates an empty argument list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a value, builder style.
    #[must_use]
    pub fn with<T: Any + Send + Sync>(mut self, value: T) -> Self {
        self.push(value);
        self
    }

    /// Appends a value.
    pub fn push<T: Any + Send + Sync>(&mut self, value: T) {
        self.values.push(Arc::new(value));
    }

    /// Number of arguments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if there are no arguments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Fails unless exactly `expected` arguments were given.
    ///
    /// `key` names the dependency in the error message.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidArgument`] on arity mismatch.
    pub fn expect_len(&self, key: &str, expected: usize) -> Result<(), CoreError> {
        if self.values.len() == expected {
            Ok(())
        } else {
            Err(CoreError::invalid_argument(format!(
                "{key} requires exactly {expected} argument(s), got {}",
                self.values.len()
            )))
        }
    }

    /// Typed reference to the argument at `index`, if present and of type `T`.
    #[must_use]
    pub fn try_get<T: Any>(&self, index: usize) -> Option<&T> {
        self.values.get(index)?.downcast_ref::<T>()
    }

    /// Typed reference to the argument at `index`.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidArgument`] if the argument is missing or has
    /// another type.
    pub fn get<T: Any>(&self, index: usize) -> Result<&T, CoreError> {
        let value = self
            .values
            .get(index)
            .ok_or_else(|| CoreError::invalid_argument(format!("missing argument {index}")))?;
        value.downcast_ref::<T>().ok_or_else(|| {
            CoreError::invalid_argument(format!(
                "argument {index} must be {}",
                type_name::<T>()
            ))
        })
    }

    /// String argument at `index`; accepts both `String` and `&'static str`.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidArgument`] if the argument is missing or not a
    /// string.
    pub fn get_str(&self, index: usize) -> Result<&str, CoreError> {
        if let Some(s) = self.try_get::<String>(index) {
            return Ok(s);
        }
        if let Some(s) = self.try_get::<&'static str>(index) {
            return Ok(s);
        }
        match self.values.get(index) {
            Some(_) => Err(CoreError::invalid_argument(format!(
                "argument {index} must be a string"
            ))),
            None => Err(CoreError::invalid_argument(format!(
                "missing argument {index}"
            ))),
        }
    }
}

impl fmt::Debug for Args {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Args")
            .field("len", &self.values.len())
            .finish()
    }
}

/// Builds [`Args`] from a list of values.
///
/// ```
/// use orbit_core::args;
///
/// let empty = args![];
/// assert!(empty.is_empty());
///
/// let two = args!["key", 7i32];
/// assert_eq!(two.len(), 2);
/// ```
#[macro_export]
macro_rules! args {
    () => {
        $crate::ioc::Args::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::ioc::Args::new()$(.with($value))+
    };
}
