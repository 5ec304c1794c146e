//! Type-erased dependency factories.

use super::{Args, Container};
use crate::command::{Command, SharedCommand};
use crate::CoreError;
use std::any::{type_name, Any};
use std::fmt;
use std::sync::Arc;

type Produce = dyn Fn(&Container, &Args) -> Result<Box<dyn Any>, CoreError> + Send + Sync;
type Upcast = fn(Box<dyn Any>) -> Result<SharedCommand, Box<dyn Any>>;

/// A registered way of producing a dependency.
///
/// The factory receives the container it was resolved from, so it can
/// resolve further dependencies, and the caller's arguments. The concrete
/// output type is erased but its name is kept for diagnostics.
///
/// Factories built with [`Factory::command`] also resolve as
/// [`SharedCommand`].
#[derive(Clone)]
pub struct Factory {
    produce: Arc<Produce>,
    produces: &'static str,
    upcast: Option<Upcast>,
}

impl Factory {
    /// Wraps a typed closure.
    ///
    /// ```
    /// use orbit_core::ioc::{Args, Container, Factory};
    ///
    /// let factory = Factory::new(|_: &Container, _: &Args| Ok(7u32));
    /// assert_eq!(factory.produces(), "u32");
    /// ```
    pub fn new<T, F>(f: F) -> Self
    where
        T: Any,
        F: Fn(&Container, &Args) -> Result<T, CoreError> + Send + Sync + 'static,
    {
        Self {
            produce: Arc::new(move |container: &Container, args: &Args| {
                f(container, args).map(|value| Box::new(value) as Box<dyn Any>)
            }),
            produces: type_name::<T>(),
            upcast: None,
        }
    }

    /// Wraps a closure producing a concrete command type.
    ///
    /// The factory resolves both as `Arc<C>` and as [`SharedCommand`].
    ///
    /// ```
    /// use orbit_core::command::InjectableCommand;
    /// use orbit_core::ioc::{Args, Container, Factory};
    /// use orbit_core::{Command, CoreError, SharedCommand};
    /// use std::sync::Arc;
    ///
    /// let ioc = Container::new();
    /// ioc.register_factory(
    ///     "Slot",
    ///     Factory::command(|_: &Container, _: &Args| Ok(Arc::new(InjectableCommand::new()))),
    /// );
    /// let typed: Arc<InjectableCommand> = ioc.resolve("Slot", Args::new()).unwrap();
    /// let shared: SharedCommand = ioc.resolve("Slot", Args::new()).unwrap();
    /// assert!(!typed.is_ready());
    /// assert_eq!(shared.execute(), Err(CoreError::NotReady));
    /// ```
    pub fn command<C, F>(f: F) -> Self
    where
        C: Command + 'static,
        F: Fn(&Container, &Args) -> Result<Arc<C>, CoreError> + Send + Sync + 'static,
    {
        Self {
            upcast: Some(upcast_command::<C> as Upcast),
            ..Self::new(f)
        }
    }

    /// Name of the type this factory produces.
    #[must_use]
    pub fn produces(&self) -> &'static str {
        self.produces
    }

    pub(crate) fn invoke(
        &self,
        container: &Container,
        args: &Args,
    ) -> Result<Box<dyn Any>, CoreError> {
        (self.produce)(container, args)
    }

    /// Converts a produced value into a [`SharedCommand`] when this factory
    /// was built with [`Factory::command`]. Other values pass through.
    pub(crate) fn as_command(&self, value: Box<dyn Any>) -> Box<dyn Any> {
        match self.upcast {
            Some(upcast) => match upcast(value) {
                Ok(command) => Box::new(command),
                Err(value) => value,
            },
            None => value,
        }
    }
}

fn upcast_command<C: Command + 'static>(value: Box<dyn Any>) -> Result<SharedCommand, Box<dyn Any>> {
    value.downcast::<Arc<C>>().map(|command| *command as SharedCommand)
}

impl fmt::Debug for Factory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Factory")
            .field("produces", &self.produces)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invoke_boxes_output() {
        let factory = Factory::new(|_: &Container, args: &Args| Ok(args.len()));
        let out = factory
            .invoke(&Container::new(), &crate::args![1u8, 2u8])
            .unwrap();
        assert_eq!(out.downcast_ref::<usize>(), Some(&2));
    }

    #[test]
    fn invoke_propagates_error() {
        let factory =
            Factory::new(|_: &Container, _: &Args| -> Result<u8, _> { Err(CoreError::NotReady) });
        let err = factory.invoke(&Container::new(), &Args::new()).unwrap_err();
        assert_eq!(err, CoreError::NotReady);
    }

    #[test]
    fn command_factory_upcasts() {
        let factory = Factory::command(|_: &Container, _: &Args| {
            Ok(Arc::new(crate::command::StoppedCommand::new(Arc::new(
                crate::command::LeafCommand::new("inner", || Ok(())),
            ))))
        });
        let out = factory.invoke(&Container::new(), &Args::new()).unwrap();
        let out = factory.as_command(out);
        assert!(out.downcast_ref::<SharedCommand>().is_some());
    }

    #[test]
    fn plain_factory_does_not_upcast() {
        let factory = Factory::new(|_: &Container, _: &Args| Ok(5u8));
        let out = factory.as_command(factory.invoke(&Container::new(), &Args::new()).unwrap());
        assert_eq!(out.downcast_ref::<u8>(), Some(&5));
    }

    #[test]
    fn debug_shows_output_type() {
        let factory = Factory::new(|_: &Container, _: &Args| Ok(String::new()));
        let dbg = format!("{factory:?}");
        assert!(dbg.contains("String"));
    }
}
