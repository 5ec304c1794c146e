//! The command behind [`REGISTER_KEY`](super::REGISTER_KEY).

use super::{Args, Container, Factory, REGISTER_KEY};
use crate::command::Command;
use crate::CoreError;

/// Stores a factory in a container when executed.
///
/// Resolution and registration are separate steps: resolving
/// `"IoC.Register"` only builds this command, and nothing changes until it
/// runs. Bootstrap code collects several of these into a macro.
#[derive(Debug, Clone)]
pub struct RegisterCommand {
    container: Container,
    key: String,
    factory: Factory,
}

impl RegisterCommand {
    /// Creates a registration command.
    pub fn new(container: Container, key: impl Into<String>, factory: Factory) -> Self {
        Self {
            container,
            key: key.into(),
            factory,
        }
    }

    /// Builds the command from `[key, factory]` arguments.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidArgument`] if the arguments are not a string key
    /// followed by a [`Factory`].
    pub fn from_args(container: Container, args: &Args) -> Result<Self, CoreError> {
        args.expect_len(REGISTER_KEY, 2)?;
        let key = args.get_str(0)?;
        let factory = args.get::<Factory>(1)?;
        Ok(Self::new(container, key, factory.clone()))
    }

    /// The key that will be registered.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Command for RegisterCommand {
    fn execute(&self) -> Result<(), CoreError> {
        self.container
            .register_factory(self.key.clone(), self.factory.clone());
        Ok(())
    }

    fn name(&self) -> &str {
        REGISTER_KEY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;

    #[test]
    fn execute_registers() {
        let ioc = Container::new();
        let cmd = RegisterCommand::new(
            ioc.clone(),
            "Pi",
            Factory::new(|_: &Container, _: &Args| Ok(3i32)),
        );
        assert_eq!(cmd.key(), "Pi");

        cmd.execute().unwrap();
        assert_eq!(ioc.resolve::<i32>("Pi", Args::new()).unwrap(), 3);
    }

    #[test]
    fn execute_twice_is_idempotent() {
        let ioc = Container::new();
        let cmd = RegisterCommand::new(
            ioc.clone(),
            "Flag",
            Factory::new(|_: &Container, _: &Args| Ok(true)),
        );
        cmd.execute().unwrap();
        cmd.execute().unwrap();
        assert_eq!(ioc.len(), 1);
    }

    #[test]
    fn from_args_rejects_non_factory() {
        let err = RegisterCommand::from_args(Container::new(), &args!["Key", 5u8]).unwrap_err();
        assert!(err.to_string().contains("argument 1"));
    }

    #[test]
    fn from_args_rejects_non_string_key() {
        let factory = Factory::new(|_: &Container, _: &Args| Ok(()));
        let err = RegisterCommand::from_args(Container::new(), &args![1u8, factory]).unwrap_err();
        assert!(matches!(err, CoreError::InvalidArgument { .. }));
    }
}
