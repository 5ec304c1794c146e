use super::OperationRegistry;
use crate::command::{Command, SharedCommand};
use crate::ioc::{Args, Container};
use crate::CoreError;
use std::sync::Arc;

/// Resolves a command and registers it as a running operation.
///
/// The command is resolved from the container on every execution with the
/// stored key and arguments. Starting does not execute the resolved
/// command; it only records it in the registry.
///
/// If the id is already active, resolution is skipped and the execution
/// fails with [`CoreError::AlreadyRunning`].
#[derive(Debug, Clone)]
pub struct StartCommand {
    container: Container,
    registry: Arc<OperationRegistry>,
    operation_id: String,
    key: String,
    args: Args,
}

impl StartCommand {
    /// Creates a start command for `operation_id`, resolving `key` with
    /// `args` when run.
    pub fn new(
        container: Container,
        registry: Arc<OperationRegistry>,
        operation_id: impl Into<String>,
        key: impl Into<String>,
        args: Args,
    ) -> Self {
        Self {
            container,
            registry,
            operation_id: operation_id.into(),
            key: key.into(),
            args,
        }
    }

    /// The operation id this command starts.
    #[must_use]
    pub fn operation_id(&self) -> &str {
        &self.operation_id
    }
}

impl Command for StartCommand {
    fn execute(&self) -> Result<(), CoreError> {
        if self.operation_id.is_empty() {
            return Err(CoreError::invalid_argument("operation id must not be empty"));
        }
        if self.registry.is_active(&self.operation_id) {
            return Err(CoreError::AlreadyRunning {
                id: self.operation_id.clone(),
            });
        }

        let command: SharedCommand = self.container.resolve(&self.key, self.args.clone())?;
        self.registry.start(self.operation_id.clone(), command)
    }

    fn name(&self) -> &str {
        "start"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;
    use crate::testing::MockCommand;

    fn setup() -> (Container, Arc<OperationRegistry>, Arc<MockCommand>) {
        let ioc = Container::new();
        let mock = Arc::new(MockCommand::new("move"));
        let produced = Arc::clone(&mock);
        ioc.register("Commands.Move", move |_: &Container, _: &Args| {
            Ok(Arc::clone(&produced) as SharedCommand)
        });
        (ioc, Arc::new(OperationRegistry::new()), mock)
    }

    #[test]
    fn registers_resolved_command() {
        let (ioc, registry, mock) = setup();
        let start = StartCommand::new(ioc, registry.clone(), "op-1", "Commands.Move", args![]);

        start.execute().unwrap();
        assert!(registry.is_active("op-1"));
        assert_eq!(mock.calls(), 0);

        let record = registry.get("op-1").expect("record should exist");
        assert_eq!(record.command().name(), "move");
    }

    #[test]
    fn second_start_fails() {
        let (ioc, registry, _) = setup();
        let start = StartCommand::new(ioc, registry.clone(), "op-1", "Commands.Move", args![]);

        start.execute().unwrap();
        assert_eq!(
            start.execute(),
            Err(CoreError::AlreadyRunning { id: "op-1".into() })
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn unknown_key_leaves_registry_untouched() {
        let (ioc, registry, _) = setup();
        let start = StartCommand::new(ioc, registry.clone(), "op-1", "Commands.Fly", args![]);

        assert_eq!(
            start.execute(),
            Err(CoreError::not_registered("Commands.Fly"))
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn empty_id_rejected() {
        let (ioc, registry, _) = setup();
        let start = StartCommand::new(ioc, registry.clone(), "", "Commands.Move", args![]);
        assert!(matches!(
            start.execute(),
            Err(CoreError::InvalidArgument { .. })
        ));
        assert_eq!(start.operation_id(), "");
    }

    #[test]
    fn non_command_dependency_is_type_mismatch() {
        let (ioc, registry, _) = setup();
        ioc.register("Answer", |_: &Container, _: &Args| Ok(42u32));
        let start = StartCommand::new(ioc, registry.clone(), "op-1", "Answer", args![]);
        assert!(matches!(
            start.execute(),
            Err(CoreError::TypeMismatch { .. })
        ));
        assert!(registry.is_empty());
    }
}
