use super::{Command, CommandInjectable, SharedCommand};
use crate::CoreError;
use parking_lot::RwLock;
use std::fmt;

/// A command that delegates to whatever was most recently injected.
///
/// Executing before any injection fails with [`CoreError::NotReady`].
/// Injection may happen from another thread while the command is shared;
/// each execution runs the delegate current at its start.
///
/// ```
/// use orbit_core::command::{Command, CommandInjectable, InjectableCommand, LeafCommand};
/// use orbit_core::CoreError;
/// use std::sync::Arc;
///
/// let cmd = InjectableCommand::new();
/// assert_eq!(cmd.execute(), Err(CoreError::NotReady));
///
/// cmd.inject(Arc::new(LeafCommand::new("noop", || Ok(())))).unwrap();
/// assert!(cmd.execute().is_ok());
/// ```
#[derive(Default)]
pub struct InjectableCommand {
    delegate: RwLock<Option<SharedCommand>>,
}

impl InjectableCommand {
    /// Creates a command with no delegate.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` once a delegate has been injected.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.delegate.read().is_some()
    }
}

impl CommandInjectable for InjectableCommand {
    fn inject(&self, command: SharedCommand) -> Result<(), CoreError> {
        *self.delegate.write() = Some(command);
        Ok(())
    }
}

impl Command for InjectableCommand {
    fn execute(&self) -> Result<(), CoreError> {
        // Release the lock before running so the delegate may re-inject.
        let delegate = self.delegate.read().clone();
        match delegate {
            Some(command) => command.execute(),
            None => Err(CoreError::NotReady),
        }
    }

    fn name(&self) -> &str {
        "injectable"
    }
}

impl fmt::Debug for InjectableCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InjectableCommand")
            .field("ready", &self.is_ready())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockCommand;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn not_ready_before_inject() {
        let cmd = InjectableCommand::new();
        assert!(!cmd.is_ready());
        assert_eq!(cmd.execute(), Err(CoreError::NotReady));
    }

    #[test]
    fn runs_injected() {
        let target = Arc::new(MockCommand::new("target"));
        let cmd = InjectableCommand::new();
        cmd.inject(target.clone()).unwrap();

        cmd.execute().unwrap();
        assert!(cmd.is_ready());
        assert_eq!(target.calls(), 1);
    }

    #[test]
    fn reinject_replaces() {
        let first = Arc::new(MockCommand::new("first"));
        let second = Arc::new(MockCommand::new("second"));
        let cmd = InjectableCommand::new();

        cmd.inject(first.clone()).unwrap();
        cmd.inject(second.clone()).unwrap();
        cmd.execute().unwrap();

        assert_eq!(first.calls(), 0);
        assert_eq!(second.calls(), 1);
    }

    #[test]
    fn delegate_error_propagates() {
        let cmd = InjectableCommand::new();
        cmd.inject(Arc::new(
            MockCommand::new("bad").failing(CoreError::execution_failed("engine")),
        ))
        .unwrap();
        assert_eq!(cmd.execute(), Err(CoreError::execution_failed("engine")));
    }

    #[test]
    fn inject_from_other_thread() {
        let cmd = Arc::new(InjectableCommand::new());
        let target = Arc::new(MockCommand::new("remote"));

        let handle = {
            let cmd = Arc::clone(&cmd);
            let target = Arc::clone(&target);
            thread::spawn(move || cmd.inject(target))
        };
        handle.join().expect("thread should not panic").unwrap();

        cmd.execute().unwrap();
        assert_eq!(target.calls(), 1);
    }
}
