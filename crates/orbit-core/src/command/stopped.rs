use super::{Command, SharedCommand};
use crate::CoreError;
use std::fmt;

/// Inert stand-in for a command whose operation was stopped.
///
/// Executing it does nothing and always succeeds. The original command is
/// kept so callers can still inspect what was stopped.
#[derive(Clone)]
pub struct StoppedCommand {
    inner: SharedCommand,
}

impl StoppedCommand {
    /// Wraps a stopped command.
    pub fn new(inner: SharedCommand) -> Self {
        Self { inner }
    }

    /// The command that was stopped.
    #[must_use]
    pub fn inner(&self) -> &SharedCommand {
        &self.inner
    }
}

impl Command for StoppedCommand {
    fn execute(&self) -> Result<(), CoreError> {
        Ok(())
    }

    fn name(&self) -> &str {
        "stopped"
    }
}

impl fmt::Debug for StoppedCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoppedCommand")
            .field("inner", &self.inner.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockCommand;
    use std::sync::Arc;

    #[test]
    fn never_runs_inner() {
        let inner = Arc::new(MockCommand::new("move"));
        let stopped = StoppedCommand::new(inner.clone());

        stopped.execute().unwrap();
        stopped.execute().unwrap();
        assert_eq!(inner.calls(), 0);
        assert_eq!(stopped.inner().name(), "move");
    }

    #[test]
    fn succeeds_even_if_inner_would_fail() {
        let inner = Arc::new(MockCommand::new("bad").failing(CoreError::NotReady));
        assert!(StoppedCommand::new(inner).execute().is_ok());
    }
}
