use super::Command;
use crate::CoreError;
use std::fmt;

type Action = dyn Fn() -> Result<(), CoreError> + Send + Sync;

/// A command that runs a closure.
///
/// ```
/// use orbit_core::command::{Command, LeafCommand};
///
/// let cmd = LeafCommand::new("noop", || Ok(()));
/// assert!(cmd.execute().is_ok());
/// assert_eq!(cmd.name(), "noop");
/// ```
pub struct LeafCommand {
    name: String,
    action: Box<Action>,
}

impl LeafCommand {
    /// Creates a named command from a closure.
    pub fn new<F>(name: impl Into<String>, action: F) -> Self
    where
        F: Fn() -> Result<(), CoreError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            action: Box::new(action),
        }
    }
}

impl Command for LeafCommand {
    fn execute(&self) -> Result<(), CoreError> {
        (self.action)()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for LeafCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LeafCommand")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn runs_action_each_time() {
        let count = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&count);
        let cmd = LeafCommand::new("tick", move || {
            c.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });

        cmd.execute().unwrap();
        cmd.execute().unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn propagates_failure() {
        let cmd = LeafCommand::new("fail", || Err(CoreError::execution_failed("nope")));
        assert_eq!(cmd.execute(), Err(CoreError::execution_failed("nope")));
    }
}
