use super::{Command, SharedCommand};
use crate::CoreError;
use std::fmt;
use tracing::trace;

/// Runs a sequence of commands in order.
///
/// Execution stops at the first failing child and returns its error
/// unchanged; later children are not run. Children that already ran are not
/// rolled back.
///
/// A macro built with [`MacroCommand::from_slots`] may contain absent
/// positions. Reaching one fails with [`CoreError::InvalidState`] after the
/// preceding children have run.
#[derive(Default)]
pub struct MacroCommand {
    commands: Vec<Option<SharedCommand>>,
}

impl MacroCommand {
    /// Creates a macro from present commands.
    #[must_use]
    pub fn new(commands: Vec<SharedCommand>) -> Self {
        Self {
            commands: commands.into_iter().map(Some).collect(),
        }
    }

    /// Creates a macro whose positions may be empty.
    #[must_use]
    pub fn from_slots(commands: Vec<Option<SharedCommand>>) -> Self {
        Self { commands }
    }

    /// Number of positions, absent ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns `true` if the macro has no positions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Command for MacroCommand {
    fn execute(&self) -> Result<(), CoreError> {
        for (position, slot) in self.commands.iter().enumerate() {
            let command = slot.as_ref().ok_or_else(|| {
                CoreError::invalid_state(format!("command at position {position} is absent"))
            })?;
            trace!(position, command = command.name(), "Executing macro step");
            command.execute()?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "macro"
    }
}

impl fmt::Debug for MacroCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self
            .commands
            .iter()
            .map(|slot| slot.as_ref().map_or("<absent>", |c| c.name()))
            .collect();
        f.debug_struct("MacroCommand")
            .field("commands", &names)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ExecutionLog, MockCommand};
    use std::sync::Arc;

    #[test]
    fn runs_in_order() {
        let log = ExecutionLog::new();
        let cmd = MacroCommand::new(vec![
            Arc::new(MockCommand::new("a").logging_to(&log)),
            Arc::new(MockCommand::new("b").logging_to(&log)),
            Arc::new(MockCommand::new("c").logging_to(&log)),
        ]);

        cmd.execute().unwrap();
        assert_eq!(log.entries(), vec!["a", "b", "c"]);
    }

    #[test]
    fn empty_macro_succeeds() {
        let cmd = MacroCommand::default();
        assert!(cmd.is_empty());
        assert!(cmd.execute().is_ok());
    }

    #[test]
    fn stops_at_first_failure() {
        let log = ExecutionLog::new();
        let third = Arc::new(MockCommand::new("c").logging_to(&log));
        let cmd = MacroCommand::new(vec![
            Arc::new(MockCommand::new("a").logging_to(&log)),
            Arc::new(
                MockCommand::new("b")
                    .logging_to(&log)
                    .failing(CoreError::execution_failed("b failed")),
            ),
            Arc::clone(&third) as SharedCommand,
        ]);

        let err = cmd.execute().unwrap_err();
        assert_eq!(err, CoreError::execution_failed("b failed"));
        assert_eq!(log.entries(), vec!["a", "b"]);
        assert_eq!(third.calls(), 0);
    }

    #[test]
    fn absent_slot_is_invalid_state() {
        let first = Arc::new(MockCommand::new("first"));
        let last = Arc::new(MockCommand::new("last"));
        let cmd = MacroCommand::from_slots(vec![
            Some(Arc::clone(&first) as SharedCommand),
            None,
            Some(Arc::clone(&last) as SharedCommand),
        ]);
        assert_eq!(cmd.len(), 3);

        let err = cmd.execute().unwrap_err();
        assert_eq!(
            err,
            CoreError::invalid_state("command at position 1 is absent")
        );
        assert_eq!(first.calls(), 1);
        assert_eq!(last.calls(), 0);
    }

    #[test]
    fn nested_macros() {
        let log = ExecutionLog::new();
        let inner = MacroCommand::new(vec![
            Arc::new(MockCommand::new("x").logging_to(&log)),
            Arc::new(MockCommand::new("y").logging_to(&log)),
        ]);
        let outer = MacroCommand::new(vec![
            Arc::new(inner),
            Arc::new(MockCommand::new("z").logging_to(&log)),
        ]);

        outer.execute().unwrap();
        assert_eq!(log.entries(), vec!["x", "y", "z"]);
    }

    #[test]
    fn debug_lists_names() {
        let a: SharedCommand = Arc::new(MockCommand::new("a"));
        let cmd = MacroCommand::from_slots(vec![Some(a), None]);
        let dbg = format!("{cmd:?}");
        assert!(dbg.contains("\"a\""));
        assert!(dbg.contains("<absent>"));
    }
}
