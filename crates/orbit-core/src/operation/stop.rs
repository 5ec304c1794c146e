use super::OperationRegistry;
use crate::command::{Command, StoppedCommand};
use crate::CoreError;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::debug;

/// Removes an operation from the registry.
///
/// Fails with [`CoreError::NotRunning`] if the id is not active, so a
/// macro containing a stop for a finished operation halts there. The
/// removed command is kept as a [`StoppedCommand`], see
/// [`StopCommand::retired`].
#[derive(Debug)]
pub struct StopCommand {
    registry: Arc<OperationRegistry>,
    operation_id: String,
    retired: Mutex<Option<StoppedCommand>>,
}

impl StopCommand {
    /// Creates a stop command for `operation_id`.
    pub fn new(registry: Arc<OperationRegistry>, operation_id: impl Into<String>) -> Self {
        Self {
            registry,
            operation_id: operation_id.into(),
            retired: Mutex::new(None),
        }
    }

    /// The command removed by the last successful execution.
    #[must_use]
    pub fn retired(&self) -> Option<StoppedCommand> {
        self.retired.lock().clone()
    }

    /// The operation id this command stops.
    #[must_use]
    pub fn operation_id(&self) -> &str {
        &self.operation_id
    }
}

impl Command for StopCommand {
    fn execute(&self) -> Result<(), CoreError> {
        match self.registry.take(&self.operation_id) {
            Some(record) => {
                let stopped = record.into_stopped();
                debug!(id = %self.operation_id, ?stopped, "Operation command retired");
                *self.retired.lock() = Some(stopped);
                Ok(())
            }
            None => Err(CoreError::NotRunning {
                id: self.operation_id.clone(),
            }),
        }
    }

    fn name(&self) -> &str {
        "stop"
    }
}
