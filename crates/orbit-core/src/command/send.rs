use super::{Command, CommandReceiver, SharedCommand, SharedReceiver};
use crate::CoreError;
use std::fmt;
use tracing::warn;

/// Hands a command to a receiver.
///
/// Executing a `SendCommand` does not run the wrapped command; it delivers
/// it. A receiver error is reported as [`CoreError::DeliveryFailed`] with the
/// receiver's error as its source.
pub struct SendCommand {
    command: SharedCommand,
    receiver: SharedReceiver,
}

impl SendCommand {
    /// Creates a command that sends `command` to `receiver`.
    pub fn new(command: SharedCommand, receiver: SharedReceiver) -> Self {
        Self { command, receiver }
    }
}

impl Command for SendCommand {
    fn execute(&self) -> Result<(), CoreError> {
        self.receiver
            .receive(self.command.clone())
            .map_err(|e| {
                warn!(command = self.command.name(), error = %e, "Receiver rejected command");
                CoreError::delivery_failed(e)
            })
    }

    fn name(&self) -> &str {
        "send"
    }
}

impl fmt::Debug for SendCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SendCommand")
            .field("command", &self.command.name())
            .finish_non_exhaustive()
    }
}

/// Receiver that executes each command as soon as it arrives.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImmediateReceiver;

impl CommandReceiver for ImmediateReceiver {
    fn receive(&self, command: SharedCommand) -> Result<(), CoreError> {
        command.execute()
    }
}
