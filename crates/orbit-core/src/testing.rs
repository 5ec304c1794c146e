//! Test doubles for commands and receivers.
//!
//! Available in unit tests and, with the `test-utils` feature, to
//! downstream crates.

use crate::command::{Command, CommandReceiver, SharedCommand};
use crate::CoreError;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Shared, append-only record of executed command names.
///
/// Clones share the same log, so several mocks can write to one log and a
/// test can check the overall order.
#[derive(Debug, Clone, Default)]
pub struct ExecutionLog {
    entries: Arc<Mutex<Vec<String>>>,
}

impl ExecutionLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry.
    pub fn push(&self, entry: impl Into<String>) {
        self.entries.lock().push(entry.into());
    }

    /// Snapshot of all entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().clone()
    }
}

/// A mock command.
///
/// Counts executions, optionally writes its name to an [`ExecutionLog`]
/// and optionally fails with a fixed error.
#[derive(Debug)]
pub struct MockCommand {
    /// Name reported by [`Command::name`].
    pub name: String,
    /// Log written on every execution.
    pub log: Option<ExecutionLog>,
    /// Error returned on every execution.
    pub failure: Option<CoreError>,
    /// Number of times execute() has been called.
    pub call_count: Arc<AtomicUsize>,
}

impl MockCommand {
    /// Creates a mock that succeeds.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            log: None,
            failure: None,
            call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Makes every execution fail with `error`.
    #[must_use]
    pub fn failing(mut self, error: CoreError) -> Self {
        self.failure = Some(error);
        self
    }

    /// Records every execution in `log`.
    #[must_use]
    pub fn logging_to(mut self, log: &ExecutionLog) -> Self {
        self.log = Some(log.clone());
        self
    }

    /// Number of executions so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

impl Command for MockCommand {
    fn execute(&self) -> Result<(), CoreError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if let Some(log) = &self.log {
            log.push(self.name.clone());
        }
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Receiver that stores every command it is given.
#[derive(Default)]
pub struct RecordingReceiver {
    received: Mutex<Vec<SharedCommand>>,
}

impl RecordingReceiver {
    /// Creates an empty receiver.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands received so far.
    #[must_use]
    pub fn received(&self) -> Vec<SharedCommand> {
        self.received.lock().clone()
    }

    /// Names of the commands received so far.
    #[must_use]
    pub fn received_names(&self) -> Vec<String> {
        self.received
            .lock()
            .iter()
            .map(|c| c.name().to_string())
            .collect()
    }

    /// Number of commands received.
    #[must_use]
    pub fn len(&self) -> usize {
        self.received.lock().len()
    }

    /// Returns `true` if nothing was received.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.received.lock().is_empty()
    }
}

impl CommandReceiver for RecordingReceiver {
    fn receive(&self, command: SharedCommand) -> Result<(), CoreError> {
        self.received.lock().push(command);
        Ok(())
    }
}

/// Receiver that refuses every command with a fixed error.
#[derive(Debug)]
pub struct RejectingReceiver {
    error: CoreError,
}

impl RejectingReceiver {
    /// Creates a receiver that fails with `error`.
    pub fn new(error: CoreError) -> Self {
        Self { error }
    }
}

impl CommandReceiver for RejectingReceiver {
    fn receive(&self, _command: SharedCommand) -> Result<(), CoreError> {
        Err(self.error.clone())
    }
}
