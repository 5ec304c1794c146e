//! Registry of long-running operations.

use crate::command::{SharedCommand, StoppedCommand};
use crate::CoreError;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, info};

/// A running operation.
#[derive(Clone)]
pub struct OperationRecord {
    id: String,
    command: SharedCommand,
    started_at: DateTime<Utc>,
}

impl OperationRecord {
    /// Operation id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The command driving the operation.
    #[must_use]
    pub fn command(&self) -> &SharedCommand {
        &self.command
    }

    /// When the operation was started.
    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Consumes the record, returning an inert replacement for its command.
    #[must_use]
    pub fn into_stopped(self) -> StoppedCommand {
        StoppedCommand::new(self.command)
    }
}

impl fmt::Debug for OperationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperationRecord")
            .field("id", &self.id)
            .field("command", &self.command.name())
            .field("started_at", &self.started_at)
            .finish()
    }
}

/// Thread-safe map from operation id to running operation.
///
/// Each id is active at most once. [`start`](Self::start) checks and inserts
/// under one write lock, so of two concurrent starts with the same id
/// exactly one wins.
///
/// # Example
///
/// ```
/// use orbit_core::command::LeafCommand;
/// use orbit_core::operation::OperationRegistry;
/// use std::sync::Arc;
///
/// let registry = OperationRegistry::new();
/// registry.start("op-1", Arc::new(LeafCommand::new("noop", || Ok(())))).unwrap();
/// assert!(registry.is_active("op-1"));
///
/// assert!(registry.stop("op-1"));
/// assert!(!registry.stop("op-1"));
/// ```
#[derive(Default)]
pub struct OperationRegistry {
    operations: RwLock<HashMap<String, OperationRecord>>,
}

impl OperationRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry with room for `capacity` operations.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            operations: RwLock::new(HashMap::with_capacity(capacity)),
        }
    }

    /// Registers `command` as the running operation `id`.
    ///
    /// # Errors
    ///
    /// - [`CoreError::InvalidArgument`] if `id` is empty
    /// - [`CoreError::AlreadyRunning`] if `id` is already active
    pub fn start(&self, id: impl Into<String>, command: SharedCommand) -> Result<(), CoreError> {
        use std::collections::hash_map::Entry;

        let id = id.into();
        if id.is_empty() {
            return Err(CoreError::invalid_argument("operation id must not be empty"));
        }

        let mut operations = self.operations.write();
        match operations.entry(id) {
            Entry::Occupied(entry) => Err(CoreError::AlreadyRunning {
                id: entry.key().clone(),
            }),
            Entry::Vacant(entry) => {
                info!(id = %entry.key(), command = command.name(), "Operation started");
                let record = OperationRecord {
                    id: entry.key().clone(),
                    command,
                    started_at: Utc::now(),
                };
                entry.insert(record);
                Ok(())
            }
        }
    }

    /// Removes operation `id`, returning whether it was active.
    ///
    /// An empty or unknown id returns `false` and changes nothing.
    pub fn stop(&self, id: &str) -> bool {
        self.take(id).is_some()
    }

    /// Removes operation `id` and returns its record.
    pub fn take(&self, id: &str) -> Option<OperationRecord> {
        if id.is_empty() {
            return None;
        }
        let removed = self.operations.write().remove(id);
        match &removed {
            Some(record) => info!(id, command = record.command.name(), "Operation stopped"),
            None => debug!(id, "Stop requested for inactive operation"),
        }
        removed
    }

    /// Returns `true` if `id` is active.
    #[must_use]
    pub fn is_active(&self, id: &str) -> bool {
        self.operations.read().contains_key(id)
    }

    /// Snapshot of the record for `id`.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<OperationRecord> {
        self.operations.read().get(id).cloned()
    }

    /// Active ids in sorted order.
    #[must_use]
    pub fn active_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.operations.read().keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Number of active operations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.operations.read().len()
    }

    /// Returns `true` if no operation is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operations.read().is_empty()
    }

    /// Removes every operation, returning how many were active.
    pub fn clear(&self) -> usize {
        let mut operations = self.operations.write();
        let count = operations.len();
        operations.clear();
        count
    }
}

impl fmt::Debug for OperationRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperationRegistry")
            .field("active", &self.active_ids())
            .finish()
    }
}
