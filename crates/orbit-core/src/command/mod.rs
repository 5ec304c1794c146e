//! Commands and the building blocks that compose them.
//!
//! Everything executable implements [`Command`]. Composites hold their
//! children as [`SharedCommand`] so the same command instance can sit in a
//! macro, be sent to a receiver and be registered as a running operation at
//! the same time.
//!
//! | Type | Behavior |
//! |------|----------|
//! | [`LeafCommand`] | Runs a closure |
//! | [`MacroCommand`] | Runs children in order, stops at the first error |
//! | [`SendCommand`] | Hands a command to a [`CommandReceiver`] |
//! | [`InjectableCommand`] | Delegates to a command injected later |
//! | [`StoppedCommand`] | Does nothing; replaces a stopped operation |

mod injectable;
mod leaf;
mod macro_command;
mod send;
mod stopped;

pub use injectable::InjectableCommand;
pub use leaf::LeafCommand;
pub use macro_command::MacroCommand;
pub use send::{ImmediateReceiver, SendCommand};
pub use stopped::StoppedCommand;

use crate::CoreError;
use std::sync::Arc;

/// An executable unit of work.
///
/// Implementations must be `Send + Sync`; commands are shared between the
/// container, composites and the operation registry.
pub trait Command: Send + Sync {
    /// Runs the command.
    ///
    /// # Errors
    ///
    /// Returns whatever the command's work fails with.
    fn execute(&self) -> Result<(), CoreError>;

    /// Short name used in logs.
    fn name(&self) -> &str {
        "command"
    }
}

/// Shared, type-erased command.
pub type SharedCommand = Arc<dyn Command>;

/// Something that accepts commands, e.g. a scheduler or queue.
pub trait CommandReceiver: Send + Sync {
    /// Accepts a command for later (or immediate) execution.
    ///
    /// # Errors
    ///
    /// Returns an error if the receiver cannot take the command.
    fn receive(&self, command: SharedCommand) -> Result<(), CoreError>;
}

/// Shared, type-erased receiver.
pub type SharedReceiver = Arc<dyn CommandReceiver>;

/// A command whose delegate is supplied after construction.
pub trait CommandInjectable: Send + Sync {
    /// Sets (or replaces) the delegate.
    ///
    /// # Errors
    ///
    /// Implementations may refuse the command.
    fn inject(&self, command: SharedCommand) -> Result<(), CoreError>;
}
