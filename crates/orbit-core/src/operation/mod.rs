//! Long-running operations.
//!
//! An operation is a command registered under a unique id until it is
//! stopped. The registry only tracks what is running; driving the commands
//! (scheduling, repetition) is left to the caller.

mod registry;
mod start;
mod stop;

pub use registry::{OperationRecord, OperationRegistry};
pub use start::StartCommand;
pub use stop::StopCommand;
