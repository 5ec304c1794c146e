//! Inversion-of-control container.
//!
//! Dependencies are registered as factories under string keys and
//! resolved with positional, type-erased [`Args`]. Registration itself is a
//! dependency: resolving [`REGISTER_KEY`] returns a command that performs
//! the registration when executed.

mod args;
mod container;
mod factory;
mod register;

pub use args::{ArgValue, Args};
pub use container::{Container, REGISTER_KEY};
pub use factory::Factory;
pub use register::RegisterCommand;
