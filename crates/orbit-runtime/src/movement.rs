//! Move and rotate commands.

use crate::adapters::{SharedMovingObject, SharedRotatingObject};
use orbit_core::{Command, CoreError};
use std::fmt;
use tracing::trace;

/// Adds an object's velocity to its position.
pub struct MoveCommand {
    object: SharedMovingObject,
}

impl MoveCommand {
    /// Creates a move command for `object`.
    pub fn new(object: SharedMovingObject) -> Self {
        Self { object }
    }
}

impl Command for MoveCommand {
    fn execute(&self) -> Result<(), CoreError> {
        let position = self.object.position()?;
        let velocity = self.object.velocity()?;
        let next = position.checked_add(&velocity).map_err(|e| {
            CoreError::execution_failed(format!("cannot change object position: {e}"))
        })?;
        trace!(from = %position, to = %next, "Moving object");
        self.object.set_position(next)
    }

    fn name(&self) -> &str {
        "move"
    }
}

impl fmt::Debug for MoveCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MoveCommand").finish_non_exhaustive()
    }
}

/// Adds an object's angular velocity to its direction.
pub struct RotateCommand {
    object: SharedRotatingObject,
}

impl RotateCommand {
    /// Creates a rotate command for `object`.
    pub fn new(object: SharedRotatingObject) -> Self {
        Self { object }
    }
}

impl Command for RotateCommand {
    fn execute(&self) -> Result<(), CoreError> {
        let direction = self.object.direction()?;
        let next = direction + self.object.angular_velocity()?;
        trace!(from = %direction, to = %next, "Rotating object");
        self.object.set_direction(next)
    }

    fn name(&self) -> &str {
        "rotate"
    }
}

impl fmt::Debug for RotateCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RotateCommand").finish_non_exhaustive()
    }
}
