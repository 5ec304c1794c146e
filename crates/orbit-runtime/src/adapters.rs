//! Movement capabilities and their game-object adapters.

use crate::GameObject;
use orbit_core::CoreError;
use orbit_types::{Angle, Vector};
use std::sync::Arc;

/// Property holding an object's position.
pub const POSITION: &str = "Position";
/// Property holding an object's velocity.
pub const VELOCITY: &str = "Velocity";
/// Property holding an object's direction.
pub const DIRECTION: &str = "Direction";
/// Property holding an object's angular velocity.
pub const ANGULAR_VELOCITY: &str = "AngularVelocity";

/// Something that moves in a straight line.
pub trait MovingObject: Send + Sync {
    /// Current position.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidState`] if the position cannot be read.
    fn position(&self) -> Result<Vector, CoreError>;

    /// Replaces the position.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidState`] if the position cannot be written.
    fn set_position(&self, position: Vector) -> Result<(), CoreError>;

    /// Current velocity.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidState`] if the velocity cannot be read.
    fn velocity(&self) -> Result<Vector, CoreError>;
}

/// Something that turns.
pub trait RotatingObject: Send + Sync {
    /// Current direction.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidState`] if the direction cannot be read.
    fn direction(&self) -> Result<Angle, CoreError>;

    /// Replaces the direction.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidState`] if the direction cannot be written.
    fn set_direction(&self, direction: Angle) -> Result<(), CoreError>;

    /// Current angular velocity.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidState`] if the angular velocity cannot be read.
    fn angular_velocity(&self) -> Result<Angle, CoreError>;
}

/// Shared moving capability.
pub type SharedMovingObject = Arc<dyn MovingObject>;

/// Shared rotating capability.
pub type SharedRotatingObject = Arc<dyn RotatingObject>;

fn missing(property: &str) -> CoreError {
    CoreError::invalid_state(format!("cannot get {property} from game object"))
}

/// Reads `Position` and `Velocity` vectors from a [`GameObject`].
#[derive(Debug, Clone)]
pub struct MovingObjectAdapter {
    object: GameObject,
}

impl MovingObjectAdapter {
    /// Wraps a game object.
    pub fn new(object: GameObject) -> Self {
        Self { object }
    }
}

impl MovingObject for MovingObjectAdapter {
    fn position(&self) -> Result<Vector, CoreError> {
        self.object.vector(POSITION).ok_or_else(|| missing(POSITION))
    }

    fn set_position(&self, position: Vector) -> Result<(), CoreError> {
        self.object.set(POSITION, position);
        Ok(())
    }

    fn velocity(&self) -> Result<Vector, CoreError> {
        self.object.vector(VELOCITY).ok_or_else(|| missing(VELOCITY))
    }
}

/// Reads `Direction` and `AngularVelocity` angles from a [`GameObject`].
#[derive(Debug, Clone)]
pub struct RotatingObjectAdapter {
    object: GameObject,
}

impl RotatingObjectAdapter {
    /// Wraps a game object.
    pub fn new(object: GameObject) -> Self {
        Self { object }
    }
}

impl RotatingObject for RotatingObjectAdapter {
    fn direction(&self) -> Result<Angle, CoreError> {
        self.object.angle(DIRECTION).ok_or_else(|| missing(DIRECTION))
    }

    fn set_direction(&self, direction: Angle) -> Result<(), CoreError> {
        self.object.set(DIRECTION, direction);
        Ok(())
    }

    fn angular_velocity(&self) -> Result<Angle, CoreError> {
        self.object
            .angle(ANGULAR_VELOCITY)
            .ok_or_else(|| missing(ANGULAR_VELOCITY))
    }
}
