//! Orders: the structured argument of the start and stop actions.

use crate::GameObject;
use orbit_core::CoreError;

/// Field naming the operation id.
pub const OPERATION_ID: &str = "OperationId";
/// Field naming the operation type (`"Move"` resolves `Commands.Move`).
pub const OPERATION_TYPE: &str = "OperationType";
/// Field holding the target game object.
pub const GAME_OBJECT: &str = "GameObject";

/// A request to start or stop a long-running operation.
///
/// Every field is optional at construction; the action reading the order
/// decides which ones it needs and reports a missing one as
/// [`CoreError::InvalidState`]. Stopping only needs the id.
///
/// ```
/// use orbit_runtime::{GameObject, Order};
///
/// let order = Order::new()
///     .with_operation_id("ship-1/move")
///     .with_operation_type("Move")
///     .with_game_object(GameObject::new());
/// assert_eq!(order.operation_id().unwrap(), "ship-1/move");
/// assert_eq!(order.command_key().unwrap(), "Commands.Move");
///
/// assert!(Order::new().operation_id().is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Order {
    operation_id: Option<String>,
    operation_type: Option<String>,
    game_object: Option<GameObject>,
}

impl Order {
    /// Creates an empty order.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the operation id.
    #[must_use]
    pub fn with_operation_id(mut self, id: impl Into<String>) -> Self {
        self.operation_id = Some(id.into());
        self
    }

    /// Sets the operation type.
    #[must_use]
    pub fn with_operation_type(mut self, operation_type: impl Into<String>) -> Self {
        self.operation_type = Some(operation_type.into());
        self
    }

    /// Sets the target object.
    #[must_use]
    pub fn with_game_object(mut self, object: GameObject) -> Self {
        self.game_object = Some(object);
        self
    }

    /// The operation id.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidState`] if the order has no id.
    pub fn operation_id(&self) -> Result<&str, CoreError> {
        self.operation_id.as_deref().ok_or_else(|| missing(OPERATION_ID))
    }

    /// The operation type.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidState`] if the order has no type.
    pub fn operation_type(&self) -> Result<&str, CoreError> {
        self.operation_type
            .as_deref()
            .ok_or_else(|| missing(OPERATION_TYPE))
    }

    /// The target object.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidState`] if the order has no object.
    pub fn game_object(&self) -> Result<&GameObject, CoreError> {
        self.game_object.as_ref().ok_or_else(|| missing(GAME_OBJECT))
    }

    /// Container key of the command implementing the operation type.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidState`] if the order has no type.
    pub fn command_key(&self) -> Result<String, CoreError> {
        Ok(format!("Commands.{}", self.operation_type()?))
    }
}

fn missing(field: &str) -> CoreError {
    CoreError::invalid_state(format!("order must contain '{field}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_order() {
        let ship = GameObject::new();
        let order = Order::new()
            .with_operation_id("op")
            .with_operation_type("Rotate")
            .with_game_object(ship.clone());

        assert_eq!(order.operation_id().unwrap(), "op");
        assert_eq!(order.operation_type().unwrap(), "Rotate");
        assert_eq!(order.command_key().unwrap(), "Commands.Rotate");
        assert!(order.game_object().unwrap().ptr_eq(&ship));
    }

    #[test]
    fn missing_fields_are_invalid_state() {
        let order = Order::new();
        assert_eq!(
            order.operation_id(),
            Err(CoreError::invalid_state("order must contain 'OperationId'"))
        );
        assert_eq!(
            order.command_key(),
            Err(CoreError::invalid_state("order must contain 'OperationType'"))
        );
        assert!(matches!(
            order.game_object(),
            Err(CoreError::InvalidState { .. })
        ));
    }
}
