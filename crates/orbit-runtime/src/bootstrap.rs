//! Built-in dependency registrations.
//!
//! Every registration goes through the container's own `"IoC.Register"`
//! key: each entry is resolved into a registration command, the commands
//! are collected into one macro, and running the macro installs them all.
//!
//! # Keys
//!
//! | Key | Arguments | Produces |
//! |-----|-----------|----------|
//! | `Adapters.MovingObject` | `GameObject` | [`SharedMovingObject`] |
//! | `Adapters.RotatingObject` | `GameObject` | [`SharedRotatingObject`] |
//! | `Commands.Move` | `GameObject` or [`SharedMovingObject`] | [`SharedCommand`] |
//! | `Commands.Rotate` | `GameObject` or [`SharedRotatingObject`] | [`SharedCommand`] |
//! | `Commands.Macro` | `Vec<SharedCommand>` or `Vec<Option<SharedCommand>>` | [`SharedCommand`] |
//! | `Specs.Move` / `Specs.Rotate` / `Specs.MoveRotate` | none | `Vec<String>` |
//! | `Macro.Move` / `Macro.Rotate` / `Macro.MoveRotate` | forwarded to each step | [`SharedCommand`] |
//! | `Commands.Send` | [`SharedCommand`], [`SharedReceiver`] | [`SharedCommand`] |
//! | `Commands.CommandInjectable` | none | `Arc<InjectableCommand>` or [`SharedCommand`] (new each time) |
//! | `OperationRegistry` | none | `Arc<OperationRegistry>` (shared) |
//! | `Actions.Start` | [`Order`] | [`SharedCommand`] |
//! | `Actions.Stop` | [`Order`] | [`SharedCommand`] |
//! | `Commands.CommandInjectable.Start` | [`Order`] | `Arc<InjectableCommand>` or [`SharedCommand`] |
//! | `Commands.CommandInjectable.Stop` | [`Order`] | `Arc<InjectableCommand>` or [`SharedCommand`] |
//! | `Commands.Send.Start` | [`Order`], [`SharedReceiver`] | [`SharedCommand`] |
//! | `Commands.Send.Stop` | [`Order`], [`SharedReceiver`] | [`SharedCommand`] |

use crate::adapters::{
    MovingObjectAdapter, RotatingObjectAdapter, SharedMovingObject, SharedRotatingObject,
};
use crate::movement::{MoveCommand, RotateCommand};
use crate::{GameObject, Order};
use orbit_core::command::{
    CommandInjectable, InjectableCommand, MacroCommand, SendCommand, SharedReceiver,
};
use orbit_core::ioc::{Factory, REGISTER_KEY};
use orbit_core::operation::{OperationRegistry, StartCommand, StopCommand};
use orbit_core::{args, Args, Command, Container, CoreError, SharedCommand};
use std::sync::Arc;
use tracing::info;

/// Well-known container keys.
pub mod keys {
    /// Moving-object adapter over a game object.
    pub const MOVING_ADAPTER: &str = "Adapters.MovingObject";
    /// Rotating-object adapter over a game object.
    pub const ROTATING_ADAPTER: &str = "Adapters.RotatingObject";
    /// Move command.
    pub const MOVE: &str = "Commands.Move";
    /// Rotate command.
    pub const ROTATE: &str = "Commands.Rotate";
    /// Macro over explicit commands.
    pub const MACRO: &str = "Commands.Macro";
    /// Steps of the move macro.
    pub const SPEC_MOVE: &str = "Specs.Move";
    /// Steps of the rotate macro.
    pub const SPEC_ROTATE: &str = "Specs.Rotate";
    /// Steps of the move-then-rotate macro.
    pub const SPEC_MOVE_ROTATE: &str = "Specs.MoveRotate";
    /// Macro built from [`SPEC_MOVE`].
    pub const MACRO_MOVE: &str = "Macro.Move";
    /// Macro built from [`SPEC_ROTATE`].
    pub const MACRO_ROTATE: &str = "Macro.Rotate";
    /// Macro built from [`SPEC_MOVE_ROTATE`].
    pub const MACRO_MOVE_ROTATE: &str = "Macro.MoveRotate";
    /// Send command.
    pub const SEND: &str = "Commands.Send";
    /// Fresh injectable command.
    pub const INJECTABLE: &str = "Commands.CommandInjectable";
    /// The shared operation registry.
    pub const OPERATION_REGISTRY: &str = "OperationRegistry";
    /// Start action for an order.
    pub const START: &str = "Actions.Start";
    /// Stop action for an order.
    pub const STOP: &str = "Actions.Stop";
    /// Injectable command pre-loaded with a start action.
    pub const INJECTABLE_START: &str = "Commands.CommandInjectable.Start";
    /// Injectable command pre-loaded with a stop action.
    pub const INJECTABLE_STOP: &str = "Commands.CommandInjectable.Stop";
    /// Start action sent to a receiver.
    pub const SEND_START: &str = "Commands.Send.Start";
    /// Stop action sent to a receiver.
    pub const SEND_STOP: &str = "Commands.Send.Stop";
}

/// Builds the macro that registers every built-in dependency.
///
/// Nothing is registered until the returned command runs. The operation
/// registry is registered as a singleton: every resolution of
/// [`keys::OPERATION_REGISTRY`] yields `registry`.
///
/// # Errors
///
/// Propagates failures from resolving `"IoC.Register"`.
pub fn registrations(
    container: &Container,
    registry: Arc<OperationRegistry>,
) -> Result<MacroCommand, CoreError> {
    let entries: Vec<(&'static str, Factory)> = vec![
        (keys::MOVING_ADAPTER, Factory::new(moving_adapter)),
        (keys::ROTATING_ADAPTER, Factory::new(rotating_adapter)),
        (keys::MOVE, Factory::new(move_command)),
        (keys::ROTATE, Factory::new(rotate_command)),
        (keys::MACRO, Factory::new(macro_command)),
        (keys::SPEC_MOVE, spec(&[keys::MOVE])),
        (keys::SPEC_ROTATE, spec(&[keys::ROTATE])),
        (keys::SPEC_MOVE_ROTATE, spec(&[keys::MOVE, keys::ROTATE])),
        (keys::MACRO_MOVE, macro_from_spec(keys::SPEC_MOVE)),
        (keys::MACRO_ROTATE, macro_from_spec(keys::SPEC_ROTATE)),
        (keys::MACRO_MOVE_ROTATE, macro_from_spec(keys::SPEC_MOVE_ROTATE)),
        (keys::SEND, Factory::new(send_command)),
        (keys::INJECTABLE, Factory::command(injectable_command)),
        (
            keys::OPERATION_REGISTRY,
            Factory::new(move |_: &Container, _: &Args| Ok(Arc::clone(&registry))),
        ),
        (keys::START, Factory::new(start_action)),
        (keys::STOP, Factory::new(stop_action)),
        (keys::INJECTABLE_START, injected_action(keys::START)),
        (keys::INJECTABLE_STOP, injected_action(keys::STOP)),
        (keys::SEND_START, sent_action(keys::START)),
        (keys::SEND_STOP, sent_action(keys::STOP)),
    ];

    let commands = entries
        .into_iter()
        .map(|(key, factory)| container.resolve::<SharedCommand>(REGISTER_KEY, args![key, factory]))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(MacroCommand::new(commands))
}

/// Registers every built-in dependency in `container`.
///
/// # Errors
///
/// Propagates failures from building or running the registrations.
pub fn register_builtins(
    container: &Container,
    registry: Arc<OperationRegistry>,
) -> Result<(), CoreError> {
    let commands = registrations(container, registry)?;
    let count = commands.len();
    commands.execute()?;
    info!(count, "Registered built-in dependencies");
    Ok(())
}

fn moving_adapter(_: &Container, args: &Args) -> Result<SharedMovingObject, CoreError> {
    args.expect_len(keys::MOVING_ADAPTER, 1)?;
    let object = args.get::<GameObject>(0)?;
    Ok(Arc::new(MovingObjectAdapter::new(object.clone())))
}

fn rotating_adapter(_: &Container, args: &Args) -> Result<SharedRotatingObject, CoreError> {
    args.expect_len(keys::ROTATING_ADAPTER, 1)?;
    let object = args.get::<GameObject>(0)?;
    Ok(Arc::new(RotatingObjectAdapter::new(object.clone())))
}

fn move_command(container: &Container, args: &Args) -> Result<SharedCommand, CoreError> {
    args.expect_len(keys::MOVE, 1)?;
    let object = match args.try_get::<SharedMovingObject>(0) {
        Some(object) => Arc::clone(object),
        None => container.resolve(keys::MOVING_ADAPTER, args.clone())?,
    };
    Ok(Arc::new(MoveCommand::new(object)))
}

fn rotate_command(container: &Container, args: &Args) -> Result<SharedCommand, CoreError> {
    args.expect_len(keys::ROTATE, 1)?;
    let object = match args.try_get::<SharedRotatingObject>(0) {
        Some(object) => Arc::clone(object),
        None => container.resolve(keys::ROTATING_ADAPTER, args.clone())?,
    };
    Ok(Arc::new(RotateCommand::new(object)))
}

fn macro_command(_: &Container, args: &Args) -> Result<SharedCommand, CoreError> {
    args.expect_len(keys::MACRO, 1)?;
    if let Some(commands) = args.try_get::<Vec<SharedCommand>>(0) {
        return Ok(Arc::new(MacroCommand::new(commands.clone())));
    }
    let slots = args.get::<Vec<Option<SharedCommand>>>(0)?;
    Ok(Arc::new(MacroCommand::from_slots(slots.clone())))
}

fn spec(steps: &'static [&'static str]) -> Factory {
    Factory::new(move |_: &Container, _: &Args| {
        Ok(steps.iter().map(|s| (*s).to_string()).collect::<Vec<String>>())
    })
}

fn macro_from_spec(spec_key: &'static str) -> Factory {
    Factory::new(move |container: &Container, args: &Args| {
        let steps: Vec<String> = container.resolve(spec_key, Args::new())?;
        let commands = steps
            .iter()
            .map(|key| container.resolve::<SharedCommand>(key, args.clone()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Arc::new(MacroCommand::new(commands)) as SharedCommand)
    })
}

fn send_command(_: &Container, args: &Args) -> Result<SharedCommand, CoreError> {
    args.expect_len(keys::SEND, 2)?;
    let command = args.get::<SharedCommand>(0)?;
    let receiver = args.get::<SharedReceiver>(1)?;
    Ok(Arc::new(SendCommand::new(
        Arc::clone(command),
        Arc::clone(receiver),
    )))
}

fn injectable_command(_: &Container, _: &Args) -> Result<Arc<InjectableCommand>, CoreError> {
    Ok(Arc::new(InjectableCommand::new()))
}

fn operation_registry(container: &Container) -> Result<Arc<OperationRegistry>, CoreError> {
    container.resolve(keys::OPERATION_REGISTRY, Args::new())
}

fn start_action(container: &Container, args: &Args) -> Result<SharedCommand, CoreError> {
    args.expect_len(keys::START, 1)?;
    let order = args.get::<Order>(0)?;
    let command = StartCommand::new(
        container.clone(),
        operation_registry(container)?,
        order.operation_id()?,
        order.command_key()?,
        args![order.game_object()?.clone()],
    );
    Ok(Arc::new(command))
}

fn stop_action(container: &Container, args: &Args) -> Result<SharedCommand, CoreError> {
    args.expect_len(keys::STOP, 1)?;
    let order = args.get::<Order>(0)?;
    let command = StopCommand::new(operation_registry(container)?, order.operation_id()?);
    Ok(Arc::new(command))
}

fn injected_action(action_key: &'static str) -> Factory {
    Factory::command(move |container: &Container, args: &Args| {
        args.expect_len(action_key, 1)?;
        let action: SharedCommand = container.resolve(action_key, args.clone())?;
        let injectable: Arc<InjectableCommand> = container.resolve(keys::INJECTABLE, Args::new())?;
        injectable.inject(action)?;
        Ok(injectable)
    })
}

fn sent_action(action_key: &'static str) -> Factory {
    Factory::new(move |container: &Container, args: &Args| {
        args.expect_len(action_key, 2)?;
        let order = args.get::<Order>(0)?;
        let receiver = args.get::<SharedReceiver>(1)?;
        let action: SharedCommand = container.resolve(action_key, args![order.clone()])?;
        Ok(Arc::new(SendCommand::new(action, Arc::clone(receiver))) as SharedCommand)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{ANGULAR_VELOCITY, DIRECTION, POSITION, VELOCITY};
    use orbit_core::testing::{MockCommand, RecordingReceiver};
    use orbit_types::{Angle, Vector};

    fn bootstrapped() -> (Container, Arc<OperationRegistry>) {
        let container = Container::new();
        let registry = Arc::new(OperationRegistry::new());
        register_builtins(&container, Arc::clone(&registry)).unwrap();
        (container, registry)
    }

    fn ship() -> GameObject {
        GameObject::new()
            .with(POSITION, Vector::xy(10, 20))
            .with(VELOCITY, Vector::xy(5, -3))
            .with(DIRECTION, Angle::from_degrees(45))
            .with(ANGULAR_VELOCITY, Angle::from_degrees(15))
    }

    #[test]
    fn registrations_are_deferred() {
        let container = Container::new();
        let commands = registrations(&container, Arc::new(OperationRegistry::new())).unwrap();
        assert!(container.is_empty());

        commands.execute().unwrap();
        assert_eq!(container.len(), commands.len());
        assert!(container.contains(keys::SEND_STOP));
    }

    #[test]
    fn move_from_game_object() {
        let (container, _) = bootstrapped();
        let ship = ship();
        let cmd: SharedCommand = container.resolve(keys::MOVE, args![ship.clone()]).unwrap();
        cmd.execute().unwrap();
        assert_eq!(ship.vector(POSITION), Some(Vector::xy(15, 17)));
    }

    #[test]
    fn move_from_adapter() {
        let (container, _) = bootstrapped();
        let ship = ship();
        let adapter: SharedMovingObject = container
            .resolve(keys::MOVING_ADAPTER, args![ship.clone()])
            .unwrap();
        let cmd: SharedCommand = container.resolve(keys::MOVE, args![adapter]).unwrap();
        cmd.execute().unwrap();
        assert_eq!(ship.vector(POSITION), Some(Vector::xy(15, 17)));
    }

    #[test]
    fn move_with_wrong_argument() {
        let (container, _) = bootstrapped();
        let err = container
            .resolve::<SharedCommand>(keys::MOVE, args![42u8])
            .err().expect("expected an error");
        assert!(matches!(err, CoreError::InvalidArgument { .. }));
    }

    #[test]
    fn spec_macro_moves_then_rotates() {
        let (container, _) = bootstrapped();
        let ship = ship();
        let cmd: SharedCommand = container
            .resolve(keys::MACRO_MOVE_ROTATE, args![ship.clone()])
            .unwrap();
        cmd.execute().unwrap();

        assert_eq!(ship.vector(POSITION), Some(Vector::xy(15, 17)));
        assert_eq!(ship.angle(DIRECTION), Some(Angle::from_degrees(60)));
    }

    #[test]
    fn specs_can_be_overridden() {
        let (container, _) = bootstrapped();
        container.register(keys::SPEC_MOVE, |_: &Container, _: &Args| {
            Ok(vec![keys::MOVE.to_string(), keys::MOVE.to_string()])
        });
        let ship = ship();
        let cmd: SharedCommand = container
            .resolve(keys::MACRO_MOVE, args![ship.clone()])
            .unwrap();
        cmd.execute().unwrap();
        assert_eq!(ship.vector(POSITION), Some(Vector::xy(20, 14)));
    }

    #[test]
    fn macro_with_absent_slot() {
        let (container, _) = bootstrapped();
        let first = Arc::new(MockCommand::new("first"));
        let slots: Vec<Option<SharedCommand>> = vec![Some(first.clone() as SharedCommand), None];
        let cmd: SharedCommand = container.resolve(keys::MACRO, args![slots]).unwrap();

        assert!(matches!(cmd.execute(), Err(CoreError::InvalidState { .. })));
        assert_eq!(first.calls(), 1);
    }

    #[test]
    fn send_delivers() {
        let (container, _) = bootstrapped();
        let receiver = Arc::new(RecordingReceiver::new());
        let payload: SharedCommand = Arc::new(MockCommand::new("payload"));
        let shared_receiver: SharedReceiver = receiver.clone();

        let cmd: SharedCommand = container
            .resolve(keys::SEND, args![payload, shared_receiver])
            .unwrap();
        cmd.execute().unwrap();
        assert_eq!(receiver.received_names(), vec!["payload"]);
    }

    #[test]
    fn injectable_is_transient() {
        let (container, _) = bootstrapped();
        let a: Arc<InjectableCommand> = container.resolve(keys::INJECTABLE, Args::new()).unwrap();
        let b: Arc<InjectableCommand> = container.resolve(keys::INJECTABLE, Args::new()).unwrap();
        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(a.execute(), Err(CoreError::NotReady));
    }

    #[test]
    fn registry_is_singleton() {
        let (container, registry) = bootstrapped();
        let resolved: Arc<OperationRegistry> = container
            .resolve(keys::OPERATION_REGISTRY, Args::new())
            .unwrap();
        assert!(Arc::ptr_eq(&resolved, &registry));
    }

    #[test]
    fn start_and_stop_actions() {
        let (container, registry) = bootstrapped();
        let order = Order::new()
            .with_operation_id("ship/move")
            .with_operation_type("Move")
            .with_game_object(ship());

        let start: SharedCommand = container.resolve(keys::START, args![order.clone()]).unwrap();
        start.execute().unwrap();
        assert!(registry.is_active("ship/move"));

        let stop: SharedCommand = container.resolve(keys::STOP, args![order]).unwrap();
        stop.execute().unwrap();
        assert!(!registry.is_active("ship/move"));
        assert!(matches!(stop.execute(), Err(CoreError::NotRunning { .. })));
    }

    #[test]
    fn start_with_incomplete_order() {
        let (container, _) = bootstrapped();
        let order = Order::new().with_operation_id("op");
        let err = container
            .resolve::<SharedCommand>(keys::START, args![order])
            .err().expect("expected an error");
        assert_eq!(
            err,
            CoreError::invalid_state("order must contain 'OperationType'")
        );
    }

    #[test]
    fn injectable_start_is_preloaded() {
        let (container, registry) = bootstrapped();
        let order = Order::new()
            .with_operation_id("spin")
            .with_operation_type("Rotate")
            .with_game_object(ship());

        let cmd: Arc<InjectableCommand> = container
            .resolve(keys::INJECTABLE_START, args![order])
            .unwrap();
        assert!(cmd.is_ready());
        cmd.execute().unwrap();
        assert!(registry.is_active("spin"));
    }

    #[test]
    fn injectable_keys_resolve_as_commands() {
        let (container, registry) = bootstrapped();
        registry
            .start("op", Arc::new(MockCommand::new("running")))
            .unwrap();

        let empty: SharedCommand = container.resolve(keys::INJECTABLE, Args::new()).unwrap();
        assert_eq!(empty.execute(), Err(CoreError::NotReady));

        let stop: SharedCommand = container
            .resolve(
                keys::INJECTABLE_STOP,
                args![Order::new().with_operation_id("op")],
            )
            .unwrap();
        stop.execute().unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn send_stop_goes_through_receiver() {
        let (container, registry) = bootstrapped();
        registry
            .start("op", Arc::new(MockCommand::new("running")))
            .unwrap();
        let receiver = Arc::new(RecordingReceiver::new());
        let shared_receiver: SharedReceiver = receiver.clone();
        let order = Order::new().with_operation_id("op");

        let cmd: SharedCommand = container
            .resolve(keys::SEND_STOP, args![order, shared_receiver])
            .unwrap();
        cmd.execute().unwrap();
        assert!(registry.is_active("op"));

        for delivered in receiver.received() {
            delivered.execute().unwrap();
        }
        assert!(!registry.is_active("op"));
    }
}
