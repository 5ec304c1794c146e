//! Demo steps printed by the `orbit` binary.

use anyhow::{bail, Context, Result};
use orbit_core::command::{
    CommandInjectable, ImmediateReceiver, InjectableCommand, SharedReceiver,
};
use orbit_core::{args, Args, Command, CoreError, SharedCommand};
use orbit_runtime::adapters::{ANGULAR_VELOCITY, DIRECTION, POSITION, VELOCITY};
use orbit_runtime::{keys, GameObject, Order, Runtime};
use orbit_types::{Angle, ErrorCode, Vector};
use std::sync::Arc;

/// Runs every demo step in order.
pub fn run_all(runtime: &Runtime) -> Result<()> {
    values()?;
    movement(runtime)?;
    macros(runtime)?;
    send(runtime)?;
    injection(runtime)?;
    operations(runtime)?;
    println!("\nAll steps completed.");
    Ok(())
}

fn ship() -> GameObject {
    GameObject::new()
        .with(POSITION, Vector::xy(10, 20))
        .with(VELOCITY, Vector::xy(5, -3))
        .with(DIRECTION, Angle::from_degrees(45))
        .with(ANGULAR_VELOCITY, Angle::from_degrees(15))
}

fn describe(ship: &GameObject) -> String {
    let position = ship
        .vector(POSITION)
        .map_or_else(|| "?".to_string(), |v| v.to_string());
    let direction = ship
        .angle(DIRECTION)
        .map_or_else(|| "?".to_string(), |a| a.to_string());
    format!("position {position}, direction {direction}")
}

fn values() -> Result<()> {
    println!("\n[1] Values");
    let sum = Vector::xy(12, 5).checked_add(&Vector::xy(-7, 3))?;
    println!("  (12, 5) + (-7, 3) = {sum}");

    let mismatch = Vector::xy(1, 2).checked_add(&Vector::new([1, 2, 3])?);
    if let Err(e) = mismatch {
        println!("  (1, 2) + (1, 2, 3) -> {} [{}]", e, e.code());
    }

    let turned = Angle::from_degrees(350) + Angle::from_degrees(20);
    println!("  350/360 + 20/360 = {turned}");
    println!("  1/8 turn = {}", Angle::new(1, 8)?);
    Ok(())
}

fn movement(runtime: &Runtime) -> Result<()> {
    println!("\n[2] Move and rotate");
    let ship = ship();
    println!("  before: {}", describe(&ship));

    runtime.run(keys::MOVE, args![ship.clone()])?;
    runtime.run(keys::ROTATE, args![ship.clone()])?;
    println!("  after:  {}", describe(&ship));

    let wreck = GameObject::new().with(VELOCITY, Vector::xy(1, 1));
    if let Err(e) = runtime.run(keys::MOVE, args![wreck]) {
        println!("  object without position -> {e} [{}]", e.code());
    }
    Ok(())
}

fn macros(runtime: &Runtime) -> Result<()> {
    println!("\n[3] Macro commands");
    let ship = ship();
    let steps: Vec<String> = runtime
        .container()
        .resolve(keys::SPEC_MOVE_ROTATE, Args::new())?;
    println!("  {} = {steps:?}", keys::SPEC_MOVE_ROTATE);

    runtime.run(keys::MACRO_MOVE_ROTATE, args![ship.clone()])?;
    println!("  after {}: {}", keys::MACRO_MOVE_ROTATE, describe(&ship));

    let broken: SharedCommand = runtime.command(
        keys::MACRO,
        args![vec![
            Some(runtime.command(keys::MOVE, args![ship.clone()])?),
            None,
        ]],
    )?;
    if let Err(e) = broken.execute() {
        println!("  macro with a hole -> {e}");
    }
    println!("  position after partial macro: {}", describe(&ship));
    Ok(())
}

fn send(runtime: &Runtime) -> Result<()> {
    println!("\n[4] Send");
    let ship = ship();
    let movement = runtime.command(keys::MOVE, args![ship.clone()])?;
    let receiver: SharedReceiver = Arc::new(ImmediateReceiver);

    runtime.run(keys::SEND, args![movement, receiver])?;
    println!("  delivered move to immediate receiver: {}", describe(&ship));
    Ok(())
}

fn injection(runtime: &Runtime) -> Result<()> {
    println!("\n[5] Injection");
    let ship = ship();
    let injectable: Arc<InjectableCommand> = runtime
        .container()
        .resolve(keys::INJECTABLE, Args::new())?;

    match injectable.execute() {
        Err(CoreError::NotReady) => println!("  before injection -> not ready"),
        other => bail!("expected NotReady, got {other:?}"),
    }

    injectable.inject(runtime.command(keys::ROTATE, args![ship.clone()])?)?;
    injectable.execute()?;
    println!("  after injecting rotate: {}", describe(&ship));
    Ok(())
}

fn operations(runtime: &Runtime) -> Result<()> {
    println!("\n[6] Long-running operations");
    let ship = ship();
    let order = Order::new()
        .with_operation_id("ship-1/move")
        .with_operation_type("Move")
        .with_game_object(ship.clone());

    runtime.run(keys::START, args![order.clone()])?;
    println!("  active: {:?}", runtime.operations().active_ids());

    if let Err(e) = runtime.run(keys::START, args![order.clone()]) {
        println!("  second start -> {e} [{}]", e.code());
    }

    for tick in 1..=3 {
        let record = runtime
            .operations()
            .get("ship-1/move")
            .context("operation disappeared")?;
        record.command().execute()?;
        println!("  tick {tick}: {}", describe(&ship));
    }

    runtime.run(keys::STOP, args![order.clone()])?;
    println!("  stopped; active: {:?}", runtime.operations().active_ids());

    if let Err(e) = runtime.run(keys::STOP, args![order]) {
        println!("  second stop -> {e} [{}]", e.code());
    }
    Ok(())
}
