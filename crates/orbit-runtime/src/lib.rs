//! Orbit runtime: game objects, movement and the built-in dependency set.
//!
//! This crate wires [`orbit_core`] to a small space-game domain:
//!
//! - [`GameObject`]: shared property bag (`Position`, `Velocity`, ...)
//! - [`adapters`]: [`MovingObject`] / [`RotatingObject`] views over a game object
//! - [`movement`]: [`MoveCommand`] and [`RotateCommand`]
//! - [`Order`]: argument of the start and stop actions
//! - [`bootstrap`]: registers every built-in key through `"IoC.Register"`
//! - [`config`]: layered TOML configuration
//! - [`Runtime`]: owns all of the above
//!
//! # Example
//!
//! ```
//! use orbit_core::args;
//! use orbit_runtime::adapters::{POSITION, VELOCITY};
//! use orbit_runtime::config::OrbitConfig;
//! use orbit_runtime::{keys, GameObject, Runtime};
//! use orbit_types::Vector;
//!
//! let runtime = Runtime::new(OrbitConfig::default()).unwrap();
//! let ship = GameObject::new()
//!     .with(POSITION, Vector::xy(10, 20))
//!     .with(VELOCITY, Vector::xy(5, -3));
//!
//! runtime.run(keys::MOVE, args![ship.clone()]).unwrap();
//! assert_eq!(ship.vector(POSITION), Some(Vector::xy(15, 17)));
//! ```

pub mod adapters;
pub mod bootstrap;
pub mod config;
mod game_object;
pub mod movement;
mod order;
mod runtime;

pub use adapters::{MovingObject, RotatingObject};
pub use bootstrap::keys;
pub use game_object::{GameObject, Property};
pub use movement::{MoveCommand, RotateCommand};
pub use order::{Order, GAME_OBJECT, OPERATION_ID, OPERATION_TYPE};
pub use runtime::Runtime;
