//! Shared types for Orbit.
//!
//! This crate holds the pieces every other Orbit crate depends on and that
//! carry no shared mutable state:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  orbit-types   : ErrorCode, Vector, Angle       ◄── HERE    │
//! ├─────────────────────────────────────────────────────────────┤
//! │  orbit-core    : Container, Command, OperationRegistry      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  orbit-runtime : GameObject adapters, bootstrap, config     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  orbit-cli     : demo binary                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Value Types
//!
//! [`Vector`] and [`Angle`] are immutable values with structural equality.
//! Commands treat them as opaque state: read, add, write back.
//!
//! ```
//! use orbit_types::{Angle, Vector};
//!
//! let position = Vector::xy(10, 20);
//! let velocity = Vector::xy(5, -3);
//! assert_eq!(position.checked_add(&velocity).unwrap(), Vector::xy(15, 17));
//!
//! let direction = Angle::from_degrees(350);
//! let turn = Angle::from_degrees(20);
//! assert_eq!(direction + turn, Angle::from_degrees(10));
//! ```

mod angle;
mod error;
mod vector;

pub use angle::Angle;
pub use error::{assert_error_code, assert_error_codes, ErrorCode, ValueError};
pub use vector::Vector;
