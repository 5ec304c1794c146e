//! Orbit core: dependency container, commands and operations.
//!
//! # Overview
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                      Container                       │
//! │   "IoC.Register" ──▶ RegisterCommand                 │
//! │   "Commands.*"   ──▶ Factory(&Container, &Args)      │
//! └──────────────────────────┬───────────────────────────┘
//!                            │ resolve
//!                            ▼
//! ┌──────────────────────────────────────────────────────┐
//! │                    SharedCommand                     │
//! │  Leaf │ Macro │ Send │ Injectable │ Start │ Stop     │
//! └──────────────────────────┬───────────────────────────┘
//!                            │ start / stop
//!                            ▼
//! ┌──────────────────────────────────────────────────────┐
//! │                  OperationRegistry                   │
//! │        id ──▶ OperationRecord { command, .. }        │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use orbit_core::args;
//! use orbit_core::command::{Command, LeafCommand, SharedCommand};
//! use orbit_core::ioc::{Args, Container};
//! use orbit_core::operation::{OperationRegistry, StartCommand, StopCommand};
//! use std::sync::Arc;
//!
//! let ioc = Container::new();
//! ioc.register("Commands.Idle", |_: &Container, _: &Args| {
//!     Ok(Arc::new(LeafCommand::new("idle", || Ok(()))) as SharedCommand)
//! });
//!
//! let registry = Arc::new(OperationRegistry::new());
//! StartCommand::new(ioc.clone(), registry.clone(), "op-1", "Commands.Idle", args![])
//!     .execute()
//!     .unwrap();
//! assert!(registry.is_active("op-1"));
//!
//! StopCommand::new(registry.clone(), "op-1").execute().unwrap();
//! assert!(registry.is_empty());
//! ```
//!
//! # Features
//!
//! - `test-utils`: exposes [`testing`] mocks to other crates

pub mod command;
mod error;
pub mod ioc;
pub mod operation;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use command::{Command, SharedCommand};
pub use error::CoreError;
pub use ioc::{Args, Container};
