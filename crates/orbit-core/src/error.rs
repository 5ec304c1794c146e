//! Core error type.
//!
//! A single enum covers dependency resolution, command execution and
//! operation bookkeeping, because those paths nest: a macro runs a start
//! command, which resolves a dependency, whose factory may reject its
//! arguments. Errors travel back up that chain unchanged; the only wrapping
//! happens in [`SendCommand`](crate::command::SendCommand), which turns a
//! receiver failure into [`CoreError::DeliveryFailed`].
//!
//! # Error Code Convention
//!
//! | Variant | Code | Recoverable |
//! |---------|------|-------------|
//! | `NotRegistered` | `CORE_NOT_REGISTERED` | Yes |
//! | `TypeMismatch` | `CORE_TYPE_MISMATCH` | No |
//! | `InvalidArgument` | `CORE_INVALID_ARGUMENT` | No |
//! | `InvalidState` | `CORE_INVALID_STATE` | No |
//! | `NotReady` | `CORE_NOT_READY` | Yes |
//! | `AlreadyRunning` | `CORE_ALREADY_RUNNING` | No |
//! | `NotRunning` | `CORE_NOT_RUNNING` | No |
//! | `DeliveryFailed` | `CORE_DELIVERY_FAILED` | Same as cause |
//! | `ExecutionFailed` | `CORE_EXECUTION_FAILED` | Yes |
//!
//! # Example
//!
//! ```
//! use orbit_core::CoreError;
//! use orbit_types::ErrorCode;
//!
//! let err = CoreError::not_registered("Commands.Move");
//! assert_eq!(err.code(), "CORE_NOT_REGISTERED");
//! assert!(err.is_recoverable());
//! ```

use orbit_types::ErrorCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised by the container, commands and the operation registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum CoreError {
    /// No factory is registered under the key.
    #[error("dependency '{key}' is not registered")]
    NotRegistered {
        /// The key that was looked up.
        key: String,
    },

    /// The factory produced a value of another type than requested.
    #[error("dependency '{key}' produces {produced}, requested as {expected}")]
    TypeMismatch {
        /// The key that was resolved.
        key: String,
        /// Type requested by the caller.
        expected: String,
        /// Type tag recorded when the factory was registered.
        produced: String,
    },

    /// Arguments were missing, of the wrong type or malformed.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// What was wrong.
        message: String,
    },

    /// A structure the operation depends on is incomplete.
    ///
    /// Raised for absent macro slots, missing order fields and game
    /// objects lacking a required property.
    #[error("invalid state: {message}")]
    InvalidState {
        /// What was missing.
        message: String,
    },

    /// An injectable command was executed before anything was injected.
    #[error("no command has been injected")]
    NotReady,

    /// The operation id is already registered.
    #[error("operation '{id}' is already running")]
    AlreadyRunning {
        /// The duplicate id.
        id: String,
    },

    /// The operation id is not registered.
    #[error("operation '{id}' was not running")]
    NotRunning {
        /// The unknown id.
        id: String,
    },

    /// A receiver rejected a sent command.
    #[error("receiver cannot accept the command")]
    DeliveryFailed {
        /// The receiver's original error.
        #[source]
        source: Box<CoreError>,
    },

    /// A leaf command failed while running.
    #[error("execution failed: {message}")]
    ExecutionFailed {
        /// Failure description.
        message: String,
    },
}

impl CoreError {
    /// Creates a [`CoreError::NotRegistered`].
    pub fn not_registered(key: impl Into<String>) -> Self {
        Self::NotRegistered { key: key.into() }
    }

    /// Creates a [`CoreError::InvalidArgument`].
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Creates a [`CoreError::InvalidState`].
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState {
            message: message.into(),
        }
    }

    /// Creates a [`CoreError::ExecutionFailed`].
    pub fn execution_failed(message: impl Into<String>) -> Self {
        Self::ExecutionFailed {
            message: message.into(),
        }
    }

    /// Wraps a receiver failure as [`CoreError::DeliveryFailed`].
    pub fn delivery_failed(cause: Self) -> Self {
        Self::DeliveryFailed {
            source: Box::new(cause),
        }
    }

    /// The wrapped error of a [`CoreError::DeliveryFailed`].
    #[must_use]
    pub fn cause(&self) -> Option<&Self> {
        match self {
            Self::DeliveryFailed { source } => Some(source),
            _ => None,
        }
    }
}

impl ErrorCode for CoreError {
    fn code(&self) -> &'static str {
        match self {
            Self::NotRegistered { .. } => "CORE_NOT_REGISTERED",
            Self::TypeMismatch { .. } => "CORE_TYPE_MISMATCH",
            Self::InvalidArgument { .. } => "CORE_INVALID_ARGUMENT",
            Self::InvalidState { .. } => "CORE_INVALID_STATE",
            Self::NotReady => "CORE_NOT_READY",
            Self::AlreadyRunning { .. } => "CORE_ALREADY_RUNNING",
            Self::NotRunning { .. } => "CORE_NOT_RUNNING",
            Self::DeliveryFailed { .. } => "CORE_DELIVERY_FAILED",
            Self::ExecutionFailed { .. } => "CORE_EXECUTION_FAILED",
        }
    }

    fn is_recoverable(&self) -> bool {
        match self {
            // Register the dependency / inject a command, then retry.
            Self::NotRegistered { .. } | Self::NotReady | Self::ExecutionFailed { .. } => true,
            Self::DeliveryFailed { source } => source.is_recoverable(),
            Self::TypeMismatch { .. }
            | Self::InvalidArgument { .. }
            | Self::InvalidState { .. }
            | Self::AlreadyRunning { .. }
            | Self::NotRunning { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbit_types::assert_error_codes;
    use std::error::Error as _;

    fn all_variants() -> Vec<CoreError> {
        vec![
            CoreError::not_registered("k"),
            CoreError::TypeMismatch {
                key: "k".into(),
                expected: "u32".into(),
                produced: "String".into(),
            },
            CoreError::invalid_argument("bad"),
            CoreError::invalid_state("missing"),
            CoreError::NotReady,
            CoreError::AlreadyRunning { id: "op".into() },
            CoreError::NotRunning { id: "op".into() },
            CoreError::delivery_failed(CoreError::NotReady),
            CoreError::execution_failed("boom"),
        ]
    }

    #[test]
    fn codes_follow_convention() {
        assert_error_codes(&all_variants(), "CORE_");
    }

    #[test]
    fn codes_are_unique() {
        let mut codes: Vec<_> = all_variants().iter().map(ErrorCode::code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), all_variants().len());
    }

    #[test]
    fn delivery_failed_inherits_recoverability() {
        assert!(CoreError::delivery_failed(CoreError::NotReady).is_recoverable());
        assert!(!CoreError::delivery_failed(CoreError::invalid_argument("x")).is_recoverable());
    }

    #[test]
    fn delivery_failed_keeps_source_chain() {
        let err = CoreError::delivery_failed(CoreError::execution_failed("engine offline"));
        assert_eq!(err.to_string(), "receiver cannot accept the command");
        assert_eq!(
            err.cause(),
            Some(&CoreError::execution_failed("engine offline"))
        );

        let source = err.source().expect("source should be set");
        assert_eq!(source.to_string(), "execution failed: engine offline");
    }

    #[test]
    fn cause_is_none_for_other_variants() {
        assert!(CoreError::NotReady.cause().is_none());
    }

    #[test]
    fn display_type_mismatch() {
        let err = CoreError::TypeMismatch {
            key: "Answer".into(),
            expected: "alloc::string::String".into(),
            produced: "u32".into(),
        };
        assert_eq!(
            err.to_string(),
            "dependency 'Answer' produces u32, requested as alloc::string::String"
        );
    }

    #[test]
    fn serde_roundtrip_nested() {
        let err = CoreError::delivery_failed(CoreError::NotRunning { id: "op-1".into() });
        let json = serde_json::to_string(&err).unwrap();
        let back: CoreError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, err);
    }
}
