//! Unified error interface for Orbit.
//!
//! Every Orbit error enum implements [`ErrorCode`] so callers can branch on a
//! stable, machine-readable code instead of matching display strings.
//!
//! # Example
//!
//! ```
//! use orbit_types::ErrorCode;
//!
//! #[derive(Debug)]
//! enum LaunchError {
//!     PadBusy,
//!     NoFuel,
//! }
//!
//! impl ErrorCode for LaunchError {
//!     fn code(&self) -> &'static str {
//!         match self {
//!             Self::PadBusy => "LAUNCH_PAD_BUSY",
//!             Self::NoFuel => "LAUNCH_NO_FUEL",
//!         }
//!     }
//!
//!     fn is_recoverable(&self) -> bool {
//!         matches!(self, Self::PadBusy)
//!     }
//! }
//!
//! assert_eq!(LaunchError::PadBusy.code(), "LAUNCH_PAD_BUSY");
//! assert!(!LaunchError::NoFuel.is_recoverable());
//! ```

use thiserror::Error;

/// Machine-readable error classification.
///
/// # Code Format
///
/// - **UPPER_SNAKE_CASE**, prefixed with the owning layer
///   (`"CORE_"`, `"VALUE_"`, `"CONFIG_"`)
/// - **Stable**: a code is part of the API once published
///
/// # Recoverability
///
/// An error is recoverable when trying again (possibly after the caller
/// changes external state, e.g. registers the missing dependency) may
/// succeed. Malformed input and broken invariants are not recoverable.
pub trait ErrorCode {
    /// Returns the stable error code.
    fn code(&self) -> &'static str;

    /// Returns whether a retry or corrective action may succeed.
    fn is_recoverable(&self) -> bool;
}

/// Asserts that an error code is non-empty, UPPER_SNAKE_CASE and starts
/// with `expected_prefix`.
///
/// # Panics
///
/// Panics with a descriptive message when any check fails.
///
/// ```
/// use orbit_types::{assert_error_code, ValueError};
///
/// assert_error_code(&ValueError::EmptyVector, "VALUE_");
/// ```
pub fn assert_error_code<E: ErrorCode>(err: &E, expected_prefix: &str) {
    let code = err.code();

    assert!(!code.is_empty(), "Error code must not be empty");
    assert!(
        code.starts_with(expected_prefix),
        "Error code '{code}' must start with prefix '{expected_prefix}'"
    );
    assert!(
        is_upper_snake_case(code),
        "Error code '{code}' must be UPPER_SNAKE_CASE"
    );
}

/// Runs [`assert_error_code`] over every given error.
pub fn assert_error_codes<E: ErrorCode>(errors: &[E], expected_prefix: &str) {
    for err in errors {
        assert_error_code(err, expected_prefix);
    }
}

fn is_upper_snake_case(s: &str) -> bool {
    !s.is_empty()
        && !s.starts_with('_')
        && !s.ends_with('_')
        && !s.contains("__")
        && s
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

/// Errors raised by the value types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// Two vectors of different dimension were combined.
    #[error("cannot add vectors of different dimensions: {left} and {right}")]
    DimensionMismatch {
        /// Dimension of the left operand.
        left: usize,
        /// Dimension of the right operand.
        right: usize,
    },

    /// A vector was built without coordinates.
    #[error("vector must have at least one coordinate")]
    EmptyVector,

    /// A coordinate sum left the `i32` range.
    #[error("coordinate {axis} overflows")]
    Overflow {
        /// Index of the overflowing coordinate.
        axis: usize,
    },

    /// An angle was built with a zero denominator.
    #[error("angle denominator must not be zero")]
    ZeroDenominator,
}

impl ErrorCode for ValueError {
    fn code(&self) -> &'static str {
        match self {
            Self::DimensionMismatch { .. } => "VALUE_DIMENSION_MISMATCH",
            Self::EmptyVector => "VALUE_EMPTY_VECTOR",
            Self::Overflow { .. } => "VALUE_OVERFLOW",
            Self::ZeroDenominator => "VALUE_ZERO_DENOMINATOR",
        }
    }

    fn is_recoverable(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_variants() -> Vec<ValueError> {
        vec![
            ValueError::DimensionMismatch { left: 2, right: 3 },
            ValueError::EmptyVector,
            ValueError::Overflow { axis: 0 },
            ValueError::ZeroDenominator,
        ]
    }

    #[test]
    fn value_error_codes_follow_convention() {
        assert_error_codes(&all_variants(), "VALUE_");
    }

    #[test]
    fn value_errors_are_not_recoverable() {
        for err in all_variants() {
            assert!(!err.is_recoverable(), "{} should not be recoverable", err.code());
        }
    }

    #[test]
    fn display_dimension_mismatch() {
        let err = ValueError::DimensionMismatch { left: 2, right: 3 };
        assert_eq!(
            err.to_string(),
            "cannot add vectors of different dimensions: 2 and 3"
        );
    }

    #[test]
    #[should_panic(expected = "must start with prefix")]
    fn assert_error_code_wrong_prefix() {
        assert_error_code(&ValueError::EmptyVector, "CORE_");
    }

    #[test]
    fn upper_snake_case_detection() {
        assert!(is_upper_snake_case("CORE_NOT_READY"));
        assert!(is_upper_snake_case("A1_B2"));
        assert!(!is_upper_snake_case(""));
        assert!(!is_upper_snake_case("core_not_ready"));
        assert!(!is_upper_snake_case("_CORE"));
        assert!(!is_upper_snake_case("CORE_"));
        assert!(!is_upper_snake_case("CORE__READY"));
    }
}
