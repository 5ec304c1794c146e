//! Discrete angles.

use crate::ValueError;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use std::ops::Add;

/// Immutable angle expressed as `numerator / 360`.
///
/// The numerator is always normalized into `[0, 360)`, both on construction
/// and after every addition, so `Angle::from_degrees(-30)` equals
/// `Angle::from_degrees(330)`.
///
/// # Serialization
///
/// Serializes as the bare numerator. Deserialization normalizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub struct Angle {
    numerator: i32,
}

impl Angle {
    /// Common denominator of every angle.
    pub const DENOMINATOR: i32 = 360;

    /// Creates an angle from `numerator / denominator` of a full turn.
    ///
    /// The fraction is rescaled to the common denominator with integer
    /// arithmetic (truncating toward zero), then normalized.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::ZeroDenominator`] if `denominator` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use orbit_types::Angle;
    ///
    /// let quarter = Angle::new(1, 4).unwrap();
    /// assert_eq!(quarter.numerator(), 90);
    /// ```
    pub fn new(numerator: i32, denominator: i32) -> Result<Self, ValueError> {
        if denominator == 0 {
            return Err(ValueError::ZeroDenominator);
        }
        let scaled = if denominator == Self::DENOMINATOR {
            i64::from(numerator)
        } else {
            i64::from(numerator) * i64::from(Self::DENOMINATOR) / i64::from(denominator)
        };
        Ok(Self::normalized(scaled))
    }

    /// Creates an angle of `degrees / 360`.
    #[must_use]
    pub fn from_degrees(degrees: i32) -> Self {
        Self::normalized(i64::from(degrees))
    }

    fn normalized(value: i64) -> Self {
        let n = value.rem_euclid(i64::from(Self::DENOMINATOR));
        // rem_euclid keeps n in [0, 360), which always fits in i32
        Self {
            numerator: n as i32,
        }
    }

    /// Numerator over [`Angle::DENOMINATOR`], in `[0, 360)`.
    #[must_use]
    pub fn numerator(self) -> i32 {
        self.numerator
    }

    /// The angle in radians.
    #[must_use]
    pub fn to_radians(self) -> f64 {
        2.0 * PI * f64::from(self.numerator) / f64::from(Self::DENOMINATOR)
    }
}

impl Add for Angle {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::normalized(i64::from(self.numerator) + i64::from(rhs.numerator))
    }
}

impl From<i32> for Angle {
    fn from(degrees: i32) -> Self {
        Self::from_degrees(degrees)
    }
}

impl From<Angle> for i32 {
    fn from(angle: Angle) -> Self {
        angle.numerator
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, Self::DENOMINATOR)
    }
}
