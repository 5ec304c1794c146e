//! Integer vectors.

use crate::ValueError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Immutable n-dimensional integer vector (n ≥ 1).
///
/// Equality is structural: same dimension, same coordinates.
///
/// # Serialization
///
/// Serializes as a plain array (`[10, 20]`). Deserializing an empty array
/// fails, so a deserialized vector always upholds the n ≥ 1 invariant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<i32>", into = "Vec<i32>")]
pub struct Vector {
    coords: Vec<i32>,
}

impl Vector {
    /// Creates a vector from its coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::EmptyVector`] if `coords` is empty.
    pub fn new(coords: impl Into<Vec<i32>>) -> Result<Self, ValueError> {
        let coords = coords.into();
        if coords.is_empty() {
            return Err(ValueError::EmptyVector);
        }
        Ok(Self { coords })
    }

    /// Creates a two-dimensional vector.
    #[must_use]
    pub fn xy(x: i32, y: i32) -> Self {
        Self { coords: vec![x, y] }
    }

    /// Number of coordinates.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.coords.len()
    }

    /// Coordinate at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<i32> {
        self.coords.get(index).copied()
    }

    /// All coordinates.
    #[must_use]
    pub fn coords(&self) -> &[i32] {
        &self.coords
    }

    /// Component-wise sum.
    ///
    /// # Errors
    ///
    /// - [`ValueError::DimensionMismatch`] if the dimensions differ
    /// - [`ValueError::Overflow`] if a coordinate leaves the `i32` range
    pub fn checked_add(&self, other: &Self) -> Result<Self, ValueError> {
        if self.dimension() != other.dimension() {
            return Err(ValueError::DimensionMismatch {
                left: self.dimension(),
                right: other.dimension(),
            });
        }
        let coords = self
            .coords
            .iter()
            .zip(&other.coords)
            .enumerate()
            .map(|(axis, (a, b))| a.checked_add(*b).ok_or(ValueError::Overflow { axis }))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { coords })
    }
}

impl TryFrom<Vec<i32>> for Vector {
    type Error = ValueError;

    fn try_from(coords: Vec<i32>) -> Result<Self, Self::Error> {
        Self::new(coords)
    }
}

impl From<Vector> for Vec<i32> {
    fn from(v: Vector) -> Self {
        v.coords
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, c) in self.coords.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{c}")?;
        }
        f.write_str(")")
    }
}
