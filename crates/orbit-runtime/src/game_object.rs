//! Property-bag game objects.

use orbit_types::{Angle, Vector};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A value stored on a [`GameObject`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Property {
    /// Position, velocity and similar.
    Vector(Vector),
    /// Direction, angular velocity and similar.
    Angle(Angle),
    /// Integer counters (fuel, hit points).
    Int(i64),
    /// Free text.
    Text(String),
}

impl Property {
    /// The vector, if this is [`Property::Vector`].
    #[must_use]
    pub fn as_vector(&self) -> Option<&Vector> {
        match self {
            Self::Vector(v) => Some(v),
            _ => None,
        }
    }

    /// The angle, if this is [`Property::Angle`].
    #[must_use]
    pub fn as_angle(&self) -> Option<Angle> {
        match self {
            Self::Angle(a) => Some(*a),
            _ => None,
        }
    }
}

impl From<Vector> for Property {
    fn from(v: Vector) -> Self {
        Self::Vector(v)
    }
}

impl From<Angle> for Property {
    fn from(a: Angle) -> Self {
        Self::Angle(a)
    }
}

impl From<i64> for Property {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<String> for Property {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for Property {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// Shared handle to a mutable property map.
///
/// Clones point to the same object, so a command holding a clone sees
/// updates made through any other clone. Equality compares identity, not
/// contents.
///
/// ```
/// use orbit_runtime::GameObject;
/// use orbit_types::Vector;
///
/// let ship = GameObject::new().with("Position", Vector::xy(1, 2));
/// let handle = ship.clone();
/// handle.set("Position", Vector::xy(3, 4));
/// assert_eq!(ship.vector("Position"), Some(Vector::xy(3, 4)));
/// ```
#[derive(Clone, Default)]
pub struct GameObject {
    properties: Arc<RwLock<HashMap<String, Property>>>,
}

impl GameObject {
    /// Creates an object with no properties.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property, builder style.
    #[must_use]
    pub fn with(self, key: impl Into<String>, value: impl Into<Property>) -> Self {
        self.set(key, value);
        self
    }

    /// Sets or replaces a property.
    pub fn set(&self, key: impl Into<String>, value: impl Into<Property>) {
        self.properties.write().insert(key.into(), value.into());
    }

    /// Snapshot of a property.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Property> {
        self.properties.read().get(key).cloned()
    }

    /// Vector property, if present and of that kind.
    #[must_use]
    pub fn vector(&self, key: &str) -> Option<Vector> {
        self.properties.read().get(key)?.as_vector().cloned()
    }

    /// Angle property, if present and of that kind.
    #[must_use]
    pub fn angle(&self, key: &str) -> Option<Angle> {
        self.properties.read().get(key)?.as_angle()
    }

    /// Removes a property, returning it.
    pub fn remove(&self, key: &str) -> Option<Property> {
        self.properties.write().remove(key)
    }

    /// Returns `true` if the property exists.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.properties.read().contains_key(key)
    }

    /// Property names in sorted order.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.properties.read().keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Returns `true` if both handles point to the same object.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.properties, &other.properties)
    }
}

impl PartialEq for GameObject {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for GameObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.properties.read().iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_accessors() {
        let obj = GameObject::new()
            .with("Position", Vector::xy(1, 2))
            .with("Direction", Angle::from_degrees(90))
            .with("Fuel", 10i64)
            .with("Name", "scout");

        assert_eq!(obj.vector("Position"), Some(Vector::xy(1, 2)));
        assert_eq!(obj.angle("Direction"), Some(Angle::from_degrees(90)));
        assert_eq!(obj.get("Fuel"), Some(Property::Int(10)));
        assert_eq!(obj.get("Name"), Some(Property::Text("scout".into())));
    }

    #[test]
    fn wrong_kind_is_none() {
        let obj = GameObject::new().with("Position", Angle::from_degrees(10));
        assert_eq!(obj.vector("Position"), None);
        assert_eq!(obj.angle("Missing"), None);
    }

    #[test]
    fn clones_share_state() {
        let obj = GameObject::new();
        let other = obj.clone();
        other.set("Fuel", 5i64);

        assert!(obj.contains("Fuel"));
        assert_eq!(obj, other);
        assert_ne!(obj, GameObject::new());
    }

    #[test]
    fn remove_and_keys() {
        let obj = GameObject::new().with("b", 1i64).with("a", 2i64);
        assert_eq!(obj.keys(), vec!["a", "b"]);
        assert_eq!(obj.remove("a"), Some(Property::Int(2)));
        assert_eq!(obj.keys(), vec!["b"]);
    }

    #[test]
    fn property_serde() {
        let json = serde_json::to_string(&Property::Vector(Vector::xy(1, 2))).unwrap();
        assert_eq!(json, r#"{"vector":[1,2]}"#);
        let back: Property = serde_json::from_str(r#"{"angle":370}"#).unwrap();
        assert_eq!(back, Property::Angle(Angle::from_degrees(10)));
    }
}
