//! Planet records as served by the upstream catalog

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique planet identifier (the route parameter / URL key)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct PlanetId(String);

impl PlanetId {
    /// Create an identifier from its string form
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlanetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlanetId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for PlanetId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A single planet record
///
/// The diameter is the comparison dimension for related-planet selection;
/// the remaining fields are display-only and come through verbatim from the
/// upstream catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Planet {
    /// Unique identifier
    pub id: PlanetId,
    /// Display name
    pub name: String,
    /// Mean diameter in kilometres
    pub diameter: f64,
    /// Surface gravity, as reported by the catalog
    #[serde(default)]
    pub gravity: String,
    /// Dominant terrain description
    #[serde(default)]
    pub terrain: String,
    /// Climate description
    #[serde(default)]
    pub climate: String,
    /// Population, as reported (free-form: may be "unknown")
    #[serde(default)]
    pub population: String,
}

impl Planet {
    /// Create a planet with only the fields selection cares about.
    /// Display fields default to empty strings.
    pub fn new(id: impl Into<PlanetId>, name: impl Into<String>, diameter: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            diameter,
            gravity: String::new(),
            terrain: String::new(),
            climate: String::new(),
            population: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planet_id_roundtrip() {
        let id = PlanetId::new("42");
        assert_eq!(id.as_str(), "42");
        assert_eq!(id.to_string(), "42");
        assert_eq!(PlanetId::from("42"), id);
    }

    #[test]
    fn test_planet_json_shape() {
        let json = r#"{
            "id": "1",
            "name": "Tatooine",
            "diameter": 10465.0,
            "gravity": "1 standard",
            "terrain": "desert",
            "climate": "arid",
            "population": "200000"
        }"#;
        let planet: Planet = serde_json::from_str(json).unwrap();
        assert_eq!(planet.id, PlanetId::new("1"));
        assert_eq!(planet.name, "Tatooine");
        assert_eq!(planet.diameter, 10465.0);
        assert_eq!(planet.climate, "arid");
    }

    #[test]
    fn test_display_fields_default() {
        let json = r#"{"id": "2", "name": "Hoth", "diameter": 7200.0}"#;
        let planet: Planet = serde_json::from_str(json).unwrap();
        assert!(planet.gravity.is_empty());
        assert!(planet.population.is_empty());
    }
}
