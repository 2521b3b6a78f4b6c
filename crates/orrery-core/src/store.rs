//! Planet store provider trait and the in-memory reference implementation
//!
//! The detail view depends only on this trait; swapping an HTTP-backed store
//! for the in-memory one is a constructor argument, not a code change.

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::error::{Error, Result};
use crate::types::{Planet, PlanetId};

/// Trait for fetching planets from a remote catalog
#[async_trait]
pub trait PlanetStore: Send + Sync {
    /// Fetch the full catalog
    async fn fetch_all(&self) -> Result<Vec<Planet>>;

    /// Fetch a single planet by identifier
    ///
    /// Returns [`Error::PlanetNotFound`] when the catalog has no such planet.
    async fn fetch_by_id(&self, id: &PlanetId) -> Result<Planet>;

    /// Get provider name for logging
    fn name(&self) -> &str;
}

/// In-memory planet store backed by a plain table
///
/// Used by tests and demos; stands in for the application's remote catalog.
#[derive(Default)]
pub struct InMemoryPlanetStore {
    planets: RwLock<Vec<Planet>>,
}

impl InMemoryPlanetStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with a catalog
    pub fn with_planets(planets: Vec<Planet>) -> Self {
        Self {
            planets: RwLock::new(planets),
        }
    }

    /// Insert or replace a planet, keyed by id
    pub fn upsert(&self, planet: Planet) {
        let mut planets = self.planets.write();
        match planets.iter_mut().find(|p| p.id == planet.id) {
            Some(existing) => *existing = planet,
            None => planets.push(planet),
        }
    }

    /// Number of planets in the catalog
    pub fn len(&self) -> usize {
        self.planets.read().len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.planets.read().is_empty()
    }
}

#[async_trait]
impl PlanetStore for InMemoryPlanetStore {
    async fn fetch_all(&self) -> Result<Vec<Planet>> {
        Ok(self.planets.read().clone())
    }

    async fn fetch_by_id(&self, id: &PlanetId) -> Result<Planet> {
        self.planets
            .read()
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .ok_or_else(|| Error::PlanetNotFound(id.to_string()))
    }

    fn name(&self) -> &str {
        "in-memory"
    }
}
