//! orrery-core: planet catalog detail logic
//!
//! This crate provides the logic core behind a planet detail page: a pure
//! related-planet selector (closest diameters first), a three-state model for
//! values fetched from a remote catalog, a store capability trait the view
//! depends on, and a view model that reconciles route changes into fetches
//! and projects the observed state into a renderable tree.

pub mod config;
pub mod detail;
pub mod error;
pub mod related;
pub mod remote;
pub mod store;
pub mod types;

pub use config::{CatalogConfig, RelatedConfig};
pub use detail::{DetailView, PlanetDetail, PlanetPanel, RelatedEntry, RelatedView};
pub use error::{Error, Result};
pub use related::{select_related, DEFAULT_RELATED_LIMIT};
pub use remote::RemoteData;
pub use store::{InMemoryPlanetStore, PlanetStore};
pub use types::{Planet, PlanetId};
