//! Planet detail view model
//!
//! Holds the observed state for one detail page: the planet under view and
//! the full catalog it draws related planets from. Navigation drives fetches
//! through the injected store; `view` is a pure projection of the current
//! state into an exhaustively-matchable tree for the presentation layer.

use std::sync::Arc;

use crate::config::CatalogConfig;
use crate::related::select_related;
use crate::remote::RemoteData;
use crate::store::PlanetStore;
use crate::types::{Planet, PlanetId};

/// Detail view model for a single planet page
pub struct PlanetDetail {
    store: Arc<dyn PlanetStore>,
    config: CatalogConfig,
    current: Option<PlanetId>,
    planet: RemoteData<Planet>,
    catalog: RemoteData<Vec<Planet>>,
}

/// What the detail page shows, one arm per state
#[derive(Debug, Clone, PartialEq)]
pub enum DetailView {
    /// No planet has been navigated to yet
    Idle,
    /// The planet fetch is in flight
    Loading,
    /// The planet fetch failed; the message is shown verbatim
    Error(String),
    /// The planet resolved; the related section carries its own state
    Ready(PlanetPanel),
}

/// The resolved planet plus its related section
#[derive(Debug, Clone, PartialEq)]
pub struct PlanetPanel {
    /// The planet under view
    pub planet: Planet,
    /// Planets with similar diameter
    pub related: RelatedView,
}

/// State of the related-planets section, independent of the planet panel
#[derive(Debug, Clone, PartialEq)]
pub enum RelatedView {
    /// The catalog fetch is in flight
    Loading,
    /// The catalog fetch (or selection) failed
    Error(String),
    /// Related planets, closest diameter first
    Ready(Vec<RelatedEntry>),
}

/// One related planet, with the identifier the caller links to
#[derive(Debug, Clone, PartialEq)]
pub struct RelatedEntry {
    /// Navigation key for the linked detail page
    pub id: PlanetId,
    /// Display name
    pub name: String,
    /// Diameter, shown next to the name
    pub diameter: f64,
}

impl PlanetDetail {
    /// Create a view model over an injected store
    pub fn new(store: Arc<dyn PlanetStore>, config: CatalogConfig) -> Self {
        Self {
            store,
            config,
            current: None,
            planet: RemoteData::Pending,
            catalog: RemoteData::Pending,
        }
    }

    /// The identifier currently under view
    pub fn current_id(&self) -> Option<&PlanetId> {
        self.current.as_ref()
    }

    /// Observed state of the planet fetch
    pub fn planet(&self) -> &RemoteData<Planet> {
        &self.planet
    }

    /// Observed state of the catalog fetch
    pub fn catalog(&self) -> &RemoteData<Vec<Planet>> {
        &self.catalog
    }

    /// Reconcile against a route identifier.
    ///
    /// A repeated identifier is a no-op; a changed one marks both fetches
    /// pending and issues them anew.
    pub async fn navigate_to(&mut self, id: PlanetId) {
        if self.current.as_ref() == Some(&id) {
            tracing::debug!(planet = %id, "route unchanged, keeping fetched state");
            return;
        }
        self.current = Some(id);
        self.fetch().await;
    }

    /// Refetch the current planet and catalog unconditionally
    pub async fn refresh(&mut self) {
        if self.current.is_some() {
            self.fetch().await;
        }
    }

    async fn fetch(&mut self) {
        // current is Some for every caller
        let Some(id) = self.current.clone() else {
            return;
        };

        self.planet = RemoteData::Pending;
        self.catalog = RemoteData::Pending;

        tracing::debug!(planet = %id, store = self.store.name(), "fetching detail page data");

        let (planet, catalog) = tokio::join!(self.store.fetch_by_id(&id), self.store.fetch_all());

        if let Err(err) = &planet {
            tracing::warn!(planet = %id, error = %err, "planet fetch failed");
        }
        if let Err(err) = &catalog {
            tracing::warn!(error = %err, "catalog fetch failed");
        }

        self.planet = planet.into();
        self.catalog = catalog.into();
    }

    /// Project the observed state into a renderable view tree
    pub fn view(&self) -> DetailView {
        if self.current.is_none() {
            return DetailView::Idle;
        }
        match &self.planet {
            RemoteData::Pending => DetailView::Loading,
            RemoteData::Failed(err) => DetailView::Error(err.to_string()),
            RemoteData::Ready(planet) => DetailView::Ready(PlanetPanel {
                planet: planet.clone(),
                related: self.related_view(planet),
            }),
        }
    }

    fn related_view(&self, planet: &Planet) -> RelatedView {
        match &self.catalog {
            RemoteData::Pending => RelatedView::Loading,
            RemoteData::Failed(err) => RelatedView::Error(err.to_string()),
            RemoteData::Ready(catalog) => {
                match select_related(planet, catalog, self.config.related.limit) {
                    Ok(related) => RelatedView::Ready(
                        related
                            .into_iter()
                            .map(|p| RelatedEntry {
                                id: p.id,
                                name: p.name,
                                diameter: p.diameter,
                            })
                            .collect(),
                    ),
                    Err(err) => RelatedView::Error(err.to_string()),
                }
            }
        }
    }
}
