//! Configuration for the catalog core

use serde::{Deserialize, Serialize};

use crate::related::DEFAULT_RELATED_LIMIT;

/// Catalog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Related-planet selection
    pub related: RelatedConfig,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            related: RelatedConfig::default(),
        }
    }
}

/// Related-planet selection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelatedConfig {
    /// Maximum number of related planets shown on a detail page
    pub limit: usize,
}

impl Default for RelatedConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_RELATED_LIMIT, // 3, matches the detail page layout
        }
    }
}
