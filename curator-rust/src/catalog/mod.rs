mod bindings;
mod filter;
mod query;

pub use bindings::{
    artwork_from_binding, year_from_date, ARTIST_PLACEHOLDER, MOVEMENT_PLACEHOLDER,
    TITLE_PLACEHOLDER,
};
pub use filter::{FilterSelection, Period, Region};
pub use query::{
    date_filter, region_clause, CatalogQuery, DEFAULT_LABEL_LANGUAGES, DEFAULT_PAGE_SIZE,
};

use crate::{
    artwork::{fallback_catalog, Artwork},
    CuratorResult,
};
use arte_connectors::sparql::SparqlEndpoint;
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, sync::Arc};
use tracing::info_span;
use tracing_futures::Instrument;

/// Where the artworks of a [`CatalogPage`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogSource {
    Live,
    Fallback,
}

/// What the catalog screen renders. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogPage {
    pub filter: FilterSelection,
    pub artworks: Vec<Artwork>,
    pub source: CatalogSource,
}

impl CatalogPage {
    pub fn fallback(filter: FilterSelection) -> Self {
        Self {
            filter,
            artworks: fallback_catalog(),
            source: CatalogSource::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == CatalogSource::Fallback
    }
}

/// Queries the knowledge graph for one page of paintings.
#[derive(Clone)]
pub struct CatalogService {
    endpoint: Arc<dyn SparqlEndpoint>,
    page_size: usize,
    languages: String,
}

impl CatalogService {
    pub fn new(endpoint: Arc<dyn SparqlEndpoint>) -> Self {
        Self {
            endpoint,
            page_size: DEFAULT_PAGE_SIZE,
            languages: DEFAULT_LABEL_LANGUAGES.to_string(),
        }
    }

    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    #[must_use]
    pub fn with_languages(mut self, languages: impl Into<String>) -> Self {
        self.languages = languages.into();
        self
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn query_for(&self, filter: FilterSelection) -> String {
        CatalogQuery::new(filter)
            .with_limit(self.page_size)
            .with_languages(self.languages.clone())
            .build()
    }

    /// Most-popular-first artworks matching `filter`, deduplicated by id.
    /// May be empty.
    pub async fn fetch(&self, filter: FilterSelection) -> CuratorResult<Vec<Artwork>> {
        let query = self.query_for(filter);
        let results = self.endpoint.select(&query).await?;

        let mut seen = HashSet::new();
        let artworks: Vec<Artwork> = results
            .bindings
            .iter()
            .filter_map(artwork_from_binding)
            .filter(Artwork::is_displayable)
            .filter(|artwork| seen.insert(artwork.id.clone()))
            .take(self.page_size)
            .collect();

        tracing::debug!(
            rows = results.bindings.len(),
            artworks = artworks.len(),
            "catalog rows mapped"
        );
        Ok(artworks)
    }

    /// Like [`CatalogService::fetch`], but substitutes the fixed fallback
    /// catalog when the query fails or matches nothing.
    pub async fn load(&self, filter: FilterSelection) -> CatalogPage {
        let span = info_span!(
            "arte_curator.catalog.load",
            period = ?filter.period,
            region = ?filter.region
        );
        async {
            match self.fetch(filter).await {
                Ok(artworks) if !artworks.is_empty() => CatalogPage {
                    filter,
                    artworks,
                    source: CatalogSource::Live,
                },
                Ok(_) => {
                    tracing::info!("catalog query matched nothing, using fallback catalog");
                    CatalogPage::fallback(filter)
                }
                Err(error) => {
                    tracing::warn!(%error, "catalog query failed, using fallback catalog");
                    CatalogPage::fallback(filter)
                }
            }
        }
        .instrument(span)
        .await
    }
}
