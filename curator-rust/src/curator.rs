use crate::{
    catalog::CatalogService, config::CuratorConfig, generator::ContentGenerator,
    print::PrintStudio, CuratorResult,
};
use arte_connectors::{
    google::{GoogleModel, GoogleModelOptions},
    sparql::{SparqlClient, SparqlClientOptions, SparqlEndpoint},
    ConnectorError, LanguageModel,
};
use std::sync::Arc;

/// The process-wide services, built once at startup and shared by every
/// user session.
#[derive(Clone)]
pub struct Curator {
    pub catalog: CatalogService,
    pub generator: ContentGenerator,
    pub studio: PrintStudio,
}

impl Curator {
    pub fn new(model: Arc<dyn LanguageModel>, endpoint: Arc<dyn SparqlEndpoint>) -> Self {
        Self {
            catalog: CatalogService::new(endpoint),
            generator: ContentGenerator::new(model),
            studio: PrintStudio::default(),
        }
    }

    /// Build the Gemini and Wikidata clients described by `config`. Both
    /// share one HTTP connection pool.
    pub fn from_config(config: &CuratorConfig) -> CuratorResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ConnectorError::from)?;

        let model = GoogleModel::new(
            config.gemini_model.clone(),
            GoogleModelOptions {
                api_key: config.gemini_api_key.clone(),
                base_url: config.gemini_base_url.clone(),
                headers: None,
                client: Some(client.clone()),
            },
        );
        let endpoint = SparqlClient::new(SparqlClientOptions {
            endpoint: Some(config.wikidata_endpoint.clone()),
            user_agent: config.user_agent.clone(),
            headers: None,
            client: Some(client),
        });

        tracing::info!(
            model = %config.gemini_model,
            endpoint = %config.wikidata_endpoint,
            page_size = config.page_size,
            "curator services configured"
        );

        let mut curator = Self::new(Arc::new(model), Arc::new(endpoint));
        curator.catalog = curator
            .catalog
            .with_page_size(config.page_size)
            .with_languages(config.label_languages.clone());
        Ok(curator)
    }
}
