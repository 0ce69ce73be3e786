use super::api::{SparqlResponse, SparqlResults};
use crate::{client_utils, ConnectorResult};
use reqwest::{
    header::{HeaderValue, ACCEPT, USER_AGENT},
    Client,
};
use std::collections::HashMap;

const PROVIDER: &str = "wikidata";
pub const WIKIDATA_SPARQL_ENDPOINT: &str = "https://query.wikidata.org/sparql";
const DEFAULT_USER_AGENT: &str = concat!(
    "arte-connectors/",
    env!("CARGO_PKG_VERSION"),
    " (https://arteexplicada.com)"
);

/// A read-only SPARQL endpoint that answers `SELECT` queries.
#[async_trait::async_trait]
pub trait SparqlEndpoint: Send + Sync {
    fn endpoint(&self) -> &str;
    async fn select(&self, query: &str) -> ConnectorResult<SparqlResults>;
}

pub struct SparqlClient {
    endpoint: String,
    user_agent: String,
    client: Client,
    headers: HashMap<String, String>,
}

#[derive(Clone, Default)]
pub struct SparqlClientOptions {
    /// Defaults to the public Wikidata Query Service.
    pub endpoint: Option<String>,
    /// Wikidata rejects anonymous clients; identify the application here.
    pub user_agent: Option<String>,
    pub headers: Option<HashMap<String, String>>,
    pub client: Option<Client>,
}

impl SparqlClient {
    #[must_use]
    pub fn new(options: SparqlClientOptions) -> Self {
        let SparqlClientOptions {
            endpoint,
            user_agent,
            headers,
            client,
        } = options;

        Self {
            endpoint: endpoint.unwrap_or_else(|| WIKIDATA_SPARQL_ENDPOINT.to_string()),
            user_agent: user_agent.unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            client: client.unwrap_or_else(Client::new),
            headers: headers.unwrap_or_default(),
        }
    }
}

impl Default for SparqlClient {
    fn default() -> Self {
        Self::new(SparqlClientOptions::default())
    }
}

#[async_trait::async_trait]
impl SparqlEndpoint for SparqlClient {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn select(&self, query: &str) -> ConnectorResult<SparqlResults> {
        crate::opentelemetry::trace_query(
            &self.endpoint,
            query,
            |results: &SparqlResults| results.bindings.len(),
            async {
                let mut headers = client_utils::build_headers(PROVIDER, &self.headers)?;
                headers.insert(
                    ACCEPT,
                    HeaderValue::from_static("application/sparql-results+json"),
                );
                headers.insert(
                    USER_AGENT,
                    HeaderValue::from_str(&self.user_agent).map_err(|error| {
                        crate::ConnectorError::InvalidInput(format!(
                            "Invalid user agent '{}': {error}",
                            self.user_agent
                        ))
                    })?,
                );

                let response: SparqlResponse = client_utils::get_json(
                    &self.client,
                    &self.endpoint,
                    &[("query", query), ("format", "json")],
                    headers,
                )
                .await?;

                tracing::debug!(
                    rows = response.results.bindings.len(),
                    vars = ?response.head.vars,
                    "sparql query answered"
                );

                Ok(response.results)
            },
        )
        .await
    }
}
