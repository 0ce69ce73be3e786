pub mod api;
mod client;

pub use api::{Binding, RdfTerm, SparqlResults, TermType};
pub use client::{SparqlClient, SparqlClientOptions, SparqlEndpoint, WIKIDATA_SPARQL_ENDPOINT};
