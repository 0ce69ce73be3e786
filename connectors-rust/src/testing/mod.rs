//! Test doubles for the provider traits, usable from downstream crates.

mod model;
mod sparql;

pub use model::{MockGenerateResult, MockLanguageModel};
pub use sparql::MockSparqlEndpoint;
