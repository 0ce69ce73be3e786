mod client_utils;
mod errors;
pub mod google;
mod language_model;
mod opentelemetry;
pub mod sparql;
pub mod testing;
mod types;

pub use errors::*;
pub use language_model::LanguageModel;
pub use types::*;
