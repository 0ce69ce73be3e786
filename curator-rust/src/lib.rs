mod artwork;
pub mod catalog;
mod config;
mod curator;
mod errors;
pub mod generator;
mod overview;
pub mod print;
mod view;

pub use artwork::{fallback_catalog, Artwork, UNKNOWN_YEAR};
pub use config::{CuratorConfig, DEFAULT_GEMINI_MODEL, DEFAULT_LOG_FILTER, PAGE_SIZE_RANGE};
pub use curator::Curator;
pub use errors::{CuratorError, CuratorResult};
pub use overview::{project_overview, OverviewSection};
pub use view::{DetailTab, RequestTicket, Screen, ViewState};
