//! Faceted search over an in-memory catalogue of property projects and units.
//!
//! A [`Dataset`] is loaded once; a [`SearchEngine`] borrows it and answers
//! [`QueryParams`] with building summaries, grid cards or table rows.

pub mod config;
pub mod dataset;
pub mod domain;
pub mod errors;
pub mod query;
pub mod saved;
pub mod spreadsheets;

pub use config::AppConfig;
pub use dataset::Dataset;
pub use errors::{AppError, AppResult};
pub use query::{QueryParams, SearchEngine, SearchResults};

#[cfg(test)]
mod tests;
