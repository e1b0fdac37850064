//! Canned survey catalogs for tests and demos.
//!
//! Each module exposes the raw JSON data set (`raw()`) and a normalized
//! catalog (`catalog()`), built with the stock [`CatalogDefaults`].

use surveyline::{CatalogDefaults, SurveyCatalog};

pub mod exit_poll;
pub mod onboarding_tour;
pub mod product_feedback;

// Re-export the entry points
pub use exit_poll::exit_poll;
pub use onboarding_tour::onboarding_tour;
pub use product_feedback::product_feedback;

/// Normalize a raw data set with the built-in defaults.
pub fn normalize(raw: serde_json::Value) -> anyhow::Result<SurveyCatalog> {
    Ok(SurveyCatalog::normalize(raw, &CatalogDefaults::default())?)
}
