//! Geocoding port
//!
//! Resolves free-text place names to coordinates.

use async_trait::async_trait;
use domain::{LocationQuery, ResolvedLocation};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for location resolution
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Resolve a place name, honouring the query's country hint
    ///
    /// Returns the first match. Fails with `ApplicationError::NotFound`
    /// when nothing matches.
    async fn resolve(&self, query: &LocationQuery) -> Result<ResolvedLocation, ApplicationError>;
}
