//! Metadata provider trait definition

use async_trait::async_trait;

use crate::models::{MetaRecord, MetaSourceInfo};

/// Unified metadata provider trait
///
/// This trait defines the interface the host application uses to search
/// book metadata across different catalog sources.
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Search the source for records matching the free-text query.
    ///
    /// Returns `None` when the provider is inactive or the search request
    /// itself fails. Otherwise returns the (possibly empty) set of records
    /// whose detail pages could be fetched and parsed; per-candidate
    /// failures are logged and dropped, never surfaced to the caller.
    /// Result order follows fetch completion and is not stable across runs.
    async fn search(
        &self,
        query: &str,
        generic_cover: &str,
        locale: &str,
    ) -> Option<Vec<MetaRecord>>;

    /// Whether the host currently has this provider enabled.
    fn is_active(&self) -> bool;

    /// Toggle the provider on or off.
    fn set_active(&self, active: bool);

    /// Fixed descriptor for this source.
    fn source(&self) -> MetaSourceInfo;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
