use crate::{CatalogEntry, EntryKind, SearchError};
use async_trait::async_trait;

/// Where directory entries come from. Implementations should return only
/// entries of `kind` when one is given, in a stable order.
#[async_trait]
pub trait EntrySource {
    async fn entries(&self, kind: Option<EntryKind>) -> Result<Vec<CatalogEntry>, SearchError>;
}
