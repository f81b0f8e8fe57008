use crate::traits::EntrySource;
use crate::{CatalogEntry, EntryKind, SearchError};
use async_trait::async_trait;

#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    entries: Vec<CatalogEntry>,
}

impl InMemorySource {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<CatalogEntry> for InMemorySource {
    fn from_iter<I: IntoIterator<Item = CatalogEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[async_trait]
impl EntrySource for InMemorySource {
    async fn entries(&self, kind: Option<EntryKind>) -> Result<Vec<CatalogEntry>, SearchError> {
        Ok(self
            .entries
            .iter()
            .filter(|entry| kind.map_or(true, |wanted| entry.kind == wanted))
            .cloned()
            .collect())
    }
}
