use crate::catalog::load_catalog_folder_best_effort;
use crate::traits::EntrySource;
use crate::{CatalogEntry, EntryKind, SearchError};
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Reads a catalog folder on every call, so edits to the files are picked up
/// without restarting.
#[derive(Debug, Clone)]
pub struct JsonFolderSource {
    folder: PathBuf,
}

impl JsonFolderSource {
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self {
            folder: folder.into(),
        }
    }

    pub fn folder(&self) -> &std::path::Path {
        &self.folder
    }
}

#[async_trait]
impl EntrySource for JsonFolderSource {
    async fn entries(&self, kind: Option<EntryKind>) -> Result<Vec<CatalogEntry>, SearchError> {
        let folder = self.folder.clone();
        let report = tokio::task::spawn_blocking(move || load_catalog_folder_best_effort(&folder))
            .await
            .map_err(|error| SearchError::Source(format!("catalog load task failed: {error}")))??;

        for skipped in &report.skipped_files {
            warn!(path = %skipped.path.display(), reason = %skipped.reason, "skipped catalog file");
        }

        let entries: Vec<CatalogEntry> = report
            .entries
            .into_iter()
            .filter(|entry| kind.map_or(true, |wanted| entry.kind == wanted))
            .collect();

        debug!(folder = %self.folder.display(), entries = entries.len(), "catalog entries loaded");
        Ok(entries)
    }
}
