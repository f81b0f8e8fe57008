use crate::{CatalogEntry, CatalogError};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

pub fn discover_catalog_files(folder: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for entry in WalkDir::new(folder)
        .into_iter()
        .filter_map(|item| item.ok())
    {
        if !entry.file_type().is_file() {
            continue;
        }

        let is_json = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            files.push(entry.path().to_path_buf());
        }
    }

    files.sort_unstable();
    files
}

/// Parse one catalog file: a JSON array of entries. Entries without an id
/// get one derived from their kind and name.
pub fn load_catalog_file(path: &Path) -> Result<Vec<CatalogEntry>, CatalogError> {
    if path.file_name().is_none() {
        return Err(CatalogError::MissingFileName(path.display().to_string()));
    }

    let bytes = fs::read(path)?;
    let mut entries: Vec<CatalogEntry> =
        serde_json::from_slice(&bytes).map_err(|source| CatalogError::Json {
            path: path.display().to_string(),
            source,
        })?;

    for entry in &mut entries {
        if entry.id.trim().is_empty() {
            entry.id = generate_entry_id(entry);
        }
    }

    debug!(path = %path.display(), entries = entries.len(), "catalog file loaded");
    Ok(entries)
}

pub fn load_catalog_folder(folder: &Path) -> Result<Vec<CatalogEntry>, CatalogError> {
    let report = load_catalog_folder_best_effort(folder)?;
    Ok(report.entries)
}

#[derive(Debug)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

#[derive(Debug)]
pub struct CatalogReport {
    pub entries: Vec<CatalogEntry>,
    pub skipped_files: Vec<SkippedFile>,
}

/// Load every catalog file under `folder`, recording unreadable ones instead
/// of failing. Entry order follows file path order, then file order.
pub fn load_catalog_folder_best_effort(folder: &Path) -> Result<CatalogReport, CatalogError> {
    let files = discover_catalog_files(folder);

    if files.is_empty() {
        return Err(CatalogError::InvalidArgument(format!(
            "no catalog files found in {}",
            folder.display()
        )));
    }

    let mut entries = Vec::new();
    let mut skipped_files = Vec::new();

    for path in files {
        match load_catalog_file(&path) {
            Ok(file_entries) => entries.extend(file_entries),
            Err(error) => skipped_files.push(SkippedFile {
                path,
                reason: error.to_string(),
            }),
        }
    }

    Ok(CatalogReport {
        entries,
        skipped_files,
    })
}

fn generate_entry_id(entry: &CatalogEntry) -> String {
    let mut hasher = Sha256::new();
    hasher.update(entry.kind.as_str().as_bytes());
    hasher.update([0u8]);
    hasher.update(entry.name.as_bytes());
    format!("{:x}", hasher.finalize())
}
