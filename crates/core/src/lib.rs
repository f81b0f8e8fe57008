pub mod catalog;
pub mod directory;
pub mod error;
pub mod fuzzy;
pub mod models;
pub mod sources;
pub mod timefmt;
pub mod traits;

pub use catalog::{
    discover_catalog_files, load_catalog_file, load_catalog_folder,
    load_catalog_folder_best_effort, CatalogReport, SkippedFile,
};
pub use directory::DirectorySearch;
pub use error::{CatalogError, SearchError};
pub use fuzzy::{
    ranked_search, ranked_search_scored, score, FuzzyMatcher, Ranked, DEFAULT_LIMIT,
    DEFAULT_PREFIX_BONUS, DEFAULT_THRESHOLD,
};
pub use models::{CatalogEntry, EntryKind, SearchHit, SearchQuery, SearchResult};
pub use sources::{InMemorySource, JsonFolderSource};
pub use timefmt::{format_relative, format_relative_now};
pub use traits::EntrySource;
