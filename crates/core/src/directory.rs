use crate::fuzzy::FuzzyMatcher;
use crate::traits::EntrySource;
use crate::{SearchError, SearchHit, SearchQuery, SearchResult};
use tracing::debug;

/// Ranked search over whatever an [`EntrySource`] provides.
pub struct DirectorySearch<S>
where
    S: EntrySource,
{
    source: S,
    matcher: FuzzyMatcher,
}

impl<S> DirectorySearch<S>
where
    S: EntrySource + Send + Sync,
{
    pub fn new(source: S) -> Self {
        Self::with_matcher(source, FuzzyMatcher::default())
    }

    pub fn with_matcher(source: S, matcher: FuzzyMatcher) -> Self {
        Self { source, matcher }
    }

    pub fn matcher(&self) -> &FuzzyMatcher {
        &self.matcher
    }

    /// Each entry is scored by its best-matching name or alias. A blank query
    /// returns the first `limit` entries in source order with score `0`.
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchResult, SearchError> {
        if query.limit == 0 {
            return Err(SearchError::InvalidLimit(query.limit));
        }

        if query.is_blank() {
            debug!(limit = query.limit, "blank query, returning head of directory");
        }

        let mut entries = self.source.entries(query.kind).await?;
        if let Some(kind) = query.kind {
            entries.retain(|entry| entry.kind == kind);
        }

        let ranked = self.matcher.ranked_search_scored(
            &entries,
            &query.text,
            |entry| entry.best_text(&self.matcher, &query.text),
            query.limit,
        );

        let hits: Vec<SearchHit> = ranked
            .into_iter()
            .map(|ranked| SearchHit {
                matched_text: ranked.item.best_text(&self.matcher, &query.text).to_string(),
                entry: ranked.item.clone(),
                score: ranked.score,
            })
            .collect();

        debug!(
            query = %query.text,
            kind = ?query.kind,
            considered = entries.len(),
            hits = hits.len(),
            "directory search"
        );

        Ok(SearchResult {
            query: query.text.clone(),
            considered: entries.len(),
            hits,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::EntrySource;
    use crate::{CatalogEntry, EntryKind, InMemorySource};
    use async_trait::async_trait;

    fn directory() -> InMemorySource {
        let mut eth = CatalogEntry::new(
            EntryKind::University,
            "Eidgenössische Technische Hochschule Zürich",
        );
        eth.aliases.push("ETH Zurich".to_string());

        [
            CatalogEntry::new(EntryKind::University, "Harvard University"),
            CatalogEntry::new(EntryKind::University, "Stanford"),
            CatalogEntry::new(EntryKind::University, "Howard College"),
            eth,
            CatalogEntry::new(EntryKind::Major, "Harmony and Composition"),
        ]
        .into_iter()
        .collect()
    }

    /// Ignores the kind argument, like a backend without server-side filtering.
    struct UnfilteredSource(InMemorySource);

    #[async_trait]
    impl EntrySource for UnfilteredSource {
        async fn entries(&self, _kind: Option<EntryKind>) -> Result<Vec<CatalogEntry>, SearchError> {
            self.0.entries(None).await
        }
    }

    struct FailingSource;

    #[async_trait]
    impl EntrySource for FailingSource {
        async fn entries(&self, _kind: Option<EntryKind>) -> Result<Vec<CatalogEntry>, SearchError> {
            Err(SearchError::Source("backend offline".to_string()))
        }
    }

    #[tokio::test]
    async fn ranks_universities_and_drops_non_matches() {
        let search = DirectorySearch::new(directory());
        let query = SearchQuery {
            text: "har".to_string(),
            limit: 2,
            kind: Some(EntryKind::University),
            explain: false,
        };

        let result = search.search(&query).await.expect("search should succeed");
        let names: Vec<_> = result.hits.iter().map(|hit| hit.entry.name.as_str()).collect();
        assert_eq!(names, vec!["Harvard University", "Howard College"]);
        assert_eq!(result.considered, 4);
        assert!(result.hits.iter().all(|hit| hit.score > 0.0));
    }

    #[tokio::test]
    async fn alias_match_is_reported() {
        let search = DirectorySearch::new(directory());
        let result = search
            .search(&SearchQuery::new("zurich"))
            .await
            .expect("search should succeed");

        assert_eq!(result.hits.len(), 1);
        assert_eq!(result.hits[0].matched_text, "ETH Zurich");
        assert_eq!(result.hits[0].score, 1.0);
    }

    #[tokio::test]
    async fn blank_query_returns_head_of_directory() {
        let search = DirectorySearch::new(directory());
        let query = SearchQuery {
            limit: 3,
            ..SearchQuery::new("  ")
        };

        let result = search.search(&query).await.expect("search should succeed");
        let names: Vec<_> = result.hits.iter().map(|hit| hit.entry.name.as_str()).collect();
        assert_eq!(names, vec!["Harvard University", "Stanford", "Howard College"]);
        assert!(result.hits.iter().all(|hit| hit.score == 0.0));
    }

    #[tokio::test]
    async fn kind_filter_applies_to_unfiltered_sources() {
        let search = DirectorySearch::new(UnfilteredSource(directory()));
        let query = SearchQuery {
            kind: Some(EntryKind::Major),
            ..SearchQuery::new("har")
        };

        let result = search.search(&query).await.expect("search should succeed");
        assert_eq!(result.considered, 1);
        assert_eq!(result.hits[0].entry.name, "Harmony and Composition");
    }

    #[tokio::test]
    async fn zero_limit_is_rejected() {
        let search = DirectorySearch::new(directory());
        let query = SearchQuery {
            limit: 0,
            ..SearchQuery::new("har")
        };

        let result = search.search(&query).await;
        assert!(matches!(result, Err(SearchError::InvalidLimit(0))));
    }

    #[tokio::test]
    async fn source_failures_propagate() {
        let search = DirectorySearch::new(FailingSource);
        let result = search.search(&SearchQuery::new("har")).await;
        assert!(matches!(result, Err(SearchError::Source(_))));
    }
}
