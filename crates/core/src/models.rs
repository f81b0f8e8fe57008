use crate::fuzzy::{FuzzyMatcher, DEFAULT_LIMIT};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    University,
    Major,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::University => "university",
            EntryKind::Major => "major",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogEntry {
    /// Derived from kind and name by the loader when absent from the file.
    #[serde(default)]
    pub id: String,
    pub kind: EntryKind,
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl CatalogEntry {
    pub fn new(kind: EntryKind, name: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            kind,
            name: name.into(),
            location: None,
            aliases: Vec::new(),
        }
    }

    /// Name followed by aliases.
    pub fn search_texts(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }

    /// Best score of `query` against the name or any alias.
    pub fn best_score(&self, matcher: &FuzzyMatcher, query: &str) -> f64 {
        self.search_texts()
            .map(|text| matcher.score(query, text))
            .fold(0.0, f64::max)
    }

    /// The name or alias that scores highest against `query`; the name wins
    /// ties.
    pub fn best_text<'a>(&'a self, matcher: &FuzzyMatcher, query: &str) -> &'a str {
        let mut best = (self.name.as_str(), matcher.score(query, &self.name));
        for alias in &self.aliases {
            let score = matcher.score(query, alias);
            if score > best.1 {
                best = (alias.as_str(), score);
            }
        }
        best.0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct SearchQuery {
    pub text: String,
    pub limit: usize,
    pub kind: Option<EntryKind>,
    pub explain: bool,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            limit: DEFAULT_LIMIT,
            kind: None,
            explain: false,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchHit {
    pub entry: CatalogEntry,
    pub score: f64,
    /// The name or alias that produced the score.
    pub matched_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    pub query: String,
    pub considered: usize,
    pub hits: Vec<SearchHit>,
}
