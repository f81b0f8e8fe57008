//! Fuzzy text matching and ranked search.
//!
//! Scoring is ordinal: both sides are folded with [`str::to_lowercase`]
//! (Unicode code-point lowercase mapping, never locale-aware collation)
//! before comparison. A query found as a contiguous substring always scores
//! exactly `1.0`; otherwise a single greedy left-to-right scan counts how many
//! query characters appear in order in the text, and the coverage ratio is
//! accepted only when it reaches the matcher threshold.
//!
//! Ranking uses a stable sort, so items with equal scores keep their input
//! order.

pub const DEFAULT_LIMIT: usize = 5;
pub const DEFAULT_PREFIX_BONUS: f64 = 0.3;
pub const DEFAULT_THRESHOLD: f64 = 0.6;

/// An item paired with the score it was ranked by.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ranked<T> {
    pub item: T,
    pub score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyMatcher {
    /// Added to the greedy coverage when the text starts with the query.
    pub prefix_bonus: f64,
    /// Minimum greedy coverage, inclusive, for a non-prefix match to count.
    pub threshold: f64,
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self {
            prefix_bonus: DEFAULT_PREFIX_BONUS,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl FuzzyMatcher {
    /// Similarity of `text` to `query` in `[0, 1]`. Empty input on either
    /// side scores `0`.
    pub fn score(&self, query: &str, text: &str) -> f64 {
        if query.is_empty() || text.is_empty() {
            return 0.0;
        }

        let query = fold_case(query);
        let text = fold_case(text);

        if text.contains(&query) {
            return 1.0;
        }

        let query_chars: Vec<char> = query.chars().collect();
        let matched = greedy_match_count(&query_chars, &text);
        let fuzzy_score = matched as f64 / query_chars.len() as f64;

        // Subsumed by the substring check for any prefix of the folded text.
        if text.starts_with(&query) {
            return (fuzzy_score + self.prefix_bonus).clamp(0.0, 1.0);
        }

        if fuzzy_score >= self.threshold {
            fuzzy_score.min(1.0)
        } else {
            0.0
        }
    }

    /// Rank `items` against `query` and return at most `limit` of them, best
    /// first. A blank query returns the head of `items` unchanged.
    pub fn ranked_search<'a, T, F, S>(
        &self,
        items: &'a [T],
        query: &str,
        text_of: F,
        limit: usize,
    ) -> Vec<&'a T>
    where
        F: FnMut(&'a T) -> S,
        S: AsRef<str>,
    {
        self.ranked_search_scored(items, query, text_of, limit)
            .into_iter()
            .map(|ranked| ranked.item)
            .collect()
    }

    /// Same ordering as [`FuzzyMatcher::ranked_search`], keeping the scores.
    /// Items returned through the blank-query path carry a score of `0`.
    pub fn ranked_search_scored<'a, T, F, S>(
        &self,
        items: &'a [T],
        query: &str,
        mut text_of: F,
        limit: usize,
    ) -> Vec<Ranked<&'a T>>
    where
        F: FnMut(&'a T) -> S,
        S: AsRef<str>,
    {
        if query.trim().is_empty() {
            return items
                .iter()
                .take(limit)
                .map(|item| Ranked { item, score: 0.0 })
                .collect();
        }

        let mut scored: Vec<Ranked<&'a T>> = items
            .iter()
            .map(|item| Ranked {
                item,
                score: self.score(query, text_of(item).as_ref()),
            })
            .filter(|ranked| ranked.score > 0.0)
            .collect();

        // `sort_by` is stable: equal scores keep input order.
        scored.sort_by(|left, right| right.score.total_cmp(&left.score));
        scored.truncate(limit);
        scored
    }
}

/// [`FuzzyMatcher::score`] with the default bonus and threshold.
pub fn score(query: &str, text: &str) -> f64 {
    FuzzyMatcher::default().score(query, text)
}

/// [`FuzzyMatcher::ranked_search`] with the default bonus and threshold.
pub fn ranked_search<'a, T, F, S>(
    items: &'a [T],
    query: &str,
    text_of: F,
    limit: usize,
) -> Vec<&'a T>
where
    F: FnMut(&'a T) -> S,
    S: AsRef<str>,
{
    FuzzyMatcher::default().ranked_search(items, query, text_of, limit)
}

/// [`FuzzyMatcher::ranked_search_scored`] with the default bonus and threshold.
pub fn ranked_search_scored<'a, T, F, S>(
    items: &'a [T],
    query: &str,
    text_of: F,
    limit: usize,
) -> Vec<Ranked<&'a T>>
where
    F: FnMut(&'a T) -> S,
    S: AsRef<str>,
{
    FuzzyMatcher::default().ranked_search_scored(items, query, text_of, limit)
}

pub fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

/// Single pass, no backtracking: each text character either matches the
/// query character under the cursor or is skipped.
fn greedy_match_count(query: &[char], text: &str) -> usize {
    let mut cursor = 0;
    for ch in text.chars() {
        if cursor == query.len() {
            break;
        }
        if ch == query[cursor] {
            cursor += 1;
        }
    }
    cursor
}
