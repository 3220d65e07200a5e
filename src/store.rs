//! The in-memory verb list and its current filtered view.

use std::fmt;

use tracing::{debug, info};

use crate::error::LoadError;
use crate::history::SearchHistory;
use crate::verbs::{AssetFetcher, VerbCollection, parse_verbs};

/// A lower-cased, trimmed search term. The empty query means "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for SearchQuery {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<&String> for SearchQuery {
    fn from(raw: &String) -> Self {
        Self::new(raw)
    }
}

impl From<&SearchQuery> for SearchQuery {
    fn from(query: &SearchQuery) -> Self {
        query.clone()
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Holds the full verb list, the filtered subset, and the search log.
#[derive(Debug, Default)]
pub struct VerbStore {
    full: VerbCollection,
    filtered: VerbCollection,
    history: SearchHistory,
}

impl VerbStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that starts from an already loaded collection.
    #[must_use]
    pub fn with_verbs(verbs: VerbCollection) -> Self {
        Self {
            filtered: verbs.clone(),
            full: verbs,
            history: SearchHistory::new(),
        }
    }

    /// Replace the search log, typically with entries restored from
    /// preferences.
    pub fn set_history(&mut self, history: SearchHistory) {
        self.history = history;
    }

    /// Fetch and decode the verb list. On failure the store is left empty.
    pub fn load(&mut self, fetcher: &dyn AssetFetcher) -> Result<VerbCollection, LoadError> {
        self.full = VerbCollection::new();
        self.filtered = VerbCollection::new();

        let location = fetcher.location();
        let response = fetcher.fetch()?;
        if !response.is_success() {
            return Err(LoadError::Status {
                status: response.status,
            });
        }
        let verbs = parse_verbs(&response.body)?;

        info!(count = verbs.len(), source = %location, "loaded irregular verbs");
        self.full = verbs.clone();
        self.filtered = verbs.clone();
        Ok(verbs)
    }

    /// Narrow the full list to records where any field contains the query.
    /// The result also becomes the current filtered view.
    pub fn filter(&mut self, query: impl Into<SearchQuery>) -> VerbCollection {
        let query = query.into();
        let result = if query.is_empty() {
            self.full.clone()
        } else {
            let needle = query.as_str();
            self.full
                .retain_matching(|record| record.contains_lowercase(needle))
        };
        debug!(query = %query, matches = result.len(), "filtered verbs");
        self.filtered = result.clone();
        result
    }

    /// Append the search to the bounded log when the term is long enough.
    pub fn record_search(&mut self, term: impl Into<SearchQuery>, result_count: usize) -> bool {
        let term = term.into();
        self.history.record(term.as_str(), result_count)
    }

    #[must_use]
    pub fn full(&self) -> &VerbCollection {
        &self.full
    }

    #[must_use]
    pub fn filtered(&self) -> &VerbCollection {
        &self.filtered
    }

    #[must_use]
    pub fn history(&self) -> &SearchHistory {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verbs::{EmbeddedFetcher, FetchResponse, VerbRecord};

    struct StubFetcher(FetchResponse);

    impl AssetFetcher for StubFetcher {
        fn location(&self) -> String {
            "stub".into()
        }

        fn fetch(&self) -> Result<FetchResponse, LoadError> {
            Ok(self.0.clone())
        }
    }

    fn sample() -> VerbCollection {
        vec![
            VerbRecord::new("begin", "began", "begun", "начинать"),
            VerbRecord::new("go", "went", "gone", "идти"),
            VerbRecord::new("Bring", "brought", "brought", "приносить"),
            VerbRecord::new("run", "ran", "run", "бежать"),
        ]
        .into()
    }

    fn is_subsequence(sub: &VerbCollection, full: &VerbCollection) -> bool {
        let mut rest = full.iter();
        sub.iter().all(|needle| rest.any(|record| record == needle))
    }

    #[test]
    fn empty_query_returns_everything() {
        let mut store = VerbStore::with_verbs(sample());
        assert_eq!(store.filter(""), sample());
        assert_eq!(store.filter("   "), sample());
    }

    #[test]
    fn filter_is_an_ordered_subsequence() {
        let mut store = VerbStore::with_verbs(sample());
        for query in ["b", "n", "o", "r", "ть", "zzz"] {
            let result = store.filter(query);
            assert!(is_subsequence(&result, &sample()), "query {query}");
        }
        let names: Vec<_> = store.filter("b").iter().map(|r| r.v1.clone()).collect();
        assert_eq!(names, ["begin", "Bring"]);
    }

    #[test]
    fn filter_ignores_case() {
        let mut store = VerbStore::with_verbs(sample());
        let lower = store.filter("bring");
        let upper = store.filter("BRING");
        assert_eq!(lower, upper);
        assert_eq!(lower.len(), 1);
    }

    #[test]
    fn filtering_twice_is_stable() {
        let mut store = VerbStore::with_verbs(sample());
        let once = store.filter("n");
        let mut narrowed = VerbStore::with_verbs(once.clone());
        assert_eq!(narrowed.filter("n"), once);
    }

    #[test]
    fn filter_updates_current_view() {
        let mut store = VerbStore::with_verbs(sample());
        store.filter("went");
        assert_eq!(store.filtered().len(), 1);
        assert_eq!(store.full().len(), 4);
    }

    #[test]
    fn filter_matches_translation() {
        let mut store = VerbStore::with_verbs(sample());
        let result = store.filter("идти");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].v1, "go");
    }

    #[test]
    fn record_search_respects_minimum_length() {
        let mut store = VerbStore::with_verbs(sample());
        assert!(!store.record_search("go", 1));
        assert!(store.record_search("  WENT ", 1));
        assert_eq!(
            store.history().latest().map(|entry| entry.term.as_str()),
            Some("went")
        );
    }

    #[test]
    fn record_search_keeps_fifty_most_recent() {
        let mut store = VerbStore::new();
        for i in 0..60 {
            store.record_search(format!("query {i}").as_str(), i);
        }
        assert_eq!(store.history().len(), 50);
        assert_eq!(
            store.history().entries().next().map(|entry| entry.term.as_str()),
            Some("query 10")
        );
    }

    #[test]
    fn load_populates_both_views() {
        let mut store = VerbStore::new();
        let verbs = store.load(&EmbeddedFetcher).unwrap();
        assert_eq!(store.full(), &verbs);
        assert_eq!(store.filtered(), &verbs);
    }

    #[test]
    fn not_found_status_is_a_load_error() {
        let mut store = VerbStore::with_verbs(sample());
        let fetcher = StubFetcher(FetchResponse {
            status: 404,
            body: String::new(),
        });
        let err = store.load(&fetcher).unwrap_err();
        assert!(matches!(err, LoadError::Status { status: 404 }));
        assert!(err.to_string().contains("404"));
        assert!(store.full().is_empty());
        assert!(store.filtered().is_empty());
    }

    #[test]
    fn malformed_payload_leaves_store_empty() {
        let mut store = VerbStore::new();
        let fetcher = StubFetcher(FetchResponse::ok("{not json"));
        assert!(matches!(
            store.load(&fetcher),
            Err(LoadError::Malformed(_))
        ));
        assert!(store.full().is_empty());
    }
}
