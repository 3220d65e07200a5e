//! Verb records and the ordered collections the search pipeline passes around.

mod source;

use std::ops::Deref;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

pub use source::{
    AssetFetcher, EmbeddedFetcher, FetchResponse, FileFetcher, HttpFetcher, VerbSource,
    parse_verbs,
};

/// One irregular verb: the three principal forms plus a translation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VerbRecord {
    /// Infinitive.
    pub v1: String,
    /// Past simple.
    pub v2: String,
    /// Past participle.
    pub v3: String,
    pub translation: String,
}

impl VerbRecord {
    pub fn new(
        v1: impl Into<String>,
        v2: impl Into<String>,
        v3: impl Into<String>,
        translation: impl Into<String>,
    ) -> Self {
        Self {
            v1: v1.into(),
            v2: v2.into(),
            v3: v3.into(),
            translation: translation.into(),
        }
    }

    /// Fields in display order.
    #[must_use]
    pub fn fields(&self) -> [&str; 4] {
        [&self.v1, &self.v2, &self.v3, &self.translation]
    }

    /// Whether any field contains the already lower-cased `needle`.
    pub(crate) fn contains_lowercase(&self, needle: &str) -> bool {
        self.fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Ordered, immutable list of verbs.
///
/// Records are shared, so cloning a collection or narrowing it to a subset
/// never copies verb text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerbCollection {
    records: Vec<Arc<VerbRecord>>,
}

impl VerbCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records for which `keep` returns true, in their original order.
    pub fn retain_matching(&self, mut keep: impl FnMut(&VerbRecord) -> bool) -> Self {
        self.records
            .iter()
            .filter(|record| keep(record))
            .cloned()
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &VerbRecord> {
        self.records.iter().map(Arc::as_ref)
    }
}

impl Deref for VerbCollection {
    type Target = [Arc<VerbRecord>];

    fn deref(&self) -> &Self::Target {
        &self.records
    }
}

impl From<Vec<VerbRecord>> for VerbCollection {
    fn from(records: Vec<VerbRecord>) -> Self {
        records.into_iter().collect()
    }
}

impl FromIterator<VerbRecord> for VerbCollection {
    fn from_iter<I: IntoIterator<Item = VerbRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().map(Arc::new).collect(),
        }
    }
}

impl FromIterator<Arc<VerbRecord>> for VerbCollection {
    fn from_iter<I: IntoIterator<Item = Arc<VerbRecord>>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
