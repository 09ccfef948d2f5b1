use serde::{Deserialize, Serialize};

/// Storage key for the serialized quote collection.
pub const QUOTES_KEY: &str = "quotes";

/// Storage key for the last-selected category filter.
pub const FILTER_KEY: &str = "lastSelectedFilter";

/// Filter sentinel meaning "no category restriction".
pub const FILTER_ALL: &str = "all";

/// Suggested file name for exported collections.
pub const EXPORT_FILE_NAME: &str = "quotes.json";

/// A single quote: the unit of persisted data.
///
/// Identity for deduplication is `text` alone; two quotes with equal text but
/// different categories collapse to one at merge time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub category: String,
}

impl Quote {
    pub fn new(text: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: category.into(),
        }
    }
}

/// One item of the foreign remote list. The remote side has no category
/// dimension, only a title; unknown fields are ignored on deserialize.
#[derive(Debug, Deserialize)]
pub struct RemoteRecord {
    pub title: String,
}
