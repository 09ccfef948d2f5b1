//! Quote repository: exclusive owner of the in-memory collection.
//!
//! Every mutation persists immediately through the local store adapter, so
//! outside the mutating call the in-memory collection always equals what was
//! last persisted. Other components only ever see copies or the accessor
//! surface, never a live handle to the collection itself.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{info, warn};

use crate::core::models::{FILTER_ALL, FILTER_KEY, QUOTES_KEY, Quote};
use crate::errors::QuoteError;
use crate::store::KeyValueStore;

pub struct QuoteRepository {
    store: Box<dyn KeyValueStore>,
    quotes: Vec<Quote>,
}

impl QuoteRepository {
    /// Load the persisted collection from `store`. An absent entry yields an
    /// empty collection. An unparseable payload is self-healed: we log and
    /// start empty rather than fail, so add/export stay usable.
    pub fn load(store: Box<dyn KeyValueStore>) -> Result<Self, QuoteError> {
        let quotes = match store.load(QUOTES_KEY)? {
            None => Vec::new(),
            Some(raw) => match serde_json::from_str::<Vec<Quote>>(&raw) {
                Ok(quotes) => quotes,
                Err(e) => {
                    warn!(
                        "Persisted quote collection is corrupt, starting empty: {}",
                        QuoteError::CorruptState(e.to_string())
                    );
                    Vec::new()
                }
            },
        };
        info!("Loaded {} quotes from local storage", quotes.len());
        Ok(Self { store, quotes })
    }

    fn persist(&self) -> Result<(), QuoteError> {
        let raw = serde_json::to_string(&self.quotes)
            .map_err(|e| QuoteError::Storage(e.to_string()))?;
        self.store.save(QUOTES_KEY, &raw)
    }

    /// Append a new quote and persist. Both fields must be non-empty after
    /// trimming.
    pub fn add(&mut self, text: &str, category: &str) -> Result<Quote, QuoteError> {
        let text = text.trim();
        let category = category.trim();
        if text.is_empty() || category.is_empty() {
            return Err(QuoteError::Validation(
                "both text and category are required".to_string(),
            ));
        }

        let quote = Quote::new(text, category);
        self.quotes.push(quote.clone());
        self.persist()?;
        Ok(quote)
    }

    /// Append a batch of quotes and persist once. Rejects the whole batch if
    /// any record has an empty field; no partial import.
    pub fn bulk_import(&mut self, items: Vec<Quote>) -> Result<usize, QuoteError> {
        if items
            .iter()
            .any(|q| q.text.trim().is_empty() || q.category.trim().is_empty())
        {
            return Err(QuoteError::Validation(
                "imported records must have non-empty text and category".to_string(),
            ));
        }

        let count = items.len();
        self.quotes.extend(items);
        self.persist()?;
        Ok(count)
    }

    /// Import a JSON payload. Anything that does not parse as an array of
    /// quote-shaped records is rejected outright and the collection is left
    /// untouched.
    pub fn import_json(&mut self, payload: &str) -> Result<usize, QuoteError> {
        let items: Vec<Quote> = serde_json::from_str(payload)
            .map_err(|e| QuoteError::ImportFormat(e.to_string()))?;
        self.bulk_import(items)
    }

    /// Pretty-printed JSON array of the collection, suitable for download as
    /// [`crate::core::models::EXPORT_FILE_NAME`].
    pub fn export_json(&self) -> Result<String, QuoteError> {
        serde_json::to_string_pretty(&self.quotes).map_err(|e| QuoteError::Storage(e.to_string()))
    }

    /// Distinct categories in first-seen order, for category-scoped views.
    pub fn categories(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for quote in &self.quotes {
            if !seen.contains(&quote.category) {
                seen.push(quote.category.clone());
            }
        }
        seen
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    /// Copy-out for the sync engine; merge logic never holds a live reference.
    pub fn snapshot(&self) -> Vec<Quote> {
        self.quotes.clone()
    }

    /// Atomically swap in a merged collection and persist. Sync engine only.
    pub fn replace_all(&mut self, quotes: Vec<Quote>) -> Result<(), QuoteError> {
        self.quotes = quotes;
        self.persist()
    }

    /// Persist the selected category filter.
    pub fn set_filter(&mut self, filter: &str) -> Result<(), QuoteError> {
        self.store.save(FILTER_KEY, filter)
    }

    /// The last-selected filter, or the `"all"` sentinel if never set.
    pub fn filter(&self) -> String {
        match self.store.load(FILTER_KEY) {
            Ok(Some(filter)) if !filter.is_empty() => filter,
            _ => FILTER_ALL.to_string(),
        }
    }

    /// The visible subsequence under the current filter. A filter naming a
    /// vanished category yields an empty view, not an error.
    pub fn visible_quotes(&self) -> Vec<Quote> {
        let filter = self.filter();
        if filter == FILTER_ALL {
            return self.quotes.clone();
        }
        self.quotes
            .iter()
            .filter(|q| q.category == filter)
            .cloned()
            .collect()
    }

    /// A random quote from the current projection, or `None` when empty.
    pub fn random_visible(&self) -> Option<Quote> {
        let visible = self.visible_quotes();
        if visible.is_empty() {
            return None;
        }
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos())
            .unwrap_or(0);
        let mut hasher = DefaultHasher::new();
        nanos.hash(&mut hasher);
        let index = (hasher.finish() as usize) % visible.len();
        visible.into_iter().nth(index)
    }
}
