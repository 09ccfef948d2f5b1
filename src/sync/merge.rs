//! Deduplicating union of a local and a remote quote collection.

use std::collections::HashSet;

use crate::core::models::Quote;

/// Merge `local` and `remote` into one collection with no duplicate texts.
///
/// The concatenation is walked local-first and the first occurrence of each
/// text wins, so a local quote beats a remote one with the same text. Order
/// of first occurrence is preserved.
pub fn merge_collections(local: Vec<Quote>, remote: Vec<Quote>) -> Vec<Quote> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut merged = Vec::with_capacity(local.len() + remote.len());

    for quote in local.into_iter().chain(remote) {
        if seen.insert(quote.text.clone()) {
            merged.push(quote);
        }
    }

    merged
}
