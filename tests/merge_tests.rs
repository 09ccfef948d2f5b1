use quotesync::Quote;
use quotesync::sync::merge_collections;

fn quote(text: &str, category: &str) -> Quote {
    Quote::new(text, category)
}

#[test]
fn test_merge_is_idempotent() {
    // Merging a collection with itself yields the same membership, no dupes.
    let quotes = vec![quote("A", "X"), quote("B", "Y"), quote("C", "X")];

    let merged = merge_collections(quotes.clone(), quotes.clone());
    assert_eq!(merged, quotes);
}

#[test]
fn test_local_wins_ties_on_identical_text() {
    let local = vec![quote("A", "X")];
    let remote = vec![quote("A", "Y")];

    let merged = merge_collections(local, remote);
    assert_eq!(merged, vec![quote("A", "X")]);
}

#[test]
fn test_remote_only_items_are_appended() {
    let local = vec![quote("A", "X")];
    let remote = vec![quote("B", "Server"), quote("C", "Server")];

    let merged = merge_collections(local, remote);
    assert_eq!(
        merged,
        vec![quote("A", "X"), quote("B", "Server"), quote("C", "Server")]
    );
}

#[test]
fn test_first_occurrence_order_is_preserved() {
    // Duplicates inside a single side also collapse to the first occurrence.
    let local = vec![quote("B", "X"), quote("A", "X"), quote("B", "Z")];
    let remote = vec![quote("C", "Server"), quote("A", "Server")];

    let merged = merge_collections(local, remote);
    assert_eq!(
        merged,
        vec![quote("B", "X"), quote("A", "X"), quote("C", "Server")]
    );
}

#[test]
fn test_merge_with_empty_sides() {
    let quotes = vec![quote("A", "X")];

    assert_eq!(merge_collections(quotes.clone(), Vec::new()), quotes);
    assert_eq!(merge_collections(Vec::new(), quotes.clone()), quotes);
    assert!(merge_collections(Vec::new(), Vec::new()).is_empty());
}
