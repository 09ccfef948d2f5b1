pub mod engine;
pub mod merge;

pub use engine::{Resolution, SyncEngine, SyncOutcome, SyncState};
pub use merge::merge_collections;
