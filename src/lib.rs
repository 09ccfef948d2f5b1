//! quotesync - a locally persisted quote collection with remote sync.
//!
//! The crate keeps an insertion-ordered collection of text/category pairs in
//! a durable local store and periodically merges it with a remote collection,
//! deduplicating by quote text. Divergence between the two sides is resolved
//! only by an explicit user decision: keep the local state, or discard
//! local-only additions by re-running the merge.
//!
//! # Architecture
//!
//! - [`store`]: the local key-value store adapter (memory or file backed)
//! - [`repo`]: the quote repository, exclusive owner of the collection
//! - [`remote`]: the HTTP client for the remote collection
//! - [`sync`]: the sync engine state machine and the merge function
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use quotesync::core::config::SyncConfig;
//! use quotesync::remote::HttpRemoteClient;
//! use quotesync::repo::QuoteRepository;
//! use quotesync::store::FileStore;
//! use quotesync::sync::SyncEngine;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     quotesync::setup_logging();
//!
//!     let config = SyncConfig::from_env();
//!     let store = FileStore::new("./quotesync-data")?;
//!     let repo = QuoteRepository::load(Box::new(store))?;
//!     let remote = Arc::new(HttpRemoteClient::new(&config));
//!     let engine = Arc::new(SyncEngine::new(repo, remote, config));
//!
//!     let _timer = Arc::clone(&engine).spawn_periodic();
//!
//!     engine.add_quote("Simplicity is the soul of efficiency.", "Wisdom").await?;
//!     engine.sync_now().await?;
//!     println!("{}", engine.export_json()?);
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod errors;
pub mod remote;
pub mod repo;
pub mod store;
pub mod sync;

pub use crate::core::models::Quote;
pub use crate::errors::QuoteError;

/// Configure structured logging for hosts that have no subscriber of their
/// own. Call once at startup; embedding applications with an existing
/// tracing setup should skip this.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
