//! Sync engine: the state machine driving periodic and manual merges.
//!
//! A sync may only start from `Idle`; concurrent triggers are coalesced into
//! the run already in flight rather than starting a second merge. A manual
//! conflict resolution serializes behind any in-flight sync so the decision
//! is never overwritten mid-flight. Remote failures leave the previously
//! persisted collection authoritative.

use std::sync::{Arc, Mutex as StdMutex, MutexGuard};

use tokio::sync::Mutex as AsyncMutex;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{error, info, warn};

use crate::core::config::SyncConfig;
use crate::core::models::Quote;
use crate::errors::QuoteError;
use crate::remote::RemoteCollection;
use crate::repo::QuoteRepository;
use crate::sync::merge::merge_collections;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    Idle,
    Fetching,
    Merging,
    ConflictPending,
}

/// Result of a sync trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Fetch-merge-replace ran to completion; `total` is the merged size.
    Completed { total: usize },
    /// A sync was already in flight and absorbed this trigger.
    Coalesced,
}

/// Result of a manual conflict-resolution decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Local state left untouched.
    KeptLocal,
    /// Local-only additions discarded by re-running the merge.
    AcceptedRemote { total: usize },
}

pub struct SyncEngine {
    repo: StdMutex<QuoteRepository>,
    remote: Arc<dyn RemoteCollection>,
    config: SyncConfig,
    // Held for the whole fetch-merge-replace window; try_lock is the
    // coalescing rule, lock() the serialization rule for resolutions.
    guard: AsyncMutex<()>,
    state: StdMutex<SyncState>,
}

impl SyncEngine {
    pub fn new(
        repo: QuoteRepository,
        remote: Arc<dyn RemoteCollection>,
        config: SyncConfig,
    ) -> Self {
        Self {
            repo: StdMutex::new(repo),
            remote,
            config,
            guard: AsyncMutex::new(()),
            state: StdMutex::new(SyncState::Idle),
        }
    }

    fn repo(&self) -> Result<MutexGuard<'_, QuoteRepository>, QuoteError> {
        self.repo
            .lock()
            .map_err(|e| QuoteError::Storage(format!("repository lock poisoned: {e}")))
    }

    fn set_state(&self, next: SyncState) {
        if let Ok(mut state) = self.state.lock() {
            *state = next;
        }
    }

    /// Current state of the engine, for observers.
    pub fn state(&self) -> SyncState {
        self.state.lock().map(|s| *s).unwrap_or(SyncState::Idle)
    }

    /// Trigger a sync. If one is already in flight the trigger is absorbed
    /// and the remote side is not contacted a second time.
    pub async fn sync_now(&self) -> Result<SyncOutcome, QuoteError> {
        let Ok(_guard) = self.guard.try_lock() else {
            info!("Sync already in flight, coalescing trigger");
            return Ok(SyncOutcome::Coalesced);
        };

        let total = self.fetch_merge_replace().await?;
        info!("Sync complete, {} quotes in the merged collection", total);
        Ok(SyncOutcome::Completed { total })
    }

    /// Apply a manual conflict-resolution decision. Waits for any in-flight
    /// sync to finish first so the two never interleave.
    pub async fn resolve_conflicts(&self, keep_local: bool) -> Result<Resolution, QuoteError> {
        let _guard = self.guard.lock().await;
        self.set_state(SyncState::ConflictPending);

        if keep_local {
            self.set_state(SyncState::Idle);
            info!("Conflict resolved: local collection preserved");
            return Ok(Resolution::KeptLocal);
        }

        let total = self.fetch_merge_replace().await?;
        info!("Conflict resolved: remote accepted, {} quotes after merge", total);
        Ok(Resolution::AcceptedRemote { total })
    }

    // Caller must hold `guard`. Always returns the engine to Idle.
    async fn fetch_merge_replace(&self) -> Result<usize, QuoteError> {
        self.set_state(SyncState::Fetching);
        let local = match self.repo() {
            Ok(repo) => repo.snapshot(),
            Err(e) => {
                self.set_state(SyncState::Idle);
                return Err(e);
            }
        };

        let remote = match self.remote.fetch().await {
            Ok(remote) => remote,
            Err(e) => {
                self.set_state(SyncState::Idle);
                return Err(e);
            }
        };

        self.set_state(SyncState::Merging);
        let merged = merge_collections(local, remote);
        let total = merged.len();
        let replaced = self.repo().and_then(|mut repo| repo.replace_all(merged));
        self.set_state(SyncState::Idle);
        replaced?;
        Ok(total)
    }

    /// Add a quote locally, then push it to the remote side best-effort.
    /// A failed push is reported but never rolls back the local add.
    pub async fn add_quote(&self, text: &str, category: &str) -> Result<Quote, QuoteError> {
        let quote = self.repo()?.add(text, category)?;

        if let Err(e) = self.remote.push(&quote).await {
            warn!("Best-effort push of new quote failed: {e}");
        }

        Ok(quote)
    }

    /// Start the recurring background sync. Each tick funnels through
    /// [`SyncEngine::sync_now`], so the timer shares the coalescing guard
    /// with manual triggers. Failures are logged and the loop continues.
    pub fn spawn_periodic(self: Arc<Self>) -> JoinHandle<()> {
        let engine = self;
        tokio::spawn(async move {
            let mut ticker = interval(engine.config.sync_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately; skip it so the initial
            // sync happens one full period after startup.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                match engine.sync_now().await {
                    Ok(SyncOutcome::Completed { total }) => {
                        info!("Periodic sync merged {} quotes", total);
                    }
                    Ok(SyncOutcome::Coalesced) => {
                        info!("Periodic sync coalesced into an in-flight run");
                    }
                    Err(e) => error!("Periodic sync failed: {e}"),
                }
            }
        })
    }

    // ------------------------------------------------------------------
    // Command surface for the presentation layer.
    // ------------------------------------------------------------------

    pub fn export_json(&self) -> Result<String, QuoteError> {
        self.repo()?.export_json()
    }

    pub fn import_json(&self, payload: &str) -> Result<usize, QuoteError> {
        self.repo()?.import_json(payload)
    }

    pub fn categories(&self) -> Result<Vec<String>, QuoteError> {
        Ok(self.repo()?.categories())
    }

    pub fn set_filter(&self, filter: &str) -> Result<(), QuoteError> {
        self.repo()?.set_filter(filter)
    }

    pub fn filter(&self) -> Result<String, QuoteError> {
        Ok(self.repo()?.filter())
    }

    pub fn visible_quotes(&self) -> Result<Vec<Quote>, QuoteError> {
        Ok(self.repo()?.visible_quotes())
    }

    pub fn random_visible(&self) -> Result<Option<Quote>, QuoteError> {
        Ok(self.repo()?.random_visible())
    }

    pub fn quotes(&self) -> Result<Vec<Quote>, QuoteError> {
        Ok(self.repo()?.snapshot())
    }
}
