//! # Storage Layer
//!
//! Content lives in memory and is mirrored to a durable key-value backing.
//!
//! ## Two Layers
//!
//! 1. **Backing** ([`backend::StorageBackend`]): raw string blobs under string
//!    keys. Knows nothing about records. [`fs_backend::FsBackend`] keeps one
//!    `<key>.json` file per key, [`mem_backend::MemBackend`] is used in tests.
//! 2. **Stores**: typed, in-memory owners of one backing key each.
//!    - [`collection::CollectionStore`]: an ordered list of records (portfolio,
//!      services, team).
//!    - [`document::DocumentStore`]: a singleton document (site content,
//!      settings).
//!
//! ## Lifecycle
//!
//! A store hydrates exactly once, when it is created:
//!
//! - **Absent key**: the built-in seed is used. Nothing is written until the
//!   first mutation.
//! - **Corrupt value** (not JSON, wrong shape, empty or duplicate ids): a
//!   warning is logged, the key is removed, the seed is used.
//!
//! After hydration the backing is never read again. Every successful mutation
//! writes a full snapshot (no deltas) back under the store's key.
//!
//! ## Write Failures
//!
//! Writes are synchronous and isolated: a failing write is logged and recorded
//! in [`PersistStatus`], and never returned to the caller. The in-memory value
//! stays the source of truth, so the application keeps working without
//! durability until the process ends. Callers that care can inspect
//! `persist_status()` after a mutation.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── portfolioData.json
//! ├── servicesData.json
//! ├── teamData.json
//! ├── siteContent.json
//! ├── siteSettings.json
//! ├── user.json           # Current session
//! └── config.json         # CLI configuration (not a store)
//! ```

use backend::StorageBackend;

pub mod backend;
pub mod collection;
pub mod document;
pub mod fs_backend;
pub mod mem_backend;

/// Outcome of the most recent write performed by a store.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PersistStatus {
    /// Nothing has been written since hydration.
    #[default]
    Clean,
    /// The last write reached the backing.
    Synced,
    /// The last write failed; the message is the backing's error.
    Failed(String),
}

impl PersistStatus {
    pub fn is_failed(&self) -> bool {
        matches!(self, PersistStatus::Failed(_))
    }
}

/// Write `blob` under `key`, logging instead of propagating a failure.
pub(crate) fn write_snapshot<B: StorageBackend>(
    backend: &B,
    key: &str,
    blob: crate::error::Result<String>,
) -> PersistStatus {
    let result = blob.and_then(|blob| backend.set(key, &blob));
    match result {
        Ok(()) => {
            tracing::debug!(key, "snapshot persisted");
            PersistStatus::Synced
        }
        Err(e) => {
            tracing::error!(key, error = %e, "failed to persist snapshot, continuing in memory");
            PersistStatus::Failed(e.to_string())
        }
    }
}

/// Drop a corrupt value so the next start does not trip over it again.
pub(crate) fn discard_corrupt<B: StorageBackend>(backend: &B, key: &str, reason: &str) {
    tracing::warn!(key, reason, "discarding corrupt persisted data, falling back to defaults");
    if let Err(e) = backend.remove(key) {
        tracing::error!(key, error = %e, "failed to remove corrupt persisted data");
    }
}
