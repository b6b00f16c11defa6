//! # Orgs Store
//!
//! This crate provides the persistence contract between the organization
//! domain and whatever storage backend the host runs: load every snapshot
//! at startup, write the same shape back out, and keep the round-trip
//! lossless (rank-slot gaps and empty-string ranks included).
//!
//! ## Overview
//!
//! - **`OrganizationStore`**: The async storage trait, keyed by permanent
//!   organization id
//! - **`StoreError`**: Backend and serialization failure kinds
//! - **`MemoryOrganizationStore`**: In-memory backend for single-process
//!   hosts and tests
//!
//! ## Usage
//!
//! ```rust,no_run
//! use orgs_store::{MemoryOrganizationStore, OrganizationStore};
//! use orgs_core::OrganizationRegistry;
//!
//! # async fn demo(registry: &OrganizationRegistry) -> orgs_store::StoreResult<()> {
//! let store = MemoryOrganizationStore::new();
//! for snapshot in registry.snapshot_all() {
//!     store.save(snapshot).await?;
//! }
//! let loaded = store.load_all().await?;
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use orgs_core::OrganizationSnapshot;

#[cfg(feature = "memory")]
mod memory;

#[cfg(feature = "memory")]
pub use memory::MemoryOrganizationStore;

/// Store error types.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backend failure (connection, query, I/O)
    #[error("Store backend error: {0}")]
    Backend(String),

    /// Snapshot could not be encoded or decoded
    #[error("Snapshot serialization error: {0}")]
    Serialization(String),

    /// No snapshot persisted under this id
    #[error("No snapshot for organization {0}")]
    NotFound(Uuid),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence contract for organization snapshots.
///
/// Snapshots are keyed by permanent organization id; `save` is an upsert.
#[async_trait]
pub trait OrganizationStore: Send + Sync {
    /// Load every persisted snapshot.
    async fn load_all(&self) -> StoreResult<Vec<OrganizationSnapshot>>;

    /// Insert or replace a snapshot.
    async fn save(&self, snapshot: OrganizationSnapshot) -> StoreResult<()>;

    /// Delete a snapshot by organization id.
    async fn delete(&self, id: Uuid) -> StoreResult<()>;
}
