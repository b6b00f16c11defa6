//! # Orgs Territory
//!
//! This crate provides the affiliation contract between the organization
//! domain and the external territory system that owns towns and nations.
//! The domain never talks to the territory plugin directly; it asks a
//! [`TerritoryProvider`] whether a town or nation exists and, if so, which
//! players reside there.
//!
//! ## Overview
//!
//! - **`TerritoryProvider`**: The resolution trait implemented by the host
//!   against its territory plugin
//! - **`TerritoryError`**: Provider-side failures (the lookup
//!   infrastructure, as opposed to "does not exist")
//! - **`MemoryTerritoryProvider`**: In-memory tables for single-process
//!   hosts and tests
//!
//! ## Usage
//!
//! ```rust
//! use uuid::Uuid;
//! use orgs_territory::{MemoryTerritoryProvider, TerritoryProvider};
//!
//! let mut territory = MemoryTerritoryProvider::new();
//! let town = Uuid::now_v7();
//! territory.insert_town(town, vec![Uuid::now_v7()]);
//!
//! assert_eq!(territory.town_residents(town).unwrap().map(|r| r.len()), Some(1));
//! assert!(territory.town_residents(Uuid::now_v7()).unwrap().is_none());
//! ```

use thiserror::Error;
use uuid::Uuid;

#[cfg(feature = "memory")]
mod memory;

#[cfg(feature = "memory")]
pub use memory::MemoryTerritoryProvider;

/// Territory provider error types.
///
/// These cover failures of the lookup itself. A town or nation that simply
/// does not exist is not an error; the provider reports it as `Ok(None)`.
#[derive(Debug, Error)]
pub enum TerritoryError {
    /// The territory plugin is not installed or not yet enabled
    #[error("Territory provider unavailable: {0}")]
    Unavailable(String),

    /// The lookup reached the provider but failed
    #[error("Territory lookup failed: {0}")]
    Lookup(String),
}

/// Result type for territory operations.
pub type TerritoryResult<T> = Result<T, TerritoryError>;

/// Resolution of town and nation identifiers to resident player lists.
///
/// Implementations may block on an external plugin or service; callers
/// should avoid holding broader locks across a lookup unless the provider
/// is known to be fast and local.
pub trait TerritoryProvider: Send + Sync {
    /// Resolve a town to its residents.
    ///
    /// Returns `Ok(None)` when the town does not exist, `Ok(Some(residents))`
    /// otherwise, and `Err` only for provider-side failures.
    fn town_residents(&self, town: Uuid) -> TerritoryResult<Option<Vec<Uuid>>>;

    /// Resolve a nation to its residents. Same contract as
    /// [`town_residents`](TerritoryProvider::town_residents).
    fn nation_residents(&self, nation: Uuid) -> TerritoryResult<Option<Vec<Uuid>>>;
}
