//! # Orgs Core
//!
//! This crate provides the player organization domain for the Orgs
//! platform: named player groups with metadata, a fixed rank ladder, a
//! membership roster, parent/child hierarchy links, and affiliations to
//! external towns and nations.
//!
//! ## Overview
//!
//! The orgs-core crate handles:
//! - **Organizations**: The entity owning its fields, ranks, roster, and
//!   relationship lists, with invariant-enforcing mutation methods
//! - **Registry**: The owned repository upholding global name uniqueness
//!   and process-lifetime indexing
//! - **Snapshots**: The lossless persisted shape for the storage layer
//! - **Errors**: Explicit validation failure kinds for command handlers
//!
//! ## Architecture
//!
//! ```text
//! OrganizationRegistry
//!   ├─ Organization (by ephemeral index, by permanent id)
//!   │    ├─ Ranks (slots 0-9)
//!   │    ├─ Members (player → slot)
//!   │    ├─ Hierarchy (children, parent)
//!   │    └─ Affiliations ─→ TerritoryProvider (orgs-territory)
//!   └─ OrganizationSnapshot ─→ OrganizationStore (orgs-store)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use chrono::Utc;
//! use uuid::Uuid;
//! use orgs_core::OrganizationRegistry;
//!
//! // Construct the registry at startup and pass it around explicitly.
//! let mut registry = OrganizationRegistry::new();
//!
//! let founder = Uuid::now_v7();
//! let id = registry.create("Iron Banner", Utc::now(), founder)?;
//!
//! // Mutation goes through the entity; the registry hands it out.
//! let org = registry.get_mut(id).expect("just created");
//! org.set_motd("Raid at dawn")?;
//! org.set_rank(5, "Officer")?;
//! org.add_explicit_member(Uuid::now_v7())?;
//! # Ok::<(), orgs_core::OrgError>(())
//! ```
//!
//! ## Cross-Crate Integration
//!
//! This crate is designed to work with:
//! - `orgs-territory`: Town/nation resident resolution for affiliations
//! - `orgs-store`: Snapshot persistence contracts
//! - `orgs-providers`: Service-provider capability registration
//!
//! ## Concurrency
//!
//! The registry owns every entity, so `&mut` access is the serialization
//! point: hosts that dispatch from multiple threads wrap the registry in a
//! single lock, which makes name checking and insertion atomic together.
//! Territory lookups can be slow; prefer resolving residents before taking
//! any broader host lock.

pub mod error;
pub mod organization;
pub mod registry;
pub mod snapshot;

// Re-export main types for convenience
pub use error::{OrgError, OrgResult};
pub use organization::Organization;
pub use registry::OrganizationRegistry;
pub use snapshot::OrganizationSnapshot;
