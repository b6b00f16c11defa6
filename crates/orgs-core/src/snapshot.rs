//! Persisted organization shape
//!
//! This module provides the snapshot form of an [`Organization`]: the shape
//! the persistence layer loads at startup and writes back out. It carries
//! every entity field verbatim and must round-trip losslessly, including
//! rank-slot gaps and empty-string ranks. The ephemeral registry index is
//! deliberately absent; it is process-lifetime state, not identity.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::organization::Organization;

/// Serializable snapshot of an organization's full persisted state.
///
/// Reconstruct an entity from one via
/// [`OrganizationRegistry::restore`](crate::OrganizationRegistry::restore).
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use uuid::Uuid;
/// use orgs_core::{OrganizationRegistry, OrganizationSnapshot};
///
/// let mut registry = OrganizationRegistry::new();
/// let id = registry.create("Iron Banner", Utc::now(), Uuid::now_v7()).unwrap();
///
/// let snapshot = OrganizationSnapshot::from(registry.get(id).unwrap());
/// assert_eq!(snapshot.name, "Iron Banner");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationSnapshot {
    /// Permanent identifier
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Message of the day
    pub motd: String,

    /// Free-form description
    pub description: String,

    /// ASCII logo
    pub logo: String,

    /// Founding date
    pub founding_date: DateTime<Utc>,

    /// Rank slot → display name, gaps and empty strings preserved
    #[serde(default)]
    pub ranks: HashMap<u8, String>,

    /// Player → held rank slot
    #[serde(default)]
    pub members: HashMap<Uuid, u8>,

    /// Players who joined directly
    #[serde(default)]
    pub explicit_members: HashSet<Uuid>,

    /// Child organization ids
    #[serde(default)]
    pub sub_organizations: Vec<Uuid>,

    /// Parent organization id, if any
    pub parent_organization: Option<Uuid>,

    /// Affiliated town ids
    #[serde(default)]
    pub joined_towns: Vec<Uuid>,

    /// Affiliated nation ids
    #[serde(default)]
    pub joined_nations: Vec<Uuid>,
}

impl From<&Organization> for OrganizationSnapshot {
    fn from(org: &Organization) -> Self {
        Self {
            id: org.id(),
            name: org.name().to_string(),
            motd: org.motd().to_string(),
            description: org.description().to_string(),
            logo: org.logo().to_string(),
            founding_date: org.founding_date(),
            ranks: org.ranks().clone(),
            members: org.members().clone(),
            explicit_members: org.explicit_members().clone(),
            sub_organizations: org.sub_organizations().to_vec(),
            parent_organization: org.parent_organization(),
            joined_towns: org.joined_towns().to_vec(),
            joined_nations: org.joined_nations().to_vec(),
        }
    }
}
