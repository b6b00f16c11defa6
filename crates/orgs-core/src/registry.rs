//! Process-wide organization registry
//!
//! This module provides the registry that owns every live [`Organization`]
//! and upholds the global name-uniqueness invariant. It is an owned
//! repository with an explicit lifecycle: hosts construct one at startup,
//! pass it to whatever dispatches commands and events, and tear it down at
//! shutdown. There is no static state.
//!
//! Name-uniqueness checking and insertion happen under a single `&mut self`
//! call, so two concurrent creations with the same name cannot both pass
//! validation as long as the host serializes mutation (one lock around the
//! registry is enough).

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::{OrgError, OrgResult};
use crate::organization::Organization;
use crate::snapshot::OrganizationSnapshot;

/// Registry owning all live organizations.
///
/// Organizations are keyed two ways: by a process-lifetime ephemeral index
/// (the primary map, mirroring what [`all`](OrganizationRegistry::all)
/// exposes) and by permanent id. The creation counter is monotonic and is
/// not decremented on removal.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use uuid::Uuid;
/// use orgs_core::OrganizationRegistry;
///
/// let mut registry = OrganizationRegistry::new();
/// let id = registry.create("Iron Banner", Utc::now(), Uuid::now_v7()).unwrap();
///
/// assert_eq!(registry.get(id).unwrap().name(), "Iron Banner");
/// assert_eq!(registry.count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct OrganizationRegistry {
    /// Live organizations keyed by ephemeral index
    organizations: HashMap<u32, Organization>,

    /// Permanent id → ephemeral index
    index_by_id: HashMap<Uuid, u32>,

    /// Organizations ever created this process; also the next index
    created: u32,
}

impl OrganizationRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Found a new organization.
    ///
    /// Validates name length and case-sensitive uniqueness, seeds the
    /// default ranks ("Member" at slot 0, "Leader" at slot 9), enrolls the
    /// founder at the leader slot as an explicit member, assigns the next
    /// ephemeral index, and indexes the instance both ways.
    ///
    /// Returns the new organization's permanent id.
    pub fn create(
        &mut self,
        name: impl Into<String>,
        founding_date: DateTime<Utc>,
        founder: Uuid,
    ) -> OrgResult<Uuid> {
        let name = name.into();
        Organization::validate_name(&name)?;
        self.ensure_name_unused(&name)?;

        let index = self.next_index();
        let org = Organization::found(name, founding_date, founder, index);
        let id = org.id();
        tracing::debug!(organization = %id, index, name = org.name(), "organization founded");

        self.index_by_id.insert(id, index);
        self.organizations.insert(index, org);
        Ok(id)
    }

    /// Reconstruct an organization from a persisted snapshot.
    ///
    /// The snapshot constructor form: every field is restored verbatim, no
    /// founder is auto-enrolled, and the name length is not re-validated.
    /// Uniqueness is still enforced; a colliding snapshot registers
    /// nothing.
    pub fn restore(&mut self, snapshot: OrganizationSnapshot) -> OrgResult<Uuid> {
        self.ensure_name_unused(&snapshot.name)?;

        let index = self.next_index();
        let org = Organization::from_snapshot(snapshot, index);
        let id = org.id();
        tracing::debug!(organization = %id, index, name = org.name(), "organization restored");

        self.index_by_id.insert(id, index);
        self.organizations.insert(index, org);
        Ok(id)
    }

    /// Rename an organization.
    ///
    /// Same length and uniqueness validation as creation. On any failure
    /// the original name is untouched. Renaming lives here rather than on
    /// the entity because only the registry can see every live name.
    pub fn rename(&mut self, id: Uuid, new_name: impl Into<String>) -> OrgResult<()> {
        let new_name = new_name.into();
        Organization::validate_name(&new_name)?;
        self.ensure_name_unused(&new_name)?;

        let org = self
            .organization_mut(id)
            .ok_or(OrgError::UnknownOrganization(id))?;
        tracing::debug!(organization = %id, from = org.name(), to = %new_name, "organization renamed");
        org.set_name(new_name);
        Ok(())
    }

    /// Look up an organization by permanent id.
    pub fn get(&self, id: Uuid) -> Option<&Organization> {
        let index = self.index_by_id.get(&id)?;
        self.organizations.get(index)
    }

    /// Look up an organization mutably by permanent id.
    pub fn get_mut(&mut self, id: Uuid) -> Option<&mut Organization> {
        self.organization_mut(id)
    }

    /// Number of organizations ever created this process.
    ///
    /// Monotonic: removal does not decrease it.
    pub fn count(&self) -> u32 {
        self.created
    }

    /// Number of live organizations.
    pub fn len(&self) -> usize {
        self.organizations.len()
    }

    /// Whether the registry holds no live organizations.
    pub fn is_empty(&self) -> bool {
        self.organizations.is_empty()
    }

    /// All live organizations, keyed by ephemeral index.
    pub fn all(&self) -> &HashMap<u32, Organization> {
        &self.organizations
    }

    /// Remove an organization, purging both indices.
    ///
    /// The creation counter is untouched, so ephemeral indices are never
    /// reused within a process. Returns the removed entity, or `None` if
    /// the id is unknown.
    pub fn remove(&mut self, id: Uuid) -> Option<Organization> {
        let index = self.index_by_id.remove(&id)?;
        let org = self.organizations.remove(&index);
        tracing::debug!(organization = %id, index, "organization removed");
        org
    }

    /// Snapshot every live organization for persistence.
    pub fn snapshot_all(&self) -> Vec<OrganizationSnapshot> {
        self.organizations
            .values()
            .map(OrganizationSnapshot::from)
            .collect()
    }

    fn next_index(&mut self) -> u32 {
        let index = self.created;
        self.created += 1;
        index
    }

    fn organization_mut(&mut self, id: Uuid) -> Option<&mut Organization> {
        let index = self.index_by_id.get(&id)?;
        self.organizations.get_mut(index)
    }

    /// Case-sensitive exact-match scan over every live name.
    fn ensure_name_unused(&self, name: &str) -> OrgResult<()> {
        if self.organizations.values().any(|org| org.name() == name) {
            return Err(OrgError::NameTaken(name.to_string()));
        }
        Ok(())
    }
}
