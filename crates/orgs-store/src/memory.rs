//! In-memory organization store
//!
//! Suitable for single-process hosts and testing. Durable hosts implement
//! [`OrganizationStore`] over their database instead.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use orgs_core::OrganizationSnapshot;

use crate::{OrganizationStore, StoreError, StoreResult};

/// In-memory snapshot store keyed by organization id.
#[derive(Debug, Default)]
pub struct MemoryOrganizationStore {
    snapshots: RwLock<HashMap<Uuid, OrganizationSnapshot>>,
}

impl MemoryOrganizationStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of persisted snapshots.
    pub async fn len(&self) -> usize {
        self.snapshots.read().await.len()
    }

    /// Whether the store holds no snapshots.
    pub async fn is_empty(&self) -> bool {
        self.snapshots.read().await.is_empty()
    }
}

#[async_trait]
impl OrganizationStore for MemoryOrganizationStore {
    async fn load_all(&self) -> StoreResult<Vec<OrganizationSnapshot>> {
        Ok(self.snapshots.read().await.values().cloned().collect())
    }

    async fn save(&self, snapshot: OrganizationSnapshot) -> StoreResult<()> {
        self.snapshots.write().await.insert(snapshot.id, snapshot);
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> StoreResult<()> {
        match self.snapshots.write().await.remove(&id) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound(id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use orgs_core::OrganizationRegistry;

    fn snapshot(name: &str) -> OrganizationSnapshot {
        let mut registry = OrganizationRegistry::new();
        let id = registry.create(name, Utc::now(), Uuid::now_v7()).unwrap();
        OrganizationSnapshot::from(registry.get(id).unwrap())
    }

    #[tokio::test]
    async fn test_save_and_load_round_trip() {
        let store = MemoryOrganizationStore::new();
        let snap = snapshot("Iron Banner");
        let id = snap.id;

        store.save(snap).await.unwrap();
        let loaded = store.load_all().await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, id);
        assert_eq!(loaded[0].name, "Iron Banner");
    }

    #[tokio::test]
    async fn test_save_is_upsert() {
        let store = MemoryOrganizationStore::new();
        let mut snap = snapshot("Iron Banner");
        store.save(snap.clone()).await.unwrap();

        snap.motd = "Raid at dawn".to_string();
        store.save(snap.clone()).await.unwrap();

        let loaded = store.load_all().await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].motd, "Raid at dawn");
    }

    #[tokio::test]
    async fn test_delete_unknown_is_not_found() {
        let store = MemoryOrganizationStore::new();
        let snap = snapshot("Iron Banner");
        let id = snap.id;
        store.save(snap).await.unwrap();

        store.delete(id).await.unwrap();
        assert!(store.is_empty().await);
        assert!(matches!(
            store.delete(id).await,
            Err(StoreError::NotFound(missing)) if missing == id
        ));
    }

    #[tokio::test]
    async fn test_registry_state_survives_store_round_trip() {
        let store = MemoryOrganizationStore::new();

        let mut registry = OrganizationRegistry::new();
        let founder = Uuid::now_v7();
        let id = registry.create("Iron Banner", Utc::now(), founder).unwrap();
        registry.get_mut(id).unwrap().set_rank(4, "Captain").unwrap();

        for snap in registry.snapshot_all() {
            store.save(snap).await.unwrap();
        }

        let mut rebuilt = OrganizationRegistry::new();
        for snap in store.load_all().await.unwrap() {
            rebuilt.restore(snap).unwrap();
        }

        let org = rebuilt.get(id).unwrap();
        assert_eq!(org.name(), "Iron Banner");
        assert_eq!(org.member_rank(founder), Some(9));
        assert_eq!(org.rank_name(4), Some("Captain"));
    }
}
