//! In-memory territory provider
//!
//! Suitable for single-process hosts and testing. Hosts running against a
//! real territory plugin implement [`TerritoryProvider`] over that plugin's
//! API instead.

use std::collections::HashMap;

use uuid::Uuid;

use crate::{TerritoryProvider, TerritoryResult};

/// In-memory town and nation tables.
#[derive(Debug, Default)]
pub struct MemoryTerritoryProvider {
    /// Town → residents
    towns: HashMap<Uuid, Vec<Uuid>>,
    /// Nation → residents
    nations: HashMap<Uuid, Vec<Uuid>>,
}

impl MemoryTerritoryProvider {
    /// Create an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a town and its residents.
    pub fn insert_town(&mut self, town: Uuid, residents: Vec<Uuid>) {
        self.towns.insert(town, residents);
    }

    /// Insert or replace a nation and its residents.
    pub fn insert_nation(&mut self, nation: Uuid, residents: Vec<Uuid>) {
        self.nations.insert(nation, residents);
    }

    /// Drop a town.
    pub fn remove_town(&mut self, town: Uuid) {
        self.towns.remove(&town);
    }

    /// Drop a nation.
    pub fn remove_nation(&mut self, nation: Uuid) {
        self.nations.remove(&nation);
    }
}

impl TerritoryProvider for MemoryTerritoryProvider {
    fn town_residents(&self, town: Uuid) -> TerritoryResult<Option<Vec<Uuid>>> {
        Ok(self.towns.get(&town).cloned())
    }

    fn nation_residents(&self, nation: Uuid) -> TerritoryResult<Option<Vec<Uuid>>> {
        Ok(self.nations.get(&nation).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_town_is_none_not_error() {
        let provider = MemoryTerritoryProvider::new();
        assert!(provider.town_residents(Uuid::now_v7()).unwrap().is_none());
        assert!(provider.nation_residents(Uuid::now_v7()).unwrap().is_none());
    }

    #[test]
    fn test_insert_and_remove_town() {
        let mut provider = MemoryTerritoryProvider::new();
        let town = Uuid::now_v7();
        let residents = vec![Uuid::now_v7(), Uuid::now_v7()];
        provider.insert_town(town, residents.clone());

        assert_eq!(provider.town_residents(town).unwrap(), Some(residents));

        provider.remove_town(town);
        assert!(provider.town_residents(town).unwrap().is_none());
    }

    #[test]
    fn test_insert_replaces_residents() {
        let mut provider = MemoryTerritoryProvider::new();
        let nation = Uuid::now_v7();
        provider.insert_nation(nation, vec![Uuid::now_v7()]);
        provider.insert_nation(nation, Vec::new());

        assert_eq!(provider.nation_residents(nation).unwrap(), Some(Vec::new()));
    }
}
