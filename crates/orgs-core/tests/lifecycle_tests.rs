//! Lifecycle tests for the organization registry.
//!
//! These tests exercise the flows a host runs end to end: founding and
//! mutating organizations, pulling town residents in through an
//! affiliation, and tearing entities down to snapshots and back.

use chrono::Utc;
use uuid::Uuid;

use orgs_core::{OrgError, OrganizationRegistry, OrganizationSnapshot};
use orgs_territory::MemoryTerritoryProvider;

/// Test fixture with a registry and a populated territory provider.
struct TestFixture {
    registry: OrganizationRegistry,
    territory: MemoryTerritoryProvider,
    town: Uuid,
    residents: Vec<Uuid>,
}

impl TestFixture {
    fn new() -> Self {
        let mut territory = MemoryTerritoryProvider::new();
        let town = Uuid::now_v7();
        let residents = vec![Uuid::now_v7(), Uuid::now_v7(), Uuid::now_v7()];
        territory.insert_town(town, residents.clone());

        Self {
            registry: OrganizationRegistry::new(),
            territory,
            town,
            residents,
        }
    }
}

#[test]
fn founding_then_affiliation_builds_the_roster() {
    let mut fx = TestFixture::new();
    let founder = Uuid::now_v7();
    let id = fx
        .registry
        .create("Iron Banner", Utc::now(), founder)
        .unwrap();

    let org = fx.registry.get_mut(id).unwrap();
    org.affiliate_town(fx.town, &fx.territory).unwrap();

    assert_eq!(org.member_count(), 1 + fx.residents.len());
    assert_eq!(org.member_rank(founder), Some(9));
    for resident in &fx.residents {
        assert_eq!(org.member_rank(*resident), Some(0));
        assert!(!org.is_explicit_member(*resident));
    }
}

#[test]
fn full_state_survives_snapshot_and_restore() {
    let mut fx = TestFixture::new();
    let founder = Uuid::now_v7();
    let id = fx
        .registry
        .create("Iron Banner", Utc::now(), founder)
        .unwrap();

    {
        let org = fx.registry.get_mut(id).unwrap();
        org.set_motd("Raid at dawn").unwrap();
        org.set_description("An old and storied company").unwrap();
        org.set_logo("/\\\n\\/").unwrap();
        org.set_rank(5, "Officer").unwrap();
        org.clear_rank(0).unwrap();
        org.add_sub_organization(Uuid::now_v7()).unwrap();
        org.set_parent_organization(Uuid::now_v7()).unwrap();
        org.affiliate_town(fx.town, &fx.territory).unwrap();
    }

    let snapshot = OrganizationSnapshot::from(fx.registry.get(id).unwrap());
    let original = fx.registry.remove(id).unwrap();
    assert!(fx.registry.get(id).is_none());

    let restored_id = fx.registry.restore(snapshot).unwrap();
    assert_eq!(restored_id, id);

    let restored = fx.registry.get(restored_id).unwrap();
    assert_eq!(restored.name(), original.name());
    assert_eq!(restored.motd(), original.motd());
    assert_eq!(restored.logo(), original.logo());
    assert_eq!(restored.rank_name(0), Some(""));
    assert_eq!(restored.rank_name(5), Some("Officer"));
    assert_eq!(restored.members(), original.members());
    assert_eq!(restored.explicit_members(), original.explicit_members());
    assert_eq!(restored.joined_towns(), &[fx.town]);
    // The restored entity got a fresh ephemeral index.
    assert_ne!(restored.ephemeral_index(), original.ephemeral_index());
}

#[test]
fn rename_collision_leaves_both_names_intact() {
    let mut fx = TestFixture::new();
    let a = fx
        .registry
        .create("Iron Banner", Utc::now(), Uuid::now_v7())
        .unwrap();
    let b = fx
        .registry
        .create("Silver Shield", Utc::now(), Uuid::now_v7())
        .unwrap();

    assert!(matches!(
        fx.registry.rename(b, "Iron Banner"),
        Err(OrgError::NameTaken(_))
    ));
    assert_eq!(fx.registry.get(a).unwrap().name(), "Iron Banner");
    assert_eq!(fx.registry.get(b).unwrap().name(), "Silver Shield");
}

#[test]
fn removal_frees_the_name_but_not_the_counter() {
    let mut fx = TestFixture::new();
    let id = fx
        .registry
        .create("Iron Banner", Utc::now(), Uuid::now_v7())
        .unwrap();
    fx.registry.remove(id);

    assert_eq!(fx.registry.count(), 1);
    assert!(fx.registry.is_empty());

    let again = fx
        .registry
        .create("Iron Banner", Utc::now(), Uuid::now_v7())
        .unwrap();
    assert_ne!(again, id);
    assert_eq!(fx.registry.count(), 2);
}

#[test]
fn two_organizations_can_share_a_town() {
    let mut fx = TestFixture::new();
    let a = fx
        .registry
        .create("Iron Banner", Utc::now(), Uuid::now_v7())
        .unwrap();
    let b = fx
        .registry
        .create("Silver Shield", Utc::now(), Uuid::now_v7())
        .unwrap();

    fx.registry
        .get_mut(a)
        .unwrap()
        .affiliate_town(fx.town, &fx.territory)
        .unwrap();
    fx.registry
        .get_mut(b)
        .unwrap()
        .affiliate_town(fx.town, &fx.territory)
        .unwrap();

    for resident in &fx.residents {
        assert!(fx.registry.get(a).unwrap().is_member(*resident));
        assert!(fx.registry.get(b).unwrap().is_member(*resident));
    }
}
