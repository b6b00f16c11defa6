//! Organization domain model
//!
//! This module provides the core Organization entity: a named player group
//! with metadata, a fixed rank ladder, a membership roster, hierarchy links
//! to other organizations, and affiliations to external towns and nations.
//!
//! All mutation goes through entity methods that validate before committing;
//! nothing outside this module touches the internal maps directly. Creation
//! and renaming live on [`OrganizationRegistry`](crate::OrganizationRegistry)
//! because only the registry can see every live name.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use orgs_territory::TerritoryProvider;

use crate::error::{OrgError, OrgResult};
use crate::snapshot::OrganizationSnapshot;

/// Maximum organization name length, inclusive.
pub const NAME_MAX_LEN: usize = 40;
/// Minimum organization name length, exclusive.
pub const NAME_MIN_LEN: usize = 3;
/// Maximum message-of-the-day length.
pub const MOTD_MAX_LEN: usize = 100;
/// Maximum description length.
pub const DESCRIPTION_MAX_LEN: usize = 255;
/// Logo grid width in characters.
pub const LOGO_WIDTH: usize = 15;
/// Logo grid height in lines.
pub const LOGO_HEIGHT: usize = 15;
/// Raw logo length cap: a full grid plus one newline per row.
pub const LOGO_MAX_LEN: usize = LOGO_HEIGHT * (LOGO_WIDTH + 1);
/// Maximum rank display-name length.
pub const RANK_NAME_MAX_LEN: usize = 50;
/// Number of rank slots; valid slots are `0..RANK_SLOTS`.
pub const RANK_SLOTS: u8 = 10;
/// Slot new members are enrolled at.
pub const MEMBER_SLOT: u8 = 0;
/// Slot the founder is enrolled at.
pub const LEADER_SLOT: u8 = 9;
/// Nominal sub-organization cap. The capacity check rejects additions only
/// once the count already exceeds this, so a sixth child is admitted;
/// legacy behavior kept until the intended rule is settled.
pub const SUB_ORGANIZATION_CAP: usize = 5;

/// A named player group inside the game world.
///
/// Organizations own their metadata, rank table, membership roster, and
/// relationship lists, and enforce every field invariant in their mutation
/// methods. Identity-level invariants (global name uniqueness) are enforced
/// by the registry that owns the entity.
///
/// # Architecture
///
/// ```text
/// Organization
///   ├─ Metadata (name, motd, description, logo)
///   ├─ Ranks (10 fixed slots, 0 = "Member", 9 = "Leader")
///   ├─ Members (player → rank slot, explicit joins tracked separately)
///   ├─ Hierarchy (sub-organizations, optional parent)
///   └─ Affiliations (towns, nations)
/// ```
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use uuid::Uuid;
/// use orgs_core::OrganizationRegistry;
///
/// let mut registry = OrganizationRegistry::new();
/// let founder = Uuid::now_v7();
/// let id = registry.create("Iron Banner", Utc::now(), founder).unwrap();
///
/// let org = registry.get(id).unwrap();
/// assert_eq!(org.name(), "Iron Banner");
/// assert_eq!(org.member_rank(founder), Some(9));
/// ```
#[derive(Debug, Clone)]
pub struct Organization {
    /// Permanent identifier, immutable after creation
    id: Uuid,

    /// Process-lifetime registry key, never persisted
    ephemeral_index: u32,

    /// Globally unique display name
    name: String,

    /// Message of the day
    motd: String,

    /// Free-form description
    description: String,

    /// ASCII logo, at most a 15×15 grid
    logo: String,

    /// When the organization was founded
    founding_date: DateTime<Utc>,

    /// Rank slot → display name; cleared slots hold the empty string
    ranks: HashMap<u8, String>,

    /// Player → held rank slot; membership is presence in this map
    members: HashMap<Uuid, u8>,

    /// Players who joined directly rather than via an affiliation
    explicit_members: HashSet<Uuid>,

    /// Child organization ids, insertion-ordered
    sub_organizations: Vec<Uuid>,

    /// Parent organization id, if any
    parent_organization: Option<Uuid>,

    /// Affiliated town ids, insertion-ordered
    joined_towns: Vec<Uuid>,

    /// Affiliated nation ids, insertion-ordered
    joined_nations: Vec<Uuid>,
}

impl Organization {
    /// Founding constructor. The registry validates the name and assigns the
    /// ephemeral index before calling this; the founder is enrolled at the
    /// leader slot and recorded as an explicit member.
    pub(crate) fn found(
        name: String,
        founding_date: DateTime<Utc>,
        founder: Uuid,
        ephemeral_index: u32,
    ) -> Self {
        let mut ranks = HashMap::new();
        ranks.insert(MEMBER_SLOT, "Member".to_string());
        ranks.insert(LEADER_SLOT, "Leader".to_string());

        let mut members = HashMap::new();
        members.insert(founder, LEADER_SLOT);

        let mut explicit_members = HashSet::new();
        explicit_members.insert(founder);

        Self {
            id: Uuid::now_v7(),
            ephemeral_index,
            name,
            motd: String::new(),
            description: String::new(),
            logo: String::new(),
            founding_date,
            ranks,
            members,
            explicit_members,
            sub_organizations: Vec::new(),
            parent_organization: None,
            joined_towns: Vec::new(),
            joined_nations: Vec::new(),
        }
    }

    /// Snapshot constructor. Restores every persisted field verbatim; no
    /// founder auto-enrollment and no name-length re-validation (uniqueness
    /// is still checked by the registry on restore).
    pub(crate) fn from_snapshot(snapshot: OrganizationSnapshot, ephemeral_index: u32) -> Self {
        Self {
            id: snapshot.id,
            ephemeral_index,
            name: snapshot.name,
            motd: snapshot.motd,
            description: snapshot.description,
            logo: snapshot.logo,
            founding_date: snapshot.founding_date,
            ranks: snapshot.ranks,
            members: snapshot.members,
            explicit_members: snapshot.explicit_members,
            sub_organizations: snapshot.sub_organizations,
            parent_organization: snapshot.parent_organization,
            joined_towns: snapshot.joined_towns,
            joined_nations: snapshot.joined_nations,
        }
    }

    /// Validate an organization name against the length rule: strictly more
    /// than [`NAME_MIN_LEN`] and at most [`NAME_MAX_LEN`] characters.
    ///
    /// Uniqueness is a registry concern and is checked separately.
    pub fn validate_name(name: &str) -> OrgResult<()> {
        let len = name.chars().count();
        if len <= NAME_MIN_LEN || len > NAME_MAX_LEN {
            return Err(OrgError::NameLength {
                min: NAME_MIN_LEN,
                max: NAME_MAX_LEN,
            });
        }
        Ok(())
    }

    /// Registry-only name write; callers go through
    /// [`OrganizationRegistry::rename`](crate::OrganizationRegistry::rename).
    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    /// Set the message of the day.
    ///
    /// Fails if the text is over [`MOTD_MAX_LEN`] characters.
    pub fn set_motd(&mut self, motd: impl Into<String>) -> OrgResult<()> {
        let motd = motd.into();
        if motd.chars().count() > MOTD_MAX_LEN {
            return Err(OrgError::MotdTooLong { max: MOTD_MAX_LEN });
        }
        self.motd = motd;
        Ok(())
    }

    /// Set the description.
    ///
    /// Fails if the text is over [`DESCRIPTION_MAX_LEN`] characters.
    pub fn set_description(&mut self, description: impl Into<String>) -> OrgResult<()> {
        let description = description.into();
        if description.chars().count() > DESCRIPTION_MAX_LEN {
            return Err(OrgError::DescriptionTooLong {
                max: DESCRIPTION_MAX_LEN,
            });
        }
        self.description = description;
        Ok(())
    }

    /// Set the ASCII logo.
    ///
    /// The logo is at most a [`LOGO_HEIGHT`]-line grid of
    /// [`LOGO_WIDTH`]-character lines. Checks run in reporting order: raw
    /// length first, then line count, then per-line width.
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
    /// let org = registry.get_mut(id).unwrap();
    ///
    /// org.set_logo("  /\\\n /  \\\n/____\\").unwrap();
    /// assert!(org.set_logo("X".repeat(16)).is_err());
    /// ```
    pub fn set_logo(&mut self, logo: impl Into<String>) -> OrgResult<()> {
        let logo = logo.into();
        if logo.chars().count() > LOGO_MAX_LEN {
            return Err(OrgError::LogoTooLong { max: LOGO_MAX_LEN });
        }
        let lines: Vec<&str> = logo.split('\n').collect();
        if lines.len() > LOGO_HEIGHT {
            return Err(OrgError::LogoTooTall { max: LOGO_HEIGHT });
        }
        for (line, text) in lines.iter().enumerate() {
            if text.chars().count() > LOGO_WIDTH {
                return Err(OrgError::LogoLineTooWide {
                    line,
                    max: LOGO_WIDTH,
                });
            }
        }
        self.logo = logo;
        Ok(())
    }

    /// Set or rename a rank slot. This is an upsert: the slot is overwritten
    /// whether or not it held a name before.
    ///
    /// Fails if `slot` is outside `[0, RANK_SLOTS)` or the name is over
    /// [`RANK_NAME_MAX_LEN`] characters.
    pub fn set_rank(&mut self, slot: u8, name: impl Into<String>) -> OrgResult<()> {
        let name = name.into();
        if slot >= RANK_SLOTS {
            return Err(OrgError::RankSlotOutOfRange {
                slot,
                bound: RANK_SLOTS,
            });
        }
        if name.chars().count() > RANK_NAME_MAX_LEN {
            return Err(OrgError::RankNameTooLong {
                max: RANK_NAME_MAX_LEN,
            });
        }
        self.ranks.insert(slot, name);
        Ok(())
    }

    /// Clear a rank slot's display name. The slot stays addressable with an
    /// empty name; it is never removed from the table. Slots 0 and 9 may be
    /// blanked like any other slot.
    pub fn clear_rank(&mut self, slot: u8) -> OrgResult<()> {
        self.set_rank(slot, "")
    }

    /// Link a child organization.
    ///
    /// Rejects the organization itself, its current parent, an already
    /// linked child, and additions once the child count exceeds
    /// [`SUB_ORGANIZATION_CAP`].
    pub fn add_sub_organization(&mut self, child: Uuid) -> OrgResult<()> {
        if child == self.id {
            return Err(OrgError::SelfSubOrganization);
        }
        if self.parent_organization == Some(child) {
            return Err(OrgError::ParentAsSubOrganization);
        }
        if self.sub_organizations.contains(&child) {
            return Err(OrgError::DuplicateSubOrganization(child));
        }
        // `>` rather than `>=` admits a sixth child past the nominal cap.
        if self.sub_organizations.len() > SUB_ORGANIZATION_CAP {
            return Err(OrgError::SubOrganizationCapacity {
                count: self.sub_organizations.len(),
            });
        }
        self.sub_organizations.push(child);
        Ok(())
    }

    /// Unlink a child organization. Fails if it is not currently linked.
    pub fn remove_sub_organization(&mut self, child: Uuid) -> OrgResult<()> {
        if !self.sub_organizations.contains(&child) {
            return Err(OrgError::UnknownSubOrganization(child));
        }
        self.sub_organizations.retain(|c| *c != child);
        Ok(())
    }

    /// Replace the parent organization.
    ///
    /// Rejects the organization itself and a re-set of the current parent
    /// (a no-op is an error, not silently ignored). Only length-1 cycles
    /// are rejected here; deeper reachability is the host's concern.
    pub fn set_parent_organization(&mut self, parent: Uuid) -> OrgResult<()> {
        if parent == self.id {
            return Err(OrgError::SelfParent);
        }
        if self.parent_organization == Some(parent) {
            return Err(OrgError::ParentUnchanged(parent));
        }
        self.parent_organization = Some(parent);
        Ok(())
    }

    /// Enroll a player at the member slot.
    ///
    /// Fails if the player is already on the roster. The join is not
    /// recorded as explicit; use [`add_explicit_member`] for direct joins.
    ///
    /// [`add_explicit_member`]: Organization::add_explicit_member
    pub fn add_member(&mut self, player: Uuid) -> OrgResult<()> {
        if self.members.contains_key(&player) {
            return Err(OrgError::AlreadyMember(player));
        }
        self.members.insert(player, MEMBER_SLOT);
        Ok(())
    }

    /// Enroll a player at the member slot and record the join as explicit,
    /// so later removal logic can tell invited members from members pulled
    /// in through a town or nation affiliation.
    pub fn add_explicit_member(&mut self, player: Uuid) -> OrgResult<()> {
        self.add_member(player)?;
        self.explicit_members.insert(player);
        Ok(())
    }

    /// Enroll a batch of players, best-effort.
    ///
    /// Every element is attempted; failures come back as data and earlier
    /// successes are never rolled back. Callers needing all-or-nothing must
    /// pre-validate the whole batch themselves.
    pub fn add_members(&mut self, players: &[Uuid]) -> Vec<(Uuid, OrgError)> {
        let mut failures = Vec::new();
        for &player in players {
            if let Err(err) = self.add_member(player) {
                failures.push((player, err));
            }
        }
        failures
    }

    /// Remove a player from the roster, forgetting their rank.
    ///
    /// Fails if the player is not a member.
    pub fn remove_member(&mut self, player: Uuid) -> OrgResult<()> {
        if self.members.remove(&player).is_none() {
            return Err(OrgError::NotMember(player));
        }
        self.explicit_members.remove(&player);
        Ok(())
    }

    /// Remove a batch of players, with the same best-effort semantics as
    /// [`add_members`](Organization::add_members).
    pub fn remove_members(&mut self, players: &[Uuid]) -> Vec<(Uuid, OrgError)> {
        let mut failures = Vec::new();
        for &player in players {
            if let Err(err) = self.remove_member(player) {
                failures.push((player, err));
            }
        }
        failures
    }

    /// Affiliate a town and pull its residents into the roster.
    ///
    /// Fails if the town is already affiliated, if the provider does not
    /// know it, or if the provider lookup itself fails. On success every
    /// reported resident is enrolled at the member slot; residents who are
    /// already members are logged and skipped, and the rest of the batch
    /// continues.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::Utc;
    /// use uuid::Uuid;
    /// use orgs_core::OrganizationRegistry;
    /// use orgs_territory::MemoryTerritoryProvider;
    ///
    /// let mut territory = MemoryTerritoryProvider::new();
    /// let town = Uuid::now_v7();
    /// let resident = Uuid::now_v7();
    /// territory.insert_town(town, vec![resident]);
    ///
    /// let mut registry = OrganizationRegistry::new();
    /// let id = registry.create("Iron Banner", Utc::now(), Uuid::now_v7()).unwrap();
    /// let org = registry.get_mut(id).unwrap();
    ///
    /// org.affiliate_town(town, &territory).unwrap();
    /// assert!(org.is_member(resident));
    /// ```
    pub fn affiliate_town(
        &mut self,
        town: Uuid,
        territory: &dyn TerritoryProvider,
    ) -> OrgResult<()> {
        if self.joined_towns.contains(&town) {
            return Err(OrgError::TownAlreadyAffiliated(town));
        }
        let residents = territory
            .town_residents(town)?
            .ok_or(OrgError::UnknownTown(town))?;
        self.joined_towns.push(town);
        self.merge_residents(&residents);
        Ok(())
    }

    /// Affiliate a nation and pull its residents into the roster. Same
    /// contract and batch semantics as
    /// [`affiliate_town`](Organization::affiliate_town).
    pub fn affiliate_nation(
        &mut self,
        nation: Uuid,
        territory: &dyn TerritoryProvider,
    ) -> OrgResult<()> {
        if self.joined_nations.contains(&nation) {
            return Err(OrgError::NationAlreadyAffiliated(nation));
        }
        let residents = territory
            .nation_residents(nation)?
            .ok_or(OrgError::UnknownNation(nation))?;
        self.joined_nations.push(nation);
        self.merge_residents(&residents);
        Ok(())
    }

    /// Enroll affiliation residents, skipping players already on the roster.
    fn merge_residents(&mut self, residents: &[Uuid]) {
        for (player, err) in self.add_members(residents) {
            tracing::debug!(
                organization = %self.id,
                %player,
                %err,
                "skipping resident during affiliation merge"
            );
        }
    }

    /// Permanent identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Process-lifetime registry key.
    pub fn ephemeral_index(&self) -> u32 {
        self.ephemeral_index
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Message of the day.
    pub fn motd(&self) -> &str {
        &self.motd
    }

    /// Description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// ASCII logo.
    pub fn logo(&self) -> &str {
        &self.logo
    }

    /// Founding date.
    pub fn founding_date(&self) -> DateTime<Utc> {
        self.founding_date
    }

    /// The full rank table.
    pub fn ranks(&self) -> &HashMap<u8, String> {
        &self.ranks
    }

    /// Display name of a rank slot, if the slot has ever been set.
    pub fn rank_name(&self, slot: u8) -> Option<&str> {
        self.ranks.get(&slot).map(String::as_str)
    }

    /// The full roster, player → rank slot.
    pub fn members(&self) -> &HashMap<Uuid, u8> {
        &self.members
    }

    /// Rank slot a player holds, if they are a member.
    pub fn member_rank(&self, player: Uuid) -> Option<u8> {
        self.members.get(&player).copied()
    }

    /// Whether a player is on the roster.
    pub fn is_member(&self, player: Uuid) -> bool {
        self.members.contains_key(&player)
    }

    /// Live member count.
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Players who joined directly.
    pub fn explicit_members(&self) -> &HashSet<Uuid> {
        &self.explicit_members
    }

    /// Whether a player joined directly rather than via an affiliation.
    pub fn is_explicit_member(&self, player: Uuid) -> bool {
        self.explicit_members.contains(&player)
    }

    /// Linked child organization ids.
    pub fn sub_organizations(&self) -> &[Uuid] {
        &self.sub_organizations
    }

    /// Parent organization id, if any.
    pub fn parent_organization(&self) -> Option<Uuid> {
        self.parent_organization
    }

    /// Affiliated town ids.
    pub fn joined_towns(&self) -> &[Uuid] {
        &self.joined_towns
    }

    /// Affiliated nation ids.
    pub fn joined_nations(&self) -> &[Uuid] {
        &self.joined_nations
    }
}
