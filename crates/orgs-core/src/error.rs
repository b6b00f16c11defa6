//! Error types for organization operations
//!
//! This module defines all error types that can occur while creating,
//! looking up, or mutating organizations. Every failure is synchronous and
//! caller-recoverable; command handlers surface the message to the player.

use thiserror::Error;
use uuid::Uuid;

use orgs_territory::TerritoryError;

/// Organization error types.
///
/// These errors cover all validation failures raised by the registry and
/// the entity mutation methods. None of them are fatal; the caller chooses
/// different input and retries.
#[derive(Debug, Error)]
pub enum OrgError {
    /// Name length outside the accepted range
    #[error("Organization name must be longer than {min} and at most {max} characters")]
    NameLength { min: usize, max: usize },

    /// Name collides with a live organization (case-sensitive)
    #[error("Organization name \"{0}\" is already in use")]
    NameTaken(String),

    /// Message of the day over the length cap
    #[error("Message of the day may be at most {max} characters")]
    MotdTooLong { max: usize },

    /// Description over the length cap
    #[error("Description may be at most {max} characters")]
    DescriptionTooLong { max: usize },

    /// Logo over the raw length cap
    #[error("Logo may be at most {max} characters")]
    LogoTooLong { max: usize },

    /// Logo has too many lines
    #[error("Logo may have at most {max} lines")]
    LogoTooTall { max: usize },

    /// A single logo line is too wide
    #[error("Logo line {line} is wider than {max} characters")]
    LogoLineTooWide { line: usize, max: usize },

    /// Rank slot outside `[0, 10)`
    #[error("Rank slot {slot} is outside [0, {bound})")]
    RankSlotOutOfRange { slot: u8, bound: u8 },

    /// Rank display name over the length cap
    #[error("Rank name may be at most {max} characters")]
    RankNameTooLong { max: usize },

    /// An organization cannot contain itself
    #[error("Organization cannot be its own sub-organization")]
    SelfSubOrganization,

    /// The current parent cannot also become a child
    #[error("Parent organization cannot be added as a sub-organization")]
    ParentAsSubOrganization,

    /// Sub-organization already linked
    #[error("Organization {0} is already a sub-organization")]
    DuplicateSubOrganization(Uuid),

    /// Sub-organization not linked
    #[error("Organization {0} is not a sub-organization")]
    UnknownSubOrganization(Uuid),

    /// Sub-organization list is full
    #[error("Already holding {count} sub-organizations")]
    SubOrganizationCapacity { count: usize },

    /// An organization cannot be its own parent
    #[error("Organization cannot be its own parent")]
    SelfParent,

    /// Re-setting the current parent is rejected, not ignored
    #[error("Organization {0} is already the parent organization")]
    ParentUnchanged(Uuid),

    /// Player already on the roster
    #[error("Player {0} is already a member")]
    AlreadyMember(Uuid),

    /// Player not on the roster
    #[error("Player {0} is not a member")]
    NotMember(Uuid),

    /// Town already affiliated
    #[error("Town {0} is already affiliated")]
    TownAlreadyAffiliated(Uuid),

    /// Nation already affiliated
    #[error("Nation {0} is already affiliated")]
    NationAlreadyAffiliated(Uuid),

    /// Territory provider does not know the town
    #[error("Town {0} does not exist")]
    UnknownTown(Uuid),

    /// Territory provider does not know the nation
    #[error("Nation {0} does not exist")]
    UnknownNation(Uuid),

    /// No live organization under this identifier
    #[error("No organization with id {0}")]
    UnknownOrganization(Uuid),

    /// Territory provider failure (lookup infrastructure, not validation)
    #[error(transparent)]
    Territory(#[from] TerritoryError),
}

/// Result type for organization operations.
pub type OrgResult<T> = Result<T, OrgError>;
