//! # Orgs Providers
//!
//! This crate provides the service-provider registration contract for the
//! Orgs platform. Hosts expose economy, permissions, and chat services
//! through pluggable providers that can register (and re-register, on
//! reloads) at any point in the process lifetime; surrounding features
//! consult the directory to see what is wired. The organization domain
//! itself never calls these providers.
//!
//! Dispatch is by explicit capability tag, not by inspecting the concrete
//! provider type.
//!
//! ## Usage
//!
//! ```rust
//! use orgs_providers::{ProviderCapability, ProviderDirectory};
//!
//! let mut directory = ProviderDirectory::new();
//! directory.register(ProviderCapability::Economy, "TreasuryLite");
//!
//! assert!(directory.is_available(ProviderCapability::Economy));
//! assert!(!directory.is_available(ProviderCapability::Chat));
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A service capability a host-side provider can supply.
///
/// # Examples
///
/// ```
/// use orgs_providers::ProviderCapability;
///
/// assert_eq!(ProviderCapability::parse("economy"), Some(ProviderCapability::Economy));
/// assert_eq!(ProviderCapability::Chat.as_str(), "chat");
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ProviderCapability {
    /// Currency balances and transactions
    Economy,

    /// Permission node checks
    Permissions,

    /// Chat prefixes and formatting
    Chat,
}

impl ProviderCapability {
    /// Parse a capability from its string representation.
    ///
    /// # Arguments
    ///
    /// * `s` - String to parse (case-insensitive)
    ///
    /// # Returns
    ///
    /// `Some(ProviderCapability)` if valid, `None` otherwise
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "economy" => Some(Self::Economy),
            "permissions" => Some(Self::Permissions),
            "chat" => Some(Self::Chat),
            _ => None,
        }
    }

    /// Get string representation of the capability.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Economy => "economy",
            Self::Permissions => "permissions",
            Self::Chat => "chat",
        }
    }

    /// Get a human-readable display name for the capability.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Economy => "Economy",
            Self::Permissions => "Permissions",
            Self::Chat => "Chat",
        }
    }
}

/// A registered provider for one capability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderRegistration {
    /// Capability being supplied
    pub capability: ProviderCapability,

    /// Name of the plugin or service supplying it
    pub provider: String,

    /// When the provider registered
    pub registered_at: DateTime<Utc>,
}

/// Directory of currently wired providers, one per capability.
///
/// Registration is last-writer-wins so providers stay correct across host
/// reloads: a provider that re-registers simply replaces its earlier entry.
#[derive(Debug, Clone, Default)]
pub struct ProviderDirectory {
    registrations: HashMap<ProviderCapability, ProviderRegistration>,
}

impl ProviderDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or re-register) a provider for a capability.
    ///
    /// Returns the registration it replaced, if any.
    pub fn register(
        &mut self,
        capability: ProviderCapability,
        provider: impl Into<String>,
    ) -> Option<ProviderRegistration> {
        self.registrations.insert(
            capability,
            ProviderRegistration {
                capability,
                provider: provider.into(),
                registered_at: Utc::now(),
            },
        )
    }

    /// Drop the provider for a capability.
    pub fn unregister(&mut self, capability: ProviderCapability) -> Option<ProviderRegistration> {
        self.registrations.remove(&capability)
    }

    /// The current registration for a capability, if any.
    pub fn get(&self, capability: ProviderCapability) -> Option<&ProviderRegistration> {
        self.registrations.get(&capability)
    }

    /// Whether a capability currently has a provider.
    pub fn is_available(&self, capability: ProviderCapability) -> bool {
        self.registrations.contains_key(&capability)
    }

    /// Whether every capability has a provider.
    pub fn is_fully_wired(&self) -> bool {
        [
            ProviderCapability::Economy,
            ProviderCapability::Permissions,
            ProviderCapability::Chat,
        ]
        .iter()
        .all(|c| self.is_available(*c))
    }
}
