//! Catalog resource model
//!
//! Typed records parsed from the EventCatalog llms.txt manifest, plus the
//! kind alias table shared by the filter engine and tool parameter
//! validation.

pub mod client;
pub mod parser;

pub use client::CatalogClient;

use serde::{Deserialize, Serialize};

/// The tag distinguishing resource variants.
///
/// Versioned kinds carry a version and optional summary; teams, users and
/// custom docs do not. The wire name for custom docs is `doc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Event,
    Command,
    Query,
    Service,
    Domain,
    Flow,
    Entity,
    Channel,
    Team,
    User,
    Doc,
}

impl ResourceKind {
    /// Whether records of this kind carry a version.
    pub fn is_versioned(&self) -> bool {
        !matches!(
            self,
            ResourceKind::Team | ResourceKind::User | ResourceKind::Doc
        )
    }

    /// Singular wire name, as emitted in record JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Event => "event",
            ResourceKind::Command => "command",
            ResourceKind::Query => "query",
            ResourceKind::Service => "service",
            ResourceKind::Domain => "domain",
            ResourceKind::Flow => "flow",
            ResourceKind::Entity => "entity",
            ResourceKind::Channel => "channel",
            ResourceKind::Team => "team",
            ResourceKind::User => "user",
            ResourceKind::Doc => "doc",
        }
    }

    /// Plural name, as used in catalog URL paths and filter parameters.
    pub fn plural(&self) -> &'static str {
        match self {
            ResourceKind::Event => "events",
            ResourceKind::Command => "commands",
            ResourceKind::Query => "queries",
            ResourceKind::Service => "services",
            ResourceKind::Domain => "domains",
            ResourceKind::Flow => "flows",
            ResourceKind::Entity => "entities",
            ResourceKind::Channel => "channels",
            ResourceKind::Team => "teams",
            ResourceKind::User => "users",
            ResourceKind::Doc => "docs",
        }
    }

    /// Resolve a singular or plural spelling to a kind.
    ///
    /// This is the single alias table consumed by both the filter engine
    /// and tool parameter validation.
    pub fn from_alias(value: &str) -> Option<ResourceKind> {
        let normalized = value.trim().to_lowercase();
        ALL_KINDS
            .iter()
            .copied()
            .find(|kind| kind.as_str() == normalized || kind.plural() == normalized)
    }
}

/// All kinds, in manifest section order.
pub const ALL_KINDS: [ResourceKind; 11] = [
    ResourceKind::Event,
    ResourceKind::Command,
    ResourceKind::Query,
    ResourceKind::Service,
    ResourceKind::Domain,
    ResourceKind::Flow,
    ResourceKind::Entity,
    ResourceKind::Channel,
    ResourceKind::Team,
    ResourceKind::User,
    ResourceKind::Doc,
];

/// Filter over kinds, including the pass-through "all".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindFilter {
    All,
    Kind(ResourceKind),
}

impl KindFilter {
    /// Parse a filter value, accepting "all" and any kind alias.
    pub fn from_alias(value: &str) -> Option<KindFilter> {
        let normalized = value.trim().to_lowercase();
        if normalized == "all" {
            return Some(KindFilter::All);
        }
        ResourceKind::from_alias(&normalized).map(KindFilter::Kind)
    }

    pub fn matches(&self, kind: ResourceKind) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::Kind(wanted) => *wanted == kind,
        }
    }
}

impl Default for KindFilter {
    fn default() -> Self {
        KindFilter::All
    }
}

/// One typed entry parsed from the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRecord {
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub url: String,
}
