use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::{FlexibleValue, ListResponse, Resource};

/// A server as returned by the panel.
pub type Server = Resource<ServerAttributes>;

/// A page of servers.
pub type ServerList = ListResponse<ServerAttributes>;

/// Attributes of a server.
///
/// Fields the panel omits decode to their zero value, so an absent
/// `suspended` reads as `false`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerAttributes {
    pub id: u64,
    pub external_id: Option<FlexibleValue>,
    pub uuid: String,
    /// Short identifier (first block of the UUID).
    pub identifier: String,
    pub name: String,
    pub description: String,
    pub suspended: bool,
    pub limits: ServerLimits,
    pub feature_limits: ServerFeatureLimits,
    /// Owning user id.
    pub user: u64,
    pub node: u64,
    /// Id of the default allocation.
    pub allocation: u64,
    pub nest: u64,
    pub egg: u64,
    pub pack: Option<FlexibleValue>,
    pub container: ServerContainer,
    pub relationships: ServerRelationships,
    pub updated_at: Option<DateTime<FixedOffset>>,
    pub created_at: Option<DateTime<FixedOffset>>,
}

impl fmt::Display for ServerAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (#{}, {})", self.name, self.id, self.identifier)
    }
}

/// System resource limits for a server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerLimits {
    /// Memory in MiB.
    pub memory: i64,
    /// Swap in MiB; `-1` means unlimited.
    pub swap: i64,
    /// Disk in MiB.
    pub disk: i64,
    /// Block IO weight.
    pub io: i64,
    /// CPU percentage.
    pub cpu: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threads: Option<String>,
    pub oom_disabled: bool,
}

/// Limits on databases, extra allocations and backups.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerFeatureLimits {
    pub databases: i64,
    pub allocations: i64,
    pub backups: i64,
}

/// Docker container settings a server runs with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerContainer {
    pub startup_command: String,
    pub image: String,
    pub installed: bool,
    /// Egg variables. Values are usually strings but the panel passes
    /// numbers and nulls through untouched.
    pub environment: HashMap<String, serde_json::Value>,
}

/// Eager-loaded relationships, present when requested with `include=`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerRelationships {
    pub allocations: ListResponse<AllocationAttributes>,
}

/// A network allocation (IP and port) assigned to a server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocationAttributes {
    pub id: u64,
    pub ip: String,
    pub alias: Option<FlexibleValue>,
    pub port: u16,
    pub notes: Option<String>,
    pub assigned: bool,
}

/// Default allocation to bind a new server to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerAllocation {
    pub default: u64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional: Vec<u64>,
}

/// Payload for creating a server or patching its details, build or startup.
///
/// Unset fields are left out of the JSON body so that a patch only touches
/// what the caller set. Which fields each endpoint requires is decided by the
/// panel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerChange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<FlexibleValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub egg: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docker_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub startup: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limits: Option<ServerLimits>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_limits: Option<ServerFeatureLimits>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocation: Option<ServerAllocation>,
}

impl ServerChange {
    /// Create a new server change builder.
    pub fn builder() -> ServerChangeBuilder {
        ServerChangeBuilder::default()
    }
}

/// Builder for [`ServerChange`].
#[derive(Debug, Default)]
pub struct ServerChangeBuilder {
    change: ServerChange,
}

impl ServerChangeBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.change.name = Some(name.into());
        self
    }

    /// Set the owning user id.
    pub fn user(mut self, user: u64) -> Self {
        self.change.user = Some(user);
        self
    }

    pub fn external_id(mut self, external_id: impl Into<FlexibleValue>) -> Self {
        self.change.external_id = Some(external_id.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.change.description = Some(description.into());
        self
    }

    pub fn egg(mut self, egg: u64) -> Self {
        self.change.egg = Some(egg);
        self
    }

    pub fn docker_image(mut self, image: impl Into<String>) -> Self {
        self.change.docker_image = Some(image.into());
        self
    }

    pub fn startup(mut self, startup: impl Into<String>) -> Self {
        self.change.startup = Some(startup.into());
        self
    }

    /// Set one egg variable. May be called repeatedly.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.change
            .environment
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn limits(mut self, limits: ServerLimits) -> Self {
        self.change.limits = Some(limits);
        self
    }

    pub fn feature_limits(mut self, feature_limits: ServerFeatureLimits) -> Self {
        self.change.feature_limits = Some(feature_limits);
        self
    }

    /// Set the default allocation id.
    pub fn default_allocation(mut self, allocation: u64) -> Self {
        self.change
            .allocation
            .get_or_insert_with(ServerAllocation::default)
            .default = allocation;
        self
    }

    pub fn build(self) -> ServerChange {
        self.change
    }
}
