// crates/channelgen-core/src/model.rs
// ============================================================================
// Module: Configuration Schema
// Description: Data model for the consortium network-configuration document.
// Purpose: Provide serializable records with stable capitalized wire names.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! This module defines the document schema consumed by the downstream
//! ordering/bootstrap tool. Field names on the wire are a compatibility
//! contract (`Profiles`, `Policies`, `MSPDir`, `AnchorPeers`, ...) and are
//! pinned with explicit serde renames rather than a rename-all rule, so a
//! rename never drifts silently.
//!
//! All named collections are [`BTreeMap`]s: the document is regenerated from
//! scratch on every run, and key-ordered rendering keeps successive runs
//! byte-identical and diffable.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde::de;

// ============================================================================
// SECTION: Document Root
// ============================================================================

/// Root container for the generated configuration document.
///
/// # Invariants
/// - `profiles` keys are the externally referenced profile names.
/// - The optional top-level blocks are part of the schema contract but unused
///   in the default run; they serialize as nulls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopLevel {
    /// Named configuration profiles keyed by profile name.
    #[serde(rename = "Profiles")]
    pub profiles: BTreeMap<String, Profile>,
    /// Optional top-level organization list.
    #[serde(rename = "Organizations")]
    pub organizations: Option<Vec<Organization>>,
    /// Optional top-level channel defaults.
    #[serde(rename = "Channel")]
    pub channel: Option<Profile>,
    /// Optional top-level application defaults.
    #[serde(rename = "Application")]
    pub application: Option<Application>,
    /// Optional top-level orderer defaults.
    #[serde(rename = "Orderer")]
    pub orderer: Option<Orderer>,
    /// Optional top-level capability groups.
    #[serde(rename = "Capabilities")]
    pub capabilities: Option<BTreeMap<String, BTreeMap<String, bool>>>,
    /// Optional top-level resources defaults.
    #[serde(rename = "Resources")]
    pub resources: Option<Resources>,
}

/// Named configuration variant combining orderer and application settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Consortium referenced by name, for channel-creation profiles.
    #[serde(rename = "Consortium")]
    pub consortium: Option<String>,
    /// Application block carried by this profile.
    #[serde(rename = "Application")]
    pub application: Option<Application>,
    /// Orderer block carried by this profile.
    #[serde(rename = "Orderer")]
    pub orderer: Option<Orderer>,
    /// Consortium definitions keyed by consortium name.
    #[serde(rename = "Consortiums")]
    pub consortiums: BTreeMap<String, Consortium>,
    /// Capability flags for this profile scope.
    #[serde(rename = "Capabilities")]
    pub capabilities: BTreeMap<String, bool>,
    /// Named policies for this profile scope.
    #[serde(rename = "Policies")]
    pub policies: BTreeMap<String, Policy>,
}

// ============================================================================
// SECTION: Policies
// ============================================================================

/// Rule classification for a [`Policy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolicyType {
    /// Explicit signature expression over MSP principals.
    Signature,
    /// Quantifier over a named sub-policy set.
    ImplicitMeta,
}

/// Named access rule attached to a scope.
///
/// # Invariants
/// - `rule` is a signature expression for [`PolicyType::Signature`] and an
///   implicit-meta expression (`ANY Readers`, `MAJORITY Admins`, ...) for
///   [`PolicyType::ImplicitMeta`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    /// Rule classification.
    #[serde(rename = "Type")]
    pub policy_type: PolicyType,
    /// Rule expression evaluated by the downstream consumer.
    #[serde(rename = "Rule")]
    pub rule: String,
}

impl Policy {
    /// Creates a signature policy from a rule expression.
    #[must_use]
    pub fn signature(rule: impl Into<String>) -> Self {
        Self {
            policy_type: PolicyType::Signature,
            rule: rule.into(),
        }
    }

    /// Creates an implicit-meta policy from a quantifier expression.
    #[must_use]
    pub fn implicit_meta(rule: impl Into<String>) -> Self {
        Self {
            policy_type: PolicyType::ImplicitMeta,
            rule: rule.into(),
        }
    }
}

// ============================================================================
// SECTION: Organizations
// ============================================================================

/// Identity unit participating in the network.
///
/// # Invariants
/// - `id` is unique across the document; it doubles as the MSP identifier
///   referenced inside policy rule strings.
/// - `admin_principal` is deprecated and never populated; it stays in the
///   schema for output-format compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    /// Display name of the organization.
    #[serde(rename = "Name")]
    pub name: String,
    /// MSP identifier, unique across the document.
    #[serde(rename = "ID")]
    pub id: String,
    /// Filesystem path to the organization's MSP material.
    #[serde(rename = "MSPDir")]
    pub msp_dir: String,
    /// MSP implementation type; empty selects the consumer default.
    #[serde(rename = "MSPType")]
    pub msp_type: String,
    /// Readers/Writers/Admins access policies.
    #[serde(rename = "Policies")]
    pub policies: BTreeMap<String, Policy>,
    /// Advertised anchor-peer endpoints.
    #[serde(rename = "AnchorPeers")]
    pub anchor_peers: Vec<AnchorPeer>,
    /// Orderer endpoints contributed by this organization.
    #[serde(rename = "OrdererEndpoints")]
    pub orderer_endpoints: Vec<String>,
    /// Deprecated; retained for schema compatibility only.
    #[serde(rename = "AdminPrincipal")]
    pub admin_principal: String,
}

/// Network-reachable endpoint advertised for an organization.
///
/// # Invariants
/// - `port` is a valid TCP port; the deriver rejects 0 and values above 65535
///   before this record is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnchorPeer {
    /// Peer host name.
    #[serde(rename = "Host")]
    pub host: String,
    /// Peer TCP port.
    #[serde(rename = "Port")]
    pub port: u16,
}

/// Named group of organizations permitted to jointly create a channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consortium {
    /// Member organizations of this consortium.
    #[serde(rename = "Organizations")]
    pub organizations: Vec<Organization>,
}

// ============================================================================
// SECTION: Application Block
// ============================================================================

/// Application-level configuration carried by a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    /// Organizations participating at the application level.
    #[serde(rename = "Organizations")]
    pub organizations: Vec<Organization>,
    /// Capability flags for the application scope.
    #[serde(rename = "Capabilities")]
    pub capabilities: BTreeMap<String, bool>,
    /// Optional resource-tree seed configuration.
    #[serde(rename = "Resources")]
    pub resources: Option<Resources>,
    /// Named policies for the application scope.
    #[serde(rename = "Policies")]
    pub policies: BTreeMap<String, Policy>,
    /// Access-control mappings from resource name to policy path.
    #[serde(rename = "ACLs")]
    pub acls: BTreeMap<String, String>,
}

/// Resource-tree seed configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resources {
    /// Default modification policy for seeded resources.
    #[serde(rename = "DefaultModPolicy")]
    pub default_mod_policy: String,
}

// ============================================================================
// SECTION: Orderer Block
// ============================================================================

/// Orderer bootstrap configuration carried by a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Orderer {
    /// Consensus implementation selector (`solo`, `kafka`, `etcdraft`).
    #[serde(rename = "OrdererType")]
    pub orderer_type: String,
    /// Orderer endpoint addresses.
    #[serde(rename = "Addresses")]
    pub addresses: Vec<String>,
    /// Maximum wait before cutting a batch.
    #[serde(rename = "BatchTimeout")]
    pub batch_timeout: BatchTimeout,
    /// Batch size limits.
    #[serde(rename = "BatchSize")]
    pub batch_size: BatchSize,
    /// Kafka broker list for the Kafka-based orderer.
    #[serde(rename = "Kafka")]
    pub kafka: Kafka,
    /// Consensus metadata for the raft-based orderer.
    #[serde(rename = "EtcdRaft")]
    pub etcd_raft: Option<ConfigMetadata>,
    /// Organizations operating the ordering service.
    #[serde(rename = "Organizations")]
    pub organizations: Vec<Organization>,
    /// Maximum number of channels; zero selects the consumer default.
    #[serde(rename = "MaxChannels")]
    pub max_channels: u64,
    /// Capability flags for the orderer scope.
    #[serde(rename = "Capabilities")]
    pub capabilities: BTreeMap<String, bool>,
    /// Named policies for the orderer scope, including `BlockValidation`.
    #[serde(rename = "Policies")]
    pub policies: BTreeMap<String, Policy>,
}

/// Batch size limits for the ordering service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSize {
    /// Maximum number of messages per batch.
    #[serde(rename = "MaxMessageCount")]
    pub max_message_count: u32,
    /// Absolute byte ceiling for a batch.
    #[serde(rename = "AbsoluteMaxBytes")]
    pub absolute_max_bytes: u32,
    /// Preferred byte target for a batch.
    #[serde(rename = "PreferredMaxBytes")]
    pub preferred_max_bytes: u32,
}

/// Broker configuration for the Kafka-based orderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kafka {
    /// Kafka broker endpoints.
    #[serde(rename = "Brokers")]
    pub brokers: Vec<String>,
}

/// Consensus metadata for the raft-based orderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigMetadata {
    /// Consensus participants.
    #[serde(rename = "Consenters")]
    pub consenters: Vec<Consenter>,
}

/// Consensus-participant identity for the raft-based orderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consenter {
    /// Consenter host name.
    #[serde(rename = "Host")]
    pub host: String,
    /// Consenter TCP port.
    #[serde(rename = "Port")]
    pub port: u32,
    /// Path to the consenter's client TLS certificate.
    #[serde(rename = "ClientTLSCert")]
    pub client_tls_cert: String,
    /// Path to the consenter's server TLS certificate.
    #[serde(rename = "ServerTLSCert")]
    pub server_tls_cert: String,
}

// ============================================================================
// SECTION: Batch Timeout
// ============================================================================

/// Batch cut timeout with a duration-literal wire form (`2s`).
///
/// # Invariants
/// - Serializes as whole seconds with an `s` suffix, matching the duration
///   literal the downstream consumer parses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchTimeout(u64);

impl BatchTimeout {
    /// Creates a batch timeout from whole seconds.
    #[must_use]
    pub const fn from_secs(secs: u64) -> Self {
        Self(secs)
    }

    /// Returns the timeout in whole seconds.
    #[must_use]
    pub const fn as_secs(self) -> u64 {
        self.0
    }
}

impl fmt::Display for BatchTimeout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

impl Serialize for BatchTimeout {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BatchTimeout {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let literal = String::deserialize(deserializer)?;
        let seconds = literal
            .strip_suffix('s')
            .ok_or_else(|| de::Error::custom(format!("duration `{literal}` missing `s` suffix")))?;
        let secs: u64 = seconds
            .parse()
            .map_err(|_| de::Error::custom(format!("duration `{literal}` is not whole seconds")))?;
        Ok(Self(secs))
    }
}
