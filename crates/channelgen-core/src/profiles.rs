// crates/channelgen-core/src/profiles.rs
// ============================================================================
// Module: Profile Assembler
// Description: Literal profile templates for the generated document.
// Purpose: Embed derived organizations into the genesis and channel profiles.
// Dependencies: serde (via the schema model)
// ============================================================================

//! ## Overview
//! Two fixed templates make up the document: an orderer-genesis profile that
//! bootstraps the ordering service and seeds the consortium, and a channel
//! profile that references that consortium for channel creation. Everything
//! except the organization list is a literal; the assembler installs the
//! derived organizations into the consortium and the channel's application
//! block in one pass, so the two references never diverge.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use crate::model::Application;
use crate::model::BatchSize;
use crate::model::BatchTimeout;
use crate::model::Consortium;
use crate::model::Kafka;
use crate::model::Orderer;
use crate::model::Organization;
use crate::model::Policy;
use crate::model::Profile;

// ============================================================================
// SECTION: Profile Names
// ============================================================================

/// Name of the orderer-genesis profile.
pub const GENESIS_PROFILE: &str = "TwoOrgsOrdererGenesis";

/// Name of the channel-creation profile.
pub const CHANNEL_PROFILE: &str = "TwoOrgsChannel";

/// Name of the consortium seeded by the genesis profile.
pub const SAMPLE_CONSORTIUM: &str = "SampleConsortium";

// ============================================================================
// SECTION: Orderer Literals
// ============================================================================

/// MSP identifier of the ordering-service organization.
pub const ORDERER_MSP_ID: &str = "OrdererMSP";

/// Display name of the ordering-service organization.
const ORDERER_ORG_NAME: &str = "OrdererOrg";

/// Root directory for orderer-organization MSP material.
const ORDERER_ORGANIZATIONS_DIR: &str = "crypto-config/ordererOrganizations";

/// Listen address of the single solo orderer.
const ORDERER_ADDRESS: &str = "orderer.example.com:7050";

/// Consensus implementation for the bootstrap orderer.
const ORDERER_TYPE: &str = "solo";

/// Batch cut timeout in seconds.
const BATCH_TIMEOUT_SECS: u64 = 2;

/// Maximum number of messages per batch.
const BATCH_MAX_MESSAGE_COUNT: u32 = 10;

/// Absolute byte ceiling for a batch.
const BATCH_ABSOLUTE_MAX_BYTES: u32 = 10 * 1024 * 1024;

/// Preferred byte target for a batch.
const BATCH_PREFERRED_MAX_BYTES: u32 = 512 * 1024;

// ============================================================================
// SECTION: Assembly
// ============================================================================

/// Assembles the two named profiles around the derived organizations.
///
/// The same list populates the genesis consortium and the channel
/// application block; both copies are installed here and nothing mutates
/// them afterwards.
#[must_use]
pub fn assemble_profiles(organizations: Vec<Organization>) -> BTreeMap<String, Profile> {
    BTreeMap::from([
        (GENESIS_PROFILE.to_string(), genesis_profile(organizations.clone())),
        (CHANNEL_PROFILE.to_string(), channel_profile(organizations)),
    ])
}

/// Builds the orderer-genesis profile.
fn genesis_profile(organizations: Vec<Organization>) -> Profile {
    Profile {
        consortium: None,
        application: None,
        orderer: Some(orderer_block()),
        consortiums: BTreeMap::from([(
            SAMPLE_CONSORTIUM.to_string(),
            Consortium {
                organizations,
            },
        )]),
        capabilities: channel_capabilities(),
        policies: implicit_meta_policies(),
    }
}

/// Builds the channel-creation profile.
fn channel_profile(organizations: Vec<Organization>) -> Profile {
    Profile {
        consortium: Some(SAMPLE_CONSORTIUM.to_string()),
        application: Some(Application {
            organizations,
            capabilities: application_capabilities(),
            resources: None,
            policies: implicit_meta_policies(),
            acls: BTreeMap::new(),
        }),
        orderer: None,
        consortiums: BTreeMap::new(),
        capabilities: channel_capabilities(),
        policies: implicit_meta_policies(),
    }
}

// ============================================================================
// SECTION: Orderer Template
// ============================================================================

/// Builds the solo orderer block for the genesis profile.
fn orderer_block() -> Orderer {
    let mut policies = implicit_meta_policies();
    policies.insert("BlockValidation".to_string(), Policy::implicit_meta("ANY Writers"));
    Orderer {
        orderer_type: ORDERER_TYPE.to_string(),
        addresses: vec![ORDERER_ADDRESS.to_string()],
        batch_timeout: BatchTimeout::from_secs(BATCH_TIMEOUT_SECS),
        batch_size: BatchSize {
            max_message_count: BATCH_MAX_MESSAGE_COUNT,
            absolute_max_bytes: BATCH_ABSOLUTE_MAX_BYTES,
            preferred_max_bytes: BATCH_PREFERRED_MAX_BYTES,
        },
        kafka: Kafka {
            brokers: Vec::new(),
        },
        etcd_raft: None,
        organizations: vec![orderer_organization()],
        max_channels: 0,
        capabilities: orderer_capabilities(),
        policies,
    }
}

/// Builds the literal ordering-service organization.
///
/// Unlike derived peer organizations, its Readers and Writers policies match
/// any MSP member rather than enumerating admin/peer/client roles, and it
/// advertises no anchor peers.
fn orderer_organization() -> Organization {
    Organization {
        name: ORDERER_ORG_NAME.to_string(),
        id: ORDERER_MSP_ID.to_string(),
        msp_dir: format!("{ORDERER_ORGANIZATIONS_DIR}/example.com/msp"),
        msp_type: String::new(),
        policies: BTreeMap::from([
            (
                "Readers".to_string(),
                Policy::signature(format!("OR('{ORDERER_MSP_ID}.member')")),
            ),
            (
                "Writers".to_string(),
                Policy::signature(format!("OR('{ORDERER_MSP_ID}.member')")),
            ),
            ("Admins".to_string(), Policy::signature(format!("OR('{ORDERER_MSP_ID}.admin')"))),
        ]),
        anchor_peers: Vec::new(),
        orderer_endpoints: Vec::new(),
        admin_principal: String::new(),
    }
}

// ============================================================================
// SECTION: Policy and Capability Literals
// ============================================================================

/// Builds the implicit-meta Readers/Writers/Admins policy trio.
fn implicit_meta_policies() -> BTreeMap<String, Policy> {
    BTreeMap::from([
        ("Readers".to_string(), Policy::implicit_meta("ANY Readers")),
        ("Writers".to_string(), Policy::implicit_meta("ANY Writers")),
        ("Admins".to_string(), Policy::implicit_meta("MAJORITY Admins")),
    ])
}

/// Capability flags shared by the genesis and channel profile scopes.
fn channel_capabilities() -> BTreeMap<String, bool> {
    BTreeMap::from([
        ("V1_4_3".to_string(), true),
        ("V1_3".to_string(), false),
        ("V1_1".to_string(), false),
    ])
}

/// Capability flags for the orderer scope.
fn orderer_capabilities() -> BTreeMap<String, bool> {
    BTreeMap::from([("V1_4_2".to_string(), true), ("V1_1".to_string(), false)])
}

/// Capability flags for the application scope.
fn application_capabilities() -> BTreeMap<String, bool> {
    BTreeMap::from([
        ("V1_4_2".to_string(), true),
        ("V1_3".to_string(), false),
        ("V1_2".to_string(), false),
        ("V1_1".to_string(), false),
    ])
}
