// crates/channelgen-core/src/derive.rs
// ============================================================================
// Module: Organization Deriver
// Description: Synthesize organization records from the input table.
// Purpose: Expand (key, anchor port) pairs into fully populated organizations.
// Dependencies: serde (via the schema model)
// ============================================================================

//! ## Overview
//! Each input entry maps an organization key to an anchor-peer port. The
//! deriver validates the entry, then expands it into a complete
//! [`Organization`] record: domain, MSP identifier, MSP directory, the three
//! Signature access policies, and a single anchor peer. Input is a
//! [`BTreeMap`], so records come out in key order and regeneration is stable.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use crate::error::GenError;
use crate::error::GenResult;
use crate::model::AnchorPeer;
use crate::model::Organization;
use crate::model::Policy;
use crate::profiles::ORDERER_MSP_ID;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Domain suffix appended to every organization key.
pub const ORGANIZATION_DOMAIN_SUFFIX: &str = "example.com";

/// Root directory for peer-organization MSP material.
pub const PEER_ORGANIZATIONS_DIR: &str = "crypto-config/peerOrganizations";

// ============================================================================
// SECTION: Derivation
// ============================================================================

/// Derives one organization record per input entry, in key order.
///
/// MSP identifiers must be unique across the document; two keys that
/// title-case to the same identifier, or a key that derives the orderer
/// identity, are rejected rather than emitted.
///
/// # Errors
/// Returns [`GenError::InvalidInput`] when an organization key is empty, an
/// anchor port is outside 1-65535, or a derived MSP identifier collides. An
/// empty input table is valid and yields an empty list.
pub fn derive_organizations(entries: &BTreeMap<String, u32>) -> GenResult<Vec<Organization>> {
    let mut organizations = Vec::with_capacity(entries.len());
    let mut derived_ids = BTreeSet::new();
    for (key, anchor_port) in entries {
        let organization = derive_organization(key, *anchor_port)?;
        if organization.id == ORDERER_MSP_ID {
            return Err(GenError::InvalidInput(format!(
                "organization `{key}` derives the reserved MSP ID `{ORDERER_MSP_ID}`"
            )));
        }
        if !derived_ids.insert(organization.id.clone()) {
            return Err(GenError::InvalidInput(format!(
                "organization `{key}` derives the duplicate MSP ID `{}`",
                organization.id
            )));
        }
        organizations.push(organization);
    }
    Ok(organizations)
}

/// Derives a single organization record from a validated entry.
fn derive_organization(key: &str, anchor_port: u32) -> GenResult<Organization> {
    let port = validate_entry(key, anchor_port)?;
    let domain = format!("{key}.{ORGANIZATION_DOMAIN_SUFFIX}");
    let msp_id = format!("{}MSP", title_case(key));
    Ok(Organization {
        name: msp_id.clone(),
        id: msp_id.clone(),
        msp_dir: format!("{PEER_ORGANIZATIONS_DIR}/{domain}/msp"),
        msp_type: String::new(),
        policies: signature_policies(&msp_id),
        anchor_peers: vec![AnchorPeer {
            host: format!("peer0.{domain}"),
            port,
        }],
        orderer_endpoints: Vec::new(),
        admin_principal: String::new(),
    })
}

/// Builds the Readers/Writers/Admins signature policies for an MSP identity.
fn signature_policies(msp_id: &str) -> BTreeMap<String, Policy> {
    BTreeMap::from([
        (
            "Readers".to_string(),
            Policy::signature(format!("OR('{msp_id}.admin', '{msp_id}.peer', '{msp_id}.client')")),
        ),
        (
            "Writers".to_string(),
            Policy::signature(format!("OR('{msp_id}.admin', '{msp_id}.client')")),
        ),
        ("Admins".to_string(), Policy::signature(format!("OR('{msp_id}.admin')"))),
    ])
}

// ============================================================================
// SECTION: Validation
// ============================================================================

/// Validates an input entry and narrows the port to its TCP range.
fn validate_entry(key: &str, anchor_port: u32) -> GenResult<u16> {
    if key.is_empty() {
        return Err(GenError::InvalidInput("organization key is empty".to_string()));
    }
    if anchor_port == 0 {
        return Err(GenError::InvalidInput(format!("anchor port for `{key}` is zero")));
    }
    u16::try_from(anchor_port).map_err(|_| {
        GenError::InvalidInput(format!("anchor port {anchor_port} for `{key}` is outside 1-65535"))
    })
}

/// Uppercases the first character of a key, leaving the remainder unchanged.
fn title_case(key: &str) -> String {
    let mut chars = key.chars();
    chars.next().map_or_else(String::new, |first| {
        let mut output = String::with_capacity(key.len());
        output.extend(first.to_uppercase());
        output.push_str(chars.as_str());
        output
    })
}
