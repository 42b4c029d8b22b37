// crates/channelgen-core/tests/assembly.rs
// ============================================================================
// Module: Profile Assembly Tests
// Description: Validate the genesis and channel profile templates.
// Purpose: Pin literal template values and consortium membership.
// Dependencies: channelgen-core
// ============================================================================

//! ## Overview
//! Exercises the profile assembler: literal orderer settings, policy and
//! capability sets, consortium membership, and the consistency of the shared
//! organization list between the two profiles.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use channelgen_core::CHANNEL_PROFILE;
use channelgen_core::GENESIS_PROFILE;
use channelgen_core::SAMPLE_CONSORTIUM;
use channelgen_core::assemble_profiles;
use channelgen_core::derive_organizations;
use channelgen_core::model::PolicyType;
use channelgen_core::model::Profile;

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Assembles profiles for the reference two-organization table.
fn reference_profiles() -> BTreeMap<String, Profile> {
    let input = BTreeMap::from([("org1".to_string(), 7051), ("org2".to_string(), 9051)]);
    assemble_profiles(derive_organizations(&input).unwrap())
}

// ============================================================================
// SECTION: Genesis Profile
// ============================================================================

#[test]
fn genesis_profile_carries_the_solo_orderer_literals() {
    let profiles = reference_profiles();
    let orderer = profiles[GENESIS_PROFILE].orderer.as_ref().unwrap();
    assert_eq!(orderer.orderer_type, "solo");
    assert_eq!(orderer.addresses, vec!["orderer.example.com:7050".to_string()]);
    assert_eq!(orderer.batch_timeout.as_secs(), 2);
    assert_eq!(orderer.batch_size.max_message_count, 10);
    assert_eq!(orderer.batch_size.absolute_max_bytes, 10 * 1024 * 1024);
    assert_eq!(orderer.batch_size.preferred_max_bytes, 512 * 1024);
    assert!(orderer.kafka.brokers.is_empty());
    assert!(orderer.etcd_raft.is_none());
    assert_eq!(orderer.max_channels, 0);
}

#[test]
fn genesis_profile_embeds_the_orderer_organization() {
    let profiles = reference_profiles();
    let orderer = profiles[GENESIS_PROFILE].orderer.as_ref().unwrap();
    assert_eq!(orderer.organizations.len(), 1);
    let organization = &orderer.organizations[0];
    assert_eq!(organization.name, "OrdererOrg");
    assert_eq!(organization.id, "OrdererMSP");
    assert_eq!(organization.msp_dir, "crypto-config/ordererOrganizations/example.com/msp");
    assert_eq!(organization.policies["Readers"].rule, "OR('OrdererMSP.member')");
    assert_eq!(organization.policies["Writers"].rule, "OR('OrdererMSP.member')");
    assert_eq!(organization.policies["Admins"].rule, "OR('OrdererMSP.admin')");
    assert!(organization.anchor_peers.is_empty());
}

#[test]
fn orderer_scope_includes_block_validation() {
    let profiles = reference_profiles();
    let orderer = profiles[GENESIS_PROFILE].orderer.as_ref().unwrap();
    assert_eq!(orderer.policies.len(), 4);
    let block_validation = &orderer.policies["BlockValidation"];
    assert_eq!(block_validation.policy_type, PolicyType::ImplicitMeta);
    assert_eq!(block_validation.rule, "ANY Writers");
    assert_eq!(orderer.capabilities, BTreeMap::from([
        ("V1_4_2".to_string(), true),
        ("V1_1".to_string(), false),
    ]));
}

#[test]
fn genesis_consortium_lists_the_derived_organizations() {
    let profiles = reference_profiles();
    let genesis = &profiles[GENESIS_PROFILE];
    assert!(genesis.consortium.is_none());
    assert!(genesis.application.is_none());
    let consortium = &genesis.consortiums[SAMPLE_CONSORTIUM];
    let ids: Vec<&str> = consortium.organizations.iter().map(|org| org.id.as_str()).collect();
    assert_eq!(ids, vec!["Org1MSP", "Org2MSP"]);
}

#[test]
fn genesis_profile_policies_are_the_implicit_meta_trio() {
    let profiles = reference_profiles();
    let genesis = &profiles[GENESIS_PROFILE];
    assert_eq!(genesis.policies["Readers"].rule, "ANY Readers");
    assert_eq!(genesis.policies["Writers"].rule, "ANY Writers");
    assert_eq!(genesis.policies["Admins"].rule, "MAJORITY Admins");
    assert_eq!(genesis.capabilities, BTreeMap::from([
        ("V1_4_3".to_string(), true),
        ("V1_3".to_string(), false),
        ("V1_1".to_string(), false),
    ]));
}

// ============================================================================
// SECTION: Channel Profile
// ============================================================================

#[test]
fn channel_profile_references_the_consortium_by_name() {
    let profiles = reference_profiles();
    let channel = &profiles[CHANNEL_PROFILE];
    assert_eq!(channel.consortium.as_deref(), Some(SAMPLE_CONSORTIUM));
    assert!(channel.orderer.is_none());
    assert!(channel.consortiums.is_empty());
}

#[test]
fn channel_application_lists_the_same_organizations() {
    let profiles = reference_profiles();
    let application = profiles[CHANNEL_PROFILE].application.as_ref().unwrap();
    let consortium = &profiles[GENESIS_PROFILE].consortiums[SAMPLE_CONSORTIUM];
    assert_eq!(application.organizations, consortium.organizations);
    assert!(application.resources.is_none());
    assert!(application.acls.is_empty());
}

#[test]
fn application_scope_has_its_own_capability_set() {
    let profiles = reference_profiles();
    let application = profiles[CHANNEL_PROFILE].application.as_ref().unwrap();
    assert_eq!(application.capabilities, BTreeMap::from([
        ("V1_4_2".to_string(), true),
        ("V1_3".to_string(), false),
        ("V1_2".to_string(), false),
        ("V1_1".to_string(), false),
    ]));
    assert_eq!(application.policies["Admins"].rule, "MAJORITY Admins");
}

// ============================================================================
// SECTION: Boundary
// ============================================================================

#[test]
fn empty_organization_list_still_produces_both_profiles() {
    let profiles = assemble_profiles(Vec::new());
    assert_eq!(profiles.len(), 2);
    assert!(profiles[GENESIS_PROFILE].consortiums[SAMPLE_CONSORTIUM].organizations.is_empty());
    let application = profiles[CHANNEL_PROFILE].application.as_ref().unwrap();
    assert!(application.organizations.is_empty());
}
