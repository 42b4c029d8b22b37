// crates/channelgen-core/src/lib.rs
// ============================================================================
// Module: channelgen Core Library
// Description: Consortium network-configuration document generator.
// Purpose: Derive organizations, assemble profiles, and emit the document.
// Dependencies: serde, serde_yaml, thiserror
// ============================================================================

//! ## Overview
//! This crate builds the static network-configuration document a consortium
//! bootstrap tool consumes. One run is a single linear pipeline: derive one
//! organization record per input (key, anchor port) entry, embed the records
//! into the two fixed profile templates, wrap the profiles into the document
//! root, and render YAML. Nothing is mutated after construction and nothing
//! outlives the run.
//!
//! ### Design Notes
//! - Output is deterministic: input entries arrive in a `BTreeMap` and every
//!   named collection in the schema is a `BTreeMap`, so regenerating with the
//!   same table produces byte-identical YAML.
//! - Serialized field names are a compatibility contract with the downstream
//!   consumer and are pinned with explicit serde renames in [`model`].
//! - Both profiles carry the same derived organization list; the assembler
//!   installs it in both places in one pass and entities are immutable
//!   afterwards.
//!
//! ## Index
//! - Schema: [`model`]
//! - Pipeline: [`derive`], [`profiles`], [`emit`], [`generate`]
//! - Errors: [`GenError`], [`GenResult`]

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod derive;
pub mod emit;
pub mod error;
pub mod model;
pub mod profiles;

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use derive::derive_organizations;
pub use emit::DEFAULT_OUTPUT_FILENAME;
pub use emit::build_document;
pub use emit::render_document;
pub use emit::write_document;
pub use error::GenError;
pub use error::GenResult;
pub use model::TopLevel;
pub use profiles::CHANNEL_PROFILE;
pub use profiles::GENESIS_PROFILE;
pub use profiles::SAMPLE_CONSORTIUM;
pub use profiles::assemble_profiles;

// ============================================================================
// SECTION: Pipeline Entry
// ============================================================================

/// Runs the full derive-assemble-wrap pipeline for an input table.
///
/// # Errors
/// Returns [`GenError::InvalidInput`] when an entry fails validation.
///
/// # Examples
/// ```
/// use std::collections::BTreeMap;
///
/// use channelgen_core::GENESIS_PROFILE;
/// use channelgen_core::generate;
///
/// # fn main() -> Result<(), channelgen_core::GenError> {
/// let entries = BTreeMap::from([("org1".to_string(), 7051)]);
/// let document = generate(&entries)?;
/// assert!(document.profiles.contains_key(GENESIS_PROFILE));
/// # Ok(())
/// # }
/// ```
pub fn generate(entries: &BTreeMap<String, u32>) -> GenResult<TopLevel> {
    let organizations = derive_organizations(entries)?;
    Ok(build_document(assemble_profiles(organizations)))
}
