// crates/channelgen-core/src/emit.rs
// ============================================================================
// Module: Document Emitter
// Description: Wrap profiles into the document root and write it as YAML.
// Purpose: Render the document and persist it atomically to disk.
// Dependencies: serde_yaml
// ============================================================================

//! ## Overview
//! The emitter is pure structural glue plus the serialization boundary: it
//! wraps the assembled profiles into a [`TopLevel`] document, renders YAML,
//! and writes the result. Writes go through a temporary file in the
//! destination directory followed by a rename, so a failed run never leaves a
//! half-written document behind.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::GenError;
use crate::error::GenResult;
use crate::model::Profile;
use crate::model::TopLevel;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default output file name in the working directory.
pub const DEFAULT_OUTPUT_FILENAME: &str = "configtx.yaml";

// ============================================================================
// SECTION: Document Assembly and Rendering
// ============================================================================

/// Wraps named profiles into the document root.
///
/// The optional top-level blocks stay unset; they belong to the schema
/// contract but carry no content in a generated document.
#[must_use]
pub fn build_document(profiles: BTreeMap<String, Profile>) -> TopLevel {
    TopLevel {
        profiles,
        organizations: None,
        channel: None,
        application: None,
        orderer: None,
        capabilities: None,
        resources: None,
    }
}

/// Renders the document as YAML.
///
/// # Errors
/// Returns [`GenError::Serialization`] when the document cannot be encoded.
pub fn render_document(document: &TopLevel) -> GenResult<String> {
    serde_yaml::to_string(document).map_err(|err| GenError::Serialization(err.to_string()))
}

// ============================================================================
// SECTION: File Output
// ============================================================================

/// Renders the document and writes it atomically to the destination path.
///
/// # Errors
/// Returns [`GenError::Serialization`] when rendering fails and
/// [`GenError::Write`] when the destination cannot be written.
pub fn write_document(path: &Path, document: &TopLevel) -> GenResult<()> {
    let rendered = render_document(document)?;
    write_atomic(path, &rendered)
}

/// Writes contents to a sibling temporary file and renames it into place.
fn write_atomic(path: &Path, contents: &str) -> GenResult<()> {
    let file_name = path.file_name().ok_or_else(|| {
        GenError::Write(format!("destination `{}` has no file name", path.display()))
    })?;
    let mut temp_name = file_name.to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);
    fs::write(&temp_path, contents)
        .map_err(|err| GenError::Write(format!("{}: {err}", temp_path.display())))?;
    set_permissive_mode(&temp_path)?;
    fs::rename(&temp_path, path).map_err(|err| {
        let _ = fs::remove_file(&temp_path);
        GenError::Write(format!("{}: {err}", path.display()))
    })
}

/// Widens permissions on the freshly written file.
#[cfg(unix)]
fn set_permissive_mode(path: &Path) -> GenResult<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o666))
        .map_err(|err| GenError::Write(format!("{}: {err}", path.display())))
}

/// Permissions are left at platform defaults on non-unix targets.
#[cfg(not(unix))]
fn set_permissive_mode(_path: &Path) -> GenResult<()> {
    Ok(())
}
