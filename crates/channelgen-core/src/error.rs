// crates/channelgen-core/src/error.rs
// ============================================================================
// Module: Generator Errors
// Description: Failure taxonomy for the configuration generator.
// Purpose: Classify input, serialization, and write failures for callers.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! Every failure in the generator pipeline is fatal: the run stops and the
//! caller reports the error. There is no retry or partial-success path, so the
//! taxonomy stays small and the variants carry rendered messages only.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

// ============================================================================
// SECTION: Error Type
// ============================================================================

/// Errors raised while deriving, rendering, or writing the document.
///
/// # Invariants
/// - Variant meanings are stable for automation and tests.
#[derive(Debug, Error)]
pub enum GenError {
    /// Malformed organization key or out-of-range anchor port.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// YAML rendering of the document failed.
    #[error("serialization failure: {0}")]
    Serialization(String),
    /// Destination file could not be written.
    #[error("write failure: {0}")]
    Write(String),
}

/// Result alias for generator operations.
pub type GenResult<T> = Result<T, GenError>;
