// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types for timezone resolution.
//!
//! Only two things can fail in this crate, and both originate in the
//! offset resolver: the caller handed us an identifier the IANA database
//! does not know, or the database cannot project the requested instant.
//! Every other operation is total over well-formed inputs.

use crate::instant::Instant;
use thiserror::Error;

/// Errors surfaced by offset resolution and the operations built on it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TzError {
    /// The identifier is not an entry in the IANA timezone database.
    ///
    /// Not recoverable locally; callers should fall back to a safe
    /// default such as UTC display and flag the condition.
    #[error("unknown timezone identifier '{id}'")]
    UnknownTimezone {
        /// The identifier as supplied by the caller.
        id: String,
    },

    /// The database has no usable rule data for the requested instant.
    ///
    /// In practice this means the instant cannot be projected into the
    /// zone's local calendar (it falls outside the representable range
    /// once the offset is applied).
    #[error("no timezone rule data for '{id}' at {instant}")]
    NoRuleData {
        /// The zone whose rules were consulted.
        id: String,
        /// The instant that could not be projected.
        instant: Instant,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TzError>;
