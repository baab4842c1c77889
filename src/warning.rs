// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Viewer-facing timezone mismatch warnings.
//!
//! When the viewer's zone differs from the business zone, every
//! displayed time silently means something different to each party.
//! [`build_warning`] produces the one-line banner a display layer shows
//! above a slot list to make that explicit.

use crate::error::Result;
use crate::instant::Instant;
use crate::resolver::{resolve_abbreviation, TimezoneId};

/// A populated mismatch warning, produced only when viewer and business
/// identifiers differ.
///
/// The abbreviations are advisory display text resolved at the moment
/// of construction ("now"); a warning has no slot instant of its own.
/// Callers that need per-slot designations use
/// [`format_with_abbreviation`](crate::format_with_abbreviation)
/// instead.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimezoneWarning {
    /// The viewer's IANA identifier.
    pub viewer_timezone: TimezoneId,
    /// The business's IANA identifier.
    pub business_timezone: TimezoneId,
    /// Short designation of the viewer's zone at construction time.
    pub viewer_abbreviation: String,
    /// Short designation of the business's zone at construction time.
    pub business_abbreviation: String,
    /// The ready-to-display banner text.
    pub message: String,
}

impl std::fmt::Display for TimezoneWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Build a mismatch warning for a viewer/business zone pair.
///
/// Returns `Ok(None)` when the two identifiers are equal *as strings*.
/// Offset equality is deliberately not consulted: two different
/// identifiers sharing today's offset can diverge at the next DST
/// transition, so they still count as different timezones.
///
/// # Examples
///
/// ```
/// use zonebridge::{build_warning, TimezoneId};
///
/// let viewer = TimezoneId::utc();
/// let business = TimezoneId::from("Australia/Brisbane");
///
/// let warning = build_warning(&viewer, &business).unwrap().unwrap();
/// assert_eq!(
///     warning.message,
///     "Times shown in your local timezone (UTC). Business operates in AEST."
/// );
/// assert!(build_warning(&viewer, &viewer).unwrap().is_none());
/// ```
pub fn build_warning(
    viewer_timezone: &TimezoneId,
    business_timezone: &TimezoneId,
) -> Result<Option<TimezoneWarning>> {
    if viewer_timezone == business_timezone {
        return Ok(None);
    }

    let now = Instant::now();
    let viewer_abbreviation = resolve_abbreviation(now, viewer_timezone)?;
    let business_abbreviation = resolve_abbreviation(now, business_timezone)?;
    let message = format!(
        "Times shown in your local timezone ({viewer_abbreviation}). \
         Business operates in {business_abbreviation}."
    );

    Ok(Some(TimezoneWarning {
        viewer_timezone: viewer_timezone.clone(),
        business_timezone: business_timezone.clone(),
        viewer_abbreviation,
        business_abbreviation,
        message,
    }))
}
