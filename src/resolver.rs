// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! IANA offset resolution — a thin adapter over `chrono-tz`.
//!
//! This module answers exactly two questions about a
//! (instant, timezone) pair, plus one about the ambient environment:
//!
//! - [`resolve_offset`] — which UTC offset is in force at that instant?
//! - [`resolve_abbreviation`] — which short designation ("AEST", "PDT")
//!   applies at that instant?
//! - [`local_timezone`] — which IANA zone is the runtime configured for?
//!
//! The offset is a property of the *pair*, never of the zone alone: the
//! same zone legitimately returns different offsets six months apart
//! (daylight saving) or decades apart (rule changes).  Nothing here may
//! be cached keyed only by [`TimezoneId`].

use chrono::{Offset, TimeZone};
use chrono_tz::{OffsetName, Tz};

use crate::error::{Result, TzError};
use crate::instant::Instant;

// ═══════════════════════════════════════════════════════════════════════════
// TimezoneId
// ═══════════════════════════════════════════════════════════════════════════

/// An opaque IANA timezone identifier such as `"Australia/Brisbane"`.
///
/// Construction performs no validation; an identifier the database does
/// not recognise surfaces as [`TzError::UnknownTimezone`] on first use.
/// Two identifiers compare equal only when their strings do — two zones
/// sharing a current offset are still *different* timezones, since a
/// future DST transition can make them diverge.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TimezoneId(String);

impl TimezoneId {
    /// Wrap an identifier string.
    #[inline]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The UTC zone.
    #[inline]
    pub fn utc() -> Self {
        Self("UTC".to_string())
    }

    /// The identifier as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolve against the bundled IANA database.
    pub(crate) fn lookup(&self) -> Result<Tz> {
        self.0.parse::<Tz>().map_err(|_| TzError::UnknownTimezone {
            id: self.0.clone(),
        })
    }
}

impl std::fmt::Display for TimezoneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TimezoneId {
    #[inline]
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for TimezoneId {
    #[inline]
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for TimezoneId {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// OffsetMinutes
// ═══════════════════════════════════════════════════════════════════════════

/// A signed UTC offset in minutes, valid for one (instant, zone) pair.
///
/// Real-world offsets are not whole hours: India sits at +330,
/// Chatham Island at +765 outside DST.  Displays as `±HH:MM`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct OffsetMinutes(i32);

impl OffsetMinutes {
    /// Create from a raw minute count.
    #[inline]
    pub const fn new(minutes: i32) -> Self {
        Self(minutes)
    }

    /// The underlying signed minute count.
    #[inline]
    pub const fn value(&self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for OffsetMinutes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.0 < 0 { '-' } else { '+' };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{:02}:{:02}", sign, abs / 60, abs % 60)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Resolution
// ═══════════════════════════════════════════════════════════════════════════

/// The database reports offsets in seconds, and pre-standardization
/// local-mean-time entries carry sub-minute components (New York LMT is
/// −4:56:02).  Round to the nearest minute; plain `/ 60` truncates
/// toward zero, which lands negative offsets on the wrong minute.
fn nearest_minute(seconds: i32) -> i32 {
    (seconds + 30 * seconds.signum()) / 60
}

/// UTC offset in force in `timezone` at `instant`.
///
/// The result reflects the rule set for the *given* instant — daylight
/// saving and historical boundary changes included — not for "now".
///
/// # Examples
///
/// ```
/// use zonebridge::{resolve_offset, Instant, TimezoneId};
///
/// let june = Instant::parse_rfc3339("2024-06-15T13:30:00Z").unwrap();
/// let brisbane = TimezoneId::from("Australia/Brisbane");
/// assert_eq!(resolve_offset(june, &brisbane).unwrap().value(), 600);
/// ```
pub fn resolve_offset(instant: Instant, timezone: &TimezoneId) -> Result<OffsetMinutes> {
    let zone = timezone.lookup()?;
    let offset = zone.offset_from_utc_datetime(&instant.naive_utc());
    Ok(OffsetMinutes::new(nearest_minute(offset.fix().local_minus_utc())))
}

/// Short display designation in force in `timezone` at `instant`.
///
/// A display hint only: abbreviations are not stable across database
/// updates and must never be parsed back into a zone.  Modern tzdata
/// carries no alphabetic designation for many zones; those render as
/// the numeric offset (`"+05:45"`), matching the database's own
/// fallback convention.
pub fn resolve_abbreviation(instant: Instant, timezone: &TimezoneId) -> Result<String> {
    let zone = timezone.lookup()?;
    let offset = zone.offset_from_utc_datetime(&instant.naive_utc());
    match offset.abbreviation() {
        Some(abbr) => Ok(abbr.to_string()),
        None => Ok(OffsetMinutes::new(nearest_minute(offset.fix().local_minus_utc())).to_string()),
    }
}

/// The IANA zone the ambient execution environment is configured for.
///
/// Falls back to `"UTC"` when the environment cannot report one; the
/// identifier is returned as-is otherwise, so an exotic system zone
/// still fails loudly (as [`TzError::UnknownTimezone`]) at resolution
/// time rather than being silently remapped here.
pub fn local_timezone() -> TimezoneId {
    match iana_time_zone::get_timezone() {
        Ok(id) => TimezoneId::new(id),
        Err(_) => TimezoneId::utc(),
    }
}
