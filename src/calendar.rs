// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar-date projection and boundary-crossing detection.
//!
//! The same instant maps to different `(year, month, day)` triples in
//! different zones: a slot at 11:30 PM business time can be "tomorrow"
//! for the viewer.  [`calendar_date_in`] performs that projection and
//! [`date_changes`] compares two of them.
//!
//! The projection is **exact offset arithmetic** on the instant's UTC
//! representation: resolve the minute offset, add it, read the calendar
//! fields.  It deliberately never round-trips through formatted locale
//! text — a format/parse round trip is lossy inside the skipped or
//! ambiguous hour around a DST transition and can silently land on the
//! wrong calendar day.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

use crate::error::{Result, TzError};
use crate::instant::Instant;
use crate::resolver::{resolve_offset, TimezoneId};

/// Project `instant` into `timezone`'s local frame: resolve the minute
/// offset and apply it to the UTC representation.
///
/// This is the single projection path shared by [`calendar_date_in`]
/// and the formatting engine, so both agree on which instants are
/// projectable: an instant whose shifted local time falls outside the
/// representable range is [`TzError::NoRuleData`] for every operation.
pub(crate) fn project_local(instant: Instant, timezone: &TimezoneId) -> Result<NaiveDateTime> {
    let offset = resolve_offset(instant, timezone)?;
    instant
        .naive_utc()
        .checked_add_signed(Duration::minutes(i64::from(offset.value())))
        .ok_or_else(|| TzError::NoRuleData {
            id: timezone.as_str().to_string(),
            instant,
        })
}

/// The `(year, month, day)` triple an instant maps to in some zone.
///
/// Compared structurally, never by elapsed time.  Ordering is
/// chronological (derived field order: year, then month, then day).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalendarDate {
    /// Proleptic Gregorian year.
    pub year: i32,
    /// Month of the year, 1–12.
    pub month: u32,
    /// Day of the month, 1–31.
    pub day: u32,
}

impl CalendarDate {
    /// Assemble a date from its fields.
    #[inline]
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }
}

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl From<NaiveDate> for CalendarDate {
    #[inline]
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

/// The calendar date `instant` falls on in `timezone`'s local frame.
///
/// # Examples
///
/// ```
/// use zonebridge::{calendar_date_in, CalendarDate, Instant, TimezoneId};
///
/// let instant = Instant::parse_rfc3339("2024-06-16T23:30:00Z").unwrap();
/// let brisbane = TimezoneId::from("Australia/Brisbane");
/// assert_eq!(
///     calendar_date_in(instant, &brisbane).unwrap(),
///     CalendarDate::new(2024, 6, 17)
/// );
/// ```
pub fn calendar_date_in(instant: Instant, timezone: &TimezoneId) -> Result<CalendarDate> {
    Ok(project_local(instant, timezone)?.date().into())
}

/// Whether `instant` falls on different calendar days in the business
/// and viewer zones.
///
/// Any differing field — year, month or day — counts as a crossing.
/// This is the detector a display layer uses to append a "next day"
/// marker to a slot shown near the business zone's midnight.
pub fn date_changes(
    instant: Instant,
    business_timezone: &TimezoneId,
    viewer_timezone: &TimezoneId,
) -> Result<bool> {
    Ok(calendar_date_in(instant, business_timezone)? != calendar_date_in(instant, viewer_timezone)?)
}
