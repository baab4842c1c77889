// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Absolute, timezone-independent instants.
//!
//! [`Instant`] is the sole temporal input of this crate: a point on the
//! UTC axis with millisecond-or-better precision, immutable once
//! constructed.  It carries no zone information — projecting it into a
//! zone's local calendar is the job of the resolver and the conversion
//! engine, never of the instant itself.
//!
//! Internally it wraps a `chrono::DateTime<Utc>`, so construction from
//! epoch milliseconds, RFC 3339 text (the representation appointment
//! data arrives in), or the current wall clock all come for free.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};

/// An absolute point in time, independent of any timezone.
///
/// `Instant` is `Copy` and layout-identical to `DateTime<Utc>`.
///
/// # Examples
///
/// ```
/// use zonebridge::Instant;
///
/// let slot = Instant::parse_rfc3339("2024-06-15T13:30:00Z").unwrap();
/// assert_eq!(slot.epoch_millis(), 1_718_458_200_000);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Instant(DateTime<Utc>);

impl Instant {
    // ── constructors ──────────────────────────────────────────────────

    /// Create from a UTC datetime.
    #[inline]
    pub const fn from_utc(datetime: DateTime<Utc>) -> Self {
        Self(datetime)
    }

    /// Create from milliseconds since the Unix epoch.
    ///
    /// Returns `None` if the value falls outside chrono's representable
    /// range.
    #[inline]
    pub fn from_epoch_millis(millis: i64) -> Option<Self> {
        DateTime::<Utc>::from_timestamp_millis(millis).map(Self)
    }

    /// Parse an RFC 3339 / ISO-8601 timestamp such as
    /// `"2024-06-15T13:30:00Z"` or `"2024-06-15T23:30:00+10:00"`.
    ///
    /// A trailing offset is honoured and normalised away: the resulting
    /// instant is the same absolute point in time regardless of the
    /// offset the text was written in.
    pub fn parse_rfc3339(s: &str) -> Result<Self, chrono::ParseError> {
        DateTime::parse_from_rfc3339(s).map(|dt| Self(dt.with_timezone(&Utc)))
    }

    /// The current instant from the system clock.
    #[inline]
    pub fn now() -> Self {
        Self(Utc::now())
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// Milliseconds since the Unix epoch.
    #[inline]
    pub fn epoch_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// The underlying UTC datetime.
    #[inline]
    pub const fn to_utc(&self) -> DateTime<Utc> {
        self.0
    }

    /// Naive (offset-less) view on the UTC axis, used by the resolver
    /// and the calendar projection.
    #[inline]
    pub(crate) fn naive_utc(&self) -> NaiveDateTime {
        self.0.naive_utc()
    }
}

impl std::fmt::Display for Instant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_rfc3339_opts(SecondsFormat::Secs, true))
    }
}

impl From<DateTime<Utc>> for Instant {
    #[inline]
    fn from(datetime: DateTime<Utc>) -> Self {
        Self(datetime)
    }
}

impl From<Instant> for DateTime<Utc> {
    #[inline]
    fn from(instant: Instant) -> Self {
        instant.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_millis_roundtrip() {
        let instant = Instant::from_epoch_millis(1_718_458_200_000).unwrap();
        assert_eq!(instant.epoch_millis(), 1_718_458_200_000);
    }

    #[test]
    fn from_epoch_millis_rejects_out_of_range() {
        assert!(Instant::from_epoch_millis(i64::MAX).is_none());
    }

    #[test]
    fn parse_rfc3339_normalises_offset() {
        let zulu = Instant::parse_rfc3339("2024-06-15T13:30:00Z").unwrap();
        let offset = Instant::parse_rfc3339("2024-06-15T23:30:00+10:00").unwrap();
        assert_eq!(zulu, offset);
    }

    #[test]
    fn parse_rfc3339_rejects_garbage() {
        assert!(Instant::parse_rfc3339("not a timestamp").is_err());
    }

    #[test]
    fn display_is_rfc3339_utc() {
        let instant = Instant::parse_rfc3339("2024-06-15T23:30:00+10:00").unwrap();
        assert_eq!(instant.to_string(), "2024-06-15T13:30:00Z");
    }

    #[test]
    fn ordering_follows_the_utc_axis() {
        let earlier = Instant::parse_rfc3339("2024-06-15T13:30:00Z").unwrap();
        let later = Instant::parse_rfc3339("2024-06-15T13:30:01Z").unwrap();
        assert!(earlier < later);
    }
}
