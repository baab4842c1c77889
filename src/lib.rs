// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Timezone Conversion & Display
//!
//! This crate converts point-in-time values between a fixed "business"
//! timezone (in which appointment data is authored) and a viewer's local
//! timezone, detected at runtime.  It renders instants as localised text,
//! detects when the calendar date differs between the two perspectives,
//! and builds a human-readable mismatch warning.
//!
//! # Core types
//!
//! - [`Instant`] — an absolute, timezone-independent point in time.
//! - [`TimezoneId`] — an opaque IANA identifier (`"Australia/Brisbane"`).
//! - [`OffsetMinutes`] — signed UTC offset for one (instant, zone) pair.
//! - [`CalendarDate`] — the `(year, month, day)` an instant maps to in a zone.
//! - [`TimezoneWarning`] — the viewer-facing mismatch banner.
//! - [`TzError`] — `UnknownTimezone` and `NoRuleData`.
//!
//! # Operations
//!
//! | Function | Answers |
//! |----------|---------|
//! | [`resolve_offset`] | which UTC offset is in force at an instant? |
//! | [`resolve_abbreviation`] | which short designation applies then? |
//! | [`local_timezone`] | which zone is this runtime configured for? |
//! | [`format_in_timezone`] | how does this instant read in that zone? |
//! | [`format_with_abbreviation`] | ...with the zone designation appended? |
//! | [`calendar_date_in`] | which local calendar day is that? |
//! | [`date_changes`] | do business and viewer disagree on the day? |
//! | [`build_warning`] | what banner should the viewer see? |
//!
//! # Offset correctness
//!
//! Offsets are never constants of a zone: they move with daylight saving
//! and with political rule changes.  Every operation resolves the offset
//! for its *specific* instant against the bundled IANA database
//! (`chrono-tz`), and calendar projection uses exact minute arithmetic on
//! the UTC representation rather than any formatted-text round trip.
//!
//! # Quick Example
//! ```rust
//! use zonebridge::{
//!     build_warning, date_changes, format_with_abbreviation, Instant, TimezoneId,
//! };
//!
//! let slot = Instant::parse_rfc3339("2024-06-16T23:30:00Z").unwrap();
//! let business = TimezoneId::from("Australia/Brisbane");
//! let viewer = TimezoneId::from("America/Los_Angeles");
//!
//! // 9:30 AM June 17 in Brisbane, 4:30 PM June 16 in Los Angeles.
//! assert!(date_changes(slot, &business, &viewer).unwrap());
//! assert_eq!(
//!     format_with_abbreviation(slot, &business).unwrap(),
//!     "9:30 AM AEST"
//! );
//!
//! if let Some(warning) = build_warning(&viewer, &business).unwrap() {
//!     println!("{warning}");
//! }
//! ```

mod calendar;
mod error;
mod format;
pub(crate) mod instant;
pub(crate) mod resolver;
mod warning;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use calendar::{calendar_date_in, date_changes, CalendarDate};
pub use error::{Result, TzError};
pub use format::{
    convert_to_viewer, convert_to_viewer_with_date, format_in_timezone,
    format_with_abbreviation, FormatStyle,
};
pub use instant::Instant;
pub use resolver::{
    local_timezone, resolve_abbreviation, resolve_offset, OffsetMinutes, TimezoneId,
};
pub use warning::{build_warning, TimezoneWarning};
