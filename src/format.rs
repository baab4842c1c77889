// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Localised text rendering of instants in a target timezone.
//!
//! Rendering follows the same pipeline everywhere: resolve the minute
//! offset for the (instant, zone) pair, apply it, format the resulting
//! local fields with en-US text conventions (full weekday and month
//! names, 12-hour clock).  Two profiles exist:
//!
//! | Style | Rendering |
//! |-------|-----------|
//! | [`FormatStyle::TimeOnly`] | `2:30 PM` |
//! | [`FormatStyle::FullDate`] | `Thursday, March 14, 2024, 2:30 PM` |

use crate::calendar::project_local;
use crate::error::Result;
use crate::instant::Instant;
use crate::resolver::{resolve_abbreviation, TimezoneId};

/// strftime profile for the 12-hour clock time, e.g. `11:30 PM`.
const TIME_ONLY: &str = "%-I:%M %p";

/// strftime profile for the full spelled-out date and time,
/// e.g. `Saturday, June 15, 2024, 11:30 PM`.
const FULL_DATE: &str = "%A, %B %-d, %Y, %-I:%M %p";

/// Which display profile [`format_in_timezone`] renders.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FormatStyle {
    /// Hour and minute on a 12-hour clock: `"2:30 PM"`.
    TimeOnly,
    /// Weekday, month name, day, year and 12-hour time:
    /// `"Thursday, March 14, 2024, 2:30 PM"`.
    FullDate,
}

impl FormatStyle {
    fn strftime(self) -> &'static str {
        match self {
            Self::TimeOnly => TIME_ONLY,
            Self::FullDate => FULL_DATE,
        }
    }
}

/// Render `instant` as localised text in `timezone`'s local frame.
///
/// # Examples
///
/// ```
/// use zonebridge::{format_in_timezone, FormatStyle, Instant, TimezoneId};
///
/// let slot = Instant::parse_rfc3339("2024-06-15T13:30:00Z").unwrap();
/// let brisbane = TimezoneId::from("Australia/Brisbane");
/// let text = format_in_timezone(slot, &brisbane, FormatStyle::TimeOnly).unwrap();
/// assert_eq!(text, "11:30 PM");
/// ```
pub fn format_in_timezone(
    instant: Instant,
    timezone: &TimezoneId,
    style: FormatStyle,
) -> Result<String> {
    let local = project_local(instant, timezone)?;
    Ok(local.format(style.strftime()).to_string())
}

/// [`FormatStyle::TimeOnly`] rendering followed by the zone's short
/// designation: `"11:30 PM AEST"`.
///
/// Unlike [`build_warning`](crate::build_warning), the designation here
/// is resolved at the *slot's* instant, so a slot on the far side of a
/// DST transition carries the designation that will actually be in
/// force then.
pub fn format_with_abbreviation(instant: Instant, timezone: &TimezoneId) -> Result<String> {
    let time = format_in_timezone(instant, timezone, FormatStyle::TimeOnly)?;
    let abbreviation = resolve_abbreviation(instant, timezone)?;
    Ok(format!("{time} {abbreviation}"))
}

/// Per-slot convenience: the slot's start time in the viewer's frame.
///
/// Equivalent to [`format_in_timezone`] with [`FormatStyle::TimeOnly`];
/// exists because display layers call it once per listed slot.
#[inline]
pub fn convert_to_viewer(instant: Instant, viewer_timezone: &TimezoneId) -> Result<String> {
    format_in_timezone(instant, viewer_timezone, FormatStyle::TimeOnly)
}

/// Per-slot convenience: the slot's start in the viewer's frame with
/// the full spelled-out date.
///
/// Equivalent to [`format_in_timezone`] with [`FormatStyle::FullDate`].
#[inline]
pub fn convert_to_viewer_with_date(
    instant: Instant,
    viewer_timezone: &TimezoneId,
) -> Result<String> {
    format_in_timezone(instant, viewer_timezone, FormatStyle::FullDate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TzError;

    fn at(rfc3339: &str) -> Instant {
        Instant::parse_rfc3339(rfc3339).unwrap()
    }

    #[test]
    fn time_only_uses_unpadded_twelve_hour_clock() {
        let brisbane = TimezoneId::from("Australia/Brisbane");
        let text =
            format_in_timezone(at("2024-06-15T13:30:00Z"), &brisbane, FormatStyle::TimeOnly)
                .unwrap();
        assert_eq!(text, "11:30 PM");
    }

    #[test]
    fn time_only_morning_in_viewer_zone() {
        let los_angeles = TimezoneId::from("America/Los_Angeles");
        let text = convert_to_viewer(at("2024-06-15T13:30:00Z"), &los_angeles).unwrap();
        assert_eq!(text, "6:30 AM");
    }

    #[test]
    fn full_date_spells_everything_out() {
        let brisbane = TimezoneId::from("Australia/Brisbane");
        let text =
            convert_to_viewer_with_date(at("2024-06-15T13:30:00Z"), &brisbane).unwrap();
        assert_eq!(text, "Saturday, June 15, 2024, 11:30 PM");
    }

    #[test]
    fn full_date_example_from_march() {
        let new_york = TimezoneId::from("America/New_York");
        // 18:30Z − 4:00 (EDT) = 2:30 PM on Thursday March 14.
        let text =
            format_in_timezone(at("2024-03-14T18:30:00Z"), &new_york, FormatStyle::FullDate)
                .unwrap();
        assert_eq!(text, "Thursday, March 14, 2024, 2:30 PM");
    }

    #[test]
    fn abbreviation_is_appended_with_a_single_space() {
        let brisbane = TimezoneId::from("Australia/Brisbane");
        let text = format_with_abbreviation(at("2024-06-15T13:30:00Z"), &brisbane).unwrap();
        assert_eq!(text, "11:30 PM AEST");
    }

    #[test]
    fn abbreviation_follows_the_slot_instant_across_dst() {
        let new_york = TimezoneId::from("America/New_York");
        let winter = format_with_abbreviation(at("2024-01-15T17:30:00Z"), &new_york).unwrap();
        let summer = format_with_abbreviation(at("2024-07-15T16:30:00Z"), &new_york).unwrap();
        assert_eq!(winter, "12:30 PM EST");
        assert_eq!(summer, "12:30 PM EDT");
    }

    #[test]
    fn noon_and_midnight_render_as_twelve() {
        let utc = TimezoneId::utc();
        let noon = convert_to_viewer(at("2024-06-15T12:00:00Z"), &utc).unwrap();
        let midnight = convert_to_viewer(at("2024-06-15T00:00:00Z"), &utc).unwrap();
        assert_eq!(noon, "12:00 PM");
        assert_eq!(midnight, "12:00 AM");
    }

    #[test]
    fn unknown_zone_propagates() {
        let bogus = TimezoneId::from("Atlantis/Lost_City");
        assert!(matches!(
            format_in_timezone(at("2024-06-15T13:30:00Z"), &bogus, FormatStyle::TimeOnly),
            Err(TzError::UnknownTimezone { .. })
        ));
    }

    #[test]
    fn unprojectable_instant_is_not_rendered() {
        let brisbane = TimezoneId::from("Australia/Brisbane");
        // Shifting the last representable millisecond by +10:00 leaves
        // the representable range; the formatter must refuse it the
        // same way the calendar projection does.
        let edge = Instant::from_epoch_millis(8_210_266_876_799_999).unwrap();
        assert!(matches!(
            format_in_timezone(edge, &brisbane, FormatStyle::TimeOnly),
            Err(TzError::NoRuleData { .. })
        ));
    }
}
