// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Working-window configuration.
//!
//! A [`WorkHours`] is the pair of offsets since midnight that bound the
//! working day. Offsets are plain [`TimeDelta`]s and are **not** validated:
//! a window whose end is at or before its start is read as an overnight
//! shift (see [`WorkHours::length`]).

use crate::error::ParseWorkHoursError;
use chrono::TimeDelta;
use qtty::{Hour, Hours, Seconds};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A full calendar day.
pub const DAY: TimeDelta = TimeDelta::hours(24);

/// Start and end of the working day, as offsets since midnight.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct WorkHours {
    start: TimeDelta,
    end: TimeDelta,
}

impl WorkHours {
    /// 09:00 – 17:00.
    pub const STANDARD: WorkHours = WorkHours::new(TimeDelta::hours(9), TimeDelta::hours(17));

    /// Build a window from raw offsets. No range check is performed.
    #[inline]
    pub const fn new(start: TimeDelta, end: TimeDelta) -> Self {
        Self { start, end }
    }

    /// Build a window from hour/minute pairs.
    ///
    /// ```
    /// use worktime::WorkHours;
    ///
    /// let late = WorkHours::from_hm(10, 30, 19, 0);
    /// assert_eq!(late.to_string(), "10:30 - 19:00");
    /// ```
    pub const fn from_hm(start_h: i64, start_m: i64, end_h: i64, end_m: i64) -> Self {
        Self::new(
            TimeDelta::minutes(start_h * 60 + start_m),
            TimeDelta::minutes(end_h * 60 + end_m),
        )
    }

    /// Offset since midnight at which the working day begins.
    #[inline]
    pub const fn start(&self) -> TimeDelta {
        self.start
    }

    /// Offset since midnight at which the working day ends.
    #[inline]
    pub const fn end(&self) -> TimeDelta {
        self.end
    }

    /// `true` when the end does not come after the start, i.e. the shift
    /// crosses midnight (or covers the whole day).
    #[inline]
    pub fn is_overnight(&self) -> bool {
        self.end <= self.start
    }

    /// Span of the working day.
    ///
    /// `end - start`, plus one [`DAY`] when that difference is zero or
    /// negative. An overnight shift therefore gets its wrapped length and a
    /// window with identical ends covers 24 h rather than nothing.
    ///
    /// ```
    /// use chrono::TimeDelta;
    /// use worktime::WorkHours;
    ///
    /// let night = WorkHours::new(TimeDelta::hours(19), TimeDelta::hours(3));
    /// assert_eq!(night.length(), TimeDelta::hours(8));
    ///
    /// let all_day = WorkHours::new(TimeDelta::zero(), TimeDelta::zero());
    /// assert_eq!(all_day.length(), TimeDelta::hours(24));
    /// ```
    pub fn length(&self) -> TimeDelta {
        let diff = self.end - self.start;
        if diff <= TimeDelta::zero() {
            diff + DAY
        } else {
            diff
        }
    }

    /// [`length`](Self::length) as a fractional quantity of hours.
    pub fn length_hours(&self) -> Hours {
        let seconds = self.length().num_milliseconds() as f64 / 1_000.0;
        Seconds::new(seconds).to::<Hour>()
    }
}

impl Default for WorkHours {
    fn default() -> Self {
        Self::STANDARD
    }
}

// ── Display / FromStr ─────────────────────────────────────────────────────

/// Writes an offset as `HH:MM`. Offsets of a day or more keep counting hours
/// and negative offsets carry a single leading sign (`-01:30`).
fn write_offset(f: &mut fmt::Formatter<'_>, offset: TimeDelta) -> fmt::Result {
    let total = offset.num_minutes();
    let sign = if total < 0 { "-" } else { "" };
    let total = total.unsigned_abs();
    let hours = total / 60;
    let minutes = total - hours * 60;
    write!(f, "{sign}{hours:02}:{minutes:02}")
}

impl fmt::Display for WorkHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_offset(f, self.start)?;
        f.write_str(" - ")?;
        write_offset(f, self.end)
    }
}

fn parse_offset(value: &str) -> Result<TimeDelta, ParseWorkHoursError> {
    let malformed = || ParseWorkHoursError::MalformedTime {
        value: value.to_owned(),
    };
    let (h, m) = value.split_once(':').ok_or_else(malformed)?;
    let digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    if !digits(h) || m.len() != 2 || !digits(m) {
        return Err(malformed());
    }
    let hour: u32 = h.parse().map_err(|_| malformed())?;
    let minute: u32 = m.parse().map_err(|_| malformed())?;

    if hour > 24 {
        return Err(ParseWorkHoursError::HourOutOfRange { hour });
    }
    if minute > 59 {
        return Err(ParseWorkHoursError::MinuteOutOfRange { minute });
    }
    if hour == 24 && minute > 0 {
        return Err(ParseWorkHoursError::PastEndOfDay { minute });
    }
    Ok(TimeDelta::minutes(i64::from(hour) * 60 + i64::from(minute)))
}

impl FromStr for WorkHours {
    type Err = ParseWorkHoursError;

    /// Parses `"HH:MM-HH:MM"`, with optional blanks around the dash.
    ///
    /// Only unsigned digits are accepted; `24:00` is the latest offset.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = match s.split_once('-') {
            Some((start, end)) => parse_offset(start.trim())
                .and_then(|start| Ok(WorkHours::new(start, parse_offset(end.trim())?))),
            None => Err(ParseWorkHoursError::MissingSeparator {
                input: s.to_owned(),
            }),
        };
        if let Err(err) = &parsed {
            tracing::debug!(input = s, error = %err, "rejected working hours");
        }
        parsed
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for WorkHours {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for WorkHours {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(start_h: i64, end_h: i64) -> WorkHours {
        WorkHours::new(TimeDelta::hours(start_h), TimeDelta::hours(end_h))
    }

    #[test]
    fn test_standard_is_nine_to_five() {
        let std = WorkHours::default();
        assert_eq!(std.start(), TimeDelta::hours(9));
        assert_eq!(std.end(), TimeDelta::hours(17));
        assert_eq!(std.length(), TimeDelta::hours(8));
        assert!(!std.is_overnight());
    }

    #[test]
    fn test_length_wrap_boundaries() {
        // positive difference is taken as is
        assert_eq!(window(7, 14).length(), TimeDelta::hours(7));
        assert_eq!(window(0, 23).length(), TimeDelta::hours(23));
        // overnight
        assert_eq!(window(19, 3).length(), TimeDelta::hours(8));
        assert_eq!(window(23, 0).length(), TimeDelta::hours(1));
        // exactly zero wraps to a full day
        assert_eq!(window(0, 0).length(), DAY);
        assert_eq!(window(12, 12).length(), DAY);
        // a 24h end is a positive difference, not a wrap
        assert_eq!(window(0, 24).length(), DAY);
    }

    #[test]
    fn test_overnight_flag() {
        assert!(window(19, 3).is_overnight());
        assert!(window(5, 5).is_overnight());
        assert!(!window(5, 6).is_overnight());
    }

    #[test]
    fn test_length_hours_quantity() {
        let h = WorkHours::from_hm(9, 0, 17, 30).length_hours();
        assert!((h.value() - 8.5).abs() < 1e-9, "got {h}");
    }

    #[test]
    fn test_display_minutes() {
        assert_eq!(WorkHours::STANDARD.to_string(), "09:00 - 17:00");
        assert_eq!(WorkHours::from_hm(8, 45, 16, 15).to_string(), "08:45 - 16:15");
    }

    #[test]
    fn test_display_past_a_day_keeps_counting_hours() {
        assert_eq!(window(25, 30).to_string(), "25:00 - 30:00");
    }

    #[test]
    fn test_display_negative_offset_single_sign() {
        let early = WorkHours::new(TimeDelta::minutes(-90), TimeDelta::hours(17));
        assert_eq!(early.to_string(), "-01:30 - 17:00");
        let late = WorkHours::new(TimeDelta::minutes(-30), TimeDelta::zero());
        assert_eq!(late.to_string(), "-00:30 - 00:00");
    }

    #[test]
    fn test_parse_accepts_display_output() {
        let parsed: WorkHours = "09:00 - 17:00".parse().unwrap();
        assert_eq!(parsed, WorkHours::STANDARD);

        let compact: WorkHours = "19:30-03:15".parse().unwrap();
        assert_eq!(compact, WorkHours::from_hm(19, 30, 3, 15));
    }

    #[test]
    fn test_parse_rejections() {
        assert_eq!(
            "0900".parse::<WorkHours>(),
            Err(ParseWorkHoursError::MissingSeparator {
                input: "0900".into()
            })
        );
        assert_eq!(
            "9-17:00".parse::<WorkHours>(),
            Err(ParseWorkHoursError::MalformedTime { value: "9".into() })
        );
        assert_eq!(
            "09:00-17:5".parse::<WorkHours>(),
            Err(ParseWorkHoursError::MalformedTime {
                value: "17:5".into()
            })
        );
        assert_eq!(
            "25:00-17:00".parse::<WorkHours>(),
            Err(ParseWorkHoursError::HourOutOfRange { hour: 25 })
        );
        assert_eq!(
            "09:60-17:00".parse::<WorkHours>(),
            Err(ParseWorkHoursError::MinuteOutOfRange { minute: 60 })
        );
    }

    #[test]
    fn test_parse_rejects_signs_and_past_end_of_day() {
        assert_eq!(
            "+9:00 - 17:00".parse::<WorkHours>(),
            Err(ParseWorkHoursError::MalformedTime {
                value: "+9:00".into()
            })
        );
        assert_eq!(
            "09:00 - 17:+5".parse::<WorkHours>(),
            Err(ParseWorkHoursError::MalformedTime {
                value: "17:+5".into()
            })
        );
        assert_eq!(
            "09:00 - 24:59".parse::<WorkHours>(),
            Err(ParseWorkHoursError::PastEndOfDay { minute: 59 })
        );
        let full: WorkHours = "00:00 - 24:00".parse().unwrap();
        assert_eq!(full.length(), DAY);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_uses_display_string() {
        let json = serde_json::to_string(&WorkHours::STANDARD).unwrap();
        assert_eq!(json, "\"09:00 - 17:00\"");

        let back: WorkHours = serde_json::from_str("\"07:00-14:00\"").unwrap();
        assert_eq!(back, window(7, 14));

        assert!(serde_json::from_str::<WorkHours>("\"late\"").is_err());
    }
}
