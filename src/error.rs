// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Errors raised while reading a working window from text.

use thiserror::Error;

/// Failure to parse a [`WorkHours`](crate::WorkHours) from `"HH:MM-HH:MM"`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseWorkHoursError {
    /// The input has no `-` between the start and end times.
    #[error("missing '-' separator in working hours {input:?}")]
    MissingSeparator { input: String },

    /// One side is not of the form `HH:MM`.
    #[error("malformed time of day {value:?}, expected HH:MM")]
    MalformedTime { value: String },

    /// Hour component above 24.
    #[error("hour {hour} out of range 0-24")]
    HourOutOfRange { hour: u32 },

    /// Minute component above 59.
    #[error("minute {minute} out of range 0-59")]
    MinuteOutOfRange { minute: u32 },

    /// `24:MM` with a non-zero minute.
    #[error("24:{minute:02} is past the end of the day")]
    PastEndOfDay { minute: u32 },
}
