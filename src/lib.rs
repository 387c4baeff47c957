// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Working-day arithmetic
//!
//! This crate annotates `chrono` instants with a configurable working window
//! (e.g. 09:00–17:00) and a Monday–Friday working week, and answers questions
//! such as "is this within office hours?", "how far is the end of the day?"
//! and "when does the next working day start?".
//!
//! # Core types
//!
//! - [`WorkPeriod<Tz>`] — an instant plus its working window. Immutable;
//!   every navigation method returns a new value carrying the same window.
//! - [`WorkHours`] — the window itself, as offsets since midnight. Parses
//!   from and prints as `HH:MM - HH:MM`; (de)serialisable with the `serde`
//!   feature.
//! - [`DAY`] — a full calendar day as a `TimeDelta`.
//!
//! # Overnight windows
//!
//! A window whose end is at or before its start is read as wrapping past
//! midnight: `19:00 - 03:00` lasts 8 h and `00:00 - 00:00` lasts 24 h.
//! [`WorkHours::length`] is the only place that rule is applied.
//!
//! # Example
//!
//! ```
//! use chrono::{TimeDelta, TimeZone, Utc};
//! use worktime::{WorkHours, WorkPeriod};
//!
//! let hours: WorkHours = "07:00 - 14:00".parse().unwrap();
//! let t = WorkPeriod::with_hours(Utc.with_ymd_and_hms(2018, 10, 12, 10, 0, 0).unwrap(), hours);
//!
//! assert!(t.during_office_hours());
//! assert_eq!(t.from_start(), TimeDelta::hours(3));
//!
//! let evening = t + TimeDelta::hours(11);
//! assert!(evening.after_end());
//! assert_eq!(evening.work_hours(), hours);
//! ```

mod error;
mod hours;
mod period;
pub mod weekday;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use error::ParseWorkHoursError;
pub use hours::{WorkHours, DAY};
pub use period::WorkPeriod;
