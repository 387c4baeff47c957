// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Instants annotated with a working window.
//!
//! [`WorkPeriod<Tz>`] pairs a `chrono::DateTime<Tz>` with a [`WorkHours`]
//! window. Every query is a pure function of those two fields and every
//! navigation method returns a new value that carries the same window.
//!
//! Day boundaries are taken in the instant's own time zone: "midnight" is
//! the first instant of the local calendar day, and window offsets are
//! elapsed time from it.

use crate::hours::WorkHours;
use crate::weekday;
use chrono::{
    DateTime, Datelike, Days, NaiveDate, NaiveTime, Offset, TimeDelta, TimeZone, Utc, Weekday,
};
use qtty::Hours;
use std::fmt;
use std::ops::{Add, Sub};

const QUARTERS_PER_DAY: i64 = 24 * 4;

/// A point in time plus the working window used to interpret it.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use worktime::WorkPeriod;
///
/// // Friday afternoon
/// let now = WorkPeriod::standard(Utc.with_ymd_and_hms(2018, 10, 12, 15, 0, 0).unwrap());
/// assert!(now.during_office_hours());
///
/// let next = now.next_work_day_start();
/// assert_eq!(next.to_string(), "2018-10-15T09:00:00 [Mon] (09:00 - 17:00)");
/// ```
#[derive(Debug, Clone)]
pub struct WorkPeriod<Tz: TimeZone = Utc> {
    instant: DateTime<Tz>,
    hours: WorkHours,
}

impl<Tz: TimeZone> Copy for WorkPeriod<Tz> where Tz::Offset: Copy {}

impl<Tz: TimeZone> WorkPeriod<Tz> {
    // ── constructors ──────────────────────────────────────────────────

    /// `instant` with the 09:00 – 17:00 window.
    #[inline]
    pub fn standard(instant: DateTime<Tz>) -> Self {
        Self::with_hours(instant, WorkHours::STANDARD)
    }

    /// `instant` with a caller-supplied window. The offsets are not checked.
    #[inline]
    pub fn new(instant: DateTime<Tz>, day_start: TimeDelta, day_end: TimeDelta) -> Self {
        Self::with_hours(instant, WorkHours::new(day_start, day_end))
    }

    /// `instant` with a window taken from configuration.
    #[inline]
    pub fn with_hours(instant: DateTime<Tz>, hours: WorkHours) -> Self {
        Self { instant, hours }
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// The wrapped timestamp.
    #[inline]
    pub fn instant(&self) -> &DateTime<Tz> {
        &self.instant
    }

    /// Unwrap into the timestamp.
    #[inline]
    pub fn into_instant(self) -> DateTime<Tz> {
        self.instant
    }

    #[inline]
    pub fn work_hours(&self) -> WorkHours {
        self.hours
    }

    #[inline]
    pub fn day_start(&self) -> TimeDelta {
        self.hours.start()
    }

    #[inline]
    pub fn day_end(&self) -> TimeDelta {
        self.hours.end()
    }

    /// Calendar weekday of the instant.
    #[inline]
    pub fn weekday(&self) -> Weekday {
        self.instant.weekday()
    }

    /// Calendar date of the instant, in its own time zone.
    #[inline]
    pub fn date_naive(&self) -> NaiveDate {
        self.instant.date_naive()
    }

    // ── predicates ────────────────────────────────────────────────────

    /// `false` on Saturday and Sunday, `true` otherwise.
    #[inline]
    pub fn is_work_day(&self) -> bool {
        weekday::is_work_day(self.weekday())
    }

    /// Span of the working window; see [`WorkHours::length`].
    #[inline]
    pub fn length(&self) -> TimeDelta {
        self.hours.length()
    }

    /// Span of the working window in hours.
    #[inline]
    pub fn length_hours(&self) -> Hours {
        self.hours.length_hours()
    }

    /// Time elapsed since the start of the instant's calendar day.
    ///
    /// Measured as absolute time from local midnight, so it lies in
    /// `[0, 24h)` except on a day that a daylight-saving change makes longer.
    pub fn since_midnight(&self) -> TimeDelta {
        self.instant.clone() - self.start_of_day(self.date_naive())
    }

    /// `true` strictly before the start of the window.
    #[inline]
    pub fn before_start(&self) -> bool {
        self.since_midnight() < self.hours.start()
    }

    /// `true` strictly after the end of the window.
    ///
    /// Together with [`before_start`](Self::before_start) this makes both
    /// boundaries part of the working day.
    #[inline]
    pub fn after_end(&self) -> bool {
        self.since_midnight() > self.hours.end()
    }

    /// Work day, not before the start and not after the end.
    pub fn during_office_hours(&self) -> bool {
        self.is_work_day() && !self.before_start() && !self.after_end()
    }

    /// Signed offset from the start of the window; negative before it.
    #[inline]
    pub fn from_start(&self) -> TimeDelta {
        self.since_midnight() - self.hours.start()
    }

    /// Signed offset from the end of the window.
    ///
    /// Uses the same sign as [`from_start`](Self::from_start): negative while
    /// the end is still ahead, positive once it has passed. It is not a
    /// countdown.
    ///
    /// ```
    /// use chrono::{TimeDelta, TimeZone, Utc};
    /// use worktime::WorkPeriod;
    ///
    /// let t = WorkPeriod::standard(Utc.with_ymd_and_hms(2018, 10, 10, 15, 0, 0).unwrap());
    /// assert_eq!(t.until_end(), TimeDelta::hours(-2));
    /// ```
    #[inline]
    pub fn until_end(&self) -> TimeDelta {
        self.since_midnight() - self.hours.end()
    }

    /// `true` when `other` falls on the same year, month and day of month.
    /// Time of day is ignored.
    pub fn is_same_day<D: Datelike>(&self, other: &D) -> bool {
        self.instant.year() == other.year()
            && self.instant.month() == other.month()
            && self.instant.day() == other.day()
    }

    // ── navigation ────────────────────────────────────────────────────

    /// First instant of `date` in the instant's time zone.
    ///
    /// When local midnight falls in a gap the first representable quarter
    /// hour after it is used.
    fn start_of_day(&self, date: NaiveDate) -> DateTime<Tz> {
        let tz = self.instant.timezone();
        let midnight = date.and_time(NaiveTime::MIN);
        (0..QUARTERS_PER_DAY)
            .find_map(|q| {
                tz.from_local_datetime(&(midnight + TimeDelta::minutes(15 * q)))
                    .earliest()
            })
            .unwrap_or_else(|| {
                let offset = self.instant.offset().fix().local_minus_utc();
                tz.from_utc_datetime(&(midnight - TimeDelta::seconds(i64::from(offset))))
            })
    }

    fn at_offset(&self, date: NaiveDate, offset: TimeDelta) -> Self {
        Self::with_hours(self.start_of_day(date) + offset, self.hours)
    }

    /// Start of the window on the same calendar day, work day or not.
    ///
    /// The start offset is added as elapsed time from local midnight.
    pub fn day_start_moment(&self) -> Self {
        self.at_offset(self.date_naive(), self.hours.start())
    }

    /// End of the window on the same calendar day, work day or not.
    pub fn day_end_moment(&self) -> Self {
        self.at_offset(self.date_naive(), self.hours.end())
    }

    /// Start of the next working day.
    ///
    /// Before today's start the result is today's start. Otherwise the
    /// calendar date moves forward first (Friday by three days, Saturday by
    /// two, any other day by one) and the start of that day is returned.
    ///
    /// The before-start check does not look at the weekday, so a weekend
    /// instant earlier than the window start resolves to that weekend day.
    pub fn next_work_day_start(&self) -> Self {
        if self.before_start() {
            tracing::trace!(instant = ?self.instant, "before start, keeping the same day");
            return self.day_start_moment();
        }
        let days = weekday::days_until_next_start(self.weekday());
        tracing::trace!(instant = ?self.instant, days, "rolling over to the next work day");
        self.at_offset(self.date_naive() + Days::new(days), self.hours.start())
    }

    /// Shift the instant, keeping the window. `None` on overflow.
    pub fn checked_add(&self, duration: TimeDelta) -> Option<Self> {
        let instant = self.instant.clone().checked_add_signed(duration)?;
        Some(Self::with_hours(instant, self.hours))
    }
}

// ── Display ───────────────────────────────────────────────────────────────

impl<Tz: TimeZone> fmt::Display for WorkPeriod<Tz>
where
    Tz::Offset: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({})",
            self.instant.format("%Y-%m-%dT%H:%M:%S [%a]"),
            self.hours
        )
    }
}

// ── Equality ──────────────────────────────────────────────────────────────

impl<Tz: TimeZone, Tz2: TimeZone> PartialEq<WorkPeriod<Tz2>> for WorkPeriod<Tz> {
    fn eq(&self, other: &WorkPeriod<Tz2>) -> bool {
        self.instant == other.instant && self.hours == other.hours
    }
}

impl<Tz: TimeZone> Eq for WorkPeriod<Tz> {}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl<Tz: TimeZone> Add<TimeDelta> for WorkPeriod<Tz> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: TimeDelta) -> Self::Output {
        Self::with_hours(self.instant + rhs, self.hours)
    }
}

impl<Tz: TimeZone> Add<TimeDelta> for &WorkPeriod<Tz> {
    type Output = WorkPeriod<Tz>;
    #[inline]
    fn add(self, rhs: TimeDelta) -> Self::Output {
        self.clone() + rhs
    }
}

impl<Tz: TimeZone> Sub<TimeDelta> for WorkPeriod<Tz> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: TimeDelta) -> Self::Output {
        Self::with_hours(self.instant - rhs, self.hours)
    }
}

// ── Conversions ───────────────────────────────────────────────────────────

impl<Tz: TimeZone> From<WorkPeriod<Tz>> for DateTime<Tz> {
    #[inline]
    fn from(period: WorkPeriod<Tz>) -> Self {
        period.instant
    }
}
