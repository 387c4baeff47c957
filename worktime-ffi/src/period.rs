// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2026 Vallés Puig, Ramon

//! FFI bindings for UTC work periods.

use crate::catch_panic;
use crate::error::WorktimeStatus;
use chrono::{DateTime, TimeDelta, Utc};
use std::os::raw::c_char;
use worktime::WorkPeriod;

/// Buffer size that fits the text of any four-digit-year period whose
/// offsets stay below 100 hours.
pub const WORKTIME_FORMAT_LEN: usize = 64;

// ═══════════════════════════════════════════════════════════════════════════
// C-repr types
// ═══════════════════════════════════════════════════════════════════════════

/// A UTC instant and its working window, suitable for C interop.
///
/// Window offsets are seconds since midnight.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorktimePeriod {
    pub unix_seconds: i64,
    pub nanosecond: u32,
    pub day_start_seconds: i64,
    pub day_end_seconds: i64,
}

impl WorktimePeriod {
    /// Convert from a Rust `WorkPeriod<Utc>` to the C-repr struct.
    pub fn from_period(p: &WorkPeriod<Utc>) -> Self {
        Self {
            unix_seconds: p.instant().timestamp(),
            nanosecond: p.instant().timestamp_subsec_nanos(),
            day_start_seconds: p.day_start().num_seconds(),
            day_end_seconds: p.day_end().num_seconds(),
        }
    }

    /// Convert to a Rust `WorkPeriod<Utc>`; `None` when any field is out of range.
    pub fn to_period(&self) -> Option<WorkPeriod<Utc>> {
        let instant = DateTime::<Utc>::from_timestamp(self.unix_seconds, self.nanosecond)?;
        Some(WorkPeriod::new(
            instant,
            TimeDelta::try_seconds(self.day_start_seconds)?,
            TimeDelta::try_seconds(self.day_end_seconds)?,
        ))
    }
}

/// Evaluates `query` on `period` and writes the answer to `out`.
///
/// # Safety
/// `out` must be null or valid for writes of `T`.
unsafe fn write_query<T>(
    period: WorktimePeriod,
    out: *mut T,
    query: impl FnOnce(&WorkPeriod<Utc>) -> T,
) -> WorktimeStatus {
    if out.is_null() {
        return WorktimeStatus::NullPointer;
    }
    match period.to_period() {
        Some(p) => {
            // SAFETY: `out` was checked for null and the caller guarantees it points to writable memory.
            unsafe { out.write(query(&p)) };
            WorktimeStatus::Ok
        }
        None => WorktimeStatus::InvalidTimestamp,
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Construction
// ═══════════════════════════════════════════════════════════════════════════

/// Create a period with the 09:00 – 17:00 window.
///
/// # Safety
/// `out` must be a valid, writable pointer to `WorktimePeriod`.
#[no_mangle]
pub unsafe extern "C" fn worktime_period_standard(
    unix_seconds: i64,
    nanosecond: u32,
    out: *mut WorktimePeriod,
) -> WorktimeStatus {
    catch_panic!(WorktimeStatus::Panic, {
        if out.is_null() {
            return WorktimeStatus::NullPointer;
        }
        match DateTime::<Utc>::from_timestamp(unix_seconds, nanosecond) {
            Some(instant) => {
                let period = WorkPeriod::standard(instant);
                // SAFETY: `out` was checked for null and the caller guarantees it points to writable memory.
                unsafe { *out = WorktimePeriod::from_period(&period) };
                WorktimeStatus::Ok
            }
            None => WorktimeStatus::InvalidTimestamp,
        }
    })
}

/// Create a period with an explicit window. Offsets are not range-checked
/// beyond what chrono can represent.
///
/// # Safety
/// `out` must be a valid, writable pointer to `WorktimePeriod`.
#[no_mangle]
pub unsafe extern "C" fn worktime_period_new(
    unix_seconds: i64,
    nanosecond: u32,
    day_start_seconds: i64,
    day_end_seconds: i64,
    out: *mut WorktimePeriod,
) -> WorktimeStatus {
    let raw = WorktimePeriod {
        unix_seconds,
        nanosecond,
        day_start_seconds,
        day_end_seconds,
    };
    catch_panic!(WorktimeStatus::Panic, {
        // SAFETY: forwarded caller contract on `out`.
        unsafe { write_query(raw, out, WorktimePeriod::from_period) }
    })
}

// ═══════════════════════════════════════════════════════════════════════════
// Predicates
// ═══════════════════════════════════════════════════════════════════════════

/// Whether the period falls on Monday–Friday.
///
/// # Safety
/// `out` must be a valid, writable pointer to `bool`.
#[no_mangle]
pub unsafe extern "C" fn worktime_period_is_work_day(
    period: WorktimePeriod,
    out: *mut bool,
) -> WorktimeStatus {
    catch_panic!(WorktimeStatus::Panic, {
        // SAFETY: forwarded caller contract on `out`.
        unsafe { write_query(period, out, |p| p.is_work_day()) }
    })
}

/// Whether the period is on a work day and within its window, both ends included.
///
/// # Safety
/// `out` must be a valid, writable pointer to `bool`.
#[no_mangle]
pub unsafe extern "C" fn worktime_period_during_office_hours(
    period: WorktimePeriod,
    out: *mut bool,
) -> WorktimeStatus {
    catch_panic!(WorktimeStatus::Panic, {
        // SAFETY: forwarded caller contract on `out`.
        unsafe { write_query(period, out, |p| p.during_office_hours()) }
    })
}

/// Whether the time of day is strictly before the window start.
///
/// # Safety
/// `out` must be a valid, writable pointer to `bool`.
#[no_mangle]
pub unsafe extern "C" fn worktime_period_before_start(
    period: WorktimePeriod,
    out: *mut bool,
) -> WorktimeStatus {
    catch_panic!(WorktimeStatus::Panic, {
        // SAFETY: forwarded caller contract on `out`.
        unsafe { write_query(period, out, |p| p.before_start()) }
    })
}

/// Whether the time of day is strictly after the window end.
///
/// # Safety
/// `out` must be a valid, writable pointer to `bool`.
#[no_mangle]
pub unsafe extern "C" fn worktime_period_after_end(
    period: WorktimePeriod,
    out: *mut bool,
) -> WorktimeStatus {
    catch_panic!(WorktimeStatus::Panic, {
        // SAFETY: forwarded caller contract on `out`.
        unsafe { write_query(period, out, |p| p.after_end()) }
    })
}

/// Whether both periods fall on the same UTC calendar date.
///
/// # Safety
/// `out` must be a valid, writable pointer to `bool`.
#[no_mangle]
pub unsafe extern "C" fn worktime_period_is_same_day(
    a: WorktimePeriod,
    b: WorktimePeriod,
    out: *mut bool,
) -> WorktimeStatus {
    catch_panic!(WorktimeStatus::Panic, {
        let Some(other) = b.to_period() else {
            return WorktimeStatus::InvalidTimestamp;
        };
        // SAFETY: forwarded caller contract on `out`.
        unsafe { write_query(a, out, |p| p.is_same_day(other.instant())) }
    })
}

// ═══════════════════════════════════════════════════════════════════════════
// Durations (whole seconds, signed)
// ═══════════════════════════════════════════════════════════════════════════

/// Length of the working window, with overnight wrap.
///
/// # Safety
/// `out` must be a valid, writable pointer to `i64`.
#[no_mangle]
pub unsafe extern "C" fn worktime_period_length_seconds(
    period: WorktimePeriod,
    out: *mut i64,
) -> WorktimeStatus {
    catch_panic!(WorktimeStatus::Panic, {
        // SAFETY: forwarded caller contract on `out`.
        unsafe { write_query(period, out, |p| p.length().num_seconds()) }
    })
}

/// Length of the working window in fractional hours.
///
/// # Safety
/// `out` must be a valid, writable pointer to `f64`.
#[no_mangle]
pub unsafe extern "C" fn worktime_period_length_hours(
    period: WorktimePeriod,
    out: *mut f64,
) -> WorktimeStatus {
    catch_panic!(WorktimeStatus::Panic, {
        // SAFETY: forwarded caller contract on `out`.
        unsafe { write_query(period, out, |p| p.length_hours().value()) }
    })
}

/// Seconds elapsed since UTC midnight.
///
/// # Safety
/// `out` must be a valid, writable pointer to `i64`.
#[no_mangle]
pub unsafe extern "C" fn worktime_period_since_midnight_seconds(
    period: WorktimePeriod,
    out: *mut i64,
) -> WorktimeStatus {
    catch_panic!(WorktimeStatus::Panic, {
        // SAFETY: forwarded caller contract on `out`.
        unsafe { write_query(period, out, |p| p.since_midnight().num_seconds()) }
    })
}

/// Signed seconds from the window start; negative before it.
///
/// # Safety
/// `out` must be a valid, writable pointer to `i64`.
#[no_mangle]
pub unsafe extern "C" fn worktime_period_from_start_seconds(
    period: WorktimePeriod,
    out: *mut i64,
) -> WorktimeStatus {
    catch_panic!(WorktimeStatus::Panic, {
        // SAFETY: forwarded caller contract on `out`.
        unsafe { write_query(period, out, |p| p.from_start().num_seconds()) }
    })
}

/// Signed seconds from the window end; positive once the end has passed.
///
/// # Safety
/// `out` must be a valid, writable pointer to `i64`.
#[no_mangle]
pub unsafe extern "C" fn worktime_period_until_end_seconds(
    period: WorktimePeriod,
    out: *mut i64,
) -> WorktimeStatus {
    catch_panic!(WorktimeStatus::Panic, {
        // SAFETY: forwarded caller contract on `out`.
        unsafe { write_query(period, out, |p| p.until_end().num_seconds()) }
    })
}

// ═══════════════════════════════════════════════════════════════════════════
// Navigation
// ═══════════════════════════════════════════════════════════════════════════

/// Start of the window on the same day.
///
/// # Safety
/// `out` must be a valid, writable pointer to `WorktimePeriod`.
#[no_mangle]
pub unsafe extern "C" fn worktime_period_day_start(
    period: WorktimePeriod,
    out: *mut WorktimePeriod,
) -> WorktimeStatus {
    catch_panic!(WorktimeStatus::Panic, {
        // SAFETY: forwarded caller contract on `out`.
        unsafe {
            write_query(period, out, |p| {
                WorktimePeriod::from_period(&p.day_start_moment())
            })
        }
    })
}

/// End of the window on the same day.
///
/// # Safety
/// `out` must be a valid, writable pointer to `WorktimePeriod`.
#[no_mangle]
pub unsafe extern "C" fn worktime_period_day_end(
    period: WorktimePeriod,
    out: *mut WorktimePeriod,
) -> WorktimeStatus {
    catch_panic!(WorktimeStatus::Panic, {
        // SAFETY: forwarded caller contract on `out`.
        unsafe {
            write_query(period, out, |p| {
                WorktimePeriod::from_period(&p.day_end_moment())
            })
        }
    })
}

/// Start of the next working day.
///
/// # Safety
/// `out` must be a valid, writable pointer to `WorktimePeriod`.
#[no_mangle]
pub unsafe extern "C" fn worktime_period_next_start(
    period: WorktimePeriod,
    out: *mut WorktimePeriod,
) -> WorktimeStatus {
    catch_panic!(WorktimeStatus::Panic, {
        // SAFETY: forwarded caller contract on `out`.
        unsafe {
            write_query(period, out, |p| {
                WorktimePeriod::from_period(&p.next_work_day_start())
            })
        }
    })
}

/// Shift the instant by `seconds`, keeping the window.
///
/// # Safety
/// `out` must be a valid, writable pointer to `WorktimePeriod`.
#[no_mangle]
pub unsafe extern "C" fn worktime_period_add_seconds(
    period: WorktimePeriod,
    seconds: i64,
    out: *mut WorktimePeriod,
) -> WorktimeStatus {
    catch_panic!(WorktimeStatus::Panic, {
        if out.is_null() {
            return WorktimeStatus::NullPointer;
        }
        let shifted = period.to_period().and_then(|p| {
            let delta = TimeDelta::try_seconds(seconds)?;
            p.checked_add(delta)
        });
        match shifted {
            Some(p) => {
                // SAFETY: `out` was checked for null and the caller guarantees it points to writable memory.
                unsafe { *out = WorktimePeriod::from_period(&p) };
                WorktimeStatus::Ok
            }
            None => WorktimeStatus::InvalidTimestamp,
        }
    })
}

// ═══════════════════════════════════════════════════════════════════════════
// Formatting
// ═══════════════════════════════════════════════════════════════════════════

/// Write `YYYY-MM-DDTHH:MM:SS [Day] (HH:MM - HH:MM)` as a NUL-terminated
/// string into `buf`. Returns BufferTooSmall if `len` cannot hold it.
///
/// # Safety
/// `buf` must be valid for writes of `len` bytes.
#[no_mangle]
pub unsafe extern "C" fn worktime_period_format(
    period: WorktimePeriod,
    buf: *mut c_char,
    len: usize,
) -> WorktimeStatus {
    catch_panic!(WorktimeStatus::Panic, {
        if buf.is_null() {
            return WorktimeStatus::NullPointer;
        }
        let Some(p) = period.to_period() else {
            return WorktimeStatus::InvalidTimestamp;
        };
        let text = p.to_string();
        let bytes = text.as_bytes();
        if bytes.len() >= len {
            return WorktimeStatus::BufferTooSmall;
        }
        // SAFETY: `buf` is non-null and the caller guarantees `len` writable bytes,
        // of which `bytes.len() + 1` are used.
        unsafe {
            std::ptr::copy_nonoverlapping(bytes.as_ptr(), buf.cast::<u8>(), bytes.len());
            *buf.add(bytes.len()) = 0;
        }
        WorktimeStatus::Ok
    })
}
