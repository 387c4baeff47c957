// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Monday–Friday working-week rules.
//!
//! | Weekday | Work day | Days to the next start |
//! |---------|----------|------------------------|
//! | Mon–Thu | yes | 1 |
//! | Fri | yes | 3 |
//! | Sat | no | 2 |
//! | Sun | no | 1 |

use chrono::Weekday;

/// `false` for Saturday and Sunday, `true` otherwise. Holidays are not considered.
#[inline]
pub const fn is_work_day(day: Weekday) -> bool {
    !matches!(day, Weekday::Sat | Weekday::Sun)
}

/// Calendar days to advance from `day` to reach the next work day.
#[inline]
pub const fn days_until_next_start(day: Weekday) -> u64 {
    match day {
        Weekday::Fri => 3,
        Weekday::Sat => 2,
        _ => 1,
    }
}
