// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! C FFI bindings for **worktime** — working-day arithmetic.
//!
//! This crate exposes a flat C-compatible API over UTC work periods:
//! construction, office-hour predicates, signed offsets in seconds and
//! day-boundary navigation.

mod error;
mod period;

pub use error::*;
pub use period::*;

/// Runs `$body` and turns a panic into `$fallback`.
#[macro_export]
macro_rules! catch_panic {
    ($fallback:expr, $body:block) => {
        match ::std::panic::catch_unwind(::std::panic::AssertUnwindSafe(|| $body)) {
            Ok(status) => status,
            Err(_) => $fallback,
        }
    };
}

/// Returns the worktime-ffi ABI version (semver-encoded: major*10000 + minor*100 + patch).
#[allow(clippy::erasing_op, clippy::identity_op)]
#[no_mangle]
pub extern "C" fn worktime_ffi_version() -> u32 {
    0 * 10000 + 1 * 100 + 0 // 0.1.0
}
