// SPDX-License-Identifier: AGPL-3.0-or-later

/// Status codes returned by worktime-ffi functions.
///
/// cbindgen:prefix-with-name
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorktimeStatus {
    /// Success.
    Ok = 0,
    /// A required output pointer was null.
    NullPointer = 1,
    /// The timestamp or a window offset is outside chrono's range.
    InvalidTimestamp = 2,
    /// The caller's buffer cannot hold the formatted string and its NUL.
    BufferTooSmall = 3,
    /// A panic was caught at the boundary.
    Panic = 4,
}
