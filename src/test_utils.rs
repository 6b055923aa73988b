// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons.
//!
//! Countdown fractions and fade progress are `f32`; compare them with the
//! `approx` macros rather than `assert_eq!`.

pub use approx::assert_abs_diff_eq;

/// Default epsilon for f32 comparisons.
pub const F32_EPSILON: f32 = 1e-6;
