// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration errors.
//!
//! Lifecycle operations never fail: calls from an invalid state are no-ops and
//! a vetoed dismissal is ordinary control flow. Only configuration values are
//! validated.

use thiserror::Error;

/// Result alias for fallible configuration calls.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// A rejected configuration value. The previous configuration is kept.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum Error {
    /// Fade duration is NaN, infinite, or negative.
    #[error("animation duration must be finite and non-negative, got {0}")]
    InvalidDuration(f64),
    /// A color component is outside `[0, 1]` or not finite.
    #[error("{field}.{channel} must be within [0, 1], got {value}")]
    InvalidColor {
        /// Which color setting was rejected.
        field: &'static str,
        /// Which channel was out of range.
        channel: &'static str,
        /// The offending value.
        value: f32,
    },
    /// A border width is negative or not finite.
    #[error("border widths must be finite and non-negative, got {0}")]
    InvalidBorder(f64),
}
