// Copyright 2025 the Calwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input validation errors.

use chrono::{NaiveDate, NaiveDateTime};

/// Precondition violations detected while building wheel inputs.
///
/// Suppressed rings, labels and events are not errors; they simply produce no nodes.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WheelError {
    /// The first and last day of the window are the same day.
    #[error("time window is empty: {0} is both the first and the last day")]
    EmptyWindow(NaiveDate),
    /// The first day of the window comes after the last day.
    #[error("time window is inverted: {min} is after {max}")]
    InvertedWindow {
        /// Requested first day.
        min: NaiveDate,
        /// Requested last day.
        max: NaiveDate,
    },
    /// An angle mapping was requested over a zero or negative span.
    #[error("cannot map angles over the span {start} to {end}")]
    DegenerateSpan {
        /// Instant mapped to the offset angle.
        start: NaiveDateTime,
        /// Instant mapped one full turn later.
        end: NaiveDateTime,
    },
    /// A palette was built from the wrong number of colors.
    #[error("palette needs one color per month (12), got {0}")]
    PaletteLength(usize),
}
