// Copyright 2025 the Calwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Instant-to-angle mapping.
//!
//! Angles are in radians, measured clockwise from the positive x axis on a y-down canvas. The
//! window start maps to the configured offset and the window end one full turn later (or
//! earlier, when reversed). Instants outside the window extrapolate linearly.

use core::f64::consts::TAU;

use chrono::NaiveDateTime;

use crate::WheelError;
use crate::window::TimeWindow;

/// Maps instants to dial angles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngleMapper {
    origin: NaiveDateTime,
    span_ms: f64,
    direction: f64,
    offset: f64,
}

impl AngleMapper {
    /// Creates a mapper spanning one turn over `window`.
    pub fn new(window: &TimeWindow, reverse: bool, angle_offset_deg: f64) -> Self {
        let span = span_ms(window.start(), window.end());
        Self::with_span(window.start(), span, reverse, angle_offset_deg)
    }

    /// Creates a mapper spanning one turn from `start` to `end`.
    ///
    /// Fails unless `start` is strictly before `end`.
    pub fn from_instants(
        start: NaiveDateTime,
        end: NaiveDateTime,
        reverse: bool,
        angle_offset_deg: f64,
    ) -> Result<Self, WheelError> {
        let span = span_ms(start, end);
        if span <= 0.0 {
            return Err(WheelError::DegenerateSpan { start, end });
        }
        Ok(Self::with_span(start, span, reverse, angle_offset_deg))
    }

    fn with_span(
        origin: NaiveDateTime,
        span_ms: f64,
        reverse: bool,
        angle_offset_deg: f64,
    ) -> Self {
        Self {
            origin,
            span_ms,
            direction: if reverse { -1.0 } else { 1.0 },
            offset: angle_offset_deg.to_radians(),
        }
    }

    /// Position of `instant` as a fraction of the span (`0` at the start, `1` at the end).
    pub fn fraction_of(&self, instant: NaiveDateTime) -> f64 {
        span_ms(self.origin, instant) / self.span_ms
    }

    /// Angle of `instant`, in radians.
    pub fn angle_of(&self, instant: NaiveDateTime) -> f64 {
        self.fraction_of(instant) * TAU * self.direction + self.offset
    }

    /// Angle of the span start, in radians.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// `1.0` for clockwise dials, `-1.0` for reversed ones.
    pub fn direction(&self) -> f64 {
        self.direction
    }

    /// Returns `true` when time runs counter-clockwise.
    pub fn is_reversed(&self) -> bool {
        self.direction < 0.0
    }
}

fn span_ms(from: NaiveDateTime, to: NaiveDateTime) -> f64 {
    (to - from).num_milliseconds() as f64
}
