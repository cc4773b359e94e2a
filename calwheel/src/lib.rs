// Copyright 2025 the Calwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Circular calendar ("wheel") rendering on top of `calwheel_scene`.
//!
//! One full turn of the wheel covers a [`TimeWindow`] of whole days. The engine:
//! - maps instants to dial angles ([`AngleMapper`]),
//! - builds thin guide arcs and closed annular sectors as arc path data,
//! - generates the month, week and day sequences that populate the rings,
//! - places events in concentric lanes and drops the ones too short to see,
//! - composes everything, centered and optionally rotated, into a [`Scene`].
//!
//! All inputs are plain values supplied by the caller, including the current instant; rendering
//! is pure and deterministic. Serialization of the scene lives downstream.
//!
//! [`Scene`]: calwheel_scene::Scene

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod angle;
mod arc_path;
mod date_ring;
mod error;
mod event;
mod event_lanes;
#[cfg(not(feature = "std"))]
mod float;
mod intervals;
mod layer;
mod locale;
mod month_ring;
mod palette;
mod style;
mod today;
mod week_ring;
mod wheel;
mod window;

pub use angle::AngleMapper;
pub use arc_path::{fat_arc, is_large_arc, polar, thin_arc};
pub use date_ring::{DAY_TICK_OPACITY, DAY_TICK_WIDTH, DateRingSpec};
pub use error::WheelError;
pub use event::{CalendarEvent, sort_chronologically};
pub use event_lanes::{EVENT_FILL, EventLaneSpec};
pub use intervals::{Days, MonthSpan, MonthSpans, WeekSpan, WeekSpans};
pub use layer::Layer;
pub use locale::{Locale, WeekRule};
pub use month_ring::{MONTH_BAND_OPACITY, MONTH_LABEL_GAP, MonthRingSpec};
pub use palette::Palette;
pub use style::WheelStyle;
pub use today::{TODAY_COLOR, TODAY_TICK_WIDTH, TodayIndicatorSpec};
pub use week_ring::{OUTLINE_COLOR, OUTLINE_WIDTH, WeekRingSpec};
pub use wheel::WheelSpec;
pub use window::{Interval, TimeWindow};
