// Copyright 2025 the Calwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The calendar window shown on one full turn of the wheel.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

use crate::WheelError;
use crate::intervals::{Days, MonthSpans, WeekSpans};
use crate::locale::WeekRule;

/// An inclusive range of calendar days.
///
/// The window always covers at least two days: it starts at the first instant of `min_date`
/// and ends at the last millisecond (`23:59:59.999`) of `max_date`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimeWindow {
    min_date: NaiveDate,
    max_date: NaiveDate,
}

impl TimeWindow {
    /// Creates a window from its first and last day.
    ///
    /// Fails when the days are equal or out of order.
    pub fn new(min_date: NaiveDate, max_date: NaiveDate) -> Result<Self, WheelError> {
        if min_date == max_date {
            return Err(WheelError::EmptyWindow(min_date));
        }
        if min_date > max_date {
            return Err(WheelError::InvertedWindow {
                min: min_date,
                max: max_date,
            });
        }
        Ok(Self { min_date, max_date })
    }

    /// The first day.
    pub fn min_date(&self) -> NaiveDate {
        self.min_date
    }

    /// The last day.
    pub fn max_date(&self) -> NaiveDate {
        self.max_date
    }

    /// Start of the first day.
    pub fn start(&self) -> NaiveDateTime {
        start_of_day(self.min_date)
    }

    /// Last millisecond of the last day.
    pub fn end(&self) -> NaiveDateTime {
        end_of_day(self.max_date)
    }

    /// Number of days in the window, both ends included.
    pub fn day_count(&self) -> usize {
        let days = (self.max_date - self.min_date).num_days() + 1;
        usize::try_from(days).unwrap_or(0)
    }

    /// Returns `true` if `instant` falls inside the window.
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.start() <= instant && instant <= self.end()
    }

    /// Clamps `[start, end]` to the window bounds.
    pub fn clip(&self, start: NaiveDateTime, end: NaiveDateTime) -> Interval {
        Interval {
            start: start.max(self.start()),
            end: end.min(self.end()),
        }
    }

    /// Every day of the window, in order.
    pub fn days(&self) -> Days {
        Days::new(self.min_date, self.max_date)
    }

    /// Every calendar month overlapping the window, clipped to it.
    pub fn months(&self) -> MonthSpans {
        MonthSpans::new(*self)
    }

    /// Every week overlapping the window, clipped to it, with boundaries from `rule`.
    pub fn weeks(&self, rule: WeekRule) -> WeekSpans {
        WeekSpans::new(*self, rule)
    }
}

/// A clipped span of time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Interval {
    /// First instant.
    pub start: NaiveDateTime,
    /// Last instant.
    pub end: NaiveDateTime,
}

pub(crate) fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// `23:59:59.999` on `date`.
pub(crate) fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    // Subtracting from midnight wraps around to the end of the same day.
    date.and_time(NaiveTime::MIN - TimeDelta::milliseconds(1))
}
