// Copyright 2025 the Calwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Day, week and month sequences over a [`TimeWindow`].
//!
//! Each sequence is a plain iterator; asking the window again yields a fresh one.

use chrono::{Datelike, Days as DayCount, Months, NaiveDate};

use crate::locale::WeekRule;
use crate::window::{Interval, TimeWindow, end_of_day, start_of_day};

/// Every calendar day from `first` to `last`, inclusive.
#[derive(Clone, Debug)]
pub struct Days {
    next: Option<NaiveDate>,
    last: NaiveDate,
}

impl Days {
    pub(crate) fn new(first: NaiveDate, last: NaiveDate) -> Self {
        Self {
            next: Some(first),
            last,
        }
    }
}

impl Iterator for Days {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let day = self.next.filter(|d| *d <= self.last)?;
        self.next = day.succ_opt();
        Some(day)
    }
}

/// One calendar month, clipped to the window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonthSpan {
    /// First day of the (unclipped) month.
    pub first_day: NaiveDate,
    /// Clipped extent.
    pub interval: Interval,
}

impl MonthSpan {
    /// Zero-based month of the year (`0` is January).
    pub fn month0(&self) -> u32 {
        self.first_day.month0()
    }
}

/// Every month overlapping a window.
#[derive(Clone, Debug)]
pub struct MonthSpans {
    window: TimeWindow,
    next: Option<NaiveDate>,
}

impl MonthSpans {
    pub(crate) fn new(window: TimeWindow) -> Self {
        Self {
            window,
            next: window.min_date().with_day(1),
        }
    }
}

impl Iterator for MonthSpans {
    type Item = MonthSpan;

    fn next(&mut self) -> Option<MonthSpan> {
        let first_day = self.next.filter(|d| *d <= self.window.max_date())?;
        let following = first_day.checked_add_months(Months::new(1));
        self.next = following;
        let last_day = following
            .and_then(|d| d.pred_opt())
            .unwrap_or(self.window.max_date());
        Some(MonthSpan {
            first_day,
            interval: self
                .window
                .clip(start_of_day(first_day), end_of_day(last_day)),
        })
    }
}

/// One week, clipped to the window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeekSpan {
    /// First day of the (unclipped) week.
    pub first_day: NaiveDate,
    /// Week number under the rule that produced the span.
    pub number: u32,
    /// Clipped extent.
    pub interval: Interval,
}

/// Every week overlapping a window.
#[derive(Clone, Debug)]
pub struct WeekSpans {
    window: TimeWindow,
    rule: WeekRule,
    next: Option<NaiveDate>,
}

impl WeekSpans {
    pub(crate) fn new(window: TimeWindow, rule: WeekRule) -> Self {
        Self {
            window,
            rule,
            next: Some(rule.start_of_week(window.min_date())),
        }
    }
}

impl Iterator for WeekSpans {
    type Item = WeekSpan;

    fn next(&mut self) -> Option<WeekSpan> {
        let first_day = self.next.filter(|d| *d <= self.window.max_date())?;
        let following = first_day.checked_add_days(DayCount::new(7));
        self.next = following;
        let last_day = following
            .and_then(|d| d.pred_opt())
            .unwrap_or(self.window.max_date());
        Some(WeekSpan {
            first_day,
            number: self.rule.week_number(first_day),
            interval: self
                .window
                .clip(start_of_day(first_day), end_of_day(last_day)),
        })
    }
}
