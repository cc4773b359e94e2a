// Copyright 2025 the Calwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Calendar events.

extern crate alloc;

use alloc::string::String;

use chrono::NaiveDateTime;

/// A time-bounded event drawn as a sector in one lane.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalendarEvent {
    /// Identifier, unique within one event list.
    pub uid: String,
    /// First instant.
    pub start: NaiveDateTime,
    /// Last instant.
    pub end: NaiveDateTime,
    /// Label text.
    pub subject: String,
    /// Lane number, starting at 1 for the outermost lane.
    pub lane: u32,
}

impl CalendarEvent {
    /// Creates an event in lane 1.
    pub fn new(
        uid: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            uid: uid.into(),
            start,
            end,
            subject: subject.into(),
            lane: 1,
        }
    }

    /// Sets the lane number.
    pub fn with_lane(mut self, lane: u32) -> Self {
        self.lane = lane;
        self
    }
}

/// Sorts events by start instant, breaking ties by uid.
///
/// Rendering follows list order, so this also decides which events paint on top.
pub fn sort_chronologically(events: &mut [CalendarEvent]) {
    events.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| a.uid.cmp(&b.uid)));
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;
    use alloc::vec::Vec;

    use chrono::NaiveDate;

    use super::*;

    fn at(d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, d)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .expect("valid instant")
    }

    #[test]
    fn sorts_by_start_then_uid() {
        let mut events = vec![
            CalendarEvent::new("b", at(5), at(6), "late"),
            CalendarEvent::new("z", at(1), at(2), "early z"),
            CalendarEvent::new("a", at(1), at(3), "early a"),
        ];
        sort_chronologically(&mut events);
        let uids: Vec<_> = events.iter().map(|e| e.uid.as_str()).collect();
        assert_eq!(uids, ["a", "z", "b"]);
    }

    #[test]
    fn new_events_start_in_lane_one() {
        let e = CalendarEvent::new("x", at(1), at(2), "X");
        assert_eq!(e.lane, 1);
        assert_eq!(e.with_lane(3).lane, 3);
    }
}
