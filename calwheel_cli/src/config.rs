// Copyright 2025 the Calwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loading events and styles from JSON files.

use std::path::Path;

use anyhow::{Context as _, anyhow};
use calwheel::{CalendarEvent, WheelStyle};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Deserialize;

/// One entry of an events file.
///
/// Timestamps are strings so a file can mix plain dates, naive datetimes and RFC 3339
/// timestamps; see [`parse_instant`].
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct EventRecord {
    #[serde(default)]
    uid: Option<String>,
    start: String,
    end: String,
    #[serde(default)]
    subject: String,
    #[serde(default = "first_lane")]
    lane: u32,
}

fn first_lane() -> u32 {
    1
}

impl EventRecord {
    /// Converts the record at `index` in its file; records without a uid get `"<index>"`.
    pub(crate) fn into_event(self, index: usize) -> anyhow::Result<CalendarEvent> {
        let uid = self.uid.unwrap_or_else(|| index.to_string());
        let start = parse_instant(&self.start)
            .with_context(|| format!("event '{uid}': invalid start"))?;
        let end =
            parse_instant(&self.end).with_context(|| format!("event '{uid}': invalid end"))?;
        if self.lane == 0 {
            tracing::warn!(%uid, "lane 0 is drawn as lane 1");
        }
        Ok(CalendarEvent::new(uid, start, end, self.subject).with_lane(self.lane))
    }
}

/// Parses an instant from an RFC 3339 timestamp (taken at its UTC value), a naive datetime
/// (`2024-01-10T09:30:00` or `2024-01-10 09:30`), or a date (taken at midnight).
pub(crate) fn parse_instant(s: &str) -> anyhow::Result<NaiveDateTime> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.naive_utc());
    }
    const NAIVE_FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];
    if let Some(dt) = NAIVE_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(s, f).ok())
    {
        return Ok(dt);
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map(|d| d.and_time(NaiveTime::MIN))
        .map_err(|_| anyhow!("unrecognized timestamp '{s}'"))
}

/// Reads a JSON array of [`EventRecord`]s.
pub(crate) fn load_events(path: &Path) -> anyhow::Result<Vec<CalendarEvent>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read events file '{}'", path.display()))?;
    parse_events(&text).with_context(|| format!("parse events file '{}'", path.display()))
}

pub(crate) fn parse_events(json: &str) -> anyhow::Result<Vec<CalendarEvent>> {
    let records: Vec<EventRecord> = serde_json::from_str(json)?;
    records
        .into_iter()
        .enumerate()
        .map(|(i, r)| r.into_event(i))
        .collect()
}

/// Reads a (possibly partial) style JSON file; missing fields take their defaults.
pub(crate) fn load_style(path: &Path) -> anyhow::Result<WheelStyle> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read style file '{}'", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse style file '{}'", path.display()))
}
