// Copyright 2025 the Calwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event sectors laid out in concentric lanes.
//!
//! Lane 1 is the outermost; each further lane steps inwards by one lane width plus the lane gap.
//! Events are emitted in input order, so later events paint over earlier ones sharing a band.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use calwheel_scene::{Node, PathNode, Stroke, TextAnchor, TextBaseline, TextPathNode};
use hashbrown::HashMap;
use kurbo::Point;
use peniko::Color;

use crate::angle::AngleMapper;
use crate::arc_path::{fat_arc, is_large_arc, thin_arc};
use crate::event::CalendarEvent;
use crate::week_ring::{OUTLINE_COLOR, OUTLINE_WIDTH};

/// Fill of event sectors.
pub const EVENT_FILL: Color = Color::from_rgb8(0xf5, 0xf6, 0xfa);

/// Radial placement and visibility rules for event sectors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EventLaneSpec {
    /// Wheel center.
    pub center: Point,
    /// Inner radius of lane 1.
    pub inner_radius: f64,
    /// Radial width of each lane.
    pub lane_width: f64,
    /// Radial gap between lanes.
    pub lane_gap: f64,
    /// Events whose angular span does not exceed this (radians) are hidden.
    pub min_visible_angle: f64,
    /// Label font size; labels are omitted unless positive.
    pub font_size: f64,
}

impl EventLaneSpec {
    /// Creates a lane layout centered on the origin.
    pub fn new(inner_radius: f64, lane_width: f64, lane_gap: f64) -> Self {
        Self {
            center: Point::ZERO,
            inner_radius,
            lane_width,
            lane_gap,
            min_visible_angle: 0.0,
            font_size: 0.0,
        }
    }

    /// Sets the visibility threshold, in degrees.
    pub fn with_min_visible_angle_deg(mut self, degrees: f64) -> Self {
        self.min_visible_angle = degrees.to_radians();
        self
    }

    /// Sets the label font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Inner and outer radius of `lane` (1-based; lane 0 is treated as lane 1).
    ///
    /// A band reaching past the center is cut off at radius 0.
    pub fn lane_band(&self, lane: u32) -> (f64, f64) {
        let step = self.lane_width + self.lane_gap;
        let inner = self.inner_radius - f64::from(lane.saturating_sub(1)) * step;
        (inner.max(0.0), inner + self.lane_width)
    }

    /// Returns `true` if an event spanning `start_angle..end_angle` is drawn.
    pub fn is_visible(&self, start_angle: f64, end_angle: f64) -> bool {
        (end_angle - start_angle).abs() > self.min_visible_angle
    }

    /// Generates sectors, label guides and labels for `events`, in input order.
    pub fn nodes(&self, events: &[CalendarEvent], mapper: &AngleMapper) -> Vec<Node> {
        let mut out = Vec::new();
        let mut ids = GuideIds::default();
        for event in events {
            let (first, last) = if event.start <= event.end {
                (event.start, event.end)
            } else {
                (event.end, event.start)
            };
            let a0 = mapper.angle_of(first);
            let a1 = mapper.angle_of(last);
            if !self.is_visible(a0, a1) {
                tracing::trace!(
                    uid = %event.uid,
                    span = a1 - a0,
                    "event below visibility threshold"
                );
                continue;
            }
            let (inner, outer) = self.lane_band(event.lane);
            if inner >= outer {
                tracing::trace!(
                    uid = %event.uid,
                    lane = event.lane,
                    "event lane has no radial extent"
                );
                continue;
            }
            let sector = fat_arc(
                self.center,
                inner,
                outer,
                a0,
                a1,
                mapper.is_reversed(),
                is_large_arc(a0, a1),
            );
            out.push(
                PathNode::new(sector)
                    .with_fill(EVENT_FILL)
                    .with_stroke(Stroke::solid(OUTLINE_COLOR, OUTLINE_WIDTH))
                    .into(),
            );
            if self.font_size <= 0.0 {
                continue;
            }
            let id = ids.next(&event.uid);
            let label = TextPathNode::new(id.clone(), event.subject.clone(), self.font_size)
                .with_anchor(TextAnchor::Middle)
                .with_baseline(TextBaseline::Middle)
                .with_start_offset(50.0);
            out.push(
                PathNode::new(thin_arc(self.center, (inner + outer) / 2.0, a0, a1))
                    .with_id(id)
                    .into(),
            );
            out.push(label.into());
        }
        out
    }
}

/// Hands out `event-<uid>` ids, suffixing repeats with `-2`, `-3`, ...
#[derive(Default)]
struct GuideIds<'a> {
    seen: HashMap<&'a str, u32>,
}

impl<'a> GuideIds<'a> {
    fn next(&mut self, uid: &'a str) -> String {
        let n = self.seen.entry(uid).or_insert(0);
        *n += 1;
        if *n == 1 {
            format!("event-{uid}")
        } else {
            format!("event-{uid}-{n}")
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;
    use alloc::vec;

    use chrono::{NaiveDate, NaiveDateTime};

    use super::*;
    use crate::window::TimeWindow;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, day)
            .and_then(|d| d.and_hms_opt(hour, 0, 0))
            .expect("valid instant")
    }

    fn mapper() -> AngleMapper {
        let d = |day| NaiveDate::from_ymd_opt(2024, 1, day).expect("valid date");
        AngleMapper::new(
            &TimeWindow::new(d(1), d(31)).expect("valid window"),
            false,
            -90.0,
        )
    }

    fn guide_ids(nodes: &[Node]) -> Vec<String> {
        nodes
            .iter()
            .filter_map(|n| match n {
                Node::Path(p) => p.id.clone(),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn lanes_step_inwards() {
        let spec = EventLaneSpec::new(420.0, 20.0, 7.0);
        assert_eq!(spec.lane_band(1), (420.0, 440.0));
        assert_eq!(spec.lane_band(2), (393.0, 413.0));
        assert_eq!(spec.lane_band(3), (366.0, 386.0));
        assert_eq!(spec.lane_band(0), spec.lane_band(1));
    }

    #[test]
    fn span_at_the_threshold_is_hidden() {
        let spec = EventLaneSpec::new(420.0, 20.0, 7.0).with_min_visible_angle_deg(10.0);
        let t = 10f64.to_radians();
        assert!(!spec.is_visible(0.0, t));
        assert!(!spec.is_visible(t, 0.0));
        assert!(spec.is_visible(0.0, t + 1e-9));
        assert!(spec.is_visible(t + 1e-9, 0.0));
        assert!(!EventLaneSpec::new(1.0, 1.0, 0.0).is_visible(2.0, 2.0));
    }

    #[test]
    fn emits_sector_guide_and_label() {
        let events = vec![CalendarEvent::new("x", at(10, 0), at(20, 0), "X")];
        let nodes = EventLaneSpec::new(420.0, 20.0, 7.0)
            .with_font_size(9.0)
            .nodes(&events, &mapper());
        let [Node::Path(sector), Node::Path(guide), Node::TextPath(label)] = &nodes[..] else {
            panic!("expected sector, guide and label");
        };
        assert_eq!(sector.fill, Some(EVENT_FILL));
        assert_eq!(sector.stroke, Some(Stroke::solid(OUTLINE_COLOR, OUTLINE_WIDTH)));
        assert!(sector.data.is_closed());
        assert!(guide.is_guide());
        assert_eq!(guide.id.as_deref(), Some("event-x"));
        assert_eq!(label.href, "event-x");
        assert_eq!(label.text, "X");
        assert_eq!(label.anchor, TextAnchor::Middle);
        assert_eq!(label.baseline, Some(TextBaseline::Middle));
    }

    #[test]
    fn short_events_are_dropped_and_others_kept_in_order() {
        let events = vec![
            CalendarEvent::new("a", at(2, 0), at(5, 0), "A"),
            CalendarEvent::new("blip", at(6, 0), at(6, 1), "Blip"),
            CalendarEvent::new("b", at(3, 0), at(9, 0), "B").with_lane(2),
        ];
        let nodes = EventLaneSpec::new(420.0, 20.0, 7.0)
            .with_font_size(9.0)
            .with_min_visible_angle_deg(1.0)
            .nodes(&events, &mapper());
        assert_eq!(guide_ids(&nodes), ["event-a", "event-b"]);
    }

    #[test]
    fn repeated_uids_get_distinct_guides() {
        let events = vec![
            CalendarEvent::new("dup", at(2, 0), at(5, 0), "First"),
            CalendarEvent::new("dup", at(8, 0), at(12, 0), "Second"),
            CalendarEvent::new("dup", at(14, 0), at(16, 0), "Third"),
        ];
        let nodes = EventLaneSpec::new(420.0, 20.0, 7.0)
            .with_font_size(9.0)
            .nodes(&events, &mapper());
        assert_eq!(guide_ids(&nodes), ["event-dup", "event-dup-2", "event-dup-3"]);
    }

    #[test]
    fn unlabeled_events_emit_only_sectors() {
        let events = vec![CalendarEvent::new("x", at(10, 0), at(20, 0), "X")];
        let nodes = EventLaneSpec::new(420.0, 20.0, 7.0).nodes(&events, &mapper());
        assert_eq!(nodes.len(), 1);
    }

    #[test]
    fn lanes_reaching_the_center_are_cut_off_there() {
        let spec = EventLaneSpec::new(420.0, 20.0, 7.0);
        // Lane 17 starts at 420 - 16 * 27 = -12.
        assert_eq!(spec.lane_band(17), (0.0, 8.0));

        let events = vec![CalendarEvent::new("x", at(10, 0), at(20, 0), "X").with_lane(17)];
        let nodes = spec.nodes(&events, &mapper());
        let [Node::Path(sector)] = &nodes[..] else {
            panic!("expected one sector");
        };
        assert!(sector.data.is_closed());
        assert!(sector.data.to_string().starts_with("M0.00,0.00 A0 0 "), "{}", sector.data);
    }

    #[test]
    fn lanes_wholly_past_the_center_are_dropped() {
        let events = vec![CalendarEvent::new("x", at(10, 0), at(20, 0), "X").with_lane(40)];
        let nodes = EventLaneSpec::new(420.0, 20.0, 7.0).nodes(&events, &mapper());
        assert!(nodes.is_empty());
    }
}
