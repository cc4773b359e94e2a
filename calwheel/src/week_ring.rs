// Copyright 2025 the Calwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Week ring generation: outlined bands with centered week numbers.

extern crate alloc;

use alloc::format;
use alloc::string::ToString;
use alloc::vec::Vec;

use calwheel_scene::{Node, PathNode, Stroke, TextAnchor, TextBaseline, TextPathNode};
use chrono::Datelike;
use kurbo::Point;
use peniko::Color;

use crate::angle::AngleMapper;
use crate::arc_path::{fat_arc, is_large_arc, thin_arc};
use crate::locale::WeekRule;
use crate::window::TimeWindow;

/// Outline color shared by week bands and event sectors.
pub const OUTLINE_COLOR: Color = Color::from_rgb8(0x2f, 0x36, 0x40);
/// Outline width shared by week bands and event sectors.
pub const OUTLINE_WIDTH: f64 = 0.5;

/// The week ring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeekRingSpec {
    /// Ring center.
    pub center: Point,
    /// Inner radius of the bands.
    pub inner_radius: f64,
    /// Outer radius of the bands.
    pub outer_radius: f64,
    /// Label font size; labels are omitted unless positive.
    pub font_size: f64,
    /// Week boundaries and numbering.
    pub rule: WeekRule,
}

impl WeekRingSpec {
    /// Creates an ISO week ring centered on the origin.
    pub fn new(inner_radius: f64, outer_radius: f64) -> Self {
        Self {
            center: Point::ZERO,
            inner_radius,
            outer_radius,
            font_size: 0.0,
            rule: WeekRule::ISO,
        }
    }

    /// Sets the label font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the week rule.
    pub fn with_rule(mut self, rule: WeekRule) -> Self {
        self.rule = rule;
        self
    }

    /// Returns `true` when the radii leave no room for the ring.
    pub fn is_suppressed(&self) -> bool {
        self.inner_radius >= self.outer_radius
    }

    /// Generates the bands, label guides and labels, in paint order.
    pub fn nodes(&self, window: &TimeWindow, mapper: &AngleMapper) -> Vec<Node> {
        let mut out = Vec::new();
        if self.is_suppressed() {
            return out;
        }
        let mid_radius = (self.inner_radius + self.outer_radius) / 2.0;
        for week in window.weeks(self.rule) {
            let a0 = mapper.angle_of(week.interval.start);
            let a1 = mapper.angle_of(week.interval.end);
            let band = fat_arc(
                self.center,
                self.inner_radius,
                self.outer_radius,
                a0,
                a1,
                mapper.is_reversed(),
                is_large_arc(a0, a1),
            );
            out.push(
                PathNode::new(band)
                    .with_stroke(Stroke::solid(OUTLINE_COLOR, OUTLINE_WIDTH))
                    .into(),
            );
            if self.font_size <= 0.0 {
                continue;
            }
            let id = format!(
                "week-{:04}-{:02}-{:02}",
                week.first_day.year(),
                week.first_day.month(),
                week.first_day.day()
            );
            let label = TextPathNode::new(id.clone(), week.number.to_string(), self.font_size)
                .with_anchor(TextAnchor::Middle)
                .with_baseline(TextBaseline::Middle)
                .with_start_offset(50.0);
            out.push(
                PathNode::new(thin_arc(self.center, mid_radius, a0, a1))
                    .with_id(id)
                    .into(),
            );
            out.push(label.into());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::String;

    use chrono::{NaiveDate, Weekday};

    use super::*;

    fn january() -> TimeWindow {
        let d = |day| NaiveDate::from_ymd_opt(2024, 1, day).expect("valid date");
        TimeWindow::new(d(1), d(31)).expect("valid window")
    }

    fn texts(nodes: &[Node]) -> Vec<String> {
        nodes
            .iter()
            .filter_map(|n| match n {
                Node::TextPath(t) => Some(t.text.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn iso_weeks_of_january_2024() {
        let w = january();
        let mapper = AngleMapper::new(&w, false, -90.0);
        let nodes = WeekRingSpec::new(480.0, 495.0)
            .with_font_size(12.0)
            .nodes(&w, &mapper);
        // 2024-01-01 is a Monday.
        assert_eq!(texts(&nodes), ["1", "2", "3", "4", "5"]);
        let outlined = nodes
            .iter()
            .filter(|n| matches!(n, Node::Path(p) if p.stroke.is_some() && p.fill.is_none()))
            .count();
        assert_eq!(outlined, 5);
        let label = nodes
            .iter()
            .find_map(|n| match n {
                Node::TextPath(t) => Some(t),
                _ => None,
            })
            .expect("a label");
        assert_eq!(label.href, "week-2024-01-01");
        assert_eq!(label.anchor, TextAnchor::Middle);
        assert_eq!(label.baseline, Some(TextBaseline::Middle));
        assert_eq!(label.start_offset, 50.0);
    }

    #[test]
    fn locale_weeks_start_on_sunday() {
        let w = january();
        let mapper = AngleMapper::new(&w, false, -90.0);
        let rule = WeekRule {
            first_weekday: Weekday::Sun,
            first_week_contains_date: 1,
        };
        let nodes = WeekRingSpec::new(480.0, 495.0)
            .with_font_size(12.0)
            .with_rule(rule)
            .nodes(&w, &mapper);
        // Sunday weeks: Dec 31, Jan 7, 14, 21, 28.
        assert_eq!(texts(&nodes), ["1", "2", "3", "4", "5"]);
        let first_guide = nodes
            .iter()
            .find_map(|n| match n {
                Node::Path(p) => p.id.clone(),
                _ => None,
            })
            .expect("a guide");
        assert_eq!(first_guide, "week-2023-12-31");
    }

    #[test]
    fn suppressed_ring_and_unlabeled_ring() {
        let w = january();
        let mapper = AngleMapper::new(&w, false, 0.0);
        assert!(WeekRingSpec::new(495.0, 480.0).nodes(&w, &mapper).is_empty());
        let nodes = WeekRingSpec::new(480.0, 495.0).nodes(&w, &mapper);
        assert_eq!(nodes.len(), 5);
        assert!(texts(&nodes).is_empty());
    }
}
