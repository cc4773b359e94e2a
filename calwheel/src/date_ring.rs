// Copyright 2025 the Calwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Day tick ring generation.

extern crate alloc;

use alloc::vec::Vec;

use calwheel_scene::{LineNode, Node, Stroke};
use chrono::{Datelike, NaiveDate, Weekday};
use kurbo::Point;
use peniko::Color;
use peniko::color::palette::css;

use crate::angle::AngleMapper;
use crate::arc_path::polar;
use crate::window::{TimeWindow, start_of_day};

/// Opacity of every day tick.
pub const DAY_TICK_OPACITY: f64 = 0.5;
/// Stroke width of every day tick.
pub const DAY_TICK_WIDTH: f64 = 1.0;

/// The day tick ring: one radial line at the start of every day.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DateRingSpec {
    /// Ring center.
    pub center: Point,
    /// Inner end of the ticks.
    pub inner_radius: f64,
    /// Outer end of the ticks.
    pub outer_radius: f64,
    /// Tick color on weekdays.
    pub weekday_color: Color,
    /// Tick color on Saturdays and Sundays.
    pub weekend_color: Color,
}

impl DateRingSpec {
    /// Creates a day ring centered on the origin with white weekday and red weekend ticks.
    pub fn new(inner_radius: f64, outer_radius: f64) -> Self {
        Self {
            center: Point::ZERO,
            inner_radius,
            outer_radius,
            weekday_color: css::WHITE,
            weekend_color: css::RED,
        }
    }

    /// Returns `true` when the radii leave no room for the ring.
    pub fn is_suppressed(&self) -> bool {
        self.inner_radius >= self.outer_radius
    }

    /// Tick color for `date`.
    pub fn tick_color(&self, date: NaiveDate) -> Color {
        match date.weekday() {
            Weekday::Sat | Weekday::Sun => self.weekend_color,
            _ => self.weekday_color,
        }
    }

    /// Generates one tick per day of `window`.
    pub fn nodes(&self, window: &TimeWindow, mapper: &AngleMapper) -> Vec<Node> {
        if self.is_suppressed() {
            return Vec::new();
        }
        window
            .days()
            .map(|day| {
                let angle = mapper.angle_of(start_of_day(day));
                LineNode::new(
                    polar(self.center, self.inner_radius, angle),
                    polar(self.center, self.outer_radius, angle),
                    Stroke::solid(self.tick_color(day), DAY_TICK_WIDTH),
                )
                .with_opacity(DAY_TICK_OPACITY)
                .into()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn window(first: u32, last: u32) -> TimeWindow {
        let d = |day| NaiveDate::from_ymd_opt(2024, 1, day).expect("valid date");
        TimeWindow::new(d(first), d(last)).expect("valid window")
    }

    fn lines(nodes: &[Node]) -> Vec<&LineNode> {
        nodes
            .iter()
            .filter_map(|n| match n {
                Node::Line(l) => Some(l),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn one_tick_per_day_with_weekend_colors() {
        let w = window(1, 31);
        let mapper = AngleMapper::new(&w, false, -90.0);
        let nodes = DateRingSpec::new(395.0, 445.0).nodes(&w, &mapper);
        let ticks = lines(&nodes);
        assert_eq!(ticks.len(), 31);
        // 2024-01-06 and 2024-01-07 are a Saturday and a Sunday.
        assert_eq!(ticks[4].stroke.color, css::WHITE);
        assert_eq!(ticks[5].stroke.color, css::RED);
        assert_eq!(ticks[6].stroke.color, css::RED);
        assert_eq!(ticks[7].stroke.color, css::WHITE);
        assert!(ticks.iter().all(|t| t.opacity == DAY_TICK_OPACITY));
        assert!(ticks.iter().all(|t| t.stroke.width == DAY_TICK_WIDTH));
    }

    #[test]
    fn first_tick_sits_at_the_offset_angle() {
        let w = window(1, 10);
        let mapper = AngleMapper::new(&w, false, -90.0);
        let nodes = DateRingSpec::new(100.0, 120.0).nodes(&w, &mapper);
        let first = lines(&nodes)[0];
        assert!(first.from.x.abs() < 1e-9 && (first.from.y + 100.0).abs() < 1e-9);
        assert!(first.to.x.abs() < 1e-9 && (first.to.y + 120.0).abs() < 1e-9);
    }

    #[test]
    fn inverted_radii_draw_nothing() {
        let w = window(1, 10);
        let mapper = AngleMapper::new(&w, false, 0.0);
        assert!(DateRingSpec::new(120.0, 100.0).nodes(&w, &mapper).is_empty());
    }
}
