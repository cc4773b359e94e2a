// Copyright 2025 the Calwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marker for the current instant on the day ring.

extern crate alloc;

use alloc::vec::Vec;

use calwheel_scene::{Group, LineNode, Node, PathData, PathNode, Stroke};
use kurbo::{Point, Vec2};
use peniko::Color;

use crate::arc_path::polar;

/// Color of the tick and the triangle.
pub const TODAY_COLOR: Color = Color::from_rgb8(0xe8, 0x41, 0x18);
/// Stroke width of the tick.
pub const TODAY_TICK_WIDTH: f64 = 2.0;

/// A radial tick across the day ring plus a triangle on its midline pointing forward in time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TodayIndicatorSpec {
    /// Wheel center.
    pub center: Point,
    /// Inner radius of the day ring.
    pub inner_radius: f64,
    /// Outer radius of the day ring.
    pub outer_radius: f64,
    /// Whether time runs counter-clockwise.
    pub reverse: bool,
}

impl TodayIndicatorSpec {
    /// Creates a marker spanning the day ring between the two radii.
    pub fn new(inner_radius: f64, outer_radius: f64) -> Self {
        Self {
            center: Point::ZERO,
            inner_radius,
            outer_radius,
            reverse: false,
        }
    }

    /// Sets the dial direction.
    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    /// Returns `true` when the day ring it sits on is suppressed.
    pub fn is_suppressed(&self) -> bool {
        self.inner_radius >= self.outer_radius
    }

    /// Generates the tick and the triangle at `angle` (radians).
    pub fn nodes(&self, angle: f64) -> Vec<Node> {
        if self.is_suppressed() {
            return Vec::new();
        }
        let tick = LineNode::new(
            polar(self.center, self.inner_radius, angle),
            polar(self.center, self.outer_radius, angle),
            Stroke::solid(TODAY_COLOR, TODAY_TICK_WIDTH),
        );

        // Drawn in a frame where the x axis is the radius and y points forward along the ring.
        let half = (self.outer_radius - self.inner_radius) / 2.0;
        let forward = if self.reverse { -1.0 } else { 1.0 };
        let mut triangle = PathData::new();
        triangle.move_to((0.0, forward * half));
        triangle.line_to((half, -forward * half));
        triangle.line_to((-half, -forward * half));
        triangle.close();

        let mut marker = Group::new()
            .with_id("today")
            .translated(self.center.to_vec2())
            .rotated(angle.to_degrees())
            .translated(Vec2::new(self.inner_radius + half, 0.0));
        marker.push(PathNode::new(triangle).with_fill(TODAY_COLOR));
        alloc::vec![tick.into(), marker.into()]
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use core::f64::consts::FRAC_PI_2;

    use calwheel_scene::Transform;
    use kurbo::Affine;

    use super::*;

    #[test]
    fn tick_spans_the_ring_at_the_angle() {
        let nodes = TodayIndicatorSpec::new(100.0, 120.0).nodes(FRAC_PI_2);
        let [Node::Line(tick), Node::Group(marker)] = &nodes[..] else {
            panic!("expected a tick and a marker group");
        };
        assert!(tick.from.x.abs() < 1e-9 && (tick.from.y - 100.0).abs() < 1e-9);
        assert!(tick.to.x.abs() < 1e-9 && (tick.to.y - 120.0).abs() < 1e-9);
        assert_eq!(tick.stroke, Stroke::solid(TODAY_COLOR, TODAY_TICK_WIDTH));
        assert_eq!(marker.id.as_deref(), Some("today"));
    }

    #[test]
    fn triangle_sits_on_the_midline_pointing_forward() {
        for (reverse, expected_tip_x) in [(false, -10.0), (true, 10.0)] {
            let nodes = TodayIndicatorSpec::new(100.0, 120.0)
                .with_reverse(reverse)
                .nodes(FRAC_PI_2);
            let Node::Group(marker) = &nodes[1] else {
                panic!("expected a marker group");
            };
            let Node::Path(triangle) = &marker.children[0] else {
                panic!("expected a triangle");
            };
            let to_scene: Affine = Transform::compose(&marker.transforms);
            let tip = to_scene * triangle.data.start().expect("tip");
            // At six o'clock, clockwise runs towards -x.
            assert!((tip.y - 110.0).abs() < 1e-9, "tip: {tip:?}");
            assert!((tip.x - expected_tip_x).abs() < 1e-9, "tip: {tip:?}");
        }
    }

    #[test]
    fn suppressed_with_the_day_ring() {
        assert!(TodayIndicatorSpec::new(120.0, 100.0).nodes(0.0).is_empty());
    }
}
