// Copyright 2025 the Calwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene composition for a complete wheel.

extern crate alloc;

use alloc::vec::Vec;

use calwheel_scene::{Group, Node, Scene};
use chrono::NaiveDateTime;
use kurbo::Vec2;

use crate::angle::AngleMapper;
use crate::date_ring::DateRingSpec;
use crate::event::CalendarEvent;
use crate::event_lanes::EventLaneSpec;
use crate::layer::Layer;
use crate::locale::{Locale, WeekRule};
use crate::month_ring::MonthRingSpec;
use crate::palette::Palette;
use crate::style::WheelStyle;
use crate::today::TodayIndicatorSpec;
use crate::week_ring::WeekRingSpec;
use crate::window::TimeWindow;

/// Everything needed to draw one wheel.
///
/// All inputs are borrowed and left untouched; each call to [`WheelSpec::render`] rebuilds the
/// full scene.
#[derive(Clone, Copy, Debug)]
pub struct WheelSpec<'a> {
    /// Days covered by one full turn.
    pub window: TimeWindow,
    /// Events, painted in slice order.
    pub events: &'a [CalendarEvent],
    /// Geometry, typography and behavior.
    pub style: &'a WheelStyle,
    /// Month names and week conventions.
    pub locale: &'a Locale,
    /// Month band colors.
    pub palette: &'a Palette,
}

impl<'a> WheelSpec<'a> {
    /// Creates a wheel spec.
    pub fn new(
        window: TimeWindow,
        events: &'a [CalendarEvent],
        style: &'a WheelStyle,
        locale: &'a Locale,
        palette: &'a Palette,
    ) -> Self {
        Self {
            window,
            events,
            style,
            locale,
            palette,
        }
    }

    /// The angle mapper implied by the window and style.
    pub fn mapper(&self) -> AngleMapper {
        AngleMapper::new(&self.window, self.style.reverse, self.style.angle_offset_deg)
    }

    /// Week boundaries used by the week ring.
    pub fn week_rule(&self) -> WeekRule {
        if self.style.iso_weeks {
            WeekRule::ISO
        } else {
            self.locale.week_rule
        }
    }

    /// Nodes of one layer, in paint order, before centering.
    ///
    /// `now` only affects [`Layer::Today`].
    pub fn layer_nodes(&self, layer: Layer, now: NaiveDateTime) -> Vec<Node> {
        let style = self.style;
        let mapper = self.mapper();
        match layer {
            Layer::Months => {
                let spec = MonthRingSpec::new(style.month_inner_radius, style.month_outer_radius)
                    .with_font_size(style.month_font_size);
                if spec.is_suppressed() {
                    tracing::debug!("month ring suppressed: inner radius not below outer");
                }
                spec.nodes(&self.window, &mapper, self.palette, self.locale)
            }
            Layer::Weeks => {
                let spec = WeekRingSpec::new(style.week_inner_radius, style.week_outer_radius)
                    .with_font_size(style.week_font_size)
                    .with_rule(self.week_rule());
                if spec.is_suppressed() {
                    tracing::debug!("week ring suppressed: inner radius not below outer");
                }
                spec.nodes(&self.window, &mapper)
            }
            Layer::Days => {
                let spec = DateRingSpec::new(style.date_inner_radius, style.date_outer_radius);
                if spec.is_suppressed() {
                    tracing::debug!("day ring suppressed: inner radius not below outer");
                }
                spec.nodes(&self.window, &mapper)
            }
            Layer::Today => {
                if !style.show_today {
                    return Vec::new();
                }
                let spec = TodayIndicatorSpec::new(style.date_inner_radius, style.date_outer_radius)
                    .with_reverse(style.reverse);
                if spec.is_suppressed() {
                    tracing::debug!("today marker suppressed with the day ring");
                }
                spec.nodes(mapper.angle_of(now))
            }
            Layer::Events => EventLaneSpec::new(
                style.event_inner_radius,
                style.lane_width,
                style.lane_gap,
            )
            .with_min_visible_angle_deg(style.minimum_visible_angle_deg)
            .with_font_size(style.event_font_size)
            .nodes(self.events, &mapper),
        }
    }

    /// Rotation (degrees) that brings `now` back to the offset angle when aligning to today.
    pub fn alignment_rotation(&self, now: NaiveDateTime) -> f64 {
        let mapper = self.mapper();
        -360.0 * mapper.fraction_of(now) * mapper.direction()
    }

    /// Builds the complete scene, sampling nothing but the `now` passed in.
    #[tracing::instrument(skip_all, fields(events = self.events.len()))]
    pub fn render(&self, now: NaiveDateTime) -> Scene {
        let size = self.style.size;
        let mut root = Group::new()
            .with_id("wheel")
            .translated(Vec2::new(size / 2.0, size / 2.0));
        if self.style.align_to_today {
            root = root.rotated(self.alignment_rotation(now));
        }
        for layer in Layer::PAINT_ORDER {
            let nodes = self.layer_nodes(layer, now);
            if nodes.is_empty() {
                continue;
            }
            tracing::debug!(layer = layer.group_id(), nodes = nodes.len(), "layer built");
            let mut group = Group::new().with_id(layer.group_id());
            group.children = nodes;
            root.push(group);
        }
        tracing::debug!(layers = root.children.len(), "scene composed");
        Scene::new(size, root)
    }
}
