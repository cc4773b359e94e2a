// Copyright 2025 the Calwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Month ring generation.
//!
//! One colored band per calendar month overlapping the window, with the month and year written
//! along a guide arc just outside the ring.

extern crate alloc;

use alloc::format;
use alloc::vec::Vec;

use calwheel_scene::{Node, PathNode, TextAnchor, TextPathNode};
use chrono::Datelike;
use kurbo::Point;

use crate::angle::AngleMapper;
use crate::arc_path::{fat_arc, is_large_arc, thin_arc};
use crate::locale::Locale;
use crate::palette::Palette;
use crate::window::TimeWindow;

/// Opacity of the month bands.
pub const MONTH_BAND_OPACITY: f64 = 0.7;
/// Distance from the outer edge of the ring to the label guide.
pub const MONTH_LABEL_GAP: f64 = 5.0;

/// The month ring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonthRingSpec {
    /// Ring center.
    pub center: Point,
    /// Inner radius of the bands.
    pub inner_radius: f64,
    /// Outer radius of the bands.
    pub outer_radius: f64,
    /// Label font size; labels are omitted unless positive.
    pub font_size: f64,
}

impl MonthRingSpec {
    /// Creates a month ring centered on the origin.
    pub fn new(inner_radius: f64, outer_radius: f64) -> Self {
        Self {
            center: Point::ZERO,
            inner_radius,
            outer_radius,
            font_size: 0.0,
        }
    }

    /// Sets the label font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Returns `true` when the radii leave no room for the ring.
    pub fn is_suppressed(&self) -> bool {
        self.inner_radius >= self.outer_radius
    }

    /// Generates the bands, label guides and labels, in paint order.
    pub fn nodes(
        &self,
        window: &TimeWindow,
        mapper: &AngleMapper,
        palette: &Palette,
        locale: &Locale,
    ) -> Vec<Node> {
        let mut out = Vec::new();
        if self.is_suppressed() {
            return out;
        }
        let labeled = self.font_size > 0.0;
        let reverse = mapper.is_reversed();
        for month in window.months() {
            let a0 = mapper.angle_of(month.interval.start);
            let a1 = mapper.angle_of(month.interval.end);
            let band = fat_arc(
                self.center,
                self.inner_radius,
                self.outer_radius,
                a0,
                a1,
                reverse,
                is_large_arc(a0, a1),
            );
            out.push(
                PathNode::new(band)
                    .with_fill(palette.month_color(month.month0()))
                    .with_opacity(MONTH_BAND_OPACITY)
                    .into(),
            );
            if !labeled {
                continue;
            }
            let id = format!(
                "month-{:04}-{:02}",
                month.first_day.year(),
                month.first_day.month()
            );
            let guide = thin_arc(self.center, self.outer_radius + MONTH_LABEL_GAP, a0, a1);
            // The guide always runs clockwise; a reversed dial reads it from the far end.
            let (anchor, offset) = if reverse {
                (TextAnchor::End, 100.0)
            } else {
                (TextAnchor::Start, 0.0)
            };
            let label = TextPathNode::new(
                id.clone(),
                locale.format_month_year(month.first_day),
                self.font_size,
            )
            .with_anchor(anchor)
            .with_start_offset(offset);
            out.push(PathNode::new(guide).with_id(id).into());
            out.push(label.into());
        }
        out
    }
}
