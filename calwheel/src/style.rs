// Copyright 2025 the Calwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wheel style configuration.

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Geometry, typography and behavior options for one wheel.
///
/// Radii are measured from the wheel center in scene units. A ring whose inner radius is not
/// below its outer radius is not drawn; a label whose font size is not positive is not drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct WheelStyle {
    /// Side of the square canvas.
    pub size: f64,

    /// Inner radius of the day tick ring.
    pub date_inner_radius: f64,
    /// Outer radius of the day tick ring.
    pub date_outer_radius: f64,
    /// Inner radius of lane 1; further lanes step inwards.
    pub event_inner_radius: f64,
    /// Inner radius of the month ring.
    pub month_inner_radius: f64,
    /// Outer radius of the month ring.
    pub month_outer_radius: f64,
    /// Inner radius of the week ring.
    pub week_inner_radius: f64,
    /// Outer radius of the week ring.
    pub week_outer_radius: f64,

    /// Radial gap between adjacent lanes.
    pub lane_gap: f64,
    /// Radial width of one lane.
    pub lane_width: f64,

    /// Angle of the window start, in degrees (`-90` is twelve o'clock).
    pub angle_offset_deg: f64,
    /// Events spanning this many degrees or fewer are hidden.
    pub minimum_visible_angle_deg: f64,
    /// Run counter-clockwise instead of clockwise.
    pub reverse: bool,

    /// Event label font size.
    pub event_font_size: f64,
    /// Month label font size.
    pub month_font_size: f64,
    /// Week label font size.
    pub week_font_size: f64,

    /// Use ISO-8601 weeks instead of the locale's convention.
    pub iso_weeks: bool,
    /// Rotate the wheel so the current instant stays at the offset angle.
    pub align_to_today: bool,
    /// Mark the current instant on the day ring.
    pub show_today: bool,
}

impl WheelStyle {
    /// Default proportions for a canvas of side `size`.
    pub fn for_size(size: f64) -> Self {
        let half = size / 2.0;
        let month_outer_radius = half * 0.9;
        let month_inner_radius = half * 0.78;
        let radius_adj = half * 0.02;
        let lane_width = half * 0.04;
        Self {
            size,
            date_inner_radius: month_inner_radius + radius_adj / 2.0,
            date_outer_radius: month_outer_radius - radius_adj / 2.0,
            event_inner_radius: month_outer_radius - radius_adj - lane_width,
            month_inner_radius,
            month_outer_radius,
            // Outside the month label guide; the classic layout used 0.90..0.93, which put the
            // week ring on top of the month labels.
            week_inner_radius: half * 0.96,
            week_outer_radius: half * 0.99,
            lane_gap: (lane_width / 3.0).ceil(),
            lane_width,
            angle_offset_deg: -90.0,
            minimum_visible_angle_deg: 0.0,
            reverse: false,
            event_font_size: 9.0,
            month_font_size: 20.0,
            week_font_size: 12.0,
            iso_weeks: true,
            align_to_today: false,
            show_today: false,
        }
    }
}

impl Default for WheelStyle {
    fn default() -> Self {
        Self::for_size(1000.0)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn defaults_scale_with_size() {
        let s = WheelStyle::for_size(1000.0);
        assert_eq!(s.month_outer_radius, 450.0);
        assert_eq!(s.month_inner_radius, 390.0);
        assert_eq!(s.date_inner_radius, 395.0);
        assert_eq!(s.date_outer_radius, 445.0);
        assert_eq!(s.lane_width, 20.0);
        assert_eq!(s.lane_gap, 7.0);
        assert_eq!(s.event_inner_radius, 420.0);
        assert!(s.week_inner_radius < s.week_outer_radius);
        assert!(s.week_outer_radius <= s.size / 2.0);
        assert_eq!(s, WheelStyle::default());
    }

    #[test]
    fn default_week_ring_clears_the_month_labels() {
        for size in [1000.0, 1600.0, 2400.0] {
            let s = WheelStyle::for_size(size);
            let label_top = s.month_outer_radius + crate::MONTH_LABEL_GAP + s.month_font_size;
            assert!(s.week_inner_radius >= label_top, "size {size}: {s:?}");
        }
    }

    #[test]
    fn defaults_face_forward_from_twelve_o_clock() {
        let s = WheelStyle::default();
        assert_eq!(s.angle_offset_deg, -90.0);
        assert!(!s.reverse);
        assert_eq!(s.minimum_visible_angle_deg, 0.0);
        assert!(s.iso_weeks);
    }
}
