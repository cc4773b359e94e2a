// Copyright 2025 the Calwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arc path construction.
//!
//! Two primitives cover every curved shape on the wheel:
//! - a **thin arc**: an open arc along one circle, used for outlines and as text guides;
//! - a **fat arc**: a closed annular sector between two radii (pie/donut slice).
//!
//! Paths are emitted as SVG-style arc commands (see [`PathData`]) rather than flattened curves.

use core::f64::consts::{PI, TAU};

use calwheel_scene::PathData;
use kurbo::{Point, Vec2};

/// Spans within this distance of a full turn are split so the arc endpoints stay distinct.
const FULL_TURN_EPSILON: f64 = 1e-9;

/// The point at `angle` (radians) on the circle of `radius` around `center`.
pub fn polar(center: Point, radius: f64, angle: f64) -> Point {
    center + Vec2::from_angle(angle) * radius
}

/// Whether an arc from `start_angle` to `end_angle` needs the SVG large-arc flag.
///
/// The flag is set exactly when the span is at least half a turn.
pub fn is_large_arc(start_angle: f64, end_angle: f64) -> bool {
    (end_angle - start_angle).abs() >= PI
}

/// An open arc between `start_angle` and `end_angle`, sweeping towards increasing angles.
///
/// The angles may come in either order; the arc always starts at the smaller one.
pub fn thin_arc(center: Point, radius: f64, start_angle: f64, end_angle: f64) -> PathData {
    let (start_angle, end_angle) = (start_angle.min(end_angle), start_angle.max(end_angle));
    let mut path = PathData::new();
    path.move_to(polar(center, radius, start_angle));
    push_arc(
        &mut path,
        center,
        radius,
        start_angle,
        end_angle,
        is_large_arc(start_angle, end_angle),
        true,
    );
    path
}

/// A closed annular sector between `inner_radius` and `outer_radius`.
///
/// The outline runs along the inner circle from `start_angle` to `end_angle`, out along the
/// end radius, back along the outer circle, and in along the start radius. `reverse` flips the
/// sweep direction for dials where time runs towards decreasing angles.
pub fn fat_arc(
    center: Point,
    inner_radius: f64,
    outer_radius: f64,
    start_angle: f64,
    end_angle: f64,
    reverse: bool,
    large_arc: bool,
) -> PathData {
    let sweep = !reverse;
    let inner_start = polar(center, inner_radius, start_angle);
    let mut path = PathData::new();
    path.move_to(inner_start);
    push_arc(
        &mut path,
        center,
        inner_radius,
        start_angle,
        end_angle,
        large_arc,
        sweep,
    );
    path.line_to(polar(center, outer_radius, end_angle));
    push_arc(
        &mut path,
        center,
        outer_radius,
        end_angle,
        start_angle,
        large_arc,
        !sweep,
    );
    path.line_to(inner_start);
    path.close();
    path
}

fn push_arc(
    path: &mut PathData,
    center: Point,
    radius: f64,
    from_angle: f64,
    to_angle: f64,
    large_arc: bool,
    sweep: bool,
) {
    if (to_angle - from_angle).abs() >= TAU - FULL_TURN_EPSILON {
        // A full turn has coincident endpoints; go through the midpoint instead.
        let mid = (from_angle + to_angle) / 2.0;
        path.arc_to(radius, false, sweep, polar(center, radius, mid));
        path.arc_to(radius, false, sweep, polar(center, radius, to_angle));
    } else {
        path.arc_to(radius, large_arc, sweep, polar(center, radius, to_angle));
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::{String, ToString};
    use alloc::vec::Vec;

    use calwheel_scene::PathCommand;
    use core::f64::consts::FRAC_PI_2;

    use super::*;

    fn fmt_point(p: Point) -> String {
        let mut path = PathData::new();
        path.move_to(p);
        path.to_string()[1..].to_string()
    }

    #[test]
    fn thin_quarter_arc_matches_svg_syntax() {
        let path = thin_arc(Point::ZERO, 100.0, 0.0, FRAC_PI_2);
        assert_eq!(path.to_string(), "M100.00,0.00 A100 100 0 0 1 0.00,100.00");
    }

    #[test]
    fn thin_arc_orders_its_angles() {
        let forward = thin_arc(Point::ZERO, 100.0, 0.0, 1.5 * PI);
        let backward = thin_arc(Point::ZERO, 100.0, 1.5 * PI, 0.0);
        assert_eq!(backward, forward);
        assert!(backward.to_string().starts_with("M100.00,0.00 A100 100 1 1 "));
    }

    #[test]
    fn fat_arc_has_four_segments_and_closes() {
        let path = fat_arc(Point::ZERO, 50.0, 100.0, 0.0, FRAC_PI_2, false, false);
        assert_eq!(
            path.to_string(),
            "M50.00,0.00 A50 50 0 0 1 0.00,50.00 L0.00,100.00 A100 100 0 0 0 100.00,0.00 L50.00,0.00 Z"
        );
        assert_eq!(path.commands().len(), 6);
        assert!(path.is_closed());
    }

    #[test]
    fn reversed_fat_arc_flips_both_sweeps() {
        let path = fat_arc(Point::ZERO, 50.0, 100.0, 0.0, -FRAC_PI_2, true, false);
        let sweeps: Vec<_> = path
            .commands()
            .iter()
            .filter_map(|c| match c {
                PathCommand::ArcTo { sweep, .. } => Some(*sweep),
                _ => None,
            })
            .collect();
        assert_eq!(sweeps, [false, true]);
    }

    #[test]
    fn large_arc_flag_is_set_from_half_a_turn() {
        assert!(!is_large_arc(0.0, PI - 1e-6));
        assert!(is_large_arc(0.0, PI));
        assert!(is_large_arc(1.0, 1.0 + PI + 0.5));
        assert!(is_large_arc(0.0, -PI));
        assert!(!is_large_arc(-0.5, 0.5));

        let thin = thin_arc(Point::ZERO, 10.0, 0.0, 1.5 * PI);
        assert!(matches!(
            thin.commands()[1],
            PathCommand::ArcTo {
                large_arc: true,
                ..
            }
        ));
    }

    #[test]
    fn equal_sectors_tile_a_full_turn() {
        let n = 12;
        let step = TAU / f64::from(n);
        let offset = -FRAC_PI_2;
        let sectors: Vec<_> = (0..n)
            .map(|i| {
                let a0 = offset + step * f64::from(i);
                let a1 = offset + step * f64::from(i + 1);
                fat_arc(Point::ZERO, 80.0, 100.0, a0, a1, false, is_large_arc(a0, a1))
            })
            .collect();
        for pair in sectors.windows(2) {
            // The inner arc of one sector ends where the next one starts.
            let PathCommand::ArcTo { to, .. } = pair[0].commands()[1] else {
                panic!("expected inner arc");
            };
            let next_start = pair[1].start().expect("sector start");
            assert_eq!(fmt_point(to), fmt_point(next_start));
        }
        let last_end = match sectors[11].commands()[1] {
            PathCommand::ArcTo { to, .. } => to,
            _ => panic!("expected inner arc"),
        };
        let first_start = sectors[0].start().expect("sector start");
        assert_eq!(fmt_point(last_end), fmt_point(first_start));
    }

    #[test]
    fn full_turn_goes_through_the_midpoint() {
        let path = thin_arc(Point::ZERO, 10.0, 0.0, TAU);
        let arcs = path
            .commands()
            .iter()
            .filter(|c| matches!(c, PathCommand::ArcTo { .. }))
            .count();
        assert_eq!(arcs, 2);
        assert_eq!(path.to_string(), "M10.00,0.00 A10 10 0 0 1 -10.00,0.00 A10 10 0 0 1 10.00,0.00");
    }
}
