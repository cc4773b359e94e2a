// Copyright 2025 the Calwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG-style path data.
//!
//! Paths keep their elliptical arc commands instead of flattening them to cubic curves, so the
//! serialized form matches what a hand-written SVG document would contain. Conversion to a
//! [`BezPath`] is available for bounds and hit-testing.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use kurbo::{Arc, BezPath, Point, Rect, Shape, SvgArc, Vec2};

/// Number of fractional digits used when formatting coordinates.
pub const FRACTION_DIGITS: usize = 2;

/// A single path command with absolute coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    /// Starts a new subpath.
    MoveTo(Point),
    /// Straight line to a point.
    LineTo(Point),
    /// Circular arc (equal radii, no axis rotation) to a point.
    ArcTo {
        /// Circle radius.
        radius: f64,
        /// Take the long way around (SVG `large-arc-flag`).
        large_arc: bool,
        /// Sweep in the positive-angle direction (SVG `sweep-flag`).
        sweep: bool,
        /// End point.
        to: Point,
    },
    /// Closes the current subpath.
    Close,
}

/// An ordered list of [`PathCommand`]s.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathData {
    commands: Vec<PathCommand>,
}

impl PathData {
    /// Creates an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a move command.
    pub fn move_to(&mut self, p: impl Into<Point>) {
        self.commands.push(PathCommand::MoveTo(p.into()));
    }

    /// Appends a line command.
    pub fn line_to(&mut self, p: impl Into<Point>) {
        self.commands.push(PathCommand::LineTo(p.into()));
    }

    /// Appends a circular arc command.
    pub fn arc_to(&mut self, radius: f64, large_arc: bool, sweep: bool, to: impl Into<Point>) {
        self.commands.push(PathCommand::ArcTo {
            radius,
            large_arc,
            sweep,
            to: to.into(),
        });
    }

    /// Appends a close command.
    pub fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    /// Returns the commands in order.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Returns `true` if the path has no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Returns `true` if the last command closes the path.
    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }

    /// Returns the first point of the path.
    pub fn start(&self) -> Option<Point> {
        self.commands.iter().find_map(|c| match c {
            PathCommand::MoveTo(p) => Some(*p),
            _ => None,
        })
    }

    /// Returns the last explicit point of the path (ignoring a trailing close).
    pub fn end(&self) -> Option<Point> {
        self.commands.iter().rev().find_map(|c| match c {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(*p),
            PathCommand::ArcTo { to, .. } => Some(*to),
            PathCommand::Close => None,
        })
    }

    /// Converts the path into a [`BezPath`], approximating arcs within `tolerance`.
    pub fn to_bez_path(&self, tolerance: f64) -> BezPath {
        let mut out = BezPath::new();
        let mut current = Point::ZERO;
        let mut subpath_start = Point::ZERO;
        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(p) => {
                    out.move_to(p);
                    current = p;
                    subpath_start = p;
                }
                PathCommand::LineTo(p) => {
                    out.line_to(p);
                    current = p;
                }
                PathCommand::ArcTo {
                    radius,
                    large_arc,
                    sweep,
                    to,
                } => {
                    let svg_arc = SvgArc {
                        from: current,
                        to,
                        radii: Vec2::new(radius, radius),
                        x_rotation: 0.0,
                        large_arc,
                        sweep,
                    };
                    match Arc::from_svg_arc(&svg_arc) {
                        Some(arc) => {
                            for el in arc.append_iter(tolerance) {
                                out.push(el);
                            }
                        }
                        None => out.line_to(to),
                    }
                    current = to;
                }
                PathCommand::Close => {
                    out.close_path();
                    current = subpath_start;
                }
            }
        }
        out
    }

    /// Returns the bounding box of the path, or `None` for an empty path.
    pub fn bounds(&self) -> Option<Rect> {
        if self.is_empty() {
            return None;
        }
        Some(self.to_bez_path(0.1).bounding_box())
    }
}

/// Formats a coordinate with [`FRACTION_DIGITS`], folding values that round to zero into `0`.
fn write_coord(f: &mut fmt::Formatter<'_>, v: f64) -> fmt::Result {
    let v = if v > -0.005 && v < 0.005 { 0.0 } else { v };
    write!(f, "{v:.prec$}", prec = FRACTION_DIGITS)
}

fn write_point(f: &mut fmt::Formatter<'_>, p: Point) -> fmt::Result {
    write_coord(f, p.x)?;
    f.write_str(",")?;
    write_coord(f, p.y)
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::MoveTo(p) => {
                f.write_str("M")?;
                write_point(f, p)
            }
            Self::LineTo(p) => {
                f.write_str("L")?;
                write_point(f, p)
            }
            Self::ArcTo {
                radius,
                large_arc,
                sweep,
                to,
            } => {
                write!(
                    f,
                    "A{radius} {radius} 0 {} {} ",
                    u8::from(large_arc),
                    u8::from(sweep)
                )?;
                write_point(f, to)
            }
            Self::Close => f.write_str("Z"),
        }
    }
}

impl fmt::Display for PathData {
    /// Writes the path in SVG `d` attribute syntax.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{command}")?;
        }
        Ok(())
    }
}
