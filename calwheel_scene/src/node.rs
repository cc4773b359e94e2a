// Copyright 2025 the Calwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene nodes.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect, Vec2};
use peniko::Color;
use smallvec::SmallVec;

use crate::path::PathData;
use crate::transform::Transform;

/// Horizontal alignment of text relative to its anchor point along a path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// Text starts at the anchor.
    #[default]
    Start,
    /// Text is centered on the anchor.
    Middle,
    /// Text ends at the anchor.
    End,
}

/// Vertical alignment of text relative to the path it follows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    /// The path runs through the middle of the glyphs.
    Middle,
    /// The path is the alphabetic baseline.
    #[default]
    Alphabetic,
    /// The path is the hanging baseline.
    Hanging,
    /// The path is the ideographic baseline.
    Ideographic,
}

/// Stroke paint and width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in scene units.
    pub width: f64,
}

impl Stroke {
    /// Creates a solid stroke.
    pub fn solid(color: Color, width: f64) -> Self {
        Self { color, width }
    }
}

/// A filled and/or stroked path.
#[derive(Clone, Debug, PartialEq)]
pub struct PathNode {
    /// Element id, required when text refers to this path.
    pub id: Option<String>,
    /// Path geometry.
    pub data: PathData,
    /// Fill color; `None` leaves the path unfilled.
    pub fill: Option<Color>,
    /// Optional outline.
    pub stroke: Option<Stroke>,
    /// Whole-element opacity in `0..=1`.
    pub opacity: f64,
}

impl PathNode {
    /// Creates an unfilled, unstroked path (an invisible guide until styled).
    pub fn new(data: PathData) -> Self {
        Self {
            id: None,
            data,
            fill: None,
            stroke: None,
            opacity: 1.0,
        }
    }

    /// Sets the element id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the fill color.
    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }

    /// Sets the outline stroke.
    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = Some(stroke);
        self
    }

    /// Sets the opacity.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Returns `true` for paths that paint nothing (text guides).
    pub fn is_guide(&self) -> bool {
        self.fill.is_none() && self.stroke.is_none()
    }
}

/// A stroked straight segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineNode {
    /// Start point.
    pub from: Point,
    /// End point.
    pub to: Point,
    /// Stroke paint.
    pub stroke: Stroke,
    /// Whole-element opacity in `0..=1`.
    pub opacity: f64,
}

impl LineNode {
    /// Creates a fully opaque line.
    pub fn new(from: Point, to: Point, stroke: Stroke) -> Self {
        Self {
            from,
            to,
            stroke,
            opacity: 1.0,
        }
    }

    /// Sets the opacity.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }
}

/// Text laid out along a path declared elsewhere in the scene.
#[derive(Clone, Debug, PartialEq)]
pub struct TextPathNode {
    /// Id of the guide path the text follows.
    pub href: String,
    /// Text content (unshaped).
    pub text: String,
    /// Font size in scene units.
    pub font_size: f64,
    /// Alignment relative to the start offset.
    pub anchor: TextAnchor,
    /// Vertical alignment; `None` keeps the renderer default.
    pub baseline: Option<TextBaseline>,
    /// Position along the path, in percent of its length.
    pub start_offset: f64,
    /// Fill color; `None` keeps the renderer default.
    pub fill: Option<Color>,
}

impl TextPathNode {
    /// Creates a label at the start of `href`.
    pub fn new(href: impl Into<String>, text: impl Into<String>, font_size: f64) -> Self {
        Self {
            href: href.into(),
            text: text.into(),
            font_size,
            anchor: TextAnchor::Start,
            baseline: None,
            start_offset: 0.0,
            fill: None,
        }
    }

    /// Sets the text anchor.
    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Sets the text baseline.
    pub fn with_baseline(mut self, baseline: TextBaseline) -> Self {
        self.baseline = Some(baseline);
        self
    }

    /// Sets the start offset (percent of path length).
    pub fn with_start_offset(mut self, percent: f64) -> Self {
        self.start_offset = percent;
        self
    }

    /// Sets the fill color.
    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }
}

/// A group of nodes painted in order under a shared transform list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Group {
    /// Optional element id.
    pub id: Option<String>,
    /// Transforms, outermost first.
    pub transforms: SmallVec<[Transform; 2]>,
    /// Children, bottom to top.
    pub children: Vec<Node>,
}

impl Group {
    /// Creates an empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the element id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Appends a transform (applied before the ones already present).
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transforms.push(transform);
        self
    }

    /// Appends a translation.
    pub fn translated(self, v: Vec2) -> Self {
        self.with_transform(Transform::Translate(v))
    }

    /// Appends a rotation in degrees.
    pub fn rotated(self, degrees: f64) -> Self {
        self.with_transform(Transform::Rotate(degrees))
    }

    /// Appends a child on top of the existing ones.
    pub fn push(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    /// Returns `true` if the group has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Visits every descendant in paint order (depth-first, parents before children).
    pub fn visit<'a>(&'a self, f: &mut impl FnMut(&'a Node)) {
        for child in &self.children {
            f(child);
            if let Node::Group(g) = child {
                g.visit(f);
            }
        }
    }

    /// Returns the first descendant path with the given id.
    pub fn find_path(&self, id: &str) -> Option<&PathNode> {
        let mut found = None;
        self.visit(&mut |node| {
            if found.is_none()
                && let Node::Path(p) = node
                && p.id.as_deref() == Some(id)
            {
                found = Some(p);
            }
        });
        found
    }

    /// Bounds of the children after applying this group's transforms.
    pub fn bounds(&self) -> Option<Rect> {
        let inner = self
            .children
            .iter()
            .filter_map(Node::bounds)
            .reduce(|a, b| a.union(b))?;
        Some(Transform::compose(&self.transforms).transform_rect_bbox(inner))
    }
}

/// A scene node.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// Nested group.
    Group(Group),
    /// Path (sector, outline or text guide).
    Path(PathNode),
    /// Straight line.
    Line(LineNode),
    /// Text following a path.
    TextPath(TextPathNode),
}

impl Node {
    /// Geometric bounds in the parent's coordinates.
    ///
    /// Text and invisible guide paths have no bounds.
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Self::Group(g) => g.bounds(),
            Self::Path(p) if p.is_guide() => None,
            Self::Path(p) => p.data.bounds(),
            Self::Line(l) => Some(Rect::from_points(l.from, l.to)),
            Self::TextPath(_) => None,
        }
    }
}

impl From<Group> for Node {
    fn from(value: Group) -> Self {
        Self::Group(value)
    }
}

impl From<PathNode> for Node {
    fn from(value: PathNode) -> Self {
        Self::Path(value)
    }
}

impl From<LineNode> for Node {
    fn from(value: LineNode) -> Self {
        Self::Line(value)
    }
}

impl From<TextPathNode> for Node {
    fn from(value: TextPathNode) -> Self {
        Self::TextPath(value)
    }
}

/// A complete scene: a root group inside a square viewport.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Side length of the square viewport.
    pub size: f64,
    /// Root group.
    pub root: Group,
}

impl Scene {
    /// Creates a scene.
    pub fn new(size: f64, root: Group) -> Self {
        Self { size, root }
    }

    /// The viewport rectangle `(0, 0)..(size, size)`.
    pub fn view_box(&self) -> Rect {
        Rect::new(0.0, 0.0, self.size, self.size)
    }

    /// Visits every node below the root in paint order.
    pub fn visit<'a>(&'a self, f: &mut impl FnMut(&'a Node)) {
        self.root.visit(f);
    }

    /// Returns the number of nodes matching `pred`.
    pub fn count(&self, mut pred: impl FnMut(&Node) -> bool) -> usize {
        let mut n = 0;
        self.visit(&mut |node| {
            if pred(node) {
                n += 1;
            }
        });
        n
    }

    /// Bounds of the painted content in viewport coordinates.
    pub fn content_bounds(&self) -> Option<Rect> {
        self.root.bounds()
    }
}
