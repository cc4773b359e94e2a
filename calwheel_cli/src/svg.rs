// Copyright 2025 the Calwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Standalone SVG documents from wheel scenes.

use std::fmt::Write as _;

use calwheel_scene::{
    Group, LineNode, Node, PathNode, Scene, Stroke, TextAnchor, TextBaseline, TextPathNode,
    Transform,
};
use peniko::Color;

const PROLOG: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#;
const SVG_NS: &str = "http://www.w3.org/2000/svg";
const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

/// Serializes `scene` as a complete SVG document (prolog, namespaces and view box included).
pub(crate) fn to_svg_document(scene: &Scene) -> String {
    let mut out = String::new();
    out.push_str(PROLOG);
    out.push('\n');
    let vb = scene.view_box();
    let _ = writeln!(
        out,
        r#"<svg xmlns="{SVG_NS}" xmlns:xlink="{XLINK_NS}" width="{}" height="{}" viewBox="{} {} {} {}">"#,
        vb.width(),
        vb.height(),
        vb.x0,
        vb.y0,
        vb.width(),
        vb.height()
    );
    write_group(&mut out, &scene.root, 1);
    out.push_str("</svg>\n");
    out
}

fn write_group(out: &mut String, group: &Group, depth: usize) {
    indent(out, depth);
    out.push_str("<g");
    if let Some(id) = &group.id {
        write_attr(out, "id", &escape_xml(id));
    }
    if !group.transforms.is_empty() {
        write_attr(out, "transform", &transform_attr(&group.transforms));
    }
    out.push_str(">\n");
    for child in &group.children {
        write_node(out, child, depth + 1);
    }
    indent(out, depth);
    out.push_str("</g>\n");
}

fn write_node(out: &mut String, node: &Node, depth: usize) {
    match node {
        Node::Group(g) => write_group(out, g, depth),
        Node::Path(p) => write_path(out, p, depth),
        Node::Line(l) => write_line(out, l, depth),
        Node::TextPath(t) => write_text_path(out, t, depth),
    }
}

fn write_path(out: &mut String, p: &PathNode, depth: usize) {
    indent(out, depth);
    out.push_str("<path");
    if let Some(id) = &p.id {
        write_attr(out, "id", &escape_xml(id));
    }
    write_attr(out, "d", &p.data.to_string());
    match p.fill {
        Some(color) => write_paint(out, "fill", color),
        None => write_attr(out, "fill", "none"),
    }
    if let Some(stroke) = p.stroke {
        write_stroke(out, stroke);
    }
    write_opacity(out, p.opacity);
    out.push_str("/>\n");
}

fn write_line(out: &mut String, l: &LineNode, depth: usize) {
    indent(out, depth);
    let _ = write!(
        out,
        r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}""#,
        l.from.x, l.from.y, l.to.x, l.to.y
    );
    write_stroke(out, l.stroke);
    write_opacity(out, l.opacity);
    out.push_str("/>\n");
}

fn write_text_path(out: &mut String, t: &TextPathNode, depth: usize) {
    indent(out, depth);
    out.push_str("<text");
    write_attr(out, "font-size", &t.font_size.to_string());
    write_attr(
        out,
        "text-anchor",
        match t.anchor {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        },
    );
    if let Some(baseline) = t.baseline {
        write_attr(
            out,
            "dominant-baseline",
            match baseline {
                TextBaseline::Middle => "middle",
                TextBaseline::Alphabetic => "alphabetic",
                TextBaseline::Hanging => "hanging",
                TextBaseline::Ideographic => "ideographic",
            },
        );
    }
    if let Some(fill) = t.fill {
        write_paint(out, "fill", fill);
    }
    out.push_str("><textPath");
    let href = format!("#{}", escape_xml(&t.href));
    write_attr(out, "href", &href);
    write_attr(out, "xlink:href", &href);
    write_attr(out, "startOffset", &format!("{}%", t.start_offset));
    out.push('>');
    out.push_str(&escape_xml(&t.text));
    out.push_str("</textPath></text>\n");
}

fn transform_attr(transforms: &[Transform]) -> String {
    transforms
        .iter()
        .map(|t| match t {
            Transform::Translate(v) => format!("translate({} {})", v.x, v.y),
            Transform::Rotate(deg) => format!("rotate({deg})"),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn write_stroke(out: &mut String, stroke: Stroke) {
    write_paint(out, "stroke", stroke.color);
    write_attr(out, "stroke-width", &stroke.width.to_string());
}

fn write_opacity(out: &mut String, opacity: f64) {
    if opacity < 1.0 {
        write_attr(out, "opacity", &opacity.to_string());
    }
}

fn write_paint(out: &mut String, name: &str, color: Color) {
    let rgba = color.to_rgba8();
    let _ = write!(
        out,
        r##" {name}="#{:02x}{:02x}{:02x}""##,
        rgba.r, rgba.g, rgba.b
    );
    if rgba.a != 255 {
        let _ = write!(out, r#" {name}-opacity="{}""#, f64::from(rgba.a) / 255.0);
    }
}

fn write_attr(out: &mut String, name: &str, value: &str) {
    let _ = write!(out, r#" {name}="{value}""#);
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
