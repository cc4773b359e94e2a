// Copyright 2025 the Calwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small vector scene tree for calendar wheels.
//!
//! The scene is what the wheel engine produces and what exporters consume:
//! - **Groups** carry an ordered list of transforms and paint their children in order.
//! - **Paths** store SVG-style path data, including elliptical arc commands, so the output stays
//!   structurally equivalent to a static vector document.
//! - **Lines** are single stroked segments.
//! - **Text on path** binds a label to a previously declared path by id.
//!
//! Serialization (SVG markup, document prolog) lives downstream.

#![no_std]

extern crate alloc;

mod node;
mod path;
mod transform;

pub use node::{
    Group, LineNode, Node, PathNode, Scene, Stroke, TextAnchor, TextBaseline, TextPathNode,
};
pub use path::{FRACTION_DIGITS, PathCommand, PathData};
pub use transform::Transform;
