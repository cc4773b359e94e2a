// Copyright 2025 the Calwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Group transforms.

use kurbo::{Affine, Vec2};

/// A single group transform, in SVG `transform` attribute terms.
///
/// Lists of transforms apply right-to-left to points, exactly as in SVG: for
/// `[Rotate(a), Translate(v)]` a point is translated first, then rotated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transform {
    /// Translation by a vector.
    Translate(Vec2),
    /// Rotation about the origin, in degrees (positive is clockwise on a y-down canvas).
    Rotate(f64),
}

impl Transform {
    /// Returns the equivalent affine transform.
    pub fn to_affine(self) -> Affine {
        match self {
            Self::Translate(v) => Affine::translate(v),
            Self::Rotate(degrees) => Affine::rotate(degrees.to_radians()),
        }
    }

    /// Composes a list of transforms into one affine transform.
    pub fn compose(transforms: &[Self]) -> Affine {
        transforms
            .iter()
            .fold(Affine::IDENTITY, |acc, t| acc * t.to_affine())
    }
}
