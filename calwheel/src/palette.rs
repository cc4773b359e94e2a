// Copyright 2025 the Calwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Month color palettes.

use peniko::Color;

use crate::WheelError;

/// One color per calendar month, January first.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    colors: [Color; 12],
}

impl Palette {
    /// Creates a palette from exactly twelve colors.
    pub fn new(colors: [Color; 12]) -> Self {
        Self { colors }
    }

    /// Creates a palette from a slice, which must hold exactly twelve colors.
    pub fn from_slice(colors: &[Color]) -> Result<Self, WheelError> {
        let colors: [Color; 12] = colors
            .try_into()
            .map_err(|_| WheelError::PaletteLength(colors.len()))?;
        Ok(Self { colors })
    }

    /// Color for a zero-based month (`0` is January). Out-of-range months wrap.
    pub fn month_color(&self, month0: u32) -> Color {
        self.colors[(month0 % 12) as usize]
    }

    /// All twelve colors.
    pub fn colors(&self) -> &[Color; 12] {
        &self.colors
    }

    /// Cool-to-warm seasonal blues, greens, yellows and purples.
    pub fn spectral() -> Self {
        Self::new([
            Color::from_rgb8(0x52, 0xb4, 0xe4),
            Color::from_rgb8(0x3a, 0x84, 0xca),
            Color::from_rgb8(0x37, 0x59, 0xa5),
            Color::from_rgb8(0x45, 0x99, 0x94),
            Color::from_rgb8(0x3a, 0x82, 0x52),
            Color::from_rgb8(0x68, 0xac, 0x56),
            Color::from_rgb8(0xf6, 0xdb, 0x54),
            Color::from_rgb8(0xe5, 0x86, 0x3b),
            Color::from_rgb8(0xb1, 0x30, 0x2e),
            Color::from_rgb8(0xc9, 0x50, 0x95),
            Color::from_rgb8(0x6d, 0x5b, 0xa3),
            Color::from_rgb8(0x59, 0x58, 0xa1),
        ])
    }

    /// Saturated per-month colors (ice blue, valentine red, spring green, ...).
    pub fn vivid() -> Self {
        Self::new([
            Color::from_rgb8(0x00, 0x66, 0xff),
            Color::from_rgb8(0xff, 0x00, 0x66),
            Color::from_rgb8(0x00, 0xff, 0x66),
            Color::from_rgb8(0x99, 0x00, 0xff),
            Color::from_rgb8(0xff, 0x00, 0x99),
            Color::from_rgb8(0x00, 0x99, 0xff),
            Color::from_rgb8(0xff, 0xd7, 0x00),
            Color::from_rgb8(0x00, 0xff, 0xe6),
            Color::from_rgb8(0xff, 0x99, 0x00),
            Color::from_rgb8(0xff, 0x66, 0x00),
            Color::from_rgb8(0xcc, 0x33, 0x00),
            Color::from_rgb8(0x00, 0x66, 0x33),
        ])
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::spectral()
    }
}
