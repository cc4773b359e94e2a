// Copyright 2025 the Calwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paint order of the wheel layers.
//!
//! Each layer becomes one group under the scene root, so exporters and tests can address a ring
//! by its group id without inspecting geometry.

/// One layer of the wheel, in paint order (bottom first).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Layer {
    /// Colored month bands and month labels.
    Months,
    /// Outlined week bands and week numbers.
    Weeks,
    /// Day ticks.
    Days,
    /// Current instant marker.
    Today,
    /// Event sectors and labels.
    Events,
}

impl Layer {
    /// All layers, bottom to top.
    pub const PAINT_ORDER: [Self; 5] = [
        Self::Months,
        Self::Weeks,
        Self::Days,
        Self::Today,
        Self::Events,
    ];

    /// Id of the layer's group.
    pub fn group_id(self) -> &'static str {
        match self {
            Self::Months => "months",
            Self::Weeks => "weeks",
            Self::Days => "days",
            Self::Today => "today-indicator",
            Self::Events => "events",
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn paint_order_matches_ordering() {
        let mut sorted = Layer::PAINT_ORDER;
        sorted.sort();
        assert_eq!(sorted, Layer::PAINT_ORDER);
        assert_eq!(Layer::PAINT_ORDER[0], Layer::Months);
        assert_eq!(Layer::PAINT_ORDER[4], Layer::Events);
    }
}
