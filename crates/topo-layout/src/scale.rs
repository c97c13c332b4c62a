#![forbid(unsafe_code)]

//! Scale mapping between display space and pane space.
//!
//! The pane shows every display as a block scaled by one common ratio. The
//! ratio is chosen so the whole arrangement fills at most
//! [`PANE_FILL_FRACTION`] of the pane width, blocks never grow past the
//! caller's ceiling, and no block edge drops below the tap-target floor.
//! The floor wins when the two disagree.

use std::fmt;

use serde::{Deserialize, Serialize};
use topo_core::geometry::{PanePoint, PaneRect, PointF, RectF};
use topo_core::units::{DENSITY_DEFAULT, dp_to_px};

/// Share of the pane width the display bounds may occupy. The rest is
/// split evenly into left and right padding.
pub const PANE_FILL_FRACTION: f64 = 0.6;

/// Default tap-target floor for a block edge, in dp.
pub const DEFAULT_MIN_EDGE_DP: f64 = 60.0;

/// Default ceiling for the block-to-display ratio.
pub const DEFAULT_MAX_BLOCK_RATIO: f64 = 0.05;

/// Default pane width in pixels.
pub const DEFAULT_PANE_WIDTH: u32 = 640;

/// Scalar inputs of one layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConstraints {
    /// Pane width in pixels.
    pub pane_width: u32,
    /// Smallest permitted block edge, in pane pixels.
    pub min_edge_length: f64,
    /// Largest block-to-display ratio, in `(0, 1]`.
    pub max_block_ratio: f64,
}

impl LayoutConstraints {
    /// Constraints with the tap-target floor given in dp at `dpi`.
    pub fn with_density(pane_width: u32, min_edge_dp: f64, dpi: u32, max_block_ratio: f64) -> Self {
        Self {
            pane_width,
            min_edge_length: dp_to_px(min_edge_dp, dpi),
            max_block_ratio,
        }
    }
}

impl Default for LayoutConstraints {
    fn default() -> Self {
        Self::with_density(
            DEFAULT_PANE_WIDTH,
            DEFAULT_MIN_EDGE_DP,
            DENSITY_DEFAULT,
            DEFAULT_MAX_BLOCK_RATIO,
        )
    }
}

/// Invalid input to [`ScaleMapping::compute`].
#[derive(Debug, Clone, PartialEq)]
pub enum ScaleError {
    /// No displays to lay out.
    EmptyDisplaySet,
    /// Pane width is zero.
    InvalidPaneWidth { width: u32 },
    /// Minimum block edge is non-positive or not finite.
    InvalidMinEdgeLength { value: f64 },
    /// Block ratio ceiling is outside (0, 1].
    InvalidMaxBlockRatio { value: f64 },
    /// Display at `index` has a non-positive extent or a non-finite edge.
    DegenerateDisplay { index: usize, bounds: RectF },
}

impl fmt::Display for ScaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDisplaySet => write!(f, "display set is empty"),
            Self::InvalidPaneWidth { width } => write!(f, "pane width {width} must be positive"),
            Self::InvalidMinEdgeLength { value } => {
                write!(f, "minimum edge length {value} must be positive and finite")
            }
            Self::InvalidMaxBlockRatio { value } => {
                write!(f, "maximum block ratio {value} must be in (0, 1]")
            }
            Self::DegenerateDisplay { index, bounds } => write!(
                f,
                "display {index} has degenerate bounds [{}, {}, {}, {}]",
                bounds.left, bounds.top, bounds.right, bounds.bottom
            ),
        }
    }
}

impl std::error::Error for ScaleError {}

/// Affine mapping from display space to pane space for one layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleMapping {
    /// Block size over display size. Usually well below 1.
    pub block_ratio: f64,
    /// Pane height needed to show every block with padding.
    pub pane_height: i32,
    /// Pane X of display X = 0.
    pub origin_x: i32,
    /// Pane Y of display Y = 0.
    pub origin_y: i32,
}

impl ScaleMapping {
    /// Compute the mapping for `displays` inside a pane `pane_width` wide.
    pub fn compute(
        pane_width: u32,
        min_edge_length: f64,
        max_block_ratio: f64,
        displays: &[RectF],
    ) -> Result<Self, ScaleError> {
        if pane_width == 0 {
            return Err(ScaleError::InvalidPaneWidth { width: pane_width });
        }
        if !(min_edge_length.is_finite() && min_edge_length > 0.0) {
            return Err(ScaleError::InvalidMinEdgeLength {
                value: min_edge_length,
            });
        }
        if !(max_block_ratio > 0.0 && max_block_ratio <= 1.0) {
            return Err(ScaleError::InvalidMaxBlockRatio {
                value: max_block_ratio,
            });
        }
        let (first, rest) = displays.split_first().ok_or(ScaleError::EmptyDisplaySet)?;
        for (index, bounds) in displays.iter().enumerate() {
            if !bounds.is_finite() || bounds.width() <= 0.0 || bounds.height() <= 0.0 {
                return Err(ScaleError::DegenerateDisplay {
                    index,
                    bounds: *bounds,
                });
            }
        }

        let display_bounds = rest.iter().fold(*first, |acc, rect| acc.union(rect));
        let smallest_display_dim = displays
            .iter()
            .fold(f64::INFINITY, |acc, rect| acc.min(rect.width()).min(rect.height()));
        let biggest_display_height = displays
            .iter()
            .fold(0.0_f64, |acc, rect| acc.max(rect.height()));

        let pane_width_px = f64::from(pane_width);
        let bounds_width = display_bounds.width();
        let bounds_height = display_bounds.height();

        let raw_block_ratio = max_block_ratio.min(pane_width_px * PANE_FILL_FRACTION / bounds_width);
        let block_ratio = (min_edge_length / smallest_display_dim).max(raw_block_ratio);

        // Aspect-consistent height, floored so roughly 20% padding remains
        // above and below, then capped at one tallest display of padding
        // per side.
        let raw_pane_height = (pane_width_px / bounds_width * bounds_height)
            .max(bounds_height * block_ratio / PANE_FILL_FRACTION);
        let pane_height = round_f64_to_i32(
            raw_pane_height.min(block_ratio * (bounds_height + 2.0 * biggest_display_height)),
        )
        .max(1);

        let block_most_left = (pane_width_px - bounds_width * block_ratio) / 2.0;
        let block_most_top = (f64::from(pane_height) - bounds_height * block_ratio) / 2.0;

        let mapping = Self {
            block_ratio,
            pane_height,
            origin_x: round_f64_to_i32(block_most_left - display_bounds.left * block_ratio),
            origin_y: round_f64_to_i32(block_most_top - display_bounds.top * block_ratio),
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            displays = displays.len(),
            block_ratio = mapping.block_ratio,
            pane_height = mapping.pane_height,
            origin_x = mapping.origin_x,
            origin_y = mapping.origin_y,
            floor_applied = block_ratio > raw_block_ratio,
            "computed topology scale"
        );

        Ok(mapping)
    }

    /// Compute the mapping from a bundled set of constraints.
    pub fn from_constraints(
        constraints: &LayoutConstraints,
        displays: &[RectF],
    ) -> Result<Self, ScaleError> {
        Self::compute(
            constraints.pane_width,
            constraints.min_edge_length,
            constraints.max_block_ratio,
            displays,
        )
    }

    /// Display coordinates to pane coordinates, without rounding.
    #[inline]
    pub fn display_to_pane_f(&self, display: PointF) -> PointF {
        PointF::new(
            display.x * self.block_ratio + f64::from(self.origin_x),
            display.y * self.block_ratio + f64::from(self.origin_y),
        )
    }

    /// Display coordinates to integer pane coordinates.
    #[inline]
    pub fn display_to_pane(&self, display: PointF) -> PanePoint {
        let pane = self.display_to_pane_f(display);
        PanePoint::new(round_f64_to_i32(pane.x), round_f64_to_i32(pane.y))
    }

    /// Pane coordinates to display coordinates.
    ///
    /// Accepts fractional pane positions so pointer samples need not be
    /// rounded first.
    #[inline]
    pub fn pane_to_display(&self, pane: impl Into<PointF>) -> PointF {
        let pane = pane.into();
        PointF::new(
            (pane.x - f64::from(self.origin_x)) / self.block_ratio,
            (pane.y - f64::from(self.origin_y)) / self.block_ratio,
        )
    }

    /// Rendered bounds of the block for a display at `bounds`.
    ///
    /// Size comes from the difference of the two mapped corners, so adjacent
    /// displays produce blocks that share an edge exactly.
    pub fn block_bounds(&self, bounds: &RectF) -> PaneRect {
        let top_left = self.display_to_pane(bounds.top_left());
        let bottom_right = self.display_to_pane(bounds.bottom_right());
        PaneRect::new(
            top_left.x,
            top_left.y,
            bottom_right.x.saturating_sub(top_left.x),
            bottom_right.y.saturating_sub(top_left.y),
        )
    }
}

impl fmt::Display for ScaleMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{TopologyScale blockRatio={:.6} originPaneXY={},{} paneHeight={}}}",
            self.block_ratio, self.origin_x, self.origin_y, self.pane_height
        )
    }
}

fn round_f64_to_i32(value: f64) -> i32 {
    if !value.is_finite() {
        return 0;
    }
    if value >= f64::from(i32::MAX) {
        return i32::MAX;
    }
    if value <= f64::from(i32::MIN) {
        return i32::MIN;
    }
    value.round() as i32
}
