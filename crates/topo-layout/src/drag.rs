#![forbid(unsafe_code)]

//! Drag session over the arrangement pane.
//!
//! A [`BlockDrag`] is created when the pointer goes down on a block and
//! lives until the drop. It remembers which displays stay put, the dragged
//! display's size in display space, and where inside the block the pointer
//! grabbed it. Each pointer sample is converted to display space, snapped
//! with [`clamp_position`], and mapped back to a block origin in the pane.
//!
//! Gesture capture belongs to the host; this module only sees pointer
//! positions in pane space.

use std::fmt;

use serde::{Deserialize, Serialize};
use topo_core::geometry::{PanePoint, PointF, RectF};

use crate::clamp::clamp_position;
use crate::scale::ScaleMapping;

/// Largest per-edge difference, in display space, still treated as the same
/// position. One display pixel is below one pane pixel at any block ratio
/// under 1, so a refresh would not visibly move anything.
pub const POSITION_EPSILON: f64 = 1.0;

/// Stable identifier of one display in a topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayId(pub u32);

impl DisplayId {
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for DisplayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A display and its absolute bounds in display space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayPosition {
    pub id: DisplayId,
    pub bounds: RectF,
}

impl DisplayPosition {
    #[must_use]
    pub const fn new(id: DisplayId, bounds: RectF) -> Self {
        Self { id, bounds }
    }
}

/// Reasons a drag cannot start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragError {
    /// A lone display has nothing to snap against.
    SingleDisplay,
    /// The grabbed id is not in the topology.
    UnknownDisplay { id: DisplayId },
}

impl fmt::Display for DragError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SingleDisplay => write!(f, "topology has a single display; nothing to drag"),
            Self::UnknownDisplay { id } => write!(f, "display {id} is not in the topology"),
        }
    }
}

impl std::error::Error for DragError {}

/// Result of one pointer sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragUpdate {
    /// Unsnapped drag position in display space.
    pub raw: RectF,
    /// Snapped position in display space.
    pub snapped: RectF,
    /// Where the host should place the dragged block.
    pub block_origin: PanePoint,
}

/// State of one in-progress block drag.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockDrag {
    display_id: DisplayId,
    stationary: Vec<DisplayPosition>,
    stationary_bounds: Vec<RectF>,
    display_width: f64,
    display_height: f64,
    /// Pointer position minus block origin, in pane space.
    drag_offset: PointF,
}

impl BlockDrag {
    /// Start dragging display `id`.
    ///
    /// `pointer` is the pane position of the pointer and `block_origin` the
    /// pane position of the block's top-left corner at pointer-down.
    pub fn begin(
        positions: &[DisplayPosition],
        id: DisplayId,
        pointer: PointF,
        block_origin: PointF,
    ) -> Result<Self, DragError> {
        if positions.len() <= 1 {
            return Err(DragError::SingleDisplay);
        }
        let dragged = positions
            .iter()
            .find(|position| position.id == id)
            .ok_or(DragError::UnknownDisplay { id })?;

        let stationary: Vec<DisplayPosition> = positions
            .iter()
            .filter(|position| position.id != id)
            .copied()
            .collect();
        let stationary_bounds = stationary.iter().map(|position| position.bounds).collect();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            display = id.get(),
            stationary = stationary.len(),
            "block drag started"
        );

        Ok(Self {
            display_id: id,
            stationary,
            stationary_bounds,
            display_width: dragged.bounds.width(),
            display_height: dragged.bounds.height(),
            drag_offset: PointF::new(pointer.x - block_origin.x, pointer.y - block_origin.y),
        })
    }

    #[must_use]
    pub const fn display_id(&self) -> DisplayId {
        self.display_id
    }

    /// Displays that are not moving, in topology order.
    #[must_use]
    pub fn stationary(&self) -> &[DisplayPosition] {
        &self.stationary
    }

    /// Resolve one pointer sample to a snapped position.
    pub fn drag_to(&self, scale: &ScaleMapping, pointer: PointF) -> DragUpdate {
        let origin = scale.pane_to_display(PointF::new(
            pointer.x - self.drag_offset.x,
            pointer.y - self.drag_offset.y,
        ));
        let raw = RectF::from_origin_size(origin, self.display_width, self.display_height);
        let snapped = clamp_position(&self.stationary_bounds, raw);
        DragUpdate {
            raw,
            snapped,
            block_origin: scale.display_to_pane(snapped.top_left()),
        }
    }

    /// Finish the drag with the block resting at `block_origin`.
    ///
    /// Returns the new top-left corner of every display: stationary ones in
    /// their original order, the dragged one last.
    pub fn drop_at(self, scale: &ScaleMapping, block_origin: PanePoint) -> Vec<(DisplayId, PointF)> {
        let dropped_at = scale.pane_to_display(block_origin);

        #[cfg(feature = "tracing")]
        tracing::info!(
            display = self.display_id.get(),
            x = dropped_at.x,
            y = dropped_at.y,
            "block dropped"
        );

        self.stationary
            .iter()
            .map(|position| (position.id, position.bounds.top_left()))
            .chain(std::iter::once((self.display_id, dropped_at)))
            .collect()
    }
}

/// True when every edge differs by less than [`POSITION_EPSILON`].
pub fn same_display_position(a: &RectF, b: &RectF) -> bool {
    (a.left - b.left).abs() < POSITION_EPSILON
        && (a.right - b.right).abs() < POSITION_EPSILON
        && (a.top - b.top).abs() < POSITION_EPSILON
        && (a.bottom - b.bottom).abs() < POSITION_EPSILON
}

/// True when `new` lists the same displays in the same order at the same
/// positions as `old`, so the pane does not need a relayout.
pub fn same_topology(old: &[DisplayPosition], new: &[DisplayPosition]) -> bool {
    old.len() == new.len()
        && old
            .iter()
            .zip(new)
            .all(|(old, new)| old.id == new.id && same_display_position(&old.bounds, &new.bounds))
}
