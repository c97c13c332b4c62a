#![forbid(unsafe_code)]

//! Layout solvers for the display arrangement pane.
//!
//! # Role
//! The arrangement pane shows one block per display and lets the user drag
//! blocks into a new topology. This crate owns the two pure computations
//! behind it:
//!
//! - [`ScaleMapping`]: one scale factor plus an integer origin that maps
//!   display space into pane space, derived from the display extents and
//!   the pane's [`LayoutConstraints`].
//! - [`clamp_position`]: the snapped position of a dragged display that
//!   touches a neighbour edge and overlaps nothing.
//!
//! [`BlockDrag`] ties the two together for one drag gesture, and
//! [`same_topology`] lets the host skip a relayout when an identical
//! topology is announced again.
//!
//! Nothing here holds state between calls; a new mapping is computed on
//! every layout pass.

pub mod clamp;
pub mod drag;
pub mod scale;

pub use clamp::{clamp_candidates, clamp_position};
pub use drag::{
    BlockDrag, DisplayId, DisplayPosition, DragError, DragUpdate, POSITION_EPSILON,
    same_display_position, same_topology,
};
pub use scale::{LayoutConstraints, ScaleError, ScaleMapping};
pub use topo_core::geometry::{PanePoint, PaneRect, PointF, RectF};
