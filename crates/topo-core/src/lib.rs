#![forbid(unsafe_code)]

//! Core: geometric primitives for the display topology engine.
//!
//! # Role in the workspace
//! `topo-core` owns the value types every other crate speaks in. Display
//! extents and snap results are [`geometry::RectF`] values in display space;
//! rendered blocks are [`geometry::PaneRect`] values in integer pane space.
//!
//! # How it fits in the system
//! `topo-layout` builds the scale mapping and the clamp solver on top of
//! these types, and `topo-cli` serialises them to and from JSON.

pub mod geometry;
pub mod units;

pub use geometry::{PanePoint, PaneRect, PointF, RectF};
