//! Report-producing subcommands.
//!
//! Each command reads one JSON request, runs the solver, and returns a
//! serializable report. Printing is left to the dispatcher.

use std::path::PathBuf;

use clap::Args;
use serde::{Deserialize, Serialize};
use topo_core::geometry::{PaneRect, PointF, RectF};
use topo_layout::{
    BlockDrag, DisplayId, DisplayPosition, DragUpdate, LayoutConstraints, ScaleMapping,
    clamp_candidates,
};

use crate::config::ConstraintArgs;
use crate::error::Result;
use crate::util::read_json;

/// Displays given either with identifiers or as bare rectangles.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DisplaySet {
    Positions(Vec<DisplayPosition>),
    Rects(Vec<RectF>),
}

impl DisplaySet {
    fn entries(&self) -> Vec<(Option<DisplayId>, RectF)> {
        match self {
            Self::Positions(positions) => positions
                .iter()
                .map(|position| (Some(position.id), position.bounds))
                .collect(),
            Self::Rects(rects) => rects.iter().map(|rect| (None, *rect)).collect(),
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct ScaleArgs {
    /// JSON array of display rectangles, or `-` for stdin.
    #[arg(long, short, default_value = "-")]
    pub input: PathBuf,

    #[command(flatten)]
    pub constraints: ConstraintArgs,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<DisplayId>,
    pub display: RectF,
    pub block: PaneRect,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaleReport {
    pub mapping: ScaleMapping,
    pub summary: String,
    pub blocks: Vec<BlockReport>,
}

pub fn run_scale(args: &ScaleArgs) -> Result<ScaleReport> {
    let constraints = args.constraints.resolve()?;
    let displays: DisplaySet = read_json(&args.input)?;
    scale_report(&constraints, &displays)
}

pub fn scale_report(
    constraints: &LayoutConstraints,
    displays: &DisplaySet,
) -> Result<ScaleReport> {
    let entries = displays.entries();
    let bounds: Vec<RectF> = entries.iter().map(|(_, rect)| *rect).collect();
    let mapping = ScaleMapping::from_constraints(constraints, &bounds)?;
    tracing::info!(%mapping, "scale computed");

    let blocks = entries
        .into_iter()
        .map(|(id, display)| BlockReport {
            id,
            display,
            block: mapping.block_bounds(&display),
        })
        .collect();
    Ok(ScaleReport {
        mapping,
        summary: mapping.to_string(),
        blocks,
    })
}

#[derive(Debug, Clone, Args)]
pub struct ClampArgs {
    /// JSON object `{ "stationary": [...], "moving": {...} }`, or `-`.
    #[arg(long, short, default_value = "-")]
    pub input: PathBuf,

    /// Include every clear candidate, closest first.
    #[arg(long)]
    pub all: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClampRequest {
    pub stationary: Vec<RectF>,
    pub moving: RectF,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClampReport {
    pub snapped: RectF,
    /// No clear adjacent position existed; `snapped` is the drag position.
    pub fallback: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidates: Option<Vec<RectF>>,
}

pub fn run_clamp(args: &ClampArgs) -> Result<ClampReport> {
    let request: ClampRequest = read_json(&args.input)?;
    Ok(clamp_report(&request, args.all))
}

pub fn clamp_report(request: &ClampRequest, include_candidates: bool) -> ClampReport {
    let candidates = clamp_candidates(&request.stationary, request.moving);
    let snapped = candidates.first().copied().unwrap_or(request.moving);
    let fallback = candidates.is_empty();
    if fallback {
        tracing::warn!(
            stationary = request.stationary.len(),
            "no adjacent position is clear of every display"
        );
    }
    ClampReport {
        snapped,
        fallback,
        candidates: include_candidates.then_some(candidates),
    }
}

#[derive(Debug, Clone, Args)]
pub struct DragArgs {
    /// JSON drag script, or `-` for stdin.
    #[arg(long, short, default_value = "-")]
    pub input: PathBuf,

    #[command(flatten)]
    pub constraints: ConstraintArgs,
}

/// A recorded drag: the topology, the grabbed display, and pointer samples
/// in pane space.
#[derive(Debug, Clone, Deserialize)]
pub struct DragRequest {
    pub displays: Vec<DisplayPosition>,
    pub display: DisplayId,
    pub pointer_down: PointF,
    #[serde(default)]
    pub samples: Vec<PointF>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DroppedDisplay {
    pub id: DisplayId,
    pub origin: PointF,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DragReport {
    pub mapping: ScaleMapping,
    pub updates: Vec<DragUpdate>,
    pub dropped: Vec<DroppedDisplay>,
}

pub fn run_drag(args: &DragArgs) -> Result<DragReport> {
    let constraints = args.constraints.resolve()?;
    let request: DragRequest = read_json(&args.input)?;
    drag_report(&constraints, &request)
}

pub fn drag_report(
    constraints: &LayoutConstraints,
    request: &DragRequest,
) -> Result<DragReport> {
    let bounds: Vec<RectF> = request
        .displays
        .iter()
        .map(|position| position.bounds)
        .collect();
    let mapping = ScaleMapping::from_constraints(constraints, &bounds)?;

    let grabbed_origin = request
        .displays
        .iter()
        .find(|position| position.id == request.display)
        .map(|position| mapping.block_bounds(&position.bounds).origin())
        .unwrap_or_default();
    let drag = BlockDrag::begin(
        &request.displays,
        request.display,
        request.pointer_down,
        PointF::from(grabbed_origin),
    )?;

    let updates: Vec<DragUpdate> = request
        .samples
        .iter()
        .map(|pointer| drag.drag_to(&mapping, *pointer))
        .collect();
    let resting = updates
        .last()
        .map_or(grabbed_origin, |update| update.block_origin);

    let dropped = drag
        .drop_at(&mapping, resting)
        .into_iter()
        .map(|(id, origin)| DroppedDisplay { id, origin })
        .collect();
    Ok(DragReport {
        mapping,
        updates,
        dropped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use topo_core::geometry::PanePoint;

    fn example_constraints() -> LayoutConstraints {
        LayoutConstraints {
            pane_width: 640,
            min_edge_length: 48.0,
            max_block_ratio: 0.05,
        }
    }

    #[test]
    fn bare_rects_and_positions_both_parse() {
        let rects: DisplaySet =
            serde_json::from_str(r#"[{ "left": 0, "top": 0, "right": 640, "bottom": 480 }]"#)
                .expect("rect list");
        assert!(matches!(rects, DisplaySet::Rects(ref list) if list.len() == 1));

        let positions: DisplaySet = serde_json::from_str(
            r#"[{ "id": 7, "bounds": { "left": 0, "top": 0, "right": 640, "bottom": 480 } }]"#,
        )
        .expect("position list");
        assert!(matches!(positions, DisplaySet::Positions(ref list) if list[0].id == DisplayId(7)));
    }

    #[test]
    fn scale_report_lists_every_block() {
        let displays = DisplaySet::Rects(vec![RectF::new(0.0, 0.0, 640.0, 480.0)]);
        let report = scale_report(&example_constraints(), &displays).expect("valid");
        assert_eq!(report.mapping.origin_x, 288);
        assert_eq!(report.blocks.len(), 1);
        assert_eq!(report.blocks[0].block, PaneRect::new(288, 48, 64, 48));
        assert!(report.summary.starts_with("{TopologyScale"));
    }

    #[test]
    fn empty_display_list_is_a_data_error() {
        let error = scale_report(&example_constraints(), &DisplaySet::Rects(Vec::new()))
            .expect_err("empty");
        assert!(matches!(error, CliError::Scale(_)));
    }

    #[test]
    fn clamp_report_flags_fallback() {
        let moving = RectF::new(0.0, 0.0, 10.0, 10.0);
        let report = clamp_report(
            &ClampRequest {
                stationary: Vec::new(),
                moving,
            },
            true,
        );
        assert!(report.fallback);
        assert_eq!(report.snapped, moving);
        assert_eq!(report.candidates, Some(Vec::new()));
    }

    #[test]
    fn clamp_report_snaps_and_omits_candidates_by_default() {
        let report = clamp_report(
            &ClampRequest {
                stationary: vec![RectF::new(0.0, 0.0, 10.0, 10.0)],
                moving: RectF::new(6.0, 0.0, 16.0, 10.0),
            },
            false,
        );
        assert!(!report.fallback);
        assert_eq!(report.snapped, RectF::new(10.0, 0.0, 20.0, 10.0));
        assert_eq!(report.candidates, None);
    }

    #[test]
    fn clamp_report_agrees_with_the_solver() {
        let request = ClampRequest {
            stationary: vec![
                RectF::new(0.0, 0.0, 20.0, 20.0),
                RectF::new(10.0, 30.0, 30.0, 50.0),
            ],
            moving: RectF::new(10.0, 11.0, 20.0, 31.0),
        };
        let report = clamp_report(&request, true);
        assert_eq!(
            report.snapped,
            topo_layout::clamp_position(&request.stationary, request.moving)
        );
        assert_eq!(report.snapped, RectF::new(20.0, 10.0, 30.0, 30.0));
        let candidates = report.candidates.expect("candidates requested");
        assert_eq!(candidates.first(), Some(&report.snapped));
    }

    #[test]
    fn drag_without_samples_drops_in_place() {
        let request = DragRequest {
            displays: vec![
                DisplayPosition::new(DisplayId(1), RectF::new(0.0, 0.0, 1920.0, 1080.0)),
                DisplayPosition::new(DisplayId(2), RectF::new(1920.0, 0.0, 3200.0, 720.0)),
            ],
            display: DisplayId(2),
            pointer_down: PointF::new(340.0, 60.0),
            samples: Vec::new(),
        };
        let constraints = LayoutConstraints {
            pane_width: 640,
            min_edge_length: 20.0,
            max_block_ratio: 0.05,
        };
        let report = drag_report(&constraints, &request).expect("drag");
        assert!(report.updates.is_empty());
        assert_eq!(report.dropped.len(), 2);
        assert_eq!(report.dropped[1].id, DisplayId(2));
        assert!((report.dropped[1].origin.x - 1920.0).abs() < 1e-6);
        assert_eq!(
            report.mapping.display_to_pane(report.dropped[1].origin),
            PanePoint::new(336, 54)
        );
    }

    #[test]
    fn drag_on_single_display_is_refused() {
        let request = DragRequest {
            displays: vec![DisplayPosition::new(
                DisplayId(1),
                RectF::new(0.0, 0.0, 1920.0, 1080.0),
            )],
            display: DisplayId(1),
            pointer_down: PointF::default(),
            samples: Vec::new(),
        };
        let error = drag_report(&example_constraints(), &request).expect_err("single display");
        assert!(matches!(error, CliError::Drag(_)));
    }
}
