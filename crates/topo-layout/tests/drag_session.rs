//! End-to-end drag over a three-display topology: scale, drag, snap, drop,
//! and the relayout decision that follows.

use topo_layout::{
    BlockDrag, DisplayId, DisplayPosition, PanePoint, PointF, RectF, ScaleMapping, same_topology,
};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

/// Two side-by-side displays with a third below the first.
fn l_shaped() -> Vec<DisplayPosition> {
    vec![
        DisplayPosition::new(DisplayId(1), RectF::new(0.0, 0.0, 1920.0, 1080.0)),
        DisplayPosition::new(DisplayId(2), RectF::new(1920.0, 0.0, 3840.0, 1080.0)),
        DisplayPosition::new(DisplayId(3), RectF::new(0.0, 1080.0, 1920.0, 2160.0)),
    ]
}

fn scale_for(positions: &[DisplayPosition]) -> ScaleMapping {
    let bounds: Vec<RectF> = positions.iter().map(|position| position.bounds).collect();
    ScaleMapping::compute(960, 20.0, 0.05, &bounds).expect("valid scale")
}

fn start_dragging_second(positions: &[DisplayPosition], scale: &ScaleMapping) -> BlockDrag {
    let block = scale.block_bounds(&positions[1].bounds);
    assert_eq!(block.origin(), PanePoint::new(480, 54));
    BlockDrag::begin(
        positions,
        DisplayId(2),
        PointF::new(490.0, 60.0),
        PointF::from(block.origin()),
    )
    .expect("drag should start")
}

#[test]
fn scale_centres_the_topology() {
    let scale = scale_for(&l_shaped());
    assert!(approx(scale.block_ratio, 0.05));
    assert_eq!(scale.pane_height, 216);
    assert_eq!((scale.origin_x, scale.origin_y), (384, 54));
}

#[test]
fn sliding_along_an_edge_keeps_the_drag_position() {
    let positions = l_shaped();
    let scale = scale_for(&positions);
    let drag = start_dragging_second(&positions, &scale);

    let update = drag.drag_to(&scale, PointF::new(490.0, 45.0));
    assert!(approx(update.raw.left, 1920.0));
    assert!(approx(update.raw.top, -300.0));
    assert!(approx(update.snapped.left, update.raw.left));
    assert_eq!(update.snapped.top, update.raw.top);
    assert_eq!(update.block_origin, PanePoint::new(480, 39));
}

#[test]
fn overlapping_drag_snaps_beside_the_first_display() {
    let positions = l_shaped();
    let scale = scale_for(&positions);
    let drag = start_dragging_second(&positions, &scale);

    let update = drag.drag_to(&scale, PointF::new(469.0, 70.0));
    assert!(approx(update.raw.left, 1500.0));
    assert!(update.raw.intersects(&positions[0].bounds));

    assert_eq!(update.snapped.left, 1920.0);
    assert!(approx(update.snapped.top, 200.0));
    assert!(approx(update.snapped.width(), 1920.0));
    for position in drag.stationary() {
        assert!(!update.snapped.intersects(&position.bounds));
    }
    assert_eq!(update.block_origin, PanePoint::new(480, 64));
}

#[test]
fn drop_produces_a_new_topology() {
    let positions = l_shaped();
    let scale = scale_for(&positions);
    let drag = start_dragging_second(&positions, &scale);
    let update = drag.drag_to(&scale, PointF::new(469.0, 70.0));

    let dropped = drag.drop_at(&scale, update.block_origin);
    let ids: Vec<DisplayId> = dropped.iter().map(|(id, _)| *id).collect();
    assert_eq!(ids, vec![DisplayId(1), DisplayId(3), DisplayId(2)]);
    assert_eq!(dropped[0].1, PointF::new(0.0, 0.0));
    assert_eq!(dropped[1].1, PointF::new(0.0, 1080.0));
    assert!(approx(dropped[2].1.x, 1920.0));
    assert!(approx(dropped[2].1.y, 200.0));

    let rearranged: Vec<DisplayPosition> = positions
        .iter()
        .map(|position| {
            let origin = dropped
                .iter()
                .find(|(id, _)| *id == position.id)
                .map(|(_, origin)| *origin)
                .expect("every display is reported");
            DisplayPosition::new(position.id, position.bounds.offset_to(origin))
        })
        .collect();
    assert!(!same_topology(&positions, &rearranged));
    assert!(same_topology(&rearranged, &rearranged.clone()));

    let rescaled = scale_for(&rearranged);
    assert!(rescaled.pane_height > 0);
}
