#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use topo_layout::{PanePoint, RectF, ScaleMapping};

#[derive(Debug, Arbitrary)]
struct Input {
    pane_width: u16,
    min_edge_length: u8,
    max_block_ratio_permille: u16,
    displays: Vec<(i16, i16, u16, u16)>,
    pane_point: (i16, i16),
}

fuzz_target!(|input: Input| {
    let displays: Vec<RectF> = input
        .displays
        .iter()
        .take(6)
        .map(|&(left, top, width, height)| {
            let left = f64::from(left);
            let top = f64::from(top);
            RectF::new(left, top, left + f64::from(width), top + f64::from(height))
        })
        .collect();
    let max_block_ratio = f64::from(input.max_block_ratio_permille) / 1000.0;

    // Invalid input must be refused, never panic.
    let Ok(scale) = ScaleMapping::compute(
        u32::from(input.pane_width),
        f64::from(input.min_edge_length),
        max_block_ratio,
        &displays,
    ) else {
        return;
    };

    assert!(scale.block_ratio > 0.0, "non-positive ratio");
    assert!(scale.pane_height > 0, "empty pane");

    let pane = PanePoint::new(i32::from(input.pane_point.0), i32::from(input.pane_point.1));
    let display = scale.pane_to_display(pane);
    assert_eq!(scale.display_to_pane(display), pane, "pane round trip drifted");
});
