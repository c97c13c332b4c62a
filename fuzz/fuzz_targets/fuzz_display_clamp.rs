#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use topo_layout::{RectF, clamp_candidates, clamp_position};

#[derive(Debug, Arbitrary)]
struct Block {
    left: i16,
    top: i16,
    width: u8,
    height: u8,
}

impl Block {
    fn rect(&self) -> RectF {
        let left = f64::from(self.left);
        let top = f64::from(self.top);
        // Zero-sized displays do not exist.
        let width = f64::from(self.width.max(1));
        let height = f64::from(self.height.max(1));
        RectF::new(left, top, left + width, top + height)
    }
}

/// Closest anchored, clear grid position, found without the solver's
/// candidate ranking.
fn brute_force_closest(others: &[RectF], moving: &RectF) -> Option<f64> {
    let touch = |low: f64, high: f64, other_low: f64, other_high: f64| {
        low <= other_high && high >= other_low
    };
    let mut xs: Vec<(f64, f64, Option<usize>)> = Vec::new();
    let mut ys: Vec<(f64, f64, Option<usize>)> = Vec::new();
    for (index, other) in others.iter().enumerate() {
        xs.push((other.left - moving.width(), other.left, Some(index)));
        xs.push((other.right, other.right + moving.width(), Some(index)));
        ys.push((other.top - moving.height(), other.top, Some(index)));
        ys.push((other.bottom, other.bottom + moving.height(), Some(index)));
    }
    xs.push((moving.left, moving.right, None));
    ys.push((moving.top, moving.bottom, None));

    let mut best: Option<f64> = None;
    for &(left, right, x_tag) in &xs {
        for &(top, bottom, y_tag) in &ys {
            let anchored = match (x_tag, y_tag) {
                (Some(i), _) => touch(top, bottom, others[i].top, others[i].bottom),
                (None, Some(j)) => touch(left, right, others[j].left, others[j].right),
                (None, None) => false,
            };
            let clear = others.iter().all(|o| {
                !(left < o.right && o.left < right && top < o.bottom && o.top < bottom)
            });
            if anchored && clear {
                let distance = (left - moving.left).hypot(top - moving.top);
                best = Some(best.map_or(distance, |current| current.min(distance)));
            }
        }
    }
    best
}

#[derive(Debug, Arbitrary)]
struct Input {
    stationary: Vec<Block>,
    moving: Block,
}

fuzz_target!(|input: Input| {
    // Stationary displays never overlap each other; drop any that would.
    let mut stationary: Vec<RectF> = Vec::new();
    for block in input.stationary.iter().take(8) {
        let rect = block.rect();
        if stationary.iter().all(|other| !other.intersects(&rect)) {
            stationary.push(rect);
        }
    }
    let moving = input.moving.rect();

    let snapped = clamp_position(&stationary, moving);
    assert_eq!(snapped.width(), moving.width(), "width changed");
    assert_eq!(snapped.height(), moving.height(), "height changed");

    let candidates = clamp_candidates(&stationary, moving);
    match candidates.first() {
        Some(best) => {
            assert_eq!(*best, snapped, "snap is not the closest clear candidate");
            assert!(
                stationary.iter().all(|other| !other.intersects(&snapped)),
                "snapped display overlaps a stationary one"
            );
        }
        None => assert_eq!(snapped, moving, "fallback must keep the drag position"),
    }

    match brute_force_closest(&stationary, &moving) {
        Some(distance) => assert_eq!(
            snapped.top_left().distance_to(moving.top_left()),
            distance,
            "snap is farther than the closest clear grid position"
        ),
        None => assert_eq!(snapped, moving, "a clear grid position was missed"),
    }

    for pair in candidates.windows(2) {
        let first = pair[0].top_left().distance_to(moving.top_left());
        let second = pair[1].top_left().distance_to(moving.top_left());
        assert!(first <= second, "candidates out of order");
    }
});
