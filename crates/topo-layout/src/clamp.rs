#![forbid(unsafe_code)]

//! Snap solver for a dragged display.
//!
//! While a block is dragged, its raw position usually overlaps a neighbour
//! or floats free. The solver replaces it with the closest position of the
//! same size that shares an edge with some stationary display and overlaps
//! none of them.
//!
//! # Candidate search
//!
//! Each axis gets two intervals per stationary display (flush against its
//! near edge and its far edge) plus the dragged display's current interval.
//! Every X interval is paired with every Y interval; a pair survives only
//! if the attached display's perpendicular span is touched, so the result
//! is anchored to at least one neighbour. Survivors are ranked by distance
//! from the dragged top-left corner and the first one clear of every
//! stationary display wins.

use topo_core::geometry::RectF;

/// One axis interval of a candidate position.
///
/// `low` and `high` are both stored. Recomputing one from the other with
/// the dragged size can land a ulp away from the neighbour's edge and turn
/// a touching pair into an overlapping one.
#[derive(Debug, Clone, Copy)]
struct AxisCandidate<'a> {
    low: f64,
    high: f64,
    /// Stationary display this interval is flush against, if any.
    attaching: Option<&'a RectF>,
}

impl<'a> AxisCandidate<'a> {
    const fn free(low: f64, high: f64) -> Self {
        Self {
            low,
            high,
            attaching: None,
        }
    }

    const fn attached(low: f64, high: f64, to: &'a RectF) -> Self {
        Self {
            low,
            high,
            attaching: Some(to),
        }
    }

    #[inline]
    fn overlaps(&self, low: f64, high: f64) -> bool {
        self.low <= high && self.high >= low
    }
}

fn horizontal_candidates<'a>(others: &'a [RectF], moving: &RectF) -> Vec<AxisCandidate<'a>> {
    let width = moving.width();
    let mut candidates = Vec::with_capacity(others.len() * 2 + 1);
    for other in others {
        candidates.push(AxisCandidate::attached(other.left - width, other.left, other));
        candidates.push(AxisCandidate::attached(other.right, other.right + width, other));
    }
    candidates.push(AxisCandidate::free(moving.left, moving.right));
    candidates
}

fn vertical_candidates<'a>(others: &'a [RectF], moving: &RectF) -> Vec<AxisCandidate<'a>> {
    let height = moving.height();
    let mut candidates = Vec::with_capacity(others.len() * 2 + 1);
    for other in others {
        candidates.push(AxisCandidate::attached(other.top - height, other.top, other));
        candidates.push(AxisCandidate::attached(other.bottom, other.bottom + height, other));
    }
    candidates.push(AxisCandidate::free(moving.top, moving.bottom));
    candidates
}

/// A pair is adjacent when the attached display's perpendicular span is
/// touched. When both axes are attached only the X attachment is checked.
fn is_adjacent(x: &AxisCandidate<'_>, y: &AxisCandidate<'_>) -> bool {
    if let Some(to) = x.attaching {
        y.overlaps(to.top, to.bottom)
    } else if let Some(to) = y.attaching {
        x.overlaps(to.left, to.right)
    } else {
        false
    }
}

/// Adjacent positions for `moving`, closest first, overlap not yet checked.
fn ranked_positions(others: &[RectF], moving: &RectF) -> Vec<RectF> {
    let xs = horizontal_candidates(others, moving);
    let ys = vertical_candidates(others, moving);
    let origin = moving.top_left();

    let mut ranked: Vec<(f64, RectF)> = Vec::with_capacity(xs.len() * ys.len());
    for x in &xs {
        for y in &ys {
            if is_adjacent(x, y) {
                let rect = RectF::new(x.low, y.low, x.high, y.high);
                ranked.push((rect.top_left().distance_to(origin), rect));
            }
        }
    }
    // Stable: equal distances keep generation order.
    ranked.sort_by(|(a, _), (b, _)| a.total_cmp(b));
    ranked.into_iter().map(|(_, rect)| rect).collect()
}

#[inline]
fn is_clear(others: &[RectF], rect: &RectF) -> bool {
    !others.iter().any(|other| other.intersects(rect))
}

/// Every adjacent, non-overlapping position for `moving`, closest first.
///
/// Distance is measured between top-left corners. Equal distances keep
/// generation order: stationary displays in input order, near edge before
/// far edge, the unchanged interval last.
pub fn clamp_candidates(others: &[RectF], moving: RectF) -> Vec<RectF> {
    ranked_positions(others, &moving)
        .into_iter()
        .filter(|rect| is_clear(others, rect))
        .collect()
}

/// Snap `moving` to the closest position that touches a stationary display
/// without overlapping any.
///
/// Returns `moving` unchanged when no such position exists, including when
/// `others` is empty.
pub fn clamp_position(others: &[RectF], moving: RectF) -> RectF {
    let snapped = ranked_positions(others, &moving)
        .into_iter()
        .find(|rect| is_clear(others, rect));

    #[cfg(feature = "tracing")]
    match snapped {
        Some(rect) => tracing::trace!(
            stationary = others.len(),
            left = rect.left,
            top = rect.top,
            "snapped dragged display"
        ),
        None => tracing::debug!(
            stationary = others.len(),
            "no clear adjacent position; keeping drag position"
        ),
    }

    snapped.unwrap_or(moving)
}

#[cfg(test)]
mod tests {
    use super::{clamp_candidates, clamp_position};
    use topo_core::geometry::RectF;

    #[test]
    fn attaches_to_nearest_edge_of_single_neighbour() {
        let others = [RectF::new(0.0, 0.0, 10.0, 10.0)];
        let snapped = clamp_position(&others, RectF::new(6.0, 0.0, 16.0, 10.0));
        assert_eq!(snapped, RectF::new(10.0, 0.0, 20.0, 10.0));
    }

    #[test]
    fn attaches_to_two_rectangles_at_once() {
        let others = [
            RectF::new(0.0, 0.0, 20.0, 20.0),
            RectF::new(10.0, 30.0, 30.0, 50.0),
        ];
        let snapped = clamp_position(&others, RectF::new(10.0, 11.0, 20.0, 31.0));
        assert_eq!(snapped, RectF::new(20.0, 10.0, 30.0, 30.0));
    }

    #[test]
    fn snaps_above_when_top_edge_is_closest() {
        let others = [RectF::new(0.0, 0.0, 100.0, 50.0)];
        let snapped = clamp_position(&others, RectF::new(30.0, -15.0, 70.0, 5.0));
        assert_eq!(snapped, RectF::new(30.0, -20.0, 70.0, 0.0));
    }

    #[test]
    fn far_away_block_is_pulled_back_to_a_corner_span() {
        let others = [RectF::new(0.0, 0.0, 10.0, 10.0)];
        let snapped = clamp_position(&others, RectF::new(50.0, 50.0, 60.0, 60.0));
        // Closest adjacent candidate sits diagonally, touching at the corner.
        assert_eq!(snapped, RectF::new(10.0, 10.0, 20.0, 20.0));
    }

    #[test]
    fn no_stationary_displays_falls_back_to_drag_position() {
        let moving = RectF::new(3.0, 4.0, 13.0, 14.0);
        assert_eq!(clamp_position(&[], moving), moving);
        assert!(clamp_candidates(&[], moving).is_empty());
    }

    #[test]
    fn already_snapped_position_is_a_fixed_point() {
        let others = [
            RectF::new(0.0, 0.0, 20.0, 20.0),
            RectF::new(10.0, 30.0, 30.0, 50.0),
        ];
        let first = clamp_position(&others, RectF::new(10.0, 11.0, 20.0, 31.0));
        assert_eq!(clamp_position(&others, first), first);
    }

    #[test]
    fn fractional_edges_touch_without_overlap() {
        let others = [RectF::new(0.1, 0.2, 1920.3, 1080.7)];
        let moving = RectF::new(1900.9, 300.3, 1900.9 + 1280.1, 300.3 + 720.9);
        let snapped = clamp_position(&others, moving);
        assert_eq!(snapped.left, others[0].right);
        assert!(!snapped.intersects(&others[0]));
    }

    #[test]
    fn doubly_attached_pair_checks_only_the_horizontal_neighbour() {
        let others = [
            RectF::new(0.0, 0.0, 10.0, 10.0),
            RectF::new(-20.0, -30.0, -5.0, -20.0),
        ];
        let moving = RectF::new(-9.5, -19.0, 0.5, -9.0);
        let candidates = clamp_candidates(&others, moving);

        // Left of the first display, below the second: the Y interval misses
        // the first display's vertical span, so the pair is rejected even
        // though its X interval touches the second display.
        assert!(!candidates.contains(&RectF::new(-10.0, -20.0, 0.0, -10.0)));
        assert_eq!(
            candidates.first(),
            Some(&RectF::new(-9.5, -20.0, 0.5, -10.0))
        );
        assert_eq!(
            clamp_position(&others, moving),
            RectF::new(-9.5, -20.0, 0.5, -10.0)
        );
    }

    #[test]
    fn candidates_are_ranked_and_clear() {
        let others = [RectF::new(0.0, 0.0, 10.0, 10.0)];
        let moving = RectF::new(6.0, 0.0, 16.0, 10.0);
        let candidates = clamp_candidates(&others, moving);
        assert_eq!(candidates.first(), Some(&RectF::new(10.0, 0.0, 20.0, 10.0)));
        let origin = moving.top_left();
        assert!(candidates.windows(2).all(|pair| {
            pair[0].top_left().distance_to(origin) <= pair[1].top_left().distance_to(origin)
        }));
        assert!(
            candidates
                .iter()
                .all(|rect| !others.iter().any(|other| other.intersects(rect)))
        );
        assert_eq!(clamp_position(&others, moving), candidates[0]);
    }
}
