//! Pure placement math behind docking, distribution, cascading and snapping.
//!
//! Every function takes the viewport size explicitly; nothing here reads
//! store state.

use crate::math::{round_to_step, Rect, Size, Vec2};
use crate::panel::DockPosition;

/// Grid size used by `snap_panels_to_grid` when the caller has no preference
pub const DEFAULT_GRID_SIZE: f32 = 20.0;

/// Lower bound on the gap between distributed panels
pub const MIN_DISTRIBUTE_SPACING: f32 = 20.0;

/// Top-left of the first cascaded panel, on both axes
pub const CASCADE_ORIGIN: f32 = 50.0;

/// Diagonal offset between consecutive cascaded panels
pub const CASCADE_STEP: f32 = 30.0;

/// Position that puts `rect` flush against `edge`, keeping the other axis
pub fn dock_origin(edge: DockPosition, rect: Rect, viewport: Size) -> Vec2 {
    match edge {
        DockPosition::Left => Vec2::new(0.0, rect.y),
        DockPosition::Right => Vec2::new(viewport.width - rect.width, rect.y),
        DockPosition::Top => Vec2::new(rect.x, 0.0),
        DockPosition::Bottom => Vec2::new(rect.x, viewport.height - rect.height),
    }
}

/// Edge a panel should dock to, judged from its center.
///
/// The outer quarters of the viewport decide first (left/right, then
/// top/bottom). A center in the middle region docks to whichever edge is
/// closest.
pub fn nearest_edge(rect: Rect, viewport: Size) -> DockPosition {
    let c = rect.center();
    let (qw, qh) = (viewport.width / 4.0, viewport.height / 4.0);

    if c.x < qw {
        DockPosition::Left
    } else if c.x > viewport.width - qw {
        DockPosition::Right
    } else if c.y < qh {
        DockPosition::Top
    } else if c.y > viewport.height - qh {
        DockPosition::Bottom
    } else {
        let distances = [
            (DockPosition::Left, c.x),
            (DockPosition::Right, viewport.width - c.x),
            (DockPosition::Top, c.y),
            (DockPosition::Bottom, viewport.height - c.y),
        ];
        distances
            .iter()
            .fold((DockPosition::Left, f32::INFINITY), |best, &(edge, d)| {
                if d < best.1 {
                    (edge, d)
                } else {
                    best
                }
            })
            .0
    }
}

/// Gap used when distributing panels of the given extents along `available`
pub fn distribute_spacing(extents: &[f32], available: f32) -> f32 {
    let total: f32 = extents.iter().sum();
    let gaps = (extents.len() + 1) as f32;
    ((available - total) / gaps).max(MIN_DISTRIBUTE_SPACING)
}

/// Leading-edge offsets for panels laid out in order with equal gaps.
///
/// The first panel starts one gap from the origin edge.
pub fn distribute(extents: &[f32], available: f32) -> Vec<f32> {
    let spacing = distribute_spacing(extents, available);
    let mut cursor = spacing;
    extents
        .iter()
        .map(|extent| {
            let offset = cursor;
            cursor += extent + spacing;
            offset
        })
        .collect()
}

/// Position of the `index`-th panel in a cascade
pub fn cascade_position(index: usize) -> Vec2 {
    let offset = CASCADE_ORIGIN + CASCADE_STEP * index as f32;
    Vec2::new(offset, offset)
}

/// Closest candidate to `value` within `threshold`, or `value` itself
pub fn snap_axis(value: f32, candidates: impl IntoIterator<Item = f32>, threshold: f32) -> f32 {
    candidates
        .into_iter()
        .map(|c| (c, (c - value).abs()))
        .filter(|&(_, d)| d <= threshold)
        .fold(None, |best: Option<(f32, f32)>, cur| match best {
            Some(b) if b.1 <= cur.1 => Some(b),
            _ => Some(cur),
        })
        .map_or(value, |(c, _)| c)
}

/// Snap `rect` to the viewport edges and, if given, to neighbouring panels.
///
/// Neighbour candidates are edge-to-edge contact (only when the panels
/// overlap on the other axis) and edge alignment.
pub fn edge_snap(rect: Rect, viewport: Size, neighbours: &[Rect], threshold: f32) -> Vec2 {
    let mut xs = vec![0.0, viewport.width - rect.width];
    let mut ys = vec![0.0, viewport.height - rect.height];

    for other in neighbours {
        if other.overlaps_vertically(&rect) {
            xs.push(other.right());
            xs.push(other.x - rect.width);
        }
        xs.push(other.x);
        xs.push(other.right() - rect.width);

        if other.overlaps_horizontally(&rect) {
            ys.push(other.bottom());
            ys.push(other.y - rect.height);
        }
        ys.push(other.y);
        ys.push(other.bottom() - rect.height);
    }

    Vec2::new(
        snap_axis(rect.x, xs, threshold),
        snap_axis(rect.y, ys, threshold),
    )
}

/// Snap each axis to the nearest grid line, but only when within `threshold`
pub fn grid_snap_within(pos: Vec2, grid: f32, threshold: f32) -> Vec2 {
    Vec2::new(
        snap_axis(pos.x, [round_to_step(pos.x, grid)], threshold),
        snap_axis(pos.y, [round_to_step(pos.y, grid)], threshold),
    )
}
