//! Line of sight over the transparency grid.

use util::{Grid, VecExt};

use crate::prelude::*;

/// Iterate the cells with a line of sight from `origin` within Euclidean
/// `radius`.
///
/// Opaque cells are seen but block the view past them, the map edge counts
/// as opaque. The origin is always yielded first. Cells may be yielded more
/// than once.
pub fn los_cells(
    transparency: &Grid<bool>,
    origin: IVec2,
    radius: i32,
) -> impl Iterator<Item = IVec2> + '_ {
    let radius = radius.max(0);
    let is_opaque =
        move |v: IVec2| !transparency.get(origin + v).copied().unwrap_or(false);

    fov::Fov::new(radius, is_opaque)
        .filter(move |v: &IVec2| v.len_sq() <= radius * radius)
        .map(move |v| origin + v)
        .filter(move |&p| transparency.contains(p))
}

/// Line of sight mask sized to the transparency grid.
pub fn line_of_sight(
    transparency: &Grid<bool>,
    origin: IVec2,
    radius: i32,
) -> Grid<bool> {
    let mut ret =
        Grid::new(transparency.width(), transparency.height(), false);
    for p in los_cells(transparency, origin, radius) {
        ret.set(p, true);
    }
    ret
}
