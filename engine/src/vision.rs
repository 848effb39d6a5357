//! Directional vision cones.

use serde::{Deserialize, Serialize};
use util::{Grid, VecExt};

use crate::{fov::los_cells, prelude::*};

/// Sight radii of the angular bands of a vision cone.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ConeParams {
    /// Radius within 45° of the facing.
    pub inner: i32,
    /// Radius within 90° of the facing.
    pub mid: i32,
    /// Radius towards the sides and the back.
    pub outer: i32,
}

impl Default for ConeParams {
    fn default() -> Self {
        ConeParams {
            inner: 24,
            mid: 6,
            outer: 2,
        }
    }
}

impl ConeParams {
    /// Farthest distance the cone can see in any direction.
    pub fn max_radius(&self) -> i32 {
        self.inner.max(self.mid).max(self.outer).max(0)
    }

    pub fn radius(&self, band: Band) -> i32 {
        match band {
            Band::Inner => self.inner,
            Band::Mid => self.mid,
            Band::Outer => self.outer,
        }
    }
}

/// Angular band of a vision cone.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Band {
    Inner,
    Mid,
    Outer,
}

impl Band {
    /// Band that contains offset `v` for an observer looking towards
    /// `facing`.
    ///
    /// A cell is in the inner band if the angle between `v` and the facing
    /// is less than 45° and in the mid band if it is less than 90°. The
    /// comparison is done on the exact integer dot product, so cells exactly
    /// on a band boundary go to the outer of the two bands.
    pub fn of(facing: Facing, v: IVec2) -> Band {
        let f = facing.offset();
        let dot = v.dot(f) as i64;

        if dot <= 0 {
            Band::Outer
        } else if 2 * dot * dot > v.len_sq() as i64 * f.len_sq() as i64 {
            // cos² > 1/2
            Band::Inner
        } else {
            Band::Mid
        }
    }
}

/// Cells seen by an observer at `pos` looking towards `facing`.
///
/// A cell is visible if it has a line of sight from `pos` and is within the
/// radius of the cone band it falls in. The observer always sees its own
/// cell when it is on the map. The result is sized to `transparency`.
pub fn compute_visibility(
    transparency: &Grid<bool>,
    pos: IVec2,
    facing: Facing,
    cone: &ConeParams,
) -> Grid<bool> {
    let mut ret =
        Grid::new(transparency.width(), transparency.height(), false);
    ret.set(pos, true);

    for p in los_cells(transparency, pos, cone.max_radius()) {
        let v = p - pos;
        let r = cone.radius(Band::of(facing, v)).max(0);
        if v.len_sq() <= r * r {
            ret.set(p, true);
        }
    }

    ret
}
