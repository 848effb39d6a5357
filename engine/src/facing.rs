//! Discrete eight-way facings.

use std::f64::consts::{FRAC_PI_4, FRAC_PI_8};

use serde::{Deserialize, Serialize};
use strum::{EnumIter, FromRepr};

use crate::prelude::*;

/// Compass facing of an actor.
///
/// Map coordinates grow downwards along y, so north points towards negative
/// y. Variants are in clock face order and match the order of `DIR_8`.
#[derive(
    Copy,
    Clone,
    Default,
    Eq,
    PartialEq,
    Hash,
    Debug,
    EnumIter,
    FromRepr,
    Serialize,
    Deserialize,
)]
#[repr(u8)]
pub enum Facing {
    #[default]
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Facing {
    /// Facing that best matches the direction from `a` to `b`.
    ///
    /// The direction angle is `atan2(dy, dx)`, so angles grow clockwise on
    /// screen starting from east. The circle is split into eight 45° sectors
    /// centered on the facings. Sectors are half-open intervals
    /// `(center - π/8, center + π/8]`, a direction exactly on a boundary
    /// belongs to the facing on its counterclockwise side. A zero-length
    /// direction maps to east.
    pub fn towards(a: IVec2, b: IVec2) -> Facing {
        let d = b - a;
        let angle = (d.y as f64).atan2(d.x as f64);

        // Sector 0 is east, sectors are counted clockwise.
        let sector = ((angle - FRAC_PI_8) / FRAC_PI_4).ceil() as i32;
        let idx = (sector + Facing::E as i32).rem_euclid(8);
        Facing::from_repr(idx as u8).expect("Facing::towards: bad sector")
    }

    /// Unit step for moving one cell in this facing.
    pub fn offset(self) -> IVec2 {
        DIR_8[self as usize]
    }

    /// Angle of the facing's unit step in the same `atan2(dy, dx)` frame as
    /// `towards`.
    pub fn angle(self) -> f64 {
        let d = self.offset();
        (d.y as f64).atan2(d.x as f64)
    }
}
