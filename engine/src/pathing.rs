use pathfinding::prelude::*;
use util::{Grid, VecExt};

use crate::{prelude::*, CARDINAL_COST, CROWD_PENALTY, DIAGONAL_COST};

/// Cost of entering each map cell during path search.
///
/// Zero cost means the cell can't be entered. Cells with movement blocking
/// entities in them cost extra but stay passable, so actors path around
/// crowds when there's room and through them when there isn't.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Costs(Grid<u32>);

impl Costs {
    pub fn new(
        walkable: &Grid<bool>,
        crowd: impl IntoIterator<Item = IVec2>,
    ) -> Self {
        let mut costs = walkable.map(|&w| u32::from(w));
        for p in crowd {
            if let Some(c) = costs.get_mut(p) {
                if *c != 0 {
                    *c += CROWD_PENALTY;
                }
            }
        }
        Costs(costs)
    }

    pub fn cost(&self, p: IVec2) -> u32 {
        self.0.get(p).copied().unwrap_or(0)
    }

    /// Cost of stepping from `a` into the adjacent cell `b`, `None` if the
    /// step isn't possible.
    pub fn step(&self, a: IVec2, b: IVec2) -> Option<u32> {
        let d = b - a;
        if !d.is_adjacent() {
            return None;
        }
        let weight = if d.is_diagonal() {
            DIAGONAL_COST
        } else {
            CARDINAL_COST
        };
        match self.cost(b) {
            0 => None,
            c => Some(c * weight),
        }
    }

    /// Total cost of walking `path` starting from `start`, `None` if the
    /// path has an impossible step.
    pub fn path_cost(&self, start: IVec2, path: &[IVec2]) -> Option<u32> {
        let mut pos = start;
        let mut ret = 0;
        for &p in path {
            ret += self.step(pos, p)?;
            pos = p;
        }
        Some(ret)
    }

    /// Cheapest path from `start` to `goal`.
    ///
    /// The path excludes `start` and ends at `goal`. An empty path means
    /// there's nowhere to go, either because the goal is unreachable or
    /// because the actor is already there.
    pub fn find_path(&self, start: IVec2, goal: IVec2) -> Vec<IVec2> {
        if start == goal || self.cost(goal) == 0 {
            return Vec::new();
        }

        let Some((mut path, _)) = dijkstra(
            &start,
            |&p| {
                DIR_8.iter().filter_map(move |&d| {
                    self.step(p, p + d).map(|c| (p + d, c))
                })
            },
            |&p| p == goal,
        ) else {
            return Vec::new();
        };

        path.remove(0);
        path
    }
}

/// Find a path over `walkable` with crowd penalties at `blockers`.
pub fn find_path(
    walkable: &Grid<bool>,
    blockers: impl IntoIterator<Item = IVec2>,
    start: IVec2,
    goal: IVec2,
) -> Vec<IVec2> {
    Costs::new(walkable, blockers).find_path(start, goal)
}

impl Runtime {
    /// Path costs as seen by `mover`, every other movement blocking entity
    /// gets the crowd penalty.
    pub fn costs_for(&self, mover: &Entity) -> Costs {
        let crowd: Vec<IVec2> = self
            .placement
            .iter()
            .filter(|(e, _)| e != mover && e.blocks_movement(self))
            .map(|(_, p)| p)
            .collect();
        Costs::new(self.walkable(), crowd)
    }
}

impl Entity {
    pub fn path_to(&self, r: &impl AsRef<Runtime>, goal: IVec2) -> Vec<IVec2> {
        let r = r.as_ref();
        r.costs_for(self).find_path(self.pos(r), goal)
    }
}
