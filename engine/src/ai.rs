//! Hostiles figuring out what to do on their own.

use rand::seq::SliceRandom;
use util::VecExt;

use crate::{prelude::*, Color, WAYPOINT_TRIES};

/// What drives an actor's decisions.
///
/// An actor with no brain is inert, this is how dead actors are
/// represented.
#[derive(Clone, Default, Eq, PartialEq, Debug)]
pub enum Brain {
    #[default]
    None,
    /// Commanded from the outside.
    Player,
    Hostile(Hunter),
}

#[derive(Copy, Clone, Default, Eq, PartialEq, Hash, Debug)]
pub enum Mode {
    /// Wander between random waypoints.
    #[default]
    Patrol,
    /// Target the player while it's in sight.
    Hunt,
}

/// State of a patrolling and hunting hostile.
#[derive(Clone, Default, Eq, PartialEq, Debug)]
pub struct Hunter {
    pub mode: Mode,
    pub waypoint: Option<IVec2>,
    /// Path to waypoint in reverse, next step at the end.
    path: Vec<IVec2>,
}

impl Hunter {
    /// Remaining path to the waypoint, next step first.
    pub fn path(&self) -> impl Iterator<Item = IVec2> + '_ {
        self.path.iter().rev().copied()
    }

    fn set_path(&mut self, mut path: Vec<IVec2>) {
        path.reverse();
        self.path = path;
    }
}

impl Entity {
    pub fn brain(&self, r: &impl AsRef<Runtime>) -> Brain {
        self.get(r)
    }

    /// Behavior mode of a hostile.
    pub fn mode(&self, r: &impl AsRef<Runtime>) -> Option<Mode> {
        match self.brain(r) {
            Brain::Hostile(h) => Some(h.mode),
            _ => None,
        }
    }

    /// Decide and execute this turn's action.
    ///
    /// Returns the action that was performed.
    pub fn perform(&self, r: &mut impl AsMut<Runtime>) -> Action {
        let r = r.as_mut();
        let action = self.decide(r);
        self.execute(r, action.clone());
        action
    }

    /// Update behavior state and decide on the next action.
    ///
    /// Actors that don't have a hostile brain always pass.
    pub fn decide(&self, r: &mut impl AsMut<Runtime>) -> Action {
        let r = r.as_mut();
        let Brain::Hostile(mut hunter) = self.brain(r) else {
            return Action::Pass;
        };

        let ret = self.think(r, &mut hunter);
        self.set(r, Brain::Hostile(hunter));
        ret
    }

    fn think(&self, r: &mut Runtime, h: &mut Hunter) -> Action {
        let target = r.player();
        let target_pos = match target.try_pos(r) {
            Some(p) if target.is_alive(r) && self.can_see(r, p) => Some(p),
            _ => None,
        };

        let old_mode = h.mode;
        if h.mode == Mode::Patrol && target_pos.is_some() {
            h.mode = Mode::Hunt;
        }

        let ret = match (h.mode, target_pos) {
            (Mode::Hunt, Some(target_pos)) => {
                self.hunt(r, h, target, target_pos)
            }
            (Mode::Hunt, None) => self.stop_hunting(r, h),
            (Mode::Patrol, _) => self.patrol(r, h),
        };

        // A guard that spots the target out of range and drops it again
        // within the same turn has nothing to report.
        let name = self.name(r);
        match (old_mode, h.mode) {
            (Mode::Patrol, Mode::Hunt) => {
                log::debug!("{name} ({:?}): patrol -> hunt", self.0);
                msg!(r, Color::Alert; "{name} spots {}!", target.name(r));
            }
            (Mode::Hunt, Mode::Patrol) => {
                log::debug!("{name} ({:?}): hunt -> patrol", self.0);
                msg!(r, Color::White; "{name} resumes patrolling.");
            }
            _ => {}
        }

        ret
    }

    fn hunt(
        &self,
        r: &mut Runtime,
        h: &mut Hunter,
        target: Entity,
        target_pos: IVec2,
    ) -> Action {
        let pos = self.pos(r);
        let archetype = self.archetype(r);
        let dist = (target_pos - pos).cheb_len();

        if dist <= archetype.close_range {
            // Too close to aim, stay hunting until out of sight or range.
            return Action::Unlock;
        }

        if dist > archetype.engagement_range {
            return self.stop_hunting(r, h);
        }

        let dir = Facing::towards(pos, target_pos);
        if self.target_lock(r) != Some(target) {
            Action::LockOn(dir, target)
        } else if self.facing(r) != dir {
            Action::Turn(dir)
        } else {
            Action::Shoot(target_pos - pos)
        }
    }

    fn stop_hunting(&self, r: &Runtime, h: &mut Hunter) -> Action {
        h.mode = Mode::Patrol;
        h.waypoint = None;
        h.path.clear();

        if self.has_lock(r) {
            Action::Unlock
        } else {
            Action::Pass
        }
    }

    fn patrol(&self, r: &mut Runtime, h: &mut Hunter) -> Action {
        let pos = self.pos(r);

        match h.waypoint {
            Some(waypoint) if waypoint == pos => {
                log::debug!("{} ({:?}): reached {pos}", self.name(r), self.0);
                h.waypoint = None;
                h.path.clear();
            }
            Some(_) if !h.path.is_empty() => {}
            // No waypoint yet, or the last step onto it was blocked.
            _ => self.pick_waypoint(r, h),
        }

        let Some(&next) = h.path.last() else {
            return Action::Pass;
        };

        let next = if (next - pos).is_adjacent() {
            next
        } else {
            // Got pushed off the path, plan again from here.
            let Some(waypoint) = h.waypoint else {
                return Action::Pass;
            };
            h.set_path(self.path_to(r, waypoint));
            match h.path.last() {
                Some(&next) => {
                    assert!(
                        (next - pos).is_adjacent(),
                        "Entity::patrol: fresh path doesn't start next to actor"
                    );
                    next
                }
                None => {
                    h.waypoint = None;
                    return Action::Pass;
                }
            }
        };

        let dir = Facing::towards(pos, next);
        if self.facing(r) == dir {
            h.path.pop();
            Action::Step(next - pos)
        } else {
            Action::Turn(dir)
        }
    }

    fn pick_waypoint(&self, r: &mut Runtime, h: &mut Hunter) {
        h.waypoint = None;
        h.path.clear();

        let pos = self.pos(r);
        let cells: Vec<IVec2> =
            r.walkable().set_points().filter(|&p| p != pos).collect();

        for _ in 0..WAYPOINT_TRIES {
            let Some(&waypoint) = cells.choose(&mut r.rng) else {
                break;
            };
            let path = self.path_to(r, waypoint);
            if !path.is_empty() {
                log::debug!(
                    "{} ({:?}): new waypoint {waypoint}, {} steps",
                    self.name(r),
                    self.0,
                    path.len()
                );
                h.waypoint = Some(waypoint);
                h.set_path(path);
                return;
            }
        }

        log::warn!("{} ({:?}): no reachable waypoint found", self.name(r), self.0);
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{Data, MapTile};

    fn level(map: &str) -> Runtime {
        Runtime::from_ascii(map, &Data::default(), 1).unwrap()
    }

    fn guard(r: &Runtime) -> Entity {
        r.actors().find(|e| e.is_hostile(r)).unwrap()
    }

    fn hunter(r: &Runtime, e: Entity) -> Hunter {
        match e.brain(r) {
            Brain::Hostile(h) => h,
            _ => panic!("not a hostile"),
        }
    }

    #[test]
    fn acquire_and_fire() {
        let mut r = level(
            "
            #######
            #g..@.#
            #######",
        );
        let (g, player) = (guard(&r), r.player());
        g.set_facing(&mut r, Facing::E);
        assert!(g.can_see(&r, player.pos(&r)));

        assert_eq!(g.perform(&mut r), Action::LockOn(Facing::E, player));
        assert_eq!(g.mode(&r), Some(Mode::Hunt));
        assert_eq!(g.target_lock(&r), Some(player));

        assert_eq!(g.perform(&mut r), Action::Shoot(ivec2(3, 0)));
        assert_eq!(g.mode(&r), Some(Mode::Hunt));
        assert_eq!(player.stats(&r).hp, 30 - crate::SHOT_DAMAGE);

        let msgs: Vec<String> =
            r.take_messages().into_iter().map(|m| m.text).collect();
        assert_eq!(
            msgs,
            vec![
                "Guard spots player!".to_owned(),
                "You've been locked on to by guard!".to_owned(),
                "Guard shoots player for 10 hit points.".to_owned(),
            ]
        );
    }

    #[test]
    fn turn_to_follow_locked_target() {
        let mut r = level(
            "
            #######
            #g....#
            #...@.#
            #######",
        );
        let (g, player) = (guard(&r), r.player());
        g.set_facing(&mut r, Facing::E);
        g.set_target_lock(&mut r, Some(player));
        // Offset (3, 1) still counts as east.
        assert_eq!(g.decide(&mut r), Action::Shoot(ivec2(3, 1)));

        let mut r = level(
            "
            #######
            #g....#
            #..@..#
            #.....#
            #######",
        );
        let (g, player) = (guard(&r), r.player());
        g.set_facing(&mut r, Facing::E);
        g.set_target_lock(&mut r, Some(player));
        // Offset (2, 1) is south-east.
        assert_eq!(g.decide(&mut r), Action::Turn(Facing::SE));
    }

    #[test]
    fn lock_drop_on_close_approach() {
        let mut r = level(
            "
            #####
            #g@.#
            #####",
        );
        let (g, player) = (guard(&r), r.player());
        g.set_facing(&mut r, Facing::E);
        g.set_target_lock(&mut r, Some(player));
        r.take_messages();

        assert_eq!(g.perform(&mut r), Action::Unlock);
        assert_eq!(g.target_lock(&r), None);
        assert_eq!(g.mode(&r), Some(Mode::Hunt));
        let msgs = r.take_messages();
        assert_eq!(msgs.last().unwrap().text, "Guard: lock lost.");
    }

    #[test]
    fn unseen_behind_back() {
        let mut r = level(
            "
            ###########
            #@...g....#
            ###########",
        );
        let g = guard(&r);
        g.set_facing(&mut r, Facing::E);
        // Distance 4 behind the guard is past the outer radius.
        assert!(!g.can_see(&r, r.player().pos(&r)));
        g.decide(&mut r);
        assert_eq!(g.mode(&r), Some(Mode::Patrol));
    }

    #[test]
    fn lose_sight_and_resume_patrol() {
        let mut r = level(
            "
            #######
            #g..@.#
            #######",
        );
        let (g, player) = (guard(&r), r.player());
        g.set_facing(&mut r, Facing::E);
        g.perform(&mut r);
        assert_eq!(g.mode(&r), Some(Mode::Hunt));

        // Close the line of sight.
        r.set_tile(ivec2(3, 1), MapTile::Door);
        assert!(!g.can_see(&r, player.pos(&r)));
        assert_eq!(g.perform(&mut r), Action::Unlock);
        assert_eq!(g.mode(&r), Some(Mode::Patrol));
        assert_eq!(g.target_lock(&r), None);
        assert!(r
            .take_messages()
            .iter()
            .any(|m| m.text == "Guard resumes patrolling."));
    }

    #[test]
    fn out_of_range_resumes_patrol() {
        let mut r = level(
            "
            ##########
            #g......@#
            ##########",
        );
        let g = guard(&r);
        g.set_facing(&mut r, Facing::E);
        // Seen at distance 7, but engagement range is 5.
        assert!(g.can_see(&r, r.player().pos(&r)));
        r.take_messages();

        assert_eq!(g.decide(&mut r), Action::Pass);
        assert_eq!(g.mode(&r), Some(Mode::Patrol));
        // Spotted and dropped on the same turn, nothing to announce.
        assert!(r.take_messages().is_empty());

        assert_eq!(g.decide(&mut r), Action::Pass);
        assert!(r.take_messages().is_empty());
    }

    #[test]
    fn patrol_waypoint_arrival() {
        let mut r = level(
            "
            ########
            #@....g#
            ########",
        );
        let g = guard(&r);
        g.set_facing(&mut r, Facing::S);
        let pos = g.pos(&r);
        g.set(
            &mut r,
            Brain::Hostile(Hunter {
                waypoint: Some(pos),
                ..Default::default()
            }),
        );

        assert_eq!(g.decide(&mut r), Action::Pass);
        let h = hunter(&r, g);
        assert_eq!(h.waypoint, None);
        assert_eq!(h.path().count(), 0);
    }

    #[test]
    fn patrol_turns_then_steps() {
        let mut r = level(
            "
            #######
            #@#####
            #######
            #g....#
            #######",
        );
        let g = guard(&r);
        g.set_facing(&mut r, Facing::N);

        // The only reachable cells are in the corridor to the east.
        assert_eq!(g.perform(&mut r), Action::Turn(Facing::E));
        let h = hunter(&r, g);
        let waypoint = h.waypoint.unwrap();
        assert_eq!(h.path().last(), Some(waypoint));
        assert_eq!(h.path().next(), Some(ivec2(2, 3)));

        assert_eq!(g.perform(&mut r), Action::Step(ivec2(1, 0)));
        assert_eq!(g.pos(&r), ivec2(2, 3));

        // Walk until the waypoint is reached.
        for _ in 0..20 {
            g.perform(&mut r);
            if g.pos(&r) == waypoint {
                break;
            }
        }
        assert_eq!(g.pos(&r), waypoint);
        assert_eq!(g.mode(&r), Some(Mode::Patrol));
    }

    #[test]
    fn blocked_step_onto_waypoint() {
        let mut r = level(
            "
            #######
            #@#####
            #######
            #gg...#
            #######",
        );
        let (a, b) = (guard(&r), r.actor_at(ivec2(2, 3)).unwrap());
        let start = a.pos(&r);
        a.set_facing(&mut r, Facing::E);
        a.set(
            &mut r,
            Brain::Hostile(Hunter {
                waypoint: Some(ivec2(2, 3)),
                path: vec![ivec2(2, 3)],
                ..Default::default()
            }),
        );

        // The other guard is in the way.
        assert_eq!(a.perform(&mut r), Action::Step(ivec2(1, 0)));
        assert_eq!(a.pos(&r), start);

        b.place(&mut r, ivec2(5, 3));
        let trail: Vec<IVec2> = (0..10)
            .map(|_| {
                a.perform(&mut r);
                a.pos(&r)
            })
            .collect();
        assert!(trail.iter().any(|&p| p != start));
    }

    #[test]
    fn deterministic_with_same_seed() {
        const MAP: &str = "
            ###########
            #@........#
            #.........#
            #....g....#
            #.........#
            ###########";

        let run = || {
            let mut r = level(MAP);
            let g = guard(&r);
            (0..20)
                .map(|_| {
                    r.play_turn();
                    (g.pos(&r), g.facing(&r), g.brain(&r))
                })
                .collect::<Vec<_>>()
        };

        assert_eq!(run(), run());
    }
}
