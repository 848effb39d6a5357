//! Entities doing things

use crate::{prelude::*, Color, SHOT_DAMAGE};

/// A single thing an actor does on its turn.
///
/// Executing an action never fails. Actions aimed at nothing, like stepping
/// into a wall or attacking an empty cell, do nothing.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Action {
    Pass,
    /// Player's directional command, turn towards the direction and then
    /// either attack an actor there or step there.
    Bump(IVec2),
    /// Move to an adjacent cell.
    Step(IVec2),
    Melee(IVec2),
    /// Fire at the actor at the given offset.
    Shoot(IVec2),
    Turn(Facing),
    /// Face the direction and aim at the target.
    LockOn(Facing, Entity),
    /// Drop the current target lock and wait.
    Unlock,
}

impl Entity {
    /// Apply the effects of an action.
    ///
    /// Panics if the entity isn't on the map and the action needs a
    /// position.
    pub fn execute(&self, r: &mut impl AsMut<Runtime>, action: Action) {
        use Action::*;
        let r = r.as_mut();

        log::trace!("{} ({:?}): {action:?}", self.name(r), self.0);

        match action {
            Pass => {}
            Bump(dir) => self.bump(r, dir),
            Step(dir) => self.step(r, dir),
            Melee(dir) => self.melee(r, dir),
            Shoot(dir) => self.shoot(r, dir),
            Turn(facing) => self.set_facing(r, facing),
            LockOn(facing, target) => self.lock_on(r, facing, target),
            Unlock => self.unlock(r),
        }
    }

    fn step(&self, r: &mut impl AsMut<Runtime>, dir: IVec2) {
        let r = r.as_mut();
        let dest = self.pos(r) + dir;

        if !r.in_bounds(dest) || !r.tile(dest).is_walkable() {
            return;
        }
        if r.blocking_entity_at(dest).is_some() {
            return;
        }

        self.place(r, dest);
    }

    fn bump(&self, r: &mut impl AsMut<Runtime>, dir: IVec2) {
        let r = r.as_mut();
        self.set_facing(r, Facing::towards(IVec2::ZERO, dir));

        if r.actor_at(self.pos(r) + dir).is_some() {
            self.melee(r, dir);
        } else {
            self.step(r, dir);
        }
    }

    fn attack_color(&self, r: &impl AsRef<Runtime>) -> Color {
        if self.is_player(r) {
            Color::PlayerAttack
        } else {
            Color::EnemyAttack
        }
    }

    fn melee(&self, r: &mut impl AsMut<Runtime>, dir: IVec2) {
        let r = r.as_mut();
        let Some(target) = r.actor_at(self.pos(r) + dir) else {
            return;
        };

        let damage = self.stats(r).power - target.stats(r).defense;
        let (name, target_name) = (self.name(r), target.name(r));
        let color = self.attack_color(r);

        if damage > 0 {
            msg!(r, color; "{name} attacks {target_name} for {damage} hit points.");
            target.damage(r, damage);
        } else {
            msg!(r, color; "{name} attacks {target_name} but does no damage.");
        }
    }

    fn shoot(&self, r: &mut impl AsMut<Runtime>, dir: IVec2) {
        let r = r.as_mut();
        let Some(target) = r.actor_at(self.pos(r) + dir) else {
            return;
        };

        let (name, target_name) = (self.name(r), target.name(r));
        let color = self.attack_color(r);
        msg!(r, color; "{name} shoots {target_name} for {SHOT_DAMAGE} hit points.");
        target.damage(r, SHOT_DAMAGE);
    }

    fn lock_on(
        &self,
        r: &mut impl AsMut<Runtime>,
        facing: Facing,
        target: Entity,
    ) {
        let r = r.as_mut();
        self.set_facing(r, facing);
        self.set_target_lock(r, Some(target));

        let name = self.name(r);
        if target.is_player(r) {
            msg!(r, Color::Alert; "you've been locked on to by {name}!");
        } else {
            let target_name = target.name(r);
            msg!(r, Color::Alert; "{name} locks on to {target_name}.");
        }
    }

    fn unlock(&self, r: &mut impl AsMut<Runtime>) {
        let r = r.as_mut();
        self.set_target_lock(r, None);
        let name = self.name(r);
        msg!(r, Color::Alert; "{name}: lock lost.");
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::Data;

    fn level(map: &str) -> Runtime {
        Runtime::from_ascii(map, &Data::default(), 1).unwrap()
    }

    #[test]
    fn blocked_steps_do_nothing() {
        let mut r = level(
            "
            ######
            #@.-.#
            #..g.#
            ######",
        );
        let p = r.player();

        p.execute(&mut r, Action::Step(ivec2(1, 0)));
        assert_eq!(p.pos(&r), ivec2(2, 1));
        // Low wall.
        p.execute(&mut r, Action::Step(ivec2(1, 0)));
        assert_eq!(p.pos(&r), ivec2(2, 1));
        // Wall.
        p.execute(&mut r, Action::Step(ivec2(0, -1)));
        assert_eq!(p.pos(&r), ivec2(2, 1));
        // Guard.
        p.execute(&mut r, Action::Step(ivec2(1, 1)));
        assert_eq!(p.pos(&r), ivec2(2, 1));

        let mut r = level("@.");
        let p = r.player();
        p.execute(&mut r, Action::Step(ivec2(-1, 0)));
        assert_eq!(p.pos(&r), ivec2(0, 0));
    }

    #[test]
    fn bump_attacks_or_moves() {
        let mut r = level("#@g.#");
        let p = r.player();
        let g = r.actor_at(ivec2(2, 0)).unwrap();

        p.execute(&mut r, Action::Bump(ivec2(1, 0)));
        assert_eq!(p.pos(&r), ivec2(1, 0));
        assert_eq!(p.facing(&r), Facing::E);
        assert_eq!(g.stats(&r).hp, 5);

        // Into a wall, only turns.
        p.execute(&mut r, Action::Bump(ivec2(0, 1)));
        assert_eq!(p.facing(&r), Facing::S);
        assert_eq!(p.pos(&r), ivec2(1, 0));

        g.execute(&mut r, Action::Melee(ivec2(-1, 0)));
        assert_eq!(p.stats(&r).hp, 29);

        let msgs = r.take_messages();
        assert_eq!(msgs.len(), 2);
        assert_eq!(msgs[0].text, "Player attacks guard for 5 hit points.");
        assert_eq!(msgs[0].color, Color::PlayerAttack);
        assert_eq!(msgs[1].text, "Guard attacks player for 1 hit points.");
        assert_eq!(msgs[1].color, Color::EnemyAttack);
    }

    #[test]
    fn armor_stops_melee() {
        let mut data = Data::default();
        data.player.defense = 10;
        let mut r = Runtime::from_ascii("#@g#", &data, 1).unwrap();
        let g = r.actor_at(ivec2(2, 0)).unwrap();

        g.execute(&mut r, Action::Melee(ivec2(-1, 0)));
        assert_eq!(r.player().stats(&r).hp, 30);
        assert_eq!(
            r.take_messages()[0].text,
            "Guard attacks player but does no damage."
        );
    }

    #[test]
    fn attacks_on_empty_cells() {
        let mut r = level("#@..g#");
        let g = r.actor_at(ivec2(4, 0)).unwrap();

        g.execute(&mut r, Action::Shoot(ivec2(-1, 0)));
        g.execute(&mut r, Action::Melee(ivec2(-1, 0)));
        assert!(r.messages().is_empty());

        g.execute(&mut r, Action::Shoot(ivec2(-3, 0)));
        assert_eq!(r.player().stats(&r).hp, 30 - SHOT_DAMAGE);
    }

    #[test]
    fn turn_and_lock() {
        let mut r = level("#@..g#");
        let (p, g) = (r.player(), r.actor_at(ivec2(4, 0)).unwrap());

        g.execute(&mut r, Action::Turn(Facing::SW));
        assert_eq!(g.facing(&r), Facing::SW);

        g.execute(&mut r, Action::LockOn(Facing::W, p));
        assert_eq!(g.facing(&r), Facing::W);
        assert_eq!(g.target_lock(&r), Some(p));

        g.execute(&mut r, Action::Unlock);
        assert_eq!(g.target_lock(&r), None);
        assert_eq!(g.facing(&r), Facing::W);
    }
}
