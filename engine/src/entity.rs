//! Generic entity logic.

use derive_more::Deref;
use hecs::Component;
use util::{bresenham_line, Grid};

use crate::{ecs::*, prelude::*, vision::compute_visibility, Archetype, Brain, Color};

// Dummy wrapper so we can write impls for it directly instead of deriving a
// trait for hecs::Entity and writing every fn signature twice.
/// Game entity identifier datatype. All the actual contents live in the ECS.
#[derive(Copy, Clone, Hash, Eq, Ord, PartialEq, PartialOrd, Debug, Deref)]
pub struct Entity(pub(crate) hecs::Entity);

impl Entity {
    pub(crate) fn get<T>(&self, r: &impl AsRef<Runtime>) -> T
    where
        T: Component + Clone + Default,
    {
        let r = r.as_ref();
        r.ecs
            .get::<&T>(**self)
            .map(|c| (*c).clone())
            .unwrap_or_default()
    }

    pub(crate) fn set<T>(&self, r: &mut impl AsMut<Runtime>, val: T)
    where
        T: Component + Default + PartialEq,
    {
        let r = r.as_mut();
        if val == T::default() {
            // Remove default values, abstraction layer assumes components are
            // always present but defaulted.
            //
            // Will give an error if the component wasn't there to begin with,
            // just ignore that.
            let _ = r.ecs.remove_one::<T>(**self);
        } else {
            r.ecs.insert_one(**self, val).expect("Entity::set failed");
        }
    }

    /// Position of an entity that must be on the map.
    ///
    /// Panics if the entity isn't placed, acting entities are always on the
    /// map.
    pub fn pos(&self, r: &impl AsRef<Runtime>) -> IVec2 {
        self.try_pos(r)
            .expect("Entity::pos: entity is not on the map")
    }

    pub fn try_pos(&self, r: &impl AsRef<Runtime>) -> Option<IVec2> {
        r.as_ref().placement.entity_pos(self)
    }

    /// Move entity to a new cell, removing it from its previous one.
    pub fn place(&self, r: &mut impl AsMut<Runtime>, pos: IVec2) {
        r.as_mut().placement.insert(pos, *self);
    }

    pub fn facing(&self, r: &impl AsRef<Runtime>) -> Facing {
        self.get(r)
    }

    pub(crate) fn set_facing(&self, r: &mut impl AsMut<Runtime>, facing: Facing) {
        self.set(r, facing);
    }

    pub fn name(&self, r: &impl AsRef<Runtime>) -> String {
        self.get::<Name>(r).0
    }

    pub fn icon(&self, r: &impl AsRef<Runtime>) -> char {
        match self.get::<Icon>(r) {
            Icon('\0') => '?',
            Icon(c) => c,
        }
    }

    pub fn render_order(&self, r: &impl AsRef<Runtime>) -> RenderOrder {
        self.get(r)
    }

    pub fn blocks_movement(&self, r: &impl AsRef<Runtime>) -> bool {
        self.get::<BlocksMovement>(r).0
    }

    pub fn stats(&self, r: &impl AsRef<Runtime>) -> Stats {
        self.get(r)
    }

    pub fn archetype(&self, r: &impl AsRef<Runtime>) -> Archetype {
        self.get(r)
    }

    /// Actors without a brain are inert, which is what dead actors are.
    pub fn is_alive(&self, r: &impl AsRef<Runtime>) -> bool {
        self.get::<Brain>(r) != Brain::None
    }

    pub fn is_player(&self, r: &impl AsRef<Runtime>) -> bool {
        r.as_ref().player == *self
    }

    pub fn is_hostile(&self, r: &impl AsRef<Runtime>) -> bool {
        matches!(self.get::<Brain>(r), Brain::Hostile(_))
    }

    /// Actor this entity has locked on to, if the actor is still alive.
    pub fn target_lock(&self, r: &impl AsRef<Runtime>) -> Option<Entity> {
        self.get::<TargetLock>(r).0.filter(|e| e.is_alive(r))
    }

    /// Whether the lock slot holds anything at all, live or not.
    pub(crate) fn has_lock(&self, r: &impl AsRef<Runtime>) -> bool {
        self.get::<TargetLock>(r).0.is_some()
    }

    pub(crate) fn set_target_lock(
        &self,
        r: &mut impl AsMut<Runtime>,
        target: Option<Entity>,
    ) {
        self.set(r, TargetLock(target));
    }

    pub(crate) fn damage(&self, r: &mut impl AsMut<Runtime>, amount: i32) {
        let r = r.as_mut();
        let mut stats = self.stats(r);
        stats.hp -= amount;
        self.set(r, stats);
    }

    /// Cells this entity currently sees through its vision cone.
    pub fn visibility(&self, r: &impl AsRef<Runtime>) -> Grid<bool> {
        let r = r.as_ref();
        compute_visibility(
            r.transparency(),
            self.pos(r),
            self.facing(r),
            &self.archetype(r).cone,
        )
    }

    pub fn can_see(&self, r: &impl AsRef<Runtime>, pos: IVec2) -> bool {
        self.visibility(r).is_set(pos)
    }

    /// Cells from this entity to its lock target for drawing the lock.
    ///
    /// Excludes the entity's own cell and includes the target's. Empty if
    /// there is no live lock.
    pub fn target_lock_line(&self, r: &impl AsRef<Runtime>) -> Vec<IVec2> {
        let Some(target) = self.target_lock(r) else {
            return Vec::new();
        };
        let (a, b) = (self.pos(r), target.pos(r));
        bresenham_line(a, b).skip(1).chain(Some(b)).collect()
    }

    /// Turn the actor into inert remains.
    pub(crate) fn die(&self, r: &mut impl AsMut<Runtime>) {
        let r = r.as_mut();
        let name = self.name(r);

        if self.is_player(r) {
            msg!(r, Color::Death; "you died!");
        } else {
            msg!(r, Color::Death; "{name} is dead!");
        }

        self.set(r, Brain::None);
        self.set(r, TargetLock(None));
        self.set(r, BlocksMovement(false));
        self.set(r, RenderOrder::Corpse);
        self.set(r, Icon('%'));
        self.set(r, Name(format!("remains of {name}")));
    }
}
