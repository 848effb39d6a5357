//! Entity components.
//!
//! Components are read through `Entity::get` which returns the default value
//! for missing components, so every component type has a meaningful
//! default state.

use derive_more::{Deref, DerefMut};

use crate::prelude::*;

/// Movement blocking entities can't share a cell with each other.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub struct BlocksMovement(pub bool);

#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub struct Icon(pub char);

#[derive(Clone, Debug, Eq, PartialEq, Default)]
pub struct Name(pub String);

/// Drawing layer, entities on higher layers are drawn on top.
#[derive(
    Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Default,
)]
pub enum RenderOrder {
    #[default]
    Corpse,
    Item,
    Actor,
}

/// Combat profile of an actor.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub struct Stats {
    /// Melee damage before defense.
    pub power: i32,
    /// Reduces incoming melee damage.
    pub defense: i32,
    pub hp: i32,
    pub max_hp: i32,
}

/// Actor this one has locked its aim on.
///
/// Only a handle, the target can be dead or gone. Read it through
/// `Entity::target_lock` which checks the target is still alive.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub struct TargetLock(pub Option<Entity>);

////////////////////////////////

/// Entity component system. Stores all the data of game entities.
#[derive(Default, Deref, DerefMut)]
pub(crate) struct Ecs(pub(crate) hecs::World);
