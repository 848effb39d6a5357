//! Perception and decision core for a turn-based stealth game.
//!
//! Actors stand on a grid, face one of eight directions and see through a
//! directional vision cone. Hostile actors patrol the map until they spot
//! the player, then lock on and fire.

/// How far the player sees by default.
pub const FOV_RADIUS: i32 = 12;

/// Extra cost for path search to enter a cell that holds a movement
/// blocking entity.
///
/// Low values make actors queue up behind each other in corridors, high
/// values make them take long detours to surround their target.
pub const CROWD_PENALTY: u32 = 10;

/// Path search weight of an orthogonal step.
pub const CARDINAL_COST: u32 = 2;

/// Path search weight of a diagonal step.
pub const DIAGONAL_COST: u32 = 3;

/// Damage dealt by a shot, not reduced by defense.
pub const SHOT_DAMAGE: i32 = 10;

/// How many random cells a patrolling actor tries as a new waypoint before
/// giving up for the turn.
pub const WAYPOINT_TRIES: usize = 16;

mod action;
pub use action::Action;

mod ai;
pub use ai::{Brain, Hunter, Mode};

mod data;
pub use data::{Archetype, Data, Monster, Settings};

mod ecs;
pub use ecs::{Name, RenderOrder, Stats};

mod entity;
pub use entity::Entity;

mod facing;
pub use facing::Facing;

mod fov;
pub use crate::fov::{line_of_sight, los_cells};

mod msg;
pub use msg::{Color, MessageLog, Msg};

mod pathing;
pub use pathing::{find_path, Costs};

mod placement;
pub use placement::Placement;

pub mod prelude;

mod runtime;
pub use runtime::Runtime;

mod tile;
pub use tile::MapTile;

mod vision;
pub use vision::{compute_visibility, Band, ConeParams};
