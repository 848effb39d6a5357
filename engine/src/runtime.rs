use anyhow::{bail, Result};
use rand::SeedableRng;
use util::{AsciiMap, GameRng, Grid};

use crate::{
    ecs::*, fov::line_of_sight, prelude::*, Brain, Color, Data, MapTile,
    MessageLog, Monster, Msg, Placement, Settings,
};

/// Main data container for game engine runtime.
///
/// Holds the map, the entities on it and the message log. Every game
/// operation gets the runtime passed in explicitly.
pub struct Runtime {
    turn: u64,
    pub(crate) player: Entity,
    tiles: Grid<MapTile>,
    transparency: Grid<bool>,
    walkable: Grid<bool>,
    /// Cells the player sees right now.
    visible: Grid<bool>,
    /// Cells the player has ever seen.
    explored: Grid<bool>,
    pub(crate) ecs: Ecs,
    pub(crate) placement: Placement,
    /// Actors in spawn order, the order they take their turns in.
    roster: Vec<Entity>,
    pub(crate) rng: GameRng,
    log: MessageLog,
    settings: Settings,
}

impl AsRef<Runtime> for Runtime {
    fn as_ref(&self) -> &Runtime {
        self
    }
}

impl AsMut<Runtime> for Runtime {
    fn as_mut(&mut self) -> &mut Runtime {
        self
    }
}

impl Runtime {
    /// Build a level from an ASCII map.
    ///
    /// Terrain glyphs are those of `MapTile`, `@` is the player and glyphs
    /// in the data legend spawn hostiles on ground. Whitespace is wall.
    pub fn from_ascii(map: &str, data: &Data, seed: u64) -> Result<Self> {
        let map = AsciiMap::new(map, data.legend.clone());
        let dim = map.dim();

        let mut ecs = Ecs::default();
        let player = Entity(ecs.spawn(()));

        let mut ret = Runtime {
            turn: 0,
            player,
            tiles: Grid::new(dim.x, dim.y, MapTile::Wall),
            transparency: Grid::new(dim.x, dim.y, false),
            walkable: Grid::new(dim.x, dim.y, false),
            visible: Grid::new(dim.x, dim.y, false),
            explored: Grid::new(dim.x, dim.y, false),
            ecs,
            placement: Default::default(),
            roster: Vec::new(),
            rng: GameRng::seed_from_u64(seed),
            log: Default::default(),
            settings: data.settings,
        };

        let mut player_pos = None;

        for (p, c, spawn) in map.iter() {
            if c == '@' {
                if player_pos.is_some() {
                    bail!("from_ascii: multiple player positions");
                }
                player_pos = Some(p);
                ret.set_tile(p, MapTile::Ground);
            } else if let Some(name) = spawn {
                let Some((name, monster)) = data.spawn_for(c) else {
                    bail!("from_ascii: unknown monster {name:?} for {c:?}");
                };
                ret.set_tile(p, MapTile::Ground);
                let e = Entity(ret.ecs.spawn(()));
                ret.init_actor(
                    e,
                    name,
                    monster,
                    Brain::Hostile(Default::default()),
                );
                e.place(&mut ret, p);
            } else {
                match MapTile::try_from(c) {
                    Ok(t) => ret.set_tile(p, t),
                    Err(_) => bail!("from_ascii: bad map char {c:?} at {p}"),
                }
            }
        }

        let Some(pos) = player_pos else {
            bail!("from_ascii: no player position");
        };
        ret.init_actor(player, "player", &data.player, Brain::Player);
        // Player goes first in the roster.
        ret.roster.rotate_right(1);
        player.place(&mut ret, pos);

        ret.update_fov();
        log::info!(
            "from_ascii: {}x{} level with {} actors",
            dim.x,
            dim.y,
            ret.roster.len()
        );

        Ok(ret)
    }

    fn init_actor(
        &mut self,
        e: Entity,
        name: &str,
        monster: &Monster,
        brain: Brain,
    ) {
        self.ecs
            .insert(
                *e,
                (
                    Name(name.to_owned()),
                    Icon(monster.icon),
                    Stats {
                        power: monster.power,
                        defense: monster.defense,
                        hp: monster.hp,
                        max_hp: monster.hp,
                    },
                    monster.archetype,
                    BlocksMovement(true),
                    RenderOrder::Actor,
                    brain,
                ),
            )
            .expect("Runtime::init_actor: entity not in ECS");
        self.roster.push(e);
    }

    /// Number of turns played so far.
    pub fn now(&self) -> u64 {
        self.turn
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn player(&self) -> Entity {
        self.player
    }

    pub fn width(&self) -> i32 {
        self.tiles.width()
    }

    pub fn height(&self) -> i32 {
        self.tiles.height()
    }

    pub fn in_bounds(&self, p: IVec2) -> bool {
        self.tiles.contains(p)
    }

    /// Terrain at a cell, off-map cells read as wall.
    pub fn tile(&self, p: IVec2) -> MapTile {
        self.tiles.get(p).copied().unwrap_or_default()
    }

    pub fn set_tile(&mut self, p: IVec2, t: MapTile) {
        if self.tiles.set(p, t) {
            self.transparency.set(p, t.is_transparent());
            self.walkable.set(p, t.is_walkable());
        }
    }

    pub fn transparency(&self) -> &Grid<bool> {
        &self.transparency
    }

    pub fn walkable(&self) -> &Grid<bool> {
        &self.walkable
    }

    pub fn entities_at(&self, p: IVec2) -> impl Iterator<Item = Entity> + '_ {
        self.placement.entities_at(p)
    }

    pub fn blocking_entity_at(&self, p: IVec2) -> Option<Entity> {
        self.entities_at(p).find(|e| e.blocks_movement(self))
    }

    /// Living actor at a cell.
    pub fn actor_at(&self, p: IVec2) -> Option<Entity> {
        self.entities_at(p).find(|e| e.is_alive(self))
    }

    /// Living actors in turn order.
    pub fn actors(&self) -> impl Iterator<Item = Entity> + '_ {
        self.roster.iter().copied().filter(|e| e.is_alive(self))
    }

    /// All placed entities, lowest render order first.
    pub fn render_list(&self) -> Vec<(IVec2, Entity)> {
        let mut ret: Vec<(IVec2, Entity)> =
            self.placement.iter().map(|(e, p)| (p, e)).collect();
        ret.sort_by_key(|(_, e)| e.render_order(self));
        ret
    }

    pub fn is_visible(&self, p: IVec2) -> bool {
        self.visible.is_set(p)
    }

    pub fn is_explored(&self, p: IVec2) -> bool {
        self.explored.is_set(p)
    }

    pub fn visible(&self) -> &Grid<bool> {
        &self.visible
    }

    pub fn explored(&self) -> &Grid<bool> {
        &self.explored
    }

    pub fn add_message(&mut self, text: impl Into<String>, color: Color) {
        self.log.add_message(text, color);
    }

    pub fn messages(&self) -> &MessageLog {
        &self.log
    }

    pub fn take_messages(&mut self) -> Vec<Msg> {
        self.log.take()
    }

    /// Run the hostiles' side of a turn.
    ///
    /// Every living hostile performs one action in spawn order. Actors that
    /// ran out of hit points are turned into remains afterwards.
    pub fn play_turn(&mut self) {
        for e in self.roster.clone() {
            if e.is_hostile(self) && e.stats(self).hp > 0 {
                e.perform(self);
            }
        }

        self.reap();
        self.update_fov();
        self.turn += 1;
    }

    fn reap(&mut self) {
        for e in self.roster.clone() {
            if e.is_alive(self) && e.stats(self).hp <= 0 {
                e.die(self);
            }
        }
    }

    /// Recompute what the player sees.
    pub fn update_fov(&mut self) {
        let Some(pos) = self.player.try_pos(self) else {
            return;
        };
        self.visible = line_of_sight(
            &self.transparency,
            pos,
            self.settings.player_fov_radius,
        );
        for p in self.visible.set_points() {
            self.explored.set(p, true);
        }
    }
}
