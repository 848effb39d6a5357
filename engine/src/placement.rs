use std::collections::BTreeMap;

use crate::prelude::*;

/// Spatial index, used for efficiently finding locations of entities and
/// entities at locations.
///
/// An entity is in at most one cell at a time, placing it somewhere removes
/// it from where it was before.
#[derive(Clone, Default, Eq, PartialEq, Debug)]
pub struct Placement {
    places: BTreeMap<Entity, IVec2>,
    entities: HashMap<IVec2, IndexSet<Entity>>,
}

impl Placement {
    /// Entities in a cell in the order they were placed there.
    pub fn entities_at(&self, pos: IVec2) -> impl Iterator<Item = Entity> + '_ {
        self.entities.get(&pos).into_iter().flatten().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Entity, IVec2)> + '_ {
        self.places.iter().map(|(&e, &p)| (e, p))
    }

    pub fn entity_pos(&self, e: &Entity) -> Option<IVec2> {
        self.places.get(e).copied()
    }

    pub fn remove(&mut self, e: &Entity) {
        if let Some(pos) = self.places.remove(e) {
            if let Some(set) = self.entities.get_mut(&pos) {
                set.shift_remove(e);
                if set.is_empty() {
                    self.entities.remove(&pos);
                }
            }
        }
    }

    pub fn insert(&mut self, pos: IVec2, e: Entity) {
        self.remove(&e);
        self.places.insert(e, pos);
        self.entities.entry(pos).or_default().insert(e);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn relocation() {
        let mut world = hecs::World::new();
        let (a, b) = (Entity(world.spawn(())), Entity(world.spawn(())));
        let mut placement = Placement::default();

        placement.insert(ivec2(1, 1), a);
        placement.insert(ivec2(1, 1), b);
        assert_eq!(
            placement.entities_at(ivec2(1, 1)).collect::<Vec<_>>(),
            vec![a, b]
        );

        placement.insert(ivec2(2, 1), a);
        assert_eq!(
            placement.entities_at(ivec2(1, 1)).collect::<Vec<_>>(),
            vec![b]
        );
        assert_eq!(placement.entity_pos(&a), Some(ivec2(2, 1)));

        placement.remove(&b);
        assert_eq!(placement.entities_at(ivec2(1, 1)).count(), 0);
        assert_eq!(placement.entity_pos(&b), None);
        assert_eq!(placement.iter().count(), 1);
    }
}
