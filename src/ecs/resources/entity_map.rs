use std::collections::BTreeMap;

use bevy_ecs::entity::Entity;
use bevy_ecs::resource::Resource;

/// Bidirectional mapping between simulation IDs (u64) and Bevy entities.
///
/// Entities that are destroyed outright (not just ejected) must be removed
/// so the log stops attributing new events to them.
#[derive(Resource, Debug, Clone, Default)]
pub struct SimEntityMap {
    to_bevy: BTreeMap<u64, Entity>,
    to_sim: BTreeMap<Entity, u64>,
}

impl SimEntityMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a mapping. Panics if the sim_id is already registered.
    pub fn insert(&mut self, sim_id: u64, entity: Entity) {
        let prev = self.to_bevy.insert(sim_id, entity);
        assert!(prev.is_none(), "duplicate sim_id {sim_id} in SimEntityMap");
        self.to_sim.insert(entity, sim_id);
    }

    /// Drop the mapping for a despawned entity, if any.
    pub fn remove_entity(&mut self, entity: Entity) {
        if let Some(sim_id) = self.to_sim.remove(&entity) {
            self.to_bevy.remove(&sim_id);
        }
    }

    pub fn get_bevy(&self, sim_id: u64) -> Option<Entity> {
        self.to_bevy.get(&sim_id).copied()
    }

    pub fn get_sim(&self, entity: Entity) -> Option<u64> {
        self.to_sim.get(&entity).copied()
    }

    pub fn len(&self) -> usize {
        self.to_bevy.len()
    }

    pub fn is_empty(&self) -> bool {
        self.to_bevy.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::world::World;

    #[test]
    fn bidirectional_lookup() {
        let mut world = World::new();
        let entity = world.spawn_empty().id();
        let mut map = SimEntityMap::new();
        map.insert(7, entity);
        assert_eq!(map.get_bevy(7), Some(entity));
        assert_eq!(map.get_sim(entity), Some(7));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn remove_entity_clears_both_sides() {
        let mut world = World::new();
        let entity = world.spawn_empty().id();
        let mut map = SimEntityMap::new();
        map.insert(7, entity);
        map.remove_entity(entity);
        assert!(map.is_empty());
        assert_eq!(map.get_bevy(7), None);
    }

    #[test]
    #[should_panic(expected = "duplicate sim_id 1")]
    fn duplicate_insert_panics() {
        let mut world = World::new();
        let a = world.spawn_empty().id();
        let b = world.spawn_empty().id();
        let mut map = SimEntityMap::new();
        map.insert(1, a);
        map.insert(1, b);
    }
}
