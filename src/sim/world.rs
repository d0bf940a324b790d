//! Live entity arena plus the pending add/delete queues
//!
//! Nothing touches the live set while it is being iterated: new entities
//! wait in the add queue and doomed ones in the delete queue until the
//! frame controller promotes or drains them.

use glam::Vec2;
use slotmap::SlotMap;

use super::entity::{Effect, Entity, EntityId, UpdateEnv, UpdateOutcome};

#[derive(Debug, Clone, Default)]
pub struct World {
    entities: SlotMap<EntityId, Entity>,
    add_queue: Vec<Entity>,
    delete_queue: Vec<EntityId>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place an entity straight into the live set
    pub fn insert(&mut self, entity: Entity) -> EntityId {
        self.entities.insert(entity)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &Entity)> {
        self.entities.iter()
    }

    pub fn pending_adds(&self) -> &[Entity] {
        &self.add_queue
    }

    pub fn pending_deletes(&self) -> &[EntityId] {
        &self.delete_queue
    }

    pub fn queue_add(&mut self, entity: Entity) {
        self.add_queue.push(entity);
    }

    pub fn queue_delete(&mut self, id: EntityId) {
        self.delete_queue.push(id);
    }

    /// Move every pending entity into the live set
    pub fn promote_pending(&mut self) -> usize {
        let count = self.add_queue.len();
        for entity in self.add_queue.drain(..) {
            self.entities.insert(entity);
        }
        count
    }

    /// Remove every queued entity exactly once
    ///
    /// Duplicates and handles that are already gone are ignored.
    pub fn apply_deletes(&mut self) -> usize {
        self.delete_queue.sort_unstable();
        self.delete_queue.dedup();

        let mut removed = 0;
        for id in self.delete_queue.drain(..) {
            if self.entities.remove(id).is_some() {
                removed += 1;
            }
        }
        removed
    }

    /// Drop all live and pending entities
    pub fn clear(&mut self) {
        self.entities.clear();
        self.add_queue.clear();
        self.delete_queue.clear();
    }

    /// Update every live entity, queueing the expired ones for next frame
    pub fn update_all(&mut self, dt: f32, env: &UpdateEnv<'_>, effects: &mut Vec<Effect>) -> usize {
        let mut expired = 0;
        for (id, entity) in self.entities.iter_mut() {
            if entity.update(dt, env, effects) == UpdateOutcome::Expire {
                self.delete_queue.push(id);
                expired += 1;
            }
        }
        expired
    }

    /// Every colliding pair in the live set
    ///
    /// All-pairs test; each unordered pair is reported at most once.
    pub fn collisions(&self) -> Vec<(EntityId, EntityId)> {
        let live: Vec<(EntityId, &Entity)> = self.entities.iter().collect();
        let mut pairs = Vec::new();
        for (i, (a_id, a)) in live.iter().enumerate() {
            for (b_id, b) in &live[i + 1..] {
                if a.collides_with(b) {
                    pairs.push((*a_id, *b_id));
                }
            }
        }
        pairs
    }

    pub fn count_asteroids(&self) -> usize {
        self.entities.values().filter(|e| e.is_asteroid()).count()
    }

    pub fn has_ship(&self) -> bool {
        self.entities.values().any(Entity::is_ship)
    }

    /// Position of the live ship, if there is one
    pub fn ship_position(&self) -> Option<Vec2> {
        self.entities
            .values()
            .find(|e| e.is_ship())
            .map(|e| e.body.pos)
    }

    /// Live asteroids strictly within `radius` of `center`
    pub fn asteroids_near(&self, center: Vec2, radius: f32) -> Vec<EntityId> {
        self.entities
            .iter()
            .filter(|(_, e)| {
                e.is_asteroid() && crate::geometry::within_radius(e.body.pos, center, radius)
            })
            .map(|(id, _)| id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    #[test]
    fn test_adds_wait_for_promotion() {
        let config = GameConfig::default();
        let mut world = World::new();
        world.queue_add(Entity::ship(&config));
        assert!(world.is_empty());

        assert_eq!(world.promote_pending(), 1);
        assert_eq!(world.len(), 1);
        assert!(world.pending_adds().is_empty());
    }

    #[test]
    fn test_duplicate_deletes_remove_once() {
        let config = GameConfig::default();
        let mut world = World::new();
        let a = world.insert(Entity::asteroid(Vec2::new(10.0, 10.0), Vec2::ZERO, 0, &config));
        let b = world.insert(Entity::asteroid(Vec2::new(90.0, 10.0), Vec2::ZERO, 0, &config));

        world.queue_delete(a);
        world.queue_delete(a);
        world.queue_delete(a);
        assert_eq!(world.apply_deletes(), 1);
        assert!(world.get(a).is_none());
        assert!(world.get(b).is_some());
        assert!(world.pending_deletes().is_empty());
    }

    #[test]
    fn test_stale_delete_is_noop() {
        let config = GameConfig::default();
        let mut world = World::new();
        let a = world.insert(Entity::ship(&config));
        world.clear();
        let b = world.insert(Entity::ship(&config));

        world.queue_delete(a);
        assert_eq!(world.apply_deletes(), 0);
        assert!(world.get(b).is_some());
    }

    #[test]
    fn test_collisions_skip_asteroid_pairs() {
        let config = GameConfig::default();
        let mut world = World::new();
        let p = Vec2::new(100.0, 100.0);
        world.insert(Entity::asteroid(p, Vec2::ZERO, 1, &config));
        world.insert(Entity::asteroid(p, Vec2::ZERO, 2, &config));
        assert!(world.collisions().is_empty());

        let ship = world.insert(Entity::ship(&config));
        world.get_mut(ship).unwrap().body.pos = p;
        let pairs = world.collisions();
        assert_eq!(pairs.len(), 2);
        assert!(pairs.iter().all(|(a, b)| *a == ship || *b == ship));
    }

    #[test]
    fn test_asteroids_near_center() {
        let config = GameConfig::default();
        let mut world = World::new();
        let center = config.bounds().center();
        let near = world.insert(Entity::asteroid(center + Vec2::new(30.0, 0.0), Vec2::ZERO, 0, &config));
        world.insert(Entity::asteroid(Vec2::new(5.0, 5.0), Vec2::ZERO, 0, &config));
        world.insert(Entity::ship(&config));

        assert_eq!(world.asteroids_near(center, 100.0), vec![near]);
    }
}
