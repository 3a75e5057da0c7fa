//! Component store contract over `hecs::World`.
//!
//! Every operation on a stale or never-existing entity is a no-op: two systems
//! touching the same entity in one tick (e.g. a projectile that hits and times
//! out together) is normal, not an error.

use hecs::{Component, Entity, Query, World};

pub trait ComponentStore {
    /// Create an entity with no components.
    fn create_entity(&mut self) -> Entity;

    /// Remove the entity and all its components. Returns false if it was already gone.
    fn destroy_entity(&mut self, entity: Entity) -> bool;

    /// Attach (or replace) a component. Returns false for a dead entity.
    fn add_component<T: Component>(&mut self, entity: Entity, component: T) -> bool;

    /// Copy of a component, if the entity is alive and carries one.
    fn component<T: Component + Clone>(&self, entity: Entity) -> Option<T>;

    fn remove_component<T: Component>(&mut self, entity: Entity) -> Option<T>;

    fn has_component<T: Component>(&self, entity: Entity) -> bool;

    /// Entities whose components satisfy `Q`, in unspecified order.
    fn entities_with<Q: Query>(&self) -> Vec<Entity>;
}

impl ComponentStore for World {
    fn create_entity(&mut self) -> Entity {
        self.spawn(())
    }

    fn destroy_entity(&mut self, entity: Entity) -> bool {
        self.despawn(entity).is_ok()
    }

    fn add_component<T: Component>(&mut self, entity: Entity, component: T) -> bool {
        self.insert_one(entity, component).is_ok()
    }

    fn component<T: Component + Clone>(&self, entity: Entity) -> Option<T> {
        self.get::<&T>(entity).ok().map(|c| T::clone(&c))
    }

    fn remove_component<T: Component>(&mut self, entity: Entity) -> Option<T> {
        self.remove_one::<T>(entity).ok()
    }

    fn has_component<T: Component>(&self, entity: Entity) -> bool {
        self.entity(entity).is_ok_and(|e| e.has::<T>())
    }

    fn entities_with<Q: Query>(&self) -> Vec<Entity> {
        self.query::<Q>().iter().map(|(entity, _)| entity).collect()
    }
}
