//! Insertion-ordered entity storage with removal-safe traversal.
//!
//! The store backs the whole world: entities are appended in spawn order
//! and iterated in that order. The [`Cursor`] supports removing entities
//! mid-traversal — including the one under the cursor — without skipping
//! or revisiting any surviving element. Frame advancement relies on this
//! to drop expended missiles while continuing to move everything else.

use serde::{Deserialize, Serialize};

use asteroids_core::entities::Entity;

/// Stable identity handle for a stored entity. Never reused within one
/// store's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(u64);

/// Ordered, mutable collection of game entities.
#[derive(Debug, Default)]
pub struct EntityStore {
    entries: Vec<(EntityId, Entity)>,
    next_id: u64,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entity in spawn order. No deduplication.
    pub fn add(&mut self, entity: Entity) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, entity));
        id
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entries
            .iter()
            .find(|(entry_id, _)| *entry_id == id)
            .map(|(_, entity)| entity)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entries
            .iter_mut()
            .find(|(entry_id, _)| *entry_id == id)
            .map(|(_, entity)| entity)
    }

    /// Remove the entity with the given id. Returns it if present.
    pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
        let index = self.entries.iter().position(|(entry_id, _)| *entry_id == id)?;
        Some(self.entries.remove(index).1)
    }

    /// Id of the first entity matching `predicate`, in spawn order.
    pub fn find(&self, predicate: impl Fn(&Entity) -> bool) -> Option<EntityId> {
        self.entries
            .iter()
            .find(|(_, entity)| predicate(entity))
            .map(|(id, _)| *id)
    }

    /// Read-only traversal in spawn order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &Entity)> {
        self.entries.iter().map(|(id, entity)| (*id, entity))
    }

    /// Mutable traversal supporting in-place removal.
    pub fn cursor(&mut self) -> Cursor<'_> {
        Cursor {
            store: self,
            next: 0,
            current: None,
        }
    }
}

/// Traversal cursor over an [`EntityStore`].
///
/// Removing an element behind the cursor shifts the cursor back so the
/// remaining elements are still visited exactly once; removing the
/// element under the cursor leaves the cursor on the gap so the next
/// [`Cursor::advance`] yields the element that followed it.
pub struct Cursor<'a> {
    store: &'a mut EntityStore,
    /// Index of the next element `advance` will yield.
    next: usize,
    /// Index of the element most recently yielded, if it still exists.
    current: Option<usize>,
}

impl Cursor<'_> {
    /// Whether `advance` would yield another element.
    pub fn has_next(&self) -> bool {
        self.next < self.store.entries.len()
    }

    /// Move to the next element and return it.
    pub fn advance(&mut self) -> Option<(EntityId, &mut Entity)> {
        if self.next >= self.store.entries.len() {
            return None;
        }
        let index = self.next;
        self.current = Some(index);
        self.next += 1;
        let (id, entity) = &mut self.store.entries[index];
        Some((*id, entity))
    }

    /// The element most recently yielded by `advance`, unless it has been
    /// removed.
    pub fn current(&mut self) -> Option<(EntityId, &mut Entity)> {
        let index = self.current?;
        let (id, entity) = &mut self.store.entries[index];
        Some((*id, entity))
    }

    /// Remove the element under the cursor. No-op if `advance` has not
    /// been called or the element was already removed.
    pub fn remove_current(&mut self) -> Option<Entity> {
        let index = self.current.take()?;
        self.next = index;
        Some(self.store.entries.remove(index).1)
    }

    /// Remove a specific entity mid-traversal. Safe at any cursor
    /// position; surviving elements are neither skipped nor revisited.
    pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
        let index = self
            .store
            .entries
            .iter()
            .position(|(entry_id, _)| *entry_id == id)?;
        if index < self.next {
            self.next -= 1;
        }
        match self.current {
            Some(current) if current == index => self.current = None,
            Some(current) if current > index => self.current = Some(current - 1),
            _ => {}
        }
        Some(self.store.entries.remove(index).1)
    }
}
