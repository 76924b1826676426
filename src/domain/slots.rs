use std::collections::BTreeMap;

/// First id handed out; slot 0 is a permanent placeholder
pub const FIRST_ID: usize = 1;

/// Largest id accepted from a file. Keeps the counter far from overflow.
pub const MAX_ID: usize = u32::MAX as usize;

/// Id-addressed collection where deleted entries leave holes.
///
/// An entry's id is its slot. Ids come from a monotonic counter, so a hole is
/// never refilled by `push`, and removing entries never shifts the others.
#[derive(Debug, Clone, PartialEq)]
pub struct Slots<T> {
    entries: BTreeMap<usize, T>,
    next_id: usize,
}

impl<T> Default for Slots<T> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
            next_id: FIRST_ID,
        }
    }
}

impl<T> Slots<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry built with the next id and return that id
    pub fn push_with(&mut self, build: impl FnOnce(usize) -> T) -> usize {
        let id = self.next_id;
        self.entries.insert(id, build(id));
        self.next_id += 1;
        id
    }

    /// Place an entry at an explicit id (load path). Returns the entry it
    /// replaced, if any. The counter moves past `id` so it is never reissued.
    pub fn insert_at(&mut self, id: usize, entry: T) -> Option<T> {
        debug_assert!((FIRST_ID..=MAX_ID).contains(&id), "id {} out of range", id);
        self.next_id = self.next_id.max(id.saturating_add(1));
        self.entries.insert(id, entry)
    }

    /// Turn a slot into a hole
    pub fn remove(&mut self, id: usize) -> Option<T> {
        self.entries.remove(&id)
    }

    /// Hole out every entry matching `predicate`, returning the removed ids
    pub fn remove_where(&mut self, mut predicate: impl FnMut(&T) -> bool) -> Vec<usize> {
        let ids: Vec<usize> = self
            .entries
            .iter()
            .filter(|(_, entry)| predicate(entry))
            .map(|(id, _)| *id)
            .collect();
        for id in &ids {
            self.entries.remove(id);
        }
        ids
    }

    pub fn get(&self, id: usize) -> Option<&T> {
        self.entries.get(&id)
    }

    pub fn get_mut(&mut self, id: usize) -> Option<&mut T> {
        self.entries.get_mut(&id)
    }

    pub fn contains(&self, id: usize) -> bool {
        self.entries.contains_key(&id)
    }

    /// Live entries in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.entries.values_mut()
    }

    /// Number of slots including the placeholder and every hole
    pub fn slot_count(&self) -> usize {
        self.next_id
    }

    pub fn live_count(&self) -> usize {
        self.entries.len()
    }
}
