//! Insertion-ordered key/value store keyed by signature.
//!
//! Lookups go through a hash index into a slot vector; removal leaves an empty
//! slot behind so that every live entry keeps its position. Enumeration walks
//! the slots in order, which makes listings deterministic across runs.

use rustc_hash::FxHashMap;

#[derive(Debug, Clone)]
pub struct OrderedStore<V> {
    index: FxHashMap<String, usize>,
    slots: Vec<Option<(String, V)>>,
}

impl<V> Default for OrderedStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> OrderedStore<V> {
    pub fn new() -> Self {
        Self {
            index: FxHashMap::default(),
            slots: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            slots: Vec::with_capacity(capacity),
        }
    }

    pub fn has(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Returns `None` when the key is absent, never a placeholder value.
    pub fn get(&self, key: &str) -> Option<&V> {
        let slot = *self.index.get(key)?;
        self.slots[slot].as_ref().map(|(_, value)| value)
    }

    pub fn get_key_value(&self, key: &str) -> Option<(&str, &V)> {
        let slot = *self.index.get(key)?;
        self.slots[slot]
            .as_ref()
            .map(|(key, value)| (key.as_str(), value))
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let slot = *self.index.get(key)?;
        self.slots[slot].as_mut().map(|(_, value)| value)
    }

    /// Associates `value` with `key`.
    ///
    /// Replacing an existing key keeps its position and returns the previous
    /// value; a new key is appended to the end of the enumeration order.
    pub fn put(&mut self, key: String, value: V) -> Option<V> {
        if let Some(&slot) = self.index.get(&key) {
            if let Some((_, existing)) = self.slots[slot].as_mut() {
                return Some(std::mem::replace(existing, value));
            }
        }

        self.index.insert(key.clone(), self.slots.len());
        self.slots.push(Some((key, value)));
        None
    }

    pub fn remove(&mut self, key: &str) -> Option<V> {
        let slot = self.index.remove(key)?;
        let (_, value) = self.slots[slot].take()?;

        // Drop trailing holes so a remove/put cycle on the newest key stays compact.
        while matches!(self.slots.last(), Some(None)) {
            self.slots.pop();
        }
        Some(value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.slots
            .iter()
            .filter_map(|slot| slot.as_ref().map(|(key, value)| (key.as_str(), value)))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|(key, _)| key)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, value)| value)
    }

    pub fn size(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn clear(&mut self) {
        self.index.clear();
        self.slots.clear();
    }
}
