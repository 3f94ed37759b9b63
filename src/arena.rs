//! Generation-checked slot storage.
//!
//! Removing an element frees its slot onto a free list without moving any other
//! element, so handles held elsewhere stay valid. Each slot carries a generation
//! counter that is bumped on removal; an [`Index`] minted before the bump no
//! longer resolves once the slot is reused.

use alloc::vec::Vec;

/// Stable reference into an [`Arena`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Index {
    slot: usize,
    generation: u32,
}

impl Index {
    /// Position of the slot in the backing storage.
    pub fn slot(&self) -> usize { self.slot }
    pub fn generation(&self) -> u32 { self.generation }
}

#[derive(Clone, Debug)]
enum Entry<T> {
    Occupied { generation: u32, value: T },
    Vacant { generation: u32, next_free: Option<usize> },
}

#[derive(Clone, Debug)]
pub struct Arena<T> {
    entries: Vec<Entry<T>>,
    free_head: Option<usize>,
    len: usize,
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Arena { entries: Vec::new(), free_head: None, len: 0 }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Arena { entries: Vec::with_capacity(capacity), free_head: None, len: 0 }
    }

    pub fn insert(&mut self, value: T) -> Index {
        self.len += 1;
        match self.free_head {
            Some(slot) => {
                let (generation, next_free) = match self.entries[slot] {
                    Entry::Vacant { generation, next_free } => (generation, next_free),
                    Entry::Occupied { .. } => unreachable!("free list points at an occupied slot"),
                };
                self.free_head = next_free;
                self.entries[slot] = Entry::Occupied { generation, value };
                Index { slot, generation }
            }
            None => {
                let slot = self.entries.len();
                self.entries.push(Entry::Occupied { generation: 0, value });
                Index { slot, generation: 0 }
            }
        }
    }

    /// Remove the element behind `index`. Stale indices are a no-op.
    pub fn remove(&mut self, index: Index) -> Option<T> {
        if !self.contains(index) {
            return None;
        }
        let vacant = Entry::Vacant {
            generation: index.generation.wrapping_add(1),
            next_free: self.free_head,
        };
        let old = core::mem::replace(&mut self.entries[index.slot], vacant);
        self.free_head = Some(index.slot);
        self.len -= 1;
        match old {
            Entry::Occupied { value, .. } => Some(value),
            Entry::Vacant { .. } => None,
        }
    }

    pub fn contains(&self, index: Index) -> bool {
        self.get(index).is_some()
    }

    pub fn get(&self, index: Index) -> Option<&T> {
        match self.entries.get(index.slot) {
            Some(Entry::Occupied { generation, value }) if *generation == index.generation => Some(value),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, index: Index) -> Option<&mut T> {
        match self.entries.get_mut(index.slot) {
            Some(Entry::Occupied { generation, value }) if *generation == index.generation => Some(value),
            _ => None,
        }
    }

    pub fn len(&self) -> usize { self.len }
    pub fn is_empty(&self) -> bool { self.len == 0 }

    /// Drop every element. Generations are kept so old indices stay stale.
    pub fn clear(&mut self) {
        let mut free_head = None;
        for (slot, entry) in self.entries.iter_mut().enumerate().rev() {
            let generation = match entry {
                Entry::Occupied { generation, .. } => generation.wrapping_add(1),
                Entry::Vacant { generation, .. } => *generation,
            };
            *entry = Entry::Vacant { generation, next_free: free_head };
            free_head = Some(slot);
        }
        self.free_head = free_head;
        self.len = 0;
    }

    /// Occupied elements in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (Index, &T)> + '_ {
        self.entries.iter().enumerate().filter_map(|(slot, entry)| match entry {
            Entry::Occupied { generation, value } => Some((Index { slot, generation: *generation }, value)),
            Entry::Vacant { .. } => None,
        })
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Index, &mut T)> + '_ {
        self.entries.iter_mut().enumerate().filter_map(|(slot, entry)| match entry {
            Entry::Occupied { generation, value } => Some((Index { slot, generation: *generation }, value)),
            Entry::Vacant { .. } => None,
        })
    }

    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.iter().map(|(_, value)| value)
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> + '_ {
        self.iter_mut().map(|(_, value)| value)
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let mut arena = Arena::new();
        let a = arena.insert("a");
        let b = arena.insert("b");
        assert_eq!(arena.get(a), Some(&"a"));
        assert_eq!(arena.get(b), Some(&"b"));
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn removed_index_is_stale_after_reuse() {
        let mut arena = Arena::new();
        let a = arena.insert(1);
        assert_eq!(arena.remove(a), Some(1));
        let b = arena.insert(2);
        assert_eq!(a.slot(), b.slot(), "freed slot should be reused");
        assert_ne!(a.generation(), b.generation());
        assert_eq!(arena.get(a), None);
        assert_eq!(arena.get(b), Some(&2));
    }

    #[test]
    fn double_remove_is_noop() {
        let mut arena = Arena::new();
        let a = arena.insert(7);
        assert_eq!(arena.remove(a), Some(7));
        assert_eq!(arena.remove(a), None);
        assert!(arena.is_empty());
    }

    #[test]
    fn iteration_skips_vacant_slots() {
        let mut arena = Arena::new();
        let a = arena.insert(10);
        let _b = arena.insert(20);
        let _c = arena.insert(30);
        arena.remove(a);
        let values: Vec<i32> = arena.values().copied().collect();
        assert_eq!(values, alloc::vec![20, 30]);
    }

    #[test]
    fn clear_invalidates_everything() {
        let mut arena = Arena::new();
        let a = arena.insert(1);
        let b = arena.insert(2);
        arena.clear();
        assert!(arena.is_empty());
        assert!(!arena.contains(a));
        assert!(!arena.contains(b));
        let c = arena.insert(3);
        assert_eq!(arena.get(c), Some(&3));
        assert_eq!(arena.len(), 1);
    }
}
