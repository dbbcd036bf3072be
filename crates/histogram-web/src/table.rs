// File: crates/histogram-web/src/table.rs
// Summary: Container bookkeeping for the web host; one slot per attached element, released on forget.

use std::collections::BTreeMap;

use histogram_core::ContainerId;

/// Maps container ids to the element they stand for plus per-container state.
/// Attaching an element that is already present returns its existing id.
pub struct ContainerTable<K, V> {
    entries: BTreeMap<ContainerId, (K, V)>,
    next: u64,
}

impl<K, V> Default for ContainerTable<K, V> {
    fn default() -> Self {
        Self { entries: BTreeMap::new(), next: 0 }
    }
}

impl<K: PartialEq, V> ContainerTable<K, V> {
    pub fn new() -> Self { Self::default() }

    /// Id for `key`, inserting a fresh slot built by `init` when it is not present yet.
    pub fn attach(&mut self, key: K, init: impl FnOnce() -> V) -> ContainerId {
        if let Some((id, _)) = self.entries.iter().find(|(_, (k, _))| *k == key) {
            return *id;
        }
        let id = ContainerId(self.next);
        self.next += 1;
        self.entries.insert(id, (key, init()));
        id
    }

    pub fn key(&self, id: ContainerId) -> Option<&K> {
        self.entries.get(&id).map(|(k, _)| k)
    }

    pub fn get(&self, id: ContainerId) -> Option<&V> {
        self.entries.get(&id).map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, id: ContainerId) -> Option<(&K, &mut V)> {
        self.entries.get_mut(&id).map(|(k, v)| (&*k, v))
    }

    /// Drop the slot; a later `attach` of the same key gets a new id.
    pub fn remove(&mut self, id: ContainerId) -> Option<(K, V)> {
        self.entries.remove(&id)
    }

    /// Empty the table, handing every slot back for teardown.
    pub fn drain(&mut self) -> Vec<(K, V)> {
        std::mem::take(&mut self.entries).into_values().collect()
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attach_deduplicates_by_key() {
        let mut t: ContainerTable<&str, u32> = ContainerTable::new();
        let a = t.attach("#a", || 1);
        let b = t.attach("#b", || 2);
        assert_ne!(a, b);
        assert_eq!(t.attach("#a", || 99), a);
        assert_eq!(t.len(), 2);
        assert_eq!(t.get_mut(a).map(|(_, v)| *v), Some(1));
    }

    #[test]
    fn remove_releases_slot_and_reattach_gets_new_id() {
        let mut t: ContainerTable<&str, ()> = ContainerTable::new();
        let a = t.attach("#a", || ());
        assert_eq!(t.remove(a).map(|(k, _)| k), Some("#a"));
        assert!(t.is_empty());
        assert!(t.key(a).is_none());
        assert!(t.remove(a).is_none());
        let again = t.attach("#a", || ());
        assert_ne!(again, a);
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn drain_hands_back_every_slot() {
        let mut t: ContainerTable<&str, u32> = ContainerTable::new();
        t.attach("#a", || 1);
        t.attach("#b", || 2);
        let mut drained: Vec<u32> = t.drain().into_iter().map(|(_, v)| v).collect();
        drained.sort();
        assert_eq!(drained, vec![1, 2]);
        assert!(t.is_empty());
    }
}
