use std::hash::{Hash, Hasher};


/// Node of a search graph
/// Identity is the `key` (usually a grid coordinate). The `value` is a snapshot of whatever
/// the source associated with the key when the element was created, and takes no part in
/// equality or hashing: two elements with the same key are the same node, even if their
/// snapshots differ.
#[derive(Clone, Debug)]
pub struct SearchElement<K, V = ()> {
    key: K,
    value: V,
}

impl<K, V> SearchElement<K, V> {

    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K> From<K> for SearchElement<K, ()> {
    fn from(key: K) -> Self {
        Self::new(key, ())
    }
}

impl<K: PartialEq, V> PartialEq for SearchElement<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}
impl<K: Eq, V> Eq for SearchElement<K, V> {}

impl<K: Hash, V> Hash for SearchElement<K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}
