use std::borrow::Borrow;
use std::hash::Hash;

use crate::dictionary::{keys_match, Dictionary};
use crate::error::{ContainerError, Result};

const INITIAL_CAPACITY: usize = 6;

#[derive(Clone, Debug)]
struct Entry<K, V> {
    key: K,
    value: V,
}

/// Unordered list of entries searched linearly.
///
/// Used as the per-bucket chain of [`ChainedHashDictionary`], where buckets
/// stay short enough that a scan beats any extra indexing.
///
/// [`ChainedHashDictionary`]: crate::ChainedHashDictionary
#[derive(Clone, Debug)]
pub struct ArrayDictionary<K, V> {
    entries: Vec<Entry<K, V>>,
}

impl<K, V> ArrayDictionary<K, V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }

    fn position<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.entries.iter().position(|e| keys_match(&e.key, key))
    }

    /// Appends an entry without checking for an existing key.
    ///
    /// Callers must already know `key` is absent; used when rehashing.
    pub(crate) fn push_unique(&mut self, key: K, value: V) {
        self.entries.push(Entry { key, value });
    }

    pub(crate) fn remove_entry<Q>(&mut self, key: &Q) -> Result<(K, V)>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let idx = self.position(key).ok_or(ContainerError::KeyNotFound)?;
        let Entry { key, value } = self.entries.swap_remove(idx);
        Ok((key, value))
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.entries.iter(),
        }
    }
}

impl<K, V> Default for ArrayDictionary<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq, V> Dictionary<K, V> for ArrayDictionary<K, V> {
    type Iter<'a>
        = Iter<'a, K, V>
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    fn get<Q>(&self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries
            .iter()
            .find(|e| keys_match(&e.key, key))
            .map(|e| &e.value)
            .ok_or(ContainerError::KeyNotFound)
    }

    fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries
            .iter_mut()
            .find(|e| keys_match(&e.key, key))
            .map(|e| &mut e.value)
            .ok_or(ContainerError::KeyNotFound)
    }

    fn put(&mut self, key: K, value: V) -> Option<V> {
        match self.position(&key) {
            Some(idx) => Some(std::mem::replace(&mut self.entries[idx].value, value)),
            None => {
                self.entries.push(Entry { key, value });
                None
            }
        }
    }

    fn remove<Q>(&mut self, key: &Q) -> Result<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_entry(key).map(|(_, value)| value)
    }

    fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.position(key).is_some()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn iter(&self) -> Iter<'_, K, V> {
        ArrayDictionary::iter(self)
    }
}

/// Borrowing iterator over an [`ArrayDictionary`].
pub struct Iter<'a, K, V> {
    inner: std::slice::Iter<'a, Entry<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|e| (&e.key, &e.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Owning iterator over an [`ArrayDictionary`].
pub struct IntoIter<K, V> {
    inner: std::vec::IntoIter<Entry<K, V>>,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|e| (e.key, e.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> IntoIterator for ArrayDictionary<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> IntoIter<K, V> {
        IntoIter {
            inner: self.entries.into_iter(),
        }
    }
}
