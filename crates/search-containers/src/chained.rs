use std::borrow::Borrow;
use std::collections::hash_map::RandomState;
use std::fmt;
use std::hash::{BuildHasher, Hash};

use crate::array_dictionary::{self, ArrayDictionary};
use crate::dictionary::Dictionary;
use crate::error::{ContainerError, Result};

const DEFAULT_CAPACITY: usize = 16;

/// Hash dictionary with separate chaining.
///
/// Each bucket is either empty or owns an [`ArrayDictionary`] holding every
/// key whose hash maps to it. When an insertion would push the load factor
/// past 3/4 the bucket array doubles and every entry is rehashed before the
/// new entry is placed.
///
/// Iteration visits buckets in index order and entries in chain order. That
/// order changes whenever the table resizes; mutating while iterating is
/// rejected by the borrow checker.
#[derive(Clone)]
pub struct ChainedHashDictionary<K, V, S = RandomState> {
    chains: Vec<Option<ArrayDictionary<K, V>>>,
    size: usize,
    hash_builder: S,
}

impl<K, V> ChainedHashDictionary<K, V, RandomState> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a dictionary with `capacity` buckets (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, RandomState::new())
    }
}

impl<K, V, S> ChainedHashDictionary<K, V, S> {
    pub fn with_hasher(hash_builder: S) -> Self {
        Self::with_capacity_and_hasher(DEFAULT_CAPACITY, hash_builder)
    }

    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            chains: empty_chains(capacity.max(1)),
            size: 0,
            hash_builder,
        }
    }

    /// Number of buckets currently allocated.
    pub fn capacity(&self) -> usize {
        self.chains.len()
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, v)| v)
    }

    /// Visits every entry exactly once, bucket by bucket.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            chains: self.chains.iter(),
            current: None,
            remaining: self.size,
        }
    }
}

impl<K, V, S> ChainedHashDictionary<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn bucket_index<Q>(&self, key: &Q) -> usize
    where
        Q: Hash + ?Sized,
    {
        (self.hash_builder.hash_one(key) as usize) % self.chains.len()
    }

    fn chain<Q>(&self, key: &Q) -> Option<&ArrayDictionary<K, V>>
    where
        Q: Hash + ?Sized,
    {
        self.chains[self.bucket_index(key)].as_ref()
    }

    fn exceeds_load_factor(&self, size: usize) -> bool {
        size * 4 > self.chains.len() * 3
    }

    /// Doubles the bucket array and moves every entry to its new bucket.
    fn resize(&mut self) {
        let new_capacity = self.chains.len() * 2;
        tracing::debug!(
            old_capacity = self.chains.len(),
            new_capacity,
            size = self.size,
            "resizing chained dictionary"
        );
        let old = std::mem::replace(&mut self.chains, empty_chains(new_capacity));
        for (key, value) in old.into_iter().flatten().flatten() {
            let idx = self.bucket_index(&key);
            self.chains[idx]
                .get_or_insert_with(ArrayDictionary::new)
                .push_unique(key, value);
        }
    }

    /// Removes `key`, returning the stored key together with its value.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Result<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = self.bucket_index(key);
        let chain = self.chains[idx]
            .as_mut()
            .ok_or(ContainerError::KeyNotFound)?;
        let entry = chain.remove_entry(key)?;
        if chain.is_empty() {
            self.chains[idx] = None;
        }
        self.size -= 1;
        Ok(entry)
    }
}

impl<K, V, S> Dictionary<K, V> for ChainedHashDictionary<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
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
        self.chain(key)
            .ok_or(ContainerError::KeyNotFound)?
            .get(key)
    }

    fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = self.bucket_index(key);
        self.chains[idx]
            .as_mut()
            .ok_or(ContainerError::KeyNotFound)?
            .get_mut(key)
    }

    fn put(&mut self, key: K, value: V) -> Option<V> {
        let mut idx = self.bucket_index(&key);
        if let Some(existing) = self.chains[idx]
            .as_mut()
            .and_then(|chain| chain.get_mut(&key).ok())
        {
            return Some(std::mem::replace(existing, value));
        }

        if self.exceeds_load_factor(self.size + 1) {
            self.resize();
            idx = self.bucket_index(&key);
        }
        self.chains[idx]
            .get_or_insert_with(ArrayDictionary::new)
            .push_unique(key, value);
        self.size += 1;
        None
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
        self.chain(key).is_some_and(|chain| chain.contains_key(key))
    }

    fn len(&self) -> usize {
        self.size
    }

    fn iter(&self) -> Iter<'_, K, V> {
        ChainedHashDictionary::iter(self)
    }
}

fn empty_chains<K, V>(capacity: usize) -> Vec<Option<ArrayDictionary<K, V>>> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}

impl<K, V> Default for ChainedHashDictionary<K, V, RandomState> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for ChainedHashDictionary<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, S> Extend<(K, V)> for ChainedHashDictionary<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for ChainedHashDictionary<K, V, RandomState> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dict = Self::new();
        dict.extend(iter);
        dict
    }
}

/// Borrowing iterator over a [`ChainedHashDictionary`].
pub struct Iter<'a, K, V> {
    chains: std::slice::Iter<'a, Option<ArrayDictionary<K, V>>>,
    current: Option<array_dictionary::Iter<'a, K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.current.as_mut().and_then(|chain| chain.next()) {
                self.remaining -= 1;
                return Some(entry);
            }
            // Skip empty buckets; `None` here means every chain is exhausted.
            let chain = self.chains.by_ref().flatten().next()?;
            self.current = Some(chain.iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<'a, K, V, S> IntoIterator for &'a ChainedHashDictionary<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

/// Owning iterator over a [`ChainedHashDictionary`].
pub struct IntoIter<K, V> {
    inner: std::iter::Flatten<
        std::iter::Flatten<std::vec::IntoIter<Option<ArrayDictionary<K, V>>>>,
    >,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl<K, V, S> IntoIterator for ChainedHashDictionary<K, V, S> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> IntoIter<K, V> {
        IntoIter {
            inner: self.chains.into_iter().flatten().flatten(),
        }
    }
}
