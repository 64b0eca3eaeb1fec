use std::borrow::Borrow;
use std::collections::hash_map::RandomState;
use std::fmt;
use std::hash::{BuildHasher, Hash};

use crate::chained::{self, ChainedHashDictionary};
use crate::dictionary::Dictionary;
use crate::error::Result;

/// Hash set backed by a [`ChainedHashDictionary`] with unit values.
#[derive(Clone)]
pub struct ChainedHashSet<T, S = RandomState> {
    map: ChainedHashDictionary<T, (), S>,
}

impl<T> ChainedHashSet<T, RandomState> {
    pub fn new() -> Self {
        Self {
            map: ChainedHashDictionary::new(),
        }
    }
}

impl<T, S> ChainedHashSet<T, S> {
    pub fn with_hasher(hash_builder: S) -> Self {
        Self {
            map: ChainedHashDictionary::with_hasher(hash_builder),
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.map.iter(),
        }
    }
}

impl<T, S> ChainedHashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    /// Adds `item`, returning `true` if it was not already present.
    ///
    /// An item equal to one already stored leaves the stored item in place.
    pub fn add(&mut self, item: T) -> bool {
        if self.map.contains_key(&item) {
            return false;
        }
        self.map.put(item, ());
        true
    }

    /// Removes and returns the stored item equal to `item`.
    pub fn remove<Q>(&mut self, item: &Q) -> Result<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.remove_entry(item).map(|(stored, ())| stored)
    }

    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.contains_key(item)
    }
}

impl<T> Default for ChainedHashSet<T, RandomState> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, S> fmt::Debug for ChainedHashSet<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, S> Extend<T> for ChainedHashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T: Hash + Eq> FromIterator<T> for ChainedHashSet<T, RandomState> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

pub struct Iter<'a, T> {
    inner: chained::Iter<'a, T, ()>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next().map(|(item, ())| item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T, S> IntoIterator for &'a ChainedHashSet<T, S> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

pub struct IntoIter<T> {
    inner: chained::IntoIter<T, ()>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next().map(|(item, ())| item)
    }
}

impl<T, S> IntoIterator for ChainedHashSet<T, S> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            inner: self.map.into_iter(),
        }
    }
}
