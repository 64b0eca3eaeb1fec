use std::borrow::Borrow;
use std::hash::Hash;

use crate::error::Result;

/// Key/value operations shared by the bucket-level and table-level dictionaries.
///
/// Lookups take any borrowed form of the key, the same way
/// `std::collections::HashMap` does, so a `String`-keyed dictionary can be
/// queried with a `&str`.
pub trait Dictionary<K, V> {
    type Iter<'a>: Iterator<Item = (&'a K, &'a V)>
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    /// Returns the value stored for `key`, or [`ContainerError::KeyNotFound`].
    ///
    /// [`ContainerError::KeyNotFound`]: crate::ContainerError::KeyNotFound
    fn get<Q>(&self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized;

    fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized;

    /// Inserts or overwrites, returning the value previously stored for `key`.
    fn put(&mut self, key: K, value: V) -> Option<V>;

    fn remove<Q>(&mut self, key: &Q) -> Result<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized;

    fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized;

    fn len(&self) -> usize;

    /// Visits every entry exactly once, in no particular order.
    fn iter(&self) -> Self::Iter<'_>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a copy of the stored value, or `V::default()` when absent.
    fn get_or_default<Q>(&self, key: &Q) -> V
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone + Default,
    {
        self.get(key).cloned().unwrap_or_default()
    }
}

/// Key equality with an identity fast path ahead of the `==` fallback.
pub(crate) fn keys_match<K, Q>(stored: &K, key: &Q) -> bool
where
    K: Borrow<Q>,
    Q: Eq + ?Sized,
{
    let stored: &Q = stored.borrow();
    std::ptr::eq(stored, key) || stored == key
}
