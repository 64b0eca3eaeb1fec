use std::fmt;
use std::iter::FusedIterator;

use crate::error::{ContainerError, Result};

#[derive(Debug)]
struct Node<T> {
    data: T,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Doubly linked list whose nodes live in an arena addressed by slot index.
///
/// `front` and `back` are cached slot indices into the chain; every link is
/// a slot index rather than a pointer, so splicing stays O(1) without shared
/// mutable aliasing. Slots freed by removals are reused by later insertions.
///
/// Positional operations walk from whichever end is closer to the target.
pub struct DoubleLinkedList<T> {
    nodes: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    front: Option<usize>,
    back: Option<usize>,
    size: usize,
}

impl<T> DoubleLinkedList<T> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            front: None,
            back: None,
            size: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Appends `item` at the back.
    pub fn add(&mut self, item: T) {
        self.link_before(None, item);
    }

    /// Removes and returns the back element.
    pub fn remove(&mut self) -> Result<T> {
        let back = self.back.ok_or(ContainerError::EmptyContainer)?;
        Ok(self.unlink(back))
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        self.check_index(index)?;
        Ok(&self.node(self.locate(index)).data)
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.check_index(index)?;
        let id = self.locate(index);
        Ok(&mut self.node_mut(id).data)
    }

    /// Replaces the element at `index`, returning the previous one.
    pub fn set(&mut self, index: usize, item: T) -> Result<T> {
        self.get_mut(index).map(|slot| std::mem::replace(slot, item))
    }

    /// Inserts `item` so that it ends up at `index`; `index == len()` appends.
    pub fn insert(&mut self, index: usize, item: T) -> Result<()> {
        if index > self.size {
            return Err(ContainerError::IndexOutOfBounds {
                index,
                len: self.size,
            });
        }
        let next = (index < self.size).then(|| self.locate(index));
        self.link_before(next, item);
        Ok(())
    }

    /// Removes and returns the element at `index`.
    pub fn delete(&mut self, index: usize) -> Result<T> {
        self.check_index(index)?;
        let id = self.locate(index);
        Ok(self.unlink(id))
    }

    pub fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|candidate| candidate == item)
    }

    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(item).is_some()
    }

    /// Returns a fresh front-to-back iterator.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.front,
            back: self.back,
            remaining: self.size,
        }
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.size {
            return Err(ContainerError::IndexOutOfBounds {
                index,
                len: self.size,
            });
        }
        Ok(())
    }

    fn node(&self, id: usize) -> &Node<T> {
        match &self.nodes[id] {
            Some(node) => node,
            None => unreachable!("link points at vacant slot {id}"),
        }
    }

    fn node_mut(&mut self, id: usize) -> &mut Node<T> {
        match &mut self.nodes[id] {
            Some(node) => node,
            None => unreachable!("link points at vacant slot {id}"),
        }
    }

    /// Slot of the node at `index`, which must be in bounds.
    fn locate(&self, index: usize) -> usize {
        let cursor = if index < self.size / 2 {
            let mut cursor = self.front;
            for _ in 0..index {
                cursor = cursor.and_then(|id| self.node(id).next);
            }
            cursor
        } else {
            let mut cursor = self.back;
            for _ in index..self.size - 1 {
                cursor = cursor.and_then(|id| self.node(id).prev);
            }
            cursor
        };
        cursor.unwrap_or_else(|| unreachable!("index {index} within length {}", self.size))
    }

    fn alloc(&mut self, node: Node<T>) -> usize {
        match self.free.pop() {
            Some(id) => {
                self.nodes[id] = Some(node);
                id
            }
            None => {
                self.nodes.push(Some(node));
                self.nodes.len() - 1
            }
        }
    }

    /// Links a new node in front of `next`, or at the back when `next` is `None`.
    fn link_before(&mut self, next: Option<usize>, data: T) {
        let prev = match next {
            Some(id) => self.node(id).prev,
            None => self.back,
        };
        let id = self.alloc(Node { data, prev, next });
        match prev {
            Some(p) => self.node_mut(p).next = Some(id),
            None => self.front = Some(id),
        }
        match next {
            Some(n) => self.node_mut(n).prev = Some(id),
            None => self.back = Some(id),
        }
        self.size += 1;
    }

    fn unlink(&mut self, id: usize) -> T {
        let node = match self.nodes[id].take() {
            Some(node) => node,
            None => unreachable!("unlinking vacant slot {id}"),
        };
        match node.prev {
            Some(p) => self.node_mut(p).next = node.next,
            None => self.front = node.next,
        }
        match node.next {
            Some(n) => self.node_mut(n).prev = node.prev,
            None => self.back = node.prev,
        }
        self.size -= 1;
        if self.size == 0 {
            self.nodes.clear();
            self.free.clear();
        } else {
            self.free.push(id);
        }
        node.data
    }
}

impl<T> Default for DoubleLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DoubleLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for DoubleLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoubleLinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for DoubleLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for DoubleLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T> FromIterator<T> for DoubleLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

/// Borrowing iterator over a [`DoubleLinkedList`].
pub struct Iter<'a, T> {
    list: &'a DoubleLinkedList<T>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.front?);
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.back?);
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.data)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a DoubleLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Owning iterator that drains a [`DoubleLinkedList`] front to back.
pub struct IntoIter<T> {
    list: DoubleLinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let front = self.list.front?;
        Some(self.list.unlink(front))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.size, Some(self.list.size))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.list.remove().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for DoubleLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { list: self }
    }
}
