use std::cmp::Ordering;

use crate::error::{ContainerError, Result};

const NUM_CHILDREN: usize = 4;
const INITIAL_CAPACITY: usize = 5;

/// Array-backed 4-ary min-heap.
///
/// The children of slot `i` live at `4i + 1 ..= 4i + 4`. When the backing
/// storage fills up it grows by `4^(height + 1)` slots and the tracked height
/// increases by one.
///
/// Elements only need `PartialOrd`; an element that does not compare equal to
/// itself (a float NaN) is refused at insertion, so everything stored is
/// totally ordered.
#[derive(Clone, Debug)]
pub struct ArrayHeap<T> {
    heap: Vec<T>,
    height: u32,
}

impl<T: PartialOrd> ArrayHeap<T> {
    pub fn new() -> Self {
        Self {
            heap: Vec::with_capacity(INITIAL_CAPACITY),
            height: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Slots allocated in the backing storage; always at least `len()`.
    pub fn capacity(&self) -> usize {
        self.heap.capacity()
    }

    pub fn peek_min(&self) -> Result<&T> {
        self.heap.first().ok_or(ContainerError::EmptyContainer)
    }

    pub fn insert(&mut self, item: T) -> Result<()> {
        if item.partial_cmp(&item).is_none() {
            return Err(ContainerError::InvalidArgument(
                "heap items must be comparable with themselves".to_string(),
            ));
        }
        if self.heap.len() == self.heap.capacity() {
            self.grow();
        }
        self.heap.push(item);
        self.sift_up(self.heap.len() - 1);
        Ok(())
    }

    /// Removes the smallest element, moving the last element into the root
    /// and sifting it down.
    pub fn remove_min(&mut self) -> Result<T> {
        if self.heap.is_empty() {
            return Err(ContainerError::EmptyContainer);
        }
        let min = self.heap.swap_remove(0);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Ok(min)
    }

    fn grow(&mut self) {
        let extra = NUM_CHILDREN.saturating_pow(self.height + 1);
        tracing::debug!(
            len = self.heap.len(),
            extra,
            height = self.height,
            "growing heap storage"
        );
        self.heap.reserve_exact(extra);
        self.height += 1;
    }

    fn sift_up(&mut self, mut cursor: usize) {
        while cursor > 0 {
            let parent = (cursor - 1) / NUM_CHILDREN;
            if !less(&self.heap[cursor], &self.heap[parent]) {
                break;
            }
            self.heap.swap(cursor, parent);
            cursor = parent;
        }
    }

    fn sift_down(&mut self, mut cursor: usize) {
        let len = self.heap.len();
        loop {
            let first = NUM_CHILDREN * cursor + 1;
            if first >= len {
                break;
            }
            let last = (first + NUM_CHILDREN).min(len);
            // Strict comparison keeps the lowest-indexed child among equals.
            let mut smallest = first;
            for child in first + 1..last {
                if less(&self.heap[child], &self.heap[smallest]) {
                    smallest = child;
                }
            }
            if !less(&self.heap[smallest], &self.heap[cursor]) {
                break;
            }
            self.heap.swap(cursor, smallest);
            cursor = smallest;
        }
    }
}

impl<T: PartialOrd> Default for ArrayHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn less<T: PartialOrd>(a: &T, b: &T) -> bool {
    a.partial_cmp(b) == Some(Ordering::Less)
}
