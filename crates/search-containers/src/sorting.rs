use std::cmp::Ordering;

use crate::error::{ContainerError, Result};
use crate::heap::ArrayHeap;
use crate::linked_list::DoubleLinkedList;

/// Returns the `k` largest items in ascending order.
///
/// Keeps a min-heap of at most `k` items: a new item replaces the heap
/// minimum only when it is strictly larger. Draining the heap yields the
/// survivors smallest first. Runs in O(n log k).
///
/// A negative `k` is rejected before `items` is consumed.
pub fn top_k_sort<T, I>(k: isize, items: I) -> Result<DoubleLinkedList<T>>
where
    T: PartialOrd,
    I: IntoIterator<Item = T>,
{
    let k = usize::try_from(k).map_err(|_| {
        ContainerError::InvalidArgument(format!("k must be non-negative, got {k}"))
    })?;

    let mut output = DoubleLinkedList::new();
    if k == 0 {
        return Ok(output);
    }

    let mut heap = ArrayHeap::new();
    for item in items {
        if heap.len() < k {
            heap.insert(item)?;
            continue;
        }
        let ordering = item.partial_cmp(heap.peek_min()?);
        match ordering {
            Some(Ordering::Greater) => {
                heap.remove_min()?;
                heap.insert(item)?;
            }
            Some(_) => {}
            None => {
                return Err(ContainerError::InvalidArgument(
                    "items must be comparable with each other".to_string(),
                ))
            }
        }
    }

    while !heap.is_empty() {
        output.add(heap.remove_min()?);
    }
    Ok(output)
}
