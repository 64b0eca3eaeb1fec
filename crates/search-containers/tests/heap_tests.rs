use search_containers::{ArrayHeap, ContainerError};

#[test]
fn size_updates_on_insert() {
    let mut heap = ArrayHeap::new();
    heap.insert(5).unwrap();
    assert_eq!(heap.len(), 1);
    heap.insert(100).unwrap();
    heap.insert(1).unwrap();
    assert_eq!(heap.len(), 3);
    assert!(!heap.is_empty());
}

#[test]
fn peek_returns_minimum() {
    let mut heap = ArrayHeap::new();
    for i in 0..500 {
        heap.insert(i).unwrap();
    }
    assert_eq!(heap.peek_min(), Ok(&0));
    assert_eq!(heap.len(), 500);
}

#[test]
fn reverse_insertion_order() {
    let mut heap = ArrayHeap::new();
    for i in (1..=10).rev() {
        heap.insert(i).unwrap();
    }
    assert_eq!(heap.remove_min(), Ok(1));
    assert_eq!(heap.peek_min(), Ok(&2));
}

#[test]
fn duplicate_values() {
    let mut heap = ArrayHeap::new();
    for _ in 0..5 {
        heap.insert(2).unwrap();
    }
    for _ in 0..4 {
        assert_eq!(heap.remove_min(), Ok(2));
    }
    assert_eq!(heap.peek_min(), Ok(&2));
    assert_eq!(heap.len(), 1);
}

#[test]
fn empty_heap_errors() {
    let mut heap: ArrayHeap<i32> = ArrayHeap::new();
    assert_eq!(heap.peek_min(), Err(ContainerError::EmptyContainer));
    assert_eq!(heap.remove_min(), Err(ContainerError::EmptyContainer));

    heap.insert(1).unwrap();
    heap.remove_min().unwrap();
    assert_eq!(heap.remove_min(), Err(ContainerError::EmptyContainer));
}

#[test]
fn draining_sequential_inserts_is_sorted() {
    let mut heap = ArrayHeap::new();
    for i in 0..1000 {
        heap.insert(i).unwrap();
    }
    let drained: Vec<i32> = (0..1000).map(|_| heap.remove_min().unwrap()).collect();
    assert_eq!(drained, (0..1000).collect::<Vec<_>>());
    assert!(heap.is_empty());
}

#[test]
fn draining_scrambled_inserts_is_sorted() {
    let mut heap = ArrayHeap::new();
    // 7919 is coprime with 2000, so every residue shows up once.
    for i in 0..2000u64 {
        heap.insert((i * 7919) % 2000).unwrap();
    }
    let mut previous = heap.remove_min().unwrap();
    while let Ok(next) = heap.remove_min() {
        assert!(previous <= next, "{} came before {}", previous, next);
        previous = next;
    }
    assert_eq!(previous, 1999);
}

#[test]
fn capacity_stays_ahead_of_size() {
    let mut heap = ArrayHeap::new();
    for i in 0..300 {
        heap.insert(i).unwrap();
        assert!(heap.capacity() >= heap.len());
    }
}

#[test]
fn nan_is_rejected_without_mutation() {
    let mut heap = ArrayHeap::new();
    heap.insert(1.5).unwrap();
    assert!(matches!(
        heap.insert(f64::NAN),
        Err(ContainerError::InvalidArgument(_))
    ));
    assert_eq!(heap.len(), 1);
    assert_eq!(heap.peek_min(), Ok(&1.5));
}

#[test]
fn float_scores_order() {
    let mut heap = ArrayHeap::new();
    for score in [0.3, -1.0, 2.5, 0.0, 0.25] {
        heap.insert(score).unwrap();
    }
    let drained: Vec<f64> = (0..5).map(|_| heap.remove_min().unwrap()).collect();
    assert_eq!(drained, vec![-1.0, 0.0, 0.25, 0.3, 2.5]);
}

#[test]
fn interleaved_inserts_and_removals() {
    let mut heap = ArrayHeap::new();
    heap.insert(10).unwrap();
    heap.insert(4).unwrap();
    assert_eq!(heap.remove_min(), Ok(4));
    heap.insert(7).unwrap();
    heap.insert(1).unwrap();
    assert_eq!(heap.remove_min(), Ok(1));
    assert_eq!(heap.remove_min(), Ok(7));
    assert_eq!(heap.remove_min(), Ok(10));
}
