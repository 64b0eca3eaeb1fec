use std::collections::HashMap;

use proptest::prelude::*;
use search_containers::sorting::top_k_sort;
use search_containers::{
    ArrayHeap, ChainedHashDictionary, ContainerError, Dictionary, DoubleLinkedList,
};

#[derive(Clone, Debug)]
enum DictOp {
    Put(u16, i32),
    Remove(u16),
}

fn dict_op() -> impl Strategy<Value = DictOp> {
    prop_oneof![
        3 => (0u16..64, any::<i32>()).prop_map(|(k, v)| DictOp::Put(k, v)),
        1 => (0u16..64).prop_map(DictOp::Remove),
    ]
}

proptest! {
    #[test]
    fn unique_inserts_are_all_retrievable(keys in prop::collection::hash_set(any::<u32>(), 0..500)) {
        let mut dict = ChainedHashDictionary::new();
        for &key in &keys {
            dict.put(key, u64::from(key) + 1);
        }
        prop_assert_eq!(dict.len(), keys.len());
        for &key in &keys {
            prop_assert_eq!(dict.get(&key), Ok(&(u64::from(key) + 1)));
        }
    }

    #[test]
    fn dictionary_matches_std_model(ops in prop::collection::vec(dict_op(), 0..300)) {
        let mut dict = ChainedHashDictionary::new();
        let mut model = HashMap::new();
        for op in ops {
            match op {
                DictOp::Put(k, v) => {
                    prop_assert_eq!(dict.put(k, v), model.insert(k, v));
                }
                DictOp::Remove(k) => {
                    let expected = model.remove(&k).ok_or(ContainerError::KeyNotFound);
                    prop_assert_eq!(dict.remove(&k), expected);
                }
            }
            prop_assert_eq!(dict.len(), model.len());
        }
        for (k, v) in &model {
            prop_assert_eq!(dict.get(k), Ok(v));
        }
        prop_assert_eq!(dict.iter().count(), model.len());
    }

    #[test]
    fn heap_drains_in_sorted_order(items in prop::collection::vec(any::<i64>(), 0..400)) {
        let mut heap = ArrayHeap::new();
        for &item in &items {
            heap.insert(item).unwrap();
        }
        let mut drained = Vec::with_capacity(items.len());
        while let Ok(min) = heap.remove_min() {
            drained.push(min);
        }
        let mut expected = items.clone();
        expected.sort();
        prop_assert_eq!(drained, expected);
    }

    #[test]
    fn remove_min_never_exceeds_remaining(items in prop::collection::vec(0i32..100, 1..100)) {
        let mut heap = ArrayHeap::new();
        for &item in &items {
            heap.insert(item).unwrap();
        }
        let mut remaining = items.clone();
        while let Ok(min) = heap.remove_min() {
            prop_assert!(remaining.iter().all(|&other| min <= other));
            let pos = remaining.iter().position(|&x| x == min).unwrap();
            remaining.swap_remove(pos);
        }
        prop_assert!(remaining.is_empty());
    }

    #[test]
    fn top_k_is_tail_of_full_sort(
        items in prop::collection::vec(-1000i32..1000, 0..200),
        k in 0isize..250,
    ) {
        let top = top_k_sort(k, items.clone()).unwrap();
        let result: Vec<i32> = top.iter().copied().collect();

        let mut sorted = items.clone();
        sorted.sort();
        let keep = (k as usize).min(sorted.len());
        let expected = sorted[sorted.len() - keep..].to_vec();

        prop_assert_eq!(result.len(), keep);
        prop_assert_eq!(result, expected);
    }

    #[test]
    fn list_insert_then_delete_round_trips(
        items in prop::collection::vec(any::<i16>(), 0..60),
        seed in any::<usize>(),
        value in any::<i16>(),
    ) {
        let mut list: DoubleLinkedList<i16> = items.iter().copied().collect();
        let index = seed % (items.len() + 1);

        list.insert(index, value).unwrap();
        prop_assert_eq!(list.len(), items.len() + 1);
        prop_assert_eq!(list.get(index), Ok(&value));

        prop_assert_eq!(list.delete(index), Ok(value));
        let restored: Vec<i16> = list.iter().copied().collect();
        prop_assert_eq!(restored, items);
    }

    #[test]
    fn list_matches_vec_model(
        inserts in prop::collection::vec((any::<usize>(), any::<u8>()), 0..100),
        deletes in prop::collection::vec(any::<usize>(), 0..50),
    ) {
        let mut list = DoubleLinkedList::new();
        let mut model = Vec::new();
        for (seed, value) in inserts {
            let index = seed % (model.len() + 1);
            list.insert(index, value).unwrap();
            model.insert(index, value);
        }
        for seed in deletes {
            if model.is_empty() {
                let expected = Err(ContainerError::IndexOutOfBounds { index: 0, len: 0 });
                prop_assert_eq!(list.delete(0), expected);
                break;
            }
            let index = seed % model.len();
            prop_assert_eq!(list.delete(index), Ok(model.remove(index)));
        }
        let forward: Vec<u8> = list.iter().copied().collect();
        let backward: Vec<u8> = list.iter().rev().copied().collect();
        let mut model_reversed = model.clone();
        model_reversed.reverse();
        prop_assert_eq!(forward, model);
        prop_assert_eq!(backward, model_reversed);
    }
}
