//! Hand-built containers backing the search engine analyzers.
//!
//! Provides a separately-chained hash dictionary (and the set built on it),
//! an arena-backed doubly linked list, a 4-ary min-heap, and top-k selection
//! on top of the heap. Failures surface as [`ContainerError`] and never leave
//! a container half-mutated.

pub mod array_dictionary;
pub mod chained;
pub mod dictionary;
pub mod error;
pub mod heap;
pub mod linked_list;
pub mod set;
pub mod sorting;

pub use array_dictionary::ArrayDictionary;
pub use chained::ChainedHashDictionary;
pub use dictionary::Dictionary;
pub use error::{ContainerError, Result};
pub use heap::ArrayHeap;
pub use linked_list::DoubleLinkedList;
pub use set::ChainedHashSet;
