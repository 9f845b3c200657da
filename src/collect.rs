//! Turning drained pipelines back into collections.
//!
//! [`CollectTarget`] is the per-collection primitive: how one item lands in
//! the collection and how capacity is reserved ahead of a drain.
//! [`FromPipeline`] builds on it for [`Pipeline::collect`], the way
//! [`FromIterator`] builds on `push`-like operations for
//! [`Iterator::collect`]. Implementing `CollectTarget` for your own
//! collection is all it takes for both [`Pipeline::collect`] and
//! [`Pipeline::collect_into`](crate::Pipeline::collect_into) to work with
//! it.

use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::hash::Hash;

use crate::Pipeline;

/// A collection that pipeline items can land in, one at a time.
pub trait CollectTarget<T> {
    /// Inserts one item, with the collection's own insertion semantics
    /// (append, set insert, key overwrite...).
    fn insert_one(&mut self, item: T);

    /// Makes room for `additional` more items where the collection supports
    /// pre-allocation. The default does nothing.
    #[inline]
    fn reserve(&mut self, additional: usize) {
        let _ = additional;
    }
}

/// A collection constructible by draining a whole pipeline.
///
/// Blanket-implemented for every [`CollectTarget`] that is also
/// [`Default`]; implement `CollectTarget` and this comes for free.
pub trait FromPipeline<T>: Sized {
    /// Builds the collection from every item `pipeline` has left.
    fn from_pipeline<P: Pipeline<Item = T>>(pipeline: P) -> Self;
}

impl<T, C> FromPipeline<T> for C
where
    C: CollectTarget<T> + Default,
{
    #[inline]
    fn from_pipeline<P: Pipeline<Item = T>>(pipeline: P) -> Self {
        let mut target = C::default();
        pipeline.collect_into(&mut target);
        target
    }
}

impl<T> CollectTarget<T> for Vec<T> {
    #[inline]
    fn insert_one(&mut self, item: T) {
        self.push(item);
    }

    #[inline]
    fn reserve(&mut self, additional: usize) {
        Vec::reserve(self, additional);
    }
}

impl<T> CollectTarget<T> for VecDeque<T> {
    #[inline]
    fn insert_one(&mut self, item: T) {
        self.push_back(item);
    }

    #[inline]
    fn reserve(&mut self, additional: usize) {
        VecDeque::reserve(self, additional);
    }
}

impl<T> CollectTarget<T> for LinkedList<T> {
    #[inline]
    fn insert_one(&mut self, item: T) {
        self.push_back(item);
    }
}

impl CollectTarget<char> for String {
    #[inline]
    fn insert_one(&mut self, item: char) {
        self.push(item);
    }

    #[inline]
    fn reserve(&mut self, additional: usize) {
        String::reserve(self, additional);
    }
}

impl CollectTarget<&str> for String {
    #[inline]
    fn insert_one(&mut self, item: &str) {
        self.push_str(item);
    }
}

impl CollectTarget<String> for String {
    #[inline]
    fn insert_one(&mut self, item: String) {
        self.push_str(&item);
    }
}

impl<T: Hash + Eq> CollectTarget<T> for HashSet<T> {
    #[inline]
    fn insert_one(&mut self, item: T) {
        self.insert(item);
    }

    #[inline]
    fn reserve(&mut self, additional: usize) {
        HashSet::reserve(self, additional);
    }
}

impl<T: Ord> CollectTarget<T> for BTreeSet<T> {
    #[inline]
    fn insert_one(&mut self, item: T) {
        self.insert(item);
    }
}

impl<T: Ord> CollectTarget<T> for BinaryHeap<T> {
    #[inline]
    fn insert_one(&mut self, item: T) {
        self.push(item);
    }

    #[inline]
    fn reserve(&mut self, additional: usize) {
        BinaryHeap::reserve(self, additional);
    }
}

/// Later pairs win on key collisions, like repeated
/// [`insert`](HashMap::insert) calls.
impl<K: Hash + Eq, V> CollectTarget<(K, V)> for HashMap<K, V> {
    #[inline]
    fn insert_one(&mut self, (key, value): (K, V)) {
        self.insert(key, value);
    }

    #[inline]
    fn reserve(&mut self, additional: usize) {
        HashMap::reserve(self, additional);
    }
}

impl<K: Ord, V> CollectTarget<(K, V)> for BTreeMap<K, V> {
    #[inline]
    fn insert_one(&mut self, (key, value): (K, V)) {
        self.insert(key, value);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, BinaryHeap, HashMap, HashSet, VecDeque};

    use crate::prelude::*;

    #[test]
    fn sequences_keep_order() {
        let vec: Vec<i32> = crate::from(vec![3, 1, 2]).collect();
        assert_eq!(vec, [3, 1, 2]);

        let deque: VecDeque<i32> = crate::from(vec![3, 1, 2]).collect();
        assert_eq!(deque, [3, 1, 2]);
    }

    #[test]
    fn sets_deduplicate() {
        let set: HashSet<i32> = crate::from(vec![1, 1, 2]).collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn strings_collect_from_chars_and_strs() {
        let from_chars: String = crate::from(vec!['a', 'b']).collect();
        assert_eq!(from_chars, "ab");

        let from_strs: String = crate::from(vec!["ab", "cd"]).collect();
        assert_eq!(from_strs, "abcd");
    }

    #[test]
    fn map_collisions_keep_the_later_value() {
        let map: HashMap<&str, i32> = crate::from(vec![("a", 1), ("a", 2), ("b", 3)]).collect();
        assert_eq!(map["a"], 2);
        assert_eq!(map["b"], 3);

        let map: BTreeMap<&str, i32> = crate::from(vec![("a", 1), ("a", 2)]).collect();
        assert_eq!(map["a"], 2);
    }

    #[test]
    fn heap_pops_in_priority_order() {
        let mut heap: BinaryHeap<i32> = crate::from(vec![2, 5, 1]).collect();
        assert_eq!(heap.pop(), Some(5));
    }

    #[test]
    fn collect_into_appends() {
        let mut all = vec![0];
        crate::from(vec![1, 2]).collect_into(&mut all).push(9);
        assert_eq!(all, [0, 1, 2, 9]);
    }
}
