use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use crate::{Pipeline, SizeHint};

/// A pipeline stage that keeps only the first occurrence of each item.
///
/// Streaming: the seen-set grows as items are pulled, but the upstream is
/// never drained ahead of demand, so endless pipelines work.
///
/// This `struct` is created by [`Pipeline::unique`]. See its documentation
/// for more.
pub struct Unique<P: Pipeline> {
    upstream: P,
    seen: HashSet<P::Item>,
}

impl<P> Clone for Unique<P>
where
    P: Pipeline + Clone,
    P::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            upstream: self.upstream.clone(),
            seen: self.seen.clone(),
        }
    }
}

impl<P: Pipeline> Unique<P> {
    #[inline]
    pub(crate) fn new(upstream: P) -> Self {
        Self {
            upstream,
            seen: HashSet::new(),
        }
    }
}

impl<P> Pipeline for Unique<P>
where
    P: Pipeline,
    P::Item: Hash + Eq + Clone,
{
    type Item = P::Item;

    #[inline]
    fn next(&mut self) -> Option<P::Item> {
        while let Some(item) = self.upstream.next() {
            if self.seen.insert(item.clone()) {
                return Some(item);
            }
        }
        None
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        dedup_hint(self.upstream.size_hint())
    }
}

impl<P> fmt::Debug for Unique<P>
where
    P: Pipeline + fmt::Debug,
    P::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unique")
            .field("upstream", &self.upstream)
            .field("seen", &self.seen)
            .finish()
    }
}

/// Like [`Unique`], but deduplicating by an extracted key, so items need not
/// be hashable themselves.
///
/// This `struct` is created by [`Pipeline::unique_by`]. See its
/// documentation for more.
#[derive(Clone)]
pub struct UniqueBy<P, F, K> {
    upstream: P,
    key_of: F,
    seen: HashSet<K>,
}

impl<P, F, K: Hash + Eq> UniqueBy<P, F, K> {
    #[inline]
    pub(crate) fn new(upstream: P, key_of: F) -> Self {
        Self {
            upstream,
            key_of,
            seen: HashSet::new(),
        }
    }
}

impl<P, F, K> Pipeline for UniqueBy<P, F, K>
where
    P: Pipeline,
    F: FnMut(&P::Item) -> K,
    K: Hash + Eq,
{
    type Item = P::Item;

    #[inline]
    fn next(&mut self) -> Option<P::Item> {
        while let Some(item) = self.upstream.next() {
            if self.seen.insert((self.key_of)(&item)) {
                return Some(item);
            }
        }
        None
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        dedup_hint(self.upstream.size_hint())
    }
}

impl<P: fmt::Debug, F, K> fmt::Debug for UniqueBy<P, F, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UniqueBy")
            .field("upstream", &self.upstream)
            .finish_non_exhaustive()
    }
}

/// A non-empty upstream yields at least one distinct item; an empty one
/// yields none.
#[inline]
fn dedup_hint(upstream: SizeHint) -> SizeHint {
    SizeHint::new(upstream.lower.min(1), upstream.upper)
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn keeps_first_occurrences_in_order() {
        let first: Vec<i32> = crate::from(vec![3, 1, 3, 2, 1]).unique().collect();
        assert_eq!(first, [3, 1, 2]);
    }

    #[test]
    fn works_on_an_endless_source() {
        let mut n = 0;
        let distinct: Vec<i32> = crate::from_fn(|| {
            n += 1;
            Some(n % 3)
        })
        .unique()
        .take(3)
        .collect();
        assert_eq!(distinct, [1, 2, 0]);
    }

    #[test]
    fn hint_lower_is_zero_on_possibly_empty_input() {
        let stage = crate::from(vec![5, 5, 5]).unique();
        assert_eq!(stage.size_hint(), SizeHint::new(1, Some(3)));

        let empty = crate::from(Vec::<i32>::new()).unique();
        assert_eq!(empty.size_hint(), SizeHint::exact(0));
    }

    #[test]
    fn unique_by_dedups_on_the_extracted_key() {
        let firsts: Vec<(i32, f32)> = crate::from(vec![(1, 0.5), (1, 1.5), (2, 2.5)])
            .unique_by(|&(id, _)| id)
            .collect();
        assert_eq!(firsts, [(1, 0.5), (2, 2.5)]);
    }
}

#[cfg(test)]
mod proptests {
    use itertools::Itertools;
    use proptest::prelude::*;

    use crate::prelude::*;

    proptest! {
        #[test]
        fn agrees_with_itertools_unique(nums: Vec<u8>) {
            let ours: Vec<u8> = crate::from(nums.clone()).unique().collect();
            let itertools_way: Vec<u8> = nums.into_iter().unique().collect();
            prop_assert_eq!(ours, itertools_way);
        }
    }
}
