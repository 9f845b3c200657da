use std::cmp::Ordering;
use std::fmt;

use crate::sources::{IterCursor, Src};
use crate::{DoubleEndedPipeline, ExactSizePipeline, Pipeline, SizeHint};

/// The direction comparison-less sorts and key sorts order by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
}

impl SortOrder {
    #[inline]
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

// The sorted buffer re-enters the pipeline world as a plain vec source, so
// all the post-sort behavior (hints, both ends, O(1) advance) is the vec
// source's.
type Buffered<T> = Src<IterCursor<std::vec::IntoIter<T>>>;

/// Drains `upstream` into a vec, sorts it with `sort`, and wraps it back up
/// as a pipeline source.
fn drain_sorted<P, F>(upstream: &mut P, sort: F) -> Buffered<P::Item>
where
    P: Pipeline,
    F: FnOnce(&mut Vec<P::Item>),
{
    let mut items = Vec::with_capacity(upstream.size_hint().expected_size());
    while let Some(item) = upstream.next() {
        items.push(item);
    }
    sort(&mut items);
    crate::from(items)
}

/// A pipeline stage yielding its upstream's items in sorted order.
///
/// Buffering: the whole upstream is drained on the first pull.
///
/// This `struct` is created by [`Pipeline::sort`] and
/// [`Pipeline::sort_unstable`]. See their documentation for more.
pub struct Sort<P: Pipeline> {
    upstream: P,
    order: SortOrder,
    stable: bool,
    sorted: Option<Buffered<P::Item>>,
}

impl<P> fmt::Debug for Sort<P>
where
    P: Pipeline + fmt::Debug,
    P::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sort")
            .field("upstream", &self.upstream)
            .field("order", &self.order)
            .field("stable", &self.stable)
            .field("sorted", &self.sorted)
            .finish()
    }
}

impl<P: Pipeline> Sort<P> {
    #[inline]
    pub(crate) fn new(upstream: P, order: SortOrder, stable: bool) -> Self {
        Self {
            upstream,
            order,
            stable,
            sorted: None,
        }
    }
}

impl<P> Sort<P>
where
    P: Pipeline,
    P::Item: Ord,
{
    fn sorted(&mut self) -> &mut Buffered<P::Item> {
        let (order, stable) = (self.order, self.stable);
        self.sorted.get_or_insert_with(|| {
            drain_sorted(&mut self.upstream, |items| {
                if stable {
                    items.sort_by(|a, b| order.apply(a.cmp(b)));
                } else {
                    items.sort_unstable_by(|a, b| order.apply(a.cmp(b)));
                }
            })
        })
    }
}

impl<P> Pipeline for Sort<P>
where
    P: Pipeline,
    P::Item: Ord,
{
    type Item = P::Item;

    #[inline]
    fn next(&mut self) -> Option<P::Item> {
        self.sorted().next()
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        match &self.sorted {
            Some(sorted) => sorted.size_hint(),
            // Sorting neither adds nor drops items.
            None => self.upstream.size_hint(),
        }
    }
}

/// Reading a sorted pipeline backwards is free: the back of the buffer is
/// the other end of the ordering.
impl<P> DoubleEndedPipeline for Sort<P>
where
    P: Pipeline,
    P::Item: Ord,
{
    #[inline]
    fn next_back(&mut self) -> Option<P::Item> {
        self.sorted().next_back()
    }
}

impl<P> ExactSizePipeline for Sort<P>
where
    P: ExactSizePipeline,
    P::Item: Ord,
{
    #[inline]
    fn len(&self) -> usize {
        match &self.sorted {
            Some(sorted) => sorted.len(),
            None => self.upstream.len(),
        }
    }
}

/// A pipeline stage sorting by a caller-supplied comparison.
///
/// This `struct` is created by [`Pipeline::sort_by`] and
/// [`Pipeline::sort_unstable_by`]. See their documentation for more.
pub struct SortBy<P: Pipeline, F> {
    upstream: P,
    cmp: F,
    stable: bool,
    sorted: Option<Buffered<P::Item>>,
}

impl<P: Pipeline, F> SortBy<P, F> {
    #[inline]
    pub(crate) fn new(upstream: P, cmp: F, stable: bool) -> Self {
        Self {
            upstream,
            cmp,
            stable,
            sorted: None,
        }
    }
}

impl<P, F> SortBy<P, F>
where
    P: Pipeline,
    F: FnMut(&P::Item, &P::Item) -> Ordering,
{
    fn sorted(&mut self) -> &mut Buffered<P::Item> {
        let (cmp, stable) = (&mut self.cmp, self.stable);
        self.sorted.get_or_insert_with(|| {
            drain_sorted(&mut self.upstream, |items| {
                if stable {
                    items.sort_by(|a, b| cmp(a, b));
                } else {
                    items.sort_unstable_by(|a, b| cmp(a, b));
                }
            })
        })
    }
}

impl<P, F> Pipeline for SortBy<P, F>
where
    P: Pipeline,
    F: FnMut(&P::Item, &P::Item) -> Ordering,
{
    type Item = P::Item;

    #[inline]
    fn next(&mut self) -> Option<P::Item> {
        self.sorted().next()
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        match &self.sorted {
            Some(sorted) => sorted.size_hint(),
            None => self.upstream.size_hint(),
        }
    }
}

impl<P, F> DoubleEndedPipeline for SortBy<P, F>
where
    P: Pipeline,
    F: FnMut(&P::Item, &P::Item) -> Ordering,
{
    #[inline]
    fn next_back(&mut self) -> Option<P::Item> {
        self.sorted().next_back()
    }
}

impl<P, F> ExactSizePipeline for SortBy<P, F>
where
    P: ExactSizePipeline,
    F: FnMut(&P::Item, &P::Item) -> Ordering,
{
    #[inline]
    fn len(&self) -> usize {
        match &self.sorted {
            Some(sorted) => sorted.len(),
            None => self.upstream.len(),
        }
    }
}

impl<P, F> fmt::Debug for SortBy<P, F>
where
    P: Pipeline + fmt::Debug,
    P::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortBy")
            .field("upstream", &self.upstream)
            .field("stable", &self.stable)
            .field("sorted", &self.sorted)
            .finish_non_exhaustive()
    }
}

/// A pipeline stage sorting by an extracted key, stably.
///
/// This `struct` is created by [`Pipeline::sort_by_key`]. See its
/// documentation for more.
pub struct SortByKey<P: Pipeline, F> {
    upstream: P,
    key_of: F,
    order: SortOrder,
    sorted: Option<Buffered<P::Item>>,
}

impl<P: Pipeline, F> SortByKey<P, F> {
    #[inline]
    pub(crate) fn new(upstream: P, key_of: F, order: SortOrder) -> Self {
        Self {
            upstream,
            key_of,
            order,
            sorted: None,
        }
    }
}

impl<P, F, K> SortByKey<P, F>
where
    P: Pipeline,
    F: FnMut(&P::Item) -> K,
    K: Ord,
{
    fn sorted(&mut self) -> &mut Buffered<P::Item> {
        let (key_of, order) = (&mut self.key_of, self.order);
        self.sorted.get_or_insert_with(|| {
            drain_sorted(&mut self.upstream, |items| {
                items.sort_by(|a, b| order.apply(key_of(a).cmp(&key_of(b))));
            })
        })
    }
}

impl<P, F, K> Pipeline for SortByKey<P, F>
where
    P: Pipeline,
    F: FnMut(&P::Item) -> K,
    K: Ord,
{
    type Item = P::Item;

    #[inline]
    fn next(&mut self) -> Option<P::Item> {
        self.sorted().next()
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        match &self.sorted {
            Some(sorted) => sorted.size_hint(),
            None => self.upstream.size_hint(),
        }
    }
}

impl<P, F, K> DoubleEndedPipeline for SortByKey<P, F>
where
    P: Pipeline,
    F: FnMut(&P::Item) -> K,
    K: Ord,
{
    #[inline]
    fn next_back(&mut self) -> Option<P::Item> {
        self.sorted().next_back()
    }
}

impl<P, F, K> ExactSizePipeline for SortByKey<P, F>
where
    P: ExactSizePipeline,
    F: FnMut(&P::Item) -> K,
    K: Ord,
{
    #[inline]
    fn len(&self) -> usize {
        match &self.sorted {
            Some(sorted) => sorted.len(),
            None => self.upstream.len(),
        }
    }
}

impl<P, F> fmt::Debug for SortByKey<P, F>
where
    P: Pipeline + fmt::Debug,
    P::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortByKey")
            .field("upstream", &self.upstream)
            .field("order", &self.order)
            .field("sorted", &self.sorted)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use crate::SortOrder;

    #[test]
    fn sorts_both_directions() {
        let asc: Vec<i32> = crate::from(vec![3, 1, 2]).sort(SortOrder::Ascending).collect();
        assert_eq!(asc, [1, 2, 3]);

        let desc: Vec<i32> = crate::from(vec![3, 1, 2]).sort(SortOrder::Descending).collect();
        assert_eq!(desc, [3, 2, 1]);
    }

    #[test]
    fn stays_lazy_until_first_pull() {
        let mut pulled = false;
        let mut sorted = crate::from_fn(|| {
            pulled = true;
            None::<i32>
        })
        .sort(SortOrder::Ascending);

        assert_eq!(sorted.size_hint(), SizeHint::unknown());
        assert_eq!(sorted.next(), None);
        drop(sorted);
        assert!(pulled);
    }

    #[test]
    fn floats_sort_through_sort_by() {
        let asc: Vec<f32> = crate::from(vec![2.5_f32, 0.5, 1.5])
            .sort_by(|a, b| a.total_cmp(b))
            .collect();
        assert_eq!(asc, [0.5, 1.5, 2.5]);

        let desc: Vec<f32> = crate::from(vec![2.5_f32, 0.5, 1.5])
            .sort_by(|a, b| b.total_cmp(a))
            .collect();
        assert_eq!(desc, [2.5, 1.5, 0.5]);
    }

    #[test]
    fn stable_sort_keeps_equal_items_in_input_order() {
        let pairs = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
        let sorted: Vec<(i32, char)> = crate::from(pairs)
            .sort_by_key(|&(n, _)| n, SortOrder::Ascending)
            .collect();
        assert_eq!(sorted, [(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }

    #[test]
    fn sorted_output_reads_from_both_ends() {
        let mut sorted = crate::from(vec![2, 3, 1]).sort(SortOrder::Ascending);
        assert_eq!(sorted.next(), Some(1));
        assert_eq!(sorted.next_back(), Some(3));
        assert_eq!(sorted.size_hint(), SizeHint::exact(1));
        assert_eq!(sorted.next(), Some(2));
        assert_eq!(sorted.next(), None);
    }
}

#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use crate::prelude::*;
    use crate::SortOrder;

    proptest! {
        #[test]
        fn agrees_with_std_sort(nums: Vec<i32>) {
            let ours: Vec<i32> = crate::from(nums.clone()).sort(SortOrder::Ascending).collect();
            let mut std_way = nums;
            std_way.sort();
            prop_assert_eq!(ours, std_way);
        }
    }
}
