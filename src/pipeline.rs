use std::cmp::Ordering;
use std::hash::Hash;

use crate::bridge::PipeIter;
use crate::collect::{CollectTarget, FromPipeline};
use crate::ops::{
    Alternate, Cast, Chain, Chunked, ChunkedExact, Cloned, Copied, Filter, FilterMap, FlagLast,
    FlatMap, Flatten, GroupBy, Indexed, Intersperse, Map, Modify, Rev, Reverse, Skip, SkipWhile,
    Sort, SortBy, SortByKey, SortOrder, StepBy, Take, TakeWhile, Unique, UniqueBy, Zip,
};
use crate::sources::SourceContainer;
use crate::SizeHint;

/// A lazy, resumable stream of items, pulled one at a time.
///
/// This is the engine behind every stage of a pipeline: sources, chained
/// stages and consumers all speak this one protocol. Nothing runs until a
/// consumer pulls; each [`next`](Pipeline::next) call pulls exactly as much
/// from upstream as one output item requires.
///
/// # Implementing
///
/// Implementors provide [`next`](Pipeline::next) and
/// [`size_hint`](Pipeline::size_hint). The hint is deliberately not
/// defaulted: every stage knows something about its length, and a stage that
/// silently reported "unknown" would starve
/// [`collect`](Pipeline::collect)'s pre-allocation downstream. Recompute it
/// from upstream on every call; never cache it.
///
/// After a stage has returned [`None`], further pulls are allowed but the
/// stage may yield more items if its upstream does (like a plain
/// [`Iterator`], exhaustion is not fused by the protocol itself).
///
/// # Examples
///
/// ```
/// use pullstream::prelude::*;
///
/// let input = vec![1, 2, 3, 4, 5];
/// let output: Vec<i32> = pullstream::from(input)
///     .filter(|n| n % 2 == 1)
///     .map(|n| n * n)
///     .collect();
///
/// assert_eq!(output, [1, 9, 25]);
/// ```
pub trait Pipeline {
    /// The type of items this stage yields.
    type Item;

    /// Pulls the next item, or [`None`] when the stage is exhausted.
    fn next(&mut self) -> Option<Self::Item>;

    /// Bounds on the number of items remaining in this stage.
    ///
    /// See [`SizeHint`] for the guarantee the built-in stages uphold.
    fn size_hint(&self) -> SizeHint;

    /// Advances by up to `n` items without handing them out, returning how
    /// many were actually skipped.
    ///
    /// Stages over randomly addressable storage override this to skip in
    /// O(1); the default pulls and drops item by item.
    #[inline]
    fn advance_by(&mut self, n: usize) -> usize {
        for skipped in 0..n {
            if self.next().is_none() {
                return skipped;
            }
        }
        n
    }

    // Chaining stages.

    /// Transforms every item with `f`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// let squares: Vec<i32> = pullstream::from(vec![1, 2, 3]).map(|n| n * n).collect();
    /// assert_eq!(squares, [1, 4, 9]);
    /// ```
    #[inline]
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> U,
    {
        Map::new(self, f)
    }

    /// Keeps only the items for which `predicate` returns `true`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// let odd: Vec<i32> = pullstream::from(vec![1, 2, 3, 4]).filter(|n| n % 2 == 1).collect();
    /// assert_eq!(odd, [1, 3]);
    /// ```
    #[inline]
    fn filter<F>(self, predicate: F) -> Filter<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Transforms and filters in one pass: items mapped to [`None`] are
    /// dropped, items mapped to [`Some`] continue unwrapped.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// let nums: Vec<u32> = pullstream::from(vec!["7", "three", "2"])
    ///     .filter_map(|s| s.parse().ok())
    ///     .collect();
    /// assert_eq!(nums, [7, 2]);
    /// ```
    #[inline]
    fn filter_map<U, F>(self, f: F) -> FilterMap<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Option<U>,
    {
        FilterMap::new(self, f)
    }

    /// Edits every item in place without changing its type.
    ///
    /// Unlike [`map`](Pipeline::map), the closure gets `&mut Self::Item` and
    /// the item then continues downstream. Handy in
    /// [`from_mut`](crate::from_mut) pipelines, where the edit writes
    /// through to the source container.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// let trimmed: Vec<String> = pullstream::from(vec![String::from("  hi  ")])
    ///     .modify(|s| *s = s.trim().to_owned())
    ///     .collect();
    /// assert_eq!(trimmed, ["hi"]);
    /// ```
    #[inline]
    fn modify<F>(self, f: F) -> Modify<Self, F>
    where
        Self: Sized,
        F: FnMut(&mut Self::Item),
    {
        Modify::new(self, f)
    }

    /// Converts every item into `U` via [`Into`].
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// let wide: Vec<f64> = pullstream::from(vec![1.5_f32, 2.5]).cast::<f64>().collect();
    /// assert_eq!(wide, [1.5, 2.5]);
    /// ```
    #[inline]
    fn cast<U>(self) -> Cast<Self, U>
    where
        Self: Sized,
        Self::Item: Into<U>,
    {
        Cast::new(self)
    }

    /// Copies out of a pipeline of references, yielding owned items.
    #[inline]
    fn copied<'a, T>(self) -> Copied<Self>
    where
        Self: Sized + Pipeline<Item = &'a T>,
        T: Copy + 'a,
    {
        Copied::new(self)
    }

    /// Clones out of a pipeline of references, yielding owned items.
    #[inline]
    fn cloned<'a, T>(self) -> Cloned<Self>
    where
        Self: Sized + Pipeline<Item = &'a T>,
        T: Clone + 'a,
    {
        Cloned::new(self)
    }

    /// Maps every item to a container and yields that container's items,
    /// flattened into one stream.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// let chars: Vec<char> = pullstream::from(vec!["ab", "cd"])
    ///     .flat_map(|s| s.chars().collect::<Vec<_>>())
    ///     .collect();
    /// assert_eq!(chars, ['a', 'b', 'c', 'd']);
    /// ```
    #[inline]
    fn flat_map<C, F>(self, f: F) -> FlatMap<Self, F, C>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> C,
        C: SourceContainer,
    {
        FlatMap::new(self, f)
    }

    /// Flattens a pipeline of containers into a pipeline of their items.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// let flat: Vec<i32> = pullstream::from(vec![vec![1, 2], vec![], vec![3]])
    ///     .flatten()
    ///     .collect();
    /// assert_eq!(flat, [1, 2, 3]);
    /// ```
    #[inline]
    fn flatten(self) -> Flatten<Self>
    where
        Self: Sized,
        Self::Item: SourceContainer,
    {
        Flatten::new(self)
    }

    /// Skips the first `n` items.
    ///
    /// The skip happens lazily on the first pull, in O(1) where the upstream
    /// supports random access.
    #[inline]
    fn skip(self, n: usize) -> Skip<Self>
    where
        Self: Sized,
    {
        Skip::new(self, n)
    }

    /// Skips items while `predicate` holds, then yields everything after,
    /// including items the predicate would have matched again.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// let tail: Vec<i32> = pullstream::from(vec![1, 1, 5, 1, 2])
    ///     .skip_while(|&n| n == 1)
    ///     .collect();
    /// assert_eq!(tail, [5, 1, 2]);
    /// ```
    #[inline]
    fn skip_while<F>(self, predicate: F) -> SkipWhile<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> bool,
    {
        SkipWhile::new(self, predicate)
    }

    /// Yields at most the first `n` items.
    ///
    /// The single escape hatch for endless pipelines.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// let head: Vec<i32> = pullstream::repeat(7).take(3).collect();
    /// assert_eq!(head, [7, 7, 7]);
    /// ```
    #[inline]
    fn take(self, n: usize) -> Take<Self>
    where
        Self: Sized,
    {
        Take::new(self, n)
    }

    /// Yields items while `predicate` holds, then ends for good. The first
    /// failing item is consumed from upstream but not yielded.
    #[inline]
    fn take_while<F>(self, predicate: F) -> TakeWhile<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> bool,
    {
        TakeWhile::new(self, predicate)
    }

    /// Yields the first item, then every `step`-th item after it.
    ///
    /// # Panics
    ///
    /// Panics if `step` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// let picked: Vec<i32> = pullstream::range(0, 9, 1).step_by(3).collect();
    /// assert_eq!(picked, [0, 3, 6, 9]);
    /// ```
    #[inline]
    fn step_by(self, step: usize) -> StepBy<Self>
    where
        Self: Sized,
    {
        StepBy::new(self, step)
    }

    /// Pairs every item with its position: `(0, first)`, `(1, second)`, ...
    #[inline]
    fn indexed(self) -> Indexed<Self>
    where
        Self: Sized,
    {
        Indexed::new(self)
    }

    /// Pairs every item with whether it is the last one:
    /// `(item, is_last)`.
    ///
    /// Works by holding one item of lookahead, so upstream runs one pull
    /// ahead of what this stage has yielded.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// let flagged: Vec<(i32, bool)> = pullstream::from(vec![1, 2, 3]).flag_last().collect();
    /// assert_eq!(flagged, [(1, false), (2, false), (3, true)]);
    /// ```
    #[inline]
    fn flag_last(self) -> FlagLast<Self>
    where
        Self: Sized,
    {
        FlagLast::new(self)
    }

    /// Drops items that have already been seen, keeping the first
    /// occurrence of each.
    ///
    /// Streaming: each item is checked against the set of seen items as it
    /// is pulled, so this works on endless pipelines.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// let first_seen: Vec<i32> = pullstream::from(vec![1, 2, 1, 3, 2]).unique().collect();
    /// assert_eq!(first_seen, [1, 2, 3]);
    /// ```
    #[inline]
    fn unique(self) -> Unique<Self>
    where
        Self: Sized,
        Self::Item: Hash + Eq + Clone,
    {
        Unique::new(self)
    }

    /// Like [`unique`](Pipeline::unique), but deduplicates by the key
    /// `f` extracts from each item.
    #[inline]
    fn unique_by<K, F>(self, f: F) -> UniqueBy<Self, F, K>
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> K,
        K: Hash + Eq,
    {
        UniqueBy::new(self, f)
    }

    /// Gathers items into [`Vec`]s of `chunk_size`; the final chunk may be
    /// shorter.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// let chunks: Vec<Vec<i32>> = pullstream::from(vec![1, 2, 3, 4, 5]).chunked(2).collect();
    /// assert_eq!(chunks, [vec![1, 2], vec![3, 4], vec![5]]);
    /// ```
    #[inline]
    fn chunked(self, chunk_size: usize) -> Chunked<Self>
    where
        Self: Sized,
    {
        Chunked::new(self, chunk_size)
    }

    /// Yields fixed arrays of `K` items, starting a new window every `S`
    /// items.
    ///
    /// `S < K` gives overlapping windows, `S == K` adjacent chunks, and
    /// `S > K` drops items between windows. A final incomplete window is
    /// dropped.
    ///
    /// For `&T` items over contiguous storage, prefer the zero-copy
    /// [`windows`](crate::ContiguousPipeline::windows).
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// let pairs: Vec<[i32; 2]> = pullstream::from(vec![1, 2, 3, 4, 5])
    ///     .chunked_exact::<2, 1>()
    ///     .collect();
    /// assert_eq!(pairs, [[1, 2], [2, 3], [3, 4], [4, 5]]);
    /// ```
    #[inline]
    fn chunked_exact<const K: usize, const S: usize>(self) -> ChunkedExact<Self, K, S>
    where
        Self: Sized,
        Self::Item: Clone,
    {
        ChunkedExact::new(self)
    }

    /// Yields all items in sorted order, stably.
    ///
    /// Buffering: the first pull drains the whole upstream, sorts, and
    /// serves from the sorted buffer after that. Must not be used on an
    /// endless pipeline.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    /// use pullstream::SortOrder;
    ///
    /// let sorted: Vec<i32> = pullstream::from(vec![3, 1, 2])
    ///     .sort(SortOrder::Descending)
    ///     .collect();
    /// assert_eq!(sorted, [3, 2, 1]);
    /// ```
    #[inline]
    fn sort(self, order: SortOrder) -> Sort<Self>
    where
        Self: Sized,
        Self::Item: Ord,
    {
        Sort::new(self, order, true)
    }

    /// Like [`sort`](Pipeline::sort), but unstable: equal items may come
    /// out in any relative order, in exchange for a faster sort.
    #[inline]
    fn sort_unstable(self, order: SortOrder) -> Sort<Self>
    where
        Self: Sized,
        Self::Item: Ord,
    {
        Sort::new(self, order, false)
    }

    /// Sorts by a caller-supplied comparison, stably.
    ///
    /// This is the way to order items that are not [`Ord`], such as floats:
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// let sorted: Vec<f32> = pullstream::from(vec![2.5_f32, 0.5, 1.5])
    ///     .sort_by(|a, b| a.total_cmp(b))
    ///     .collect();
    /// assert_eq!(sorted, [0.5, 1.5, 2.5]);
    /// ```
    #[inline]
    fn sort_by<F>(self, cmp: F) -> SortBy<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        SortBy::new(self, cmp, true)
    }

    /// Like [`sort_by`](Pipeline::sort_by), but unstable.
    #[inline]
    fn sort_unstable_by<F>(self, cmp: F) -> SortBy<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        SortBy::new(self, cmp, false)
    }

    /// Sorts by the key `f` extracts from each item, stably.
    #[inline]
    fn sort_by_key<K, F>(self, f: F, order: SortOrder) -> SortByKey<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> K,
        K: Ord,
    {
        SortByKey::new(self, f, order)
    }

    /// Groups items by the key `f` extracts, yielding `(key, group)` pairs
    /// where each group preserves its items' upstream order.
    ///
    /// Buffering: the first pull drains the whole upstream. The order of
    /// the groups themselves is unspecified.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    /// use std::collections::HashMap;
    ///
    /// struct Cake {
    ///     name: &'static str,
    ///     weight: f32,
    /// }
    ///
    /// let cakes = vec![
    ///     Cake { name: "apple pie", weight: 1.3 },
    ///     Cake { name: "sacher", weight: 0.5 },
    ///     Cake { name: "apple pie", weight: 1.8 },
    /// ];
    ///
    /// let by_name: HashMap<&str, Vec<f32>> = pullstream::from(cakes)
    ///     .group_by(|cake| cake.name)
    ///     .map(|(name, group)| (name, pullstream::from(group).map(|c| c.weight).collect()))
    ///     .collect();
    ///
    /// assert_eq!(by_name["apple pie"], [1.3, 1.8]);
    /// assert_eq!(by_name["sacher"], [0.5]);
    /// ```
    #[inline]
    fn group_by<K, F>(self, f: F) -> GroupBy<Self, F, K>
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> K,
        K: Hash + Eq,
    {
        GroupBy::new(self, f)
    }

    /// Yields all items in reverse order, buffering the whole upstream on
    /// the first pull.
    ///
    /// Works on any pipeline. When the pipeline is double-ended, prefer
    /// [`rev`](Pipeline::rev), which reverses without buffering.
    #[inline]
    fn reverse(self) -> Reverse<Self>
    where
        Self: Sized,
    {
        Reverse::new(self)
    }

    /// Reverses a double-ended pipeline by swapping its ends. Zero cost, no
    /// buffering.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// let backwards: Vec<i32> = pullstream::from(vec![1, 2, 3]).rev().collect();
    /// assert_eq!(backwards, [3, 2, 1]);
    /// ```
    #[inline]
    fn rev(self) -> Rev<Self>
    where
        Self: Sized + DoubleEndedPipeline,
    {
        Rev::new(self)
    }

    /// Pairs this pipeline's items with `other`'s, ending when either side
    /// runs out. An item pulled from the longer side for a pair that never
    /// completes is dropped, not yielded.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// let zipped: Vec<(&str, i32)> = pullstream::from(vec!["1337", "42"])
    ///     .zip(pullstream::from(vec![1337, 42, 80]))
    ///     .collect();
    /// assert_eq!(zipped, [("1337", 1337), ("42", 42)]);
    /// ```
    #[inline]
    fn zip<B>(self, other: B) -> Zip<Self, B>
    where
        Self: Sized,
        B: Pipeline,
    {
        Zip::new(self, other)
    }

    /// Yields all of this pipeline's items, then all of `other`'s.
    #[inline]
    fn chain<B>(self, other: B) -> Chain<Self, B>
    where
        Self: Sized,
        B: Pipeline<Item = Self::Item>,
    {
        Chain::new(self, other)
    }

    /// Interleaves this pipeline with `other`, one item from each in turn.
    /// The final round is served up to the first exhausted input, then the
    /// pipeline ends.
    ///
    /// For more than two inputs, see the free function
    /// [`alternate`](crate::alternate).
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// let woven: Vec<i32> = pullstream::from(vec![1, 3, 5])
    ///     .alternate(pullstream::from(vec![2, 4]))
    ///     .collect();
    /// assert_eq!(woven, [1, 2, 3, 4, 5]);
    /// ```
    #[inline]
    fn alternate<B>(self, other: B) -> Alternate<(Self, B)>
    where
        Self: Sized,
        B: Pipeline<Item = Self::Item>,
    {
        crate::alternate((self, other))
    }

    /// Inserts one item from `separators` between every two adjacent items.
    ///
    /// If the separator supply runs dry, the item after the last separator
    /// is still yielded and the pipeline ends there.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// let spaced: Vec<i32> = pullstream::from(vec![1, 2, 3])
    ///     .intersperse(pullstream::repeat(0))
    ///     .collect();
    /// assert_eq!(spaced, [1, 0, 2, 0, 3]);
    /// ```
    #[inline]
    fn intersperse<S>(self, separators: S) -> Intersperse<Self, S>
    where
        Self: Sized,
        S: Pipeline<Item = Self::Item>,
    {
        Intersperse::new(self, separators)
    }

    // Consumers.

    /// Drains the pipeline into a collection.
    ///
    /// Works with any [`CollectTarget`] that is also [`Default`]; see
    /// [`collect`](crate::collect) for the supported targets. Space is
    /// reserved up front from the pipeline's [`size_hint`](Pipeline::size_hint).
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    /// use std::collections::HashSet;
    ///
    /// let set: HashSet<i32> = pullstream::from(vec![1, 2, 2, 3]).collect();
    /// assert_eq!(set.len(), 3);
    /// ```
    #[inline]
    fn collect<C>(self) -> C
    where
        Self: Sized,
        C: FromPipeline<Self::Item>,
    {
        C::from_pipeline(self)
    }

    /// Drains the pipeline into an existing collection, appending to
    /// whatever it already holds, and returns the collection back for
    /// further chaining.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// let mut all = vec![0];
    /// pullstream::from(vec![1, 2]).collect_into(&mut all);
    /// assert_eq!(all, [0, 1, 2]);
    /// ```
    #[inline]
    fn collect_into<C>(mut self, target: &mut C) -> &mut C
    where
        Self: Sized,
        C: CollectTarget<Self::Item>,
    {
        target.reserve(self.size_hint().expected_size());
        while let Some(item) = self.next() {
            target.insert_one(item);
        }
        target
    }

    /// Drains exactly `N` items into a fixed-size array.
    ///
    /// # Panics
    ///
    /// Panics if the pipeline yields fewer than `N` items. Use
    /// [`collect`](Pipeline::collect) into a [`Vec`] when the length is not
    /// known to be sufficient.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// let [a, b]: [i32; 2] = pullstream::range(10, 99, 1).collect_array();
    /// assert_eq!((a, b), (10, 11));
    /// ```
    #[inline]
    fn collect_array<const N: usize>(mut self) -> [Self::Item; N]
    where
        Self: Sized,
    {
        std::array::from_fn(|i| match self.next() {
            Some(item) => item,
            None => panic!("pipeline ended after {i} items while filling an array of {N}"),
        })
    }

    /// Pulls every item and hands it to `f`.
    #[inline]
    fn for_each<F>(mut self, mut f: F)
    where
        Self: Sized,
        F: FnMut(Self::Item),
    {
        while let Some(item) = self.next() {
            f(item);
        }
    }

    /// Folds every item into an accumulator, returning the final value.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// let sentence = pullstream::from(vec!["never", "gonna", "give"])
    ///     .fold(String::new(), |mut acc, word| {
    ///         acc.push_str(word);
    ///         acc.push(' ');
    ///         acc
    ///     });
    /// assert_eq!(sentence, "never gonna give ");
    /// ```
    #[inline]
    fn fold<B, F>(mut self, init: B, mut f: F) -> B
    where
        Self: Sized,
        F: FnMut(B, Self::Item) -> B,
    {
        let mut acc = init;
        while let Some(item) = self.next() {
            acc = f(acc, item);
        }
        acc
    }

    /// Counts the remaining items by draining them.
    #[inline]
    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.fold(0, |n, _| n + 1)
    }

    /// Sums the remaining items.
    #[inline]
    fn sum<S>(self) -> S
    where
        Self: Sized,
        S: std::iter::Sum<Self::Item>,
    {
        self.iter().sum()
    }

    /// The smallest remaining item, or [`None`] on an empty pipeline.
    #[inline]
    fn min(self) -> Option<Self::Item>
    where
        Self: Sized,
        Self::Item: Ord,
    {
        self.iter().min()
    }

    /// The largest remaining item, or [`None`] on an empty pipeline.
    /// Returns the last of several equal maxima.
    #[inline]
    fn max(self) -> Option<Self::Item>
    where
        Self: Sized,
        Self::Item: Ord,
    {
        self.iter().max()
    }

    /// The smallest item under a caller-supplied comparison.
    #[inline]
    fn min_by<F>(self, cmp: F) -> Option<Self::Item>
    where
        Self: Sized,
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        self.iter().min_by(cmp)
    }

    /// The largest item under a caller-supplied comparison.
    #[inline]
    fn max_by<F>(self, cmp: F) -> Option<Self::Item>
    where
        Self: Sized,
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        self.iter().max_by(cmp)
    }

    /// The item with the smallest key under `f`.
    #[inline]
    fn min_by_key<K, F>(self, f: F) -> Option<Self::Item>
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> K,
        K: Ord,
    {
        self.iter().min_by_key(f)
    }

    /// The item with the largest key under `f`.
    #[inline]
    fn max_by_key<K, F>(self, f: F) -> Option<Self::Item>
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> K,
        K: Ord,
    {
        self.iter().max_by_key(f)
    }

    /// The first item matching `predicate`. Short-circuits; the pipeline
    /// stops being pulled at the match.
    #[inline]
    fn find<F>(&mut self, mut predicate: F) -> Option<Self::Item>
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> bool,
    {
        while let Some(item) = self.next() {
            if predicate(&item) {
                return Some(item);
            }
        }
        None
    }

    /// The position of the first item matching `predicate`.
    /// Short-circuits.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// let pos = pullstream::from(vec![10, 20, 30]).position(|&n| n == 20);
    /// assert_eq!(pos, Some(1));
    /// ```
    #[inline]
    fn position<F>(mut self, mut predicate: F) -> Option<usize>
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> bool,
    {
        let mut idx = 0;
        while let Some(item) = self.next() {
            if predicate(&item) {
                return Some(idx);
            }
            idx += 1;
        }
        None
    }

    /// Whether `predicate` holds for every item. Short-circuits on the
    /// first failure; `true` on an empty pipeline.
    #[inline]
    fn all<F>(&mut self, mut predicate: F) -> bool
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> bool,
    {
        while let Some(item) = self.next() {
            if !predicate(&item) {
                return false;
            }
        }
        true
    }

    /// Whether `predicate` holds for any item. Short-circuits on the first
    /// match; `false` on an empty pipeline.
    #[inline]
    fn any<F>(&mut self, mut predicate: F) -> bool
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> bool,
    {
        while let Some(item) = self.next() {
            if predicate(&item) {
                return true;
            }
        }
        false
    }

    /// Drains the pipeline and returns its final item.
    #[inline]
    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        let mut last = None;
        while let Some(item) = self.next() {
            last = Some(item);
        }
        last
    }

    /// Skips `n` items and returns the one after, pulling it out of the
    /// pipeline.
    #[inline]
    fn nth(&mut self, n: usize) -> Option<Self::Item>
    where
        Self: Sized,
    {
        if self.advance_by(n) < n {
            return None;
        }
        self.next()
    }

    /// Bridges into a [`std::iter::Iterator`], for `for` loops and the rest
    /// of the iterator ecosystem.
    ///
    /// A blanket [`IntoIterator`] impl would collide with the standard
    /// library's, so the bridge is an explicit method instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// let mut total = 0;
    /// for n in pullstream::from(vec![1, 2, 3]).iter() {
    ///     total += n;
    /// }
    /// assert_eq!(total, 6);
    /// ```
    #[inline]
    fn iter(self) -> PipeIter<Self>
    where
        Self: Sized,
    {
        PipeIter::new(self)
    }
}

/// A [`Pipeline`] that can also yield items from the back.
///
/// Front and back pulls may be interleaved; both ends consume from the same
/// remaining range and meet in the middle. A stage is double-ended only when
/// reversal is structurally free: stages that reorder, buffer or merge in
/// ways that would force buffering do not implement this. For those, use
/// [`reverse`](Pipeline::reverse) instead of [`rev`](Pipeline::rev).
pub trait DoubleEndedPipeline: Pipeline {
    /// Pulls the next item from the back, or [`None`] once both ends have
    /// met.
    fn next_back(&mut self) -> Option<Self::Item>;

    /// Advances the back end by up to `n` items, returning how many were
    /// actually skipped.
    #[inline]
    fn advance_back_by(&mut self, n: usize) -> usize {
        for skipped in 0..n {
            if self.next_back().is_none() {
                return skipped;
            }
        }
        n
    }
}

/// A [`Pipeline`] whose remaining item count is known exactly, as a
/// structural guarantee.
///
/// Implementors promise `size_hint()` is tight at all times, not just
/// momentarily. Stages that can only drop items ([`filter`](Pipeline::filter)
/// and friends) never implement this even when their current hint happens to
/// be tight.
pub trait ExactSizePipeline: Pipeline {
    /// The exact number of items remaining.
    #[inline]
    fn len(&self) -> usize {
        self.size_hint().lower
    }

    /// Whether the pipeline is exhausted.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn find_leaves_the_rest_in_place() {
        let mut nums = crate::from(vec![1, 2, 3, 4]);
        assert_eq!(nums.find(|&n| n % 2 == 0), Some(2));
        // The match is consumed, everything after it is still there.
        assert_eq!(nums.next(), Some(3));
    }

    #[test]
    fn all_and_any_short_circuit() {
        let mut nums = crate::from(vec![2, 3, 4]);
        assert!(!nums.all(|&n| n % 2 == 0));
        assert_eq!(nums.next(), Some(4));

        let mut nums = crate::from(vec![1, 2, 3]);
        assert!(nums.any(|&n| n == 2));
        assert_eq!(nums.next(), Some(3));

        assert!(crate::empty::<i32>().all(|_| false));
        assert!(!crate::empty::<i32>().any(|_| true));
    }

    #[test]
    fn last_drains_everything() {
        assert_eq!(crate::from(vec![1, 2, 3]).last(), Some(3));
        assert_eq!(crate::empty::<i32>().last(), None);
    }

    #[test]
    fn nth_skips_then_pulls() {
        let mut nums = crate::range(0, 9, 1);
        assert_eq!(nums.nth(3), Some(3));
        assert_eq!(nums.nth(0), Some(4));
        assert_eq!(nums.nth(100), None);
    }

    #[test]
    fn position_counts_from_the_current_front() {
        let mut nums = crate::from(vec![10, 20, 30, 40]);
        nums.next();
        assert_eq!(nums.position(|&n| n == 40), Some(2));
    }
}
