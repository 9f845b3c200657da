//! Where pipelines begin.
//!
//! A source is a container plus resumable iteration state. The container side
//! of that pairing is the [`SourceContainer`] contract; the state side is a
//! [`Cursor`]. [`from`], [`from_ref`] and [`from_mut`] pick the ownership
//! mode and wrap the resulting cursor in [`Src`], the stage every pipeline
//! starts with.
//!
//! Standalone sources that have no container behind them live in
//! [`generators`]: [`empty`](crate::empty), [`once`](crate::once),
//! [`repeat`](crate::repeat), [`range`](crate::range) and friends.

mod containers;
mod cursor;
pub mod generators;

pub use containers::{SourceContainer, SourceContainerMut};
pub use cursor::{Cursor, DoubleEndedCursor, ExactSizeCursor, IterCursor, SliceCursor};

use crate::{DoubleEndedPipeline, ExactSizePipeline, Pipeline, SizeHint};

/// Starts a pipeline that consumes `container` and yields its items by
/// value.
///
/// # Examples
///
/// ```
/// use pullstream::prelude::*;
///
/// let names = vec![String::from("ada"), String::from("grace")];
/// let upper: Vec<String> = pullstream::from(names)
///     .map(|name| name.to_uppercase())
///     .collect();
///
/// assert_eq!(upper, ["ADA", "GRACE"]);
/// ```
#[inline]
pub fn from<C: SourceContainer>(container: C) -> Src<C::MoveCursor> {
    Src::new(container.move_cursor())
}

/// Starts a pipeline over `container` that yields reference items and
/// leaves the container untouched.
///
/// # Examples
///
/// ```
/// use pullstream::prelude::*;
///
/// let nums = vec![1, 2, 3];
/// let doubled: Vec<i32> = pullstream::from_ref(&nums).map(|n| n * 2).collect();
///
/// assert_eq!(doubled, [2, 4, 6]);
/// assert_eq!(nums, [1, 2, 3]); // still here
/// ```
#[inline]
pub fn from_ref<C: SourceContainer>(container: &C) -> Src<C::RefCursor<'_>> {
    Src::new(container.ref_cursor())
}

/// Starts a pipeline over `container` that yields mutable-reference items,
/// for editing elements in place.
///
/// # Examples
///
/// ```
/// use pullstream::prelude::*;
///
/// let mut nums = vec![1, 2, 3];
/// pullstream::from_mut(&mut nums).for_each(|n| *n *= 10);
///
/// assert_eq!(nums, [10, 20, 30]);
/// ```
#[inline]
pub fn from_mut<C: SourceContainerMut>(container: &mut C) -> Src<C::MutCursor<'_>> {
    Src::new(container.mut_cursor())
}

/// The stage at the head of a pipeline, wrapping a [`Cursor`].
///
/// Created by [`from`], [`from_ref`] and [`from_mut`]. Its capabilities
/// mirror the cursor's: it is double-ended and/or exact-sized exactly when
/// the cursor is.
#[derive(Debug, Clone)]
pub struct Src<Cur> {
    cursor: Cur,
}

impl<Cur> Src<Cur> {
    #[inline]
    pub(crate) fn new(cursor: Cur) -> Self {
        Self { cursor }
    }

    #[inline]
    pub(crate) fn cursor(&self) -> &Cur {
        &self.cursor
    }
}

impl<Cur: Cursor> Pipeline for Src<Cur> {
    type Item = Cur::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.next()
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        self.cursor.size_hint()
    }

    #[inline]
    fn advance_by(&mut self, n: usize) -> usize {
        self.cursor.advance_by(n)
    }
}

impl<Cur: DoubleEndedCursor> DoubleEndedPipeline for Src<Cur> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.cursor.next_back()
    }
}

impl<Cur: ExactSizeCursor> ExactSizePipeline for Src<Cur> {
    #[inline]
    fn len(&self) -> usize {
        self.cursor.len()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::prelude::*;

    #[test]
    fn three_ownership_modes() {
        let mut words = vec![String::from("pull"), String::from("stream")];

        let lens: Vec<usize> = crate::from_ref(&words).map(|w| w.len()).collect();
        assert_eq!(lens, [4, 6]);

        crate::from_mut(&mut words).for_each(|w| w.push('!'));
        assert_eq!(words, ["pull!", "stream!"]);

        let owned: Vec<String> = crate::from(words).collect();
        assert_eq!(owned, ["pull!", "stream!"]);
    }

    #[test]
    fn shared_slice_is_a_source() {
        let nums = [1, 2, 3];
        let total: i32 = crate::from(&nums[..]).copied().sum();
        assert_eq!(total, 6);
    }

    #[test]
    fn maps_yield_pairs() {
        let mut ages = HashMap::new();
        ages.insert("ada", 36);
        ages.insert("grace", 85);

        let mut names: Vec<&str> = crate::from_ref(&ages).map(|(name, _)| *name).collect();
        names.sort_unstable();
        assert_eq!(names, ["ada", "grace"]);

        crate::from_mut(&mut ages).for_each(|(_, age)| *age += 1);
        assert_eq!(ages["ada"], 37);
    }

    #[test]
    fn src_capabilities_follow_the_cursor() {
        let nums = vec![1, 2, 3, 4];
        let mut pipeline = crate::from_ref(&nums);

        assert_eq!(pipeline.len(), 4);
        assert_eq!(pipeline.next_back(), Some(&4));
        assert_eq!(pipeline.advance_by(2), 2);
        assert_eq!(pipeline.len(), 1);
        assert_eq!(pipeline.next(), Some(&3));
        assert_eq!(pipeline.next(), None);
    }
}
