use std::marker::PhantomData;

use crate::sources::{SliceCursor, Src};
use crate::{DoubleEndedPipeline, ExactSizePipeline, Pipeline, SizeHint};

/// A pipeline whose remaining items sit in one contiguous block of memory.
///
/// Only source stages over slice-backed storage qualify; any chained stage
/// breaks contiguity. The payoff is [`windows`](ContiguousPipeline::windows),
/// which yields borrowed `&[T; K]` views into the storage instead of
/// cloning items out of it.
pub trait ContiguousPipeline<'a>: Pipeline<Item = &'a Self::Elem> {
    /// The element type of the backing storage.
    type Elem: 'a;

    /// The not-yet-yielded items as one contiguous slice.
    fn remaining_slice(&self) -> &'a [Self::Elem];

    /// Yields zero-copy `&[T; K]` windows starting every `S` elements.
    ///
    /// Same windowing rules as
    /// [`chunked_exact`](Pipeline::chunked_exact), but nothing is cloned:
    /// each window is a borrow of the source's own storage.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// let nums = vec![1, 2, 3, 4, 5];
    /// let pairs: Vec<&[i32; 2]> = pullstream::from_ref(&nums).windows::<2, 1>().collect();
    /// assert_eq!(pairs, [&[1, 2], &[2, 3], &[3, 4], &[4, 5]]);
    /// ```
    #[inline]
    fn windows<const K: usize, const S: usize>(self) -> Windows<'a, Self::Elem, K, S>
    where
        Self: Sized,
    {
        Windows::new(self.remaining_slice())
    }
}

impl<'a, T> ContiguousPipeline<'a> for Src<SliceCursor<'a, T>> {
    type Elem = T;

    #[inline]
    fn remaining_slice(&self) -> &'a [T] {
        self.cursor().remaining()
    }
}

/// A pipeline of borrowed fixed-size windows over contiguous storage.
///
/// This `struct` is created by
/// [`ContiguousPipeline::windows`]. See its documentation for more.
#[derive(Debug)]
pub struct Windows<'a, T, const K: usize, const S: usize> {
    slice: &'a [T],
    // Start offset of the next front window.
    front: usize,
    remaining: usize,
    _window: PhantomData<[T; K]>,
}

impl<'a, T, const K: usize, const S: usize> Windows<'a, T, K, S> {
    #[inline]
    pub(crate) fn new(slice: &'a [T]) -> Self {
        const {
            assert!(K > 0, "windows requires a width of at least 1");
            assert!(S > 0, "windows requires a step of at least 1");
        }
        let remaining = if slice.len() < K {
            0
        } else {
            (slice.len() - K) / S + 1
        };
        Self {
            slice,
            front: 0,
            remaining,
            _window: PhantomData,
        }
    }

    #[inline]
    fn window_at(&self, start: usize) -> &'a [T; K] {
        // Bounds are upheld by the `remaining` accounting.
        self.slice[start..start + K]
            .try_into()
            .unwrap_or_else(|_| unreachable!())
    }
}

impl<T, const K: usize, const S: usize> Clone for Windows<'_, T, K, S> {
    fn clone(&self) -> Self {
        Self {
            slice: self.slice,
            front: self.front,
            remaining: self.remaining,
            _window: PhantomData,
        }
    }
}

impl<'a, T, const K: usize, const S: usize> Pipeline for Windows<'a, T, K, S> {
    type Item = &'a [T; K];

    #[inline]
    fn next(&mut self) -> Option<&'a [T; K]> {
        if self.remaining == 0 {
            return None;
        }
        let window = self.window_at(self.front);
        self.front += S;
        self.remaining -= 1;
        Some(window)
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        SizeHint::exact(self.remaining)
    }

    #[inline]
    fn advance_by(&mut self, n: usize) -> usize {
        let skipped = n.min(self.remaining);
        self.front += skipped * S;
        self.remaining -= skipped;
        skipped
    }
}

impl<'a, T, const K: usize, const S: usize> DoubleEndedPipeline for Windows<'a, T, K, S> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a [T; K]> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.window_at(self.front + self.remaining * S))
    }

    #[inline]
    fn advance_back_by(&mut self, n: usize) -> usize {
        let skipped = n.min(self.remaining);
        self.remaining -= skipped;
        skipped
    }
}

impl<T, const K: usize, const S: usize> ExactSizePipeline for Windows<'_, T, K, S> {
    #[inline]
    fn len(&self) -> usize {
        self.remaining
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn windows_borrow_the_source_storage() {
        let nums = vec![10, 20, 30, 40];
        let windows: Vec<&[i32; 2]> = crate::from_ref(&nums).windows::<2, 2>().collect();

        assert_eq!(windows, [&[10, 20], &[30, 40]]);
        // Zero copy: the window points into the vec's own buffer.
        assert!(std::ptr::eq(windows[0].as_ptr(), nums.as_ptr()));
    }

    #[test]
    fn overlapping_and_skipping_layouts() {
        let nums = [1, 2, 3, 4, 5];

        let overlapping: Vec<&[i32; 3]> = crate::from_ref(&nums).windows::<3, 1>().collect();
        assert_eq!(overlapping, [&[1, 2, 3], &[2, 3, 4], &[3, 4, 5]]);

        let skipping: Vec<&[i32; 2]> = crate::from_ref(&nums).windows::<2, 3>().collect();
        assert_eq!(skipping, [&[1, 2], &[4, 5]]);
    }

    #[test]
    fn double_ended_windows_meet_in_the_middle() {
        let nums = [1, 2, 3, 4];
        let mut windows = crate::from_ref(&nums).windows::<2, 1>();

        assert_eq!(windows.len(), 3);
        assert_eq!(windows.next_back(), Some(&[3, 4]));
        assert_eq!(windows.next(), Some(&[1, 2]));
        assert_eq!(windows.next(), Some(&[2, 3]));
        assert_eq!(windows.next(), None);
        assert_eq!(windows.next_back(), None);
    }

    #[test]
    fn too_short_input_has_no_windows() {
        let nums = [1, 2];
        assert_eq!(crate::from_ref(&nums).windows::<3, 1>().count(), 0);
    }
}
