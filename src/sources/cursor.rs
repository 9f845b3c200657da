use crate::SizeHint;

/// Resumable iteration state over some backing store.
///
/// A cursor is the state half of a [source](crate::sources): it remembers how
/// far iteration has progressed and yields one item per [`next`](Cursor::next)
/// call. Which payload the items carry — owned values, shared references or
/// mutable references — is fixed by the cursor type at construction and never
/// changes for its lifetime.
///
/// Containers hand out cursors through
/// [`SourceContainer`](crate::SourceContainer); the pipeline side only ever
/// sees a cursor wrapped in [`Src`](crate::Src).
pub trait Cursor {
    /// Type of the items this cursor yields.
    type Item;

    /// Yields the next item, or [`None`] once the cursor is exhausted.
    fn next(&mut self) -> Option<Self::Item>;

    /// Bounds on the number of items left.
    fn size_hint(&self) -> SizeHint;

    /// Advances by up to `n` items, returning how many were actually
    /// skipped.
    ///
    /// Cursors over randomly addressable storage override this with an O(1)
    /// implementation; the default pulls item by item.
    fn advance_by(&mut self, n: usize) -> usize {
        for skipped in 0..n {
            if self.next().is_none() {
                return skipped;
            }
        }
        n
    }
}

/// A [`Cursor`] that can also yield items from the back.
///
/// Front and back pulls may be interleaved arbitrarily; the two ends share the
/// same remaining range and meet in the middle.
pub trait DoubleEndedCursor: Cursor {
    /// Yields the next item from the back, or [`None`] once both ends have
    /// met.
    fn next_back(&mut self) -> Option<Self::Item>;

    /// Advances the back end by up to `n` items, returning how many were
    /// actually skipped.
    fn advance_back_by(&mut self, n: usize) -> usize {
        for skipped in 0..n {
            if self.next_back().is_none() {
                return skipped;
            }
        }
        n
    }
}

/// A [`Cursor`] whose remaining item count is known exactly.
///
/// Implementors guarantee `size_hint().lower == size_hint().upper == len()`
/// at all times, structurally — not just at one point in time.
pub trait ExactSizeCursor: Cursor {
    /// The exact number of items left.
    #[inline]
    fn len(&self) -> usize {
        self.size_hint().lower
    }

    /// Whether the cursor is exhausted.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Adapts a [`std::iter::Iterator`]'s state as cursor state.
///
/// This is how the standard containers satisfy the source contract: their own
/// iterators already are resumable cursor state, so the adapters in
/// [`sources`](crate::sources) wrap them instead of re-deriving index
/// bookkeeping per container.
#[derive(Debug, Clone)]
pub struct IterCursor<I> {
    iter: I,
}

impl<I> IterCursor<I> {
    #[inline]
    pub(crate) fn new(iter: I) -> Self {
        Self { iter }
    }
}

impl<I: Iterator> Cursor for IterCursor<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        let (lower, upper) = self.iter.size_hint();
        SizeHint::new(lower, upper)
    }
}

impl<I: DoubleEndedIterator> DoubleEndedCursor for IterCursor<I> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back()
    }
}

impl<I: ExactSizeIterator> ExactSizeCursor for IterCursor<I> {
    #[inline]
    fn len(&self) -> usize {
        self.iter.len()
    }
}

/// A cursor over a contiguous block of memory, yielding `&'a T`.
///
/// Besides the plain cursor contract, this keeps the remaining range
/// addressable as one slice, which is what enables the zero-copy
/// [`windows`](crate::ContiguousPipeline::windows) fast path and O(1)
/// advancement from either end.
#[derive(Debug, Clone)]
pub struct SliceCursor<'a, T> {
    rest: &'a [T],
}

impl<'a, T> SliceCursor<'a, T> {
    #[inline]
    pub(crate) fn new(slice: &'a [T]) -> Self {
        Self { rest: slice }
    }

    /// The not-yet-yielded items as one contiguous slice.
    #[inline]
    pub fn remaining(&self) -> &'a [T] {
        self.rest
    }
}

impl<'a, T> Cursor for SliceCursor<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (first, rest) = self.rest.split_first()?;
        self.rest = rest;
        Some(first)
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        SizeHint::exact(self.rest.len())
    }

    #[inline]
    fn advance_by(&mut self, n: usize) -> usize {
        let skipped = n.min(self.rest.len());
        self.rest = &self.rest[skipped..];
        skipped
    }
}

impl<'a, T> DoubleEndedCursor for SliceCursor<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let (last, rest) = self.rest.split_last()?;
        self.rest = rest;
        Some(last)
    }

    #[inline]
    fn advance_back_by(&mut self, n: usize) -> usize {
        let skipped = n.min(self.rest.len());
        self.rest = &self.rest[..self.rest.len() - skipped];
        skipped
    }
}

impl<T> ExactSizeCursor for SliceCursor<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.rest.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_cursor_both_ends() {
        let data = [1, 2, 3, 4];
        let mut cursor = SliceCursor::new(&data);

        assert_eq!(cursor.next(), Some(&1));
        assert_eq!(cursor.next_back(), Some(&4));
        assert_eq!(cursor.len(), 2);
        assert_eq!(cursor.remaining(), &[2, 3]);
        assert_eq!(cursor.advance_by(10), 2);
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.next_back(), None);
    }

    #[test]
    fn iter_cursor_reports_std_hint() {
        let cursor = IterCursor::new([1, 2, 3].into_iter());
        assert_eq!(cursor.size_hint(), SizeHint::exact(3));
    }
}
