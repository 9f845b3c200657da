use crate::{DoubleEndedPipeline, ExactSizePipeline, Pipeline, SizeHint};

/// A pipeline stage that copies out of `&T` items.
///
/// This `struct` is created by [`Pipeline::copied`]. See its documentation
/// for more.
#[derive(Debug, Clone)]
pub struct Copied<P> {
    upstream: P,
}

impl<P> Copied<P> {
    #[inline]
    pub(crate) fn new(upstream: P) -> Self {
        Self { upstream }
    }
}

impl<'a, T, P> Pipeline for Copied<P>
where
    P: Pipeline<Item = &'a T>,
    T: Copy + 'a,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.upstream.next().copied()
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        self.upstream.size_hint()
    }

    #[inline]
    fn advance_by(&mut self, n: usize) -> usize {
        self.upstream.advance_by(n)
    }
}

impl<'a, T, P> DoubleEndedPipeline for Copied<P>
where
    P: DoubleEndedPipeline<Item = &'a T>,
    T: Copy + 'a,
{
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.upstream.next_back().copied()
    }

    #[inline]
    fn advance_back_by(&mut self, n: usize) -> usize {
        self.upstream.advance_back_by(n)
    }
}

impl<'a, T, P> ExactSizePipeline for Copied<P>
where
    P: ExactSizePipeline<Item = &'a T>,
    T: Copy + 'a,
{
    #[inline]
    fn len(&self) -> usize {
        self.upstream.len()
    }
}

/// A pipeline stage that clones out of `&T` items.
///
/// This `struct` is created by [`Pipeline::cloned`]. See its documentation
/// for more.
#[derive(Debug, Clone)]
pub struct Cloned<P> {
    upstream: P,
}

impl<P> Cloned<P> {
    #[inline]
    pub(crate) fn new(upstream: P) -> Self {
        Self { upstream }
    }
}

impl<'a, T, P> Pipeline for Cloned<P>
where
    P: Pipeline<Item = &'a T>,
    T: Clone + 'a,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.upstream.next().cloned()
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        self.upstream.size_hint()
    }

    // Skipped items are not cloned.
    #[inline]
    fn advance_by(&mut self, n: usize) -> usize {
        self.upstream.advance_by(n)
    }
}

impl<'a, T, P> DoubleEndedPipeline for Cloned<P>
where
    P: DoubleEndedPipeline<Item = &'a T>,
    T: Clone + 'a,
{
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.upstream.next_back().cloned()
    }
}

impl<'a, T, P> ExactSizePipeline for Cloned<P>
where
    P: ExactSizePipeline<Item = &'a T>,
    T: Clone + 'a,
{
    #[inline]
    fn len(&self) -> usize {
        self.upstream.len()
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn copied_detaches_from_the_borrow() {
        let nums = vec![1, 2, 3];
        let owned: Vec<i32> = crate::from_ref(&nums).copied().collect();
        drop(nums);
        assert_eq!(owned, [1, 2, 3]);
    }

    #[test]
    fn cloned_handles_non_copy_items() {
        let words = vec![String::from("a"), String::from("b")];
        let owned: Vec<String> = crate::from_ref(&words).cloned().collect();
        assert_eq!(owned, words);
    }
}
