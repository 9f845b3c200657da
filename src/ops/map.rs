use std::fmt;

use crate::{DoubleEndedPipeline, ExactSizePipeline, Pipeline, SizeHint};

/// A pipeline stage that transforms every item with a closure.
///
/// This `struct` is created by [`Pipeline::map`]. See its documentation for
/// more.
#[derive(Clone)]
pub struct Map<P, F> {
    upstream: P,
    f: F,
}

impl<P, F> Map<P, F> {
    #[inline]
    pub(crate) fn new(upstream: P, f: F) -> Self {
        Self { upstream, f }
    }
}

impl<P, U, F> Pipeline for Map<P, F>
where
    P: Pipeline,
    F: FnMut(P::Item) -> U,
{
    type Item = U;

    #[inline]
    fn next(&mut self) -> Option<U> {
        self.upstream.next().map(&mut self.f)
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        self.upstream.size_hint()
    }

    // Skipped items never see the closure.
    #[inline]
    fn advance_by(&mut self, n: usize) -> usize {
        self.upstream.advance_by(n)
    }
}

impl<P, U, F> DoubleEndedPipeline for Map<P, F>
where
    P: DoubleEndedPipeline,
    F: FnMut(P::Item) -> U,
{
    #[inline]
    fn next_back(&mut self) -> Option<U> {
        self.upstream.next_back().map(&mut self.f)
    }

    #[inline]
    fn advance_back_by(&mut self, n: usize) -> usize {
        self.upstream.advance_back_by(n)
    }
}

impl<P, U, F> ExactSizePipeline for Map<P, F>
where
    P: ExactSizePipeline,
    F: FnMut(P::Item) -> U,
{
    #[inline]
    fn len(&self) -> usize {
        self.upstream.len()
    }
}

impl<P: fmt::Debug, F> fmt::Debug for Map<P, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map").field("upstream", &self.upstream).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn maps_lazily() {
        let mut applied = 0;
        let mut doubled = crate::from(vec![1, 2, 3]).map(|n| {
            applied += 1;
            n * 2
        });

        assert_eq!(doubled.next(), Some(2));
        drop(doubled);
        assert_eq!(applied, 1, "only pulled items run the closure");
    }

    #[test]
    fn keeps_exactness_through_both_ends() {
        let mut stage = crate::from(vec![1, 2, 3]).map(|n| n * 10);
        assert_eq!(stage.len(), 3);
        assert_eq!(stage.next_back(), Some(30));
        assert_eq!(stage.len(), 2);
        assert_eq!(stage.size_hint(), SizeHint::exact(2));
    }
}
