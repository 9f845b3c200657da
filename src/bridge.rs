//! Bridging pipelines into the standard iterator ecosystem.

use crate::{DoubleEndedPipeline, ExactSizePipeline, Pipeline};

/// A [`Pipeline`] wrapped up as a [`std::iter::Iterator`].
///
/// This `struct` is created by [`Pipeline::iter`]. See its documentation
/// for more. Double-endedness and exact size carry over to the iterator
/// side when the pipeline has them.
#[derive(Debug, Clone)]
pub struct PipeIter<P> {
    pipeline: P,
}

impl<P> PipeIter<P> {
    #[inline]
    pub(crate) fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Unwraps back into the underlying pipeline.
    #[inline]
    pub fn into_pipeline(self) -> P {
        self.pipeline
    }
}

impl<P: Pipeline> Iterator for PipeIter<P> {
    type Item = P::Item;

    #[inline]
    fn next(&mut self) -> Option<P::Item> {
        self.pipeline.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        // The infinite-lower sentinel is already usize::MAX, which is what
        // std's endless iterators report.
        let hint = self.pipeline.size_hint();
        (hint.lower, hint.upper)
    }
}

impl<P: DoubleEndedPipeline> DoubleEndedIterator for PipeIter<P> {
    #[inline]
    fn next_back(&mut self) -> Option<P::Item> {
        self.pipeline.next_back()
    }
}

impl<P: ExactSizePipeline> ExactSizeIterator for PipeIter<P> {
    #[inline]
    fn len(&self) -> usize {
        self.pipeline.len()
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn drives_a_for_loop() {
        let mut seen = Vec::new();
        for n in crate::from(vec![1, 2, 3]).map(|n| n * 2).iter() {
            seen.push(n);
        }
        assert_eq!(seen, [2, 4, 6]);
    }

    #[test]
    fn capabilities_carry_over() {
        let mut iter = crate::from(vec![1, 2, 3]).iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next_back(), Some(3));
        assert_eq!(iter.size_hint(), (2, Some(2)));
    }

    #[test]
    fn std_combinators_compose_after_the_bridge() {
        let evens: Vec<i32> = crate::from(vec![1, 2, 3, 4]).iter().filter(|n| n % 2 == 0).collect();
        assert_eq!(evens, [2, 4]);
    }
}
