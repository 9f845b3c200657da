use crate::{ExactSizePipeline, Pipeline, SizeHint};

/// A pipeline stage pairing two pipelines item by item.
///
/// Ends at the shorter input; an item pulled from the longer side for a
/// pair that never completes is dropped.
///
/// This `struct` is created by [`Pipeline::zip`]. See its documentation for
/// more.
#[derive(Debug, Clone)]
pub struct Zip<A, B> {
    left: A,
    right: B,
}

impl<A, B> Zip<A, B> {
    #[inline]
    pub(crate) fn new(left: A, right: B) -> Self {
        Self { left, right }
    }
}

impl<A: Pipeline, B: Pipeline> Pipeline for Zip<A, B> {
    type Item = (A::Item, B::Item);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let left = self.left.next()?;
        let right = self.right.next()?;
        Some((left, right))
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        self.left.size_hint().min(self.right.size_hint())
    }

    #[inline]
    fn advance_by(&mut self, n: usize) -> usize {
        let skipped = self.left.advance_by(n);
        self.right.advance_by(skipped).min(skipped)
    }
}

impl<A: ExactSizePipeline, B: ExactSizePipeline> ExactSizePipeline for Zip<A, B> {
    #[inline]
    fn len(&self) -> usize {
        self.left.len().min(self.right.len())
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn ends_at_the_shorter_side() {
        let zipped: Vec<(&str, i32)> = crate::from(vec!["1337", "42"])
            .zip(crate::from(vec![1337, 42, 80]))
            .collect();
        assert_eq!(zipped, [("1337", 1337), ("42", 42)]);
    }

    #[test]
    fn no_partial_pair_is_yielded() {
        let mut zipped = crate::from(vec![1]).zip(crate::from(Vec::<i32>::new()));
        assert_eq!(zipped.next(), None);
    }

    #[test]
    fn hint_is_elementwise_min() {
        let zipped = crate::from(vec![1, 2, 3]).zip(crate::repeat(0));
        assert_eq!(zipped.size_hint(), SizeHint::exact(3));
        assert_eq!(zipped.count(), 3);
    }
}
