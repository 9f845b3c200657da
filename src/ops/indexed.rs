use crate::{ExactSizePipeline, Pipeline, SizeHint};

/// A pipeline stage pairing every item with its position.
///
/// This `struct` is created by [`Pipeline::indexed`]. See its documentation
/// for more.
#[derive(Debug, Clone)]
pub struct Indexed<P> {
    upstream: P,
    next_index: usize,
}

impl<P> Indexed<P> {
    #[inline]
    pub(crate) fn new(upstream: P) -> Self {
        Self {
            upstream,
            next_index: 0,
        }
    }
}

impl<P: Pipeline> Pipeline for Indexed<P> {
    type Item = (usize, P::Item);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.upstream.next()?;
        let index = self.next_index;
        self.next_index += 1;
        Some((index, item))
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        self.upstream.size_hint()
    }

    #[inline]
    fn advance_by(&mut self, n: usize) -> usize {
        let skipped = self.upstream.advance_by(n);
        self.next_index += skipped;
        skipped
    }
}

impl<P: ExactSizePipeline> ExactSizePipeline for Indexed<P> {
    #[inline]
    fn len(&self) -> usize {
        self.upstream.len()
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn counts_yielded_items_not_upstream_ones() {
        let indexed: Vec<(usize, i32)> = crate::from(vec![10, 15, 20])
            .filter(|&n| n % 10 == 0)
            .indexed()
            .collect();
        assert_eq!(indexed, [(0, 10), (1, 20)]);
    }

    #[test]
    fn skipping_advances_the_index() {
        let mut stage = crate::from(vec![7, 8, 9]).indexed();
        stage.advance_by(2);
        assert_eq!(stage.next(), Some((2, 9)));
    }
}
