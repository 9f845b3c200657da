use crate::{ExactSizePipeline, Pipeline, SizeHint};

/// A pipeline stage that yields at most the first `n` items.
///
/// This `struct` is created by [`Pipeline::take`]. See its documentation for
/// more.
#[derive(Debug, Clone)]
pub struct Take<P> {
    upstream: P,
    remaining: usize,
}

impl<P> Take<P> {
    #[inline]
    pub(crate) fn new(upstream: P, n: usize) -> Self {
        Self {
            upstream,
            remaining: n,
        }
    }
}

impl<P: Pipeline> Pipeline for Take<P> {
    type Item = P::Item;

    #[inline]
    fn next(&mut self) -> Option<P::Item> {
        if self.remaining == 0 {
            return None;
        }
        let item = self.upstream.next();
        if item.is_some() {
            self.remaining -= 1;
        }
        item
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        self.upstream
            .size_hint()
            .min(SizeHint::exact(self.remaining))
    }

    #[inline]
    fn advance_by(&mut self, n: usize) -> usize {
        let skipped = self.upstream.advance_by(n.min(self.remaining));
        self.remaining -= skipped;
        skipped
    }
}

/// Truncation keeps exactness: the cap and the upstream length are both
/// known.
impl<P: ExactSizePipeline> ExactSizePipeline for Take<P> {
    #[inline]
    fn len(&self) -> usize {
        self.upstream.len().min(self.remaining)
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn caps_an_endless_source() {
        let capped: Vec<i32> = crate::repeat(1).take(3).collect();
        assert_eq!(capped, [1, 1, 1]);
    }

    #[test]
    fn hint_is_min_of_cap_and_upstream() {
        let short = crate::from(vec![1, 2]).take(5);
        assert_eq!(short.size_hint(), SizeHint::exact(2));

        let capped = crate::from(vec![1, 2, 3, 4]).take(2);
        assert_eq!(capped.size_hint(), SizeHint::exact(2));
    }

    #[test]
    fn take_then_skip_composes() {
        let mid: Vec<i32> = crate::range(0, 9, 1).skip(2).take(3).collect();
        assert_eq!(mid, [2, 3, 4]);
    }
}
