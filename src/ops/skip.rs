use crate::{ExactSizePipeline, Pipeline, SizeHint};

/// A pipeline stage that drops the first `n` items.
///
/// This `struct` is created by [`Pipeline::skip`]. See its documentation for
/// more.
#[derive(Debug, Clone)]
pub struct Skip<P> {
    upstream: P,
    // Still to be skipped; reaches 0 on the first pull.
    remaining_skip: usize,
}

impl<P> Skip<P> {
    #[inline]
    pub(crate) fn new(upstream: P, n: usize) -> Self {
        Self {
            upstream,
            remaining_skip: n,
        }
    }

    fn do_skip(&mut self)
    where
        P: Pipeline,
    {
        if self.remaining_skip > 0 {
            self.upstream.advance_by(self.remaining_skip);
            self.remaining_skip = 0;
        }
    }
}

impl<P: Pipeline> Pipeline for Skip<P> {
    type Item = P::Item;

    #[inline]
    fn next(&mut self) -> Option<P::Item> {
        self.do_skip();
        self.upstream.next()
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        self.upstream.size_hint().sub(self.remaining_skip)
    }

    #[inline]
    fn advance_by(&mut self, n: usize) -> usize {
        self.do_skip();
        self.upstream.advance_by(n)
    }
}

impl<P: ExactSizePipeline> ExactSizePipeline for Skip<P> {
    #[inline]
    fn len(&self) -> usize {
        self.upstream.len().saturating_sub(self.remaining_skip)
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn skips_on_first_pull_only() {
        let mut tail = crate::from(vec![1, 2, 3, 4]).skip(2);
        assert_eq!(tail.size_hint(), SizeHint::exact(2));
        assert_eq!(tail.next(), Some(3));
        assert_eq!(tail.next(), Some(4));
        assert_eq!(tail.next(), None);
    }

    #[test]
    fn overskip_yields_empty() {
        let mut tail = crate::from(vec![1, 2]).skip(5);
        assert_eq!(tail.size_hint(), SizeHint::exact(0));
        assert_eq!(tail.next(), None);
    }
}
