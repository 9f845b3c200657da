use std::fmt;

use crate::{Pipeline, SizeHint};

/// A pipeline stage that drops the leading run of items matching a
/// predicate.
///
/// This `struct` is created by [`Pipeline::skip_while`]. See its
/// documentation for more.
#[derive(Clone)]
pub struct SkipWhile<P, F> {
    upstream: P,
    predicate: F,
    done_skipping: bool,
}

impl<P, F> SkipWhile<P, F> {
    #[inline]
    pub(crate) fn new(upstream: P, predicate: F) -> Self {
        Self {
            upstream,
            predicate,
            done_skipping: false,
        }
    }
}

impl<P, F> Pipeline for SkipWhile<P, F>
where
    P: Pipeline,
    F: FnMut(&P::Item) -> bool,
{
    type Item = P::Item;

    #[inline]
    fn next(&mut self) -> Option<P::Item> {
        if self.done_skipping {
            return self.upstream.next();
        }
        while let Some(item) = self.upstream.next() {
            if !(self.predicate)(&item) {
                self.done_skipping = true;
                return Some(item);
            }
        }
        None
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        let upstream = self.upstream.size_hint();
        if self.done_skipping {
            upstream
        } else {
            // The whole leading run may still be dropped.
            SizeHint::new(0, upstream.upper)
        }
    }
}

impl<P: fmt::Debug, F> fmt::Debug for SkipWhile<P, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SkipWhile")
            .field("upstream", &self.upstream)
            .field("done_skipping", &self.done_skipping)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn only_the_leading_run_is_dropped() {
        let tail: Vec<i32> = crate::from(vec![1, 1, 4, 1, 5]).skip_while(|&n| n == 1).collect();
        assert_eq!(tail, [4, 1, 5]);
    }

    #[test]
    fn hint_tightens_once_skipping_ends() {
        let mut stage = crate::from(vec![1, 1, 4, 5]).skip_while(|&n| n == 1);
        assert_eq!(stage.size_hint(), SizeHint::new(0, Some(4)));
        assert_eq!(stage.next(), Some(4));
        assert_eq!(stage.size_hint(), SizeHint::exact(1));
    }
}
