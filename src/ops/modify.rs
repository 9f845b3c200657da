use std::fmt;

use crate::{DoubleEndedPipeline, ExactSizePipeline, Pipeline, SizeHint};

/// A pipeline stage that edits items in place before passing them on.
///
/// This `struct` is created by [`Pipeline::modify`]. See its documentation
/// for more.
#[derive(Clone)]
pub struct Modify<P, F> {
    upstream: P,
    f: F,
}

impl<P, F> Modify<P, F> {
    #[inline]
    pub(crate) fn new(upstream: P, f: F) -> Self {
        Self { upstream, f }
    }
}

impl<P, F> Pipeline for Modify<P, F>
where
    P: Pipeline,
    F: FnMut(&mut P::Item),
{
    type Item = P::Item;

    #[inline]
    fn next(&mut self) -> Option<P::Item> {
        let mut item = self.upstream.next()?;
        (self.f)(&mut item);
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        self.upstream.size_hint()
    }
}

impl<P, F> DoubleEndedPipeline for Modify<P, F>
where
    P: DoubleEndedPipeline,
    F: FnMut(&mut P::Item),
{
    #[inline]
    fn next_back(&mut self) -> Option<P::Item> {
        let mut item = self.upstream.next_back()?;
        (self.f)(&mut item);
        Some(item)
    }
}

impl<P, F> ExactSizePipeline for Modify<P, F>
where
    P: ExactSizePipeline,
    F: FnMut(&mut P::Item),
{
    #[inline]
    fn len(&self) -> usize {
        self.upstream.len()
    }
}

impl<P: fmt::Debug, F> fmt::Debug for Modify<P, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Modify")
            .field("upstream", &self.upstream)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn edits_write_through_to_the_container() {
        let mut nums = vec![1, 2, 3];
        let doubled: Vec<i32> = crate::from_mut(&mut nums)
            .modify(|n| **n *= 2)
            .map(|n| *n)
            .collect();

        assert_eq!(doubled, [2, 4, 6]);
        assert_eq!(nums, [2, 4, 6]);
    }
}
