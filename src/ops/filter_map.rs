use std::fmt;

use crate::{DoubleEndedPipeline, Pipeline, SizeHint};

/// A pipeline stage that maps and filters in one pass.
///
/// This `struct` is created by [`Pipeline::filter_map`]. See its
/// documentation for more.
#[derive(Clone)]
pub struct FilterMap<P, F> {
    upstream: P,
    f: F,
}

impl<P, F> FilterMap<P, F> {
    #[inline]
    pub(crate) fn new(upstream: P, f: F) -> Self {
        Self { upstream, f }
    }
}

impl<P, U, F> Pipeline for FilterMap<P, F>
where
    P: Pipeline,
    F: FnMut(P::Item) -> Option<U>,
{
    type Item = U;

    #[inline]
    fn next(&mut self) -> Option<U> {
        while let Some(item) = self.upstream.next() {
            if let Some(mapped) = (self.f)(item) {
                return Some(mapped);
            }
        }
        None
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        SizeHint::new(0, self.upstream.size_hint().upper)
    }
}

impl<P, U, F> DoubleEndedPipeline for FilterMap<P, F>
where
    P: DoubleEndedPipeline,
    F: FnMut(P::Item) -> Option<U>,
{
    #[inline]
    fn next_back(&mut self) -> Option<U> {
        while let Some(item) = self.upstream.next_back() {
            if let Some(mapped) = (self.f)(item) {
                return Some(mapped);
            }
        }
        None
    }
}

impl<P: fmt::Debug, F> fmt::Debug for FilterMap<P, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterMap")
            .field("upstream", &self.upstream)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn drops_nones_keeps_somes() {
        let parsed: Vec<u32> = crate::from(vec!["1", "oops", "3"])
            .filter_map(|s| s.parse().ok())
            .collect();
        assert_eq!(parsed, [1, 3]);
    }

    #[test]
    fn hint_matches_filter_shape() {
        let stage = crate::from(vec![1, 2, 3]).filter_map(|n| (n > 1).then_some(n));
        assert_eq!(stage.size_hint(), SizeHint::new(0, Some(3)));
    }
}
