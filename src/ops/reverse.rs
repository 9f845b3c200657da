use std::collections::VecDeque;
use std::fmt;

use crate::{DoubleEndedPipeline, ExactSizePipeline, Pipeline, SizeHint};

/// A pipeline stage reversing a double-ended upstream by swapping its ends.
///
/// No buffering; every front pull is a back pull upstream and vice versa.
///
/// This `struct` is created by [`Pipeline::rev`]. See its documentation for
/// more.
#[derive(Debug, Clone)]
pub struct Rev<P> {
    upstream: P,
}

impl<P> Rev<P> {
    #[inline]
    pub(crate) fn new(upstream: P) -> Self {
        Self { upstream }
    }
}

impl<P: DoubleEndedPipeline> Pipeline for Rev<P> {
    type Item = P::Item;

    #[inline]
    fn next(&mut self) -> Option<P::Item> {
        self.upstream.next_back()
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        self.upstream.size_hint()
    }

    #[inline]
    fn advance_by(&mut self, n: usize) -> usize {
        self.upstream.advance_back_by(n)
    }
}

impl<P: DoubleEndedPipeline> DoubleEndedPipeline for Rev<P> {
    #[inline]
    fn next_back(&mut self) -> Option<P::Item> {
        self.upstream.next()
    }

    #[inline]
    fn advance_back_by(&mut self, n: usize) -> usize {
        self.upstream.advance_by(n)
    }
}

impl<P: DoubleEndedPipeline + ExactSizePipeline> ExactSizePipeline for Rev<P> {
    #[inline]
    fn len(&self) -> usize {
        self.upstream.len()
    }
}

/// A pipeline stage reversing any upstream by buffering it whole.
///
/// The first pull drains the upstream into a buffer and serves it back to
/// front. When the upstream is double-ended, [`Pipeline::rev`] does the same
/// job with no buffer at all.
///
/// This `struct` is created by [`Pipeline::reverse`]. See its documentation
/// for more.
pub struct Reverse<P: Pipeline> {
    upstream: P,
    buffered: Option<VecDeque<P::Item>>,
}

impl<P: Pipeline> Reverse<P> {
    #[inline]
    pub(crate) fn new(upstream: P) -> Self {
        Self {
            upstream,
            buffered: None,
        }
    }

    fn buffered(&mut self) -> &mut VecDeque<P::Item> {
        let upstream = &mut self.upstream;
        self.buffered.get_or_insert_with(|| {
            let mut items = VecDeque::with_capacity(upstream.size_hint().expected_size());
            while let Some(item) = upstream.next() {
                items.push_back(item);
            }
            items
        })
    }
}

impl<P: Pipeline> Pipeline for Reverse<P> {
    type Item = P::Item;

    #[inline]
    fn next(&mut self) -> Option<P::Item> {
        self.buffered().pop_back()
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        match &self.buffered {
            Some(items) => SizeHint::exact(items.len()),
            // Reversal neither adds nor drops items.
            None => self.upstream.size_hint(),
        }
    }

    #[inline]
    fn advance_by(&mut self, n: usize) -> usize {
        let items = self.buffered();
        let skipped = n.min(items.len());
        items.truncate(items.len() - skipped);
        skipped
    }
}

/// The buffer serves both ends; the "back" of the reversed pipeline is the
/// upstream's front.
impl<P: Pipeline> DoubleEndedPipeline for Reverse<P> {
    #[inline]
    fn next_back(&mut self) -> Option<P::Item> {
        self.buffered().pop_front()
    }

    #[inline]
    fn advance_back_by(&mut self, n: usize) -> usize {
        let items = self.buffered();
        let skipped = n.min(items.len());
        items.drain(..skipped);
        skipped
    }
}

impl<P: ExactSizePipeline> ExactSizePipeline for Reverse<P> {
    #[inline]
    fn len(&self) -> usize {
        match &self.buffered {
            Some(items) => items.len(),
            None => self.upstream.len(),
        }
    }
}

impl<P> fmt::Debug for Reverse<P>
where
    P: Pipeline + fmt::Debug,
    P::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reverse")
            .field("upstream", &self.upstream)
            .field("buffered", &self.buffered)
            .finish()
    }
}
