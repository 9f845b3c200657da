use crate::{ExactSizePipeline, Pipeline, SizeHint};

/// A pipeline stage pairing every item with whether it is the final one.
///
/// Holds one item of lookahead so it can tell the last item apart from the
/// rest.
///
/// This `struct` is created by [`Pipeline::flag_last`]. See its
/// documentation for more.
pub struct FlagLast<P: Pipeline> {
    upstream: P,
    peeked: Option<P::Item>,
    started: bool,
}

impl<P: Pipeline> FlagLast<P> {
    #[inline]
    pub(crate) fn new(upstream: P) -> Self {
        Self {
            upstream,
            peeked: None,
            started: false,
        }
    }
}

impl<P: Pipeline> Pipeline for FlagLast<P> {
    type Item = (P::Item, bool);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let current = if self.started {
            self.peeked.take()?
        } else {
            self.started = true;
            self.upstream.next()?
        };
        self.peeked = self.upstream.next();
        Some((current, self.peeked.is_none()))
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        let mut hint = self.upstream.size_hint();
        if self.peeked.is_some() {
            hint = hint.add(SizeHint::exact(1));
        }
        hint
    }
}

impl<P: ExactSizePipeline> ExactSizePipeline for FlagLast<P> {
    #[inline]
    fn len(&self) -> usize {
        self.upstream.len() + self.peeked.is_some() as usize
    }
}

impl<P> Clone for FlagLast<P>
where
    P: Pipeline + Clone,
    P::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            upstream: self.upstream.clone(),
            peeked: self.peeked.clone(),
            started: self.started,
        }
    }
}

impl<P> std::fmt::Debug for FlagLast<P>
where
    P: Pipeline + std::fmt::Debug,
    P::Item: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlagLast")
            .field("upstream", &self.upstream)
            .field("peeked", &self.peeked)
            .field("started", &self.started)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn only_the_final_item_is_flagged() {
        let flagged: Vec<(char, bool)> = crate::from(vec!['a', 'b', 'c']).flag_last().collect();
        assert_eq!(flagged, [('a', false), ('b', false), ('c', true)]);
    }

    #[test]
    fn single_item_is_last() {
        let flagged: Vec<(i32, bool)> = crate::once(1).flag_last().collect();
        assert_eq!(flagged, [(1, true)]);
    }

    #[test]
    fn lookahead_is_counted_in_the_hint() {
        let mut stage = crate::from(vec![1, 2, 3]).flag_last();
        assert_eq!(stage.size_hint(), SizeHint::exact(3));
        stage.next();
        // One item yielded, one buffered, one still upstream.
        assert_eq!(stage.size_hint(), SizeHint::exact(2));
        assert_eq!(stage.len(), 2);
    }
}
