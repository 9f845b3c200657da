use std::fmt;

use crate::{DoubleEndedPipeline, Pipeline, SizeHint};

/// A pipeline stage that drops items failing a predicate.
///
/// This `struct` is created by [`Pipeline::filter`]. See its documentation
/// for more.
#[derive(Clone)]
pub struct Filter<P, F> {
    upstream: P,
    predicate: F,
}

impl<P, F> Filter<P, F> {
    #[inline]
    pub(crate) fn new(upstream: P, predicate: F) -> Self {
        Self {
            upstream,
            predicate,
        }
    }
}

impl<P, F> Pipeline for Filter<P, F>
where
    P: Pipeline,
    F: FnMut(&P::Item) -> bool,
{
    type Item = P::Item;

    #[inline]
    fn next(&mut self) -> Option<P::Item> {
        while let Some(item) = self.upstream.next() {
            if (self.predicate)(&item) {
                return Some(item);
            }
        }
        None
    }

    // Anywhere between none and all of the upstream items may survive.
    #[inline]
    fn size_hint(&self) -> SizeHint {
        SizeHint::new(0, self.upstream.size_hint().upper)
    }
}

impl<P, F> DoubleEndedPipeline for Filter<P, F>
where
    P: DoubleEndedPipeline,
    F: FnMut(&P::Item) -> bool,
{
    #[inline]
    fn next_back(&mut self) -> Option<P::Item> {
        while let Some(item) = self.upstream.next_back() {
            if (self.predicate)(&item) {
                return Some(item);
            }
        }
        None
    }
}

impl<P: fmt::Debug, F> fmt::Debug for Filter<P, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter")
            .field("upstream", &self.upstream)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn hint_loosens_lower_only() {
        let stage = crate::from(vec![1, 2, 3]).filter(|n| n % 2 == 0);
        assert_eq!(stage.size_hint(), SizeHint::new(0, Some(3)));
    }

    #[test]
    fn filters_from_the_back() {
        let mut odd = crate::from(vec![1, 2, 3, 4, 5]).filter(|n| n % 2 == 1).rev();
        assert_eq!(odd.next(), Some(5));
        assert_eq!(odd.next(), Some(3));
        assert_eq!(odd.next(), Some(1));
        assert_eq!(odd.next(), None);
    }
}

#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use crate::prelude::*;

    proptest! {
        #[test]
        fn agrees_with_std_filter(nums: Vec<i16>) {
            let ours: Vec<i16> = crate::from(nums.clone()).filter(|n| n % 3 == 0).collect();
            let std_way: Vec<i16> = nums.into_iter().filter(|n| n % 3 == 0).collect();
            prop_assert_eq!(ours, std_way);
        }
    }
}
