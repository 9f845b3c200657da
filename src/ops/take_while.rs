use std::fmt;

use crate::{Pipeline, SizeHint};

/// A pipeline stage that yields the leading run of items matching a
/// predicate, then ends for good.
///
/// This `struct` is created by [`Pipeline::take_while`]. See its
/// documentation for more.
#[derive(Clone)]
pub struct TakeWhile<P, F> {
    upstream: P,
    predicate: F,
    done: bool,
}

impl<P, F> TakeWhile<P, F> {
    #[inline]
    pub(crate) fn new(upstream: P, predicate: F) -> Self {
        Self {
            upstream,
            predicate,
            done: false,
        }
    }
}

impl<P, F> Pipeline for TakeWhile<P, F>
where
    P: Pipeline,
    F: FnMut(&P::Item) -> bool,
{
    type Item = P::Item;

    #[inline]
    fn next(&mut self) -> Option<P::Item> {
        if self.done {
            return None;
        }
        match self.upstream.next() {
            Some(item) if (self.predicate)(&item) => Some(item),
            // The failing item is consumed and dropped.
            _ => {
                self.done = true;
                None
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        if self.done {
            SizeHint::exact(0)
        } else {
            SizeHint::new(0, self.upstream.size_hint().upper)
        }
    }
}

impl<P: fmt::Debug, F> fmt::Debug for TakeWhile<P, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TakeWhile")
            .field("upstream", &self.upstream)
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn ends_at_first_failure() {
        let head: Vec<i32> = crate::from(vec![1, 2, 9, 3]).take_while(|&n| n < 5).collect();
        assert_eq!(head, [1, 2]);
    }

    #[test]
    fn stays_ended_even_if_upstream_recovers() {
        let mut stage = crate::from(vec![1, 9, 2]).take_while(|&n| n < 5);
        assert_eq!(stage.next(), Some(1));
        assert_eq!(stage.next(), None);
        assert_eq!(stage.next(), None);
        assert_eq!(stage.size_hint(), SizeHint::exact(0));
    }

    #[test]
    fn can_stop_an_endless_pipeline() {
        let mut n = 0;
        let head: Vec<i32> = crate::from_fn(|| {
            n += 1;
            Some(n)
        })
        .take_while(|&n| n <= 4)
        .collect();
        assert_eq!(head, [1, 2, 3, 4]);
    }
}
