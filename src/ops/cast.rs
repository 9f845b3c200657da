use std::marker::PhantomData;

use crate::{DoubleEndedPipeline, ExactSizePipeline, Pipeline, SizeHint};

/// A pipeline stage that converts items into another type via [`Into`].
///
/// This `struct` is created by [`Pipeline::cast`]. See its documentation for
/// more.
#[derive(Debug, Clone)]
pub struct Cast<P, U> {
    upstream: P,
    _target: PhantomData<fn() -> U>,
}

impl<P, U> Cast<P, U> {
    #[inline]
    pub(crate) fn new(upstream: P) -> Self {
        Self {
            upstream,
            _target: PhantomData,
        }
    }
}

impl<P, U> Pipeline for Cast<P, U>
where
    P: Pipeline,
    P::Item: Into<U>,
{
    type Item = U;

    #[inline]
    fn next(&mut self) -> Option<U> {
        self.upstream.next().map(Into::into)
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        self.upstream.size_hint()
    }

    #[inline]
    fn advance_by(&mut self, n: usize) -> usize {
        self.upstream.advance_by(n)
    }
}

impl<P, U> DoubleEndedPipeline for Cast<P, U>
where
    P: DoubleEndedPipeline,
    P::Item: Into<U>,
{
    #[inline]
    fn next_back(&mut self) -> Option<U> {
        self.upstream.next_back().map(Into::into)
    }

    #[inline]
    fn advance_back_by(&mut self, n: usize) -> usize {
        self.upstream.advance_back_by(n)
    }
}

impl<P, U> ExactSizePipeline for Cast<P, U>
where
    P: ExactSizePipeline,
    P::Item: Into<U>,
{
    #[inline]
    fn len(&self) -> usize {
        self.upstream.len()
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn widens_numbers() {
        let wide: Vec<i64> = crate::from(vec![1_i32, 2, 3]).cast::<i64>().collect();
        assert_eq!(wide, [1, 2, 3]);
    }

    #[test]
    fn converts_owned_types() {
        let owned: Vec<String> = crate::from(vec!["a", "b"]).cast::<String>().collect();
        assert_eq!(owned, ["a", "b"]);
    }
}
