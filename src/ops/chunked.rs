use crate::{ExactSizePipeline, Pipeline, SizeHint};

/// A pipeline stage gathering items into [`Vec`]s of a fixed size, with a
/// possibly shorter final chunk.
///
/// This `struct` is created by [`Pipeline::chunked`]. See its documentation
/// for more.
#[derive(Debug, Clone)]
pub struct Chunked<P> {
    upstream: P,
    chunk_size: usize,
}

impl<P> Chunked<P> {
    #[inline]
    pub(crate) fn new(upstream: P, chunk_size: usize) -> Self {
        assert!(chunk_size > 0, "chunked requires a chunk size of at least 1");
        Self {
            upstream,
            chunk_size,
        }
    }
}

impl<P: Pipeline> Pipeline for Chunked<P> {
    type Item = Vec<P::Item>;

    #[inline]
    fn next(&mut self) -> Option<Vec<P::Item>> {
        let mut chunk = Vec::with_capacity(self.chunk_size);
        while chunk.len() < self.chunk_size {
            match self.upstream.next() {
                Some(item) => chunk.push(item),
                None => break,
            }
        }
        if chunk.is_empty() { None } else { Some(chunk) }
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        self.upstream.size_hint().div_ceil(self.chunk_size)
    }
}

/// A short final chunk still counts as one chunk, hence the ceiling
/// division.
impl<P: ExactSizePipeline> ExactSizePipeline for Chunked<P> {
    #[inline]
    fn len(&self) -> usize {
        self.upstream.len().div_ceil(self.chunk_size)
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn final_chunk_may_be_short() {
        let chunks: Vec<Vec<i32>> = crate::from(vec![1, 2, 3, 4, 5]).chunked(3).collect();
        assert_eq!(chunks, [vec![1, 2, 3], vec![4, 5]]);
    }

    #[test]
    fn exact_input_has_no_short_chunk() {
        let chunks: Vec<Vec<i32>> = crate::from(vec![1, 2, 3, 4]).chunked(2).collect();
        assert_eq!(chunks, [vec![1, 2], vec![3, 4]]);
    }

    #[test]
    fn hint_is_ceiling_division() {
        let stage = crate::from(vec![1, 2, 3, 4, 5]).chunked(2);
        assert_eq!(stage.size_hint(), SizeHint::exact(3));
        assert_eq!(stage.len(), 3);
    }
}

#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use crate::prelude::*;

    proptest! {
        #[test]
        fn chunk_then_flatten_is_identity(nums: Vec<u8>, chunk_size in 1_usize..8) {
            let rebuilt: Vec<u8> = crate::from(nums.clone())
                .chunked(chunk_size)
                .flatten()
                .collect();
            prop_assert_eq!(rebuilt, nums);
        }
    }
}
