use std::collections::VecDeque;
use std::fmt;

use crate::{ExactSizePipeline, Pipeline, SizeHint};

/// A pipeline stage yielding fixed `[Item; K]` windows that start every `S`
/// upstream items.
///
/// Windows overlap when `S < K`, so a sliding buffer of the last window's
/// items is kept and cloned into each output. An incomplete final window is
/// dropped.
///
/// This `struct` is created by [`Pipeline::chunked_exact`]. See its
/// documentation for more.
pub struct ChunkedExact<P: Pipeline, const K: usize, const S: usize> {
    upstream: P,
    // Items carried over from the previous window when S < K.
    buffer: VecDeque<P::Item>,
    // Upstream items still to be dropped before the next window (S > K).
    pending_skip: usize,
    done: bool,
}

impl<P: Pipeline, const K: usize, const S: usize> ChunkedExact<P, K, S> {
    #[inline]
    pub(crate) fn new(upstream: P) -> Self {
        const {
            assert!(K > 0, "chunked_exact requires a window of at least 1");
            assert!(S > 0, "chunked_exact requires a step of at least 1");
        }
        Self {
            upstream,
            buffer: VecDeque::with_capacity(K),
            pending_skip: 0,
            done: false,
        }
    }
}

impl<P, const K: usize, const S: usize> Pipeline for ChunkedExact<P, K, S>
where
    P: Pipeline,
    P::Item: Clone,
{
    type Item = [P::Item; K];

    fn next(&mut self) -> Option<[P::Item; K]> {
        if self.done {
            return None;
        }
        if self.pending_skip > 0 {
            if self.upstream.advance_by(self.pending_skip) < self.pending_skip {
                self.done = true;
                return None;
            }
            self.pending_skip = 0;
        }
        while self.buffer.len() < K {
            match self.upstream.next() {
                Some(item) => self.buffer.push_back(item),
                None => {
                    // Incomplete final window.
                    self.done = true;
                    self.buffer.clear();
                    return None;
                }
            }
        }

        let window = std::array::from_fn(|i| self.buffer[i].clone());
        if S < K {
            self.buffer.drain(..S);
        } else {
            self.buffer.clear();
            self.pending_skip = S - K;
        }
        Some(window)
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        if self.done {
            return SizeHint::exact(0);
        }
        // Items already buffered still belong to upcoming windows; items
        // pending a skip are already spoken for.
        self.upstream
            .size_hint()
            .add(SizeHint::exact(self.buffer.len()))
            .sub(self.pending_skip)
            .windows(K, S)
    }
}

impl<P, const K: usize, const S: usize> ExactSizePipeline for ChunkedExact<P, K, S>
where
    P: ExactSizePipeline,
    P::Item: Clone,
{
}

impl<P, const K: usize, const S: usize> fmt::Debug for ChunkedExact<P, K, S>
where
    P: Pipeline + fmt::Debug,
    P::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChunkedExact")
            .field("upstream", &self.upstream)
            .field("buffer", &self.buffer)
            .field("pending_skip", &self.pending_skip)
            .field("done", &self.done)
            .finish()
    }
}
