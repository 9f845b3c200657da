use crate::{ExactSizePipeline, Pipeline, SizeHint};

/// A pipeline stage yielding the first item and then every `step`-th one.
///
/// This `struct` is created by [`Pipeline::step_by`]. See its documentation
/// for more.
#[derive(Debug, Clone)]
pub struct StepBy<P> {
    upstream: P,
    step: usize,
    first_taken: bool,
}

impl<P> StepBy<P> {
    #[inline]
    pub(crate) fn new(upstream: P, step: usize) -> Self {
        assert!(step > 0, "step_by requires a step of at least 1");
        Self {
            upstream,
            step,
            first_taken: false,
        }
    }
}

impl<P: Pipeline> Pipeline for StepBy<P> {
    type Item = P::Item;

    #[inline]
    fn next(&mut self) -> Option<P::Item> {
        if self.first_taken {
            self.upstream.advance_by(self.step - 1);
        } else {
            self.first_taken = true;
        }
        self.upstream.next()
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        let upstream = self.upstream.size_hint();
        if self.first_taken {
            // The next yield costs a full step.
            SizeHint::new(
                upstream.lower / self.step,
                upstream.upper.map(|u| u / self.step),
            )
        } else {
            upstream.div_ceil(self.step)
        }
    }
}

impl<P: ExactSizePipeline> ExactSizePipeline for StepBy<P> {
    #[inline]
    fn len(&self) -> usize {
        let remaining = self.upstream.len();
        if self.first_taken {
            remaining / self.step
        } else {
            remaining.div_ceil(self.step)
        }
    }
}
