use std::collections::VecDeque;
use std::fmt;

use crate::{ExactSizePipeline, Pipeline, SizeHint};

/// Creates a pipeline interleaving a bundle of input pipelines, one item
/// from each in round-robin order.
///
/// The pipeline ends as soon as any input fails to contribute to the
/// current round: items the other inputs supplied earlier in that round are
/// still yielded, the rest of the round is not.
///
/// Bundles are tuples of two, three or four pipelines sharing one item
/// type. For the common two-input case, [`Pipeline::alternate`] reads
/// better.
///
/// # Examples
///
/// ```
/// use pullstream::prelude::*;
///
/// let woven: Vec<i32> = pullstream::alternate((
///     pullstream::from(vec![1, 4, 7]),
///     pullstream::from(vec![2, 5]),
///     pullstream::from(vec![3, 6, 9]),
/// ))
/// .collect();
///
/// assert_eq!(woven, [1, 2, 3, 4, 5, 6, 7]);
/// ```
#[inline]
pub fn alternate<B: AlternateBundle>(bundle: B) -> Alternate<B> {
    Alternate {
        bundle,
        round: VecDeque::new(),
        done: false,
    }
}

/// A bundle of same-item pipelines that [`alternate`] can interleave.
///
/// Implemented for tuples of two, three and four pipelines.
pub trait AlternateBundle {
    /// The item type shared by every input.
    type Item;

    /// Pulls one item from each input in order into `round`. Stops at the
    /// first exhausted input and returns `false`; the items pulled before
    /// it stay in `round`.
    fn pull_round(&mut self, round: &mut VecDeque<Self::Item>) -> bool;

    /// Bounds on the total number of interleaved items left in the inputs.
    fn size_hint(&self) -> SizeHint;
}

/// Interleaved total: every full round takes one item from each of the `n`
/// inputs, and the final partial round contributes one item per input
/// before the exhausted one.
fn interleaved_hint(hints: &[SizeHint]) -> SizeHint {
    let n = hints.len();

    let (mut min_lower, mut min_lower_idx) = (usize::MAX, 0);
    for (idx, hint) in hints.iter().enumerate() {
        if hint.lower < min_lower {
            (min_lower, min_lower_idx) = (hint.lower, idx);
        }
    }

    let mut min_upper: Option<(usize, usize)> = None;
    for (idx, hint) in hints.iter().enumerate() {
        if let Some(upper) = hint.upper {
            if min_upper.is_none_or(|(u, _)| upper < u) {
                min_upper = Some((upper, idx));
            }
        }
    }

    SizeHint::new(
        min_lower.saturating_mul(n).saturating_add(min_lower_idx),
        min_upper.map(|(upper, idx)| upper.saturating_mul(n).saturating_add(idx)),
    )
}

macro_rules! impl_alternate_bundle {
    ($($input:ident),+) => {
        impl<Item, $($input),+> AlternateBundle for ($($input,)+)
        where
            $($input: Pipeline<Item = Item>),+
        {
            type Item = Item;

            #[allow(non_snake_case)]
            fn pull_round(&mut self, round: &mut VecDeque<Item>) -> bool {
                let ($($input,)+) = self;
                $(
                    match $input.next() {
                        Some(item) => round.push_back(item),
                        None => return false,
                    }
                )+
                true
            }

            #[allow(non_snake_case)]
            fn size_hint(&self) -> SizeHint {
                let ($($input,)+) = self;
                interleaved_hint(&[$($input.size_hint()),+])
            }
        }

        impl<Item, $($input),+> ExactSizePipeline for Alternate<($($input,)+)>
        where
            $($input: ExactSizePipeline<Item = Item>),+
        {
        }
    };
}

impl_alternate_bundle!(A, B);
impl_alternate_bundle!(A, B, C);
impl_alternate_bundle!(A, B, C, D);

/// A pipeline interleaving a bundle of inputs in round-robin order.
///
/// This `struct` is created by [`alternate`] and [`Pipeline::alternate`].
/// See their documentation for more.
pub struct Alternate<B: AlternateBundle> {
    bundle: B,
    // The round currently being served.
    round: VecDeque<B::Item>,
    done: bool,
}

impl<B: AlternateBundle> Pipeline for Alternate<B> {
    type Item = B::Item;

    #[inline]
    fn next(&mut self) -> Option<B::Item> {
        if self.round.is_empty() && !self.done {
            self.done = !self.bundle.pull_round(&mut self.round);
        }
        self.round.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        let buffered = SizeHint::exact(self.round.len());
        if self.done {
            buffered
        } else {
            self.bundle.size_hint().add(buffered)
        }
    }
}

impl<B> fmt::Debug for Alternate<B>
where
    B: AlternateBundle + fmt::Debug,
    B::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Alternate")
            .field("bundle", &self.bundle)
            .field("round", &self.round)
            .field("done", &self.done)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn two_inputs_weave_evenly() {
        let woven: Vec<i32> = crate::from(vec![1, 3, 5])
            .alternate(crate::from(vec![2, 4, 6]))
            .collect();
        assert_eq!(woven, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn ends_mid_round_at_the_exhausted_input() {
        // Second input dries up first; the first input's item from that
        // round survives, the third input's does not.
        let woven: Vec<i32> = crate::alternate((
            crate::from(vec![1, 4, 7]),
            crate::from(vec![2, 5]),
            crate::from(vec![3, 6, 9]),
        ))
        .collect();
        assert_eq!(woven, [1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn hint_counts_partial_final_round() {
        let stage = crate::alternate((
            crate::from(vec![1, 4, 7]),
            crate::from(vec![2, 5]),
            crate::from(vec![3, 6, 9]),
        ));
        assert_eq!(stage.size_hint(), SizeHint::exact(7));
        assert_eq!(stage.len(), 7);
    }

    #[test]
    fn hint_stays_correct_mid_round() {
        let mut stage = crate::from(vec![1, 3]).alternate(crate::from(vec![2]));
        assert_eq!(stage.size_hint(), SizeHint::exact(3));
        assert_eq!(stage.next(), Some(1));
        assert_eq!(stage.size_hint(), SizeHint::exact(2));
        assert_eq!(stage.next(), Some(2));
        assert_eq!(stage.next(), Some(3));
        assert_eq!(stage.next(), None);
    }
}
