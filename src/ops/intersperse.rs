use std::fmt;

use crate::{Pipeline, SizeHint};

/// Where the alternation between primary items and separators stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Nothing pulled yet.
    Start,
    /// The peeked primary item is the next yield.
    Primary,
    /// A separator is the next yield.
    Separator,
    /// Ended, either normally or because the separators dried up.
    Done,
}

/// A pipeline stage weaving separator items between adjacent primary items.
///
/// Separators come from their own pipeline; use
/// [`repeat`](crate::repeat) to separate with copies of one value. No
/// separator is emitted before the first or after the last primary item,
/// which requires one item of primary lookahead. If the separator supply
/// runs out, the primary item following the last separator is still
/// yielded and the pipeline ends there.
///
/// This `struct` is created by [`Pipeline::intersperse`]. See its
/// documentation for more.
pub struct Intersperse<P: Pipeline, S> {
    primary: P,
    separators: S,
    peeked: Option<P::Item>,
    state: State,
}

impl<P: Pipeline, S> Intersperse<P, S> {
    #[inline]
    pub(crate) fn new(primary: P, separators: S) -> Self {
        Self {
            primary,
            separators,
            peeked: None,
            state: State::Start,
        }
    }
}

impl<P, S> Pipeline for Intersperse<P, S>
where
    P: Pipeline,
    S: Pipeline<Item = P::Item>,
{
    type Item = P::Item;

    fn next(&mut self) -> Option<P::Item> {
        match self.state {
            State::Start => match self.primary.next() {
                Some(item) => {
                    self.peeked = Some(item);
                    self.state = State::Primary;
                    self.next()
                }
                None => {
                    self.state = State::Done;
                    None
                }
            },
            State::Primary => {
                let item = self.peeked.take();
                self.peeked = self.primary.next();
                self.state = if self.peeked.is_some() {
                    State::Separator
                } else {
                    State::Done
                };
                item
            }
            State::Separator => match self.separators.next() {
                Some(sep) => {
                    self.state = State::Primary;
                    Some(sep)
                }
                // No separator to put in front of the peeked item, so the
                // previous primary item was the final yield.
                None => {
                    self.state = State::Done;
                    self.peeked = None;
                    None
                }
            },
            State::Done => None,
        }
    }

    fn size_hint(&self) -> SizeHint {
        if self.state == State::Done {
            return SizeHint::exact(0);
        }
        let primary = self
            .primary
            .size_hint()
            .add(SizeHint::exact(self.peeked.is_some() as usize));
        let separators = self.separators.size_hint();
        let separator_first = self.state == State::Separator;

        let upper = match (primary.upper, separators.upper) {
            (Some(p), Some(s)) => Some(interspersed_count(p, s, separator_first)),
            // Unlimited separators: only the primary count constrains.
            (Some(p), None) => Some(interspersed_count(p, p, separator_first)),
            (None, _) => None,
        };
        SizeHint::new(
            interspersed_count(primary.lower, separators.lower, separator_first),
            upper,
        )
    }
}

/// Total items yielded from `p` primary items and `s` separators.
///
/// Starting on a primary item, the output is p1 s1 p2 s2 ... pN, so a
/// plentiful separator supply gives `2p - 1`; a short one cuts the output
/// off one primary item after the last separator, giving `2s + 1`.
/// Starting on a separator, items come in (separator, primary) pairs and
/// either side ending cuts the pair off, giving `2 * min(p, s)`.
fn interspersed_count(p: usize, s: usize, separator_first: bool) -> usize {
    if p == 0 {
        return 0;
    }
    if separator_first {
        p.min(s).saturating_mul(2)
    } else if s >= p - 1 {
        p.saturating_mul(2).saturating_sub(1)
    } else {
        s.saturating_mul(2).saturating_add(1)
    }
}

impl<P, S> fmt::Debug for Intersperse<P, S>
where
    P: Pipeline + fmt::Debug,
    P::Item: fmt::Debug,
    S: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Intersperse")
            .field("primary", &self.primary)
            .field("separators", &self.separators)
            .field("peeked", &self.peeked)
            .field("state", &self.state)
            .finish()
    }
}


#[cfg(test)]
mod proptests {
    use itertools::Itertools;
    use proptest::prelude::*;

    use crate::prelude::*;

    proptest! {
        #[test]
        fn plentiful_separators_agree_with_itertools(nums: Vec<i8>) {
            let ours: Vec<i8> = crate::from(nums.clone())
                .intersperse(crate::repeat(0))
                .collect();
            // UFCS dodges the ambiguity with the unstable std method.
            let itertools_way: Vec<i8> = Itertools::intersperse(nums.into_iter(), 0).collect();
            prop_assert_eq!(ours, itertools_way);
        }
    }
}
