use crate::{DoubleEndedPipeline, ExactSizePipeline, Pipeline, SizeHint};

/// A pipeline stage yielding one pipeline's items, then another's.
///
/// This `struct` is created by [`Pipeline::chain`]. See its documentation
/// for more.
#[derive(Debug, Clone)]
pub struct Chain<A, B> {
    front: A,
    back: B,
    front_done: bool,
    back_done: bool,
}

impl<A, B> Chain<A, B> {
    #[inline]
    pub(crate) fn new(front: A, back: B) -> Self {
        Self {
            front,
            back,
            front_done: false,
            back_done: false,
        }
    }
}

impl<A, B> Pipeline for Chain<A, B>
where
    A: Pipeline,
    B: Pipeline<Item = A::Item>,
{
    type Item = A::Item;

    #[inline]
    fn next(&mut self) -> Option<A::Item> {
        if !self.front_done {
            if let Some(item) = self.front.next() {
                return Some(item);
            }
            self.front_done = true;
        }
        if self.back_done {
            return None;
        }
        let item = self.back.next();
        self.back_done = item.is_none();
        item
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        let front = if self.front_done {
            SizeHint::exact(0)
        } else {
            self.front.size_hint()
        };
        let back = if self.back_done {
            SizeHint::exact(0)
        } else {
            self.back.size_hint()
        };
        front.add(back)
    }

    #[inline]
    fn advance_by(&mut self, n: usize) -> usize {
        let mut skipped = 0;
        if !self.front_done {
            skipped = self.front.advance_by(n);
            if skipped < n {
                self.front_done = true;
            }
        }
        if skipped < n && !self.back_done {
            skipped += self.back.advance_by(n - skipped);
        }
        skipped
    }
}

impl<A, B> DoubleEndedPipeline for Chain<A, B>
where
    A: DoubleEndedPipeline,
    B: DoubleEndedPipeline<Item = A::Item>,
{
    #[inline]
    fn next_back(&mut self) -> Option<A::Item> {
        if !self.back_done {
            if let Some(item) = self.back.next_back() {
                return Some(item);
            }
            self.back_done = true;
        }
        if self.front_done {
            return None;
        }
        let item = self.front.next_back();
        self.front_done = item.is_none();
        item
    }
}

impl<A, B> ExactSizePipeline for Chain<A, B>
where
    A: ExactSizePipeline,
    B: ExactSizePipeline<Item = A::Item>,
{
    #[inline]
    fn len(&self) -> usize {
        let front = if self.front_done { 0 } else { self.front.len() };
        let back = if self.back_done { 0 } else { self.back.len() };
        front + back
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn concatenates_in_order() {
        let joined: Vec<i32> = crate::from(vec![1, 2]).chain(crate::from(vec![3, 4])).collect();
        assert_eq!(joined, [1, 2, 3, 4]);
    }

    #[test]
    fn hints_add_and_unbounded_poisons() {
        let bounded = crate::from(vec![1, 2]).chain(crate::from(vec![3]));
        assert_eq!(bounded.size_hint(), SizeHint::exact(3));

        let with_unknown = crate::from(vec![1, 2]).chain(crate::from_fn(|| None::<i32>));
        assert_eq!(with_unknown.size_hint(), SizeHint::new(2, None));
    }

    #[test]
    fn reads_backwards_across_the_seam() {
        let mut joined = crate::from(vec![1, 2]).chain(crate::from(vec![3, 4]));
        assert_eq!(joined.next_back(), Some(4));
        assert_eq!(joined.next_back(), Some(3));
        assert_eq!(joined.next_back(), Some(2));
        assert_eq!(joined.next(), Some(1));
        assert_eq!(joined.next_back(), None);
    }

    #[test]
    fn skipping_crosses_the_seam() {
        let mut joined = crate::from(vec![1, 2]).chain(crate::from(vec![3, 4]));
        assert_eq!(joined.advance_by(3), 3);
        assert_eq!(joined.next(), Some(4));
    }
}
