//! Sources that produce items out of thin air instead of a container.

use std::marker::PhantomData;

use crate::{DoubleEndedPipeline, ExactSizePipeline, Pipeline, SizeHint};

/// Creates a pipeline that yields nothing.
///
/// # Examples
///
/// ```
/// use pullstream::prelude::*;
///
/// let nums: Vec<i32> = pullstream::empty().collect();
/// assert!(nums.is_empty());
/// ```
#[inline]
pub fn empty<T>() -> Empty<T> {
    Empty {
        _item: PhantomData,
    }
}

/// Creates a pipeline that yields `item` exactly once.
///
/// # Examples
///
/// ```
/// use pullstream::prelude::*;
///
/// let greeting: Vec<_> = pullstream::once("hi").collect();
/// assert_eq!(greeting, ["hi"]);
/// ```
#[inline]
pub fn once<T>(item: T) -> Once<T> {
    Once { item: Some(item) }
}

/// Creates an endless pipeline that yields clones of `item`.
///
/// Commonly used as the separator side of
/// [`intersperse`](crate::Pipeline::intersperse). Draining it into a
/// collection without a [`take`](crate::Pipeline::take) will never finish.
///
/// # Examples
///
/// ```
/// use pullstream::prelude::*;
///
/// let zeros: Vec<_> = pullstream::repeat(0).take(4).collect();
/// assert_eq!(zeros, [0, 0, 0, 0]);
/// ```
#[inline]
pub fn repeat<T: Clone>(item: T) -> Repeat<T> {
    Repeat { item }
}

/// Creates a pipeline that yields `n` clones of `item`.
///
/// # Examples
///
/// ```
/// use pullstream::prelude::*;
///
/// let beeps: Vec<_> = pullstream::repeat_n("beep", 2).collect();
/// assert_eq!(beeps, ["beep", "beep"]);
/// ```
#[inline]
pub fn repeat_n<T: Clone>(item: T, n: usize) -> RepeatN<T> {
    RepeatN { item, remaining: n }
}

/// Creates a pipeline counting from `from` up to and including `to`, in
/// increments of `step`.
///
/// When `from > to` the pipeline is empty. The end may sit at the numeric
/// type's maximum; the range still terminates there.
///
/// # Panics
///
/// Panics if `step` is not positive.
///
/// # Examples
///
/// ```
/// use pullstream::prelude::*;
///
/// let nums: Vec<_> = pullstream::range(1, 7, 2).collect();
/// assert_eq!(nums, [1, 3, 5, 7]);
///
/// let size = pullstream::range(0.0_f32, 2.0, 0.25).len();
/// assert_eq!(size, 9);
/// ```
#[inline]
pub fn range<T: RangeStep>(from: T, to: T, step: T) -> Range<T> {
    assert!(step > T::ZERO, "range requires a positive step");
    Range {
        current: from,
        to,
        step,
        done: false,
    }
}

/// Creates a pipeline that pulls its items from a closure.
///
/// The closure is called once per pull until it returns [`None`]; after
/// that the pipeline stays exhausted and the closure is not called again.
///
/// # Examples
///
/// ```
/// use pullstream::prelude::*;
///
/// let mut state = 0_u32;
/// let squares: Vec<_> = pullstream::from_fn(move || {
///     state += 1;
///     (state <= 4).then(|| state * state)
/// })
/// .collect();
///
/// assert_eq!(squares, [1, 4, 9, 16]);
/// ```
#[inline]
pub fn from_fn<T, F: FnMut() -> Option<T>>(generator: F) -> FromFn<F> {
    FromFn {
        generator,
        done: false,
    }
}

/// A pipeline that yields nothing.
///
/// This `struct` is created by [`empty()`]. See its documentation for more.
#[derive(Debug, Clone)]
pub struct Empty<T> {
    _item: PhantomData<T>,
}

impl<T> Pipeline for Empty<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        None
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        SizeHint::exact(0)
    }
}

impl<T> DoubleEndedPipeline for Empty<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        None
    }
}

impl<T> ExactSizePipeline for Empty<T> {}

/// A pipeline that yields a single item.
///
/// This `struct` is created by [`once()`]. See its documentation for more.
#[derive(Debug, Clone)]
pub struct Once<T> {
    item: Option<T>,
}

impl<T> Pipeline for Once<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.item.take()
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        SizeHint::exact(self.item.is_some() as usize)
    }
}

impl<T> DoubleEndedPipeline for Once<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.item.take()
    }
}

impl<T> ExactSizePipeline for Once<T> {}

/// An endless pipeline of clones of one item.
///
/// This `struct` is created by [`repeat()`]. See its documentation for more.
#[derive(Debug, Clone)]
pub struct Repeat<T> {
    item: T,
}

impl<T: Clone> Pipeline for Repeat<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        Some(self.item.clone())
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        SizeHint::new(SizeHint::INFINITE, None)
    }
}

/// A pipeline of `n` clones of one item.
///
/// This `struct` is created by [`repeat_n()`]. See its documentation for
/// more.
#[derive(Debug, Clone)]
pub struct RepeatN<T> {
    item: T,
    remaining: usize,
}

impl<T: Clone> Pipeline for RepeatN<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.item.clone())
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        SizeHint::exact(self.remaining)
    }

    #[inline]
    fn advance_by(&mut self, n: usize) -> usize {
        let skipped = n.min(self.remaining);
        self.remaining -= skipped;
        skipped
    }
}

/// Both ends look the same on a run of identical items.
impl<T: Clone> DoubleEndedPipeline for RepeatN<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.next()
    }
}

impl<T: Clone> ExactSizePipeline for RepeatN<T> {
    #[inline]
    fn len(&self) -> usize {
        self.remaining
    }
}

/// An inclusive, ascending range pipeline.
///
/// This `struct` is created by [`range()`]. See its documentation for more.
#[derive(Debug, Clone)]
pub struct Range<T> {
    current: T,
    to: T,
    step: T,
    // Set once the cursor cannot move any further, either because it
    // passed `to` or because the next value does not fit the type.
    done: bool,
}

impl<T: RangeStep> Pipeline for Range<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.done {
            return None;
        }
        if self.current > self.to {
            self.done = true;
            return None;
        }
        let item = self.current;
        match item.forward(self.step) {
            Some(next) => self.current = next,
            None => self.done = true,
        }
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        SizeHint::exact(self.len())
    }
}

impl<T: RangeStep> ExactSizePipeline for Range<T> {
    #[inline]
    fn len(&self) -> usize {
        if self.done {
            0
        } else {
            T::steps_between(self.current, self.to, self.step)
        }
    }
}

/// Numeric types usable with [`range()`].
///
/// Implemented for the primitive integer and floating-point types.
pub trait RangeStep: Copy + PartialOrd {
    /// The additive identity, used to validate steps.
    const ZERO: Self;

    /// `self + step`, or [`None`] when the sum does not fit the type.
    fn forward(self, step: Self) -> Option<Self>;

    /// Number of items in the inclusive range `from..=to` with the given
    /// positive `step`; 0 when `from > to`.
    fn steps_between(from: Self, to: Self, step: Self) -> usize;
}

macro_rules! impl_range_step_int {
    ($($ty:ty),*) => {$(
        impl RangeStep for $ty {
            const ZERO: Self = 0;

            #[inline]
            fn forward(self, step: Self) -> Option<Self> {
                self.checked_add(step)
            }

            #[inline]
            fn steps_between(from: Self, to: Self, step: Self) -> usize {
                if from > to {
                    return 0;
                }
                // The span of a full-width range does not fit the type
                // itself, so count in a wider one.
                let count = ((to as i128) - (from as i128)) / (step as i128) + 1;
                usize::try_from(count).unwrap_or(usize::MAX)
            }
        }
    )*};
}

macro_rules! impl_range_step_float {
    ($($ty:ty),*) => {$(
        impl RangeStep for $ty {
            const ZERO: Self = 0.0;

            #[inline]
            fn forward(self, step: Self) -> Option<Self> {
                Some(self + step)
            }

            #[inline]
            fn steps_between(from: Self, to: Self, step: Self) -> usize {
                if from > to {
                    0
                } else {
                    ((to - from) / step) as usize + 1
                }
            }
        }
    )*};
}

impl_range_step_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
impl_range_step_float!(f32, f64);

/// A pipeline generating items from a closure.
///
/// This `struct` is created by [`from_fn()`]. See its documentation for
/// more.
#[derive(Clone)]
pub struct FromFn<F> {
    generator: F,
    done: bool,
}

impl<T, F: FnMut() -> Option<T>> Pipeline for FromFn<F> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.done {
            return None;
        }
        let item = (self.generator)();
        self.done = item.is_none();
        item
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        if self.done {
            SizeHint::exact(0)
        } else {
            SizeHint::unknown()
        }
    }
}

impl<F> std::fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromFn").field("done", &self.done).finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn range_is_inclusive() {
        let nums: Vec<i32> = crate::range(1, 5, 1).collect();
        assert_eq!(nums, [1, 2, 3, 4, 5]);

        // Step overshooting the end still includes the last reachable value.
        let nums: Vec<i32> = crate::range(0, 7, 3).collect();
        assert_eq!(nums, [0, 3, 6]);
    }

    #[test]
    fn range_hint_shrinks() {
        let mut r = crate::range(0, 9, 1);
        assert_eq!(r.len(), 10);
        r.next();
        r.next();
        assert_eq!(r.len(), 8);
    }

    #[test]
    fn empty_range_when_backwards() {
        assert_eq!(crate::range(5, 1, 1).count(), 0);
    }

    #[test]
    fn range_reaches_the_type_maximum() {
        let tail: Vec<u8> = crate::range(250_u8, u8::MAX, 1).collect();
        assert_eq!(tail, [250, 251, 252, 253, 254, 255]);

        // Exhausted for good once the end is served.
        let mut r = crate::range(254_u8, u8::MAX, 2);
        assert_eq!(r.next(), Some(254));
        assert_eq!(r.next(), None);
        assert_eq!(r.len(), 0);
    }

    #[test]
    fn full_signed_span_has_an_exact_len() {
        assert_eq!(crate::range(i8::MIN, i8::MAX, 1).len(), 256);

        let all: Vec<i8> = crate::range(i8::MIN, i8::MAX, 1).collect();
        assert_eq!(all.len(), 256);
        assert_eq!(all.first(), Some(&i8::MIN));
        assert_eq!(all.last(), Some(&i8::MAX));
    }

    #[test]
    #[should_panic = "positive step"]
    fn zero_step_is_rejected() {
        let _ = crate::range(0, 5, 0);
    }

    #[test]
    fn repeat_n_from_back() {
        let mut beeps = crate::repeat_n(7, 3);
        assert_eq!(beeps.next_back(), Some(7));
        assert_eq!(beeps.len(), 2);
    }

    #[test]
    fn from_fn_fuses() {
        let mut calls = 0;
        let mut source = crate::from_fn(|| {
            calls += 1;
            None::<i32>
        });

        assert_eq!(source.next(), None);
        assert_eq!(source.next(), None);
        assert_eq!(source.size_hint(), SizeHint::exact(0));
        drop(source);
        assert_eq!(calls, 1, "generator must not run after exhaustion");
    }
}
