use std::fmt;

use crate::sources::{Cursor, SourceContainer};
use crate::{Pipeline, SizeHint};

/// A pipeline stage that maps items to containers and flattens the results.
///
/// This `struct` is created by [`Pipeline::flat_map`]. See its documentation
/// for more.
pub struct FlatMap<P, F, C>
where
    C: SourceContainer,
{
    upstream: P,
    f: F,
    inner: Option<C::MoveCursor>,
}

impl<P, F, C: SourceContainer> FlatMap<P, F, C> {
    #[inline]
    pub(crate) fn new(upstream: P, f: F) -> Self {
        Self {
            upstream,
            f,
            inner: None,
        }
    }
}

impl<P, F, C> Pipeline for FlatMap<P, F, C>
where
    P: Pipeline,
    F: FnMut(P::Item) -> C,
    C: SourceContainer,
{
    type Item = C::ItemOwned;

    #[inline]
    fn next(&mut self) -> Option<C::ItemOwned> {
        loop {
            if let Some(inner) = &mut self.inner {
                if let Some(item) = inner.next() {
                    return Some(item);
                }
                self.inner = None;
            }
            self.inner = Some((self.f)(self.upstream.next()?).move_cursor());
        }
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        flattened_hint(
            self.upstream.size_hint(),
            self.inner.as_ref().map(Cursor::size_hint),
        )
    }
}

impl<P: fmt::Debug, F, C: SourceContainer> fmt::Debug for FlatMap<P, F, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlatMap")
            .field("upstream", &self.upstream)
            .finish_non_exhaustive()
    }
}

/// A pipeline stage that flattens a pipeline of containers.
///
/// This `struct` is created by [`Pipeline::flatten`]. See its documentation
/// for more.
pub struct Flatten<P>
where
    P: Pipeline,
    P::Item: SourceContainer,
{
    upstream: P,
    inner: Option<<P::Item as SourceContainer>::MoveCursor>,
}

impl<P> Flatten<P>
where
    P: Pipeline,
    P::Item: SourceContainer,
{
    #[inline]
    pub(crate) fn new(upstream: P) -> Self {
        Self {
            upstream,
            inner: None,
        }
    }
}

impl<P> Pipeline for Flatten<P>
where
    P: Pipeline,
    P::Item: SourceContainer,
{
    type Item = <P::Item as SourceContainer>::ItemOwned;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(inner) = &mut self.inner {
                if let Some(item) = inner.next() {
                    return Some(item);
                }
                self.inner = None;
            }
            self.inner = Some(self.upstream.next()?.move_cursor());
        }
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        flattened_hint(
            self.upstream.size_hint(),
            self.inner.as_ref().map(Cursor::size_hint),
        )
    }
}

impl<P> fmt::Debug for Flatten<P>
where
    P: Pipeline + fmt::Debug,
    P::Item: SourceContainer,
    <P::Item as SourceContainer>::MoveCursor: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flatten")
            .field("upstream", &self.upstream)
            .field("inner", &self.inner)
            .finish()
    }
}

/// Each not-yet-expanded upstream item can flatten into any number of
/// items, so only the current container's bounds are trustworthy.
#[inline]
fn flattened_hint(upstream: SizeHint, current: Option<SizeHint>) -> SizeHint {
    let current = current.unwrap_or(SizeHint::exact(0));
    if upstream == SizeHint::exact(0) {
        current
    } else {
        SizeHint::new(current.lower, None)
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn flattens_in_order_skipping_empties() {
        let flat: Vec<i32> = crate::from(vec![vec![1], vec![], vec![2, 3]])
            .flatten()
            .collect();
        assert_eq!(flat, [1, 2, 3]);
    }

    #[test]
    fn flat_map_expands_each_item() {
        let doubled_up: Vec<i32> = crate::from(vec![1, 2]).flat_map(|n| [n, n * 10]).collect();
        assert_eq!(doubled_up, [1, 10, 2, 20]);
    }

    #[test]
    fn hint_never_undercounts() {
        // 3 items remain in total at every checkpoint below.
        let mut stage = crate::from(vec![vec![1, 2], vec![3]]).flatten();
        assert_eq!(stage.size_hint(), SizeHint::new(0, None));

        stage.next();
        // Inside the first container: one buffered item is guaranteed.
        assert_eq!(stage.size_hint(), SizeHint::new(1, None));

        stage.next();
        stage.next();
        stage.next();
        // Upstream and current container both drained.
        assert_eq!(stage.size_hint(), SizeHint::exact(0));
    }
}
