//! The source contract for concrete containers.
//!
//! A container type participates in pipelines purely by implementing
//! [`SourceContainer`] (and [`SourceContainerMut`] where it supports mutable
//! iteration); the engine never special-cases concrete container types. The
//! implementations here cover the standard collections and delegate the
//! cursor state to the containers' own iterators via
//! [`IterCursor`](crate::sources::IterCursor).

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};

use crate::sources::{Cursor, IterCursor, SliceCursor};

/// Contract a container satisfies to act as a pipeline data source.
///
/// The container hands out a cursor per ownership mode:
///
/// - [`move_cursor`](SourceContainer::move_cursor) consumes the container;
///   the cursor owns the backing store and yields items by value.
/// - [`ref_cursor`](SourceContainer::ref_cursor) borrows the container
///   immutably and yields reference items; the container is provably
///   untouched.
///
/// The mutable-borrow mode lives in [`SourceContainerMut`], since keyed
/// containers (sets, and the key half of maps) cannot offer it.
///
/// The payload shape of the reference items is container-specific:
/// sequences yield `&T`, maps yield `(&K, &V)`.
pub trait SourceContainer {
    /// The item type the container holds, by value.
    type ItemOwned;
    /// The item type yielded when iterating by shared reference.
    type ItemRef<'a>
    where
        Self: 'a;

    /// Cursor for the consuming mode.
    type MoveCursor: Cursor<Item = Self::ItemOwned>;
    /// Cursor for the immutable-borrow mode.
    type RefCursor<'a>: Cursor<Item = Self::ItemRef<'a>>
    where
        Self: 'a;

    /// Consumes the container into a cursor that yields owned items.
    fn move_cursor(self) -> Self::MoveCursor;

    /// Borrows the container into a cursor that yields reference items.
    fn ref_cursor(&self) -> Self::RefCursor<'_>;
}

/// Extension of [`SourceContainer`] for containers that support mutable
/// iteration.
pub trait SourceContainerMut: SourceContainer {
    /// The item type yielded when iterating by mutable reference: `&mut T`
    /// for sequences, `(&K, &mut V)` for maps.
    type ItemMut<'a>
    where
        Self: 'a;

    /// Cursor for the mutable-borrow mode.
    type MutCursor<'a>: Cursor<Item = Self::ItemMut<'a>>
    where
        Self: 'a;

    /// Borrows the container mutably into a cursor.
    ///
    /// The single-mutable-borrow discipline is enforced by the borrow
    /// checker: no second cursor (or any other access) can alias the
    /// container while this one lives.
    fn mut_cursor(&mut self) -> Self::MutCursor<'_>;
}

impl<T> SourceContainer for Vec<T> {
    type ItemOwned = T;
    type ItemRef<'a>
        = &'a T
    where
        T: 'a;

    type MoveCursor = IterCursor<std::vec::IntoIter<T>>;
    // Contiguous storage gets the slice cursor, which unlocks the
    // zero-copy windows fast path.
    type RefCursor<'a>
        = SliceCursor<'a, T>
    where
        T: 'a;

    #[inline]
    fn move_cursor(self) -> Self::MoveCursor {
        IterCursor::new(self.into_iter())
    }

    #[inline]
    fn ref_cursor(&self) -> Self::RefCursor<'_> {
        SliceCursor::new(self)
    }
}

impl<T> SourceContainerMut for Vec<T> {
    type ItemMut<'a>
        = &'a mut T
    where
        T: 'a;

    type MutCursor<'a>
        = IterCursor<std::slice::IterMut<'a, T>>
    where
        T: 'a;

    #[inline]
    fn mut_cursor(&mut self) -> Self::MutCursor<'_> {
        IterCursor::new(self.iter_mut())
    }
}

impl<T, const N: usize> SourceContainer for [T; N] {
    type ItemOwned = T;
    type ItemRef<'a>
        = &'a T
    where
        T: 'a;

    type MoveCursor = IterCursor<std::array::IntoIter<T, N>>;
    type RefCursor<'a>
        = SliceCursor<'a, T>
    where
        T: 'a;

    #[inline]
    fn move_cursor(self) -> Self::MoveCursor {
        IterCursor::new(self.into_iter())
    }

    #[inline]
    fn ref_cursor(&self) -> Self::RefCursor<'_> {
        SliceCursor::new(self)
    }
}

impl<T, const N: usize> SourceContainerMut for [T; N] {
    type ItemMut<'a>
        = &'a mut T
    where
        T: 'a;

    type MutCursor<'a>
        = IterCursor<std::slice::IterMut<'a, T>>
    where
        T: 'a;

    #[inline]
    fn mut_cursor(&mut self) -> Self::MutCursor<'_> {
        IterCursor::new(self.iter_mut())
    }
}

/// A shared slice is its own source: "consuming" it only consumes the
/// reference, so the move cursor yields `&'s T` like the ref cursor does.
impl<'s, T> SourceContainer for &'s [T] {
    type ItemOwned = &'s T;
    type ItemRef<'a>
        = &'a T
    where
        Self: 'a;

    type MoveCursor = SliceCursor<'s, T>;
    type RefCursor<'a>
        = SliceCursor<'a, T>
    where
        Self: 'a;

    #[inline]
    fn move_cursor(self) -> Self::MoveCursor {
        SliceCursor::new(self)
    }

    #[inline]
    fn ref_cursor(&self) -> Self::RefCursor<'_> {
        SliceCursor::new(self)
    }
}

impl<T> SourceContainer for VecDeque<T> {
    type ItemOwned = T;
    type ItemRef<'a>
        = &'a T
    where
        T: 'a;

    type MoveCursor = IterCursor<std::collections::vec_deque::IntoIter<T>>;
    type RefCursor<'a>
        = IterCursor<std::collections::vec_deque::Iter<'a, T>>
    where
        T: 'a;

    #[inline]
    fn move_cursor(self) -> Self::MoveCursor {
        IterCursor::new(self.into_iter())
    }

    #[inline]
    fn ref_cursor(&self) -> Self::RefCursor<'_> {
        IterCursor::new(self.iter())
    }
}

impl<T> SourceContainerMut for VecDeque<T> {
    type ItemMut<'a>
        = &'a mut T
    where
        T: 'a;

    type MutCursor<'a>
        = IterCursor<std::collections::vec_deque::IterMut<'a, T>>
    where
        T: 'a;

    #[inline]
    fn mut_cursor(&mut self) -> Self::MutCursor<'_> {
        IterCursor::new(self.iter_mut())
    }
}

impl<T> SourceContainer for LinkedList<T> {
    type ItemOwned = T;
    type ItemRef<'a>
        = &'a T
    where
        T: 'a;

    type MoveCursor = IterCursor<std::collections::linked_list::IntoIter<T>>;
    type RefCursor<'a>
        = IterCursor<std::collections::linked_list::Iter<'a, T>>
    where
        T: 'a;

    #[inline]
    fn move_cursor(self) -> Self::MoveCursor {
        IterCursor::new(self.into_iter())
    }

    #[inline]
    fn ref_cursor(&self) -> Self::RefCursor<'_> {
        IterCursor::new(self.iter())
    }
}

impl<T> SourceContainerMut for LinkedList<T> {
    type ItemMut<'a>
        = &'a mut T
    where
        T: 'a;

    type MutCursor<'a>
        = IterCursor<std::collections::linked_list::IterMut<'a, T>>
    where
        T: 'a;

    #[inline]
    fn mut_cursor(&mut self) -> Self::MutCursor<'_> {
        IterCursor::new(self.iter_mut())
    }
}

impl<T> SourceContainer for HashSet<T> {
    type ItemOwned = T;
    type ItemRef<'a>
        = &'a T
    where
        T: 'a;

    type MoveCursor = IterCursor<std::collections::hash_set::IntoIter<T>>;
    type RefCursor<'a>
        = IterCursor<std::collections::hash_set::Iter<'a, T>>
    where
        T: 'a;

    #[inline]
    fn move_cursor(self) -> Self::MoveCursor {
        IterCursor::new(self.into_iter())
    }

    #[inline]
    fn ref_cursor(&self) -> Self::RefCursor<'_> {
        IterCursor::new(self.iter())
    }
}

impl<T> SourceContainer for BTreeSet<T> {
    type ItemOwned = T;
    type ItemRef<'a>
        = &'a T
    where
        T: 'a;

    type MoveCursor = IterCursor<std::collections::btree_set::IntoIter<T>>;
    type RefCursor<'a>
        = IterCursor<std::collections::btree_set::Iter<'a, T>>
    where
        T: 'a;

    #[inline]
    fn move_cursor(self) -> Self::MoveCursor {
        IterCursor::new(self.into_iter())
    }

    #[inline]
    fn ref_cursor(&self) -> Self::RefCursor<'_> {
        IterCursor::new(self.iter())
    }
}

impl<K, V> SourceContainer for HashMap<K, V> {
    type ItemOwned = (K, V);
    type ItemRef<'a>
        = (&'a K, &'a V)
    where
        K: 'a,
        V: 'a;

    type MoveCursor = IterCursor<std::collections::hash_map::IntoIter<K, V>>;
    type RefCursor<'a>
        = IterCursor<std::collections::hash_map::Iter<'a, K, V>>
    where
        K: 'a,
        V: 'a;

    #[inline]
    fn move_cursor(self) -> Self::MoveCursor {
        IterCursor::new(self.into_iter())
    }

    #[inline]
    fn ref_cursor(&self) -> Self::RefCursor<'_> {
        IterCursor::new(self.iter())
    }
}

/// Map values are mutable through the pipeline; keys stay shared.
impl<K, V> SourceContainerMut for HashMap<K, V> {
    type ItemMut<'a>
        = (&'a K, &'a mut V)
    where
        K: 'a,
        V: 'a;

    type MutCursor<'a>
        = IterCursor<std::collections::hash_map::IterMut<'a, K, V>>
    where
        K: 'a,
        V: 'a;

    #[inline]
    fn mut_cursor(&mut self) -> Self::MutCursor<'_> {
        IterCursor::new(self.iter_mut())
    }
}

impl<K, V> SourceContainer for BTreeMap<K, V> {
    type ItemOwned = (K, V);
    type ItemRef<'a>
        = (&'a K, &'a V)
    where
        K: 'a,
        V: 'a;

    type MoveCursor = IterCursor<std::collections::btree_map::IntoIter<K, V>>;
    type RefCursor<'a>
        = IterCursor<std::collections::btree_map::Iter<'a, K, V>>
    where
        K: 'a,
        V: 'a;

    #[inline]
    fn move_cursor(self) -> Self::MoveCursor {
        IterCursor::new(self.into_iter())
    }

    #[inline]
    fn ref_cursor(&self) -> Self::RefCursor<'_> {
        IterCursor::new(self.iter())
    }
}

impl<K, V> SourceContainerMut for BTreeMap<K, V> {
    type ItemMut<'a>
        = (&'a K, &'a mut V)
    where
        K: 'a,
        V: 'a;

    type MutCursor<'a>
        = IterCursor<std::collections::btree_map::IterMut<'a, K, V>>
    where
        K: 'a,
        V: 'a;

    #[inline]
    fn mut_cursor(&mut self) -> Self::MutCursor<'_> {
        IterCursor::new(self.iter_mut())
    }
}
