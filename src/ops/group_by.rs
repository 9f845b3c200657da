use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::sources::{IterCursor, Src};
use crate::{Pipeline, SizeHint};

type Buffered<K, T> = Src<IterCursor<std::collections::hash_map::IntoIter<K, Vec<T>>>>;

/// A pipeline stage grouping items by an extracted key into
/// `(key, Vec<item>)` pairs.
///
/// Buffering: the whole upstream is drained on the first pull. Within a
/// group the items keep their upstream order; the groups themselves come
/// out in no particular order.
///
/// This `struct` is created by [`Pipeline::group_by`]. See its
/// documentation for more.
pub struct GroupBy<P: Pipeline, F, K> {
    upstream: P,
    key_of: F,
    groups: Option<Buffered<K, P::Item>>,
}

impl<P: Pipeline, F, K> GroupBy<P, F, K> {
    #[inline]
    pub(crate) fn new(upstream: P, key_of: F) -> Self {
        Self {
            upstream,
            key_of,
            groups: None,
        }
    }
}

impl<P, F, K> GroupBy<P, F, K>
where
    P: Pipeline,
    F: FnMut(&P::Item) -> K,
    K: Hash + Eq,
{
    fn groups(&mut self) -> &mut Buffered<K, P::Item> {
        let (upstream, key_of) = (&mut self.upstream, &mut self.key_of);
        self.groups.get_or_insert_with(|| {
            let mut groups: HashMap<K, Vec<P::Item>> = HashMap::new();
            while let Some(item) = upstream.next() {
                groups.entry(key_of(&item)).or_default().push(item);
            }
            crate::from(groups)
        })
    }
}

impl<P, F, K> Pipeline for GroupBy<P, F, K>
where
    P: Pipeline,
    F: FnMut(&P::Item) -> K,
    K: Hash + Eq,
{
    type Item = (K, Vec<P::Item>);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.groups().next()
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        match &self.groups {
            Some(groups) => groups.size_hint(),
            None => {
                // All items may share a key, but a non-empty input makes at
                // least one group.
                let upstream = self.upstream.size_hint();
                SizeHint::new(upstream.lower.min(1), upstream.upper)
            }
        }
    }
}

impl<P, F, K> fmt::Debug for GroupBy<P, F, K>
where
    P: Pipeline + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupBy")
            .field("upstream", &self.upstream)
            .field("buffered", &self.groups.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::prelude::*;

    #[test]
    fn groups_keep_their_upstream_order() {
        let cakes = vec![("apple pie", 1.3_f32), ("sacher", 0.5), ("apple pie", 1.8)];
        let by_name: HashMap<&str, Vec<f32>> = crate::from(cakes)
            .group_by(|&(name, _)| name)
            .map(|(name, group)| {
                (
                    name,
                    group.into_iter().map(|(_, weight)| weight).collect::<Vec<_>>(),
                )
            })
            .collect();

        assert_eq!(by_name.len(), 2);
        assert_eq!(by_name["apple pie"], [1.3, 1.8]);
        assert_eq!(by_name["sacher"], [0.5]);
    }

    #[test]
    fn empty_input_means_no_groups() {
        let stage = crate::from(Vec::<i32>::new()).group_by(|&n| n % 2);
        assert_eq!(stage.size_hint(), SizeHint::exact(0));
        assert_eq!(stage.count(), 0);
    }

    #[test]
    fn hint_before_buffering_brackets_the_group_count() {
        let stage = crate::from(vec![1, 2, 3, 4]).group_by(|&n| n % 2);
        assert_eq!(stage.size_hint(), SizeHint::new(1, Some(4)));
    }
}
