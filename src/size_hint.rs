//! Bounds on the remaining length of a pipeline.

/// An estimate of how many items a pipeline stage has left.
///
/// The hint consists of a lower bound and an optional upper bound
/// ([`None`] meaning "unbounded"). Both refer to the items *remaining*, so a
/// stage's hint shrinks as it is drained.
///
/// Every stage recomputes its hint from its upstream's on each call — a hint
/// is never cached, so it can never go stale.
///
/// # Guarantee
///
/// For every stage shipped by this crate,
/// `lower <= actual remaining count <= upper` (when an upper bound is
/// present). Third-party [`Pipeline`](crate::Pipeline) implementations are
/// expected to uphold the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeHint {
    /// Lower bound on the remaining item count.
    pub lower: usize,
    /// Upper bound on the remaining item count, or [`None`] if unbounded.
    pub upper: Option<usize>,
}

impl SizeHint {
    /// Lower bound used by endless sources such as [`repeat`](crate::repeat).
    pub const INFINITE: usize = usize::MAX;

    /// A hint for a stage with exactly `n` items left.
    #[inline]
    pub const fn exact(n: usize) -> Self {
        SizeHint {
            lower: n,
            upper: Some(n),
        }
    }

    /// A hint carrying no information: zero to unbounded.
    #[inline]
    pub const fn unknown() -> Self {
        SizeHint {
            lower: 0,
            upper: None,
        }
    }

    #[inline]
    pub const fn new(lower: usize, upper: Option<usize>) -> Self {
        SizeHint { lower, upper }
    }

    /// Whether the bounds pin the remaining count to a single value.
    ///
    /// Note that this being `true` at one point in time does not by itself
    /// make a stage exact-sized; see
    /// [`ExactSizePipeline`](crate::ExactSizePipeline) for the structural
    /// guarantee.
    #[inline]
    pub fn is_tight(&self) -> bool {
        self.upper == Some(self.lower)
    }

    /// Elementwise sum of two hints. An absent upper bound on either side
    /// poisons the sum's upper bound to absent.
    ///
    /// Used by [`chain`](crate::Pipeline::chain).
    #[inline]
    pub fn add(self, other: SizeHint) -> SizeHint {
        SizeHint {
            lower: self.lower.saturating_add(other.lower),
            upper: match (self.upper, other.upper) {
                (Some(a), Some(b)) => Some(a.saturating_add(b)),
                _ => None,
            },
        }
    }

    /// Saturating subtraction of `n` from both bounds.
    ///
    /// Used by [`skip`](crate::Pipeline::skip) and friends.
    #[inline]
    pub fn sub(self, n: usize) -> SizeHint {
        SizeHint {
            lower: self.lower.saturating_sub(n),
            upper: self.upper.map(|u| u.saturating_sub(n)),
        }
    }

    /// Elementwise minimum of two hints, treating an absent upper bound as
    /// infinite.
    ///
    /// Used by [`zip`](crate::Pipeline::zip).
    #[inline]
    pub fn min(self, other: SizeHint) -> SizeHint {
        SizeHint {
            lower: self.lower.min(other.lower),
            upper: min_upper(self.upper, other.upper),
        }
    }

    /// Ceiling division of both bounds by `chunk`.
    ///
    /// Used by [`chunked`](crate::Pipeline::chunked) and
    /// [`step_by`](crate::Pipeline::step_by).
    #[inline]
    pub fn div_ceil(self, chunk: usize) -> SizeHint {
        SizeHint {
            lower: self.lower.div_ceil(chunk),
            upper: self.upper.map(|u| u.div_ceil(chunk)),
        }
    }

    /// Number of complete `size`-wide windows advancing by `step`, applied to
    /// both bounds: `(len - size) / step + 1`, or 0 when `len < size`.
    #[inline]
    pub fn windows(self, size: usize, step: usize) -> SizeHint {
        let count = |len: usize| {
            if len < size {
                0
            } else {
                (len - size) / step + 1
            }
        };
        SizeHint {
            lower: count(self.lower),
            upper: self.upper.map(count),
        }
    }

    /// The size a collect target should reserve for: the upper bound if
    /// known, otherwise the lower bound (0 if the lower bound is the
    /// infinite sentinel).
    #[inline]
    pub fn expected_size(&self) -> usize {
        match self.upper {
            Some(upper) => upper,
            None if self.lower == Self::INFINITE => 0,
            None => self.lower,
        }
    }
}

impl Default for SizeHint {
    #[inline]
    fn default() -> Self {
        SizeHint::unknown()
    }
}

/// Minimum of two optional upper bounds, where [`None`] counts as infinite.
#[inline]
pub(crate) fn min_upper(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (Some(a), None) => Some(a),
        (None, b) => b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_poisons_upper() {
        let bounded = SizeHint::exact(3);
        let unbounded = SizeHint::new(2, None);

        assert_eq!(bounded.add(SizeHint::exact(4)), SizeHint::exact(7));
        assert_eq!(bounded.add(unbounded), SizeHint::new(5, None));
        assert_eq!(unbounded.add(bounded), SizeHint::new(5, None));
    }

    #[test]
    fn sub_saturates() {
        assert_eq!(SizeHint::exact(3).sub(5), SizeHint::exact(0));
        assert_eq!(SizeHint::new(7, None).sub(3), SizeHint::new(4, None));
    }

    #[test]
    fn min_treats_none_as_infinite() {
        let a = SizeHint::new(1, Some(10));
        let b = SizeHint::new(4, None);
        assert_eq!(a.min(b), SizeHint::new(1, Some(10)));
        assert_eq!(b.min(a), SizeHint::new(1, Some(10)));
    }

    #[test]
    fn windows_counts() {
        // 6 items, windows of 2 stepping by 2 -> 3 windows.
        assert_eq!(SizeHint::exact(6).windows(2, 2), SizeHint::exact(3));
        // 6 items, windows of 3 stepping by 1 -> 4 windows.
        assert_eq!(SizeHint::exact(6).windows(3, 1), SizeHint::exact(4));
        // 2 items cannot fit a window of 3.
        assert_eq!(SizeHint::exact(2).windows(3, 1), SizeHint::exact(0));
    }

    #[test]
    fn expected_size_prefers_upper() {
        assert_eq!(SizeHint::new(2, Some(5)).expected_size(), 5);
        assert_eq!(SizeHint::new(2, None).expected_size(), 2);
        assert_eq!(
            SizeHint::new(SizeHint::INFINITE, None).expected_size(),
            0,
            "endless pipelines must not request an endless reservation"
        );
    }
}
