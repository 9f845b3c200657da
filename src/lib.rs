//! Lazy, composable pull-based transformation pipelines over your
//! collections.
//!
//! A pipeline is built by chaining stages onto a source and runs only when
//! a consumer pulls from it; each pull moves exactly one item through the
//! chain, so nothing is computed for items that are never asked for:
//!
//! ```
//! use pullstream::prelude::*;
//!
//! let input = vec![1, 2, 3, 4, 5, 6];
//! let output: Vec<f64> = pullstream::from(input)
//!     .filter(|n| n % 2 == 0)
//!     .map(|n| n as f64 / 2.0)
//!     .collect();
//!
//! assert_eq!(output, [1.0, 2.0, 3.0]);
//! ```
//!
//! # Three ways in
//!
//! A container can feed a pipeline by value, by shared reference, or by
//! mutable reference; the choice is the entry point, not a method deep in
//! the chain:
//!
//! - [`from`] consumes the container and yields owned items,
//! - [`from_ref`] borrows it and yields `&T` (pairs for maps),
//! - [`from_mut`] borrows it mutably and yields `&mut T`, so edits land in
//!   the container itself.
//!
//! ```
//! use pullstream::prelude::*;
//!
//! let mut nums = vec![1, 2, 3];
//! pullstream::from_mut(&mut nums).for_each(|n| *n *= 10);
//! assert_eq!(nums, [10, 20, 30]);
//! ```
//!
//! Any type implementing [`SourceContainer`] works; the standard
//! sequences, sets and maps already do. Sources without a container behind
//! them are free functions: [`empty`], [`once`], [`repeat`],
//! [`repeat_n`], [`range`] and [`from_fn`].
//!
//! # Capabilities
//!
//! Stages advertise what they can structurally guarantee through extra
//! traits: [`DoubleEndedPipeline`] for pulling from the back,
//! [`ExactSizePipeline`] for a precisely known length, and
//! [`ContiguousPipeline`] for slice-backed sources, which unlocks the
//! zero-copy [`windows`](ContiguousPipeline::windows) stage. A method like
//! [`rev`](Pipeline::rev) is simply not callable on a pipeline whose shape
//! lost double-endedness; the buffering [`reverse`](Pipeline::reverse) is
//! always there as the fallback.
//!
//! Every stage also keeps a [`SizeHint`] up to date, which
//! [`collect`](Pipeline::collect) uses to reserve capacity before
//! draining.

mod bridge;
mod collect;
mod pipeline;
mod size_hint;

pub mod ops;
pub mod prelude;
pub mod sources;

#[cfg(test)]
pub(crate) mod test_utils;

pub use bridge::PipeIter;
pub use collect::{CollectTarget, FromPipeline};
pub use ops::{alternate, ContiguousPipeline, SortOrder};
pub use pipeline::{DoubleEndedPipeline, ExactSizePipeline, Pipeline};
pub use size_hint::SizeHint;
pub use sources::generators::{
    empty, from_fn, once, range, repeat, repeat_n, Empty, FromFn, Once, Range, RangeStep, Repeat,
    RepeatN,
};
pub use sources::{from, from_mut, from_ref, SourceContainer, SourceContainerMut, Src};

/// Asserts that a value is a [`Pipeline`] and hands it back.
///
/// Compile-time plumbing for tests and doc examples; does nothing at
/// runtime.
#[inline]
pub fn assert_pipeline<P: Pipeline>(pipeline: P) -> P {
    pipeline
}

/// Asserts that a value is a [`DoubleEndedPipeline`] and hands it back.
#[inline]
pub fn assert_double_ended<P: DoubleEndedPipeline>(pipeline: P) -> P {
    pipeline
}

/// Asserts that a value is an [`ExactSizePipeline`] and hands it back.
#[inline]
pub fn assert_exact_size<P: ExactSizePipeline>(pipeline: P) -> P {
    pipeline
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use crate::test_utils::drain_checking_hints;
    use crate::SortOrder;

    #[test]
    fn capability_plumbing_across_stage_shapes() {
        // Mapping keeps both capabilities; filtering drops exactness but
        // not double-endedness; sorting restores double-endedness.
        let nums = vec![4, 1, 3, 2];

        crate::assert_exact_size(crate::assert_double_ended(
            crate::from_ref(&nums).map(|n| n * 2),
        ));
        crate::assert_double_ended(crate::from_ref(&nums).filter(|n| **n > 1));
        crate::assert_double_ended(crate::from(nums).sort(SortOrder::Ascending));
    }

    #[test]
    fn hints_hold_through_a_long_chain() {
        let items = drain_checking_hints(
            crate::range(0, 99, 1)
                .map(|n| n * 3)
                .filter(|n| n % 2 == 0)
                .skip(3)
                .take(20)
                .chunked(4)
                .flatten()
                .indexed(),
        );
        assert_eq!(items.len(), 20);
    }

    #[test]
    fn hints_hold_through_buffering_stages() {
        drain_checking_hints(crate::from(vec![5, 3, 5, 1]).sort(SortOrder::Ascending));
        drain_checking_hints(crate::from(vec![5, 3, 5, 1]).group_by(|&n| n));
        drain_checking_hints(crate::from(vec![5, 3, 5, 1]).reverse());
        drain_checking_hints(crate::from(vec![5, 3, 5, 1]).unique());
    }

    #[test]
    fn hints_hold_through_multi_source_stages() {
        drain_checking_hints(crate::from(vec![1, 2, 3]).zip(crate::from(vec![4, 5])));
        drain_checking_hints(crate::from(vec![1, 2]).chain(crate::from(vec![3])));
        drain_checking_hints(crate::from(vec![1, 2, 3]).alternate(crate::from(vec![4, 5])));
        drain_checking_hints(crate::from(vec![1, 2, 3]).intersperse(crate::from(vec![0])));
    }

    #[test]
    fn readme_style_end_to_end() {
        let words = vec!["stream", "of", "lazy", "values"];
        let summary: String = crate::from(words)
            .filter(|w| w.len() > 2)
            .intersperse(crate::repeat(", "))
            .collect();
        assert_eq!(summary, "stream, lazy, values");
    }
}
