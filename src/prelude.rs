//! Everything needed to build and drain pipelines, in one import.
//!
//! ```
//! use pullstream::prelude::*;
//! ```

pub use crate::collect::{CollectTarget, FromPipeline};
pub use crate::ops::ContiguousPipeline;
pub use crate::pipeline::{DoubleEndedPipeline, ExactSizePipeline, Pipeline};
pub use crate::size_hint::SizeHint;
pub use crate::sources::{SourceContainer, SourceContainerMut};
