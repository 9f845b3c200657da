//! The chaining stages returned by [`Pipeline`](crate::Pipeline)'s methods.
//!
//! One stage per file. Streaming stages hold at most a constant amount of
//! lookahead; buffering stages ([`Sort`], [`GroupBy`], [`Reverse`]) drain
//! their upstream completely on the first pull and serve from a cache after
//! that.

mod alternate;
mod cast;
mod chain;
mod chunked;
mod chunked_exact;
mod copied;
mod filter;
mod filter_map;
mod flag_last;
mod flat_map;
mod group_by;
mod indexed;
mod intersperse;
mod map;
mod modify;
mod reverse;
mod skip;
mod skip_while;
mod sort;
mod step_by;
mod take;
mod take_while;
mod unique;
mod windows;
mod zip;

pub use alternate::{alternate, Alternate, AlternateBundle};
pub use cast::Cast;
pub use chain::Chain;
pub use chunked::Chunked;
pub use chunked_exact::ChunkedExact;
pub use copied::{Cloned, Copied};
pub use filter::Filter;
pub use filter_map::FilterMap;
pub use flag_last::FlagLast;
pub use flat_map::{FlatMap, Flatten};
pub use group_by::GroupBy;
pub use indexed::Indexed;
pub use intersperse::Intersperse;
pub use map::Map;
pub use modify::Modify;
pub use reverse::{Rev, Reverse};
pub use skip::Skip;
pub use skip_while::SkipWhile;
pub use sort::{Sort, SortBy, SortByKey, SortOrder};
pub use step_by::StepBy;
pub use take::Take;
pub use take_while::TakeWhile;
pub use unique::{Unique, UniqueBy};
pub use windows::{ContiguousPipeline, Windows};
pub use zip::Zip;
