//! Binary search over ordered random-access sequences.
//!
//! `nsearch` finds an element by direct comparison, by a caller-supplied
//! ordering, or by a derived sort key, over the whole sequence or any
//! sub-window of it. Every entry point validates its arguments, adapts the
//! requested ordering into a single element-vs-target comparison, and runs
//! the same search loop.
//!
//! Results use the familiar complement encoding: a non-negative value is the
//! index of a matching element, a negative value `r` means "not found" and
//! `!r` is the index at which the target would be inserted.
//!
//! ```
//! use nsearch::BinarySearchExt;
//!
//! let odd: Vec<i32> = (1..100).filter(|i| i % 2 != 0).collect();
//! assert_eq!(odd.search(&10), Ok(!5));
//! ```

pub mod search;
pub mod sequence;
pub mod types;

pub use search::{
    BinarySearchExt, CaseInsensitive, Comparer, NaturalOrder, ReverseOrder, SearchRequest,
};
pub use sequence::Sequence;
pub use types::{SearchError, SearchOutcome, SearchRange};
