use thiserror::Error;

/// Argument failures. All of them are raised before the first comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("Collection cannot be absent")]
    MissingCollection,

    #[error("Index {start} must be within the bounds of the collection (length {len})")]
    IndexOutOfRange { start: isize, len: usize },

    #[error("Length {length} must be equal to or greater than zero")]
    LengthOutOfRange { length: isize },

    #[error("Range of {length} elements starting at {start} exceeds collection length {len}")]
    RangeExceedsBounds {
        start: isize,
        length: isize,
        len: usize,
    },

    #[error("Key selector cannot be absent")]
    MissingSelector,

    #[error("Collection length {0} cannot be encoded in a signed search result")]
    CollectionTooLarge(usize),
}
