use crate::sequence::Sequence;
use crate::types::{SearchError, SearchRange};

/// Checks that `[start, start + length)` is a legal window over `len`
/// elements.
///
/// An empty collection accepts exactly `start == 0, length == 0`. For a
/// non-empty one, `start` must address an existing element, so
/// `start == len` is rejected even with a zero length.
pub fn validate_range(len: usize, start: isize, length: isize) -> Result<SearchRange, SearchError> {
    let result = check_range(len, start, length);
    if let Err(err) = &result {
        log::trace!("rejecting search window start={start} length={length} over {len} elements: {err}");
    }
    result
}

fn check_range(len: usize, start: isize, length: isize) -> Result<SearchRange, SearchError> {
    let signed_len = isize::try_from(len).map_err(|_| SearchError::CollectionTooLarge(len))?;

    let start_in_bounds = start >= 0 && (start < signed_len || (signed_len == 0 && start == 0));
    if !start_in_bounds {
        return Err(SearchError::IndexOutOfRange { start, len });
    }
    if length < 0 {
        return Err(SearchError::LengthOutOfRange { length });
    }
    if signed_len - start < length {
        return Err(SearchError::RangeExceedsBounds { start, length, len });
    }

    Ok(SearchRange::new(start as usize, length as usize))
}

/// Window covering the whole collection.
pub fn whole_range<S>(collection: &S) -> Result<SearchRange, SearchError>
where
    S: Sequence + ?Sized,
{
    let len = collection.len();
    // An oversized length is reported as CollectionTooLarge by the range check.
    validate_range(len, 0, isize::try_from(len).unwrap_or(isize::MAX))
}

pub fn require_collection<S: ?Sized>(collection: Option<&S>) -> Result<&S, SearchError> {
    collection.ok_or_else(|| {
        log::trace!("rejecting search: no collection supplied");
        SearchError::MissingCollection
    })
}

pub fn require_selector<F>(selector: Option<F>) -> Result<F, SearchError> {
    selector.ok_or_else(|| {
        log::trace!("rejecting key search: no key selector supplied");
        SearchError::MissingSelector
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_collection_accepts_only_the_empty_window() {
        assert_eq!(validate_range(0, 0, 0), Ok(SearchRange::new(0, 0)));
        assert_eq!(
            validate_range(0, 1, 0),
            Err(SearchError::IndexOutOfRange { start: 1, len: 0 })
        );
        assert_eq!(
            validate_range(0, 0, 1),
            Err(SearchError::RangeExceedsBounds { start: 0, length: 1, len: 0 })
        );
    }

    #[test]
    fn start_checked_before_length() {
        assert_eq!(
            validate_range(10, -1, -1),
            Err(SearchError::IndexOutOfRange { start: -1, len: 10 })
        );
        assert_eq!(
            validate_range(10, 3, -1),
            Err(SearchError::LengthOutOfRange { length: -1 })
        );
    }

    #[test]
    fn huge_length_does_not_overflow() {
        assert_eq!(
            validate_range(10, 5, isize::MAX),
            Err(SearchError::RangeExceedsBounds { start: 5, length: isize::MAX, len: 10 })
        );
    }

    #[test]
    fn too_large_for_signed_encoding() {
        let len = isize::MAX as usize + 1;
        assert_eq!(validate_range(len, 0, 0), Err(SearchError::CollectionTooLarge(len)));
    }
}
