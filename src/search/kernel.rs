use std::cmp::Ordering;

use crate::sequence::Sequence;
use crate::types::SearchRange;

/// The search loop shared by every entry point.
///
/// `compare` orders an element against the (already bound) target. Returns
/// the index of some matching element inside `window`, or the complement of
/// the insertion point when none matches. With duplicates, whichever match
/// the descent reaches first is returned.
pub(crate) fn search_window<S, F>(collection: &S, window: SearchRange, mut compare: F) -> isize
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item) -> Ordering,
{
    // Validation guarantees both bounds fit in isize.
    let mut lower = window.start as isize;
    let mut upper = lower + window.length as isize - 1;

    while lower <= upper {
        let mid = lower + ((upper - lower) >> 1);

        match compare(collection.at(mid as usize)) {
            Ordering::Equal => return mid,
            Ordering::Less => lower = mid + 1,
            Ordering::Greater => upper = mid - 1,
        }
    }

    !lower
}
