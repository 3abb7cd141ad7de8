pub mod compare;
mod kernel;
pub mod request;
pub mod validation;

pub use compare::{CaseInsensitive, Comparer, NaturalOrder, ReverseOrder};
pub use request::SearchRequest;

use crate::sequence::Sequence;
use crate::types::SearchError;

/// Binary search methods for every [`Sequence`].
///
/// The sequence (or the requested window of it) must be sorted under the
/// ordering in use. Each method returns the index of a matching element, or
/// the bitwise complement of the insertion point when nothing matches.
/// Methods without a `_with` suffix use [`NaturalOrder`].
///
/// * `search*` compares elements with the target directly.
/// * `search*_by_key*` compares `selector(element)` with an already derived key.
/// * `search*_by_value*` compares `selector(element)` with `selector(target)`.
pub trait BinarySearchExt: Sequence {
    fn search(&self, target: &Self::Item) -> Result<isize, SearchError>
    where
        Self::Item: Ord,
    {
        SearchRequest::over(self).value(target, NaturalOrder)
    }

    fn search_with<C>(&self, target: &Self::Item, ordering: C) -> Result<isize, SearchError>
    where
        C: Comparer<Self::Item>,
    {
        SearchRequest::over(self).value(target, ordering)
    }

    /// Search only `[start, start + length)`. Matches outside the window are
    /// never reported.
    fn search_range(&self, start: isize, length: isize, target: &Self::Item) -> Result<isize, SearchError>
    where
        Self::Item: Ord,
    {
        SearchRequest::over(self)
            .window(start, length)
            .value(target, NaturalOrder)
    }

    fn search_range_with<C>(
        &self,
        start: isize,
        length: isize,
        target: &Self::Item,
        ordering: C,
    ) -> Result<isize, SearchError>
    where
        C: Comparer<Self::Item>,
    {
        SearchRequest::over(self)
            .window(start, length)
            .value(target, ordering)
    }

    fn search_by_key<K, F>(&self, key: &K, selector: F) -> Result<isize, SearchError>
    where
        K: Ord,
        F: Fn(&Self::Item) -> K,
    {
        SearchRequest::over(self).key(key, Some(selector), NaturalOrder)
    }

    fn search_by_key_with<K, F, C>(&self, key: &K, selector: F, ordering: C) -> Result<isize, SearchError>
    where
        F: Fn(&Self::Item) -> K,
        C: Comparer<K>,
    {
        SearchRequest::over(self).key(key, Some(selector), ordering)
    }

    fn search_range_by_key<K, F>(
        &self,
        start: isize,
        length: isize,
        key: &K,
        selector: F,
    ) -> Result<isize, SearchError>
    where
        K: Ord,
        F: Fn(&Self::Item) -> K,
    {
        SearchRequest::over(self)
            .window(start, length)
            .key(key, Some(selector), NaturalOrder)
    }

    fn search_range_by_key_with<K, F, C>(
        &self,
        start: isize,
        length: isize,
        key: &K,
        selector: F,
        ordering: C,
    ) -> Result<isize, SearchError>
    where
        F: Fn(&Self::Item) -> K,
        C: Comparer<K>,
    {
        SearchRequest::over(self)
            .window(start, length)
            .key(key, Some(selector), ordering)
    }

    /// The selector runs on both the element and `target` at every step.
    fn search_by_value<K, F>(&self, target: &Self::Item, selector: F) -> Result<isize, SearchError>
    where
        K: Ord,
        F: Fn(&Self::Item) -> K,
    {
        SearchRequest::over(self).element(target, Some(selector), NaturalOrder)
    }

    fn search_by_value_with<K, F, C>(
        &self,
        target: &Self::Item,
        selector: F,
        ordering: C,
    ) -> Result<isize, SearchError>
    where
        F: Fn(&Self::Item) -> K,
        C: Comparer<K>,
    {
        SearchRequest::over(self).element(target, Some(selector), ordering)
    }

    fn search_range_by_value<K, F>(
        &self,
        start: isize,
        length: isize,
        target: &Self::Item,
        selector: F,
    ) -> Result<isize, SearchError>
    where
        K: Ord,
        F: Fn(&Self::Item) -> K,
    {
        SearchRequest::over(self)
            .window(start, length)
            .element(target, Some(selector), NaturalOrder)
    }

    fn search_range_by_value_with<K, F, C>(
        &self,
        start: isize,
        length: isize,
        target: &Self::Item,
        selector: F,
        ordering: C,
    ) -> Result<isize, SearchError>
    where
        F: Fn(&Self::Item) -> K,
        C: Comparer<K>,
    {
        SearchRequest::over(self)
            .window(start, length)
            .element(target, Some(selector), ordering)
    }
}

impl<S: Sequence + ?Sized> BinarySearchExt for S {}
