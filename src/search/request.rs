use crate::search::compare::{direct, key_to_element, key_to_value, Comparer};
use crate::search::kernel::search_window;
use crate::search::validation::{require_collection, require_selector, validate_range, whole_range};
use crate::sequence::Sequence;
use crate::types::{SearchError, SearchRange};

/// A search whose collection, window and selector may each be absent until
/// the search runs.
///
/// Every entry point of [`BinarySearchExt`](crate::BinarySearchExt) goes
/// through here. Arguments are checked in a fixed order (collection, window,
/// selector) and a failure means no comparison was made.
pub struct SearchRequest<'a, S: ?Sized> {
    collection: Option<&'a S>,
    window: Option<(isize, isize)>,
}

impl<'a, S> SearchRequest<'a, S>
where
    S: Sequence + ?Sized,
{
    pub fn new(collection: Option<&'a S>) -> Self {
        Self {
            collection,
            window: None,
        }
    }

    pub fn over(collection: &'a S) -> Self {
        Self::new(Some(collection))
    }

    /// Restrict the search to `[start, start + length)`. Without a window the
    /// whole collection is searched.
    pub fn window(mut self, start: isize, length: isize) -> Self {
        self.window = Some((start, length));
        self
    }

    fn resolve(&self) -> Result<(&'a S, SearchRange), SearchError> {
        let collection = require_collection(self.collection)?;
        let range = match self.window {
            Some((start, length)) => validate_range(collection.len(), start, length)?,
            None => whole_range(collection)?,
        };
        Ok((collection, range))
    }

    /// Search for an element equal to `target` under `ordering`.
    pub fn value<C>(&self, target: &S::Item, ordering: C) -> Result<isize, SearchError>
    where
        C: Comparer<S::Item>,
    {
        let (collection, range) = self.resolve()?;
        Ok(search_window(collection, range, direct(&ordering, target)))
    }

    /// Search for an element whose selected key equals `key`.
    pub fn key<K, F, C>(&self, key: &K, selector: Option<F>, ordering: C) -> Result<isize, SearchError>
    where
        F: Fn(&S::Item) -> K,
        C: Comparer<K>,
    {
        let (collection, range) = self.resolve()?;
        let selector = require_selector(selector)?;
        Ok(search_window(collection, range, key_to_value(&selector, &ordering, key)))
    }

    /// Search for an element whose selected key equals the key of `target`.
    pub fn element<K, F, C>(
        &self,
        target: &S::Item,
        selector: Option<F>,
        ordering: C,
    ) -> Result<isize, SearchError>
    where
        F: Fn(&S::Item) -> K,
        C: Comparer<K>,
    {
        let (collection, range) = self.resolve()?;
        let selector = require_selector(selector)?;
        Ok(search_window(collection, range, key_to_element(&selector, &ordering, target)))
    }
}
