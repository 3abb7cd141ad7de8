use serde::{Deserialize, Serialize};

use crate::types::SearchError;

/// Decoded form of a complement-encoded search result.
///
/// `Found` holds the index of a matching element, `Missing` the index at
/// which the target would be inserted to keep the window ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "index", rename_all = "snake_case")]
pub enum SearchOutcome {
    Found(usize),
    Missing(usize),
}

impl SearchOutcome {
    pub fn decode(encoded: isize) -> Self {
        if encoded >= 0 {
            SearchOutcome::Found(encoded as usize)
        } else {
            SearchOutcome::Missing((!encoded) as usize)
        }
    }

    /// Back to the encoded integer: the index itself, or `!insertion_point`.
    /// Indices above `isize::MAX` have no encoding.
    pub fn encode(self) -> Result<isize, SearchError> {
        let index = self.index();
        let signed = isize::try_from(index).map_err(|_| SearchError::CollectionTooLarge(index))?;
        Ok(if self.is_found() { signed } else { !signed })
    }

    pub fn is_found(self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    /// The match index, or the insertion point when nothing matched.
    pub fn index(self) -> usize {
        match self {
            SearchOutcome::Found(index) | SearchOutcome::Missing(index) => index,
        }
    }

    /// Same convention as `slice::binary_search`.
    pub fn into_result(self) -> Result<usize, usize> {
        match self {
            SearchOutcome::Found(index) => Ok(index),
            SearchOutcome::Missing(insertion) => Err(insertion),
        }
    }
}

impl From<isize> for SearchOutcome {
    fn from(encoded: isize) -> Self {
        SearchOutcome::decode(encoded)
    }
}

impl TryFrom<SearchOutcome> for isize {
    type Error = SearchError;

    fn try_from(outcome: SearchOutcome) -> Result<Self, Self::Error> {
        outcome.encode()
    }
}
