//! List tags use case

use crate::error::Result;
use crate::infrastructure::BookmarkStore;
use std::collections::BTreeSet;

/// Collect the sorted, deduplicated set of every tag on the account.
pub fn account_tags<S: BookmarkStore>(store: &S) -> Result<Vec<String>> {
    let bookmarks = store.fetch_all()?;

    let mut tags = BTreeSet::new();
    for bookmark in bookmarks {
        for tag in bookmark.tags {
            tags.insert(tag);
        }
    }

    Ok(tags.into_iter().collect())
}

/// Service for listing all tags in use on the account.
pub struct ListTagsService<S: BookmarkStore> {
    store: S,
}

impl<S: BookmarkStore> ListTagsService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn execute(&self) -> Result<Vec<String>> {
        account_tags(&self.store)
    }
}
