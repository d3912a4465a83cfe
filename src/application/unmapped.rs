//! Unmapped tag diagnostic use case

use crate::application::list_tags::account_tags;
use crate::domain::TagMap;
use crate::error::Result;
use crate::infrastructure::BookmarkStore;

/// Service listing account tags the mapping table does not cover:
/// tags that are neither slated for consolidation nor known parents.
pub struct UnmappedService<S: BookmarkStore> {
    store: S,
    tag_map: TagMap,
}

impl<S: BookmarkStore> UnmappedService<S> {
    pub fn new(store: S, tag_map: TagMap) -> Self {
        Self { store, tag_map }
    }

    pub fn execute(&self) -> Result<Vec<String>> {
        let tags = account_tags(&self.store)?;
        Ok(self
            .tag_map
            .unmapped_tags(&tags)
            .into_iter()
            .map(str::to_string)
            .collect())
    }
}
