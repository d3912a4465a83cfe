//! Consolidation pass use case

use crate::domain::{consolidate_tag, TagMap};
use crate::error::Result;
use crate::infrastructure::BookmarkStore;
use log::info;
use std::collections::BTreeMap;

/// Substitutions performed for one mapped tag during a pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagChange {
    pub old_tag: String,
    pub parent: String,
    pub bookmarks: usize,
}

/// Summary of one consolidation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsolidateReport {
    pub fetched: usize,
    pub changed_bookmarks: usize,
    pub saves: usize,
    pub changes: Vec<TagChange>,
}

/// Service running the full consolidation pass over an account.
pub struct ConsolidateService<S: BookmarkStore> {
    store: S,
    tag_map: TagMap,
}

impl<S: BookmarkStore> ConsolidateService<S> {
    pub fn new(store: S, tag_map: TagMap) -> Self {
        Self { store, tag_map }
    }

    /// Fetch the account snapshot once and consolidate every mapped tag on
    /// every bookmark. A bookmark is saved once per applied tag, so one
    /// carrying several mapped tags is written several times.
    pub fn execute(&self) -> Result<ConsolidateReport> {
        let mut bookmarks = self.store.fetch_all()?;
        let fetched = bookmarks.len();
        info!(
            "consolidating {} mapped tags across {} bookmarks",
            self.tag_map.len(),
            fetched
        );

        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        let mut saves = 0usize;
        let mut changed_bookmarks = 0usize;

        for bookmark in &mut bookmarks {
            let mut changed = false;

            for old_tag in self.tag_map.mapped_tags() {
                if consolidate_tag(bookmark, old_tag, &self.tag_map)? {
                    self.store.save(bookmark)?;
                    saves += 1;
                    *counts.entry(old_tag).or_insert(0) += 1;
                    changed = true;
                }
            }

            if changed {
                changed_bookmarks += 1;
            }
        }

        let mut changes = Vec::with_capacity(counts.len());
        for (old_tag, count) in counts {
            let parent = self.tag_map.replacement_for(old_tag)?.to_string();
            changes.push(TagChange {
                old_tag: old_tag.to_string(),
                parent,
                bookmarks: count,
            });
        }

        Ok(ConsolidateReport {
            fetched,
            changed_bookmarks,
            saves,
            changes,
        })
    }
}
