//! Tag mapping table

use crate::error::{PintidyError, Result};
use std::collections::{BTreeMap, BTreeSet};

/// Association from tags slated for consolidation to their parent tags,
/// plus the set of terminal parents that are never remapped themselves.
///
/// Built once from configuration; the pass treats it as read-only. By
/// construction a tag should not appear both as a mapping key and as a
/// terminal parent (not enforced here).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagMap {
    mappings: BTreeMap<String, String>,
    terminal_parents: BTreeSet<String>,
}

impl TagMap {
    pub fn new(
        mappings: BTreeMap<String, String>,
        terminal_parents: BTreeSet<String>,
    ) -> Self {
        TagMap {
            mappings,
            terminal_parents,
        }
    }

    /// Look up the parent tag for a mapped tag.
    pub fn replacement_for(&self, tag: &str) -> Result<&str> {
        self.mappings
            .get(tag)
            .map(String::as_str)
            .ok_or_else(|| PintidyError::UnmappedTag(tag.to_string()))
    }

    /// Check whether a tag is slated for consolidation.
    pub fn is_mapped(&self, tag: &str) -> bool {
        self.mappings.contains_key(tag)
    }

    /// Iterate over every tag slated for consolidation, in sorted order.
    pub fn mapped_tags(&self) -> impl Iterator<Item = &str> {
        self.mappings.keys().map(String::as_str)
    }

    /// All parent tags: mapping targets plus the terminal parent set.
    pub fn parent_tags(&self) -> BTreeSet<&str> {
        self.mappings
            .values()
            .map(String::as_str)
            .chain(self.terminal_parents.iter().map(String::as_str))
            .collect()
    }

    /// Filter a tag list down to tags this table knows nothing about:
    /// neither mapped nor a parent. Diagnostic helper for the `unmapped`
    /// command.
    pub fn unmapped_tags<'a>(&self, tags: &'a [String]) -> Vec<&'a str> {
        let parents = self.parent_tags();
        tags.iter()
            .map(String::as_str)
            .filter(|tag| !self.is_mapped(tag) && !parents.contains(*tag))
            .collect()
    }

    /// Register a new consolidation pair.
    pub fn add_mapping(&mut self, tag: &str, parent: &str) {
        self.mappings.insert(tag.to_string(), parent.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }
}
