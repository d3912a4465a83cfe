//! Single-bookmark tag consolidation.

use crate::domain::{Bookmark, TagMap};
use crate::error::Result;

/// Move one mapped tag on a bookmark into its parent tag.
///
/// When the bookmark does not carry `old_tag` the bookmark is left untouched
/// and `Ok(false)` is returned. Otherwise the old tag text is appended to the
/// notes field, the old tag is removed, and the parent tag from `tag_map` is
/// added unless already present. Returns `Ok(true)` when the bookmark was
/// mutated. Errors only if `old_tag` has no mapping, which callers iterating
/// over `TagMap::mapped_tags` rule out.
pub fn consolidate_tag(bookmark: &mut Bookmark, old_tag: &str, tag_map: &TagMap) -> Result<bool> {
    if !bookmark.has_tag(old_tag) {
        return Ok(false);
    }

    let parent = tag_map.replacement_for(old_tag)?.to_string();

    // Keep the old tag text searchable through the notes field.
    bookmark.push_note(old_tag);
    bookmark.remove_tag(old_tag);
    bookmark.add_tag(&parent);

    Ok(true)
}
