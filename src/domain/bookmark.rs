//! Bookmark model

use chrono::{DateTime, Utc};

/// A single Pinboard bookmark held in memory during a pass.
///
/// The tag collection keeps server order but is mutated only through helpers
/// that preserve uniqueness. The notes field is the searchable "extended"
/// text; consolidation appends removed tag text to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bookmark {
    pub url: String,
    pub title: String,
    pub notes: String,
    pub tags: Vec<String>,
    pub time: Option<DateTime<Utc>>,
}

impl Bookmark {
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Bookmark {
            url: url.into(),
            title: title.into(),
            notes: String::new(),
            tags: Vec::new(),
            time: None,
        }
    }

    /// Check whether the bookmark carries the given tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Add a tag unless it is already present.
    pub fn add_tag(&mut self, tag: &str) {
        if !self.has_tag(tag) {
            self.tags.push(tag.to_string());
        }
    }

    /// Remove every occurrence of the given tag.
    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }

    /// Append text to the notes field.
    ///
    /// Verbatim when notes is empty, otherwise separated by a single space.
    /// Append-only: repeated pushes of the same text accumulate.
    pub fn push_note(&mut self, text: &str) {
        if self.notes.is_empty() {
            self.notes = text.to_string();
        } else {
            self.notes.push(' ');
            self.notes.push_str(text);
        }
    }
}
