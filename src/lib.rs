//! pintidy - Pinboard tag consolidation utility
//!
//! Fetches every bookmark on a Pinboard account and folds tags slated for
//! consolidation into their parent tags, archiving the removed tag text in
//! the searchable notes field.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::PintidyError;
