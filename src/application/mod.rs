//! Application layer - Use cases and orchestration

pub mod consolidate;
pub mod list_tags;
pub mod unmapped;

pub use consolidate::{ConsolidateReport, ConsolidateService, TagChange};
pub use list_tags::ListTagsService;
pub use unmapped::UnmappedService;
