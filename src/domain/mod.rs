//! Domain Models
//!
//! Static, compiled-in content: the project catalog and site copy.

pub mod catalog;
pub mod content;
pub mod project;

pub use catalog::ProjectCatalog;
pub use content::Bilingual;
pub use project::{ChangelogEntry, LocalizedText, ProjectDetail, ProjectSummary};
