//! Project Records
//!
//! Two-tier content records for a showcased project: the summary shown on a
//! card, and the extended detail shown on the project page.

use crate::constants::{DEFAULT_PROJECT_VERSION, PLACEHOLDER_URL};
use crate::states::Language;

/// A pair of Korean/English strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedText {
    pub ko: String,
    pub en: String,
}

impl LocalizedText {
    pub fn new(ko: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            ko: ko.into(),
            en: en.into(),
        }
    }

    /// Variant matching `language`
    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::Ko => &self.ko,
            Language::En => &self.en,
        }
    }
}

/// Card-level record, one per showcased project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSummary {
    /// Unique, stable identifier
    pub id: String,
    /// Glyph shown on the card
    pub icon: String,
    pub title: LocalizedText,
    pub description: LocalizedText,
    /// Download URL, or `#` when nothing is published
    pub download_url: String,
    /// Muted on screen; detail and download affordances are inert
    pub disabled: bool,
}

impl ProjectSummary {
    /// Download URL if one is actually published
    pub fn download_link(&self) -> Option<&str> {
        published(&self.download_url)
    }

    /// Whether the card's "view details" and "download" controls respond
    pub fn is_interactive(&self) -> bool {
        !self.disabled
    }
}

/// One release in a project's changelog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogEntry {
    /// Free-form version label
    pub version: String,
    /// Free-form date label (may be a word such as "개발중")
    pub date: String,
    pub changes: Vec<LocalizedText>,
}

/// Extended record backing the project page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDetail {
    pub id: String,
    pub icon: String,
    pub title: LocalizedText,
    pub description: LocalizedText,
    pub detail_description: LocalizedText,
    /// Free-form version label, not necessarily semver
    pub version: String,
    pub download_url: String,
    /// Image references in display order
    pub screenshots: Vec<String>,
    pub features: Vec<LocalizedText>,
    pub changelog: Vec<ChangelogEntry>,
}

impl ProjectDetail {
    /// Minimal detail derived from a summary that has no curated record
    pub fn synthesized(summary: &ProjectSummary) -> Self {
        Self {
            id: summary.id.clone(),
            icon: summary.icon.clone(),
            title: summary.title.clone(),
            description: summary.description.clone(),
            detail_description: summary.description.clone(),
            version: DEFAULT_PROJECT_VERSION.to_string(),
            download_url: summary.download_url.clone(),
            screenshots: Vec::new(),
            features: Vec::new(),
            changelog: Vec::new(),
        }
    }

    /// Download URL if one is actually published
    pub fn download_link(&self) -> Option<&str> {
        published(&self.download_url)
    }
}

fn published(url: &str) -> Option<&str> {
    (!url.is_empty() && url != PLACEHOLDER_URL).then_some(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(url: &str, disabled: bool) -> ProjectSummary {
        ProjectSummary {
            id: "p".into(),
            icon: "📦".into(),
            title: LocalizedText::new("제목", "Title"),
            description: LocalizedText::new("설명", "Description"),
            download_url: url.into(),
            disabled,
        }
    }

    #[test]
    fn localized_text_picks_language() {
        let text = LocalizedText::new("안녕", "Hello");
        assert_eq!(text.get(Language::Ko), "안녕");
        assert_eq!(text.get(Language::En), "Hello");
    }

    #[test]
    fn placeholder_url_is_not_a_download() {
        assert_eq!(summary("#", false).download_link(), None);
        assert_eq!(summary("", false).download_link(), None);
        assert_eq!(
            summary("https://example.com/a.zip", false).download_link(),
            Some("https://example.com/a.zip")
        );
    }

    #[test]
    fn synthesized_detail_mirrors_summary() {
        let s = summary("#", true);
        let detail = ProjectDetail::synthesized(&s);
        assert_eq!(detail.detail_description, s.description);
        assert_eq!(detail.version, DEFAULT_PROJECT_VERSION);
        assert!(detail.features.is_empty());
        assert!(detail.changelog.is_empty());
        assert!(detail.screenshots.is_empty());
    }
}
