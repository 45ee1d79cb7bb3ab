//! Project Catalog
//!
//! The compiled-in list of showcased projects and the curated detail table.
//! Summary order is display order.

use std::borrow::Cow;

use hashlink::LinkedHashMap;

use super::project::{ChangelogEntry, LocalizedText, ProjectDetail, ProjectSummary};

/// Read-only project catalog
#[derive(Debug, Clone)]
pub struct ProjectCatalog {
    summaries: Vec<ProjectSummary>,
    details: LinkedHashMap<String, ProjectDetail>,
}

impl ProjectCatalog {
    /// Build a catalog from explicit entries
    pub fn with_entries(
        summaries: Vec<ProjectSummary>,
        details: impl IntoIterator<Item = ProjectDetail>,
    ) -> Self {
        let details = details
            .into_iter()
            .map(|detail| (detail.id.clone(), detail))
            .collect();
        Self { summaries, details }
    }

    /// The catalog shipped with the site
    pub fn builtin() -> Self {
        Self::with_entries(builtin_summaries(), builtin_details())
    }

    /// All summaries in display order
    pub fn list_summaries(&self) -> &[ProjectSummary] {
        &self.summaries
    }

    /// Resolve a summary by id
    pub fn find(&self, id: &str) -> Option<&ProjectSummary> {
        self.summaries.iter().find(|s| s.id == id)
    }

    /// Detail for a resolved summary; synthesized when no curated record exists
    pub fn detail_for(&self, summary: &ProjectSummary) -> Cow<'_, ProjectDetail> {
        match self.details.get(&summary.id) {
            Some(detail) => Cow::Borrowed(detail),
            None => Cow::Owned(ProjectDetail::synthesized(summary)),
        }
    }

    /// Detail by id. `None` only when the id names neither a curated record
    /// nor a summary.
    pub fn get_detail(&self, id: &str) -> Option<Cow<'_, ProjectDetail>> {
        if let Some(detail) = self.details.get(id) {
            return Some(Cow::Borrowed(detail));
        }
        self.find(id)
            .map(|summary| Cow::Owned(ProjectDetail::synthesized(summary)))
    }
}

impl Default for ProjectCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn text(ko: &str, en: &str) -> LocalizedText {
    LocalizedText::new(ko, en)
}

fn builtin_summaries() -> Vec<ProjectSummary> {
    vec![
        ProjectSummary {
            id: "project1".into(),
            icon: "🖥️".into(),
            title: text("JISMemo", "JISMemo"),
            description: text(
                "Windows용 간편한 메모지 프로그램입니다.",
                "Simple memo program for Windows.",
            ),
            download_url: "https://drive.google.com/file/d/1Eck7dZQaGkAf86rEA6UiZpp5YU_N0F_6/view?usp=sharing".into(),
            disabled: false,
        },
        ProjectSummary {
            id: "project2".into(),
            icon: "🌐".into(),
            title: text("웹 기반 도구", "Web-based Tool"),
            description: text(
                "브라우저에서 사용할 수 있는 웹 기반 도구입니다.",
                "Web-based tool available in browsers.",
            ),
            download_url: "#".into(),
            disabled: true,
        },
        ProjectSummary {
            id: "project3".into(),
            icon: "📱".into(),
            title: text("모바일 앱", "Mobile App"),
            description: text(
                "Android 및 iOS용 모바일 애플리케이션입니다.",
                "Mobile application for Android and iOS.",
            ),
            download_url: "#".into(),
            disabled: true,
        },
    ]
}

fn builtin_details() -> Vec<ProjectDetail> {
    vec![
        ProjectDetail {
            id: "project1".into(),
            icon: "🖥️".into(),
            title: text("JISMemo", "JISMemo"),
            description: text(
                "Windows용 간편한 메모지 프로그램입니다.",
                "Simple memo program for Windows.",
            ),
            detail_description: text(
                "JISMemo는 Windows 환경에서 사용할 수 있는 간편하고 직관적인 메모 프로그램입니다. 빠른 메모 작성과 효율적인 관리 기능을 제공하여 일상적인 업무나 개인적인 기록을 손쉽게 관리할 수 있습니다.",
                "JISMemo is a simple and intuitive memo program for Windows environment. It provides quick memo writing and efficient management features to easily manage daily work or personal records.",
            ),
            version: "v1.3.0".into(),
            download_url: "https://drive.google.com/file/d/1gidL0Orm3KHQZmCRHMGQgqVmQ_5glRD-/view?usp=sharing".into(),
            screenshots: Vec::new(),
            features: vec![
                text("간편한 메모 작성 및 편집", "Easy memo writing and editing"),
                text("자동 저장 기능", "Auto-save functionality"),
                text("다양한 폰트 및 색상 지원", "Various fonts and colors support"),
                text("검색 및 필터링 기능", "Search and filtering features"),
                text("가벼운 시스템 리소스 사용", "Lightweight system resource usage"),
            ],
            changelog: vec![
                ChangelogEntry {
                    version: "v1.3.0".into(),
                    date: "2025-11-06".into(),
                    changes: vec![
                        text("텍스트/이미지 붙여넣기 기능 개선", "Improved text/image paste functionality"),
                        text("여러 이미지 지원 및 개별 삭제", "Multiple image support and individual deletion"),
                        text("UI 크기 및 폰트 개선", "UI size and font improvements"),
                        text("스크롤바 추가", "Added scrollbar"),
                        text("기본 언어 영문 설정", "Default language set to English"),
                        text("각종 버그 수정", "Various bug fixes"),
                    ],
                },
                ChangelogEntry {
                    version: "v1.2.0".into(),
                    date: "2025-10-29".into(),
                    changes: vec![text("최초 릴리즈", "Initial release")],
                },
            ],
        },
        ProjectDetail {
            id: "project2".into(),
            icon: "🌐".into(),
            title: text("웹 기반 도구", "Web-based Tool"),
            description: text(
                "브라우저에서 사용할 수 있는 웹 기반 도구입니다.",
                "Web-based tool available in browsers.",
            ),
            detail_description: text(
                "개발 중인 웹 기반 도구입니다. 브라우저에서 직접 사용할 수 있는 다양한 유틸리티 기능을 제공할 예정입니다.",
                "Web-based tool under development. Will provide various utility functions that can be used directly in browsers.",
            ),
            version: "v0.1.0 (개발중)".into(),
            download_url: "#".into(),
            screenshots: Vec::new(),
            features: vec![
                text("브라우저 기반 실행", "Browser-based execution"),
                text("크로스 플랫폼 지원", "Cross-platform support"),
                text("실시간 데이터 처리", "Real-time data processing"),
            ],
            changelog: vec![ChangelogEntry {
                version: "v0.1.0".into(),
                date: "개발중".into(),
                changes: vec![text("프로젝트 기획 및 설계", "Project planning and design")],
            }],
        },
        ProjectDetail {
            id: "project3".into(),
            icon: "📱".into(),
            title: text("모바일 앱", "Mobile App"),
            description: text(
                "Android 및 iOS용 모바일 애플리케이션입니다.",
                "Mobile application for Android and iOS.",
            ),
            detail_description: text(
                "개발 예정인 모바일 애플리케이션입니다. Android와 iOS 플랫폼을 모두 지원할 예정입니다.",
                "Mobile application planned for development. Will support both Android and iOS platforms.",
            ),
            version: "v0.0.1 (계획중)".into(),
            download_url: "#".into(),
            screenshots: Vec::new(),
            features: vec![
                text("Android/iOS 지원", "Android/iOS support"),
                text("네이티브 성능", "Native performance"),
                text("오프라인 기능", "Offline functionality"),
            ],
            changelog: vec![ChangelogEntry {
                version: "v0.0.1".into(),
                date: "계획중".into(),
                changes: vec![text("프로젝트 계획 수립", "Project planning")],
            }],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_PROJECT_VERSION;

    fn summary(id: &str) -> ProjectSummary {
        ProjectSummary {
            id: id.into(),
            icon: "🧪".into(),
            title: text("실험", "Experiment"),
            description: text("실험용 프로젝트", "Experimental project"),
            download_url: "#".into(),
            disabled: false,
        }
    }

    #[test]
    fn builtin_catalog_keeps_display_order() {
        let catalog = ProjectCatalog::builtin();
        let ids: Vec<_> = catalog.list_summaries().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["project1", "project2", "project3"]);
        assert!(!catalog.list_summaries()[0].disabled);
        assert!(catalog.list_summaries()[1].disabled);
        assert!(catalog.list_summaries()[2].disabled);
    }

    #[test]
    fn curated_detail_is_returned_as_is() {
        let catalog = ProjectCatalog::builtin();
        let detail = catalog.get_detail("project1").unwrap();
        assert_eq!(detail.version, "v1.3.0");
        assert_eq!(detail.features.len(), 5);
        assert_eq!(detail.changelog.len(), 2);
        assert_eq!(detail.changelog[1].changes[0].en, "Initial release");
    }

    #[test]
    fn uncurated_summary_gets_synthesized_detail() {
        let catalog = ProjectCatalog::with_entries(vec![summary("lab")], Vec::new());

        let detail = catalog.get_detail("lab").unwrap();
        assert!(matches!(detail, Cow::Owned(_)));
        assert_eq!(detail.detail_description.ko, "실험용 프로젝트");
        assert_eq!(detail.detail_description.en, "Experimental project");
        assert_eq!(detail.version, DEFAULT_PROJECT_VERSION);
        assert!(detail.features.is_empty());
        assert!(detail.changelog.is_empty());
        assert!(detail.screenshots.is_empty());
    }

    #[test]
    fn detail_for_is_total() {
        let catalog = ProjectCatalog::builtin();
        let stranger = summary("not-in-any-table");
        let detail = catalog.detail_for(&stranger);
        assert_eq!(detail.id, "not-in-any-table");
        assert_eq!(detail.version, DEFAULT_PROJECT_VERSION);
    }

    #[test]
    fn unknown_id_without_summary_resolves_to_nothing() {
        let catalog = ProjectCatalog::builtin();
        assert!(catalog.find("ghost").is_none());
        assert!(catalog.get_detail("ghost").is_none());
    }

    #[test]
    fn disabled_projects_remain_retrievable() {
        let catalog = ProjectCatalog::builtin();
        let disabled = catalog.find("project3").unwrap();
        assert!(!disabled.is_interactive());
        assert_eq!(catalog.detail_for(disabled).version, "v0.0.1 (계획중)");
    }
}
