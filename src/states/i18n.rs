//! Internationalization
//!
//! The active language, the `translate(ko, en)` lookup used for inline
//! copy, and helpers for translating UI labels from the locale files.

use super::PortfolioStore;
use crate::domain::Bilingual;
use gpui::{App, SharedString};
use rust_i18n::t;

/// Supported languages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    /// Korean
    #[default]
    Ko,
    /// English
    En,
}

impl Language {
    /// Locale code used by the locale files
    pub fn code(self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }

    /// The other language
    pub fn toggled(self) -> Self {
        match self {
            Language::Ko => Language::En,
            Language::En => Language::Ko,
        }
    }

    /// Label of the switch button: names the language a click switches to
    pub fn switch_label(self) -> &'static str {
        match self {
            Language::Ko => "EN",
            Language::En => "KO",
        }
    }
}

/// Holder of the single active language
#[derive(Debug, Clone, Copy, Default)]
pub struct Localization {
    language: Language,
}

impl Localization {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Set the active language; returns whether it changed
    pub fn set_language(&mut self, language: Language) -> bool {
        let changed = self.language != language;
        self.language = language;
        changed
    }

    /// The variant matching the active language
    pub fn translate<'a>(&self, ko: &'a str, en: &'a str) -> &'a str {
        match self.language {
            Language::Ko => ko,
            Language::En => en,
        }
    }

    /// [`translate`](Self::translate) over a compile-time pair
    pub fn pick(&self, text: Bilingual) -> &'static str {
        self.translate(text.ko, text.en)
    }
}

fn active_code(cx: &App) -> &'static str {
    cx.global::<PortfolioStore>().read(cx).language().code()
}

/// Get translated string from "nav" namespace
pub fn i18n_nav(cx: &App, key: &str) -> SharedString {
    t!(format!("nav.{key}"), locale = active_code(cx)).to_string().into()
}

/// Get translated string from "intro" namespace
pub fn i18n_intro(cx: &App, key: &str) -> SharedString {
    t!(format!("intro.{key}"), locale = active_code(cx)).to_string().into()
}

/// Get translated string from "main" namespace
pub fn i18n_main(cx: &App, key: &str) -> SharedString {
    t!(format!("main.{key}"), locale = active_code(cx)).to_string().into()
}

/// Get translated string from "detail" namespace
pub fn i18n_detail(cx: &App, key: &str) -> SharedString {
    t!(format!("detail.{key}"), locale = active_code(cx)).to_string().into()
}

/// Get translated string from "cookie" namespace
pub fn i18n_cookie(cx: &App, key: &str) -> SharedString {
    t!(format!("cookie.{key}"), locale = active_code(cx)).to_string().into()
}

/// Translate inline copy with the active language
pub fn i18n_pick(cx: &App, text: Bilingual) -> SharedString {
    cx.global::<PortfolioStore>().read(cx).localization().pick(text).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_follows_language() {
        for language in [Language::Ko, Language::En] {
            let l10n = Localization::new(language);
            let expected = if language == Language::Ko { "가" } else { "a" };
            assert_eq!(l10n.translate("가", "a"), expected);
        }
    }

    #[test]
    fn set_language_is_idempotent() {
        let mut l10n = Localization::default();
        assert_eq!(l10n.language(), Language::Ko);
        assert!(l10n.set_language(Language::En));
        assert!(!l10n.set_language(Language::En));
        assert_eq!(l10n.language(), Language::En);
    }

    #[test]
    fn switch_label_names_the_other_language() {
        assert_eq!(Language::Ko.switch_label(), "EN");
        assert_eq!(Language::En.switch_label(), "KO");
        assert_eq!(Language::Ko.toggled(), Language::En);
    }

    #[test]
    fn locale_files_cover_both_languages() {
        assert_eq!(t!("nav.home", locale = "ko"), "홈");
        assert_eq!(t!("nav.home", locale = "en"), "Home");
        assert_eq!(t!("detail.back", locale = "ko"), "뒤로 가기");
    }
}
