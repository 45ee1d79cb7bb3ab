//! Jisrubyy Web Library
//!
//! A bilingual (Korean/English) developer portfolio: an intro splash, a
//! project list with navigable sections, per-project detail pages and a
//! cookie-consent banner. The screen/navigation core lives in [`states`] and
//! is independent of the GPUI views in [`views`].

rust_i18n::i18n!("locales", fallback = "en");

pub mod app;
pub mod assets;
pub mod constants;
pub mod domain;
pub mod error;
pub mod helpers;
pub mod states;
pub mod theme;
pub mod views;
