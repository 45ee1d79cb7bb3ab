//! Project Detail Page
//!
//! Extended record of the selected project: description, version, download,
//! features, screenshots and changelog.

use crate::constants::DETAIL_MAX_WIDTH;
use crate::domain::ProjectDetail;
use crate::states::{Language, PortfolioStore, i18n_detail};
use crate::theme::{PortfolioColors, Typography};
use crate::views::Header;
use gpui::{App, SharedString, Window, div, img, prelude::*, px};
use gpui_component::{
    Disableable,
    button::{Button, ButtonVariants},
    h_flex, v_flex,
};

/// Detail page of the selected project
#[derive(IntoElement, Default)]
pub struct ProjectDetailPage;

impl ProjectDetailPage {
    pub fn new() -> Self {
        Self
    }

    fn render_panel() -> gpui::Div {
        v_flex()
            .w_full()
            .p_8()
            .gap_4()
            .rounded_lg()
            .bg(PortfolioColors::medium_gray())
            .border_1()
            .border_color(PortfolioColors::panel_border())
    }

    fn render_heading(title: SharedString) -> impl IntoElement {
        div()
            .text_size(px(Typography::TEXT_2XL))
            .text_color(PortfolioColors::light_green())
            .child(title)
    }

    fn render_bullet(marker: &'static str, text: String) -> impl IntoElement {
        h_flex()
            .gap_4()
            .child(div().text_color(PortfolioColors::light_green()).child(marker))
            .child(div().text_color(PortfolioColors::white()).child(text))
    }

    fn render_summary(detail: &ProjectDetail, language: Language, cx: &App) -> impl IntoElement {
        let download: Option<SharedString> = detail
            .download_link()
            .map(|url| SharedString::from(url.to_string()));

        v_flex()
            .items_center()
            .gap_4()
            .child(
                div()
                    .text_size(px(Typography::DETAIL_ICON))
                    .child(detail.icon.clone()),
            )
            .child(
                div()
                    .text_size(px(Typography::TITLE))
                    .text_color(PortfolioColors::light_green())
                    .child(detail.title.get(language).to_string()),
            )
            .child(
                div()
                    .text_size(px(Typography::TEXT_LG))
                    .text_color(PortfolioColors::white())
                    .child(detail.detail_description.get(language).to_string()),
            )
            .child(
                div()
                    .text_color(PortfolioColors::light_green())
                    .child(format!(
                        "{} {}",
                        i18n_detail(cx, "current_version"),
                        detail.version
                    )),
            )
            .child(
                Button::new("detail-download")
                    .primary()
                    .label(format!("⬇️ {} {}", i18n_detail(cx, "download"), detail.version))
                    .disabled(download.is_none())
                    .when_some(download, |this, url| {
                        this.on_click(move |_, _, cx| cx.open_url(&url))
                    }),
            )
    }

    fn render_features(detail: &ProjectDetail, language: Language, cx: &App) -> impl IntoElement {
        v_flex()
            .gap_4()
            .child(Self::render_heading(i18n_detail(cx, "key_features")))
            .child(Self::render_panel().children(detail.features.iter().map(|feature| {
                Self::render_bullet("✓", feature.get(language).to_string())
            })))
    }

    fn render_screenshots(detail: &ProjectDetail, cx: &App) -> impl IntoElement {
        v_flex()
            .gap_4()
            .child(Self::render_heading(i18n_detail(cx, "screenshots")))
            .child(
                h_flex()
                    .flex_wrap()
                    .gap_4()
                    .children(detail.screenshots.iter().map(|shot| {
                        img(SharedString::from(shot.clone()))
                            .w(px(360.0))
                            .h(px(225.0))
                            .rounded_lg()
                    })),
            )
    }

    fn render_changelog(detail: &ProjectDetail, language: Language, cx: &App) -> impl IntoElement {
        v_flex()
            .gap_4()
            .child(Self::render_heading(i18n_detail(cx, "dev_log")))
            .child(Self::render_panel().gap_8().children(detail.changelog.iter().map(|entry| {
                v_flex()
                    .gap_2()
                    .child(
                        h_flex()
                            .gap_4()
                            .pb_2()
                            .border_b_1()
                            .border_color(PortfolioColors::panel_border())
                            .child(
                                div()
                                    .text_size(px(Typography::TEXT_XL))
                                    .text_color(PortfolioColors::light_green())
                                    .child(entry.version.clone()),
                            )
                            .child(
                                div()
                                    .text_color(PortfolioColors::muted())
                                    .child(entry.date.clone()),
                            ),
                    )
                    .children(
                        entry
                            .changes
                            .iter()
                            .map(|change| Self::render_bullet("•", change.get(language).to_string())),
                    )
            })))
    }
}

impl RenderOnce for ProjectDetailPage {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let store = cx.global::<PortfolioStore>().clone();
        let state = store.read(cx);
        let language = state.language();
        let Some(detail) = state.selected_detail().map(|d| d.into_owned()) else {
            return div().into_any_element();
        };
        let has_screenshots = !detail.screenshots.is_empty();

        v_flex()
            .id("project-detail-page")
            .size_full()
            .bg(PortfolioColors::dark_gray())
            .text_color(PortfolioColors::white())
            .child(Header::new())
            .child(
                div()
                    .id("detail-scroll")
                    .flex_1()
                    .w_full()
                    .overflow_y_scroll()
                    .child(
                        v_flex()
                            .w_full()
                            .max_w(px(DETAIL_MAX_WIDTH))
                            .mx_auto()
                            .p_8()
                            .gap_12()
                            .child(
                                h_flex().child(
                                    Button::new("detail-back")
                                        .outline()
                                        .label(format!("← {}", i18n_detail(cx, "back")))
                                        .on_click(move |_, _, cx| {
                                            store.update(cx, |state, cx| state.back(cx));
                                        }),
                                ),
                            )
                            .child(Self::render_summary(&detail, language, cx))
                            .child(Self::render_features(&detail, language, cx))
                            .when(has_screenshots, |this| {
                                this.child(Self::render_screenshots(&detail, cx))
                            })
                            .child(Self::render_changelog(&detail, language, cx)),
                    ),
            )
            .into_any_element()
    }
}
