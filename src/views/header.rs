//! Header Component
//!
//! Brand mark, section menu, donation link and language switch. Shown on the
//! project list and on project pages.

use crate::assets::BrandImage;
use crate::constants::HEADER_HEIGHT;
use crate::domain::content::DONATION_URL;
use crate::states::{PortfolioStore, Section, i18n_nav};
use crate::theme::{PortfolioColors, Typography};
use gpui::{App, Window, div, img, prelude::*, px};
use gpui_component::{
    button::{Button, ButtonVariants},
    h_flex,
};

/// Site header
#[derive(IntoElement, Default)]
pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    fn render_nav_item(section: Section, store: &PortfolioStore, cx: &App) -> impl IntoElement {
        let store = store.clone();
        Button::new(("nav", section as usize))
            .ghost()
            .label(i18n_nav(cx, section.label_key()))
            .on_click(move |_, _, cx| {
                store.update(cx, |state, cx| state.navigate(section.token(), cx));
            })
    }
}

impl RenderOnce for Header {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let store = cx.global::<PortfolioStore>().clone();
        let language = store.read(cx).language();
        let logo_store = store.clone();
        let switch_store = store.clone();

        h_flex()
            .h(px(HEADER_HEIGHT))
            .w_full()
            .px_6()
            .justify_between()
            .bg(PortfolioColors::medium_gray())
            .border_b_1()
            .border_color(PortfolioColors::panel_border())
            // Left: brand mark
            .child(
                div()
                    .id("header-logo")
                    .cursor_pointer()
                    .on_click(move |_, _, cx| {
                        logo_store.update(cx, |state, cx| state.logo_click(cx));
                    })
                    .child(img(BrandImage::Logo.path()).w(px(42.0)).h(px(42.0))),
            )
            // Middle: section menu and donation link
            .child(
                h_flex()
                    .gap_1()
                    .children(
                        Section::all()
                            .iter()
                            .map(|section| Self::render_nav_item(*section, &store, cx)),
                    )
                    .child(
                        h_flex()
                            .id("nav-donation")
                            .gap_2()
                            .ml_2()
                            .cursor_pointer()
                            .on_click(|_, _, cx| cx.open_url(DONATION_URL))
                            .child(img(BrandImage::Donation.path()).w(px(120.0)).h(px(40.0)))
                            .child(
                                div()
                                    .text_size(px(Typography::TEXT_SM))
                                    .text_color(PortfolioColors::light_green())
                                    .child(i18n_nav(cx, "donation")),
                            ),
                    ),
            )
            // Right: language switch
            .child(
                Button::new("header-language")
                    .outline()
                    .label(language.switch_label())
                    .on_click(move |_, _, cx| {
                        switch_store.update(cx, |state, cx| state.toggle_language(cx));
                    }),
            )
    }
}
