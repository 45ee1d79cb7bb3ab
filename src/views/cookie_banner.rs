//! Cookie Banner
//!
//! Bottom overlay asking for cookie consent. Either answer is persisted and
//! the banner is not shown again.

use crate::domain::content::COOKIE_NOTICE;
use crate::states::{PortfolioStore, i18n_cookie, i18n_pick};
use crate::theme::PortfolioColors;
use gpui::{App, Window, div, prelude::*, px};
use gpui_component::{
    button::{Button, ButtonVariants},
    h_flex,
};

#[derive(IntoElement, Default)]
pub struct CookieBanner;

impl CookieBanner {
    pub fn new() -> Self {
        Self
    }
}

impl RenderOnce for CookieBanner {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let accept_store = cx.global::<PortfolioStore>().clone();
        let decline_store = accept_store.clone();

        h_flex()
            .id("cookie-banner")
            .absolute()
            .bottom_0()
            .left_0()
            .right_0()
            .px_8()
            .py_4()
            .gap_6()
            .justify_between()
            .bg(PortfolioColors::banner_bg())
            .border_t_1()
            .border_color(PortfolioColors::light_green())
            .occlude()
            .child(
                div()
                    .flex_1()
                    .text_color(PortfolioColors::white())
                    .child(i18n_pick(cx, COOKIE_NOTICE)),
            )
            .child(
                h_flex()
                    .gap_2()
                    .min_w(px(200.0))
                    .child(
                        Button::new("cookie-accept")
                            .primary()
                            .label(i18n_cookie(cx, "accept"))
                            .on_click(move |_, _, cx| {
                                accept_store.update(cx, |state, cx| state.respond_to_cookies(true, cx));
                            }),
                    )
                    .child(
                        Button::new("cookie-decline")
                            .outline()
                            .label(i18n_cookie(cx, "decline"))
                            .on_click(move |_, _, cx| {
                                decline_store.update(cx, |state, cx| state.respond_to_cookies(false, cx));
                            }),
                    ),
            )
    }
}
