//! Intro Screen
//!
//! Splash with the brand logo and an "enter" button. Pressing enter fades
//! the screen out; the switch to the project list happens when the exit
//! timer fires.

use std::time::Duration;

use crate::assets::BrandImage;
use crate::constants::INTRO_EXIT_DELAY_MS;
use crate::domain::content::INTRO_SUBTITLE;
use crate::states::{PortfolioStore, i18n_intro, i18n_pick};
use crate::theme::{PortfolioColors, Typography};
use gpui::{Animation, AnimationExt, App, Window, div, img, prelude::*, px};
use gpui_component::{
    button::{Button, ButtonVariants},
    v_flex,
};

/// Intro splash screen
#[derive(IntoElement, Default)]
pub struct IntroScreen;

impl IntroScreen {
    pub fn new() -> Self {
        Self
    }
}

impl RenderOnce for IntroScreen {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let store = cx.global::<PortfolioStore>().clone();
        let state = store.read(cx);
        let (language, hidden) = (state.language(), state.intro_hidden());
        let enter_store = store.clone();
        let switch_store = store.clone();

        let content = v_flex()
            .items_center()
            .gap_6()
            .child(img(BrandImage::Logo.path()).w(px(340.0)).h(px(340.0)))
            .child(
                div()
                    .text_size(px(Typography::TEXT_2XL))
                    .text_color(PortfolioColors::white())
                    .child(i18n_pick(cx, INTRO_SUBTITLE)),
            )
            .child(
                Button::new("intro-enter")
                    .primary()
                    .label(i18n_intro(cx, "enter"))
                    .on_click(move |_, _, cx| {
                        enter_store.update(cx, |state, cx| state.enter(cx));
                    }),
            );

        let content = if hidden {
            content
                .with_animation(
                    "intro-exit",
                    Animation::new(Duration::from_millis(INTRO_EXIT_DELAY_MS)),
                    |this, delta| this.opacity(1.0 - delta),
                )
                .into_any_element()
        } else {
            content.into_any_element()
        };

        div()
            .id("intro-page")
            .size_full()
            .relative()
            .flex()
            .items_center()
            .justify_center()
            .bg(PortfolioColors::dark_gray())
            .child(
                div().absolute().top(px(32.0)).right(px(32.0)).child(
                    Button::new("intro-language")
                        .outline()
                        .label(language.switch_label())
                        .on_click(move |_, _, cx| {
                            switch_store.update(cx, |state, cx| state.toggle_language(cx));
                        }),
                ),
            )
            .child(content)
    }
}
