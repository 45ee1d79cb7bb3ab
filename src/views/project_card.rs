//! Project Card
//!
//! One tile in the project grid. Disabled projects are muted and their
//! buttons do nothing.

use crate::constants::PROJECT_CARD_WIDTH;
use crate::domain::ProjectSummary;
use crate::states::{PortfolioStore, i18n_main};
use crate::theme::{PortfolioColors, Typography};
use gpui::{App, SharedString, Window, div, prelude::*, px};
use gpui_component::{
    Disableable,
    button::{Button, ButtonVariants},
    h_flex, v_flex,
};

/// Card for a project summary
#[derive(IntoElement)]
pub struct ProjectCard {
    index: usize,
    project: ProjectSummary,
}

impl ProjectCard {
    pub fn new(index: usize, project: ProjectSummary) -> Self {
        Self { index, project }
    }
}

impl RenderOnce for ProjectCard {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let store = cx.global::<PortfolioStore>().clone();
        let language = store.read(cx).language();
        let interactive = self.project.is_interactive();
        let download: Option<SharedString> = self
            .project
            .download_link()
            .map(|url| SharedString::from(url.to_string()));
        let id = self.project.id.clone();

        let details = Button::new(("card-details", self.index))
            .ghost()
            .label(i18n_main(cx, "view_details"))
            .disabled(!interactive)
            .when(interactive, |this| {
                this.on_click(move |_, _, cx| {
                    store.update(cx, |state, cx| state.select(&id, cx));
                })
            });

        let download_button = Button::new(("card-download", self.index))
            .outline()
            .label(format!("⬇️ {}", i18n_main(cx, "download")))
            .disabled(!interactive || download.is_none())
            .when_some(download.filter(|_| interactive), |this, url| {
                this.on_click(move |_, _, cx| cx.open_url(&url))
            });

        v_flex()
            .w(px(PROJECT_CARD_WIDTH))
            .rounded_lg()
            .overflow_hidden()
            .bg(PortfolioColors::medium_gray())
            .border_1()
            .border_color(PortfolioColors::panel_border())
            .when(!interactive, |this| this.opacity(0.5))
            .child(
                div()
                    .h(px(140.0))
                    .flex()
                    .items_center()
                    .justify_center()
                    .bg(if interactive {
                        PortfolioColors::dark_green()
                    } else {
                        PortfolioColors::muted()
                    })
                    .text_size(px(Typography::CARD_ICON))
                    .child(self.project.icon.clone()),
            )
            .child(
                v_flex()
                    .p_4()
                    .gap_2()
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_XL))
                            .text_color(PortfolioColors::light_green())
                            .child(self.project.title.get(language).to_string()),
                    )
                    .child(
                        div()
                            .text_color(PortfolioColors::white())
                            .child(self.project.description.get(language).to_string()),
                    )
                    .child(h_flex().gap_2().pt_2().child(details).child(download_button)),
            )
    }
}
