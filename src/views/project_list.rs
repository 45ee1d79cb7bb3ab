//! Project List Page
//!
//! The main page: welcome banner, project grid, dev log, about, contact and
//! policy sections in one scroll container. While alive, the view registers
//! a scroll handler for every [`Section`] with the navigation bridge.

use crate::domain::content::{
    CONTACT_PROMPT, CONTACTS, COPYRIGHT, DEV_LOG, DEVELOPER_BIO, DEVELOPER_ROLE, PRIVACY_POLICY,
    SITE_OWNER, WELCOME_TEXT, WELCOME_TITLE,
};
use crate::states::{PortfolioState, PortfolioStore, Section, i18n_main, i18n_pick};
use crate::theme::{PortfolioColors, Typography};
use crate::views::{Header, ProjectCard};
use gpui::{
    AnyElement, App, Context, Entity, ScrollHandle, SharedString, Window, div, point, prelude::*,
    px,
};
use gpui_component::{h_flex, v_flex};
use rust_i18n::t;

/// Project list page
pub struct ProjectListView {
    scroll_handle: ScrollHandle,
}

impl ProjectListView {
    /// Create the page and hook its sections into the navigation bridge
    pub fn new(state: &Entity<PortfolioState>, cx: &mut Context<Self>) -> Self {
        let scroll_handle = ScrollHandle::new();

        state.update(cx, |state, _| {
            let bridge = state.bridge_mut();
            for (index, section) in Section::all().iter().enumerate() {
                let handle = scroll_handle.clone();
                match section {
                    Section::Home => bridge.register(*section, move || {
                        handle.set_offset(point(px(0.0), px(0.0)));
                    }),
                    _ => bridge.register(*section, move || handle.scroll_to_item(index)),
                }
            }
        });

        Self { scroll_handle }
    }

    fn render_section_title(title: SharedString) -> impl IntoElement {
        div()
            .text_size(px(Typography::HEADING))
            .text_color(PortfolioColors::light_green())
            .mb_4()
            .child(title)
    }

    fn render_panel(id: &'static str) -> gpui::Stateful<gpui::Div> {
        div()
            .id(id)
            .w_full()
            .p_8()
            .rounded_lg()
            .bg(PortfolioColors::medium_gray())
            .border_1()
            .border_color(PortfolioColors::panel_border())
    }

    fn render_welcome(cx: &App) -> AnyElement {
        v_flex()
            .id(Section::Home.token())
            .w_full()
            .py_12()
            .items_center()
            .gap_4()
            .child(
                div()
                    .text_size(px(Typography::TITLE))
                    .text_color(PortfolioColors::light_green())
                    .child(i18n_pick(cx, WELCOME_TITLE)),
            )
            .child(
                div()
                    .text_size(px(Typography::TEXT_LG))
                    .text_color(PortfolioColors::white())
                    .child(i18n_pick(cx, WELCOME_TEXT)),
            )
            .into_any_element()
    }

    fn render_projects(cx: &App) -> AnyElement {
        let projects = cx.global::<PortfolioStore>().read(cx).catalog().list_summaries().to_vec();

        v_flex()
            .id(Section::Projects.token())
            .w_full()
            .child(Self::render_section_title(i18n_main(cx, "project_list")))
            .child(
                h_flex()
                    .flex_wrap()
                    .gap_6()
                    .children(
                        projects
                            .into_iter()
                            .enumerate()
                            .map(|(index, project)| ProjectCard::new(index, project)),
                    ),
            )
            .into_any_element()
    }

    fn render_dev_log(cx: &App) -> AnyElement {
        Self::render_panel(Section::DevLog.token())
            .child(Self::render_section_title(i18n_main(cx, "dev_log")))
            .children(DEV_LOG.iter().map(|entry| {
                h_flex()
                    .gap_4()
                    .py_2()
                    .child(
                        div()
                            .text_color(PortfolioColors::light_green())
                            .child(entry.date),
                    )
                    .child(
                        div()
                            .text_color(PortfolioColors::white())
                            .child(i18n_pick(cx, entry.content)),
                    )
            }))
            .into_any_element()
    }

    fn render_about(cx: &App) -> AnyElement {
        Self::render_panel(Section::About.token())
            .child(Self::render_section_title(i18n_main(cx, "about")))
            .child(
                h_flex()
                    .gap_8()
                    .flex_wrap()
                    .child(
                        div()
                            .size(px(150.0))
                            .rounded_full()
                            .flex()
                            .items_center()
                            .justify_center()
                            .bg(PortfolioColors::light_green())
                            .text_size(px(Typography::TITLE))
                            .child("👤"),
                    )
                    .child(
                        v_flex()
                            .flex_1()
                            .min_w(px(300.0))
                            .gap_2()
                            .child(
                                div()
                                    .text_size(px(Typography::TEXT_3XL))
                                    .text_color(PortfolioColors::light_green())
                                    .child(SITE_OWNER),
                            )
                            .child(
                                div()
                                    .text_size(px(Typography::TEXT_LG))
                                    .text_color(PortfolioColors::white())
                                    .child(i18n_pick(cx, DEVELOPER_ROLE)),
                            )
                            .child(div().child(i18n_pick(cx, DEVELOPER_BIO))),
                    ),
            )
            .into_any_element()
    }

    fn render_contact(cx: &App) -> AnyElement {
        Self::render_panel(Section::Contact.token())
            .child(Self::render_section_title(i18n_main(cx, "contact")))
            .child(
                v_flex()
                    .items_center()
                    .gap_6()
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_LG))
                            .child(i18n_pick(cx, CONTACT_PROMPT)),
                    )
                    .children(CONTACTS.iter().enumerate().map(|(index, contact)| {
                        let mailto = contact.mailto();
                        h_flex()
                            .id(("contact", index))
                            .min_w(px(350.0))
                            .justify_center()
                            .gap_4()
                            .px_10()
                            .py_6()
                            .rounded_lg()
                            .cursor_pointer()
                            .bg(PortfolioColors::dark_gray())
                            .border_1()
                            .border_color(PortfolioColors::panel_border())
                            .hover(|this| this.border_color(PortfolioColors::light_green()))
                            .on_click(move |_, _, cx| cx.open_url(&mailto))
                            .child(
                                div()
                                    .text_color(PortfolioColors::light_green())
                                    .child("✉️"),
                            )
                            .child(contact.email)
                    })),
            )
            .into_any_element()
    }

    fn render_policy(cx: &App) -> AnyElement {
        Self::render_panel(Section::Policy.token())
            .child(Self::render_section_title(i18n_main(cx, "policy")))
            .child(
                v_flex()
                    .gap_2()
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_LG))
                            .text_color(PortfolioColors::light_green())
                            .child(i18n_main(cx, "privacy_policy")),
                    )
                    .child(div().child(i18n_pick(cx, PRIVACY_POLICY))),
            )
            .into_any_element()
    }

    fn render_footer(cx: &App) -> AnyElement {
        let code = cx.global::<PortfolioStore>().read(cx).language().code();

        v_flex()
            .w_full()
            .py_8()
            .items_center()
            .gap_2()
            .border_t_1()
            .border_color(PortfolioColors::panel_border())
            .child(t!("main.developer", locale = code, name = SITE_OWNER).to_string())
            .child(
                h_flex().gap_4().children(CONTACTS.iter().enumerate().map(|(index, contact)| {
                    let mailto = contact.mailto();
                    div()
                        .id(("footer-contact", index))
                        .cursor_pointer()
                        .text_color(PortfolioColors::light_green())
                        .on_click(move |_, _, cx| cx.open_url(&mailto))
                        .child(contact.email)
                })),
            )
            .child(
                div()
                    .text_size(px(Typography::TEXT_SM))
                    .text_color(PortfolioColors::muted())
                    .child(i18n_pick(cx, COPYRIGHT)),
            )
            .into_any_element()
    }
}

impl Render for ProjectListView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        // Child order must follow `Section::all()`: handlers scroll by index.
        let sections = [
            Self::render_welcome(cx),
            Self::render_projects(cx),
            Self::render_dev_log(cx),
            Self::render_about(cx),
            Self::render_contact(cx),
            Self::render_policy(cx),
            Self::render_footer(cx),
        ];

        v_flex()
            .id("main-page")
            .size_full()
            .bg(PortfolioColors::dark_gray())
            .text_color(PortfolioColors::white())
            .child(Header::new())
            .child(
                v_flex()
                    .id("main-scroll")
                    .flex_1()
                    .w_full()
                    .px_8()
                    .gap_12()
                    .overflow_y_scroll()
                    .track_scroll(&self.scroll_handle)
                    .children(sections),
            )
    }
}
