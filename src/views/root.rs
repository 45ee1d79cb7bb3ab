//! Root View
//!
//! Renders the active screen, the cookie banner and the cursor overlay, and
//! routes keyboard actions into the state store.

use crate::helpers::{LocaleAction, NavAction};
use crate::states::{PortfolioState, PortfolioStore, ViewState};
use crate::theme::PortfolioColors;
use crate::views::{CookieBanner, CursorOverlay, IntroScreen, ProjectDetailPage, ProjectListView};
use gpui::{
    Context, Entity, FocusHandle, MouseMoveEvent, Subscription, Window, div, prelude::*,
};
use tracing::debug;

/// Top-level view of the window
pub struct PortfolioRoot {
    state: Entity<PortfolioState>,
    /// Alive while the main screens (list or detail) are showing
    project_list: Option<Entity<ProjectListView>>,
    cursor: Entity<CursorOverlay>,
    focus_handle: FocusHandle,
    _subscriptions: Vec<Subscription>,
}

impl PortfolioRoot {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let state = cx.global::<PortfolioStore>().state();
        let focus_handle = cx.focus_handle();
        focus_handle.focus(window);

        let subscriptions = vec![cx.observe(&state, |this, state, cx| {
            this.sync_main_page(&state, cx);
            cx.notify();
        })];

        Self {
            state,
            project_list: None,
            cursor: cx.new(|_| CursorOverlay::new()),
            focus_handle,
            _subscriptions: subscriptions,
        }
    }

    /// Mount the project list when leaving the intro, unmount it on return
    fn sync_main_page(&mut self, state: &Entity<PortfolioState>, cx: &mut Context<Self>) {
        let on_intro = *state.read(cx).view() == ViewState::Intro;

        if on_intro && self.project_list.take().is_some() {
            debug!("Unmounting project list");
            state.update(cx, |state, _| state.bridge_mut().clear());
        } else if !on_intro && self.project_list.is_none() {
            debug!("Mounting project list");
            self.project_list = Some(cx.new(|cx| ProjectListView::new(state, cx)));
        }
    }

    fn on_nav_action(&mut self, action: &NavAction, _window: &mut Window, cx: &mut Context<Self>) {
        self.state.update(cx, |state, cx| match action {
            NavAction::Back => state.back(cx),
            NavAction::Intro => state.logo_click(cx),
        });
    }

    fn on_locale_action(&mut self, _: &LocaleAction, _window: &mut Window, cx: &mut Context<Self>) {
        self.state.update(cx, |state, cx| state.toggle_language(cx));
    }
}

impl Render for PortfolioRoot {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let state = self.state.read(cx);
        let banner_visible = state.cookie_banner_visible();

        let screen = match (state.view(), &self.project_list) {
            (ViewState::Intro, _) | (_, None) => IntroScreen::new().into_any_element(),
            (ViewState::ProjectList, Some(list)) => list.clone().into_any_element(),
            (ViewState::ProjectDetail(_), Some(_)) => ProjectDetailPage::new().into_any_element(),
        };

        let cursor = self.cursor.clone();

        div()
            .id("portfolio-root")
            .size_full()
            .relative()
            .bg(PortfolioColors::dark_gray())
            .text_color(PortfolioColors::white())
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(Self::on_nav_action))
            .on_action(cx.listener(Self::on_locale_action))
            .on_mouse_move(move |event: &MouseMoveEvent, _window, cx| {
                cursor.update(cx, |cursor, cx| cursor.on_move(event.position, cx));
            })
            .child(screen)
            .when(banner_visible, |this| this.child(CookieBanner::new()))
            .child(self.cursor.clone())
    }
}
