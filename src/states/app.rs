//! Application State
//!
//! Wraps the [`ViewController`] in a GPUI entity, maps wall-clock time onto
//! its virtual clock, and keeps one wake-up task armed for the earliest
//! pending timer.

use std::borrow::Cow;
use std::time::Instant;

use gpui::{App, AppContext, Context, Entity, Global, Task};
use tracing::debug;

use super::{Language, Localization, NavigationBridge, ViewController, ViewState};
use crate::domain::{ProjectCatalog, ProjectDetail, ProjectSummary};

/// Live application state, mutated only through named transitions
pub struct PortfolioState {
    controller: ViewController,
    epoch: Instant,
    wakeup: Option<Task<()>>,
}

impl PortfolioState {
    pub fn new(controller: ViewController) -> Self {
        Self {
            controller,
            epoch: Instant::now(),
            wakeup: None,
        }
    }

    // ==================== Getters ====================

    pub fn view(&self) -> &ViewState {
        self.controller.view()
    }

    pub fn language(&self) -> Language {
        self.controller.language()
    }

    pub fn localization(&self) -> &Localization {
        self.controller.localization()
    }

    pub fn catalog(&self) -> &ProjectCatalog {
        self.controller.catalog()
    }

    pub fn intro_hidden(&self) -> bool {
        self.controller.intro_hidden()
    }

    pub fn cookie_banner_visible(&self) -> bool {
        self.controller.cookie_banner_visible()
    }

    pub fn selected_project(&self) -> Option<&ProjectSummary> {
        self.controller.selected_project()
    }

    pub fn selected_detail(&self) -> Option<Cow<'_, ProjectDetail>> {
        self.controller.selected_detail()
    }

    pub fn bridge_mut(&mut self) -> &mut NavigationBridge {
        self.controller.bridge_mut()
    }

    // ==================== Transitions ====================

    pub fn toggle_language(&mut self, cx: &mut Context<Self>) {
        self.apply(cx, |vc| vc.toggle_language());
    }

    pub fn enter(&mut self, cx: &mut Context<Self>) {
        self.apply(cx, |vc| vc.enter());
    }

    pub fn select(&mut self, id: &str, cx: &mut Context<Self>) {
        self.apply(cx, |vc| {
            vc.select(id);
        });
    }

    pub fn back(&mut self, cx: &mut Context<Self>) {
        self.apply(cx, |vc| vc.back());
    }

    pub fn navigate(&mut self, token: &str, cx: &mut Context<Self>) {
        self.apply(cx, |vc| vc.navigate(token));
    }

    pub fn logo_click(&mut self, cx: &mut Context<Self>) {
        self.apply(cx, |vc| vc.logo_click());
    }

    pub fn respond_to_cookies(&mut self, accepted: bool, cx: &mut Context<Self>) {
        self.apply(cx, |vc| vc.respond_to_cookies(accepted));
    }

    // ==================== Clock ====================

    fn apply(&mut self, cx: &mut Context<Self>, transition: impl FnOnce(&mut ViewController)) {
        self.controller.advance_to(self.epoch.elapsed());
        transition(&mut self.controller);
        self.arm(cx);
        cx.notify();
    }

    fn tick(&mut self, cx: &mut Context<Self>) {
        self.apply(cx, |_| {});
    }

    /// Replace the wake-up task with one targeting the earliest timer
    fn arm(&mut self, cx: &mut Context<Self>) {
        let Some(delay) = self.controller.next_timer_delay() else {
            self.wakeup = None;
            return;
        };

        debug!(?delay, "Arming view timer");
        self.wakeup = Some(cx.spawn(async move |this, cx| {
            cx.background_executor().timer(delay).await;
            let _ = this.update(cx, |this, cx| this.tick(cx));
        }));
    }
}

// ==================== Global Store ====================

/// Global store accessible via `cx.global::<PortfolioStore>()`
#[derive(Clone)]
pub struct PortfolioStore {
    state: Entity<PortfolioState>,
}

impl PortfolioStore {
    /// Create the state entity and wrap it in a store
    pub fn new(controller: ViewController, cx: &mut App) -> Self {
        let state = cx.new(|_| PortfolioState::new(controller));
        Self { state }
    }

    /// Get the state entity
    pub fn state(&self) -> Entity<PortfolioState> {
        self.state.clone()
    }

    /// Read state
    pub fn read<'a>(&self, cx: &'a App) -> &'a PortfolioState {
        self.state.read(cx)
    }

    /// Update state
    pub fn update<R, C: AppContext>(
        &self,
        cx: &mut C,
        update: impl FnOnce(&mut PortfolioState, &mut Context<PortfolioState>) -> R,
    ) -> C::Result<R> {
        self.state.update(cx, update)
    }
}

impl Global for PortfolioStore {}
