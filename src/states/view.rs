//! View Controller
//!
//! The screen state machine. Exactly one screen is active at a time:
//!
//! ```text
//!            enter (+800ms)            select(id)
//!   Intro ─────────────────▶ ProjectList ─────────▶ ProjectDetail
//!     ▲                          ▲   ◀───── back / navigate ─────┘
//!     └──────── logo click ──────┴────────────── logo click
//! ```
//!
//! Delayed work (intro exit, post-navigation scroll, cookie banner) is kept
//! in a [`TimerQueue`] on a virtual clock that the owner advances. Timers are
//! fire-once and never cancelled.

use std::borrow::Cow;
use std::time::Duration;

use tracing::{debug, error, info, warn};

use super::consent::{ConsentState, ConsentStore};
use super::i18n::{Language, Localization};
use super::navigation::NavigationBridge;
use crate::constants::{COOKIE_BANNER_DELAY_MS, INTRO_EXIT_DELAY_MS, SECTION_SETTLE_DELAY_MS};
use crate::domain::{ProjectCatalog, ProjectDetail, ProjectSummary};
use crate::helpers::TimerQueue;

/// The active top-level screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewState {
    /// Splash screen, the only initial state
    #[default]
    Intro,
    /// Project list with the navigable sections
    ProjectList,
    /// Detail page of a resolved project
    ProjectDetail(ProjectSummary),
}

impl ViewState {
    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            ViewState::Intro => "intro",
            ViewState::ProjectList => "project-list",
            ViewState::ProjectDetail(_) => "project-detail",
        }
    }
}

/// Work scheduled for later
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deferred {
    /// Intro exit animation finished; switch to the project list
    FinishIntroExit,
    /// List has mounted; scroll to the section named by the token
    ScrollTo(String),
    /// First-visit delay elapsed; show the cookie banner if the main screen
    /// mount that scheduled it is still the current one
    ShowCookieBanner(u64),
}

/// Central owner of language, screen and selection state
#[derive(Debug)]
pub struct ViewController {
    view: ViewState,
    localization: Localization,
    intro_hidden: bool,
    cookie_banner_visible: bool,
    /// Bumped every time the main screen mounts from the intro
    mount_id: u64,
    catalog: ProjectCatalog,
    consent: ConsentStore,
    bridge: NavigationBridge,
    timers: TimerQueue<Deferred>,
}

impl ViewController {
    pub fn new(catalog: ProjectCatalog, consent: ConsentStore) -> Self {
        Self {
            view: ViewState::Intro,
            localization: Localization::default(),
            intro_hidden: false,
            cookie_banner_visible: false,
            mount_id: 0,
            catalog,
            consent,
            bridge: NavigationBridge::new(),
            timers: TimerQueue::new(),
        }
    }

    // ==================== Getters ====================

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn language(&self) -> Language {
        self.localization.language()
    }

    pub fn localization(&self) -> &Localization {
        &self.localization
    }

    /// `ko` or `en` depending on the active language
    pub fn translate<'a>(&self, ko: &'a str, en: &'a str) -> &'a str {
        self.localization.translate(ko, en)
    }

    pub fn catalog(&self) -> &ProjectCatalog {
        &self.catalog
    }

    /// Intro is fading out, waiting for the exit timer
    pub fn intro_hidden(&self) -> bool {
        self.intro_hidden
    }

    pub fn cookie_banner_visible(&self) -> bool {
        self.cookie_banner_visible
    }

    pub fn selected_project(&self) -> Option<&ProjectSummary> {
        match &self.view {
            ViewState::ProjectDetail(project) => Some(project),
            _ => None,
        }
    }

    /// Detail record for the selected project
    pub fn selected_detail(&self) -> Option<Cow<'_, ProjectDetail>> {
        self.selected_project()
            .map(|project| self.catalog.detail_for(project))
    }

    pub fn bridge_mut(&mut self) -> &mut NavigationBridge {
        &mut self.bridge
    }

    /// Current reading of the virtual clock
    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    /// Time until the next scheduled work, if any
    pub fn next_timer_delay(&self) -> Option<Duration> {
        self.timers.next_delay()
    }

    pub fn pending_timers(&self) -> impl Iterator<Item = &Deferred> {
        self.timers.iter()
    }

    // ==================== Language ====================

    pub fn set_language(&mut self, language: Language) {
        if self.localization.set_language(language) {
            info!(language = language.code(), "Language changed");
        }
    }

    pub fn toggle_language(&mut self) {
        self.set_language(self.language().toggled());
    }

    // ==================== Transitions ====================

    /// Leave the intro. The switch happens after the exit delay; the intro
    /// stays active (and hidden) until then. Pressing again while a switch is
    /// pending schedules another one.
    pub fn enter(&mut self) {
        if self.view != ViewState::Intro {
            return;
        }
        self.intro_hidden = true;
        self.timers.schedule(
            Duration::from_millis(INTRO_EXIT_DELAY_MS),
            Deferred::FinishIntroExit,
        );
        debug!(pending = self.timers.len(), "Intro exit scheduled");
    }

    /// Open the detail page of project `id`. Disabled or unknown projects
    /// leave the state untouched. Returns whether the screen changed.
    pub fn select(&mut self, id: &str) -> bool {
        if self.view != ViewState::ProjectList {
            return false;
        }
        let Some(project) = self.catalog.find(id) else {
            return false;
        };
        if !project.is_interactive() {
            debug!(project = id, "Ignoring selection of disabled project");
            return false;
        }

        let project = project.clone();
        info!(project = %project.id, "Opening project detail");
        self.transition(ViewState::ProjectDetail(project));
        true
    }

    /// Return from the detail page to the list
    pub fn back(&mut self) {
        if matches!(self.view, ViewState::ProjectDetail(_)) {
            self.transition(ViewState::ProjectList);
        }
    }

    /// Header menu click. From the list the scroll is immediate; from a
    /// detail page the list is restored first and the scroll follows after
    /// the settle delay.
    pub fn navigate(&mut self, token: &str) {
        match self.view {
            ViewState::ProjectList => {
                self.bridge.go_to(token);
            }
            ViewState::ProjectDetail(_) => {
                self.back();
                self.timers.schedule(
                    Duration::from_millis(SECTION_SETTLE_DELAY_MS),
                    Deferred::ScrollTo(token.to_string()),
                );
            }
            ViewState::Intro => {}
        }
    }

    /// Brand mark click: back to the intro from anywhere, dropping the
    /// selection and the main page's banner.
    pub fn logo_click(&mut self) {
        self.intro_hidden = false;
        self.cookie_banner_visible = false;
        self.transition(ViewState::Intro);
    }

    /// Persist the visitor's cookie answer and dismiss the banner
    pub fn respond_to_cookies(&mut self, accepted: bool) {
        if let Err(e) = self.consent.write_consent(accepted) {
            error!(error = %e, accepted, "Failed to persist cookie consent");
        } else {
            info!(accepted, "Cookie consent recorded");
        }
        self.cookie_banner_visible = false;
    }

    // ==================== Clock ====================

    /// Advance the virtual clock by `elapsed`
    pub fn advance(&mut self, elapsed: Duration) {
        self.advance_to(self.timers.now() + elapsed);
    }

    /// Move the virtual clock to `now` and run every due timer
    pub fn advance_to(&mut self, now: Duration) {
        while let Some((_, work)) = self.timers.pop_due(now) {
            self.run(work);
        }
        // Everything due has run; this only moves the clock.
        self.timers.advance_to(now);
    }

    fn run(&mut self, work: Deferred) {
        match work {
            Deferred::FinishIntroExit => {
                if self.view == ViewState::Intro {
                    self.intro_hidden = false;
                    self.transition(ViewState::ProjectList);
                    self.on_main_mounted();
                }
            }
            Deferred::ScrollTo(token) => {
                if self.view == ViewState::ProjectList {
                    self.bridge.go_to(&token);
                }
            }
            Deferred::ShowCookieBanner(mount_id) => {
                if self.view != ViewState::Intro && mount_id == self.mount_id {
                    self.cookie_banner_visible = true;
                } else {
                    debug!(mount_id, current = self.mount_id, "Dropping stale banner timer");
                }
            }
        }
    }

    fn on_main_mounted(&mut self) {
        self.mount_id += 1;
        if self.cookie_banner_visible {
            return;
        }
        let consent = self.consent.read_consent().unwrap_or_else(|e| {
            warn!(error = %e, "Failed to read cookie consent");
            ConsentState::Unset
        });
        if consent.needs_prompt() {
            self.timers.schedule(
                Duration::from_millis(COOKIE_BANNER_DELAY_MS),
                Deferred::ShowCookieBanner(self.mount_id),
            );
        }
    }

    fn transition(&mut self, next: ViewState) {
        if self.view != next {
            info!(from = self.view.name(), to = next.name(), "View transition");
            self.view = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LocalizedText;
    use crate::helpers::{KeyValueStore, MemoryStore, TomlFileStore};
    use crate::states::Section;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn controller() -> ViewController {
        ViewController::new(ProjectCatalog::builtin(), ConsentStore::new(MemoryStore::new()))
    }

    fn on_list() -> ViewController {
        let mut vc = controller();
        vc.enter();
        vc.advance(ms(INTRO_EXIT_DELAY_MS));
        assert_eq!(vc.view(), &ViewState::ProjectList);
        vc
    }

    fn record_scrolls(vc: &mut ViewController) -> Rc<RefCell<Vec<Section>>> {
        let hits = Rc::new(RefCell::new(Vec::new()));
        for section in Section::all() {
            let hits = hits.clone();
            let section = *section;
            vc.bridge_mut()
                .register(section, move || hits.borrow_mut().push(section));
        }
        hits
    }

    #[test]
    fn starts_on_intro_in_korean() {
        let vc = controller();
        assert_eq!(vc.view(), &ViewState::Intro);
        assert_eq!(vc.language(), Language::Ko);
        assert_eq!(vc.translate("홈", "Home"), "홈");
        assert!(vc.selected_project().is_none());
    }

    #[test]
    fn enter_waits_for_exit_animation() {
        let mut vc = controller();
        vc.enter();
        assert!(vc.intro_hidden());
        assert_eq!(vc.view(), &ViewState::Intro);

        vc.advance(ms(INTRO_EXIT_DELAY_MS - 1));
        assert_eq!(vc.view(), &ViewState::Intro);

        vc.advance(ms(1));
        assert_eq!(vc.view(), &ViewState::ProjectList);
        assert!(!vc.intro_hidden());
    }

    #[test]
    fn select_opens_detail_synchronously() {
        let mut vc = on_list();
        assert!(vc.select("project1"));
        let project = vc.selected_project().unwrap();
        assert_eq!(project.title.en, "JISMemo");
        assert_eq!(vc.selected_detail().unwrap().version, "v1.3.0");
    }

    #[test]
    fn disabled_or_unknown_projects_do_not_open() {
        let mut vc = on_list();
        assert!(!vc.select("project2"));
        assert!(!vc.select("does-not-exist"));
        assert_eq!(vc.view(), &ViewState::ProjectList);
    }

    #[test]
    fn back_without_selection_is_harmless() {
        let mut vc = on_list();
        vc.back();
        assert_eq!(vc.view(), &ViewState::ProjectList);

        let mut intro = controller();
        intro.back();
        assert_eq!(intro.view(), &ViewState::Intro);
    }

    #[test]
    fn navigate_from_list_scrolls_immediately() {
        let mut vc = on_list();
        let hits = record_scrolls(&mut vc);
        vc.navigate("about");
        assert_eq!(*hits.borrow(), vec![Section::About]);
    }

    #[test]
    fn navigate_from_detail_goes_back_then_scrolls_after_settle() {
        let mut vc = on_list();
        let hits = record_scrolls(&mut vc);
        vc.select("project1");

        vc.navigate("contact");
        assert_eq!(vc.view(), &ViewState::ProjectList);
        assert!(hits.borrow().is_empty());

        vc.advance(ms(SECTION_SETTLE_DELAY_MS - 1));
        assert!(hits.borrow().is_empty());

        vc.advance(ms(1));
        assert_eq!(*hits.borrow(), vec![Section::Contact]);
    }

    #[test]
    fn navigate_to_unknown_section_only_goes_back() {
        let mut vc = on_list();
        let hits = record_scrolls(&mut vc);
        vc.select("project1");

        vc.navigate("pricing");
        vc.advance(ms(SECTION_SETTLE_DELAY_MS * 5));
        assert_eq!(vc.view(), &ViewState::ProjectList);
        assert!(hits.borrow().is_empty());
    }

    #[test]
    fn logo_click_clears_selection() {
        let mut vc = on_list();
        vc.select("project1");

        vc.logo_click();
        assert_eq!(vc.view(), &ViewState::Intro);
        assert!(vc.selected_project().is_none());
        assert!(!vc.intro_hidden());

        vc.enter();
        vc.advance(ms(INTRO_EXIT_DELAY_MS));
        assert_eq!(vc.view(), &ViewState::ProjectList);
        assert!(vc.selected_project().is_none());
    }

    #[test]
    fn logo_click_from_list_returns_to_intro() {
        let mut vc = on_list();
        vc.logo_click();
        assert_eq!(vc.view(), &ViewState::Intro);
    }

    #[test]
    fn cookie_banner_appears_after_delay_on_first_visit() {
        let mut vc = on_list();
        assert!(!vc.cookie_banner_visible());

        vc.advance(ms(COOKIE_BANNER_DELAY_MS - 1));
        assert!(!vc.cookie_banner_visible());

        vc.advance(ms(1));
        assert!(vc.cookie_banner_visible());

        vc.respond_to_cookies(false);
        assert!(!vc.cookie_banner_visible());
    }

    #[test]
    fn answered_consent_is_not_asked_again_after_reload() {
        for (accepted, stored) in [(true, "true"), (false, "false")] {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("storage.toml");

            let mut vc = ViewController::new(
                ProjectCatalog::builtin(),
                ConsentStore::new(TomlFileStore::at(&path)),
            );
            vc.enter();
            vc.advance(ms(INTRO_EXIT_DELAY_MS + COOKIE_BANNER_DELAY_MS));
            assert!(vc.cookie_banner_visible(), "first visit asks (accepted = {accepted})");

            vc.respond_to_cookies(accepted);
            assert!(!vc.cookie_banner_visible());
            assert_eq!(
                TomlFileStore::at(&path).get("cookiesAccepted").unwrap().as_deref(),
                Some(stored)
            );

            let mut reloaded = ViewController::new(
                ProjectCatalog::builtin(),
                ConsentStore::new(TomlFileStore::at(&path)),
            );
            reloaded.enter();
            reloaded.advance(ms(INTRO_EXIT_DELAY_MS + COOKIE_BANNER_DELAY_MS * 3));
            assert!(!reloaded.cookie_banner_visible());
            assert_eq!(reloaded.pending_timers().count(), 0);
        }
    }

    #[test]
    fn banner_timer_from_an_earlier_visit_is_ignored() {
        let mut vc = controller();
        vc.enter();
        vc.advance(ms(INTRO_EXIT_DELAY_MS));
        vc.advance(ms(100));
        vc.logo_click();

        vc.enter();
        vc.advance(ms(INTRO_EXIT_DELAY_MS));
        vc.advance(ms(100));
        assert_eq!(vc.view(), &ViewState::ProjectList);
        assert!(!vc.cookie_banner_visible());

        vc.advance(ms(COOKIE_BANNER_DELAY_MS - 101));
        assert!(!vc.cookie_banner_visible());
        vc.advance(ms(1));
        assert!(vc.cookie_banner_visible());
    }

    #[test]
    fn coarse_advance_keeps_the_banner_delay() {
        let mut vc = controller();
        vc.enter();
        vc.advance(ms(INTRO_EXIT_DELAY_MS + COOKIE_BANNER_DELAY_MS - 1));
        assert_eq!(vc.view(), &ViewState::ProjectList);
        assert!(!vc.cookie_banner_visible());

        vc.advance(ms(1));
        assert!(vc.cookie_banner_visible());
    }

    #[test]
    fn declining_is_persisted_and_final() {
        let mut storage = MemoryStore::new();
        storage.set("cookiesAccepted", "false").unwrap();
        let mut vc = ViewController::new(ProjectCatalog::builtin(), ConsentStore::new(storage));
        vc.enter();
        vc.advance(ms(10_000));
        assert!(!vc.cookie_banner_visible());
    }

    #[test]
    fn banner_timer_does_not_surface_on_intro() {
        let mut vc = on_list();
        vc.logo_click();
        vc.advance(ms(COOKIE_BANNER_DELAY_MS));
        assert!(!vc.cookie_banner_visible());
    }

    #[test]
    fn stale_intro_timer_still_fires() {
        let mut vc = controller();
        vc.enter();
        vc.advance(ms(400));
        vc.enter();
        assert_eq!(
            vc.pending_timers()
                .filter(|d| **d == Deferred::FinishIntroExit)
                .count(),
            2
        );

        vc.advance(ms(400));
        assert_eq!(vc.view(), &ViewState::ProjectList);

        // Returning to the intro before the second timer is due: the stale
        // timer switches to the list again.
        vc.logo_click();
        vc.advance(ms(400));
        assert_eq!(vc.view(), &ViewState::ProjectList);
    }

    #[test]
    fn language_toggle_works_on_every_screen() {
        let mut vc = controller();
        vc.toggle_language();
        assert_eq!(vc.language(), Language::En);

        vc.enter();
        vc.advance(ms(INTRO_EXIT_DELAY_MS));
        vc.select("project1");
        assert_eq!(vc.language(), Language::En);
        assert_eq!(
            vc.translate("뒤로 가기", "Back"),
            "Back"
        );

        vc.set_language(Language::Ko);
        vc.set_language(Language::Ko);
        assert_eq!(vc.language(), Language::Ko);
    }

    #[test]
    fn custom_catalog_without_curated_details() {
        let summary = ProjectSummary {
            id: "lab".into(),
            icon: "🧪".into(),
            title: LocalizedText::new("실험", "Lab"),
            description: LocalizedText::new("설명", "Desc"),
            download_url: "#".into(),
            disabled: false,
        };
        let catalog = ProjectCatalog::with_entries(vec![summary], Vec::new());
        let mut vc = ViewController::new(catalog, ConsentStore::new(MemoryStore::new()));
        vc.enter();
        vc.advance(ms(INTRO_EXIT_DELAY_MS));

        assert!(vc.select("lab"));
        let detail = vc.selected_detail().unwrap();
        assert_eq!(detail.detail_description.en, "Desc");
        assert_eq!(detail.version, "v1.0.0");
    }
}
