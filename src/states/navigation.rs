//! Section Navigation
//!
//! Named regions of the project list page and the bridge that turns a
//! section token into a scroll action. The page registers one handler per
//! section while it is mounted.

use ahash::AHashMap;
use std::fmt;
use tracing::debug;

/// A navigable region of the project list page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Top of the page
    Home,
    Projects,
    DevLog,
    About,
    Contact,
    Policy,
}

impl Section {
    /// Parse a section token; unknown tokens yield `None`
    pub fn from_token(token: &str) -> Option<Self> {
        Self::all().iter().copied().find(|s| s.token() == token)
    }

    /// Token naming this section
    pub fn token(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Projects => "projects",
            Section::DevLog => "dev-log",
            Section::About => "about",
            Section::Contact => "contact",
            Section::Policy => "policy",
        }
    }

    /// Locale key of the header label
    pub fn label_key(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Projects => "projects",
            Section::DevLog => "dev_log",
            Section::About => "about",
            Section::Contact => "contact",
            Section::Policy => "policy",
        }
    }

    /// Header menu order
    pub fn all() -> &'static [Section] {
        &[
            Section::Home,
            Section::Projects,
            Section::DevLog,
            Section::About,
            Section::Contact,
            Section::Policy,
        ]
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

type ScrollHandler = Box<dyn Fn()>;

/// Registry of per-section scroll handlers
#[derive(Default)]
pub struct NavigationBridge {
    handlers: AHashMap<Section, ScrollHandler>,
}

impl NavigationBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the handler for `section`, replacing any previous one
    pub fn register(&mut self, section: Section, handler: impl Fn() + 'static) {
        self.handlers.insert(section, Box::new(handler));
    }

    /// Drop every handler (the page that owned them went away)
    pub fn clear(&mut self) {
        self.handlers.clear();
    }

    pub fn is_registered(&self, section: Section) -> bool {
        self.handlers.contains_key(&section)
    }

    /// Scroll to the section named by `token`. Unknown tokens and sections
    /// without a handler are a silent no-op. Returns whether a handler ran.
    pub fn go_to(&self, token: &str) -> bool {
        let Some(section) = Section::from_token(token) else {
            debug!(token, "Ignoring unknown section");
            return false;
        };

        match self.handlers.get(&section) {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for NavigationBridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationBridge")
            .field("sections", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn tokens_round_trip_for_every_section() {
        for section in Section::all() {
            assert_eq!(Section::from_token(section.token()), Some(*section));
        }
        assert_eq!(Section::from_token("dev_log"), None);
    }

    #[test]
    fn go_to_runs_registered_handler() {
        let hits = Rc::new(RefCell::new(Vec::new()));
        let mut bridge = NavigationBridge::new();
        for section in Section::all() {
            let hits = hits.clone();
            let section = *section;
            bridge.register(section, move || hits.borrow_mut().push(section));
        }

        assert!(bridge.go_to("contact"));
        assert!(bridge.go_to("home"));
        assert_eq!(*hits.borrow(), vec![Section::Contact, Section::Home]);
    }

    #[test]
    fn unknown_or_unregistered_sections_are_ignored() {
        let bridge = NavigationBridge::new();
        assert!(!bridge.go_to("pricing"));
        assert!(!bridge.go_to("about"));
    }
}
