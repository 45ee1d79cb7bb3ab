//! Keyboard Actions and Shortcuts
//!
//! Defines global keyboard shortcuts and action dispatching.

use gpui::{Action, KeyBinding};
use schemars::JsonSchema;
use serde::Deserialize;

/// Menu actions (application-level)
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum MenuAction {
    /// Quit the application
    Quit,
}

/// Screen navigation actions
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum NavAction {
    /// Leave the detail page for the project list
    Back,
    /// Return to the intro splash (same as clicking the logo)
    Intro,
}

/// Language actions
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum LocaleAction {
    /// Flip between Korean and English
    Toggle,
}

/// Create global keyboard bindings
pub fn new_key_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("secondary-q", MenuAction::Quit, None),
        KeyBinding::new("escape", NavAction::Back, None),
        KeyBinding::new("secondary-h", NavAction::Intro, None),
        KeyBinding::new("secondary-l", LocaleAction::Toggle, None),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_action_has_a_shortcut() {
        let bindings = new_key_bindings();
        let bound = |action: &dyn Action| bindings.iter().any(|b| b.action().partial_eq(action));

        assert!(bound(&MenuAction::Quit));
        assert!(bound(&NavAction::Back));
        assert!(bound(&NavAction::Intro));
        assert!(bound(&LocaleAction::Toggle));
        assert_eq!(bindings.len(), 4);
    }
}
