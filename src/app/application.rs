//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    AnyView, App, AppContext, Application, Bounds, SharedString, TitlebarOptions, WindowBounds,
    WindowOptions, px, size,
};
use gpui_component::Root;
use tracing::{error, info, warn};

use crate::assets::Assets;
use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, WINDOW_TITLE};
use crate::domain::ProjectCatalog;
use crate::helpers::{MenuAction, MemoryStore, TomlFileStore, new_key_bindings};
use crate::states::{ConsentStore, PortfolioStore, ViewController};
use crate::views::PortfolioRoot;

/// Open the consent store, falling back to session-only storage
fn open_consent_store() -> ConsentStore {
    match TomlFileStore::open_default() {
        Ok(store) => {
            info!(path = ?store.path(), "Using storage file");
            ConsentStore::new(store)
        }
        Err(e) => {
            warn!(error = %e, "Storage unavailable, consent will not persist");
            ConsentStore::new(MemoryStore::new())
        }
    }
}

/// Run the portfolio application
pub fn run_app() {
    Application::new().with_assets(Assets).run(|cx: &mut App| {
        gpui_component::init(cx);

        // Set up action handlers
        cx.bind_keys(new_key_bindings());
        cx.on_action(|action: &MenuAction, cx: &mut App| match action {
            MenuAction::Quit => cx.quit(),
        });

        // Quit the app when all windows are closed (macOS behavior)
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        // Initialize global store
        let controller = ViewController::new(ProjectCatalog::builtin(), open_consent_store());
        let store = PortfolioStore::new(controller, cx);
        cx.set_global(store);

        // Create main window
        let bounds = Bounds::centered(
            None,
            size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
            cx,
        );
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from(WINDOW_TITLE)),
                ..Default::default()
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |window, cx| {
            let view: AnyView = cx.new(|cx| PortfolioRoot::new(window, cx)).into();
            cx.new(|cx| Root::new(view, window, cx))
        });
        if let Err(e) = opened {
            error!(error = %e, "Failed to open main window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
