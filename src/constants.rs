//! Constants
//!
//! Timing contracts, layout geometry and storage keys shared across the app.

/// Delay between pressing "enter" on the intro and the project list appearing
pub const INTRO_EXIT_DELAY_MS: u64 = 800;

/// Settle delay between leaving a detail page and scrolling to a section
pub const SECTION_SETTLE_DELAY_MS: u64 = 100;

/// Delay before the cookie banner is shown on a first visit
pub const COOKIE_BANNER_DELAY_MS: u64 = 1000;

/// Lag of the pointer follower behind the pointer
pub const POINTER_FOLLOW_DELAY_MS: u64 = 100;

/// Storage key holding the cookie consent flag
pub const CONSENT_STORAGE_KEY: &str = "cookiesAccepted";

/// Storage file name inside the config directory
pub const STORAGE_FILE_NAME: &str = "storage.toml";

/// Version reported for projects without a curated detail record
pub const DEFAULT_PROJECT_VERSION: &str = "v1.0.0";

/// Download URL placeholder for projects that have nothing to download
pub const PLACEHOLDER_URL: &str = "#";

/// Window title
pub const WINDOW_TITLE: &str = "Jisrubyy Web - 개발자 페이지";

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 860.0;

/// Header bar height
pub const HEADER_HEIGHT: f32 = 64.0;

/// Width of a project card in the grid
pub const PROJECT_CARD_WIDTH: f32 = 320.0;

/// Maximum width of the detail page body
pub const DETAIL_MAX_WIDTH: f32 = 1200.0;
