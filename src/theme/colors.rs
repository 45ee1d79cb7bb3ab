//! Colors - Portfolio Theme Colors

use gpui::{Rgba, rgb, rgba};

/// Portfolio color palette - All colors are accessed via associated functions
pub struct PortfolioColors;

impl PortfolioColors {
    // Brand colors
    /// Brand accent - light green
    pub fn light_green() -> Rgba { rgb(0x1abc9c) }
    /// Darker brand green (gradient end)
    pub fn dark_green() -> Rgba { rgb(0x16a085) }

    // Background colors
    /// Page background
    pub fn dark_gray() -> Rgba { rgb(0x1e272e) }
    /// Cards, panels, header
    pub fn medium_gray() -> Rgba { rgb(0x2c3e50) }
    /// Panel border (translucent green)
    pub fn panel_border() -> Rgba { rgba(0x1abc9c4d) }
    /// Cookie banner backdrop
    pub fn banner_bg() -> Rgba { rgba(0x2c3e50f2) }

    // Text colors
    /// Primary text
    pub fn white() -> Rgba { rgb(0xecf0f1) }
    /// Secondary text
    pub fn muted() -> Rgba { rgb(0x95a5a6) }

    // Cursor colors
    /// Pointer dot
    pub fn cursor() -> Rgba { rgb(0x1abc9c) }
    /// Trailing ring
    pub fn cursor_follower() -> Rgba { rgba(0x1abc9c66) }
}
