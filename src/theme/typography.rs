//! Typography - Font Sizes

/// Font sizes in pixels
pub struct Typography;

impl Typography {
    pub const TEXT_SM: f32 = 14.0;
    pub const TEXT_BASE: f32 = 16.0;
    pub const TEXT_LG: f32 = 18.0;
    pub const TEXT_XL: f32 = 20.0;
    pub const TEXT_2XL: f32 = 24.0;
    pub const TEXT_3XL: f32 = 30.0;
    /// Section headings on the project list
    pub const HEADING: f32 = 28.0;
    /// Welcome and detail titles
    pub const TITLE: f32 = 40.0;
    /// Project glyph on cards
    pub const CARD_ICON: f32 = 48.0;
    /// Project glyph on the detail page
    pub const DETAIL_ICON: f32 = 64.0;
}
