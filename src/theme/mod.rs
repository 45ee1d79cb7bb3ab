//! Theme
//!
//! Palette and typography of the portfolio.

pub mod colors;
pub mod typography;

pub use colors::PortfolioColors;
pub use typography::Typography;
