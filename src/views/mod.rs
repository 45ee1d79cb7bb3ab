//! View Components
//!
//! UI components for the portfolio window.
//!
//! ## Screen Structure
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Intro                 │  Header (logo · sections · EN/KO)  │
//! │                        ├────────────────────────────────────┤
//! │     [logo]             │  ProjectList (scrolling sections)  │
//! │     welcome            │    or                              │
//! │     [Enter]            │  ProjectDetail (selected project)  │
//! │                        ├────────────────────────────────────┤
//! │                        │  CookieBanner (first visit)        │
//! └─────────────────────────────────────────────────────────────┘
//!              CursorOverlay is drawn above every screen
//! ```

mod cookie_banner;
mod cursor;
mod header;
mod intro;
mod project_card;
mod project_detail;
mod project_list;
mod root;

pub use cookie_banner::*;
pub use cursor::*;
pub use header::*;
pub use intro::*;
pub use project_card::*;
pub use project_detail::*;
pub use project_list::*;
pub use root::*;
