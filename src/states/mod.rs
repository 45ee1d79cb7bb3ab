//! State Management Layer
//!
//! The view/navigation core and the GPUI store around it. Data flows one
//! way:
//!
//! ```text
//! UI click → PortfolioState transition → ViewController → notify → UI refresh
//!                         ▲                    │
//!                         └── timer wake-up ◀──┘ (deferred work)
//! ```
//!
//! Everything except `app` is free of rendering types.

mod app;
mod consent;
mod i18n;
mod navigation;
mod pointer;
mod view;

pub use app::*;
pub use consent::*;
pub use i18n::*;
pub use navigation::*;
pub use pointer::*;
pub use view::*;
