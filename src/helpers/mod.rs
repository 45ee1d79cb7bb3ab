//! Helper Utilities
//!
//! Common utilities used across the application.

mod action;
mod fs;
mod storage;
mod timers;

pub use action::*;
pub use fs::*;
pub use storage::*;
pub use timers::*;
