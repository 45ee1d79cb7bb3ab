//! Cursor Overlay
//!
//! Draws a dot at the pointer and a ring trailing it. Pointer moves are fed
//! in by the root view; while the ring is catching up the overlay requests
//! animation frames.

use std::time::Instant;

use crate::states::{PointerFollower, PointerPosition};
use crate::theme::PortfolioColors;
use gpui::{Context, Pixels, Point, Window, div, prelude::*, px};

const DOT_SIZE: f32 = 8.0;
const RING_SIZE: f32 = 32.0;

/// Cursor trail overlay
pub struct CursorOverlay {
    follower: PointerFollower,
    epoch: Instant,
}

impl CursorOverlay {
    pub fn new() -> Self {
        Self {
            follower: PointerFollower::new(),
            epoch: Instant::now(),
        }
    }

    /// Record a pointer move
    pub fn on_move(&mut self, position: Point<Pixels>, cx: &mut Context<Self>) {
        let position = PointerPosition::new(f32::from(position.x), f32::from(position.y));
        self.follower.on_move(position, self.epoch.elapsed());
        cx.notify();
    }

    fn render_mark(position: PointerPosition, size: f32) -> gpui::Div {
        div()
            .absolute()
            .left(px(position.x - size / 2.0))
            .top(px(position.y - size / 2.0))
            .size(px(size))
            .rounded_full()
    }
}

impl Default for CursorOverlay {
    fn default() -> Self {
        Self::new()
    }
}

impl Render for CursorOverlay {
    fn render(&mut self, window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        self.follower.tick(self.epoch.elapsed());
        if self.follower.is_trailing() {
            window.request_animation_frame();
        }

        div()
            .absolute()
            .top_0()
            .left_0()
            .size_full()
            .child(Self::render_mark(self.follower.pointer(), DOT_SIZE).bg(PortfolioColors::cursor()))
            .child(
                Self::render_mark(self.follower.follower(), RING_SIZE)
                    .border_2()
                    .border_color(PortfolioColors::cursor_follower()),
            )
    }
}
