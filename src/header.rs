// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Smart header: hide on scroll down, show on scroll up.
//!
//! Scroll events arrive far more often than the page repaints, so they are
//! coalesced: the first event of a frame asks the host for an animation
//! frame and the update runs once, against the latest offset, when it fires.
//! Every event also restarts an idle timer that brings a hidden header back
//! once the reader stops scrolling.

use tracing::trace;

use crate::config::HeaderConfig;

/// The two CSS states the header can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderVisibility {
    Visible,
    Hidden,
}

impl HeaderVisibility {
    /// Class the header element carries in this state.
    pub fn class_name(self) -> &'static str {
        match self {
            HeaderVisibility::Visible => "header-visible",
            HeaderVisibility::Hidden => "header-hidden",
        }
    }
}

/// What the header controller needs from the page.
pub trait HeaderHost {
    /// Put the header in `visibility` (and take it out of the other state).
    fn apply(&mut self, visibility: HeaderVisibility);

    /// Call [`HeaderController::on_frame`] on the next animation frame.
    fn request_frame(&mut self);

    /// Call [`HeaderController::on_idle`] with `token` after `delay_ms`.
    fn schedule_idle(&mut self, delay_ms: u32, token: u64);
}

pub struct HeaderController<H: HeaderHost> {
    host: H,
    config: HeaderConfig,
    visibility: HeaderVisibility,
    /// Offset the next direction is measured from.
    last_offset: f64,
    latest_offset: f64,
    frame_requested: bool,
    idle_token: u64,
    idle_offset: f64,
}

impl<H: HeaderHost> HeaderController<H> {
    /// Attach to a page header; it starts out visible.
    pub fn mount(mut host: H, config: HeaderConfig) -> Self {
        host.apply(HeaderVisibility::Visible);
        Self {
            host,
            config,
            visibility: HeaderVisibility::Visible,
            last_offset: 0.0,
            latest_offset: 0.0,
            frame_requested: false,
            idle_token: 0,
            idle_offset: 0.0,
        }
    }

    pub fn visibility(&self) -> HeaderVisibility {
        self.visibility
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// A scroll event at vertical `offset`.
    pub fn on_scroll(&mut self, offset: f64) {
        // Overscroll bounce on some browsers
        if offset < 0.0 {
            return;
        }
        self.latest_offset = offset;
        if !self.frame_requested {
            self.frame_requested = true;
            self.host.request_frame();
        }

        self.idle_token += 1;
        self.idle_offset = offset;
        self.host
            .schedule_idle(self.config.idle_reveal_ms, self.idle_token);
    }

    /// The animation frame requested by [`on_scroll`](Self::on_scroll).
    pub fn on_frame(&mut self) {
        self.frame_requested = false;
        self.update(self.latest_offset);
    }

    /// The idle timer fired. Only the most recent one counts.
    pub fn on_idle(&mut self, token: u64) {
        if token != self.idle_token {
            return;
        }
        if self.idle_offset > self.config.hide_after {
            self.set(HeaderVisibility::Visible);
        }
    }

    fn update(&mut self, offset: f64) {
        let delta = offset - self.last_offset;
        if delta.abs() < self.config.scroll_threshold {
            return;
        }

        if offset <= 0.0 {
            self.set(HeaderVisibility::Visible);
            return;
        }

        if delta > 0.0 {
            if offset > self.config.hide_after {
                self.set(HeaderVisibility::Hidden);
            }
        } else {
            self.set(HeaderVisibility::Visible);
        }
        self.last_offset = offset;
    }

    fn set(&mut self, visibility: HeaderVisibility) {
        if self.visibility != visibility {
            trace!(class = visibility.class_name(), "header");
            self.visibility = visibility;
            self.host.apply(visibility);
        }
    }
}
