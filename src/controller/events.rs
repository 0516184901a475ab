//! Explicit page event interface

use super::bindings::{self, PageKey, SubmitOutcome};
use super::context::PageContext;
use crate::config::SiteConfig;
use crate::state::CloseReason;
use crate::storage::PreferenceStore;
use anyhow::Result;
use chrono::{DateTime, Datelike, Local, Utc};
use std::time::Instant;

/// Events a host delivers to the page, in the order they occur
pub trait PageEvents {
    /// Full page load at the given wall-clock time
    fn on_load(&mut self, now: DateTime<Local>, started: Instant);
    fn on_toggle_nav(&mut self);
    fn on_nav_link(&mut self, href: &str);
    fn on_toggle_theme(&mut self);
    fn on_focus(&mut self, field: &str);
    fn on_blur(&mut self, field: &str);
    fn on_input(&mut self, field: &str, value: &str);
    fn on_submit(&mut self, submitted_at: DateTime<Utc>) -> Result<SubmitOutcome>;
    fn on_keydown(&mut self, key: PageKey);
    fn on_close_click(&mut self);
    fn on_backdrop_click(&mut self);
    /// Animation frame
    fn on_tick(&mut self, now: Instant);
}

/// Drives a [`PageContext`] from page events
#[derive(Debug)]
pub struct PageController {
    pub ctx: PageContext,
}

impl PageController {
    pub fn new(config: &SiteConfig, store: Box<dyn PreferenceStore>) -> Self {
        Self {
            ctx: PageContext::new(config, store),
        }
    }
}

impl PageEvents for PageController {
    fn on_load(&mut self, now: DateTime<Local>, started: Instant) {
        bindings::load_theme(&mut self.ctx);
        bindings::show_year(&mut self.ctx, now.year());
        bindings::mark_current_link(&mut self.ctx);
        bindings::start_skill_bars(&mut self.ctx, started);
    }

    fn on_toggle_nav(&mut self) {
        bindings::toggle_nav(&mut self.ctx);
    }

    fn on_nav_link(&mut self, href: &str) {
        bindings::activate_nav_link(&mut self.ctx, href);
    }

    fn on_toggle_theme(&mut self) {
        bindings::toggle_theme(&mut self.ctx);
    }

    fn on_focus(&mut self, field: &str) {
        bindings::focus_field(&mut self.ctx, field);
    }

    fn on_blur(&mut self, field: &str) {
        bindings::blur_field(&mut self.ctx, field);
    }

    fn on_input(&mut self, field: &str, value: &str) {
        bindings::input_field(&mut self.ctx, field, value);
    }

    fn on_submit(&mut self, submitted_at: DateTime<Utc>) -> Result<SubmitOutcome> {
        bindings::submit(&mut self.ctx, submitted_at)
    }

    fn on_keydown(&mut self, key: PageKey) {
        bindings::keydown(&mut self.ctx, key);
    }

    fn on_close_click(&mut self) {
        bindings::close_dialog(&mut self.ctx, CloseReason::CloseButton);
    }

    fn on_backdrop_click(&mut self) {
        bindings::close_dialog(&mut self.ctx, CloseReason::Backdrop);
    }

    fn on_tick(&mut self, now: Instant) {
        bindings::tick_skill_bars(&mut self.ctx, now);
    }
}
