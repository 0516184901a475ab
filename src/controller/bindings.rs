//! Event handlers over the page context.
//!
//! Each handler is a plain function of `&mut PageContext` so any host can
//! call it synchronously.

use super::context::PageContext;
use crate::state::{
    CloseReason, FocusTarget, SubmissionRecord, ThemePreference, ValidationError, THEME_KEY,
};
use anyhow::Result;
use chrono::{DateTime, Utc};
use std::time::Instant;

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted(SubmissionRecord),
    Rejected(Vec<ValidationError>),
    /// The dialog was open and blocked the form
    Ignored,
}

/// Keys the page reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKey {
    Escape,
    Enter,
    Other,
}

/// Apply the stored theme, defaulting to dark
pub fn load_theme(ctx: &mut PageContext) {
    ctx.theme = match ctx.store.get(THEME_KEY) {
        Ok(Some(raw)) => raw.parse().unwrap_or_else(|err| {
            tracing::warn!("Ignoring stored theme: {err}");
            ThemePreference::default()
        }),
        Ok(None) => ThemePreference::default(),
        Err(err) => {
            tracing::warn!("Failed to read theme preference: {err:#}");
            ThemePreference::default()
        }
    };
    tracing::debug!("Theme on load: {}", ctx.theme);
}

/// Switch theme and persist the new choice
pub fn toggle_theme(ctx: &mut PageContext) {
    ctx.theme = ctx.theme.toggle();
    if let Err(err) = ctx.store.set(THEME_KEY, ctx.theme.as_str()) {
        tracing::warn!("Failed to persist theme preference: {err:#}");
    }
    tracing::info!("Theme switched to {}", ctx.theme);
}

pub fn toggle_nav(ctx: &mut PageContext) {
    ctx.nav.toggle();
}

/// Follow a navigation link: the panel closes and the link becomes current
pub fn activate_nav_link(ctx: &mut PageContext, href: &str) {
    ctx.nav.close();
    ctx.page_path = href.to_string();
    mark_current_link(ctx);
}

pub fn mark_current_link(ctx: &mut PageContext) {
    let path = ctx.page_path.clone();
    ctx.nav.mark_current(&path);
}

pub fn show_year(ctx: &mut PageContext, year: i32) {
    ctx.year = Some(year);
}

/// Begin the one-shot skill bar fill
pub fn start_skill_bars(ctx: &mut PageContext, now: Instant) {
    if ctx.skills.start(now) {
        tracing::debug!("Animating {} skill bars", ctx.skills.bars.len());
    }
}

pub fn tick_skill_bars(ctx: &mut PageContext, now: Instant) {
    ctx.skills.update(now);
}

pub fn focus_field(ctx: &mut PageContext, name: &str) {
    if ctx.is_dialog_open() || ctx.form.field(name).is_none() {
        return;
    }
    ctx.set_focus(FocusTarget::Field(name.to_string()));
}

/// Re-check a field when it loses focus
pub fn blur_field(ctx: &mut PageContext, name: &str) {
    if ctx.is_dialog_open() {
        return;
    }
    revalidate(ctx, name);
}

/// Store new input; re-check only a field already marked invalid
pub fn input_field(ctx: &mut PageContext, name: &str, value: &str) {
    if ctx.is_dialog_open() {
        return;
    }
    let Some(field) = ctx.form.field_mut(name) else {
        tracing::debug!("Input for unknown field {name}");
        return;
    };
    field.set_text(value);
    if ctx.form.is_marked(name) {
        revalidate(ctx, name);
    }
}

/// Validate every field and present the outcome
pub fn submit(ctx: &mut PageContext, submitted_at: DateTime<Utc>) -> Result<SubmitOutcome> {
    if ctx.is_dialog_open() {
        return Ok(SubmitOutcome::Ignored);
    }

    let outcome = ctx.validator.check(ctx.form.fields());
    let errors = outcome.as_ref().err().map_or(&[][..], Vec::as_slice);
    let names: Vec<String> = ctx.form.fields().iter().map(|f| f.name.clone()).collect();
    for name in &names {
        match errors.iter().find(|e| &e.field_name == name) {
            Some(error) => ctx.form.mark(error),
            None => ctx.form.clear_mark(name),
        }
    }

    let validated = match outcome {
        Ok(validated) => validated,
        Err(errors) => {
            tracing::info!("Submission rejected with {} invalid fields", errors.len());
            let focus = ctx.presenter.present_errors(&errors, ctx.mode);
            ctx.set_focus(focus);
            return Ok(SubmitOutcome::Rejected(errors));
        }
    };
    let record = SubmissionRecord::capture(&validated, submitted_at);
    let previous_focus = std::mem::take(&mut ctx.focus);
    let focus = ctx.presenter.present(&record, ctx.mode, previous_focus)?;
    ctx.set_focus(focus);
    tracing::info!("Submission accepted with {} fields", record.entries.len());
    Ok(SubmitOutcome::Accepted(record))
}

pub fn keydown(ctx: &mut PageContext, key: PageKey) {
    match key {
        PageKey::Escape => close_dialog(ctx, CloseReason::Escape),
        PageKey::Enter if ctx.focus == FocusTarget::DialogClose => {
            close_dialog(ctx, CloseReason::CloseButton)
        }
        _ => {}
    }
}

pub fn close_dialog(ctx: &mut PageContext, reason: CloseReason) {
    if let Some(focus) = ctx.presenter.close(reason) {
        ctx.set_focus(focus);
    }
}

fn revalidate(ctx: &mut PageContext, name: &str) {
    let Some(field) = ctx.form.field(name) else {
        return;
    };
    match ctx.validator.validate(field) {
        Ok(()) => ctx.form.clear_mark(name),
        Err(error) => ctx.form.mark(&error),
    }
}
