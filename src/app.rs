//! Terminal host: maps key and mouse input onto page events

use crate::controller::{PageController, PageEvents, PageKey, SubmitOutcome};
use crate::platform::is_shortcut;
use crate::state::{FieldKind, FocusTarget, Form};
use crate::ui::form_height;
use anyhow::Result;
use chrono::Utc;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use std::cell::Cell;
use std::time::Instant;

/// Rows moved per scroll step
const SCROLL_STEP: u16 = 3;

/// Main application struct
pub struct App {
    /// The page being previewed
    pub page: PageController,
    /// Whether the app should quit
    quit: bool,
    /// Feedback shown in the footer
    pub status_message: Option<String>,
    /// Page scroll offset in rows
    pub scroll: u16,
    /// Highlighted option inside a checkbox group
    pub option_cursor: usize,
    /// Area of the open dialog, recorded at draw time for hit testing
    pub dialog_area: Cell<Option<Rect>>,
    /// Dialog body scroll, clamped at draw time
    pub dialog_scroll: Cell<u16>,
    /// Keys go to the navigation panel instead of the form
    nav_focused: bool,
}

impl App {
    pub fn new(page: PageController) -> Self {
        Self {
            page,
            quit: false,
            status_message: None,
            scroll: 0,
            option_cursor: 0,
            dialog_area: Cell::new(None),
            dialog_scroll: Cell::new(0),
            nav_focused: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether an animation wants fast redraws
    pub fn is_animating(&self) -> bool {
        self.page.ctx.skills.is_animating()
    }

    /// Advance animations and honor scroll requests from the presenter
    pub fn tick(&mut self, now: Instant) {
        self.page.on_tick(now);
        if self.page.ctx.presenter.inline.scroll_requested {
            self.scroll = 0;
            self.page.ctx.presenter.scroll_handled();
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.kind == KeyEventKind::Release {
            return Ok(());
        }

        // The modal blocks the page underneath
        if self.page.ctx.is_dialog_open() && !is_quit(&key) {
            match key.code {
                KeyCode::Esc => self.page.on_keydown(PageKey::Escape),
                KeyCode::Enter => self.page.on_keydown(PageKey::Enter),
                KeyCode::Down => self.scroll_dialog(1),
                KeyCode::Up => self.scroll_dialog(-1),
                KeyCode::PageDown => self.scroll_dialog(SCROLL_STEP as i32),
                KeyCode::PageUp => self.scroll_dialog(-(SCROLL_STEP as i32)),
                _ => self.page.on_keydown(PageKey::Other),
            }
            return Ok(());
        }

        if is_shortcut(key.modifiers) {
            match key.code {
                KeyCode::Char('s') => self.submit()?,
                KeyCode::Char('t') => self.page.on_toggle_theme(),
                KeyCode::Char('n') => {
                    self.page.on_toggle_nav();
                    self.nav_focused = self.page.ctx.nav.open;
                }
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.quit = true
                }
                _ => {}
            }
            return Ok(());
        }

        if self.nav_focused && self.page.ctx.nav.open {
            match key.code {
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    self.follow_nav_link(c as usize - '0' as usize);
                    return Ok(());
                }
                KeyCode::Esc => {
                    self.page.on_toggle_nav();
                    self.nav_focused = false;
                    return Ok(());
                }
                _ => {}
            }
        }
        // Anything else hands the keyboard back to the form
        self.nav_focused = false;

        match key.code {
            KeyCode::Tab => self.move_focus(true),
            KeyCode::BackTab => self.move_focus(false),
            KeyCode::PageDown => self.scroll_by(SCROLL_STEP as i32),
            KeyCode::PageUp => self.scroll_by(-(SCROLL_STEP as i32)),
            KeyCode::Esc => self.page.on_keydown(PageKey::Escape),
            KeyCode::Enter => {
                if self.page.ctx.form.is_submit_row_active() {
                    self.submit()?;
                } else if self.active_field_is_multiline() {
                    self.edit_active_field(key.code);
                } else {
                    self.move_focus(true);
                }
            }
            _ => self.edit_active_field(key.code),
        }
        Ok(())
    }

    /// Handle a mouse event
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.nav_focused = false;
                let Some(area) = self.dialog_area.get() else {
                    return;
                };
                if !self.page.ctx.is_dialog_open() {
                    return;
                }
                let position = Position::new(mouse.column, mouse.row);
                if !area.contains(position) {
                    self.page.on_backdrop_click();
                } else if mouse.row + 2 == area.y + area.height {
                    // Hint row holding the close control
                    self.page.on_close_click();
                }
            }
            MouseEventKind::ScrollDown if self.page.ctx.is_dialog_open() => {
                self.scroll_dialog(SCROLL_STEP as i32)
            }
            MouseEventKind::ScrollUp if self.page.ctx.is_dialog_open() => {
                self.scroll_dialog(-(SCROLL_STEP as i32))
            }
            MouseEventKind::ScrollDown => self.scroll_by(SCROLL_STEP as i32),
            MouseEventKind::ScrollUp => self.scroll_by(-(SCROLL_STEP as i32)),
            _ => {}
        }
    }

    fn submit(&mut self) -> Result<()> {
        if let Some(name) = self.page.ctx.form.active_name().map(str::to_string) {
            self.page.on_blur(&name);
        }
        self.dialog_scroll.set(0);
        self.status_message = match self.page.on_submit(Utc::now())? {
            SubmitOutcome::Accepted(record) => Some(match record.get("name") {
                Some(name) => format!(
                    "Thanks {}, {} fields sent",
                    name.display_value(),
                    record.entries.len()
                ),
                None => format!("{} fields sent", record.entries.len()),
            }),
            SubmitOutcome::Rejected(_) => Some(format!(
                "{} fields need attention",
                self.page.ctx.form.marked_count()
            )),
            SubmitOutcome::Ignored => None,
        };
        Ok(())
    }

    fn follow_nav_link(&mut self, number: usize) {
        let href = number
            .checked_sub(1)
            .and_then(|i| self.page.ctx.nav.links.get(i))
            .map(|link| link.href.clone());
        if let Some(href) = href {
            self.page.on_nav_link(&href);
            self.status_message = Some(format!("Opened {href}"));
        }
    }

    /// Blur the focused field and focus the next/previous row
    fn move_focus(&mut self, forward: bool) {
        if let Some(name) = self.page.ctx.form.active_name().map(str::to_string) {
            self.page.on_blur(&name);
        }
        if forward {
            self.page.ctx.form.next_field();
        } else {
            self.page.ctx.form.prev_field();
        }
        self.option_cursor = 0;
        match self.page.ctx.form.active_name().map(str::to_string) {
            Some(name) => self.page.on_focus(&name),
            None => self.page.ctx.set_focus(FocusTarget::SubmitButton),
        }
    }

    fn scroll_by(&mut self, delta: i32) {
        if self.page.ctx.presenter.scroll_locked {
            return;
        }
        let max = i32::from(form_height(self));
        self.scroll = (i32::from(self.scroll) + delta).clamp(0, max) as u16;
    }

    /// Scroll the dialog body; the upper bound is applied when drawing
    fn scroll_dialog(&mut self, delta: i32) {
        let next = (i32::from(self.dialog_scroll.get()) + delta).clamp(0, i32::from(u16::MAX));
        self.dialog_scroll.set(next as u16);
    }

    fn active_field_is_multiline(&self) -> bool {
        self.page
            .ctx
            .form
            .get_field(self.page.ctx.form.active_field())
            .is_some_and(|f| f.is_multiline)
    }

    /// Apply an editing key to the focused field and report it as input
    fn edit_active_field(&mut self, code: KeyCode) {
        let form = &self.page.ctx.form;
        let Some(field) = form.get_field(form.active_field()) else {
            return;
        };
        let mut edited = field.clone();
        let changed = match (edited.kind, code) {
            (
                FieldKind::Text | FieldKind::Email | FieldKind::Tel | FieldKind::File,
                KeyCode::Char(c),
            ) => {
                edited.push_char(c);
                true
            }
            (FieldKind::Text, KeyCode::Enter) => {
                edited.push_char('\n');
                true
            }
            (
                FieldKind::Text | FieldKind::Email | FieldKind::Tel | FieldKind::File,
                KeyCode::Backspace,
            ) => {
                edited.pop_char();
                true
            }
            (FieldKind::Select | FieldKind::RadioGroup, KeyCode::Char(' ') | KeyCode::Right) => {
                edited.next_choice();
                true
            }
            (FieldKind::CheckboxGroup, KeyCode::Right) => {
                self.option_cursor = (self.option_cursor + 1) % edited.options.len().max(1);
                false
            }
            (FieldKind::CheckboxGroup, KeyCode::Left) => {
                let len = edited.options.len().max(1);
                self.option_cursor = (self.option_cursor + len - 1) % len;
                false
            }
            (FieldKind::CheckboxGroup, KeyCode::Char(' ')) => {
                if let Some(option) = edited.options.get(self.option_cursor).cloned() {
                    edited.toggle_option(&option);
                }
                true
            }
            (FieldKind::Checkbox, KeyCode::Char(' ')) => {
                edited.toggle_option("");
                true
            }
            (_, KeyCode::Delete) => {
                edited.clear();
                true
            }
            _ => false,
        };

        if changed {
            let value = match edited.kind {
                FieldKind::Checkbox => (!edited.is_empty()).to_string(),
                _ => edited.display_value(),
            };
            self.page.on_input(&edited.name, &value);
        }
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::state::{FormVariant, PresentMode, ThemePreference};
    use crate::storage::MemoryStore;
    use chrono::Local;

    fn app_with(config: SiteConfig) -> App {
        let mut page = PageController::new(&config, Box::new(MemoryStore::default()));
        page.on_load(Local::now(), Instant::now());
        App::new(page)
    }

    fn app() -> App {
        app_with(SiteConfig::default())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).unwrap();
        }
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn fill_valid(app: &mut App) {
        type_text(app, "Jane Doe");
        app.handle_key(key(KeyCode::Tab)).unwrap();
        type_text(app, "jane@example.com");
        app.handle_key(key(KeyCode::Tab)).unwrap();
        type_text(app, "Hello");
    }

    mod typing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_typing_updates_active_field() {
            let mut app = app();
            type_text(&mut app, "Jane");
            app.handle_key(key(KeyCode::Backspace)).unwrap();
            assert_eq!(app.page.ctx.form.field("name").unwrap().as_text(), "Jan");
        }

        #[test]
        fn test_tab_blurs_and_validates() {
            let mut app = app();
            app.handle_key(key(KeyCode::Tab)).unwrap();
            assert!(app.page.ctx.form.is_marked("name"));
            assert_eq!(app.page.ctx.form.active_name(), Some("email"));
        }

        #[test]
        fn test_enter_in_message_adds_newline() {
            let mut app = app();
            app.page.on_focus("message");
            type_text(&mut app, "a");
            app.handle_key(key(KeyCode::Enter)).unwrap();
            type_text(&mut app, "b");
            assert_eq!(app.page.ctx.form.field("message").unwrap().as_text(), "a\nb");
        }

        #[test]
        fn test_back_tab_from_first_field_reaches_submit_row() {
            let mut app = app();
            app.handle_key(key(KeyCode::BackTab)).unwrap();
            assert!(app.page.ctx.form.is_submit_row_active());
            assert_eq!(app.page.ctx.focus, FocusTarget::SubmitButton);
        }
    }

    mod choices {
        use super::*;
        use pretty_assertions::assert_eq;

        fn inquiry() -> App {
            app_with(SiteConfig {
                form_variant: Some(FormVariant::Inquiry),
                ..Default::default()
            })
        }

        #[test]
        fn test_space_cycles_select() {
            let mut app = inquiry();
            app.page.on_focus("purpose");
            app.handle_key(key(KeyCode::Char(' '))).unwrap();
            assert_eq!(
                app.page.ctx.form.field("purpose").unwrap().display_value(),
                "Hiring"
            );
        }

        #[test]
        fn test_checkbox_group_cursor_and_toggle() {
            let mut app = inquiry();
            app.page.on_focus("interests");
            app.handle_key(key(KeyCode::Right)).unwrap();
            app.handle_key(key(KeyCode::Char(' '))).unwrap();
            assert_eq!(
                app.page.ctx.form.field("interests").unwrap().display_value(),
                "Development"
            );
        }

        #[test]
        fn test_space_toggles_subscribe() {
            let mut app = inquiry();
            app.page.on_focus("subscribe");
            app.handle_key(key(KeyCode::Char(' '))).unwrap();
            assert!(!app.page.ctx.form.field("subscribe").unwrap().is_empty());
            app.handle_key(key(KeyCode::Char(' '))).unwrap();
            assert!(app.page.ctx.form.field("subscribe").unwrap().is_empty());
        }

        #[test]
        fn test_file_name_keeps_spaces() {
            let mut app = inquiry();
            app.page.on_focus("attachment");
            type_text(&mut app, "my cv.pdf");
            assert_eq!(
                app.page.ctx.form.field("attachment").unwrap().display_value(),
                "my cv.pdf"
            );
        }
    }

    mod shortcuts {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_ctrl_t_toggles_theme() {
            let mut app = app();
            app.handle_key(ctrl('t')).unwrap();
            assert_eq!(app.page.ctx.theme, ThemePreference::Light);
        }

        #[test]
        fn test_ctrl_n_then_digit_follows_link() {
            let mut app = app();
            app.handle_key(ctrl('n')).unwrap();
            assert!(app.page.ctx.nav.open);
            app.handle_key(key(KeyCode::Char('2'))).unwrap();
            assert!(!app.page.ctx.nav.open);
            assert_eq!(app.page.ctx.nav.current_link().unwrap().href, "about.html");
            assert_eq!(app.status_message.as_deref(), Some("Opened about.html"));
        }

        #[test]
        fn test_digits_type_into_form_once_it_has_focus_back() {
            let mut app = app_with(SiteConfig {
                form_variant: Some(FormVariant::Inquiry),
                ..Default::default()
            });
            app.handle_key(ctrl('n')).unwrap();
            app.handle_key(key(KeyCode::Tab)).unwrap();
            app.page.on_focus("phone");
            type_text(&mut app, "555 1234");

            assert_eq!(app.page.ctx.form.field("phone").unwrap().as_text(), "555 1234");
            assert!(app.page.ctx.nav.open);
            assert_eq!(app.page.ctx.nav.current_link().unwrap().href, "contact.html");
        }

        #[test]
        fn test_esc_closes_focused_nav_panel() {
            let mut app = app();
            app.handle_key(ctrl('n')).unwrap();
            app.handle_key(key(KeyCode::Esc)).unwrap();
            assert!(!app.page.ctx.nav.open);
            type_text(&mut app, "7");
            assert_eq!(app.page.ctx.form.field("name").unwrap().as_text(), "7");
        }

        #[test]
        fn test_ctrl_s_submits_and_esc_closes() {
            let mut app = app();
            fill_valid(&mut app);
            app.handle_key(ctrl('s')).unwrap();
            assert!(app.page.ctx.is_dialog_open());
            assert_eq!(app.status_message.as_deref(), Some("Thanks Jane Doe, 3 fields sent"));

            // Typing is swallowed by the modal
            type_text(&mut app, "zzz");
            assert_eq!(app.page.ctx.form.field("message").unwrap().as_text(), "Hello");

            app.handle_key(key(KeyCode::Esc)).unwrap();
            assert!(!app.page.ctx.is_dialog_open());
            assert!(!app.page.ctx.presenter.scroll_locked);
        }

        #[test]
        fn test_ctrl_c_quits_even_with_dialog_open() {
            let mut app = app();
            fill_valid(&mut app);
            app.handle_key(ctrl('s')).unwrap();
            app.handle_key(ctrl('c')).unwrap();
            assert!(app.should_quit());
        }

        #[test]
        fn test_enter_on_submit_row_submits() {
            let mut app = app();
            app.handle_key(key(KeyCode::BackTab)).unwrap();
            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert!(app.page.ctx.is_dialog_open());
            assert_eq!(app.status_message.as_deref(), Some("3 fields need attention"));
        }
    }

    mod mouse {
        use super::*;

        fn open_dialog(app: &mut App) {
            fill_valid(app);
            app.handle_key(ctrl('s')).unwrap();
            app.dialog_area.set(Some(Rect::new(10, 5, 40, 12)));
        }

        #[test]
        fn test_click_outside_dialog_closes() {
            let mut app = app();
            open_dialog(&mut app);
            app.handle_mouse(click(0, 0));
            assert!(!app.page.ctx.is_dialog_open());
        }

        #[test]
        fn test_click_inside_dialog_body_keeps_it_open() {
            let mut app = app();
            open_dialog(&mut app);
            app.handle_mouse(click(20, 8));
            assert!(app.page.ctx.is_dialog_open());
        }

        #[test]
        fn test_click_on_close_row_closes() {
            let mut app = app();
            open_dialog(&mut app);
            app.handle_mouse(click(12, 15));
            assert!(!app.page.ctx.is_dialog_open());
        }
    }

    mod scrolling {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_page_down_scrolls_when_unlocked() {
            let mut app = app();
            app.handle_key(key(KeyCode::PageDown)).unwrap();
            assert_eq!(app.scroll, SCROLL_STEP);
            app.handle_key(key(KeyCode::PageUp)).unwrap();
            app.handle_key(key(KeyCode::PageUp)).unwrap();
            assert_eq!(app.scroll, 0);
        }

        #[test]
        fn test_scroll_blocked_while_dialog_open() {
            let mut app = app();
            fill_valid(&mut app);
            app.handle_key(ctrl('s')).unwrap();
            app.handle_mouse(MouseEvent {
                kind: MouseEventKind::ScrollDown,
                column: 0,
                row: 0,
                modifiers: KeyModifiers::NONE,
            });
            assert_eq!(app.scroll, 0);
            assert_eq!(app.dialog_scroll.get(), SCROLL_STEP);
        }

        #[test]
        fn test_arrows_scroll_open_dialog_body() {
            let mut app = app();
            fill_valid(&mut app);
            app.handle_key(ctrl('s')).unwrap();
            app.handle_key(key(KeyCode::Down)).unwrap();
            app.handle_key(key(KeyCode::PageDown)).unwrap();
            assert_eq!(app.dialog_scroll.get(), 1 + SCROLL_STEP);
            app.handle_key(key(KeyCode::Up)).unwrap();
            assert_eq!(app.dialog_scroll.get(), SCROLL_STEP);
            assert_eq!(app.scroll, 0);
            assert!(app.page.ctx.is_dialog_open());
        }

        #[test]
        fn test_inline_results_request_scroll_reset() {
            let mut app = app_with(SiteConfig {
                presenter_mode: Some(PresentMode::Inline),
                ..Default::default()
            });
            app.scroll = 6;
            fill_valid(&mut app);
            app.handle_key(ctrl('s')).unwrap();
            app.tick(Instant::now());
            assert_eq!(app.scroll, 0);
            assert!(!app.page.ctx.presenter.inline.scroll_requested);
        }
    }
}
