//! Confirmation presenter: modal dialog and inline results views

use super::forms::{SubmissionRecord, ValidationError};
use anyhow::Result;
use serde::{Deserialize, Serialize};

pub const CONFIRMATION_TITLE: &str = "Submission received";
pub const ERRORS_TITLE: &str = "Please fix the following";

/// Where the presenter renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresentMode {
    /// Dialog overlay
    #[default]
    Modal,
    /// Results section on the page
    Inline,
}

/// Element holding keyboard focus
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FocusTarget {
    #[default]
    Nothing,
    Field(String),
    SubmitButton,
    DialogClose,
    Results,
}

/// What closed the dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    CloseButton,
    Backdrop,
    Escape,
}

/// Body of an open dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogBody {
    Confirmation {
        /// (label, value) pairs
        entries: Vec<(String, String)>,
        /// Machine-readable serialization of the record
        json: String,
    },
    Errors {
        messages: Vec<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogContent {
    pub title: String,
    pub body: DialogBody,
}

/// Modal dialog state machine
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DialogState {
    #[default]
    Closed,
    Open(DialogContent),
}

impl DialogState {
    pub fn is_open(&self) -> bool {
        matches!(self, DialogState::Open(_))
    }
}

/// One row of the inline results list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineItem {
    pub label: String,
    /// Value as entered
    pub value: String,
    /// Value ready for insertion into markup
    #[allow(dead_code)]
    pub value_html: String,
}

/// Inline results section, hidden until the first presentation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InlineResults {
    pub visible: bool,
    pub items: Vec<InlineItem>,
    pub errors: Vec<String>,
    /// Host should scroll the section into view
    pub scroll_requested: bool,
}

/// Renders confirmation or failure feedback
#[derive(Debug, Default)]
pub struct Presenter {
    pub dialog: DialogState,
    pub inline: InlineResults,
    /// Page scroll blocked while the dialog is open
    pub scroll_locked: bool,
    return_focus: Option<FocusTarget>,
}

impl Presenter {
    /// Show an accepted submission; returns the element to focus
    pub fn present(
        &mut self,
        record: &SubmissionRecord,
        mode: PresentMode,
        current_focus: FocusTarget,
    ) -> Result<FocusTarget> {
        match mode {
            PresentMode::Modal => {
                let entries = record
                    .entries
                    .iter()
                    .map(|e| (e.label.clone(), e.display_value()))
                    .collect();
                let content = DialogContent {
                    title: CONFIRMATION_TITLE.to_string(),
                    body: DialogBody::Confirmation {
                        entries,
                        json: record.to_json_pretty()?,
                    },
                };
                Ok(self.open(content, current_focus))
            }
            PresentMode::Inline => {
                self.inline = InlineResults {
                    visible: true,
                    items: record
                        .entries
                        .iter()
                        .map(|e| {
                            let value = e.display_value();
                            InlineItem {
                                label: e.label.clone(),
                                value_html: if e.is_free_text() {
                                    escape_html(&value)
                                } else {
                                    value.clone()
                                },
                                value,
                            }
                        })
                        .collect(),
                    errors: Vec::new(),
                    scroll_requested: true,
                };
                Ok(FocusTarget::Results)
            }
        }
    }

    /// Show the current validation errors; returns the element to focus
    pub fn present_errors(
        &mut self,
        errors: &[ValidationError],
        mode: PresentMode,
    ) -> FocusTarget {
        let first_invalid = errors
            .first()
            .map(|e| FocusTarget::Field(e.field_name.clone()))
            .unwrap_or_default();
        let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();

        match mode {
            PresentMode::Modal => {
                let content = DialogContent {
                    title: ERRORS_TITLE.to_string(),
                    body: DialogBody::Errors { messages },
                };
                // Focus lands on the first invalid field once the dialog closes
                self.open(content, first_invalid)
            }
            PresentMode::Inline => {
                self.inline = InlineResults {
                    visible: true,
                    items: Vec::new(),
                    errors: messages,
                    scroll_requested: false,
                };
                first_invalid
            }
        }
    }

    /// Close the dialog. Returns the focus to restore, or `None` when
    /// nothing was open.
    pub fn close(&mut self, reason: CloseReason) -> Option<FocusTarget> {
        if !self.dialog.is_open() {
            return None;
        }
        tracing::debug!("Dialog closed by {reason:?}");
        self.dialog = DialogState::Closed;
        self.scroll_locked = false;
        Some(self.return_focus.take().unwrap_or_default())
    }

    /// Host acknowledged the scroll-into-view request
    pub fn scroll_handled(&mut self) {
        self.inline.scroll_requested = false;
    }

    fn open(&mut self, content: DialogContent, return_focus: FocusTarget) -> FocusTarget {
        if !self.dialog.is_open() {
            self.return_focus = Some(return_focus);
        }
        self.dialog = DialogState::Open(content);
        self.scroll_locked = true;
        FocusTarget::DialogClose
    }
}

/// Escape text for insertion into HTML
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::{FieldKind, FormField, Validator};
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn record(message: &str) -> SubmissionRecord {
        let mut name = FormField::new("name", "Name", FieldKind::Text, true);
        name.set_text("Jane Doe");
        let mut body = FormField::new("message", "Message", FieldKind::Text, true);
        body.set_text(message);
        let validated = Validator::default().check(&[name, body]).unwrap();
        SubmissionRecord::capture(&validated, Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap())
    }

    fn errors() -> Vec<ValidationError> {
        let fields = [
            FormField::new("name", "Name", FieldKind::Text, true),
            FormField::new("email", "Email", FieldKind::Email, true),
        ];
        Validator::default().validate_all(&fields)
    }

    mod modal {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_present_opens_dialog_and_locks_scroll() {
            let mut presenter = Presenter::default();
            let focus = presenter
                .present(&record("Hello"), PresentMode::Modal, FocusTarget::SubmitButton)
                .unwrap();

            assert_eq!(focus, FocusTarget::DialogClose);
            assert!(presenter.scroll_locked);
            let DialogState::Open(content) = &presenter.dialog else {
                panic!("dialog should be open");
            };
            assert_eq!(content.title, CONFIRMATION_TITLE);
            let DialogBody::Confirmation { entries, json } = &content.body else {
                panic!("expected confirmation body");
            };
            assert_eq!(entries[0], ("Name".to_string(), "Jane Doe".to_string()));
            assert!(json.contains("\"message\": \"Hello\""));
        }

        #[test]
        fn test_close_restores_scroll_and_focus() {
            let mut presenter = Presenter::default();
            presenter
                .present(&record("Hello"), PresentMode::Modal, FocusTarget::SubmitButton)
                .unwrap();

            let restored = presenter.close(CloseReason::Escape);

            assert_eq!(restored, Some(FocusTarget::SubmitButton));
            assert!(!presenter.scroll_locked);
            assert_eq!(presenter.dialog, DialogState::Closed);
        }

        #[test]
        fn test_close_when_closed_is_noop() {
            let mut presenter = Presenter::default();
            assert_eq!(presenter.close(CloseReason::Backdrop), None);
        }

        #[test]
        fn test_reopen_replaces_content_and_keeps_first_return_focus() {
            let mut presenter = Presenter::default();
            presenter.present_errors(&errors(), PresentMode::Modal);
            presenter
                .present(&record("Hi"), PresentMode::Modal, FocusTarget::DialogClose)
                .unwrap();

            let DialogState::Open(content) = &presenter.dialog else {
                panic!("dialog should be open");
            };
            assert_eq!(content.title, CONFIRMATION_TITLE);
            assert_eq!(
                presenter.close(CloseReason::CloseButton),
                Some(FocusTarget::Field("name".to_string()))
            );
        }

        #[test]
        fn test_error_dialog_lists_every_message() {
            let mut presenter = Presenter::default();
            presenter.present_errors(&errors(), PresentMode::Modal);
            let DialogState::Open(content) = &presenter.dialog else {
                panic!("dialog should be open");
            };
            assert_eq!(
                content.body,
                DialogBody::Errors {
                    messages: vec![
                        "Name: This field is required.".to_string(),
                        "Email: This field is required.".to_string(),
                    ]
                }
            );
        }

        #[test]
        fn test_error_messages_use_field_labels() {
            let contact = FormField::new(
                "contact_method",
                "Preferred contact",
                FieldKind::RadioGroup,
                true,
            )
            .with_options(&["Email", "Phone"]);
            let errors = Validator::default().validate_all(&[contact]);
            let mut presenter = Presenter::default();
            presenter.present_errors(&errors, PresentMode::Modal);
            let DialogState::Open(content) = &presenter.dialog else {
                panic!("dialog should be open");
            };
            assert_eq!(
                content.body,
                DialogBody::Errors {
                    messages: vec!["Preferred contact: This field is required.".to_string()]
                }
            );
        }
    }

    mod inline {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_present_reveals_and_escapes_free_text() {
            let mut presenter = Presenter::default();
            let focus = presenter
                .present(
                    &record("<b>hi</b> & bye"),
                    PresentMode::Inline,
                    FocusTarget::SubmitButton,
                )
                .unwrap();

            assert_eq!(focus, FocusTarget::Results);
            assert!(presenter.inline.visible);
            assert!(presenter.inline.scroll_requested);
            assert!(!presenter.scroll_locked);
            assert_eq!(
                presenter.inline.items[1].value_html,
                "&lt;b&gt;hi&lt;/b&gt; &amp; bye"
            );
            assert_eq!(presenter.inline.items[1].value, "<b>hi</b> & bye");
        }

        #[test]
        fn test_errors_focus_first_invalid_field() {
            let mut presenter = Presenter::default();
            let focus = presenter.present_errors(&errors(), PresentMode::Inline);
            assert_eq!(focus, FocusTarget::Field("name".to_string()));
            assert_eq!(presenter.inline.errors.len(), 2);
            assert!(!presenter.dialog.is_open());
        }

        #[test]
        fn test_scroll_handled_clears_request() {
            let mut presenter = Presenter::default();
            presenter
                .present(&record("x"), PresentMode::Inline, FocusTarget::Nothing)
                .unwrap();
            presenter.scroll_handled();
            assert!(!presenter.inline.scroll_requested);
        }
    }

    #[test]
    fn test_escape_html_handles_quotes() {
        assert_eq!(escape_html(r#"a "b" 'c'"#), "a &quot;b&quot; &#39;c&#39;");
    }
}
