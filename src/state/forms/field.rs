//! Form field value objects

use serde::Serialize;

/// Semantic kind of a form control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Select,
    CheckboxGroup,
    RadioGroup,
    File,
    /// Single on/off checkbox (the newsletter opt-in)
    Checkbox,
}

impl FieldKind {
    /// Whether the field picks from a fixed list of options
    pub fn has_options(&self) -> bool {
        matches!(
            self,
            FieldKind::Select | FieldKind::CheckboxGroup | FieldKind::RadioGroup
        )
    }

    /// Whether the field accepts typed characters
    pub fn accepts_text(&self) -> bool {
        matches!(self, FieldKind::Text | FieldKind::Email | FieldKind::Tel)
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Choice(Option<String>),
    Checked(Vec<String>),
    Flag(bool),
    File(Option<String>),
}

impl FieldValue {
    /// The empty value for a field kind
    pub fn empty_for(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Text | FieldKind::Email | FieldKind::Tel => FieldValue::Text(String::new()),
            FieldKind::Select | FieldKind::RadioGroup => FieldValue::Choice(None),
            FieldKind::CheckboxGroup => FieldValue::Checked(Vec::new()),
            FieldKind::Checkbox => FieldValue::Flag(false),
            FieldKind::File => FieldValue::File(None),
        }
    }

    /// Whether nothing was entered, chosen or attached
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Choice(c) => c.is_none(),
            FieldValue::Checked(items) => items.is_empty(),
            FieldValue::Flag(on) => !on,
            FieldValue::File(name) => name.as_deref().map_or(true, |n| n.trim().is_empty()),
        }
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    pub options: Vec<String>,
    pub is_multiline: bool,
    pub value: FieldValue,
}

impl FormField {
    /// Create an empty field
    pub fn new(name: &str, label: &str, kind: FieldKind, required: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            required,
            options: Vec::new(),
            is_multiline: false,
            value: FieldValue::empty_for(kind),
        }
    }

    /// Attach the option list of a group field
    pub fn with_options(mut self, options: &[&str]) -> Self {
        self.options = options.iter().map(|o| o.to_string()).collect();
        self
    }

    /// Mark a text field as multiline
    pub fn multiline(mut self) -> Self {
        self.is_multiline = true;
        self
    }

    /// Get the text value (returns empty string for non-text fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            _ => "",
        }
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Replace the value with text.
    ///
    /// For choice and file kinds the text is interpreted as the chosen
    /// option, a comma-separated list of checked options, or the file name.
    pub fn set_text(&mut self, value: &str) {
        self.value = match self.kind {
            FieldKind::Text | FieldKind::Email | FieldKind::Tel => FieldValue::Text(value.to_string()),
            FieldKind::Select | FieldKind::RadioGroup => {
                FieldValue::Choice(non_blank(value).map(str::to_string))
            }
            FieldKind::CheckboxGroup => FieldValue::Checked(
                value
                    .split(',')
                    .filter_map(non_blank)
                    .map(str::to_string)
                    .collect(),
            ),
            FieldKind::Checkbox => FieldValue::Flag(matches!(
                value.trim().to_ascii_lowercase().as_str(),
                "true" | "on" | "yes" | "1"
            )),
            FieldKind::File => {
                FieldValue::File(non_blank(value).map(|_| value.to_string()))
            }
        };
    }

    /// Push a character to a text value or file name
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) | FieldValue::File(Some(s)) => s.push(c),
            FieldValue::File(name @ None) => *name = Some(c.to_string()),
            _ => {}
        }
    }

    /// Remove the last character from a text value or file name
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => {
                s.pop();
            }
            FieldValue::File(name) => {
                if let Some(s) = name {
                    s.pop();
                    if s.is_empty() {
                        *name = None;
                    }
                }
            }
            _ => {}
        }
    }

    /// Cycle a select/radio choice forward through the options
    pub fn next_choice(&mut self) {
        if let FieldValue::Choice(current) = &mut self.value {
            let next = match current.as_ref() {
                None => 0,
                Some(c) => self
                    .options
                    .iter()
                    .position(|o| o == c)
                    .map_or(0, |i| i + 1),
            };
            *current = self.options.get(next).cloned();
        }
    }

    /// Toggle an option of a checkbox group, or the single checkbox
    pub fn toggle_option(&mut self, option: &str) {
        match &mut self.value {
            FieldValue::Checked(items) => {
                if let Some(pos) = items.iter().position(|i| i == option) {
                    items.remove(pos);
                } else if self.options.iter().any(|o| o == option) {
                    items.push(option.to_string());
                }
            }
            FieldValue::Flag(on) => *on = !*on,
            _ => {}
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        self.value = FieldValue::empty_for(self.kind);
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Choice(c) => c.clone().unwrap_or_default(),
            FieldValue::Checked(items) => items.join(", "),
            FieldValue::Flag(true) => "Yes".to_string(),
            FieldValue::Flag(false) => "No".to_string(),
            FieldValue::File(name) => name.clone().unwrap_or_default(),
        }
    }
}

fn non_blank(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
