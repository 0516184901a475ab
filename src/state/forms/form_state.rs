//! Live form state: field values, focus position and invalid marks

use super::field::FormField;
use super::schema::FormVariant;
use super::validator::ValidationError;
use std::collections::HashMap;

/// Trait for common form navigation
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// The page's contact form
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub variant: FormVariant,
    fields: Vec<FormField>,
    /// Focused row; `fields.len()` is the submit button
    pub active_field_index: usize,
    /// Field name -> message currently shown next to the field
    marks: HashMap<String, String>,
}

impl ContactForm {
    pub fn new(variant: FormVariant) -> Self {
        Self {
            variant,
            fields: variant.build_fields(),
            active_field_index: 0,
            marks: HashMap::new(),
        }
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    /// Name of the focused field, `None` on the submit row
    pub fn active_name(&self) -> Option<&str> {
        self.fields
            .get(self.active_field_index)
            .map(|f| f.name.as_str())
    }

    /// Returns true if the submit button row is focused
    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == self.fields.len()
    }

    /// Mark a field invalid with the error's message
    pub fn mark(&mut self, error: &ValidationError) {
        self.marks
            .insert(error.field_name.clone(), error.message());
    }

    pub fn clear_mark(&mut self, name: &str) {
        self.marks.remove(name);
    }

    pub fn is_marked(&self, name: &str) -> bool {
        self.marks.contains_key(name)
    }

    /// Message shown next to a marked field
    pub fn mark_for(&self, name: &str) -> Option<&str> {
        self.marks.get(name).map(String::as_str)
    }

    pub fn marked_count(&self) -> usize {
        self.marks.len()
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        self.fields.len() + 1 // fields, submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.fields.len());
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        self.fields.get(index)
    }
}
