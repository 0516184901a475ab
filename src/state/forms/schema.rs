//! Declarative field schemas for the site's contact forms

use super::field::{FieldKind, FormField};
use serde::{Deserialize, Serialize};

/// One entry of a form schema
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub options: &'static [&'static str],
    pub multiline: bool,
}

impl FieldSpec {
    const fn new(name: &'static str, label: &'static str, kind: FieldKind, required: bool) -> Self {
        Self {
            name,
            label,
            kind,
            required,
            options: &[],
            multiline: false,
        }
    }

    const fn options(mut self, options: &'static [&'static str]) -> Self {
        self.options = options;
        self
    }

    const fn multiline(mut self) -> Self {
        self.multiline = true;
        self
    }

    /// Build a fresh, empty field
    pub fn build(&self) -> FormField {
        let field =
            FormField::new(self.name, self.label, self.kind, self.required).with_options(self.options);
        if self.multiline {
            field.multiline()
        } else {
            field
        }
    }
}

const CONTACT_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("name", "Name", FieldKind::Text, true),
    FieldSpec::new("email", "Email", FieldKind::Email, true),
    FieldSpec::new("message", "Message", FieldKind::Text, true).multiline(),
];

const INQUIRY_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("name", "Name", FieldKind::Text, true),
    FieldSpec::new("email", "Email", FieldKind::Email, true),
    FieldSpec::new("phone", "Phone", FieldKind::Tel, false),
    FieldSpec::new("company", "Company", FieldKind::Text, false),
    FieldSpec::new("industry", "Industry", FieldKind::Select, false).options(&[
        "Technology",
        "Finance",
        "Healthcare",
        "Education",
        "Retail",
        "Other",
    ]),
    FieldSpec::new("purpose", "Purpose", FieldKind::Select, true).options(&[
        "Hiring",
        "Freelance project",
        "Collaboration",
        "Just saying hi",
    ]),
    FieldSpec::new("subject", "Subject", FieldKind::Text, true),
    FieldSpec::new("message", "Message", FieldKind::Text, true).multiline(),
    FieldSpec::new("attachment", "Attachment", FieldKind::File, false),
    FieldSpec::new("subscribe", "Subscribe to updates", FieldKind::Checkbox, false),
    FieldSpec::new("interests", "Interests", FieldKind::CheckboxGroup, true).options(&[
        "Web design",
        "Development",
        "Branding",
        "Consulting",
    ]),
    FieldSpec::new("contact_method", "Preferred contact", FieldKind::RadioGroup, true)
        .options(&["Email", "Phone"]),
];

/// Which form a page carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormVariant {
    /// Name, email and message only
    #[default]
    Contact,
    /// The long project inquiry form
    Inquiry,
}

impl FormVariant {
    pub fn schema(&self) -> &'static [FieldSpec] {
        match self {
            FormVariant::Contact => CONTACT_FIELDS,
            FormVariant::Inquiry => INQUIRY_FIELDS,
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            FormVariant::Contact => "Get in touch",
            FormVariant::Inquiry => "Start a project",
        }
    }

    /// Build the fields of this variant in declaration order
    pub fn build_fields(&self) -> Vec<FormField> {
        self.schema().iter().map(FieldSpec::build).collect()
    }
}
