//! Form domain layer
//!
//! Declarative field schemas, the live form state, field validation and the
//! submission record built from a validated form.

mod field;
mod form_state;
mod record;
mod schema;
mod validator;

pub use field::{FieldKind, FieldValue, FormField};
pub use form_state::{ContactForm, Form};
pub use record::SubmissionRecord;
pub use schema::FormVariant;
pub use validator::{PhonePolicy, ValidationError, ValidationErrorKind, Validator};
