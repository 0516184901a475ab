//! Form interaction controller
//!
//! A [`PageController`] owns the [`PageContext`](context::PageContext) of one page view and turns
//! page events into state changes the host renders.

mod bindings;
mod context;
mod events;

pub use bindings::{PageKey, SubmitOutcome};
pub use events::{PageController, PageEvents};
