//! Reusable view components.

mod form_field;
mod modal;

pub use form_field::{FormField, form_field};
pub use modal::modal;
