//! Form domain layer
//!
//! Type-safe form handling for the signup view: field value objects,
//! the static rule set, and the signup form state.

mod field;
mod signup_form;
mod validation;

pub use field::FormField;
pub use signup_form::{Form, Registration, SignupField, SignupForm};

#[cfg(test)]
pub use signup_form::{LOADING_LABEL, SIGNUP_FAILED_MESSAGE, SUBMIT_LABEL};
