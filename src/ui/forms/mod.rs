//! Form rendering module
//!
//! - `field_renderer`: text field and checkbox rendering
//! - `signup_form`: the signup card

mod field_renderer;
mod signup_form;

pub use signup_form::draw_signup;
