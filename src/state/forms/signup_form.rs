//! Signup form state
//!
//! Holds the six signup fields, focus, and the transient submit state
//! (loading flag, form-level status alert, password reveal flags). The
//! registration call itself lives in the app; this type only decides
//! whether a submit may start and what the form looks like afterwards.

use super::field::FormField;
use super::validation::{self, FieldErrors};

/// Form-level alert shown after the registration capability fails
pub const SIGNUP_FAILED_MESSAGE: &str = "The sign up details are incorrect";

pub const SUBMIT_LABEL: &str = "Sign Up";
pub const LOADING_LABEL: &str = "Please wait...";

/// Trait for common form operations
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
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
}

/// Signup fields in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SignupField {
    FirstName,
    LastName,
    Email,
    Password,
    ConfirmPassword,
    AcceptTerms,
}

impl SignupField {
    pub const ALL: [SignupField; 6] = [
        SignupField::FirstName,
        SignupField::LastName,
        SignupField::Email,
        SignupField::Password,
        SignupField::ConfirmPassword,
        SignupField::AcceptTerms,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Snapshot of the raw form values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub changepassword: String,
    pub accept_terms: bool,
}

/// Validated payload handed to the registration capability
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct SignupForm {
    pub first_name: FormField,
    pub last_name: FormField,
    pub email: FormField,
    pub password: FormField,
    pub confirm_password: FormField,
    pub accept_terms: FormField,
    /// 0..=5 are fields, 6 is the submit button row
    pub active_field_index: usize,
    /// A registration call is in flight
    pub loading: bool,
    /// Form-level alert
    pub status: Option<String>,
    pub show_password: bool,
    pub show_confirm_password: bool,
    pub submit_count: u32,
}

impl SignupForm {
    /// Index of the submit button row
    pub const SUBMIT_ROW: usize = 6;

    pub fn new() -> Self {
        Self {
            first_name: FormField::text("first_name", "First Name", "First Name"),
            last_name: FormField::text("last_name", "Last Name", "Last Name"),
            email: FormField::text("email", "Email", "Email"),
            password: FormField::password("password", "Password", "Enter Password"),
            confirm_password: FormField::password(
                "changepassword",
                "Confirm Password",
                "Confirm Password",
            ),
            accept_terms: FormField::checkbox("acceptTerms", "I accept Terms & Conditions"),
            active_field_index: 0,
            loading: false,
            status: None,
            show_password: false,
            show_confirm_password: false,
            submit_count: 0,
        }
    }

    /// Fresh form whose password fields start revealed or masked
    pub fn with_reveal(reveal: bool) -> Self {
        Self {
            show_password: reveal,
            show_confirm_password: reveal,
            ..Self::new()
        }
    }

    pub fn field(&self, field: SignupField) -> &FormField {
        match field {
            SignupField::FirstName => &self.first_name,
            SignupField::LastName => &self.last_name,
            SignupField::Email => &self.email,
            SignupField::Password => &self.password,
            SignupField::ConfirmPassword => &self.confirm_password,
            SignupField::AcceptTerms => &self.accept_terms,
        }
    }

    fn field_mut(&mut self, field: SignupField) -> &mut FormField {
        match field {
            SignupField::FirstName => &mut self.first_name,
            SignupField::LastName => &mut self.last_name,
            SignupField::Email => &mut self.email,
            SignupField::Password => &mut self.password,
            SignupField::ConfirmPassword => &mut self.confirm_password,
            SignupField::AcceptTerms => &mut self.accept_terms,
        }
    }

    /// Focused field, `None` on the submit row
    pub fn active(&self) -> Option<SignupField> {
        SignupField::from_index(self.active_field_index)
    }

    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == Self::SUBMIT_ROW
    }

    pub fn values(&self) -> FormValues {
        FormValues {
            first_name: self.first_name.as_text().to_string(),
            last_name: self.last_name.as_text().to_string(),
            email: self.email.as_text().to_string(),
            password: self.password.as_text().to_string(),
            changepassword: self.confirm_password.as_text().to_string(),
            accept_terms: self.accept_terms.is_checked(),
        }
    }

    /// Run the rule set and store each field's error
    pub fn validate(&mut self) -> FieldErrors {
        let errors = validation::validate(&self.values());
        for field in SignupField::ALL {
            self.field_mut(field).error = errors.get(field).map(str::to_string);
        }
        errors
    }

    pub fn is_valid(&self) -> bool {
        validation::validate(&self.values()).is_empty()
    }

    /// Type into the focused text field
    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.get_active_field_mut() {
            field.push_char(c);
            self.validate();
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.get_active_field_mut() {
            field.pop_char();
            self.validate();
        }
    }

    /// Flip the focused checkbox. Returns whether anything changed.
    pub fn toggle_active_checkbox(&mut self) -> bool {
        let toggled = self
            .get_active_field_mut()
            .is_some_and(|field| field.toggle());
        if toggled {
            self.validate();
        }
        toggled
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    pub fn toggle_confirm_password_visibility(&mut self) {
        self.show_confirm_password = !self.show_confirm_password;
    }

    /// Toggle reveal on whichever password field has focus
    pub fn toggle_active_visibility(&mut self) -> bool {
        match self.active() {
            Some(SignupField::Password) => {
                self.toggle_password_visibility();
                true
            }
            Some(SignupField::ConfirmPassword) => {
                self.toggle_confirm_password_visibility();
                true
            }
            _ => false,
        }
    }

    pub fn is_revealed(&self, field: SignupField) -> bool {
        match field {
            SignupField::Password => self.show_password,
            SignupField::ConfirmPassword => self.show_confirm_password,
            _ => true,
        }
    }

    pub fn touch_all(&mut self) {
        for field in SignupField::ALL {
            self.field_mut(field).touched = true;
        }
    }

    /// Start a submission.
    ///
    /// Returns the payload to register, or `None` when a submission is
    /// already in flight or the form is invalid. Every field becomes
    /// touched so all errors show.
    pub fn begin_submit(&mut self) -> Option<Registration> {
        if self.loading {
            return None;
        }
        self.touch_all();
        let errors = self.validate();
        if !errors.is_empty() {
            tracing::debug!(invalid_fields = errors.len(), "signup form rejected submit");
            return None;
        }

        self.loading = true;
        self.status = None;
        self.submit_count += 1;
        tracing::debug!(attempt = self.submit_count, "signup form submitted");

        let values = self.values();
        Some(Registration {
            first_name: values.first_name,
            last_name: values.last_name,
            email: values.email,
            password: values.password,
        })
    }

    /// Apply the registration outcome
    pub fn finish_submit<E>(&mut self, outcome: &Result<(), E>) {
        self.loading = false;
        if outcome.is_err() {
            self.status = Some(SIGNUP_FAILED_MESSAGE.to_string());
        }
    }

    pub fn is_submit_enabled(&self) -> bool {
        !self.loading
    }

    pub fn submit_label(&self) -> &'static str {
        if self.loading {
            LOADING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }
}

impl Default for SignupForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for SignupForm {
    fn field_count(&self) -> usize {
        7 // six fields + submit row
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    /// Moving focus blurs the field being left
    fn set_active_field(&mut self, index: usize) {
        let index = index.min(Self::SUBMIT_ROW);
        if index == self.active_field_index {
            return;
        }
        if let Some(left) = self.active() {
            let field = self.field_mut(left);
            field.touched = true;
            tracing::trace!(field = %field.name, "field blurred");
            self.validate();
        }
        self.active_field_index = index;
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        let field = self.active()?;
        Some(self.field_mut(field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::validation::{PASSWORD_MISMATCH_MESSAGE, TERMS_MESSAGE};
    use pretty_assertions::assert_eq;

    fn type_text(form: &mut SignupForm, text: &str) {
        for c in text.chars() {
            form.input_char(c);
        }
    }

    /// Fill every field with valid values, leaving focus on the submit row
    fn filled_form() -> SignupForm {
        let mut form = SignupForm::new();
        for text in ["Ada", "Lovelace", "ada@example.com", "secret", "secret"] {
            type_text(&mut form, text);
            form.next_field();
        }
        form.toggle_active_checkbox();
        form.next_field();
        form
    }

    mod defaults {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_has_empty_values() {
            let form = SignupForm::new();
            assert_eq!(form.values(), FormValues::default());
            assert_eq!(form.active_field_index, 0);
            assert!(!form.loading);
            assert!(form.status.is_none());
            assert!(!form.show_password);
            assert!(!form.show_confirm_password);
            assert!(form.is_submit_enabled());
            assert_eq!(form.submit_label(), SUBMIT_LABEL);
        }

        #[test]
        fn test_field_names() {
            let form = SignupForm::new();
            let names: Vec<&str> = SignupField::ALL
                .into_iter()
                .map(|field| form.field(field).name.as_str())
                .collect();
            assert_eq!(
                names,
                vec![
                    "first_name",
                    "last_name",
                    "email",
                    "password",
                    "changepassword",
                    "acceptTerms"
                ]
            );
            assert!(SignupField::from_index(SignupForm::SUBMIT_ROW).is_none());
        }

        #[test]
        fn test_password_fields_are_masked() {
            let form = SignupForm::new();
            assert!(form.password.masked);
            assert!(form.confirm_password.masked);
            assert!(!form.email.masked);
        }

        #[test]
        fn test_with_reveal() {
            let form = SignupForm::with_reveal(true);
            assert!(form.is_revealed(SignupField::Password));
            assert!(form.is_revealed(SignupField::ConfirmPassword));
        }

        #[test]
        fn test_untouched_form_shows_no_errors() {
            let mut form = SignupForm::new();
            form.validate();
            assert!(form.first_name.error.is_some());
            assert!(form.first_name.visible_error().is_none());
        }
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_next_field_wraps() {
            let mut form = SignupForm::new();
            for _ in 0..7 {
                form.next_field();
            }
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_prev_field_wraps_to_submit_row() {
            let mut form = SignupForm::new();
            form.prev_field();
            assert!(form.is_submit_row_active());
            assert!(form.active().is_none());
        }

        #[test]
        fn test_blur_marks_field_touched() {
            let mut form = SignupForm::new();
            form.next_field();
            assert!(form.first_name.touched);
            assert_eq!(form.first_name.visible_error(), Some("First Name is required"));
            assert!(!form.last_name.touched);
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = SignupForm::new();
            form.set_active_field(100);
            assert_eq!(form.active_field_index, SignupForm::SUBMIT_ROW);
        }

        #[test]
        fn test_typing_on_submit_row_is_ignored() {
            let mut form = SignupForm::new();
            form.set_active_field(SignupForm::SUBMIT_ROW);
            form.input_char('x');
            form.backspace();
            assert_eq!(form.values(), FormValues::default());
        }
    }

    mod editing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_input_revalidates_on_change() {
            let mut form = SignupForm::new();
            form.next_field();
            form.prev_field();
            type_text(&mut form, "Ad");
            assert_eq!(form.first_name.visible_error(), Some("Minimum 3 symbols"));
            form.input_char('a');
            assert!(form.first_name.is_touched_valid());
        }

        #[test]
        fn test_password_change_updates_confirmation_error() {
            let mut form = filled_form();
            assert!(form.confirm_password.error.is_none());

            form.set_active_field(SignupField::Password.index());
            form.input_char('!');
            assert_eq!(
                form.confirm_password.visible_error(),
                Some(PASSWORD_MISMATCH_MESSAGE)
            );
        }

        #[test]
        fn test_space_toggles_terms_only_when_focused() {
            let mut form = SignupForm::new();
            assert!(!form.toggle_active_checkbox());
            form.set_active_field(SignupField::AcceptTerms.index());
            assert!(form.toggle_active_checkbox());
            assert!(form.accept_terms.is_checked());
        }

        #[test]
        fn test_toggle_active_visibility() {
            let mut form = SignupForm::new();
            assert!(!form.toggle_active_visibility());

            form.set_active_field(SignupField::Password.index());
            assert!(form.toggle_active_visibility());
            assert!(form.show_password);
            assert!(!form.show_confirm_password);

            form.next_field();
            assert!(form.toggle_active_visibility());
            assert!(form.show_confirm_password);
        }
    }

    mod submit {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_begin_submit_on_valid_form() {
            let mut form = filled_form();
            let registration = form.begin_submit();
            assert_eq!(
                registration,
                Some(Registration {
                    first_name: "Ada".to_string(),
                    last_name: "Lovelace".to_string(),
                    email: "ada@example.com".to_string(),
                    password: "secret".to_string(),
                })
            );
            assert!(form.loading);
            assert!(!form.is_submit_enabled());
            assert_eq!(form.submit_label(), LOADING_LABEL);
            assert_eq!(form.submit_count, 1);
        }

        #[test]
        fn test_begin_submit_refuses_while_loading() {
            let mut form = filled_form();
            assert!(form.begin_submit().is_some());
            assert!(form.begin_submit().is_none());
            assert_eq!(form.submit_count, 1);
        }

        #[test]
        fn test_invalid_submit_touches_everything() {
            let mut form = SignupForm::new();
            assert!(form.begin_submit().is_none());
            assert!(!form.loading);
            for field in SignupField::ALL {
                assert!(form.field(field).touched);
            }
            assert_eq!(form.accept_terms.visible_error(), Some(TERMS_MESSAGE));
            assert!(form.last_name.visible_error().is_none());
        }

        #[test]
        fn test_failed_registration_shows_status_and_reenables() {
            let mut form = filled_form();
            form.begin_submit();
            form.finish_submit(&Err::<(), _>("rejected"));
            assert_eq!(form.status.as_deref(), Some(SIGNUP_FAILED_MESSAGE));
            assert!(!form.loading);
            assert!(form.is_submit_enabled());
            assert_eq!(form.submit_label(), SUBMIT_LABEL);
        }

        #[test]
        fn test_new_submit_clears_previous_status() {
            let mut form = filled_form();
            form.begin_submit();
            form.finish_submit(&Err::<(), _>("rejected"));
            assert!(form.begin_submit().is_some());
            assert!(form.status.is_none());
            assert_eq!(form.submit_count, 2);
        }

        #[test]
        fn test_successful_registration_has_no_status() {
            let mut form = filled_form();
            form.begin_submit();
            form.finish_submit(&Ok::<(), ()>(()));
            assert!(form.status.is_none());
            assert!(!form.loading);
        }
    }
}
