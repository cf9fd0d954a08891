//! Static validation rules for the signup form
//!
//! Each text field carries a [`TextRules`] (required message plus whether
//! the email shape applies); length bounds are shared by every text field.
//! Rules are checked in a fixed order and the first failure wins.

use super::signup_form::{FormValues, SignupField};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

pub const MIN_LENGTH: usize = 3;
pub const MAX_LENGTH: usize = 50;

pub const MIN_LENGTH_MESSAGE: &str = "Minimum 3 symbols";
pub const MAX_LENGTH_MESSAGE: &str = "Maximum 50 symbols";
pub const EMAIL_FORMAT_MESSAGE: &str = "Wrong email format";
pub const PASSWORD_MISMATCH_MESSAGE: &str = "Password and Confirm Password didn't match";
pub const TERMS_MESSAGE: &str = "You must accept the terms and conditions";

/// local@domain.tld, no whitespace, non-empty domain labels
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s.]+(\.[^@\s.]+)+$").expect("email pattern compiles")
});

/// Constraints for one text field
#[derive(Debug, Clone, Copy)]
pub struct TextRules {
    /// Message reported for an empty value; `None` makes the field optional
    pub required: Option<&'static str>,
    pub email: bool,
}

pub const FIRST_NAME_RULES: TextRules = TextRules {
    required: Some("First Name is required"),
    email: false,
};

pub const LAST_NAME_RULES: TextRules = TextRules {
    required: None,
    email: false,
};

pub const EMAIL_RULES: TextRules = TextRules {
    required: Some("Email is required"),
    email: true,
};

pub const PASSWORD_RULES: TextRules = TextRules {
    required: Some("Password is required"),
    email: false,
};

pub const CONFIRM_PASSWORD_RULES: TextRules = TextRules {
    required: Some("Password confirmation is required"),
    email: false,
};

/// Per-field validation failures, ordered by field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<SignupField, &'static str>,
}

impl FieldErrors {
    pub fn get(&self, field: SignupField) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    fn record(&mut self, field: SignupField, message: Option<&'static str>) {
        if let Some(message) = message {
            self.errors.insert(field, message);
        }
    }
}

pub fn is_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Check a text value against its rules
pub fn check_text(value: &str, rules: TextRules) -> Option<&'static str> {
    if value.is_empty() {
        return rules.required;
    }
    if rules.email && !is_email(value) {
        return Some(EMAIL_FORMAT_MESSAGE);
    }
    let length = value.chars().count();
    if length < MIN_LENGTH {
        return Some(MIN_LENGTH_MESSAGE);
    }
    if length > MAX_LENGTH {
        return Some(MAX_LENGTH_MESSAGE);
    }
    None
}

/// Confirmation follows the password rules, then must equal the password
pub fn check_confirmation(password: &str, confirmation: &str) -> Option<&'static str> {
    check_text(confirmation, CONFIRM_PASSWORD_RULES)
        .or_else(|| (confirmation != password).then_some(PASSWORD_MISMATCH_MESSAGE))
}

pub fn check_terms(accepted: bool) -> Option<&'static str> {
    (!accepted).then_some(TERMS_MESSAGE)
}

/// Run the whole rule set over a snapshot of the form
pub fn validate(values: &FormValues) -> FieldErrors {
    let mut errors = FieldErrors::default();
    errors.record(
        SignupField::FirstName,
        check_text(&values.first_name, FIRST_NAME_RULES),
    );
    errors.record(
        SignupField::LastName,
        check_text(&values.last_name, LAST_NAME_RULES),
    );
    errors.record(SignupField::Email, check_text(&values.email, EMAIL_RULES));
    errors.record(
        SignupField::Password,
        check_text(&values.password, PASSWORD_RULES),
    );
    errors.record(
        SignupField::ConfirmPassword,
        check_confirmation(&values.password, &values.changepassword),
    );
    errors.record(SignupField::AcceptTerms, check_terms(values.accept_terms));
    errors
}
