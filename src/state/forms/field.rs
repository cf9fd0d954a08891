//! Form field value objects

/// Character used to mask password values
pub const MASK_CHAR: char = '•';

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Checkbox(bool),
}

/// Represents a single form field with its configuration, value and
/// validation state
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub placeholder: String,
    pub value: FieldValue,
    /// Set once focus has left the field, or on any submit attempt
    pub touched: bool,
    /// Current validation error, kept up to date on every change
    pub error: Option<String>,
    /// Password-style rendering
    pub masked: bool,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &str, label: &str, placeholder: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            placeholder: placeholder.to_string(),
            value: FieldValue::Text(String::new()),
            touched: false,
            error: None,
            masked: false,
        }
    }

    /// Create a new password field (masked unless revealed)
    pub fn password(name: &str, label: &str, placeholder: &str) -> Self {
        Self {
            masked: true,
            ..Self::text(name, label, placeholder)
        }
    }

    /// Create a new unchecked checkbox field
    pub fn checkbox(name: &str, label: &str) -> Self {
        Self {
            value: FieldValue::Checkbox(false),
            ..Self::text(name, label, "")
        }
    }

    /// Get the text value (returns empty string for checkboxes)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Checkbox(_) => "",
        }
    }

    /// Get the checkbox value (returns false for text fields)
    pub fn is_checked(&self) -> bool {
        match self.value {
            FieldValue::Checkbox(checked) => checked,
            FieldValue::Text(_) => false,
        }
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) => s.push(c),
            FieldValue::Checkbox(_) => {
                // Checkboxes only react to toggle()
            }
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        if let FieldValue::Text(s) = &mut self.value {
            s.pop();
        }
    }

    /// Flip a checkbox. Returns false for text fields.
    pub fn toggle(&mut self) -> bool {
        match &mut self.value {
            FieldValue::Checkbox(checked) => {
                *checked = !*checked;
                true
            }
            FieldValue::Text(_) => false,
        }
    }

    /// Error to show the user: only touched fields report theirs
    pub fn visible_error(&self) -> Option<&str> {
        if self.touched {
            self.error.as_deref()
        } else {
            None
        }
    }

    /// True when the field was touched and currently passes validation
    pub fn is_touched_valid(&self) -> bool {
        self.touched && self.error.is_none()
    }

    /// Get the display value for rendering
    pub fn display_value(&self, reveal: bool) -> String {
        match &self.value {
            FieldValue::Text(s) if self.masked && !reveal => {
                std::iter::repeat(MASK_CHAR).take(s.chars().count()).collect()
            }
            FieldValue::Text(s) => s.clone(),
            FieldValue::Checkbox(true) => "[x]".to_string(),
            FieldValue::Checkbox(false) => "[ ]".to_string(),
        }
    }
}
