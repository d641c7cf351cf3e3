use serde::Serialize;
use std::fmt;

/// Free text that must not be blank
///
/// # Invariants
/// - Surrounding whitespace is trimmed on construction
/// - The trimmed value is never empty
/// - Is immutable after construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RequiredText(String);

impl RequiredText {
    /// Trims `value` and wraps it, or returns `None` when nothing is left
    ///
    /// # Example
    /// ```
    /// use esports_registration_api::domain::value_objects::RequiredText;
    ///
    /// let text = RequiredText::new("  Faker ").expect("non-blank");
    /// assert_eq!(text.as_str(), "Faker");
    /// assert!(RequiredText::new("   ").is_none());
    /// ```
    pub fn new(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(RequiredText(trimmed.to_string()))
        }
    }

    /// Returns the text as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for RequiredText {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Checks each `(field, value)` pair in order and returns the trimmed values,
/// or the name of the first blank field.
pub fn require_all<const N: usize>(
    fields: [(&'static str, &str); N],
) -> Result<[RequiredText; N], &'static str> {
    if let Some((field, _)) = fields.iter().find(|(_, value)| value.trim().is_empty()) {
        return Err(*field);
    }
    Ok(fields.map(|(_, value)| RequiredText(value.trim().to_string())))
}
