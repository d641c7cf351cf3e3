use serde::Serialize;
use std::fmt;

use crate::domain::value_objects::RequiredText;

/// Display name of a registered team
///
/// Two names denote the same team when they are equal after lowercasing.
/// Lowercasing uses `str::to_lowercase`, which is locale independent and
/// agrees with ASCII lowercasing on ASCII input.
///
/// # Example
/// ```
/// use esports_registration_api::domain::team::TeamName;
/// use esports_registration_api::domain::value_objects::RequiredText;
///
/// let name = TeamName::from(RequiredText::new("Alpha").unwrap());
/// assert!(name.same_team_as("ALPHA"));
/// assert!(!name.same_team_as("Alphas"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TeamName(RequiredText);

impl TeamName {
    /// Returns the name as entered (trimmed)
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Key used for uniqueness checks
    pub fn folded(&self) -> String {
        fold(self.as_str())
    }

    /// Case-insensitive comparison against a raw (already trimmed) name
    pub fn same_team_as(&self, other: &str) -> bool {
        self.folded() == fold(other)
    }
}

impl From<RequiredText> for TeamName {
    fn from(text: RequiredText) -> Self {
        TeamName(text)
    }
}

impl fmt::Display for TeamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn fold(name: &str) -> String {
    name.to_lowercase()
}
