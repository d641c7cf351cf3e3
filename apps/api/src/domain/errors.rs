use thiserror::Error;

/// Validation failures raised while admitting teams and players
///
/// Every variant is recoverable: the caller surfaces the message and lets the
/// administrator resubmit. A failed registration never mutates the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("all fields required")]
    MissingTeamField { field: &'static str },

    #[error("team already registered: {name}")]
    DuplicateTeam { name: String },

    #[error("all player fields required")]
    MissingPlayerField { field: &'static str },

    #[error("invalid team")]
    InvalidTeam { team_id: String },

    #[error("team roster full: {team_name}")]
    RosterFull { team_name: String },
}

impl RegistrationError {
    /// Stable machine-readable code for the failure
    ///
    /// Missing input, a dangling team reference and business-rule conflicts
    /// each get their own code so clients can react differently.
    pub fn code(&self) -> &'static str {
        match self {
            RegistrationError::MissingTeamField { .. }
            | RegistrationError::MissingPlayerField { .. } => "missing_fields",
            RegistrationError::DuplicateTeam { .. } => "duplicate_team",
            RegistrationError::InvalidTeam { .. } => "invalid_team",
            RegistrationError::RosterFull { .. } => "roster_full",
        }
    }

    /// Name of the first missing field, for the missing-field variants
    pub fn field(&self) -> Option<&'static str> {
        match self {
            RegistrationError::MissingTeamField { field }
            | RegistrationError::MissingPlayerField { field } => Some(*field),
            _ => None,
        }
    }

    /// Name of the team involved in a conflict, if any
    pub fn team_name(&self) -> Option<&str> {
        match self {
            RegistrationError::DuplicateTeam { name } => Some(name.as_str()),
            RegistrationError::RosterFull { team_name } => Some(team_name.as_str()),
            _ => None,
        }
    }

    /// The team reference that failed to resolve, for `InvalidTeam`
    pub fn team_ref(&self) -> Option<&str> {
        match self {
            RegistrationError::InvalidTeam { team_id } => Some(team_id.as_str()),
            _ => None,
        }
    }

    /// True for duplicate-name and roster-cap violations
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            RegistrationError::DuplicateTeam { .. } | RegistrationError::RosterFull { .. }
        )
    }
}
