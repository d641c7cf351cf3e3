use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::events::TeamEvent;
use super::value_objects::TeamName;
use crate::domain::errors::RegistrationError;
use crate::domain::value_objects::require_all;

/// Raw team submission, exactly as received from the caller
#[derive(Debug, Clone, Default)]
pub struct NewTeam {
    pub name: String,
    pub captain: String,
    pub contact: String,
}

impl NewTeam {
    pub fn new(
        name: impl Into<String>,
        captain: impl Into<String>,
        contact: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            captain: captain.into(),
            contact: contact.into(),
        }
    }
}

/// A team registered for the tournament
///
/// # Invariants
/// - Name, captain and contact are trimmed and non-empty
/// - The ID never changes once assigned
/// - Teams are never edited or removed
///
/// Name uniqueness spans the whole registry, so it is enforced by
/// [`Registry`](crate::domain::registry::Registry) rather than here.
///
/// # Example
/// ```
/// use esports_registration_api::domain::team::{NewTeam, Team};
///
/// let (team, event) = Team::new(NewTeam::new(" Alpha ", "Ana", "ana@example.com"))
///     .expect("valid team");
///
/// assert_eq!(team.name().as_str(), "Alpha");
/// assert_eq!(event.team_id(), team.id());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    id: Uuid,
    name: TeamName,
    captain: String,
    contact: String,
    registered_at: DateTime<Utc>,
}

impl Team {
    /// Creates a new Team
    ///
    /// # Returns
    /// * `Ok((Team, TeamEvent))` - New team and its `Registered` event
    /// * `Err(RegistrationError::MissingTeamField)` - Naming the first blank field
    ///
    /// # Business Rules Enforced
    /// - All fields must be non-empty after trimming
    /// - Stored values are trimmed
    /// - A fresh random ID is allocated
    pub fn new(draft: NewTeam) -> Result<(Self, TeamEvent), RegistrationError> {
        let [name, captain, contact] = require_all([
            ("name", draft.name.as_str()),
            ("captain", draft.captain.as_str()),
            ("contact", draft.contact.as_str()),
        ])
        .map_err(|field| RegistrationError::MissingTeamField { field })?;

        let team = Self {
            id: Uuid::new_v4(),
            name: TeamName::from(name),
            captain: captain.into_inner(),
            contact: contact.into_inner(),
            registered_at: Utc::now(),
        };

        let event = TeamEvent::Registered {
            team_id: team.id,
            name: team.name.to_string(),
        };

        Ok((team, event))
    }

    // ===== Getters =====

    /// Returns the team's ID
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the team's name
    pub fn name(&self) -> &TeamName {
        &self.name
    }

    /// Returns the captain's name
    pub fn captain(&self) -> &str {
        &self.captain
    }

    /// Returns the contact detail (e-mail, phone, Discord tag...)
    pub fn contact(&self) -> &str {
        &self.contact
    }

    /// Returns the registration timestamp
    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }
}
