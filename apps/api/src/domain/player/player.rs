use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::errors::RegistrationError;
use crate::domain::team::Team;
use crate::domain::value_objects::{require_all, RequiredText};

/// Raw player submission, exactly as received from the caller
///
/// `team_id` is kept as text because it arrives from a form field; it is
/// only resolved against the registry after the required-field check.
#[derive(Debug, Clone, Default)]
pub struct NewPlayer {
    pub name: String,
    pub nickname: String,
    pub role: String,
    pub rank: String,
    pub gender: String,
    pub team_id: String,
}

impl NewPlayer {
    /// Checks that every field is present and returns the trimmed values
    ///
    /// # Returns
    /// * `Ok(PlayerSubmission)` - All six fields are non-blank
    /// * `Err(RegistrationError::MissingPlayerField)` - Naming the first blank field
    pub fn validate(&self) -> Result<PlayerSubmission, RegistrationError> {
        let [name, nickname, role, rank, gender, team_ref] = require_all([
            ("name", self.name.as_str()),
            ("nickname", self.nickname.as_str()),
            ("role", self.role.as_str()),
            ("rank", self.rank.as_str()),
            ("gender", self.gender.as_str()),
            ("team_id", self.team_id.as_str()),
        ])
        .map_err(|field| RegistrationError::MissingPlayerField { field })?;

        Ok(PlayerSubmission {
            name,
            nickname,
            role,
            rank,
            gender,
            team_ref,
        })
    }
}

/// A player submission whose fields passed the required-field check
#[derive(Debug, Clone)]
pub struct PlayerSubmission {
    name: RequiredText,
    nickname: RequiredText,
    role: RequiredText,
    rank: RequiredText,
    gender: RequiredText,
    team_ref: RequiredText,
}

impl PlayerSubmission {
    /// The team reference as submitted
    pub fn team_ref(&self) -> &str {
        self.team_ref.as_str()
    }

    /// Parses the team reference, or fails with `InvalidTeam`
    pub fn team_id(&self) -> Result<Uuid, RegistrationError> {
        Uuid::parse_str(self.team_ref()).map_err(|_| self.invalid_team())
    }

    pub fn invalid_team(&self) -> RegistrationError {
        RegistrationError::InvalidTeam {
            team_id: self.team_ref().to_string(),
        }
    }
}

/// A player on a team's roster
///
/// # Invariants
/// - All text fields are trimmed and non-empty
/// - `team_id` referred to an existing team when the player was admitted
/// - `team_name` is a snapshot taken at admission time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: Uuid,
    name: String,
    nickname: String,
    role: String,
    rank: String,
    gender: String,
    team_id: Uuid,
    team_name: String,
    registered_at: DateTime<Utc>,
}

impl Player {
    /// Places a validated submission on `team`'s roster
    ///
    /// Roster capacity is a registry-wide rule and must be checked by the
    /// caller before enrolling.
    pub fn enroll(submission: PlayerSubmission, team: &Team) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: submission.name.into_inner(),
            nickname: submission.nickname.into_inner(),
            role: submission.role.into_inner(),
            rank: submission.rank.into_inner(),
            gender: submission.gender.into_inner(),
            team_id: team.id(),
            team_name: team.name().to_string(),
            registered_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    /// In-game role (top, jungle, support...)
    pub fn role(&self) -> &str {
        &self.role
    }

    /// Ranked tier, e.g. "Diamond II"
    pub fn rank(&self) -> &str {
        &self.rank
    }

    pub fn gender(&self) -> &str {
        &self.gender
    }

    pub fn team_id(&self) -> Uuid {
        self.team_id
    }

    /// Name of the team at the moment the player joined
    pub fn team_name(&self) -> &str {
        &self.team_name
    }

    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }
}
