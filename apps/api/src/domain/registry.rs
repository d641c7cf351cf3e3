use uuid::Uuid;

use crate::domain::errors::RegistrationError;
use crate::domain::player::{NewPlayer, Player};
use crate::domain::team::{NewTeam, Team, TeamEvent};

/// Maximum number of players on one team's roster
pub const MAX_ROSTER_SIZE: usize = 5;

/// Registry aggregate root
///
/// Holds every registered team and player in insertion order and enforces
/// the rules that span more than one entity.
///
/// # Invariants
/// - No two teams share a name, ignoring case
/// - Every player references an existing team
/// - No team has more than [`MAX_ROSTER_SIZE`] players
/// - Both collections are append-only
///
/// Each `register_*` call validates fully before appending, so a rejected
/// submission leaves the registry untouched. Callers sharing a registry
/// across tasks must hold exclusive access for the whole call.
///
/// # Example
/// ```
/// use esports_registration_api::domain::registry::Registry;
/// use esports_registration_api::domain::team::NewTeam;
///
/// let mut registry = Registry::default();
/// registry
///     .register_team(NewTeam::new("Alpha", "Ana", "ana@example.com"))
///     .expect("first registration");
///
/// let duplicate = registry.register_team(NewTeam::new("ALPHA", "Bo", "bo@example.com"));
/// assert!(duplicate.is_err());
/// assert_eq!(registry.teams().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Registry {
    teams: Vec<Team>,
    players: Vec<Player>,
}

impl Registry {
    /// All teams, oldest first
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// All players, oldest first
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn find_team(&self, id: Uuid) -> Option<&Team> {
        self.teams.iter().find(|team| team.id() == id)
    }

    /// Number of players registered to `team_id` (zero for unknown teams)
    pub fn roster_size(&self, team_id: Uuid) -> usize {
        self.players
            .iter()
            .filter(|player| player.team_id() == team_id)
            .count()
    }

    /// Admits a new team
    ///
    /// # Validation order
    /// 1. All fields present, else `MissingTeamField`
    /// 2. Name unused (case-insensitive), else `DuplicateTeam`
    pub fn register_team(
        &mut self,
        draft: NewTeam,
    ) -> Result<(Team, TeamEvent), RegistrationError> {
        let (team, event) = Team::new(draft)?;

        if self
            .teams
            .iter()
            .any(|existing| existing.name().same_team_as(team.name().as_str()))
        {
            return Err(RegistrationError::DuplicateTeam {
                name: team.name().to_string(),
            });
        }

        self.teams.push(team.clone());
        Ok((team, event))
    }

    /// Admits a new player onto an existing team's roster
    ///
    /// # Validation order
    /// 1. All six fields present, else `MissingPlayerField`
    /// 2. `team_id` names a registered team, else `InvalidTeam`
    /// 3. Roster below [`MAX_ROSTER_SIZE`], else `RosterFull`
    pub fn register_player(
        &mut self,
        draft: NewPlayer,
    ) -> Result<(Player, TeamEvent), RegistrationError> {
        let submission = draft.validate()?;
        let team_id = submission.team_id()?;
        let team = self
            .find_team(team_id)
            .ok_or_else(|| submission.invalid_team())?;

        let roster_size = self.roster_size(team_id);
        if roster_size >= MAX_ROSTER_SIZE {
            return Err(RegistrationError::RosterFull {
                team_name: team.name().to_string(),
            });
        }

        let player = Player::enroll(submission, team);
        let event = TeamEvent::PlayerJoined {
            team_id,
            player_id: player.id(),
            nickname: player.nickname().to_string(),
            roster_size: roster_size + 1,
        };

        self.players.push(player.clone());
        Ok((player, event))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_with_team(name: &str) -> (Registry, Team) {
        let mut registry = Registry::default();
        let (team, _) = registry
            .register_team(NewTeam::new(name, "Captain", "captain@example.com"))
            .unwrap();
        (registry, team)
    }

    fn player_for(team_id: &str, nickname: &str) -> NewPlayer {
        NewPlayer {
            name: format!("{nickname} Real Name"),
            nickname: nickname.to_string(),
            role: "support".to_string(),
            rank: "Gold".to_string(),
            gender: "F".to_string(),
            team_id: team_id.to_string(),
        }
    }

    #[test]
    fn register_team_appends_in_order() {
        let mut registry = Registry::default();
        registry.register_team(NewTeam::new("Alpha", "a", "a")).unwrap();
        registry.register_team(NewTeam::new(" Bravo ", "b", "b")).unwrap();

        let names: Vec<_> = registry.teams().iter().map(|t| t.name().as_str()).collect();
        assert_eq!(names, ["Alpha", "Bravo"]);
    }

    #[test]
    fn duplicate_name_is_case_insensitive() {
        let (mut registry, _) = registry_with_team("Alpha");

        let result = registry.register_team(NewTeam::new("alpha", "x", "y"));

        assert_eq!(
            result.unwrap_err(),
            RegistrationError::DuplicateTeam {
                name: "alpha".to_string()
            }
        );
        assert_eq!(registry.teams().len(), 1);
    }

    #[test]
    fn duplicate_check_uses_trimmed_name() {
        let (mut registry, _) = registry_with_team("Alpha");

        let result = registry.register_team(NewTeam::new("  ALPHA  ", "x", "y"));

        assert!(matches!(result, Err(RegistrationError::DuplicateTeam { .. })));
    }

    #[test]
    fn missing_field_wins_over_duplicate() {
        let (mut registry, _) = registry_with_team("Alpha");

        let result = registry.register_team(NewTeam::new("Alpha", "", "y"));

        assert_eq!(
            result.unwrap_err(),
            RegistrationError::MissingTeamField { field: "captain" }
        );
    }

    #[test]
    fn resubmitting_same_payload_fails() {
        let mut registry = Registry::default();
        let draft = NewTeam::new("Alpha", "Ana", "ana@example.com");

        assert!(registry.register_team(draft.clone()).is_ok());
        assert!(registry.register_team(draft).is_err());
        assert_eq!(registry.teams().len(), 1);
    }

    #[test]
    fn roster_accepts_five_players_then_rejects() {
        let (mut registry, team) = registry_with_team("Alpha");
        let team_id = team.id().to_string();

        for i in 1..=MAX_ROSTER_SIZE {
            let (_, event) = registry
                .register_player(player_for(&team_id, &format!("p{i}")))
                .unwrap();
            assert!(matches!(
                event,
                TeamEvent::PlayerJoined { roster_size, .. } if roster_size == i
            ));
        }

        let sixth = registry.register_player(player_for(&team_id, "p6"));

        assert_eq!(
            sixth.unwrap_err(),
            RegistrationError::RosterFull {
                team_name: "Alpha".to_string()
            }
        );
        assert_eq!(registry.players().len(), MAX_ROSTER_SIZE);
        assert_eq!(registry.roster_size(team.id()), MAX_ROSTER_SIZE);
    }

    #[test]
    fn full_roster_does_not_affect_other_teams() {
        let (mut registry, alpha) = registry_with_team("Alpha");
        let (bravo, _) = registry.register_team(NewTeam::new("Bravo", "b", "b")).unwrap();

        for i in 0..MAX_ROSTER_SIZE {
            registry
                .register_player(player_for(&alpha.id().to_string(), &format!("a{i}")))
                .unwrap();
        }

        assert!(registry
            .register_player(player_for(&bravo.id().to_string(), "b0"))
            .is_ok());
        assert_eq!(registry.roster_size(bravo.id()), 1);
    }

    #[test]
    fn unknown_team_is_invalid() {
        let (mut registry, _) = registry_with_team("Alpha");
        let unknown = Uuid::new_v4().to_string();

        let result = registry.register_player(player_for(&unknown, "ghost"));

        assert_eq!(
            result.unwrap_err(),
            RegistrationError::InvalidTeam { team_id: unknown }
        );
        assert!(registry.players().is_empty());
    }

    #[test]
    fn garbage_team_id_is_invalid() {
        let (mut registry, _) = registry_with_team("Alpha");

        let result = registry.register_player(player_for("42", "ghost"));

        assert_eq!(result.unwrap_err().code(), "invalid_team");
    }

    #[test]
    fn missing_field_wins_over_invalid_team() {
        let mut registry = Registry::default();
        let mut draft = player_for("nope", "ghost");
        draft.nickname = String::new();

        assert_eq!(
            registry.register_player(draft).unwrap_err(),
            RegistrationError::MissingPlayerField { field: "nickname" }
        );
    }

    #[test]
    fn player_carries_team_snapshot() {
        let (mut registry, team) = registry_with_team("Alpha");

        let (player, _) = registry
            .register_player(player_for(&team.id().to_string(), "p1"))
            .unwrap();

        assert_eq!(player.team_id(), team.id());
        assert_eq!(player.team_name(), "Alpha");
        assert_eq!(registry.players(), &[player]);
    }

    #[test]
    fn roster_size_of_unknown_team_is_zero() {
        let registry = Registry::default();
        assert_eq!(registry.roster_size(Uuid::new_v4()), 0);
    }
}
