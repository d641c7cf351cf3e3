use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RegistrationError;
use crate::domain::player::{NewPlayer, Player};
use crate::domain::team::{NewTeam, Team};

/// Repository trait for the tournament registry
///
/// Defines the contract the HTTP layer uses to read and extend the team and
/// player collections. Implementations must make each `add_*` call atomic:
/// the validation and the append happen in one critical section, so
/// concurrent submissions can never duplicate a team name or overfill a
/// roster.
#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    /// All teams in registration order
    async fn list_teams(&self) -> Vec<Team>;

    /// Validate and register a team
    async fn add_team(&self, team: NewTeam) -> Result<Team, RegistrationError>;

    /// All players in registration order, each with its team name snapshot
    async fn list_players(&self) -> Vec<Player>;

    /// Validate and register a player on an existing team
    async fn add_player(&self, player: NewPlayer) -> Result<Player, RegistrationError>;

    /// Number of players currently on a team's roster
    async fn roster_size(&self, team_id: Uuid) -> usize;
}
