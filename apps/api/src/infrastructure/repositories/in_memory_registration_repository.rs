use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::errors::RegistrationError;
use crate::domain::player::{NewPlayer, Player};
use crate::domain::registry::Registry;
use crate::domain::repositories::RegistrationRepository;
use crate::domain::team::{NewTeam, Team, TeamEvent};

/// In-process implementation of RegistrationRepository
///
/// Keeps the whole [`Registry`] behind one `RwLock`. Adds hold the write
/// lock across validation and append; lists take the read lock and return
/// clones. Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryRegistrationRepository {
    registry: RwLock<Registry>,
}

impl InMemoryRegistrationRepository {
    /// Creates an empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

fn log_event(event: &TeamEvent) {
    match event {
        TeamEvent::Registered { team_id, name } => {
            tracing::info!(event = event.kind(), %team_id, name = %name, "Team registered");
        }
        TeamEvent::PlayerJoined {
            team_id,
            player_id,
            nickname,
            roster_size,
        } => {
            tracing::info!(
                event = event.kind(),
                %team_id,
                %player_id,
                nickname = %nickname,
                roster_size,
                "Player joined roster"
            );
        }
    }
}

fn log_rejection(operation: &str, error: &RegistrationError) {
    tracing::warn!(operation, code = error.code(), "Registration rejected: {}", error);
}

#[async_trait]
impl RegistrationRepository for InMemoryRegistrationRepository {
    async fn list_teams(&self) -> Vec<Team> {
        self.registry.read().await.teams().to_vec()
    }

    async fn add_team(&self, team: NewTeam) -> Result<Team, RegistrationError> {
        let mut registry = self.registry.write().await;
        let (team, event) = registry
            .register_team(team)
            .inspect_err(|e| log_rejection("add_team", e))?;

        log_event(&event);
        Ok(team)
    }

    async fn list_players(&self) -> Vec<Player> {
        self.registry.read().await.players().to_vec()
    }

    async fn add_player(&self, player: NewPlayer) -> Result<Player, RegistrationError> {
        let mut registry = self.registry.write().await;
        let (player, event) = registry
            .register_player(player)
            .inspect_err(|e| log_rejection("add_player", e))?;

        log_event(&event);
        Ok(player)
    }

    async fn roster_size(&self, team_id: Uuid) -> usize {
        self.registry.read().await.roster_size(team_id)
    }
}
