use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{created, form_field, Created};
use crate::api::errors::ApiError;
use crate::api::middleware::AdminAuth;
use crate::api::state::AppState;
use crate::domain::player::{NewPlayer, Player};

/// Request body for registering a player
///
/// `team_id` is taken as text, the way a form select submits it; a numeric
/// id is accepted and then fails team resolution like any unknown id.
#[derive(Debug, Deserialize)]
pub struct CreatePlayerRequest {
    #[serde(default, deserialize_with = "form_field")]
    pub name: String,
    #[serde(default, deserialize_with = "form_field")]
    pub nickname: String,
    #[serde(default, deserialize_with = "form_field")]
    pub role: String,
    #[serde(default, deserialize_with = "form_field")]
    pub rank: String,
    #[serde(default, deserialize_with = "form_field")]
    pub gender: String,
    #[serde(default, deserialize_with = "form_field")]
    pub team_id: String,
}

impl From<CreatePlayerRequest> for NewPlayer {
    fn from(req: CreatePlayerRequest) -> Self {
        NewPlayer {
            name: req.name,
            nickname: req.nickname,
            role: req.role,
            rank: req.rank,
            gender: req.gender,
            team_id: req.team_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PlayerResponse {
    pub id: Uuid,
    pub name: String,
    pub nickname: String,
    pub role: String,
    pub rank: String,
    pub gender: String,
    pub team_id: Uuid,
    pub team_name: String,
    pub registered_at: DateTime<Utc>,
}

impl From<&Player> for PlayerResponse {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id(),
            name: player.name().to_string(),
            nickname: player.nickname().to_string(),
            role: player.role().to_string(),
            rank: player.rank().to_string(),
            gender: player.gender().to_string(),
            team_id: player.team_id(),
            team_name: player.team_name().to_string(),
            registered_at: player.registered_at(),
        }
    }
}

/// List registered players with their team names
///
/// GET /api/players
pub async fn list_players(
    _admin: AdminAuth,
    State(state): State<AppState>,
) -> Json<Vec<PlayerResponse>> {
    let players = state.registrations.list_players().await;
    Json(players.iter().map(PlayerResponse::from).collect())
}

/// Register a player on a team's roster
///
/// POST /api/players
pub async fn create_player(
    _admin: AdminAuth,
    State(state): State<AppState>,
    payload: Result<Json<CreatePlayerRequest>, JsonRejection>,
) -> Result<Created<PlayerResponse>, ApiError> {
    let Json(req) = payload?;
    let player = state.registrations.add_player(req.into()).await?;

    Ok(created("/api/players", PlayerResponse::from(&player)))
}
