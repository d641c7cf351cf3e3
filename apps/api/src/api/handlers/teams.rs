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
use crate::domain::team::{NewTeam, Team};

/// Request body for registering a team
///
/// Absent or `null` keys deserialize as empty strings so they are reported
/// as missing fields by the registry rather than rejected by the JSON
/// extractor.
#[derive(Debug, Deserialize)]
pub struct CreateTeamRequest {
    #[serde(default, deserialize_with = "form_field")]
    pub name: String,
    #[serde(default, deserialize_with = "form_field")]
    pub captain: String,
    #[serde(default, deserialize_with = "form_field")]
    pub contact: String,
}

impl From<CreateTeamRequest> for NewTeam {
    fn from(req: CreateTeamRequest) -> Self {
        NewTeam::new(req.name, req.captain, req.contact)
    }
}

#[derive(Debug, Serialize)]
pub struct TeamResponse {
    pub id: Uuid,
    pub name: String,
    pub captain: String,
    pub contact: String,
    pub registered_at: DateTime<Utc>,
}

impl From<&Team> for TeamResponse {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id(),
            name: team.name().to_string(),
            captain: team.captain().to_string(),
            contact: team.contact().to_string(),
            registered_at: team.registered_at(),
        }
    }
}

/// List registered teams
///
/// GET /api/teams
pub async fn list_teams(
    _admin: AdminAuth,
    State(state): State<AppState>,
) -> Json<Vec<TeamResponse>> {
    let teams = state.registrations.list_teams().await;
    Json(teams.iter().map(TeamResponse::from).collect())
}

/// Register a new team
///
/// POST /api/teams
pub async fn create_team(
    _admin: AdminAuth,
    State(state): State<AppState>,
    payload: Result<Json<CreateTeamRequest>, JsonRejection>,
) -> Result<Created<TeamResponse>, ApiError> {
    let Json(req) = payload?;
    let team = state.registrations.add_team(req.into()).await?;

    Ok(created("/api/teams", TeamResponse::from(&team)))
}
