use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::api::errors::ApiError;
use crate::api::handlers::users::parse_id;
use crate::domain::repositories::{DeleteOutcome, InsertOutcome};
use crate::domain::team::TeamMembership;
use crate::domain::user::Email;
use crate::state::AppState;

/// Request body for admitting a member into a team
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMembershipRequest {
    pub email: Option<String>,
    pub name: Option<String>,
    pub photo: Option<String>,
    pub role: Option<String>,
    pub user_email: Option<String>,
    pub work_at: Option<String>,
}

/// Admit a member into an employer's team
///
/// POST /team (rejected unless the member's role is "employee")
pub async fn create_membership(
    State(state): State<AppState>,
    Json(req): Json<CreateMembershipRequest>,
) -> Result<(StatusCode, Json<InsertOutcome>), ApiError> {
    let email = req
        .email
        .ok_or_else(|| ApiError::bad_request("email is required"))?;
    let email = Email::new(email).map_err(ApiError::bad_request)?;

    let user_email = req
        .user_email
        .ok_or_else(|| ApiError::bad_request("userEmail is required"))?;
    let user_email = Email::new(user_email).map_err(ApiError::bad_request)?;

    let role = req
        .role
        .ok_or_else(|| ApiError::bad_request("role is required"))?;

    // Admission rule lives on the domain type
    let membership = TeamMembership::admit(email, req.name, req.photo, role, user_email, req.work_at)
        .map_err(ApiError::bad_request)?;

    let outcome = state.teams.create(membership).await?;
    Ok((StatusCode::CREATED, Json(outcome)))
}

/// List the memberships admitted by an employer
///
/// GET /team/:email
pub async fn memberships_by_employer(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Vec<TeamMembership>>, ApiError> {
    let employer = Email::new(email).map_err(ApiError::bad_request)?;

    let memberships = state.teams.find_by_employer(&employer).await?;
    Ok(Json(memberships))
}

/// List a member's colleagues
///
/// GET /myTeam/:email
///
/// Looks up the member's own membership to learn their employer, then
/// lists every membership under that employer. A member with no membership
/// gets an empty list.
pub async fn my_team(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Vec<TeamMembership>>, ApiError> {
    let member = Email::new(email).map_err(ApiError::bad_request)?;

    let Some(membership) = state.teams.find_by_member(&member).await? else {
        return Ok(Json(Vec::new()));
    };

    let colleagues = state.teams.find_by_employer(&membership.user_email).await?;
    Ok(Json(colleagues))
}

/// Get a member's own membership record (carries the employer reference)
///
/// GET /hrEmail/:email
pub async fn hr_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<TeamMembership>, ApiError> {
    let member = Email::new(email).map_err(ApiError::bad_request)?;

    let membership = state
        .teams
        .find_by_member(&member)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Membership not found: {}", member)))?;

    Ok(Json(membership))
}

/// Remove a membership by id
///
/// DELETE /team/:id
pub async fn delete_membership(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteOutcome>, ApiError> {
    let id = parse_id(&id)?;

    let outcome = state.teams.delete(id).await?;
    Ok(Json(outcome))
}
