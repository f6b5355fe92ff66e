use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use mongodb::bson::oid::ObjectId;
use serde::Deserialize;

use crate::api::errors::ApiError;
use crate::api::middleware::auth::AuthContext;
use crate::domain::repositories::{InsertOutcome, RepositoryError, UpdateOutcome};
use crate::domain::user::{Email, User, UserProfileUpdate};
use crate::state::AppState;

/// Request body for user creation
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub email: Option<String>,
    pub name: Option<String>,
    pub photo_url: Option<String>,
    pub role: Option<String>,
    pub date_of_birth: Option<String>,
    pub company_name: Option<String>,
    pub company_logo: Option<String>,
    pub work_at: Option<String>,
}

/// Create a new user
///
/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<InsertOutcome>), ApiError> {
    // Validate email
    let email = req
        .email
        .filter(|e| !e.is_empty())
        .ok_or_else(|| ApiError::bad_request("email is required"))?;
    let email = Email::new(email).map_err(ApiError::bad_request)?;

    let user = User {
        id: None,
        email,
        name: req.name,
        photo_url: req.photo_url,
        role: req.role,
        date_of_birth: req.date_of_birth,
        company_name: req.company_name,
        company_logo: req.company_logo,
        work_at: req.work_at,
    };

    // Save to the store; a second document for the same email is a conflict
    let outcome = state.users.create(user).await.map_err(|e| match e {
        RepositoryError::Duplicate(email) => {
            ApiError::conflict(format!("User already exists: {}", email))
        }
        other => ApiError::from(other),
    })?;

    Ok((StatusCode::CREATED, Json(outcome)))
}

/// List all users
///
/// GET /users (requires a valid bearer token)
pub async fn list_users(
    _ctx: AuthContext,
    State(state): State<AppState>,
) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.users.find_all().await?;
    Ok(Json(users))
}

/// Get a single user by email
///
/// GET /user/:email
pub async fn get_user_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<User>, ApiError> {
    let email = Email::new(email).map_err(ApiError::bad_request)?;

    let user = state
        .users
        .find_by_email(&email)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("User not found: {}", email)))?;

    Ok(Json(user))
}

/// Merge profile fields into a user by id, inserting if absent
///
/// PUT /update-profile/:id
pub async fn update_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<UserProfileUpdate>,
) -> Result<Json<UpdateOutcome>, ApiError> {
    let id = parse_id(&id)?;

    // The store rejects an empty merge document
    if update.is_empty() {
        return Err(ApiError::bad_request("no fields to update"));
    }

    let outcome = state.users.update_profile(id, update).await?;
    Ok(Json(outcome))
}

/// Merge profile fields into a user by id
///
/// PATCH /user/update/:id (requires a valid bearer token)
pub async fn patch_user(
    _ctx: AuthContext,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<UserProfileUpdate>,
) -> Result<Json<UpdateOutcome>, ApiError> {
    let id = parse_id(&id)?;

    if update.is_empty() {
        return Err(ApiError::bad_request("no fields to update"));
    }

    let outcome = state.users.update_profile(id, update).await?;
    Ok(Json(outcome))
}

/// Parses an opaque id string into the store's id type
pub(crate) fn parse_id(id: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(id).map_err(|_| ApiError::bad_request(format!("Invalid id: {}", id)))
}
