use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::api::errors::ApiError;
use crate::api::handlers::users::parse_id;
use crate::domain::asset::{Asset, AssetFilter, AssetUpdate};
use crate::domain::repositories::{DeleteOutcome, InsertOutcome, UpdateOutcome};
use crate::state::AppState;

/// Request body for asset creation
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssetRequest {
    pub asset_name: String,
    pub category: String,
    #[serde(default)]
    pub quantity: i64,
    pub product_type: Option<String>,
    pub added_date: Option<String>,
    pub user_email: Option<String>,
}

/// Create a new asset
///
/// POST /asset
pub async fn create_asset(
    State(state): State<AppState>,
    Json(req): Json<CreateAssetRequest>,
) -> Result<(StatusCode, Json<InsertOutcome>), ApiError> {
    if req.quantity < 0 {
        return Err(ApiError::bad_request("quantity must not be negative"));
    }

    let asset = Asset {
        id: None,
        asset_name: req.asset_name,
        category: req.category,
        quantity: req.quantity,
        product_type: req.product_type,
        added_date: req.added_date,
        user_email: req.user_email,
    };

    let outcome = state.assets.create(asset).await?;
    Ok((StatusCode::CREATED, Json(outcome)))
}

/// List assets with optional filters
///
/// GET /assets?search=&stockStatus=&category=&sortOrder=
pub async fn list_assets(
    State(state): State<AppState>,
    Query(filter): Query<AssetFilter>,
) -> Result<Json<Vec<Asset>>, ApiError> {
    let assets = state.assets.find(&filter).await?;
    Ok(Json(assets))
}

/// Fetch an asset by id
///
/// GET /asset/:id
pub async fn get_asset(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Asset>, ApiError> {
    let id = parse_id(&id)?;

    let asset = state
        .assets
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Asset not found: {}", id)))?;

    Ok(Json(asset))
}

/// Merge fields into an asset by id, inserting if absent
///
/// PUT /asset/:id
pub async fn update_asset(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<AssetUpdate>,
) -> Result<Json<UpdateOutcome>, ApiError> {
    let id = parse_id(&id)?;

    // The store rejects an empty merge document
    if update.is_empty() {
        return Err(ApiError::bad_request("no fields to update"));
    }

    let outcome = state.assets.upsert(id, update).await?;
    Ok(Json(outcome))
}

/// Remove an asset by id
///
/// DELETE /asset/:id
pub async fn delete_asset(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteOutcome>, ApiError> {
    let id = parse_id(&id)?;

    let outcome = state.assets.delete(id).await?;
    Ok(Json(outcome))
}

/// Take one unit of an asset's stock as part of a request workflow
///
/// POST /request-asset/:id
///
/// The decrement only matches documents with remaining stock, so the
/// quantity is clamped at zero; requesting an out-of-stock asset succeeds
/// with `modifiedCount: 0`.
pub async fn request_asset(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UpdateOutcome>, ApiError> {
    let id = parse_id(&id)?;

    let outcome = state
        .assets
        .request_one(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Asset not found: {}", id)))?;

    Ok(Json(outcome))
}

/// Merge fields into an asset by id as part of a request workflow
///
/// PUT /request-update/:id
pub async fn request_update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<AssetUpdate>,
) -> Result<Json<UpdateOutcome>, ApiError> {
    let id = parse_id(&id)?;

    if update.is_empty() {
        return Err(ApiError::bad_request("no fields to update"));
    }

    let outcome = state.assets.upsert(id, update).await?;
    Ok(Json(outcome))
}
