// Repository contracts (ports)
// Implementations live in the infrastructure layer

pub mod asset_repository;
pub mod team_repository;
pub mod user_repository;

pub use asset_repository::AssetRepository;
pub use team_repository::TeamRepository;
pub use user_repository::UserRepository;

use mongodb::bson::oid::ObjectId;
use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by repository implementations
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("duplicate key: {0}")]
    Duplicate(String),

    #[error("store error: {0}")]
    Store(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Result of an insert, mirroring the driver's acknowledgement shape
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertOutcome {
    pub acknowledged: bool,
    pub inserted_id: ObjectId,
}

impl InsertOutcome {
    pub fn new(inserted_id: ObjectId) -> Self {
        Self {
            acknowledged: true,
            inserted_id,
        }
    }
}

/// Result of an update or upsert, mirroring the driver's acknowledgement shape
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOutcome {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_id: Option<ObjectId>,
}

impl UpdateOutcome {
    pub fn new(matched_count: u64, modified_count: u64, upserted_id: Option<ObjectId>) -> Self {
        Self {
            acknowledged: true,
            matched_count,
            modified_count,
            upserted_id,
        }
    }
}

/// Result of a delete, mirroring the driver's acknowledgement shape
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteOutcome {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl DeleteOutcome {
    pub fn new(deleted_count: u64) -> Self {
        Self {
            acknowledged: true,
            deleted_count,
        }
    }
}
