use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::domain::asset::{Asset, AssetFilter, AssetUpdate};
use crate::domain::repositories::{
    DeleteOutcome, InsertOutcome, RepositoryResult, UpdateOutcome,
};

/// Repository trait for the `assets` collection
#[async_trait]
pub trait AssetRepository: Send + Sync {
    /// Insert an asset document
    async fn create(&self, asset: Asset) -> RepositoryResult<InsertOutcome>;

    /// List assets matching the filter, sorted by quantity when requested
    async fn find(&self, filter: &AssetFilter) -> RepositoryResult<Vec<Asset>>;

    /// Fetch an asset by id
    async fn find_by_id(&self, id: ObjectId) -> RepositoryResult<Option<Asset>>;

    /// Merge fields into the asset with the given id, inserting a new
    /// document if none matches
    async fn upsert(&self, id: ObjectId, update: AssetUpdate) -> RepositoryResult<UpdateOutcome>;

    /// Delete an asset by id
    async fn delete(&self, id: ObjectId) -> RepositoryResult<DeleteOutcome>;

    /// Take one unit of the asset's stock as part of a request workflow
    ///
    /// The decrement is a single conditional update matching only documents
    /// with `quantity > 0`, so the quantity can never go negative even under
    /// concurrent requesters. Returns `None` if no document has the id; an
    /// existing asset at zero quantity yields an outcome with
    /// `modified_count == 0`. The existence check is a second round-trip and
    /// can race with a concurrent delete, which only affects the status code
    /// reported, never the stored quantity.
    async fn request_one(&self, id: ObjectId) -> RepositoryResult<Option<UpdateOutcome>>;
}
