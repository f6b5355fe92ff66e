use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, to_document, Document};
use mongodb::{Collection, Database};

use crate::domain::asset::{Asset, AssetFilter, AssetUpdate, SortOrder, StockStatus};
use crate::domain::repositories::asset_repository::AssetRepository;
use crate::domain::repositories::{
    DeleteOutcome, InsertOutcome, RepositoryError, RepositoryResult, UpdateOutcome,
};

/// MongoDB implementation of AssetRepository
pub struct MongoAssetRepository {
    collection: Collection<Asset>,
}

impl MongoAssetRepository {
    /// Creates a new MongoAssetRepository over the `assets` collection
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection("assets"),
        }
    }

    fn query_from(filter: &AssetFilter) -> Document {
        let mut query = Document::new();

        if let Some(search) = &filter.search {
            query.insert(
                "assetName",
                doc! { "$regex": search.as_str(), "$options": "i" },
            );
        }

        match filter.stock_status {
            Some(StockStatus::Available) => {
                query.insert("quantity", doc! { "$gt": 0 });
            }
            Some(StockStatus::OutOfStock) => {
                query.insert("quantity", 0);
            }
            None => {}
        }

        if let Some(category) = &filter.category {
            query.insert("category", category.as_str());
        }

        query
    }
}

#[async_trait]
impl AssetRepository for MongoAssetRepository {
    async fn create(&self, asset: Asset) -> RepositoryResult<InsertOutcome> {
        let result = self
            .collection
            .insert_one(&asset)
            .await
            .map_err(|e| RepositoryError::Store(format!("Failed to create asset: {}", e)))?;

        let inserted_id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| RepositoryError::Store("Inserted id was not an ObjectId".to_string()))?;

        Ok(InsertOutcome::new(inserted_id))
    }

    async fn find(&self, filter: &AssetFilter) -> RepositoryResult<Vec<Asset>> {
        let query = Self::query_from(filter);

        let find = self.collection.find(query);
        let find = match filter.sort_order {
            Some(SortOrder::LowToHigh) => find.sort(doc! { "quantity": 1 }),
            Some(SortOrder::HighToLow) => find.sort(doc! { "quantity": -1 }),
            None => find,
        };

        let cursor = find
            .await
            .map_err(|e| RepositoryError::Store(format!("Failed to list assets: {}", e)))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| RepositoryError::Store(format!("Failed to read assets: {}", e)))
    }

    async fn find_by_id(&self, id: ObjectId) -> RepositoryResult<Option<Asset>> {
        self.collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| RepositoryError::Store(format!("Failed to find asset: {}", e)))
    }

    async fn upsert(&self, id: ObjectId, update: AssetUpdate) -> RepositoryResult<UpdateOutcome> {
        let set = to_document(&update)
            .map_err(|e| RepositoryError::Store(format!("Failed to encode update: {}", e)))?;

        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": set })
            .upsert(true)
            .await
            .map_err(|e| RepositoryError::Store(format!("Failed to update asset: {}", e)))?;

        Ok(UpdateOutcome::new(
            result.matched_count,
            result.modified_count,
            result.upserted_id.and_then(|id| id.as_object_id()),
        ))
    }

    async fn delete(&self, id: ObjectId) -> RepositoryResult<DeleteOutcome> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| RepositoryError::Store(format!("Failed to delete asset: {}", e)))?;

        Ok(DeleteOutcome::new(result.deleted_count))
    }

    async fn request_one(&self, id: ObjectId) -> RepositoryResult<Option<UpdateOutcome>> {
        // Conditional decrement: matches only while stock remains, so the
        // quantity cannot go below zero.
        let result = self
            .collection
            .update_one(
                doc! { "_id": id, "quantity": { "$gt": 0 } },
                doc! { "$inc": { "quantity": -1 } },
            )
            .await
            .map_err(|e| RepositoryError::Store(format!("Failed to request asset: {}", e)))?;

        if result.matched_count > 0 {
            return Ok(Some(UpdateOutcome::new(
                result.matched_count,
                result.modified_count,
                None,
            )));
        }

        // Nothing matched: either the asset is absent or already at zero.
        let existing = self
            .collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| RepositoryError::Store(format!("Failed to find asset: {}", e)))?;

        Ok(existing.map(|_| UpdateOutcome::new(0, 0, None)))
    }
}
