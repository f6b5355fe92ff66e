use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, to_document};
use mongodb::{Collection, Database};

use crate::domain::repositories::user_repository::UserRepository;
use crate::domain::repositories::{
    InsertOutcome, RepositoryError, RepositoryResult, UpdateOutcome,
};
use crate::domain::user::{Email, User, UserProfileUpdate};

/// MongoDB implementation of UserRepository
pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    /// Creates a new MongoUserRepository over the `users` collection
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection("users"),
        }
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn create(&self, user: User) -> RepositoryResult<InsertOutcome> {
        let existing = self
            .collection
            .find_one(doc! { "email": user.email.as_str() })
            .await
            .map_err(|e| RepositoryError::Store(format!("Failed to check existing user: {}", e)))?;

        if existing.is_some() {
            return Err(RepositoryError::Duplicate(user.email.to_string()));
        }

        let result = self
            .collection
            .insert_one(&user)
            .await
            .map_err(|e| RepositoryError::Store(format!("Failed to create user: {}", e)))?;

        let inserted_id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| RepositoryError::Store("Inserted id was not an ObjectId".to_string()))?;

        Ok(InsertOutcome::new(inserted_id))
    }

    async fn find_all(&self) -> RepositoryResult<Vec<User>> {
        let cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(|e| RepositoryError::Store(format!("Failed to list users: {}", e)))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| RepositoryError::Store(format!("Failed to read users: {}", e)))
    }

    async fn find_by_email(&self, email: &Email) -> RepositoryResult<Option<User>> {
        self.collection
            .find_one(doc! { "email": email.as_str() })
            .await
            .map_err(|e| RepositoryError::Store(format!("Failed to find user by email: {}", e)))
    }

    async fn update_profile(
        &self,
        id: ObjectId,
        update: UserProfileUpdate,
    ) -> RepositoryResult<UpdateOutcome> {
        let set = to_document(&update)
            .map_err(|e| RepositoryError::Store(format!("Failed to encode update: {}", e)))?;

        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": set })
            .upsert(true)
            .await
            .map_err(|e| RepositoryError::Store(format!("Failed to update user: {}", e)))?;

        Ok(UpdateOutcome::new(
            result.matched_count,
            result.modified_count,
            result.upserted_id.and_then(|id| id.as_object_id()),
        ))
    }
}
