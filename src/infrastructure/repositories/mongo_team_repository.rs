use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::{Collection, Database};

use crate::domain::repositories::team_repository::TeamRepository;
use crate::domain::repositories::{
    DeleteOutcome, InsertOutcome, RepositoryError, RepositoryResult,
};
use crate::domain::team::TeamMembership;
use crate::domain::user::Email;

/// MongoDB implementation of TeamRepository
pub struct MongoTeamRepository {
    collection: Collection<TeamMembership>,
}

impl MongoTeamRepository {
    /// Creates a new MongoTeamRepository over the `teams` collection
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection("teams"),
        }
    }
}

#[async_trait]
impl TeamRepository for MongoTeamRepository {
    async fn create(&self, membership: TeamMembership) -> RepositoryResult<InsertOutcome> {
        let result = self
            .collection
            .insert_one(&membership)
            .await
            .map_err(|e| RepositoryError::Store(format!("Failed to create membership: {}", e)))?;

        let inserted_id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| RepositoryError::Store("Inserted id was not an ObjectId".to_string()))?;

        Ok(InsertOutcome::new(inserted_id))
    }

    async fn find_by_employer(&self, employer: &Email) -> RepositoryResult<Vec<TeamMembership>> {
        let cursor = self
            .collection
            .find(doc! { "userEmail": employer.as_str() })
            .await
            .map_err(|e| {
                RepositoryError::Store(format!("Failed to find memberships by employer: {}", e))
            })?;

        cursor
            .try_collect()
            .await
            .map_err(|e| RepositoryError::Store(format!("Failed to read memberships: {}", e)))
    }

    async fn find_by_member(&self, member: &Email) -> RepositoryResult<Option<TeamMembership>> {
        self.collection
            .find_one(doc! { "email": member.as_str() })
            .await
            .map_err(|e| {
                RepositoryError::Store(format!("Failed to find membership by member: {}", e))
            })
    }

    async fn delete(&self, id: ObjectId) -> RepositoryResult<DeleteOutcome> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| RepositoryError::Store(format!("Failed to delete membership: {}", e)))?;

        Ok(DeleteOutcome::new(result.deleted_count))
    }
}
