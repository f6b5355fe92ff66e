use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::domain::repositories::{InsertOutcome, RepositoryResult, UpdateOutcome};
use crate::domain::user::{Email, User, UserProfileUpdate};

/// Repository trait for the `users` collection
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user; fails with `RepositoryError::Duplicate` if a
    /// document with the same email already exists
    async fn create(&self, user: User) -> RepositoryResult<InsertOutcome>;

    /// Return every user document
    async fn find_all(&self) -> RepositoryResult<Vec<User>>;

    /// Find a user by email address
    async fn find_by_email(&self, email: &Email) -> RepositoryResult<Option<User>>;

    /// Merge profile fields into the user with the given id, inserting a
    /// new document if none matches
    async fn update_profile(
        &self,
        id: ObjectId,
        update: UserProfileUpdate,
    ) -> RepositoryResult<UpdateOutcome>;
}
