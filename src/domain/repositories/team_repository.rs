use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::domain::repositories::{DeleteOutcome, InsertOutcome, RepositoryResult};
use crate::domain::team::TeamMembership;
use crate::domain::user::Email;

/// Repository trait for the `teams` collection
///
/// Memberships are queried from either side of the relationship: by the
/// employer that admitted them (`user_email`) or by the member (`email`).
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Insert a membership record
    async fn create(&self, membership: TeamMembership) -> RepositoryResult<InsertOutcome>;

    /// All memberships admitted by the given employer email
    async fn find_by_employer(&self, employer: &Email) -> RepositoryResult<Vec<TeamMembership>>;

    /// The membership record of the given member email, if any
    async fn find_by_member(&self, member: &Email) -> RepositoryResult<Option<TeamMembership>>;

    /// Delete a membership by id
    async fn delete(&self, id: ObjectId) -> RepositoryResult<DeleteOutcome>;
}
