//! In-memory repository implementations
//!
//! Mirror the MongoDB adapters' observable behavior over plain vectors so
//! the handler layer can be exercised without a running store. Intended for
//! tests; the production wiring always injects the MongoDB adapters.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::sync::Mutex;

use crate::domain::asset::{Asset, AssetFilter, AssetUpdate, SortOrder};
use crate::domain::repositories::{
    AssetRepository, DeleteOutcome, InsertOutcome, RepositoryError, RepositoryResult,
    TeamRepository, UpdateOutcome, UserRepository,
};
use crate::domain::team::TeamMembership;
use crate::domain::user::{Email, User, UserProfileUpdate};

/// In-memory implementation of UserRepository
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, mut user: User) -> RepositoryResult<InsertOutcome> {
        let mut users = self.users.lock().unwrap();

        if users.iter().any(|u| u.email == user.email) {
            return Err(RepositoryError::Duplicate(user.email.to_string()));
        }

        let id = ObjectId::new();
        user.id = Some(id);
        users.push(user);

        Ok(InsertOutcome::new(id))
    }

    async fn find_all(&self) -> RepositoryResult<Vec<User>> {
        Ok(self.users.lock().unwrap().clone())
    }

    async fn find_by_email(&self, email: &Email) -> RepositoryResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| &u.email == email)
            .cloned())
    }

    /// Profile updates never carry an email, so a miss leaves the store
    /// unchanged instead of inserting a keyless document
    async fn update_profile(
        &self,
        id: ObjectId,
        update: UserProfileUpdate,
    ) -> RepositoryResult<UpdateOutcome> {
        let mut users = self.users.lock().unwrap();

        let Some(user) = users.iter_mut().find(|u| u.id == Some(id)) else {
            return Ok(UpdateOutcome::new(0, 0, None));
        };

        let mut modified = 0;
        let mut merge = |target: &mut Option<String>, value: Option<String>| {
            if let Some(value) = value {
                if target.as_deref() != Some(value.as_str()) {
                    *target = Some(value);
                    modified = 1;
                }
            }
        };

        merge(&mut user.name, update.name);
        merge(&mut user.photo_url, update.photo_url);
        merge(&mut user.role, update.role);
        merge(&mut user.date_of_birth, update.date_of_birth);
        merge(&mut user.company_name, update.company_name);
        merge(&mut user.company_logo, update.company_logo);
        merge(&mut user.work_at, update.work_at);

        Ok(UpdateOutcome::new(1, modified, None))
    }
}

/// In-memory implementation of TeamRepository
#[derive(Default)]
pub struct InMemoryTeamRepository {
    memberships: Mutex<Vec<TeamMembership>>,
}

impl InMemoryTeamRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn create(&self, mut membership: TeamMembership) -> RepositoryResult<InsertOutcome> {
        let id = ObjectId::new();
        membership.id = Some(id);
        self.memberships.lock().unwrap().push(membership);

        Ok(InsertOutcome::new(id))
    }

    async fn find_by_employer(&self, employer: &Email) -> RepositoryResult<Vec<TeamMembership>> {
        Ok(self
            .memberships
            .lock()
            .unwrap()
            .iter()
            .filter(|m| &m.user_email == employer)
            .cloned()
            .collect())
    }

    async fn find_by_member(&self, member: &Email) -> RepositoryResult<Option<TeamMembership>> {
        Ok(self
            .memberships
            .lock()
            .unwrap()
            .iter()
            .find(|m| &m.email == member)
            .cloned())
    }

    async fn delete(&self, id: ObjectId) -> RepositoryResult<DeleteOutcome> {
        let mut memberships = self.memberships.lock().unwrap();
        let before = memberships.len();
        memberships.retain(|m| m.id != Some(id));

        Ok(DeleteOutcome::new((before - memberships.len()) as u64))
    }
}

/// In-memory implementation of AssetRepository
#[derive(Default)]
pub struct InMemoryAssetRepository {
    assets: Mutex<Vec<Asset>>,
}

impl InMemoryAssetRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn apply(asset: &mut Asset, update: AssetUpdate) -> u64 {
        let before = serde_json::to_value(&*asset).ok();

        if let Some(asset_name) = update.asset_name {
            asset.asset_name = asset_name;
        }
        if let Some(category) = update.category {
            asset.category = category;
        }
        if let Some(quantity) = update.quantity {
            asset.quantity = quantity;
        }
        if let Some(product_type) = update.product_type {
            asset.product_type = Some(product_type);
        }
        if let Some(added_date) = update.added_date {
            asset.added_date = Some(added_date);
        }
        if let Some(user_email) = update.user_email {
            asset.user_email = Some(user_email);
        }

        let after = serde_json::to_value(&*asset).ok();
        u64::from(before != after)
    }
}

#[async_trait]
impl AssetRepository for InMemoryAssetRepository {
    async fn create(&self, mut asset: Asset) -> RepositoryResult<InsertOutcome> {
        let id = ObjectId::new();
        asset.id = Some(id);
        self.assets.lock().unwrap().push(asset);

        Ok(InsertOutcome::new(id))
    }

    async fn find(&self, filter: &AssetFilter) -> RepositoryResult<Vec<Asset>> {
        let assets = self.assets.lock().unwrap();

        let mut matched: Vec<Asset> = assets
            .iter()
            .filter(|a| {
                filter
                    .search
                    .as_ref()
                    .map(|s| a.asset_name.to_lowercase().contains(&s.to_lowercase()))
                    .unwrap_or(true)
            })
            .filter(|a| {
                filter
                    .stock_status
                    .map(|s| s.matches(a.quantity))
                    .unwrap_or(true)
            })
            .filter(|a| {
                filter
                    .category
                    .as_ref()
                    .map(|c| &a.category == c)
                    .unwrap_or(true)
            })
            .cloned()
            .collect();

        match filter.sort_order {
            Some(SortOrder::LowToHigh) => matched.sort_by_key(|a| a.quantity),
            Some(SortOrder::HighToLow) => {
                matched.sort_by_key(|a| std::cmp::Reverse(a.quantity))
            }
            None => {}
        }

        Ok(matched)
    }

    async fn find_by_id(&self, id: ObjectId) -> RepositoryResult<Option<Asset>> {
        Ok(self
            .assets
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == Some(id))
            .cloned())
    }

    async fn upsert(&self, id: ObjectId, update: AssetUpdate) -> RepositoryResult<UpdateOutcome> {
        let mut assets = self.assets.lock().unwrap();

        if let Some(asset) = assets.iter_mut().find(|a| a.id == Some(id)) {
            let modified = Self::apply(asset, update);
            return Ok(UpdateOutcome::new(1, modified, None));
        }

        // Upsert miss: insert a fresh document built from the provided fields
        let mut asset = Asset {
            id: Some(id),
            asset_name: String::new(),
            category: String::new(),
            quantity: 0,
            product_type: None,
            added_date: None,
            user_email: None,
        };
        Self::apply(&mut asset, update);
        assets.push(asset);

        Ok(UpdateOutcome::new(0, 0, Some(id)))
    }

    async fn delete(&self, id: ObjectId) -> RepositoryResult<DeleteOutcome> {
        let mut assets = self.assets.lock().unwrap();
        let before = assets.len();
        assets.retain(|a| a.id != Some(id));

        Ok(DeleteOutcome::new((before - assets.len()) as u64))
    }

    async fn request_one(&self, id: ObjectId) -> RepositoryResult<Option<UpdateOutcome>> {
        let mut assets = self.assets.lock().unwrap();

        let Some(asset) = assets.iter_mut().find(|a| a.id == Some(id)) else {
            return Ok(None);
        };

        if asset.quantity > 0 {
            asset.quantity -= 1;
            Ok(Some(UpdateOutcome::new(1, 1, None)))
        } else {
            Ok(Some(UpdateOutcome::new(0, 0, None)))
        }
    }
}
