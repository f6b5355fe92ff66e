// Repository implementations (data access layer)
// MongoDB adapters for production, in-memory adapters for tests

pub mod memory;
pub mod mongo_asset_repository;
pub mod mongo_team_repository;
pub mod mongo_user_repository;

pub use memory::{InMemoryAssetRepository, InMemoryTeamRepository, InMemoryUserRepository};
pub use mongo_asset_repository::MongoAssetRepository;
pub use mongo_team_repository::MongoTeamRepository;
pub use mongo_user_repository::MongoUserRepository;
