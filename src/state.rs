use std::sync::Arc;

use crate::domain::repositories::{AssetRepository, TeamRepository, UserRepository};
use crate::payments::PaymentGateway;

/// Shared application state injected into every handler
///
/// Collaborators are constructed once at process start and passed in
/// explicitly, so tests can swap in in-memory repositories and a mock
/// gateway.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub teams: Arc<dyn TeamRepository>,
    pub assets: Arc<dyn AssetRepository>,
    pub payments: Arc<dyn PaymentGateway>,
    pub jwt_secret: String,
}
