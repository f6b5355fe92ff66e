use axum::{
    routing::{get, patch, post, put},
    Router,
};

use crate::api::handlers::{assets, auth, payments, teams, users};
use crate::state::AppState;

/// Builds the application router over the injected state
///
/// Each path is registered exactly once; layers (tracing, CORS) are applied
/// by the caller.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(auth::health_check))
        // User routes
        .route("/users", post(users::create_user).get(users::list_users))
        .route("/user/:email", get(users::get_user_by_email))
        .route("/update-profile/:id", put(users::update_profile))
        .route("/user/update/:id", patch(users::patch_user))
        // Team routes
        .route("/team", post(teams::create_membership))
        .route(
            "/team/:id",
            get(teams::memberships_by_employer).delete(teams::delete_membership),
        )
        .route("/myTeam/:email", get(teams::my_team))
        .route("/hrEmail/:email", get(teams::hr_email))
        // Asset routes
        .route("/asset", post(assets::create_asset))
        .route("/assets", get(assets::list_assets))
        .route(
            "/asset/:id",
            get(assets::get_asset)
                .put(assets::update_asset)
                .delete(assets::delete_asset),
        )
        .route("/request-asset/:id", post(assets::request_asset))
        .route("/request-update/:id", put(assets::request_update))
        // Credential issuance
        .route("/jwt", post(auth::issue_token))
        // Payment gateway pass-through
        .route("/create-payment-intent", post(payments::create_payment_intent))
        // Shared state
        .with_state(state)
}
