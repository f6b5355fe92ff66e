use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use assetdesk_api::api::routes::create_router;
use assetdesk_api::config::AppConfig;
use assetdesk_api::infrastructure::repositories::{
    MongoAssetRepository, MongoTeamRepository, MongoUserRepository,
};
use assetdesk_api::payments::StripeGateway;
use assetdesk_api::state::AppState;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv::dotenv().ok();
    let config = AppConfig::from_env();

    // Connect to the document store
    tracing::info!("Connecting to document store...");
    let client = mongodb::Client::with_uri_str(&config.database_url)
        .await
        .expect("Failed to connect to document store");
    let database = client.database(&config.database_name);

    tracing::info!("Document store connected successfully");

    // Wire the shared state: one store client, injected everywhere
    let state = AppState {
        users: Arc::new(MongoUserRepository::new(&database)),
        teams: Arc::new(MongoTeamRepository::new(&database)),
        assets: Arc::new(MongoAssetRepository::new(&database)),
        payments: Arc::new(StripeGateway::new(config.stripe_secret_key.clone())),
        jwt_secret: config.jwt_secret.clone(),
    };

    // Configure CORS from the allowed-origin list; open in development
    let cors = if config.allowed_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Build router
    let app = create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app).await.expect("Server failed");
}
