/// Environment-provided application configuration
///
/// Every value has a development fallback so the service starts in a bare
/// environment; missing secrets are logged at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: String,
    pub database_name: String,
    pub jwt_secret: String,
    pub stripe_secret_key: String,
    pub allowed_origins: Vec<String>,
}

impl AppConfig {
    /// Loads configuration from the process environment
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(5000);

        let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| {
            tracing::warn!("DATABASE_URL not set, using default");
            "mongodb://localhost:27017".to_string()
        });

        let database_name =
            std::env::var("DATABASE_NAME").unwrap_or_else(|_| "assetdesk".to_string());

        let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set, using default");
            "dev-secret-key".to_string()
        });

        let stripe_secret_key = std::env::var("STRIPE_SECRET_KEY").unwrap_or_else(|_| {
            tracing::warn!("STRIPE_SECRET_KEY not set, payment intents will fail");
            String::new()
        });

        let allowed_origins = std::env::var("ALLOWED_ORIGINS")
            .map(|v| parse_origins(&v))
            .unwrap_or_default();

        Self {
            port,
            database_url,
            database_name,
            jwt_secret,
            stripe_secret_key,
            allowed_origins,
        }
    }
}

/// Splits a comma-separated origin list, dropping empty entries
fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
