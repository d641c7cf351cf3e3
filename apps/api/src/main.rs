use std::sync::Arc;

use esports_registration_api::api::{self, AppState, TokenSettings};
use esports_registration_api::auth::AdminCredentials;
use esports_registration_api::config::AppConfig;
use esports_registration_api::infrastructure::repositories::InMemoryRegistrationRepository;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv::dotenv().ok();

    let config = AppConfig::from_env().expect("Invalid configuration");

    let admin = AdminCredentials::new(config.admin_username.clone(), &config.admin_password)
        .expect("Failed to hash admin password");

    let state = AppState::new(
        Arc::new(InMemoryRegistrationRepository::new()),
        admin,
        TokenSettings {
            secret: config.jwt_secret.clone(),
            ttl: config.session_ttl,
        },
    );

    let app = api::router(state);

    // Start server
    let addr = config.bind_addr();
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .await
        .expect("Server failed");
}
