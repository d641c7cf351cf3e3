use std::sync::Arc;

use chrono::Duration;

use crate::auth::AdminCredentials;
use crate::domain::repositories::RegistrationRepository;

/// Token signing settings shared by the login handler and the auth extractor
#[derive(Debug, Clone)]
pub struct TokenSettings {
    pub secret: String,
    pub ttl: Duration,
}

/// Shared state injected into every handler
#[derive(Clone)]
pub struct AppState {
    pub registrations: Arc<dyn RegistrationRepository>,
    pub admin: Arc<AdminCredentials>,
    pub tokens: Arc<TokenSettings>,
}

impl AppState {
    pub fn new(
        registrations: Arc<dyn RegistrationRepository>,
        admin: AdminCredentials,
        tokens: TokenSettings,
    ) -> Self {
        Self {
            registrations,
            admin: Arc::new(admin),
            tokens: Arc::new(tokens),
        }
    }
}
