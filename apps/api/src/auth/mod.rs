// Authentication for the single tournament administrator
// Credential check (bcrypt) and bearer tokens (JWT)

pub mod credentials;
pub mod errors;
pub mod jwt;

pub use credentials::AdminCredentials;
pub use errors::AuthError;
