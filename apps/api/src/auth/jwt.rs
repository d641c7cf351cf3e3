// JWT token creation and verification
// Tokens stand in for the admin's login session

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use super::errors::{AuthError, AuthResult};

/// JWT claims structure
///
/// # Fields
/// * `sub` - Subject (admin username)
/// * `exp` - Expiry time (seconds since epoch)
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Admin username (subject)
    pub sub: String,
    /// Expiry timestamp (seconds since epoch)
    pub exp: usize,
}

/// Signs a token for `subject` that expires after `ttl`
///
/// # Token Properties
/// - Signed with HS256 algorithm
/// - Contains the admin username in 'sub' claim
///
/// # Example
/// ```
/// use chrono::Duration;
/// use esports_registration_api::auth::jwt::{create_token, verify_token};
///
/// let secret = "your-secret-key";
/// let token = create_token("admin", secret, Duration::minutes(30)).expect("valid token");
/// let claims = verify_token(&token, secret).expect("valid token");
/// assert_eq!(claims.sub, "admin");
/// ```
pub fn create_token(subject: &str, secret: &str, ttl: Duration) -> AuthResult<String> {
    let expiry = Utc::now()
        .checked_add_signed(ttl)
        .ok_or(AuthError::TokenLifetime)?;
    let exp = usize::try_from(expiry.timestamp()).map_err(|_| AuthError::TokenLifetime)?;
    let claims = Claims {
        sub: subject.to_string(),
        exp,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )?;
    Ok(token)
}

/// Verifies signature and expiry, returning the decoded claims
pub fn verify_token(token: &str, secret: &str) -> AuthResult<Claims> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )?;
    Ok(data.claims)
}
