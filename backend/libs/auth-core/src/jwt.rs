/// Shared JWT validation for Ripple services
///
/// Bearer tokens are signed with RS256 (RSA with SHA-256). Symmetric
/// algorithms are rejected to rule out algorithm-confusion attacks, and all
/// key material is loaded from the environment at startup.
///
/// Services that only validate tokens call `initialize_validation_only()`
/// with the public key; anything that also mints tokens (test harnesses,
/// an upstream identity service) calls `initialize_keys()` with both halves
/// of the pair.
use anyhow::{anyhow, Result};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, TokenData, Validation};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const ACCESS_TOKEN_EXPIRY_HOURS: i64 = 1;

const JWT_ALGORITHM: Algorithm = Algorithm::RS256;

/// Claims carried by every Ripple access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user ID as UUID string)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Username, for log context only
    pub username: String,
}

impl Claims {
    /// The authenticated user's id.
    pub fn subject(&self) -> Result<Uuid> {
        Uuid::parse_str(&self.sub).map_err(|e| anyhow!("invalid subject claim: {e}"))
    }
}

// Keys are initialized once at startup and immutable thereafter.
static JWT_ENCODING_KEY: OnceCell<EncodingKey> = OnceCell::new();
static JWT_DECODING_KEY: OnceCell<DecodingKey> = OnceCell::new();

/// Initialize both signing and validation keys from PEM-formatted strings.
///
/// Must be called during startup before any token operation; a second call
/// returns an error.
pub fn initialize_keys(private_key_pem: &str, public_key_pem: &str) -> Result<()> {
    let encoding_key = EncodingKey::from_rsa_pem(private_key_pem.as_bytes())
        .map_err(|e| anyhow!("Failed to parse RSA private key: {e}"))?;

    let decoding_key = DecodingKey::from_rsa_pem(public_key_pem.as_bytes())
        .map_err(|e| anyhow!("Failed to parse RSA public key: {e}"))?;

    JWT_ENCODING_KEY
        .set(encoding_key)
        .map_err(|_| anyhow!("JWT encoding key already initialized"))?;

    JWT_DECODING_KEY
        .set(decoding_key)
        .map_err(|_| anyhow!("JWT decoding key already initialized"))?;

    Ok(())
}

/// Initialize for validation-only services.
///
/// Preferred for services that never mint tokens: the private key stays out
/// of their environment entirely.
pub fn initialize_validation_only(public_key_pem: &str) -> Result<()> {
    let decoding_key = DecodingKey::from_rsa_pem(public_key_pem.as_bytes())
        .map_err(|e| anyhow!("Failed to parse RSA public key: {e}"))?;

    JWT_DECODING_KEY
        .set(decoding_key)
        .map_err(|_| anyhow!("JWT decoding key already initialized"))?;

    Ok(())
}

fn encoding_key() -> Result<&'static EncodingKey> {
    JWT_ENCODING_KEY
        .get()
        .ok_or_else(|| anyhow!("JWT keys not initialized. Call initialize_keys() during startup."))
}

fn decoding_key() -> Result<&'static DecodingKey> {
    JWT_DECODING_KEY.get().ok_or_else(|| {
        anyhow!("JWT keys not initialized. Call initialize_keys() or initialize_validation_only() during startup.")
    })
}

/// Generate an access token for the given user.
pub fn generate_access_token(user_id: Uuid, username: &str) -> Result<String> {
    let now = Utc::now();
    let expiry = now + Duration::hours(ACCESS_TOKEN_EXPIRY_HOURS);

    let claims = Claims {
        sub: user_id.to_string(),
        iat: now.timestamp(),
        exp: expiry.timestamp(),
        username: username.to_string(),
    };

    encode(&Header::new(JWT_ALGORITHM), &claims, encoding_key()?)
        .map_err(|e| anyhow!("Failed to generate access token: {e}"))
}

/// Validate a token's signature and expiry, returning its claims.
pub fn validate_token(token: &str) -> Result<TokenData<Claims>> {
    let validation = Validation::new(JWT_ALGORITHM);

    decode::<Claims>(token, decoding_key()?, &validation)
        .map_err(|e| anyhow!("Token validation failed: {e}"))
}
