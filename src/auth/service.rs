use crate::content::ContentStore;
use crate::types::{UserRecord, error::ApiError};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// Tokens are valid for a fixed 5 hours; there is no refresh or revocation
const TOKEN_TTL_HOURS: i64 = 5;

/// JWT claims carried by issued tokens
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
}

/// Issues and validates bearer tokens, and hashes/verifies credentials.
/// Credential records themselves live in the content store.
#[derive(Clone)]
pub struct AuthService {
    secret: String,
    bcrypt_cost: u32,
}

impl AuthService {
    pub fn new(secret: String) -> Self {
        Self {
            secret,
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }

    /// Lower-cost hashing for tests, where DEFAULT_COST is needlessly slow
    pub fn with_cost(secret: String, bcrypt_cost: u32) -> Self {
        Self {
            secret,
            bcrypt_cost,
        }
    }

    /// Hash the password and persist the user. Fails with DuplicateUser if
    /// the username is already registered.
    pub async fn register(
        &self,
        store: &dyn ContentStore,
        username: &str,
        password: &str,
    ) -> Result<(), ApiError> {
        let password_hash = bcrypt::hash(password, self.bcrypt_cost)
            .map_err(|e| ApiError::Storage(format!("Failed to hash password: {}", e)))?;

        store
            .insert_user(UserRecord {
                username: username.to_string(),
                password_hash,
            })
            .await
    }

    /// Verify credentials and issue a signed token. Unknown usernames and
    /// wrong passwords return the same generic failure.
    pub async fn login(
        &self,
        store: &dyn ContentStore,
        username: &str,
        password: &str,
    ) -> Result<String, ApiError> {
        let user = store
            .find_user(username)
            .await?
            .ok_or(ApiError::InvalidCredentials)?;

        let matches = bcrypt::verify(password, &user.password_hash).unwrap_or(false);
        if !matches {
            return Err(ApiError::InvalidCredentials);
        }

        self.sign(&user.username, chrono::Utc::now() + chrono::Duration::hours(TOKEN_TTL_HOURS))
    }

    /// Verify signature and expiry of a bearer token. Every failure mode
    /// collapses to Unauthorized.
    pub fn authenticate(&self, token: &str) -> Result<Claims, ApiError> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|_| ApiError::Unauthorized)
    }

    fn sign(
        &self,
        username: &str,
        expires_at: chrono::DateTime<chrono::Utc>,
    ) -> Result<String, ApiError> {
        let claims = Claims {
            sub: username.to_string(),
            exp: expires_at.timestamp(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| ApiError::Storage(format!("Failed to sign token: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::MemoryStore;

    fn test_service() -> AuthService {
        AuthService::with_cost("test-secret".to_string(), 4)
    }

    #[tokio::test]
    async fn test_register_twice_fails() {
        let store = MemoryStore::new();
        let auth = test_service();

        auth.register(&store, "admin", "hunter2").await.unwrap();

        assert!(matches!(
            auth.register(&store, "admin", "other").await,
            Err(ApiError::DuplicateUser)
        ));
    }

    #[tokio::test]
    async fn test_login_wrong_password_and_unknown_user_are_identical() {
        let store = MemoryStore::new();
        let auth = test_service();

        auth.register(&store, "admin", "hunter2").await.unwrap();

        let wrong_password = auth.login(&store, "admin", "nope").await;
        let unknown_user = auth.login(&store, "ghost", "nope").await;

        assert!(matches!(wrong_password, Err(ApiError::InvalidCredentials)));
        assert!(matches!(unknown_user, Err(ApiError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_issues_valid_token() {
        let store = MemoryStore::new();
        let auth = test_service();

        auth.register(&store, "admin", "hunter2").await.unwrap();
        let token = auth.login(&store, "admin", "hunter2").await.unwrap();

        let claims = auth.authenticate(&token).unwrap();
        assert_eq!(claims.sub, "admin");
    }

    #[tokio::test]
    async fn test_expired_token_rejected() {
        let auth = test_service();

        let token = auth
            .sign("admin", chrono::Utc::now() - chrono::Duration::hours(1))
            .unwrap();

        assert!(matches!(
            auth.authenticate(&token),
            Err(ApiError::Unauthorized)
        ));
    }

    #[tokio::test]
    async fn test_garbage_token_rejected() {
        let auth = test_service();

        assert!(matches!(
            auth.authenticate("not-a-token"),
            Err(ApiError::Unauthorized)
        ));
    }

    #[tokio::test]
    async fn test_token_from_other_secret_rejected() {
        let auth = test_service();
        let other = AuthService::with_cost("different-secret".to_string(), 4);

        let token = other
            .sign("admin", chrono::Utc::now() + chrono::Duration::hours(1))
            .unwrap();

        assert!(matches!(
            auth.authenticate(&token),
            Err(ApiError::Unauthorized)
        ));
    }
}
