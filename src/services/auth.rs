//! Authentication service: password login and JWT issuance.
//!
//! Sessions are all-or-nothing; there is no role model.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::user::{User, UserClaims},
    repository::Repository,
};

#[derive(Clone)]
pub struct AuthService {
    repository: Repository,
    config: AuthConfig,
}

impl AuthService {
    pub fn new(repository: Repository, config: AuthConfig) -> Self {
        Self { repository, config }
    }

    /// Verify credentials and issue a token
    pub async fn login(&self, username: &str, password: &str) -> AppResult<(String, User)> {
        let user = self
            .repository
            .users
            .get_by_username(username)
            .await?
            .ok_or_else(|| AppError::Authentication("Invalid username or password".to_string()))?;

        let parsed = PasswordHash::new(&user.password_hash)
            .map_err(|_| AppError::Internal("stored password hash is invalid".to_string()))?;
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .map_err(|_| AppError::Authentication("Invalid username or password".to_string()))?;

        let now = Utc::now();
        let claims = UserClaims {
            sub: user.username.clone(),
            user_id: user.id,
            iat: now.timestamp(),
            exp: (now + Duration::hours(self.config.jwt_expiration_hours)).timestamp(),
        };
        let token = claims
            .create_token(&self.config.jwt_secret)
            .map_err(|e| AppError::Internal(format!("token creation failed: {}", e)))?;

        Ok((token, user))
    }

    pub async fn get_user(&self, id: Uuid) -> AppResult<User> {
        self.repository.users.get_by_id(id).await
    }

    /// Create the admin account on first start so a fresh install can be
    /// logged into. Does nothing once any user exists.
    pub async fn ensure_bootstrap_user(&self) -> AppResult<()> {
        if self.repository.users.count().await? > 0 {
            return Ok(());
        }
        let Some(password) = self.config.bootstrap_password.as_deref() else {
            tracing::warn!("users table is empty and no bootstrap password is configured");
            return Ok(());
        };

        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(format!("hashing bootstrap password: {}", e)))?
            .to_string();

        self.repository
            .users
            .create("admin", &hash, Some("Administrator"))
            .await?;
        tracing::info!("Created bootstrap admin user");
        Ok(())
    }
}
