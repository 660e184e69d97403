//! Account service: registration, login and token issuance

use crate::{
    config::JwtConfig,
    error::{AppError, AppResult},
    models::user::{User, UserClaims},
    repository::Repository,
    services::password,
};

#[derive(Clone)]
pub struct AuthService {
    repository: Repository,
    config: JwtConfig,
}

impl AuthService {
    pub fn new(repository: Repository, config: JwtConfig) -> Self {
        Self { repository, config }
    }

    /// Register a new account and return a token for it
    pub async fn register(&self, email: &str, password: &str) -> AppResult<(String, User)> {
        let email = normalize_email(email);

        if self.repository.users.email_exists(&email).await? {
            return Err(AppError::BadRequest(
                "An account with this email already exists.".to_string(),
            ));
        }

        let password_hash = password::hash_password(password)?;
        let user = self.repository.users.create(&email, &password_hash).await?;

        tracing::info!("Registered new account id={}", user.id);

        let token = self.issue_token(&user)?;
        Ok((token, user))
    }

    /// Authenticate by email and password and return a token.
    /// An unknown email and a wrong password are indistinguishable to the caller.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<(String, User)> {
        let email = normalize_email(email);

        let user = self
            .repository
            .users
            .get_by_email(&email)
            .await?
            .ok_or_else(|| AppError::Authentication("Invalid email or password.".to_string()))?;

        if !password::verify_password(password, &user.password_hash) {
            return Err(AppError::Authentication(
                "Invalid email or password.".to_string(),
            ));
        }

        let token = self.issue_token(&user)?;
        Ok((token, user))
    }

    /// Create a signed, time-bound bearer token for a user
    fn issue_token(&self, user: &User) -> AppResult<String> {
        UserClaims::for_user(user, &self.config)
            .create_token(&self.config.secret)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))
    }
}

/// Emails are stored and looked up in normalized form
fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
