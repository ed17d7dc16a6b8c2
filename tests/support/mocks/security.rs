// tests/support/mocks/security.rs
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use directory_core::application::{
    ApplicationError, ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    ports::security::{PasswordHasher, TokenManager},
};
use directory_core::domain::user::{Role, UserId};

pub const ADMIN_TOKEN: &str = "test-token";
pub const USER_TOKEN: &str = "user-token";

pub fn admin_user(now: DateTime<Utc>) -> AuthenticatedUser {
    AuthenticatedUser {
        id: UserId::new(1).expect("invalid user id"),
        email: "admin@example.com".into(),
        role: Role::Admin,
        capabilities: Role::Admin.default_capabilities(),
        issued_at: now,
        expires_at: now + Duration::hours(1),
    }
}

pub fn plain_user(now: DateTime<Utc>) -> AuthenticatedUser {
    AuthenticatedUser {
        id: UserId::new(2).expect("invalid user id"),
        email: "visitor@example.com".into(),
        role: Role::User,
        capabilities: Role::User.default_capabilities(),
        issued_at: now,
        expires_at: now + Duration::hours(1),
    }
}

/// Accepts two fixed tokens; `issue` encodes the subject id in the token.
#[derive(Clone, Debug, Default)]
pub struct DummyTokenManager;

#[async_trait]
impl TokenManager for DummyTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let now = super::time::fixed_now();
        Ok(AuthTokenDto {
            token: format!("issued-{}", i64::from(subject.user_id)),
            issued_at: now,
            expires_at: now + Duration::hours(1),
            expires_in: 3600,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let now = super::time::fixed_now();
        match token {
            ADMIN_TOKEN => Ok(admin_user(now)),
            USER_TOKEN => Ok(plain_user(now)),
            _ => Err(ApplicationError::unauthorized("invalid token")),
        }
    }
}

/// Reversible "hash" so tests can check verification without argon2 cost.
#[derive(Clone, Debug, Default)]
pub struct DummyPasswordHasher;

#[async_trait]
impl PasswordHasher for DummyPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hash::{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if format!("hash::{password}") == expected_hash {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}
