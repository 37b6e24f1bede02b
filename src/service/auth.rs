//! Password authentication.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use sea_orm::DatabaseConnection;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
};

/// Hashes a password for storage. Used when seeding the admin account
/// and creating users.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))?;
    Ok(hash.to_string())
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Verifies credentials and returns the user on success.
    ///
    /// Unknown usernames and wrong passwords both map to
    /// `InvalidCredentials` so the response does not reveal which
    /// usernames exist.
    pub async fn login(&self, username: &str, password: &str) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_username(username).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        let parsed = PasswordHash::new(&user.password_hash)
            .map_err(|_| AppError::from(AuthError::InvalidCredentials))?;

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .map_err(|_| AppError::from(AuthError::InvalidCredentials))?;

        Ok(user)
    }
}
