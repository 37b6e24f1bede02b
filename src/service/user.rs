//! Pool member management.

use sea_orm::DatabaseConnection;
use tracing::info;

use crate::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParam, RegisterUserParam, User},
    service::auth::hash_password,
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new pool member, hashing the password before it ever
    /// touches the repository. Usernames and emails must be unique.
    pub async fn create_user(&self, param: RegisterUserParam) -> Result<User, AppError> {
        if param.username.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Username must not be empty".to_string(),
            ));
        }
        if param.password.is_empty() {
            return Err(AppError::BadRequest(
                "Password must not be empty".to_string(),
            ));
        }

        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_username(&param.username).await?.is_some() {
            return Err(AppError::BadRequest(
                "Username is already taken".to_string(),
            ));
        }
        if user_repo.find_by_email(&param.email).await?.is_some() {
            return Err(AppError::BadRequest(
                "Email is already registered".to_string(),
            ));
        }

        let user = user_repo
            .create(CreateUserParam {
                username: param.username,
                email: param.email,
                phone: param.phone,
                notification_preference: param.notification_preference,
                password_hash: hash_password(&param.password)?,
                is_admin: param.is_admin,
                draft_position: param.draft_position,
            })
            .await?;

        info!(username = %user.username, "Created user");

        Ok(user)
    }
}
