//! User service for business logic.
//!
//! Enforces that emails are present and unique before delegating to the user
//! repository. Other services use [`UserService::get`] to check that the acting
//! user exists.

use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParams, UpdateUserParams, User},
    service::require_non_blank,
};

pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::BadRequest)` - Email is blank
    /// - `Err(AppError::Conflict)` - Another user already has the email
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        let email = require_non_blank(Some(params.email), "Email must not be blank")?;
        if repo.find_by_email(&email).await?.is_some() {
            return Err(email_taken(&email));
        }

        let user = repo
            .create(CreateUserParams {
                name: params.name,
                email: email.clone(),
            })
            .await
            .map_err(|err| duplicate_email_as_conflict(err, &email))?;

        tracing::debug!("Created user {}", user.id);

        Ok(user)
    }

    /// Applies a partial update to a user.
    ///
    /// Keeping one's own email is not a conflict.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::NotFound)` - No user with the given ID
    /// - `Err(AppError::BadRequest)` - New email is blank
    /// - `Err(AppError::Conflict)` - New email belongs to another user
    pub async fn update(&self, params: UpdateUserParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        self.get(params.id).await?;

        if let Some(email) = &params.email {
            if email.trim().is_empty() {
                return Err(AppError::BadRequest("Email must not be blank".to_string()));
            }
            if let Some(holder) = repo.find_by_email(email).await? {
                if holder.id != params.id {
                    return Err(email_taken(email));
                }
            }
        }

        let id = params.id;
        let email = params.email.clone().unwrap_or_default();
        repo.update(params)
            .await
            .map_err(|err| duplicate_email_as_conflict(err, &email))?
            .ok_or_else(|| user_not_found(id))
    }

    /// Retrieves a user by ID.
    ///
    /// # Returns
    /// - `Ok(User)` - The user
    /// - `Err(AppError::NotFound)` - No user with the given ID
    pub async fn get(&self, id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| user_not_found(id))
    }

    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).get_all().await?)
    }

    /// Deletes a user and everything they own.
    ///
    /// # Returns
    /// - `Ok(())` - User deleted
    /// - `Err(AppError::NotFound)` - No user with the given ID
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !UserRepository::new(self.db).delete(id).await? {
            return Err(user_not_found(id));
        }

        tracing::debug!("Deleted user {}", id);

        Ok(())
    }
}

fn user_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("User with id {} not found", id))
}

fn email_taken(email: &str) -> AppError {
    AppError::Conflict(format!("User with email {} already exists", email))
}

/// Maps a unique index violation on `users.email` to 409.
///
/// Covers sign-ups racing past the lookup in [`UserService::create`].
pub(crate) fn duplicate_email_as_conflict(err: DbErr, email: &str) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => email_taken(email),
        _ => AppError::DbErr(err),
    }
}
