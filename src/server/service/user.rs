//! User service for business logic.
//!
//! This module provides the `UserService` for registering, authenticating, listing and
//! removing customer accounts. Business-rule rejections are reported through the
//! returned `Envelope`.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::{
        credentials::CredentialsParam,
        envelope::Envelope,
        user::{CreateUserParam, User},
    },
    service::password::PasswordService,
    util::db::is_unique_violation,
};

pub const USER_CREATED: &str = "User created successfully!";
pub const USER_EXISTS: &str = "User already exists!";
pub const USER_ID_TAKEN: &str = "User id is already taken!";
pub const USER_NOT_FOUND: &str = "User not found!";
pub const USER_VERIFIED: &str = "User verified successfully!";
pub const USER_DELETED: &str = "User deleted successfully!";
pub const INCORRECT_PASSWORD: &str = "Incorrect Password!";

/// Service providing business logic for user management.
///
/// This struct holds a reference to the database connection and the password
/// primitive used to hash and verify credentials.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
    passwords: &'a PasswordService,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `passwords` - Password hash & verify primitive
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection, passwords: &'a PasswordService) -> Self {
        Self { db, passwords }
    }

    /// Registers a new user unless the email is already taken.
    ///
    /// Checks for an existing account with the same email, then hashes the password and
    /// inserts the account. A unique constraint violation raised by a concurrent insert
    /// of the same email is reported as a duplicate as well.
    ///
    /// # Arguments
    /// - `param` - Registration data with the plaintext password
    ///
    /// # Returns
    /// - `Ok(Envelope)` - `status: true` with the new id, or `status: false` when the
    ///   email is already registered or the supplied id is in use
    /// - `Err(AppError)` - Database or hashing failure
    pub async fn create(&self, mut param: CreateUserParam) -> Result<Envelope<()>, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_email(&param.email).await?.is_some() {
            return Ok(Envelope::failure(USER_EXISTS));
        }
        if let Some(id) = param.id {
            if user_repo.find_by_id(id).await?.is_some() {
                return Ok(Envelope::failure(USER_ID_TAKEN));
            }
        }

        param.password = self.passwords.hash(&param.password)?;

        match user_repo.create(param).await {
            Ok(user) => {
                tracing::debug!("Created user {}", user.id);
                Ok(Envelope::success(USER_CREATED).with_id(user.id))
            }
            Err(err) if is_unique_violation(&err) => Ok(Envelope::failure(USER_EXISTS)),
            Err(err) => Err(err.into()),
        }
    }

    /// Checks an email & password pair against the stored account.
    ///
    /// Never modifies stored state and issues no session.
    ///
    /// # Arguments
    /// - `param` - Email & plaintext password
    ///
    /// # Returns
    /// - `Ok(Envelope)` - `status: true` when the password matches, otherwise
    ///   `status: false` with "User not found!" or "Incorrect Password!"
    /// - `Err(AppError)` - Database failure or unreadable stored hash
    pub async fn authenticate(&self, param: CredentialsParam) -> Result<Envelope<()>, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(&param.email).await? else {
            return Ok(Envelope::failure(USER_NOT_FOUND));
        };

        if !self.passwords.verify(&param.password, &user.password)? {
            return Ok(Envelope::failure(INCORRECT_PASSWORD));
        }

        Ok(Envelope::success(USER_VERIFIED))
    }

    /// Retrieves every user.
    pub async fn get_all(&self) -> Result<Envelope<Vec<User>>, AppError> {
        let users = UserRepository::new(self.db).get_all().await?;

        Ok(Envelope::found(users))
    }

    /// Retrieves a user by id.
    ///
    /// # Returns
    /// - `Ok(Envelope)` - The user as result, or `status: false` when the id is unknown
    /// - `Err(AppError)` - Database failure
    pub async fn get_by_id(&self, id: i32) -> Result<Envelope<User>, AppError> {
        match UserRepository::new(self.db).find_by_id(id).await? {
            Some(user) => Ok(Envelope::found(user)),
            None => Ok(Envelope::failure(USER_NOT_FOUND)),
        }
    }

    /// Deletes a user by id. Unknown ids are reported as deleted.
    pub async fn delete(&self, id: i32) -> Result<Envelope<()>, AppError> {
        UserRepository::new(self.db).delete(id).await?;

        Ok(Envelope::success(USER_DELETED))
    }
}
